/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub fn parse_create_input_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateInputOutput, crate::error::CreateInputError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::CreateInputError::unhandled(generic)),
    };
    Err(match error_code {
        "InvalidRequestException" => {
            let mut tmp: crate::error::InvalidRequestException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::CreateInputError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::CreateInputError {
                meta: generic,
                kind: crate::error::CreateInputErrorKind::InvalidRequestException(tmp),
            }
        }
        "ThrottlingException" => {
            let mut tmp: crate::error::ThrottlingException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::CreateInputError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::CreateInputError {
                meta: generic,
                kind: crate::error::CreateInputErrorKind::ThrottlingException(tmp),
            }
        }
        "InternalFailureException" => {
            let mut tmp: crate::error::InternalFailureException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::CreateInputError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::CreateInputError {
                meta: generic,
                kind: crate::error::CreateInputErrorKind::InternalFailureException(tmp),
            }
        }
        "ServiceUnavailableException" => {
            let mut tmp: crate::error::ServiceUnavailableException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::CreateInputError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::CreateInputError {
                meta: generic,
                kind: crate::error::CreateInputErrorKind::ServiceUnavailableException(tmp),
            }
        }
        "ResourceAlreadyExistsException" => {
            let mut tmp: crate::error::ResourceAlreadyExistsException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::CreateInputError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::CreateInputError {
                meta: generic,
                kind: crate::error::CreateInputErrorKind::ResourceAlreadyExistsException(tmp),
            }
        }
        _ => crate::error::CreateInputError::generic(generic),
    })
}

pub fn parse_create_input_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateInputOutput, crate::error::CreateInputError> {
    smithy_json::from_body(response.body()).map_err(crate::error::CreateInputError::unhandled)
}

pub fn parse_describe_input_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeInputOutput, crate::error::DescribeInputError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DescribeInputError::unhandled(generic)),
    };
    Err(match error_code {
        "InvalidRequestException" => {
            let mut tmp: crate::error::InvalidRequestException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeInputError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeInputError {
                meta: generic,
                kind: crate::error::DescribeInputErrorKind::InvalidRequestException(tmp),
            }
        }
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeInputError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeInputError {
                meta: generic,
                kind: crate::error::DescribeInputErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "ThrottlingException" => {
            let mut tmp: crate::error::ThrottlingException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeInputError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeInputError {
                meta: generic,
                kind: crate::error::DescribeInputErrorKind::ThrottlingException(tmp),
            }
        }
        "InternalFailureException" => {
            let mut tmp: crate::error::InternalFailureException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeInputError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeInputError {
                meta: generic,
                kind: crate::error::DescribeInputErrorKind::InternalFailureException(tmp),
            }
        }
        "ServiceUnavailableException" => {
            let mut tmp: crate::error::ServiceUnavailableException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeInputError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeInputError {
                meta: generic,
                kind: crate::error::DescribeInputErrorKind::ServiceUnavailableException(tmp),
            }
        }
        _ => crate::error::DescribeInputError::generic(generic),
    })
}

pub fn parse_describe_input_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeInputOutput, crate::error::DescribeInputError> {
    smithy_json::from_body(response.body()).map_err(crate::error::DescribeInputError::unhandled)
}

pub fn parse_list_inputs_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListInputsOutput, crate::error::ListInputsError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::ListInputsError::unhandled(generic)),
    };
    Err(match error_code {
        "InvalidRequestException" => {
            let mut tmp: crate::error::InvalidRequestException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListInputsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListInputsError {
                meta: generic,
                kind: crate::error::ListInputsErrorKind::InvalidRequestException(tmp),
            }
        }
        "ThrottlingException" => {
            let mut tmp: crate::error::ThrottlingException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListInputsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListInputsError {
                meta: generic,
                kind: crate::error::ListInputsErrorKind::ThrottlingException(tmp),
            }
        }
        "InternalFailureException" => {
            let mut tmp: crate::error::InternalFailureException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListInputsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListInputsError {
                meta: generic,
                kind: crate::error::ListInputsErrorKind::InternalFailureException(tmp),
            }
        }
        "ServiceUnavailableException" => {
            let mut tmp: crate::error::ServiceUnavailableException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListInputsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListInputsError {
                meta: generic,
                kind: crate::error::ListInputsErrorKind::ServiceUnavailableException(tmp),
            }
        }
        _ => crate::error::ListInputsError::generic(generic),
    })
}

pub fn parse_list_inputs_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListInputsOutput, crate::error::ListInputsError> {
    smithy_json::from_body(response.body()).map_err(crate::error::ListInputsError::unhandled)
}

pub fn parse_update_input_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateInputOutput, crate::error::UpdateInputError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::UpdateInputError::unhandled(generic)),
    };
    Err(match error_code {
        "InvalidRequestException" => {
            let mut tmp: crate::error::InvalidRequestException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UpdateInputError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UpdateInputError {
                meta: generic,
                kind: crate::error::UpdateInputErrorKind::InvalidRequestException(tmp),
            }
        }
        "ThrottlingException" => {
            let mut tmp: crate::error::ThrottlingException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UpdateInputError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UpdateInputError {
                meta: generic,
                kind: crate::error::UpdateInputErrorKind::ThrottlingException(tmp),
            }
        }
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UpdateInputError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UpdateInputError {
                meta: generic,
                kind: crate::error::UpdateInputErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "InternalFailureException" => {
            let mut tmp: crate::error::InternalFailureException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UpdateInputError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UpdateInputError {
                meta: generic,
                kind: crate::error::UpdateInputErrorKind::InternalFailureException(tmp),
            }
        }
        "ServiceUnavailableException" => {
            let mut tmp: crate::error::ServiceUnavailableException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UpdateInputError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UpdateInputError {
                meta: generic,
                kind: crate::error::UpdateInputErrorKind::ServiceUnavailableException(tmp),
            }
        }
        "ResourceInUseException" => {
            let mut tmp: crate::error::ResourceInUseException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UpdateInputError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UpdateInputError {
                meta: generic,
                kind: crate::error::UpdateInputErrorKind::ResourceInUseException(tmp),
            }
        }
        _ => crate::error::UpdateInputError::generic(generic),
    })
}

pub fn parse_update_input_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateInputOutput, crate::error::UpdateInputError> {
    smithy_json::from_body(response.body()).map_err(crate::error::UpdateInputError::unhandled)
}

pub fn parse_delete_input_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteInputOutput, crate::error::DeleteInputError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DeleteInputError::unhandled(generic)),
    };
    Err(match error_code {
        "InvalidRequestException" => {
            let mut tmp: crate::error::InvalidRequestException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DeleteInputError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DeleteInputError {
                meta: generic,
                kind: crate::error::DeleteInputErrorKind::InvalidRequestException(tmp),
            }
        }
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DeleteInputError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DeleteInputError {
                meta: generic,
                kind: crate::error::DeleteInputErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "ThrottlingException" => {
            let mut tmp: crate::error::ThrottlingException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DeleteInputError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DeleteInputError {
                meta: generic,
                kind: crate::error::DeleteInputErrorKind::ThrottlingException(tmp),
            }
        }
        "InternalFailureException" => {
            let mut tmp: crate::error::InternalFailureException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DeleteInputError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DeleteInputError {
                meta: generic,
                kind: crate::error::DeleteInputErrorKind::InternalFailureException(tmp),
            }
        }
        "ServiceUnavailableException" => {
            let mut tmp: crate::error::ServiceUnavailableException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DeleteInputError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DeleteInputError {
                meta: generic,
                kind: crate::error::DeleteInputErrorKind::ServiceUnavailableException(tmp),
            }
        }
        "ResourceInUseException" => {
            let mut tmp: crate::error::ResourceInUseException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DeleteInputError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DeleteInputError {
                meta: generic,
                kind: crate::error::DeleteInputErrorKind::ResourceInUseException(tmp),
            }
        }
        _ => crate::error::DeleteInputError::generic(generic),
    })
}

pub fn parse_delete_input_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteInputOutput, crate::error::DeleteInputError> {
    smithy_json::from_body(response.body()).map_err(crate::error::DeleteInputError::unhandled)
}

pub fn parse_create_detector_model_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateDetectorModelOutput, crate::error::CreateDetectorModelError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::CreateDetectorModelError::unhandled(generic)),
    };
    Err(match error_code {
        "InvalidRequestException" => {
            let mut tmp: crate::error::InvalidRequestException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::CreateDetectorModelError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::CreateDetectorModelError {
                meta: generic,
                kind: crate::error::CreateDetectorModelErrorKind::InvalidRequestException(tmp),
            }
        }
        "ResourceInUseException" => {
            let mut tmp: crate::error::ResourceInUseException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::CreateDetectorModelError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::CreateDetectorModelError {
                meta: generic,
                kind: crate::error::CreateDetectorModelErrorKind::ResourceInUseException(tmp),
            }
        }
        "ResourceAlreadyExistsException" => {
            let mut tmp: crate::error::ResourceAlreadyExistsException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::CreateDetectorModelError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::CreateDetectorModelError {
                meta: generic,
                kind:
                    crate::error::CreateDetectorModelErrorKind::ResourceAlreadyExistsException(tmp),
            }
        }
        "LimitExceededException" => {
            let mut tmp: crate::error::LimitExceededException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::CreateDetectorModelError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::CreateDetectorModelError {
                meta: generic,
                kind: crate::error::CreateDetectorModelErrorKind::LimitExceededException(tmp),
            }
        }
        "ThrottlingException" => {
            let mut tmp: crate::error::ThrottlingException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::CreateDetectorModelError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::CreateDetectorModelError {
                meta: generic,
                kind: crate::error::CreateDetectorModelErrorKind::ThrottlingException(tmp),
            }
        }
        "InternalFailureException" => {
            let mut tmp: crate::error::InternalFailureException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::CreateDetectorModelError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::CreateDetectorModelError {
                meta: generic,
                kind: crate::error::CreateDetectorModelErrorKind::InternalFailureException(tmp),
            }
        }
        "ServiceUnavailableException" => {
            let mut tmp: crate::error::ServiceUnavailableException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::CreateDetectorModelError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::CreateDetectorModelError {
                meta: generic,
                kind: crate::error::CreateDetectorModelErrorKind::ServiceUnavailableException(tmp),
            }
        }
        _ => crate::error::CreateDetectorModelError::generic(generic),
    })
}

pub fn parse_create_detector_model_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateDetectorModelOutput, crate::error::CreateDetectorModelError> {
    smithy_json::from_body(response.body()).map_err(crate::error::CreateDetectorModelError::unhandled)
}

pub fn parse_describe_detector_model_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeDetectorModelOutput, crate::error::DescribeDetectorModelError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DescribeDetectorModelError::unhandled(generic)),
    };
    Err(match error_code {
        "InvalidRequestException" => {
            let mut tmp: crate::error::InvalidRequestException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeDetectorModelError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeDetectorModelError {
                meta: generic,
                kind: crate::error::DescribeDetectorModelErrorKind::InvalidRequestException(tmp),
            }
        }
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeDetectorModelError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeDetectorModelError {
                meta: generic,
                kind: crate::error::DescribeDetectorModelErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "ThrottlingException" => {
            let mut tmp: crate::error::ThrottlingException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeDetectorModelError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeDetectorModelError {
                meta: generic,
                kind: crate::error::DescribeDetectorModelErrorKind::ThrottlingException(tmp),
            }
        }
        "InternalFailureException" => {
            let mut tmp: crate::error::InternalFailureException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeDetectorModelError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeDetectorModelError {
                meta: generic,
                kind: crate::error::DescribeDetectorModelErrorKind::InternalFailureException(tmp),
            }
        }
        "ServiceUnavailableException" => {
            let mut tmp: crate::error::ServiceUnavailableException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeDetectorModelError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeDetectorModelError {
                meta: generic,
                kind:
                    crate::error::DescribeDetectorModelErrorKind::ServiceUnavailableException(tmp),
            }
        }
        _ => crate::error::DescribeDetectorModelError::generic(generic),
    })
}

pub fn parse_describe_detector_model_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeDetectorModelOutput, crate::error::DescribeDetectorModelError> {
    smithy_json::from_body(response.body()).map_err(crate::error::DescribeDetectorModelError::unhandled)
}

pub fn parse_update_detector_model_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateDetectorModelOutput, crate::error::UpdateDetectorModelError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::UpdateDetectorModelError::unhandled(generic)),
    };
    Err(match error_code {
        "InvalidRequestException" => {
            let mut tmp: crate::error::InvalidRequestException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UpdateDetectorModelError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UpdateDetectorModelError {
                meta: generic,
                kind: crate::error::UpdateDetectorModelErrorKind::InvalidRequestException(tmp),
            }
        }
        "ResourceInUseException" => {
            let mut tmp: crate::error::ResourceInUseException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UpdateDetectorModelError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UpdateDetectorModelError {
                meta: generic,
                kind: crate::error::UpdateDetectorModelErrorKind::ResourceInUseException(tmp),
            }
        }
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UpdateDetectorModelError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UpdateDetectorModelError {
                meta: generic,
                kind: crate::error::UpdateDetectorModelErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "ThrottlingException" => {
            let mut tmp: crate::error::ThrottlingException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UpdateDetectorModelError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UpdateDetectorModelError {
                meta: generic,
                kind: crate::error::UpdateDetectorModelErrorKind::ThrottlingException(tmp),
            }
        }
        "InternalFailureException" => {
            let mut tmp: crate::error::InternalFailureException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UpdateDetectorModelError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UpdateDetectorModelError {
                meta: generic,
                kind: crate::error::UpdateDetectorModelErrorKind::InternalFailureException(tmp),
            }
        }
        "ServiceUnavailableException" => {
            let mut tmp: crate::error::ServiceUnavailableException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UpdateDetectorModelError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UpdateDetectorModelError {
                meta: generic,
                kind: crate::error::UpdateDetectorModelErrorKind::ServiceUnavailableException(tmp),
            }
        }
        _ => crate::error::UpdateDetectorModelError::generic(generic),
    })
}

pub fn parse_update_detector_model_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateDetectorModelOutput, crate::error::UpdateDetectorModelError> {
    smithy_json::from_body(response.body()).map_err(crate::error::UpdateDetectorModelError::unhandled)
}

pub fn parse_list_detector_models_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListDetectorModelsOutput, crate::error::ListDetectorModelsError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::ListDetectorModelsError::unhandled(generic)),
    };
    Err(match error_code {
        "InvalidRequestException" => {
            let mut tmp: crate::error::InvalidRequestException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListDetectorModelsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListDetectorModelsError {
                meta: generic,
                kind: crate::error::ListDetectorModelsErrorKind::InvalidRequestException(tmp),
            }
        }
        "ThrottlingException" => {
            let mut tmp: crate::error::ThrottlingException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListDetectorModelsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListDetectorModelsError {
                meta: generic,
                kind: crate::error::ListDetectorModelsErrorKind::ThrottlingException(tmp),
            }
        }
        "InternalFailureException" => {
            let mut tmp: crate::error::InternalFailureException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListDetectorModelsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListDetectorModelsError {
                meta: generic,
                kind: crate::error::ListDetectorModelsErrorKind::InternalFailureException(tmp),
            }
        }
        "ServiceUnavailableException" => {
            let mut tmp: crate::error::ServiceUnavailableException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListDetectorModelsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListDetectorModelsError {
                meta: generic,
                kind: crate::error::ListDetectorModelsErrorKind::ServiceUnavailableException(tmp),
            }
        }
        _ => crate::error::ListDetectorModelsError::generic(generic),
    })
}

pub fn parse_list_detector_models_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListDetectorModelsOutput, crate::error::ListDetectorModelsError> {
    smithy_json::from_body(response.body()).map_err(crate::error::ListDetectorModelsError::unhandled)
}

pub fn parse_list_detector_model_versions_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListDetectorModelVersionsOutput, crate::error::ListDetectorModelVersionsError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::ListDetectorModelVersionsError::unhandled(generic)),
    };
    Err(match error_code {
        "InvalidRequestException" => {
            let mut tmp: crate::error::InvalidRequestException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListDetectorModelVersionsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListDetectorModelVersionsError {
                meta: generic,
                kind:
                    crate::error::ListDetectorModelVersionsErrorKind::InvalidRequestException(tmp),
            }
        }
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListDetectorModelVersionsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListDetectorModelVersionsError {
                meta: generic,
                kind:
                    crate::error::ListDetectorModelVersionsErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "ThrottlingException" => {
            let mut tmp: crate::error::ThrottlingException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListDetectorModelVersionsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListDetectorModelVersionsError {
                meta: generic,
                kind: crate::error::ListDetectorModelVersionsErrorKind::ThrottlingException(tmp),
            }
        }
        "InternalFailureException" => {
            let mut tmp: crate::error::InternalFailureException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListDetectorModelVersionsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListDetectorModelVersionsError {
                meta: generic,
                kind:
                    crate::error::ListDetectorModelVersionsErrorKind::InternalFailureException(tmp),
            }
        }
        "ServiceUnavailableException" => {
            let mut tmp: crate::error::ServiceUnavailableException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListDetectorModelVersionsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListDetectorModelVersionsError {
                meta: generic,
                kind:
                    crate::error::ListDetectorModelVersionsErrorKind::ServiceUnavailableException(tmp),
            }
        }
        _ => crate::error::ListDetectorModelVersionsError::generic(generic),
    })
}

pub fn parse_list_detector_model_versions_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListDetectorModelVersionsOutput, crate::error::ListDetectorModelVersionsError> {
    smithy_json::from_body(response.body()).map_err(crate::error::ListDetectorModelVersionsError::unhandled)
}

pub fn parse_delete_detector_model_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteDetectorModelOutput, crate::error::DeleteDetectorModelError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DeleteDetectorModelError::unhandled(generic)),
    };
    Err(match error_code {
        "InvalidRequestException" => {
            let mut tmp: crate::error::InvalidRequestException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DeleteDetectorModelError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DeleteDetectorModelError {
                meta: generic,
                kind: crate::error::DeleteDetectorModelErrorKind::InvalidRequestException(tmp),
            }
        }
        "ResourceInUseException" => {
            let mut tmp: crate::error::ResourceInUseException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DeleteDetectorModelError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DeleteDetectorModelError {
                meta: generic,
                kind: crate::error::DeleteDetectorModelErrorKind::ResourceInUseException(tmp),
            }
        }
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DeleteDetectorModelError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DeleteDetectorModelError {
                meta: generic,
                kind: crate::error::DeleteDetectorModelErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "ThrottlingException" => {
            let mut tmp: crate::error::ThrottlingException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DeleteDetectorModelError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DeleteDetectorModelError {
                meta: generic,
                kind: crate::error::DeleteDetectorModelErrorKind::ThrottlingException(tmp),
            }
        }
        "InternalFailureException" => {
            let mut tmp: crate::error::InternalFailureException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DeleteDetectorModelError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DeleteDetectorModelError {
                meta: generic,
                kind: crate::error::DeleteDetectorModelErrorKind::InternalFailureException(tmp),
            }
        }
        "ServiceUnavailableException" => {
            let mut tmp: crate::error::ServiceUnavailableException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DeleteDetectorModelError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DeleteDetectorModelError {
                meta: generic,
                kind: crate::error::DeleteDetectorModelErrorKind::ServiceUnavailableException(tmp),
            }
        }
        _ => crate::error::DeleteDetectorModelError::generic(generic),
    })
}

pub fn parse_delete_detector_model_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteDetectorModelOutput, crate::error::DeleteDetectorModelError> {
    smithy_json::from_body(response.body()).map_err(crate::error::DeleteDetectorModelError::unhandled)
}

pub fn parse_describe_logging_options_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeLoggingOptionsOutput, crate::error::DescribeLoggingOptionsError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DescribeLoggingOptionsError::unhandled(generic)),
    };
    Err(match error_code {
        "InvalidRequestException" => {
            let mut tmp: crate::error::InvalidRequestException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeLoggingOptionsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeLoggingOptionsError {
                meta: generic,
                kind: crate::error::DescribeLoggingOptionsErrorKind::InvalidRequestException(tmp),
            }
        }
        "ThrottlingException" => {
            let mut tmp: crate::error::ThrottlingException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeLoggingOptionsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeLoggingOptionsError {
                meta: generic,
                kind: crate::error::DescribeLoggingOptionsErrorKind::ThrottlingException(tmp),
            }
        }
        "InternalFailureException" => {
            let mut tmp: crate::error::InternalFailureException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeLoggingOptionsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeLoggingOptionsError {
                meta: generic,
                kind: crate::error::DescribeLoggingOptionsErrorKind::InternalFailureException(tmp),
            }
        }
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeLoggingOptionsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeLoggingOptionsError {
                meta: generic,
                kind: crate::error::DescribeLoggingOptionsErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "ServiceUnavailableException" => {
            let mut tmp: crate::error::ServiceUnavailableException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeLoggingOptionsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeLoggingOptionsError {
                meta: generic,
                kind:
                    crate::error::DescribeLoggingOptionsErrorKind::ServiceUnavailableException(tmp),
            }
        }
        "UnsupportedOperationException" => {
            let mut tmp: crate::error::UnsupportedOperationException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeLoggingOptionsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeLoggingOptionsError {
                meta: generic,
                kind:
                    crate::error::DescribeLoggingOptionsErrorKind::UnsupportedOperationException(tmp),
            }
        }
        _ => crate::error::DescribeLoggingOptionsError::generic(generic),
    })
}

pub fn parse_describe_logging_options_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeLoggingOptionsOutput, crate::error::DescribeLoggingOptionsError> {
    smithy_json::from_body(response.body()).map_err(crate::error::DescribeLoggingOptionsError::unhandled)
}

pub fn parse_put_logging_options_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::PutLoggingOptionsOutput, crate::error::PutLoggingOptionsError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::PutLoggingOptionsError::unhandled(generic)),
    };
    Err(match error_code {
        "InvalidRequestException" => {
            let mut tmp: crate::error::InvalidRequestException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::PutLoggingOptionsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::PutLoggingOptionsError {
                meta: generic,
                kind: crate::error::PutLoggingOptionsErrorKind::InvalidRequestException(tmp),
            }
        }
        "ThrottlingException" => {
            let mut tmp: crate::error::ThrottlingException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::PutLoggingOptionsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::PutLoggingOptionsError {
                meta: generic,
                kind: crate::error::PutLoggingOptionsErrorKind::ThrottlingException(tmp),
            }
        }
        "InternalFailureException" => {
            let mut tmp: crate::error::InternalFailureException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::PutLoggingOptionsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::PutLoggingOptionsError {
                meta: generic,
                kind: crate::error::PutLoggingOptionsErrorKind::InternalFailureException(tmp),
            }
        }
        "ServiceUnavailableException" => {
            let mut tmp: crate::error::ServiceUnavailableException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::PutLoggingOptionsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::PutLoggingOptionsError {
                meta: generic,
                kind: crate::error::PutLoggingOptionsErrorKind::ServiceUnavailableException(tmp),
            }
        }
        "UnsupportedOperationException" => {
            let mut tmp: crate::error::UnsupportedOperationException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::PutLoggingOptionsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::PutLoggingOptionsError {
                meta: generic,
                kind: crate::error::PutLoggingOptionsErrorKind::UnsupportedOperationException(tmp),
            }
        }
        "ResourceInUseException" => {
            let mut tmp: crate::error::ResourceInUseException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::PutLoggingOptionsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::PutLoggingOptionsError {
                meta: generic,
                kind: crate::error::PutLoggingOptionsErrorKind::ResourceInUseException(tmp),
            }
        }
        _ => crate::error::PutLoggingOptionsError::generic(generic),
    })
}

pub fn parse_put_logging_options_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::PutLoggingOptionsOutput, crate::error::PutLoggingOptionsError> {
    smithy_json::from_body(response.body()).map_err(crate::error::PutLoggingOptionsError::unhandled)
}

pub fn parse_list_tags_for_resource_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListTagsForResourceOutput, crate::error::ListTagsForResourceError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::ListTagsForResourceError::unhandled(generic)),
    };
    Err(match error_code {
        "InvalidRequestException" => {
            let mut tmp: crate::error::InvalidRequestException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListTagsForResourceError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListTagsForResourceError {
                meta: generic,
                kind: crate::error::ListTagsForResourceErrorKind::InvalidRequestException(tmp),
            }
        }
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListTagsForResourceError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListTagsForResourceError {
                meta: generic,
                kind: crate::error::ListTagsForResourceErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "ResourceInUseException" => {
            let mut tmp: crate::error::ResourceInUseException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListTagsForResourceError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListTagsForResourceError {
                meta: generic,
                kind: crate::error::ListTagsForResourceErrorKind::ResourceInUseException(tmp),
            }
        }
        "ThrottlingException" => {
            let mut tmp: crate::error::ThrottlingException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListTagsForResourceError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListTagsForResourceError {
                meta: generic,
                kind: crate::error::ListTagsForResourceErrorKind::ThrottlingException(tmp),
            }
        }
        "InternalFailureException" => {
            let mut tmp: crate::error::InternalFailureException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListTagsForResourceError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListTagsForResourceError {
                meta: generic,
                kind: crate::error::ListTagsForResourceErrorKind::InternalFailureException(tmp),
            }
        }
        _ => crate::error::ListTagsForResourceError::generic(generic),
    })
}

pub fn parse_list_tags_for_resource_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListTagsForResourceOutput, crate::error::ListTagsForResourceError> {
    smithy_json::from_body(response.body()).map_err(crate::error::ListTagsForResourceError::unhandled)
}

pub fn parse_tag_resource_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::TagResourceOutput, crate::error::TagResourceError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::TagResourceError::unhandled(generic)),
    };
    Err(match error_code {
        "InvalidRequestException" => {
            let mut tmp: crate::error::InvalidRequestException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::TagResourceError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::TagResourceError {
                meta: generic,
                kind: crate::error::TagResourceErrorKind::InvalidRequestException(tmp),
            }
        }
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::TagResourceError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::TagResourceError {
                meta: generic,
                kind: crate::error::TagResourceErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "ResourceInUseException" => {
            let mut tmp: crate::error::ResourceInUseException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::TagResourceError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::TagResourceError {
                meta: generic,
                kind: crate::error::TagResourceErrorKind::ResourceInUseException(tmp),
            }
        }
        "ThrottlingException" => {
            let mut tmp: crate::error::ThrottlingException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::TagResourceError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::TagResourceError {
                meta: generic,
                kind: crate::error::TagResourceErrorKind::ThrottlingException(tmp),
            }
        }
        "LimitExceededException" => {
            let mut tmp: crate::error::LimitExceededException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::TagResourceError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::TagResourceError {
                meta: generic,
                kind: crate::error::TagResourceErrorKind::LimitExceededException(tmp),
            }
        }
        "InternalFailureException" => {
            let mut tmp: crate::error::InternalFailureException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::TagResourceError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::TagResourceError {
                meta: generic,
                kind: crate::error::TagResourceErrorKind::InternalFailureException(tmp),
            }
        }
        _ => crate::error::TagResourceError::generic(generic),
    })
}

pub fn parse_tag_resource_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::TagResourceOutput, crate::error::TagResourceError> {
    smithy_json::from_body(response.body()).map_err(crate::error::TagResourceError::unhandled)
}

pub fn parse_untag_resource_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UntagResourceOutput, crate::error::UntagResourceError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::UntagResourceError::unhandled(generic)),
    };
    Err(match error_code {
        "InvalidRequestException" => {
            let mut tmp: crate::error::InvalidRequestException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UntagResourceError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UntagResourceError {
                meta: generic,
                kind: crate::error::UntagResourceErrorKind::InvalidRequestException(tmp),
            }
        }
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UntagResourceError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UntagResourceError {
                meta: generic,
                kind: crate::error::UntagResourceErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "ResourceInUseException" => {
            let mut tmp: crate::error::ResourceInUseException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UntagResourceError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UntagResourceError {
                meta: generic,
                kind: crate::error::UntagResourceErrorKind::ResourceInUseException(tmp),
            }
        }
        "ThrottlingException" => {
            let mut tmp: crate::error::ThrottlingException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UntagResourceError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UntagResourceError {
                meta: generic,
                kind: crate::error::UntagResourceErrorKind::ThrottlingException(tmp),
            }
        }
        "InternalFailureException" => {
            let mut tmp: crate::error::InternalFailureException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UntagResourceError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UntagResourceError {
                meta: generic,
                kind: crate::error::UntagResourceErrorKind::InternalFailureException(tmp),
            }
        }
        _ => crate::error::UntagResourceError::generic(generic),
    })
}

pub fn parse_untag_resource_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UntagResourceOutput, crate::error::UntagResourceError> {
    smithy_json::from_body(response.body()).map_err(crate::error::UntagResourceError::unhandled)
}
