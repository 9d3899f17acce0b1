/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub fn parse_describe_accelerator_offerings_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeAcceleratorOfferingsOutput, crate::error::DescribeAcceleratorOfferingsError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DescribeAcceleratorOfferingsError::unhandled(generic)),
    };
    Err(match error_code {
        "BadRequestException" => {
            let mut tmp: crate::error::BadRequestException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeAcceleratorOfferingsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeAcceleratorOfferingsError {
                meta: generic,
                kind: crate::error::DescribeAcceleratorOfferingsErrorKind::BadRequestException(tmp),
            }
        }
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeAcceleratorOfferingsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeAcceleratorOfferingsError {
                meta: generic,
                kind:
                    crate::error::DescribeAcceleratorOfferingsErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "InternalServerException" => {
            let mut tmp: crate::error::InternalServerException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeAcceleratorOfferingsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeAcceleratorOfferingsError {
                meta: generic,
                kind:
                    crate::error::DescribeAcceleratorOfferingsErrorKind::InternalServerException(tmp),
            }
        }
        _ => crate::error::DescribeAcceleratorOfferingsError::generic(generic),
    })
}

pub fn parse_describe_accelerator_offerings_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeAcceleratorOfferingsOutput, crate::error::DescribeAcceleratorOfferingsError> {
    smithy_json::from_body(response.body()).map_err(crate::error::DescribeAcceleratorOfferingsError::unhandled)
}

pub fn parse_describe_accelerator_types_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeAcceleratorTypesOutput, crate::error::DescribeAcceleratorTypesError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DescribeAcceleratorTypesError::unhandled(generic)),
    };
    Err(match error_code {
        "InternalServerException" => {
            let mut tmp: crate::error::InternalServerException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeAcceleratorTypesError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeAcceleratorTypesError {
                meta: generic,
                kind: crate::error::DescribeAcceleratorTypesErrorKind::InternalServerException(tmp),
            }
        }
        _ => crate::error::DescribeAcceleratorTypesError::generic(generic),
    })
}

pub fn parse_describe_accelerator_types_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeAcceleratorTypesOutput, crate::error::DescribeAcceleratorTypesError> {
    smithy_json::from_body(response.body()).map_err(crate::error::DescribeAcceleratorTypesError::unhandled)
}

pub fn parse_describe_accelerators_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeAcceleratorsOutput, crate::error::DescribeAcceleratorsError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DescribeAcceleratorsError::unhandled(generic)),
    };
    Err(match error_code {
        "BadRequestException" => {
            let mut tmp: crate::error::BadRequestException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeAcceleratorsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeAcceleratorsError {
                meta: generic,
                kind: crate::error::DescribeAcceleratorsErrorKind::BadRequestException(tmp),
            }
        }
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeAcceleratorsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeAcceleratorsError {
                meta: generic,
                kind: crate::error::DescribeAcceleratorsErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "InternalServerException" => {
            let mut tmp: crate::error::InternalServerException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeAcceleratorsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeAcceleratorsError {
                meta: generic,
                kind: crate::error::DescribeAcceleratorsErrorKind::InternalServerException(tmp),
            }
        }
        _ => crate::error::DescribeAcceleratorsError::generic(generic),
    })
}

pub fn parse_describe_accelerators_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeAcceleratorsOutput, crate::error::DescribeAcceleratorsError> {
    smithy_json::from_body(response.body()).map_err(crate::error::DescribeAcceleratorsError::unhandled)
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
        "BadRequestException" => {
            let mut tmp: crate::error::BadRequestException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListTagsForResourceError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListTagsForResourceError {
                meta: generic,
                kind: crate::error::ListTagsForResourceErrorKind::BadRequestException(tmp),
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
        "InternalServerException" => {
            let mut tmp: crate::error::InternalServerException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListTagsForResourceError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListTagsForResourceError {
                meta: generic,
                kind: crate::error::ListTagsForResourceErrorKind::InternalServerException(tmp),
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
        "BadRequestException" => {
            let mut tmp: crate::error::BadRequestException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::TagResourceError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::TagResourceError {
                meta: generic,
                kind: crate::error::TagResourceErrorKind::BadRequestException(tmp),
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
        "InternalServerException" => {
            let mut tmp: crate::error::InternalServerException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::TagResourceError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::TagResourceError {
                meta: generic,
                kind: crate::error::TagResourceErrorKind::InternalServerException(tmp),
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
        "BadRequestException" => {
            let mut tmp: crate::error::BadRequestException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UntagResourceError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UntagResourceError {
                meta: generic,
                kind: crate::error::UntagResourceErrorKind::BadRequestException(tmp),
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
        "InternalServerException" => {
            let mut tmp: crate::error::InternalServerException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UntagResourceError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UntagResourceError {
                meta: generic,
                kind: crate::error::UntagResourceErrorKind::InternalServerException(tmp),
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
