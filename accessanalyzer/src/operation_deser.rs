/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub fn parse_create_analyzer_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateAnalyzerOutput, crate::error::CreateAnalyzerError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::CreateAnalyzerError::unhandled(generic)),
    };
    Err(match error_code {
        "ConflictException" => {
            let mut tmp: crate::error::ConflictException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::CreateAnalyzerError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::CreateAnalyzerError {
                meta: generic,
                kind: crate::error::CreateAnalyzerErrorKind::ConflictException(tmp),
            }
        }
        "ServiceQuotaExceededException" => {
            let mut tmp: crate::error::ServiceQuotaExceededException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::CreateAnalyzerError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::CreateAnalyzerError {
                meta: generic,
                kind: crate::error::CreateAnalyzerErrorKind::ServiceQuotaExceededException(tmp),
            }
        }
        "AccessDeniedException" => {
            let mut tmp: crate::error::AccessDeniedException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::CreateAnalyzerError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::CreateAnalyzerError {
                meta: generic,
                kind: crate::error::CreateAnalyzerErrorKind::AccessDeniedException(tmp),
            }
        }
        "InternalServerException" => {
            let mut tmp: crate::error::InternalServerException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::CreateAnalyzerError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::CreateAnalyzerError {
                meta: generic,
                kind: crate::error::CreateAnalyzerErrorKind::InternalServerException(tmp),
            }
        }
        "ThrottlingException" => {
            let mut tmp: crate::error::ThrottlingException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::CreateAnalyzerError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::CreateAnalyzerError {
                meta: generic,
                kind: crate::error::CreateAnalyzerErrorKind::ThrottlingException(tmp),
            }
        }
        "ValidationException" => {
            let mut tmp: crate::error::ValidationException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::CreateAnalyzerError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::CreateAnalyzerError {
                meta: generic,
                kind: crate::error::CreateAnalyzerErrorKind::ValidationException(tmp),
            }
        }
        _ => crate::error::CreateAnalyzerError::generic(generic),
    })
}

pub fn parse_create_analyzer_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateAnalyzerOutput, crate::error::CreateAnalyzerError> {
    smithy_json::from_body(response.body()).map_err(crate::error::CreateAnalyzerError::unhandled)
}

pub fn parse_create_archive_rule_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateArchiveRuleOutput, crate::error::CreateArchiveRuleError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::CreateArchiveRuleError::unhandled(generic)),
    };
    Err(match error_code {
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::CreateArchiveRuleError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::CreateArchiveRuleError {
                meta: generic,
                kind: crate::error::CreateArchiveRuleErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "ConflictException" => {
            let mut tmp: crate::error::ConflictException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::CreateArchiveRuleError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::CreateArchiveRuleError {
                meta: generic,
                kind: crate::error::CreateArchiveRuleErrorKind::ConflictException(tmp),
            }
        }
        "ServiceQuotaExceededException" => {
            let mut tmp: crate::error::ServiceQuotaExceededException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::CreateArchiveRuleError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::CreateArchiveRuleError {
                meta: generic,
                kind: crate::error::CreateArchiveRuleErrorKind::ServiceQuotaExceededException(tmp),
            }
        }
        "AccessDeniedException" => {
            let mut tmp: crate::error::AccessDeniedException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::CreateArchiveRuleError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::CreateArchiveRuleError {
                meta: generic,
                kind: crate::error::CreateArchiveRuleErrorKind::AccessDeniedException(tmp),
            }
        }
        "InternalServerException" => {
            let mut tmp: crate::error::InternalServerException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::CreateArchiveRuleError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::CreateArchiveRuleError {
                meta: generic,
                kind: crate::error::CreateArchiveRuleErrorKind::InternalServerException(tmp),
            }
        }
        "ThrottlingException" => {
            let mut tmp: crate::error::ThrottlingException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::CreateArchiveRuleError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::CreateArchiveRuleError {
                meta: generic,
                kind: crate::error::CreateArchiveRuleErrorKind::ThrottlingException(tmp),
            }
        }
        "ValidationException" => {
            let mut tmp: crate::error::ValidationException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::CreateArchiveRuleError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::CreateArchiveRuleError {
                meta: generic,
                kind: crate::error::CreateArchiveRuleErrorKind::ValidationException(tmp),
            }
        }
        _ => crate::error::CreateArchiveRuleError::generic(generic),
    })
}

pub fn parse_create_archive_rule_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateArchiveRuleOutput, crate::error::CreateArchiveRuleError> {
    smithy_json::from_body(response.body()).map_err(crate::error::CreateArchiveRuleError::unhandled)
}

pub fn parse_delete_analyzer_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteAnalyzerOutput, crate::error::DeleteAnalyzerError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DeleteAnalyzerError::unhandled(generic)),
    };
    Err(match error_code {
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DeleteAnalyzerError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DeleteAnalyzerError {
                meta: generic,
                kind: crate::error::DeleteAnalyzerErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "AccessDeniedException" => {
            let mut tmp: crate::error::AccessDeniedException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DeleteAnalyzerError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DeleteAnalyzerError {
                meta: generic,
                kind: crate::error::DeleteAnalyzerErrorKind::AccessDeniedException(tmp),
            }
        }
        "InternalServerException" => {
            let mut tmp: crate::error::InternalServerException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DeleteAnalyzerError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DeleteAnalyzerError {
                meta: generic,
                kind: crate::error::DeleteAnalyzerErrorKind::InternalServerException(tmp),
            }
        }
        "ThrottlingException" => {
            let mut tmp: crate::error::ThrottlingException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DeleteAnalyzerError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DeleteAnalyzerError {
                meta: generic,
                kind: crate::error::DeleteAnalyzerErrorKind::ThrottlingException(tmp),
            }
        }
        "ValidationException" => {
            let mut tmp: crate::error::ValidationException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DeleteAnalyzerError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DeleteAnalyzerError {
                meta: generic,
                kind: crate::error::DeleteAnalyzerErrorKind::ValidationException(tmp),
            }
        }
        _ => crate::error::DeleteAnalyzerError::generic(generic),
    })
}

pub fn parse_delete_analyzer_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteAnalyzerOutput, crate::error::DeleteAnalyzerError> {
    smithy_json::from_body(response.body()).map_err(crate::error::DeleteAnalyzerError::unhandled)
}

pub fn parse_delete_archive_rule_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteArchiveRuleOutput, crate::error::DeleteArchiveRuleError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DeleteArchiveRuleError::unhandled(generic)),
    };
    Err(match error_code {
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DeleteArchiveRuleError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DeleteArchiveRuleError {
                meta: generic,
                kind: crate::error::DeleteArchiveRuleErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "AccessDeniedException" => {
            let mut tmp: crate::error::AccessDeniedException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DeleteArchiveRuleError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DeleteArchiveRuleError {
                meta: generic,
                kind: crate::error::DeleteArchiveRuleErrorKind::AccessDeniedException(tmp),
            }
        }
        "InternalServerException" => {
            let mut tmp: crate::error::InternalServerException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DeleteArchiveRuleError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DeleteArchiveRuleError {
                meta: generic,
                kind: crate::error::DeleteArchiveRuleErrorKind::InternalServerException(tmp),
            }
        }
        "ThrottlingException" => {
            let mut tmp: crate::error::ThrottlingException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DeleteArchiveRuleError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DeleteArchiveRuleError {
                meta: generic,
                kind: crate::error::DeleteArchiveRuleErrorKind::ThrottlingException(tmp),
            }
        }
        "ValidationException" => {
            let mut tmp: crate::error::ValidationException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DeleteArchiveRuleError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DeleteArchiveRuleError {
                meta: generic,
                kind: crate::error::DeleteArchiveRuleErrorKind::ValidationException(tmp),
            }
        }
        _ => crate::error::DeleteArchiveRuleError::generic(generic),
    })
}

pub fn parse_delete_archive_rule_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteArchiveRuleOutput, crate::error::DeleteArchiveRuleError> {
    smithy_json::from_body(response.body()).map_err(crate::error::DeleteArchiveRuleError::unhandled)
}

pub fn parse_get_analyzed_resource_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetAnalyzedResourceOutput, crate::error::GetAnalyzedResourceError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::GetAnalyzedResourceError::unhandled(generic)),
    };
    Err(match error_code {
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::GetAnalyzedResourceError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::GetAnalyzedResourceError {
                meta: generic,
                kind: crate::error::GetAnalyzedResourceErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "AccessDeniedException" => {
            let mut tmp: crate::error::AccessDeniedException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::GetAnalyzedResourceError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::GetAnalyzedResourceError {
                meta: generic,
                kind: crate::error::GetAnalyzedResourceErrorKind::AccessDeniedException(tmp),
            }
        }
        "InternalServerException" => {
            let mut tmp: crate::error::InternalServerException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::GetAnalyzedResourceError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::GetAnalyzedResourceError {
                meta: generic,
                kind: crate::error::GetAnalyzedResourceErrorKind::InternalServerException(tmp),
            }
        }
        "ThrottlingException" => {
            let mut tmp: crate::error::ThrottlingException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::GetAnalyzedResourceError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::GetAnalyzedResourceError {
                meta: generic,
                kind: crate::error::GetAnalyzedResourceErrorKind::ThrottlingException(tmp),
            }
        }
        "ValidationException" => {
            let mut tmp: crate::error::ValidationException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::GetAnalyzedResourceError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::GetAnalyzedResourceError {
                meta: generic,
                kind: crate::error::GetAnalyzedResourceErrorKind::ValidationException(tmp),
            }
        }
        _ => crate::error::GetAnalyzedResourceError::generic(generic),
    })
}

pub fn parse_get_analyzed_resource_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetAnalyzedResourceOutput, crate::error::GetAnalyzedResourceError> {
    smithy_json::from_body(response.body()).map_err(crate::error::GetAnalyzedResourceError::unhandled)
}

pub fn parse_get_analyzer_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetAnalyzerOutput, crate::error::GetAnalyzerError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::GetAnalyzerError::unhandled(generic)),
    };
    Err(match error_code {
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::GetAnalyzerError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::GetAnalyzerError {
                meta: generic,
                kind: crate::error::GetAnalyzerErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "AccessDeniedException" => {
            let mut tmp: crate::error::AccessDeniedException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::GetAnalyzerError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::GetAnalyzerError {
                meta: generic,
                kind: crate::error::GetAnalyzerErrorKind::AccessDeniedException(tmp),
            }
        }
        "InternalServerException" => {
            let mut tmp: crate::error::InternalServerException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::GetAnalyzerError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::GetAnalyzerError {
                meta: generic,
                kind: crate::error::GetAnalyzerErrorKind::InternalServerException(tmp),
            }
        }
        "ThrottlingException" => {
            let mut tmp: crate::error::ThrottlingException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::GetAnalyzerError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::GetAnalyzerError {
                meta: generic,
                kind: crate::error::GetAnalyzerErrorKind::ThrottlingException(tmp),
            }
        }
        "ValidationException" => {
            let mut tmp: crate::error::ValidationException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::GetAnalyzerError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::GetAnalyzerError {
                meta: generic,
                kind: crate::error::GetAnalyzerErrorKind::ValidationException(tmp),
            }
        }
        _ => crate::error::GetAnalyzerError::generic(generic),
    })
}

pub fn parse_get_analyzer_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetAnalyzerOutput, crate::error::GetAnalyzerError> {
    smithy_json::from_body(response.body()).map_err(crate::error::GetAnalyzerError::unhandled)
}

pub fn parse_get_archive_rule_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetArchiveRuleOutput, crate::error::GetArchiveRuleError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::GetArchiveRuleError::unhandled(generic)),
    };
    Err(match error_code {
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::GetArchiveRuleError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::GetArchiveRuleError {
                meta: generic,
                kind: crate::error::GetArchiveRuleErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "AccessDeniedException" => {
            let mut tmp: crate::error::AccessDeniedException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::GetArchiveRuleError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::GetArchiveRuleError {
                meta: generic,
                kind: crate::error::GetArchiveRuleErrorKind::AccessDeniedException(tmp),
            }
        }
        "InternalServerException" => {
            let mut tmp: crate::error::InternalServerException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::GetArchiveRuleError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::GetArchiveRuleError {
                meta: generic,
                kind: crate::error::GetArchiveRuleErrorKind::InternalServerException(tmp),
            }
        }
        "ThrottlingException" => {
            let mut tmp: crate::error::ThrottlingException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::GetArchiveRuleError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::GetArchiveRuleError {
                meta: generic,
                kind: crate::error::GetArchiveRuleErrorKind::ThrottlingException(tmp),
            }
        }
        "ValidationException" => {
            let mut tmp: crate::error::ValidationException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::GetArchiveRuleError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::GetArchiveRuleError {
                meta: generic,
                kind: crate::error::GetArchiveRuleErrorKind::ValidationException(tmp),
            }
        }
        _ => crate::error::GetArchiveRuleError::generic(generic),
    })
}

pub fn parse_get_archive_rule_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetArchiveRuleOutput, crate::error::GetArchiveRuleError> {
    smithy_json::from_body(response.body()).map_err(crate::error::GetArchiveRuleError::unhandled)
}

pub fn parse_get_finding_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetFindingOutput, crate::error::GetFindingError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::GetFindingError::unhandled(generic)),
    };
    Err(match error_code {
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::GetFindingError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::GetFindingError {
                meta: generic,
                kind: crate::error::GetFindingErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "AccessDeniedException" => {
            let mut tmp: crate::error::AccessDeniedException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::GetFindingError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::GetFindingError {
                meta: generic,
                kind: crate::error::GetFindingErrorKind::AccessDeniedException(tmp),
            }
        }
        "InternalServerException" => {
            let mut tmp: crate::error::InternalServerException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::GetFindingError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::GetFindingError {
                meta: generic,
                kind: crate::error::GetFindingErrorKind::InternalServerException(tmp),
            }
        }
        "ThrottlingException" => {
            let mut tmp: crate::error::ThrottlingException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::GetFindingError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::GetFindingError {
                meta: generic,
                kind: crate::error::GetFindingErrorKind::ThrottlingException(tmp),
            }
        }
        "ValidationException" => {
            let mut tmp: crate::error::ValidationException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::GetFindingError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::GetFindingError {
                meta: generic,
                kind: crate::error::GetFindingErrorKind::ValidationException(tmp),
            }
        }
        _ => crate::error::GetFindingError::generic(generic),
    })
}

pub fn parse_get_finding_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetFindingOutput, crate::error::GetFindingError> {
    smithy_json::from_body(response.body()).map_err(crate::error::GetFindingError::unhandled)
}

pub fn parse_list_analyzed_resources_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListAnalyzedResourcesOutput, crate::error::ListAnalyzedResourcesError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::ListAnalyzedResourcesError::unhandled(generic)),
    };
    Err(match error_code {
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListAnalyzedResourcesError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListAnalyzedResourcesError {
                meta: generic,
                kind: crate::error::ListAnalyzedResourcesErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "AccessDeniedException" => {
            let mut tmp: crate::error::AccessDeniedException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListAnalyzedResourcesError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListAnalyzedResourcesError {
                meta: generic,
                kind: crate::error::ListAnalyzedResourcesErrorKind::AccessDeniedException(tmp),
            }
        }
        "InternalServerException" => {
            let mut tmp: crate::error::InternalServerException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListAnalyzedResourcesError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListAnalyzedResourcesError {
                meta: generic,
                kind: crate::error::ListAnalyzedResourcesErrorKind::InternalServerException(tmp),
            }
        }
        "ThrottlingException" => {
            let mut tmp: crate::error::ThrottlingException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListAnalyzedResourcesError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListAnalyzedResourcesError {
                meta: generic,
                kind: crate::error::ListAnalyzedResourcesErrorKind::ThrottlingException(tmp),
            }
        }
        "ValidationException" => {
            let mut tmp: crate::error::ValidationException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListAnalyzedResourcesError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListAnalyzedResourcesError {
                meta: generic,
                kind: crate::error::ListAnalyzedResourcesErrorKind::ValidationException(tmp),
            }
        }
        _ => crate::error::ListAnalyzedResourcesError::generic(generic),
    })
}

pub fn parse_list_analyzed_resources_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListAnalyzedResourcesOutput, crate::error::ListAnalyzedResourcesError> {
    smithy_json::from_body(response.body()).map_err(crate::error::ListAnalyzedResourcesError::unhandled)
}

pub fn parse_list_analyzers_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListAnalyzersOutput, crate::error::ListAnalyzersError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::ListAnalyzersError::unhandled(generic)),
    };
    Err(match error_code {
        "AccessDeniedException" => {
            let mut tmp: crate::error::AccessDeniedException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListAnalyzersError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListAnalyzersError {
                meta: generic,
                kind: crate::error::ListAnalyzersErrorKind::AccessDeniedException(tmp),
            }
        }
        "InternalServerException" => {
            let mut tmp: crate::error::InternalServerException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListAnalyzersError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListAnalyzersError {
                meta: generic,
                kind: crate::error::ListAnalyzersErrorKind::InternalServerException(tmp),
            }
        }
        "ThrottlingException" => {
            let mut tmp: crate::error::ThrottlingException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListAnalyzersError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListAnalyzersError {
                meta: generic,
                kind: crate::error::ListAnalyzersErrorKind::ThrottlingException(tmp),
            }
        }
        "ValidationException" => {
            let mut tmp: crate::error::ValidationException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListAnalyzersError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListAnalyzersError {
                meta: generic,
                kind: crate::error::ListAnalyzersErrorKind::ValidationException(tmp),
            }
        }
        _ => crate::error::ListAnalyzersError::generic(generic),
    })
}

pub fn parse_list_analyzers_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListAnalyzersOutput, crate::error::ListAnalyzersError> {
    smithy_json::from_body(response.body()).map_err(crate::error::ListAnalyzersError::unhandled)
}

pub fn parse_list_archive_rules_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListArchiveRulesOutput, crate::error::ListArchiveRulesError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::ListArchiveRulesError::unhandled(generic)),
    };
    Err(match error_code {
        "AccessDeniedException" => {
            let mut tmp: crate::error::AccessDeniedException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListArchiveRulesError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListArchiveRulesError {
                meta: generic,
                kind: crate::error::ListArchiveRulesErrorKind::AccessDeniedException(tmp),
            }
        }
        "InternalServerException" => {
            let mut tmp: crate::error::InternalServerException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListArchiveRulesError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListArchiveRulesError {
                meta: generic,
                kind: crate::error::ListArchiveRulesErrorKind::InternalServerException(tmp),
            }
        }
        "ThrottlingException" => {
            let mut tmp: crate::error::ThrottlingException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListArchiveRulesError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListArchiveRulesError {
                meta: generic,
                kind: crate::error::ListArchiveRulesErrorKind::ThrottlingException(tmp),
            }
        }
        "ValidationException" => {
            let mut tmp: crate::error::ValidationException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListArchiveRulesError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListArchiveRulesError {
                meta: generic,
                kind: crate::error::ListArchiveRulesErrorKind::ValidationException(tmp),
            }
        }
        _ => crate::error::ListArchiveRulesError::generic(generic),
    })
}

pub fn parse_list_archive_rules_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListArchiveRulesOutput, crate::error::ListArchiveRulesError> {
    smithy_json::from_body(response.body()).map_err(crate::error::ListArchiveRulesError::unhandled)
}

pub fn parse_list_findings_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListFindingsOutput, crate::error::ListFindingsError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::ListFindingsError::unhandled(generic)),
    };
    Err(match error_code {
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListFindingsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListFindingsError {
                meta: generic,
                kind: crate::error::ListFindingsErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "AccessDeniedException" => {
            let mut tmp: crate::error::AccessDeniedException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListFindingsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListFindingsError {
                meta: generic,
                kind: crate::error::ListFindingsErrorKind::AccessDeniedException(tmp),
            }
        }
        "InternalServerException" => {
            let mut tmp: crate::error::InternalServerException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListFindingsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListFindingsError {
                meta: generic,
                kind: crate::error::ListFindingsErrorKind::InternalServerException(tmp),
            }
        }
        "ThrottlingException" => {
            let mut tmp: crate::error::ThrottlingException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListFindingsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListFindingsError {
                meta: generic,
                kind: crate::error::ListFindingsErrorKind::ThrottlingException(tmp),
            }
        }
        "ValidationException" => {
            let mut tmp: crate::error::ValidationException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListFindingsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListFindingsError {
                meta: generic,
                kind: crate::error::ListFindingsErrorKind::ValidationException(tmp),
            }
        }
        _ => crate::error::ListFindingsError::generic(generic),
    })
}

pub fn parse_list_findings_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListFindingsOutput, crate::error::ListFindingsError> {
    smithy_json::from_body(response.body()).map_err(crate::error::ListFindingsError::unhandled)
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
        "AccessDeniedException" => {
            let mut tmp: crate::error::AccessDeniedException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListTagsForResourceError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListTagsForResourceError {
                meta: generic,
                kind: crate::error::ListTagsForResourceErrorKind::AccessDeniedException(tmp),
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
        "ValidationException" => {
            let mut tmp: crate::error::ValidationException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListTagsForResourceError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListTagsForResourceError {
                meta: generic,
                kind: crate::error::ListTagsForResourceErrorKind::ValidationException(tmp),
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

pub fn parse_start_resource_scan_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::StartResourceScanOutput, crate::error::StartResourceScanError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::StartResourceScanError::unhandled(generic)),
    };
    Err(match error_code {
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::StartResourceScanError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::StartResourceScanError {
                meta: generic,
                kind: crate::error::StartResourceScanErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "AccessDeniedException" => {
            let mut tmp: crate::error::AccessDeniedException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::StartResourceScanError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::StartResourceScanError {
                meta: generic,
                kind: crate::error::StartResourceScanErrorKind::AccessDeniedException(tmp),
            }
        }
        "InternalServerException" => {
            let mut tmp: crate::error::InternalServerException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::StartResourceScanError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::StartResourceScanError {
                meta: generic,
                kind: crate::error::StartResourceScanErrorKind::InternalServerException(tmp),
            }
        }
        "ThrottlingException" => {
            let mut tmp: crate::error::ThrottlingException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::StartResourceScanError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::StartResourceScanError {
                meta: generic,
                kind: crate::error::StartResourceScanErrorKind::ThrottlingException(tmp),
            }
        }
        "ValidationException" => {
            let mut tmp: crate::error::ValidationException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::StartResourceScanError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::StartResourceScanError {
                meta: generic,
                kind: crate::error::StartResourceScanErrorKind::ValidationException(tmp),
            }
        }
        _ => crate::error::StartResourceScanError::generic(generic),
    })
}

pub fn parse_start_resource_scan_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::StartResourceScanOutput, crate::error::StartResourceScanError> {
    smithy_json::from_body(response.body()).map_err(crate::error::StartResourceScanError::unhandled)
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
        "AccessDeniedException" => {
            let mut tmp: crate::error::AccessDeniedException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::TagResourceError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::TagResourceError {
                meta: generic,
                kind: crate::error::TagResourceErrorKind::AccessDeniedException(tmp),
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
        "ValidationException" => {
            let mut tmp: crate::error::ValidationException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::TagResourceError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::TagResourceError {
                meta: generic,
                kind: crate::error::TagResourceErrorKind::ValidationException(tmp),
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
        "AccessDeniedException" => {
            let mut tmp: crate::error::AccessDeniedException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UntagResourceError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UntagResourceError {
                meta: generic,
                kind: crate::error::UntagResourceErrorKind::AccessDeniedException(tmp),
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
        "ValidationException" => {
            let mut tmp: crate::error::ValidationException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UntagResourceError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UntagResourceError {
                meta: generic,
                kind: crate::error::UntagResourceErrorKind::ValidationException(tmp),
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

pub fn parse_update_archive_rule_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateArchiveRuleOutput, crate::error::UpdateArchiveRuleError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::UpdateArchiveRuleError::unhandled(generic)),
    };
    Err(match error_code {
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UpdateArchiveRuleError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UpdateArchiveRuleError {
                meta: generic,
                kind: crate::error::UpdateArchiveRuleErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "AccessDeniedException" => {
            let mut tmp: crate::error::AccessDeniedException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UpdateArchiveRuleError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UpdateArchiveRuleError {
                meta: generic,
                kind: crate::error::UpdateArchiveRuleErrorKind::AccessDeniedException(tmp),
            }
        }
        "InternalServerException" => {
            let mut tmp: crate::error::InternalServerException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UpdateArchiveRuleError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UpdateArchiveRuleError {
                meta: generic,
                kind: crate::error::UpdateArchiveRuleErrorKind::InternalServerException(tmp),
            }
        }
        "ThrottlingException" => {
            let mut tmp: crate::error::ThrottlingException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UpdateArchiveRuleError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UpdateArchiveRuleError {
                meta: generic,
                kind: crate::error::UpdateArchiveRuleErrorKind::ThrottlingException(tmp),
            }
        }
        "ValidationException" => {
            let mut tmp: crate::error::ValidationException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UpdateArchiveRuleError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UpdateArchiveRuleError {
                meta: generic,
                kind: crate::error::UpdateArchiveRuleErrorKind::ValidationException(tmp),
            }
        }
        _ => crate::error::UpdateArchiveRuleError::generic(generic),
    })
}

pub fn parse_update_archive_rule_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateArchiveRuleOutput, crate::error::UpdateArchiveRuleError> {
    smithy_json::from_body(response.body()).map_err(crate::error::UpdateArchiveRuleError::unhandled)
}

pub fn parse_update_findings_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateFindingsOutput, crate::error::UpdateFindingsError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::UpdateFindingsError::unhandled(generic)),
    };
    Err(match error_code {
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UpdateFindingsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UpdateFindingsError {
                meta: generic,
                kind: crate::error::UpdateFindingsErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "AccessDeniedException" => {
            let mut tmp: crate::error::AccessDeniedException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UpdateFindingsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UpdateFindingsError {
                meta: generic,
                kind: crate::error::UpdateFindingsErrorKind::AccessDeniedException(tmp),
            }
        }
        "InternalServerException" => {
            let mut tmp: crate::error::InternalServerException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UpdateFindingsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UpdateFindingsError {
                meta: generic,
                kind: crate::error::UpdateFindingsErrorKind::InternalServerException(tmp),
            }
        }
        "ThrottlingException" => {
            let mut tmp: crate::error::ThrottlingException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UpdateFindingsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UpdateFindingsError {
                meta: generic,
                kind: crate::error::UpdateFindingsErrorKind::ThrottlingException(tmp),
            }
        }
        "ValidationException" => {
            let mut tmp: crate::error::ValidationException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UpdateFindingsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UpdateFindingsError {
                meta: generic,
                kind: crate::error::UpdateFindingsErrorKind::ValidationException(tmp),
            }
        }
        _ => crate::error::UpdateFindingsError::generic(generic),
    })
}

pub fn parse_update_findings_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateFindingsOutput, crate::error::UpdateFindingsError> {
    smithy_json::from_body(response.body()).map_err(crate::error::UpdateFindingsError::unhandled)
}
