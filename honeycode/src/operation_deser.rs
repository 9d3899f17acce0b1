/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub fn parse_get_screen_data_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetScreenDataOutput, crate::error::GetScreenDataError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::GetScreenDataError::unhandled(generic)),
    };
    Err(match error_code {
        "AccessDeniedException" => {
            let mut tmp: crate::error::AccessDeniedException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::GetScreenDataError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::GetScreenDataError {
                meta: generic,
                kind: crate::error::GetScreenDataErrorKind::AccessDeniedException(tmp),
            }
        }
        "InternalServerException" => {
            let mut tmp: crate::error::InternalServerException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::GetScreenDataError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::GetScreenDataError {
                meta: generic,
                kind: crate::error::GetScreenDataErrorKind::InternalServerException(tmp),
            }
        }
        "RequestTimeoutException" => {
            let mut tmp: crate::error::RequestTimeoutException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::GetScreenDataError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::GetScreenDataError {
                meta: generic,
                kind: crate::error::GetScreenDataErrorKind::RequestTimeoutException(tmp),
            }
        }
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::GetScreenDataError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::GetScreenDataError {
                meta: generic,
                kind: crate::error::GetScreenDataErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "ServiceUnavailableException" => {
            let mut tmp: crate::error::ServiceUnavailableException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::GetScreenDataError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::GetScreenDataError {
                meta: generic,
                kind: crate::error::GetScreenDataErrorKind::ServiceUnavailableException(tmp),
            }
        }
        "ThrottlingException" => {
            let mut tmp: crate::error::ThrottlingException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::GetScreenDataError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::GetScreenDataError {
                meta: generic,
                kind: crate::error::GetScreenDataErrorKind::ThrottlingException(tmp),
            }
        }
        "ValidationException" => {
            let mut tmp: crate::error::ValidationException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::GetScreenDataError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::GetScreenDataError {
                meta: generic,
                kind: crate::error::GetScreenDataErrorKind::ValidationException(tmp),
            }
        }
        _ => crate::error::GetScreenDataError::generic(generic),
    })
}

pub fn parse_get_screen_data_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetScreenDataOutput, crate::error::GetScreenDataError> {
    smithy_json::from_body(response.body()).map_err(crate::error::GetScreenDataError::unhandled)
}

pub fn parse_invoke_screen_automation_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::InvokeScreenAutomationOutput, crate::error::InvokeScreenAutomationError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::InvokeScreenAutomationError::unhandled(generic)),
    };
    Err(match error_code {
        "AutomationExecutionException" => {
            let mut tmp: crate::error::AutomationExecutionException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::InvokeScreenAutomationError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::InvokeScreenAutomationError {
                meta: generic,
                kind:
                    crate::error::InvokeScreenAutomationErrorKind::AutomationExecutionException(tmp),
            }
        }
        "AutomationExecutionTimeoutException" => {
            let mut tmp: crate::error::AutomationExecutionTimeoutException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::InvokeScreenAutomationError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::InvokeScreenAutomationError {
                meta: generic,
                kind:
                    crate::error::InvokeScreenAutomationErrorKind::AutomationExecutionTimeoutException(tmp),
            }
        }
        "AccessDeniedException" => {
            let mut tmp: crate::error::AccessDeniedException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::InvokeScreenAutomationError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::InvokeScreenAutomationError {
                meta: generic,
                kind: crate::error::InvokeScreenAutomationErrorKind::AccessDeniedException(tmp),
            }
        }
        "InternalServerException" => {
            let mut tmp: crate::error::InternalServerException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::InvokeScreenAutomationError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::InvokeScreenAutomationError {
                meta: generic,
                kind: crate::error::InvokeScreenAutomationErrorKind::InternalServerException(tmp),
            }
        }
        "RequestTimeoutException" => {
            let mut tmp: crate::error::RequestTimeoutException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::InvokeScreenAutomationError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::InvokeScreenAutomationError {
                meta: generic,
                kind: crate::error::InvokeScreenAutomationErrorKind::RequestTimeoutException(tmp),
            }
        }
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::InvokeScreenAutomationError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::InvokeScreenAutomationError {
                meta: generic,
                kind: crate::error::InvokeScreenAutomationErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "ServiceUnavailableException" => {
            let mut tmp: crate::error::ServiceUnavailableException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::InvokeScreenAutomationError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::InvokeScreenAutomationError {
                meta: generic,
                kind:
                    crate::error::InvokeScreenAutomationErrorKind::ServiceUnavailableException(tmp),
            }
        }
        "ThrottlingException" => {
            let mut tmp: crate::error::ThrottlingException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::InvokeScreenAutomationError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::InvokeScreenAutomationError {
                meta: generic,
                kind: crate::error::InvokeScreenAutomationErrorKind::ThrottlingException(tmp),
            }
        }
        "ValidationException" => {
            let mut tmp: crate::error::ValidationException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::InvokeScreenAutomationError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::InvokeScreenAutomationError {
                meta: generic,
                kind: crate::error::InvokeScreenAutomationErrorKind::ValidationException(tmp),
            }
        }
        _ => crate::error::InvokeScreenAutomationError::generic(generic),
    })
}

pub fn parse_invoke_screen_automation_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::InvokeScreenAutomationOutput, crate::error::InvokeScreenAutomationError> {
    smithy_json::from_body(response.body()).map_err(crate::error::InvokeScreenAutomationError::unhandled)
}

pub fn parse_list_tables_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListTablesOutput, crate::error::ListTablesError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::ListTablesError::unhandled(generic)),
    };
    Err(match error_code {
        "AccessDeniedException" => {
            let mut tmp: crate::error::AccessDeniedException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListTablesError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListTablesError {
                meta: generic,
                kind: crate::error::ListTablesErrorKind::AccessDeniedException(tmp),
            }
        }
        "InternalServerException" => {
            let mut tmp: crate::error::InternalServerException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListTablesError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListTablesError {
                meta: generic,
                kind: crate::error::ListTablesErrorKind::InternalServerException(tmp),
            }
        }
        "RequestTimeoutException" => {
            let mut tmp: crate::error::RequestTimeoutException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListTablesError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListTablesError {
                meta: generic,
                kind: crate::error::ListTablesErrorKind::RequestTimeoutException(tmp),
            }
        }
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListTablesError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListTablesError {
                meta: generic,
                kind: crate::error::ListTablesErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "ServiceUnavailableException" => {
            let mut tmp: crate::error::ServiceUnavailableException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListTablesError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListTablesError {
                meta: generic,
                kind: crate::error::ListTablesErrorKind::ServiceUnavailableException(tmp),
            }
        }
        "ThrottlingException" => {
            let mut tmp: crate::error::ThrottlingException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListTablesError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListTablesError {
                meta: generic,
                kind: crate::error::ListTablesErrorKind::ThrottlingException(tmp),
            }
        }
        "ValidationException" => {
            let mut tmp: crate::error::ValidationException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListTablesError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListTablesError {
                meta: generic,
                kind: crate::error::ListTablesErrorKind::ValidationException(tmp),
            }
        }
        _ => crate::error::ListTablesError::generic(generic),
    })
}

pub fn parse_list_tables_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListTablesOutput, crate::error::ListTablesError> {
    smithy_json::from_body(response.body()).map_err(crate::error::ListTablesError::unhandled)
}

pub fn parse_list_table_columns_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListTableColumnsOutput, crate::error::ListTableColumnsError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::ListTableColumnsError::unhandled(generic)),
    };
    Err(match error_code {
        "AccessDeniedException" => {
            let mut tmp: crate::error::AccessDeniedException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListTableColumnsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListTableColumnsError {
                meta: generic,
                kind: crate::error::ListTableColumnsErrorKind::AccessDeniedException(tmp),
            }
        }
        "InternalServerException" => {
            let mut tmp: crate::error::InternalServerException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListTableColumnsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListTableColumnsError {
                meta: generic,
                kind: crate::error::ListTableColumnsErrorKind::InternalServerException(tmp),
            }
        }
        "RequestTimeoutException" => {
            let mut tmp: crate::error::RequestTimeoutException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListTableColumnsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListTableColumnsError {
                meta: generic,
                kind: crate::error::ListTableColumnsErrorKind::RequestTimeoutException(tmp),
            }
        }
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListTableColumnsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListTableColumnsError {
                meta: generic,
                kind: crate::error::ListTableColumnsErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "ServiceUnavailableException" => {
            let mut tmp: crate::error::ServiceUnavailableException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListTableColumnsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListTableColumnsError {
                meta: generic,
                kind: crate::error::ListTableColumnsErrorKind::ServiceUnavailableException(tmp),
            }
        }
        "ThrottlingException" => {
            let mut tmp: crate::error::ThrottlingException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListTableColumnsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListTableColumnsError {
                meta: generic,
                kind: crate::error::ListTableColumnsErrorKind::ThrottlingException(tmp),
            }
        }
        "ValidationException" => {
            let mut tmp: crate::error::ValidationException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListTableColumnsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListTableColumnsError {
                meta: generic,
                kind: crate::error::ListTableColumnsErrorKind::ValidationException(tmp),
            }
        }
        _ => crate::error::ListTableColumnsError::generic(generic),
    })
}

pub fn parse_list_table_columns_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListTableColumnsOutput, crate::error::ListTableColumnsError> {
    smithy_json::from_body(response.body()).map_err(crate::error::ListTableColumnsError::unhandled)
}

pub fn parse_list_table_rows_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListTableRowsOutput, crate::error::ListTableRowsError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::ListTableRowsError::unhandled(generic)),
    };
    Err(match error_code {
        "AccessDeniedException" => {
            let mut tmp: crate::error::AccessDeniedException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListTableRowsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListTableRowsError {
                meta: generic,
                kind: crate::error::ListTableRowsErrorKind::AccessDeniedException(tmp),
            }
        }
        "InternalServerException" => {
            let mut tmp: crate::error::InternalServerException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListTableRowsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListTableRowsError {
                meta: generic,
                kind: crate::error::ListTableRowsErrorKind::InternalServerException(tmp),
            }
        }
        "RequestTimeoutException" => {
            let mut tmp: crate::error::RequestTimeoutException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListTableRowsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListTableRowsError {
                meta: generic,
                kind: crate::error::ListTableRowsErrorKind::RequestTimeoutException(tmp),
            }
        }
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListTableRowsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListTableRowsError {
                meta: generic,
                kind: crate::error::ListTableRowsErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "ServiceUnavailableException" => {
            let mut tmp: crate::error::ServiceUnavailableException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListTableRowsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListTableRowsError {
                meta: generic,
                kind: crate::error::ListTableRowsErrorKind::ServiceUnavailableException(tmp),
            }
        }
        "ThrottlingException" => {
            let mut tmp: crate::error::ThrottlingException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListTableRowsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListTableRowsError {
                meta: generic,
                kind: crate::error::ListTableRowsErrorKind::ThrottlingException(tmp),
            }
        }
        "ValidationException" => {
            let mut tmp: crate::error::ValidationException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListTableRowsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListTableRowsError {
                meta: generic,
                kind: crate::error::ListTableRowsErrorKind::ValidationException(tmp),
            }
        }
        _ => crate::error::ListTableRowsError::generic(generic),
    })
}

pub fn parse_list_table_rows_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ListTableRowsOutput, crate::error::ListTableRowsError> {
    smithy_json::from_body(response.body()).map_err(crate::error::ListTableRowsError::unhandled)
}

pub fn parse_query_table_rows_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::QueryTableRowsOutput, crate::error::QueryTableRowsError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::QueryTableRowsError::unhandled(generic)),
    };
    Err(match error_code {
        "AccessDeniedException" => {
            let mut tmp: crate::error::AccessDeniedException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::QueryTableRowsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::QueryTableRowsError {
                meta: generic,
                kind: crate::error::QueryTableRowsErrorKind::AccessDeniedException(tmp),
            }
        }
        "InternalServerException" => {
            let mut tmp: crate::error::InternalServerException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::QueryTableRowsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::QueryTableRowsError {
                meta: generic,
                kind: crate::error::QueryTableRowsErrorKind::InternalServerException(tmp),
            }
        }
        "RequestTimeoutException" => {
            let mut tmp: crate::error::RequestTimeoutException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::QueryTableRowsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::QueryTableRowsError {
                meta: generic,
                kind: crate::error::QueryTableRowsErrorKind::RequestTimeoutException(tmp),
            }
        }
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::QueryTableRowsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::QueryTableRowsError {
                meta: generic,
                kind: crate::error::QueryTableRowsErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "ServiceUnavailableException" => {
            let mut tmp: crate::error::ServiceUnavailableException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::QueryTableRowsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::QueryTableRowsError {
                meta: generic,
                kind: crate::error::QueryTableRowsErrorKind::ServiceUnavailableException(tmp),
            }
        }
        "ThrottlingException" => {
            let mut tmp: crate::error::ThrottlingException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::QueryTableRowsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::QueryTableRowsError {
                meta: generic,
                kind: crate::error::QueryTableRowsErrorKind::ThrottlingException(tmp),
            }
        }
        "ValidationException" => {
            let mut tmp: crate::error::ValidationException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::QueryTableRowsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::QueryTableRowsError {
                meta: generic,
                kind: crate::error::QueryTableRowsErrorKind::ValidationException(tmp),
            }
        }
        _ => crate::error::QueryTableRowsError::generic(generic),
    })
}

pub fn parse_query_table_rows_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::QueryTableRowsOutput, crate::error::QueryTableRowsError> {
    smithy_json::from_body(response.body()).map_err(crate::error::QueryTableRowsError::unhandled)
}

pub fn parse_batch_create_table_rows_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::BatchCreateTableRowsOutput, crate::error::BatchCreateTableRowsError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::BatchCreateTableRowsError::unhandled(generic)),
    };
    Err(match error_code {
        "ServiceQuotaExceededException" => {
            let mut tmp: crate::error::ServiceQuotaExceededException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::BatchCreateTableRowsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::BatchCreateTableRowsError {
                meta: generic,
                kind:
                    crate::error::BatchCreateTableRowsErrorKind::ServiceQuotaExceededException(tmp),
            }
        }
        "AccessDeniedException" => {
            let mut tmp: crate::error::AccessDeniedException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::BatchCreateTableRowsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::BatchCreateTableRowsError {
                meta: generic,
                kind: crate::error::BatchCreateTableRowsErrorKind::AccessDeniedException(tmp),
            }
        }
        "InternalServerException" => {
            let mut tmp: crate::error::InternalServerException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::BatchCreateTableRowsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::BatchCreateTableRowsError {
                meta: generic,
                kind: crate::error::BatchCreateTableRowsErrorKind::InternalServerException(tmp),
            }
        }
        "RequestTimeoutException" => {
            let mut tmp: crate::error::RequestTimeoutException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::BatchCreateTableRowsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::BatchCreateTableRowsError {
                meta: generic,
                kind: crate::error::BatchCreateTableRowsErrorKind::RequestTimeoutException(tmp),
            }
        }
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::BatchCreateTableRowsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::BatchCreateTableRowsError {
                meta: generic,
                kind: crate::error::BatchCreateTableRowsErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "ServiceUnavailableException" => {
            let mut tmp: crate::error::ServiceUnavailableException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::BatchCreateTableRowsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::BatchCreateTableRowsError {
                meta: generic,
                kind: crate::error::BatchCreateTableRowsErrorKind::ServiceUnavailableException(tmp),
            }
        }
        "ThrottlingException" => {
            let mut tmp: crate::error::ThrottlingException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::BatchCreateTableRowsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::BatchCreateTableRowsError {
                meta: generic,
                kind: crate::error::BatchCreateTableRowsErrorKind::ThrottlingException(tmp),
            }
        }
        "ValidationException" => {
            let mut tmp: crate::error::ValidationException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::BatchCreateTableRowsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::BatchCreateTableRowsError {
                meta: generic,
                kind: crate::error::BatchCreateTableRowsErrorKind::ValidationException(tmp),
            }
        }
        _ => crate::error::BatchCreateTableRowsError::generic(generic),
    })
}

pub fn parse_batch_create_table_rows_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::BatchCreateTableRowsOutput, crate::error::BatchCreateTableRowsError> {
    smithy_json::from_body(response.body()).map_err(crate::error::BatchCreateTableRowsError::unhandled)
}

pub fn parse_batch_delete_table_rows_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::BatchDeleteTableRowsOutput, crate::error::BatchDeleteTableRowsError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::BatchDeleteTableRowsError::unhandled(generic)),
    };
    Err(match error_code {
        "AccessDeniedException" => {
            let mut tmp: crate::error::AccessDeniedException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::BatchDeleteTableRowsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::BatchDeleteTableRowsError {
                meta: generic,
                kind: crate::error::BatchDeleteTableRowsErrorKind::AccessDeniedException(tmp),
            }
        }
        "InternalServerException" => {
            let mut tmp: crate::error::InternalServerException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::BatchDeleteTableRowsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::BatchDeleteTableRowsError {
                meta: generic,
                kind: crate::error::BatchDeleteTableRowsErrorKind::InternalServerException(tmp),
            }
        }
        "RequestTimeoutException" => {
            let mut tmp: crate::error::RequestTimeoutException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::BatchDeleteTableRowsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::BatchDeleteTableRowsError {
                meta: generic,
                kind: crate::error::BatchDeleteTableRowsErrorKind::RequestTimeoutException(tmp),
            }
        }
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::BatchDeleteTableRowsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::BatchDeleteTableRowsError {
                meta: generic,
                kind: crate::error::BatchDeleteTableRowsErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "ServiceUnavailableException" => {
            let mut tmp: crate::error::ServiceUnavailableException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::BatchDeleteTableRowsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::BatchDeleteTableRowsError {
                meta: generic,
                kind: crate::error::BatchDeleteTableRowsErrorKind::ServiceUnavailableException(tmp),
            }
        }
        "ThrottlingException" => {
            let mut tmp: crate::error::ThrottlingException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::BatchDeleteTableRowsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::BatchDeleteTableRowsError {
                meta: generic,
                kind: crate::error::BatchDeleteTableRowsErrorKind::ThrottlingException(tmp),
            }
        }
        "ValidationException" => {
            let mut tmp: crate::error::ValidationException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::BatchDeleteTableRowsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::BatchDeleteTableRowsError {
                meta: generic,
                kind: crate::error::BatchDeleteTableRowsErrorKind::ValidationException(tmp),
            }
        }
        _ => crate::error::BatchDeleteTableRowsError::generic(generic),
    })
}

pub fn parse_batch_delete_table_rows_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::BatchDeleteTableRowsOutput, crate::error::BatchDeleteTableRowsError> {
    smithy_json::from_body(response.body()).map_err(crate::error::BatchDeleteTableRowsError::unhandled)
}

pub fn parse_batch_update_table_rows_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::BatchUpdateTableRowsOutput, crate::error::BatchUpdateTableRowsError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::BatchUpdateTableRowsError::unhandled(generic)),
    };
    Err(match error_code {
        "AccessDeniedException" => {
            let mut tmp: crate::error::AccessDeniedException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::BatchUpdateTableRowsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::BatchUpdateTableRowsError {
                meta: generic,
                kind: crate::error::BatchUpdateTableRowsErrorKind::AccessDeniedException(tmp),
            }
        }
        "InternalServerException" => {
            let mut tmp: crate::error::InternalServerException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::BatchUpdateTableRowsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::BatchUpdateTableRowsError {
                meta: generic,
                kind: crate::error::BatchUpdateTableRowsErrorKind::InternalServerException(tmp),
            }
        }
        "RequestTimeoutException" => {
            let mut tmp: crate::error::RequestTimeoutException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::BatchUpdateTableRowsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::BatchUpdateTableRowsError {
                meta: generic,
                kind: crate::error::BatchUpdateTableRowsErrorKind::RequestTimeoutException(tmp),
            }
        }
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::BatchUpdateTableRowsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::BatchUpdateTableRowsError {
                meta: generic,
                kind: crate::error::BatchUpdateTableRowsErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "ServiceUnavailableException" => {
            let mut tmp: crate::error::ServiceUnavailableException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::BatchUpdateTableRowsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::BatchUpdateTableRowsError {
                meta: generic,
                kind: crate::error::BatchUpdateTableRowsErrorKind::ServiceUnavailableException(tmp),
            }
        }
        "ThrottlingException" => {
            let mut tmp: crate::error::ThrottlingException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::BatchUpdateTableRowsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::BatchUpdateTableRowsError {
                meta: generic,
                kind: crate::error::BatchUpdateTableRowsErrorKind::ThrottlingException(tmp),
            }
        }
        "ValidationException" => {
            let mut tmp: crate::error::ValidationException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::BatchUpdateTableRowsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::BatchUpdateTableRowsError {
                meta: generic,
                kind: crate::error::BatchUpdateTableRowsErrorKind::ValidationException(tmp),
            }
        }
        _ => crate::error::BatchUpdateTableRowsError::generic(generic),
    })
}

pub fn parse_batch_update_table_rows_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::BatchUpdateTableRowsOutput, crate::error::BatchUpdateTableRowsError> {
    smithy_json::from_body(response.body()).map_err(crate::error::BatchUpdateTableRowsError::unhandled)
}

pub fn parse_start_table_data_import_job_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::StartTableDataImportJobOutput, crate::error::StartTableDataImportJobError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::StartTableDataImportJobError::unhandled(generic)),
    };
    Err(match error_code {
        "AccessDeniedException" => {
            let mut tmp: crate::error::AccessDeniedException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::StartTableDataImportJobError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::StartTableDataImportJobError {
                meta: generic,
                kind: crate::error::StartTableDataImportJobErrorKind::AccessDeniedException(tmp),
            }
        }
        "InternalServerException" => {
            let mut tmp: crate::error::InternalServerException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::StartTableDataImportJobError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::StartTableDataImportJobError {
                meta: generic,
                kind: crate::error::StartTableDataImportJobErrorKind::InternalServerException(tmp),
            }
        }
        "RequestTimeoutException" => {
            let mut tmp: crate::error::RequestTimeoutException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::StartTableDataImportJobError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::StartTableDataImportJobError {
                meta: generic,
                kind: crate::error::StartTableDataImportJobErrorKind::RequestTimeoutException(tmp),
            }
        }
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::StartTableDataImportJobError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::StartTableDataImportJobError {
                meta: generic,
                kind:
                    crate::error::StartTableDataImportJobErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "ServiceUnavailableException" => {
            let mut tmp: crate::error::ServiceUnavailableException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::StartTableDataImportJobError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::StartTableDataImportJobError {
                meta: generic,
                kind:
                    crate::error::StartTableDataImportJobErrorKind::ServiceUnavailableException(tmp),
            }
        }
        "ThrottlingException" => {
            let mut tmp: crate::error::ThrottlingException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::StartTableDataImportJobError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::StartTableDataImportJobError {
                meta: generic,
                kind: crate::error::StartTableDataImportJobErrorKind::ThrottlingException(tmp),
            }
        }
        "ValidationException" => {
            let mut tmp: crate::error::ValidationException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::StartTableDataImportJobError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::StartTableDataImportJobError {
                meta: generic,
                kind: crate::error::StartTableDataImportJobErrorKind::ValidationException(tmp),
            }
        }
        _ => crate::error::StartTableDataImportJobError::generic(generic),
    })
}

pub fn parse_start_table_data_import_job_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::StartTableDataImportJobOutput, crate::error::StartTableDataImportJobError> {
    smithy_json::from_body(response.body()).map_err(crate::error::StartTableDataImportJobError::unhandled)
}

pub fn parse_describe_table_data_import_job_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeTableDataImportJobOutput, crate::error::DescribeTableDataImportJobError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DescribeTableDataImportJobError::unhandled(generic)),
    };
    Err(match error_code {
        "AccessDeniedException" => {
            let mut tmp: crate::error::AccessDeniedException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeTableDataImportJobError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeTableDataImportJobError {
                meta: generic,
                kind: crate::error::DescribeTableDataImportJobErrorKind::AccessDeniedException(tmp),
            }
        }
        "InternalServerException" => {
            let mut tmp: crate::error::InternalServerException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeTableDataImportJobError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeTableDataImportJobError {
                meta: generic,
                kind:
                    crate::error::DescribeTableDataImportJobErrorKind::InternalServerException(tmp),
            }
        }
        "RequestTimeoutException" => {
            let mut tmp: crate::error::RequestTimeoutException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeTableDataImportJobError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeTableDataImportJobError {
                meta: generic,
                kind:
                    crate::error::DescribeTableDataImportJobErrorKind::RequestTimeoutException(tmp),
            }
        }
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeTableDataImportJobError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeTableDataImportJobError {
                meta: generic,
                kind:
                    crate::error::DescribeTableDataImportJobErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "ServiceUnavailableException" => {
            let mut tmp: crate::error::ServiceUnavailableException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeTableDataImportJobError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeTableDataImportJobError {
                meta: generic,
                kind:
                    crate::error::DescribeTableDataImportJobErrorKind::ServiceUnavailableException(tmp),
            }
        }
        "ThrottlingException" => {
            let mut tmp: crate::error::ThrottlingException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeTableDataImportJobError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeTableDataImportJobError {
                meta: generic,
                kind: crate::error::DescribeTableDataImportJobErrorKind::ThrottlingException(tmp),
            }
        }
        "ValidationException" => {
            let mut tmp: crate::error::ValidationException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeTableDataImportJobError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeTableDataImportJobError {
                meta: generic,
                kind: crate::error::DescribeTableDataImportJobErrorKind::ValidationException(tmp),
            }
        }
        _ => crate::error::DescribeTableDataImportJobError::generic(generic),
    })
}

pub fn parse_describe_table_data_import_job_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeTableDataImportJobOutput, crate::error::DescribeTableDataImportJobError> {
    smithy_json::from_body(response.body()).map_err(crate::error::DescribeTableDataImportJobError::unhandled)
}
