/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub fn parse_batch_get_item_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::BatchGetItemOutput, crate::error::BatchGetItemError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::BatchGetItemError::unhandled(generic)),
    };
    Err(match error_code {
        "ProvisionedThroughputExceededException" => {
            let mut tmp: crate::error::ProvisionedThroughputExceededException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::BatchGetItemError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::BatchGetItemError {
                meta: generic,
                kind:
                    crate::error::BatchGetItemErrorKind::ProvisionedThroughputExceededException(tmp),
            }
        }
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::BatchGetItemError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::BatchGetItemError {
                meta: generic,
                kind: crate::error::BatchGetItemErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "RequestLimitExceeded" => {
            let mut tmp: crate::error::RequestLimitExceeded = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::BatchGetItemError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::BatchGetItemError {
                meta: generic,
                kind: crate::error::BatchGetItemErrorKind::RequestLimitExceeded(tmp),
            }
        }
        "InternalServerError" => {
            let mut tmp: crate::error::InternalServerError = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::BatchGetItemError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::BatchGetItemError {
                meta: generic,
                kind: crate::error::BatchGetItemErrorKind::InternalServerError(tmp),
            }
        }
        _ => crate::error::BatchGetItemError::generic(generic),
    })
}

pub fn parse_batch_get_item_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::BatchGetItemOutput, crate::error::BatchGetItemError> {
    smithy_json::from_body(response.body()).map_err(crate::error::BatchGetItemError::unhandled)
}

pub fn parse_batch_write_item_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::BatchWriteItemOutput, crate::error::BatchWriteItemError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::BatchWriteItemError::unhandled(generic)),
    };
    Err(match error_code {
        "ProvisionedThroughputExceededException" => {
            let mut tmp: crate::error::ProvisionedThroughputExceededException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::BatchWriteItemError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::BatchWriteItemError {
                meta: generic,
                kind:
                    crate::error::BatchWriteItemErrorKind::ProvisionedThroughputExceededException(tmp),
            }
        }
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::BatchWriteItemError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::BatchWriteItemError {
                meta: generic,
                kind: crate::error::BatchWriteItemErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "ItemCollectionSizeLimitExceededException" => {
            let mut tmp: crate::error::ItemCollectionSizeLimitExceededException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::BatchWriteItemError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::BatchWriteItemError {
                meta: generic,
                kind:
                    crate::error::BatchWriteItemErrorKind::ItemCollectionSizeLimitExceededException(tmp),
            }
        }
        "RequestLimitExceeded" => {
            let mut tmp: crate::error::RequestLimitExceeded = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::BatchWriteItemError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::BatchWriteItemError {
                meta: generic,
                kind: crate::error::BatchWriteItemErrorKind::RequestLimitExceeded(tmp),
            }
        }
        "InternalServerError" => {
            let mut tmp: crate::error::InternalServerError = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::BatchWriteItemError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::BatchWriteItemError {
                meta: generic,
                kind: crate::error::BatchWriteItemErrorKind::InternalServerError(tmp),
            }
        }
        _ => crate::error::BatchWriteItemError::generic(generic),
    })
}

pub fn parse_batch_write_item_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::BatchWriteItemOutput, crate::error::BatchWriteItemError> {
    smithy_json::from_body(response.body()).map_err(crate::error::BatchWriteItemError::unhandled)
}

pub fn parse_create_table_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateTableOutput, crate::error::CreateTableError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::CreateTableError::unhandled(generic)),
    };
    Err(match error_code {
        "ResourceInUseException" => {
            let mut tmp: crate::error::ResourceInUseException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::CreateTableError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::CreateTableError {
                meta: generic,
                kind: crate::error::CreateTableErrorKind::ResourceInUseException(tmp),
            }
        }
        "LimitExceededException" => {
            let mut tmp: crate::error::LimitExceededException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::CreateTableError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::CreateTableError {
                meta: generic,
                kind: crate::error::CreateTableErrorKind::LimitExceededException(tmp),
            }
        }
        "InternalServerError" => {
            let mut tmp: crate::error::InternalServerError = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::CreateTableError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::CreateTableError {
                meta: generic,
                kind: crate::error::CreateTableErrorKind::InternalServerError(tmp),
            }
        }
        _ => crate::error::CreateTableError::generic(generic),
    })
}

pub fn parse_create_table_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::CreateTableOutput, crate::error::CreateTableError> {
    smithy_json::from_body(response.body()).map_err(crate::error::CreateTableError::unhandled)
}

pub fn parse_delete_item_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteItemOutput, crate::error::DeleteItemError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DeleteItemError::unhandled(generic)),
    };
    Err(match error_code {
        "ConditionalCheckFailedException" => {
            let mut tmp: crate::error::ConditionalCheckFailedException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DeleteItemError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DeleteItemError {
                meta: generic,
                kind: crate::error::DeleteItemErrorKind::ConditionalCheckFailedException(tmp),
            }
        }
        "ProvisionedThroughputExceededException" => {
            let mut tmp: crate::error::ProvisionedThroughputExceededException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DeleteItemError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DeleteItemError {
                meta: generic,
                kind:
                    crate::error::DeleteItemErrorKind::ProvisionedThroughputExceededException(tmp),
            }
        }
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DeleteItemError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DeleteItemError {
                meta: generic,
                kind: crate::error::DeleteItemErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "ItemCollectionSizeLimitExceededException" => {
            let mut tmp: crate::error::ItemCollectionSizeLimitExceededException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DeleteItemError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DeleteItemError {
                meta: generic,
                kind:
                    crate::error::DeleteItemErrorKind::ItemCollectionSizeLimitExceededException(tmp),
            }
        }
        "TransactionConflictException" => {
            let mut tmp: crate::error::TransactionConflictException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DeleteItemError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DeleteItemError {
                meta: generic,
                kind: crate::error::DeleteItemErrorKind::TransactionConflictException(tmp),
            }
        }
        "RequestLimitExceeded" => {
            let mut tmp: crate::error::RequestLimitExceeded = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DeleteItemError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DeleteItemError {
                meta: generic,
                kind: crate::error::DeleteItemErrorKind::RequestLimitExceeded(tmp),
            }
        }
        "InternalServerError" => {
            let mut tmp: crate::error::InternalServerError = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DeleteItemError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DeleteItemError {
                meta: generic,
                kind: crate::error::DeleteItemErrorKind::InternalServerError(tmp),
            }
        }
        _ => crate::error::DeleteItemError::generic(generic),
    })
}

pub fn parse_delete_item_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteItemOutput, crate::error::DeleteItemError> {
    smithy_json::from_body(response.body()).map_err(crate::error::DeleteItemError::unhandled)
}

pub fn parse_delete_table_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteTableOutput, crate::error::DeleteTableError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DeleteTableError::unhandled(generic)),
    };
    Err(match error_code {
        "ResourceInUseException" => {
            let mut tmp: crate::error::ResourceInUseException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DeleteTableError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DeleteTableError {
                meta: generic,
                kind: crate::error::DeleteTableErrorKind::ResourceInUseException(tmp),
            }
        }
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DeleteTableError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DeleteTableError {
                meta: generic,
                kind: crate::error::DeleteTableErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "LimitExceededException" => {
            let mut tmp: crate::error::LimitExceededException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DeleteTableError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DeleteTableError {
                meta: generic,
                kind: crate::error::DeleteTableErrorKind::LimitExceededException(tmp),
            }
        }
        "InternalServerError" => {
            let mut tmp: crate::error::InternalServerError = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DeleteTableError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DeleteTableError {
                meta: generic,
                kind: crate::error::DeleteTableErrorKind::InternalServerError(tmp),
            }
        }
        _ => crate::error::DeleteTableError::generic(generic),
    })
}

pub fn parse_delete_table_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DeleteTableOutput, crate::error::DeleteTableError> {
    smithy_json::from_body(response.body()).map_err(crate::error::DeleteTableError::unhandled)
}

pub fn parse_describe_table_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeTableOutput, crate::error::DescribeTableError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DescribeTableError::unhandled(generic)),
    };
    Err(match error_code {
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeTableError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeTableError {
                meta: generic,
                kind: crate::error::DescribeTableErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "InternalServerError" => {
            let mut tmp: crate::error::InternalServerError = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeTableError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeTableError {
                meta: generic,
                kind: crate::error::DescribeTableErrorKind::InternalServerError(tmp),
            }
        }
        _ => crate::error::DescribeTableError::generic(generic),
    })
}

pub fn parse_describe_table_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeTableOutput, crate::error::DescribeTableError> {
    smithy_json::from_body(response.body()).map_err(crate::error::DescribeTableError::unhandled)
}

pub fn parse_describe_limits_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeLimitsOutput, crate::error::DescribeLimitsError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DescribeLimitsError::unhandled(generic)),
    };
    Err(match error_code {
        "InternalServerError" => {
            let mut tmp: crate::error::InternalServerError = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeLimitsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeLimitsError {
                meta: generic,
                kind: crate::error::DescribeLimitsErrorKind::InternalServerError(tmp),
            }
        }
        _ => crate::error::DescribeLimitsError::generic(generic),
    })
}

pub fn parse_describe_limits_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeLimitsOutput, crate::error::DescribeLimitsError> {
    smithy_json::from_body(response.body()).map_err(crate::error::DescribeLimitsError::unhandled)
}

pub fn parse_describe_time_to_live_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeTimeToLiveOutput, crate::error::DescribeTimeToLiveError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DescribeTimeToLiveError::unhandled(generic)),
    };
    Err(match error_code {
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeTimeToLiveError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeTimeToLiveError {
                meta: generic,
                kind: crate::error::DescribeTimeToLiveErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "InternalServerError" => {
            let mut tmp: crate::error::InternalServerError = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeTimeToLiveError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeTimeToLiveError {
                meta: generic,
                kind: crate::error::DescribeTimeToLiveErrorKind::InternalServerError(tmp),
            }
        }
        _ => crate::error::DescribeTimeToLiveError::generic(generic),
    })
}

pub fn parse_describe_time_to_live_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeTimeToLiveOutput, crate::error::DescribeTimeToLiveError> {
    smithy_json::from_body(response.body()).map_err(crate::error::DescribeTimeToLiveError::unhandled)
}

pub fn parse_get_item_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetItemOutput, crate::error::GetItemError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::GetItemError::unhandled(generic)),
    };
    Err(match error_code {
        "ProvisionedThroughputExceededException" => {
            let mut tmp: crate::error::ProvisionedThroughputExceededException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::GetItemError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::GetItemError {
                meta: generic,
                kind: crate::error::GetItemErrorKind::ProvisionedThroughputExceededException(tmp),
            }
        }
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::GetItemError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::GetItemError {
                meta: generic,
                kind: crate::error::GetItemErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "RequestLimitExceeded" => {
            let mut tmp: crate::error::RequestLimitExceeded = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::GetItemError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::GetItemError {
                meta: generic,
                kind: crate::error::GetItemErrorKind::RequestLimitExceeded(tmp),
            }
        }
        "InternalServerError" => {
            let mut tmp: crate::error::InternalServerError = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::GetItemError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::GetItemError {
                meta: generic,
                kind: crate::error::GetItemErrorKind::InternalServerError(tmp),
            }
        }
        _ => crate::error::GetItemError::generic(generic),
    })
}

pub fn parse_get_item_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::GetItemOutput, crate::error::GetItemError> {
    smithy_json::from_body(response.body()).map_err(crate::error::GetItemError::unhandled)
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
        "InternalServerError" => {
            let mut tmp: crate::error::InternalServerError = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ListTablesError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ListTablesError {
                meta: generic,
                kind: crate::error::ListTablesErrorKind::InternalServerError(tmp),
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

pub fn parse_put_item_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::PutItemOutput, crate::error::PutItemError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::PutItemError::unhandled(generic)),
    };
    Err(match error_code {
        "ConditionalCheckFailedException" => {
            let mut tmp: crate::error::ConditionalCheckFailedException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::PutItemError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::PutItemError {
                meta: generic,
                kind: crate::error::PutItemErrorKind::ConditionalCheckFailedException(tmp),
            }
        }
        "ProvisionedThroughputExceededException" => {
            let mut tmp: crate::error::ProvisionedThroughputExceededException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::PutItemError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::PutItemError {
                meta: generic,
                kind: crate::error::PutItemErrorKind::ProvisionedThroughputExceededException(tmp),
            }
        }
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::PutItemError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::PutItemError {
                meta: generic,
                kind: crate::error::PutItemErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "ItemCollectionSizeLimitExceededException" => {
            let mut tmp: crate::error::ItemCollectionSizeLimitExceededException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::PutItemError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::PutItemError {
                meta: generic,
                kind: crate::error::PutItemErrorKind::ItemCollectionSizeLimitExceededException(tmp),
            }
        }
        "TransactionConflictException" => {
            let mut tmp: crate::error::TransactionConflictException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::PutItemError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::PutItemError {
                meta: generic,
                kind: crate::error::PutItemErrorKind::TransactionConflictException(tmp),
            }
        }
        "RequestLimitExceeded" => {
            let mut tmp: crate::error::RequestLimitExceeded = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::PutItemError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::PutItemError {
                meta: generic,
                kind: crate::error::PutItemErrorKind::RequestLimitExceeded(tmp),
            }
        }
        "InternalServerError" => {
            let mut tmp: crate::error::InternalServerError = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::PutItemError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::PutItemError {
                meta: generic,
                kind: crate::error::PutItemErrorKind::InternalServerError(tmp),
            }
        }
        _ => crate::error::PutItemError::generic(generic),
    })
}

pub fn parse_put_item_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::PutItemOutput, crate::error::PutItemError> {
    smithy_json::from_body(response.body()).map_err(crate::error::PutItemError::unhandled)
}

pub fn parse_query_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::QueryOutput, crate::error::QueryError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::QueryError::unhandled(generic)),
    };
    Err(match error_code {
        "ProvisionedThroughputExceededException" => {
            let mut tmp: crate::error::ProvisionedThroughputExceededException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::QueryError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::QueryError {
                meta: generic,
                kind: crate::error::QueryErrorKind::ProvisionedThroughputExceededException(tmp),
            }
        }
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::QueryError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::QueryError {
                meta: generic,
                kind: crate::error::QueryErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "RequestLimitExceeded" => {
            let mut tmp: crate::error::RequestLimitExceeded = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::QueryError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::QueryError {
                meta: generic,
                kind: crate::error::QueryErrorKind::RequestLimitExceeded(tmp),
            }
        }
        "InternalServerError" => {
            let mut tmp: crate::error::InternalServerError = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::QueryError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::QueryError {
                meta: generic,
                kind: crate::error::QueryErrorKind::InternalServerError(tmp),
            }
        }
        _ => crate::error::QueryError::generic(generic),
    })
}

pub fn parse_query_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::QueryOutput, crate::error::QueryError> {
    smithy_json::from_body(response.body()).map_err(crate::error::QueryError::unhandled)
}

pub fn parse_scan_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ScanOutput, crate::error::ScanError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::ScanError::unhandled(generic)),
    };
    Err(match error_code {
        "ProvisionedThroughputExceededException" => {
            let mut tmp: crate::error::ProvisionedThroughputExceededException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ScanError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ScanError {
                meta: generic,
                kind: crate::error::ScanErrorKind::ProvisionedThroughputExceededException(tmp),
            }
        }
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ScanError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ScanError {
                meta: generic,
                kind: crate::error::ScanErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "RequestLimitExceeded" => {
            let mut tmp: crate::error::RequestLimitExceeded = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ScanError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ScanError {
                meta: generic,
                kind: crate::error::ScanErrorKind::RequestLimitExceeded(tmp),
            }
        }
        "InternalServerError" => {
            let mut tmp: crate::error::InternalServerError = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::ScanError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::ScanError {
                meta: generic,
                kind: crate::error::ScanErrorKind::InternalServerError(tmp),
            }
        }
        _ => crate::error::ScanError::generic(generic),
    })
}

pub fn parse_scan_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::ScanOutput, crate::error::ScanError> {
    smithy_json::from_body(response.body()).map_err(crate::error::ScanError::unhandled)
}

pub fn parse_transact_get_items_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::TransactGetItemsOutput, crate::error::TransactGetItemsError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::TransactGetItemsError::unhandled(generic)),
    };
    Err(match error_code {
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::TransactGetItemsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::TransactGetItemsError {
                meta: generic,
                kind: crate::error::TransactGetItemsErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "TransactionCanceledException" => {
            let mut tmp: crate::error::TransactionCanceledException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::TransactGetItemsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::TransactGetItemsError {
                meta: generic,
                kind: crate::error::TransactGetItemsErrorKind::TransactionCanceledException(tmp),
            }
        }
        "ProvisionedThroughputExceededException" => {
            let mut tmp: crate::error::ProvisionedThroughputExceededException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::TransactGetItemsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::TransactGetItemsError {
                meta: generic,
                kind:
                    crate::error::TransactGetItemsErrorKind::ProvisionedThroughputExceededException(tmp),
            }
        }
        "RequestLimitExceeded" => {
            let mut tmp: crate::error::RequestLimitExceeded = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::TransactGetItemsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::TransactGetItemsError {
                meta: generic,
                kind: crate::error::TransactGetItemsErrorKind::RequestLimitExceeded(tmp),
            }
        }
        "InternalServerError" => {
            let mut tmp: crate::error::InternalServerError = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::TransactGetItemsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::TransactGetItemsError {
                meta: generic,
                kind: crate::error::TransactGetItemsErrorKind::InternalServerError(tmp),
            }
        }
        _ => crate::error::TransactGetItemsError::generic(generic),
    })
}

pub fn parse_transact_get_items_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::TransactGetItemsOutput, crate::error::TransactGetItemsError> {
    smithy_json::from_body(response.body()).map_err(crate::error::TransactGetItemsError::unhandled)
}

pub fn parse_transact_write_items_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::TransactWriteItemsOutput, crate::error::TransactWriteItemsError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::TransactWriteItemsError::unhandled(generic)),
    };
    Err(match error_code {
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::TransactWriteItemsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::TransactWriteItemsError {
                meta: generic,
                kind: crate::error::TransactWriteItemsErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "TransactionCanceledException" => {
            let mut tmp: crate::error::TransactionCanceledException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::TransactWriteItemsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::TransactWriteItemsError {
                meta: generic,
                kind: crate::error::TransactWriteItemsErrorKind::TransactionCanceledException(tmp),
            }
        }
        "TransactionInProgressException" => {
            let mut tmp: crate::error::TransactionInProgressException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::TransactWriteItemsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::TransactWriteItemsError {
                meta: generic,
                kind:
                    crate::error::TransactWriteItemsErrorKind::TransactionInProgressException(tmp),
            }
        }
        "IdempotentParameterMismatchException" => {
            let mut tmp: crate::error::IdempotentParameterMismatchException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::TransactWriteItemsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::TransactWriteItemsError {
                meta: generic,
                kind:
                    crate::error::TransactWriteItemsErrorKind::IdempotentParameterMismatchException(tmp),
            }
        }
        "ProvisionedThroughputExceededException" => {
            let mut tmp: crate::error::ProvisionedThroughputExceededException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::TransactWriteItemsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::TransactWriteItemsError {
                meta: generic,
                kind:
                    crate::error::TransactWriteItemsErrorKind::ProvisionedThroughputExceededException(tmp),
            }
        }
        "RequestLimitExceeded" => {
            let mut tmp: crate::error::RequestLimitExceeded = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::TransactWriteItemsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::TransactWriteItemsError {
                meta: generic,
                kind: crate::error::TransactWriteItemsErrorKind::RequestLimitExceeded(tmp),
            }
        }
        "InternalServerError" => {
            let mut tmp: crate::error::InternalServerError = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::TransactWriteItemsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::TransactWriteItemsError {
                meta: generic,
                kind: crate::error::TransactWriteItemsErrorKind::InternalServerError(tmp),
            }
        }
        _ => crate::error::TransactWriteItemsError::generic(generic),
    })
}

pub fn parse_transact_write_items_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::TransactWriteItemsOutput, crate::error::TransactWriteItemsError> {
    smithy_json::from_body(response.body()).map_err(crate::error::TransactWriteItemsError::unhandled)
}

pub fn parse_update_item_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateItemOutput, crate::error::UpdateItemError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::UpdateItemError::unhandled(generic)),
    };
    Err(match error_code {
        "ConditionalCheckFailedException" => {
            let mut tmp: crate::error::ConditionalCheckFailedException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UpdateItemError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UpdateItemError {
                meta: generic,
                kind: crate::error::UpdateItemErrorKind::ConditionalCheckFailedException(tmp),
            }
        }
        "ProvisionedThroughputExceededException" => {
            let mut tmp: crate::error::ProvisionedThroughputExceededException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UpdateItemError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UpdateItemError {
                meta: generic,
                kind:
                    crate::error::UpdateItemErrorKind::ProvisionedThroughputExceededException(tmp),
            }
        }
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UpdateItemError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UpdateItemError {
                meta: generic,
                kind: crate::error::UpdateItemErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "ItemCollectionSizeLimitExceededException" => {
            let mut tmp: crate::error::ItemCollectionSizeLimitExceededException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UpdateItemError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UpdateItemError {
                meta: generic,
                kind:
                    crate::error::UpdateItemErrorKind::ItemCollectionSizeLimitExceededException(tmp),
            }
        }
        "TransactionConflictException" => {
            let mut tmp: crate::error::TransactionConflictException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UpdateItemError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UpdateItemError {
                meta: generic,
                kind: crate::error::UpdateItemErrorKind::TransactionConflictException(tmp),
            }
        }
        "RequestLimitExceeded" => {
            let mut tmp: crate::error::RequestLimitExceeded = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UpdateItemError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UpdateItemError {
                meta: generic,
                kind: crate::error::UpdateItemErrorKind::RequestLimitExceeded(tmp),
            }
        }
        "InternalServerError" => {
            let mut tmp: crate::error::InternalServerError = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UpdateItemError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UpdateItemError {
                meta: generic,
                kind: crate::error::UpdateItemErrorKind::InternalServerError(tmp),
            }
        }
        _ => crate::error::UpdateItemError::generic(generic),
    })
}

pub fn parse_update_item_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateItemOutput, crate::error::UpdateItemError> {
    smithy_json::from_body(response.body()).map_err(crate::error::UpdateItemError::unhandled)
}

pub fn parse_update_table_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateTableOutput, crate::error::UpdateTableError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::UpdateTableError::unhandled(generic)),
    };
    Err(match error_code {
        "ResourceInUseException" => {
            let mut tmp: crate::error::ResourceInUseException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UpdateTableError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UpdateTableError {
                meta: generic,
                kind: crate::error::UpdateTableErrorKind::ResourceInUseException(tmp),
            }
        }
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UpdateTableError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UpdateTableError {
                meta: generic,
                kind: crate::error::UpdateTableErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "LimitExceededException" => {
            let mut tmp: crate::error::LimitExceededException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UpdateTableError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UpdateTableError {
                meta: generic,
                kind: crate::error::UpdateTableErrorKind::LimitExceededException(tmp),
            }
        }
        "InternalServerError" => {
            let mut tmp: crate::error::InternalServerError = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UpdateTableError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UpdateTableError {
                meta: generic,
                kind: crate::error::UpdateTableErrorKind::InternalServerError(tmp),
            }
        }
        _ => crate::error::UpdateTableError::generic(generic),
    })
}

pub fn parse_update_table_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateTableOutput, crate::error::UpdateTableError> {
    smithy_json::from_body(response.body()).map_err(crate::error::UpdateTableError::unhandled)
}

pub fn parse_update_time_to_live_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateTimeToLiveOutput, crate::error::UpdateTimeToLiveError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::UpdateTimeToLiveError::unhandled(generic)),
    };
    Err(match error_code {
        "ResourceInUseException" => {
            let mut tmp: crate::error::ResourceInUseException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UpdateTimeToLiveError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UpdateTimeToLiveError {
                meta: generic,
                kind: crate::error::UpdateTimeToLiveErrorKind::ResourceInUseException(tmp),
            }
        }
        "ResourceNotFoundException" => {
            let mut tmp: crate::error::ResourceNotFoundException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UpdateTimeToLiveError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UpdateTimeToLiveError {
                meta: generic,
                kind: crate::error::UpdateTimeToLiveErrorKind::ResourceNotFoundException(tmp),
            }
        }
        "LimitExceededException" => {
            let mut tmp: crate::error::LimitExceededException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UpdateTimeToLiveError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UpdateTimeToLiveError {
                meta: generic,
                kind: crate::error::UpdateTimeToLiveErrorKind::LimitExceededException(tmp),
            }
        }
        "InternalServerError" => {
            let mut tmp: crate::error::InternalServerError = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::UpdateTimeToLiveError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::UpdateTimeToLiveError {
                meta: generic,
                kind: crate::error::UpdateTimeToLiveErrorKind::InternalServerError(tmp),
            }
        }
        _ => crate::error::UpdateTimeToLiveError::generic(generic),
    })
}

pub fn parse_update_time_to_live_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::UpdateTimeToLiveOutput, crate::error::UpdateTimeToLiveError> {
    smithy_json::from_body(response.body()).map_err(crate::error::UpdateTimeToLiveError::unhandled)
}
