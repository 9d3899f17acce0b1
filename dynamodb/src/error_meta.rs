/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// All possible error types for this service
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum Error {
    ConditionalCheckFailedException(crate::error::ConditionalCheckFailedException),
    InternalServerError(crate::error::InternalServerError),
    ItemCollectionSizeLimitExceededException(crate::error::ItemCollectionSizeLimitExceededException),
    LimitExceededException(crate::error::LimitExceededException),
    ProvisionedThroughputExceededException(crate::error::ProvisionedThroughputExceededException),
    RequestLimitExceeded(crate::error::RequestLimitExceeded),
    ResourceInUseException(crate::error::ResourceInUseException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    TransactionConflictException(crate::error::TransactionConflictException),
    TransactionCanceledException(crate::error::TransactionCanceledException),
    TransactionInProgressException(crate::error::TransactionInProgressException),
    IdempotentParameterMismatchException(crate::error::IdempotentParameterMismatchException),
    /// An error that is not modeled, or a failure that happened before a response was read
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ConditionalCheckFailedException(inner) => std::fmt::Display::fmt(inner, f),
            Error::InternalServerError(inner) => std::fmt::Display::fmt(inner, f),
            Error::ItemCollectionSizeLimitExceededException(inner) => std::fmt::Display::fmt(inner, f),
            Error::LimitExceededException(inner) => std::fmt::Display::fmt(inner, f),
            Error::ProvisionedThroughputExceededException(inner) => std::fmt::Display::fmt(inner, f),
            Error::RequestLimitExceeded(inner) => std::fmt::Display::fmt(inner, f),
            Error::ResourceInUseException(inner) => std::fmt::Display::fmt(inner, f),
            Error::ResourceNotFoundException(inner) => std::fmt::Display::fmt(inner, f),
            Error::TransactionConflictException(inner) => std::fmt::Display::fmt(inner, f),
            Error::TransactionCanceledException(inner) => std::fmt::Display::fmt(inner, f),
            Error::TransactionInProgressException(inner) => std::fmt::Display::fmt(inner, f),
            Error::IdempotentParameterMismatchException(inner) => std::fmt::Display::fmt(inner, f),
            Error::Unhandled(inner) => std::fmt::Display::fmt(inner, f),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::BatchGetItemError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::BatchGetItemError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::BatchGetItemErrorKind::ProvisionedThroughputExceededException(inner) => Error::ProvisionedThroughputExceededException(inner),
                crate::error::BatchGetItemErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::BatchGetItemErrorKind::RequestLimitExceeded(inner) => Error::RequestLimitExceeded(inner),
                crate::error::BatchGetItemErrorKind::InternalServerError(inner) => Error::InternalServerError(inner),
                crate::error::BatchGetItemErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::BatchWriteItemError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::BatchWriteItemError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::BatchWriteItemErrorKind::ProvisionedThroughputExceededException(inner) => Error::ProvisionedThroughputExceededException(inner),
                crate::error::BatchWriteItemErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::BatchWriteItemErrorKind::ItemCollectionSizeLimitExceededException(inner) => Error::ItemCollectionSizeLimitExceededException(inner),
                crate::error::BatchWriteItemErrorKind::RequestLimitExceeded(inner) => Error::RequestLimitExceeded(inner),
                crate::error::BatchWriteItemErrorKind::InternalServerError(inner) => Error::InternalServerError(inner),
                crate::error::BatchWriteItemErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::CreateTableError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::CreateTableError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::CreateTableErrorKind::ResourceInUseException(inner) => Error::ResourceInUseException(inner),
                crate::error::CreateTableErrorKind::LimitExceededException(inner) => Error::LimitExceededException(inner),
                crate::error::CreateTableErrorKind::InternalServerError(inner) => Error::InternalServerError(inner),
                crate::error::CreateTableErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DeleteItemError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::DeleteItemError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DeleteItemErrorKind::ConditionalCheckFailedException(inner) => Error::ConditionalCheckFailedException(inner),
                crate::error::DeleteItemErrorKind::ProvisionedThroughputExceededException(inner) => Error::ProvisionedThroughputExceededException(inner),
                crate::error::DeleteItemErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::DeleteItemErrorKind::ItemCollectionSizeLimitExceededException(inner) => Error::ItemCollectionSizeLimitExceededException(inner),
                crate::error::DeleteItemErrorKind::TransactionConflictException(inner) => Error::TransactionConflictException(inner),
                crate::error::DeleteItemErrorKind::RequestLimitExceeded(inner) => Error::RequestLimitExceeded(inner),
                crate::error::DeleteItemErrorKind::InternalServerError(inner) => Error::InternalServerError(inner),
                crate::error::DeleteItemErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DeleteTableError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::DeleteTableError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DeleteTableErrorKind::ResourceInUseException(inner) => Error::ResourceInUseException(inner),
                crate::error::DeleteTableErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::DeleteTableErrorKind::LimitExceededException(inner) => Error::LimitExceededException(inner),
                crate::error::DeleteTableErrorKind::InternalServerError(inner) => Error::InternalServerError(inner),
                crate::error::DeleteTableErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DescribeTableError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::DescribeTableError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DescribeTableErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::DescribeTableErrorKind::InternalServerError(inner) => Error::InternalServerError(inner),
                crate::error::DescribeTableErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DescribeLimitsError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::DescribeLimitsError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DescribeLimitsErrorKind::InternalServerError(inner) => Error::InternalServerError(inner),
                crate::error::DescribeLimitsErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DescribeTimeToLiveError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::DescribeTimeToLiveError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DescribeTimeToLiveErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::DescribeTimeToLiveErrorKind::InternalServerError(inner) => Error::InternalServerError(inner),
                crate::error::DescribeTimeToLiveErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::GetItemError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::GetItemError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::GetItemErrorKind::ProvisionedThroughputExceededException(inner) => Error::ProvisionedThroughputExceededException(inner),
                crate::error::GetItemErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::GetItemErrorKind::RequestLimitExceeded(inner) => Error::RequestLimitExceeded(inner),
                crate::error::GetItemErrorKind::InternalServerError(inner) => Error::InternalServerError(inner),
                crate::error::GetItemErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::ListTablesError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::ListTablesError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListTablesErrorKind::InternalServerError(inner) => Error::InternalServerError(inner),
                crate::error::ListTablesErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::PutItemError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::PutItemError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::PutItemErrorKind::ConditionalCheckFailedException(inner) => Error::ConditionalCheckFailedException(inner),
                crate::error::PutItemErrorKind::ProvisionedThroughputExceededException(inner) => Error::ProvisionedThroughputExceededException(inner),
                crate::error::PutItemErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::PutItemErrorKind::ItemCollectionSizeLimitExceededException(inner) => Error::ItemCollectionSizeLimitExceededException(inner),
                crate::error::PutItemErrorKind::TransactionConflictException(inner) => Error::TransactionConflictException(inner),
                crate::error::PutItemErrorKind::RequestLimitExceeded(inner) => Error::RequestLimitExceeded(inner),
                crate::error::PutItemErrorKind::InternalServerError(inner) => Error::InternalServerError(inner),
                crate::error::PutItemErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::QueryError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::QueryError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::QueryErrorKind::ProvisionedThroughputExceededException(inner) => Error::ProvisionedThroughputExceededException(inner),
                crate::error::QueryErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::QueryErrorKind::RequestLimitExceeded(inner) => Error::RequestLimitExceeded(inner),
                crate::error::QueryErrorKind::InternalServerError(inner) => Error::InternalServerError(inner),
                crate::error::QueryErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::ScanError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::ScanError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ScanErrorKind::ProvisionedThroughputExceededException(inner) => Error::ProvisionedThroughputExceededException(inner),
                crate::error::ScanErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::ScanErrorKind::RequestLimitExceeded(inner) => Error::RequestLimitExceeded(inner),
                crate::error::ScanErrorKind::InternalServerError(inner) => Error::InternalServerError(inner),
                crate::error::ScanErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::TransactGetItemsError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::TransactGetItemsError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::TransactGetItemsErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::TransactGetItemsErrorKind::TransactionCanceledException(inner) => Error::TransactionCanceledException(inner),
                crate::error::TransactGetItemsErrorKind::ProvisionedThroughputExceededException(inner) => Error::ProvisionedThroughputExceededException(inner),
                crate::error::TransactGetItemsErrorKind::RequestLimitExceeded(inner) => Error::RequestLimitExceeded(inner),
                crate::error::TransactGetItemsErrorKind::InternalServerError(inner) => Error::InternalServerError(inner),
                crate::error::TransactGetItemsErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::TransactWriteItemsError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::TransactWriteItemsError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::TransactWriteItemsErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::TransactWriteItemsErrorKind::TransactionCanceledException(inner) => Error::TransactionCanceledException(inner),
                crate::error::TransactWriteItemsErrorKind::TransactionInProgressException(inner) => Error::TransactionInProgressException(inner),
                crate::error::TransactWriteItemsErrorKind::IdempotentParameterMismatchException(inner) => Error::IdempotentParameterMismatchException(inner),
                crate::error::TransactWriteItemsErrorKind::ProvisionedThroughputExceededException(inner) => Error::ProvisionedThroughputExceededException(inner),
                crate::error::TransactWriteItemsErrorKind::RequestLimitExceeded(inner) => Error::RequestLimitExceeded(inner),
                crate::error::TransactWriteItemsErrorKind::InternalServerError(inner) => Error::InternalServerError(inner),
                crate::error::TransactWriteItemsErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::UpdateItemError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::UpdateItemError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::UpdateItemErrorKind::ConditionalCheckFailedException(inner) => Error::ConditionalCheckFailedException(inner),
                crate::error::UpdateItemErrorKind::ProvisionedThroughputExceededException(inner) => Error::ProvisionedThroughputExceededException(inner),
                crate::error::UpdateItemErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::UpdateItemErrorKind::ItemCollectionSizeLimitExceededException(inner) => Error::ItemCollectionSizeLimitExceededException(inner),
                crate::error::UpdateItemErrorKind::TransactionConflictException(inner) => Error::TransactionConflictException(inner),
                crate::error::UpdateItemErrorKind::RequestLimitExceeded(inner) => Error::RequestLimitExceeded(inner),
                crate::error::UpdateItemErrorKind::InternalServerError(inner) => Error::InternalServerError(inner),
                crate::error::UpdateItemErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::UpdateTableError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::UpdateTableError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::UpdateTableErrorKind::ResourceInUseException(inner) => Error::ResourceInUseException(inner),
                crate::error::UpdateTableErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::UpdateTableErrorKind::LimitExceededException(inner) => Error::LimitExceededException(inner),
                crate::error::UpdateTableErrorKind::InternalServerError(inner) => Error::InternalServerError(inner),
                crate::error::UpdateTableErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::UpdateTimeToLiveError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::UpdateTimeToLiveError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::UpdateTimeToLiveErrorKind::ResourceInUseException(inner) => Error::ResourceInUseException(inner),
                crate::error::UpdateTimeToLiveErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::UpdateTimeToLiveErrorKind::LimitExceededException(inner) => Error::LimitExceededException(inner),
                crate::error::UpdateTimeToLiveErrorKind::InternalServerError(inner) => Error::InternalServerError(inner),
                crate::error::UpdateTimeToLiveErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl std::error::Error for Error {}
