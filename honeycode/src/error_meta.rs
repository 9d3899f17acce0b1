/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// All possible error types for this service
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum Error {
    AccessDeniedException(crate::error::AccessDeniedException),
    AutomationExecutionException(crate::error::AutomationExecutionException),
    AutomationExecutionTimeoutException(crate::error::AutomationExecutionTimeoutException),
    InternalServerException(crate::error::InternalServerException),
    RequestTimeoutException(crate::error::RequestTimeoutException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    ServiceQuotaExceededException(crate::error::ServiceQuotaExceededException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    ThrottlingException(crate::error::ThrottlingException),
    ValidationException(crate::error::ValidationException),
    /// An error that is not modeled, or a failure that happened before a response was read
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::AccessDeniedException(inner) => std::fmt::Display::fmt(inner, f),
            Error::AutomationExecutionException(inner) => std::fmt::Display::fmt(inner, f),
            Error::AutomationExecutionTimeoutException(inner) => std::fmt::Display::fmt(inner, f),
            Error::InternalServerException(inner) => std::fmt::Display::fmt(inner, f),
            Error::RequestTimeoutException(inner) => std::fmt::Display::fmt(inner, f),
            Error::ResourceNotFoundException(inner) => std::fmt::Display::fmt(inner, f),
            Error::ServiceQuotaExceededException(inner) => std::fmt::Display::fmt(inner, f),
            Error::ServiceUnavailableException(inner) => std::fmt::Display::fmt(inner, f),
            Error::ThrottlingException(inner) => std::fmt::Display::fmt(inner, f),
            Error::ValidationException(inner) => std::fmt::Display::fmt(inner, f),
            Error::Unhandled(inner) => std::fmt::Display::fmt(inner, f),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::GetScreenDataError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::GetScreenDataError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::GetScreenDataErrorKind::AccessDeniedException(inner) => Error::AccessDeniedException(inner),
                crate::error::GetScreenDataErrorKind::InternalServerException(inner) => Error::InternalServerException(inner),
                crate::error::GetScreenDataErrorKind::RequestTimeoutException(inner) => Error::RequestTimeoutException(inner),
                crate::error::GetScreenDataErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::GetScreenDataErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::GetScreenDataErrorKind::ThrottlingException(inner) => Error::ThrottlingException(inner),
                crate::error::GetScreenDataErrorKind::ValidationException(inner) => Error::ValidationException(inner),
                crate::error::GetScreenDataErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::InvokeScreenAutomationError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(
        err: smithy_http::result::SdkError<crate::error::InvokeScreenAutomationError, R>,
    ) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::InvokeScreenAutomationErrorKind::AutomationExecutionException(inner) => Error::AutomationExecutionException(inner),
                crate::error::InvokeScreenAutomationErrorKind::AutomationExecutionTimeoutException(inner) => Error::AutomationExecutionTimeoutException(inner),
                crate::error::InvokeScreenAutomationErrorKind::AccessDeniedException(inner) => Error::AccessDeniedException(inner),
                crate::error::InvokeScreenAutomationErrorKind::InternalServerException(inner) => Error::InternalServerException(inner),
                crate::error::InvokeScreenAutomationErrorKind::RequestTimeoutException(inner) => Error::RequestTimeoutException(inner),
                crate::error::InvokeScreenAutomationErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::InvokeScreenAutomationErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::InvokeScreenAutomationErrorKind::ThrottlingException(inner) => Error::ThrottlingException(inner),
                crate::error::InvokeScreenAutomationErrorKind::ValidationException(inner) => Error::ValidationException(inner),
                crate::error::InvokeScreenAutomationErrorKind::Unhandled(inner) => Error::Unhandled(inner),
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
                crate::error::ListTablesErrorKind::AccessDeniedException(inner) => Error::AccessDeniedException(inner),
                crate::error::ListTablesErrorKind::InternalServerException(inner) => Error::InternalServerException(inner),
                crate::error::ListTablesErrorKind::RequestTimeoutException(inner) => Error::RequestTimeoutException(inner),
                crate::error::ListTablesErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::ListTablesErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::ListTablesErrorKind::ThrottlingException(inner) => Error::ThrottlingException(inner),
                crate::error::ListTablesErrorKind::ValidationException(inner) => Error::ValidationException(inner),
                crate::error::ListTablesErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::ListTableColumnsError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::ListTableColumnsError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListTableColumnsErrorKind::AccessDeniedException(inner) => Error::AccessDeniedException(inner),
                crate::error::ListTableColumnsErrorKind::InternalServerException(inner) => Error::InternalServerException(inner),
                crate::error::ListTableColumnsErrorKind::RequestTimeoutException(inner) => Error::RequestTimeoutException(inner),
                crate::error::ListTableColumnsErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::ListTableColumnsErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::ListTableColumnsErrorKind::ThrottlingException(inner) => Error::ThrottlingException(inner),
                crate::error::ListTableColumnsErrorKind::ValidationException(inner) => Error::ValidationException(inner),
                crate::error::ListTableColumnsErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::ListTableRowsError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::ListTableRowsError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListTableRowsErrorKind::AccessDeniedException(inner) => Error::AccessDeniedException(inner),
                crate::error::ListTableRowsErrorKind::InternalServerException(inner) => Error::InternalServerException(inner),
                crate::error::ListTableRowsErrorKind::RequestTimeoutException(inner) => Error::RequestTimeoutException(inner),
                crate::error::ListTableRowsErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::ListTableRowsErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::ListTableRowsErrorKind::ThrottlingException(inner) => Error::ThrottlingException(inner),
                crate::error::ListTableRowsErrorKind::ValidationException(inner) => Error::ValidationException(inner),
                crate::error::ListTableRowsErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::QueryTableRowsError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::QueryTableRowsError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::QueryTableRowsErrorKind::AccessDeniedException(inner) => Error::AccessDeniedException(inner),
                crate::error::QueryTableRowsErrorKind::InternalServerException(inner) => Error::InternalServerException(inner),
                crate::error::QueryTableRowsErrorKind::RequestTimeoutException(inner) => Error::RequestTimeoutException(inner),
                crate::error::QueryTableRowsErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::QueryTableRowsErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::QueryTableRowsErrorKind::ThrottlingException(inner) => Error::ThrottlingException(inner),
                crate::error::QueryTableRowsErrorKind::ValidationException(inner) => Error::ValidationException(inner),
                crate::error::QueryTableRowsErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::BatchCreateTableRowsError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(
        err: smithy_http::result::SdkError<crate::error::BatchCreateTableRowsError, R>,
    ) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::BatchCreateTableRowsErrorKind::ServiceQuotaExceededException(inner) => Error::ServiceQuotaExceededException(inner),
                crate::error::BatchCreateTableRowsErrorKind::AccessDeniedException(inner) => Error::AccessDeniedException(inner),
                crate::error::BatchCreateTableRowsErrorKind::InternalServerException(inner) => Error::InternalServerException(inner),
                crate::error::BatchCreateTableRowsErrorKind::RequestTimeoutException(inner) => Error::RequestTimeoutException(inner),
                crate::error::BatchCreateTableRowsErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::BatchCreateTableRowsErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::BatchCreateTableRowsErrorKind::ThrottlingException(inner) => Error::ThrottlingException(inner),
                crate::error::BatchCreateTableRowsErrorKind::ValidationException(inner) => Error::ValidationException(inner),
                crate::error::BatchCreateTableRowsErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::BatchDeleteTableRowsError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(
        err: smithy_http::result::SdkError<crate::error::BatchDeleteTableRowsError, R>,
    ) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::BatchDeleteTableRowsErrorKind::AccessDeniedException(inner) => Error::AccessDeniedException(inner),
                crate::error::BatchDeleteTableRowsErrorKind::InternalServerException(inner) => Error::InternalServerException(inner),
                crate::error::BatchDeleteTableRowsErrorKind::RequestTimeoutException(inner) => Error::RequestTimeoutException(inner),
                crate::error::BatchDeleteTableRowsErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::BatchDeleteTableRowsErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::BatchDeleteTableRowsErrorKind::ThrottlingException(inner) => Error::ThrottlingException(inner),
                crate::error::BatchDeleteTableRowsErrorKind::ValidationException(inner) => Error::ValidationException(inner),
                crate::error::BatchDeleteTableRowsErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::BatchUpdateTableRowsError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(
        err: smithy_http::result::SdkError<crate::error::BatchUpdateTableRowsError, R>,
    ) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::BatchUpdateTableRowsErrorKind::AccessDeniedException(inner) => Error::AccessDeniedException(inner),
                crate::error::BatchUpdateTableRowsErrorKind::InternalServerException(inner) => Error::InternalServerException(inner),
                crate::error::BatchUpdateTableRowsErrorKind::RequestTimeoutException(inner) => Error::RequestTimeoutException(inner),
                crate::error::BatchUpdateTableRowsErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::BatchUpdateTableRowsErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::BatchUpdateTableRowsErrorKind::ThrottlingException(inner) => Error::ThrottlingException(inner),
                crate::error::BatchUpdateTableRowsErrorKind::ValidationException(inner) => Error::ValidationException(inner),
                crate::error::BatchUpdateTableRowsErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::StartTableDataImportJobError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(
        err: smithy_http::result::SdkError<crate::error::StartTableDataImportJobError, R>,
    ) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::StartTableDataImportJobErrorKind::AccessDeniedException(inner) => Error::AccessDeniedException(inner),
                crate::error::StartTableDataImportJobErrorKind::InternalServerException(inner) => Error::InternalServerException(inner),
                crate::error::StartTableDataImportJobErrorKind::RequestTimeoutException(inner) => Error::RequestTimeoutException(inner),
                crate::error::StartTableDataImportJobErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::StartTableDataImportJobErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::StartTableDataImportJobErrorKind::ThrottlingException(inner) => Error::ThrottlingException(inner),
                crate::error::StartTableDataImportJobErrorKind::ValidationException(inner) => Error::ValidationException(inner),
                crate::error::StartTableDataImportJobErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DescribeTableDataImportJobError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(
        err: smithy_http::result::SdkError<crate::error::DescribeTableDataImportJobError, R>,
    ) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DescribeTableDataImportJobErrorKind::AccessDeniedException(inner) => Error::AccessDeniedException(inner),
                crate::error::DescribeTableDataImportJobErrorKind::InternalServerException(inner) => Error::InternalServerException(inner),
                crate::error::DescribeTableDataImportJobErrorKind::RequestTimeoutException(inner) => Error::RequestTimeoutException(inner),
                crate::error::DescribeTableDataImportJobErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::DescribeTableDataImportJobErrorKind::ServiceUnavailableException(inner) => Error::ServiceUnavailableException(inner),
                crate::error::DescribeTableDataImportJobErrorKind::ThrottlingException(inner) => Error::ThrottlingException(inner),
                crate::error::DescribeTableDataImportJobErrorKind::ValidationException(inner) => Error::ValidationException(inner),
                crate::error::DescribeTableDataImportJobErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl std::error::Error for Error {}
