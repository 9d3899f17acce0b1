/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// All possible error types for this service
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum Error {
    AccessDeniedException(crate::error::AccessDeniedException),
    ConflictException(crate::error::ConflictException),
    InternalServerException(crate::error::InternalServerException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    ServiceQuotaExceededException(crate::error::ServiceQuotaExceededException),
    ThrottlingException(crate::error::ThrottlingException),
    ValidationException(crate::error::ValidationException),
    /// An error that is not modeled, or a failure that happened before a response was read
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::AccessDeniedException(inner) => std::fmt::Display::fmt(inner, f),
            Error::ConflictException(inner) => std::fmt::Display::fmt(inner, f),
            Error::InternalServerException(inner) => std::fmt::Display::fmt(inner, f),
            Error::ResourceNotFoundException(inner) => std::fmt::Display::fmt(inner, f),
            Error::ServiceQuotaExceededException(inner) => std::fmt::Display::fmt(inner, f),
            Error::ThrottlingException(inner) => std::fmt::Display::fmt(inner, f),
            Error::ValidationException(inner) => std::fmt::Display::fmt(inner, f),
            Error::Unhandled(inner) => std::fmt::Display::fmt(inner, f),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::CreateAnalyzerError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::CreateAnalyzerError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::CreateAnalyzerErrorKind::ConflictException(inner) => Error::ConflictException(inner),
                crate::error::CreateAnalyzerErrorKind::ServiceQuotaExceededException(inner) => Error::ServiceQuotaExceededException(inner),
                crate::error::CreateAnalyzerErrorKind::AccessDeniedException(inner) => Error::AccessDeniedException(inner),
                crate::error::CreateAnalyzerErrorKind::InternalServerException(inner) => Error::InternalServerException(inner),
                crate::error::CreateAnalyzerErrorKind::ThrottlingException(inner) => Error::ThrottlingException(inner),
                crate::error::CreateAnalyzerErrorKind::ValidationException(inner) => Error::ValidationException(inner),
                crate::error::CreateAnalyzerErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::CreateArchiveRuleError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::CreateArchiveRuleError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::CreateArchiveRuleErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::CreateArchiveRuleErrorKind::ConflictException(inner) => Error::ConflictException(inner),
                crate::error::CreateArchiveRuleErrorKind::ServiceQuotaExceededException(inner) => Error::ServiceQuotaExceededException(inner),
                crate::error::CreateArchiveRuleErrorKind::AccessDeniedException(inner) => Error::AccessDeniedException(inner),
                crate::error::CreateArchiveRuleErrorKind::InternalServerException(inner) => Error::InternalServerException(inner),
                crate::error::CreateArchiveRuleErrorKind::ThrottlingException(inner) => Error::ThrottlingException(inner),
                crate::error::CreateArchiveRuleErrorKind::ValidationException(inner) => Error::ValidationException(inner),
                crate::error::CreateArchiveRuleErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DeleteAnalyzerError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::DeleteAnalyzerError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DeleteAnalyzerErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::DeleteAnalyzerErrorKind::AccessDeniedException(inner) => Error::AccessDeniedException(inner),
                crate::error::DeleteAnalyzerErrorKind::InternalServerException(inner) => Error::InternalServerException(inner),
                crate::error::DeleteAnalyzerErrorKind::ThrottlingException(inner) => Error::ThrottlingException(inner),
                crate::error::DeleteAnalyzerErrorKind::ValidationException(inner) => Error::ValidationException(inner),
                crate::error::DeleteAnalyzerErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::DeleteArchiveRuleError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::DeleteArchiveRuleError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::DeleteArchiveRuleErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::DeleteArchiveRuleErrorKind::AccessDeniedException(inner) => Error::AccessDeniedException(inner),
                crate::error::DeleteArchiveRuleErrorKind::InternalServerException(inner) => Error::InternalServerException(inner),
                crate::error::DeleteArchiveRuleErrorKind::ThrottlingException(inner) => Error::ThrottlingException(inner),
                crate::error::DeleteArchiveRuleErrorKind::ValidationException(inner) => Error::ValidationException(inner),
                crate::error::DeleteArchiveRuleErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::GetAnalyzedResourceError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::GetAnalyzedResourceError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::GetAnalyzedResourceErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::GetAnalyzedResourceErrorKind::AccessDeniedException(inner) => Error::AccessDeniedException(inner),
                crate::error::GetAnalyzedResourceErrorKind::InternalServerException(inner) => Error::InternalServerException(inner),
                crate::error::GetAnalyzedResourceErrorKind::ThrottlingException(inner) => Error::ThrottlingException(inner),
                crate::error::GetAnalyzedResourceErrorKind::ValidationException(inner) => Error::ValidationException(inner),
                crate::error::GetAnalyzedResourceErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::GetAnalyzerError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::GetAnalyzerError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::GetAnalyzerErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::GetAnalyzerErrorKind::AccessDeniedException(inner) => Error::AccessDeniedException(inner),
                crate::error::GetAnalyzerErrorKind::InternalServerException(inner) => Error::InternalServerException(inner),
                crate::error::GetAnalyzerErrorKind::ThrottlingException(inner) => Error::ThrottlingException(inner),
                crate::error::GetAnalyzerErrorKind::ValidationException(inner) => Error::ValidationException(inner),
                crate::error::GetAnalyzerErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::GetArchiveRuleError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::GetArchiveRuleError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::GetArchiveRuleErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::GetArchiveRuleErrorKind::AccessDeniedException(inner) => Error::AccessDeniedException(inner),
                crate::error::GetArchiveRuleErrorKind::InternalServerException(inner) => Error::InternalServerException(inner),
                crate::error::GetArchiveRuleErrorKind::ThrottlingException(inner) => Error::ThrottlingException(inner),
                crate::error::GetArchiveRuleErrorKind::ValidationException(inner) => Error::ValidationException(inner),
                crate::error::GetArchiveRuleErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::GetFindingError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::GetFindingError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::GetFindingErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::GetFindingErrorKind::AccessDeniedException(inner) => Error::AccessDeniedException(inner),
                crate::error::GetFindingErrorKind::InternalServerException(inner) => Error::InternalServerException(inner),
                crate::error::GetFindingErrorKind::ThrottlingException(inner) => Error::ThrottlingException(inner),
                crate::error::GetFindingErrorKind::ValidationException(inner) => Error::ValidationException(inner),
                crate::error::GetFindingErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::ListAnalyzedResourcesError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(
        err: smithy_http::result::SdkError<crate::error::ListAnalyzedResourcesError, R>,
    ) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListAnalyzedResourcesErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::ListAnalyzedResourcesErrorKind::AccessDeniedException(inner) => Error::AccessDeniedException(inner),
                crate::error::ListAnalyzedResourcesErrorKind::InternalServerException(inner) => Error::InternalServerException(inner),
                crate::error::ListAnalyzedResourcesErrorKind::ThrottlingException(inner) => Error::ThrottlingException(inner),
                crate::error::ListAnalyzedResourcesErrorKind::ValidationException(inner) => Error::ValidationException(inner),
                crate::error::ListAnalyzedResourcesErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::ListAnalyzersError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::ListAnalyzersError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListAnalyzersErrorKind::AccessDeniedException(inner) => Error::AccessDeniedException(inner),
                crate::error::ListAnalyzersErrorKind::InternalServerException(inner) => Error::InternalServerException(inner),
                crate::error::ListAnalyzersErrorKind::ThrottlingException(inner) => Error::ThrottlingException(inner),
                crate::error::ListAnalyzersErrorKind::ValidationException(inner) => Error::ValidationException(inner),
                crate::error::ListAnalyzersErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::ListArchiveRulesError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::ListArchiveRulesError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListArchiveRulesErrorKind::AccessDeniedException(inner) => Error::AccessDeniedException(inner),
                crate::error::ListArchiveRulesErrorKind::InternalServerException(inner) => Error::InternalServerException(inner),
                crate::error::ListArchiveRulesErrorKind::ThrottlingException(inner) => Error::ThrottlingException(inner),
                crate::error::ListArchiveRulesErrorKind::ValidationException(inner) => Error::ValidationException(inner),
                crate::error::ListArchiveRulesErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::ListFindingsError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::ListFindingsError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListFindingsErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::ListFindingsErrorKind::AccessDeniedException(inner) => Error::AccessDeniedException(inner),
                crate::error::ListFindingsErrorKind::InternalServerException(inner) => Error::InternalServerException(inner),
                crate::error::ListFindingsErrorKind::ThrottlingException(inner) => Error::ThrottlingException(inner),
                crate::error::ListFindingsErrorKind::ValidationException(inner) => Error::ValidationException(inner),
                crate::error::ListFindingsErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::ListTagsForResourceError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::ListTagsForResourceError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::ListTagsForResourceErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::ListTagsForResourceErrorKind::AccessDeniedException(inner) => Error::AccessDeniedException(inner),
                crate::error::ListTagsForResourceErrorKind::InternalServerException(inner) => Error::InternalServerException(inner),
                crate::error::ListTagsForResourceErrorKind::ThrottlingException(inner) => Error::ThrottlingException(inner),
                crate::error::ListTagsForResourceErrorKind::ValidationException(inner) => Error::ValidationException(inner),
                crate::error::ListTagsForResourceErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::StartResourceScanError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::StartResourceScanError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::StartResourceScanErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::StartResourceScanErrorKind::AccessDeniedException(inner) => Error::AccessDeniedException(inner),
                crate::error::StartResourceScanErrorKind::InternalServerException(inner) => Error::InternalServerException(inner),
                crate::error::StartResourceScanErrorKind::ThrottlingException(inner) => Error::ThrottlingException(inner),
                crate::error::StartResourceScanErrorKind::ValidationException(inner) => Error::ValidationException(inner),
                crate::error::StartResourceScanErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::TagResourceError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::TagResourceError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::TagResourceErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::TagResourceErrorKind::AccessDeniedException(inner) => Error::AccessDeniedException(inner),
                crate::error::TagResourceErrorKind::InternalServerException(inner) => Error::InternalServerException(inner),
                crate::error::TagResourceErrorKind::ThrottlingException(inner) => Error::ThrottlingException(inner),
                crate::error::TagResourceErrorKind::ValidationException(inner) => Error::ValidationException(inner),
                crate::error::TagResourceErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::UntagResourceError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::UntagResourceError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::UntagResourceErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::UntagResourceErrorKind::AccessDeniedException(inner) => Error::AccessDeniedException(inner),
                crate::error::UntagResourceErrorKind::InternalServerException(inner) => Error::InternalServerException(inner),
                crate::error::UntagResourceErrorKind::ThrottlingException(inner) => Error::ThrottlingException(inner),
                crate::error::UntagResourceErrorKind::ValidationException(inner) => Error::ValidationException(inner),
                crate::error::UntagResourceErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::UpdateArchiveRuleError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::UpdateArchiveRuleError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::UpdateArchiveRuleErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::UpdateArchiveRuleErrorKind::AccessDeniedException(inner) => Error::AccessDeniedException(inner),
                crate::error::UpdateArchiveRuleErrorKind::InternalServerException(inner) => Error::InternalServerException(inner),
                crate::error::UpdateArchiveRuleErrorKind::ThrottlingException(inner) => Error::ThrottlingException(inner),
                crate::error::UpdateArchiveRuleErrorKind::ValidationException(inner) => Error::ValidationException(inner),
                crate::error::UpdateArchiveRuleErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl<R> From<smithy_http::result::SdkError<crate::error::UpdateFindingsError, R>> for Error
where
    R: Send + Sync + std::fmt::Debug + 'static,
{
    fn from(err: smithy_http::result::SdkError<crate::error::UpdateFindingsError, R>) -> Self {
        match err {
            smithy_http::result::SdkError::ServiceError { err, .. } => match err.kind {
                crate::error::UpdateFindingsErrorKind::ResourceNotFoundException(inner) => Error::ResourceNotFoundException(inner),
                crate::error::UpdateFindingsErrorKind::AccessDeniedException(inner) => Error::AccessDeniedException(inner),
                crate::error::UpdateFindingsErrorKind::InternalServerException(inner) => Error::InternalServerException(inner),
                crate::error::UpdateFindingsErrorKind::ThrottlingException(inner) => Error::ThrottlingException(inner),
                crate::error::UpdateFindingsErrorKind::ValidationException(inner) => Error::ValidationException(inner),
                crate::error::UpdateFindingsErrorKind::Unhandled(inner) => Error::Unhandled(inner),
            },
            _ => Error::Unhandled(err.into()),
        }
    }
}
impl std::error::Error for Error {}
