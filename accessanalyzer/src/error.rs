/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Error type for the `CreateAnalyzer` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct CreateAnalyzerError {
    pub kind: CreateAnalyzerErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `CreateAnalyzer` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum CreateAnalyzerErrorKind {
    ConflictException(crate::error::ConflictException),
    ServiceQuotaExceededException(crate::error::ServiceQuotaExceededException),
    AccessDeniedException(crate::error::AccessDeniedException),
    InternalServerException(crate::error::InternalServerException),
    ThrottlingException(crate::error::ThrottlingException),
    ValidationException(crate::error::ValidationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for CreateAnalyzerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            CreateAnalyzerErrorKind::ConflictException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateAnalyzerErrorKind::ServiceQuotaExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateAnalyzerErrorKind::AccessDeniedException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateAnalyzerErrorKind::InternalServerException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateAnalyzerErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateAnalyzerErrorKind::ValidationException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateAnalyzerErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for CreateAnalyzerError {
    fn code(&self) -> Option<&str> {
        CreateAnalyzerError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            CreateAnalyzerErrorKind::InternalServerException(inner) => Some(inner.retryable_error_kind()),
            CreateAnalyzerErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl CreateAnalyzerError {
    pub fn new(kind: CreateAnalyzerErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreateAnalyzerErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CreateAnalyzerErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    pub fn is_conflict_exception(&self) -> bool {
        matches!(&self.kind, CreateAnalyzerErrorKind::ConflictException(_))
    }

    pub fn is_service_quota_exceeded_exception(&self) -> bool {
        matches!(&self.kind, CreateAnalyzerErrorKind::ServiceQuotaExceededException(_))
    }

    pub fn is_access_denied_exception(&self) -> bool {
        matches!(&self.kind, CreateAnalyzerErrorKind::AccessDeniedException(_))
    }

    pub fn is_internal_server_exception(&self) -> bool {
        matches!(&self.kind, CreateAnalyzerErrorKind::InternalServerException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, CreateAnalyzerErrorKind::ThrottlingException(_))
    }

    pub fn is_validation_exception(&self) -> bool {
        matches!(&self.kind, CreateAnalyzerErrorKind::ValidationException(_))
    }
}
impl std::error::Error for CreateAnalyzerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreateAnalyzerErrorKind::ConflictException(_inner) => Some(_inner),
            CreateAnalyzerErrorKind::ServiceQuotaExceededException(_inner) => Some(_inner),
            CreateAnalyzerErrorKind::AccessDeniedException(_inner) => Some(_inner),
            CreateAnalyzerErrorKind::InternalServerException(_inner) => Some(_inner),
            CreateAnalyzerErrorKind::ThrottlingException(_inner) => Some(_inner),
            CreateAnalyzerErrorKind::ValidationException(_inner) => Some(_inner),
            CreateAnalyzerErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `CreateArchiveRule` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct CreateArchiveRuleError {
    pub kind: CreateArchiveRuleErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `CreateArchiveRule` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum CreateArchiveRuleErrorKind {
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    ConflictException(crate::error::ConflictException),
    ServiceQuotaExceededException(crate::error::ServiceQuotaExceededException),
    AccessDeniedException(crate::error::AccessDeniedException),
    InternalServerException(crate::error::InternalServerException),
    ThrottlingException(crate::error::ThrottlingException),
    ValidationException(crate::error::ValidationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for CreateArchiveRuleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            CreateArchiveRuleErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateArchiveRuleErrorKind::ConflictException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateArchiveRuleErrorKind::ServiceQuotaExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateArchiveRuleErrorKind::AccessDeniedException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateArchiveRuleErrorKind::InternalServerException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateArchiveRuleErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateArchiveRuleErrorKind::ValidationException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateArchiveRuleErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for CreateArchiveRuleError {
    fn code(&self) -> Option<&str> {
        CreateArchiveRuleError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            CreateArchiveRuleErrorKind::InternalServerException(inner) => Some(inner.retryable_error_kind()),
            CreateArchiveRuleErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl CreateArchiveRuleError {
    pub fn new(kind: CreateArchiveRuleErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreateArchiveRuleErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CreateArchiveRuleErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, CreateArchiveRuleErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_conflict_exception(&self) -> bool {
        matches!(&self.kind, CreateArchiveRuleErrorKind::ConflictException(_))
    }

    pub fn is_service_quota_exceeded_exception(&self) -> bool {
        matches!(&self.kind, CreateArchiveRuleErrorKind::ServiceQuotaExceededException(_))
    }

    pub fn is_access_denied_exception(&self) -> bool {
        matches!(&self.kind, CreateArchiveRuleErrorKind::AccessDeniedException(_))
    }

    pub fn is_internal_server_exception(&self) -> bool {
        matches!(&self.kind, CreateArchiveRuleErrorKind::InternalServerException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, CreateArchiveRuleErrorKind::ThrottlingException(_))
    }

    pub fn is_validation_exception(&self) -> bool {
        matches!(&self.kind, CreateArchiveRuleErrorKind::ValidationException(_))
    }
}
impl std::error::Error for CreateArchiveRuleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreateArchiveRuleErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            CreateArchiveRuleErrorKind::ConflictException(_inner) => Some(_inner),
            CreateArchiveRuleErrorKind::ServiceQuotaExceededException(_inner) => Some(_inner),
            CreateArchiveRuleErrorKind::AccessDeniedException(_inner) => Some(_inner),
            CreateArchiveRuleErrorKind::InternalServerException(_inner) => Some(_inner),
            CreateArchiveRuleErrorKind::ThrottlingException(_inner) => Some(_inner),
            CreateArchiveRuleErrorKind::ValidationException(_inner) => Some(_inner),
            CreateArchiveRuleErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DeleteAnalyzer` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DeleteAnalyzerError {
    pub kind: DeleteAnalyzerErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DeleteAnalyzer` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DeleteAnalyzerErrorKind {
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    AccessDeniedException(crate::error::AccessDeniedException),
    InternalServerException(crate::error::InternalServerException),
    ThrottlingException(crate::error::ThrottlingException),
    ValidationException(crate::error::ValidationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DeleteAnalyzerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DeleteAnalyzerErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteAnalyzerErrorKind::AccessDeniedException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteAnalyzerErrorKind::InternalServerException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteAnalyzerErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteAnalyzerErrorKind::ValidationException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteAnalyzerErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DeleteAnalyzerError {
    fn code(&self) -> Option<&str> {
        DeleteAnalyzerError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            DeleteAnalyzerErrorKind::InternalServerException(inner) => Some(inner.retryable_error_kind()),
            DeleteAnalyzerErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl DeleteAnalyzerError {
    pub fn new(kind: DeleteAnalyzerErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DeleteAnalyzerErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DeleteAnalyzerErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, DeleteAnalyzerErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_access_denied_exception(&self) -> bool {
        matches!(&self.kind, DeleteAnalyzerErrorKind::AccessDeniedException(_))
    }

    pub fn is_internal_server_exception(&self) -> bool {
        matches!(&self.kind, DeleteAnalyzerErrorKind::InternalServerException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, DeleteAnalyzerErrorKind::ThrottlingException(_))
    }

    pub fn is_validation_exception(&self) -> bool {
        matches!(&self.kind, DeleteAnalyzerErrorKind::ValidationException(_))
    }
}
impl std::error::Error for DeleteAnalyzerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DeleteAnalyzerErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            DeleteAnalyzerErrorKind::AccessDeniedException(_inner) => Some(_inner),
            DeleteAnalyzerErrorKind::InternalServerException(_inner) => Some(_inner),
            DeleteAnalyzerErrorKind::ThrottlingException(_inner) => Some(_inner),
            DeleteAnalyzerErrorKind::ValidationException(_inner) => Some(_inner),
            DeleteAnalyzerErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DeleteArchiveRule` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DeleteArchiveRuleError {
    pub kind: DeleteArchiveRuleErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DeleteArchiveRule` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DeleteArchiveRuleErrorKind {
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    AccessDeniedException(crate::error::AccessDeniedException),
    InternalServerException(crate::error::InternalServerException),
    ThrottlingException(crate::error::ThrottlingException),
    ValidationException(crate::error::ValidationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DeleteArchiveRuleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DeleteArchiveRuleErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteArchiveRuleErrorKind::AccessDeniedException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteArchiveRuleErrorKind::InternalServerException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteArchiveRuleErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteArchiveRuleErrorKind::ValidationException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteArchiveRuleErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DeleteArchiveRuleError {
    fn code(&self) -> Option<&str> {
        DeleteArchiveRuleError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            DeleteArchiveRuleErrorKind::InternalServerException(inner) => Some(inner.retryable_error_kind()),
            DeleteArchiveRuleErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl DeleteArchiveRuleError {
    pub fn new(kind: DeleteArchiveRuleErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DeleteArchiveRuleErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DeleteArchiveRuleErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, DeleteArchiveRuleErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_access_denied_exception(&self) -> bool {
        matches!(&self.kind, DeleteArchiveRuleErrorKind::AccessDeniedException(_))
    }

    pub fn is_internal_server_exception(&self) -> bool {
        matches!(&self.kind, DeleteArchiveRuleErrorKind::InternalServerException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, DeleteArchiveRuleErrorKind::ThrottlingException(_))
    }

    pub fn is_validation_exception(&self) -> bool {
        matches!(&self.kind, DeleteArchiveRuleErrorKind::ValidationException(_))
    }
}
impl std::error::Error for DeleteArchiveRuleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DeleteArchiveRuleErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            DeleteArchiveRuleErrorKind::AccessDeniedException(_inner) => Some(_inner),
            DeleteArchiveRuleErrorKind::InternalServerException(_inner) => Some(_inner),
            DeleteArchiveRuleErrorKind::ThrottlingException(_inner) => Some(_inner),
            DeleteArchiveRuleErrorKind::ValidationException(_inner) => Some(_inner),
            DeleteArchiveRuleErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `GetAnalyzedResource` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct GetAnalyzedResourceError {
    pub kind: GetAnalyzedResourceErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `GetAnalyzedResource` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum GetAnalyzedResourceErrorKind {
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    AccessDeniedException(crate::error::AccessDeniedException),
    InternalServerException(crate::error::InternalServerException),
    ThrottlingException(crate::error::ThrottlingException),
    ValidationException(crate::error::ValidationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for GetAnalyzedResourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            GetAnalyzedResourceErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetAnalyzedResourceErrorKind::AccessDeniedException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetAnalyzedResourceErrorKind::InternalServerException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetAnalyzedResourceErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetAnalyzedResourceErrorKind::ValidationException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetAnalyzedResourceErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for GetAnalyzedResourceError {
    fn code(&self) -> Option<&str> {
        GetAnalyzedResourceError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            GetAnalyzedResourceErrorKind::InternalServerException(inner) => Some(inner.retryable_error_kind()),
            GetAnalyzedResourceErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl GetAnalyzedResourceError {
    pub fn new(kind: GetAnalyzedResourceErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: GetAnalyzedResourceErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: GetAnalyzedResourceErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, GetAnalyzedResourceErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_access_denied_exception(&self) -> bool {
        matches!(&self.kind, GetAnalyzedResourceErrorKind::AccessDeniedException(_))
    }

    pub fn is_internal_server_exception(&self) -> bool {
        matches!(&self.kind, GetAnalyzedResourceErrorKind::InternalServerException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, GetAnalyzedResourceErrorKind::ThrottlingException(_))
    }

    pub fn is_validation_exception(&self) -> bool {
        matches!(&self.kind, GetAnalyzedResourceErrorKind::ValidationException(_))
    }
}
impl std::error::Error for GetAnalyzedResourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            GetAnalyzedResourceErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            GetAnalyzedResourceErrorKind::AccessDeniedException(_inner) => Some(_inner),
            GetAnalyzedResourceErrorKind::InternalServerException(_inner) => Some(_inner),
            GetAnalyzedResourceErrorKind::ThrottlingException(_inner) => Some(_inner),
            GetAnalyzedResourceErrorKind::ValidationException(_inner) => Some(_inner),
            GetAnalyzedResourceErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `GetAnalyzer` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct GetAnalyzerError {
    pub kind: GetAnalyzerErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `GetAnalyzer` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum GetAnalyzerErrorKind {
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    AccessDeniedException(crate::error::AccessDeniedException),
    InternalServerException(crate::error::InternalServerException),
    ThrottlingException(crate::error::ThrottlingException),
    ValidationException(crate::error::ValidationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for GetAnalyzerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            GetAnalyzerErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetAnalyzerErrorKind::AccessDeniedException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetAnalyzerErrorKind::InternalServerException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetAnalyzerErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetAnalyzerErrorKind::ValidationException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetAnalyzerErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for GetAnalyzerError {
    fn code(&self) -> Option<&str> {
        GetAnalyzerError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            GetAnalyzerErrorKind::InternalServerException(inner) => Some(inner.retryable_error_kind()),
            GetAnalyzerErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl GetAnalyzerError {
    pub fn new(kind: GetAnalyzerErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: GetAnalyzerErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: GetAnalyzerErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, GetAnalyzerErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_access_denied_exception(&self) -> bool {
        matches!(&self.kind, GetAnalyzerErrorKind::AccessDeniedException(_))
    }

    pub fn is_internal_server_exception(&self) -> bool {
        matches!(&self.kind, GetAnalyzerErrorKind::InternalServerException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, GetAnalyzerErrorKind::ThrottlingException(_))
    }

    pub fn is_validation_exception(&self) -> bool {
        matches!(&self.kind, GetAnalyzerErrorKind::ValidationException(_))
    }
}
impl std::error::Error for GetAnalyzerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            GetAnalyzerErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            GetAnalyzerErrorKind::AccessDeniedException(_inner) => Some(_inner),
            GetAnalyzerErrorKind::InternalServerException(_inner) => Some(_inner),
            GetAnalyzerErrorKind::ThrottlingException(_inner) => Some(_inner),
            GetAnalyzerErrorKind::ValidationException(_inner) => Some(_inner),
            GetAnalyzerErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `GetArchiveRule` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct GetArchiveRuleError {
    pub kind: GetArchiveRuleErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `GetArchiveRule` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum GetArchiveRuleErrorKind {
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    AccessDeniedException(crate::error::AccessDeniedException),
    InternalServerException(crate::error::InternalServerException),
    ThrottlingException(crate::error::ThrottlingException),
    ValidationException(crate::error::ValidationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for GetArchiveRuleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            GetArchiveRuleErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetArchiveRuleErrorKind::AccessDeniedException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetArchiveRuleErrorKind::InternalServerException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetArchiveRuleErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetArchiveRuleErrorKind::ValidationException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetArchiveRuleErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for GetArchiveRuleError {
    fn code(&self) -> Option<&str> {
        GetArchiveRuleError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            GetArchiveRuleErrorKind::InternalServerException(inner) => Some(inner.retryable_error_kind()),
            GetArchiveRuleErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl GetArchiveRuleError {
    pub fn new(kind: GetArchiveRuleErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: GetArchiveRuleErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: GetArchiveRuleErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, GetArchiveRuleErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_access_denied_exception(&self) -> bool {
        matches!(&self.kind, GetArchiveRuleErrorKind::AccessDeniedException(_))
    }

    pub fn is_internal_server_exception(&self) -> bool {
        matches!(&self.kind, GetArchiveRuleErrorKind::InternalServerException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, GetArchiveRuleErrorKind::ThrottlingException(_))
    }

    pub fn is_validation_exception(&self) -> bool {
        matches!(&self.kind, GetArchiveRuleErrorKind::ValidationException(_))
    }
}
impl std::error::Error for GetArchiveRuleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            GetArchiveRuleErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            GetArchiveRuleErrorKind::AccessDeniedException(_inner) => Some(_inner),
            GetArchiveRuleErrorKind::InternalServerException(_inner) => Some(_inner),
            GetArchiveRuleErrorKind::ThrottlingException(_inner) => Some(_inner),
            GetArchiveRuleErrorKind::ValidationException(_inner) => Some(_inner),
            GetArchiveRuleErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `GetFinding` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct GetFindingError {
    pub kind: GetFindingErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `GetFinding` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum GetFindingErrorKind {
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    AccessDeniedException(crate::error::AccessDeniedException),
    InternalServerException(crate::error::InternalServerException),
    ThrottlingException(crate::error::ThrottlingException),
    ValidationException(crate::error::ValidationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for GetFindingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            GetFindingErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetFindingErrorKind::AccessDeniedException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetFindingErrorKind::InternalServerException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetFindingErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetFindingErrorKind::ValidationException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetFindingErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for GetFindingError {
    fn code(&self) -> Option<&str> {
        GetFindingError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            GetFindingErrorKind::InternalServerException(inner) => Some(inner.retryable_error_kind()),
            GetFindingErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl GetFindingError {
    pub fn new(kind: GetFindingErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: GetFindingErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: GetFindingErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, GetFindingErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_access_denied_exception(&self) -> bool {
        matches!(&self.kind, GetFindingErrorKind::AccessDeniedException(_))
    }

    pub fn is_internal_server_exception(&self) -> bool {
        matches!(&self.kind, GetFindingErrorKind::InternalServerException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, GetFindingErrorKind::ThrottlingException(_))
    }

    pub fn is_validation_exception(&self) -> bool {
        matches!(&self.kind, GetFindingErrorKind::ValidationException(_))
    }
}
impl std::error::Error for GetFindingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            GetFindingErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            GetFindingErrorKind::AccessDeniedException(_inner) => Some(_inner),
            GetFindingErrorKind::InternalServerException(_inner) => Some(_inner),
            GetFindingErrorKind::ThrottlingException(_inner) => Some(_inner),
            GetFindingErrorKind::ValidationException(_inner) => Some(_inner),
            GetFindingErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `ListAnalyzedResources` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListAnalyzedResourcesError {
    pub kind: ListAnalyzedResourcesErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ListAnalyzedResources` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListAnalyzedResourcesErrorKind {
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    AccessDeniedException(crate::error::AccessDeniedException),
    InternalServerException(crate::error::InternalServerException),
    ThrottlingException(crate::error::ThrottlingException),
    ValidationException(crate::error::ValidationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListAnalyzedResourcesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListAnalyzedResourcesErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListAnalyzedResourcesErrorKind::AccessDeniedException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListAnalyzedResourcesErrorKind::InternalServerException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListAnalyzedResourcesErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListAnalyzedResourcesErrorKind::ValidationException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListAnalyzedResourcesErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for ListAnalyzedResourcesError {
    fn code(&self) -> Option<&str> {
        ListAnalyzedResourcesError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            ListAnalyzedResourcesErrorKind::InternalServerException(inner) => Some(inner.retryable_error_kind()),
            ListAnalyzedResourcesErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl ListAnalyzedResourcesError {
    pub fn new(kind: ListAnalyzedResourcesErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListAnalyzedResourcesErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListAnalyzedResourcesErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, ListAnalyzedResourcesErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_access_denied_exception(&self) -> bool {
        matches!(&self.kind, ListAnalyzedResourcesErrorKind::AccessDeniedException(_))
    }

    pub fn is_internal_server_exception(&self) -> bool {
        matches!(&self.kind, ListAnalyzedResourcesErrorKind::InternalServerException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, ListAnalyzedResourcesErrorKind::ThrottlingException(_))
    }

    pub fn is_validation_exception(&self) -> bool {
        matches!(&self.kind, ListAnalyzedResourcesErrorKind::ValidationException(_))
    }
}
impl std::error::Error for ListAnalyzedResourcesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListAnalyzedResourcesErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            ListAnalyzedResourcesErrorKind::AccessDeniedException(_inner) => Some(_inner),
            ListAnalyzedResourcesErrorKind::InternalServerException(_inner) => Some(_inner),
            ListAnalyzedResourcesErrorKind::ThrottlingException(_inner) => Some(_inner),
            ListAnalyzedResourcesErrorKind::ValidationException(_inner) => Some(_inner),
            ListAnalyzedResourcesErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `ListAnalyzers` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListAnalyzersError {
    pub kind: ListAnalyzersErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ListAnalyzers` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListAnalyzersErrorKind {
    AccessDeniedException(crate::error::AccessDeniedException),
    InternalServerException(crate::error::InternalServerException),
    ThrottlingException(crate::error::ThrottlingException),
    ValidationException(crate::error::ValidationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListAnalyzersError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListAnalyzersErrorKind::AccessDeniedException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListAnalyzersErrorKind::InternalServerException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListAnalyzersErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListAnalyzersErrorKind::ValidationException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListAnalyzersErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for ListAnalyzersError {
    fn code(&self) -> Option<&str> {
        ListAnalyzersError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            ListAnalyzersErrorKind::InternalServerException(inner) => Some(inner.retryable_error_kind()),
            ListAnalyzersErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl ListAnalyzersError {
    pub fn new(kind: ListAnalyzersErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListAnalyzersErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListAnalyzersErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    pub fn is_access_denied_exception(&self) -> bool {
        matches!(&self.kind, ListAnalyzersErrorKind::AccessDeniedException(_))
    }

    pub fn is_internal_server_exception(&self) -> bool {
        matches!(&self.kind, ListAnalyzersErrorKind::InternalServerException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, ListAnalyzersErrorKind::ThrottlingException(_))
    }

    pub fn is_validation_exception(&self) -> bool {
        matches!(&self.kind, ListAnalyzersErrorKind::ValidationException(_))
    }
}
impl std::error::Error for ListAnalyzersError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListAnalyzersErrorKind::AccessDeniedException(_inner) => Some(_inner),
            ListAnalyzersErrorKind::InternalServerException(_inner) => Some(_inner),
            ListAnalyzersErrorKind::ThrottlingException(_inner) => Some(_inner),
            ListAnalyzersErrorKind::ValidationException(_inner) => Some(_inner),
            ListAnalyzersErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `ListArchiveRules` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListArchiveRulesError {
    pub kind: ListArchiveRulesErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ListArchiveRules` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListArchiveRulesErrorKind {
    AccessDeniedException(crate::error::AccessDeniedException),
    InternalServerException(crate::error::InternalServerException),
    ThrottlingException(crate::error::ThrottlingException),
    ValidationException(crate::error::ValidationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListArchiveRulesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListArchiveRulesErrorKind::AccessDeniedException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListArchiveRulesErrorKind::InternalServerException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListArchiveRulesErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListArchiveRulesErrorKind::ValidationException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListArchiveRulesErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for ListArchiveRulesError {
    fn code(&self) -> Option<&str> {
        ListArchiveRulesError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            ListArchiveRulesErrorKind::InternalServerException(inner) => Some(inner.retryable_error_kind()),
            ListArchiveRulesErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl ListArchiveRulesError {
    pub fn new(kind: ListArchiveRulesErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListArchiveRulesErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListArchiveRulesErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    pub fn is_access_denied_exception(&self) -> bool {
        matches!(&self.kind, ListArchiveRulesErrorKind::AccessDeniedException(_))
    }

    pub fn is_internal_server_exception(&self) -> bool {
        matches!(&self.kind, ListArchiveRulesErrorKind::InternalServerException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, ListArchiveRulesErrorKind::ThrottlingException(_))
    }

    pub fn is_validation_exception(&self) -> bool {
        matches!(&self.kind, ListArchiveRulesErrorKind::ValidationException(_))
    }
}
impl std::error::Error for ListArchiveRulesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListArchiveRulesErrorKind::AccessDeniedException(_inner) => Some(_inner),
            ListArchiveRulesErrorKind::InternalServerException(_inner) => Some(_inner),
            ListArchiveRulesErrorKind::ThrottlingException(_inner) => Some(_inner),
            ListArchiveRulesErrorKind::ValidationException(_inner) => Some(_inner),
            ListArchiveRulesErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `ListFindings` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListFindingsError {
    pub kind: ListFindingsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ListFindings` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListFindingsErrorKind {
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    AccessDeniedException(crate::error::AccessDeniedException),
    InternalServerException(crate::error::InternalServerException),
    ThrottlingException(crate::error::ThrottlingException),
    ValidationException(crate::error::ValidationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListFindingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListFindingsErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListFindingsErrorKind::AccessDeniedException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListFindingsErrorKind::InternalServerException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListFindingsErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListFindingsErrorKind::ValidationException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListFindingsErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for ListFindingsError {
    fn code(&self) -> Option<&str> {
        ListFindingsError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            ListFindingsErrorKind::InternalServerException(inner) => Some(inner.retryable_error_kind()),
            ListFindingsErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl ListFindingsError {
    pub fn new(kind: ListFindingsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListFindingsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListFindingsErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, ListFindingsErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_access_denied_exception(&self) -> bool {
        matches!(&self.kind, ListFindingsErrorKind::AccessDeniedException(_))
    }

    pub fn is_internal_server_exception(&self) -> bool {
        matches!(&self.kind, ListFindingsErrorKind::InternalServerException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, ListFindingsErrorKind::ThrottlingException(_))
    }

    pub fn is_validation_exception(&self) -> bool {
        matches!(&self.kind, ListFindingsErrorKind::ValidationException(_))
    }
}
impl std::error::Error for ListFindingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListFindingsErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            ListFindingsErrorKind::AccessDeniedException(_inner) => Some(_inner),
            ListFindingsErrorKind::InternalServerException(_inner) => Some(_inner),
            ListFindingsErrorKind::ThrottlingException(_inner) => Some(_inner),
            ListFindingsErrorKind::ValidationException(_inner) => Some(_inner),
            ListFindingsErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `ListTagsForResource` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListTagsForResourceError {
    pub kind: ListTagsForResourceErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ListTagsForResource` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListTagsForResourceErrorKind {
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    AccessDeniedException(crate::error::AccessDeniedException),
    InternalServerException(crate::error::InternalServerException),
    ThrottlingException(crate::error::ThrottlingException),
    ValidationException(crate::error::ValidationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListTagsForResourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListTagsForResourceErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListTagsForResourceErrorKind::AccessDeniedException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListTagsForResourceErrorKind::InternalServerException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListTagsForResourceErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListTagsForResourceErrorKind::ValidationException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListTagsForResourceErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for ListTagsForResourceError {
    fn code(&self) -> Option<&str> {
        ListTagsForResourceError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            ListTagsForResourceErrorKind::InternalServerException(inner) => Some(inner.retryable_error_kind()),
            ListTagsForResourceErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl ListTagsForResourceError {
    pub fn new(kind: ListTagsForResourceErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListTagsForResourceErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListTagsForResourceErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, ListTagsForResourceErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_access_denied_exception(&self) -> bool {
        matches!(&self.kind, ListTagsForResourceErrorKind::AccessDeniedException(_))
    }

    pub fn is_internal_server_exception(&self) -> bool {
        matches!(&self.kind, ListTagsForResourceErrorKind::InternalServerException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, ListTagsForResourceErrorKind::ThrottlingException(_))
    }

    pub fn is_validation_exception(&self) -> bool {
        matches!(&self.kind, ListTagsForResourceErrorKind::ValidationException(_))
    }
}
impl std::error::Error for ListTagsForResourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListTagsForResourceErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            ListTagsForResourceErrorKind::AccessDeniedException(_inner) => Some(_inner),
            ListTagsForResourceErrorKind::InternalServerException(_inner) => Some(_inner),
            ListTagsForResourceErrorKind::ThrottlingException(_inner) => Some(_inner),
            ListTagsForResourceErrorKind::ValidationException(_inner) => Some(_inner),
            ListTagsForResourceErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `StartResourceScan` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct StartResourceScanError {
    pub kind: StartResourceScanErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `StartResourceScan` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum StartResourceScanErrorKind {
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    AccessDeniedException(crate::error::AccessDeniedException),
    InternalServerException(crate::error::InternalServerException),
    ThrottlingException(crate::error::ThrottlingException),
    ValidationException(crate::error::ValidationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for StartResourceScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            StartResourceScanErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            StartResourceScanErrorKind::AccessDeniedException(_inner) => std::fmt::Display::fmt(_inner, f),
            StartResourceScanErrorKind::InternalServerException(_inner) => std::fmt::Display::fmt(_inner, f),
            StartResourceScanErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            StartResourceScanErrorKind::ValidationException(_inner) => std::fmt::Display::fmt(_inner, f),
            StartResourceScanErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for StartResourceScanError {
    fn code(&self) -> Option<&str> {
        StartResourceScanError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            StartResourceScanErrorKind::InternalServerException(inner) => Some(inner.retryable_error_kind()),
            StartResourceScanErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl StartResourceScanError {
    pub fn new(kind: StartResourceScanErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: StartResourceScanErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: StartResourceScanErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, StartResourceScanErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_access_denied_exception(&self) -> bool {
        matches!(&self.kind, StartResourceScanErrorKind::AccessDeniedException(_))
    }

    pub fn is_internal_server_exception(&self) -> bool {
        matches!(&self.kind, StartResourceScanErrorKind::InternalServerException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, StartResourceScanErrorKind::ThrottlingException(_))
    }

    pub fn is_validation_exception(&self) -> bool {
        matches!(&self.kind, StartResourceScanErrorKind::ValidationException(_))
    }
}
impl std::error::Error for StartResourceScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            StartResourceScanErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            StartResourceScanErrorKind::AccessDeniedException(_inner) => Some(_inner),
            StartResourceScanErrorKind::InternalServerException(_inner) => Some(_inner),
            StartResourceScanErrorKind::ThrottlingException(_inner) => Some(_inner),
            StartResourceScanErrorKind::ValidationException(_inner) => Some(_inner),
            StartResourceScanErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `TagResource` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct TagResourceError {
    pub kind: TagResourceErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `TagResource` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum TagResourceErrorKind {
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    AccessDeniedException(crate::error::AccessDeniedException),
    InternalServerException(crate::error::InternalServerException),
    ThrottlingException(crate::error::ThrottlingException),
    ValidationException(crate::error::ValidationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for TagResourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            TagResourceErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            TagResourceErrorKind::AccessDeniedException(_inner) => std::fmt::Display::fmt(_inner, f),
            TagResourceErrorKind::InternalServerException(_inner) => std::fmt::Display::fmt(_inner, f),
            TagResourceErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            TagResourceErrorKind::ValidationException(_inner) => std::fmt::Display::fmt(_inner, f),
            TagResourceErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for TagResourceError {
    fn code(&self) -> Option<&str> {
        TagResourceError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            TagResourceErrorKind::InternalServerException(inner) => Some(inner.retryable_error_kind()),
            TagResourceErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl TagResourceError {
    pub fn new(kind: TagResourceErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: TagResourceErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: TagResourceErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, TagResourceErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_access_denied_exception(&self) -> bool {
        matches!(&self.kind, TagResourceErrorKind::AccessDeniedException(_))
    }

    pub fn is_internal_server_exception(&self) -> bool {
        matches!(&self.kind, TagResourceErrorKind::InternalServerException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, TagResourceErrorKind::ThrottlingException(_))
    }

    pub fn is_validation_exception(&self) -> bool {
        matches!(&self.kind, TagResourceErrorKind::ValidationException(_))
    }
}
impl std::error::Error for TagResourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            TagResourceErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            TagResourceErrorKind::AccessDeniedException(_inner) => Some(_inner),
            TagResourceErrorKind::InternalServerException(_inner) => Some(_inner),
            TagResourceErrorKind::ThrottlingException(_inner) => Some(_inner),
            TagResourceErrorKind::ValidationException(_inner) => Some(_inner),
            TagResourceErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `UntagResource` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct UntagResourceError {
    pub kind: UntagResourceErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `UntagResource` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum UntagResourceErrorKind {
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    AccessDeniedException(crate::error::AccessDeniedException),
    InternalServerException(crate::error::InternalServerException),
    ThrottlingException(crate::error::ThrottlingException),
    ValidationException(crate::error::ValidationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for UntagResourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            UntagResourceErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            UntagResourceErrorKind::AccessDeniedException(_inner) => std::fmt::Display::fmt(_inner, f),
            UntagResourceErrorKind::InternalServerException(_inner) => std::fmt::Display::fmt(_inner, f),
            UntagResourceErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            UntagResourceErrorKind::ValidationException(_inner) => std::fmt::Display::fmt(_inner, f),
            UntagResourceErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for UntagResourceError {
    fn code(&self) -> Option<&str> {
        UntagResourceError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            UntagResourceErrorKind::InternalServerException(inner) => Some(inner.retryable_error_kind()),
            UntagResourceErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl UntagResourceError {
    pub fn new(kind: UntagResourceErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: UntagResourceErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: UntagResourceErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, UntagResourceErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_access_denied_exception(&self) -> bool {
        matches!(&self.kind, UntagResourceErrorKind::AccessDeniedException(_))
    }

    pub fn is_internal_server_exception(&self) -> bool {
        matches!(&self.kind, UntagResourceErrorKind::InternalServerException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, UntagResourceErrorKind::ThrottlingException(_))
    }

    pub fn is_validation_exception(&self) -> bool {
        matches!(&self.kind, UntagResourceErrorKind::ValidationException(_))
    }
}
impl std::error::Error for UntagResourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            UntagResourceErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            UntagResourceErrorKind::AccessDeniedException(_inner) => Some(_inner),
            UntagResourceErrorKind::InternalServerException(_inner) => Some(_inner),
            UntagResourceErrorKind::ThrottlingException(_inner) => Some(_inner),
            UntagResourceErrorKind::ValidationException(_inner) => Some(_inner),
            UntagResourceErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `UpdateArchiveRule` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct UpdateArchiveRuleError {
    pub kind: UpdateArchiveRuleErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `UpdateArchiveRule` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum UpdateArchiveRuleErrorKind {
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    AccessDeniedException(crate::error::AccessDeniedException),
    InternalServerException(crate::error::InternalServerException),
    ThrottlingException(crate::error::ThrottlingException),
    ValidationException(crate::error::ValidationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for UpdateArchiveRuleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            UpdateArchiveRuleErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateArchiveRuleErrorKind::AccessDeniedException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateArchiveRuleErrorKind::InternalServerException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateArchiveRuleErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateArchiveRuleErrorKind::ValidationException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateArchiveRuleErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for UpdateArchiveRuleError {
    fn code(&self) -> Option<&str> {
        UpdateArchiveRuleError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            UpdateArchiveRuleErrorKind::InternalServerException(inner) => Some(inner.retryable_error_kind()),
            UpdateArchiveRuleErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl UpdateArchiveRuleError {
    pub fn new(kind: UpdateArchiveRuleErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: UpdateArchiveRuleErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: UpdateArchiveRuleErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, UpdateArchiveRuleErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_access_denied_exception(&self) -> bool {
        matches!(&self.kind, UpdateArchiveRuleErrorKind::AccessDeniedException(_))
    }

    pub fn is_internal_server_exception(&self) -> bool {
        matches!(&self.kind, UpdateArchiveRuleErrorKind::InternalServerException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, UpdateArchiveRuleErrorKind::ThrottlingException(_))
    }

    pub fn is_validation_exception(&self) -> bool {
        matches!(&self.kind, UpdateArchiveRuleErrorKind::ValidationException(_))
    }
}
impl std::error::Error for UpdateArchiveRuleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            UpdateArchiveRuleErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            UpdateArchiveRuleErrorKind::AccessDeniedException(_inner) => Some(_inner),
            UpdateArchiveRuleErrorKind::InternalServerException(_inner) => Some(_inner),
            UpdateArchiveRuleErrorKind::ThrottlingException(_inner) => Some(_inner),
            UpdateArchiveRuleErrorKind::ValidationException(_inner) => Some(_inner),
            UpdateArchiveRuleErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `UpdateFindings` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct UpdateFindingsError {
    pub kind: UpdateFindingsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `UpdateFindings` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum UpdateFindingsErrorKind {
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    AccessDeniedException(crate::error::AccessDeniedException),
    InternalServerException(crate::error::InternalServerException),
    ThrottlingException(crate::error::ThrottlingException),
    ValidationException(crate::error::ValidationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for UpdateFindingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            UpdateFindingsErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateFindingsErrorKind::AccessDeniedException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateFindingsErrorKind::InternalServerException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateFindingsErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateFindingsErrorKind::ValidationException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateFindingsErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for UpdateFindingsError {
    fn code(&self) -> Option<&str> {
        UpdateFindingsError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            UpdateFindingsErrorKind::InternalServerException(inner) => Some(inner.retryable_error_kind()),
            UpdateFindingsErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl UpdateFindingsError {
    pub fn new(kind: UpdateFindingsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: UpdateFindingsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: UpdateFindingsErrorKind::Unhandled(err.into()),
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn meta(&self) -> &smithy_types::Error {
        &self.meta
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, UpdateFindingsErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_access_denied_exception(&self) -> bool {
        matches!(&self.kind, UpdateFindingsErrorKind::AccessDeniedException(_))
    }

    pub fn is_internal_server_exception(&self) -> bool {
        matches!(&self.kind, UpdateFindingsErrorKind::InternalServerException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, UpdateFindingsErrorKind::ThrottlingException(_))
    }

    pub fn is_validation_exception(&self) -> bool {
        matches!(&self.kind, UpdateFindingsErrorKind::ValidationException(_))
    }
}
impl std::error::Error for UpdateFindingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            UpdateFindingsErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            UpdateFindingsErrorKind::AccessDeniedException(_inner) => Some(_inner),
            UpdateFindingsErrorKind::InternalServerException(_inner) => Some(_inner),
            UpdateFindingsErrorKind::ThrottlingException(_inner) => Some(_inner),
            UpdateFindingsErrorKind::ValidationException(_inner) => Some(_inner),
            UpdateFindingsErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// You do not have sufficient access to perform this action
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct AccessDeniedException {
    #[serde(rename = "message")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub message: std::option::Option<std::string::String>,
}
impl AccessDeniedException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`AccessDeniedException`](crate::error::AccessDeniedException)
    pub fn builder() -> crate::error::access_denied_exception::Builder {
        crate::error::access_denied_exception::Builder::default()
    }
}
impl std::fmt::Display for AccessDeniedException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AccessDeniedException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for AccessDeniedException {}
/// See [`AccessDeniedException`](crate::error::AccessDeniedException)
pub mod access_denied_exception {
    /// A builder for [`AccessDeniedException`](crate::error::AccessDeniedException)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, inp: impl Into<std::string::String>) -> Self {
            self.message = Some(inp.into());
            self
        }
        pub fn set_message(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.message = inp;
            self
        }
        /// Consumes the builder and constructs a [`AccessDeniedException`](crate::error::AccessDeniedException)
        pub fn build(self) -> crate::error::AccessDeniedException {
            crate::error::AccessDeniedException {
                message: self.message,
            }
        }
    }
}

/// A conflict exception error
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct ConflictException {
    #[serde(rename = "message")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub message: std::option::Option<std::string::String>,
    #[serde(rename = "resourceId")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_id: std::option::Option<std::string::String>,
    #[serde(rename = "resourceType")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_type: std::option::Option<std::string::String>,
}
impl ConflictException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`ConflictException`](crate::error::ConflictException)
    pub fn builder() -> crate::error::conflict_exception::Builder {
        crate::error::conflict_exception::Builder::default()
    }
}
impl std::fmt::Display for ConflictException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ConflictException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for ConflictException {}
/// See [`ConflictException`](crate::error::ConflictException)
pub mod conflict_exception {
    /// A builder for [`ConflictException`](crate::error::ConflictException)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
        resource_id: std::option::Option<std::string::String>,
        resource_type: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, inp: impl Into<std::string::String>) -> Self {
            self.message = Some(inp.into());
            self
        }
        pub fn set_message(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.message = inp;
            self
        }
        pub fn resource_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.resource_id = Some(inp.into());
            self
        }
        pub fn set_resource_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.resource_id = inp;
            self
        }
        pub fn resource_type(mut self, inp: impl Into<std::string::String>) -> Self {
            self.resource_type = Some(inp.into());
            self
        }
        pub fn set_resource_type(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.resource_type = inp;
            self
        }
        /// Consumes the builder and constructs a [`ConflictException`](crate::error::ConflictException)
        pub fn build(self) -> crate::error::ConflictException {
            crate::error::ConflictException {
                message: self.message,
                resource_id: self.resource_id,
                resource_type: self.resource_type,
            }
        }
    }
}

/// Internal server error
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct InternalServerException {
    #[serde(rename = "message")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub message: std::option::Option<std::string::String>,
}
impl InternalServerException {
    pub fn retryable_error_kind(&self) -> smithy_types::retry::ErrorKind {
        smithy_types::retry::ErrorKind::ServerError
    }
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`InternalServerException`](crate::error::InternalServerException)
    pub fn builder() -> crate::error::internal_server_exception::Builder {
        crate::error::internal_server_exception::Builder::default()
    }
}
impl std::fmt::Display for InternalServerException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InternalServerException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for InternalServerException {}
/// See [`InternalServerException`](crate::error::InternalServerException)
pub mod internal_server_exception {
    /// A builder for [`InternalServerException`](crate::error::InternalServerException)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, inp: impl Into<std::string::String>) -> Self {
            self.message = Some(inp.into());
            self
        }
        pub fn set_message(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.message = inp;
            self
        }
        /// Consumes the builder and constructs a [`InternalServerException`](crate::error::InternalServerException)
        pub fn build(self) -> crate::error::InternalServerException {
            crate::error::InternalServerException {
                message: self.message,
            }
        }
    }
}

/// The specified resource could not be found
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct ResourceNotFoundException {
    #[serde(rename = "message")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub message: std::option::Option<std::string::String>,
    #[serde(rename = "resourceId")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_id: std::option::Option<std::string::String>,
    #[serde(rename = "resourceType")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_type: std::option::Option<std::string::String>,
}
impl ResourceNotFoundException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`ResourceNotFoundException`](crate::error::ResourceNotFoundException)
    pub fn builder() -> crate::error::resource_not_found_exception::Builder {
        crate::error::resource_not_found_exception::Builder::default()
    }
}
impl std::fmt::Display for ResourceNotFoundException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ResourceNotFoundException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for ResourceNotFoundException {}
/// See [`ResourceNotFoundException`](crate::error::ResourceNotFoundException)
pub mod resource_not_found_exception {
    /// A builder for [`ResourceNotFoundException`](crate::error::ResourceNotFoundException)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
        resource_id: std::option::Option<std::string::String>,
        resource_type: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, inp: impl Into<std::string::String>) -> Self {
            self.message = Some(inp.into());
            self
        }
        pub fn set_message(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.message = inp;
            self
        }
        pub fn resource_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.resource_id = Some(inp.into());
            self
        }
        pub fn set_resource_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.resource_id = inp;
            self
        }
        pub fn resource_type(mut self, inp: impl Into<std::string::String>) -> Self {
            self.resource_type = Some(inp.into());
            self
        }
        pub fn set_resource_type(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.resource_type = inp;
            self
        }
        /// Consumes the builder and constructs a [`ResourceNotFoundException`](crate::error::ResourceNotFoundException)
        pub fn build(self) -> crate::error::ResourceNotFoundException {
            crate::error::ResourceNotFoundException {
                message: self.message,
                resource_id: self.resource_id,
                resource_type: self.resource_type,
            }
        }
    }
}

/// Service quote met error
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct ServiceQuotaExceededException {
    #[serde(rename = "message")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub message: std::option::Option<std::string::String>,
    #[serde(rename = "resourceId")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_id: std::option::Option<std::string::String>,
    #[serde(rename = "resourceType")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_type: std::option::Option<std::string::String>,
}
impl ServiceQuotaExceededException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`ServiceQuotaExceededException`](crate::error::ServiceQuotaExceededException)
    pub fn builder() -> crate::error::service_quota_exceeded_exception::Builder {
        crate::error::service_quota_exceeded_exception::Builder::default()
    }
}
impl std::fmt::Display for ServiceQuotaExceededException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ServiceQuotaExceededException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for ServiceQuotaExceededException {}
/// See [`ServiceQuotaExceededException`](crate::error::ServiceQuotaExceededException)
pub mod service_quota_exceeded_exception {
    /// A builder for [`ServiceQuotaExceededException`](crate::error::ServiceQuotaExceededException)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
        resource_id: std::option::Option<std::string::String>,
        resource_type: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, inp: impl Into<std::string::String>) -> Self {
            self.message = Some(inp.into());
            self
        }
        pub fn set_message(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.message = inp;
            self
        }
        pub fn resource_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.resource_id = Some(inp.into());
            self
        }
        pub fn set_resource_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.resource_id = inp;
            self
        }
        pub fn resource_type(mut self, inp: impl Into<std::string::String>) -> Self {
            self.resource_type = Some(inp.into());
            self
        }
        pub fn set_resource_type(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.resource_type = inp;
            self
        }
        /// Consumes the builder and constructs a [`ServiceQuotaExceededException`](crate::error::ServiceQuotaExceededException)
        pub fn build(self) -> crate::error::ServiceQuotaExceededException {
            crate::error::ServiceQuotaExceededException {
                message: self.message,
                resource_id: self.resource_id,
                resource_type: self.resource_type,
            }
        }
    }
}

/// Throttling limit exceeded error
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct ThrottlingException {
    #[serde(rename = "message")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub message: std::option::Option<std::string::String>,
}
impl ThrottlingException {
    pub fn retryable_error_kind(&self) -> smithy_types::retry::ErrorKind {
        smithy_types::retry::ErrorKind::ThrottlingError
    }
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`ThrottlingException`](crate::error::ThrottlingException)
    pub fn builder() -> crate::error::throttling_exception::Builder {
        crate::error::throttling_exception::Builder::default()
    }
}
impl std::fmt::Display for ThrottlingException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ThrottlingException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for ThrottlingException {}
/// See [`ThrottlingException`](crate::error::ThrottlingException)
pub mod throttling_exception {
    /// A builder for [`ThrottlingException`](crate::error::ThrottlingException)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn message(mut self, inp: impl Into<std::string::String>) -> Self {
            self.message = Some(inp.into());
            self
        }
        pub fn set_message(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.message = inp;
            self
        }
        /// Consumes the builder and constructs a [`ThrottlingException`](crate::error::ThrottlingException)
        pub fn build(self) -> crate::error::ThrottlingException {
            crate::error::ThrottlingException {
                message: self.message,
            }
        }
    }
}

/// Validation exception error
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct ValidationException {
    #[serde(rename = "message")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub message: std::option::Option<std::string::String>,
    #[serde(rename = "reason")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub reason: std::option::Option<crate::model::ValidationExceptionReason>,
    #[serde(rename = "fieldList")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub field_list: std::option::Option<std::vec::Vec<crate::model::ValidationExceptionField>>,
}
impl ValidationException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`ValidationException`](crate::error::ValidationException)
    pub fn builder() -> crate::error::validation_exception::Builder {
        crate::error::validation_exception::Builder::default()
    }
}
impl std::fmt::Display for ValidationException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ValidationException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for ValidationException {}
/// See [`ValidationException`](crate::error::ValidationException)
pub mod validation_exception {
    /// A builder for [`ValidationException`](crate::error::ValidationException)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
        reason: std::option::Option<crate::model::ValidationExceptionReason>,
        field_list: std::option::Option<std::vec::Vec<crate::model::ValidationExceptionField>>,
    }
    impl Builder {
        pub fn message(mut self, inp: impl Into<std::string::String>) -> Self {
            self.message = Some(inp.into());
            self
        }
        pub fn set_message(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.message = inp;
            self
        }
        pub fn reason(mut self, inp: crate::model::ValidationExceptionReason) -> Self {
            self.reason = Some(inp);
            self
        }
        pub fn set_reason(
            mut self,
            inp: std::option::Option<crate::model::ValidationExceptionReason>,
        ) -> Self {
            self.reason = inp;
            self
        }
        pub fn field_list(
            mut self,
            inp: impl Into<crate::model::ValidationExceptionField>,
        ) -> Self {
            let mut v = self.field_list.unwrap_or_default();
            v.push(inp.into());
            self.field_list = Some(v);
            self
        }
        pub fn set_field_list(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::ValidationExceptionField>>,
        ) -> Self {
            self.field_list = inp;
            self
        }
        /// Consumes the builder and constructs a [`ValidationException`](crate::error::ValidationException)
        pub fn build(self) -> crate::error::ValidationException {
            crate::error::ValidationException {
                message: self.message,
                reason: self.reason,
                field_list: self.field_list,
            }
        }
    }
}
