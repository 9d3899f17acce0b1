/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Error type for the `CreateInput` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct CreateInputError {
    pub kind: CreateInputErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `CreateInput` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum CreateInputErrorKind {
    InvalidRequestException(crate::error::InvalidRequestException),
    ThrottlingException(crate::error::ThrottlingException),
    InternalFailureException(crate::error::InternalFailureException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    ResourceAlreadyExistsException(crate::error::ResourceAlreadyExistsException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for CreateInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            CreateInputErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateInputErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateInputErrorKind::InternalFailureException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateInputErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateInputErrorKind::ResourceAlreadyExistsException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateInputErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for CreateInputError {
    fn code(&self) -> Option<&str> {
        CreateInputError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            CreateInputErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            CreateInputErrorKind::InternalFailureException(inner) => Some(inner.retryable_error_kind()),
            CreateInputErrorKind::ServiceUnavailableException(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl CreateInputError {
    pub fn new(kind: CreateInputErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreateInputErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CreateInputErrorKind::Unhandled(err.into()),
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

    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, CreateInputErrorKind::InvalidRequestException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, CreateInputErrorKind::ThrottlingException(_))
    }

    pub fn is_internal_failure_exception(&self) -> bool {
        matches!(&self.kind, CreateInputErrorKind::InternalFailureException(_))
    }

    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, CreateInputErrorKind::ServiceUnavailableException(_))
    }

    pub fn is_resource_already_exists_exception(&self) -> bool {
        matches!(&self.kind, CreateInputErrorKind::ResourceAlreadyExistsException(_))
    }
}
impl std::error::Error for CreateInputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreateInputErrorKind::InvalidRequestException(_inner) => Some(_inner),
            CreateInputErrorKind::ThrottlingException(_inner) => Some(_inner),
            CreateInputErrorKind::InternalFailureException(_inner) => Some(_inner),
            CreateInputErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            CreateInputErrorKind::ResourceAlreadyExistsException(_inner) => Some(_inner),
            CreateInputErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeInput` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DescribeInputError {
    pub kind: DescribeInputErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DescribeInput` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DescribeInputErrorKind {
    InvalidRequestException(crate::error::InvalidRequestException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    ThrottlingException(crate::error::ThrottlingException),
    InternalFailureException(crate::error::InternalFailureException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DescribeInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DescribeInputErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeInputErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeInputErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeInputErrorKind::InternalFailureException(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeInputErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeInputErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DescribeInputError {
    fn code(&self) -> Option<&str> {
        DescribeInputError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            DescribeInputErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            DescribeInputErrorKind::InternalFailureException(inner) => Some(inner.retryable_error_kind()),
            DescribeInputErrorKind::ServiceUnavailableException(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl DescribeInputError {
    pub fn new(kind: DescribeInputErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeInputErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeInputErrorKind::Unhandled(err.into()),
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

    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, DescribeInputErrorKind::InvalidRequestException(_))
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, DescribeInputErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, DescribeInputErrorKind::ThrottlingException(_))
    }

    pub fn is_internal_failure_exception(&self) -> bool {
        matches!(&self.kind, DescribeInputErrorKind::InternalFailureException(_))
    }

    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, DescribeInputErrorKind::ServiceUnavailableException(_))
    }
}
impl std::error::Error for DescribeInputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeInputErrorKind::InvalidRequestException(_inner) => Some(_inner),
            DescribeInputErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            DescribeInputErrorKind::ThrottlingException(_inner) => Some(_inner),
            DescribeInputErrorKind::InternalFailureException(_inner) => Some(_inner),
            DescribeInputErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            DescribeInputErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `ListInputs` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListInputsError {
    pub kind: ListInputsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ListInputs` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListInputsErrorKind {
    InvalidRequestException(crate::error::InvalidRequestException),
    ThrottlingException(crate::error::ThrottlingException),
    InternalFailureException(crate::error::InternalFailureException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListInputsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListInputsErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListInputsErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListInputsErrorKind::InternalFailureException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListInputsErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListInputsErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for ListInputsError {
    fn code(&self) -> Option<&str> {
        ListInputsError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            ListInputsErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            ListInputsErrorKind::InternalFailureException(inner) => Some(inner.retryable_error_kind()),
            ListInputsErrorKind::ServiceUnavailableException(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl ListInputsError {
    pub fn new(kind: ListInputsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListInputsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListInputsErrorKind::Unhandled(err.into()),
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

    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, ListInputsErrorKind::InvalidRequestException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, ListInputsErrorKind::ThrottlingException(_))
    }

    pub fn is_internal_failure_exception(&self) -> bool {
        matches!(&self.kind, ListInputsErrorKind::InternalFailureException(_))
    }

    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, ListInputsErrorKind::ServiceUnavailableException(_))
    }
}
impl std::error::Error for ListInputsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListInputsErrorKind::InvalidRequestException(_inner) => Some(_inner),
            ListInputsErrorKind::ThrottlingException(_inner) => Some(_inner),
            ListInputsErrorKind::InternalFailureException(_inner) => Some(_inner),
            ListInputsErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            ListInputsErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `UpdateInput` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct UpdateInputError {
    pub kind: UpdateInputErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `UpdateInput` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum UpdateInputErrorKind {
    InvalidRequestException(crate::error::InvalidRequestException),
    ThrottlingException(crate::error::ThrottlingException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    InternalFailureException(crate::error::InternalFailureException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    ResourceInUseException(crate::error::ResourceInUseException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for UpdateInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            UpdateInputErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateInputErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateInputErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateInputErrorKind::InternalFailureException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateInputErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateInputErrorKind::ResourceInUseException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateInputErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for UpdateInputError {
    fn code(&self) -> Option<&str> {
        UpdateInputError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            UpdateInputErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            UpdateInputErrorKind::InternalFailureException(inner) => Some(inner.retryable_error_kind()),
            UpdateInputErrorKind::ServiceUnavailableException(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl UpdateInputError {
    pub fn new(kind: UpdateInputErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: UpdateInputErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: UpdateInputErrorKind::Unhandled(err.into()),
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

    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, UpdateInputErrorKind::InvalidRequestException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, UpdateInputErrorKind::ThrottlingException(_))
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, UpdateInputErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_internal_failure_exception(&self) -> bool {
        matches!(&self.kind, UpdateInputErrorKind::InternalFailureException(_))
    }

    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, UpdateInputErrorKind::ServiceUnavailableException(_))
    }

    pub fn is_resource_in_use_exception(&self) -> bool {
        matches!(&self.kind, UpdateInputErrorKind::ResourceInUseException(_))
    }
}
impl std::error::Error for UpdateInputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            UpdateInputErrorKind::InvalidRequestException(_inner) => Some(_inner),
            UpdateInputErrorKind::ThrottlingException(_inner) => Some(_inner),
            UpdateInputErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            UpdateInputErrorKind::InternalFailureException(_inner) => Some(_inner),
            UpdateInputErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            UpdateInputErrorKind::ResourceInUseException(_inner) => Some(_inner),
            UpdateInputErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DeleteInput` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DeleteInputError {
    pub kind: DeleteInputErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DeleteInput` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DeleteInputErrorKind {
    InvalidRequestException(crate::error::InvalidRequestException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    ThrottlingException(crate::error::ThrottlingException),
    InternalFailureException(crate::error::InternalFailureException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    ResourceInUseException(crate::error::ResourceInUseException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DeleteInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DeleteInputErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteInputErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteInputErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteInputErrorKind::InternalFailureException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteInputErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteInputErrorKind::ResourceInUseException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteInputErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DeleteInputError {
    fn code(&self) -> Option<&str> {
        DeleteInputError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            DeleteInputErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            DeleteInputErrorKind::InternalFailureException(inner) => Some(inner.retryable_error_kind()),
            DeleteInputErrorKind::ServiceUnavailableException(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl DeleteInputError {
    pub fn new(kind: DeleteInputErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DeleteInputErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DeleteInputErrorKind::Unhandled(err.into()),
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

    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, DeleteInputErrorKind::InvalidRequestException(_))
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, DeleteInputErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, DeleteInputErrorKind::ThrottlingException(_))
    }

    pub fn is_internal_failure_exception(&self) -> bool {
        matches!(&self.kind, DeleteInputErrorKind::InternalFailureException(_))
    }

    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, DeleteInputErrorKind::ServiceUnavailableException(_))
    }

    pub fn is_resource_in_use_exception(&self) -> bool {
        matches!(&self.kind, DeleteInputErrorKind::ResourceInUseException(_))
    }
}
impl std::error::Error for DeleteInputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DeleteInputErrorKind::InvalidRequestException(_inner) => Some(_inner),
            DeleteInputErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            DeleteInputErrorKind::ThrottlingException(_inner) => Some(_inner),
            DeleteInputErrorKind::InternalFailureException(_inner) => Some(_inner),
            DeleteInputErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            DeleteInputErrorKind::ResourceInUseException(_inner) => Some(_inner),
            DeleteInputErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `CreateDetectorModel` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct CreateDetectorModelError {
    pub kind: CreateDetectorModelErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `CreateDetectorModel` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum CreateDetectorModelErrorKind {
    InvalidRequestException(crate::error::InvalidRequestException),
    ResourceInUseException(crate::error::ResourceInUseException),
    ResourceAlreadyExistsException(crate::error::ResourceAlreadyExistsException),
    LimitExceededException(crate::error::LimitExceededException),
    ThrottlingException(crate::error::ThrottlingException),
    InternalFailureException(crate::error::InternalFailureException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for CreateDetectorModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            CreateDetectorModelErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateDetectorModelErrorKind::ResourceInUseException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateDetectorModelErrorKind::ResourceAlreadyExistsException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateDetectorModelErrorKind::LimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateDetectorModelErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateDetectorModelErrorKind::InternalFailureException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateDetectorModelErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateDetectorModelErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for CreateDetectorModelError {
    fn code(&self) -> Option<&str> {
        CreateDetectorModelError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            CreateDetectorModelErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            CreateDetectorModelErrorKind::InternalFailureException(inner) => Some(inner.retryable_error_kind()),
            CreateDetectorModelErrorKind::ServiceUnavailableException(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl CreateDetectorModelError {
    pub fn new(kind: CreateDetectorModelErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreateDetectorModelErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CreateDetectorModelErrorKind::Unhandled(err.into()),
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

    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, CreateDetectorModelErrorKind::InvalidRequestException(_))
    }

    pub fn is_resource_in_use_exception(&self) -> bool {
        matches!(&self.kind, CreateDetectorModelErrorKind::ResourceInUseException(_))
    }

    pub fn is_resource_already_exists_exception(&self) -> bool {
        matches!(&self.kind, CreateDetectorModelErrorKind::ResourceAlreadyExistsException(_))
    }

    pub fn is_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, CreateDetectorModelErrorKind::LimitExceededException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, CreateDetectorModelErrorKind::ThrottlingException(_))
    }

    pub fn is_internal_failure_exception(&self) -> bool {
        matches!(&self.kind, CreateDetectorModelErrorKind::InternalFailureException(_))
    }

    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, CreateDetectorModelErrorKind::ServiceUnavailableException(_))
    }
}
impl std::error::Error for CreateDetectorModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreateDetectorModelErrorKind::InvalidRequestException(_inner) => Some(_inner),
            CreateDetectorModelErrorKind::ResourceInUseException(_inner) => Some(_inner),
            CreateDetectorModelErrorKind::ResourceAlreadyExistsException(_inner) => Some(_inner),
            CreateDetectorModelErrorKind::LimitExceededException(_inner) => Some(_inner),
            CreateDetectorModelErrorKind::ThrottlingException(_inner) => Some(_inner),
            CreateDetectorModelErrorKind::InternalFailureException(_inner) => Some(_inner),
            CreateDetectorModelErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            CreateDetectorModelErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeDetectorModel` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DescribeDetectorModelError {
    pub kind: DescribeDetectorModelErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DescribeDetectorModel` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DescribeDetectorModelErrorKind {
    InvalidRequestException(crate::error::InvalidRequestException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    ThrottlingException(crate::error::ThrottlingException),
    InternalFailureException(crate::error::InternalFailureException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DescribeDetectorModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DescribeDetectorModelErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeDetectorModelErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeDetectorModelErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeDetectorModelErrorKind::InternalFailureException(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeDetectorModelErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeDetectorModelErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DescribeDetectorModelError {
    fn code(&self) -> Option<&str> {
        DescribeDetectorModelError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            DescribeDetectorModelErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            DescribeDetectorModelErrorKind::InternalFailureException(inner) => Some(inner.retryable_error_kind()),
            DescribeDetectorModelErrorKind::ServiceUnavailableException(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl DescribeDetectorModelError {
    pub fn new(kind: DescribeDetectorModelErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeDetectorModelErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeDetectorModelErrorKind::Unhandled(err.into()),
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

    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, DescribeDetectorModelErrorKind::InvalidRequestException(_))
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, DescribeDetectorModelErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, DescribeDetectorModelErrorKind::ThrottlingException(_))
    }

    pub fn is_internal_failure_exception(&self) -> bool {
        matches!(&self.kind, DescribeDetectorModelErrorKind::InternalFailureException(_))
    }

    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, DescribeDetectorModelErrorKind::ServiceUnavailableException(_))
    }
}
impl std::error::Error for DescribeDetectorModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeDetectorModelErrorKind::InvalidRequestException(_inner) => Some(_inner),
            DescribeDetectorModelErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            DescribeDetectorModelErrorKind::ThrottlingException(_inner) => Some(_inner),
            DescribeDetectorModelErrorKind::InternalFailureException(_inner) => Some(_inner),
            DescribeDetectorModelErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            DescribeDetectorModelErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `UpdateDetectorModel` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct UpdateDetectorModelError {
    pub kind: UpdateDetectorModelErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `UpdateDetectorModel` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum UpdateDetectorModelErrorKind {
    InvalidRequestException(crate::error::InvalidRequestException),
    ResourceInUseException(crate::error::ResourceInUseException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    ThrottlingException(crate::error::ThrottlingException),
    InternalFailureException(crate::error::InternalFailureException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for UpdateDetectorModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            UpdateDetectorModelErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateDetectorModelErrorKind::ResourceInUseException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateDetectorModelErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateDetectorModelErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateDetectorModelErrorKind::InternalFailureException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateDetectorModelErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateDetectorModelErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for UpdateDetectorModelError {
    fn code(&self) -> Option<&str> {
        UpdateDetectorModelError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            UpdateDetectorModelErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            UpdateDetectorModelErrorKind::InternalFailureException(inner) => Some(inner.retryable_error_kind()),
            UpdateDetectorModelErrorKind::ServiceUnavailableException(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl UpdateDetectorModelError {
    pub fn new(kind: UpdateDetectorModelErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: UpdateDetectorModelErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: UpdateDetectorModelErrorKind::Unhandled(err.into()),
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

    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, UpdateDetectorModelErrorKind::InvalidRequestException(_))
    }

    pub fn is_resource_in_use_exception(&self) -> bool {
        matches!(&self.kind, UpdateDetectorModelErrorKind::ResourceInUseException(_))
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, UpdateDetectorModelErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, UpdateDetectorModelErrorKind::ThrottlingException(_))
    }

    pub fn is_internal_failure_exception(&self) -> bool {
        matches!(&self.kind, UpdateDetectorModelErrorKind::InternalFailureException(_))
    }

    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, UpdateDetectorModelErrorKind::ServiceUnavailableException(_))
    }
}
impl std::error::Error for UpdateDetectorModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            UpdateDetectorModelErrorKind::InvalidRequestException(_inner) => Some(_inner),
            UpdateDetectorModelErrorKind::ResourceInUseException(_inner) => Some(_inner),
            UpdateDetectorModelErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            UpdateDetectorModelErrorKind::ThrottlingException(_inner) => Some(_inner),
            UpdateDetectorModelErrorKind::InternalFailureException(_inner) => Some(_inner),
            UpdateDetectorModelErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            UpdateDetectorModelErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `ListDetectorModels` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListDetectorModelsError {
    pub kind: ListDetectorModelsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ListDetectorModels` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListDetectorModelsErrorKind {
    InvalidRequestException(crate::error::InvalidRequestException),
    ThrottlingException(crate::error::ThrottlingException),
    InternalFailureException(crate::error::InternalFailureException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListDetectorModelsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListDetectorModelsErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListDetectorModelsErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListDetectorModelsErrorKind::InternalFailureException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListDetectorModelsErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListDetectorModelsErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for ListDetectorModelsError {
    fn code(&self) -> Option<&str> {
        ListDetectorModelsError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            ListDetectorModelsErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            ListDetectorModelsErrorKind::InternalFailureException(inner) => Some(inner.retryable_error_kind()),
            ListDetectorModelsErrorKind::ServiceUnavailableException(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl ListDetectorModelsError {
    pub fn new(kind: ListDetectorModelsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListDetectorModelsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListDetectorModelsErrorKind::Unhandled(err.into()),
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

    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, ListDetectorModelsErrorKind::InvalidRequestException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, ListDetectorModelsErrorKind::ThrottlingException(_))
    }

    pub fn is_internal_failure_exception(&self) -> bool {
        matches!(&self.kind, ListDetectorModelsErrorKind::InternalFailureException(_))
    }

    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, ListDetectorModelsErrorKind::ServiceUnavailableException(_))
    }
}
impl std::error::Error for ListDetectorModelsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListDetectorModelsErrorKind::InvalidRequestException(_inner) => Some(_inner),
            ListDetectorModelsErrorKind::ThrottlingException(_inner) => Some(_inner),
            ListDetectorModelsErrorKind::InternalFailureException(_inner) => Some(_inner),
            ListDetectorModelsErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            ListDetectorModelsErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `ListDetectorModelVersions` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListDetectorModelVersionsError {
    pub kind: ListDetectorModelVersionsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ListDetectorModelVersions` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListDetectorModelVersionsErrorKind {
    InvalidRequestException(crate::error::InvalidRequestException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    ThrottlingException(crate::error::ThrottlingException),
    InternalFailureException(crate::error::InternalFailureException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListDetectorModelVersionsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListDetectorModelVersionsErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListDetectorModelVersionsErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListDetectorModelVersionsErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListDetectorModelVersionsErrorKind::InternalFailureException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListDetectorModelVersionsErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListDetectorModelVersionsErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for ListDetectorModelVersionsError {
    fn code(&self) -> Option<&str> {
        ListDetectorModelVersionsError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            ListDetectorModelVersionsErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            ListDetectorModelVersionsErrorKind::InternalFailureException(inner) => Some(inner.retryable_error_kind()),
            ListDetectorModelVersionsErrorKind::ServiceUnavailableException(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl ListDetectorModelVersionsError {
    pub fn new(kind: ListDetectorModelVersionsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListDetectorModelVersionsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListDetectorModelVersionsErrorKind::Unhandled(err.into()),
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

    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, ListDetectorModelVersionsErrorKind::InvalidRequestException(_))
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, ListDetectorModelVersionsErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, ListDetectorModelVersionsErrorKind::ThrottlingException(_))
    }

    pub fn is_internal_failure_exception(&self) -> bool {
        matches!(&self.kind, ListDetectorModelVersionsErrorKind::InternalFailureException(_))
    }

    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, ListDetectorModelVersionsErrorKind::ServiceUnavailableException(_))
    }
}
impl std::error::Error for ListDetectorModelVersionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListDetectorModelVersionsErrorKind::InvalidRequestException(_inner) => Some(_inner),
            ListDetectorModelVersionsErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            ListDetectorModelVersionsErrorKind::ThrottlingException(_inner) => Some(_inner),
            ListDetectorModelVersionsErrorKind::InternalFailureException(_inner) => Some(_inner),
            ListDetectorModelVersionsErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            ListDetectorModelVersionsErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DeleteDetectorModel` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DeleteDetectorModelError {
    pub kind: DeleteDetectorModelErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DeleteDetectorModel` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DeleteDetectorModelErrorKind {
    InvalidRequestException(crate::error::InvalidRequestException),
    ResourceInUseException(crate::error::ResourceInUseException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    ThrottlingException(crate::error::ThrottlingException),
    InternalFailureException(crate::error::InternalFailureException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DeleteDetectorModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DeleteDetectorModelErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteDetectorModelErrorKind::ResourceInUseException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteDetectorModelErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteDetectorModelErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteDetectorModelErrorKind::InternalFailureException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteDetectorModelErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteDetectorModelErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DeleteDetectorModelError {
    fn code(&self) -> Option<&str> {
        DeleteDetectorModelError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            DeleteDetectorModelErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            DeleteDetectorModelErrorKind::InternalFailureException(inner) => Some(inner.retryable_error_kind()),
            DeleteDetectorModelErrorKind::ServiceUnavailableException(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl DeleteDetectorModelError {
    pub fn new(kind: DeleteDetectorModelErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DeleteDetectorModelErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DeleteDetectorModelErrorKind::Unhandled(err.into()),
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

    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, DeleteDetectorModelErrorKind::InvalidRequestException(_))
    }

    pub fn is_resource_in_use_exception(&self) -> bool {
        matches!(&self.kind, DeleteDetectorModelErrorKind::ResourceInUseException(_))
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, DeleteDetectorModelErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, DeleteDetectorModelErrorKind::ThrottlingException(_))
    }

    pub fn is_internal_failure_exception(&self) -> bool {
        matches!(&self.kind, DeleteDetectorModelErrorKind::InternalFailureException(_))
    }

    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, DeleteDetectorModelErrorKind::ServiceUnavailableException(_))
    }
}
impl std::error::Error for DeleteDetectorModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DeleteDetectorModelErrorKind::InvalidRequestException(_inner) => Some(_inner),
            DeleteDetectorModelErrorKind::ResourceInUseException(_inner) => Some(_inner),
            DeleteDetectorModelErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            DeleteDetectorModelErrorKind::ThrottlingException(_inner) => Some(_inner),
            DeleteDetectorModelErrorKind::InternalFailureException(_inner) => Some(_inner),
            DeleteDetectorModelErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            DeleteDetectorModelErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeLoggingOptions` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DescribeLoggingOptionsError {
    pub kind: DescribeLoggingOptionsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DescribeLoggingOptions` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DescribeLoggingOptionsErrorKind {
    InvalidRequestException(crate::error::InvalidRequestException),
    ThrottlingException(crate::error::ThrottlingException),
    InternalFailureException(crate::error::InternalFailureException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    UnsupportedOperationException(crate::error::UnsupportedOperationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DescribeLoggingOptionsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DescribeLoggingOptionsErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeLoggingOptionsErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeLoggingOptionsErrorKind::InternalFailureException(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeLoggingOptionsErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeLoggingOptionsErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeLoggingOptionsErrorKind::UnsupportedOperationException(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeLoggingOptionsErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DescribeLoggingOptionsError {
    fn code(&self) -> Option<&str> {
        DescribeLoggingOptionsError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            DescribeLoggingOptionsErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            DescribeLoggingOptionsErrorKind::InternalFailureException(inner) => Some(inner.retryable_error_kind()),
            DescribeLoggingOptionsErrorKind::ServiceUnavailableException(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl DescribeLoggingOptionsError {
    pub fn new(kind: DescribeLoggingOptionsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeLoggingOptionsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeLoggingOptionsErrorKind::Unhandled(err.into()),
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

    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, DescribeLoggingOptionsErrorKind::InvalidRequestException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, DescribeLoggingOptionsErrorKind::ThrottlingException(_))
    }

    pub fn is_internal_failure_exception(&self) -> bool {
        matches!(&self.kind, DescribeLoggingOptionsErrorKind::InternalFailureException(_))
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, DescribeLoggingOptionsErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, DescribeLoggingOptionsErrorKind::ServiceUnavailableException(_))
    }

    pub fn is_unsupported_operation_exception(&self) -> bool {
        matches!(&self.kind, DescribeLoggingOptionsErrorKind::UnsupportedOperationException(_))
    }
}
impl std::error::Error for DescribeLoggingOptionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeLoggingOptionsErrorKind::InvalidRequestException(_inner) => Some(_inner),
            DescribeLoggingOptionsErrorKind::ThrottlingException(_inner) => Some(_inner),
            DescribeLoggingOptionsErrorKind::InternalFailureException(_inner) => Some(_inner),
            DescribeLoggingOptionsErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            DescribeLoggingOptionsErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            DescribeLoggingOptionsErrorKind::UnsupportedOperationException(_inner) => Some(_inner),
            DescribeLoggingOptionsErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `PutLoggingOptions` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct PutLoggingOptionsError {
    pub kind: PutLoggingOptionsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `PutLoggingOptions` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum PutLoggingOptionsErrorKind {
    InvalidRequestException(crate::error::InvalidRequestException),
    ThrottlingException(crate::error::ThrottlingException),
    InternalFailureException(crate::error::InternalFailureException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    UnsupportedOperationException(crate::error::UnsupportedOperationException),
    ResourceInUseException(crate::error::ResourceInUseException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for PutLoggingOptionsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            PutLoggingOptionsErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            PutLoggingOptionsErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            PutLoggingOptionsErrorKind::InternalFailureException(_inner) => std::fmt::Display::fmt(_inner, f),
            PutLoggingOptionsErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            PutLoggingOptionsErrorKind::UnsupportedOperationException(_inner) => std::fmt::Display::fmt(_inner, f),
            PutLoggingOptionsErrorKind::ResourceInUseException(_inner) => std::fmt::Display::fmt(_inner, f),
            PutLoggingOptionsErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for PutLoggingOptionsError {
    fn code(&self) -> Option<&str> {
        PutLoggingOptionsError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            PutLoggingOptionsErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            PutLoggingOptionsErrorKind::InternalFailureException(inner) => Some(inner.retryable_error_kind()),
            PutLoggingOptionsErrorKind::ServiceUnavailableException(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl PutLoggingOptionsError {
    pub fn new(kind: PutLoggingOptionsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: PutLoggingOptionsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: PutLoggingOptionsErrorKind::Unhandled(err.into()),
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

    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, PutLoggingOptionsErrorKind::InvalidRequestException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, PutLoggingOptionsErrorKind::ThrottlingException(_))
    }

    pub fn is_internal_failure_exception(&self) -> bool {
        matches!(&self.kind, PutLoggingOptionsErrorKind::InternalFailureException(_))
    }

    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, PutLoggingOptionsErrorKind::ServiceUnavailableException(_))
    }

    pub fn is_unsupported_operation_exception(&self) -> bool {
        matches!(&self.kind, PutLoggingOptionsErrorKind::UnsupportedOperationException(_))
    }

    pub fn is_resource_in_use_exception(&self) -> bool {
        matches!(&self.kind, PutLoggingOptionsErrorKind::ResourceInUseException(_))
    }
}
impl std::error::Error for PutLoggingOptionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            PutLoggingOptionsErrorKind::InvalidRequestException(_inner) => Some(_inner),
            PutLoggingOptionsErrorKind::ThrottlingException(_inner) => Some(_inner),
            PutLoggingOptionsErrorKind::InternalFailureException(_inner) => Some(_inner),
            PutLoggingOptionsErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            PutLoggingOptionsErrorKind::UnsupportedOperationException(_inner) => Some(_inner),
            PutLoggingOptionsErrorKind::ResourceInUseException(_inner) => Some(_inner),
            PutLoggingOptionsErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
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
    InvalidRequestException(crate::error::InvalidRequestException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    ResourceInUseException(crate::error::ResourceInUseException),
    ThrottlingException(crate::error::ThrottlingException),
    InternalFailureException(crate::error::InternalFailureException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListTagsForResourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListTagsForResourceErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListTagsForResourceErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListTagsForResourceErrorKind::ResourceInUseException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListTagsForResourceErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListTagsForResourceErrorKind::InternalFailureException(_inner) => std::fmt::Display::fmt(_inner, f),
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
            ListTagsForResourceErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            ListTagsForResourceErrorKind::InternalFailureException(inner) => Some(inner.retryable_error_kind()),
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

    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, ListTagsForResourceErrorKind::InvalidRequestException(_))
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, ListTagsForResourceErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_resource_in_use_exception(&self) -> bool {
        matches!(&self.kind, ListTagsForResourceErrorKind::ResourceInUseException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, ListTagsForResourceErrorKind::ThrottlingException(_))
    }

    pub fn is_internal_failure_exception(&self) -> bool {
        matches!(&self.kind, ListTagsForResourceErrorKind::InternalFailureException(_))
    }
}
impl std::error::Error for ListTagsForResourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListTagsForResourceErrorKind::InvalidRequestException(_inner) => Some(_inner),
            ListTagsForResourceErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            ListTagsForResourceErrorKind::ResourceInUseException(_inner) => Some(_inner),
            ListTagsForResourceErrorKind::ThrottlingException(_inner) => Some(_inner),
            ListTagsForResourceErrorKind::InternalFailureException(_inner) => Some(_inner),
            ListTagsForResourceErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
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
    InvalidRequestException(crate::error::InvalidRequestException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    ResourceInUseException(crate::error::ResourceInUseException),
    ThrottlingException(crate::error::ThrottlingException),
    LimitExceededException(crate::error::LimitExceededException),
    InternalFailureException(crate::error::InternalFailureException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for TagResourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            TagResourceErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            TagResourceErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            TagResourceErrorKind::ResourceInUseException(_inner) => std::fmt::Display::fmt(_inner, f),
            TagResourceErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            TagResourceErrorKind::LimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            TagResourceErrorKind::InternalFailureException(_inner) => std::fmt::Display::fmt(_inner, f),
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
            TagResourceErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            TagResourceErrorKind::InternalFailureException(inner) => Some(inner.retryable_error_kind()),
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

    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, TagResourceErrorKind::InvalidRequestException(_))
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, TagResourceErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_resource_in_use_exception(&self) -> bool {
        matches!(&self.kind, TagResourceErrorKind::ResourceInUseException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, TagResourceErrorKind::ThrottlingException(_))
    }

    pub fn is_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, TagResourceErrorKind::LimitExceededException(_))
    }

    pub fn is_internal_failure_exception(&self) -> bool {
        matches!(&self.kind, TagResourceErrorKind::InternalFailureException(_))
    }
}
impl std::error::Error for TagResourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            TagResourceErrorKind::InvalidRequestException(_inner) => Some(_inner),
            TagResourceErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            TagResourceErrorKind::ResourceInUseException(_inner) => Some(_inner),
            TagResourceErrorKind::ThrottlingException(_inner) => Some(_inner),
            TagResourceErrorKind::LimitExceededException(_inner) => Some(_inner),
            TagResourceErrorKind::InternalFailureException(_inner) => Some(_inner),
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
    InvalidRequestException(crate::error::InvalidRequestException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    ResourceInUseException(crate::error::ResourceInUseException),
    ThrottlingException(crate::error::ThrottlingException),
    InternalFailureException(crate::error::InternalFailureException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for UntagResourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            UntagResourceErrorKind::InvalidRequestException(_inner) => std::fmt::Display::fmt(_inner, f),
            UntagResourceErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            UntagResourceErrorKind::ResourceInUseException(_inner) => std::fmt::Display::fmt(_inner, f),
            UntagResourceErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            UntagResourceErrorKind::InternalFailureException(_inner) => std::fmt::Display::fmt(_inner, f),
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
            UntagResourceErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            UntagResourceErrorKind::InternalFailureException(inner) => Some(inner.retryable_error_kind()),
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

    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(&self.kind, UntagResourceErrorKind::InvalidRequestException(_))
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, UntagResourceErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_resource_in_use_exception(&self) -> bool {
        matches!(&self.kind, UntagResourceErrorKind::ResourceInUseException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, UntagResourceErrorKind::ThrottlingException(_))
    }

    pub fn is_internal_failure_exception(&self) -> bool {
        matches!(&self.kind, UntagResourceErrorKind::InternalFailureException(_))
    }
}
impl std::error::Error for UntagResourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            UntagResourceErrorKind::InvalidRequestException(_inner) => Some(_inner),
            UntagResourceErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            UntagResourceErrorKind::ResourceInUseException(_inner) => Some(_inner),
            UntagResourceErrorKind::ThrottlingException(_inner) => Some(_inner),
            UntagResourceErrorKind::InternalFailureException(_inner) => Some(_inner),
            UntagResourceErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// The request was invalid
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct InvalidRequestException {
    #[serde(rename = "message")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub message: std::option::Option<std::string::String>,
}
impl InvalidRequestException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`InvalidRequestException`](crate::error::InvalidRequestException)
    pub fn builder() -> crate::error::invalid_request_exception::Builder {
        crate::error::invalid_request_exception::Builder::default()
    }
}
impl std::fmt::Display for InvalidRequestException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InvalidRequestException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for InvalidRequestException {}
/// See [`InvalidRequestException`](crate::error::InvalidRequestException)
pub mod invalid_request_exception {
    /// A builder for [`InvalidRequestException`](crate::error::InvalidRequestException)
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
        /// Consumes the builder and constructs a [`InvalidRequestException`](crate::error::InvalidRequestException)
        pub fn build(self) -> crate::error::InvalidRequestException {
            crate::error::InvalidRequestException {
                message: self.message,
            }
        }
    }
}

/// The resource was not found
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
        /// Consumes the builder and constructs a [`ResourceNotFoundException`](crate::error::ResourceNotFoundException)
        pub fn build(self) -> crate::error::ResourceNotFoundException {
            crate::error::ResourceNotFoundException {
                message: self.message,
            }
        }
    }
}

/// The resource already exists
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct ResourceAlreadyExistsException {
    #[serde(rename = "message")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub message: std::option::Option<std::string::String>,
    #[serde(rename = "resourceId")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_id: std::option::Option<std::string::String>,
    #[serde(rename = "resourceArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_arn: std::option::Option<std::string::String>,
}
impl ResourceAlreadyExistsException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`ResourceAlreadyExistsException`](crate::error::ResourceAlreadyExistsException)
    pub fn builder() -> crate::error::resource_already_exists_exception::Builder {
        crate::error::resource_already_exists_exception::Builder::default()
    }
}
impl std::fmt::Display for ResourceAlreadyExistsException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ResourceAlreadyExistsException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for ResourceAlreadyExistsException {}
/// See [`ResourceAlreadyExistsException`](crate::error::ResourceAlreadyExistsException)
pub mod resource_already_exists_exception {
    /// A builder for [`ResourceAlreadyExistsException`](crate::error::ResourceAlreadyExistsException)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
        resource_id: std::option::Option<std::string::String>,
        resource_arn: std::option::Option<std::string::String>,
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
        pub fn resource_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.resource_arn = Some(inp.into());
            self
        }
        pub fn set_resource_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.resource_arn = inp;
            self
        }
        /// Consumes the builder and constructs a [`ResourceAlreadyExistsException`](crate::error::ResourceAlreadyExistsException)
        pub fn build(self) -> crate::error::ResourceAlreadyExistsException {
            crate::error::ResourceAlreadyExistsException {
                message: self.message,
                resource_id: self.resource_id,
                resource_arn: self.resource_arn,
            }
        }
    }
}

/// The resource is in use
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct ResourceInUseException {
    #[serde(rename = "message")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub message: std::option::Option<std::string::String>,
}
impl ResourceInUseException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`ResourceInUseException`](crate::error::ResourceInUseException)
    pub fn builder() -> crate::error::resource_in_use_exception::Builder {
        crate::error::resource_in_use_exception::Builder::default()
    }
}
impl std::fmt::Display for ResourceInUseException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ResourceInUseException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for ResourceInUseException {}
/// See [`ResourceInUseException`](crate::error::ResourceInUseException)
pub mod resource_in_use_exception {
    /// A builder for [`ResourceInUseException`](crate::error::ResourceInUseException)
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
        /// Consumes the builder and constructs a [`ResourceInUseException`](crate::error::ResourceInUseException)
        pub fn build(self) -> crate::error::ResourceInUseException {
            crate::error::ResourceInUseException {
                message: self.message,
            }
        }
    }
}

/// A limit was exceeded
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct LimitExceededException {
    #[serde(rename = "message")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub message: std::option::Option<std::string::String>,
}
impl LimitExceededException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`LimitExceededException`](crate::error::LimitExceededException)
    pub fn builder() -> crate::error::limit_exceeded_exception::Builder {
        crate::error::limit_exceeded_exception::Builder::default()
    }
}
impl std::fmt::Display for LimitExceededException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LimitExceededException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for LimitExceededException {}
/// See [`LimitExceededException`](crate::error::LimitExceededException)
pub mod limit_exceeded_exception {
    /// A builder for [`LimitExceededException`](crate::error::LimitExceededException)
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
        /// Consumes the builder and constructs a [`LimitExceededException`](crate::error::LimitExceededException)
        pub fn build(self) -> crate::error::LimitExceededException {
            crate::error::LimitExceededException {
                message: self.message,
            }
        }
    }
}

/// The request could not be completed due to throttling
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

/// An internal failure occurred
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct InternalFailureException {
    #[serde(rename = "message")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub message: std::option::Option<std::string::String>,
}
impl InternalFailureException {
    pub fn retryable_error_kind(&self) -> smithy_types::retry::ErrorKind {
        smithy_types::retry::ErrorKind::ServerError
    }
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`InternalFailureException`](crate::error::InternalFailureException)
    pub fn builder() -> crate::error::internal_failure_exception::Builder {
        crate::error::internal_failure_exception::Builder::default()
    }
}
impl std::fmt::Display for InternalFailureException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InternalFailureException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for InternalFailureException {}
/// See [`InternalFailureException`](crate::error::InternalFailureException)
pub mod internal_failure_exception {
    /// A builder for [`InternalFailureException`](crate::error::InternalFailureException)
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
        /// Consumes the builder and constructs a [`InternalFailureException`](crate::error::InternalFailureException)
        pub fn build(self) -> crate::error::InternalFailureException {
            crate::error::InternalFailureException {
                message: self.message,
            }
        }
    }
}

/// The service is currently unavailable
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct ServiceUnavailableException {
    #[serde(rename = "message")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub message: std::option::Option<std::string::String>,
}
impl ServiceUnavailableException {
    pub fn retryable_error_kind(&self) -> smithy_types::retry::ErrorKind {
        smithy_types::retry::ErrorKind::ServerError
    }
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`ServiceUnavailableException`](crate::error::ServiceUnavailableException)
    pub fn builder() -> crate::error::service_unavailable_exception::Builder {
        crate::error::service_unavailable_exception::Builder::default()
    }
}
impl std::fmt::Display for ServiceUnavailableException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ServiceUnavailableException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for ServiceUnavailableException {}
/// See [`ServiceUnavailableException`](crate::error::ServiceUnavailableException)
pub mod service_unavailable_exception {
    /// A builder for [`ServiceUnavailableException`](crate::error::ServiceUnavailableException)
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
        /// Consumes the builder and constructs a [`ServiceUnavailableException`](crate::error::ServiceUnavailableException)
        pub fn build(self) -> crate::error::ServiceUnavailableException {
            crate::error::ServiceUnavailableException {
                message: self.message,
            }
        }
    }
}

/// The requested operation is not supported
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct UnsupportedOperationException {
    #[serde(rename = "message")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub message: std::option::Option<std::string::String>,
}
impl UnsupportedOperationException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`UnsupportedOperationException`](crate::error::UnsupportedOperationException)
    pub fn builder() -> crate::error::unsupported_operation_exception::Builder {
        crate::error::unsupported_operation_exception::Builder::default()
    }
}
impl std::fmt::Display for UnsupportedOperationException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "UnsupportedOperationException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for UnsupportedOperationException {}
/// See [`UnsupportedOperationException`](crate::error::UnsupportedOperationException)
pub mod unsupported_operation_exception {
    /// A builder for [`UnsupportedOperationException`](crate::error::UnsupportedOperationException)
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
        /// Consumes the builder and constructs a [`UnsupportedOperationException`](crate::error::UnsupportedOperationException)
        pub fn build(self) -> crate::error::UnsupportedOperationException {
            crate::error::UnsupportedOperationException {
                message: self.message,
            }
        }
    }
}
