/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Error type for the `GetScreenData` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct GetScreenDataError {
    pub kind: GetScreenDataErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `GetScreenData` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum GetScreenDataErrorKind {
    AccessDeniedException(crate::error::AccessDeniedException),
    InternalServerException(crate::error::InternalServerException),
    RequestTimeoutException(crate::error::RequestTimeoutException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    ThrottlingException(crate::error::ThrottlingException),
    ValidationException(crate::error::ValidationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for GetScreenDataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            GetScreenDataErrorKind::AccessDeniedException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetScreenDataErrorKind::InternalServerException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetScreenDataErrorKind::RequestTimeoutException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetScreenDataErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetScreenDataErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetScreenDataErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetScreenDataErrorKind::ValidationException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetScreenDataErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for GetScreenDataError {
    fn code(&self) -> Option<&str> {
        GetScreenDataError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            GetScreenDataErrorKind::InternalServerException(inner) => Some(inner.retryable_error_kind()),
            GetScreenDataErrorKind::RequestTimeoutException(inner) => Some(inner.retryable_error_kind()),
            GetScreenDataErrorKind::ServiceUnavailableException(inner) => Some(inner.retryable_error_kind()),
            GetScreenDataErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl GetScreenDataError {
    pub fn new(kind: GetScreenDataErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: GetScreenDataErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: GetScreenDataErrorKind::Unhandled(err.into()),
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
        matches!(&self.kind, GetScreenDataErrorKind::AccessDeniedException(_))
    }

    pub fn is_internal_server_exception(&self) -> bool {
        matches!(&self.kind, GetScreenDataErrorKind::InternalServerException(_))
    }

    pub fn is_request_timeout_exception(&self) -> bool {
        matches!(&self.kind, GetScreenDataErrorKind::RequestTimeoutException(_))
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, GetScreenDataErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, GetScreenDataErrorKind::ServiceUnavailableException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, GetScreenDataErrorKind::ThrottlingException(_))
    }

    pub fn is_validation_exception(&self) -> bool {
        matches!(&self.kind, GetScreenDataErrorKind::ValidationException(_))
    }
}
impl std::error::Error for GetScreenDataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            GetScreenDataErrorKind::AccessDeniedException(_inner) => Some(_inner),
            GetScreenDataErrorKind::InternalServerException(_inner) => Some(_inner),
            GetScreenDataErrorKind::RequestTimeoutException(_inner) => Some(_inner),
            GetScreenDataErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            GetScreenDataErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            GetScreenDataErrorKind::ThrottlingException(_inner) => Some(_inner),
            GetScreenDataErrorKind::ValidationException(_inner) => Some(_inner),
            GetScreenDataErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `InvokeScreenAutomation` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct InvokeScreenAutomationError {
    pub kind: InvokeScreenAutomationErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `InvokeScreenAutomation` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum InvokeScreenAutomationErrorKind {
    AutomationExecutionException(crate::error::AutomationExecutionException),
    AutomationExecutionTimeoutException(crate::error::AutomationExecutionTimeoutException),
    AccessDeniedException(crate::error::AccessDeniedException),
    InternalServerException(crate::error::InternalServerException),
    RequestTimeoutException(crate::error::RequestTimeoutException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    ThrottlingException(crate::error::ThrottlingException),
    ValidationException(crate::error::ValidationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for InvokeScreenAutomationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            InvokeScreenAutomationErrorKind::AutomationExecutionException(_inner) => std::fmt::Display::fmt(_inner, f),
            InvokeScreenAutomationErrorKind::AutomationExecutionTimeoutException(_inner) => std::fmt::Display::fmt(_inner, f),
            InvokeScreenAutomationErrorKind::AccessDeniedException(_inner) => std::fmt::Display::fmt(_inner, f),
            InvokeScreenAutomationErrorKind::InternalServerException(_inner) => std::fmt::Display::fmt(_inner, f),
            InvokeScreenAutomationErrorKind::RequestTimeoutException(_inner) => std::fmt::Display::fmt(_inner, f),
            InvokeScreenAutomationErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            InvokeScreenAutomationErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            InvokeScreenAutomationErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            InvokeScreenAutomationErrorKind::ValidationException(_inner) => std::fmt::Display::fmt(_inner, f),
            InvokeScreenAutomationErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for InvokeScreenAutomationError {
    fn code(&self) -> Option<&str> {
        InvokeScreenAutomationError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            InvokeScreenAutomationErrorKind::InternalServerException(inner) => Some(inner.retryable_error_kind()),
            InvokeScreenAutomationErrorKind::RequestTimeoutException(inner) => Some(inner.retryable_error_kind()),
            InvokeScreenAutomationErrorKind::ServiceUnavailableException(inner) => Some(inner.retryable_error_kind()),
            InvokeScreenAutomationErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl InvokeScreenAutomationError {
    pub fn new(kind: InvokeScreenAutomationErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: InvokeScreenAutomationErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: InvokeScreenAutomationErrorKind::Unhandled(err.into()),
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

    pub fn is_automation_execution_exception(&self) -> bool {
        matches!(&self.kind, InvokeScreenAutomationErrorKind::AutomationExecutionException(_))
    }

    pub fn is_automation_execution_timeout_exception(&self) -> bool {
        matches!(&self.kind, InvokeScreenAutomationErrorKind::AutomationExecutionTimeoutException(_))
    }

    pub fn is_access_denied_exception(&self) -> bool {
        matches!(&self.kind, InvokeScreenAutomationErrorKind::AccessDeniedException(_))
    }

    pub fn is_internal_server_exception(&self) -> bool {
        matches!(&self.kind, InvokeScreenAutomationErrorKind::InternalServerException(_))
    }

    pub fn is_request_timeout_exception(&self) -> bool {
        matches!(&self.kind, InvokeScreenAutomationErrorKind::RequestTimeoutException(_))
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, InvokeScreenAutomationErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, InvokeScreenAutomationErrorKind::ServiceUnavailableException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, InvokeScreenAutomationErrorKind::ThrottlingException(_))
    }

    pub fn is_validation_exception(&self) -> bool {
        matches!(&self.kind, InvokeScreenAutomationErrorKind::ValidationException(_))
    }
}
impl std::error::Error for InvokeScreenAutomationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            InvokeScreenAutomationErrorKind::AutomationExecutionException(_inner) => Some(_inner),
            InvokeScreenAutomationErrorKind::AutomationExecutionTimeoutException(_inner) => Some(_inner),
            InvokeScreenAutomationErrorKind::AccessDeniedException(_inner) => Some(_inner),
            InvokeScreenAutomationErrorKind::InternalServerException(_inner) => Some(_inner),
            InvokeScreenAutomationErrorKind::RequestTimeoutException(_inner) => Some(_inner),
            InvokeScreenAutomationErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            InvokeScreenAutomationErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            InvokeScreenAutomationErrorKind::ThrottlingException(_inner) => Some(_inner),
            InvokeScreenAutomationErrorKind::ValidationException(_inner) => Some(_inner),
            InvokeScreenAutomationErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `ListTables` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListTablesError {
    pub kind: ListTablesErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ListTables` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListTablesErrorKind {
    AccessDeniedException(crate::error::AccessDeniedException),
    InternalServerException(crate::error::InternalServerException),
    RequestTimeoutException(crate::error::RequestTimeoutException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    ThrottlingException(crate::error::ThrottlingException),
    ValidationException(crate::error::ValidationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListTablesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListTablesErrorKind::AccessDeniedException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListTablesErrorKind::InternalServerException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListTablesErrorKind::RequestTimeoutException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListTablesErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListTablesErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListTablesErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListTablesErrorKind::ValidationException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListTablesErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for ListTablesError {
    fn code(&self) -> Option<&str> {
        ListTablesError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            ListTablesErrorKind::InternalServerException(inner) => Some(inner.retryable_error_kind()),
            ListTablesErrorKind::RequestTimeoutException(inner) => Some(inner.retryable_error_kind()),
            ListTablesErrorKind::ServiceUnavailableException(inner) => Some(inner.retryable_error_kind()),
            ListTablesErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl ListTablesError {
    pub fn new(kind: ListTablesErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListTablesErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListTablesErrorKind::Unhandled(err.into()),
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
        matches!(&self.kind, ListTablesErrorKind::AccessDeniedException(_))
    }

    pub fn is_internal_server_exception(&self) -> bool {
        matches!(&self.kind, ListTablesErrorKind::InternalServerException(_))
    }

    pub fn is_request_timeout_exception(&self) -> bool {
        matches!(&self.kind, ListTablesErrorKind::RequestTimeoutException(_))
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, ListTablesErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, ListTablesErrorKind::ServiceUnavailableException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, ListTablesErrorKind::ThrottlingException(_))
    }

    pub fn is_validation_exception(&self) -> bool {
        matches!(&self.kind, ListTablesErrorKind::ValidationException(_))
    }
}
impl std::error::Error for ListTablesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListTablesErrorKind::AccessDeniedException(_inner) => Some(_inner),
            ListTablesErrorKind::InternalServerException(_inner) => Some(_inner),
            ListTablesErrorKind::RequestTimeoutException(_inner) => Some(_inner),
            ListTablesErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            ListTablesErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            ListTablesErrorKind::ThrottlingException(_inner) => Some(_inner),
            ListTablesErrorKind::ValidationException(_inner) => Some(_inner),
            ListTablesErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `ListTableColumns` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListTableColumnsError {
    pub kind: ListTableColumnsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ListTableColumns` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListTableColumnsErrorKind {
    AccessDeniedException(crate::error::AccessDeniedException),
    InternalServerException(crate::error::InternalServerException),
    RequestTimeoutException(crate::error::RequestTimeoutException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    ThrottlingException(crate::error::ThrottlingException),
    ValidationException(crate::error::ValidationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListTableColumnsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListTableColumnsErrorKind::AccessDeniedException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListTableColumnsErrorKind::InternalServerException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListTableColumnsErrorKind::RequestTimeoutException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListTableColumnsErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListTableColumnsErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListTableColumnsErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListTableColumnsErrorKind::ValidationException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListTableColumnsErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for ListTableColumnsError {
    fn code(&self) -> Option<&str> {
        ListTableColumnsError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            ListTableColumnsErrorKind::InternalServerException(inner) => Some(inner.retryable_error_kind()),
            ListTableColumnsErrorKind::RequestTimeoutException(inner) => Some(inner.retryable_error_kind()),
            ListTableColumnsErrorKind::ServiceUnavailableException(inner) => Some(inner.retryable_error_kind()),
            ListTableColumnsErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl ListTableColumnsError {
    pub fn new(kind: ListTableColumnsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListTableColumnsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListTableColumnsErrorKind::Unhandled(err.into()),
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
        matches!(&self.kind, ListTableColumnsErrorKind::AccessDeniedException(_))
    }

    pub fn is_internal_server_exception(&self) -> bool {
        matches!(&self.kind, ListTableColumnsErrorKind::InternalServerException(_))
    }

    pub fn is_request_timeout_exception(&self) -> bool {
        matches!(&self.kind, ListTableColumnsErrorKind::RequestTimeoutException(_))
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, ListTableColumnsErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, ListTableColumnsErrorKind::ServiceUnavailableException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, ListTableColumnsErrorKind::ThrottlingException(_))
    }

    pub fn is_validation_exception(&self) -> bool {
        matches!(&self.kind, ListTableColumnsErrorKind::ValidationException(_))
    }
}
impl std::error::Error for ListTableColumnsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListTableColumnsErrorKind::AccessDeniedException(_inner) => Some(_inner),
            ListTableColumnsErrorKind::InternalServerException(_inner) => Some(_inner),
            ListTableColumnsErrorKind::RequestTimeoutException(_inner) => Some(_inner),
            ListTableColumnsErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            ListTableColumnsErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            ListTableColumnsErrorKind::ThrottlingException(_inner) => Some(_inner),
            ListTableColumnsErrorKind::ValidationException(_inner) => Some(_inner),
            ListTableColumnsErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `ListTableRows` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ListTableRowsError {
    pub kind: ListTableRowsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `ListTableRows` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ListTableRowsErrorKind {
    AccessDeniedException(crate::error::AccessDeniedException),
    InternalServerException(crate::error::InternalServerException),
    RequestTimeoutException(crate::error::RequestTimeoutException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    ThrottlingException(crate::error::ThrottlingException),
    ValidationException(crate::error::ValidationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListTableRowsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListTableRowsErrorKind::AccessDeniedException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListTableRowsErrorKind::InternalServerException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListTableRowsErrorKind::RequestTimeoutException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListTableRowsErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListTableRowsErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListTableRowsErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListTableRowsErrorKind::ValidationException(_inner) => std::fmt::Display::fmt(_inner, f),
            ListTableRowsErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for ListTableRowsError {
    fn code(&self) -> Option<&str> {
        ListTableRowsError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            ListTableRowsErrorKind::InternalServerException(inner) => Some(inner.retryable_error_kind()),
            ListTableRowsErrorKind::RequestTimeoutException(inner) => Some(inner.retryable_error_kind()),
            ListTableRowsErrorKind::ServiceUnavailableException(inner) => Some(inner.retryable_error_kind()),
            ListTableRowsErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl ListTableRowsError {
    pub fn new(kind: ListTableRowsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ListTableRowsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ListTableRowsErrorKind::Unhandled(err.into()),
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
        matches!(&self.kind, ListTableRowsErrorKind::AccessDeniedException(_))
    }

    pub fn is_internal_server_exception(&self) -> bool {
        matches!(&self.kind, ListTableRowsErrorKind::InternalServerException(_))
    }

    pub fn is_request_timeout_exception(&self) -> bool {
        matches!(&self.kind, ListTableRowsErrorKind::RequestTimeoutException(_))
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, ListTableRowsErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, ListTableRowsErrorKind::ServiceUnavailableException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, ListTableRowsErrorKind::ThrottlingException(_))
    }

    pub fn is_validation_exception(&self) -> bool {
        matches!(&self.kind, ListTableRowsErrorKind::ValidationException(_))
    }
}
impl std::error::Error for ListTableRowsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListTableRowsErrorKind::AccessDeniedException(_inner) => Some(_inner),
            ListTableRowsErrorKind::InternalServerException(_inner) => Some(_inner),
            ListTableRowsErrorKind::RequestTimeoutException(_inner) => Some(_inner),
            ListTableRowsErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            ListTableRowsErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            ListTableRowsErrorKind::ThrottlingException(_inner) => Some(_inner),
            ListTableRowsErrorKind::ValidationException(_inner) => Some(_inner),
            ListTableRowsErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `QueryTableRows` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct QueryTableRowsError {
    pub kind: QueryTableRowsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `QueryTableRows` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum QueryTableRowsErrorKind {
    AccessDeniedException(crate::error::AccessDeniedException),
    InternalServerException(crate::error::InternalServerException),
    RequestTimeoutException(crate::error::RequestTimeoutException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    ThrottlingException(crate::error::ThrottlingException),
    ValidationException(crate::error::ValidationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for QueryTableRowsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            QueryTableRowsErrorKind::AccessDeniedException(_inner) => std::fmt::Display::fmt(_inner, f),
            QueryTableRowsErrorKind::InternalServerException(_inner) => std::fmt::Display::fmt(_inner, f),
            QueryTableRowsErrorKind::RequestTimeoutException(_inner) => std::fmt::Display::fmt(_inner, f),
            QueryTableRowsErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            QueryTableRowsErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            QueryTableRowsErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            QueryTableRowsErrorKind::ValidationException(_inner) => std::fmt::Display::fmt(_inner, f),
            QueryTableRowsErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for QueryTableRowsError {
    fn code(&self) -> Option<&str> {
        QueryTableRowsError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            QueryTableRowsErrorKind::InternalServerException(inner) => Some(inner.retryable_error_kind()),
            QueryTableRowsErrorKind::RequestTimeoutException(inner) => Some(inner.retryable_error_kind()),
            QueryTableRowsErrorKind::ServiceUnavailableException(inner) => Some(inner.retryable_error_kind()),
            QueryTableRowsErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl QueryTableRowsError {
    pub fn new(kind: QueryTableRowsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: QueryTableRowsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: QueryTableRowsErrorKind::Unhandled(err.into()),
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
        matches!(&self.kind, QueryTableRowsErrorKind::AccessDeniedException(_))
    }

    pub fn is_internal_server_exception(&self) -> bool {
        matches!(&self.kind, QueryTableRowsErrorKind::InternalServerException(_))
    }

    pub fn is_request_timeout_exception(&self) -> bool {
        matches!(&self.kind, QueryTableRowsErrorKind::RequestTimeoutException(_))
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, QueryTableRowsErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, QueryTableRowsErrorKind::ServiceUnavailableException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, QueryTableRowsErrorKind::ThrottlingException(_))
    }

    pub fn is_validation_exception(&self) -> bool {
        matches!(&self.kind, QueryTableRowsErrorKind::ValidationException(_))
    }
}
impl std::error::Error for QueryTableRowsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            QueryTableRowsErrorKind::AccessDeniedException(_inner) => Some(_inner),
            QueryTableRowsErrorKind::InternalServerException(_inner) => Some(_inner),
            QueryTableRowsErrorKind::RequestTimeoutException(_inner) => Some(_inner),
            QueryTableRowsErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            QueryTableRowsErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            QueryTableRowsErrorKind::ThrottlingException(_inner) => Some(_inner),
            QueryTableRowsErrorKind::ValidationException(_inner) => Some(_inner),
            QueryTableRowsErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `BatchCreateTableRows` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct BatchCreateTableRowsError {
    pub kind: BatchCreateTableRowsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `BatchCreateTableRows` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum BatchCreateTableRowsErrorKind {
    ServiceQuotaExceededException(crate::error::ServiceQuotaExceededException),
    AccessDeniedException(crate::error::AccessDeniedException),
    InternalServerException(crate::error::InternalServerException),
    RequestTimeoutException(crate::error::RequestTimeoutException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    ThrottlingException(crate::error::ThrottlingException),
    ValidationException(crate::error::ValidationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for BatchCreateTableRowsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            BatchCreateTableRowsErrorKind::ServiceQuotaExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            BatchCreateTableRowsErrorKind::AccessDeniedException(_inner) => std::fmt::Display::fmt(_inner, f),
            BatchCreateTableRowsErrorKind::InternalServerException(_inner) => std::fmt::Display::fmt(_inner, f),
            BatchCreateTableRowsErrorKind::RequestTimeoutException(_inner) => std::fmt::Display::fmt(_inner, f),
            BatchCreateTableRowsErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            BatchCreateTableRowsErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            BatchCreateTableRowsErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            BatchCreateTableRowsErrorKind::ValidationException(_inner) => std::fmt::Display::fmt(_inner, f),
            BatchCreateTableRowsErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for BatchCreateTableRowsError {
    fn code(&self) -> Option<&str> {
        BatchCreateTableRowsError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            BatchCreateTableRowsErrorKind::InternalServerException(inner) => Some(inner.retryable_error_kind()),
            BatchCreateTableRowsErrorKind::RequestTimeoutException(inner) => Some(inner.retryable_error_kind()),
            BatchCreateTableRowsErrorKind::ServiceUnavailableException(inner) => Some(inner.retryable_error_kind()),
            BatchCreateTableRowsErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl BatchCreateTableRowsError {
    pub fn new(kind: BatchCreateTableRowsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: BatchCreateTableRowsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: BatchCreateTableRowsErrorKind::Unhandled(err.into()),
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

    pub fn is_service_quota_exceeded_exception(&self) -> bool {
        matches!(&self.kind, BatchCreateTableRowsErrorKind::ServiceQuotaExceededException(_))
    }

    pub fn is_access_denied_exception(&self) -> bool {
        matches!(&self.kind, BatchCreateTableRowsErrorKind::AccessDeniedException(_))
    }

    pub fn is_internal_server_exception(&self) -> bool {
        matches!(&self.kind, BatchCreateTableRowsErrorKind::InternalServerException(_))
    }

    pub fn is_request_timeout_exception(&self) -> bool {
        matches!(&self.kind, BatchCreateTableRowsErrorKind::RequestTimeoutException(_))
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, BatchCreateTableRowsErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, BatchCreateTableRowsErrorKind::ServiceUnavailableException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, BatchCreateTableRowsErrorKind::ThrottlingException(_))
    }

    pub fn is_validation_exception(&self) -> bool {
        matches!(&self.kind, BatchCreateTableRowsErrorKind::ValidationException(_))
    }
}
impl std::error::Error for BatchCreateTableRowsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            BatchCreateTableRowsErrorKind::ServiceQuotaExceededException(_inner) => Some(_inner),
            BatchCreateTableRowsErrorKind::AccessDeniedException(_inner) => Some(_inner),
            BatchCreateTableRowsErrorKind::InternalServerException(_inner) => Some(_inner),
            BatchCreateTableRowsErrorKind::RequestTimeoutException(_inner) => Some(_inner),
            BatchCreateTableRowsErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            BatchCreateTableRowsErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            BatchCreateTableRowsErrorKind::ThrottlingException(_inner) => Some(_inner),
            BatchCreateTableRowsErrorKind::ValidationException(_inner) => Some(_inner),
            BatchCreateTableRowsErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `BatchDeleteTableRows` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct BatchDeleteTableRowsError {
    pub kind: BatchDeleteTableRowsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `BatchDeleteTableRows` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum BatchDeleteTableRowsErrorKind {
    AccessDeniedException(crate::error::AccessDeniedException),
    InternalServerException(crate::error::InternalServerException),
    RequestTimeoutException(crate::error::RequestTimeoutException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    ThrottlingException(crate::error::ThrottlingException),
    ValidationException(crate::error::ValidationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for BatchDeleteTableRowsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            BatchDeleteTableRowsErrorKind::AccessDeniedException(_inner) => std::fmt::Display::fmt(_inner, f),
            BatchDeleteTableRowsErrorKind::InternalServerException(_inner) => std::fmt::Display::fmt(_inner, f),
            BatchDeleteTableRowsErrorKind::RequestTimeoutException(_inner) => std::fmt::Display::fmt(_inner, f),
            BatchDeleteTableRowsErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            BatchDeleteTableRowsErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            BatchDeleteTableRowsErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            BatchDeleteTableRowsErrorKind::ValidationException(_inner) => std::fmt::Display::fmt(_inner, f),
            BatchDeleteTableRowsErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for BatchDeleteTableRowsError {
    fn code(&self) -> Option<&str> {
        BatchDeleteTableRowsError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            BatchDeleteTableRowsErrorKind::InternalServerException(inner) => Some(inner.retryable_error_kind()),
            BatchDeleteTableRowsErrorKind::RequestTimeoutException(inner) => Some(inner.retryable_error_kind()),
            BatchDeleteTableRowsErrorKind::ServiceUnavailableException(inner) => Some(inner.retryable_error_kind()),
            BatchDeleteTableRowsErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl BatchDeleteTableRowsError {
    pub fn new(kind: BatchDeleteTableRowsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: BatchDeleteTableRowsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: BatchDeleteTableRowsErrorKind::Unhandled(err.into()),
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
        matches!(&self.kind, BatchDeleteTableRowsErrorKind::AccessDeniedException(_))
    }

    pub fn is_internal_server_exception(&self) -> bool {
        matches!(&self.kind, BatchDeleteTableRowsErrorKind::InternalServerException(_))
    }

    pub fn is_request_timeout_exception(&self) -> bool {
        matches!(&self.kind, BatchDeleteTableRowsErrorKind::RequestTimeoutException(_))
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, BatchDeleteTableRowsErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, BatchDeleteTableRowsErrorKind::ServiceUnavailableException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, BatchDeleteTableRowsErrorKind::ThrottlingException(_))
    }

    pub fn is_validation_exception(&self) -> bool {
        matches!(&self.kind, BatchDeleteTableRowsErrorKind::ValidationException(_))
    }
}
impl std::error::Error for BatchDeleteTableRowsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            BatchDeleteTableRowsErrorKind::AccessDeniedException(_inner) => Some(_inner),
            BatchDeleteTableRowsErrorKind::InternalServerException(_inner) => Some(_inner),
            BatchDeleteTableRowsErrorKind::RequestTimeoutException(_inner) => Some(_inner),
            BatchDeleteTableRowsErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            BatchDeleteTableRowsErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            BatchDeleteTableRowsErrorKind::ThrottlingException(_inner) => Some(_inner),
            BatchDeleteTableRowsErrorKind::ValidationException(_inner) => Some(_inner),
            BatchDeleteTableRowsErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `BatchUpdateTableRows` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct BatchUpdateTableRowsError {
    pub kind: BatchUpdateTableRowsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `BatchUpdateTableRows` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum BatchUpdateTableRowsErrorKind {
    AccessDeniedException(crate::error::AccessDeniedException),
    InternalServerException(crate::error::InternalServerException),
    RequestTimeoutException(crate::error::RequestTimeoutException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    ThrottlingException(crate::error::ThrottlingException),
    ValidationException(crate::error::ValidationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for BatchUpdateTableRowsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            BatchUpdateTableRowsErrorKind::AccessDeniedException(_inner) => std::fmt::Display::fmt(_inner, f),
            BatchUpdateTableRowsErrorKind::InternalServerException(_inner) => std::fmt::Display::fmt(_inner, f),
            BatchUpdateTableRowsErrorKind::RequestTimeoutException(_inner) => std::fmt::Display::fmt(_inner, f),
            BatchUpdateTableRowsErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            BatchUpdateTableRowsErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            BatchUpdateTableRowsErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            BatchUpdateTableRowsErrorKind::ValidationException(_inner) => std::fmt::Display::fmt(_inner, f),
            BatchUpdateTableRowsErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for BatchUpdateTableRowsError {
    fn code(&self) -> Option<&str> {
        BatchUpdateTableRowsError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            BatchUpdateTableRowsErrorKind::InternalServerException(inner) => Some(inner.retryable_error_kind()),
            BatchUpdateTableRowsErrorKind::RequestTimeoutException(inner) => Some(inner.retryable_error_kind()),
            BatchUpdateTableRowsErrorKind::ServiceUnavailableException(inner) => Some(inner.retryable_error_kind()),
            BatchUpdateTableRowsErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl BatchUpdateTableRowsError {
    pub fn new(kind: BatchUpdateTableRowsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: BatchUpdateTableRowsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: BatchUpdateTableRowsErrorKind::Unhandled(err.into()),
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
        matches!(&self.kind, BatchUpdateTableRowsErrorKind::AccessDeniedException(_))
    }

    pub fn is_internal_server_exception(&self) -> bool {
        matches!(&self.kind, BatchUpdateTableRowsErrorKind::InternalServerException(_))
    }

    pub fn is_request_timeout_exception(&self) -> bool {
        matches!(&self.kind, BatchUpdateTableRowsErrorKind::RequestTimeoutException(_))
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, BatchUpdateTableRowsErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, BatchUpdateTableRowsErrorKind::ServiceUnavailableException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, BatchUpdateTableRowsErrorKind::ThrottlingException(_))
    }

    pub fn is_validation_exception(&self) -> bool {
        matches!(&self.kind, BatchUpdateTableRowsErrorKind::ValidationException(_))
    }
}
impl std::error::Error for BatchUpdateTableRowsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            BatchUpdateTableRowsErrorKind::AccessDeniedException(_inner) => Some(_inner),
            BatchUpdateTableRowsErrorKind::InternalServerException(_inner) => Some(_inner),
            BatchUpdateTableRowsErrorKind::RequestTimeoutException(_inner) => Some(_inner),
            BatchUpdateTableRowsErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            BatchUpdateTableRowsErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            BatchUpdateTableRowsErrorKind::ThrottlingException(_inner) => Some(_inner),
            BatchUpdateTableRowsErrorKind::ValidationException(_inner) => Some(_inner),
            BatchUpdateTableRowsErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `StartTableDataImportJob` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct StartTableDataImportJobError {
    pub kind: StartTableDataImportJobErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `StartTableDataImportJob` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum StartTableDataImportJobErrorKind {
    AccessDeniedException(crate::error::AccessDeniedException),
    InternalServerException(crate::error::InternalServerException),
    RequestTimeoutException(crate::error::RequestTimeoutException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    ThrottlingException(crate::error::ThrottlingException),
    ValidationException(crate::error::ValidationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for StartTableDataImportJobError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            StartTableDataImportJobErrorKind::AccessDeniedException(_inner) => std::fmt::Display::fmt(_inner, f),
            StartTableDataImportJobErrorKind::InternalServerException(_inner) => std::fmt::Display::fmt(_inner, f),
            StartTableDataImportJobErrorKind::RequestTimeoutException(_inner) => std::fmt::Display::fmt(_inner, f),
            StartTableDataImportJobErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            StartTableDataImportJobErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            StartTableDataImportJobErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            StartTableDataImportJobErrorKind::ValidationException(_inner) => std::fmt::Display::fmt(_inner, f),
            StartTableDataImportJobErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for StartTableDataImportJobError {
    fn code(&self) -> Option<&str> {
        StartTableDataImportJobError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            StartTableDataImportJobErrorKind::InternalServerException(inner) => Some(inner.retryable_error_kind()),
            StartTableDataImportJobErrorKind::RequestTimeoutException(inner) => Some(inner.retryable_error_kind()),
            StartTableDataImportJobErrorKind::ServiceUnavailableException(inner) => Some(inner.retryable_error_kind()),
            StartTableDataImportJobErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl StartTableDataImportJobError {
    pub fn new(kind: StartTableDataImportJobErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: StartTableDataImportJobErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: StartTableDataImportJobErrorKind::Unhandled(err.into()),
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
        matches!(&self.kind, StartTableDataImportJobErrorKind::AccessDeniedException(_))
    }

    pub fn is_internal_server_exception(&self) -> bool {
        matches!(&self.kind, StartTableDataImportJobErrorKind::InternalServerException(_))
    }

    pub fn is_request_timeout_exception(&self) -> bool {
        matches!(&self.kind, StartTableDataImportJobErrorKind::RequestTimeoutException(_))
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, StartTableDataImportJobErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, StartTableDataImportJobErrorKind::ServiceUnavailableException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, StartTableDataImportJobErrorKind::ThrottlingException(_))
    }

    pub fn is_validation_exception(&self) -> bool {
        matches!(&self.kind, StartTableDataImportJobErrorKind::ValidationException(_))
    }
}
impl std::error::Error for StartTableDataImportJobError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            StartTableDataImportJobErrorKind::AccessDeniedException(_inner) => Some(_inner),
            StartTableDataImportJobErrorKind::InternalServerException(_inner) => Some(_inner),
            StartTableDataImportJobErrorKind::RequestTimeoutException(_inner) => Some(_inner),
            StartTableDataImportJobErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            StartTableDataImportJobErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            StartTableDataImportJobErrorKind::ThrottlingException(_inner) => Some(_inner),
            StartTableDataImportJobErrorKind::ValidationException(_inner) => Some(_inner),
            StartTableDataImportJobErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeTableDataImportJob` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DescribeTableDataImportJobError {
    pub kind: DescribeTableDataImportJobErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DescribeTableDataImportJob` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DescribeTableDataImportJobErrorKind {
    AccessDeniedException(crate::error::AccessDeniedException),
    InternalServerException(crate::error::InternalServerException),
    RequestTimeoutException(crate::error::RequestTimeoutException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    ServiceUnavailableException(crate::error::ServiceUnavailableException),
    ThrottlingException(crate::error::ThrottlingException),
    ValidationException(crate::error::ValidationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DescribeTableDataImportJobError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DescribeTableDataImportJobErrorKind::AccessDeniedException(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeTableDataImportJobErrorKind::InternalServerException(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeTableDataImportJobErrorKind::RequestTimeoutException(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeTableDataImportJobErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeTableDataImportJobErrorKind::ServiceUnavailableException(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeTableDataImportJobErrorKind::ThrottlingException(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeTableDataImportJobErrorKind::ValidationException(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeTableDataImportJobErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DescribeTableDataImportJobError {
    fn code(&self) -> Option<&str> {
        DescribeTableDataImportJobError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            DescribeTableDataImportJobErrorKind::InternalServerException(inner) => Some(inner.retryable_error_kind()),
            DescribeTableDataImportJobErrorKind::RequestTimeoutException(inner) => Some(inner.retryable_error_kind()),
            DescribeTableDataImportJobErrorKind::ServiceUnavailableException(inner) => Some(inner.retryable_error_kind()),
            DescribeTableDataImportJobErrorKind::ThrottlingException(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl DescribeTableDataImportJobError {
    pub fn new(kind: DescribeTableDataImportJobErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeTableDataImportJobErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeTableDataImportJobErrorKind::Unhandled(err.into()),
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
        matches!(&self.kind, DescribeTableDataImportJobErrorKind::AccessDeniedException(_))
    }

    pub fn is_internal_server_exception(&self) -> bool {
        matches!(&self.kind, DescribeTableDataImportJobErrorKind::InternalServerException(_))
    }

    pub fn is_request_timeout_exception(&self) -> bool {
        matches!(&self.kind, DescribeTableDataImportJobErrorKind::RequestTimeoutException(_))
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, DescribeTableDataImportJobErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_service_unavailable_exception(&self) -> bool {
        matches!(&self.kind, DescribeTableDataImportJobErrorKind::ServiceUnavailableException(_))
    }

    pub fn is_throttling_exception(&self) -> bool {
        matches!(&self.kind, DescribeTableDataImportJobErrorKind::ThrottlingException(_))
    }

    pub fn is_validation_exception(&self) -> bool {
        matches!(&self.kind, DescribeTableDataImportJobErrorKind::ValidationException(_))
    }
}
impl std::error::Error for DescribeTableDataImportJobError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeTableDataImportJobErrorKind::AccessDeniedException(_inner) => Some(_inner),
            DescribeTableDataImportJobErrorKind::InternalServerException(_inner) => Some(_inner),
            DescribeTableDataImportJobErrorKind::RequestTimeoutException(_inner) => Some(_inner),
            DescribeTableDataImportJobErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            DescribeTableDataImportJobErrorKind::ServiceUnavailableException(_inner) => Some(_inner),
            DescribeTableDataImportJobErrorKind::ThrottlingException(_inner) => Some(_inner),
            DescribeTableDataImportJobErrorKind::ValidationException(_inner) => Some(_inner),
            DescribeTableDataImportJobErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
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

/// The automation execution did not end successfully
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct AutomationExecutionException {
    #[serde(rename = "message")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub message: std::option::Option<std::string::String>,
}
impl AutomationExecutionException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`AutomationExecutionException`](crate::error::AutomationExecutionException)
    pub fn builder() -> crate::error::automation_execution_exception::Builder {
        crate::error::automation_execution_exception::Builder::default()
    }
}
impl std::fmt::Display for AutomationExecutionException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AutomationExecutionException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for AutomationExecutionException {}
/// See [`AutomationExecutionException`](crate::error::AutomationExecutionException)
pub mod automation_execution_exception {
    /// A builder for [`AutomationExecutionException`](crate::error::AutomationExecutionException)
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
        /// Consumes the builder and constructs a [`AutomationExecutionException`](crate::error::AutomationExecutionException)
        pub fn build(self) -> crate::error::AutomationExecutionException {
            crate::error::AutomationExecutionException {
                message: self.message,
            }
        }
    }
}

/// The automation execution timed out
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct AutomationExecutionTimeoutException {
    #[serde(rename = "message")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub message: std::option::Option<std::string::String>,
}
impl AutomationExecutionTimeoutException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`AutomationExecutionTimeoutException`](crate::error::AutomationExecutionTimeoutException)
    pub fn builder() -> crate::error::automation_execution_timeout_exception::Builder {
        crate::error::automation_execution_timeout_exception::Builder::default()
    }
}
impl std::fmt::Display for AutomationExecutionTimeoutException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AutomationExecutionTimeoutException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for AutomationExecutionTimeoutException {}
/// See [`AutomationExecutionTimeoutException`](crate::error::AutomationExecutionTimeoutException)
pub mod automation_execution_timeout_exception {
    /// A builder for [`AutomationExecutionTimeoutException`](crate::error::AutomationExecutionTimeoutException)
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
        /// Consumes the builder and constructs a [`AutomationExecutionTimeoutException`](crate::error::AutomationExecutionTimeoutException)
        pub fn build(self) -> crate::error::AutomationExecutionTimeoutException {
            crate::error::AutomationExecutionTimeoutException {
                message: self.message,
            }
        }
    }
}

/// There were unexpected errors from the server
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

/// The request timed out
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct RequestTimeoutException {
    #[serde(rename = "message")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub message: std::option::Option<std::string::String>,
}
impl RequestTimeoutException {
    pub fn retryable_error_kind(&self) -> smithy_types::retry::ErrorKind {
        smithy_types::retry::ErrorKind::TransientError
    }
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`RequestTimeoutException`](crate::error::RequestTimeoutException)
    pub fn builder() -> crate::error::request_timeout_exception::Builder {
        crate::error::request_timeout_exception::Builder::default()
    }
}
impl std::fmt::Display for RequestTimeoutException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RequestTimeoutException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for RequestTimeoutException {}
/// See [`RequestTimeoutException`](crate::error::RequestTimeoutException)
pub mod request_timeout_exception {
    /// A builder for [`RequestTimeoutException`](crate::error::RequestTimeoutException)
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
        /// Consumes the builder and constructs a [`RequestTimeoutException`](crate::error::RequestTimeoutException)
        pub fn build(self) -> crate::error::RequestTimeoutException {
            crate::error::RequestTimeoutException {
                message: self.message,
            }
        }
    }
}

/// A Workbook, Table, App, Screen or Screen Automation was not found with the given ID
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

/// The request caused service quota to be breached
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
        /// Consumes the builder and constructs a [`ServiceQuotaExceededException`](crate::error::ServiceQuotaExceededException)
        pub fn build(self) -> crate::error::ServiceQuotaExceededException {
            crate::error::ServiceQuotaExceededException {
                message: self.message,
            }
        }
    }
}

/// Remote service is unreachable
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

/// Tps(transactions per second) rate reached
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

/// Request is invalid
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
        /// Consumes the builder and constructs a [`ValidationException`](crate::error::ValidationException)
        pub fn build(self) -> crate::error::ValidationException {
            crate::error::ValidationException {
                message: self.message,
            }
        }
    }
}
