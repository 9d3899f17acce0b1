/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Error type for the `DescribeAffectedAccountsForOrganization` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DescribeAffectedAccountsForOrganizationError {
    pub kind: DescribeAffectedAccountsForOrganizationErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DescribeAffectedAccountsForOrganization` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DescribeAffectedAccountsForOrganizationErrorKind {
    InvalidPaginationToken(crate::error::InvalidPaginationToken),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DescribeAffectedAccountsForOrganizationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DescribeAffectedAccountsForOrganizationErrorKind::InvalidPaginationToken(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeAffectedAccountsForOrganizationErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DescribeAffectedAccountsForOrganizationError {
    fn code(&self) -> Option<&str> {
        DescribeAffectedAccountsForOrganizationError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DescribeAffectedAccountsForOrganizationError {
    pub fn new(
        kind: DescribeAffectedAccountsForOrganizationErrorKind,
        meta: smithy_types::Error,
    ) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeAffectedAccountsForOrganizationErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeAffectedAccountsForOrganizationErrorKind::Unhandled(err.into()),
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

    pub fn is_invalid_pagination_token(&self) -> bool {
        matches!(&self.kind, DescribeAffectedAccountsForOrganizationErrorKind::InvalidPaginationToken(_))
    }
}
impl std::error::Error for DescribeAffectedAccountsForOrganizationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeAffectedAccountsForOrganizationErrorKind::InvalidPaginationToken(_inner) => Some(_inner),
            DescribeAffectedAccountsForOrganizationErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeAffectedEntities` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DescribeAffectedEntitiesError {
    pub kind: DescribeAffectedEntitiesErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DescribeAffectedEntities` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DescribeAffectedEntitiesErrorKind {
    InvalidPaginationToken(crate::error::InvalidPaginationToken),
    UnsupportedLocale(crate::error::UnsupportedLocale),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DescribeAffectedEntitiesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DescribeAffectedEntitiesErrorKind::InvalidPaginationToken(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeAffectedEntitiesErrorKind::UnsupportedLocale(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeAffectedEntitiesErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DescribeAffectedEntitiesError {
    fn code(&self) -> Option<&str> {
        DescribeAffectedEntitiesError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DescribeAffectedEntitiesError {
    pub fn new(kind: DescribeAffectedEntitiesErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeAffectedEntitiesErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeAffectedEntitiesErrorKind::Unhandled(err.into()),
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

    pub fn is_invalid_pagination_token(&self) -> bool {
        matches!(&self.kind, DescribeAffectedEntitiesErrorKind::InvalidPaginationToken(_))
    }

    pub fn is_unsupported_locale(&self) -> bool {
        matches!(&self.kind, DescribeAffectedEntitiesErrorKind::UnsupportedLocale(_))
    }
}
impl std::error::Error for DescribeAffectedEntitiesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeAffectedEntitiesErrorKind::InvalidPaginationToken(_inner) => Some(_inner),
            DescribeAffectedEntitiesErrorKind::UnsupportedLocale(_inner) => Some(_inner),
            DescribeAffectedEntitiesErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeAffectedEntitiesForOrganization` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DescribeAffectedEntitiesForOrganizationError {
    pub kind: DescribeAffectedEntitiesForOrganizationErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DescribeAffectedEntitiesForOrganization` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DescribeAffectedEntitiesForOrganizationErrorKind {
    InvalidPaginationToken(crate::error::InvalidPaginationToken),
    UnsupportedLocale(crate::error::UnsupportedLocale),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DescribeAffectedEntitiesForOrganizationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DescribeAffectedEntitiesForOrganizationErrorKind::InvalidPaginationToken(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeAffectedEntitiesForOrganizationErrorKind::UnsupportedLocale(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeAffectedEntitiesForOrganizationErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DescribeAffectedEntitiesForOrganizationError {
    fn code(&self) -> Option<&str> {
        DescribeAffectedEntitiesForOrganizationError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DescribeAffectedEntitiesForOrganizationError {
    pub fn new(
        kind: DescribeAffectedEntitiesForOrganizationErrorKind,
        meta: smithy_types::Error,
    ) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeAffectedEntitiesForOrganizationErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeAffectedEntitiesForOrganizationErrorKind::Unhandled(err.into()),
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

    pub fn is_invalid_pagination_token(&self) -> bool {
        matches!(&self.kind, DescribeAffectedEntitiesForOrganizationErrorKind::InvalidPaginationToken(_))
    }

    pub fn is_unsupported_locale(&self) -> bool {
        matches!(&self.kind, DescribeAffectedEntitiesForOrganizationErrorKind::UnsupportedLocale(_))
    }
}
impl std::error::Error for DescribeAffectedEntitiesForOrganizationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeAffectedEntitiesForOrganizationErrorKind::InvalidPaginationToken(_inner) => Some(_inner),
            DescribeAffectedEntitiesForOrganizationErrorKind::UnsupportedLocale(_inner) => Some(_inner),
            DescribeAffectedEntitiesForOrganizationErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeEntityAggregates` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DescribeEntityAggregatesError {
    pub kind: DescribeEntityAggregatesErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DescribeEntityAggregates` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DescribeEntityAggregatesErrorKind {
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DescribeEntityAggregatesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DescribeEntityAggregatesErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DescribeEntityAggregatesError {
    fn code(&self) -> Option<&str> {
        DescribeEntityAggregatesError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DescribeEntityAggregatesError {
    pub fn new(kind: DescribeEntityAggregatesErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeEntityAggregatesErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeEntityAggregatesErrorKind::Unhandled(err.into()),
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
}
impl std::error::Error for DescribeEntityAggregatesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeEntityAggregatesErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeEventAggregates` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DescribeEventAggregatesError {
    pub kind: DescribeEventAggregatesErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DescribeEventAggregates` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DescribeEventAggregatesErrorKind {
    InvalidPaginationToken(crate::error::InvalidPaginationToken),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DescribeEventAggregatesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DescribeEventAggregatesErrorKind::InvalidPaginationToken(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeEventAggregatesErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DescribeEventAggregatesError {
    fn code(&self) -> Option<&str> {
        DescribeEventAggregatesError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DescribeEventAggregatesError {
    pub fn new(kind: DescribeEventAggregatesErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeEventAggregatesErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeEventAggregatesErrorKind::Unhandled(err.into()),
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

    pub fn is_invalid_pagination_token(&self) -> bool {
        matches!(&self.kind, DescribeEventAggregatesErrorKind::InvalidPaginationToken(_))
    }
}
impl std::error::Error for DescribeEventAggregatesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeEventAggregatesErrorKind::InvalidPaginationToken(_inner) => Some(_inner),
            DescribeEventAggregatesErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeEventDetails` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DescribeEventDetailsError {
    pub kind: DescribeEventDetailsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DescribeEventDetails` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DescribeEventDetailsErrorKind {
    UnsupportedLocale(crate::error::UnsupportedLocale),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DescribeEventDetailsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DescribeEventDetailsErrorKind::UnsupportedLocale(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeEventDetailsErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DescribeEventDetailsError {
    fn code(&self) -> Option<&str> {
        DescribeEventDetailsError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DescribeEventDetailsError {
    pub fn new(kind: DescribeEventDetailsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeEventDetailsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeEventDetailsErrorKind::Unhandled(err.into()),
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

    pub fn is_unsupported_locale(&self) -> bool {
        matches!(&self.kind, DescribeEventDetailsErrorKind::UnsupportedLocale(_))
    }
}
impl std::error::Error for DescribeEventDetailsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeEventDetailsErrorKind::UnsupportedLocale(_inner) => Some(_inner),
            DescribeEventDetailsErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeEventDetailsForOrganization` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DescribeEventDetailsForOrganizationError {
    pub kind: DescribeEventDetailsForOrganizationErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DescribeEventDetailsForOrganization` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DescribeEventDetailsForOrganizationErrorKind {
    UnsupportedLocale(crate::error::UnsupportedLocale),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DescribeEventDetailsForOrganizationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DescribeEventDetailsForOrganizationErrorKind::UnsupportedLocale(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeEventDetailsForOrganizationErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DescribeEventDetailsForOrganizationError {
    fn code(&self) -> Option<&str> {
        DescribeEventDetailsForOrganizationError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DescribeEventDetailsForOrganizationError {
    pub fn new(
        kind: DescribeEventDetailsForOrganizationErrorKind,
        meta: smithy_types::Error,
    ) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeEventDetailsForOrganizationErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeEventDetailsForOrganizationErrorKind::Unhandled(err.into()),
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

    pub fn is_unsupported_locale(&self) -> bool {
        matches!(&self.kind, DescribeEventDetailsForOrganizationErrorKind::UnsupportedLocale(_))
    }
}
impl std::error::Error for DescribeEventDetailsForOrganizationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeEventDetailsForOrganizationErrorKind::UnsupportedLocale(_inner) => Some(_inner),
            DescribeEventDetailsForOrganizationErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeEventTypes` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DescribeEventTypesError {
    pub kind: DescribeEventTypesErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DescribeEventTypes` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DescribeEventTypesErrorKind {
    InvalidPaginationToken(crate::error::InvalidPaginationToken),
    UnsupportedLocale(crate::error::UnsupportedLocale),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DescribeEventTypesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DescribeEventTypesErrorKind::InvalidPaginationToken(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeEventTypesErrorKind::UnsupportedLocale(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeEventTypesErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DescribeEventTypesError {
    fn code(&self) -> Option<&str> {
        DescribeEventTypesError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DescribeEventTypesError {
    pub fn new(kind: DescribeEventTypesErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeEventTypesErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeEventTypesErrorKind::Unhandled(err.into()),
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

    pub fn is_invalid_pagination_token(&self) -> bool {
        matches!(&self.kind, DescribeEventTypesErrorKind::InvalidPaginationToken(_))
    }

    pub fn is_unsupported_locale(&self) -> bool {
        matches!(&self.kind, DescribeEventTypesErrorKind::UnsupportedLocale(_))
    }
}
impl std::error::Error for DescribeEventTypesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeEventTypesErrorKind::InvalidPaginationToken(_inner) => Some(_inner),
            DescribeEventTypesErrorKind::UnsupportedLocale(_inner) => Some(_inner),
            DescribeEventTypesErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeEvents` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DescribeEventsError {
    pub kind: DescribeEventsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DescribeEvents` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DescribeEventsErrorKind {
    InvalidPaginationToken(crate::error::InvalidPaginationToken),
    UnsupportedLocale(crate::error::UnsupportedLocale),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DescribeEventsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DescribeEventsErrorKind::InvalidPaginationToken(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeEventsErrorKind::UnsupportedLocale(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeEventsErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DescribeEventsError {
    fn code(&self) -> Option<&str> {
        DescribeEventsError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DescribeEventsError {
    pub fn new(kind: DescribeEventsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeEventsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeEventsErrorKind::Unhandled(err.into()),
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

    pub fn is_invalid_pagination_token(&self) -> bool {
        matches!(&self.kind, DescribeEventsErrorKind::InvalidPaginationToken(_))
    }

    pub fn is_unsupported_locale(&self) -> bool {
        matches!(&self.kind, DescribeEventsErrorKind::UnsupportedLocale(_))
    }
}
impl std::error::Error for DescribeEventsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeEventsErrorKind::InvalidPaginationToken(_inner) => Some(_inner),
            DescribeEventsErrorKind::UnsupportedLocale(_inner) => Some(_inner),
            DescribeEventsErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeEventsForOrganization` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DescribeEventsForOrganizationError {
    pub kind: DescribeEventsForOrganizationErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DescribeEventsForOrganization` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DescribeEventsForOrganizationErrorKind {
    InvalidPaginationToken(crate::error::InvalidPaginationToken),
    UnsupportedLocale(crate::error::UnsupportedLocale),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DescribeEventsForOrganizationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DescribeEventsForOrganizationErrorKind::InvalidPaginationToken(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeEventsForOrganizationErrorKind::UnsupportedLocale(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeEventsForOrganizationErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DescribeEventsForOrganizationError {
    fn code(&self) -> Option<&str> {
        DescribeEventsForOrganizationError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DescribeEventsForOrganizationError {
    pub fn new(kind: DescribeEventsForOrganizationErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeEventsForOrganizationErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeEventsForOrganizationErrorKind::Unhandled(err.into()),
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

    pub fn is_invalid_pagination_token(&self) -> bool {
        matches!(&self.kind, DescribeEventsForOrganizationErrorKind::InvalidPaginationToken(_))
    }

    pub fn is_unsupported_locale(&self) -> bool {
        matches!(&self.kind, DescribeEventsForOrganizationErrorKind::UnsupportedLocale(_))
    }
}
impl std::error::Error for DescribeEventsForOrganizationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeEventsForOrganizationErrorKind::InvalidPaginationToken(_inner) => Some(_inner),
            DescribeEventsForOrganizationErrorKind::UnsupportedLocale(_inner) => Some(_inner),
            DescribeEventsForOrganizationErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeHealthServiceStatusForOrganization` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DescribeHealthServiceStatusForOrganizationError {
    pub kind: DescribeHealthServiceStatusForOrganizationErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DescribeHealthServiceStatusForOrganization` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DescribeHealthServiceStatusForOrganizationErrorKind {
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DescribeHealthServiceStatusForOrganizationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DescribeHealthServiceStatusForOrganizationErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DescribeHealthServiceStatusForOrganizationError {
    fn code(&self) -> Option<&str> {
        DescribeHealthServiceStatusForOrganizationError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DescribeHealthServiceStatusForOrganizationError {
    pub fn new(
        kind: DescribeHealthServiceStatusForOrganizationErrorKind,
        meta: smithy_types::Error,
    ) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeHealthServiceStatusForOrganizationErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeHealthServiceStatusForOrganizationErrorKind::Unhandled(err.into()),
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
}
impl std::error::Error for DescribeHealthServiceStatusForOrganizationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeHealthServiceStatusForOrganizationErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DisableHealthServiceAccessForOrganization` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DisableHealthServiceAccessForOrganizationError {
    pub kind: DisableHealthServiceAccessForOrganizationErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DisableHealthServiceAccessForOrganization` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DisableHealthServiceAccessForOrganizationErrorKind {
    ConcurrentModificationException(crate::error::ConcurrentModificationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DisableHealthServiceAccessForOrganizationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DisableHealthServiceAccessForOrganizationErrorKind::ConcurrentModificationException(_inner) => std::fmt::Display::fmt(_inner, f),
            DisableHealthServiceAccessForOrganizationErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DisableHealthServiceAccessForOrganizationError {
    fn code(&self) -> Option<&str> {
        DisableHealthServiceAccessForOrganizationError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl DisableHealthServiceAccessForOrganizationError {
    pub fn new(
        kind: DisableHealthServiceAccessForOrganizationErrorKind,
        meta: smithy_types::Error,
    ) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DisableHealthServiceAccessForOrganizationErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DisableHealthServiceAccessForOrganizationErrorKind::Unhandled(err.into()),
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

    pub fn is_concurrent_modification_exception(&self) -> bool {
        matches!(&self.kind, DisableHealthServiceAccessForOrganizationErrorKind::ConcurrentModificationException(_))
    }
}
impl std::error::Error for DisableHealthServiceAccessForOrganizationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DisableHealthServiceAccessForOrganizationErrorKind::ConcurrentModificationException(_inner) => Some(_inner),
            DisableHealthServiceAccessForOrganizationErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `EnableHealthServiceAccessForOrganization` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct EnableHealthServiceAccessForOrganizationError {
    pub kind: EnableHealthServiceAccessForOrganizationErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `EnableHealthServiceAccessForOrganization` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum EnableHealthServiceAccessForOrganizationErrorKind {
    ConcurrentModificationException(crate::error::ConcurrentModificationException),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for EnableHealthServiceAccessForOrganizationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            EnableHealthServiceAccessForOrganizationErrorKind::ConcurrentModificationException(_inner) => std::fmt::Display::fmt(_inner, f),
            EnableHealthServiceAccessForOrganizationErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for EnableHealthServiceAccessForOrganizationError {
    fn code(&self) -> Option<&str> {
        EnableHealthServiceAccessForOrganizationError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        None
    }
}
impl EnableHealthServiceAccessForOrganizationError {
    pub fn new(
        kind: EnableHealthServiceAccessForOrganizationErrorKind,
        meta: smithy_types::Error,
    ) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: EnableHealthServiceAccessForOrganizationErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: EnableHealthServiceAccessForOrganizationErrorKind::Unhandled(err.into()),
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

    pub fn is_concurrent_modification_exception(&self) -> bool {
        matches!(&self.kind, EnableHealthServiceAccessForOrganizationErrorKind::ConcurrentModificationException(_))
    }
}
impl std::error::Error for EnableHealthServiceAccessForOrganizationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            EnableHealthServiceAccessForOrganizationErrorKind::ConcurrentModificationException(_inner) => Some(_inner),
            EnableHealthServiceAccessForOrganizationErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// EnableHealthServiceAccessForOrganization is already in progress. Wait for the action to complete before trying again.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct ConcurrentModificationException {
    #[serde(rename = "message")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub message: std::option::Option<std::string::String>,
}
impl ConcurrentModificationException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`ConcurrentModificationException`](crate::error::ConcurrentModificationException)
    pub fn builder() -> crate::error::concurrent_modification_exception::Builder {
        crate::error::concurrent_modification_exception::Builder::default()
    }
}
impl std::fmt::Display for ConcurrentModificationException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ConcurrentModificationException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for ConcurrentModificationException {}
/// See [`ConcurrentModificationException`](crate::error::ConcurrentModificationException)
pub mod concurrent_modification_exception {
    /// A builder for [`ConcurrentModificationException`](crate::error::ConcurrentModificationException)
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
        /// Consumes the builder and constructs a [`ConcurrentModificationException`](crate::error::ConcurrentModificationException)
        pub fn build(self) -> crate::error::ConcurrentModificationException {
            crate::error::ConcurrentModificationException {
                message: self.message,
            }
        }
    }
}

/// The specified pagination token is not valid
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct InvalidPaginationToken {
    #[serde(rename = "message")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub message: std::option::Option<std::string::String>,
}
impl InvalidPaginationToken {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`InvalidPaginationToken`](crate::error::InvalidPaginationToken)
    pub fn builder() -> crate::error::invalid_pagination_token::Builder {
        crate::error::invalid_pagination_token::Builder::default()
    }
}
impl std::fmt::Display for InvalidPaginationToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InvalidPaginationToken")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for InvalidPaginationToken {}
/// See [`InvalidPaginationToken`](crate::error::InvalidPaginationToken)
pub mod invalid_pagination_token {
    /// A builder for [`InvalidPaginationToken`](crate::error::InvalidPaginationToken)
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
        /// Consumes the builder and constructs a [`InvalidPaginationToken`](crate::error::InvalidPaginationToken)
        pub fn build(self) -> crate::error::InvalidPaginationToken {
            crate::error::InvalidPaginationToken {
                message: self.message,
            }
        }
    }
}

/// The specified locale is not supported
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct UnsupportedLocale {
    #[serde(rename = "message")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub message: std::option::Option<std::string::String>,
}
impl UnsupportedLocale {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`UnsupportedLocale`](crate::error::UnsupportedLocale)
    pub fn builder() -> crate::error::unsupported_locale::Builder {
        crate::error::unsupported_locale::Builder::default()
    }
}
impl std::fmt::Display for UnsupportedLocale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "UnsupportedLocale")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for UnsupportedLocale {}
/// See [`UnsupportedLocale`](crate::error::UnsupportedLocale)
pub mod unsupported_locale {
    /// A builder for [`UnsupportedLocale`](crate::error::UnsupportedLocale)
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
        /// Consumes the builder and constructs a [`UnsupportedLocale`](crate::error::UnsupportedLocale)
        pub fn build(self) -> crate::error::UnsupportedLocale {
            crate::error::UnsupportedLocale {
                message: self.message,
            }
        }
    }
}
