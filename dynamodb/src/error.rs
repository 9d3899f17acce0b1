/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Error type for the `BatchGetItem` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct BatchGetItemError {
    pub kind: BatchGetItemErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `BatchGetItem` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum BatchGetItemErrorKind {
    ProvisionedThroughputExceededException(crate::error::ProvisionedThroughputExceededException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    RequestLimitExceeded(crate::error::RequestLimitExceeded),
    InternalServerError(crate::error::InternalServerError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for BatchGetItemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            BatchGetItemErrorKind::ProvisionedThroughputExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            BatchGetItemErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            BatchGetItemErrorKind::RequestLimitExceeded(_inner) => std::fmt::Display::fmt(_inner, f),
            BatchGetItemErrorKind::InternalServerError(_inner) => std::fmt::Display::fmt(_inner, f),
            BatchGetItemErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for BatchGetItemError {
    fn code(&self) -> Option<&str> {
        BatchGetItemError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            BatchGetItemErrorKind::ProvisionedThroughputExceededException(inner) => Some(inner.retryable_error_kind()),
            BatchGetItemErrorKind::RequestLimitExceeded(inner) => Some(inner.retryable_error_kind()),
            BatchGetItemErrorKind::InternalServerError(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl BatchGetItemError {
    pub fn new(kind: BatchGetItemErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: BatchGetItemErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: BatchGetItemErrorKind::Unhandled(err.into()),
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

    pub fn is_provisioned_throughput_exceeded_exception(&self) -> bool {
        matches!(&self.kind, BatchGetItemErrorKind::ProvisionedThroughputExceededException(_))
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, BatchGetItemErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_request_limit_exceeded(&self) -> bool {
        matches!(&self.kind, BatchGetItemErrorKind::RequestLimitExceeded(_))
    }

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, BatchGetItemErrorKind::InternalServerError(_))
    }
}
impl std::error::Error for BatchGetItemError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            BatchGetItemErrorKind::ProvisionedThroughputExceededException(_inner) => Some(_inner),
            BatchGetItemErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            BatchGetItemErrorKind::RequestLimitExceeded(_inner) => Some(_inner),
            BatchGetItemErrorKind::InternalServerError(_inner) => Some(_inner),
            BatchGetItemErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `BatchWriteItem` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct BatchWriteItemError {
    pub kind: BatchWriteItemErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `BatchWriteItem` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum BatchWriteItemErrorKind {
    ProvisionedThroughputExceededException(crate::error::ProvisionedThroughputExceededException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    ItemCollectionSizeLimitExceededException(crate::error::ItemCollectionSizeLimitExceededException),
    RequestLimitExceeded(crate::error::RequestLimitExceeded),
    InternalServerError(crate::error::InternalServerError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for BatchWriteItemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            BatchWriteItemErrorKind::ProvisionedThroughputExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            BatchWriteItemErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            BatchWriteItemErrorKind::ItemCollectionSizeLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            BatchWriteItemErrorKind::RequestLimitExceeded(_inner) => std::fmt::Display::fmt(_inner, f),
            BatchWriteItemErrorKind::InternalServerError(_inner) => std::fmt::Display::fmt(_inner, f),
            BatchWriteItemErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for BatchWriteItemError {
    fn code(&self) -> Option<&str> {
        BatchWriteItemError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            BatchWriteItemErrorKind::ProvisionedThroughputExceededException(inner) => Some(inner.retryable_error_kind()),
            BatchWriteItemErrorKind::RequestLimitExceeded(inner) => Some(inner.retryable_error_kind()),
            BatchWriteItemErrorKind::InternalServerError(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl BatchWriteItemError {
    pub fn new(kind: BatchWriteItemErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: BatchWriteItemErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: BatchWriteItemErrorKind::Unhandled(err.into()),
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

    pub fn is_provisioned_throughput_exceeded_exception(&self) -> bool {
        matches!(&self.kind, BatchWriteItemErrorKind::ProvisionedThroughputExceededException(_))
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, BatchWriteItemErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_item_collection_size_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, BatchWriteItemErrorKind::ItemCollectionSizeLimitExceededException(_))
    }

    pub fn is_request_limit_exceeded(&self) -> bool {
        matches!(&self.kind, BatchWriteItemErrorKind::RequestLimitExceeded(_))
    }

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, BatchWriteItemErrorKind::InternalServerError(_))
    }
}
impl std::error::Error for BatchWriteItemError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            BatchWriteItemErrorKind::ProvisionedThroughputExceededException(_inner) => Some(_inner),
            BatchWriteItemErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            BatchWriteItemErrorKind::ItemCollectionSizeLimitExceededException(_inner) => Some(_inner),
            BatchWriteItemErrorKind::RequestLimitExceeded(_inner) => Some(_inner),
            BatchWriteItemErrorKind::InternalServerError(_inner) => Some(_inner),
            BatchWriteItemErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `CreateTable` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct CreateTableError {
    pub kind: CreateTableErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `CreateTable` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum CreateTableErrorKind {
    ResourceInUseException(crate::error::ResourceInUseException),
    LimitExceededException(crate::error::LimitExceededException),
    InternalServerError(crate::error::InternalServerError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for CreateTableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            CreateTableErrorKind::ResourceInUseException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateTableErrorKind::LimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateTableErrorKind::InternalServerError(_inner) => std::fmt::Display::fmt(_inner, f),
            CreateTableErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for CreateTableError {
    fn code(&self) -> Option<&str> {
        CreateTableError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            CreateTableErrorKind::InternalServerError(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl CreateTableError {
    pub fn new(kind: CreateTableErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: CreateTableErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: CreateTableErrorKind::Unhandled(err.into()),
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

    pub fn is_resource_in_use_exception(&self) -> bool {
        matches!(&self.kind, CreateTableErrorKind::ResourceInUseException(_))
    }

    pub fn is_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, CreateTableErrorKind::LimitExceededException(_))
    }

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, CreateTableErrorKind::InternalServerError(_))
    }
}
impl std::error::Error for CreateTableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            CreateTableErrorKind::ResourceInUseException(_inner) => Some(_inner),
            CreateTableErrorKind::LimitExceededException(_inner) => Some(_inner),
            CreateTableErrorKind::InternalServerError(_inner) => Some(_inner),
            CreateTableErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DeleteItem` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DeleteItemError {
    pub kind: DeleteItemErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DeleteItem` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DeleteItemErrorKind {
    ConditionalCheckFailedException(crate::error::ConditionalCheckFailedException),
    ProvisionedThroughputExceededException(crate::error::ProvisionedThroughputExceededException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    ItemCollectionSizeLimitExceededException(crate::error::ItemCollectionSizeLimitExceededException),
    TransactionConflictException(crate::error::TransactionConflictException),
    RequestLimitExceeded(crate::error::RequestLimitExceeded),
    InternalServerError(crate::error::InternalServerError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DeleteItemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DeleteItemErrorKind::ConditionalCheckFailedException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteItemErrorKind::ProvisionedThroughputExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteItemErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteItemErrorKind::ItemCollectionSizeLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteItemErrorKind::TransactionConflictException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteItemErrorKind::RequestLimitExceeded(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteItemErrorKind::InternalServerError(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteItemErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DeleteItemError {
    fn code(&self) -> Option<&str> {
        DeleteItemError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            DeleteItemErrorKind::ProvisionedThroughputExceededException(inner) => Some(inner.retryable_error_kind()),
            DeleteItemErrorKind::RequestLimitExceeded(inner) => Some(inner.retryable_error_kind()),
            DeleteItemErrorKind::InternalServerError(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl DeleteItemError {
    pub fn new(kind: DeleteItemErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DeleteItemErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DeleteItemErrorKind::Unhandled(err.into()),
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

    pub fn is_conditional_check_failed_exception(&self) -> bool {
        matches!(&self.kind, DeleteItemErrorKind::ConditionalCheckFailedException(_))
    }

    pub fn is_provisioned_throughput_exceeded_exception(&self) -> bool {
        matches!(&self.kind, DeleteItemErrorKind::ProvisionedThroughputExceededException(_))
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, DeleteItemErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_item_collection_size_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, DeleteItemErrorKind::ItemCollectionSizeLimitExceededException(_))
    }

    pub fn is_transaction_conflict_exception(&self) -> bool {
        matches!(&self.kind, DeleteItemErrorKind::TransactionConflictException(_))
    }

    pub fn is_request_limit_exceeded(&self) -> bool {
        matches!(&self.kind, DeleteItemErrorKind::RequestLimitExceeded(_))
    }

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, DeleteItemErrorKind::InternalServerError(_))
    }
}
impl std::error::Error for DeleteItemError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DeleteItemErrorKind::ConditionalCheckFailedException(_inner) => Some(_inner),
            DeleteItemErrorKind::ProvisionedThroughputExceededException(_inner) => Some(_inner),
            DeleteItemErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            DeleteItemErrorKind::ItemCollectionSizeLimitExceededException(_inner) => Some(_inner),
            DeleteItemErrorKind::TransactionConflictException(_inner) => Some(_inner),
            DeleteItemErrorKind::RequestLimitExceeded(_inner) => Some(_inner),
            DeleteItemErrorKind::InternalServerError(_inner) => Some(_inner),
            DeleteItemErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DeleteTable` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DeleteTableError {
    pub kind: DeleteTableErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DeleteTable` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DeleteTableErrorKind {
    ResourceInUseException(crate::error::ResourceInUseException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    LimitExceededException(crate::error::LimitExceededException),
    InternalServerError(crate::error::InternalServerError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DeleteTableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DeleteTableErrorKind::ResourceInUseException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteTableErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteTableErrorKind::LimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteTableErrorKind::InternalServerError(_inner) => std::fmt::Display::fmt(_inner, f),
            DeleteTableErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DeleteTableError {
    fn code(&self) -> Option<&str> {
        DeleteTableError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            DeleteTableErrorKind::InternalServerError(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl DeleteTableError {
    pub fn new(kind: DeleteTableErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DeleteTableErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DeleteTableErrorKind::Unhandled(err.into()),
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

    pub fn is_resource_in_use_exception(&self) -> bool {
        matches!(&self.kind, DeleteTableErrorKind::ResourceInUseException(_))
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, DeleteTableErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, DeleteTableErrorKind::LimitExceededException(_))
    }

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, DeleteTableErrorKind::InternalServerError(_))
    }
}
impl std::error::Error for DeleteTableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DeleteTableErrorKind::ResourceInUseException(_inner) => Some(_inner),
            DeleteTableErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            DeleteTableErrorKind::LimitExceededException(_inner) => Some(_inner),
            DeleteTableErrorKind::InternalServerError(_inner) => Some(_inner),
            DeleteTableErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeTable` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DescribeTableError {
    pub kind: DescribeTableErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DescribeTable` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DescribeTableErrorKind {
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    InternalServerError(crate::error::InternalServerError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DescribeTableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DescribeTableErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeTableErrorKind::InternalServerError(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeTableErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DescribeTableError {
    fn code(&self) -> Option<&str> {
        DescribeTableError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            DescribeTableErrorKind::InternalServerError(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl DescribeTableError {
    pub fn new(kind: DescribeTableErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeTableErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeTableErrorKind::Unhandled(err.into()),
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
        matches!(&self.kind, DescribeTableErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, DescribeTableErrorKind::InternalServerError(_))
    }
}
impl std::error::Error for DescribeTableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeTableErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            DescribeTableErrorKind::InternalServerError(_inner) => Some(_inner),
            DescribeTableErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeLimits` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DescribeLimitsError {
    pub kind: DescribeLimitsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DescribeLimits` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DescribeLimitsErrorKind {
    InternalServerError(crate::error::InternalServerError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DescribeLimitsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DescribeLimitsErrorKind::InternalServerError(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeLimitsErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DescribeLimitsError {
    fn code(&self) -> Option<&str> {
        DescribeLimitsError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            DescribeLimitsErrorKind::InternalServerError(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl DescribeLimitsError {
    pub fn new(kind: DescribeLimitsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeLimitsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeLimitsErrorKind::Unhandled(err.into()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, DescribeLimitsErrorKind::InternalServerError(_))
    }
}
impl std::error::Error for DescribeLimitsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeLimitsErrorKind::InternalServerError(_inner) => Some(_inner),
            DescribeLimitsErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `DescribeTimeToLive` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct DescribeTimeToLiveError {
    pub kind: DescribeTimeToLiveErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `DescribeTimeToLive` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum DescribeTimeToLiveErrorKind {
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    InternalServerError(crate::error::InternalServerError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for DescribeTimeToLiveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            DescribeTimeToLiveErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeTimeToLiveErrorKind::InternalServerError(_inner) => std::fmt::Display::fmt(_inner, f),
            DescribeTimeToLiveErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for DescribeTimeToLiveError {
    fn code(&self) -> Option<&str> {
        DescribeTimeToLiveError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            DescribeTimeToLiveErrorKind::InternalServerError(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl DescribeTimeToLiveError {
    pub fn new(kind: DescribeTimeToLiveErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: DescribeTimeToLiveErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: DescribeTimeToLiveErrorKind::Unhandled(err.into()),
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
        matches!(&self.kind, DescribeTimeToLiveErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, DescribeTimeToLiveErrorKind::InternalServerError(_))
    }
}
impl std::error::Error for DescribeTimeToLiveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DescribeTimeToLiveErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            DescribeTimeToLiveErrorKind::InternalServerError(_inner) => Some(_inner),
            DescribeTimeToLiveErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `GetItem` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct GetItemError {
    pub kind: GetItemErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `GetItem` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum GetItemErrorKind {
    ProvisionedThroughputExceededException(crate::error::ProvisionedThroughputExceededException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    RequestLimitExceeded(crate::error::RequestLimitExceeded),
    InternalServerError(crate::error::InternalServerError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for GetItemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            GetItemErrorKind::ProvisionedThroughputExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetItemErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            GetItemErrorKind::RequestLimitExceeded(_inner) => std::fmt::Display::fmt(_inner, f),
            GetItemErrorKind::InternalServerError(_inner) => std::fmt::Display::fmt(_inner, f),
            GetItemErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for GetItemError {
    fn code(&self) -> Option<&str> {
        GetItemError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            GetItemErrorKind::ProvisionedThroughputExceededException(inner) => Some(inner.retryable_error_kind()),
            GetItemErrorKind::RequestLimitExceeded(inner) => Some(inner.retryable_error_kind()),
            GetItemErrorKind::InternalServerError(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl GetItemError {
    pub fn new(kind: GetItemErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: GetItemErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: GetItemErrorKind::Unhandled(err.into()),
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

    pub fn is_provisioned_throughput_exceeded_exception(&self) -> bool {
        matches!(&self.kind, GetItemErrorKind::ProvisionedThroughputExceededException(_))
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, GetItemErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_request_limit_exceeded(&self) -> bool {
        matches!(&self.kind, GetItemErrorKind::RequestLimitExceeded(_))
    }

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, GetItemErrorKind::InternalServerError(_))
    }
}
impl std::error::Error for GetItemError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            GetItemErrorKind::ProvisionedThroughputExceededException(_inner) => Some(_inner),
            GetItemErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            GetItemErrorKind::RequestLimitExceeded(_inner) => Some(_inner),
            GetItemErrorKind::InternalServerError(_inner) => Some(_inner),
            GetItemErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
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
    InternalServerError(crate::error::InternalServerError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ListTablesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ListTablesErrorKind::InternalServerError(_inner) => std::fmt::Display::fmt(_inner, f),
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
            ListTablesErrorKind::InternalServerError(inner) => Some(inner.retryable_error_kind()),
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

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, ListTablesErrorKind::InternalServerError(_))
    }
}
impl std::error::Error for ListTablesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ListTablesErrorKind::InternalServerError(_inner) => Some(_inner),
            ListTablesErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `PutItem` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct PutItemError {
    pub kind: PutItemErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `PutItem` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum PutItemErrorKind {
    ConditionalCheckFailedException(crate::error::ConditionalCheckFailedException),
    ProvisionedThroughputExceededException(crate::error::ProvisionedThroughputExceededException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    ItemCollectionSizeLimitExceededException(crate::error::ItemCollectionSizeLimitExceededException),
    TransactionConflictException(crate::error::TransactionConflictException),
    RequestLimitExceeded(crate::error::RequestLimitExceeded),
    InternalServerError(crate::error::InternalServerError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for PutItemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            PutItemErrorKind::ConditionalCheckFailedException(_inner) => std::fmt::Display::fmt(_inner, f),
            PutItemErrorKind::ProvisionedThroughputExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            PutItemErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            PutItemErrorKind::ItemCollectionSizeLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            PutItemErrorKind::TransactionConflictException(_inner) => std::fmt::Display::fmt(_inner, f),
            PutItemErrorKind::RequestLimitExceeded(_inner) => std::fmt::Display::fmt(_inner, f),
            PutItemErrorKind::InternalServerError(_inner) => std::fmt::Display::fmt(_inner, f),
            PutItemErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for PutItemError {
    fn code(&self) -> Option<&str> {
        PutItemError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            PutItemErrorKind::ProvisionedThroughputExceededException(inner) => Some(inner.retryable_error_kind()),
            PutItemErrorKind::RequestLimitExceeded(inner) => Some(inner.retryable_error_kind()),
            PutItemErrorKind::InternalServerError(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl PutItemError {
    pub fn new(kind: PutItemErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: PutItemErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: PutItemErrorKind::Unhandled(err.into()),
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

    pub fn is_conditional_check_failed_exception(&self) -> bool {
        matches!(&self.kind, PutItemErrorKind::ConditionalCheckFailedException(_))
    }

    pub fn is_provisioned_throughput_exceeded_exception(&self) -> bool {
        matches!(&self.kind, PutItemErrorKind::ProvisionedThroughputExceededException(_))
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, PutItemErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_item_collection_size_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, PutItemErrorKind::ItemCollectionSizeLimitExceededException(_))
    }

    pub fn is_transaction_conflict_exception(&self) -> bool {
        matches!(&self.kind, PutItemErrorKind::TransactionConflictException(_))
    }

    pub fn is_request_limit_exceeded(&self) -> bool {
        matches!(&self.kind, PutItemErrorKind::RequestLimitExceeded(_))
    }

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, PutItemErrorKind::InternalServerError(_))
    }
}
impl std::error::Error for PutItemError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            PutItemErrorKind::ConditionalCheckFailedException(_inner) => Some(_inner),
            PutItemErrorKind::ProvisionedThroughputExceededException(_inner) => Some(_inner),
            PutItemErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            PutItemErrorKind::ItemCollectionSizeLimitExceededException(_inner) => Some(_inner),
            PutItemErrorKind::TransactionConflictException(_inner) => Some(_inner),
            PutItemErrorKind::RequestLimitExceeded(_inner) => Some(_inner),
            PutItemErrorKind::InternalServerError(_inner) => Some(_inner),
            PutItemErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `Query` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct QueryError {
    pub kind: QueryErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `Query` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum QueryErrorKind {
    ProvisionedThroughputExceededException(crate::error::ProvisionedThroughputExceededException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    RequestLimitExceeded(crate::error::RequestLimitExceeded),
    InternalServerError(crate::error::InternalServerError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            QueryErrorKind::ProvisionedThroughputExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            QueryErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            QueryErrorKind::RequestLimitExceeded(_inner) => std::fmt::Display::fmt(_inner, f),
            QueryErrorKind::InternalServerError(_inner) => std::fmt::Display::fmt(_inner, f),
            QueryErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for QueryError {
    fn code(&self) -> Option<&str> {
        QueryError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            QueryErrorKind::ProvisionedThroughputExceededException(inner) => Some(inner.retryable_error_kind()),
            QueryErrorKind::RequestLimitExceeded(inner) => Some(inner.retryable_error_kind()),
            QueryErrorKind::InternalServerError(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl QueryError {
    pub fn new(kind: QueryErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: QueryErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: QueryErrorKind::Unhandled(err.into()),
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

    pub fn is_provisioned_throughput_exceeded_exception(&self) -> bool {
        matches!(&self.kind, QueryErrorKind::ProvisionedThroughputExceededException(_))
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, QueryErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_request_limit_exceeded(&self) -> bool {
        matches!(&self.kind, QueryErrorKind::RequestLimitExceeded(_))
    }

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, QueryErrorKind::InternalServerError(_))
    }
}
impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            QueryErrorKind::ProvisionedThroughputExceededException(_inner) => Some(_inner),
            QueryErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            QueryErrorKind::RequestLimitExceeded(_inner) => Some(_inner),
            QueryErrorKind::InternalServerError(_inner) => Some(_inner),
            QueryErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `Scan` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `Scan` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum ScanErrorKind {
    ProvisionedThroughputExceededException(crate::error::ProvisionedThroughputExceededException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    RequestLimitExceeded(crate::error::RequestLimitExceeded),
    InternalServerError(crate::error::InternalServerError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ScanErrorKind::ProvisionedThroughputExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            ScanErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            ScanErrorKind::RequestLimitExceeded(_inner) => std::fmt::Display::fmt(_inner, f),
            ScanErrorKind::InternalServerError(_inner) => std::fmt::Display::fmt(_inner, f),
            ScanErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for ScanError {
    fn code(&self) -> Option<&str> {
        ScanError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            ScanErrorKind::ProvisionedThroughputExceededException(inner) => Some(inner.retryable_error_kind()),
            ScanErrorKind::RequestLimitExceeded(inner) => Some(inner.retryable_error_kind()),
            ScanErrorKind::InternalServerError(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl ScanError {
    pub fn new(kind: ScanErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: ScanErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: ScanErrorKind::Unhandled(err.into()),
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

    pub fn is_provisioned_throughput_exceeded_exception(&self) -> bool {
        matches!(&self.kind, ScanErrorKind::ProvisionedThroughputExceededException(_))
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, ScanErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_request_limit_exceeded(&self) -> bool {
        matches!(&self.kind, ScanErrorKind::RequestLimitExceeded(_))
    }

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, ScanErrorKind::InternalServerError(_))
    }
}
impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ScanErrorKind::ProvisionedThroughputExceededException(_inner) => Some(_inner),
            ScanErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            ScanErrorKind::RequestLimitExceeded(_inner) => Some(_inner),
            ScanErrorKind::InternalServerError(_inner) => Some(_inner),
            ScanErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `TransactGetItems` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct TransactGetItemsError {
    pub kind: TransactGetItemsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `TransactGetItems` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum TransactGetItemsErrorKind {
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    TransactionCanceledException(crate::error::TransactionCanceledException),
    ProvisionedThroughputExceededException(crate::error::ProvisionedThroughputExceededException),
    RequestLimitExceeded(crate::error::RequestLimitExceeded),
    InternalServerError(crate::error::InternalServerError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for TransactGetItemsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            TransactGetItemsErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            TransactGetItemsErrorKind::TransactionCanceledException(_inner) => std::fmt::Display::fmt(_inner, f),
            TransactGetItemsErrorKind::ProvisionedThroughputExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            TransactGetItemsErrorKind::RequestLimitExceeded(_inner) => std::fmt::Display::fmt(_inner, f),
            TransactGetItemsErrorKind::InternalServerError(_inner) => std::fmt::Display::fmt(_inner, f),
            TransactGetItemsErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for TransactGetItemsError {
    fn code(&self) -> Option<&str> {
        TransactGetItemsError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            TransactGetItemsErrorKind::ProvisionedThroughputExceededException(inner) => Some(inner.retryable_error_kind()),
            TransactGetItemsErrorKind::RequestLimitExceeded(inner) => Some(inner.retryable_error_kind()),
            TransactGetItemsErrorKind::InternalServerError(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl TransactGetItemsError {
    pub fn new(kind: TransactGetItemsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: TransactGetItemsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: TransactGetItemsErrorKind::Unhandled(err.into()),
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
        matches!(&self.kind, TransactGetItemsErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_transaction_canceled_exception(&self) -> bool {
        matches!(&self.kind, TransactGetItemsErrorKind::TransactionCanceledException(_))
    }

    pub fn is_provisioned_throughput_exceeded_exception(&self) -> bool {
        matches!(&self.kind, TransactGetItemsErrorKind::ProvisionedThroughputExceededException(_))
    }

    pub fn is_request_limit_exceeded(&self) -> bool {
        matches!(&self.kind, TransactGetItemsErrorKind::RequestLimitExceeded(_))
    }

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, TransactGetItemsErrorKind::InternalServerError(_))
    }
}
impl std::error::Error for TransactGetItemsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            TransactGetItemsErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            TransactGetItemsErrorKind::TransactionCanceledException(_inner) => Some(_inner),
            TransactGetItemsErrorKind::ProvisionedThroughputExceededException(_inner) => Some(_inner),
            TransactGetItemsErrorKind::RequestLimitExceeded(_inner) => Some(_inner),
            TransactGetItemsErrorKind::InternalServerError(_inner) => Some(_inner),
            TransactGetItemsErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `TransactWriteItems` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct TransactWriteItemsError {
    pub kind: TransactWriteItemsErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `TransactWriteItems` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum TransactWriteItemsErrorKind {
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    TransactionCanceledException(crate::error::TransactionCanceledException),
    TransactionInProgressException(crate::error::TransactionInProgressException),
    IdempotentParameterMismatchException(crate::error::IdempotentParameterMismatchException),
    ProvisionedThroughputExceededException(crate::error::ProvisionedThroughputExceededException),
    RequestLimitExceeded(crate::error::RequestLimitExceeded),
    InternalServerError(crate::error::InternalServerError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for TransactWriteItemsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            TransactWriteItemsErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            TransactWriteItemsErrorKind::TransactionCanceledException(_inner) => std::fmt::Display::fmt(_inner, f),
            TransactWriteItemsErrorKind::TransactionInProgressException(_inner) => std::fmt::Display::fmt(_inner, f),
            TransactWriteItemsErrorKind::IdempotentParameterMismatchException(_inner) => std::fmt::Display::fmt(_inner, f),
            TransactWriteItemsErrorKind::ProvisionedThroughputExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            TransactWriteItemsErrorKind::RequestLimitExceeded(_inner) => std::fmt::Display::fmt(_inner, f),
            TransactWriteItemsErrorKind::InternalServerError(_inner) => std::fmt::Display::fmt(_inner, f),
            TransactWriteItemsErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for TransactWriteItemsError {
    fn code(&self) -> Option<&str> {
        TransactWriteItemsError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            TransactWriteItemsErrorKind::ProvisionedThroughputExceededException(inner) => Some(inner.retryable_error_kind()),
            TransactWriteItemsErrorKind::RequestLimitExceeded(inner) => Some(inner.retryable_error_kind()),
            TransactWriteItemsErrorKind::InternalServerError(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl TransactWriteItemsError {
    pub fn new(kind: TransactWriteItemsErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: TransactWriteItemsErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: TransactWriteItemsErrorKind::Unhandled(err.into()),
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
        matches!(&self.kind, TransactWriteItemsErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_transaction_canceled_exception(&self) -> bool {
        matches!(&self.kind, TransactWriteItemsErrorKind::TransactionCanceledException(_))
    }

    pub fn is_transaction_in_progress_exception(&self) -> bool {
        matches!(&self.kind, TransactWriteItemsErrorKind::TransactionInProgressException(_))
    }

    pub fn is_idempotent_parameter_mismatch_exception(&self) -> bool {
        matches!(&self.kind, TransactWriteItemsErrorKind::IdempotentParameterMismatchException(_))
    }

    pub fn is_provisioned_throughput_exceeded_exception(&self) -> bool {
        matches!(&self.kind, TransactWriteItemsErrorKind::ProvisionedThroughputExceededException(_))
    }

    pub fn is_request_limit_exceeded(&self) -> bool {
        matches!(&self.kind, TransactWriteItemsErrorKind::RequestLimitExceeded(_))
    }

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, TransactWriteItemsErrorKind::InternalServerError(_))
    }
}
impl std::error::Error for TransactWriteItemsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            TransactWriteItemsErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            TransactWriteItemsErrorKind::TransactionCanceledException(_inner) => Some(_inner),
            TransactWriteItemsErrorKind::TransactionInProgressException(_inner) => Some(_inner),
            TransactWriteItemsErrorKind::IdempotentParameterMismatchException(_inner) => Some(_inner),
            TransactWriteItemsErrorKind::ProvisionedThroughputExceededException(_inner) => Some(_inner),
            TransactWriteItemsErrorKind::RequestLimitExceeded(_inner) => Some(_inner),
            TransactWriteItemsErrorKind::InternalServerError(_inner) => Some(_inner),
            TransactWriteItemsErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `UpdateItem` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct UpdateItemError {
    pub kind: UpdateItemErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `UpdateItem` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum UpdateItemErrorKind {
    ConditionalCheckFailedException(crate::error::ConditionalCheckFailedException),
    ProvisionedThroughputExceededException(crate::error::ProvisionedThroughputExceededException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    ItemCollectionSizeLimitExceededException(crate::error::ItemCollectionSizeLimitExceededException),
    TransactionConflictException(crate::error::TransactionConflictException),
    RequestLimitExceeded(crate::error::RequestLimitExceeded),
    InternalServerError(crate::error::InternalServerError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for UpdateItemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            UpdateItemErrorKind::ConditionalCheckFailedException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateItemErrorKind::ProvisionedThroughputExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateItemErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateItemErrorKind::ItemCollectionSizeLimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateItemErrorKind::TransactionConflictException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateItemErrorKind::RequestLimitExceeded(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateItemErrorKind::InternalServerError(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateItemErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for UpdateItemError {
    fn code(&self) -> Option<&str> {
        UpdateItemError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            UpdateItemErrorKind::ProvisionedThroughputExceededException(inner) => Some(inner.retryable_error_kind()),
            UpdateItemErrorKind::RequestLimitExceeded(inner) => Some(inner.retryable_error_kind()),
            UpdateItemErrorKind::InternalServerError(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl UpdateItemError {
    pub fn new(kind: UpdateItemErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: UpdateItemErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: UpdateItemErrorKind::Unhandled(err.into()),
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

    pub fn is_conditional_check_failed_exception(&self) -> bool {
        matches!(&self.kind, UpdateItemErrorKind::ConditionalCheckFailedException(_))
    }

    pub fn is_provisioned_throughput_exceeded_exception(&self) -> bool {
        matches!(&self.kind, UpdateItemErrorKind::ProvisionedThroughputExceededException(_))
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, UpdateItemErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_item_collection_size_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, UpdateItemErrorKind::ItemCollectionSizeLimitExceededException(_))
    }

    pub fn is_transaction_conflict_exception(&self) -> bool {
        matches!(&self.kind, UpdateItemErrorKind::TransactionConflictException(_))
    }

    pub fn is_request_limit_exceeded(&self) -> bool {
        matches!(&self.kind, UpdateItemErrorKind::RequestLimitExceeded(_))
    }

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, UpdateItemErrorKind::InternalServerError(_))
    }
}
impl std::error::Error for UpdateItemError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            UpdateItemErrorKind::ConditionalCheckFailedException(_inner) => Some(_inner),
            UpdateItemErrorKind::ProvisionedThroughputExceededException(_inner) => Some(_inner),
            UpdateItemErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            UpdateItemErrorKind::ItemCollectionSizeLimitExceededException(_inner) => Some(_inner),
            UpdateItemErrorKind::TransactionConflictException(_inner) => Some(_inner),
            UpdateItemErrorKind::RequestLimitExceeded(_inner) => Some(_inner),
            UpdateItemErrorKind::InternalServerError(_inner) => Some(_inner),
            UpdateItemErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `UpdateTable` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct UpdateTableError {
    pub kind: UpdateTableErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `UpdateTable` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum UpdateTableErrorKind {
    ResourceInUseException(crate::error::ResourceInUseException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    LimitExceededException(crate::error::LimitExceededException),
    InternalServerError(crate::error::InternalServerError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for UpdateTableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            UpdateTableErrorKind::ResourceInUseException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateTableErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateTableErrorKind::LimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateTableErrorKind::InternalServerError(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateTableErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for UpdateTableError {
    fn code(&self) -> Option<&str> {
        UpdateTableError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            UpdateTableErrorKind::InternalServerError(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl UpdateTableError {
    pub fn new(kind: UpdateTableErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: UpdateTableErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: UpdateTableErrorKind::Unhandled(err.into()),
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

    pub fn is_resource_in_use_exception(&self) -> bool {
        matches!(&self.kind, UpdateTableErrorKind::ResourceInUseException(_))
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, UpdateTableErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, UpdateTableErrorKind::LimitExceededException(_))
    }

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, UpdateTableErrorKind::InternalServerError(_))
    }
}
impl std::error::Error for UpdateTableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            UpdateTableErrorKind::ResourceInUseException(_inner) => Some(_inner),
            UpdateTableErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            UpdateTableErrorKind::LimitExceededException(_inner) => Some(_inner),
            UpdateTableErrorKind::InternalServerError(_inner) => Some(_inner),
            UpdateTableErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// Error type for the `UpdateTimeToLive` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub struct UpdateTimeToLiveError {
    pub kind: UpdateTimeToLiveErrorKind,
    pub(crate) meta: smithy_types::Error,
}
/// Types of errors that can occur for the `UpdateTimeToLive` operation
#[non_exhaustive]
#[derive(std::fmt::Debug)]
pub enum UpdateTimeToLiveErrorKind {
    ResourceInUseException(crate::error::ResourceInUseException),
    ResourceNotFoundException(crate::error::ResourceNotFoundException),
    LimitExceededException(crate::error::LimitExceededException),
    InternalServerError(crate::error::InternalServerError),
    /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}
impl std::fmt::Display for UpdateTimeToLiveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            UpdateTimeToLiveErrorKind::ResourceInUseException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateTimeToLiveErrorKind::ResourceNotFoundException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateTimeToLiveErrorKind::LimitExceededException(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateTimeToLiveErrorKind::InternalServerError(_inner) => std::fmt::Display::fmt(_inner, f),
            UpdateTimeToLiveErrorKind::Unhandled(_inner) => std::fmt::Display::fmt(_inner, f),
        }
    }
}
impl smithy_types::retry::ProvideErrorKind for UpdateTimeToLiveError {
    fn code(&self) -> Option<&str> {
        UpdateTimeToLiveError::code(self)
    }
    fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
        match &self.kind {
            UpdateTimeToLiveErrorKind::InternalServerError(inner) => Some(inner.retryable_error_kind()),
            _ => None,
        }
    }
}
impl UpdateTimeToLiveError {
    pub fn new(kind: UpdateTimeToLiveErrorKind, meta: smithy_types::Error) -> Self {
        Self { kind, meta }
    }

    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self {
            kind: UpdateTimeToLiveErrorKind::Unhandled(err.into()),
            meta: Default::default(),
        }
    }

    pub fn generic(err: smithy_types::Error) -> Self {
        Self {
            meta: err.clone(),
            kind: UpdateTimeToLiveErrorKind::Unhandled(err.into()),
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

    pub fn is_resource_in_use_exception(&self) -> bool {
        matches!(&self.kind, UpdateTimeToLiveErrorKind::ResourceInUseException(_))
    }

    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(&self.kind, UpdateTimeToLiveErrorKind::ResourceNotFoundException(_))
    }

    pub fn is_limit_exceeded_exception(&self) -> bool {
        matches!(&self.kind, UpdateTimeToLiveErrorKind::LimitExceededException(_))
    }

    pub fn is_internal_server_error(&self) -> bool {
        matches!(&self.kind, UpdateTimeToLiveErrorKind::InternalServerError(_))
    }
}
impl std::error::Error for UpdateTimeToLiveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            UpdateTimeToLiveErrorKind::ResourceInUseException(_inner) => Some(_inner),
            UpdateTimeToLiveErrorKind::ResourceNotFoundException(_inner) => Some(_inner),
            UpdateTimeToLiveErrorKind::LimitExceededException(_inner) => Some(_inner),
            UpdateTimeToLiveErrorKind::InternalServerError(_inner) => Some(_inner),
            UpdateTimeToLiveErrorKind::Unhandled(_inner) => Some(_inner.as_ref()),
        }
    }
}

/// A condition specified in the operation could not be evaluated
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct ConditionalCheckFailedException {
    #[serde(rename = "message")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub message: std::option::Option<std::string::String>,
}
impl ConditionalCheckFailedException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`ConditionalCheckFailedException`](crate::error::ConditionalCheckFailedException)
    pub fn builder() -> crate::error::conditional_check_failed_exception::Builder {
        crate::error::conditional_check_failed_exception::Builder::default()
    }
}
impl std::fmt::Display for ConditionalCheckFailedException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ConditionalCheckFailedException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for ConditionalCheckFailedException {}
/// See [`ConditionalCheckFailedException`](crate::error::ConditionalCheckFailedException)
pub mod conditional_check_failed_exception {
    /// A builder for [`ConditionalCheckFailedException`](crate::error::ConditionalCheckFailedException)
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
        /// Consumes the builder and constructs a [`ConditionalCheckFailedException`](crate::error::ConditionalCheckFailedException)
        pub fn build(self) -> crate::error::ConditionalCheckFailedException {
            crate::error::ConditionalCheckFailedException {
                message: self.message,
            }
        }
    }
}

/// An error occurred on the server side
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct InternalServerError {
    #[serde(rename = "message")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub message: std::option::Option<std::string::String>,
}
impl InternalServerError {
    pub fn retryable_error_kind(&self) -> smithy_types::retry::ErrorKind {
        smithy_types::retry::ErrorKind::ServerError
    }
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`InternalServerError`](crate::error::InternalServerError)
    pub fn builder() -> crate::error::internal_server_error::Builder {
        crate::error::internal_server_error::Builder::default()
    }
}
impl std::fmt::Display for InternalServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InternalServerError")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for InternalServerError {}
/// See [`InternalServerError`](crate::error::InternalServerError)
pub mod internal_server_error {
    /// A builder for [`InternalServerError`](crate::error::InternalServerError)
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
        /// Consumes the builder and constructs a [`InternalServerError`](crate::error::InternalServerError)
        pub fn build(self) -> crate::error::InternalServerError {
            crate::error::InternalServerError {
                message: self.message,
            }
        }
    }
}

/// An item collection is too large
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct ItemCollectionSizeLimitExceededException {
    #[serde(rename = "message")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub message: std::option::Option<std::string::String>,
}
impl ItemCollectionSizeLimitExceededException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`ItemCollectionSizeLimitExceededException`](crate::error::ItemCollectionSizeLimitExceededException)
    pub fn builder() -> crate::error::item_collection_size_limit_exceeded_exception::Builder {
        crate::error::item_collection_size_limit_exceeded_exception::Builder::default()
    }
}
impl std::fmt::Display for ItemCollectionSizeLimitExceededException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ItemCollectionSizeLimitExceededException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for ItemCollectionSizeLimitExceededException {}
/// See [`ItemCollectionSizeLimitExceededException`](crate::error::ItemCollectionSizeLimitExceededException)
pub mod item_collection_size_limit_exceeded_exception {
    /// A builder for [`ItemCollectionSizeLimitExceededException`](crate::error::ItemCollectionSizeLimitExceededException)
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
        /// Consumes the builder and constructs a [`ItemCollectionSizeLimitExceededException`](crate::error::ItemCollectionSizeLimitExceededException)
        pub fn build(self) -> crate::error::ItemCollectionSizeLimitExceededException {
            crate::error::ItemCollectionSizeLimitExceededException {
                message: self.message,
            }
        }
    }
}

/// There is no limit to the number of daily on-demand backups that can be taken
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

/// Your request rate is too high
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct ProvisionedThroughputExceededException {
    #[serde(rename = "message")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub message: std::option::Option<std::string::String>,
}
impl ProvisionedThroughputExceededException {
    pub fn retryable_error_kind(&self) -> smithy_types::retry::ErrorKind {
        smithy_types::retry::ErrorKind::ThrottlingError
    }
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`ProvisionedThroughputExceededException`](crate::error::ProvisionedThroughputExceededException)
    pub fn builder() -> crate::error::provisioned_throughput_exceeded_exception::Builder {
        crate::error::provisioned_throughput_exceeded_exception::Builder::default()
    }
}
impl std::fmt::Display for ProvisionedThroughputExceededException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ProvisionedThroughputExceededException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for ProvisionedThroughputExceededException {}
/// See [`ProvisionedThroughputExceededException`](crate::error::ProvisionedThroughputExceededException)
pub mod provisioned_throughput_exceeded_exception {
    /// A builder for [`ProvisionedThroughputExceededException`](crate::error::ProvisionedThroughputExceededException)
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
        /// Consumes the builder and constructs a [`ProvisionedThroughputExceededException`](crate::error::ProvisionedThroughputExceededException)
        pub fn build(self) -> crate::error::ProvisionedThroughputExceededException {
            crate::error::ProvisionedThroughputExceededException {
                message: self.message,
            }
        }
    }
}

/// Throughput exceeds the current throughput quota for your account
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct RequestLimitExceeded {
    #[serde(rename = "message")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub message: std::option::Option<std::string::String>,
}
impl RequestLimitExceeded {
    pub fn retryable_error_kind(&self) -> smithy_types::retry::ErrorKind {
        smithy_types::retry::ErrorKind::ThrottlingError
    }
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`RequestLimitExceeded`](crate::error::RequestLimitExceeded)
    pub fn builder() -> crate::error::request_limit_exceeded::Builder {
        crate::error::request_limit_exceeded::Builder::default()
    }
}
impl std::fmt::Display for RequestLimitExceeded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RequestLimitExceeded")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for RequestLimitExceeded {}
/// See [`RequestLimitExceeded`](crate::error::RequestLimitExceeded)
pub mod request_limit_exceeded {
    /// A builder for [`RequestLimitExceeded`](crate::error::RequestLimitExceeded)
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
        /// Consumes the builder and constructs a [`RequestLimitExceeded`](crate::error::RequestLimitExceeded)
        pub fn build(self) -> crate::error::RequestLimitExceeded {
            crate::error::RequestLimitExceeded {
                message: self.message,
            }
        }
    }
}

/// The operation conflicts with the resource's availability
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

/// The operation tried to access a nonexistent table or index
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

/// Operation was rejected because there is an ongoing transaction for the item
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct TransactionConflictException {
    #[serde(rename = "message")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub message: std::option::Option<std::string::String>,
}
impl TransactionConflictException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`TransactionConflictException`](crate::error::TransactionConflictException)
    pub fn builder() -> crate::error::transaction_conflict_exception::Builder {
        crate::error::transaction_conflict_exception::Builder::default()
    }
}
impl std::fmt::Display for TransactionConflictException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TransactionConflictException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for TransactionConflictException {}
/// See [`TransactionConflictException`](crate::error::TransactionConflictException)
pub mod transaction_conflict_exception {
    /// A builder for [`TransactionConflictException`](crate::error::TransactionConflictException)
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
        /// Consumes the builder and constructs a [`TransactionConflictException`](crate::error::TransactionConflictException)
        pub fn build(self) -> crate::error::TransactionConflictException {
            crate::error::TransactionConflictException {
                message: self.message,
            }
        }
    }
}

/// The entire transaction request was canceled
///
/// `CancellationReasons` lists one entry per item of the request, in order.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct TransactionCanceledException {
    #[serde(rename = "message")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub message: std::option::Option<std::string::String>,
    #[serde(rename = "CancellationReasons")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub cancellation_reasons: std::option::Option<std::vec::Vec<crate::model::CancellationReason>>,
}
impl TransactionCanceledException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`TransactionCanceledException`](crate::error::TransactionCanceledException)
    pub fn builder() -> crate::error::transaction_canceled_exception::Builder {
        crate::error::transaction_canceled_exception::Builder::default()
    }
}
impl std::fmt::Display for TransactionCanceledException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TransactionCanceledException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for TransactionCanceledException {}
/// See [`TransactionCanceledException`](crate::error::TransactionCanceledException)
pub mod transaction_canceled_exception {
    /// A builder for [`TransactionCanceledException`](crate::error::TransactionCanceledException)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        message: std::option::Option<std::string::String>,
        cancellation_reasons: std::option::Option<std::vec::Vec<crate::model::CancellationReason>>,
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
        pub fn cancellation_reasons(
            mut self,
            inp: impl Into<crate::model::CancellationReason>,
        ) -> Self {
            let mut v = self.cancellation_reasons.unwrap_or_default();
            v.push(inp.into());
            self.cancellation_reasons = Some(v);
            self
        }
        pub fn set_cancellation_reasons(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::CancellationReason>>,
        ) -> Self {
            self.cancellation_reasons = inp;
            self
        }
        /// Consumes the builder and constructs a [`TransactionCanceledException`](crate::error::TransactionCanceledException)
        pub fn build(self) -> crate::error::TransactionCanceledException {
            crate::error::TransactionCanceledException {
                message: self.message,
                cancellation_reasons: self.cancellation_reasons,
            }
        }
    }
}

/// The transaction with the given request token is already in progress
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct TransactionInProgressException {
    #[serde(rename = "message")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub message: std::option::Option<std::string::String>,
}
impl TransactionInProgressException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`TransactionInProgressException`](crate::error::TransactionInProgressException)
    pub fn builder() -> crate::error::transaction_in_progress_exception::Builder {
        crate::error::transaction_in_progress_exception::Builder::default()
    }
}
impl std::fmt::Display for TransactionInProgressException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TransactionInProgressException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for TransactionInProgressException {}
/// See [`TransactionInProgressException`](crate::error::TransactionInProgressException)
pub mod transaction_in_progress_exception {
    /// A builder for [`TransactionInProgressException`](crate::error::TransactionInProgressException)
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
        /// Consumes the builder and constructs a [`TransactionInProgressException`](crate::error::TransactionInProgressException)
        pub fn build(self) -> crate::error::TransactionInProgressException {
            crate::error::TransactionInProgressException {
                message: self.message,
            }
        }
    }
}

/// The client token was reused with different request parameters
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct IdempotentParameterMismatchException {
    #[serde(rename = "message")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub message: std::option::Option<std::string::String>,
}
impl IdempotentParameterMismatchException {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Creates a new builder-style object to manufacture [`IdempotentParameterMismatchException`](crate::error::IdempotentParameterMismatchException)
    pub fn builder() -> crate::error::idempotent_parameter_mismatch_exception::Builder {
        crate::error::idempotent_parameter_mismatch_exception::Builder::default()
    }
}
impl std::fmt::Display for IdempotentParameterMismatchException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "IdempotentParameterMismatchException")?;
        if let Some(inner_1) = &self.message {
            write!(f, ": {}", inner_1)?;
        }
        Ok(())
    }
}
impl std::error::Error for IdempotentParameterMismatchException {}
/// See [`IdempotentParameterMismatchException`](crate::error::IdempotentParameterMismatchException)
pub mod idempotent_parameter_mismatch_exception {
    /// A builder for [`IdempotentParameterMismatchException`](crate::error::IdempotentParameterMismatchException)
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
        /// Consumes the builder and constructs a [`IdempotentParameterMismatchException`](crate::error::IdempotentParameterMismatchException)
        pub fn build(self) -> crate::error::IdempotentParameterMismatchException {
            crate::error::IdempotentParameterMismatchException {
                message: self.message,
            }
        }
    }
}
