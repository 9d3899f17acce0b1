/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! AWS IAM Access Analyzer
//!
//! Identifies resources in your organization and accounts, such as Amazon S3 buckets or IAM roles,
//! that are shared with an external entity. Analyzers continuously monitor supported resources and
//! report each external access path as a finding.

pub use config::Config;
pub use error_meta::Error;

mod aws_endpoint;
#[cfg(feature = "client")]
pub mod client;
pub mod config;
pub mod error;
mod error_meta;
pub mod input;
pub mod model;
pub mod operation;
mod operation_deser;
pub mod output;

pub static PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
pub(crate) static API_METADATA: aws_http::user_agent::ApiMetadata =
    aws_http::user_agent::ApiMetadata::new("accessanalyzer", PKG_VERSION);

pub use aws_auth::Credentials;
#[cfg(feature = "client")]
pub use aws_hyper::SdkError;
pub use aws_types::region::Region;
#[cfg(feature = "client")]
pub use client::Client;
pub use smithy_http::endpoint::Endpoint;
pub use smithy_types::{Blob, Instant};
