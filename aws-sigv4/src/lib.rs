/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Provides functions for calculating Sigv4 signing keys, signatures, and
//! signing HTTP requests.

mod date_fmt;
pub mod http_request;
pub mod sign;

pub use http_request::{
    sign as sign_http_request, PayloadChecksumKind, SignableBody, SigningError, SigningParams,
    SigningSettings, UriEncoding,
};
