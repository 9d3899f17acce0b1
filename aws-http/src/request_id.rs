/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::{HeaderMap, HeaderValue};
use smithy_http::result::{SdkError, SdkSuccess};

/// Metadata AWS returns alongside every response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct ResponseMetadata {
    pub request_id: Option<String>,
    pub status: Option<u16>,
}

impl ResponseMetadata {
    pub fn from_response<B>(response: &http::Response<B>) -> Self {
        ResponseMetadata {
            request_id: extract_request_id(response.headers()).map(str::to_string),
            status: Some(response.status().as_u16()),
        }
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}

/// Implementers add a function to return an AWS request ID
pub trait RequestId {
    /// Returns the request ID if it's available.
    fn request_id(&self) -> Option<&str>;
}

impl<E, B> RequestId for SdkError<E, B> {
    fn request_id(&self) -> Option<&str> {
        self.raw_response()
            .and_then(|raw| extract_request_id(raw.headers()))
    }
}

impl<O, B> RequestId for SdkSuccess<O, B> {
    fn request_id(&self) -> Option<&str> {
        extract_request_id(self.raw.headers())
    }
}

impl RequestId for smithy_types::Error {
    fn request_id(&self) -> Option<&str> {
        smithy_types::Error::request_id(self)
    }
}

/// Extracts a request ID from HTTP response headers
fn extract_request_id(headers: &HeaderMap<HeaderValue>) -> Option<&str> {
    headers
        .get("x-amzn-requestid")
        .or_else(|| headers.get("x-amz-request-id"))
        .and_then(|value| value.to_str().ok())
}

#[cfg(test)]
mod test {
    use crate::request_id::{RequestId, ResponseMetadata};
    use smithy_http::result::{SdkError, SdkSuccess};

    #[test]
    fn request_id_from_headers() {
        let raw = http::Response::builder()
            .status(200)
            .header("x-amzn-requestid", "abc-123")
            .body("")
            .unwrap();
        let metadata = ResponseMetadata::from_response(&raw);
        assert_eq!(metadata.request_id(), Some("abc-123"));
        assert_eq!(metadata.status, Some(200));
        let success = SdkSuccess { raw, parsed: () };
        assert_eq!(success.request_id(), Some("abc-123"));
    }

    #[test]
    fn fallback_header_and_missing_response() {
        let raw = http::Response::builder()
            .status(400)
            .header("x-amz-request-id", "def-456")
            .body("")
            .unwrap();
        let err: SdkError<(), &str> = SdkError::ServiceError { err: (), raw };
        assert_eq!(err.request_id(), Some("def-456"));
        let err: SdkError<(), &str> = SdkError::DispatchFailure("timeout".into());
        assert_eq!(err.request_id(), None);
    }
}
