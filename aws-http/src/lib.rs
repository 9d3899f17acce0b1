/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod request_id;
pub mod user_agent;

pub use request_id::ResponseMetadata;

use smithy_http::result::{SdkError, SdkSuccess};
use smithy_http::retry::ClassifyResponse;
use smithy_types::retry::{ErrorKind, ProvideErrorKind, RetryKind};
use std::time::Duration;

/// A retry policy that models AWS error codes as outlined in the SEP
///
/// In order of priority:
/// 1. The `x-amz-retry-after` header is checked
/// 2. The modeled error retry mode is checked
/// 3. The code is checked against a predetermined list of throttling errors & transient error codes
/// 4. The status code is checked against a predetermined list of status codes
///
/// Requests that never produced a response because dispatch failed are transient.
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct AwsErrorRetryPolicy;

const TRANSIENT_ERROR_STATUS_CODES: &[u16] = &[500, 502, 503, 504];
const THROTTLING_ERRORS: &[&str] = &[
    "Throttling",
    "ThrottlingException",
    "ThrottledException",
    "RequestThrottledException",
    "TooManyRequestsException",
    "ProvisionedThroughputExceededException",
    "TransactionInProgressException",
    "RequestLimitExceeded",
    "BandwidthLimitExceeded",
    "LimitExceededException",
    "RequestThrottled",
    "SlowDown",
    "PriorRequestNotComplete",
    "EC2ThrottledException",
];
const TRANSIENT_ERRORS: &[&str] = &["RequestTimeout", "RequestTimeoutException"];

impl AwsErrorRetryPolicy {
    /// Create an `AwsErrorRetryPolicy` with the default set of known error & status codes
    pub fn new() -> Self {
        AwsErrorRetryPolicy
    }

    fn classify_error<E, B>(&self, err: &E, response: &http::Response<B>) -> RetryKind
    where
        E: ProvideErrorKind,
    {
        if let Some(retry_after_delay) = response
            .headers()
            .get("x-amz-retry-after")
            .and_then(|header| header.to_str().ok())
            .and_then(|header| header.parse::<u64>().ok())
        {
            return RetryKind::Explicit(Duration::from_millis(retry_after_delay));
        }
        if let Some(kind) = err.retryable_error_kind() {
            return RetryKind::Error(kind);
        };
        if let Some(code) = err.code() {
            if THROTTLING_ERRORS.contains(&code) {
                return RetryKind::Error(ErrorKind::ThrottlingError);
            }
            if TRANSIENT_ERRORS.contains(&code) {
                return RetryKind::Error(ErrorKind::TransientError);
            }
        };
        if TRANSIENT_ERROR_STATUS_CODES.contains(&response.status().as_u16()) {
            return RetryKind::Error(ErrorKind::TransientError);
        };
        RetryKind::NotRetryable
    }
}

impl Default for AwsErrorRetryPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E, B> ClassifyResponse<SdkSuccess<T, B>, SdkError<E, B>> for AwsErrorRetryPolicy
where
    E: ProvideErrorKind,
{
    fn classify(&self, response: Result<&SdkSuccess<T, B>, &SdkError<E, B>>) -> RetryKind {
        match response {
            Ok(_) => RetryKind::NotRetryable,
            Err(SdkError::ServiceError { err, raw }) => self.classify_error(err, raw),
            Err(SdkError::DispatchFailure(_)) => RetryKind::Error(ErrorKind::TransientError),
            Err(_) => RetryKind::NotRetryable,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::AwsErrorRetryPolicy;
    use smithy_http::result::{SdkError, SdkSuccess};
    use smithy_http::retry::ClassifyResponse;
    use smithy_types::retry::{ErrorKind, ProvideErrorKind, RetryKind};
    use std::time::Duration;

    struct UnmodeledError;

    struct CodedError {
        code: &'static str,
    }

    impl ProvideErrorKind for UnmodeledError {
        fn retryable_error_kind(&self) -> Option<ErrorKind> {
            None
        }

        fn code(&self) -> Option<&str> {
            None
        }
    }

    impl ProvideErrorKind for CodedError {
        fn retryable_error_kind(&self) -> Option<ErrorKind> {
            None
        }

        fn code(&self) -> Option<&str> {
            Some(self.code)
        }
    }

    fn classify<E: ProvideErrorKind>(err: E, raw: http::Response<&'static str>) -> RetryKind {
        let policy = AwsErrorRetryPolicy::new();
        let result: Result<SdkSuccess<(), &str>, SdkError<E, &str>> =
            Err(SdkError::ServiceError { err, raw });
        policy.classify(result.as_ref())
    }

    #[test]
    fn not_an_error() {
        let policy = AwsErrorRetryPolicy::new();
        let ok: Result<SdkSuccess<(), &str>, SdkError<UnmodeledError, &str>> = Ok(SdkSuccess {
            raw: http::Response::new("OK"),
            parsed: (),
        });
        assert_eq!(policy.classify(ok.as_ref()), RetryKind::NotRetryable);
        assert_eq!(
            classify(UnmodeledError, http::Response::new("OK")),
            RetryKind::NotRetryable
        );
    }

    #[test]
    fn classify_by_response_status() {
        for status in &[500, 502, 503, 504] {
            let test_resp = http::Response::builder()
                .status(*status)
                .body("error!")
                .unwrap();
            assert_eq!(
                classify(UnmodeledError, test_resp),
                RetryKind::Error(ErrorKind::TransientError)
            );
        }
        let not_found = http::Response::builder().status(404).body("").unwrap();
        assert_eq!(classify(UnmodeledError, not_found), RetryKind::NotRetryable);
    }

    #[test]
    fn classify_by_error_code() {
        assert_eq!(
            classify(CodedError { code: "Throttling" }, http::Response::new("OK")),
            RetryKind::Error(ErrorKind::ThrottlingError)
        );
        assert_eq!(
            classify(
                CodedError {
                    code: "RequestTimeout"
                },
                http::Response::new("OK")
            ),
            RetryKind::Error(ErrorKind::TransientError)
        )
    }

    #[test]
    fn classify_generic() {
        let err = smithy_types::Error {
            code: Some("ProvisionedThroughputExceededException".to_string()),
            message: None,
            request_id: None,
        };
        assert_eq!(
            classify(err, http::Response::new("OK")),
            RetryKind::Error(ErrorKind::ThrottlingError)
        );
    }

    #[test]
    fn classify_by_error_kind() {
        struct ModeledRetries;
        impl ProvideErrorKind for ModeledRetries {
            fn retryable_error_kind(&self) -> Option<ErrorKind> {
                Some(ErrorKind::ServerError)
            }

            fn code(&self) -> Option<&str> {
                // code should not be called when `error_kind` is provided
                unimplemented!()
            }
        }
        assert_eq!(
            classify(ModeledRetries, http::Response::new("OK")),
            RetryKind::Error(ErrorKind::ServerError)
        );
    }

    #[test]
    fn test_retry_after_header() {
        let test_response = http::Response::builder()
            .header("x-amz-retry-after", "5000")
            .body("retry later")
            .unwrap();
        assert_eq!(
            classify(UnmodeledError, test_response),
            RetryKind::Explicit(Duration::from_millis(5000))
        );
    }

    #[test]
    fn dispatch_failures_are_transient() {
        let policy = AwsErrorRetryPolicy::new();
        let result: Result<SdkSuccess<(), &str>, SdkError<UnmodeledError, &str>> =
            Err(SdkError::DispatchFailure("connection reset".into()));
        assert_eq!(
            policy.classify(result.as_ref()),
            RetryKind::Error(ErrorKind::TransientError)
        );
        let result: Result<SdkSuccess<(), &str>, SdkError<UnmodeledError, &str>> =
            Err(SdkError::ConstructionFailure("no region".into()));
        assert_eq!(policy.classify(result.as_ref()), RetryKind::NotRetryable);
    }
}
