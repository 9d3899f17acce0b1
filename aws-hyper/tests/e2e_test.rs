/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_auth::Credentials;
use aws_endpoint::metadata::{Metadata, Protocol, SignatureVersion};
use aws_endpoint::{set_endpoint_resolver, CredentialScope};
use aws_http::user_agent::AwsUserAgent;
use aws_http::AwsErrorRetryPolicy;
use aws_hyper::test_connection::TestConnection;
use aws_hyper::{Client, RetryConfig, SdkError};
use aws_sig_auth::signer::OperationSigningConfig;
use aws_types::region::Region;
use aws_types::SigningService;
use bytes::Bytes;
use http::header::AUTHORIZATION;
use http::{Response, Uri};
use smithy_http::body::SdkBody;
use smithy_http::operation;
use smithy_http::operation::Operation;
use smithy_http::response::ParseStrictResponse;
use smithy_types::retry::{ErrorKind, ProvideErrorKind};
use std::convert::Infallible;
use std::error::Error;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, UNIX_EPOCH};

#[derive(Debug)]
struct TestError(u16);

impl fmt::Display for TestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "service returned {}", self.0)
    }
}

impl Error for TestError {}

impl ProvideErrorKind for TestError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        None
    }
}

#[derive(Clone)]
struct TestOperationParser;

impl ParseStrictResponse for TestOperationParser {
    type Output = Result<String, TestError>;

    fn parse(&self, response: &Response<Bytes>) -> Self::Output {
        if response.status().is_success() {
            Ok(String::from_utf8_lossy(response.body()).to_string())
        } else {
            Err(TestError(response.status().as_u16()))
        }
    }
}

fn test_operation() -> Operation<TestOperationParser, AwsErrorRetryPolicy> {
    let req = operation::Request::new(http::Request::new(SdkBody::from("request body")))
        .augment(|req, conf| {
            set_endpoint_resolver(
                conf,
                Arc::new(Metadata {
                    uri_template: "test-service.{region}.amazonaws.com",
                    protocol: Protocol::Https,
                    credential_scope: CredentialScope::default(),
                    signature_versions: SignatureVersion::V4,
                }),
            );
            aws_auth::provider::set_provider(
                conf,
                Arc::new(Credentials::from_keys("access_key", "secret_key", None)),
            );
            conf.insert(Region::new("test-region"));
            conf.insert(SigningService::from_static("test-service"));
            conf.insert(OperationSigningConfig::default_config());
            conf.insert(AwsUserAgent::for_tests());
            conf.insert(UNIX_EPOCH + Duration::from_secs(1613414417));
            Result::<_, Infallible>::Ok(req)
        })
        .unwrap();
    Operation::new(req, TestOperationParser)
        .with_metadata(operation::Metadata::new("TestOperation", "test-service"))
        .with_retry_policy(AwsErrorRetryPolicy::new())
}

fn response(status: u16, body: &'static str) -> http::Response<&'static str> {
    http::Response::builder().status(status).body(body).unwrap()
}

#[tokio::test]
async fn e2e_test() {
    let expected_req = http::Request::builder()
        .header(AUTHORIZATION, "AWS4-HMAC-SHA256 Credential=access_key/20210215/test-region/test-service/aws4_request, SignedHeaders=host;x-amz-date;x-amz-user-agent, Signature=a61c1b0b04d448e7de2a987ff154452ed90906185b3b8d9083b4aa4214bac17d")
        .header("x-amz-date", "20210215T184017Z")
        .header("user-agent", "aws-sdk-rust/0.123.test os/windows/XPSP3 lang/rust/1.50.0")
        .header("x-amz-user-agent", "aws-sdk-rust/0.123.test api/test-service/0.123 os/windows/XPSP3 lang/rust/1.50.0")
        .uri(Uri::from_static("https://test-service.test-region.amazonaws.com/"))
        .body(SdkBody::from("request body")).unwrap();
    let conn = TestConnection::new(vec![(expected_req, response(200, "response body"))]);
    let client = Client::new(conn.clone());
    let resp = client.call(test_operation()).await;
    let resp = resp.expect("successful operation");
    assert_eq!(resp, "response body");

    assert_eq!(conn.requests().len(), 1);
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn retries_server_errors() {
    let conn = TestConnection::new(vec![
        (
            http::Request::new(SdkBody::from("request body")),
            response(503, "unavailable"),
        ),
        (
            http::Request::new(SdkBody::from("request body")),
            response(200, "finally"),
        ),
    ]);
    let client = Client::new(conn.clone())
        .with_retry_config(RetryConfig::new().with_static_base(|| 0_f64));
    let resp = client.call_raw(test_operation()).await.expect("retry succeeds");
    assert_eq!(resp.parsed, "finally");
    assert_eq!(resp.raw.status(), 200);
    assert_eq!(conn.requests().len(), 2);
}

#[tokio::test]
async fn gives_up_after_max_attempts() {
    let events = (0..3)
        .map(|_| {
            (
                http::Request::new(SdkBody::from("request body")),
                response(500, "internal failure"),
            )
        })
        .collect();
    let conn = TestConnection::new(events);
    let client = Client::new(conn.clone())
        .with_retry_config(RetryConfig::new().with_static_base(|| 0_f64));
    let err = client
        .call(test_operation())
        .await
        .expect_err("every attempt fails");
    match err {
        SdkError::ServiceError { err, raw } => {
            assert_eq!(err.0, 500);
            assert_eq!(raw.status(), 500);
        }
        other => panic!("expected a service error, got {}", other),
    }
    assert_eq!(conn.requests().len(), 3);
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let conn = TestConnection::new(vec![(
        http::Request::new(SdkBody::from("request body")),
        response(400, "bad request"),
    )]);
    let client = Client::new(conn.clone());
    let err = client.call(test_operation()).await.expect_err("400 fails");
    assert!(matches!(err, SdkError::ServiceError { err: TestError(400), .. }));
    assert_eq!(conn.requests().len(), 1);
}

#[tokio::test]
async fn missing_region_is_a_construction_failure() {
    let conn = TestConnection::<&'static str>::new(vec![]);
    let client = Client::new(conn.clone());
    let mut operation = test_operation();
    operation.properties_mut().remove::<Region>();
    let err = client.call(operation).await.expect_err("no region");
    assert!(matches!(err, SdkError::ConstructionFailure(_)));
    assert!(conn.requests().is_empty());
}
