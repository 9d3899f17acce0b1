/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod dispatch;
pub mod map_request;
pub mod parse_response;

use smithy_http::result::SdkError;
use tower::BoxError;

/// An Error Occurred During the process of sending an Operation
///
/// The variants are split to enable the final [SdkError](`smithy_http::result::SdkError`) to differentiate
/// between two types of errors:
/// 1. [`RequestConstructionError`](SendOperationError::RequestConstructionError): Errors where the
///    SDK never attempted to dispatch the underlying `http::Request`. These represent errors that
///    occurred during the request construction pipeline. These generally stem from configuration issues.
/// 2. [`RequestDispatchError`](SendOperationError::RequestDispatchError): Errors where the inner
///    tower service failed (eg. because the hostname couldn't be resolved, connection errors,
///    socket hangup etc.). In this case, we don't know how much of the request was _actually_ sent
///    to the client. We only know that we never got back an `http::Response` (and instead got an error).
///
/// `SendOperationError` is currently defined only in `smithy-http-tower` because it may be removed
/// or replaced with `SdkError` in the future.
#[derive(Debug)]
pub enum SendOperationError {
    /// The request could not be constructed
    ///
    /// These errors usually stem from configuration issues (eg. no region, bad credential provider, etc.)
    RequestConstructionError(BoxError),

    /// The request could not be dispatched
    RequestDispatchError(BoxError),
}

/// Convert a `SendOperationError` into an `SdkError`
impl<E, B> From<SendOperationError> for SdkError<E, B> {
    fn from(err: SendOperationError) -> Self {
        match err {
            SendOperationError::RequestDispatchError(e) => SdkError::DispatchFailure(e),
            SendOperationError::RequestConstructionError(e) => SdkError::ConstructionFailure(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::dispatch::DispatchLayer;
    use crate::map_request::MapRequestLayer;
    use crate::parse_response::ParseResponseLayer;
    use bytes::Bytes;
    use http::{HeaderValue, Response};
    use smithy_http::body::SdkBody;
    use smithy_http::middleware::MapRequest;
    use smithy_http::operation;
    use smithy_http::operation::{Operation, Request};
    use smithy_http::response::ParseStrictResponse;
    use smithy_http::result::SdkError;
    use std::convert::Infallible;
    use tower::{service_fn, Service, ServiceBuilder, ServiceExt};

    /// Creates a stubbed service stack and runs it to validate that all the types line up &
    /// everything is properly wired
    #[tokio::test]
    async fn service_stack() {
        #[derive(Clone)]
        struct AddHeader;
        impl MapRequest for AddHeader {
            type Error = Infallible;

            fn apply(&self, request: Request) -> Result<Request, Self::Error> {
                request.augment(|mut req, _| {
                    req.headers_mut()
                        .insert("X-Test", HeaderValue::from_static("Value"));
                    Ok(req)
                })
            }
        }

        struct TestParseResponse;
        impl ParseStrictResponse for TestParseResponse {
            type Output = Result<String, Infallible>;

            fn parse(&self, _response: &Response<Bytes>) -> Self::Output {
                Ok("OK".to_string())
            }
        }
        let http_layer = service_fn(|request: http::Request<SdkBody>| async move {
            if request.headers().contains_key("X-Test") {
                Ok(http::Response::new(SdkBody::from("ok")))
            } else {
                Err("header not set")
            }
        });

        let mut svc = ServiceBuilder::new()
            .layer(ParseResponseLayer::<TestParseResponse, ()>::new())
            .layer(MapRequestLayer::for_mapper(AddHeader))
            .layer(DispatchLayer)
            .service(http_layer);
        let req = http::Request::new(SdkBody::from("hello"));
        let req = operation::Request::new(req);
        let req = Operation::new(req, TestParseResponse);
        let resp = svc.ready().await.expect("ready").call(req).await;
        assert_eq!(resp.expect("success").parsed, "OK");
    }

    #[tokio::test]
    async fn construction_failures_are_not_dispatched() {
        #[derive(Clone)]
        struct FailingStage;
        impl MapRequest for FailingStage {
            type Error = std::io::Error;

            fn apply(&self, _request: Request) -> Result<Request, Self::Error> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "no region"))
            }
        }

        struct Unreachable;
        impl ParseStrictResponse for Unreachable {
            type Output = Result<(), Infallible>;

            fn parse(&self, _response: &Response<Bytes>) -> Self::Output {
                unreachable!("no response is ever received")
            }
        }

        let http_layer = service_fn(|_request: http::Request<SdkBody>| async move {
            Err::<http::Response<SdkBody>, _>("request should never be dispatched")
        });
        let svc = ServiceBuilder::new()
            .layer(ParseResponseLayer::<Unreachable, ()>::new())
            .layer(MapRequestLayer::for_mapper(FailingStage))
            .layer(DispatchLayer)
            .service(http_layer);
        let req = http::Request::new(SdkBody::empty());
        let resp = svc
            .oneshot(Operation::new(operation::Request::new(req), Unreachable))
            .await;
        match resp {
            Err(SdkError::ConstructionFailure(err)) => assert_eq!(err.to_string(), "no region"),
            other => panic!("expected construction failure, got ok={}", other.is_ok()),
        }
    }
}
