/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_hyper::conn::Standard;
use aws_hyper::test_connection::TestConnection;
use elasticinference::error::DescribeAcceleratorsErrorKind;
use elasticinference::model::{Filter, LocationType};
use elasticinference::{Client, Config, Credentials, Region, SdkError};
use http::Uri;
use smithy_http::body::SdkBody;

fn client(conn: TestConnection<&'static str>) -> Client {
    let conf = Config::builder()
        .region(Region::new("us-west-2"))
        .credentials_provider(Credentials::from_keys("ANOTREAL", "notrealsecret", None))
        .build();
    Client::from_conf_conn(conf, Standard::new(conn))
}

fn response(status: u16, body: &'static str) -> http::Response<&'static str> {
    http::Response::builder().status(status).body(body).unwrap()
}

#[tokio::test]
async fn describe_accelerators_with_filters() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .uri(Uri::from_static(
                "https://api.elastic-inference.us-west-2.amazonaws.com/describe-accelerators",
            ))
            .header("content-type", "application/json")
            .body(SdkBody::from(
                r#"{"filters":[{"name":"instance-id","values":["i-123"]}],"maxResults":5}"#,
            ))
            .unwrap(),
        response(
            200,
            r#"{"acceleratorSet":[{"acceleratorId":"eia-0123","acceleratorType":"eia2.medium","availabilityZone":"us-west-2a","attachedResource":"arn:aws:ec2:us-west-2:123456789012:instance/i-123","acceleratorHealth":{"status":"Ok"}}]}"#,
        ),
    )]);
    let client = client(conn.clone());
    let resp = client
        .describe_accelerators()
        .filters(
            Filter::builder()
                .name("instance-id")
                .values("i-123")
                .build(),
        )
        .max_results(5)
        .send()
        .await
        .expect("describe accelerators should succeed");
    let accelerators = resp.accelerator_set.expect("accelerator set");
    assert_eq!(accelerators.len(), 1);
    assert_eq!(accelerators[0].accelerator_id.as_deref(), Some("eia-0123"));
    assert_eq!(
        accelerators[0]
            .accelerator_health
            .as_ref()
            .and_then(|h| h.status.as_deref()),
        Some("Ok")
    );
    assert_eq!(resp.next_token, None);
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn describe_accelerator_types_sends_no_body() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("GET")
            .uri(Uri::from_static(
                "https://api.elastic-inference.us-west-2.amazonaws.com/describe-accelerator-types",
            ))
            .body(SdkBody::empty())
            .unwrap(),
        response(
            200,
            r#"{"acceleratorTypes":[{"acceleratorTypeName":"eia2.large","memoryInfo":{"sizeInMiB":8192},"throughputInfo":[{"key":"TFLOPS16bit","value":32},{"key":"TFLOPS32bit","value":8}]}]}"#,
        ),
    )]);
    let client = client(conn.clone());
    let types = client
        .describe_accelerator_types()
        .send()
        .await
        .expect("describe accelerator types should succeed")
        .accelerator_types
        .expect("accelerator types");
    let large = &types[0];
    assert_eq!(large.accelerator_type_name.as_deref(), Some("eia2.large"));
    assert_eq!(
        large.memory_info.as_ref().and_then(|m| m.size_in_mi_b),
        Some(8192)
    );
    let throughput = large.throughput_info.as_ref().expect("throughput");
    assert_eq!(throughput[0].key.as_deref(), Some("TFLOPS16bit"));
    assert_eq!(throughput[1].value, Some(8));

    let requests = conn.requests();
    assert!(requests[0].actual.headers().get("content-type").is_none());
    assert_eq!(requests[0].actual.body().bytes(), Some(&b""[..]));
}

#[tokio::test]
async fn describe_accelerator_offerings() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .uri(Uri::from_static(
                "https://api.elastic-inference.us-west-2.amazonaws.com/describe-accelerator-offerings",
            ))
            .body(SdkBody::from(
                r#"{"locationType":"availability-zone","acceleratorTypes":["eia2.medium"]}"#,
            ))
            .unwrap(),
        response(
            200,
            r#"{"acceleratorTypeOfferings":[{"acceleratorType":"eia2.medium","locationType":"availability-zone","location":"us-west-2a"}]}"#,
        ),
    )]);
    let client = client(conn.clone());
    let offerings = client
        .describe_accelerator_offerings()
        .location_type(LocationType::AvailabilityZone)
        .accelerator_types("eia2.medium")
        .send()
        .await
        .expect("describe accelerator offerings should succeed")
        .accelerator_type_offerings
        .expect("offerings");
    assert_eq!(
        offerings[0].location_type,
        Some(LocationType::AvailabilityZone)
    );
    assert_eq!(offerings[0].location.as_deref(), Some("us-west-2a"));
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn tag_resource_label() {
    let conn = TestConnection::new(vec![
        (
            http::Request::builder()
                .method("POST")
                .uri(Uri::from_static("https://api.elastic-inference.us-west-2.amazonaws.com/tags/arn%3Aaws%3Aelastic-inference%3Aus-west-2%3A123456789012%3Aelastic-inference-accelerator%2Feia-0123"))
                .body(SdkBody::from(r#"{"tags":{"stage":"prod"}}"#))
                .unwrap(),
            response(200, "{}"),
        ),
        (
            http::Request::builder()
                .method("GET")
                .uri(Uri::from_static("https://api.elastic-inference.us-west-2.amazonaws.com/tags/arn%3Aaws%3Aelastic-inference%3Aus-west-2%3A123456789012%3Aelastic-inference-accelerator%2Feia-0123"))
                .body(SdkBody::empty())
                .unwrap(),
            response(200, r#"{"tags":{"stage":"prod"}}"#),
        ),
    ]);
    let client = client(conn.clone());
    let arn = "arn:aws:elastic-inference:us-west-2:123456789012:elastic-inference-accelerator/eia-0123";
    client
        .tag_resource()
        .resource_arn(arn)
        .tags("stage", "prod")
        .send()
        .await
        .expect("tag should succeed");
    let tags = client
        .list_tags_for_resource()
        .resource_arn(arn)
        .send()
        .await
        .expect("list tags should succeed")
        .tags
        .expect("tags");
    assert_eq!(tags.get("stage").map(String::as_str), Some("prod"));
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn bad_request_is_not_retried() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .uri(Uri::from_static(
                "https://api.elastic-inference.us-west-2.amazonaws.com/describe-accelerators",
            ))
            .body(SdkBody::from("{}"))
            .unwrap(),
        http::Response::builder()
            .status(400)
            .header("x-amzn-errortype", "BadRequestException")
            .body(r#"{"message":"invalid filter name"}"#)
            .unwrap(),
    )]);
    let client = client(conn.clone());
    let err = client
        .describe_accelerators()
        .send()
        .await
        .expect_err("bad request");
    match err {
        SdkError::ServiceError { err, .. } => {
            assert_eq!(err.to_string(), "BadRequestException: invalid filter name");
            assert!(matches!(
                err.kind,
                DescribeAcceleratorsErrorKind::BadRequestException(_)
            ));
        }
        other => panic!("expected a service error, got {:?}", other),
    }
    assert_eq!(conn.requests().len(), 1);
}

#[tokio::test]
async fn internal_server_errors_are_retried_on_status() {
    let conn = TestConnection::new(vec![
        (
            http::Request::builder()
                .uri(Uri::from_static(
                    "https://api.elastic-inference.us-west-2.amazonaws.com/describe-accelerator-types",
                ))
                .body(SdkBody::empty())
                .unwrap(),
            http::Response::builder()
                .status(500)
                .header("x-amzn-errortype", "InternalServerException")
                .body(r#"{"message":"internal failure"}"#)
                .unwrap(),
        ),
        (
            http::Request::builder()
                .uri(Uri::from_static(
                    "https://api.elastic-inference.us-west-2.amazonaws.com/describe-accelerator-types",
                ))
                .body(SdkBody::empty())
                .unwrap(),
            response(200, r#"{"acceleratorTypes":[]}"#),
        ),
    ]);
    let conf = Config::builder()
        .region(Region::new("us-west-2"))
        .credentials_provider(Credentials::from_keys("ANOTREAL", "notrealsecret", None))
        .build();
    let client = Client::from_parts(
        aws_hyper::Client::new(Standard::new(conn.clone()))
            .with_retry_config(aws_hyper::RetryConfig::new().with_static_base(|| 0_f64)),
        conf,
    );
    let resp = client
        .describe_accelerator_types()
        .send()
        .await
        .expect("retried after a 500");
    assert_eq!(resp.accelerator_types, Some(vec![]));
    assert_eq!(conn.requests().len(), 2);
}

#[test]
fn internal_server_exception_is_not_modeled_retryable() {
    use smithy_types::retry::ProvideErrorKind;
    let err = elasticinference::error::DescribeAcceleratorTypesError::new(
        elasticinference::error::DescribeAcceleratorTypesErrorKind::InternalServerException(
            elasticinference::error::InternalServerException::builder().build(),
        ),
        Default::default(),
    );
    assert_eq!(err.retryable_error_kind(), None);
    assert_eq!(err.to_string(), "InternalServerException");
}

#[test]
fn untag_resource_request_serialization() {
    use protocol_test_helpers::{assert_ok, validate_query_string};
    let conf = Config::builder()
        .region(Region::new("us-west-2"))
        .credentials_provider(Credentials::from_keys("ANOTREAL", "notrealsecret", None))
        .build();
    let input = elasticinference::input::UntagResourceInput::builder()
        .resource_arn("arn:aws:elastic-inference:us-west-2:123456789012:elastic-inference-accelerator/eia-0123")
        .tag_keys("stage")
        .tag_keys("owner")
        .build()
        .expect("valid input");
    let op = input.make_operation(&conf).expect("valid operation");
    let request = op.request().http();
    pretty_assertions::assert_eq!(request.method(), "DELETE");
    pretty_assertions::assert_eq!(
        request.uri().path(),
        "/tags/arn%3Aaws%3Aelastic-inference%3Aus-west-2%3A123456789012%3Aelastic-inference-accelerator%2Feia-0123"
    );
    assert_ok(validate_query_string(
        request,
        &["tagKeys=stage", "tagKeys=owner"],
    ));
}
