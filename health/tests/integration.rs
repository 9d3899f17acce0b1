/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_http::user_agent::AwsUserAgent;
use aws_hyper::conn::Standard;
use aws_hyper::test_connection::TestConnection;
use health::error::{DescribeEventsErrorKind, EnableHealthServiceAccessForOrganizationErrorKind};
use health::model::{
    EntityFilter, EntityStatusCode, EventFilter, EventStatusCode, EventTypeCategory,
};
use health::{Client, Config, Credentials, Region, SdkError};
use http::header::AUTHORIZATION;
use http::Uri;
use smithy_http::body::SdkBody;
use std::collections::HashMap;
use std::time::{Duration, UNIX_EPOCH};

fn config() -> Config {
    Config::builder()
        .region(Region::new("eu-west-1"))
        .credentials_provider(Credentials::from_keys("ANOTREAL", "notrealsecret", None))
        .build()
}

fn expected(target: &'static str, body: &'static str) -> http::Request<SdkBody> {
    http::Request::builder()
        .method("POST")
        .uri(Uri::from_static("https://health.us-east-1.amazonaws.com/"))
        .header("content-type", "application/x-amz-json-1.1")
        .header("x-amz-target", target)
        .body(SdkBody::from(body))
        .unwrap()
}

fn response(status: u16, body: &'static str) -> http::Response<&'static str> {
    http::Response::builder().status(status).body(body).unwrap()
}

#[tokio::test]
async fn signs_for_us_east_1_from_any_region() {
    let conn = TestConnection::new(vec![(
        expected(
            "AWSHealth_20160804.DescribeEntityAggregates",
            r#"{"eventArns":["arn:aws:health:us-east-1::event/EC2/EC2_INSTANCE_RETIREMENT_SCHEDULED/abc"]}"#,
        ),
        response(
            200,
            r#"{"entityAggregates":[{"eventArn":"arn:aws:health:us-east-1::event/EC2/EC2_INSTANCE_RETIREMENT_SCHEDULED/abc","count":3}]}"#,
        ),
    )]);
    let input = health::input::DescribeEntityAggregatesInput::builder()
        .event_arns("arn:aws:health:us-east-1::event/EC2/EC2_INSTANCE_RETIREMENT_SCHEDULED/abc")
        .build()
        .expect("valid input");
    let mut op = input.make_operation(&config()).expect("valid operation");
    op.properties_mut()
        .insert(UNIX_EPOCH + Duration::from_secs(1614952162));
    op.properties_mut().insert(AwsUserAgent::for_tests());
    let client = aws_hyper::Client::new(Standard::new(conn.clone()));
    let resp = client.call(op).await.expect("request should succeed");
    let aggregates = resp.entity_aggregates.expect("aggregates");
    assert_eq!(aggregates[0].count, Some(3));

    conn.assert_requests_match(&[]);
    let auth = conn.requests()[0].actual.headers()[AUTHORIZATION]
        .to_str()
        .unwrap()
        .to_string();
    assert!(
        auth.starts_with("AWS4-HMAC-SHA256 Credential=ANOTREAL/20210305/us-east-1/health/aws4_request"),
        "{}",
        auth
    );
}

#[tokio::test]
async fn describe_events_with_filter() {
    let conn = TestConnection::new(vec![(
        expected(
            "AWSHealth_20160804.DescribeEvents",
            r#"{"filter":{"services":["EC2"],"eventTypeCategories":["scheduledChange"],"eventStatusCodes":["open","upcoming"],"tags":[{"stage":"prod"}]},"maxResults":10}"#,
        ),
        response(
            200,
            r#"{"events":[{"arn":"arn:aws:health:us-east-1::event/EC2/abc","service":"EC2","eventTypeCategory":"scheduledChange","statusCode":"upcoming","eventScopeCode":"ACCOUNT_SPECIFIC","startTime":1.6149E9}],"nextToken":"page-2"}"#,
        ),
    )]);
    let client = Client::from_conf_conn(config(), Standard::new(conn.clone()));
    let tags: HashMap<String, String> = vec![("stage".to_string(), "prod".to_string())]
        .into_iter()
        .collect();
    let resp = client
        .describe_events()
        .filter(
            EventFilter::builder()
                .services("EC2")
                .event_type_categories(EventTypeCategory::ScheduledChange)
                .event_status_codes(EventStatusCode::Open)
                .event_status_codes(EventStatusCode::Upcoming)
                .tags(tags)
                .build(),
        )
        .max_results(10)
        .send()
        .await
        .expect("describe events should succeed");
    let events = resp.events.expect("events");
    assert_eq!(events[0].status_code, Some(EventStatusCode::Upcoming));
    assert_eq!(
        events[0].event_type_category,
        Some(EventTypeCategory::ScheduledChange)
    );
    assert_eq!(resp.next_token.as_deref(), Some("page-2"));
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn affected_entities_status_codes() {
    let conn = TestConnection::new(vec![(
        expected(
            "AWSHealth_20160804.DescribeAffectedEntities",
            r#"{"filter":{"eventArns":["arn:aws:health:us-east-1::event/EC2/abc"],"statusCodes":["UNKNOWN"]}}"#,
        ),
        response(
            200,
            r#"{"entities":[{"entityValue":"i-1","statusCode":"UNKNOWN"},{"entityValue":"i-2","statusCode":"IMPAIRED"},{"entityValue":"i-3","statusCode":"PENDING"}]}"#,
        ),
    )]);
    let client = Client::from_conf_conn(config(), Standard::new(conn.clone()));
    let entities = client
        .describe_affected_entities()
        .filter(
            EntityFilter::builder()
                .event_arns("arn:aws:health:us-east-1::event/EC2/abc")
                .status_codes(EntityStatusCode::UnknownValue)
                .build(),
        )
        .send()
        .await
        .expect("describe affected entities should succeed")
        .entities
        .expect("entities");
    let codes: Vec<_> = entities
        .into_iter()
        .map(|e| e.status_code.expect("status code"))
        .collect();
    assert_eq!(
        codes,
        vec![
            EntityStatusCode::UnknownValue,
            EntityStatusCode::Impaired,
            EntityStatusCode::Unknown("PENDING".to_string())
        ]
    );
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn operation_without_input_sends_empty_object() {
    let conn = TestConnection::new(vec![(
        expected(
            "AWSHealth_20160804.DescribeHealthServiceStatusForOrganization",
            "{}",
        ),
        response(
            200,
            r#"{"healthServiceAccessStatusForOrganization":"ENABLED"}"#,
        ),
    )]);
    let client = Client::from_conf_conn(config(), Standard::new(conn.clone()));
    let status = client
        .describe_health_service_status_for_organization()
        .send()
        .await
        .expect("request should succeed");
    assert_eq!(
        status.health_service_access_status_for_organization.as_deref(),
        Some("ENABLED")
    );
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn modeled_errors() {
    let conn = TestConnection::new(vec![
        (
            expected(
                "AWSHealth_20160804.DescribeEvents",
                r#"{"nextToken":"stale"}"#,
            ),
            response(
                400,
                r#"{"__type":"InvalidPaginationToken","message":"Invalid pagination token"}"#,
            ),
        ),
        (
            expected(
                "AWSHealth_20160804.EnableHealthServiceAccessForOrganization",
                "{}",
            ),
            response(
                400,
                r#"{"__type":"ConcurrentModificationException","message":"Enable already in progress"}"#,
            ),
        ),
    ]);
    let client = Client::from_conf_conn(config(), Standard::new(conn.clone()));
    let err = client
        .describe_events()
        .next_token("stale")
        .send()
        .await
        .expect_err("stale token");
    match err {
        SdkError::ServiceError { err, .. } => assert!(matches!(
            err.kind,
            DescribeEventsErrorKind::InvalidPaginationToken(_)
        )),
        other => panic!("expected a service error, got {:?}", other),
    }

    let err = client
        .enable_health_service_access_for_organization()
        .send()
        .await
        .expect_err("concurrent modification");
    match err {
        SdkError::ServiceError { err, .. } => {
            assert_eq!(
                err.to_string(),
                "ConcurrentModificationException: Enable already in progress"
            );
            assert!(matches!(
                err.kind,
                EnableHealthServiceAccessForOrganizationErrorKind::ConcurrentModificationException(_)
            ));
        }
        other => panic!("expected a service error, got {:?}", other),
    }
    conn.assert_requests_match(&[]);
}

#[test]
fn describe_event_details_request_serialization() {
    use protocol_test_helpers::{assert_ok, validate_body, validate_headers, MediaType};
    let input = health::input::DescribeEventDetailsInput::builder()
        .event_arns("arn:aws:health:us-east-1::event/EC2/abc")
        .locale("en")
        .build()
        .expect("valid input");
    let op = input.make_operation(&config()).expect("valid operation");
    let request = op.request().http();
    pretty_assertions::assert_eq!(request.method(), "POST");
    assert_ok(validate_headers(
        request,
        &[
            ("content-type", "application/x-amz-json-1.1"),
            ("x-amz-target", "AWSHealth_20160804.DescribeEventDetails"),
        ],
    ));
    assert_ok(validate_body(
        request.body().bytes().expect("body is in memory"),
        r#"{"eventArns":["arn:aws:health:us-east-1::event/EC2/abc"],"locale":"en"}"#,
        MediaType::from("application/x-amz-json-1.1"),
    ));
}
