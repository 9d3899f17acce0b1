/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use accessanalyzer::error::{GetAnalyzerErrorKind, ListFindingsErrorKind};
use accessanalyzer::model::{
    AnalyzerStatus, Criterion, FindingStatus, FindingStatusUpdate, OrderBy, ResourceType,
    SortCriteria, Type, ValidationExceptionReason,
};
use accessanalyzer::{Client, Config, Credentials, Region, SdkError};
use aws_hyper::conn::Standard;
use aws_hyper::test_connection::TestConnection;
use http::Uri;
use smithy_http::body::SdkBody;

fn config() -> Config {
    Config::builder()
        .region(Region::new("us-west-2"))
        .credentials_provider(Credentials::from_keys("ANOTREAL", "notrealsecret", None))
        .make_token("00000000-0000-4000-8000-000000000000")
        .build()
}

fn response(status: u16, body: &'static str) -> http::Response<&'static str> {
    http::Response::builder().status(status).body(body).unwrap()
}

fn request(method: &str, uri: &'static str) -> http::request::Builder {
    http::Request::builder()
        .method(method)
        .uri(Uri::from_static(uri))
}

const ANALYZER_ARN: &str = "arn:aws:access-analyzer:us-west-2:123456789012:analyzer/demo";

#[tokio::test]
async fn create_analyzer_fills_client_token() {
    let conn = TestConnection::new(vec![(
        request("PUT", "https://access-analyzer.us-west-2.amazonaws.com/analyzer")
            .header("content-type", "application/json")
            .body(SdkBody::from(
                r#"{"analyzerName":"demo","type":"ACCOUNT","tags":{"team":"security"},"clientToken":"00000000-0000-4000-8000-000000000000"}"#,
            ))
            .unwrap(),
        response(
            200,
            r#"{"arn":"arn:aws:access-analyzer:us-west-2:123456789012:analyzer/demo"}"#,
        ),
    )]);
    let client = Client::from_conf_conn(config(), Standard::new(conn.clone()));
    let resp = client
        .create_analyzer()
        .analyzer_name("demo")
        .r#type(Type::Account)
        .tags("team", "security")
        .send()
        .await
        .expect("create analyzer should succeed");
    assert_eq!(resp.arn.as_deref(), Some(ANALYZER_ARN));
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn explicit_client_token_is_kept() {
    let conn = TestConnection::new(vec![(
        request(
            "DELETE",
            "https://access-analyzer.us-west-2.amazonaws.com/analyzer/demo?clientToken=mine",
        )
        .body(SdkBody::empty())
        .unwrap(),
        response(200, ""),
    )]);
    let client = Client::from_conf_conn(config(), Standard::new(conn.clone()));
    client
        .delete_analyzer()
        .analyzer_name("demo")
        .client_token("mine")
        .send()
        .await
        .expect("delete analyzer should succeed");
    conn.assert_requests_match(&[]);
    assert!(conn.requests()[0]
        .actual
        .headers()
        .get("content-type")
        .is_none());
}

#[tokio::test]
async fn labels_and_query_params() {
    let conn = TestConnection::new(vec![
        (
            request(
                "GET",
                "https://access-analyzer.us-west-2.amazonaws.com/finding/finding%20one?analyzerArn=arn%3Aaws%3Aaccess-analyzer%3Aus-west-2%3A123456789012%3Aanalyzer%2Fdemo",
            )
            .body(SdkBody::empty())
            .unwrap(),
            response(
                200,
                r#"{"finding":{"id":"finding one","resourceType":"AWS::S3::Bucket","status":"ACTIVE","isPublic":true,"principal":{"AWS":"*"},"action":["s3:GetObject"],"createdAt":1617211200,"sources":[{"type":"BUCKET_ACL"}]}}"#,
            ),
        ),
        (
            request(
                "DELETE",
                "https://access-analyzer.us-west-2.amazonaws.com/tags/arn%3Aaws%3Aaccess-analyzer%3Aus-west-2%3A123456789012%3Aanalyzer%2Fdemo?tagKeys=team&tagKeys=cost%20center",
            )
            .body(SdkBody::empty())
            .unwrap(),
            response(200, "{}"),
        ),
    ]);
    let client = Client::from_conf_conn(config(), Standard::new(conn.clone()));
    let finding = client
        .get_finding()
        .analyzer_arn(ANALYZER_ARN)
        .id("finding one")
        .send()
        .await
        .expect("get finding should succeed")
        .finding
        .expect("finding is set");
    assert_eq!(finding.resource_type, Some(ResourceType::AwsS3Bucket));
    assert_eq!(finding.status, Some(FindingStatus::Active));
    assert_eq!(finding.is_public, Some(true));
    assert_eq!(
        finding.principal.expect("principal")["AWS"],
        "*".to_string()
    );
    assert_eq!(
        finding.created_at.map(|t| t.epoch_seconds()),
        Some(1617211200)
    );

    client
        .untag_resource()
        .resource_arn(ANALYZER_ARN)
        .tag_keys("team")
        .tag_keys("cost center")
        .send()
        .await
        .expect("untag should succeed");
    assert_eq!(conn.requests().len(), 2);
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn missing_label_is_a_construction_failure() {
    let conn: TestConnection<&'static str> = TestConnection::new(vec![]);
    let client = Client::from_conf_conn(config(), Standard::new(conn.clone()));
    let err = client
        .get_analyzer()
        .send()
        .await
        .expect_err("analyzer name is required");
    match err {
        SdkError::ConstructionFailure(err) => assert_eq!(
            err.to_string(),
            "analyzer_name was missing or invalid: cannot be empty or unset"
        ),
        other => panic!("expected construction failure, got {:?}", other),
    }

    let err = client
        .get_analyzer()
        .analyzer_name("")
        .send()
        .await
        .expect_err("empty labels are rejected");
    assert!(matches!(err, SdkError::ConstructionFailure(_)));
    assert!(conn.requests().is_empty());
}

#[tokio::test]
async fn list_findings_with_filter_and_sort() {
    let conn = TestConnection::new(vec![(
        request("POST", "https://access-analyzer.us-west-2.amazonaws.com/finding")
            .header("content-type", "application/json")
            .body(SdkBody::from(
                r#"{"analyzerArn":"arn:aws:access-analyzer:us-west-2:123456789012:analyzer/demo","filter":{"status":{"eq":["ACTIVE"]},"isPublic":{"exists":true}},"sort":{"attributeName":"createdAt","orderBy":"DESC"},"maxResults":10}"#,
            ))
            .unwrap(),
        response(
            200,
            r#"{"findings":[{"id":"1","resourceType":"AWS::KMS::Key","status":"ARCHIVED","updatedAt":1617211200.5},{"id":"2","resourceType":"AWS::Future::Thing","status":"ACTIVE"}],"nextToken":"page-2"}"#,
        ),
    )]);
    let client = Client::from_conf_conn(config(), Standard::new(conn.clone()));
    let resp = client
        .list_findings()
        .analyzer_arn(ANALYZER_ARN)
        .filter("status", Criterion::builder().eq("ACTIVE").build())
        .filter("isPublic", Criterion::builder().exists(true).build())
        .sort(
            SortCriteria::builder()
                .attribute_name("createdAt")
                .order_by(OrderBy::Desc)
                .build(),
        )
        .max_results(10)
        .send()
        .await
        .expect("list findings should succeed");
    let findings = resp.findings.expect("findings");
    assert_eq!(findings.len(), 2);
    assert_eq!(findings[0].resource_type, Some(ResourceType::AwsKmsKey));
    assert_eq!(findings[0].status, Some(FindingStatus::Archived));
    assert_eq!(
        findings[1].resource_type,
        Some(ResourceType::Unknown("AWS::Future::Thing".to_string()))
    );
    assert_eq!(resp.next_token.as_deref(), Some("page-2"));
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn update_findings() {
    let conn = TestConnection::new(vec![(
        request("PUT", "https://access-analyzer.us-west-2.amazonaws.com/finding")
            .header("content-type", "application/json")
            .body(SdkBody::from(
                r#"{"analyzerArn":"arn:aws:access-analyzer:us-west-2:123456789012:analyzer/demo","status":"ARCHIVED","ids":["1","2"],"clientToken":"00000000-0000-4000-8000-000000000000"}"#,
            ))
            .unwrap(),
        response(200, ""),
    )]);
    let client = Client::from_conf_conn(config(), Standard::new(conn.clone()));
    client
        .update_findings()
        .analyzer_arn(ANALYZER_ARN)
        .status(FindingStatusUpdate::Archived)
        .ids("1")
        .ids("2")
        .send()
        .await
        .expect("update findings should succeed");
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn get_analyzer_output() {
    let conn = TestConnection::new(vec![(
        request("GET", "https://access-analyzer.us-west-2.amazonaws.com/analyzer/demo")
            .body(SdkBody::empty())
            .unwrap(),
        response(
            200,
            r#"{"analyzer":{"arn":"arn:aws:access-analyzer:us-west-2:123456789012:analyzer/demo","name":"demo","type":"ORGANIZATION","status":"FAILED","statusReason":{"code":"ORGANIZATION_DELETED"},"createdAt":1617211200}}"#,
        ),
    )]);
    let client = Client::from_conf_conn(config(), Standard::new(conn.clone()));
    let analyzer = client
        .get_analyzer()
        .analyzer_name("demo")
        .send()
        .await
        .expect("get analyzer should succeed")
        .analyzer
        .expect("analyzer");
    assert_eq!(analyzer.r#type, Some(Type::Organization));
    assert_eq!(analyzer.status, Some(AnalyzerStatus::Failed));
    assert_eq!(
        analyzer.status_reason.and_then(|r| r.code).map(|c| c.as_str().to_string()),
        Some("ORGANIZATION_DELETED".to_string())
    );
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn resource_not_found() {
    let conn = TestConnection::new(vec![(
        request("GET", "https://access-analyzer.us-west-2.amazonaws.com/analyzer/gone")
            .body(SdkBody::empty())
            .unwrap(),
        http::Response::builder()
            .status(404)
            .header("x-amzn-errortype", "ResourceNotFoundException:http://internal.amazon.com/coral/com.amazon.coral.service/")
            .header("x-amzn-requestid", "d6a5d2a9-3f9b-4b47-9c6c-1d2b0e3fbb39")
            .body(r#"{"message":"Analyzer gone not found","resourceId":"gone","resourceType":"AWS::AccessAnalyzer::Analyzer"}"#)
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(config(), Standard::new(conn));
    let err = client
        .get_analyzer()
        .analyzer_name("gone")
        .send()
        .await
        .expect_err("analyzer does not exist");
    let err = match err {
        SdkError::ServiceError { err, .. } => err,
        other => panic!("expected a service error, got {:?}", other),
    };
    assert_eq!(err.request_id(), Some("d6a5d2a9-3f9b-4b47-9c6c-1d2b0e3fbb39"));
    match err.kind {
        GetAnalyzerErrorKind::ResourceNotFoundException(inner) => {
            assert_eq!(inner.resource_id.as_deref(), Some("gone"));
            assert_eq!(inner.message(), Some("Analyzer gone not found"));
        }
        other => panic!("incorrect error: {:?}", other),
    }
}

#[tokio::test]
async fn validation_exception_fields() {
    let conn = TestConnection::new(vec![(
        request("POST", "https://access-analyzer.us-west-2.amazonaws.com/finding")
            .body(SdkBody::from(r#"{"maxResults":5000}"#))
            .unwrap(),
        http::Response::builder()
            .status(400)
            .header("x-amzn-errortype", "ValidationException")
            .body(r#"{"message":"Invalid request","reason":"fieldValidationFailed","fieldList":[{"name":"maxResults","message":"must be at most 1000"}]}"#)
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(config(), Standard::new(conn));
    let err = client
        .list_findings()
        .max_results(5000)
        .send()
        .await
        .expect_err("invalid max results");
    let err = match err {
        SdkError::ServiceError { err, .. } => err,
        other => panic!("expected a service error, got {:?}", other),
    };
    assert!(err.is_validation_exception());
    match err.kind {
        ListFindingsErrorKind::ValidationException(inner) => {
            assert_eq!(
                inner.reason,
                Some(ValidationExceptionReason::FieldValidationFailed)
            );
            let fields = inner.field_list.expect("field list");
            assert_eq!(fields[0].name.as_deref(), Some("maxResults"));
        }
        other => panic!("incorrect error: {:?}", other),
    }
}

#[tokio::test]
async fn throttling_is_retryable() {
    use smithy_types::retry::{ErrorKind, ProvideErrorKind};
    let conn = TestConnection::new(vec![
        (
            request("GET", "https://access-analyzer.us-west-2.amazonaws.com/analyzer")
                .body(SdkBody::empty())
                .unwrap(),
            http::Response::builder()
                .status(429)
                .header("x-amzn-errortype", "ThrottlingException")
                .body(r#"{"message":"Rate exceeded"}"#)
                .unwrap(),
        ),
        (
            request("GET", "https://access-analyzer.us-west-2.amazonaws.com/analyzer")
                .body(SdkBody::empty())
                .unwrap(),
            response(200, r#"{"analyzers":[]}"#),
        ),
    ]);
    let client = Client::from_parts(
        aws_hyper::Client::new(Standard::new(conn.clone()))
            .with_retry_config(aws_hyper::RetryConfig::new().with_static_base(|| 0_f64)),
        config(),
    );
    let resp = client.list_analyzers().send().await.expect("retried");
    assert_eq!(resp.analyzers, Some(vec![]));
    assert_eq!(conn.requests().len(), 2);

    let throttled = accessanalyzer::error::ListAnalyzersError::new(
        accessanalyzer::error::ListAnalyzersErrorKind::ThrottlingException(
            accessanalyzer::error::ThrottlingException::builder()
                .message("Rate exceeded")
                .build(),
        ),
        Default::default(),
    );
    assert_eq!(
        throttled.retryable_error_kind(),
        Some(ErrorKind::ThrottlingError)
    );
}

#[test]
fn list_analyzers_request_serialization() {
    use protocol_test_helpers::{assert_ok, forbid_headers, validate_query_string};
    let input = accessanalyzer::input::ListAnalyzersInput::builder()
        .max_results(10)
        .next_token("page/2")
        .r#type(accessanalyzer::model::Type::Organization)
        .build()
        .expect("valid input");
    let op = input.make_operation(&config()).expect("valid operation");
    let request = op.request().http();
    pretty_assertions::assert_eq!(request.method(), "GET");
    pretty_assertions::assert_eq!(request.uri().path(), "/analyzer");
    assert_ok(validate_query_string(
        request,
        &["maxResults=10", "nextToken=page%2F2", "type=ORGANIZATION"],
    ));
    assert_ok(forbid_headers(request, &["content-type"]));
    assert_eq!(request.body().bytes(), Some(&b""[..]));
}

#[tokio::test]
async fn archive_rule_lifecycle() {
    let conn = TestConnection::new(vec![
        (
            request(
                "PUT",
                "https://access-analyzer.us-west-2.amazonaws.com/analyzer/demo/archive-rule",
            )
            .header("content-type", "application/json")
            .body(SdkBody::from(
                r#"{"ruleName":"trusted","filter":{"principal.AWS":{"eq":["123456789012"]}},"clientToken":"00000000-0000-4000-8000-000000000000"}"#,
            ))
            .unwrap(),
            response(200, ""),
        ),
        (
            request(
                "GET",
                "https://access-analyzer.us-west-2.amazonaws.com/analyzer/demo/archive-rule/trusted",
            )
            .body(SdkBody::empty())
            .unwrap(),
            response(
                200,
                r#"{"archiveRule":{"ruleName":"trusted","filter":{"principal.AWS":{"eq":["123456789012"]}},"createdAt":1.6E9,"updatedAt":1.6E9}}"#,
            ),
        ),
        (
            request(
                "GET",
                "https://access-analyzer.us-west-2.amazonaws.com/analyzer/demo/archive-rule?maxResults=1",
            )
            .body(SdkBody::empty())
            .unwrap(),
            response(200, r#"{"archiveRules":[{"ruleName":"trusted"}]}"#),
        ),
        (
            request(
                "DELETE",
                "https://access-analyzer.us-west-2.amazonaws.com/analyzer/demo/archive-rule/trusted?clientToken=00000000-0000-4000-8000-000000000000",
            )
            .body(SdkBody::empty())
            .unwrap(),
            response(200, ""),
        ),
    ]);
    let client = Client::from_conf_conn(config(), Standard::new(conn.clone()));
    let filter = Criterion::builder().eq("123456789012").build();
    client
        .create_archive_rule()
        .analyzer_name("demo")
        .rule_name("trusted")
        .filter("principal.AWS", filter.clone())
        .send()
        .await
        .expect("create archive rule should succeed");
    let rule = client
        .get_archive_rule()
        .analyzer_name("demo")
        .rule_name("trusted")
        .send()
        .await
        .expect("get archive rule should succeed")
        .archive_rule
        .expect("archive rule");
    assert_eq!(rule.filter.expect("filter")["principal.AWS"], filter);
    assert_eq!(rule.created_at.map(|t| t.epoch_seconds()), Some(1_600_000_000));
    let rules = client
        .list_archive_rules()
        .analyzer_name("demo")
        .max_results(1)
        .send()
        .await
        .expect("list archive rules should succeed");
    assert_eq!(rules.archive_rules.map(|r| r.len()), Some(1));
    assert_eq!(rules.next_token, None);
    client
        .delete_archive_rule()
        .analyzer_name("demo")
        .rule_name("trusted")
        .send()
        .await
        .expect("delete archive rule should succeed");
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn analyzed_resources_and_scans() {
    let resource_arn = "arn:aws:s3:::public-bucket";
    let conn = TestConnection::new(vec![
        (
            request(
                "GET",
                "https://access-analyzer.us-west-2.amazonaws.com/analyzed-resource?analyzerArn=arn%3Aaws%3Aaccess-analyzer%3Aus-west-2%3A123456789012%3Aanalyzer%2Fdemo&resourceArn=arn%3Aaws%3As3%3A%3A%3Apublic-bucket",
            )
            .body(SdkBody::empty())
            .unwrap(),
            response(
                200,
                r#"{"resource":{"resourceArn":"arn:aws:s3:::public-bucket","resourceType":"AWS::S3::Bucket","isPublic":true,"actions":["s3:GetObject"],"status":"ACTIVE","resourceOwnerAccount":"123456789012"}}"#,
            ),
        ),
        (
            request(
                "POST",
                "https://access-analyzer.us-west-2.amazonaws.com/resource/scan",
            )
            .header("content-type", "application/json")
            .body(SdkBody::from(
                r#"{"analyzerArn":"arn:aws:access-analyzer:us-west-2:123456789012:analyzer/demo","resourceArn":"arn:aws:s3:::public-bucket"}"#,
            ))
            .unwrap(),
            response(200, ""),
        ),
    ]);
    let client = Client::from_conf_conn(config(), Standard::new(conn.clone()));
    let resource = client
        .get_analyzed_resource()
        .analyzer_arn(ANALYZER_ARN)
        .resource_arn(resource_arn)
        .send()
        .await
        .expect("get analyzed resource should succeed")
        .resource
        .expect("resource");
    assert_eq!(resource.resource_type, Some(ResourceType::AwsS3Bucket));
    assert_eq!(resource.is_public, Some(true));
    assert_eq!(resource.status, Some(FindingStatus::Active));
    client
        .start_resource_scan()
        .analyzer_arn(ANALYZER_ARN)
        .resource_arn(resource_arn)
        .send()
        .await
        .expect("start scan should succeed");
    conn.assert_requests_match(&[]);
}
