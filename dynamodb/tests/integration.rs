/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_http::user_agent::AwsUserAgent;
use aws_hyper::conn::Standard;
use aws_hyper::test_connection::TestConnection;
use dynamodb::error::{GetItemErrorKind, PutItemErrorKind, TransactWriteItemsErrorKind};
use dynamodb::model::{
    AttributeDefinition, AttributeValue, BillingMode, ConditionCheck, DeleteGlobalSecondaryIndexAction,
    DeleteRequest, Get, GlobalSecondaryIndexUpdate, KeySchemaElement, KeyType, KeysAndAttributes,
    ProvisionedThroughput, Put, PutRequest, ReturnValue, ScalarAttributeType, TableStatus,
    TimeToLiveSpecification, TimeToLiveStatus, TransactGetItem, TransactWriteItem, Update,
    WriteRequest,
};
use dynamodb::{Client, Config, Credentials, Region, SdkError};
use http::header::{HeaderName, AUTHORIZATION};
use http::Uri;
use smithy_http::body::SdkBody;
use std::collections::HashMap;
use std::time::{Duration, UNIX_EPOCH};

fn config() -> Config {
    Config::builder()
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::from_keys("ANOTREAL", "notrealrnrELgWzOk3IfjzDKtFBhDby", None))
        .build()
}

fn expected(target: &str, body: &'static str) -> http::Request<SdkBody> {
    http::Request::builder()
        .method("POST")
        .header("content-type", "application/x-amz-json-1.0")
        .header("x-amz-target", target)
        .uri(Uri::from_static("https://dynamodb.us-east-1.amazonaws.com/"))
        .body(SdkBody::from(body))
        .unwrap()
}

fn response(status: u16, body: &'static str) -> http::Response<&'static str> {
    http::Response::builder().status(status).body(body).unwrap()
}

#[tokio::test]
async fn put_item() {
    let conn = TestConnection::new(vec![(
        expected(
            "DynamoDB_20120810.PutItem",
            r#"{"TableName":"movies","Item":{"year":{"N":"2013"},"title":{"S":"Rush"},"info":{"M":{"rating":{"N":"8.3"},"genres":{"SS":["Action","Biography"]}}}}}"#,
        ),
        response(200, "{}"),
    )]);
    let client = Client::from_conf_conn(config(), Standard::new(conn.clone()));
    let info = vec![
        ("rating".to_string(), AttributeValue::N("8.3".into())),
        (
            "genres".to_string(),
            AttributeValue::Ss(vec!["Action".into(), "Biography".into()]),
        ),
    ];
    let resp = client
        .put_item()
        .table_name("movies")
        .item("year", AttributeValue::N("2013".into()))
        .item("title", AttributeValue::S("Rush".into()))
        .item("info", AttributeValue::M(info.into_iter().collect()))
        .send()
        .await
        .expect("put item should succeed");
    assert_eq!(resp.attributes, None);
    assert_eq!(conn.requests().len(), 1);
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn get_item_parses_nested_attribute_values() {
    let conn = TestConnection::new(vec![(
        expected(
            "DynamoDB_20120810.GetItem",
            r#"{"TableName":"movies","Key":{"year":{"N":"2013"}},"ConsistentRead":true}"#,
        ),
        response(
            200,
            r#"{"Item":{"title":{"S":"Rush"},"seen":{"BOOL":true},"poster":{"B":"aGVsbG8="},"cast":{"L":[{"S":"Chris"},{"NULL":true}]}}}"#,
        ),
    )]);
    let client = Client::from_conf_conn(config(), Standard::new(conn.clone()));
    let resp = client
        .get_item()
        .table_name("movies")
        .key("year", AttributeValue::N("2013".into()))
        .consistent_read(true)
        .send()
        .await
        .expect("get item should succeed");
    let item = resp.item.expect("item should be present");
    assert_eq!(item["title"], AttributeValue::S("Rush".into()));
    assert_eq!(item["seen"].as_bool(), Ok(&true));
    assert_eq!(
        item["poster"].as_b().expect("binary").as_ref(),
        b"hello"
    );
    assert_eq!(
        item["cast"],
        AttributeValue::L(vec![AttributeValue::S("Chris".into()), AttributeValue::Null(true)])
    );
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn create_table_signs_for_dynamodb() {
    let conn = TestConnection::new(vec![(
        expected(
            "DynamoDB_20120810.CreateTable",
            r#"{
                "AttributeDefinitions":[{"AttributeName":"year","AttributeType":"N"}],
                "TableName":"movies",
                "KeySchema":[{"AttributeName":"year","KeyType":"HASH"}],
                "ProvisionedThroughput":{"ReadCapacityUnits":10,"WriteCapacityUnits":10}
            }"#,
        ),
        response(
            200,
            r#"{"TableDescription":{"TableName":"movies","TableStatus":"CREATING","ItemCount":0,"CreationDateTime":1.614952162E9}}"#,
        ),
    )]);
    let conf = config();
    let input = dynamodb::input::CreateTableInput::builder()
        .table_name("movies")
        .attribute_definitions(
            AttributeDefinition::builder()
                .attribute_name("year")
                .attribute_type(ScalarAttributeType::N)
                .build(),
        )
        .key_schema(
            KeySchemaElement::builder()
                .attribute_name("year")
                .key_type(KeyType::Hash)
                .build(),
        )
        .provisioned_throughput(
            ProvisionedThroughput::builder()
                .read_capacity_units(10)
                .write_capacity_units(10)
                .build(),
        )
        .build()
        .expect("valid input");
    let mut op = input.make_operation(&conf).expect("valid operation");
    op.properties_mut()
        .insert(UNIX_EPOCH + Duration::from_secs(1614952162));
    op.properties_mut().insert(AwsUserAgent::for_tests());
    let client = aws_hyper::Client::new(Standard::new(conn.clone()));
    let resp = client.call(op).await.expect("create table should succeed");
    let table = resp.table_description.expect("table description");
    assert_eq!(table.table_status, Some(TableStatus::Creating));
    assert_eq!(
        table.creation_date_time.map(|t| t.epoch_seconds()),
        Some(1614952162)
    );

    let requests = conn.requests();
    let auth = requests[0].actual.headers()[AUTHORIZATION]
        .to_str()
        .unwrap();
    assert!(
        auth.starts_with("AWS4-HMAC-SHA256 Credential=ANOTREAL/20210305/us-east-1/dynamodb/aws4_request"),
        "{}",
        auth
    );
    assert_eq!(
        requests[0].actual.headers()["x-amz-user-agent"],
        "aws-sdk-rust/0.123.test api/test-service/0.123 os/windows/XPSP3 lang/rust/1.50.0"
    );
    requests[0].assert_matches(&[HeaderName::from_static("authorization")]);
}

#[tokio::test]
async fn modeled_error() {
    let conn = TestConnection::new(vec![(
        expected("DynamoDB_20120810.PutItem", r#"{"TableName":"movies"}"#),
        http::Response::builder()
            .status(400)
            .header("x-amzn-requestid", "2C2ALJ6JQUE7DAIOJCLCSIHJPVVV4KQNSO5AEMVJF66Q9ASUAAJG")
            .body(r#"{"__type":"com.amazonaws.dynamodb.v20120810#ConditionalCheckFailedException","message":"The conditional request failed"}"#)
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(config(), Standard::new(conn.clone()));
    let err = client
        .put_item()
        .table_name("movies")
        .send()
        .await
        .expect_err("conditional check failed");
    match err {
        SdkError::ServiceError { err, .. } => {
            assert!(err.is_conditional_check_failed_exception());
            assert_eq!(err.message(), Some("The conditional request failed"));
            assert_eq!(
                err.request_id(),
                Some("2C2ALJ6JQUE7DAIOJCLCSIHJPVVV4KQNSO5AEMVJF66Q9ASUAAJG")
            );
            match err.kind {
                PutItemErrorKind::ConditionalCheckFailedException(inner) => assert_eq!(
                    inner.to_string(),
                    "ConditionalCheckFailedException: The conditional request failed"
                ),
                other => panic!("incorrect error: {:?}", other),
            }
        }
        other => panic!("expected a service error, got {:?}", other),
    }
}

#[tokio::test]
async fn unknown_error_code_is_unhandled() {
    let conn = TestConnection::new(vec![(
        expected("DynamoDB_20120810.GetItem", r#"{"TableName":"movies"}"#),
        response(
            400,
            r#"{"__type":"com.amazon.coral.validate#ValidationException","message":"One or more parameter values were invalid"}"#,
        ),
    )]);
    let client = Client::from_conf_conn(config(), Standard::new(conn));
    let err = client
        .get_item()
        .table_name("movies")
        .send()
        .await
        .expect_err("validation error");
    match err {
        SdkError::ServiceError { err, .. } => {
            assert!(matches!(err.kind, GetItemErrorKind::Unhandled(_)));
            assert_eq!(err.code(), Some("ValidationException"));
            assert_eq!(err.message(), Some("One or more parameter values were invalid"));
        }
        other => panic!("expected a service error, got {:?}", other),
    }
}

#[tokio::test]
async fn malformed_response() {
    let conn = TestConnection::new(vec![(
        expected("DynamoDB_20120810.DescribeTable", r#"{"TableName":"movies"}"#),
        // last `}` replaced with a space
        response(200, r#"{"Table":{"TableName":"movies" "#),
    )]);
    let client = Client::from_conf_conn(config(), Standard::new(conn));
    let err = client
        .describe_table()
        .table_name("movies")
        .send()
        .await
        .expect_err("response was malformed");
    match err {
        SdkError::ServiceError { err, .. } => assert!(matches!(
            err.kind,
            dynamodb::error::DescribeTableErrorKind::Unhandled(_)
        )),
        other => panic!("expected a service error, got {:?}", other),
    }
}

#[tokio::test]
async fn throughput_errors_are_retried() {
    let conn = TestConnection::new(vec![
        (
            expected("DynamoDB_20120810.ListTables", "{}"),
            response(
                400,
                r#"{"__type":"com.amazonaws.dynamodb.v20120810#ProvisionedThroughputExceededException","message":"slow down"}"#,
            ),
        ),
        (
            expected("DynamoDB_20120810.ListTables", "{}"),
            response(200, r#"{"TableNames":["movies"]}"#),
        ),
    ]);
    let client = Client::from_parts(
        aws_hyper::Client::new(Standard::new(conn.clone()))
            .with_retry_config(aws_hyper::RetryConfig::new().with_static_base(|| 0_f64)),
        config(),
    );
    let tables = client
        .list_tables()
        .send()
        .await
        .expect("second attempt succeeds");
    assert_eq!(tables.table_names, Some(vec!["movies".to_string()]));
    assert_eq!(conn.requests().len(), 2);
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn fixed_endpoint_override() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .uri(Uri::from_static("http://localhost:8000/"))
            .body(SdkBody::from("{}"))
            .unwrap(),
        response(200, r#"{"TableNames":[]}"#),
    )]);
    let conf = Config::builder()
        .region(Region::new("us-west-2"))
        .credentials_provider(Credentials::from_keys("ANOTREAL", "notrealsecret", None))
        .endpoint_resolver(smithy_http::endpoint::Endpoint::immutable(
            Uri::from_static("http://localhost:8000"),
        ))
        .build();
    let client = Client::from_conf_conn(conf, Standard::new(conn.clone()));
    let tables = client.list_tables().send().await.expect("success");
    assert_eq!(tables.table_names, Some(vec![]));
    assert_eq!(tables.last_evaluated_table_name, None);
    conn.assert_requests_match(&[]);
    let auth = conn.requests()[0].actual.headers()[AUTHORIZATION]
        .to_str()
        .unwrap()
        .to_string();
    assert!(auth.contains("/us-west-2/dynamodb/aws4_request"), "{}", auth);
}

#[tokio::test]
async fn missing_region_is_a_construction_failure() {
    let conn: TestConnection<&'static str> = TestConnection::new(vec![]);
    let conf = Config::builder()
        .region(None::<Region>)
        .credentials_provider(Credentials::from_keys("ANOTREAL", "notrealsecret", None))
        .build();
    // the builder falls back to the environment when no region was given
    if conf.region().is_some() {
        return;
    }
    let client = Client::from_conf_conn(conf, Standard::new(conn.clone()));
    let err = client
        .list_tables()
        .send()
        .await
        .expect_err("no region configured");
    assert!(matches!(err, SdkError::ConstructionFailure(_)), "{:?}", err);
    assert!(conn.requests().is_empty());
}

#[test]
fn query_request_serialization() {
    use protocol_test_helpers::{assert_ok, validate_body, validate_headers, MediaType};
    let input = dynamodb::input::QueryInput::builder()
        .table_name("Music")
        .key_condition_expression("Artist = :a")
        .expression_attribute_values(":a", AttributeValue::S("No One You Know".to_string()))
        .limit(2)
        .build()
        .expect("valid input");
    let op = input.make_operation(&config()).expect("valid operation");
    let request = op.request().http();
    pretty_assertions::assert_eq!(request.method(), "POST");
    pretty_assertions::assert_eq!(request.uri().path(), "/");
    assert_ok(validate_headers(
        request,
        &[
            ("content-type", "application/x-amz-json-1.0"),
            ("x-amz-target", "DynamoDB_20120810.Query"),
        ],
    ));
    assert_ok(validate_body(
        request.body().bytes().expect("body is in memory"),
        r#"{"TableName":"Music","Limit":2,"KeyConditionExpression":"Artist = :a","ExpressionAttributeValues":{":a":{"S":"No One You Know"}}}"#,
        MediaType::from("application/x-amz-json-1.0"),
    ));
}

#[tokio::test]
async fn item_operations() {
    let conn = TestConnection::new(vec![
        (
            expected(
                "DynamoDB_20120810.UpdateItem",
                r#"{"TableName":"movies","Key":{"title":{"S":"Rush"}},"ReturnValues":"ALL_NEW","UpdateExpression":"SET rating = :r","ExpressionAttributeValues":{":r":{"N":"8.1"}}}"#,
            ),
            response(
                200,
                r#"{"Attributes":{"title":{"S":"Rush"},"rating":{"N":"8.1"}}}"#,
            ),
        ),
        (
            expected(
                "DynamoDB_20120810.BatchGetItem",
                r#"{"RequestItems":{"movies":{"Keys":[{"title":{"S":"Rush"}}],"ConsistentRead":true}}}"#,
            ),
            response(
                200,
                r#"{"Responses":{"movies":[{"title":{"S":"Rush"}}]},"UnprocessedKeys":{}}"#,
            ),
        ),
        (
            expected(
                "DynamoDB_20120810.Scan",
                r#"{"TableName":"movies","Limit":1,"ExclusiveStartKey":{"title":{"S":"Rush"}}}"#,
            ),
            response(
                200,
                r#"{"Items":[{"title":{"S":"Turn It Down, Or Else!"}}],"Count":1,"ScannedCount":1}"#,
            ),
        ),
        (
            expected(
                "DynamoDB_20120810.DeleteItem",
                r#"{"TableName":"movies","Key":{"title":{"S":"Rush"}},"ConditionExpression":"attribute_exists(title)"}"#,
            ),
            response(200, "{}"),
        ),
    ]);
    let client = Client::from_conf_conn(config(), Standard::new(conn.clone()));
    let rush = || AttributeValue::S("Rush".to_string());

    let updated = client
        .update_item()
        .table_name("movies")
        .key("title", rush())
        .update_expression("SET rating = :r")
        .expression_attribute_values(":r", AttributeValue::N("8.1".to_string()))
        .return_values(ReturnValue::AllNew)
        .send()
        .await
        .expect("update should succeed")
        .attributes
        .expect("attributes");
    assert_eq!(updated["rating"].as_n(), Ok(&"8.1".to_string()));

    let key: HashMap<String, AttributeValue> =
        vec![("title".to_string(), rush())].into_iter().collect();
    let batch = client
        .batch_get_item()
        .request_items(
            "movies",
            KeysAndAttributes::builder()
                .keys(key)
                .consistent_read(true)
                .build(),
        )
        .send()
        .await
        .expect("batch get should succeed");
    assert_eq!(batch.responses.expect("responses")["movies"].len(), 1);
    assert_eq!(batch.unprocessed_keys.map(|keys| keys.is_empty()), Some(true));

    let page = client
        .scan()
        .table_name("movies")
        .limit(1)
        .exclusive_start_key("title", rush())
        .send()
        .await
        .expect("scan should succeed");
    assert_eq!(page.count, Some(1));
    assert_eq!(page.last_evaluated_key, None);

    let deleted = client
        .delete_item()
        .table_name("movies")
        .key("title", rush())
        .condition_expression("attribute_exists(title)")
        .send()
        .await
        .expect("delete should succeed");
    assert_eq!(deleted.attributes, None);
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn batch_write_and_update_table() {
    let conn = TestConnection::new(vec![
        (
            expected(
                "DynamoDB_20120810.BatchWriteItem",
                r#"{"RequestItems":{"movies":[{"PutRequest":{"Item":{"title":{"S":"Rush"}}}},{"DeleteRequest":{"Key":{"title":{"S":"Senna"}}}}]}}"#,
            ),
            response(
                200,
                r#"{"UnprocessedItems":{"movies":[{"DeleteRequest":{"Key":{"title":{"S":"Senna"}}}}]},"ConsumedCapacity":[{"TableName":"movies","CapacityUnits":1.0}]}"#,
            ),
        ),
        (
            expected(
                "DynamoDB_20120810.UpdateTable",
                r#"{"TableName":"movies","BillingMode":"PAY_PER_REQUEST","GlobalSecondaryIndexUpdates":[{"Delete":{"IndexName":"by-year"}}]}"#,
            ),
            response(
                200,
                r#"{"TableDescription":{"TableName":"movies","TableStatus":"UPDATING","BillingModeSummary":{"BillingMode":"PAY_PER_REQUEST"}}}"#,
            ),
        ),
    ]);
    let client = Client::from_conf_conn(config(), Standard::new(conn.clone()));
    let key = |title: &str| -> HashMap<String, AttributeValue> {
        vec![("title".to_string(), AttributeValue::S(title.to_string()))]
            .into_iter()
            .collect()
    };

    let written = client
        .batch_write_item()
        .request_items(
            "movies",
            vec![
                WriteRequest::builder()
                    .put_request(PutRequest::builder().set_item(Some(key("Rush"))).build())
                    .build(),
                WriteRequest::builder()
                    .delete_request(DeleteRequest::builder().set_key(Some(key("Senna"))).build())
                    .build(),
            ],
        )
        .send()
        .await
        .expect("batch write should succeed");
    let unprocessed = written.unprocessed_items.expect("unprocessed items");
    assert_eq!(
        unprocessed["movies"],
        vec![WriteRequest::builder()
            .delete_request(DeleteRequest::builder().set_key(Some(key("Senna"))).build())
            .build()]
    );
    assert_eq!(
        written.consumed_capacity.expect("capacity")[0].capacity_units,
        Some(1.0)
    );

    let updated = client
        .update_table()
        .table_name("movies")
        .billing_mode(BillingMode::PayPerRequest)
        .global_secondary_index_updates(
            GlobalSecondaryIndexUpdate::builder()
                .delete(
                    DeleteGlobalSecondaryIndexAction::builder()
                        .index_name("by-year")
                        .build(),
                )
                .build(),
        )
        .send()
        .await
        .expect("update table should succeed")
        .table_description
        .expect("table description");
    assert_eq!(updated.table_status, Some(TableStatus::Updating));
    assert_eq!(
        updated.billing_mode_summary.and_then(|summary| summary.billing_mode),
        Some(BillingMode::PayPerRequest)
    );
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn transactions() {
    let conn = TestConnection::new(vec![
        (
            expected(
                "DynamoDB_20120810.TransactWriteItems",
                r#"{
                    "TransactItems":[
                        {"ConditionCheck":{"Key":{"title":{"S":"Rush"}},"TableName":"movies","ConditionExpression":"attribute_exists(title)"}},
                        {"Put":{"Item":{"title":{"S":"Senna"}},"TableName":"movies"}},
                        {"Update":{"Key":{"title":{"S":"Rush"}},"UpdateExpression":"SET seen = :t","TableName":"movies","ExpressionAttributeValues":{":t":{"BOOL":true}}}}
                    ],
                    "ClientRequestToken":"00000000-0000-4000-8000-000000000000"
                }"#,
            ),
            response(200, "{}"),
        ),
        (
            expected(
                "DynamoDB_20120810.TransactGetItems",
                r#"{"TransactItems":[{"Get":{"Key":{"title":{"S":"Rush"}},"TableName":"movies","ProjectionExpression":"seen"}}]}"#,
            ),
            response(200, r#"{"Responses":[{"Item":{"seen":{"BOOL":true}}}]}"#),
        ),
    ]);
    let conf = Config::builder()
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::from_keys("ANOTREAL", "notrealrnrELgWzOk3IfjzDKtFBhDby", None))
        .make_token("00000000-0000-4000-8000-000000000000")
        .build();
    let client = Client::from_conf_conn(conf, Standard::new(conn.clone()));
    let rush = || AttributeValue::S("Rush".to_string());

    client
        .transact_write_items()
        .transact_items(
            TransactWriteItem::builder()
                .condition_check(
                    ConditionCheck::builder()
                        .key("title", rush())
                        .table_name("movies")
                        .condition_expression("attribute_exists(title)")
                        .build(),
                )
                .build(),
        )
        .transact_items(
            TransactWriteItem::builder()
                .put(
                    Put::builder()
                        .item("title", AttributeValue::S("Senna".to_string()))
                        .table_name("movies")
                        .build(),
                )
                .build(),
        )
        .transact_items(
            TransactWriteItem::builder()
                .update(
                    Update::builder()
                        .key("title", rush())
                        .update_expression("SET seen = :t")
                        .table_name("movies")
                        .expression_attribute_values(":t", AttributeValue::Bool(true))
                        .build(),
                )
                .build(),
        )
        .send()
        .await
        .expect("transaction should succeed");

    let read = client
        .transact_get_items()
        .transact_items(
            TransactGetItem::builder()
                .get(
                    Get::builder()
                        .key("title", rush())
                        .table_name("movies")
                        .projection_expression("seen")
                        .build(),
                )
                .build(),
        )
        .send()
        .await
        .expect("transactional read should succeed");
    let responses = read.responses.expect("responses");
    assert_eq!(
        responses[0].item.as_ref().expect("item")["seen"],
        AttributeValue::Bool(true)
    );
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn canceled_transaction_lists_reasons() {
    let conn = TestConnection::new(vec![(
        expected("DynamoDB_20120810.TransactWriteItems", r#"{"ClientRequestToken":"00000000-0000-4000-8000-000000000000"}"#),
        response(
            400,
            r#"{"__type":"com.amazonaws.dynamodb.v20120810#TransactionCanceledException","Message":"Transaction cancelled, please refer cancellation reasons for specific reasons [ConditionalCheckFailed, None]","CancellationReasons":[{"Code":"ConditionalCheckFailed","Message":"The conditional request failed"},{"Code":"None"}]}"#,
        ),
    )]);
    let conf = Config::builder()
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::from_keys("ANOTREAL", "notrealrnrELgWzOk3IfjzDKtFBhDby", None))
        .make_token("00000000-0000-4000-8000-000000000000")
        .build();
    let client = Client::from_conf_conn(conf, Standard::new(conn));
    let err = client
        .transact_write_items()
        .send()
        .await
        .expect_err("transaction was canceled");
    match err {
        SdkError::ServiceError { err, .. } => match err.kind {
            TransactWriteItemsErrorKind::TransactionCanceledException(inner) => {
                assert_eq!(
                    inner.message(),
                    Some("Transaction cancelled, please refer cancellation reasons for specific reasons [ConditionalCheckFailed, None]")
                );
                let codes: Vec<_> = inner
                    .cancellation_reasons
                    .unwrap_or_default()
                    .into_iter()
                    .map(|reason| reason.code.unwrap_or_default())
                    .collect();
                assert_eq!(codes, vec!["ConditionalCheckFailed", "None"]);
            }
            other => panic!("incorrect error: {:?}", other),
        },
        other => panic!("expected a service error, got {:?}", other),
    }
}

#[tokio::test]
async fn time_to_live_and_limits() {
    let conn = TestConnection::new(vec![
        (
            expected(
                "DynamoDB_20120810.UpdateTimeToLive",
                r#"{"TableName":"movies","TimeToLiveSpecification":{"Enabled":true,"AttributeName":"expires"}}"#,
            ),
            response(
                200,
                r#"{"TimeToLiveSpecification":{"Enabled":true,"AttributeName":"expires"}}"#,
            ),
        ),
        (
            expected("DynamoDB_20120810.DescribeTimeToLive", r#"{"TableName":"movies"}"#),
            response(
                200,
                r#"{"TimeToLiveDescription":{"TimeToLiveStatus":"ENABLING","AttributeName":"expires"}}"#,
            ),
        ),
        (
            expected("DynamoDB_20120810.DescribeLimits", "{}"),
            response(
                200,
                r#"{"AccountMaxReadCapacityUnits":80000,"AccountMaxWriteCapacityUnits":80000,"TableMaxReadCapacityUnits":40000,"TableMaxWriteCapacityUnits":40000}"#,
            ),
        ),
    ]);
    let client = Client::from_conf_conn(config(), Standard::new(conn.clone()));
    let spec = TimeToLiveSpecification::builder()
        .enabled(true)
        .attribute_name("expires")
        .build();

    let updated = client
        .update_time_to_live()
        .table_name("movies")
        .time_to_live_specification(spec.clone())
        .send()
        .await
        .expect("update ttl should succeed");
    assert_eq!(updated.time_to_live_specification, Some(spec));

    let described = client
        .describe_time_to_live()
        .table_name("movies")
        .send()
        .await
        .expect("describe ttl should succeed")
        .time_to_live_description
        .expect("description");
    assert_eq!(described.time_to_live_status, Some(TimeToLiveStatus::Enabling));
    assert_eq!(described.attribute_name.as_deref(), Some("expires"));

    let limits = client
        .describe_limits()
        .send()
        .await
        .expect("describe limits should succeed");
    assert_eq!(limits.account_max_read_capacity_units, Some(80000));
    assert_eq!(limits.table_max_write_capacity_units, Some(40000));
    conn.assert_requests_match(&[]);
}
