/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_hyper::conn::Standard;
use aws_hyper::test_connection::TestConnection;
use honeycode::error::InvokeScreenAutomationErrorKind;
use honeycode::model::{
    CellInput, CreateRowData, DelimitedTextImportOptions, DestinationOptions, Filter, Format,
    ImportDataCharacterEncoding, ImportDataSource, ImportDataSourceConfig, ImportOptions,
    ImportSourceDataFormat, SourceDataColumnProperties, TableDataImportJobStatus, VariableValue,
};
use honeycode::{Client, Config, Credentials, Region, SdkError};
use http::Uri;
use smithy_http::body::SdkBody;
use smithy_types::Instant;

const WORKBOOK: &str = "3f7c1a2e-8d44-4b55-9d1c-0e2a6b7c8d9e";
const TABLE: &str = "table-0001";

fn client(conn: TestConnection<&'static str>) -> Client {
    let conf = Config::builder()
        .region(Region::new("us-west-2"))
        .credentials_provider(Credentials::from_keys("ANOTREAL", "notrealsecret", None))
        .make_token("fixed-token")
        .build();
    Client::from_conf_conn(conf, Standard::new(conn))
}

fn response(status: u16, body: &'static str) -> http::Response<&'static str> {
    http::Response::builder().status(status).body(body).unwrap()
}

#[tokio::test]
async fn get_screen_data() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .uri(Uri::from_static("https://honeycode.us-west-2.amazonaws.com/screendata"))
            .header("content-type", "application/json")
            .body(SdkBody::from(
                r#"{"workbookId":"3f7c1a2e-8d44-4b55-9d1c-0e2a6b7c8d9e","appId":"app","screenId":"screen","variables":{"city":{"rawValue":"Seattle"}}}"#,
            ))
            .unwrap(),
        response(
            200,
            r#"{"results":{"Tasks":{"headers":[{"name":"Due","format":"DATE"}],"rows":[{"rowId":"row-1","dataItems":[{"rawValue":"44197","formattedValue":"1/1/21"}]}]}},"workbookCursor":1234567890123}"#,
        ),
    )]);
    let client = client(conn.clone());
    let resp = client
        .get_screen_data()
        .workbook_id(WORKBOOK)
        .app_id("app")
        .screen_id("screen")
        .variables("city", VariableValue::builder().raw_value("Seattle").build())
        .send()
        .await
        .expect("get screen data should succeed");
    assert_eq!(resp.workbook_cursor, Some(1_234_567_890_123));
    let tasks = &resp.results.expect("results")["Tasks"];
    let headers = tasks.headers.as_ref().expect("headers");
    assert_eq!(headers[0].format, Some(Format::Date));
    let row = &tasks.rows.as_ref().expect("rows")[0];
    assert_eq!(row.row_id.as_deref(), Some("row-1"));
    assert_eq!(
        row.data_items.as_ref().expect("data items")[0]
            .formatted_value
            .as_deref(),
        Some("1/1/21")
    );
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn invoke_screen_automation() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .uri(Uri::from_static("https://honeycode.us-west-2.amazonaws.com/workbooks/3f7c1a2e-8d44-4b55-9d1c-0e2a6b7c8d9e/apps/app/screens/screen/automations/add%20task"))
            .header("content-type", "application/json")
            .body(SdkBody::from(r#"{"rowId":"row-1","clientRequestToken":"fixed-token"}"#))
            .unwrap(),
        response(200, r#"{"workbookCursor":7}"#),
    )]);
    let client = client(conn.clone());
    let resp = client
        .invoke_screen_automation()
        .workbook_id(WORKBOOK)
        .app_id("app")
        .screen_id("screen")
        .screen_automation_id("add task")
        .row_id("row-1")
        .send()
        .await
        .expect("automation should succeed");
    assert_eq!(resp.workbook_cursor, Some(7));
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn automation_failure() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .body(SdkBody::empty())
            .unwrap(),
        http::Response::builder()
            .status(400)
            .header("x-amzn-errortype", "AutomationExecutionException")
            .body(r#"{"message":"The automation failed"}"#)
            .unwrap(),
    )]);
    let client = client(conn);
    let err = client
        .invoke_screen_automation()
        .workbook_id(WORKBOOK)
        .app_id("app")
        .screen_id("screen")
        .screen_automation_id("automation")
        .send()
        .await
        .expect_err("automation failed");
    let err = match err {
        SdkError::ServiceError { err, .. } => err,
        other => panic!("expected a service error, got {:?}", other),
    };
    assert_eq!(err.message(), Some("The automation failed"));
    assert!(matches!(
        err.kind,
        InvokeScreenAutomationErrorKind::AutomationExecutionException(_)
    ));
}

#[tokio::test]
async fn list_tables_paginates() {
    let conn = TestConnection::new(vec![
        (
            http::Request::builder()
                .method("GET")
                .uri(Uri::from_static("https://honeycode.us-west-2.amazonaws.com/workbooks/3f7c1a2e-8d44-4b55-9d1c-0e2a6b7c8d9e/tables?maxResults=1"))
                .body(SdkBody::empty())
                .unwrap(),
            response(
                200,
                r#"{"tables":[{"tableId":"table-0001","tableName":"Tasks"}],"nextToken":"t2","workbookCursor":3}"#,
            ),
        ),
        (
            http::Request::builder()
                .method("GET")
                .uri(Uri::from_static("https://honeycode.us-west-2.amazonaws.com/workbooks/3f7c1a2e-8d44-4b55-9d1c-0e2a6b7c8d9e/tables?maxResults=1&nextToken=t2"))
                .body(SdkBody::empty())
                .unwrap(),
            response(
                200,
                r#"{"tables":[{"tableId":"table-0002","tableName":"People"}],"workbookCursor":3}"#,
            ),
        ),
    ]);
    let client = client(conn.clone());
    let mut names = vec![];
    let mut next_token = None;
    loop {
        let page = client
            .list_tables()
            .workbook_id(WORKBOOK)
            .max_results(1)
            .set_next_token(next_token)
            .send()
            .await
            .expect("list tables should succeed");
        for table in page.tables.unwrap_or_default() {
            names.extend(table.table_name);
        }
        next_token = page.next_token;
        if next_token.is_none() {
            break;
        }
    }
    assert_eq!(names, vec!["Tasks".to_string(), "People".to_string()]);
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn batch_create_and_query_rows() {
    let conn = TestConnection::new(vec![
        (
            http::Request::builder()
                .method("POST")
                .uri(Uri::from_static("https://honeycode.us-west-2.amazonaws.com/workbooks/3f7c1a2e-8d44-4b55-9d1c-0e2a6b7c8d9e/tables/table-0001/rows/batchcreate"))
                .body(SdkBody::from(r#"{"rowsToCreate":[{"batchItemId":"item-1","cellsToCreate":{"column-1":{"fact":"Write report"}}}],"clientRequestToken":"fixed-token"}"#))
                .unwrap(),
            response(200, r#"{"workbookCursor":4,"createdRows":{"item-1":"row-9"},"failedBatchItems":[]}"#),
        ),
        (
            http::Request::builder()
                .method("POST")
                .uri(Uri::from_static("https://honeycode.us-west-2.amazonaws.com/workbooks/3f7c1a2e-8d44-4b55-9d1c-0e2a6b7c8d9e/tables/table-0001/rows/query"))
                .body(SdkBody::from(r#"{"filterFormula":{"formula":"=Filter(Tasks,\"Tasks[Task]=%\",\"Write report\")"}}"#))
                .unwrap(),
            response(200, r#"{"columnIds":["column-1"],"rows":[{"rowId":"row-9","cells":[{"format":"TEXT","rawValue":"Write report","formattedValue":"Write report"}]}],"workbookCursor":4}"#),
        ),
    ]);
    let client = client(conn.clone());
    let created = client
        .batch_create_table_rows()
        .workbook_id(WORKBOOK)
        .table_id(TABLE)
        .rows_to_create(
            CreateRowData::builder()
                .batch_item_id("item-1")
                .cells_to_create("column-1", CellInput::builder().fact("Write report").build())
                .build(),
        )
        .send()
        .await
        .expect("batch create should succeed");
    assert_eq!(
        created.created_rows.expect("created rows")["item-1"],
        "row-9".to_string()
    );
    assert_eq!(created.failed_batch_items, Some(vec![]));

    let rows = client
        .query_table_rows()
        .workbook_id(WORKBOOK)
        .table_id(TABLE)
        .filter_formula(
            Filter::builder()
                .formula(r#"=Filter(Tasks,"Tasks[Task]=%","Write report")"#)
                .build(),
        )
        .send()
        .await
        .expect("query should succeed")
        .rows
        .expect("rows");
    let cell = &rows[0].cells.as_ref().expect("cells")[0];
    assert_eq!(cell.format, Some(Format::Text));
    assert_eq!(cell.raw_value.as_deref(), Some("Write report"));
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn missing_table_label() {
    let conn: TestConnection<&'static str> = TestConnection::new(vec![]);
    let client = client(conn.clone());
    let err = client
        .list_table_rows()
        .workbook_id(WORKBOOK)
        .send()
        .await
        .expect_err("table id is required");
    match err {
        SdkError::ConstructionFailure(err) => {
            assert_eq!(
                err.to_string(),
                "table_id was missing or invalid: cannot be empty or unset"
            )
        }
        other => panic!("expected a construction failure, got {:?}", other),
    }
    assert!(conn.requests().is_empty());
}

#[tokio::test]
async fn request_timeout_is_transient() {
    let conn = TestConnection::new(vec![
        (
            http::Request::builder().body(SdkBody::empty()).unwrap(),
            http::Response::builder()
                .status(504)
                .header("x-amzn-errortype", "RequestTimeoutException")
                .body(r#"{"message":"timed out"}"#)
                .unwrap(),
        ),
        (
            http::Request::builder().body(SdkBody::empty()).unwrap(),
            response(200, r#"{"tableColumns":[{"tableColumnId":"c1","tableColumnName":"Task","format":"AUTO"}],"workbookCursor":5}"#),
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
    let columns = client
        .list_table_columns()
        .workbook_id(WORKBOOK)
        .table_id(TABLE)
        .send()
        .await
        .expect("retried after a timeout")
        .table_columns
        .expect("columns");
    assert_eq!(columns[0].format, Some(Format::Auto));
    assert_eq!(conn.requests().len(), 2);
}

#[test]
fn list_table_rows_request_serialization() {
    use protocol_test_helpers::{assert_ok, validate_body, MediaType};
    let conf = Config::builder()
        .region(Region::new("us-west-2"))
        .credentials_provider(Credentials::from_keys("ANOTREAL", "notrealsecret", None))
        .build();
    let input = honeycode::input::ListTableRowsInput::builder()
        .workbook_id(WORKBOOK)
        .table_id(TABLE)
        .row_ids("row-1")
        .row_ids("row-2")
        .max_results(50)
        .build()
        .expect("valid input");
    let op = input.make_operation(&conf).expect("valid operation");
    let request = op.request().http();
    pretty_assertions::assert_eq!(request.method(), "POST");
    pretty_assertions::assert_eq!(
        request.uri().path(),
        "/workbooks/3f7c1a2e-8d44-4b55-9d1c-0e2a6b7c8d9e/tables/table-0001/rows/list"
    );
    assert_ok(validate_body(
        request.body().bytes().expect("body is in memory"),
        r#"{"rowIds":["row-1","row-2"],"maxResults":50}"#,
        MediaType::Json,
    ));
}

#[tokio::test]
async fn table_data_import_job() {
    let conn = TestConnection::new(vec![
        (
            http::Request::builder()
                .method("POST")
                .uri(Uri::from_static("https://honeycode.us-west-2.amazonaws.com/workbooks/3f7c1a2e-8d44-4b55-9d1c-0e2a6b7c8d9e/tables/table-0001/import"))
                .header("content-type", "application/json")
                .body(SdkBody::from(
                    r#"{
                        "dataSource":{"dataSourceConfig":{"dataSourceUrl":"https://example.com/tasks.csv"}},
                        "dataFormat":"DELIMITED_TEXT",
                        "importOptions":{
                            "destinationOptions":{"columnMap":{"column-1":{"columnIndex":1}}},
                            "delimitedTextOptions":{"delimiter":",","hasHeaderRow":true,"dataCharacterEncoding":"UTF-8"}
                        },
                        "clientRequestToken":"fixed-token"
                    }"#,
                ))
                .unwrap(),
            response(200, r#"{"jobId":"job-1","jobStatus":"SUBMITTED"}"#),
        ),
        (
            http::Request::builder()
                .method("GET")
                .uri(Uri::from_static("https://honeycode.us-west-2.amazonaws.com/workbooks/3f7c1a2e-8d44-4b55-9d1c-0e2a6b7c8d9e/tables/table-0001/import/job-1"))
                .body(SdkBody::empty())
                .unwrap(),
            response(
                200,
                r#"{"jobStatus":"COMPLETED","message":"Import completed","jobMetadata":{"submitter":{"email":"owner@example.com"},"submitTime":1613511323.001,"dataSource":{"dataSourceConfig":{"dataSourceUrl":"https://example.com/tasks.csv"}}}}"#,
            ),
        ),
    ]);
    let client = client(conn.clone());
    let source = ImportDataSource::builder()
        .data_source_config(
            ImportDataSourceConfig::builder()
                .data_source_url("https://example.com/tasks.csv")
                .build(),
        )
        .build();
    let started = client
        .start_table_data_import_job()
        .workbook_id(WORKBOOK)
        .destination_table_id(TABLE)
        .data_source(source.clone())
        .data_format(ImportSourceDataFormat::DelimitedText)
        .import_options(
            ImportOptions::builder()
                .destination_options(
                    DestinationOptions::builder()
                        .column_map(
                            "column-1",
                            SourceDataColumnProperties::builder().column_index(1).build(),
                        )
                        .build(),
                )
                .delimited_text_options(
                    DelimitedTextImportOptions::builder()
                        .delimiter(",")
                        .has_header_row(true)
                        .data_character_encoding(ImportDataCharacterEncoding::Utf8)
                        .build(),
                )
                .build(),
        )
        .send()
        .await
        .expect("import should start");
    assert_eq!(started.job_id.as_deref(), Some("job-1"));
    assert_eq!(started.job_status, Some(TableDataImportJobStatus::Submitted));

    let job = client
        .describe_table_data_import_job()
        .workbook_id(WORKBOOK)
        .table_id(TABLE)
        .job_id("job-1")
        .send()
        .await
        .expect("describe should succeed");
    assert_eq!(job.job_status, Some(TableDataImportJobStatus::Completed));
    assert_eq!(job.message.as_deref(), Some("Import completed"));
    let metadata = job.job_metadata.expect("metadata");
    assert_eq!(metadata.data_source, Some(source));
    assert_eq!(
        metadata.submit_time,
        Some(Instant::from_secs_and_nanos(1613511323, 1_000_000))
    );
    assert_eq!(
        metadata.submitter.and_then(|submitter| submitter.email),
        Some("owner@example.com".to_string())
    );
    conn.assert_requests_match(&[]);
}
