/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Helpers for integration tests that need a live DynamoDB table.
//!
//! Table creation is asynchronous on the service side: `CreateTable` returns while the table is
//! still `CREATING`. The helpers here poll `DescribeTable` until the table reaches the state a test
//! needs, giving up after a bounded number of attempts.

use std::time::Duration;

use aws_hyper::SdkError;
use dynamodb::error::{
    CreateTableError, CreateTableErrorKind, DeleteTableError, DeleteTableErrorKind,
    DescribeTableError, DescribeTableErrorKind,
};
use dynamodb::input::create_table_input;
use dynamodb::model::{
    AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType,
    TableDescription, TableStatus,
};
use dynamodb::output::CreateTableOutput;
use dynamodb::Client;

/// Polling schedule used while waiting on a table state change
#[derive(Clone, Debug, PartialEq)]
pub struct WaitConfig {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl WaitConfig {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        WaitConfig {
            max_attempts,
            delay,
        }
    }
}

impl Default for WaitConfig {
    fn default() -> Self {
        WaitConfig::new(30, Duration::from_secs(2))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to create table")]
    CreateTable(#[source] SdkError<CreateTableError>),
    #[error("failed to describe table")]
    DescribeTable(#[source] SdkError<DescribeTableError>),
    #[error("failed to delete table")]
    DeleteTable(#[source] SdkError<DeleteTableError>),
    #[error("table `{table}` did not become {expected} after {attempts} attempts")]
    Timeout {
        table: String,
        expected: &'static str,
        attempts: u32,
    },
}

/// Send a `CreateTable` request assembled by the caller
///
/// Use [`wait_for_active`] afterwards; the table is not usable until it leaves `CREATING`.
pub async fn create_table(
    client: &Client,
    input: create_table_input::Builder,
) -> Result<CreateTableOutput, Error> {
    let input = input
        .build()
        .map_err(|err| Error::CreateTable(SdkError::ConstructionFailure(err.into())))?;
    let op = input
        .make_operation(client.conf())
        .map_err(|err| Error::CreateTable(SdkError::ConstructionFailure(err.into())))?;
    client.client().call(op).await.map_err(Error::CreateTable)
}

/// Poll `DescribeTable` until the table status is `ACTIVE`
pub async fn wait_for_active(
    client: &Client,
    table_name: &str,
    wait: &WaitConfig,
) -> Result<TableDescription, Error> {
    for attempt in 1..=wait.max_attempts {
        let described = client
            .describe_table()
            .table_name(table_name)
            .send()
            .await
            .map_err(Error::DescribeTable)?;
        if let Some(table) = described.table {
            if table.table_status == Some(TableStatus::Active) {
                tracing::debug!(table = table_name, attempt, "table is active");
                return Ok(table);
            }
            tracing::debug!(table = table_name, attempt, status = ?table.table_status, "waiting for table");
        }
        if attempt < wait.max_attempts {
            tokio::time::sleep(wait.delay).await;
        }
    }
    Err(Error::Timeout {
        table: table_name.to_string(),
        expected: "active",
        attempts: wait.max_attempts,
    })
}

/// Poll `DescribeTable` until the service reports `ResourceNotFoundException`
pub async fn wait_for_deleted(
    client: &Client,
    table_name: &str,
    wait: &WaitConfig,
) -> Result<(), Error> {
    for attempt in 1..=wait.max_attempts {
        match client.describe_table().table_name(table_name).send().await {
            Ok(described) => {
                let status = described.table.and_then(|table| table.table_status);
                tracing::debug!(table = table_name, attempt, status = ?status, "waiting for deletion");
            }
            Err(SdkError::ServiceError { err, .. })
                if matches!(err.kind, DescribeTableErrorKind::ResourceNotFoundException(_)) =>
            {
                tracing::debug!(table = table_name, attempt, "table is gone");
                return Ok(());
            }
            Err(err) => return Err(Error::DescribeTable(err)),
        }
        if attempt < wait.max_attempts {
            tokio::time::sleep(wait.delay).await;
        }
    }
    Err(Error::Timeout {
        table: table_name.to_string(),
        expected: "deleted",
        attempts: wait.max_attempts,
    })
}

/// Create the table unless it already exists, then wait for it to become active
pub async fn ensure_table(
    client: &Client,
    input: create_table_input::Builder,
    wait: &WaitConfig,
) -> Result<TableDescription, Error> {
    let table_name = input
        .clone()
        .build()
        .ok()
        .and_then(|input| input.table_name)
        .unwrap_or_default();
    match create_table(client, input).await {
        Ok(_) => tracing::info!(table = %table_name, "created table"),
        Err(Error::CreateTable(SdkError::ServiceError { err, .. }))
            if matches!(err.kind, CreateTableErrorKind::ResourceInUseException(_)) =>
        {
            tracing::info!(table = %table_name, "table already exists")
        }
        Err(other) => return Err(other),
    }
    wait_for_active(client, &table_name, wait).await
}

/// Delete the table, returning `false` when there was nothing to delete
pub async fn delete_table_if_exists(client: &Client, table_name: &str) -> Result<bool, Error> {
    match client.delete_table().table_name(table_name).send().await {
        Ok(_) => {
            tracing::info!(table = table_name, "deleted table");
            Ok(true)
        }
        Err(SdkError::ServiceError { err, .. })
            if matches!(err.kind, DeleteTableErrorKind::ResourceNotFoundException(_)) =>
        {
            Ok(false)
        }
        Err(err) => Err(Error::DeleteTable(err)),
    }
}

/// A single-attribute, hash-keyed table for tests that only need put/get by key
#[derive(Clone, Debug, PartialEq)]
pub struct TableFixture {
    pub table_name: String,
    pub hash_key: String,
}

impl TableFixture {
    pub fn new(table_name: impl Into<String>, hash_key: impl Into<String>) -> Self {
        TableFixture {
            table_name: table_name.into(),
            hash_key: hash_key.into(),
        }
    }

    /// `CreateTable` input for this fixture: a string hash key billed per request
    pub fn create_table_input(&self) -> create_table_input::Builder {
        dynamodb::input::CreateTableInput::builder()
            .table_name(&self.table_name)
            .attribute_definitions(
                AttributeDefinition::builder()
                    .attribute_name(&self.hash_key)
                    .attribute_type(ScalarAttributeType::S)
                    .build(),
            )
            .key_schema(
                KeySchemaElement::builder()
                    .attribute_name(&self.hash_key)
                    .key_type(KeyType::Hash)
                    .build(),
            )
            .billing_mode(BillingMode::PayPerRequest)
    }

    pub async fn ensure(&self, client: &Client, wait: &WaitConfig) -> Result<TableDescription, Error> {
        ensure_table(client, self.create_table_input(), wait).await
    }

    pub async fn teardown(&self, client: &Client, wait: &WaitConfig) -> Result<(), Error> {
        if delete_table_if_exists(client, &self.table_name).await? {
            wait_for_deleted(client, &self.table_name, wait).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use aws_hyper::conn::Standard;
    use aws_hyper::test_connection::TestConnection;
    use dynamodb::{Config, Credentials, Region};
    use smithy_http::body::SdkBody;

    const NO_DELAY: Duration = Duration::from_secs(0);

    fn client(conn: TestConnection<&'static str>) -> Client {
        let conf = Config::builder()
            .region(Region::new("us-east-1"))
            .credentials_provider(Credentials::from_keys("ANOTREAL", "notrealsecret", None))
            .build();
        Client::from_conf_conn(conf, Standard::new(conn))
    }

    fn exchange(
        status: u16,
        body: &'static str,
    ) -> (http::Request<SdkBody>, http::Response<&'static str>) {
        (
            http::Request::builder().body(SdkBody::empty()).unwrap(),
            http::Response::builder().status(status).body(body).unwrap(),
        )
    }

    fn targets(conn: &TestConnection<&'static str>) -> Vec<String> {
        conn.requests()
            .iter()
            .map(|req| {
                req.actual.headers()["x-amz-target"]
                    .to_str()
                    .unwrap()
                    .to_string()
            })
            .collect()
    }

    #[tokio::test]
    async fn waits_until_active() {
        let conn = TestConnection::new(vec![
            exchange(200, r#"{"Table":{"TableName":"users","TableStatus":"CREATING"}}"#),
            exchange(200, r#"{"Table":{"TableName":"users","TableStatus":"CREATING"}}"#),
            exchange(200, r#"{"Table":{"TableName":"users","TableStatus":"ACTIVE"}}"#),
        ]);
        let client = client(conn.clone());
        let table = wait_for_active(&client, "users", &WaitConfig::new(5, NO_DELAY))
            .await
            .expect("table becomes active");
        assert_eq!(table.table_status, Some(TableStatus::Active));
        assert_eq!(conn.requests().len(), 3);
    }

    #[tokio::test]
    async fn gives_up_after_max_attempts() {
        let conn = TestConnection::new(vec![
            exchange(200, r#"{"Table":{"TableName":"users","TableStatus":"CREATING"}}"#),
            exchange(200, r#"{"Table":{"TableName":"users","TableStatus":"UPDATING"}}"#),
        ]);
        let client = client(conn.clone());
        let err = wait_for_active(&client, "users", &WaitConfig::new(2, NO_DELAY))
            .await
            .expect_err("table never becomes active");
        assert!(matches!(err, Error::Timeout { attempts: 2, .. }), "{:?}", err);
        assert_eq!(
            err.to_string(),
            "table `users` did not become active after 2 attempts"
        );
    }

    #[tokio::test]
    async fn ensure_tolerates_existing_table() {
        let conn = TestConnection::new(vec![
            exchange(
                400,
                r#"{"__type":"com.amazonaws.dynamodb.v20120810#ResourceInUseException","message":"Table already exists: users"}"#,
            ),
            exchange(200, r#"{"Table":{"TableName":"users","TableStatus":"ACTIVE"}}"#),
        ]);
        let client = client(conn.clone());
        let fixture = TableFixture::new("users", "id");
        let table = fixture
            .ensure(&client, &WaitConfig::new(1, NO_DELAY))
            .await
            .expect("existing table is fine");
        assert_eq!(table.table_name.as_deref(), Some("users"));
        assert_eq!(
            targets(&conn),
            vec![
                "DynamoDB_20120810.CreateTable".to_string(),
                "DynamoDB_20120810.DescribeTable".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn ensure_surfaces_other_failures() {
        let conn = TestConnection::new(vec![exchange(
            400,
            r#"{"__type":"com.amazon.coral.validate#ValidationException","message":"1 validation error detected"}"#,
        )]);
        let client = client(conn.clone());
        let err = TableFixture::new("users", "id")
            .ensure(&client, &WaitConfig::new(1, NO_DELAY))
            .await
            .expect_err("validation failure");
        match err {
            Error::CreateTable(SdkError::ServiceError { err, .. }) => {
                assert_eq!(err.code(), Some("ValidationException"));
                assert!(matches!(err.kind, CreateTableErrorKind::Unhandled(_)));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(conn.requests().len(), 1);
    }

    #[tokio::test]
    async fn teardown_waits_for_deletion() {
        let conn = TestConnection::new(vec![
            exchange(
                200,
                r#"{"TableDescription":{"TableName":"users","TableStatus":"DELETING"}}"#,
            ),
            exchange(200, r#"{"Table":{"TableName":"users","TableStatus":"DELETING"}}"#),
            exchange(
                400,
                r#"{"__type":"com.amazonaws.dynamodb.v20120810#ResourceNotFoundException","message":"Requested resource not found"}"#,
            ),
        ]);
        let client = client(conn.clone());
        TableFixture::new("users", "id")
            .teardown(&client, &WaitConfig::new(5, NO_DELAY))
            .await
            .expect("table deleted");
        assert_eq!(
            targets(&conn),
            vec![
                "DynamoDB_20120810.DeleteTable".to_string(),
                "DynamoDB_20120810.DescribeTable".to_string(),
                "DynamoDB_20120810.DescribeTable".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn deleting_a_missing_table_is_not_an_error() {
        let conn = TestConnection::new(vec![exchange(
            400,
            r#"{"__type":"com.amazonaws.dynamodb.v20120810#ResourceNotFoundException","message":"Requested resource not found"}"#,
        )]);
        let client = client(conn.clone());
        let deleted = delete_table_if_exists(&client, "users")
            .await
            .expect("missing table is fine");
        assert!(!deleted);
    }

    #[test]
    fn fixture_uses_a_string_hash_key() {
        let input = TableFixture::new("users", "id")
            .create_table_input()
            .build()
            .expect("valid input");
        assert_eq!(input.table_name.as_deref(), Some("users"));
        assert_eq!(
            input.key_schema,
            Some(vec![KeySchemaElement::builder()
                .attribute_name("id")
                .key_type(KeyType::Hash)
                .build()])
        );
        assert_eq!(input.billing_mode, Some(BillingMode::PayPerRequest));
    }
}
