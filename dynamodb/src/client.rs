/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#[derive(std::fmt::Debug)]
pub(crate) struct Handle {
    client: aws_hyper::Client<aws_hyper::conn::Standard>,
    conf: crate::Config,
}

/// Client for Amazon DynamoDB
///
/// Each method returns a fluent builder for one operation; `send` dispatches it. Cloning a
/// `Client` is cheap and clones share configuration, connection pool and retry state.
#[derive(std::clone::Clone, std::fmt::Debug)]
pub struct Client {
    handle: std::sync::Arc<Handle>,
}

impl Client {
    pub fn from_conf_conn(conf: crate::Config, conn: aws_hyper::conn::Standard) -> Self {
        Self::from_parts(aws_hyper::Client::new(conn), conf)
    }

    pub fn from_conf(conf: crate::Config) -> Self {
        Self::from_conf_conn(conf, aws_hyper::conn::Standard::https())
    }

    /// Build a client around an existing `aws_hyper::Client`, eg. one with a custom retry configuration
    pub fn from_parts(
        client: aws_hyper::Client<aws_hyper::conn::Standard>,
        conf: crate::Config,
    ) -> Self {
        Self {
            handle: std::sync::Arc::new(Handle { client, conf }),
        }
    }

    pub fn conf(&self) -> &crate::Config {
        &self.handle.conf
    }

    pub fn client(&self) -> &aws_hyper::Client<aws_hyper::conn::Standard> {
        &self.handle.client
    }

    /// Returns the attributes of one or more items from one or more tables
    pub fn batch_get_item(&self) -> fluent_builders::BatchGetItem {
        fluent_builders::BatchGetItem::new(self.handle.clone())
    }

    /// Puts or deletes multiple items in one or more tables
    pub fn batch_write_item(&self) -> fluent_builders::BatchWriteItem {
        fluent_builders::BatchWriteItem::new(self.handle.clone())
    }

    /// Adds a new table to your account
    pub fn create_table(&self) -> fluent_builders::CreateTable {
        fluent_builders::CreateTable::new(self.handle.clone())
    }

    /// Deletes a single item in a table by primary key
    pub fn delete_item(&self) -> fluent_builders::DeleteItem {
        fluent_builders::DeleteItem::new(self.handle.clone())
    }

    /// Deletes a table and all of its items
    pub fn delete_table(&self) -> fluent_builders::DeleteTable {
        fluent_builders::DeleteTable::new(self.handle.clone())
    }

    /// Returns information about the table, including the current status of the table
    pub fn describe_table(&self) -> fluent_builders::DescribeTable {
        fluent_builders::DescribeTable::new(self.handle.clone())
    }

    /// Returns the current provisioned-capacity quotas for your account in a Region
    pub fn describe_limits(&self) -> fluent_builders::DescribeLimits {
        fluent_builders::DescribeLimits::new(self.handle.clone())
    }

    /// Gives a description of the Time to Live (TTL) status on the specified table
    pub fn describe_time_to_live(&self) -> fluent_builders::DescribeTimeToLive {
        fluent_builders::DescribeTimeToLive::new(self.handle.clone())
    }

    /// Returns a set of attributes for the item with the given primary key
    pub fn get_item(&self) -> fluent_builders::GetItem {
        fluent_builders::GetItem::new(self.handle.clone())
    }

    /// Returns an array of table names associated with the current account and endpoint
    pub fn list_tables(&self) -> fluent_builders::ListTables {
        fluent_builders::ListTables::new(self.handle.clone())
    }

    /// Creates a new item, or replaces an old item with a new item
    pub fn put_item(&self) -> fluent_builders::PutItem {
        fluent_builders::PutItem::new(self.handle.clone())
    }

    /// Finds items based on primary key values
    pub fn query(&self) -> fluent_builders::Query {
        fluent_builders::Query::new(self.handle.clone())
    }

    /// Returns one or more items by accessing every item in a table or a secondary index
    pub fn scan(&self) -> fluent_builders::Scan {
        fluent_builders::Scan::new(self.handle.clone())
    }

    /// Synchronous operation that atomically retrieves multiple items from one or more tables
    pub fn transact_get_items(&self) -> fluent_builders::TransactGetItems {
        fluent_builders::TransactGetItems::new(self.handle.clone())
    }

    /// Synchronous write operation that groups up to 25 action requests
    pub fn transact_write_items(&self) -> fluent_builders::TransactWriteItems {
        fluent_builders::TransactWriteItems::new(self.handle.clone())
    }

    /// Edits an existing item's attributes, or adds a new item to the table if it does not already exist
    pub fn update_item(&self) -> fluent_builders::UpdateItem {
        fluent_builders::UpdateItem::new(self.handle.clone())
    }

    /// Modifies the provisioned throughput settings, global secondary indexes, or DynamoDB Streams settings for a given table
    pub fn update_table(&self) -> fluent_builders::UpdateTable {
        fluent_builders::UpdateTable::new(self.handle.clone())
    }

    /// Enables or disables Time to Live (TTL) for the specified table
    pub fn update_time_to_live(&self) -> fluent_builders::UpdateTimeToLive {
        fluent_builders::UpdateTimeToLive::new(self.handle.clone())
    }
}

pub mod fluent_builders {
    #[derive(std::fmt::Debug)]
    pub struct BatchGetItem {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::batch_get_item_input::Builder,
    }
    impl BatchGetItem {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> (super::Client, crate::input::batch_get_item_input::Builder) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::BatchGetItemOutput,
            aws_hyper::SdkError<crate::error::BatchGetItemError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| aws_hyper::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| aws_hyper::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn request_items(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::KeysAndAttributes>,
        ) -> Self {
            self.inner = self.inner.request_items(k, v);
            self
        }
        pub fn set_request_items(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::KeysAndAttributes>>,
        ) -> Self {
            self.inner = self.inner.set_request_items(inp);
            self
        }
        pub fn return_consumed_capacity(
            mut self,
            inp: crate::model::ReturnConsumedCapacity,
        ) -> Self {
            self.inner = self.inner.return_consumed_capacity(inp);
            self
        }
        pub fn set_return_consumed_capacity(
            mut self,
            inp: std::option::Option<crate::model::ReturnConsumedCapacity>,
        ) -> Self {
            self.inner = self.inner.set_return_consumed_capacity(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct BatchWriteItem {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::batch_write_item_input::Builder,
    }
    impl BatchWriteItem {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> (super::Client, crate::input::batch_write_item_input::Builder) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::BatchWriteItemOutput,
            aws_hyper::SdkError<crate::error::BatchWriteItemError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| aws_hyper::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| aws_hyper::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn request_items(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::vec::Vec<crate::model::WriteRequest>>,
        ) -> Self {
            self.inner = self.inner.request_items(k, v);
            self
        }
        pub fn set_request_items(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<crate::model::WriteRequest>>>,
        ) -> Self {
            self.inner = self.inner.set_request_items(inp);
            self
        }
        pub fn return_consumed_capacity(
            mut self,
            inp: crate::model::ReturnConsumedCapacity,
        ) -> Self {
            self.inner = self.inner.return_consumed_capacity(inp);
            self
        }
        pub fn set_return_consumed_capacity(
            mut self,
            inp: std::option::Option<crate::model::ReturnConsumedCapacity>,
        ) -> Self {
            self.inner = self.inner.set_return_consumed_capacity(inp);
            self
        }
        pub fn return_item_collection_metrics(
            mut self,
            inp: crate::model::ReturnItemCollectionMetrics,
        ) -> Self {
            self.inner = self.inner.return_item_collection_metrics(inp);
            self
        }
        pub fn set_return_item_collection_metrics(
            mut self,
            inp: std::option::Option<crate::model::ReturnItemCollectionMetrics>,
        ) -> Self {
            self.inner = self.inner.set_return_item_collection_metrics(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct CreateTable {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::create_table_input::Builder,
    }
    impl CreateTable {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> (super::Client, crate::input::create_table_input::Builder) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::CreateTableOutput,
            aws_hyper::SdkError<crate::error::CreateTableError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| aws_hyper::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| aws_hyper::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn attribute_definitions(
            mut self,
            inp: impl Into<crate::model::AttributeDefinition>,
        ) -> Self {
            self.inner = self.inner.attribute_definitions(inp);
            self
        }
        pub fn set_attribute_definitions(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::AttributeDefinition>>,
        ) -> Self {
            self.inner = self.inner.set_attribute_definitions(inp);
            self
        }
        pub fn table_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.table_name(inp);
            self
        }
        pub fn set_table_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_table_name(inp);
            self
        }
        pub fn key_schema(mut self, inp: impl Into<crate::model::KeySchemaElement>) -> Self {
            self.inner = self.inner.key_schema(inp);
            self
        }
        pub fn set_key_schema(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::KeySchemaElement>>,
        ) -> Self {
            self.inner = self.inner.set_key_schema(inp);
            self
        }
        pub fn local_secondary_indexes(
            mut self,
            inp: impl Into<crate::model::LocalSecondaryIndex>,
        ) -> Self {
            self.inner = self.inner.local_secondary_indexes(inp);
            self
        }
        pub fn set_local_secondary_indexes(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::LocalSecondaryIndex>>,
        ) -> Self {
            self.inner = self.inner.set_local_secondary_indexes(inp);
            self
        }
        pub fn global_secondary_indexes(
            mut self,
            inp: impl Into<crate::model::GlobalSecondaryIndex>,
        ) -> Self {
            self.inner = self.inner.global_secondary_indexes(inp);
            self
        }
        pub fn set_global_secondary_indexes(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::GlobalSecondaryIndex>>,
        ) -> Self {
            self.inner = self.inner.set_global_secondary_indexes(inp);
            self
        }
        pub fn billing_mode(mut self, inp: crate::model::BillingMode) -> Self {
            self.inner = self.inner.billing_mode(inp);
            self
        }
        pub fn set_billing_mode(
            mut self,
            inp: std::option::Option<crate::model::BillingMode>,
        ) -> Self {
            self.inner = self.inner.set_billing_mode(inp);
            self
        }
        pub fn provisioned_throughput(mut self, inp: crate::model::ProvisionedThroughput) -> Self {
            self.inner = self.inner.provisioned_throughput(inp);
            self
        }
        pub fn set_provisioned_throughput(
            mut self,
            inp: std::option::Option<crate::model::ProvisionedThroughput>,
        ) -> Self {
            self.inner = self.inner.set_provisioned_throughput(inp);
            self
        }
        pub fn stream_specification(mut self, inp: crate::model::StreamSpecification) -> Self {
            self.inner = self.inner.stream_specification(inp);
            self
        }
        pub fn set_stream_specification(
            mut self,
            inp: std::option::Option<crate::model::StreamSpecification>,
        ) -> Self {
            self.inner = self.inner.set_stream_specification(inp);
            self
        }
        pub fn sse_specification(mut self, inp: crate::model::SseSpecification) -> Self {
            self.inner = self.inner.sse_specification(inp);
            self
        }
        pub fn set_sse_specification(
            mut self,
            inp: std::option::Option<crate::model::SseSpecification>,
        ) -> Self {
            self.inner = self.inner.set_sse_specification(inp);
            self
        }
        pub fn tags(mut self, inp: impl Into<crate::model::Tag>) -> Self {
            self.inner = self.inner.tags(inp);
            self
        }
        pub fn set_tags(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::Tag>>,
        ) -> Self {
            self.inner = self.inner.set_tags(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct DeleteItem {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::delete_item_input::Builder,
    }
    impl DeleteItem {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> (super::Client, crate::input::delete_item_input::Builder) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DeleteItemOutput,
            aws_hyper::SdkError<crate::error::DeleteItemError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| aws_hyper::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| aws_hyper::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn table_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.table_name(inp);
            self
        }
        pub fn set_table_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_table_name(inp);
            self
        }
        pub fn key(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::AttributeValue>,
        ) -> Self {
            self.inner = self.inner.key(k, v);
            self
        }
        pub fn set_key(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        ) -> Self {
            self.inner = self.inner.set_key(inp);
            self
        }
        pub fn expected(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::ExpectedAttributeValue>,
        ) -> Self {
            self.inner = self.inner.expected(k, v);
            self
        }
        pub fn set_expected(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::ExpectedAttributeValue>>,
        ) -> Self {
            self.inner = self.inner.set_expected(inp);
            self
        }
        pub fn conditional_operator(mut self, inp: crate::model::ConditionalOperator) -> Self {
            self.inner = self.inner.conditional_operator(inp);
            self
        }
        pub fn set_conditional_operator(
            mut self,
            inp: std::option::Option<crate::model::ConditionalOperator>,
        ) -> Self {
            self.inner = self.inner.set_conditional_operator(inp);
            self
        }
        pub fn return_values(mut self, inp: crate::model::ReturnValue) -> Self {
            self.inner = self.inner.return_values(inp);
            self
        }
        pub fn set_return_values(
            mut self,
            inp: std::option::Option<crate::model::ReturnValue>,
        ) -> Self {
            self.inner = self.inner.set_return_values(inp);
            self
        }
        pub fn return_consumed_capacity(
            mut self,
            inp: crate::model::ReturnConsumedCapacity,
        ) -> Self {
            self.inner = self.inner.return_consumed_capacity(inp);
            self
        }
        pub fn set_return_consumed_capacity(
            mut self,
            inp: std::option::Option<crate::model::ReturnConsumedCapacity>,
        ) -> Self {
            self.inner = self.inner.set_return_consumed_capacity(inp);
            self
        }
        pub fn return_item_collection_metrics(
            mut self,
            inp: crate::model::ReturnItemCollectionMetrics,
        ) -> Self {
            self.inner = self.inner.return_item_collection_metrics(inp);
            self
        }
        pub fn set_return_item_collection_metrics(
            mut self,
            inp: std::option::Option<crate::model::ReturnItemCollectionMetrics>,
        ) -> Self {
            self.inner = self.inner.set_return_item_collection_metrics(inp);
            self
        }
        pub fn condition_expression(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.condition_expression(inp);
            self
        }
        pub fn set_condition_expression(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.inner = self.inner.set_condition_expression(inp);
            self
        }
        pub fn expression_attribute_names(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            self.inner = self.inner.expression_attribute_names(k, v);
            self
        }
        pub fn set_expression_attribute_names(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        ) -> Self {
            self.inner = self.inner.set_expression_attribute_names(inp);
            self
        }
        pub fn expression_attribute_values(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::AttributeValue>,
        ) -> Self {
            self.inner = self.inner.expression_attribute_values(k, v);
            self
        }
        pub fn set_expression_attribute_values(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        ) -> Self {
            self.inner = self.inner.set_expression_attribute_values(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct DeleteTable {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::delete_table_input::Builder,
    }
    impl DeleteTable {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> (super::Client, crate::input::delete_table_input::Builder) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DeleteTableOutput,
            aws_hyper::SdkError<crate::error::DeleteTableError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| aws_hyper::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| aws_hyper::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn table_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.table_name(inp);
            self
        }
        pub fn set_table_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_table_name(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct DescribeTable {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_table_input::Builder,
    }
    impl DescribeTable {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> (super::Client, crate::input::describe_table_input::Builder) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeTableOutput,
            aws_hyper::SdkError<crate::error::DescribeTableError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| aws_hyper::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| aws_hyper::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn table_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.table_name(inp);
            self
        }
        pub fn set_table_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_table_name(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct DescribeLimits {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_limits_input::Builder,
    }
    impl DescribeLimits {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> (super::Client, crate::input::describe_limits_input::Builder) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeLimitsOutput,
            aws_hyper::SdkError<crate::error::DescribeLimitsError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| aws_hyper::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| aws_hyper::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct DescribeTimeToLive {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_time_to_live_input::Builder,
    }
    impl DescribeTimeToLive {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(
            self) -> (super::Client, crate::input::describe_time_to_live_input::Builder,
        ) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeTimeToLiveOutput,
            aws_hyper::SdkError<crate::error::DescribeTimeToLiveError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| aws_hyper::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| aws_hyper::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn table_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.table_name(inp);
            self
        }
        pub fn set_table_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_table_name(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct GetItem {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::get_item_input::Builder,
    }
    impl GetItem {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> (super::Client, crate::input::get_item_input::Builder) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::GetItemOutput,
            aws_hyper::SdkError<crate::error::GetItemError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| aws_hyper::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| aws_hyper::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn table_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.table_name(inp);
            self
        }
        pub fn set_table_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_table_name(inp);
            self
        }
        pub fn key(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::AttributeValue>,
        ) -> Self {
            self.inner = self.inner.key(k, v);
            self
        }
        pub fn set_key(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        ) -> Self {
            self.inner = self.inner.set_key(inp);
            self
        }
        pub fn attributes_to_get(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.attributes_to_get(inp);
            self
        }
        pub fn set_attributes_to_get(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.inner = self.inner.set_attributes_to_get(inp);
            self
        }
        pub fn consistent_read(mut self, inp: bool) -> Self {
            self.inner = self.inner.consistent_read(inp);
            self
        }
        pub fn set_consistent_read(mut self, inp: std::option::Option<bool>) -> Self {
            self.inner = self.inner.set_consistent_read(inp);
            self
        }
        pub fn return_consumed_capacity(
            mut self,
            inp: crate::model::ReturnConsumedCapacity,
        ) -> Self {
            self.inner = self.inner.return_consumed_capacity(inp);
            self
        }
        pub fn set_return_consumed_capacity(
            mut self,
            inp: std::option::Option<crate::model::ReturnConsumedCapacity>,
        ) -> Self {
            self.inner = self.inner.set_return_consumed_capacity(inp);
            self
        }
        pub fn projection_expression(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.projection_expression(inp);
            self
        }
        pub fn set_projection_expression(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.inner = self.inner.set_projection_expression(inp);
            self
        }
        pub fn expression_attribute_names(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            self.inner = self.inner.expression_attribute_names(k, v);
            self
        }
        pub fn set_expression_attribute_names(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        ) -> Self {
            self.inner = self.inner.set_expression_attribute_names(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct ListTables {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::list_tables_input::Builder,
    }
    impl ListTables {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> (super::Client, crate::input::list_tables_input::Builder) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListTablesOutput,
            aws_hyper::SdkError<crate::error::ListTablesError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| aws_hyper::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| aws_hyper::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        /// The first table name that this operation will evaluate. Use the value that was returned for `LastEvaluatedTableName` in a previous operation, so that you can obtain the next page of results.
        pub fn exclusive_start_table_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.exclusive_start_table_name(inp);
            self
        }
        pub fn set_exclusive_start_table_name(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.inner = self.inner.set_exclusive_start_table_name(inp);
            self
        }
        pub fn limit(mut self, inp: i32) -> Self {
            self.inner = self.inner.limit(inp);
            self
        }
        pub fn set_limit(mut self, inp: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_limit(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct PutItem {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::put_item_input::Builder,
    }
    impl PutItem {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> (super::Client, crate::input::put_item_input::Builder) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::PutItemOutput,
            aws_hyper::SdkError<crate::error::PutItemError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| aws_hyper::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| aws_hyper::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn table_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.table_name(inp);
            self
        }
        pub fn set_table_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_table_name(inp);
            self
        }
        pub fn item(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::AttributeValue>,
        ) -> Self {
            self.inner = self.inner.item(k, v);
            self
        }
        pub fn set_item(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        ) -> Self {
            self.inner = self.inner.set_item(inp);
            self
        }
        pub fn expected(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::ExpectedAttributeValue>,
        ) -> Self {
            self.inner = self.inner.expected(k, v);
            self
        }
        pub fn set_expected(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::ExpectedAttributeValue>>,
        ) -> Self {
            self.inner = self.inner.set_expected(inp);
            self
        }
        pub fn return_values(mut self, inp: crate::model::ReturnValue) -> Self {
            self.inner = self.inner.return_values(inp);
            self
        }
        pub fn set_return_values(
            mut self,
            inp: std::option::Option<crate::model::ReturnValue>,
        ) -> Self {
            self.inner = self.inner.set_return_values(inp);
            self
        }
        pub fn return_consumed_capacity(
            mut self,
            inp: crate::model::ReturnConsumedCapacity,
        ) -> Self {
            self.inner = self.inner.return_consumed_capacity(inp);
            self
        }
        pub fn set_return_consumed_capacity(
            mut self,
            inp: std::option::Option<crate::model::ReturnConsumedCapacity>,
        ) -> Self {
            self.inner = self.inner.set_return_consumed_capacity(inp);
            self
        }
        pub fn return_item_collection_metrics(
            mut self,
            inp: crate::model::ReturnItemCollectionMetrics,
        ) -> Self {
            self.inner = self.inner.return_item_collection_metrics(inp);
            self
        }
        pub fn set_return_item_collection_metrics(
            mut self,
            inp: std::option::Option<crate::model::ReturnItemCollectionMetrics>,
        ) -> Self {
            self.inner = self.inner.set_return_item_collection_metrics(inp);
            self
        }
        pub fn conditional_operator(mut self, inp: crate::model::ConditionalOperator) -> Self {
            self.inner = self.inner.conditional_operator(inp);
            self
        }
        pub fn set_conditional_operator(
            mut self,
            inp: std::option::Option<crate::model::ConditionalOperator>,
        ) -> Self {
            self.inner = self.inner.set_conditional_operator(inp);
            self
        }
        pub fn condition_expression(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.condition_expression(inp);
            self
        }
        pub fn set_condition_expression(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.inner = self.inner.set_condition_expression(inp);
            self
        }
        pub fn expression_attribute_names(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            self.inner = self.inner.expression_attribute_names(k, v);
            self
        }
        pub fn set_expression_attribute_names(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        ) -> Self {
            self.inner = self.inner.set_expression_attribute_names(inp);
            self
        }
        pub fn expression_attribute_values(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::AttributeValue>,
        ) -> Self {
            self.inner = self.inner.expression_attribute_values(k, v);
            self
        }
        pub fn set_expression_attribute_values(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        ) -> Self {
            self.inner = self.inner.set_expression_attribute_values(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct Query {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::query_input::Builder,
    }
    impl Query {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> (super::Client, crate::input::query_input::Builder) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::QueryOutput,
            aws_hyper::SdkError<crate::error::QueryError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| aws_hyper::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| aws_hyper::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn table_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.table_name(inp);
            self
        }
        pub fn set_table_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_table_name(inp);
            self
        }
        pub fn index_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.index_name(inp);
            self
        }
        pub fn set_index_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_index_name(inp);
            self
        }
        pub fn select(mut self, inp: crate::model::Select) -> Self {
            self.inner = self.inner.select(inp);
            self
        }
        pub fn set_select(mut self, inp: std::option::Option<crate::model::Select>) -> Self {
            self.inner = self.inner.set_select(inp);
            self
        }
        pub fn attributes_to_get(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.attributes_to_get(inp);
            self
        }
        pub fn set_attributes_to_get(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.inner = self.inner.set_attributes_to_get(inp);
            self
        }
        pub fn limit(mut self, inp: i32) -> Self {
            self.inner = self.inner.limit(inp);
            self
        }
        pub fn set_limit(mut self, inp: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_limit(inp);
            self
        }
        pub fn consistent_read(mut self, inp: bool) -> Self {
            self.inner = self.inner.consistent_read(inp);
            self
        }
        pub fn set_consistent_read(mut self, inp: std::option::Option<bool>) -> Self {
            self.inner = self.inner.set_consistent_read(inp);
            self
        }
        pub fn key_conditions(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::Condition>,
        ) -> Self {
            self.inner = self.inner.key_conditions(k, v);
            self
        }
        pub fn set_key_conditions(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::Condition>>,
        ) -> Self {
            self.inner = self.inner.set_key_conditions(inp);
            self
        }
        pub fn query_filter(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::Condition>,
        ) -> Self {
            self.inner = self.inner.query_filter(k, v);
            self
        }
        pub fn set_query_filter(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::Condition>>,
        ) -> Self {
            self.inner = self.inner.set_query_filter(inp);
            self
        }
        pub fn conditional_operator(mut self, inp: crate::model::ConditionalOperator) -> Self {
            self.inner = self.inner.conditional_operator(inp);
            self
        }
        pub fn set_conditional_operator(
            mut self,
            inp: std::option::Option<crate::model::ConditionalOperator>,
        ) -> Self {
            self.inner = self.inner.set_conditional_operator(inp);
            self
        }
        pub fn scan_index_forward(mut self, inp: bool) -> Self {
            self.inner = self.inner.scan_index_forward(inp);
            self
        }
        pub fn set_scan_index_forward(mut self, inp: std::option::Option<bool>) -> Self {
            self.inner = self.inner.set_scan_index_forward(inp);
            self
        }
        pub fn exclusive_start_key(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::AttributeValue>,
        ) -> Self {
            self.inner = self.inner.exclusive_start_key(k, v);
            self
        }
        pub fn set_exclusive_start_key(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        ) -> Self {
            self.inner = self.inner.set_exclusive_start_key(inp);
            self
        }
        pub fn return_consumed_capacity(
            mut self,
            inp: crate::model::ReturnConsumedCapacity,
        ) -> Self {
            self.inner = self.inner.return_consumed_capacity(inp);
            self
        }
        pub fn set_return_consumed_capacity(
            mut self,
            inp: std::option::Option<crate::model::ReturnConsumedCapacity>,
        ) -> Self {
            self.inner = self.inner.set_return_consumed_capacity(inp);
            self
        }
        pub fn projection_expression(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.projection_expression(inp);
            self
        }
        pub fn set_projection_expression(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.inner = self.inner.set_projection_expression(inp);
            self
        }
        pub fn filter_expression(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.filter_expression(inp);
            self
        }
        pub fn set_filter_expression(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.inner = self.inner.set_filter_expression(inp);
            self
        }
        pub fn key_condition_expression(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.key_condition_expression(inp);
            self
        }
        pub fn set_key_condition_expression(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.inner = self.inner.set_key_condition_expression(inp);
            self
        }
        pub fn expression_attribute_names(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            self.inner = self.inner.expression_attribute_names(k, v);
            self
        }
        pub fn set_expression_attribute_names(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        ) -> Self {
            self.inner = self.inner.set_expression_attribute_names(inp);
            self
        }
        pub fn expression_attribute_values(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::AttributeValue>,
        ) -> Self {
            self.inner = self.inner.expression_attribute_values(k, v);
            self
        }
        pub fn set_expression_attribute_values(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        ) -> Self {
            self.inner = self.inner.set_expression_attribute_values(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct Scan {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::scan_input::Builder,
    }
    impl Scan {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> (super::Client, crate::input::scan_input::Builder) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ScanOutput,
            aws_hyper::SdkError<crate::error::ScanError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| aws_hyper::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| aws_hyper::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn table_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.table_name(inp);
            self
        }
        pub fn set_table_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_table_name(inp);
            self
        }
        pub fn index_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.index_name(inp);
            self
        }
        pub fn set_index_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_index_name(inp);
            self
        }
        pub fn attributes_to_get(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.attributes_to_get(inp);
            self
        }
        pub fn set_attributes_to_get(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.inner = self.inner.set_attributes_to_get(inp);
            self
        }
        pub fn limit(mut self, inp: i32) -> Self {
            self.inner = self.inner.limit(inp);
            self
        }
        pub fn set_limit(mut self, inp: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_limit(inp);
            self
        }
        pub fn select(mut self, inp: crate::model::Select) -> Self {
            self.inner = self.inner.select(inp);
            self
        }
        pub fn set_select(mut self, inp: std::option::Option<crate::model::Select>) -> Self {
            self.inner = self.inner.set_select(inp);
            self
        }
        pub fn scan_filter(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::Condition>,
        ) -> Self {
            self.inner = self.inner.scan_filter(k, v);
            self
        }
        pub fn set_scan_filter(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::Condition>>,
        ) -> Self {
            self.inner = self.inner.set_scan_filter(inp);
            self
        }
        pub fn conditional_operator(mut self, inp: crate::model::ConditionalOperator) -> Self {
            self.inner = self.inner.conditional_operator(inp);
            self
        }
        pub fn set_conditional_operator(
            mut self,
            inp: std::option::Option<crate::model::ConditionalOperator>,
        ) -> Self {
            self.inner = self.inner.set_conditional_operator(inp);
            self
        }
        pub fn exclusive_start_key(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::AttributeValue>,
        ) -> Self {
            self.inner = self.inner.exclusive_start_key(k, v);
            self
        }
        pub fn set_exclusive_start_key(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        ) -> Self {
            self.inner = self.inner.set_exclusive_start_key(inp);
            self
        }
        pub fn return_consumed_capacity(
            mut self,
            inp: crate::model::ReturnConsumedCapacity,
        ) -> Self {
            self.inner = self.inner.return_consumed_capacity(inp);
            self
        }
        pub fn set_return_consumed_capacity(
            mut self,
            inp: std::option::Option<crate::model::ReturnConsumedCapacity>,
        ) -> Self {
            self.inner = self.inner.set_return_consumed_capacity(inp);
            self
        }
        pub fn total_segments(mut self, inp: i32) -> Self {
            self.inner = self.inner.total_segments(inp);
            self
        }
        pub fn set_total_segments(mut self, inp: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_total_segments(inp);
            self
        }
        pub fn segment(mut self, inp: i32) -> Self {
            self.inner = self.inner.segment(inp);
            self
        }
        pub fn set_segment(mut self, inp: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_segment(inp);
            self
        }
        pub fn projection_expression(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.projection_expression(inp);
            self
        }
        pub fn set_projection_expression(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.inner = self.inner.set_projection_expression(inp);
            self
        }
        pub fn filter_expression(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.filter_expression(inp);
            self
        }
        pub fn set_filter_expression(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.inner = self.inner.set_filter_expression(inp);
            self
        }
        pub fn expression_attribute_names(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            self.inner = self.inner.expression_attribute_names(k, v);
            self
        }
        pub fn set_expression_attribute_names(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        ) -> Self {
            self.inner = self.inner.set_expression_attribute_names(inp);
            self
        }
        pub fn expression_attribute_values(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::AttributeValue>,
        ) -> Self {
            self.inner = self.inner.expression_attribute_values(k, v);
            self
        }
        pub fn set_expression_attribute_values(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        ) -> Self {
            self.inner = self.inner.set_expression_attribute_values(inp);
            self
        }
        pub fn consistent_read(mut self, inp: bool) -> Self {
            self.inner = self.inner.consistent_read(inp);
            self
        }
        pub fn set_consistent_read(mut self, inp: std::option::Option<bool>) -> Self {
            self.inner = self.inner.set_consistent_read(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct TransactGetItems {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::transact_get_items_input::Builder,
    }
    impl TransactGetItems {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(
            self) -> (super::Client, crate::input::transact_get_items_input::Builder,
        ) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::TransactGetItemsOutput,
            aws_hyper::SdkError<crate::error::TransactGetItemsError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| aws_hyper::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| aws_hyper::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn transact_items(mut self, inp: impl Into<crate::model::TransactGetItem>) -> Self {
            self.inner = self.inner.transact_items(inp);
            self
        }
        pub fn set_transact_items(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::TransactGetItem>>,
        ) -> Self {
            self.inner = self.inner.set_transact_items(inp);
            self
        }
        pub fn return_consumed_capacity(
            mut self,
            inp: crate::model::ReturnConsumedCapacity,
        ) -> Self {
            self.inner = self.inner.return_consumed_capacity(inp);
            self
        }
        pub fn set_return_consumed_capacity(
            mut self,
            inp: std::option::Option<crate::model::ReturnConsumedCapacity>,
        ) -> Self {
            self.inner = self.inner.set_return_consumed_capacity(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct TransactWriteItems {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::transact_write_items_input::Builder,
    }
    impl TransactWriteItems {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(
            self) -> (super::Client, crate::input::transact_write_items_input::Builder,
        ) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::TransactWriteItemsOutput,
            aws_hyper::SdkError<crate::error::TransactWriteItemsError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| aws_hyper::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| aws_hyper::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn transact_items(mut self, inp: impl Into<crate::model::TransactWriteItem>) -> Self {
            self.inner = self.inner.transact_items(inp);
            self
        }
        pub fn set_transact_items(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::TransactWriteItem>>,
        ) -> Self {
            self.inner = self.inner.set_transact_items(inp);
            self
        }
        pub fn return_consumed_capacity(
            mut self,
            inp: crate::model::ReturnConsumedCapacity,
        ) -> Self {
            self.inner = self.inner.return_consumed_capacity(inp);
            self
        }
        pub fn set_return_consumed_capacity(
            mut self,
            inp: std::option::Option<crate::model::ReturnConsumedCapacity>,
        ) -> Self {
            self.inner = self.inner.set_return_consumed_capacity(inp);
            self
        }
        pub fn return_item_collection_metrics(
            mut self,
            inp: crate::model::ReturnItemCollectionMetrics,
        ) -> Self {
            self.inner = self.inner.return_item_collection_metrics(inp);
            self
        }
        pub fn set_return_item_collection_metrics(
            mut self,
            inp: std::option::Option<crate::model::ReturnItemCollectionMetrics>,
        ) -> Self {
            self.inner = self.inner.set_return_item_collection_metrics(inp);
            self
        }
        pub fn client_request_token(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.client_request_token(inp);
            self
        }
        pub fn set_client_request_token(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.inner = self.inner.set_client_request_token(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct UpdateItem {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::update_item_input::Builder,
    }
    impl UpdateItem {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> (super::Client, crate::input::update_item_input::Builder) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::UpdateItemOutput,
            aws_hyper::SdkError<crate::error::UpdateItemError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| aws_hyper::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| aws_hyper::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn table_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.table_name(inp);
            self
        }
        pub fn set_table_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_table_name(inp);
            self
        }
        pub fn key(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::AttributeValue>,
        ) -> Self {
            self.inner = self.inner.key(k, v);
            self
        }
        pub fn set_key(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        ) -> Self {
            self.inner = self.inner.set_key(inp);
            self
        }
        pub fn attribute_updates(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::AttributeValueUpdate>,
        ) -> Self {
            self.inner = self.inner.attribute_updates(k, v);
            self
        }
        pub fn set_attribute_updates(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValueUpdate>>,
        ) -> Self {
            self.inner = self.inner.set_attribute_updates(inp);
            self
        }
        pub fn expected(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::ExpectedAttributeValue>,
        ) -> Self {
            self.inner = self.inner.expected(k, v);
            self
        }
        pub fn set_expected(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::ExpectedAttributeValue>>,
        ) -> Self {
            self.inner = self.inner.set_expected(inp);
            self
        }
        pub fn conditional_operator(mut self, inp: crate::model::ConditionalOperator) -> Self {
            self.inner = self.inner.conditional_operator(inp);
            self
        }
        pub fn set_conditional_operator(
            mut self,
            inp: std::option::Option<crate::model::ConditionalOperator>,
        ) -> Self {
            self.inner = self.inner.set_conditional_operator(inp);
            self
        }
        pub fn return_values(mut self, inp: crate::model::ReturnValue) -> Self {
            self.inner = self.inner.return_values(inp);
            self
        }
        pub fn set_return_values(
            mut self,
            inp: std::option::Option<crate::model::ReturnValue>,
        ) -> Self {
            self.inner = self.inner.set_return_values(inp);
            self
        }
        pub fn return_consumed_capacity(
            mut self,
            inp: crate::model::ReturnConsumedCapacity,
        ) -> Self {
            self.inner = self.inner.return_consumed_capacity(inp);
            self
        }
        pub fn set_return_consumed_capacity(
            mut self,
            inp: std::option::Option<crate::model::ReturnConsumedCapacity>,
        ) -> Self {
            self.inner = self.inner.set_return_consumed_capacity(inp);
            self
        }
        pub fn return_item_collection_metrics(
            mut self,
            inp: crate::model::ReturnItemCollectionMetrics,
        ) -> Self {
            self.inner = self.inner.return_item_collection_metrics(inp);
            self
        }
        pub fn set_return_item_collection_metrics(
            mut self,
            inp: std::option::Option<crate::model::ReturnItemCollectionMetrics>,
        ) -> Self {
            self.inner = self.inner.set_return_item_collection_metrics(inp);
            self
        }
        pub fn update_expression(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.update_expression(inp);
            self
        }
        pub fn set_update_expression(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.inner = self.inner.set_update_expression(inp);
            self
        }
        pub fn condition_expression(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.condition_expression(inp);
            self
        }
        pub fn set_condition_expression(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.inner = self.inner.set_condition_expression(inp);
            self
        }
        pub fn expression_attribute_names(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            self.inner = self.inner.expression_attribute_names(k, v);
            self
        }
        pub fn set_expression_attribute_names(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        ) -> Self {
            self.inner = self.inner.set_expression_attribute_names(inp);
            self
        }
        pub fn expression_attribute_values(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::AttributeValue>,
        ) -> Self {
            self.inner = self.inner.expression_attribute_values(k, v);
            self
        }
        pub fn set_expression_attribute_values(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        ) -> Self {
            self.inner = self.inner.set_expression_attribute_values(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct UpdateTable {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::update_table_input::Builder,
    }
    impl UpdateTable {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> (super::Client, crate::input::update_table_input::Builder) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::UpdateTableOutput,
            aws_hyper::SdkError<crate::error::UpdateTableError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| aws_hyper::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| aws_hyper::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn attribute_definitions(
            mut self,
            inp: impl Into<crate::model::AttributeDefinition>,
        ) -> Self {
            self.inner = self.inner.attribute_definitions(inp);
            self
        }
        pub fn set_attribute_definitions(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::AttributeDefinition>>,
        ) -> Self {
            self.inner = self.inner.set_attribute_definitions(inp);
            self
        }
        pub fn table_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.table_name(inp);
            self
        }
        pub fn set_table_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_table_name(inp);
            self
        }
        pub fn billing_mode(mut self, inp: crate::model::BillingMode) -> Self {
            self.inner = self.inner.billing_mode(inp);
            self
        }
        pub fn set_billing_mode(
            mut self,
            inp: std::option::Option<crate::model::BillingMode>,
        ) -> Self {
            self.inner = self.inner.set_billing_mode(inp);
            self
        }
        pub fn provisioned_throughput(mut self, inp: crate::model::ProvisionedThroughput) -> Self {
            self.inner = self.inner.provisioned_throughput(inp);
            self
        }
        pub fn set_provisioned_throughput(
            mut self,
            inp: std::option::Option<crate::model::ProvisionedThroughput>,
        ) -> Self {
            self.inner = self.inner.set_provisioned_throughput(inp);
            self
        }
        pub fn global_secondary_index_updates(
            mut self,
            inp: impl Into<crate::model::GlobalSecondaryIndexUpdate>,
        ) -> Self {
            self.inner = self.inner.global_secondary_index_updates(inp);
            self
        }
        pub fn set_global_secondary_index_updates(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::GlobalSecondaryIndexUpdate>>,
        ) -> Self {
            self.inner = self.inner.set_global_secondary_index_updates(inp);
            self
        }
        pub fn stream_specification(mut self, inp: crate::model::StreamSpecification) -> Self {
            self.inner = self.inner.stream_specification(inp);
            self
        }
        pub fn set_stream_specification(
            mut self,
            inp: std::option::Option<crate::model::StreamSpecification>,
        ) -> Self {
            self.inner = self.inner.set_stream_specification(inp);
            self
        }
        pub fn sse_specification(mut self, inp: crate::model::SseSpecification) -> Self {
            self.inner = self.inner.sse_specification(inp);
            self
        }
        pub fn set_sse_specification(
            mut self,
            inp: std::option::Option<crate::model::SseSpecification>,
        ) -> Self {
            self.inner = self.inner.set_sse_specification(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct UpdateTimeToLive {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::update_time_to_live_input::Builder,
    }
    impl UpdateTimeToLive {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(
            self) -> (super::Client, crate::input::update_time_to_live_input::Builder,
        ) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::UpdateTimeToLiveOutput,
            aws_hyper::SdkError<crate::error::UpdateTimeToLiveError>,
        > {
            let input = self
                .inner
                .build()
                .map_err(|err| aws_hyper::SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| aws_hyper::SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }
        pub fn table_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.table_name(inp);
            self
        }
        pub fn set_table_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_table_name(inp);
            self
        }
        pub fn time_to_live_specification(
            mut self,
            inp: crate::model::TimeToLiveSpecification,
        ) -> Self {
            self.inner = self.inner.time_to_live_specification(inp);
            self
        }
        pub fn set_time_to_live_specification(
            mut self,
            inp: std::option::Option<crate::model::TimeToLiveSpecification>,
        ) -> Self {
            self.inner = self.inner.set_time_to_live_specification(inp);
            self
        }
    }
}
