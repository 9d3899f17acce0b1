/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// Returns the attributes of one or more items from one or more tables
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct BatchGetItem {
    _private: (),
}
impl BatchGetItem {
    /// Creates a new builder-style object to manufacture [`BatchGetItemInput`](crate::input::BatchGetItemInput)
    pub fn builder() -> crate::input::batch_get_item_input::Builder {
        crate::input::batch_get_item_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for BatchGetItem {
    type Output = std::result::Result<crate::output::BatchGetItemOutput, crate::error::BatchGetItemError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_batch_get_item_error(response)
        } else {
            crate::operation_deser::parse_batch_get_item_response(response)
        }
    }
}

/// Puts or deletes multiple items in one or more tables
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct BatchWriteItem {
    _private: (),
}
impl BatchWriteItem {
    /// Creates a new builder-style object to manufacture [`BatchWriteItemInput`](crate::input::BatchWriteItemInput)
    pub fn builder() -> crate::input::batch_write_item_input::Builder {
        crate::input::batch_write_item_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for BatchWriteItem {
    type Output = std::result::Result<crate::output::BatchWriteItemOutput, crate::error::BatchWriteItemError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_batch_write_item_error(response)
        } else {
            crate::operation_deser::parse_batch_write_item_response(response)
        }
    }
}

/// Adds a new table to your account
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct CreateTable {
    _private: (),
}
impl CreateTable {
    /// Creates a new builder-style object to manufacture [`CreateTableInput`](crate::input::CreateTableInput)
    pub fn builder() -> crate::input::create_table_input::Builder {
        crate::input::create_table_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for CreateTable {
    type Output = std::result::Result<crate::output::CreateTableOutput, crate::error::CreateTableError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_create_table_error(response)
        } else {
            crate::operation_deser::parse_create_table_response(response)
        }
    }
}

/// Deletes a single item in a table by primary key
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DeleteItem {
    _private: (),
}
impl DeleteItem {
    /// Creates a new builder-style object to manufacture [`DeleteItemInput`](crate::input::DeleteItemInput)
    pub fn builder() -> crate::input::delete_item_input::Builder {
        crate::input::delete_item_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DeleteItem {
    type Output = std::result::Result<crate::output::DeleteItemOutput, crate::error::DeleteItemError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_delete_item_error(response)
        } else {
            crate::operation_deser::parse_delete_item_response(response)
        }
    }
}

/// Deletes a table and all of its items
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DeleteTable {
    _private: (),
}
impl DeleteTable {
    /// Creates a new builder-style object to manufacture [`DeleteTableInput`](crate::input::DeleteTableInput)
    pub fn builder() -> crate::input::delete_table_input::Builder {
        crate::input::delete_table_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DeleteTable {
    type Output = std::result::Result<crate::output::DeleteTableOutput, crate::error::DeleteTableError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_delete_table_error(response)
        } else {
            crate::operation_deser::parse_delete_table_response(response)
        }
    }
}

/// Returns information about the table, including the current status of the table
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DescribeTable {
    _private: (),
}
impl DescribeTable {
    /// Creates a new builder-style object to manufacture [`DescribeTableInput`](crate::input::DescribeTableInput)
    pub fn builder() -> crate::input::describe_table_input::Builder {
        crate::input::describe_table_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DescribeTable {
    type Output = std::result::Result<crate::output::DescribeTableOutput, crate::error::DescribeTableError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_describe_table_error(response)
        } else {
            crate::operation_deser::parse_describe_table_response(response)
        }
    }
}

/// Returns the current provisioned-capacity quotas for your account in a Region
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DescribeLimits {
    _private: (),
}
impl DescribeLimits {
    /// Creates a new builder-style object to manufacture [`DescribeLimitsInput`](crate::input::DescribeLimitsInput)
    pub fn builder() -> crate::input::describe_limits_input::Builder {
        crate::input::describe_limits_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DescribeLimits {
    type Output = std::result::Result<crate::output::DescribeLimitsOutput, crate::error::DescribeLimitsError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_describe_limits_error(response)
        } else {
            crate::operation_deser::parse_describe_limits_response(response)
        }
    }
}

/// Gives a description of the Time to Live (TTL) status on the specified table
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct DescribeTimeToLive {
    _private: (),
}
impl DescribeTimeToLive {
    /// Creates a new builder-style object to manufacture [`DescribeTimeToLiveInput`](crate::input::DescribeTimeToLiveInput)
    pub fn builder() -> crate::input::describe_time_to_live_input::Builder {
        crate::input::describe_time_to_live_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for DescribeTimeToLive {
    type Output = std::result::Result<crate::output::DescribeTimeToLiveOutput, crate::error::DescribeTimeToLiveError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_describe_time_to_live_error(response)
        } else {
            crate::operation_deser::parse_describe_time_to_live_response(response)
        }
    }
}

/// Returns a set of attributes for the item with the given primary key
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct GetItem {
    _private: (),
}
impl GetItem {
    /// Creates a new builder-style object to manufacture [`GetItemInput`](crate::input::GetItemInput)
    pub fn builder() -> crate::input::get_item_input::Builder {
        crate::input::get_item_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for GetItem {
    type Output = std::result::Result<crate::output::GetItemOutput, crate::error::GetItemError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_get_item_error(response)
        } else {
            crate::operation_deser::parse_get_item_response(response)
        }
    }
}

/// Returns an array of table names associated with the current account and endpoint
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct ListTables {
    _private: (),
}
impl ListTables {
    /// Creates a new builder-style object to manufacture [`ListTablesInput`](crate::input::ListTablesInput)
    pub fn builder() -> crate::input::list_tables_input::Builder {
        crate::input::list_tables_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for ListTables {
    type Output = std::result::Result<crate::output::ListTablesOutput, crate::error::ListTablesError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_list_tables_error(response)
        } else {
            crate::operation_deser::parse_list_tables_response(response)
        }
    }
}

/// Creates a new item, or replaces an old item with a new item
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct PutItem {
    _private: (),
}
impl PutItem {
    /// Creates a new builder-style object to manufacture [`PutItemInput`](crate::input::PutItemInput)
    pub fn builder() -> crate::input::put_item_input::Builder {
        crate::input::put_item_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for PutItem {
    type Output = std::result::Result<crate::output::PutItemOutput, crate::error::PutItemError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_put_item_error(response)
        } else {
            crate::operation_deser::parse_put_item_response(response)
        }
    }
}

/// Finds items based on primary key values
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct Query {
    _private: (),
}
impl Query {
    /// Creates a new builder-style object to manufacture [`QueryInput`](crate::input::QueryInput)
    pub fn builder() -> crate::input::query_input::Builder {
        crate::input::query_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for Query {
    type Output = std::result::Result<crate::output::QueryOutput, crate::error::QueryError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_query_error(response)
        } else {
            crate::operation_deser::parse_query_response(response)
        }
    }
}

/// Returns one or more items by accessing every item in a table or a secondary index
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct Scan {
    _private: (),
}
impl Scan {
    /// Creates a new builder-style object to manufacture [`ScanInput`](crate::input::ScanInput)
    pub fn builder() -> crate::input::scan_input::Builder {
        crate::input::scan_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for Scan {
    type Output = std::result::Result<crate::output::ScanOutput, crate::error::ScanError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_scan_error(response)
        } else {
            crate::operation_deser::parse_scan_response(response)
        }
    }
}

/// Synchronous operation that atomically retrieves multiple items from one or more tables
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct TransactGetItems {
    _private: (),
}
impl TransactGetItems {
    /// Creates a new builder-style object to manufacture [`TransactGetItemsInput`](crate::input::TransactGetItemsInput)
    pub fn builder() -> crate::input::transact_get_items_input::Builder {
        crate::input::transact_get_items_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for TransactGetItems {
    type Output = std::result::Result<crate::output::TransactGetItemsOutput, crate::error::TransactGetItemsError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_transact_get_items_error(response)
        } else {
            crate::operation_deser::parse_transact_get_items_response(response)
        }
    }
}

/// Synchronous write operation that groups up to 25 action requests
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct TransactWriteItems {
    _private: (),
}
impl TransactWriteItems {
    /// Creates a new builder-style object to manufacture [`TransactWriteItemsInput`](crate::input::TransactWriteItemsInput)
    pub fn builder() -> crate::input::transact_write_items_input::Builder {
        crate::input::transact_write_items_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for TransactWriteItems {
    type Output = std::result::Result<crate::output::TransactWriteItemsOutput, crate::error::TransactWriteItemsError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_transact_write_items_error(response)
        } else {
            crate::operation_deser::parse_transact_write_items_response(response)
        }
    }
}

/// Edits an existing item's attributes, or adds a new item to the table if it does not already exist
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct UpdateItem {
    _private: (),
}
impl UpdateItem {
    /// Creates a new builder-style object to manufacture [`UpdateItemInput`](crate::input::UpdateItemInput)
    pub fn builder() -> crate::input::update_item_input::Builder {
        crate::input::update_item_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for UpdateItem {
    type Output = std::result::Result<crate::output::UpdateItemOutput, crate::error::UpdateItemError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_update_item_error(response)
        } else {
            crate::operation_deser::parse_update_item_response(response)
        }
    }
}

/// Modifies the provisioned throughput settings, global secondary indexes, or DynamoDB Streams settings for a given table
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct UpdateTable {
    _private: (),
}
impl UpdateTable {
    /// Creates a new builder-style object to manufacture [`UpdateTableInput`](crate::input::UpdateTableInput)
    pub fn builder() -> crate::input::update_table_input::Builder {
        crate::input::update_table_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for UpdateTable {
    type Output = std::result::Result<crate::output::UpdateTableOutput, crate::error::UpdateTableError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_update_table_error(response)
        } else {
            crate::operation_deser::parse_update_table_response(response)
        }
    }
}

/// Enables or disables Time to Live (TTL) for the specified table
#[derive(std::default::Default, std::clone::Clone, std::fmt::Debug)]
pub struct UpdateTimeToLive {
    _private: (),
}
impl UpdateTimeToLive {
    /// Creates a new builder-style object to manufacture [`UpdateTimeToLiveInput`](crate::input::UpdateTimeToLiveInput)
    pub fn builder() -> crate::input::update_time_to_live_input::Builder {
        crate::input::update_time_to_live_input::Builder::default()
    }
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl smithy_http::response::ParseStrictResponse for UpdateTimeToLive {
    type Output = std::result::Result<crate::output::UpdateTimeToLiveOutput, crate::error::UpdateTimeToLiveError>;
    fn parse(&self, response: &http::Response<bytes::Bytes>) -> Self::Output {
        if !response.status().is_success() {
            crate::operation_deser::parse_update_time_to_live_error(response)
        } else {
            crate::operation_deser::parse_update_time_to_live_response(response)
        }
    }
}
