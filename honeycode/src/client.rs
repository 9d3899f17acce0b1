/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#[derive(std::fmt::Debug)]
pub(crate) struct Handle {
    client: aws_hyper::Client<aws_hyper::conn::Standard>,
    conf: crate::Config,
}

/// Client for Amazon Honeycode
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

    /// Loads the data for a screen in a Honeycode app
    pub fn get_screen_data(&self) -> fluent_builders::GetScreenData {
        fluent_builders::GetScreenData::new(self.handle.clone())
    }

    /// Invokes an action defined on a screen of a Honeycode app
    pub fn invoke_screen_automation(&self) -> fluent_builders::InvokeScreenAutomation {
        fluent_builders::InvokeScreenAutomation::new(self.handle.clone())
    }

    /// Lists the tables in a workbook
    pub fn list_tables(&self) -> fluent_builders::ListTables {
        fluent_builders::ListTables::new(self.handle.clone())
    }

    /// Lists the columns in a table
    pub fn list_table_columns(&self) -> fluent_builders::ListTableColumns {
        fluent_builders::ListTableColumns::new(self.handle.clone())
    }

    /// Lists the rows in a table
    pub fn list_table_rows(&self) -> fluent_builders::ListTableRows {
        fluent_builders::ListTableRows::new(self.handle.clone())
    }

    /// Queries the rows of a table that match a filter formula
    pub fn query_table_rows(&self) -> fluent_builders::QueryTableRows {
        fluent_builders::QueryTableRows::new(self.handle.clone())
    }

    /// Adds one or more new rows to a table
    pub fn batch_create_table_rows(&self) -> fluent_builders::BatchCreateTableRows {
        fluent_builders::BatchCreateTableRows::new(self.handle.clone())
    }

    /// Deletes one or more rows from a table
    pub fn batch_delete_table_rows(&self) -> fluent_builders::BatchDeleteTableRows {
        fluent_builders::BatchDeleteTableRows::new(self.handle.clone())
    }

    /// Updates one or more rows in a table
    pub fn batch_update_table_rows(&self) -> fluent_builders::BatchUpdateTableRows {
        fluent_builders::BatchUpdateTableRows::new(self.handle.clone())
    }

    /// Starts an asynchronous import of data into a table
    pub fn start_table_data_import_job(&self) -> fluent_builders::StartTableDataImportJob {
        fluent_builders::StartTableDataImportJob::new(self.handle.clone())
    }

    /// Returns the status of a table data import job
    pub fn describe_table_data_import_job(&self) -> fluent_builders::DescribeTableDataImportJob {
        fluent_builders::DescribeTableDataImportJob::new(self.handle.clone())
    }
}

pub mod fluent_builders {
    #[derive(std::fmt::Debug)]
    pub struct GetScreenData {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::get_screen_data_input::Builder,
    }
    impl GetScreenData {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> (super::Client, crate::input::get_screen_data_input::Builder) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::GetScreenDataOutput,
            aws_hyper::SdkError<crate::error::GetScreenDataError>,
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
        pub fn workbook_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.workbook_id(inp);
            self
        }
        pub fn set_workbook_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_workbook_id(inp);
            self
        }
        pub fn app_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.app_id(inp);
            self
        }
        pub fn set_app_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_app_id(inp);
            self
        }
        pub fn screen_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.screen_id(inp);
            self
        }
        pub fn set_screen_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_screen_id(inp);
            self
        }
        pub fn variables(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::VariableValue>,
        ) -> Self {
            self.inner = self.inner.variables(k, v);
            self
        }
        pub fn set_variables(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::VariableValue>>,
        ) -> Self {
            self.inner = self.inner.set_variables(inp);
            self
        }
        pub fn max_results(mut self, inp: i32) -> Self {
            self.inner = self.inner.max_results(inp);
            self
        }
        pub fn set_max_results(mut self, inp: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(inp);
            self
        }
        pub fn next_token(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.next_token(inp);
            self
        }
        pub fn set_next_token(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_next_token(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct InvokeScreenAutomation {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::invoke_screen_automation_input::Builder,
    }
    impl InvokeScreenAutomation {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(
            self) -> (super::Client, crate::input::invoke_screen_automation_input::Builder,
        ) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::InvokeScreenAutomationOutput,
            aws_hyper::SdkError<crate::error::InvokeScreenAutomationError>,
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
        pub fn workbook_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.workbook_id(inp);
            self
        }
        pub fn set_workbook_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_workbook_id(inp);
            self
        }
        pub fn app_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.app_id(inp);
            self
        }
        pub fn set_app_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_app_id(inp);
            self
        }
        pub fn screen_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.screen_id(inp);
            self
        }
        pub fn set_screen_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_screen_id(inp);
            self
        }
        pub fn screen_automation_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.screen_automation_id(inp);
            self
        }
        pub fn set_screen_automation_id(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.inner = self.inner.set_screen_automation_id(inp);
            self
        }
        pub fn variables(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::VariableValue>,
        ) -> Self {
            self.inner = self.inner.variables(k, v);
            self
        }
        pub fn set_variables(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::VariableValue>>,
        ) -> Self {
            self.inner = self.inner.set_variables(inp);
            self
        }
        pub fn row_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.row_id(inp);
            self
        }
        pub fn set_row_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_row_id(inp);
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
        pub fn workbook_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.workbook_id(inp);
            self
        }
        pub fn set_workbook_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_workbook_id(inp);
            self
        }
        pub fn max_results(mut self, inp: i32) -> Self {
            self.inner = self.inner.max_results(inp);
            self
        }
        pub fn set_max_results(mut self, inp: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(inp);
            self
        }
        pub fn next_token(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.next_token(inp);
            self
        }
        pub fn set_next_token(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_next_token(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct ListTableColumns {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::list_table_columns_input::Builder,
    }
    impl ListTableColumns {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(
            self) -> (super::Client, crate::input::list_table_columns_input::Builder,
        ) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListTableColumnsOutput,
            aws_hyper::SdkError<crate::error::ListTableColumnsError>,
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
        pub fn workbook_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.workbook_id(inp);
            self
        }
        pub fn set_workbook_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_workbook_id(inp);
            self
        }
        pub fn table_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.table_id(inp);
            self
        }
        pub fn set_table_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_table_id(inp);
            self
        }
        pub fn next_token(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.next_token(inp);
            self
        }
        pub fn set_next_token(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_next_token(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct ListTableRows {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::list_table_rows_input::Builder,
    }
    impl ListTableRows {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> (super::Client, crate::input::list_table_rows_input::Builder) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListTableRowsOutput,
            aws_hyper::SdkError<crate::error::ListTableRowsError>,
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
        pub fn workbook_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.workbook_id(inp);
            self
        }
        pub fn set_workbook_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_workbook_id(inp);
            self
        }
        pub fn table_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.table_id(inp);
            self
        }
        pub fn set_table_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_table_id(inp);
            self
        }
        pub fn row_ids(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.row_ids(inp);
            self
        }
        pub fn set_row_ids(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.inner = self.inner.set_row_ids(inp);
            self
        }
        pub fn max_results(mut self, inp: i32) -> Self {
            self.inner = self.inner.max_results(inp);
            self
        }
        pub fn set_max_results(mut self, inp: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(inp);
            self
        }
        pub fn next_token(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.next_token(inp);
            self
        }
        pub fn set_next_token(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_next_token(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct QueryTableRows {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::query_table_rows_input::Builder,
    }
    impl QueryTableRows {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> (super::Client, crate::input::query_table_rows_input::Builder) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::QueryTableRowsOutput,
            aws_hyper::SdkError<crate::error::QueryTableRowsError>,
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
        pub fn workbook_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.workbook_id(inp);
            self
        }
        pub fn set_workbook_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_workbook_id(inp);
            self
        }
        pub fn table_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.table_id(inp);
            self
        }
        pub fn set_table_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_table_id(inp);
            self
        }
        pub fn filter_formula(mut self, inp: crate::model::Filter) -> Self {
            self.inner = self.inner.filter_formula(inp);
            self
        }
        pub fn set_filter_formula(
            mut self,
            inp: std::option::Option<crate::model::Filter>,
        ) -> Self {
            self.inner = self.inner.set_filter_formula(inp);
            self
        }
        pub fn max_results(mut self, inp: i32) -> Self {
            self.inner = self.inner.max_results(inp);
            self
        }
        pub fn set_max_results(mut self, inp: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(inp);
            self
        }
        pub fn next_token(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.next_token(inp);
            self
        }
        pub fn set_next_token(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_next_token(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct BatchCreateTableRows {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::batch_create_table_rows_input::Builder,
    }
    impl BatchCreateTableRows {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(
            self) -> (super::Client, crate::input::batch_create_table_rows_input::Builder,
        ) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::BatchCreateTableRowsOutput,
            aws_hyper::SdkError<crate::error::BatchCreateTableRowsError>,
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
        pub fn workbook_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.workbook_id(inp);
            self
        }
        pub fn set_workbook_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_workbook_id(inp);
            self
        }
        pub fn table_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.table_id(inp);
            self
        }
        pub fn set_table_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_table_id(inp);
            self
        }
        pub fn rows_to_create(mut self, inp: impl Into<crate::model::CreateRowData>) -> Self {
            self.inner = self.inner.rows_to_create(inp);
            self
        }
        pub fn set_rows_to_create(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::CreateRowData>>,
        ) -> Self {
            self.inner = self.inner.set_rows_to_create(inp);
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
    pub struct BatchDeleteTableRows {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::batch_delete_table_rows_input::Builder,
    }
    impl BatchDeleteTableRows {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(
            self) -> (super::Client, crate::input::batch_delete_table_rows_input::Builder,
        ) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::BatchDeleteTableRowsOutput,
            aws_hyper::SdkError<crate::error::BatchDeleteTableRowsError>,
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
        pub fn workbook_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.workbook_id(inp);
            self
        }
        pub fn set_workbook_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_workbook_id(inp);
            self
        }
        pub fn table_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.table_id(inp);
            self
        }
        pub fn set_table_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_table_id(inp);
            self
        }
        pub fn row_ids(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.row_ids(inp);
            self
        }
        pub fn set_row_ids(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.inner = self.inner.set_row_ids(inp);
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
    pub struct BatchUpdateTableRows {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::batch_update_table_rows_input::Builder,
    }
    impl BatchUpdateTableRows {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(
            self) -> (super::Client, crate::input::batch_update_table_rows_input::Builder,
        ) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::BatchUpdateTableRowsOutput,
            aws_hyper::SdkError<crate::error::BatchUpdateTableRowsError>,
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
        pub fn workbook_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.workbook_id(inp);
            self
        }
        pub fn set_workbook_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_workbook_id(inp);
            self
        }
        pub fn table_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.table_id(inp);
            self
        }
        pub fn set_table_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_table_id(inp);
            self
        }
        pub fn rows_to_update(mut self, inp: impl Into<crate::model::UpdateRowData>) -> Self {
            self.inner = self.inner.rows_to_update(inp);
            self
        }
        pub fn set_rows_to_update(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::UpdateRowData>>,
        ) -> Self {
            self.inner = self.inner.set_rows_to_update(inp);
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
    pub struct StartTableDataImportJob {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::start_table_data_import_job_input::Builder,
    }
    impl StartTableDataImportJob {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(
            self) -> (super::Client, crate::input::start_table_data_import_job_input::Builder,
        ) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::StartTableDataImportJobOutput,
            aws_hyper::SdkError<crate::error::StartTableDataImportJobError>,
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
        pub fn workbook_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.workbook_id(inp);
            self
        }
        pub fn set_workbook_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_workbook_id(inp);
            self
        }
        pub fn destination_table_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.destination_table_id(inp);
            self
        }
        pub fn set_destination_table_id(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.inner = self.inner.set_destination_table_id(inp);
            self
        }
        pub fn data_source(mut self, inp: crate::model::ImportDataSource) -> Self {
            self.inner = self.inner.data_source(inp);
            self
        }
        pub fn set_data_source(
            mut self,
            inp: std::option::Option<crate::model::ImportDataSource>,
        ) -> Self {
            self.inner = self.inner.set_data_source(inp);
            self
        }
        pub fn data_format(mut self, inp: crate::model::ImportSourceDataFormat) -> Self {
            self.inner = self.inner.data_format(inp);
            self
        }
        pub fn set_data_format(
            mut self,
            inp: std::option::Option<crate::model::ImportSourceDataFormat>,
        ) -> Self {
            self.inner = self.inner.set_data_format(inp);
            self
        }
        pub fn import_options(mut self, inp: crate::model::ImportOptions) -> Self {
            self.inner = self.inner.import_options(inp);
            self
        }
        pub fn set_import_options(
            mut self,
            inp: std::option::Option<crate::model::ImportOptions>,
        ) -> Self {
            self.inner = self.inner.set_import_options(inp);
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
    pub struct DescribeTableDataImportJob {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_table_data_import_job_input::Builder,
    }
    impl DescribeTableDataImportJob {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(
            self) -> (super::Client, crate::input::describe_table_data_import_job_input::Builder,
        ) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeTableDataImportJobOutput,
            aws_hyper::SdkError<crate::error::DescribeTableDataImportJobError>,
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
        pub fn workbook_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.workbook_id(inp);
            self
        }
        pub fn set_workbook_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_workbook_id(inp);
            self
        }
        pub fn table_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.table_id(inp);
            self
        }
        pub fn set_table_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_table_id(inp);
            self
        }
        pub fn job_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.job_id(inp);
            self
        }
        pub fn set_job_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_job_id(inp);
            self
        }
    }
}
