/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Deserialize,
)]
pub struct GetScreenDataOutput {
    #[serde(rename = "results")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub results:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::ResultSet>>,
    #[serde(rename = "workbookCursor")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub workbook_cursor: std::option::Option<i64>,
    #[serde(rename = "nextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}
impl GetScreenDataOutput {
    /// Creates a new builder-style object to manufacture [`GetScreenDataOutput`](crate::output::GetScreenDataOutput)
    pub fn builder() -> crate::output::get_screen_data_output::Builder {
        crate::output::get_screen_data_output::Builder::default()
    }
}
/// See [`GetScreenDataOutput`](crate::output::GetScreenDataOutput)
pub mod get_screen_data_output {
    /// A builder for [`GetScreenDataOutput`](crate::output::GetScreenDataOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        results:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::ResultSet>>,
        workbook_cursor: std::option::Option<i64>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn results(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::ResultSet>,
        ) -> Self {
            let mut hash_map = self.results.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.results = Some(hash_map);
            self
        }
        pub fn set_results(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::ResultSet>>,
        ) -> Self {
            self.results = inp;
            self
        }
        pub fn workbook_cursor(mut self, inp: i64) -> Self {
            self.workbook_cursor = Some(inp);
            self
        }
        pub fn set_workbook_cursor(mut self, inp: std::option::Option<i64>) -> Self {
            self.workbook_cursor = inp;
            self
        }
        pub fn next_token(mut self, inp: impl Into<std::string::String>) -> Self {
            self.next_token = Some(inp.into());
            self
        }
        pub fn set_next_token(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.next_token = inp;
            self
        }
        /// Consumes the builder and constructs a [`GetScreenDataOutput`](crate::output::GetScreenDataOutput)
        pub fn build(self) -> crate::output::GetScreenDataOutput {
            crate::output::GetScreenDataOutput {
                results: self.results,
                workbook_cursor: self.workbook_cursor,
                next_token: self.next_token,
            }
        }
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Deserialize,
)]
pub struct InvokeScreenAutomationOutput {
    #[serde(rename = "workbookCursor")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub workbook_cursor: std::option::Option<i64>,
}
impl InvokeScreenAutomationOutput {
    /// Creates a new builder-style object to manufacture [`InvokeScreenAutomationOutput`](crate::output::InvokeScreenAutomationOutput)
    pub fn builder() -> crate::output::invoke_screen_automation_output::Builder {
        crate::output::invoke_screen_automation_output::Builder::default()
    }
}
/// See [`InvokeScreenAutomationOutput`](crate::output::InvokeScreenAutomationOutput)
pub mod invoke_screen_automation_output {
    /// A builder for [`InvokeScreenAutomationOutput`](crate::output::InvokeScreenAutomationOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        workbook_cursor: std::option::Option<i64>,
    }
    impl Builder {
        pub fn workbook_cursor(mut self, inp: i64) -> Self {
            self.workbook_cursor = Some(inp);
            self
        }
        pub fn set_workbook_cursor(mut self, inp: std::option::Option<i64>) -> Self {
            self.workbook_cursor = inp;
            self
        }
        /// Consumes the builder and constructs a [`InvokeScreenAutomationOutput`](crate::output::InvokeScreenAutomationOutput)
        pub fn build(self) -> crate::output::InvokeScreenAutomationOutput {
            crate::output::InvokeScreenAutomationOutput {
                workbook_cursor: self.workbook_cursor,
            }
        }
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Deserialize,
)]
pub struct ListTablesOutput {
    #[serde(rename = "tables")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tables: std::option::Option<std::vec::Vec<crate::model::Table>>,
    #[serde(rename = "nextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
    #[serde(rename = "workbookCursor")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub workbook_cursor: std::option::Option<i64>,
}
impl ListTablesOutput {
    /// Creates a new builder-style object to manufacture [`ListTablesOutput`](crate::output::ListTablesOutput)
    pub fn builder() -> crate::output::list_tables_output::Builder {
        crate::output::list_tables_output::Builder::default()
    }
}
/// See [`ListTablesOutput`](crate::output::ListTablesOutput)
pub mod list_tables_output {
    /// A builder for [`ListTablesOutput`](crate::output::ListTablesOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        tables: std::option::Option<std::vec::Vec<crate::model::Table>>,
        next_token: std::option::Option<std::string::String>,
        workbook_cursor: std::option::Option<i64>,
    }
    impl Builder {
        pub fn tables(mut self, inp: impl Into<crate::model::Table>) -> Self {
            let mut v = self.tables.unwrap_or_default();
            v.push(inp.into());
            self.tables = Some(v);
            self
        }
        pub fn set_tables(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::Table>>,
        ) -> Self {
            self.tables = inp;
            self
        }
        pub fn next_token(mut self, inp: impl Into<std::string::String>) -> Self {
            self.next_token = Some(inp.into());
            self
        }
        pub fn set_next_token(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.next_token = inp;
            self
        }
        pub fn workbook_cursor(mut self, inp: i64) -> Self {
            self.workbook_cursor = Some(inp);
            self
        }
        pub fn set_workbook_cursor(mut self, inp: std::option::Option<i64>) -> Self {
            self.workbook_cursor = inp;
            self
        }
        /// Consumes the builder and constructs a [`ListTablesOutput`](crate::output::ListTablesOutput)
        pub fn build(self) -> crate::output::ListTablesOutput {
            crate::output::ListTablesOutput {
                tables: self.tables,
                next_token: self.next_token,
                workbook_cursor: self.workbook_cursor,
            }
        }
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Deserialize,
)]
pub struct ListTableColumnsOutput {
    #[serde(rename = "tableColumns")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub table_columns: std::option::Option<std::vec::Vec<crate::model::TableColumn>>,
    #[serde(rename = "nextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
    #[serde(rename = "workbookCursor")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub workbook_cursor: std::option::Option<i64>,
}
impl ListTableColumnsOutput {
    /// Creates a new builder-style object to manufacture [`ListTableColumnsOutput`](crate::output::ListTableColumnsOutput)
    pub fn builder() -> crate::output::list_table_columns_output::Builder {
        crate::output::list_table_columns_output::Builder::default()
    }
}
/// See [`ListTableColumnsOutput`](crate::output::ListTableColumnsOutput)
pub mod list_table_columns_output {
    /// A builder for [`ListTableColumnsOutput`](crate::output::ListTableColumnsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        table_columns: std::option::Option<std::vec::Vec<crate::model::TableColumn>>,
        next_token: std::option::Option<std::string::String>,
        workbook_cursor: std::option::Option<i64>,
    }
    impl Builder {
        pub fn table_columns(mut self, inp: impl Into<crate::model::TableColumn>) -> Self {
            let mut v = self.table_columns.unwrap_or_default();
            v.push(inp.into());
            self.table_columns = Some(v);
            self
        }
        pub fn set_table_columns(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::TableColumn>>,
        ) -> Self {
            self.table_columns = inp;
            self
        }
        pub fn next_token(mut self, inp: impl Into<std::string::String>) -> Self {
            self.next_token = Some(inp.into());
            self
        }
        pub fn set_next_token(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.next_token = inp;
            self
        }
        pub fn workbook_cursor(mut self, inp: i64) -> Self {
            self.workbook_cursor = Some(inp);
            self
        }
        pub fn set_workbook_cursor(mut self, inp: std::option::Option<i64>) -> Self {
            self.workbook_cursor = inp;
            self
        }
        /// Consumes the builder and constructs a [`ListTableColumnsOutput`](crate::output::ListTableColumnsOutput)
        pub fn build(self) -> crate::output::ListTableColumnsOutput {
            crate::output::ListTableColumnsOutput {
                table_columns: self.table_columns,
                next_token: self.next_token,
                workbook_cursor: self.workbook_cursor,
            }
        }
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Deserialize,
)]
pub struct ListTableRowsOutput {
    #[serde(rename = "columnIds")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub column_ids: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "rows")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub rows: std::option::Option<std::vec::Vec<crate::model::TableRow>>,
    #[serde(rename = "rowIdsNotFound")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub row_ids_not_found: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "nextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
    #[serde(rename = "workbookCursor")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub workbook_cursor: std::option::Option<i64>,
}
impl ListTableRowsOutput {
    /// Creates a new builder-style object to manufacture [`ListTableRowsOutput`](crate::output::ListTableRowsOutput)
    pub fn builder() -> crate::output::list_table_rows_output::Builder {
        crate::output::list_table_rows_output::Builder::default()
    }
}
/// See [`ListTableRowsOutput`](crate::output::ListTableRowsOutput)
pub mod list_table_rows_output {
    /// A builder for [`ListTableRowsOutput`](crate::output::ListTableRowsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        column_ids: std::option::Option<std::vec::Vec<std::string::String>>,
        rows: std::option::Option<std::vec::Vec<crate::model::TableRow>>,
        row_ids_not_found: std::option::Option<std::vec::Vec<std::string::String>>,
        next_token: std::option::Option<std::string::String>,
        workbook_cursor: std::option::Option<i64>,
    }
    impl Builder {
        pub fn column_ids(mut self, inp: impl Into<std::string::String>) -> Self {
            let mut v = self.column_ids.unwrap_or_default();
            v.push(inp.into());
            self.column_ids = Some(v);
            self
        }
        pub fn set_column_ids(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.column_ids = inp;
            self
        }
        pub fn rows(mut self, inp: impl Into<crate::model::TableRow>) -> Self {
            let mut v = self.rows.unwrap_or_default();
            v.push(inp.into());
            self.rows = Some(v);
            self
        }
        pub fn set_rows(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::TableRow>>,
        ) -> Self {
            self.rows = inp;
            self
        }
        pub fn row_ids_not_found(mut self, inp: impl Into<std::string::String>) -> Self {
            let mut v = self.row_ids_not_found.unwrap_or_default();
            v.push(inp.into());
            self.row_ids_not_found = Some(v);
            self
        }
        pub fn set_row_ids_not_found(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.row_ids_not_found = inp;
            self
        }
        pub fn next_token(mut self, inp: impl Into<std::string::String>) -> Self {
            self.next_token = Some(inp.into());
            self
        }
        pub fn set_next_token(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.next_token = inp;
            self
        }
        pub fn workbook_cursor(mut self, inp: i64) -> Self {
            self.workbook_cursor = Some(inp);
            self
        }
        pub fn set_workbook_cursor(mut self, inp: std::option::Option<i64>) -> Self {
            self.workbook_cursor = inp;
            self
        }
        /// Consumes the builder and constructs a [`ListTableRowsOutput`](crate::output::ListTableRowsOutput)
        pub fn build(self) -> crate::output::ListTableRowsOutput {
            crate::output::ListTableRowsOutput {
                column_ids: self.column_ids,
                rows: self.rows,
                row_ids_not_found: self.row_ids_not_found,
                next_token: self.next_token,
                workbook_cursor: self.workbook_cursor,
            }
        }
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Deserialize,
)]
pub struct QueryTableRowsOutput {
    #[serde(rename = "columnIds")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub column_ids: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "rows")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub rows: std::option::Option<std::vec::Vec<crate::model::TableRow>>,
    #[serde(rename = "nextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
    #[serde(rename = "workbookCursor")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub workbook_cursor: std::option::Option<i64>,
}
impl QueryTableRowsOutput {
    /// Creates a new builder-style object to manufacture [`QueryTableRowsOutput`](crate::output::QueryTableRowsOutput)
    pub fn builder() -> crate::output::query_table_rows_output::Builder {
        crate::output::query_table_rows_output::Builder::default()
    }
}
/// See [`QueryTableRowsOutput`](crate::output::QueryTableRowsOutput)
pub mod query_table_rows_output {
    /// A builder for [`QueryTableRowsOutput`](crate::output::QueryTableRowsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        column_ids: std::option::Option<std::vec::Vec<std::string::String>>,
        rows: std::option::Option<std::vec::Vec<crate::model::TableRow>>,
        next_token: std::option::Option<std::string::String>,
        workbook_cursor: std::option::Option<i64>,
    }
    impl Builder {
        pub fn column_ids(mut self, inp: impl Into<std::string::String>) -> Self {
            let mut v = self.column_ids.unwrap_or_default();
            v.push(inp.into());
            self.column_ids = Some(v);
            self
        }
        pub fn set_column_ids(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.column_ids = inp;
            self
        }
        pub fn rows(mut self, inp: impl Into<crate::model::TableRow>) -> Self {
            let mut v = self.rows.unwrap_or_default();
            v.push(inp.into());
            self.rows = Some(v);
            self
        }
        pub fn set_rows(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::TableRow>>,
        ) -> Self {
            self.rows = inp;
            self
        }
        pub fn next_token(mut self, inp: impl Into<std::string::String>) -> Self {
            self.next_token = Some(inp.into());
            self
        }
        pub fn set_next_token(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.next_token = inp;
            self
        }
        pub fn workbook_cursor(mut self, inp: i64) -> Self {
            self.workbook_cursor = Some(inp);
            self
        }
        pub fn set_workbook_cursor(mut self, inp: std::option::Option<i64>) -> Self {
            self.workbook_cursor = inp;
            self
        }
        /// Consumes the builder and constructs a [`QueryTableRowsOutput`](crate::output::QueryTableRowsOutput)
        pub fn build(self) -> crate::output::QueryTableRowsOutput {
            crate::output::QueryTableRowsOutput {
                column_ids: self.column_ids,
                rows: self.rows,
                next_token: self.next_token,
                workbook_cursor: self.workbook_cursor,
            }
        }
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Deserialize,
)]
pub struct BatchCreateTableRowsOutput {
    #[serde(rename = "workbookCursor")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub workbook_cursor: std::option::Option<i64>,
    #[serde(rename = "createdRows")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub created_rows:
        std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    #[serde(rename = "failedBatchItems")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub failed_batch_items: std::option::Option<std::vec::Vec<crate::model::FailedBatchItem>>,
}
impl BatchCreateTableRowsOutput {
    /// Creates a new builder-style object to manufacture [`BatchCreateTableRowsOutput`](crate::output::BatchCreateTableRowsOutput)
    pub fn builder() -> crate::output::batch_create_table_rows_output::Builder {
        crate::output::batch_create_table_rows_output::Builder::default()
    }
}
/// See [`BatchCreateTableRowsOutput`](crate::output::BatchCreateTableRowsOutput)
pub mod batch_create_table_rows_output {
    /// A builder for [`BatchCreateTableRowsOutput`](crate::output::BatchCreateTableRowsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        workbook_cursor: std::option::Option<i64>,
        created_rows:
            std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        failed_batch_items: std::option::Option<std::vec::Vec<crate::model::FailedBatchItem>>,
    }
    impl Builder {
        pub fn workbook_cursor(mut self, inp: i64) -> Self {
            self.workbook_cursor = Some(inp);
            self
        }
        pub fn set_workbook_cursor(mut self, inp: std::option::Option<i64>) -> Self {
            self.workbook_cursor = inp;
            self
        }
        pub fn created_rows(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.created_rows.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.created_rows = Some(hash_map);
            self
        }
        pub fn set_created_rows(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        ) -> Self {
            self.created_rows = inp;
            self
        }
        pub fn failed_batch_items(mut self, inp: impl Into<crate::model::FailedBatchItem>) -> Self {
            let mut v = self.failed_batch_items.unwrap_or_default();
            v.push(inp.into());
            self.failed_batch_items = Some(v);
            self
        }
        pub fn set_failed_batch_items(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::FailedBatchItem>>,
        ) -> Self {
            self.failed_batch_items = inp;
            self
        }
        /// Consumes the builder and constructs a [`BatchCreateTableRowsOutput`](crate::output::BatchCreateTableRowsOutput)
        pub fn build(self) -> crate::output::BatchCreateTableRowsOutput {
            crate::output::BatchCreateTableRowsOutput {
                workbook_cursor: self.workbook_cursor,
                created_rows: self.created_rows,
                failed_batch_items: self.failed_batch_items,
            }
        }
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Deserialize,
)]
pub struct BatchDeleteTableRowsOutput {
    #[serde(rename = "workbookCursor")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub workbook_cursor: std::option::Option<i64>,
    #[serde(rename = "failedBatchItems")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub failed_batch_items: std::option::Option<std::vec::Vec<crate::model::FailedBatchItem>>,
}
impl BatchDeleteTableRowsOutput {
    /// Creates a new builder-style object to manufacture [`BatchDeleteTableRowsOutput`](crate::output::BatchDeleteTableRowsOutput)
    pub fn builder() -> crate::output::batch_delete_table_rows_output::Builder {
        crate::output::batch_delete_table_rows_output::Builder::default()
    }
}
/// See [`BatchDeleteTableRowsOutput`](crate::output::BatchDeleteTableRowsOutput)
pub mod batch_delete_table_rows_output {
    /// A builder for [`BatchDeleteTableRowsOutput`](crate::output::BatchDeleteTableRowsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        workbook_cursor: std::option::Option<i64>,
        failed_batch_items: std::option::Option<std::vec::Vec<crate::model::FailedBatchItem>>,
    }
    impl Builder {
        pub fn workbook_cursor(mut self, inp: i64) -> Self {
            self.workbook_cursor = Some(inp);
            self
        }
        pub fn set_workbook_cursor(mut self, inp: std::option::Option<i64>) -> Self {
            self.workbook_cursor = inp;
            self
        }
        pub fn failed_batch_items(mut self, inp: impl Into<crate::model::FailedBatchItem>) -> Self {
            let mut v = self.failed_batch_items.unwrap_or_default();
            v.push(inp.into());
            self.failed_batch_items = Some(v);
            self
        }
        pub fn set_failed_batch_items(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::FailedBatchItem>>,
        ) -> Self {
            self.failed_batch_items = inp;
            self
        }
        /// Consumes the builder and constructs a [`BatchDeleteTableRowsOutput`](crate::output::BatchDeleteTableRowsOutput)
        pub fn build(self) -> crate::output::BatchDeleteTableRowsOutput {
            crate::output::BatchDeleteTableRowsOutput {
                workbook_cursor: self.workbook_cursor,
                failed_batch_items: self.failed_batch_items,
            }
        }
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Deserialize,
)]
pub struct BatchUpdateTableRowsOutput {
    #[serde(rename = "workbookCursor")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub workbook_cursor: std::option::Option<i64>,
    #[serde(rename = "failedBatchItems")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub failed_batch_items: std::option::Option<std::vec::Vec<crate::model::FailedBatchItem>>,
}
impl BatchUpdateTableRowsOutput {
    /// Creates a new builder-style object to manufacture [`BatchUpdateTableRowsOutput`](crate::output::BatchUpdateTableRowsOutput)
    pub fn builder() -> crate::output::batch_update_table_rows_output::Builder {
        crate::output::batch_update_table_rows_output::Builder::default()
    }
}
/// See [`BatchUpdateTableRowsOutput`](crate::output::BatchUpdateTableRowsOutput)
pub mod batch_update_table_rows_output {
    /// A builder for [`BatchUpdateTableRowsOutput`](crate::output::BatchUpdateTableRowsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        workbook_cursor: std::option::Option<i64>,
        failed_batch_items: std::option::Option<std::vec::Vec<crate::model::FailedBatchItem>>,
    }
    impl Builder {
        pub fn workbook_cursor(mut self, inp: i64) -> Self {
            self.workbook_cursor = Some(inp);
            self
        }
        pub fn set_workbook_cursor(mut self, inp: std::option::Option<i64>) -> Self {
            self.workbook_cursor = inp;
            self
        }
        pub fn failed_batch_items(mut self, inp: impl Into<crate::model::FailedBatchItem>) -> Self {
            let mut v = self.failed_batch_items.unwrap_or_default();
            v.push(inp.into());
            self.failed_batch_items = Some(v);
            self
        }
        pub fn set_failed_batch_items(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::FailedBatchItem>>,
        ) -> Self {
            self.failed_batch_items = inp;
            self
        }
        /// Consumes the builder and constructs a [`BatchUpdateTableRowsOutput`](crate::output::BatchUpdateTableRowsOutput)
        pub fn build(self) -> crate::output::BatchUpdateTableRowsOutput {
            crate::output::BatchUpdateTableRowsOutput {
                workbook_cursor: self.workbook_cursor,
                failed_batch_items: self.failed_batch_items,
            }
        }
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Deserialize,
)]
pub struct StartTableDataImportJobOutput {
    #[serde(rename = "jobId")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub job_id: std::option::Option<std::string::String>,
    #[serde(rename = "jobStatus")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub job_status: std::option::Option<crate::model::TableDataImportJobStatus>,
}
impl StartTableDataImportJobOutput {
    /// Creates a new builder-style object to manufacture [`StartTableDataImportJobOutput`](crate::output::StartTableDataImportJobOutput)
    pub fn builder() -> crate::output::start_table_data_import_job_output::Builder {
        crate::output::start_table_data_import_job_output::Builder::default()
    }
}
/// See [`StartTableDataImportJobOutput`](crate::output::StartTableDataImportJobOutput)
pub mod start_table_data_import_job_output {
    /// A builder for [`StartTableDataImportJobOutput`](crate::output::StartTableDataImportJobOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        job_id: std::option::Option<std::string::String>,
        job_status: std::option::Option<crate::model::TableDataImportJobStatus>,
    }
    impl Builder {
        pub fn job_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.job_id = Some(inp.into());
            self
        }
        pub fn set_job_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.job_id = inp;
            self
        }
        pub fn job_status(mut self, inp: crate::model::TableDataImportJobStatus) -> Self {
            self.job_status = Some(inp);
            self
        }
        pub fn set_job_status(
            mut self,
            inp: std::option::Option<crate::model::TableDataImportJobStatus>,
        ) -> Self {
            self.job_status = inp;
            self
        }
        /// Consumes the builder and constructs a [`StartTableDataImportJobOutput`](crate::output::StartTableDataImportJobOutput)
        pub fn build(self) -> crate::output::StartTableDataImportJobOutput {
            crate::output::StartTableDataImportJobOutput {
                job_id: self.job_id,
                job_status: self.job_status,
            }
        }
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Deserialize,
)]
pub struct DescribeTableDataImportJobOutput {
    #[serde(rename = "jobStatus")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub job_status: std::option::Option<crate::model::TableDataImportJobStatus>,
    #[serde(rename = "message")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub message: std::option::Option<std::string::String>,
    #[serde(rename = "jobMetadata")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub job_metadata: std::option::Option<crate::model::TableDataImportJobMetadata>,
}
impl DescribeTableDataImportJobOutput {
    /// Creates a new builder-style object to manufacture [`DescribeTableDataImportJobOutput`](crate::output::DescribeTableDataImportJobOutput)
    pub fn builder() -> crate::output::describe_table_data_import_job_output::Builder {
        crate::output::describe_table_data_import_job_output::Builder::default()
    }
}
/// See [`DescribeTableDataImportJobOutput`](crate::output::DescribeTableDataImportJobOutput)
pub mod describe_table_data_import_job_output {
    /// A builder for [`DescribeTableDataImportJobOutput`](crate::output::DescribeTableDataImportJobOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        job_status: std::option::Option<crate::model::TableDataImportJobStatus>,
        message: std::option::Option<std::string::String>,
        job_metadata: std::option::Option<crate::model::TableDataImportJobMetadata>,
    }
    impl Builder {
        pub fn job_status(mut self, inp: crate::model::TableDataImportJobStatus) -> Self {
            self.job_status = Some(inp);
            self
        }
        pub fn set_job_status(
            mut self,
            inp: std::option::Option<crate::model::TableDataImportJobStatus>,
        ) -> Self {
            self.job_status = inp;
            self
        }
        pub fn message(mut self, inp: impl Into<std::string::String>) -> Self {
            self.message = Some(inp.into());
            self
        }
        pub fn set_message(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.message = inp;
            self
        }
        pub fn job_metadata(mut self, inp: crate::model::TableDataImportJobMetadata) -> Self {
            self.job_metadata = Some(inp);
            self
        }
        pub fn set_job_metadata(
            mut self,
            inp: std::option::Option<crate::model::TableDataImportJobMetadata>,
        ) -> Self {
            self.job_metadata = inp;
            self
        }
        /// Consumes the builder and constructs a [`DescribeTableDataImportJobOutput`](crate::output::DescribeTableDataImportJobOutput)
        pub fn build(self) -> crate::output::DescribeTableDataImportJobOutput {
            crate::output::DescribeTableDataImportJobOutput {
                job_status: self.job_status,
                message: self.message,
                job_metadata: self.job_metadata,
            }
        }
    }
}
