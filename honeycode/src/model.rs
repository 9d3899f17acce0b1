/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum Format {
    Auto,
    Number,
    Currency,
    Date,
    Time,
    DateTime,
    Percentage,
    Text,
    Accounting,
    Contact,
    Rowlink,
    /// A value the service returned that this version of the client does not know about
    Unknown(String),
}
impl std::convert::From<&str> for Format {
    fn from(s: &str) -> Self {
        match s {
            "AUTO" => Format::Auto,
            "NUMBER" => Format::Number,
            "CURRENCY" => Format::Currency,
            "DATE" => Format::Date,
            "TIME" => Format::Time,
            "DATE_TIME" => Format::DateTime,
            "PERCENTAGE" => Format::Percentage,
            "TEXT" => Format::Text,
            "ACCOUNTING" => Format::Accounting,
            "CONTACT" => Format::Contact,
            "ROWLINK" => Format::Rowlink,
            other => Format::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for Format {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Format::from(s))
    }
}
impl Format {
    pub fn as_str(&self) -> &str {
        match self {
            Format::Auto => "AUTO",
            Format::Number => "NUMBER",
            Format::Currency => "CURRENCY",
            Format::Date => "DATE",
            Format::Time => "TIME",
            Format::DateTime => "DATE_TIME",
            Format::Percentage => "PERCENTAGE",
            Format::Text => "TEXT",
            Format::Accounting => "ACCOUNTING",
            Format::Contact => "CONTACT",
            Format::Rowlink => "ROWLINK",
            Format::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this version of the client
    pub fn values() -> &'static [&'static str] {
        &["AUTO", "NUMBER", "CURRENCY", "DATE", "TIME", "DATE_TIME", "PERCENTAGE", "TEXT", "ACCOUNTING", "CONTACT", "ROWLINK"]
    }
}
impl AsRef<str> for Format {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for Format {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for Format {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Format::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum ImportSourceDataFormat {
    DelimitedText,
    /// A value the service returned that this version of the client does not know about
    Unknown(String),
}
impl std::convert::From<&str> for ImportSourceDataFormat {
    fn from(s: &str) -> Self {
        match s {
            "DELIMITED_TEXT" => ImportSourceDataFormat::DelimitedText,
            other => ImportSourceDataFormat::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ImportSourceDataFormat {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ImportSourceDataFormat::from(s))
    }
}
impl ImportSourceDataFormat {
    pub fn as_str(&self) -> &str {
        match self {
            ImportSourceDataFormat::DelimitedText => "DELIMITED_TEXT",
            ImportSourceDataFormat::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this version of the client
    pub fn values() -> &'static [&'static str] {
        &["DELIMITED_TEXT"]
    }
}
impl AsRef<str> for ImportSourceDataFormat {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for ImportSourceDataFormat {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for ImportSourceDataFormat {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(ImportSourceDataFormat::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum ImportDataCharacterEncoding {
    Utf8,
    UsAscii,
    Iso88591,
    Utf16Be,
    Utf16Le,
    Utf16,
    /// A value the service returned that this version of the client does not know about
    Unknown(String),
}
impl std::convert::From<&str> for ImportDataCharacterEncoding {
    fn from(s: &str) -> Self {
        match s {
            "UTF-8" => ImportDataCharacterEncoding::Utf8,
            "US-ASCII" => ImportDataCharacterEncoding::UsAscii,
            "ISO-8859-1" => ImportDataCharacterEncoding::Iso88591,
            "UTF-16BE" => ImportDataCharacterEncoding::Utf16Be,
            "UTF-16LE" => ImportDataCharacterEncoding::Utf16Le,
            "UTF-16" => ImportDataCharacterEncoding::Utf16,
            other => ImportDataCharacterEncoding::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ImportDataCharacterEncoding {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ImportDataCharacterEncoding::from(s))
    }
}
impl ImportDataCharacterEncoding {
    pub fn as_str(&self) -> &str {
        match self {
            ImportDataCharacterEncoding::Utf8 => "UTF-8",
            ImportDataCharacterEncoding::UsAscii => "US-ASCII",
            ImportDataCharacterEncoding::Iso88591 => "ISO-8859-1",
            ImportDataCharacterEncoding::Utf16Be => "UTF-16BE",
            ImportDataCharacterEncoding::Utf16Le => "UTF-16LE",
            ImportDataCharacterEncoding::Utf16 => "UTF-16",
            ImportDataCharacterEncoding::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this version of the client
    pub fn values() -> &'static [&'static str] {
        &["UTF-8", "US-ASCII", "ISO-8859-1", "UTF-16BE", "UTF-16LE", "UTF-16"]
    }
}
impl AsRef<str> for ImportDataCharacterEncoding {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for ImportDataCharacterEncoding {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for ImportDataCharacterEncoding {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(ImportDataCharacterEncoding::from(data.as_str()))
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum TableDataImportJobStatus {
    Submitted,
    InProgress,
    Completed,
    Failed,
    /// A value the service returned that this version of the client does not know about
    Unknown(String),
}
impl std::convert::From<&str> for TableDataImportJobStatus {
    fn from(s: &str) -> Self {
        match s {
            "SUBMITTED" => TableDataImportJobStatus::Submitted,
            "IN_PROGRESS" => TableDataImportJobStatus::InProgress,
            "COMPLETED" => TableDataImportJobStatus::Completed,
            "FAILED" => TableDataImportJobStatus::Failed,
            other => TableDataImportJobStatus::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for TableDataImportJobStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(TableDataImportJobStatus::from(s))
    }
}
impl TableDataImportJobStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TableDataImportJobStatus::Submitted => "SUBMITTED",
            TableDataImportJobStatus::InProgress => "IN_PROGRESS",
            TableDataImportJobStatus::Completed => "COMPLETED",
            TableDataImportJobStatus::Failed => "FAILED",
            TableDataImportJobStatus::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this version of the client
    pub fn values() -> &'static [&'static str] {
        &["SUBMITTED", "IN_PROGRESS", "COMPLETED", "FAILED"]
    }
}
impl AsRef<str> for TableDataImportJobStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for TableDataImportJobStatus {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for TableDataImportJobStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(TableDataImportJobStatus::from(data.as_str()))
    }
}

/// The input variables to the app to be used by the InvokeScreenAutomation action request
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct VariableValue {
    #[serde(rename = "rawValue")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub raw_value: std::option::Option<std::string::String>,
}
impl VariableValue {
    /// Creates a new builder-style object to manufacture [`VariableValue`](crate::model::VariableValue)
    pub fn builder() -> crate::model::variable_value::Builder {
        crate::model::variable_value::Builder::default()
    }
}
/// See [`VariableValue`](crate::model::VariableValue)
pub mod variable_value {
    /// A builder for [`VariableValue`](crate::model::VariableValue)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        raw_value: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn raw_value(mut self, inp: impl Into<std::string::String>) -> Self {
            self.raw_value = Some(inp.into());
            self
        }
        pub fn set_raw_value(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.raw_value = inp;
            self
        }
        /// Consumes the builder and constructs a [`VariableValue`](crate::model::VariableValue)
        pub fn build(self) -> crate::model::VariableValue {
            crate::model::VariableValue {
                raw_value: self.raw_value,
            }
        }
    }
}

/// The data in a particular data cell defined on the screen
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct DataItem {
    #[serde(rename = "overrideFormat")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub override_format: std::option::Option<crate::model::Format>,
    #[serde(rename = "rawValue")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub raw_value: std::option::Option<std::string::String>,
    #[serde(rename = "formattedValue")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub formatted_value: std::option::Option<std::string::String>,
}
impl DataItem {
    /// Creates a new builder-style object to manufacture [`DataItem`](crate::model::DataItem)
    pub fn builder() -> crate::model::data_item::Builder {
        crate::model::data_item::Builder::default()
    }
}
/// See [`DataItem`](crate::model::DataItem)
pub mod data_item {
    /// A builder for [`DataItem`](crate::model::DataItem)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        override_format: std::option::Option<crate::model::Format>,
        raw_value: std::option::Option<std::string::String>,
        formatted_value: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn override_format(mut self, inp: crate::model::Format) -> Self {
            self.override_format = Some(inp);
            self
        }
        pub fn set_override_format(
            mut self,
            inp: std::option::Option<crate::model::Format>,
        ) -> Self {
            self.override_format = inp;
            self
        }
        pub fn raw_value(mut self, inp: impl Into<std::string::String>) -> Self {
            self.raw_value = Some(inp.into());
            self
        }
        pub fn set_raw_value(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.raw_value = inp;
            self
        }
        pub fn formatted_value(mut self, inp: impl Into<std::string::String>) -> Self {
            self.formatted_value = Some(inp.into());
            self
        }
        pub fn set_formatted_value(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.formatted_value = inp;
            self
        }
        /// Consumes the builder and constructs a [`DataItem`](crate::model::DataItem)
        pub fn build(self) -> crate::model::DataItem {
            crate::model::DataItem {
                override_format: self.override_format,
                raw_value: self.raw_value,
                formatted_value: self.formatted_value,
            }
        }
    }
}

/// Metadata for column in the query result set
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct ResultHeader {
    #[serde(rename = "name")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    #[serde(rename = "format")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub format: std::option::Option<crate::model::Format>,
}
impl ResultHeader {
    /// Creates a new builder-style object to manufacture [`ResultHeader`](crate::model::ResultHeader)
    pub fn builder() -> crate::model::result_header::Builder {
        crate::model::result_header::Builder::default()
    }
}
/// See [`ResultHeader`](crate::model::ResultHeader)
pub mod result_header {
    /// A builder for [`ResultHeader`](crate::model::ResultHeader)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        name: std::option::Option<std::string::String>,
        format: std::option::Option<crate::model::Format>,
    }
    impl Builder {
        pub fn name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.name = Some(inp.into());
            self
        }
        pub fn set_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.name = inp;
            self
        }
        pub fn format(mut self, inp: crate::model::Format) -> Self {
            self.format = Some(inp);
            self
        }
        pub fn set_format(mut self, inp: std::option::Option<crate::model::Format>) -> Self {
            self.format = inp;
            self
        }
        /// Consumes the builder and constructs a [`ResultHeader`](crate::model::ResultHeader)
        pub fn build(self) -> crate::model::ResultHeader {
            crate::model::ResultHeader {
                name: self.name,
                format: self.format,
            }
        }
    }
}

/// A single row in the ResultSet
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct ResultRow {
    #[serde(rename = "rowId")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub row_id: std::option::Option<std::string::String>,
    #[serde(rename = "dataItems")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub data_items: std::option::Option<std::vec::Vec<crate::model::DataItem>>,
}
impl ResultRow {
    /// Creates a new builder-style object to manufacture [`ResultRow`](crate::model::ResultRow)
    pub fn builder() -> crate::model::result_row::Builder {
        crate::model::result_row::Builder::default()
    }
}
/// See [`ResultRow`](crate::model::ResultRow)
pub mod result_row {
    /// A builder for [`ResultRow`](crate::model::ResultRow)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        row_id: std::option::Option<std::string::String>,
        data_items: std::option::Option<std::vec::Vec<crate::model::DataItem>>,
    }
    impl Builder {
        pub fn row_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.row_id = Some(inp.into());
            self
        }
        pub fn set_row_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.row_id = inp;
            self
        }
        pub fn data_items(mut self, inp: impl Into<crate::model::DataItem>) -> Self {
            let mut v = self.data_items.unwrap_or_default();
            v.push(inp.into());
            self.data_items = Some(v);
            self
        }
        pub fn set_data_items(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::DataItem>>,
        ) -> Self {
            self.data_items = inp;
            self
        }
        /// Consumes the builder and constructs a [`ResultRow`](crate::model::ResultRow)
        pub fn build(self) -> crate::model::ResultRow {
            crate::model::ResultRow {
                row_id: self.row_id,
                data_items: self.data_items,
            }
        }
    }
}

/// A list of headers and the rows of data returned by a screen or query
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct ResultSet {
    #[serde(rename = "headers")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub headers: std::option::Option<std::vec::Vec<crate::model::ResultHeader>>,
    #[serde(rename = "rows")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub rows: std::option::Option<std::vec::Vec<crate::model::ResultRow>>,
}
impl ResultSet {
    /// Creates a new builder-style object to manufacture [`ResultSet`](crate::model::ResultSet)
    pub fn builder() -> crate::model::result_set::Builder {
        crate::model::result_set::Builder::default()
    }
}
/// See [`ResultSet`](crate::model::ResultSet)
pub mod result_set {
    /// A builder for [`ResultSet`](crate::model::ResultSet)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        headers: std::option::Option<std::vec::Vec<crate::model::ResultHeader>>,
        rows: std::option::Option<std::vec::Vec<crate::model::ResultRow>>,
    }
    impl Builder {
        pub fn headers(mut self, inp: impl Into<crate::model::ResultHeader>) -> Self {
            let mut v = self.headers.unwrap_or_default();
            v.push(inp.into());
            self.headers = Some(v);
            self
        }
        pub fn set_headers(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::ResultHeader>>,
        ) -> Self {
            self.headers = inp;
            self
        }
        pub fn rows(mut self, inp: impl Into<crate::model::ResultRow>) -> Self {
            let mut v = self.rows.unwrap_or_default();
            v.push(inp.into());
            self.rows = Some(v);
            self
        }
        pub fn set_rows(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::ResultRow>>,
        ) -> Self {
            self.rows = inp;
            self
        }
        /// Consumes the builder and constructs a [`ResultSet`](crate::model::ResultSet)
        pub fn build(self) -> crate::model::ResultSet {
            crate::model::ResultSet {
                headers: self.headers,
                rows: self.rows,
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
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Table {
    #[serde(rename = "tableId")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub table_id: std::option::Option<std::string::String>,
    #[serde(rename = "tableName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub table_name: std::option::Option<std::string::String>,
}
impl Table {
    /// Creates a new builder-style object to manufacture [`Table`](crate::model::Table)
    pub fn builder() -> crate::model::table::Builder {
        crate::model::table::Builder::default()
    }
}
/// See [`Table`](crate::model::Table)
pub mod table {
    /// A builder for [`Table`](crate::model::Table)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        table_id: std::option::Option<std::string::String>,
        table_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn table_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.table_id = Some(inp.into());
            self
        }
        pub fn set_table_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.table_id = inp;
            self
        }
        pub fn table_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.table_name = Some(inp.into());
            self
        }
        pub fn set_table_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.table_name = inp;
            self
        }
        /// Consumes the builder and constructs a [`Table`](crate::model::Table)
        pub fn build(self) -> crate::model::Table {
            crate::model::Table {
                table_id: self.table_id,
                table_name: self.table_name,
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
    serde::Serialize,
    serde::Deserialize,
)]
pub struct TableColumn {
    #[serde(rename = "tableColumnId")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub table_column_id: std::option::Option<std::string::String>,
    #[serde(rename = "tableColumnName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub table_column_name: std::option::Option<std::string::String>,
    #[serde(rename = "format")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub format: std::option::Option<crate::model::Format>,
}
impl TableColumn {
    /// Creates a new builder-style object to manufacture [`TableColumn`](crate::model::TableColumn)
    pub fn builder() -> crate::model::table_column::Builder {
        crate::model::table_column::Builder::default()
    }
}
/// See [`TableColumn`](crate::model::TableColumn)
pub mod table_column {
    /// A builder for [`TableColumn`](crate::model::TableColumn)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        table_column_id: std::option::Option<std::string::String>,
        table_column_name: std::option::Option<std::string::String>,
        format: std::option::Option<crate::model::Format>,
    }
    impl Builder {
        pub fn table_column_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.table_column_id = Some(inp.into());
            self
        }
        pub fn set_table_column_id(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.table_column_id = inp;
            self
        }
        pub fn table_column_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.table_column_name = Some(inp.into());
            self
        }
        pub fn set_table_column_name(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.table_column_name = inp;
            self
        }
        pub fn format(mut self, inp: crate::model::Format) -> Self {
            self.format = Some(inp);
            self
        }
        pub fn set_format(mut self, inp: std::option::Option<crate::model::Format>) -> Self {
            self.format = inp;
            self
        }
        /// Consumes the builder and constructs a [`TableColumn`](crate::model::TableColumn)
        pub fn build(self) -> crate::model::TableColumn {
            crate::model::TableColumn {
                table_column_id: self.table_column_id,
                table_column_name: self.table_column_name,
                format: self.format,
            }
        }
    }
}

/// An object that represents a single cell in a table
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Cell {
    #[serde(rename = "formula")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub formula: std::option::Option<std::string::String>,
    #[serde(rename = "format")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub format: std::option::Option<crate::model::Format>,
    #[serde(rename = "rawValue")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub raw_value: std::option::Option<std::string::String>,
    #[serde(rename = "formattedValue")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub formatted_value: std::option::Option<std::string::String>,
}
impl Cell {
    /// Creates a new builder-style object to manufacture [`Cell`](crate::model::Cell)
    pub fn builder() -> crate::model::cell::Builder {
        crate::model::cell::Builder::default()
    }
}
/// See [`Cell`](crate::model::Cell)
pub mod cell {
    /// A builder for [`Cell`](crate::model::Cell)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        formula: std::option::Option<std::string::String>,
        format: std::option::Option<crate::model::Format>,
        raw_value: std::option::Option<std::string::String>,
        formatted_value: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn formula(mut self, inp: impl Into<std::string::String>) -> Self {
            self.formula = Some(inp.into());
            self
        }
        pub fn set_formula(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.formula = inp;
            self
        }
        pub fn format(mut self, inp: crate::model::Format) -> Self {
            self.format = Some(inp);
            self
        }
        pub fn set_format(mut self, inp: std::option::Option<crate::model::Format>) -> Self {
            self.format = inp;
            self
        }
        pub fn raw_value(mut self, inp: impl Into<std::string::String>) -> Self {
            self.raw_value = Some(inp.into());
            self
        }
        pub fn set_raw_value(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.raw_value = inp;
            self
        }
        pub fn formatted_value(mut self, inp: impl Into<std::string::String>) -> Self {
            self.formatted_value = Some(inp.into());
            self
        }
        pub fn set_formatted_value(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.formatted_value = inp;
            self
        }
        /// Consumes the builder and constructs a [`Cell`](crate::model::Cell)
        pub fn build(self) -> crate::model::Cell {
            crate::model::Cell {
                formula: self.formula,
                format: self.format,
                raw_value: self.raw_value,
                formatted_value: self.formatted_value,
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
    serde::Serialize,
    serde::Deserialize,
)]
pub struct TableRow {
    #[serde(rename = "rowId")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub row_id: std::option::Option<std::string::String>,
    #[serde(rename = "cells")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub cells: std::option::Option<std::vec::Vec<crate::model::Cell>>,
}
impl TableRow {
    /// Creates a new builder-style object to manufacture [`TableRow`](crate::model::TableRow)
    pub fn builder() -> crate::model::table_row::Builder {
        crate::model::table_row::Builder::default()
    }
}
/// See [`TableRow`](crate::model::TableRow)
pub mod table_row {
    /// A builder for [`TableRow`](crate::model::TableRow)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        row_id: std::option::Option<std::string::String>,
        cells: std::option::Option<std::vec::Vec<crate::model::Cell>>,
    }
    impl Builder {
        pub fn row_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.row_id = Some(inp.into());
            self
        }
        pub fn set_row_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.row_id = inp;
            self
        }
        pub fn cells(mut self, inp: impl Into<crate::model::Cell>) -> Self {
            let mut v = self.cells.unwrap_or_default();
            v.push(inp.into());
            self.cells = Some(v);
            self
        }
        pub fn set_cells(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::Cell>>,
        ) -> Self {
            self.cells = inp;
            self
        }
        /// Consumes the builder and constructs a [`TableRow`](crate::model::TableRow)
        pub fn build(self) -> crate::model::TableRow {
            crate::model::TableRow {
                row_id: self.row_id,
                cells: self.cells,
            }
        }
    }
}

/// The input value for a cell in a table row create or update request
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct CellInput {
    #[serde(rename = "fact")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub fact: std::option::Option<std::string::String>,
}
impl CellInput {
    /// Creates a new builder-style object to manufacture [`CellInput`](crate::model::CellInput)
    pub fn builder() -> crate::model::cell_input::Builder {
        crate::model::cell_input::Builder::default()
    }
}
/// See [`CellInput`](crate::model::CellInput)
pub mod cell_input {
    /// A builder for [`CellInput`](crate::model::CellInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        fact: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn fact(mut self, inp: impl Into<std::string::String>) -> Self {
            self.fact = Some(inp.into());
            self
        }
        pub fn set_fact(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.fact = inp;
            self
        }
        /// Consumes the builder and constructs a [`CellInput`](crate::model::CellInput)
        pub fn build(self) -> crate::model::CellInput {
            crate::model::CellInput {
                fact: self.fact,
            }
        }
    }
}

/// Data needed to create a single row in a table as part of the BatchCreateTableRows request
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct CreateRowData {
    #[serde(rename = "batchItemId")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub batch_item_id: std::option::Option<std::string::String>,
    #[serde(rename = "cellsToCreate")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub cells_to_create:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::CellInput>>,
}
impl CreateRowData {
    /// Creates a new builder-style object to manufacture [`CreateRowData`](crate::model::CreateRowData)
    pub fn builder() -> crate::model::create_row_data::Builder {
        crate::model::create_row_data::Builder::default()
    }
}
/// See [`CreateRowData`](crate::model::CreateRowData)
pub mod create_row_data {
    /// A builder for [`CreateRowData`](crate::model::CreateRowData)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        batch_item_id: std::option::Option<std::string::String>,
        cells_to_create:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::CellInput>>,
    }
    impl Builder {
        pub fn batch_item_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.batch_item_id = Some(inp.into());
            self
        }
        pub fn set_batch_item_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.batch_item_id = inp;
            self
        }
        pub fn cells_to_create(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::CellInput>,
        ) -> Self {
            let mut hash_map = self.cells_to_create.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.cells_to_create = Some(hash_map);
            self
        }
        pub fn set_cells_to_create(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::CellInput>>,
        ) -> Self {
            self.cells_to_create = inp;
            self
        }
        /// Consumes the builder and constructs a [`CreateRowData`](crate::model::CreateRowData)
        pub fn build(self) -> crate::model::CreateRowData {
            crate::model::CreateRowData {
                batch_item_id: self.batch_item_id,
                cells_to_create: self.cells_to_create,
            }
        }
    }
}

/// Data needed to update a single row in a table as part of the BatchUpdateTableRows request
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct UpdateRowData {
    #[serde(rename = "rowId")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub row_id: std::option::Option<std::string::String>,
    #[serde(rename = "cellsToUpdate")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub cells_to_update:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::CellInput>>,
}
impl UpdateRowData {
    /// Creates a new builder-style object to manufacture [`UpdateRowData`](crate::model::UpdateRowData)
    pub fn builder() -> crate::model::update_row_data::Builder {
        crate::model::update_row_data::Builder::default()
    }
}
/// See [`UpdateRowData`](crate::model::UpdateRowData)
pub mod update_row_data {
    /// A builder for [`UpdateRowData`](crate::model::UpdateRowData)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        row_id: std::option::Option<std::string::String>,
        cells_to_update:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::CellInput>>,
    }
    impl Builder {
        pub fn row_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.row_id = Some(inp.into());
            self
        }
        pub fn set_row_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.row_id = inp;
            self
        }
        pub fn cells_to_update(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::CellInput>,
        ) -> Self {
            let mut hash_map = self.cells_to_update.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.cells_to_update = Some(hash_map);
            self
        }
        pub fn set_cells_to_update(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::CellInput>>,
        ) -> Self {
            self.cells_to_update = inp;
            self
        }
        /// Consumes the builder and constructs a [`UpdateRowData`](crate::model::UpdateRowData)
        pub fn build(self) -> crate::model::UpdateRowData {
            crate::model::UpdateRowData {
                row_id: self.row_id,
                cells_to_update: self.cells_to_update,
            }
        }
    }
}

/// A single item in a batch that failed to perform the intended action
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct FailedBatchItem {
    #[serde(rename = "id")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,
    #[serde(rename = "errorMessage")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub error_message: std::option::Option<std::string::String>,
}
impl FailedBatchItem {
    /// Creates a new builder-style object to manufacture [`FailedBatchItem`](crate::model::FailedBatchItem)
    pub fn builder() -> crate::model::failed_batch_item::Builder {
        crate::model::failed_batch_item::Builder::default()
    }
}
/// See [`FailedBatchItem`](crate::model::FailedBatchItem)
pub mod failed_batch_item {
    /// A builder for [`FailedBatchItem`](crate::model::FailedBatchItem)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        id: std::option::Option<std::string::String>,
        error_message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.id = Some(inp.into());
            self
        }
        pub fn set_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.id = inp;
            self
        }
        pub fn error_message(mut self, inp: impl Into<std::string::String>) -> Self {
            self.error_message = Some(inp.into());
            self
        }
        pub fn set_error_message(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.error_message = inp;
            self
        }
        /// Consumes the builder and constructs a [`FailedBatchItem`](crate::model::FailedBatchItem)
        pub fn build(self) -> crate::model::FailedBatchItem {
            crate::model::FailedBatchItem {
                id: self.id,
                error_message: self.error_message,
            }
        }
    }
}

/// An object that has details about the source of the data that was submitted for import
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct ImportDataSourceConfig {
    #[serde(rename = "dataSourceUrl")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub data_source_url: std::option::Option<std::string::String>,
}
impl ImportDataSourceConfig {
    /// Creates a new builder-style object to manufacture [`ImportDataSourceConfig`](crate::model::ImportDataSourceConfig)
    pub fn builder() -> crate::model::import_data_source_config::Builder {
        crate::model::import_data_source_config::Builder::default()
    }
}
/// See [`ImportDataSourceConfig`](crate::model::ImportDataSourceConfig)
pub mod import_data_source_config {
    /// A builder for [`ImportDataSourceConfig`](crate::model::ImportDataSourceConfig)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        data_source_url: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn data_source_url(mut self, inp: impl Into<std::string::String>) -> Self {
            self.data_source_url = Some(inp.into());
            self
        }
        pub fn set_data_source_url(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.data_source_url = inp;
            self
        }
        /// Consumes the builder and constructs a [`ImportDataSourceConfig`](crate::model::ImportDataSourceConfig)
        pub fn build(self) -> crate::model::ImportDataSourceConfig {
            crate::model::ImportDataSourceConfig {
                data_source_url: self.data_source_url,
            }
        }
    }
}

/// An object that has details about the source of the data that was submitted for import
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct ImportDataSource {
    #[serde(rename = "dataSourceConfig")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub data_source_config: std::option::Option<crate::model::ImportDataSourceConfig>,
}
impl ImportDataSource {
    /// Creates a new builder-style object to manufacture [`ImportDataSource`](crate::model::ImportDataSource)
    pub fn builder() -> crate::model::import_data_source::Builder {
        crate::model::import_data_source::Builder::default()
    }
}
/// See [`ImportDataSource`](crate::model::ImportDataSource)
pub mod import_data_source {
    /// A builder for [`ImportDataSource`](crate::model::ImportDataSource)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        data_source_config: std::option::Option<crate::model::ImportDataSourceConfig>,
    }
    impl Builder {
        pub fn data_source_config(mut self, inp: crate::model::ImportDataSourceConfig) -> Self {
            self.data_source_config = Some(inp);
            self
        }
        pub fn set_data_source_config(
            mut self,
            inp: std::option::Option<crate::model::ImportDataSourceConfig>,
        ) -> Self {
            self.data_source_config = inp;
            self
        }
        /// Consumes the builder and constructs a [`ImportDataSource`](crate::model::ImportDataSource)
        pub fn build(self) -> crate::model::ImportDataSource {
            crate::model::ImportDataSource {
                data_source_config: self.data_source_config,
            }
        }
    }
}

/// An object that contains the properties for importing data to a specific column in a table
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct SourceDataColumnProperties {
    #[serde(rename = "columnIndex")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub column_index: std::option::Option<i32>,
}
impl SourceDataColumnProperties {
    /// Creates a new builder-style object to manufacture [`SourceDataColumnProperties`](crate::model::SourceDataColumnProperties)
    pub fn builder() -> crate::model::source_data_column_properties::Builder {
        crate::model::source_data_column_properties::Builder::default()
    }
}
/// See [`SourceDataColumnProperties`](crate::model::SourceDataColumnProperties)
pub mod source_data_column_properties {
    /// A builder for [`SourceDataColumnProperties`](crate::model::SourceDataColumnProperties)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        column_index: std::option::Option<i32>,
    }
    impl Builder {
        pub fn column_index(mut self, inp: i32) -> Self {
            self.column_index = Some(inp);
            self
        }
        pub fn set_column_index(mut self, inp: std::option::Option<i32>) -> Self {
            self.column_index = inp;
            self
        }
        /// Consumes the builder and constructs a [`SourceDataColumnProperties`](crate::model::SourceDataColumnProperties)
        pub fn build(self) -> crate::model::SourceDataColumnProperties {
            crate::model::SourceDataColumnProperties {
                column_index: self.column_index,
            }
        }
    }
}

/// An object that contains the options relating to the destination of the import request
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct DestinationOptions {
    #[serde(rename = "columnMap")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub column_map:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::SourceDataColumnProperties>>,
}
impl DestinationOptions {
    /// Creates a new builder-style object to manufacture [`DestinationOptions`](crate::model::DestinationOptions)
    pub fn builder() -> crate::model::destination_options::Builder {
        crate::model::destination_options::Builder::default()
    }
}
/// See [`DestinationOptions`](crate::model::DestinationOptions)
pub mod destination_options {
    /// A builder for [`DestinationOptions`](crate::model::DestinationOptions)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        column_map:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::SourceDataColumnProperties>>,
    }
    impl Builder {
        pub fn column_map(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::SourceDataColumnProperties>,
        ) -> Self {
            let mut hash_map = self.column_map.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.column_map = Some(hash_map);
            self
        }
        pub fn set_column_map(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::SourceDataColumnProperties>>,
        ) -> Self {
            self.column_map = inp;
            self
        }
        /// Consumes the builder and constructs a [`DestinationOptions`](crate::model::DestinationOptions)
        pub fn build(self) -> crate::model::DestinationOptions {
            crate::model::DestinationOptions {
                column_map: self.column_map,
            }
        }
    }
}

/// An object that contains the options specified by the submitter of the import request
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct DelimitedTextImportOptions {
    #[serde(rename = "delimiter")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub delimiter: std::option::Option<std::string::String>,
    #[serde(rename = "hasHeaderRow")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub has_header_row: std::option::Option<bool>,
    #[serde(rename = "ignoreEmptyRows")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub ignore_empty_rows: std::option::Option<bool>,
    #[serde(rename = "dataCharacterEncoding")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub data_character_encoding: std::option::Option<crate::model::ImportDataCharacterEncoding>,
}
impl DelimitedTextImportOptions {
    /// Creates a new builder-style object to manufacture [`DelimitedTextImportOptions`](crate::model::DelimitedTextImportOptions)
    pub fn builder() -> crate::model::delimited_text_import_options::Builder {
        crate::model::delimited_text_import_options::Builder::default()
    }
}
/// See [`DelimitedTextImportOptions`](crate::model::DelimitedTextImportOptions)
pub mod delimited_text_import_options {
    /// A builder for [`DelimitedTextImportOptions`](crate::model::DelimitedTextImportOptions)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        delimiter: std::option::Option<std::string::String>,
        has_header_row: std::option::Option<bool>,
        ignore_empty_rows: std::option::Option<bool>,
        data_character_encoding: std::option::Option<crate::model::ImportDataCharacterEncoding>,
    }
    impl Builder {
        pub fn delimiter(mut self, inp: impl Into<std::string::String>) -> Self {
            self.delimiter = Some(inp.into());
            self
        }
        pub fn set_delimiter(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.delimiter = inp;
            self
        }
        pub fn has_header_row(mut self, inp: bool) -> Self {
            self.has_header_row = Some(inp);
            self
        }
        pub fn set_has_header_row(mut self, inp: std::option::Option<bool>) -> Self {
            self.has_header_row = inp;
            self
        }
        pub fn ignore_empty_rows(mut self, inp: bool) -> Self {
            self.ignore_empty_rows = Some(inp);
            self
        }
        pub fn set_ignore_empty_rows(mut self, inp: std::option::Option<bool>) -> Self {
            self.ignore_empty_rows = inp;
            self
        }
        pub fn data_character_encoding(
            mut self,
            inp: crate::model::ImportDataCharacterEncoding,
        ) -> Self {
            self.data_character_encoding = Some(inp);
            self
        }
        pub fn set_data_character_encoding(
            mut self,
            inp: std::option::Option<crate::model::ImportDataCharacterEncoding>,
        ) -> Self {
            self.data_character_encoding = inp;
            self
        }
        /// Consumes the builder and constructs a [`DelimitedTextImportOptions`](crate::model::DelimitedTextImportOptions)
        pub fn build(self) -> crate::model::DelimitedTextImportOptions {
            crate::model::DelimitedTextImportOptions {
                delimiter: self.delimiter,
                has_header_row: self.has_header_row,
                ignore_empty_rows: self.ignore_empty_rows,
                data_character_encoding: self.data_character_encoding,
            }
        }
    }
}

/// An object that contains the options specified by the submitter of the import request
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct ImportOptions {
    #[serde(rename = "destinationOptions")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub destination_options: std::option::Option<crate::model::DestinationOptions>,
    #[serde(rename = "delimitedTextOptions")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub delimited_text_options: std::option::Option<crate::model::DelimitedTextImportOptions>,
}
impl ImportOptions {
    /// Creates a new builder-style object to manufacture [`ImportOptions`](crate::model::ImportOptions)
    pub fn builder() -> crate::model::import_options::Builder {
        crate::model::import_options::Builder::default()
    }
}
/// See [`ImportOptions`](crate::model::ImportOptions)
pub mod import_options {
    /// A builder for [`ImportOptions`](crate::model::ImportOptions)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        destination_options: std::option::Option<crate::model::DestinationOptions>,
        delimited_text_options: std::option::Option<crate::model::DelimitedTextImportOptions>,
    }
    impl Builder {
        pub fn destination_options(mut self, inp: crate::model::DestinationOptions) -> Self {
            self.destination_options = Some(inp);
            self
        }
        pub fn set_destination_options(
            mut self,
            inp: std::option::Option<crate::model::DestinationOptions>,
        ) -> Self {
            self.destination_options = inp;
            self
        }
        pub fn delimited_text_options(
            mut self,
            inp: crate::model::DelimitedTextImportOptions,
        ) -> Self {
            self.delimited_text_options = Some(inp);
            self
        }
        pub fn set_delimited_text_options(
            mut self,
            inp: std::option::Option<crate::model::DelimitedTextImportOptions>,
        ) -> Self {
            self.delimited_text_options = inp;
            self
        }
        /// Consumes the builder and constructs a [`ImportOptions`](crate::model::ImportOptions)
        pub fn build(self) -> crate::model::ImportOptions {
            crate::model::ImportOptions {
                destination_options: self.destination_options,
                delimited_text_options: self.delimited_text_options,
            }
        }
    }
}

/// An object that contains the attributes of the submitter of the import job
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct ImportJobSubmitter {
    #[serde(rename = "email")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub email: std::option::Option<std::string::String>,
    #[serde(rename = "userArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub user_arn: std::option::Option<std::string::String>,
}
impl ImportJobSubmitter {
    /// Creates a new builder-style object to manufacture [`ImportJobSubmitter`](crate::model::ImportJobSubmitter)
    pub fn builder() -> crate::model::import_job_submitter::Builder {
        crate::model::import_job_submitter::Builder::default()
    }
}
/// See [`ImportJobSubmitter`](crate::model::ImportJobSubmitter)
pub mod import_job_submitter {
    /// A builder for [`ImportJobSubmitter`](crate::model::ImportJobSubmitter)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        email: std::option::Option<std::string::String>,
        user_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn email(mut self, inp: impl Into<std::string::String>) -> Self {
            self.email = Some(inp.into());
            self
        }
        pub fn set_email(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.email = inp;
            self
        }
        pub fn user_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.user_arn = Some(inp.into());
            self
        }
        pub fn set_user_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.user_arn = inp;
            self
        }
        /// Consumes the builder and constructs a [`ImportJobSubmitter`](crate::model::ImportJobSubmitter)
        pub fn build(self) -> crate::model::ImportJobSubmitter {
            crate::model::ImportJobSubmitter {
                email: self.email,
                user_arn: self.user_arn,
            }
        }
    }
}

/// The metadata associated with the table data import job that was submitted
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct TableDataImportJobMetadata {
    #[serde(rename = "submitter")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub submitter: std::option::Option<crate::model::ImportJobSubmitter>,
    #[serde(rename = "submitTime", with = "smithy_json::serde_with::epoch_seconds_option")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub submit_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "importOptions")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub import_options: std::option::Option<crate::model::ImportOptions>,
    #[serde(rename = "dataSource")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub data_source: std::option::Option<crate::model::ImportDataSource>,
}
impl TableDataImportJobMetadata {
    /// Creates a new builder-style object to manufacture [`TableDataImportJobMetadata`](crate::model::TableDataImportJobMetadata)
    pub fn builder() -> crate::model::table_data_import_job_metadata::Builder {
        crate::model::table_data_import_job_metadata::Builder::default()
    }
}
/// See [`TableDataImportJobMetadata`](crate::model::TableDataImportJobMetadata)
pub mod table_data_import_job_metadata {
    /// A builder for [`TableDataImportJobMetadata`](crate::model::TableDataImportJobMetadata)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        submitter: std::option::Option<crate::model::ImportJobSubmitter>,
        submit_time: std::option::Option<smithy_types::Instant>,
        import_options: std::option::Option<crate::model::ImportOptions>,
        data_source: std::option::Option<crate::model::ImportDataSource>,
    }
    impl Builder {
        pub fn submitter(mut self, inp: crate::model::ImportJobSubmitter) -> Self {
            self.submitter = Some(inp);
            self
        }
        pub fn set_submitter(
            mut self,
            inp: std::option::Option<crate::model::ImportJobSubmitter>,
        ) -> Self {
            self.submitter = inp;
            self
        }
        pub fn submit_time(mut self, inp: smithy_types::Instant) -> Self {
            self.submit_time = Some(inp);
            self
        }
        pub fn set_submit_time(mut self, inp: std::option::Option<smithy_types::Instant>) -> Self {
            self.submit_time = inp;
            self
        }
        pub fn import_options(mut self, inp: crate::model::ImportOptions) -> Self {
            self.import_options = Some(inp);
            self
        }
        pub fn set_import_options(
            mut self,
            inp: std::option::Option<crate::model::ImportOptions>,
        ) -> Self {
            self.import_options = inp;
            self
        }
        pub fn data_source(mut self, inp: crate::model::ImportDataSource) -> Self {
            self.data_source = Some(inp);
            self
        }
        pub fn set_data_source(
            mut self,
            inp: std::option::Option<crate::model::ImportDataSource>,
        ) -> Self {
            self.data_source = inp;
            self
        }
        /// Consumes the builder and constructs a [`TableDataImportJobMetadata`](crate::model::TableDataImportJobMetadata)
        pub fn build(self) -> crate::model::TableDataImportJobMetadata {
            crate::model::TableDataImportJobMetadata {
                submitter: self.submitter,
                submit_time: self.submit_time,
                import_options: self.import_options,
                data_source: self.data_source,
            }
        }
    }
}

/// An object that represents a filter formula along with the id of the context row under which the filter function needs to evaluate
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Filter {
    #[serde(rename = "formula")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub formula: std::option::Option<std::string::String>,
    #[serde(rename = "contextRowId")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub context_row_id: std::option::Option<std::string::String>,
}
impl Filter {
    /// Creates a new builder-style object to manufacture [`Filter`](crate::model::Filter)
    pub fn builder() -> crate::model::filter::Builder {
        crate::model::filter::Builder::default()
    }
}
/// See [`Filter`](crate::model::Filter)
pub mod filter {
    /// A builder for [`Filter`](crate::model::Filter)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        formula: std::option::Option<std::string::String>,
        context_row_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn formula(mut self, inp: impl Into<std::string::String>) -> Self {
            self.formula = Some(inp.into());
            self
        }
        pub fn set_formula(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.formula = inp;
            self
        }
        pub fn context_row_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.context_row_id = Some(inp.into());
            self
        }
        pub fn set_context_row_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.context_row_id = inp;
            self
        }
        /// Consumes the builder and constructs a [`Filter`](crate::model::Filter)
        pub fn build(self) -> crate::model::Filter {
            crate::model::Filter {
                formula: self.formula,
                context_row_id: self.context_row_id,
            }
        }
    }
}
