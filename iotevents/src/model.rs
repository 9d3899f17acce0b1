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
pub enum InputStatus {
    Creating,
    Updating,
    Active,
    Deleting,
    /// A value the service returned that this version of the client does not know about
    Unknown(String),
}
impl std::convert::From<&str> for InputStatus {
    fn from(s: &str) -> Self {
        match s {
            "CREATING" => InputStatus::Creating,
            "UPDATING" => InputStatus::Updating,
            "ACTIVE" => InputStatus::Active,
            "DELETING" => InputStatus::Deleting,
            other => InputStatus::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for InputStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(InputStatus::from(s))
    }
}
impl InputStatus {
    pub fn as_str(&self) -> &str {
        match self {
            InputStatus::Creating => "CREATING",
            InputStatus::Updating => "UPDATING",
            InputStatus::Active => "ACTIVE",
            InputStatus::Deleting => "DELETING",
            InputStatus::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this version of the client
    pub fn values() -> &'static [&'static str] {
        &["CREATING", "UPDATING", "ACTIVE", "DELETING"]
    }
}
impl AsRef<str> for InputStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for InputStatus {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for InputStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(InputStatus::from(data.as_str()))
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
pub enum DetectorModelVersionStatus {
    Active,
    Activating,
    Inactive,
    Deprecated,
    Draft,
    Paused,
    Failed,
    /// A value the service returned that this version of the client does not know about
    Unknown(String),
}
impl std::convert::From<&str> for DetectorModelVersionStatus {
    fn from(s: &str) -> Self {
        match s {
            "ACTIVE" => DetectorModelVersionStatus::Active,
            "ACTIVATING" => DetectorModelVersionStatus::Activating,
            "INACTIVE" => DetectorModelVersionStatus::Inactive,
            "DEPRECATED" => DetectorModelVersionStatus::Deprecated,
            "DRAFT" => DetectorModelVersionStatus::Draft,
            "PAUSED" => DetectorModelVersionStatus::Paused,
            "FAILED" => DetectorModelVersionStatus::Failed,
            other => DetectorModelVersionStatus::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for DetectorModelVersionStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(DetectorModelVersionStatus::from(s))
    }
}
impl DetectorModelVersionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            DetectorModelVersionStatus::Active => "ACTIVE",
            DetectorModelVersionStatus::Activating => "ACTIVATING",
            DetectorModelVersionStatus::Inactive => "INACTIVE",
            DetectorModelVersionStatus::Deprecated => "DEPRECATED",
            DetectorModelVersionStatus::Draft => "DRAFT",
            DetectorModelVersionStatus::Paused => "PAUSED",
            DetectorModelVersionStatus::Failed => "FAILED",
            DetectorModelVersionStatus::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this version of the client
    pub fn values() -> &'static [&'static str] {
        &["ACTIVE", "ACTIVATING", "INACTIVE", "DEPRECATED", "DRAFT", "PAUSED", "FAILED"]
    }
}
impl AsRef<str> for DetectorModelVersionStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for DetectorModelVersionStatus {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for DetectorModelVersionStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(DetectorModelVersionStatus::from(data.as_str()))
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
pub enum EvaluationMethod {
    Batch,
    Serial,
    /// A value the service returned that this version of the client does not know about
    Unknown(String),
}
impl std::convert::From<&str> for EvaluationMethod {
    fn from(s: &str) -> Self {
        match s {
            "BATCH" => EvaluationMethod::Batch,
            "SERIAL" => EvaluationMethod::Serial,
            other => EvaluationMethod::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for EvaluationMethod {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(EvaluationMethod::from(s))
    }
}
impl EvaluationMethod {
    pub fn as_str(&self) -> &str {
        match self {
            EvaluationMethod::Batch => "BATCH",
            EvaluationMethod::Serial => "SERIAL",
            EvaluationMethod::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this version of the client
    pub fn values() -> &'static [&'static str] {
        &["BATCH", "SERIAL"]
    }
}
impl AsRef<str> for EvaluationMethod {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for EvaluationMethod {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for EvaluationMethod {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(EvaluationMethod::from(data.as_str()))
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
pub enum LoggingLevel {
    Error,
    Info,
    Debug,
    /// A value the service returned that this version of the client does not know about
    Unknown(String),
}
impl std::convert::From<&str> for LoggingLevel {
    fn from(s: &str) -> Self {
        match s {
            "ERROR" => LoggingLevel::Error,
            "INFO" => LoggingLevel::Info,
            "DEBUG" => LoggingLevel::Debug,
            other => LoggingLevel::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for LoggingLevel {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(LoggingLevel::from(s))
    }
}
impl LoggingLevel {
    pub fn as_str(&self) -> &str {
        match self {
            LoggingLevel::Error => "ERROR",
            LoggingLevel::Info => "INFO",
            LoggingLevel::Debug => "DEBUG",
            LoggingLevel::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this version of the client
    pub fn values() -> &'static [&'static str] {
        &["ERROR", "INFO", "DEBUG"]
    }
}
impl AsRef<str> for LoggingLevel {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for LoggingLevel {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for LoggingLevel {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(LoggingLevel::from(data.as_str()))
    }
}

/// The attributes from the JSON payload that are made available by the input
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Attribute {
    /// An expression that specifies an attribute-value pair in a JSON structure. Use this to specify an attribute from the JSON payload that is made available by the input.
    #[serde(rename = "jsonPath")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub json_path: std::option::Option<std::string::String>,
}
impl Attribute {
    /// Creates a new builder-style object to manufacture [`Attribute`](crate::model::Attribute)
    pub fn builder() -> crate::model::attribute::Builder {
        crate::model::attribute::Builder::default()
    }
}
/// See [`Attribute`](crate::model::Attribute)
pub mod attribute {
    /// A builder for [`Attribute`](crate::model::Attribute)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        json_path: std::option::Option<std::string::String>,
    }
    impl Builder {
        /// An expression that specifies an attribute-value pair in a JSON structure. Use this to specify an attribute from the JSON payload that is made available by the input.
        pub fn json_path(mut self, inp: impl Into<std::string::String>) -> Self {
            self.json_path = Some(inp.into());
            self
        }
        pub fn set_json_path(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.json_path = inp;
            self
        }
        /// Consumes the builder and constructs a [`Attribute`](crate::model::Attribute)
        pub fn build(self) -> crate::model::Attribute {
            crate::model::Attribute {
                json_path: self.json_path,
            }
        }
    }
}

/// The definition of the input
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct InputDefinition {
    #[serde(rename = "attributes")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub attributes: std::option::Option<std::vec::Vec<crate::model::Attribute>>,
}
impl InputDefinition {
    /// Creates a new builder-style object to manufacture [`InputDefinition`](crate::model::InputDefinition)
    pub fn builder() -> crate::model::input_definition::Builder {
        crate::model::input_definition::Builder::default()
    }
}
/// See [`InputDefinition`](crate::model::InputDefinition)
pub mod input_definition {
    /// A builder for [`InputDefinition`](crate::model::InputDefinition)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        attributes: std::option::Option<std::vec::Vec<crate::model::Attribute>>,
    }
    impl Builder {
        pub fn attributes(mut self, inp: impl Into<crate::model::Attribute>) -> Self {
            let mut v = self.attributes.unwrap_or_default();
            v.push(inp.into());
            self.attributes = Some(v);
            self
        }
        pub fn set_attributes(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::Attribute>>,
        ) -> Self {
            self.attributes = inp;
            self
        }
        /// Consumes the builder and constructs a [`InputDefinition`](crate::model::InputDefinition)
        pub fn build(self) -> crate::model::InputDefinition {
            crate::model::InputDefinition {
                attributes: self.attributes,
            }
        }
    }
}

/// Information about the configuration of an input
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct InputConfiguration {
    #[serde(rename = "inputName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub input_name: std::option::Option<std::string::String>,
    #[serde(rename = "inputDescription")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub input_description: std::option::Option<std::string::String>,
    #[serde(rename = "inputArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub input_arn: std::option::Option<std::string::String>,
    #[serde(rename = "creationTime", with = "smithy_json::serde_with::epoch_seconds_option")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "lastUpdateTime", with = "smithy_json::serde_with::epoch_seconds_option")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_update_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "status")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<crate::model::InputStatus>,
}
impl InputConfiguration {
    /// Creates a new builder-style object to manufacture [`InputConfiguration`](crate::model::InputConfiguration)
    pub fn builder() -> crate::model::input_configuration::Builder {
        crate::model::input_configuration::Builder::default()
    }
}
/// See [`InputConfiguration`](crate::model::InputConfiguration)
pub mod input_configuration {
    /// A builder for [`InputConfiguration`](crate::model::InputConfiguration)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        input_name: std::option::Option<std::string::String>,
        input_description: std::option::Option<std::string::String>,
        input_arn: std::option::Option<std::string::String>,
        creation_time: std::option::Option<smithy_types::Instant>,
        last_update_time: std::option::Option<smithy_types::Instant>,
        status: std::option::Option<crate::model::InputStatus>,
    }
    impl Builder {
        pub fn input_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.input_name = Some(inp.into());
            self
        }
        pub fn set_input_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.input_name = inp;
            self
        }
        pub fn input_description(mut self, inp: impl Into<std::string::String>) -> Self {
            self.input_description = Some(inp.into());
            self
        }
        pub fn set_input_description(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.input_description = inp;
            self
        }
        pub fn input_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.input_arn = Some(inp.into());
            self
        }
        pub fn set_input_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.input_arn = inp;
            self
        }
        pub fn creation_time(mut self, inp: smithy_types::Instant) -> Self {
            self.creation_time = Some(inp);
            self
        }
        pub fn set_creation_time(
            mut self,
            inp: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.creation_time = inp;
            self
        }
        pub fn last_update_time(mut self, inp: smithy_types::Instant) -> Self {
            self.last_update_time = Some(inp);
            self
        }
        pub fn set_last_update_time(
            mut self,
            inp: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.last_update_time = inp;
            self
        }
        pub fn status(mut self, inp: crate::model::InputStatus) -> Self {
            self.status = Some(inp);
            self
        }
        pub fn set_status(mut self, inp: std::option::Option<crate::model::InputStatus>) -> Self {
            self.status = inp;
            self
        }
        /// Consumes the builder and constructs a [`InputConfiguration`](crate::model::InputConfiguration)
        pub fn build(self) -> crate::model::InputConfiguration {
            crate::model::InputConfiguration {
                input_name: self.input_name,
                input_description: self.input_description,
                input_arn: self.input_arn,
                creation_time: self.creation_time,
                last_update_time: self.last_update_time,
                status: self.status,
            }
        }
    }
}

/// Information about the input
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Input {
    #[serde(rename = "inputConfiguration")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub input_configuration: std::option::Option<crate::model::InputConfiguration>,
    #[serde(rename = "inputDefinition")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub input_definition: std::option::Option<crate::model::InputDefinition>,
}
impl Input {
    /// Creates a new builder-style object to manufacture [`Input`](crate::model::Input)
    pub fn builder() -> crate::model::input::Builder {
        crate::model::input::Builder::default()
    }
}
/// See [`Input`](crate::model::Input)
pub mod input {
    /// A builder for [`Input`](crate::model::Input)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        input_configuration: std::option::Option<crate::model::InputConfiguration>,
        input_definition: std::option::Option<crate::model::InputDefinition>,
    }
    impl Builder {
        pub fn input_configuration(mut self, inp: crate::model::InputConfiguration) -> Self {
            self.input_configuration = Some(inp);
            self
        }
        pub fn set_input_configuration(
            mut self,
            inp: std::option::Option<crate::model::InputConfiguration>,
        ) -> Self {
            self.input_configuration = inp;
            self
        }
        pub fn input_definition(mut self, inp: crate::model::InputDefinition) -> Self {
            self.input_definition = Some(inp);
            self
        }
        pub fn set_input_definition(
            mut self,
            inp: std::option::Option<crate::model::InputDefinition>,
        ) -> Self {
            self.input_definition = inp;
            self
        }
        /// Consumes the builder and constructs a [`Input`](crate::model::Input)
        pub fn build(self) -> crate::model::Input {
            crate::model::Input {
                input_configuration: self.input_configuration,
                input_definition: self.input_definition,
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
pub struct InputSummary {
    #[serde(rename = "inputName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub input_name: std::option::Option<std::string::String>,
    #[serde(rename = "inputDescription")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub input_description: std::option::Option<std::string::String>,
    #[serde(rename = "inputArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub input_arn: std::option::Option<std::string::String>,
    #[serde(rename = "creationTime", with = "smithy_json::serde_with::epoch_seconds_option")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "lastUpdateTime", with = "smithy_json::serde_with::epoch_seconds_option")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_update_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "status")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<crate::model::InputStatus>,
}
impl InputSummary {
    /// Creates a new builder-style object to manufacture [`InputSummary`](crate::model::InputSummary)
    pub fn builder() -> crate::model::input_summary::Builder {
        crate::model::input_summary::Builder::default()
    }
}
/// See [`InputSummary`](crate::model::InputSummary)
pub mod input_summary {
    /// A builder for [`InputSummary`](crate::model::InputSummary)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        input_name: std::option::Option<std::string::String>,
        input_description: std::option::Option<std::string::String>,
        input_arn: std::option::Option<std::string::String>,
        creation_time: std::option::Option<smithy_types::Instant>,
        last_update_time: std::option::Option<smithy_types::Instant>,
        status: std::option::Option<crate::model::InputStatus>,
    }
    impl Builder {
        pub fn input_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.input_name = Some(inp.into());
            self
        }
        pub fn set_input_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.input_name = inp;
            self
        }
        pub fn input_description(mut self, inp: impl Into<std::string::String>) -> Self {
            self.input_description = Some(inp.into());
            self
        }
        pub fn set_input_description(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.input_description = inp;
            self
        }
        pub fn input_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.input_arn = Some(inp.into());
            self
        }
        pub fn set_input_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.input_arn = inp;
            self
        }
        pub fn creation_time(mut self, inp: smithy_types::Instant) -> Self {
            self.creation_time = Some(inp);
            self
        }
        pub fn set_creation_time(
            mut self,
            inp: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.creation_time = inp;
            self
        }
        pub fn last_update_time(mut self, inp: smithy_types::Instant) -> Self {
            self.last_update_time = Some(inp);
            self
        }
        pub fn set_last_update_time(
            mut self,
            inp: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.last_update_time = inp;
            self
        }
        pub fn status(mut self, inp: crate::model::InputStatus) -> Self {
            self.status = Some(inp);
            self
        }
        pub fn set_status(mut self, inp: std::option::Option<crate::model::InputStatus>) -> Self {
            self.status = inp;
            self
        }
        /// Consumes the builder and constructs a [`InputSummary`](crate::model::InputSummary)
        pub fn build(self) -> crate::model::InputSummary {
            crate::model::InputSummary {
                input_name: self.input_name,
                input_description: self.input_description,
                input_arn: self.input_arn,
                creation_time: self.creation_time,
                last_update_time: self.last_update_time,
                status: self.status,
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
pub struct DetectorModelSummary {
    #[serde(rename = "detectorModelName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub detector_model_name: std::option::Option<std::string::String>,
    #[serde(rename = "detectorModelDescription")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub detector_model_description: std::option::Option<std::string::String>,
    #[serde(rename = "creationTime", with = "smithy_json::serde_with::epoch_seconds_option")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_time: std::option::Option<smithy_types::Instant>,
}
impl DetectorModelSummary {
    /// Creates a new builder-style object to manufacture [`DetectorModelSummary`](crate::model::DetectorModelSummary)
    pub fn builder() -> crate::model::detector_model_summary::Builder {
        crate::model::detector_model_summary::Builder::default()
    }
}
/// See [`DetectorModelSummary`](crate::model::DetectorModelSummary)
pub mod detector_model_summary {
    /// A builder for [`DetectorModelSummary`](crate::model::DetectorModelSummary)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        detector_model_name: std::option::Option<std::string::String>,
        detector_model_description: std::option::Option<std::string::String>,
        creation_time: std::option::Option<smithy_types::Instant>,
    }
    impl Builder {
        pub fn detector_model_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.detector_model_name = Some(inp.into());
            self
        }
        pub fn set_detector_model_name(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.detector_model_name = inp;
            self
        }
        pub fn detector_model_description(mut self, inp: impl Into<std::string::String>) -> Self {
            self.detector_model_description = Some(inp.into());
            self
        }
        pub fn set_detector_model_description(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.detector_model_description = inp;
            self
        }
        pub fn creation_time(mut self, inp: smithy_types::Instant) -> Self {
            self.creation_time = Some(inp);
            self
        }
        pub fn set_creation_time(
            mut self,
            inp: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.creation_time = inp;
            self
        }
        /// Consumes the builder and constructs a [`DetectorModelSummary`](crate::model::DetectorModelSummary)
        pub fn build(self) -> crate::model::DetectorModelSummary {
            crate::model::DetectorModelSummary {
                detector_model_name: self.detector_model_name,
                detector_model_description: self.detector_model_description,
                creation_time: self.creation_time,
            }
        }
    }
}

/// Information about the detector model version
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct DetectorModelVersionSummary {
    #[serde(rename = "detectorModelName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub detector_model_name: std::option::Option<std::string::String>,
    #[serde(rename = "detectorModelVersion")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub detector_model_version: std::option::Option<std::string::String>,
    #[serde(rename = "detectorModelArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub detector_model_arn: std::option::Option<std::string::String>,
    #[serde(rename = "roleArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub role_arn: std::option::Option<std::string::String>,
    #[serde(rename = "creationTime", with = "smithy_json::serde_with::epoch_seconds_option")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "lastUpdateTime", with = "smithy_json::serde_with::epoch_seconds_option")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_update_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "status")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<crate::model::DetectorModelVersionStatus>,
    #[serde(rename = "evaluationMethod")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub evaluation_method: std::option::Option<crate::model::EvaluationMethod>,
}
impl DetectorModelVersionSummary {
    /// Creates a new builder-style object to manufacture [`DetectorModelVersionSummary`](crate::model::DetectorModelVersionSummary)
    pub fn builder() -> crate::model::detector_model_version_summary::Builder {
        crate::model::detector_model_version_summary::Builder::default()
    }
}
/// See [`DetectorModelVersionSummary`](crate::model::DetectorModelVersionSummary)
pub mod detector_model_version_summary {
    /// A builder for [`DetectorModelVersionSummary`](crate::model::DetectorModelVersionSummary)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        detector_model_name: std::option::Option<std::string::String>,
        detector_model_version: std::option::Option<std::string::String>,
        detector_model_arn: std::option::Option<std::string::String>,
        role_arn: std::option::Option<std::string::String>,
        creation_time: std::option::Option<smithy_types::Instant>,
        last_update_time: std::option::Option<smithy_types::Instant>,
        status: std::option::Option<crate::model::DetectorModelVersionStatus>,
        evaluation_method: std::option::Option<crate::model::EvaluationMethod>,
    }
    impl Builder {
        pub fn detector_model_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.detector_model_name = Some(inp.into());
            self
        }
        pub fn set_detector_model_name(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.detector_model_name = inp;
            self
        }
        pub fn detector_model_version(mut self, inp: impl Into<std::string::String>) -> Self {
            self.detector_model_version = Some(inp.into());
            self
        }
        pub fn set_detector_model_version(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.detector_model_version = inp;
            self
        }
        pub fn detector_model_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.detector_model_arn = Some(inp.into());
            self
        }
        pub fn set_detector_model_arn(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.detector_model_arn = inp;
            self
        }
        pub fn role_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.role_arn = Some(inp.into());
            self
        }
        pub fn set_role_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.role_arn = inp;
            self
        }
        pub fn creation_time(mut self, inp: smithy_types::Instant) -> Self {
            self.creation_time = Some(inp);
            self
        }
        pub fn set_creation_time(
            mut self,
            inp: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.creation_time = inp;
            self
        }
        pub fn last_update_time(mut self, inp: smithy_types::Instant) -> Self {
            self.last_update_time = Some(inp);
            self
        }
        pub fn set_last_update_time(
            mut self,
            inp: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.last_update_time = inp;
            self
        }
        pub fn status(mut self, inp: crate::model::DetectorModelVersionStatus) -> Self {
            self.status = Some(inp);
            self
        }
        pub fn set_status(
            mut self,
            inp: std::option::Option<crate::model::DetectorModelVersionStatus>,
        ) -> Self {
            self.status = inp;
            self
        }
        pub fn evaluation_method(mut self, inp: crate::model::EvaluationMethod) -> Self {
            self.evaluation_method = Some(inp);
            self
        }
        pub fn set_evaluation_method(
            mut self,
            inp: std::option::Option<crate::model::EvaluationMethod>,
        ) -> Self {
            self.evaluation_method = inp;
            self
        }
        /// Consumes the builder and constructs a [`DetectorModelVersionSummary`](crate::model::DetectorModelVersionSummary)
        pub fn build(self) -> crate::model::DetectorModelVersionSummary {
            crate::model::DetectorModelVersionSummary {
                detector_model_name: self.detector_model_name,
                detector_model_version: self.detector_model_version,
                detector_model_arn: self.detector_model_arn,
                role_arn: self.role_arn,
                creation_time: self.creation_time,
                last_update_time: self.last_update_time,
                status: self.status,
                evaluation_method: self.evaluation_method,
            }
        }
    }
}

/// The detector model and the specific detectors for which the logging level is given
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct DetectorDebugOption {
    #[serde(rename = "detectorModelName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub detector_model_name: std::option::Option<std::string::String>,
    #[serde(rename = "keyValue")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub key_value: std::option::Option<std::string::String>,
}
impl DetectorDebugOption {
    /// Creates a new builder-style object to manufacture [`DetectorDebugOption`](crate::model::DetectorDebugOption)
    pub fn builder() -> crate::model::detector_debug_option::Builder {
        crate::model::detector_debug_option::Builder::default()
    }
}
/// See [`DetectorDebugOption`](crate::model::DetectorDebugOption)
pub mod detector_debug_option {
    /// A builder for [`DetectorDebugOption`](crate::model::DetectorDebugOption)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        detector_model_name: std::option::Option<std::string::String>,
        key_value: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn detector_model_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.detector_model_name = Some(inp.into());
            self
        }
        pub fn set_detector_model_name(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.detector_model_name = inp;
            self
        }
        pub fn key_value(mut self, inp: impl Into<std::string::String>) -> Self {
            self.key_value = Some(inp.into());
            self
        }
        pub fn set_key_value(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.key_value = inp;
            self
        }
        /// Consumes the builder and constructs a [`DetectorDebugOption`](crate::model::DetectorDebugOption)
        pub fn build(self) -> crate::model::DetectorDebugOption {
            crate::model::DetectorDebugOption {
                detector_model_name: self.detector_model_name,
                key_value: self.key_value,
            }
        }
    }
}

/// The values of the AWS IoT Events logging options
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct LoggingOptions {
    #[serde(rename = "roleArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub role_arn: std::option::Option<std::string::String>,
    #[serde(rename = "level")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub level: std::option::Option<crate::model::LoggingLevel>,
    #[serde(rename = "enabled")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub enabled: std::option::Option<bool>,
    #[serde(rename = "detectorDebugOptions")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub detector_debug_options:
        std::option::Option<std::vec::Vec<crate::model::DetectorDebugOption>>,
}
impl LoggingOptions {
    /// Creates a new builder-style object to manufacture [`LoggingOptions`](crate::model::LoggingOptions)
    pub fn builder() -> crate::model::logging_options::Builder {
        crate::model::logging_options::Builder::default()
    }
}
/// See [`LoggingOptions`](crate::model::LoggingOptions)
pub mod logging_options {
    /// A builder for [`LoggingOptions`](crate::model::LoggingOptions)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        role_arn: std::option::Option<std::string::String>,
        level: std::option::Option<crate::model::LoggingLevel>,
        enabled: std::option::Option<bool>,
        detector_debug_options:
            std::option::Option<std::vec::Vec<crate::model::DetectorDebugOption>>,
    }
    impl Builder {
        pub fn role_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.role_arn = Some(inp.into());
            self
        }
        pub fn set_role_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.role_arn = inp;
            self
        }
        pub fn level(mut self, inp: crate::model::LoggingLevel) -> Self {
            self.level = Some(inp);
            self
        }
        pub fn set_level(mut self, inp: std::option::Option<crate::model::LoggingLevel>) -> Self {
            self.level = inp;
            self
        }
        pub fn enabled(mut self, inp: bool) -> Self {
            self.enabled = Some(inp);
            self
        }
        pub fn set_enabled(mut self, inp: std::option::Option<bool>) -> Self {
            self.enabled = inp;
            self
        }
        pub fn detector_debug_options(
            mut self,
            inp: impl Into<crate::model::DetectorDebugOption>,
        ) -> Self {
            let mut v = self.detector_debug_options.unwrap_or_default();
            v.push(inp.into());
            self.detector_debug_options = Some(v);
            self
        }
        pub fn set_detector_debug_options(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::DetectorDebugOption>>,
        ) -> Self {
            self.detector_debug_options = inp;
            self
        }
        /// Consumes the builder and constructs a [`LoggingOptions`](crate::model::LoggingOptions)
        pub fn build(self) -> crate::model::LoggingOptions {
            crate::model::LoggingOptions {
                role_arn: self.role_arn,
                level: self.level,
                enabled: self.enabled,
                detector_debug_options: self.detector_debug_options,
            }
        }
    }
}

/// Metadata that can be used to manage the resource
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Tag {
    #[serde(rename = "key")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub key: std::option::Option<std::string::String>,
    #[serde(rename = "value")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub value: std::option::Option<std::string::String>,
}
impl Tag {
    /// Creates a new builder-style object to manufacture [`Tag`](crate::model::Tag)
    pub fn builder() -> crate::model::tag::Builder {
        crate::model::tag::Builder::default()
    }
}
/// See [`Tag`](crate::model::Tag)
pub mod tag {
    /// A builder for [`Tag`](crate::model::Tag)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        key: std::option::Option<std::string::String>,
        value: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn key(mut self, inp: impl Into<std::string::String>) -> Self {
            self.key = Some(inp.into());
            self
        }
        pub fn set_key(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.key = inp;
            self
        }
        pub fn value(mut self, inp: impl Into<std::string::String>) -> Self {
            self.value = Some(inp.into());
            self
        }
        pub fn set_value(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.value = inp;
            self
        }
        /// Consumes the builder and constructs a [`Tag`](crate::model::Tag)
        pub fn build(self) -> crate::model::Tag {
            crate::model::Tag {
                key: self.key,
                value: self.value,
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
pub struct SetVariableAction {
    #[serde(rename = "variableName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub variable_name: std::option::Option<std::string::String>,
    #[serde(rename = "value")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub value: std::option::Option<std::string::String>,
}
impl SetVariableAction {
    /// Creates a new builder-style object to manufacture [`SetVariableAction`](crate::model::SetVariableAction)
    pub fn builder() -> crate::model::set_variable_action::Builder {
        crate::model::set_variable_action::Builder::default()
    }
}
/// See [`SetVariableAction`](crate::model::SetVariableAction)
pub mod set_variable_action {
    /// A builder for [`SetVariableAction`](crate::model::SetVariableAction)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        variable_name: std::option::Option<std::string::String>,
        value: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn variable_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.variable_name = Some(inp.into());
            self
        }
        pub fn set_variable_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.variable_name = inp;
            self
        }
        pub fn value(mut self, inp: impl Into<std::string::String>) -> Self {
            self.value = Some(inp.into());
            self
        }
        pub fn set_value(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.value = inp;
            self
        }
        /// Consumes the builder and constructs a [`SetVariableAction`](crate::model::SetVariableAction)
        pub fn build(self) -> crate::model::SetVariableAction {
            crate::model::SetVariableAction {
                variable_name: self.variable_name,
                value: self.value,
            }
        }
    }
}

/// Sends an Amazon SNS message
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct SnsTopicPublishAction {
    #[serde(rename = "targetArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub target_arn: std::option::Option<std::string::String>,
}
impl SnsTopicPublishAction {
    /// Creates a new builder-style object to manufacture [`SnsTopicPublishAction`](crate::model::SnsTopicPublishAction)
    pub fn builder() -> crate::model::sns_topic_publish_action::Builder {
        crate::model::sns_topic_publish_action::Builder::default()
    }
}
/// See [`SnsTopicPublishAction`](crate::model::SnsTopicPublishAction)
pub mod sns_topic_publish_action {
    /// A builder for [`SnsTopicPublishAction`](crate::model::SnsTopicPublishAction)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        target_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn target_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.target_arn = Some(inp.into());
            self
        }
        pub fn set_target_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.target_arn = inp;
            self
        }
        /// Consumes the builder and constructs a [`SnsTopicPublishAction`](crate::model::SnsTopicPublishAction)
        pub fn build(self) -> crate::model::SnsTopicPublishAction {
            crate::model::SnsTopicPublishAction {
                target_arn: self.target_arn,
            }
        }
    }
}

/// Publishes an MQTT message with the given topic to the AWS IoT message broker
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct IotTopicPublishAction {
    #[serde(rename = "mqttTopic")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub mqtt_topic: std::option::Option<std::string::String>,
}
impl IotTopicPublishAction {
    /// Creates a new builder-style object to manufacture [`IotTopicPublishAction`](crate::model::IotTopicPublishAction)
    pub fn builder() -> crate::model::iot_topic_publish_action::Builder {
        crate::model::iot_topic_publish_action::Builder::default()
    }
}
/// See [`IotTopicPublishAction`](crate::model::IotTopicPublishAction)
pub mod iot_topic_publish_action {
    /// A builder for [`IotTopicPublishAction`](crate::model::IotTopicPublishAction)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        mqtt_topic: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn mqtt_topic(mut self, inp: impl Into<std::string::String>) -> Self {
            self.mqtt_topic = Some(inp.into());
            self
        }
        pub fn set_mqtt_topic(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.mqtt_topic = inp;
            self
        }
        /// Consumes the builder and constructs a [`IotTopicPublishAction`](crate::model::IotTopicPublishAction)
        pub fn build(self) -> crate::model::IotTopicPublishAction {
            crate::model::IotTopicPublishAction {
                mqtt_topic: self.mqtt_topic,
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
pub struct SetTimerAction {
    #[serde(rename = "timerName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub timer_name: std::option::Option<std::string::String>,
    #[serde(rename = "seconds")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub seconds: std::option::Option<i32>,
    #[serde(rename = "durationExpression")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub duration_expression: std::option::Option<std::string::String>,
}
impl SetTimerAction {
    /// Creates a new builder-style object to manufacture [`SetTimerAction`](crate::model::SetTimerAction)
    pub fn builder() -> crate::model::set_timer_action::Builder {
        crate::model::set_timer_action::Builder::default()
    }
}
/// See [`SetTimerAction`](crate::model::SetTimerAction)
pub mod set_timer_action {
    /// A builder for [`SetTimerAction`](crate::model::SetTimerAction)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        timer_name: std::option::Option<std::string::String>,
        seconds: std::option::Option<i32>,
        duration_expression: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn timer_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.timer_name = Some(inp.into());
            self
        }
        pub fn set_timer_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.timer_name = inp;
            self
        }
        pub fn seconds(mut self, inp: i32) -> Self {
            self.seconds = Some(inp);
            self
        }
        pub fn set_seconds(mut self, inp: std::option::Option<i32>) -> Self {
            self.seconds = inp;
            self
        }
        pub fn duration_expression(mut self, inp: impl Into<std::string::String>) -> Self {
            self.duration_expression = Some(inp.into());
            self
        }
        pub fn set_duration_expression(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.duration_expression = inp;
            self
        }
        /// Consumes the builder and constructs a [`SetTimerAction`](crate::model::SetTimerAction)
        pub fn build(self) -> crate::model::SetTimerAction {
            crate::model::SetTimerAction {
                timer_name: self.timer_name,
                seconds: self.seconds,
                duration_expression: self.duration_expression,
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
pub struct ClearTimerAction {
    #[serde(rename = "timerName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub timer_name: std::option::Option<std::string::String>,
}
impl ClearTimerAction {
    /// Creates a new builder-style object to manufacture [`ClearTimerAction`](crate::model::ClearTimerAction)
    pub fn builder() -> crate::model::clear_timer_action::Builder {
        crate::model::clear_timer_action::Builder::default()
    }
}
/// See [`ClearTimerAction`](crate::model::ClearTimerAction)
pub mod clear_timer_action {
    /// A builder for [`ClearTimerAction`](crate::model::ClearTimerAction)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        timer_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn timer_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.timer_name = Some(inp.into());
            self
        }
        pub fn set_timer_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.timer_name = inp;
            self
        }
        /// Consumes the builder and constructs a [`ClearTimerAction`](crate::model::ClearTimerAction)
        pub fn build(self) -> crate::model::ClearTimerAction {
            crate::model::ClearTimerAction {
                timer_name: self.timer_name,
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
pub struct ResetTimerAction {
    #[serde(rename = "timerName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub timer_name: std::option::Option<std::string::String>,
}
impl ResetTimerAction {
    /// Creates a new builder-style object to manufacture [`ResetTimerAction`](crate::model::ResetTimerAction)
    pub fn builder() -> crate::model::reset_timer_action::Builder {
        crate::model::reset_timer_action::Builder::default()
    }
}
/// See [`ResetTimerAction`](crate::model::ResetTimerAction)
pub mod reset_timer_action {
    /// A builder for [`ResetTimerAction`](crate::model::ResetTimerAction)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        timer_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn timer_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.timer_name = Some(inp.into());
            self
        }
        pub fn set_timer_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.timer_name = inp;
            self
        }
        /// Consumes the builder and constructs a [`ResetTimerAction`](crate::model::ResetTimerAction)
        pub fn build(self) -> crate::model::ResetTimerAction {
            crate::model::ResetTimerAction {
                timer_name: self.timer_name,
            }
        }
    }
}

/// Calls a Lambda function, passing in information about the detector model instance and the event that triggered the action
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct LambdaAction {
    #[serde(rename = "functionArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub function_arn: std::option::Option<std::string::String>,
}
impl LambdaAction {
    /// Creates a new builder-style object to manufacture [`LambdaAction`](crate::model::LambdaAction)
    pub fn builder() -> crate::model::lambda_action::Builder {
        crate::model::lambda_action::Builder::default()
    }
}
/// See [`LambdaAction`](crate::model::LambdaAction)
pub mod lambda_action {
    /// A builder for [`LambdaAction`](crate::model::LambdaAction)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        function_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn function_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.function_arn = Some(inp.into());
            self
        }
        pub fn set_function_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.function_arn = inp;
            self
        }
        /// Consumes the builder and constructs a [`LambdaAction`](crate::model::LambdaAction)
        pub fn build(self) -> crate::model::LambdaAction {
            crate::model::LambdaAction {
                function_arn: self.function_arn,
            }
        }
    }
}

/// Sends an AWS IoT Events input, passing in information about the detector model instance and the event that triggered the action
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct IotEventsAction {
    #[serde(rename = "inputName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub input_name: std::option::Option<std::string::String>,
}
impl IotEventsAction {
    /// Creates a new builder-style object to manufacture [`IotEventsAction`](crate::model::IotEventsAction)
    pub fn builder() -> crate::model::iot_events_action::Builder {
        crate::model::iot_events_action::Builder::default()
    }
}
/// See [`IotEventsAction`](crate::model::IotEventsAction)
pub mod iot_events_action {
    /// A builder for [`IotEventsAction`](crate::model::IotEventsAction)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        input_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn input_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.input_name = Some(inp.into());
            self
        }
        pub fn set_input_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.input_name = inp;
            self
        }
        /// Consumes the builder and constructs a [`IotEventsAction`](crate::model::IotEventsAction)
        pub fn build(self) -> crate::model::IotEventsAction {
            crate::model::IotEventsAction {
                input_name: self.input_name,
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
pub struct SqsAction {
    #[serde(rename = "queueUrl")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub queue_url: std::option::Option<std::string::String>,
    #[serde(rename = "useBase64")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub use_base64: std::option::Option<bool>,
}
impl SqsAction {
    /// Creates a new builder-style object to manufacture [`SqsAction`](crate::model::SqsAction)
    pub fn builder() -> crate::model::sqs_action::Builder {
        crate::model::sqs_action::Builder::default()
    }
}
/// See [`SqsAction`](crate::model::SqsAction)
pub mod sqs_action {
    /// A builder for [`SqsAction`](crate::model::SqsAction)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        queue_url: std::option::Option<std::string::String>,
        use_base64: std::option::Option<bool>,
    }
    impl Builder {
        pub fn queue_url(mut self, inp: impl Into<std::string::String>) -> Self {
            self.queue_url = Some(inp.into());
            self
        }
        pub fn set_queue_url(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.queue_url = inp;
            self
        }
        pub fn use_base64(mut self, inp: bool) -> Self {
            self.use_base64 = Some(inp);
            self
        }
        pub fn set_use_base64(mut self, inp: std::option::Option<bool>) -> Self {
            self.use_base64 = inp;
            self
        }
        /// Consumes the builder and constructs a [`SqsAction`](crate::model::SqsAction)
        pub fn build(self) -> crate::model::SqsAction {
            crate::model::SqsAction {
                queue_url: self.queue_url,
                use_base64: self.use_base64,
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
pub struct FirehoseAction {
    #[serde(rename = "deliveryStreamName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub delivery_stream_name: std::option::Option<std::string::String>,
    #[serde(rename = "separator")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub separator: std::option::Option<std::string::String>,
}
impl FirehoseAction {
    /// Creates a new builder-style object to manufacture [`FirehoseAction`](crate::model::FirehoseAction)
    pub fn builder() -> crate::model::firehose_action::Builder {
        crate::model::firehose_action::Builder::default()
    }
}
/// See [`FirehoseAction`](crate::model::FirehoseAction)
pub mod firehose_action {
    /// A builder for [`FirehoseAction`](crate::model::FirehoseAction)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        delivery_stream_name: std::option::Option<std::string::String>,
        separator: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn delivery_stream_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.delivery_stream_name = Some(inp.into());
            self
        }
        pub fn set_delivery_stream_name(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.delivery_stream_name = inp;
            self
        }
        pub fn separator(mut self, inp: impl Into<std::string::String>) -> Self {
            self.separator = Some(inp.into());
            self
        }
        pub fn set_separator(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.separator = inp;
            self
        }
        /// Consumes the builder and constructs a [`FirehoseAction`](crate::model::FirehoseAction)
        pub fn build(self) -> crate::model::FirehoseAction {
            crate::model::FirehoseAction {
                delivery_stream_name: self.delivery_stream_name,
                separator: self.separator,
            }
        }
    }
}

/// An action to be performed when the `condition` is TRUE
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Action {
    #[serde(rename = "setVariable")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub set_variable: std::option::Option<crate::model::SetVariableAction>,
    #[serde(rename = "sns")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sns: std::option::Option<crate::model::SnsTopicPublishAction>,
    #[serde(rename = "iotTopicPublish")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub iot_topic_publish: std::option::Option<crate::model::IotTopicPublishAction>,
    #[serde(rename = "setTimer")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub set_timer: std::option::Option<crate::model::SetTimerAction>,
    #[serde(rename = "clearTimer")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub clear_timer: std::option::Option<crate::model::ClearTimerAction>,
    #[serde(rename = "resetTimer")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub reset_timer: std::option::Option<crate::model::ResetTimerAction>,
    #[serde(rename = "lambda")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub lambda: std::option::Option<crate::model::LambdaAction>,
    #[serde(rename = "iotEvents")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub iot_events: std::option::Option<crate::model::IotEventsAction>,
    #[serde(rename = "sqs")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sqs: std::option::Option<crate::model::SqsAction>,
    #[serde(rename = "firehose")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub firehose: std::option::Option<crate::model::FirehoseAction>,
}
impl Action {
    /// Creates a new builder-style object to manufacture [`Action`](crate::model::Action)
    pub fn builder() -> crate::model::action::Builder {
        crate::model::action::Builder::default()
    }
}
/// See [`Action`](crate::model::Action)
pub mod action {
    /// A builder for [`Action`](crate::model::Action)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        set_variable: std::option::Option<crate::model::SetVariableAction>,
        sns: std::option::Option<crate::model::SnsTopicPublishAction>,
        iot_topic_publish: std::option::Option<crate::model::IotTopicPublishAction>,
        set_timer: std::option::Option<crate::model::SetTimerAction>,
        clear_timer: std::option::Option<crate::model::ClearTimerAction>,
        reset_timer: std::option::Option<crate::model::ResetTimerAction>,
        lambda: std::option::Option<crate::model::LambdaAction>,
        iot_events: std::option::Option<crate::model::IotEventsAction>,
        sqs: std::option::Option<crate::model::SqsAction>,
        firehose: std::option::Option<crate::model::FirehoseAction>,
    }
    impl Builder {
        pub fn set_variable(mut self, inp: crate::model::SetVariableAction) -> Self {
            self.set_variable = Some(inp);
            self
        }
        pub fn set_set_variable(
            mut self,
            inp: std::option::Option<crate::model::SetVariableAction>,
        ) -> Self {
            self.set_variable = inp;
            self
        }
        pub fn sns(mut self, inp: crate::model::SnsTopicPublishAction) -> Self {
            self.sns = Some(inp);
            self
        }
        pub fn set_sns(
            mut self,
            inp: std::option::Option<crate::model::SnsTopicPublishAction>,
        ) -> Self {
            self.sns = inp;
            self
        }
        pub fn iot_topic_publish(mut self, inp: crate::model::IotTopicPublishAction) -> Self {
            self.iot_topic_publish = Some(inp);
            self
        }
        pub fn set_iot_topic_publish(
            mut self,
            inp: std::option::Option<crate::model::IotTopicPublishAction>,
        ) -> Self {
            self.iot_topic_publish = inp;
            self
        }
        pub fn set_timer(mut self, inp: crate::model::SetTimerAction) -> Self {
            self.set_timer = Some(inp);
            self
        }
        pub fn set_set_timer(
            mut self,
            inp: std::option::Option<crate::model::SetTimerAction>,
        ) -> Self {
            self.set_timer = inp;
            self
        }
        pub fn clear_timer(mut self, inp: crate::model::ClearTimerAction) -> Self {
            self.clear_timer = Some(inp);
            self
        }
        pub fn set_clear_timer(
            mut self,
            inp: std::option::Option<crate::model::ClearTimerAction>,
        ) -> Self {
            self.clear_timer = inp;
            self
        }
        pub fn reset_timer(mut self, inp: crate::model::ResetTimerAction) -> Self {
            self.reset_timer = Some(inp);
            self
        }
        pub fn set_reset_timer(
            mut self,
            inp: std::option::Option<crate::model::ResetTimerAction>,
        ) -> Self {
            self.reset_timer = inp;
            self
        }
        pub fn lambda(mut self, inp: crate::model::LambdaAction) -> Self {
            self.lambda = Some(inp);
            self
        }
        pub fn set_lambda(mut self, inp: std::option::Option<crate::model::LambdaAction>) -> Self {
            self.lambda = inp;
            self
        }
        pub fn iot_events(mut self, inp: crate::model::IotEventsAction) -> Self {
            self.iot_events = Some(inp);
            self
        }
        pub fn set_iot_events(
            mut self,
            inp: std::option::Option<crate::model::IotEventsAction>,
        ) -> Self {
            self.iot_events = inp;
            self
        }
        pub fn sqs(mut self, inp: crate::model::SqsAction) -> Self {
            self.sqs = Some(inp);
            self
        }
        pub fn set_sqs(mut self, inp: std::option::Option<crate::model::SqsAction>) -> Self {
            self.sqs = inp;
            self
        }
        pub fn firehose(mut self, inp: crate::model::FirehoseAction) -> Self {
            self.firehose = Some(inp);
            self
        }
        pub fn set_firehose(
            mut self,
            inp: std::option::Option<crate::model::FirehoseAction>,
        ) -> Self {
            self.firehose = inp;
            self
        }
        /// Consumes the builder and constructs a [`Action`](crate::model::Action)
        pub fn build(self) -> crate::model::Action {
            crate::model::Action {
                set_variable: self.set_variable,
                sns: self.sns,
                iot_topic_publish: self.iot_topic_publish,
                set_timer: self.set_timer,
                clear_timer: self.clear_timer,
                reset_timer: self.reset_timer,
                lambda: self.lambda,
                iot_events: self.iot_events,
                sqs: self.sqs,
                firehose: self.firehose,
            }
        }
    }
}

/// The actions to be performed when the `condition` evaluates to TRUE
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Event {
    #[serde(rename = "eventName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub event_name: std::option::Option<std::string::String>,
    #[serde(rename = "condition")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub condition: std::option::Option<std::string::String>,
    #[serde(rename = "actions")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub actions: std::option::Option<std::vec::Vec<crate::model::Action>>,
}
impl Event {
    /// Creates a new builder-style object to manufacture [`Event`](crate::model::Event)
    pub fn builder() -> crate::model::event::Builder {
        crate::model::event::Builder::default()
    }
}
/// See [`Event`](crate::model::Event)
pub mod event {
    /// A builder for [`Event`](crate::model::Event)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        event_name: std::option::Option<std::string::String>,
        condition: std::option::Option<std::string::String>,
        actions: std::option::Option<std::vec::Vec<crate::model::Action>>,
    }
    impl Builder {
        pub fn event_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.event_name = Some(inp.into());
            self
        }
        pub fn set_event_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.event_name = inp;
            self
        }
        pub fn condition(mut self, inp: impl Into<std::string::String>) -> Self {
            self.condition = Some(inp.into());
            self
        }
        pub fn set_condition(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.condition = inp;
            self
        }
        pub fn actions(mut self, inp: impl Into<crate::model::Action>) -> Self {
            let mut v = self.actions.unwrap_or_default();
            v.push(inp.into());
            self.actions = Some(v);
            self
        }
        pub fn set_actions(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::Action>>,
        ) -> Self {
            self.actions = inp;
            self
        }
        /// Consumes the builder and constructs a [`Event`](crate::model::Event)
        pub fn build(self) -> crate::model::Event {
            crate::model::Event {
                event_name: self.event_name,
                condition: self.condition,
                actions: self.actions,
            }
        }
    }
}

/// Specifies the actions performed and the next state entered when a `condition` evaluates to TRUE
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct TransitionEvent {
    #[serde(rename = "eventName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub event_name: std::option::Option<std::string::String>,
    #[serde(rename = "condition")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub condition: std::option::Option<std::string::String>,
    #[serde(rename = "actions")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub actions: std::option::Option<std::vec::Vec<crate::model::Action>>,
    #[serde(rename = "nextState")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_state: std::option::Option<std::string::String>,
}
impl TransitionEvent {
    /// Creates a new builder-style object to manufacture [`TransitionEvent`](crate::model::TransitionEvent)
    pub fn builder() -> crate::model::transition_event::Builder {
        crate::model::transition_event::Builder::default()
    }
}
/// See [`TransitionEvent`](crate::model::TransitionEvent)
pub mod transition_event {
    /// A builder for [`TransitionEvent`](crate::model::TransitionEvent)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        event_name: std::option::Option<std::string::String>,
        condition: std::option::Option<std::string::String>,
        actions: std::option::Option<std::vec::Vec<crate::model::Action>>,
        next_state: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn event_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.event_name = Some(inp.into());
            self
        }
        pub fn set_event_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.event_name = inp;
            self
        }
        pub fn condition(mut self, inp: impl Into<std::string::String>) -> Self {
            self.condition = Some(inp.into());
            self
        }
        pub fn set_condition(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.condition = inp;
            self
        }
        pub fn actions(mut self, inp: impl Into<crate::model::Action>) -> Self {
            let mut v = self.actions.unwrap_or_default();
            v.push(inp.into());
            self.actions = Some(v);
            self
        }
        pub fn set_actions(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::Action>>,
        ) -> Self {
            self.actions = inp;
            self
        }
        pub fn next_state(mut self, inp: impl Into<std::string::String>) -> Self {
            self.next_state = Some(inp.into());
            self
        }
        pub fn set_next_state(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.next_state = inp;
            self
        }
        /// Consumes the builder and constructs a [`TransitionEvent`](crate::model::TransitionEvent)
        pub fn build(self) -> crate::model::TransitionEvent {
            crate::model::TransitionEvent {
                event_name: self.event_name,
                condition: self.condition,
                actions: self.actions,
                next_state: self.next_state,
            }
        }
    }
}

/// Specifies the actions performed when the `condition` evaluates to TRUE
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct OnInputLifecycle {
    #[serde(rename = "events")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub events: std::option::Option<std::vec::Vec<crate::model::Event>>,
    #[serde(rename = "transitionEvents")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub transition_events: std::option::Option<std::vec::Vec<crate::model::TransitionEvent>>,
}
impl OnInputLifecycle {
    /// Creates a new builder-style object to manufacture [`OnInputLifecycle`](crate::model::OnInputLifecycle)
    pub fn builder() -> crate::model::on_input_lifecycle::Builder {
        crate::model::on_input_lifecycle::Builder::default()
    }
}
/// See [`OnInputLifecycle`](crate::model::OnInputLifecycle)
pub mod on_input_lifecycle {
    /// A builder for [`OnInputLifecycle`](crate::model::OnInputLifecycle)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        events: std::option::Option<std::vec::Vec<crate::model::Event>>,
        transition_events: std::option::Option<std::vec::Vec<crate::model::TransitionEvent>>,
    }
    impl Builder {
        pub fn events(mut self, inp: impl Into<crate::model::Event>) -> Self {
            let mut v = self.events.unwrap_or_default();
            v.push(inp.into());
            self.events = Some(v);
            self
        }
        pub fn set_events(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::Event>>,
        ) -> Self {
            self.events = inp;
            self
        }
        pub fn transition_events(mut self, inp: impl Into<crate::model::TransitionEvent>) -> Self {
            let mut v = self.transition_events.unwrap_or_default();
            v.push(inp.into());
            self.transition_events = Some(v);
            self
        }
        pub fn set_transition_events(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::TransitionEvent>>,
        ) -> Self {
            self.transition_events = inp;
            self
        }
        /// Consumes the builder and constructs a [`OnInputLifecycle`](crate::model::OnInputLifecycle)
        pub fn build(self) -> crate::model::OnInputLifecycle {
            crate::model::OnInputLifecycle {
                events: self.events,
                transition_events: self.transition_events,
            }
        }
    }
}

/// When entering this state, perform these `actions` if the `condition` is TRUE
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct OnEnterLifecycle {
    #[serde(rename = "events")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub events: std::option::Option<std::vec::Vec<crate::model::Event>>,
}
impl OnEnterLifecycle {
    /// Creates a new builder-style object to manufacture [`OnEnterLifecycle`](crate::model::OnEnterLifecycle)
    pub fn builder() -> crate::model::on_enter_lifecycle::Builder {
        crate::model::on_enter_lifecycle::Builder::default()
    }
}
/// See [`OnEnterLifecycle`](crate::model::OnEnterLifecycle)
pub mod on_enter_lifecycle {
    /// A builder for [`OnEnterLifecycle`](crate::model::OnEnterLifecycle)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        events: std::option::Option<std::vec::Vec<crate::model::Event>>,
    }
    impl Builder {
        pub fn events(mut self, inp: impl Into<crate::model::Event>) -> Self {
            let mut v = self.events.unwrap_or_default();
            v.push(inp.into());
            self.events = Some(v);
            self
        }
        pub fn set_events(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::Event>>,
        ) -> Self {
            self.events = inp;
            self
        }
        /// Consumes the builder and constructs a [`OnEnterLifecycle`](crate::model::OnEnterLifecycle)
        pub fn build(self) -> crate::model::OnEnterLifecycle {
            crate::model::OnEnterLifecycle {
                events: self.events,
            }
        }
    }
}

/// When exiting this state, perform these `actions` if the specified `condition` is TRUE
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct OnExitLifecycle {
    #[serde(rename = "events")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub events: std::option::Option<std::vec::Vec<crate::model::Event>>,
}
impl OnExitLifecycle {
    /// Creates a new builder-style object to manufacture [`OnExitLifecycle`](crate::model::OnExitLifecycle)
    pub fn builder() -> crate::model::on_exit_lifecycle::Builder {
        crate::model::on_exit_lifecycle::Builder::default()
    }
}
/// See [`OnExitLifecycle`](crate::model::OnExitLifecycle)
pub mod on_exit_lifecycle {
    /// A builder for [`OnExitLifecycle`](crate::model::OnExitLifecycle)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        events: std::option::Option<std::vec::Vec<crate::model::Event>>,
    }
    impl Builder {
        pub fn events(mut self, inp: impl Into<crate::model::Event>) -> Self {
            let mut v = self.events.unwrap_or_default();
            v.push(inp.into());
            self.events = Some(v);
            self
        }
        pub fn set_events(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::Event>>,
        ) -> Self {
            self.events = inp;
            self
        }
        /// Consumes the builder and constructs a [`OnExitLifecycle`](crate::model::OnExitLifecycle)
        pub fn build(self) -> crate::model::OnExitLifecycle {
            crate::model::OnExitLifecycle {
                events: self.events,
            }
        }
    }
}

/// Information that defines a state of a detector
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct State {
    #[serde(rename = "stateName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub state_name: std::option::Option<std::string::String>,
    #[serde(rename = "onInput")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub on_input: std::option::Option<crate::model::OnInputLifecycle>,
    #[serde(rename = "onEnter")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub on_enter: std::option::Option<crate::model::OnEnterLifecycle>,
    #[serde(rename = "onExit")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub on_exit: std::option::Option<crate::model::OnExitLifecycle>,
}
impl State {
    /// Creates a new builder-style object to manufacture [`State`](crate::model::State)
    pub fn builder() -> crate::model::state::Builder {
        crate::model::state::Builder::default()
    }
}
/// See [`State`](crate::model::State)
pub mod state {
    /// A builder for [`State`](crate::model::State)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        state_name: std::option::Option<std::string::String>,
        on_input: std::option::Option<crate::model::OnInputLifecycle>,
        on_enter: std::option::Option<crate::model::OnEnterLifecycle>,
        on_exit: std::option::Option<crate::model::OnExitLifecycle>,
    }
    impl Builder {
        pub fn state_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.state_name = Some(inp.into());
            self
        }
        pub fn set_state_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.state_name = inp;
            self
        }
        pub fn on_input(mut self, inp: crate::model::OnInputLifecycle) -> Self {
            self.on_input = Some(inp);
            self
        }
        pub fn set_on_input(
            mut self,
            inp: std::option::Option<crate::model::OnInputLifecycle>,
        ) -> Self {
            self.on_input = inp;
            self
        }
        pub fn on_enter(mut self, inp: crate::model::OnEnterLifecycle) -> Self {
            self.on_enter = Some(inp);
            self
        }
        pub fn set_on_enter(
            mut self,
            inp: std::option::Option<crate::model::OnEnterLifecycle>,
        ) -> Self {
            self.on_enter = inp;
            self
        }
        pub fn on_exit(mut self, inp: crate::model::OnExitLifecycle) -> Self {
            self.on_exit = Some(inp);
            self
        }
        pub fn set_on_exit(
            mut self,
            inp: std::option::Option<crate::model::OnExitLifecycle>,
        ) -> Self {
            self.on_exit = inp;
            self
        }
        /// Consumes the builder and constructs a [`State`](crate::model::State)
        pub fn build(self) -> crate::model::State {
            crate::model::State {
                state_name: self.state_name,
                on_input: self.on_input,
                on_enter: self.on_enter,
                on_exit: self.on_exit,
            }
        }
    }
}

/// Information that defines how a detector operates
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct DetectorModelDefinition {
    #[serde(rename = "states")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub states: std::option::Option<std::vec::Vec<crate::model::State>>,
    #[serde(rename = "initialStateName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub initial_state_name: std::option::Option<std::string::String>,
}
impl DetectorModelDefinition {
    /// Creates a new builder-style object to manufacture [`DetectorModelDefinition`](crate::model::DetectorModelDefinition)
    pub fn builder() -> crate::model::detector_model_definition::Builder {
        crate::model::detector_model_definition::Builder::default()
    }
}
/// See [`DetectorModelDefinition`](crate::model::DetectorModelDefinition)
pub mod detector_model_definition {
    /// A builder for [`DetectorModelDefinition`](crate::model::DetectorModelDefinition)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        states: std::option::Option<std::vec::Vec<crate::model::State>>,
        initial_state_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn states(mut self, inp: impl Into<crate::model::State>) -> Self {
            let mut v = self.states.unwrap_or_default();
            v.push(inp.into());
            self.states = Some(v);
            self
        }
        pub fn set_states(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::State>>,
        ) -> Self {
            self.states = inp;
            self
        }
        pub fn initial_state_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.initial_state_name = Some(inp.into());
            self
        }
        pub fn set_initial_state_name(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.initial_state_name = inp;
            self
        }
        /// Consumes the builder and constructs a [`DetectorModelDefinition`](crate::model::DetectorModelDefinition)
        pub fn build(self) -> crate::model::DetectorModelDefinition {
            crate::model::DetectorModelDefinition {
                states: self.states,
                initial_state_name: self.initial_state_name,
            }
        }
    }
}

/// Information about how the detector model is configured
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct DetectorModelConfiguration {
    #[serde(rename = "detectorModelName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub detector_model_name: std::option::Option<std::string::String>,
    #[serde(rename = "detectorModelVersion")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub detector_model_version: std::option::Option<std::string::String>,
    #[serde(rename = "detectorModelDescription")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub detector_model_description: std::option::Option<std::string::String>,
    #[serde(rename = "detectorModelArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub detector_model_arn: std::option::Option<std::string::String>,
    #[serde(rename = "roleArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub role_arn: std::option::Option<std::string::String>,
    #[serde(rename = "creationTime", with = "smithy_json::serde_with::epoch_seconds_option")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "lastUpdateTime", with = "smithy_json::serde_with::epoch_seconds_option")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_update_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "status")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<crate::model::DetectorModelVersionStatus>,
    /// The input attribute key used to identify a device or system to create a detector, an instance of the detector model
    #[serde(rename = "key")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub key: std::option::Option<std::string::String>,
    #[serde(rename = "evaluationMethod")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub evaluation_method: std::option::Option<crate::model::EvaluationMethod>,
}
impl DetectorModelConfiguration {
    /// Creates a new builder-style object to manufacture [`DetectorModelConfiguration`](crate::model::DetectorModelConfiguration)
    pub fn builder() -> crate::model::detector_model_configuration::Builder {
        crate::model::detector_model_configuration::Builder::default()
    }
}
/// See [`DetectorModelConfiguration`](crate::model::DetectorModelConfiguration)
pub mod detector_model_configuration {
    /// A builder for [`DetectorModelConfiguration`](crate::model::DetectorModelConfiguration)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        detector_model_name: std::option::Option<std::string::String>,
        detector_model_version: std::option::Option<std::string::String>,
        detector_model_description: std::option::Option<std::string::String>,
        detector_model_arn: std::option::Option<std::string::String>,
        role_arn: std::option::Option<std::string::String>,
        creation_time: std::option::Option<smithy_types::Instant>,
        last_update_time: std::option::Option<smithy_types::Instant>,
        status: std::option::Option<crate::model::DetectorModelVersionStatus>,
        key: std::option::Option<std::string::String>,
        evaluation_method: std::option::Option<crate::model::EvaluationMethod>,
    }
    impl Builder {
        pub fn detector_model_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.detector_model_name = Some(inp.into());
            self
        }
        pub fn set_detector_model_name(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.detector_model_name = inp;
            self
        }
        pub fn detector_model_version(mut self, inp: impl Into<std::string::String>) -> Self {
            self.detector_model_version = Some(inp.into());
            self
        }
        pub fn set_detector_model_version(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.detector_model_version = inp;
            self
        }
        pub fn detector_model_description(mut self, inp: impl Into<std::string::String>) -> Self {
            self.detector_model_description = Some(inp.into());
            self
        }
        pub fn set_detector_model_description(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.detector_model_description = inp;
            self
        }
        pub fn detector_model_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.detector_model_arn = Some(inp.into());
            self
        }
        pub fn set_detector_model_arn(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.detector_model_arn = inp;
            self
        }
        pub fn role_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.role_arn = Some(inp.into());
            self
        }
        pub fn set_role_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.role_arn = inp;
            self
        }
        pub fn creation_time(mut self, inp: smithy_types::Instant) -> Self {
            self.creation_time = Some(inp);
            self
        }
        pub fn set_creation_time(
            mut self,
            inp: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.creation_time = inp;
            self
        }
        pub fn last_update_time(mut self, inp: smithy_types::Instant) -> Self {
            self.last_update_time = Some(inp);
            self
        }
        pub fn set_last_update_time(
            mut self,
            inp: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.last_update_time = inp;
            self
        }
        pub fn status(mut self, inp: crate::model::DetectorModelVersionStatus) -> Self {
            self.status = Some(inp);
            self
        }
        pub fn set_status(
            mut self,
            inp: std::option::Option<crate::model::DetectorModelVersionStatus>,
        ) -> Self {
            self.status = inp;
            self
        }
        /// The input attribute key used to identify a device or system to create a detector, an instance of the detector model
        pub fn key(mut self, inp: impl Into<std::string::String>) -> Self {
            self.key = Some(inp.into());
            self
        }
        pub fn set_key(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.key = inp;
            self
        }
        pub fn evaluation_method(mut self, inp: crate::model::EvaluationMethod) -> Self {
            self.evaluation_method = Some(inp);
            self
        }
        pub fn set_evaluation_method(
            mut self,
            inp: std::option::Option<crate::model::EvaluationMethod>,
        ) -> Self {
            self.evaluation_method = inp;
            self
        }
        /// Consumes the builder and constructs a [`DetectorModelConfiguration`](crate::model::DetectorModelConfiguration)
        pub fn build(self) -> crate::model::DetectorModelConfiguration {
            crate::model::DetectorModelConfiguration {
                detector_model_name: self.detector_model_name,
                detector_model_version: self.detector_model_version,
                detector_model_description: self.detector_model_description,
                detector_model_arn: self.detector_model_arn,
                role_arn: self.role_arn,
                creation_time: self.creation_time,
                last_update_time: self.last_update_time,
                status: self.status,
                key: self.key,
                evaluation_method: self.evaluation_method,
            }
        }
    }
}

/// Information about the detector model
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct DetectorModel {
    #[serde(rename = "detectorModelDefinition")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub detector_model_definition: std::option::Option<crate::model::DetectorModelDefinition>,
    #[serde(rename = "detectorModelConfiguration")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub detector_model_configuration: std::option::Option<crate::model::DetectorModelConfiguration>,
}
impl DetectorModel {
    /// Creates a new builder-style object to manufacture [`DetectorModel`](crate::model::DetectorModel)
    pub fn builder() -> crate::model::detector_model::Builder {
        crate::model::detector_model::Builder::default()
    }
}
/// See [`DetectorModel`](crate::model::DetectorModel)
pub mod detector_model {
    /// A builder for [`DetectorModel`](crate::model::DetectorModel)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        detector_model_definition: std::option::Option<crate::model::DetectorModelDefinition>,
        detector_model_configuration: std::option::Option<crate::model::DetectorModelConfiguration>,
    }
    impl Builder {
        pub fn detector_model_definition(
            mut self,
            inp: crate::model::DetectorModelDefinition,
        ) -> Self {
            self.detector_model_definition = Some(inp);
            self
        }
        pub fn set_detector_model_definition(
            mut self,
            inp: std::option::Option<crate::model::DetectorModelDefinition>,
        ) -> Self {
            self.detector_model_definition = inp;
            self
        }
        pub fn detector_model_configuration(
            mut self,
            inp: crate::model::DetectorModelConfiguration,
        ) -> Self {
            self.detector_model_configuration = Some(inp);
            self
        }
        pub fn set_detector_model_configuration(
            mut self,
            inp: std::option::Option<crate::model::DetectorModelConfiguration>,
        ) -> Self {
            self.detector_model_configuration = inp;
            self
        }
        /// Consumes the builder and constructs a [`DetectorModel`](crate::model::DetectorModel)
        pub fn build(self) -> crate::model::DetectorModel {
            crate::model::DetectorModel {
                detector_model_definition: self.detector_model_definition,
                detector_model_configuration: self.detector_model_configuration,
            }
        }
    }
}
