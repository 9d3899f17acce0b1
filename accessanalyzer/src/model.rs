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
pub enum Type {
    Account,
    Organization,
    /// A value the service returned that this version of the client does not know about
    Unknown(String),
}
impl std::convert::From<&str> for Type {
    fn from(s: &str) -> Self {
        match s {
            "ACCOUNT" => Type::Account,
            "ORGANIZATION" => Type::Organization,
            other => Type::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for Type {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Type::from(s))
    }
}
impl Type {
    pub fn as_str(&self) -> &str {
        match self {
            Type::Account => "ACCOUNT",
            Type::Organization => "ORGANIZATION",
            Type::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this version of the client
    pub fn values() -> &'static [&'static str] {
        &["ACCOUNT", "ORGANIZATION"]
    }
}
impl AsRef<str> for Type {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for Type {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for Type {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Type::from(data.as_str()))
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
pub enum AnalyzerStatus {
    Active,
    Creating,
    Disabled,
    Failed,
    /// A value the service returned that this version of the client does not know about
    Unknown(String),
}
impl std::convert::From<&str> for AnalyzerStatus {
    fn from(s: &str) -> Self {
        match s {
            "ACTIVE" => AnalyzerStatus::Active,
            "CREATING" => AnalyzerStatus::Creating,
            "DISABLED" => AnalyzerStatus::Disabled,
            "FAILED" => AnalyzerStatus::Failed,
            other => AnalyzerStatus::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for AnalyzerStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(AnalyzerStatus::from(s))
    }
}
impl AnalyzerStatus {
    pub fn as_str(&self) -> &str {
        match self {
            AnalyzerStatus::Active => "ACTIVE",
            AnalyzerStatus::Creating => "CREATING",
            AnalyzerStatus::Disabled => "DISABLED",
            AnalyzerStatus::Failed => "FAILED",
            AnalyzerStatus::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this version of the client
    pub fn values() -> &'static [&'static str] {
        &["ACTIVE", "CREATING", "DISABLED", "FAILED"]
    }
}
impl AsRef<str> for AnalyzerStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for AnalyzerStatus {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for AnalyzerStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(AnalyzerStatus::from(data.as_str()))
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
pub enum ReasonCode {
    AwsServiceAccessDisabled,
    DelegatedAdministratorDeregistered,
    OrganizationDeleted,
    ServiceLinkedRoleCreationFailed,
    /// A value the service returned that this version of the client does not know about
    Unknown(String),
}
impl std::convert::From<&str> for ReasonCode {
    fn from(s: &str) -> Self {
        match s {
            "AWS_SERVICE_ACCESS_DISABLED" => ReasonCode::AwsServiceAccessDisabled,
            "DELEGATED_ADMINISTRATOR_DEREGISTERED" => ReasonCode::DelegatedAdministratorDeregistered,
            "ORGANIZATION_DELETED" => ReasonCode::OrganizationDeleted,
            "SERVICE_LINKED_ROLE_CREATION_FAILED" => ReasonCode::ServiceLinkedRoleCreationFailed,
            other => ReasonCode::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ReasonCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ReasonCode::from(s))
    }
}
impl ReasonCode {
    pub fn as_str(&self) -> &str {
        match self {
            ReasonCode::AwsServiceAccessDisabled => "AWS_SERVICE_ACCESS_DISABLED",
            ReasonCode::DelegatedAdministratorDeregistered => "DELEGATED_ADMINISTRATOR_DEREGISTERED",
            ReasonCode::OrganizationDeleted => "ORGANIZATION_DELETED",
            ReasonCode::ServiceLinkedRoleCreationFailed => "SERVICE_LINKED_ROLE_CREATION_FAILED",
            ReasonCode::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this version of the client
    pub fn values() -> &'static [&'static str] {
        &["AWS_SERVICE_ACCESS_DISABLED", "DELEGATED_ADMINISTRATOR_DEREGISTERED", "ORGANIZATION_DELETED", "SERVICE_LINKED_ROLE_CREATION_FAILED"]
    }
}
impl AsRef<str> for ReasonCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for ReasonCode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for ReasonCode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(ReasonCode::from(data.as_str()))
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
pub enum FindingStatus {
    Active,
    Archived,
    Resolved,
    /// A value the service returned that this version of the client does not know about
    Unknown(String),
}
impl std::convert::From<&str> for FindingStatus {
    fn from(s: &str) -> Self {
        match s {
            "ACTIVE" => FindingStatus::Active,
            "ARCHIVED" => FindingStatus::Archived,
            "RESOLVED" => FindingStatus::Resolved,
            other => FindingStatus::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for FindingStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(FindingStatus::from(s))
    }
}
impl FindingStatus {
    pub fn as_str(&self) -> &str {
        match self {
            FindingStatus::Active => "ACTIVE",
            FindingStatus::Archived => "ARCHIVED",
            FindingStatus::Resolved => "RESOLVED",
            FindingStatus::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this version of the client
    pub fn values() -> &'static [&'static str] {
        &["ACTIVE", "ARCHIVED", "RESOLVED"]
    }
}
impl AsRef<str> for FindingStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for FindingStatus {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for FindingStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(FindingStatus::from(data.as_str()))
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
pub enum FindingStatusUpdate {
    Active,
    Archived,
    /// A value the service returned that this version of the client does not know about
    Unknown(String),
}
impl std::convert::From<&str> for FindingStatusUpdate {
    fn from(s: &str) -> Self {
        match s {
            "ACTIVE" => FindingStatusUpdate::Active,
            "ARCHIVED" => FindingStatusUpdate::Archived,
            other => FindingStatusUpdate::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for FindingStatusUpdate {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(FindingStatusUpdate::from(s))
    }
}
impl FindingStatusUpdate {
    pub fn as_str(&self) -> &str {
        match self {
            FindingStatusUpdate::Active => "ACTIVE",
            FindingStatusUpdate::Archived => "ARCHIVED",
            FindingStatusUpdate::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this version of the client
    pub fn values() -> &'static [&'static str] {
        &["ACTIVE", "ARCHIVED"]
    }
}
impl AsRef<str> for FindingStatusUpdate {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for FindingStatusUpdate {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for FindingStatusUpdate {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(FindingStatusUpdate::from(data.as_str()))
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
pub enum ResourceType {
    AwsS3Bucket,
    AwsIamRole,
    AwsSqsQueue,
    AwsLambdaFunction,
    AwsLambdaLayerVersion,
    AwsKmsKey,
    /// A value the service returned that this version of the client does not know about
    Unknown(String),
}
impl std::convert::From<&str> for ResourceType {
    fn from(s: &str) -> Self {
        match s {
            "AWS::S3::Bucket" => ResourceType::AwsS3Bucket,
            "AWS::IAM::Role" => ResourceType::AwsIamRole,
            "AWS::SQS::Queue" => ResourceType::AwsSqsQueue,
            "AWS::Lambda::Function" => ResourceType::AwsLambdaFunction,
            "AWS::Lambda::LayerVersion" => ResourceType::AwsLambdaLayerVersion,
            "AWS::KMS::Key" => ResourceType::AwsKmsKey,
            other => ResourceType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ResourceType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ResourceType::from(s))
    }
}
impl ResourceType {
    pub fn as_str(&self) -> &str {
        match self {
            ResourceType::AwsS3Bucket => "AWS::S3::Bucket",
            ResourceType::AwsIamRole => "AWS::IAM::Role",
            ResourceType::AwsSqsQueue => "AWS::SQS::Queue",
            ResourceType::AwsLambdaFunction => "AWS::Lambda::Function",
            ResourceType::AwsLambdaLayerVersion => "AWS::Lambda::LayerVersion",
            ResourceType::AwsKmsKey => "AWS::KMS::Key",
            ResourceType::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this version of the client
    pub fn values() -> &'static [&'static str] {
        &["AWS::S3::Bucket", "AWS::IAM::Role", "AWS::SQS::Queue", "AWS::Lambda::Function", "AWS::Lambda::LayerVersion", "AWS::KMS::Key"]
    }
}
impl AsRef<str> for ResourceType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for ResourceType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for ResourceType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(ResourceType::from(data.as_str()))
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
pub enum FindingSourceType {
    Policy,
    BucketAcl,
    S3AccessPoint,
    /// A value the service returned that this version of the client does not know about
    Unknown(String),
}
impl std::convert::From<&str> for FindingSourceType {
    fn from(s: &str) -> Self {
        match s {
            "POLICY" => FindingSourceType::Policy,
            "BUCKET_ACL" => FindingSourceType::BucketAcl,
            "S3_ACCESS_POINT" => FindingSourceType::S3AccessPoint,
            other => FindingSourceType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for FindingSourceType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(FindingSourceType::from(s))
    }
}
impl FindingSourceType {
    pub fn as_str(&self) -> &str {
        match self {
            FindingSourceType::Policy => "POLICY",
            FindingSourceType::BucketAcl => "BUCKET_ACL",
            FindingSourceType::S3AccessPoint => "S3_ACCESS_POINT",
            FindingSourceType::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this version of the client
    pub fn values() -> &'static [&'static str] {
        &["POLICY", "BUCKET_ACL", "S3_ACCESS_POINT"]
    }
}
impl AsRef<str> for FindingSourceType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for FindingSourceType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for FindingSourceType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(FindingSourceType::from(data.as_str()))
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
pub enum OrderBy {
    Asc,
    Desc,
    /// A value the service returned that this version of the client does not know about
    Unknown(String),
}
impl std::convert::From<&str> for OrderBy {
    fn from(s: &str) -> Self {
        match s {
            "ASC" => OrderBy::Asc,
            "DESC" => OrderBy::Desc,
            other => OrderBy::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for OrderBy {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(OrderBy::from(s))
    }
}
impl OrderBy {
    pub fn as_str(&self) -> &str {
        match self {
            OrderBy::Asc => "ASC",
            OrderBy::Desc => "DESC",
            OrderBy::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this version of the client
    pub fn values() -> &'static [&'static str] {
        &["ASC", "DESC"]
    }
}
impl AsRef<str> for OrderBy {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for OrderBy {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for OrderBy {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(OrderBy::from(data.as_str()))
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
pub enum ValidationExceptionReason {
    UnknownOperation,
    CannotParse,
    FieldValidationFailed,
    Other,
    /// A value the service returned that this version of the client does not know about
    Unknown(String),
}
impl std::convert::From<&str> for ValidationExceptionReason {
    fn from(s: &str) -> Self {
        match s {
            "unknownOperation" => ValidationExceptionReason::UnknownOperation,
            "cannotParse" => ValidationExceptionReason::CannotParse,
            "fieldValidationFailed" => ValidationExceptionReason::FieldValidationFailed,
            "other" => ValidationExceptionReason::Other,
            other => ValidationExceptionReason::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ValidationExceptionReason {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ValidationExceptionReason::from(s))
    }
}
impl ValidationExceptionReason {
    pub fn as_str(&self) -> &str {
        match self {
            ValidationExceptionReason::UnknownOperation => "unknownOperation",
            ValidationExceptionReason::CannotParse => "cannotParse",
            ValidationExceptionReason::FieldValidationFailed => "fieldValidationFailed",
            ValidationExceptionReason::Other => "other",
            ValidationExceptionReason::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this version of the client
    pub fn values() -> &'static [&'static str] {
        &["unknownOperation", "cannotParse", "fieldValidationFailed", "other"]
    }
}
impl AsRef<str> for ValidationExceptionReason {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for ValidationExceptionReason {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for ValidationExceptionReason {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(ValidationExceptionReason::from(data.as_str()))
    }
}

/// Why an analyzer is in its current state
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct StatusReason {
    #[serde(rename = "code")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub code: std::option::Option<crate::model::ReasonCode>,
}
impl StatusReason {
    /// Creates a new builder-style object to manufacture [`StatusReason`](crate::model::StatusReason)
    pub fn builder() -> crate::model::status_reason::Builder {
        crate::model::status_reason::Builder::default()
    }
}
/// See [`StatusReason`](crate::model::StatusReason)
pub mod status_reason {
    /// A builder for [`StatusReason`](crate::model::StatusReason)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        code: std::option::Option<crate::model::ReasonCode>,
    }
    impl Builder {
        pub fn code(mut self, inp: crate::model::ReasonCode) -> Self {
            self.code = Some(inp);
            self
        }
        pub fn set_code(mut self, inp: std::option::Option<crate::model::ReasonCode>) -> Self {
            self.code = inp;
            self
        }
        /// Consumes the builder and constructs a [`StatusReason`](crate::model::StatusReason)
        pub fn build(self) -> crate::model::StatusReason {
            crate::model::StatusReason {
                code: self.code,
            }
        }
    }
}

/// Contains information about the analyzer
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct AnalyzerSummary {
    #[serde(rename = "arn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub arn: std::option::Option<std::string::String>,
    #[serde(rename = "name")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    /// The type of the analyzer, which corresponds to the zone of trust chosen for it
    #[serde(rename = "type")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub r#type: std::option::Option<crate::model::Type>,
    #[serde(rename = "createdAt", with = "smithy_json::serde_with::epoch_seconds_option")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub created_at: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "lastResourceAnalyzed")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_resource_analyzed: std::option::Option<std::string::String>,
    #[serde(rename = "lastResourceAnalyzedAt", with = "smithy_json::serde_with::epoch_seconds_option")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_resource_analyzed_at: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "tags")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tags:
        std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    /// The status of the analyzer. An `Active` analyzer successfully monitors supported resources and generates new findings.
    #[serde(rename = "status")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<crate::model::AnalyzerStatus>,
    #[serde(rename = "statusReason")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status_reason: std::option::Option<crate::model::StatusReason>,
}
impl AnalyzerSummary {
    /// Creates a new builder-style object to manufacture [`AnalyzerSummary`](crate::model::AnalyzerSummary)
    pub fn builder() -> crate::model::analyzer_summary::Builder {
        crate::model::analyzer_summary::Builder::default()
    }
}
/// See [`AnalyzerSummary`](crate::model::AnalyzerSummary)
pub mod analyzer_summary {
    /// A builder for [`AnalyzerSummary`](crate::model::AnalyzerSummary)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        arn: std::option::Option<std::string::String>,
        name: std::option::Option<std::string::String>,
        r#type: std::option::Option<crate::model::Type>,
        created_at: std::option::Option<smithy_types::Instant>,
        last_resource_analyzed: std::option::Option<std::string::String>,
        last_resource_analyzed_at: std::option::Option<smithy_types::Instant>,
        tags:
            std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        status: std::option::Option<crate::model::AnalyzerStatus>,
        status_reason: std::option::Option<crate::model::StatusReason>,
    }
    impl Builder {
        pub fn arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.arn = Some(inp.into());
            self
        }
        pub fn set_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.arn = inp;
            self
        }
        pub fn name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.name = Some(inp.into());
            self
        }
        pub fn set_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.name = inp;
            self
        }
        /// The type of the analyzer, which corresponds to the zone of trust chosen for it
        pub fn r#type(mut self, inp: crate::model::Type) -> Self {
            self.r#type = Some(inp);
            self
        }
        pub fn set_type(mut self, inp: std::option::Option<crate::model::Type>) -> Self {
            self.r#type = inp;
            self
        }
        pub fn created_at(mut self, inp: smithy_types::Instant) -> Self {
            self.created_at = Some(inp);
            self
        }
        pub fn set_created_at(mut self, inp: std::option::Option<smithy_types::Instant>) -> Self {
            self.created_at = inp;
            self
        }
        pub fn last_resource_analyzed(mut self, inp: impl Into<std::string::String>) -> Self {
            self.last_resource_analyzed = Some(inp.into());
            self
        }
        pub fn set_last_resource_analyzed(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.last_resource_analyzed = inp;
            self
        }
        pub fn last_resource_analyzed_at(mut self, inp: smithy_types::Instant) -> Self {
            self.last_resource_analyzed_at = Some(inp);
            self
        }
        pub fn set_last_resource_analyzed_at(
            mut self,
            inp: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.last_resource_analyzed_at = inp;
            self
        }
        pub fn tags(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.tags.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.tags = Some(hash_map);
            self
        }
        pub fn set_tags(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        ) -> Self {
            self.tags = inp;
            self
        }
        /// The status of the analyzer. An `Active` analyzer successfully monitors supported resources and generates new findings.
        pub fn status(mut self, inp: crate::model::AnalyzerStatus) -> Self {
            self.status = Some(inp);
            self
        }
        pub fn set_status(
            mut self,
            inp: std::option::Option<crate::model::AnalyzerStatus>,
        ) -> Self {
            self.status = inp;
            self
        }
        pub fn status_reason(mut self, inp: crate::model::StatusReason) -> Self {
            self.status_reason = Some(inp);
            self
        }
        pub fn set_status_reason(
            mut self,
            inp: std::option::Option<crate::model::StatusReason>,
        ) -> Self {
            self.status_reason = inp;
            self
        }
        /// Consumes the builder and constructs a [`AnalyzerSummary`](crate::model::AnalyzerSummary)
        pub fn build(self) -> crate::model::AnalyzerSummary {
            crate::model::AnalyzerSummary {
                arn: self.arn,
                name: self.name,
                r#type: self.r#type,
                created_at: self.created_at,
                last_resource_analyzed: self.last_resource_analyzed,
                last_resource_analyzed_at: self.last_resource_analyzed_at,
                tags: self.tags,
                status: self.status,
                status_reason: self.status_reason,
            }
        }
    }
}

/// The criteria to use in the filter that defines the archive rule
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Criterion {
    #[serde(rename = "eq")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub eq: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "neq")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub neq: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "contains")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub contains: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "exists")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub exists: std::option::Option<bool>,
}
impl Criterion {
    /// Creates a new builder-style object to manufacture [`Criterion`](crate::model::Criterion)
    pub fn builder() -> crate::model::criterion::Builder {
        crate::model::criterion::Builder::default()
    }
}
/// See [`Criterion`](crate::model::Criterion)
pub mod criterion {
    /// A builder for [`Criterion`](crate::model::Criterion)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        eq: std::option::Option<std::vec::Vec<std::string::String>>,
        neq: std::option::Option<std::vec::Vec<std::string::String>>,
        contains: std::option::Option<std::vec::Vec<std::string::String>>,
        exists: std::option::Option<bool>,
    }
    impl Builder {
        pub fn eq(mut self, inp: impl Into<std::string::String>) -> Self {
            let mut v = self.eq.unwrap_or_default();
            v.push(inp.into());
            self.eq = Some(v);
            self
        }
        pub fn set_eq(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.eq = inp;
            self
        }
        pub fn neq(mut self, inp: impl Into<std::string::String>) -> Self {
            let mut v = self.neq.unwrap_or_default();
            v.push(inp.into());
            self.neq = Some(v);
            self
        }
        pub fn set_neq(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.neq = inp;
            self
        }
        pub fn contains(mut self, inp: impl Into<std::string::String>) -> Self {
            let mut v = self.contains.unwrap_or_default();
            v.push(inp.into());
            self.contains = Some(v);
            self
        }
        pub fn set_contains(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.contains = inp;
            self
        }
        pub fn exists(mut self, inp: bool) -> Self {
            self.exists = Some(inp);
            self
        }
        pub fn set_exists(mut self, inp: std::option::Option<bool>) -> Self {
            self.exists = inp;
            self
        }
        /// Consumes the builder and constructs a [`Criterion`](crate::model::Criterion)
        pub fn build(self) -> crate::model::Criterion {
            crate::model::Criterion {
                eq: self.eq,
                neq: self.neq,
                contains: self.contains,
                exists: self.exists,
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
pub struct ArchiveRuleSummary {
    #[serde(rename = "ruleName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub rule_name: std::option::Option<std::string::String>,
    #[serde(rename = "filter")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub filter:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::Criterion>>,
    #[serde(rename = "createdAt", with = "smithy_json::serde_with::epoch_seconds_option")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub created_at: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "updatedAt", with = "smithy_json::serde_with::epoch_seconds_option")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub updated_at: std::option::Option<smithy_types::Instant>,
}
impl ArchiveRuleSummary {
    /// Creates a new builder-style object to manufacture [`ArchiveRuleSummary`](crate::model::ArchiveRuleSummary)
    pub fn builder() -> crate::model::archive_rule_summary::Builder {
        crate::model::archive_rule_summary::Builder::default()
    }
}
/// See [`ArchiveRuleSummary`](crate::model::ArchiveRuleSummary)
pub mod archive_rule_summary {
    /// A builder for [`ArchiveRuleSummary`](crate::model::ArchiveRuleSummary)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        rule_name: std::option::Option<std::string::String>,
        filter:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::Criterion>>,
        created_at: std::option::Option<smithy_types::Instant>,
        updated_at: std::option::Option<smithy_types::Instant>,
    }
    impl Builder {
        pub fn rule_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.rule_name = Some(inp.into());
            self
        }
        pub fn set_rule_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.rule_name = inp;
            self
        }
        pub fn filter(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::Criterion>,
        ) -> Self {
            let mut hash_map = self.filter.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.filter = Some(hash_map);
            self
        }
        pub fn set_filter(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::Criterion>>,
        ) -> Self {
            self.filter = inp;
            self
        }
        pub fn created_at(mut self, inp: smithy_types::Instant) -> Self {
            self.created_at = Some(inp);
            self
        }
        pub fn set_created_at(mut self, inp: std::option::Option<smithy_types::Instant>) -> Self {
            self.created_at = inp;
            self
        }
        pub fn updated_at(mut self, inp: smithy_types::Instant) -> Self {
            self.updated_at = Some(inp);
            self
        }
        pub fn set_updated_at(mut self, inp: std::option::Option<smithy_types::Instant>) -> Self {
            self.updated_at = inp;
            self
        }
        /// Consumes the builder and constructs a [`ArchiveRuleSummary`](crate::model::ArchiveRuleSummary)
        pub fn build(self) -> crate::model::ArchiveRuleSummary {
            crate::model::ArchiveRuleSummary {
                rule_name: self.rule_name,
                filter: self.filter,
                created_at: self.created_at,
                updated_at: self.updated_at,
            }
        }
    }
}

/// An archive rule to create together with an analyzer
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct InlineArchiveRule {
    #[serde(rename = "ruleName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub rule_name: std::option::Option<std::string::String>,
    #[serde(rename = "filter")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub filter:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::Criterion>>,
}
impl InlineArchiveRule {
    /// Creates a new builder-style object to manufacture [`InlineArchiveRule`](crate::model::InlineArchiveRule)
    pub fn builder() -> crate::model::inline_archive_rule::Builder {
        crate::model::inline_archive_rule::Builder::default()
    }
}
/// See [`InlineArchiveRule`](crate::model::InlineArchiveRule)
pub mod inline_archive_rule {
    /// A builder for [`InlineArchiveRule`](crate::model::InlineArchiveRule)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        rule_name: std::option::Option<std::string::String>,
        filter:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::Criterion>>,
    }
    impl Builder {
        pub fn rule_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.rule_name = Some(inp.into());
            self
        }
        pub fn set_rule_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.rule_name = inp;
            self
        }
        pub fn filter(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::Criterion>,
        ) -> Self {
            let mut hash_map = self.filter.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.filter = Some(hash_map);
            self
        }
        pub fn set_filter(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::Criterion>>,
        ) -> Self {
            self.filter = inp;
            self
        }
        /// Consumes the builder and constructs a [`InlineArchiveRule`](crate::model::InlineArchiveRule)
        pub fn build(self) -> crate::model::InlineArchiveRule {
            crate::model::InlineArchiveRule {
                rule_name: self.rule_name,
                filter: self.filter,
            }
        }
    }
}

/// Details about the analyzed resource
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct AnalyzedResource {
    #[serde(rename = "resourceArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_arn: std::option::Option<std::string::String>,
    #[serde(rename = "resourceType")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_type: std::option::Option<crate::model::ResourceType>,
    #[serde(rename = "createdAt", with = "smithy_json::serde_with::epoch_seconds_option")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub created_at: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "analyzedAt", with = "smithy_json::serde_with::epoch_seconds_option")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub analyzed_at: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "updatedAt", with = "smithy_json::serde_with::epoch_seconds_option")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub updated_at: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "isPublic")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_public: std::option::Option<bool>,
    #[serde(rename = "actions")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub actions: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "sharedVia")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub shared_via: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "status")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<crate::model::FindingStatus>,
    #[serde(rename = "resourceOwnerAccount")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_owner_account: std::option::Option<std::string::String>,
    #[serde(rename = "error")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub error: std::option::Option<std::string::String>,
}
impl AnalyzedResource {
    /// Creates a new builder-style object to manufacture [`AnalyzedResource`](crate::model::AnalyzedResource)
    pub fn builder() -> crate::model::analyzed_resource::Builder {
        crate::model::analyzed_resource::Builder::default()
    }
}
/// See [`AnalyzedResource`](crate::model::AnalyzedResource)
pub mod analyzed_resource {
    /// A builder for [`AnalyzedResource`](crate::model::AnalyzedResource)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        resource_arn: std::option::Option<std::string::String>,
        resource_type: std::option::Option<crate::model::ResourceType>,
        created_at: std::option::Option<smithy_types::Instant>,
        analyzed_at: std::option::Option<smithy_types::Instant>,
        updated_at: std::option::Option<smithy_types::Instant>,
        is_public: std::option::Option<bool>,
        actions: std::option::Option<std::vec::Vec<std::string::String>>,
        shared_via: std::option::Option<std::vec::Vec<std::string::String>>,
        status: std::option::Option<crate::model::FindingStatus>,
        resource_owner_account: std::option::Option<std::string::String>,
        error: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn resource_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.resource_arn = Some(inp.into());
            self
        }
        pub fn set_resource_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.resource_arn = inp;
            self
        }
        pub fn resource_type(mut self, inp: crate::model::ResourceType) -> Self {
            self.resource_type = Some(inp);
            self
        }
        pub fn set_resource_type(
            mut self,
            inp: std::option::Option<crate::model::ResourceType>,
        ) -> Self {
            self.resource_type = inp;
            self
        }
        pub fn created_at(mut self, inp: smithy_types::Instant) -> Self {
            self.created_at = Some(inp);
            self
        }
        pub fn set_created_at(mut self, inp: std::option::Option<smithy_types::Instant>) -> Self {
            self.created_at = inp;
            self
        }
        pub fn analyzed_at(mut self, inp: smithy_types::Instant) -> Self {
            self.analyzed_at = Some(inp);
            self
        }
        pub fn set_analyzed_at(mut self, inp: std::option::Option<smithy_types::Instant>) -> Self {
            self.analyzed_at = inp;
            self
        }
        pub fn updated_at(mut self, inp: smithy_types::Instant) -> Self {
            self.updated_at = Some(inp);
            self
        }
        pub fn set_updated_at(mut self, inp: std::option::Option<smithy_types::Instant>) -> Self {
            self.updated_at = inp;
            self
        }
        pub fn is_public(mut self, inp: bool) -> Self {
            self.is_public = Some(inp);
            self
        }
        pub fn set_is_public(mut self, inp: std::option::Option<bool>) -> Self {
            self.is_public = inp;
            self
        }
        pub fn actions(mut self, inp: impl Into<std::string::String>) -> Self {
            let mut v = self.actions.unwrap_or_default();
            v.push(inp.into());
            self.actions = Some(v);
            self
        }
        pub fn set_actions(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.actions = inp;
            self
        }
        pub fn shared_via(mut self, inp: impl Into<std::string::String>) -> Self {
            let mut v = self.shared_via.unwrap_or_default();
            v.push(inp.into());
            self.shared_via = Some(v);
            self
        }
        pub fn set_shared_via(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.shared_via = inp;
            self
        }
        pub fn status(mut self, inp: crate::model::FindingStatus) -> Self {
            self.status = Some(inp);
            self
        }
        pub fn set_status(mut self, inp: std::option::Option<crate::model::FindingStatus>) -> Self {
            self.status = inp;
            self
        }
        pub fn resource_owner_account(mut self, inp: impl Into<std::string::String>) -> Self {
            self.resource_owner_account = Some(inp.into());
            self
        }
        pub fn set_resource_owner_account(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.resource_owner_account = inp;
            self
        }
        pub fn error(mut self, inp: impl Into<std::string::String>) -> Self {
            self.error = Some(inp.into());
            self
        }
        pub fn set_error(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.error = inp;
            self
        }
        /// Consumes the builder and constructs a [`AnalyzedResource`](crate::model::AnalyzedResource)
        pub fn build(self) -> crate::model::AnalyzedResource {
            crate::model::AnalyzedResource {
                resource_arn: self.resource_arn,
                resource_type: self.resource_type,
                created_at: self.created_at,
                analyzed_at: self.analyzed_at,
                updated_at: self.updated_at,
                is_public: self.is_public,
                actions: self.actions,
                shared_via: self.shared_via,
                status: self.status,
                resource_owner_account: self.resource_owner_account,
                error: self.error,
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
pub struct AnalyzedResourceSummary {
    #[serde(rename = "resourceArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_arn: std::option::Option<std::string::String>,
    #[serde(rename = "resourceOwnerAccount")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_owner_account: std::option::Option<std::string::String>,
    #[serde(rename = "resourceType")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_type: std::option::Option<crate::model::ResourceType>,
}
impl AnalyzedResourceSummary {
    /// Creates a new builder-style object to manufacture [`AnalyzedResourceSummary`](crate::model::AnalyzedResourceSummary)
    pub fn builder() -> crate::model::analyzed_resource_summary::Builder {
        crate::model::analyzed_resource_summary::Builder::default()
    }
}
/// See [`AnalyzedResourceSummary`](crate::model::AnalyzedResourceSummary)
pub mod analyzed_resource_summary {
    /// A builder for [`AnalyzedResourceSummary`](crate::model::AnalyzedResourceSummary)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        resource_arn: std::option::Option<std::string::String>,
        resource_owner_account: std::option::Option<std::string::String>,
        resource_type: std::option::Option<crate::model::ResourceType>,
    }
    impl Builder {
        pub fn resource_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.resource_arn = Some(inp.into());
            self
        }
        pub fn set_resource_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.resource_arn = inp;
            self
        }
        pub fn resource_owner_account(mut self, inp: impl Into<std::string::String>) -> Self {
            self.resource_owner_account = Some(inp.into());
            self
        }
        pub fn set_resource_owner_account(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.resource_owner_account = inp;
            self
        }
        pub fn resource_type(mut self, inp: crate::model::ResourceType) -> Self {
            self.resource_type = Some(inp);
            self
        }
        pub fn set_resource_type(
            mut self,
            inp: std::option::Option<crate::model::ResourceType>,
        ) -> Self {
            self.resource_type = inp;
            self
        }
        /// Consumes the builder and constructs a [`AnalyzedResourceSummary`](crate::model::AnalyzedResourceSummary)
        pub fn build(self) -> crate::model::AnalyzedResourceSummary {
            crate::model::AnalyzedResourceSummary {
                resource_arn: self.resource_arn,
                resource_owner_account: self.resource_owner_account,
                resource_type: self.resource_type,
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
pub struct FindingSourceDetail {
    #[serde(rename = "accessPointArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub access_point_arn: std::option::Option<std::string::String>,
}
impl FindingSourceDetail {
    /// Creates a new builder-style object to manufacture [`FindingSourceDetail`](crate::model::FindingSourceDetail)
    pub fn builder() -> crate::model::finding_source_detail::Builder {
        crate::model::finding_source_detail::Builder::default()
    }
}
/// See [`FindingSourceDetail`](crate::model::FindingSourceDetail)
pub mod finding_source_detail {
    /// A builder for [`FindingSourceDetail`](crate::model::FindingSourceDetail)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        access_point_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn access_point_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.access_point_arn = Some(inp.into());
            self
        }
        pub fn set_access_point_arn(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.access_point_arn = inp;
            self
        }
        /// Consumes the builder and constructs a [`FindingSourceDetail`](crate::model::FindingSourceDetail)
        pub fn build(self) -> crate::model::FindingSourceDetail {
            crate::model::FindingSourceDetail {
                access_point_arn: self.access_point_arn,
            }
        }
    }
}

/// The source of the finding, eg. the policy that grants access
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct FindingSource {
    #[serde(rename = "type")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub r#type: std::option::Option<crate::model::FindingSourceType>,
    #[serde(rename = "detail")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub detail: std::option::Option<crate::model::FindingSourceDetail>,
}
impl FindingSource {
    /// Creates a new builder-style object to manufacture [`FindingSource`](crate::model::FindingSource)
    pub fn builder() -> crate::model::finding_source::Builder {
        crate::model::finding_source::Builder::default()
    }
}
/// See [`FindingSource`](crate::model::FindingSource)
pub mod finding_source {
    /// A builder for [`FindingSource`](crate::model::FindingSource)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        r#type: std::option::Option<crate::model::FindingSourceType>,
        detail: std::option::Option<crate::model::FindingSourceDetail>,
    }
    impl Builder {
        pub fn r#type(mut self, inp: crate::model::FindingSourceType) -> Self {
            self.r#type = Some(inp);
            self
        }
        pub fn set_type(
            mut self,
            inp: std::option::Option<crate::model::FindingSourceType>,
        ) -> Self {
            self.r#type = inp;
            self
        }
        pub fn detail(mut self, inp: crate::model::FindingSourceDetail) -> Self {
            self.detail = Some(inp);
            self
        }
        pub fn set_detail(
            mut self,
            inp: std::option::Option<crate::model::FindingSourceDetail>,
        ) -> Self {
            self.detail = inp;
            self
        }
        /// Consumes the builder and constructs a [`FindingSource`](crate::model::FindingSource)
        pub fn build(self) -> crate::model::FindingSource {
            crate::model::FindingSource {
                r#type: self.r#type,
                detail: self.detail,
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
pub struct Finding {
    #[serde(rename = "id")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,
    #[serde(rename = "principal")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub principal:
        std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    #[serde(rename = "action")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub action: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "resource")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource: std::option::Option<std::string::String>,
    #[serde(rename = "isPublic")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_public: std::option::Option<bool>,
    #[serde(rename = "resourceType")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_type: std::option::Option<crate::model::ResourceType>,
    #[serde(rename = "condition")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub condition:
        std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    #[serde(rename = "createdAt", with = "smithy_json::serde_with::epoch_seconds_option")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub created_at: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "analyzedAt", with = "smithy_json::serde_with::epoch_seconds_option")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub analyzed_at: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "updatedAt", with = "smithy_json::serde_with::epoch_seconds_option")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub updated_at: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "status")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<crate::model::FindingStatus>,
    #[serde(rename = "resourceOwnerAccount")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_owner_account: std::option::Option<std::string::String>,
    #[serde(rename = "error")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub error: std::option::Option<std::string::String>,
    #[serde(rename = "sources")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sources: std::option::Option<std::vec::Vec<crate::model::FindingSource>>,
}
impl Finding {
    /// Creates a new builder-style object to manufacture [`Finding`](crate::model::Finding)
    pub fn builder() -> crate::model::finding::Builder {
        crate::model::finding::Builder::default()
    }
}
/// See [`Finding`](crate::model::Finding)
pub mod finding {
    /// A builder for [`Finding`](crate::model::Finding)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        id: std::option::Option<std::string::String>,
        principal:
            std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        action: std::option::Option<std::vec::Vec<std::string::String>>,
        resource: std::option::Option<std::string::String>,
        is_public: std::option::Option<bool>,
        resource_type: std::option::Option<crate::model::ResourceType>,
        condition:
            std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        created_at: std::option::Option<smithy_types::Instant>,
        analyzed_at: std::option::Option<smithy_types::Instant>,
        updated_at: std::option::Option<smithy_types::Instant>,
        status: std::option::Option<crate::model::FindingStatus>,
        resource_owner_account: std::option::Option<std::string::String>,
        error: std::option::Option<std::string::String>,
        sources: std::option::Option<std::vec::Vec<crate::model::FindingSource>>,
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
        pub fn principal(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.principal.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.principal = Some(hash_map);
            self
        }
        pub fn set_principal(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        ) -> Self {
            self.principal = inp;
            self
        }
        pub fn action(mut self, inp: impl Into<std::string::String>) -> Self {
            let mut v = self.action.unwrap_or_default();
            v.push(inp.into());
            self.action = Some(v);
            self
        }
        pub fn set_action(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.action = inp;
            self
        }
        pub fn resource(mut self, inp: impl Into<std::string::String>) -> Self {
            self.resource = Some(inp.into());
            self
        }
        pub fn set_resource(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.resource = inp;
            self
        }
        pub fn is_public(mut self, inp: bool) -> Self {
            self.is_public = Some(inp);
            self
        }
        pub fn set_is_public(mut self, inp: std::option::Option<bool>) -> Self {
            self.is_public = inp;
            self
        }
        pub fn resource_type(mut self, inp: crate::model::ResourceType) -> Self {
            self.resource_type = Some(inp);
            self
        }
        pub fn set_resource_type(
            mut self,
            inp: std::option::Option<crate::model::ResourceType>,
        ) -> Self {
            self.resource_type = inp;
            self
        }
        pub fn condition(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.condition.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.condition = Some(hash_map);
            self
        }
        pub fn set_condition(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        ) -> Self {
            self.condition = inp;
            self
        }
        pub fn created_at(mut self, inp: smithy_types::Instant) -> Self {
            self.created_at = Some(inp);
            self
        }
        pub fn set_created_at(mut self, inp: std::option::Option<smithy_types::Instant>) -> Self {
            self.created_at = inp;
            self
        }
        pub fn analyzed_at(mut self, inp: smithy_types::Instant) -> Self {
            self.analyzed_at = Some(inp);
            self
        }
        pub fn set_analyzed_at(mut self, inp: std::option::Option<smithy_types::Instant>) -> Self {
            self.analyzed_at = inp;
            self
        }
        pub fn updated_at(mut self, inp: smithy_types::Instant) -> Self {
            self.updated_at = Some(inp);
            self
        }
        pub fn set_updated_at(mut self, inp: std::option::Option<smithy_types::Instant>) -> Self {
            self.updated_at = inp;
            self
        }
        pub fn status(mut self, inp: crate::model::FindingStatus) -> Self {
            self.status = Some(inp);
            self
        }
        pub fn set_status(mut self, inp: std::option::Option<crate::model::FindingStatus>) -> Self {
            self.status = inp;
            self
        }
        pub fn resource_owner_account(mut self, inp: impl Into<std::string::String>) -> Self {
            self.resource_owner_account = Some(inp.into());
            self
        }
        pub fn set_resource_owner_account(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.resource_owner_account = inp;
            self
        }
        pub fn error(mut self, inp: impl Into<std::string::String>) -> Self {
            self.error = Some(inp.into());
            self
        }
        pub fn set_error(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.error = inp;
            self
        }
        pub fn sources(mut self, inp: impl Into<crate::model::FindingSource>) -> Self {
            let mut v = self.sources.unwrap_or_default();
            v.push(inp.into());
            self.sources = Some(v);
            self
        }
        pub fn set_sources(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::FindingSource>>,
        ) -> Self {
            self.sources = inp;
            self
        }
        /// Consumes the builder and constructs a [`Finding`](crate::model::Finding)
        pub fn build(self) -> crate::model::Finding {
            crate::model::Finding {
                id: self.id,
                principal: self.principal,
                action: self.action,
                resource: self.resource,
                is_public: self.is_public,
                resource_type: self.resource_type,
                condition: self.condition,
                created_at: self.created_at,
                analyzed_at: self.analyzed_at,
                updated_at: self.updated_at,
                status: self.status,
                resource_owner_account: self.resource_owner_account,
                error: self.error,
                sources: self.sources,
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
pub struct FindingSummary {
    #[serde(rename = "id")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,
    #[serde(rename = "principal")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub principal:
        std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    #[serde(rename = "action")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub action: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "resource")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource: std::option::Option<std::string::String>,
    #[serde(rename = "isPublic")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub is_public: std::option::Option<bool>,
    #[serde(rename = "resourceType")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_type: std::option::Option<crate::model::ResourceType>,
    #[serde(rename = "condition")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub condition:
        std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    #[serde(rename = "createdAt", with = "smithy_json::serde_with::epoch_seconds_option")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub created_at: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "analyzedAt", with = "smithy_json::serde_with::epoch_seconds_option")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub analyzed_at: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "updatedAt", with = "smithy_json::serde_with::epoch_seconds_option")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub updated_at: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "status")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<crate::model::FindingStatus>,
    #[serde(rename = "resourceOwnerAccount")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_owner_account: std::option::Option<std::string::String>,
    #[serde(rename = "error")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub error: std::option::Option<std::string::String>,
    #[serde(rename = "sources")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sources: std::option::Option<std::vec::Vec<crate::model::FindingSource>>,
}
impl FindingSummary {
    /// Creates a new builder-style object to manufacture [`FindingSummary`](crate::model::FindingSummary)
    pub fn builder() -> crate::model::finding_summary::Builder {
        crate::model::finding_summary::Builder::default()
    }
}
/// See [`FindingSummary`](crate::model::FindingSummary)
pub mod finding_summary {
    /// A builder for [`FindingSummary`](crate::model::FindingSummary)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        id: std::option::Option<std::string::String>,
        principal:
            std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        action: std::option::Option<std::vec::Vec<std::string::String>>,
        resource: std::option::Option<std::string::String>,
        is_public: std::option::Option<bool>,
        resource_type: std::option::Option<crate::model::ResourceType>,
        condition:
            std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        created_at: std::option::Option<smithy_types::Instant>,
        analyzed_at: std::option::Option<smithy_types::Instant>,
        updated_at: std::option::Option<smithy_types::Instant>,
        status: std::option::Option<crate::model::FindingStatus>,
        resource_owner_account: std::option::Option<std::string::String>,
        error: std::option::Option<std::string::String>,
        sources: std::option::Option<std::vec::Vec<crate::model::FindingSource>>,
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
        pub fn principal(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.principal.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.principal = Some(hash_map);
            self
        }
        pub fn set_principal(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        ) -> Self {
            self.principal = inp;
            self
        }
        pub fn action(mut self, inp: impl Into<std::string::String>) -> Self {
            let mut v = self.action.unwrap_or_default();
            v.push(inp.into());
            self.action = Some(v);
            self
        }
        pub fn set_action(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.action = inp;
            self
        }
        pub fn resource(mut self, inp: impl Into<std::string::String>) -> Self {
            self.resource = Some(inp.into());
            self
        }
        pub fn set_resource(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.resource = inp;
            self
        }
        pub fn is_public(mut self, inp: bool) -> Self {
            self.is_public = Some(inp);
            self
        }
        pub fn set_is_public(mut self, inp: std::option::Option<bool>) -> Self {
            self.is_public = inp;
            self
        }
        pub fn resource_type(mut self, inp: crate::model::ResourceType) -> Self {
            self.resource_type = Some(inp);
            self
        }
        pub fn set_resource_type(
            mut self,
            inp: std::option::Option<crate::model::ResourceType>,
        ) -> Self {
            self.resource_type = inp;
            self
        }
        pub fn condition(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.condition.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.condition = Some(hash_map);
            self
        }
        pub fn set_condition(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        ) -> Self {
            self.condition = inp;
            self
        }
        pub fn created_at(mut self, inp: smithy_types::Instant) -> Self {
            self.created_at = Some(inp);
            self
        }
        pub fn set_created_at(mut self, inp: std::option::Option<smithy_types::Instant>) -> Self {
            self.created_at = inp;
            self
        }
        pub fn analyzed_at(mut self, inp: smithy_types::Instant) -> Self {
            self.analyzed_at = Some(inp);
            self
        }
        pub fn set_analyzed_at(mut self, inp: std::option::Option<smithy_types::Instant>) -> Self {
            self.analyzed_at = inp;
            self
        }
        pub fn updated_at(mut self, inp: smithy_types::Instant) -> Self {
            self.updated_at = Some(inp);
            self
        }
        pub fn set_updated_at(mut self, inp: std::option::Option<smithy_types::Instant>) -> Self {
            self.updated_at = inp;
            self
        }
        pub fn status(mut self, inp: crate::model::FindingStatus) -> Self {
            self.status = Some(inp);
            self
        }
        pub fn set_status(mut self, inp: std::option::Option<crate::model::FindingStatus>) -> Self {
            self.status = inp;
            self
        }
        pub fn resource_owner_account(mut self, inp: impl Into<std::string::String>) -> Self {
            self.resource_owner_account = Some(inp.into());
            self
        }
        pub fn set_resource_owner_account(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.resource_owner_account = inp;
            self
        }
        pub fn error(mut self, inp: impl Into<std::string::String>) -> Self {
            self.error = Some(inp.into());
            self
        }
        pub fn set_error(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.error = inp;
            self
        }
        pub fn sources(mut self, inp: impl Into<crate::model::FindingSource>) -> Self {
            let mut v = self.sources.unwrap_or_default();
            v.push(inp.into());
            self.sources = Some(v);
            self
        }
        pub fn set_sources(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::FindingSource>>,
        ) -> Self {
            self.sources = inp;
            self
        }
        /// Consumes the builder and constructs a [`FindingSummary`](crate::model::FindingSummary)
        pub fn build(self) -> crate::model::FindingSummary {
            crate::model::FindingSummary {
                id: self.id,
                principal: self.principal,
                action: self.action,
                resource: self.resource,
                is_public: self.is_public,
                resource_type: self.resource_type,
                condition: self.condition,
                created_at: self.created_at,
                analyzed_at: self.analyzed_at,
                updated_at: self.updated_at,
                status: self.status,
                resource_owner_account: self.resource_owner_account,
                error: self.error,
                sources: self.sources,
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
pub struct SortCriteria {
    #[serde(rename = "attributeName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub attribute_name: std::option::Option<std::string::String>,
    #[serde(rename = "orderBy")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub order_by: std::option::Option<crate::model::OrderBy>,
}
impl SortCriteria {
    /// Creates a new builder-style object to manufacture [`SortCriteria`](crate::model::SortCriteria)
    pub fn builder() -> crate::model::sort_criteria::Builder {
        crate::model::sort_criteria::Builder::default()
    }
}
/// See [`SortCriteria`](crate::model::SortCriteria)
pub mod sort_criteria {
    /// A builder for [`SortCriteria`](crate::model::SortCriteria)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        attribute_name: std::option::Option<std::string::String>,
        order_by: std::option::Option<crate::model::OrderBy>,
    }
    impl Builder {
        pub fn attribute_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.attribute_name = Some(inp.into());
            self
        }
        pub fn set_attribute_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.attribute_name = inp;
            self
        }
        pub fn order_by(mut self, inp: crate::model::OrderBy) -> Self {
            self.order_by = Some(inp);
            self
        }
        pub fn set_order_by(mut self, inp: std::option::Option<crate::model::OrderBy>) -> Self {
            self.order_by = inp;
            self
        }
        /// Consumes the builder and constructs a [`SortCriteria`](crate::model::SortCriteria)
        pub fn build(self) -> crate::model::SortCriteria {
            crate::model::SortCriteria {
                attribute_name: self.attribute_name,
                order_by: self.order_by,
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
pub struct ValidationExceptionField {
    #[serde(rename = "name")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    #[serde(rename = "message")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub message: std::option::Option<std::string::String>,
}
impl ValidationExceptionField {
    /// Creates a new builder-style object to manufacture [`ValidationExceptionField`](crate::model::ValidationExceptionField)
    pub fn builder() -> crate::model::validation_exception_field::Builder {
        crate::model::validation_exception_field::Builder::default()
    }
}
/// See [`ValidationExceptionField`](crate::model::ValidationExceptionField)
pub mod validation_exception_field {
    /// A builder for [`ValidationExceptionField`](crate::model::ValidationExceptionField)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        name: std::option::Option<std::string::String>,
        message: std::option::Option<std::string::String>,
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
        pub fn message(mut self, inp: impl Into<std::string::String>) -> Self {
            self.message = Some(inp.into());
            self
        }
        pub fn set_message(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.message = inp;
            self
        }
        /// Consumes the builder and constructs a [`ValidationExceptionField`](crate::model::ValidationExceptionField)
        pub fn build(self) -> crate::model::ValidationExceptionField {
            crate::model::ValidationExceptionField {
                name: self.name,
                message: self.message,
            }
        }
    }
}
