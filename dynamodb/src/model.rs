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
pub enum ScalarAttributeType {
    S,
    N,
    B,
    /// A value the service returned that this version of the client does not know about
    Unknown(String),
}
impl std::convert::From<&str> for ScalarAttributeType {
    fn from(s: &str) -> Self {
        match s {
            "S" => ScalarAttributeType::S,
            "N" => ScalarAttributeType::N,
            "B" => ScalarAttributeType::B,
            other => ScalarAttributeType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ScalarAttributeType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ScalarAttributeType::from(s))
    }
}
impl ScalarAttributeType {
    pub fn as_str(&self) -> &str {
        match self {
            ScalarAttributeType::S => "S",
            ScalarAttributeType::N => "N",
            ScalarAttributeType::B => "B",
            ScalarAttributeType::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this version of the client
    pub fn values() -> &'static [&'static str] {
        &["S", "N", "B"]
    }
}
impl AsRef<str> for ScalarAttributeType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for ScalarAttributeType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for ScalarAttributeType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(ScalarAttributeType::from(data.as_str()))
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
pub enum KeyType {
    Hash,
    Range,
    /// A value the service returned that this version of the client does not know about
    Unknown(String),
}
impl std::convert::From<&str> for KeyType {
    fn from(s: &str) -> Self {
        match s {
            "HASH" => KeyType::Hash,
            "RANGE" => KeyType::Range,
            other => KeyType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for KeyType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(KeyType::from(s))
    }
}
impl KeyType {
    pub fn as_str(&self) -> &str {
        match self {
            KeyType::Hash => "HASH",
            KeyType::Range => "RANGE",
            KeyType::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this version of the client
    pub fn values() -> &'static [&'static str] {
        &["HASH", "RANGE"]
    }
}
impl AsRef<str> for KeyType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for KeyType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for KeyType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(KeyType::from(data.as_str()))
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
pub enum ProjectionType {
    All,
    KeysOnly,
    Include,
    /// A value the service returned that this version of the client does not know about
    Unknown(String),
}
impl std::convert::From<&str> for ProjectionType {
    fn from(s: &str) -> Self {
        match s {
            "ALL" => ProjectionType::All,
            "KEYS_ONLY" => ProjectionType::KeysOnly,
            "INCLUDE" => ProjectionType::Include,
            other => ProjectionType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ProjectionType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ProjectionType::from(s))
    }
}
impl ProjectionType {
    pub fn as_str(&self) -> &str {
        match self {
            ProjectionType::All => "ALL",
            ProjectionType::KeysOnly => "KEYS_ONLY",
            ProjectionType::Include => "INCLUDE",
            ProjectionType::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this version of the client
    pub fn values() -> &'static [&'static str] {
        &["ALL", "KEYS_ONLY", "INCLUDE"]
    }
}
impl AsRef<str> for ProjectionType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for ProjectionType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for ProjectionType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(ProjectionType::from(data.as_str()))
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
pub enum BillingMode {
    Provisioned,
    PayPerRequest,
    /// A value the service returned that this version of the client does not know about
    Unknown(String),
}
impl std::convert::From<&str> for BillingMode {
    fn from(s: &str) -> Self {
        match s {
            "PROVISIONED" => BillingMode::Provisioned,
            "PAY_PER_REQUEST" => BillingMode::PayPerRequest,
            other => BillingMode::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for BillingMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(BillingMode::from(s))
    }
}
impl BillingMode {
    pub fn as_str(&self) -> &str {
        match self {
            BillingMode::Provisioned => "PROVISIONED",
            BillingMode::PayPerRequest => "PAY_PER_REQUEST",
            BillingMode::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this version of the client
    pub fn values() -> &'static [&'static str] {
        &["PROVISIONED", "PAY_PER_REQUEST"]
    }
}
impl AsRef<str> for BillingMode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for BillingMode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for BillingMode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(BillingMode::from(data.as_str()))
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
pub enum TableStatus {
    Creating,
    Updating,
    Deleting,
    Active,
    InaccessibleEncryptionCredentials,
    Archiving,
    Archived,
    /// A value the service returned that this version of the client does not know about
    Unknown(String),
}
impl std::convert::From<&str> for TableStatus {
    fn from(s: &str) -> Self {
        match s {
            "CREATING" => TableStatus::Creating,
            "UPDATING" => TableStatus::Updating,
            "DELETING" => TableStatus::Deleting,
            "ACTIVE" => TableStatus::Active,
            "INACCESSIBLE_ENCRYPTION_CREDENTIALS" => TableStatus::InaccessibleEncryptionCredentials,
            "ARCHIVING" => TableStatus::Archiving,
            "ARCHIVED" => TableStatus::Archived,
            other => TableStatus::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for TableStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(TableStatus::from(s))
    }
}
impl TableStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TableStatus::Creating => "CREATING",
            TableStatus::Updating => "UPDATING",
            TableStatus::Deleting => "DELETING",
            TableStatus::Active => "ACTIVE",
            TableStatus::InaccessibleEncryptionCredentials => "INACCESSIBLE_ENCRYPTION_CREDENTIALS",
            TableStatus::Archiving => "ARCHIVING",
            TableStatus::Archived => "ARCHIVED",
            TableStatus::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this version of the client
    pub fn values() -> &'static [&'static str] {
        &["CREATING", "UPDATING", "DELETING", "ACTIVE", "INACCESSIBLE_ENCRYPTION_CREDENTIALS", "ARCHIVING", "ARCHIVED"]
    }
}
impl AsRef<str> for TableStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for TableStatus {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for TableStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(TableStatus::from(data.as_str()))
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
pub enum IndexStatus {
    Creating,
    Updating,
    Deleting,
    Active,
    /// A value the service returned that this version of the client does not know about
    Unknown(String),
}
impl std::convert::From<&str> for IndexStatus {
    fn from(s: &str) -> Self {
        match s {
            "CREATING" => IndexStatus::Creating,
            "UPDATING" => IndexStatus::Updating,
            "DELETING" => IndexStatus::Deleting,
            "ACTIVE" => IndexStatus::Active,
            other => IndexStatus::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for IndexStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(IndexStatus::from(s))
    }
}
impl IndexStatus {
    pub fn as_str(&self) -> &str {
        match self {
            IndexStatus::Creating => "CREATING",
            IndexStatus::Updating => "UPDATING",
            IndexStatus::Deleting => "DELETING",
            IndexStatus::Active => "ACTIVE",
            IndexStatus::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this version of the client
    pub fn values() -> &'static [&'static str] {
        &["CREATING", "UPDATING", "DELETING", "ACTIVE"]
    }
}
impl AsRef<str> for IndexStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for IndexStatus {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for IndexStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(IndexStatus::from(data.as_str()))
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
pub enum StreamViewType {
    NewImage,
    OldImage,
    NewAndOldImages,
    KeysOnly,
    /// A value the service returned that this version of the client does not know about
    Unknown(String),
}
impl std::convert::From<&str> for StreamViewType {
    fn from(s: &str) -> Self {
        match s {
            "NEW_IMAGE" => StreamViewType::NewImage,
            "OLD_IMAGE" => StreamViewType::OldImage,
            "NEW_AND_OLD_IMAGES" => StreamViewType::NewAndOldImages,
            "KEYS_ONLY" => StreamViewType::KeysOnly,
            other => StreamViewType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for StreamViewType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(StreamViewType::from(s))
    }
}
impl StreamViewType {
    pub fn as_str(&self) -> &str {
        match self {
            StreamViewType::NewImage => "NEW_IMAGE",
            StreamViewType::OldImage => "OLD_IMAGE",
            StreamViewType::NewAndOldImages => "NEW_AND_OLD_IMAGES",
            StreamViewType::KeysOnly => "KEYS_ONLY",
            StreamViewType::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this version of the client
    pub fn values() -> &'static [&'static str] {
        &["NEW_IMAGE", "OLD_IMAGE", "NEW_AND_OLD_IMAGES", "KEYS_ONLY"]
    }
}
impl AsRef<str> for StreamViewType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for StreamViewType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for StreamViewType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(StreamViewType::from(data.as_str()))
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
pub enum SseType {
    Aes256,
    Kms,
    /// A value the service returned that this version of the client does not know about
    Unknown(String),
}
impl std::convert::From<&str> for SseType {
    fn from(s: &str) -> Self {
        match s {
            "AES256" => SseType::Aes256,
            "KMS" => SseType::Kms,
            other => SseType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for SseType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(SseType::from(s))
    }
}
impl SseType {
    pub fn as_str(&self) -> &str {
        match self {
            SseType::Aes256 => "AES256",
            SseType::Kms => "KMS",
            SseType::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this version of the client
    pub fn values() -> &'static [&'static str] {
        &["AES256", "KMS"]
    }
}
impl AsRef<str> for SseType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for SseType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for SseType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(SseType::from(data.as_str()))
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
pub enum SseStatus {
    Enabling,
    Enabled,
    Disabling,
    Disabled,
    Updating,
    /// A value the service returned that this version of the client does not know about
    Unknown(String),
}
impl std::convert::From<&str> for SseStatus {
    fn from(s: &str) -> Self {
        match s {
            "ENABLING" => SseStatus::Enabling,
            "ENABLED" => SseStatus::Enabled,
            "DISABLING" => SseStatus::Disabling,
            "DISABLED" => SseStatus::Disabled,
            "UPDATING" => SseStatus::Updating,
            other => SseStatus::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for SseStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(SseStatus::from(s))
    }
}
impl SseStatus {
    pub fn as_str(&self) -> &str {
        match self {
            SseStatus::Enabling => "ENABLING",
            SseStatus::Enabled => "ENABLED",
            SseStatus::Disabling => "DISABLING",
            SseStatus::Disabled => "DISABLED",
            SseStatus::Updating => "UPDATING",
            SseStatus::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this version of the client
    pub fn values() -> &'static [&'static str] {
        &["ENABLING", "ENABLED", "DISABLING", "DISABLED", "UPDATING"]
    }
}
impl AsRef<str> for SseStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for SseStatus {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for SseStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(SseStatus::from(data.as_str()))
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
pub enum ReturnValue {
    None,
    AllOld,
    UpdatedOld,
    AllNew,
    UpdatedNew,
    /// A value the service returned that this version of the client does not know about
    Unknown(String),
}
impl std::convert::From<&str> for ReturnValue {
    fn from(s: &str) -> Self {
        match s {
            "NONE" => ReturnValue::None,
            "ALL_OLD" => ReturnValue::AllOld,
            "UPDATED_OLD" => ReturnValue::UpdatedOld,
            "ALL_NEW" => ReturnValue::AllNew,
            "UPDATED_NEW" => ReturnValue::UpdatedNew,
            other => ReturnValue::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ReturnValue {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ReturnValue::from(s))
    }
}
impl ReturnValue {
    pub fn as_str(&self) -> &str {
        match self {
            ReturnValue::None => "NONE",
            ReturnValue::AllOld => "ALL_OLD",
            ReturnValue::UpdatedOld => "UPDATED_OLD",
            ReturnValue::AllNew => "ALL_NEW",
            ReturnValue::UpdatedNew => "UPDATED_NEW",
            ReturnValue::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this version of the client
    pub fn values() -> &'static [&'static str] {
        &["NONE", "ALL_OLD", "UPDATED_OLD", "ALL_NEW", "UPDATED_NEW"]
    }
}
impl AsRef<str> for ReturnValue {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for ReturnValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for ReturnValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(ReturnValue::from(data.as_str()))
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
pub enum ReturnConsumedCapacity {
    Indexes,
    Total,
    None,
    /// A value the service returned that this version of the client does not know about
    Unknown(String),
}
impl std::convert::From<&str> for ReturnConsumedCapacity {
    fn from(s: &str) -> Self {
        match s {
            "INDEXES" => ReturnConsumedCapacity::Indexes,
            "TOTAL" => ReturnConsumedCapacity::Total,
            "NONE" => ReturnConsumedCapacity::None,
            other => ReturnConsumedCapacity::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ReturnConsumedCapacity {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ReturnConsumedCapacity::from(s))
    }
}
impl ReturnConsumedCapacity {
    pub fn as_str(&self) -> &str {
        match self {
            ReturnConsumedCapacity::Indexes => "INDEXES",
            ReturnConsumedCapacity::Total => "TOTAL",
            ReturnConsumedCapacity::None => "NONE",
            ReturnConsumedCapacity::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this version of the client
    pub fn values() -> &'static [&'static str] {
        &["INDEXES", "TOTAL", "NONE"]
    }
}
impl AsRef<str> for ReturnConsumedCapacity {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for ReturnConsumedCapacity {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for ReturnConsumedCapacity {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(ReturnConsumedCapacity::from(data.as_str()))
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
pub enum ReturnItemCollectionMetrics {
    Size,
    None,
    /// A value the service returned that this version of the client does not know about
    Unknown(String),
}
impl std::convert::From<&str> for ReturnItemCollectionMetrics {
    fn from(s: &str) -> Self {
        match s {
            "SIZE" => ReturnItemCollectionMetrics::Size,
            "NONE" => ReturnItemCollectionMetrics::None,
            other => ReturnItemCollectionMetrics::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ReturnItemCollectionMetrics {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ReturnItemCollectionMetrics::from(s))
    }
}
impl ReturnItemCollectionMetrics {
    pub fn as_str(&self) -> &str {
        match self {
            ReturnItemCollectionMetrics::Size => "SIZE",
            ReturnItemCollectionMetrics::None => "NONE",
            ReturnItemCollectionMetrics::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this version of the client
    pub fn values() -> &'static [&'static str] {
        &["SIZE", "NONE"]
    }
}
impl AsRef<str> for ReturnItemCollectionMetrics {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for ReturnItemCollectionMetrics {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for ReturnItemCollectionMetrics {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(ReturnItemCollectionMetrics::from(data.as_str()))
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
pub enum Select {
    AllAttributes,
    AllProjectedAttributes,
    SpecificAttributes,
    Count,
    /// A value the service returned that this version of the client does not know about
    Unknown(String),
}
impl std::convert::From<&str> for Select {
    fn from(s: &str) -> Self {
        match s {
            "ALL_ATTRIBUTES" => Select::AllAttributes,
            "ALL_PROJECTED_ATTRIBUTES" => Select::AllProjectedAttributes,
            "SPECIFIC_ATTRIBUTES" => Select::SpecificAttributes,
            "COUNT" => Select::Count,
            other => Select::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for Select {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Select::from(s))
    }
}
impl Select {
    pub fn as_str(&self) -> &str {
        match self {
            Select::AllAttributes => "ALL_ATTRIBUTES",
            Select::AllProjectedAttributes => "ALL_PROJECTED_ATTRIBUTES",
            Select::SpecificAttributes => "SPECIFIC_ATTRIBUTES",
            Select::Count => "COUNT",
            Select::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this version of the client
    pub fn values() -> &'static [&'static str] {
        &["ALL_ATTRIBUTES", "ALL_PROJECTED_ATTRIBUTES", "SPECIFIC_ATTRIBUTES", "COUNT"]
    }
}
impl AsRef<str> for Select {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for Select {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for Select {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Select::from(data.as_str()))
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
pub enum ComparisonOperator {
    Eq,
    Ne,
    In,
    Le,
    Lt,
    Ge,
    Gt,
    Between,
    NotNull,
    Null,
    Contains,
    NotContains,
    BeginsWith,
    /// A value the service returned that this version of the client does not know about
    Unknown(String),
}
impl std::convert::From<&str> for ComparisonOperator {
    fn from(s: &str) -> Self {
        match s {
            "EQ" => ComparisonOperator::Eq,
            "NE" => ComparisonOperator::Ne,
            "IN" => ComparisonOperator::In,
            "LE" => ComparisonOperator::Le,
            "LT" => ComparisonOperator::Lt,
            "GE" => ComparisonOperator::Ge,
            "GT" => ComparisonOperator::Gt,
            "BETWEEN" => ComparisonOperator::Between,
            "NOT_NULL" => ComparisonOperator::NotNull,
            "NULL" => ComparisonOperator::Null,
            "CONTAINS" => ComparisonOperator::Contains,
            "NOT_CONTAINS" => ComparisonOperator::NotContains,
            "BEGINS_WITH" => ComparisonOperator::BeginsWith,
            other => ComparisonOperator::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ComparisonOperator {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ComparisonOperator::from(s))
    }
}
impl ComparisonOperator {
    pub fn as_str(&self) -> &str {
        match self {
            ComparisonOperator::Eq => "EQ",
            ComparisonOperator::Ne => "NE",
            ComparisonOperator::In => "IN",
            ComparisonOperator::Le => "LE",
            ComparisonOperator::Lt => "LT",
            ComparisonOperator::Ge => "GE",
            ComparisonOperator::Gt => "GT",
            ComparisonOperator::Between => "BETWEEN",
            ComparisonOperator::NotNull => "NOT_NULL",
            ComparisonOperator::Null => "NULL",
            ComparisonOperator::Contains => "CONTAINS",
            ComparisonOperator::NotContains => "NOT_CONTAINS",
            ComparisonOperator::BeginsWith => "BEGINS_WITH",
            ComparisonOperator::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this version of the client
    pub fn values() -> &'static [&'static str] {
        &["EQ", "NE", "IN", "LE", "LT", "GE", "GT", "BETWEEN", "NOT_NULL", "NULL", "CONTAINS", "NOT_CONTAINS", "BEGINS_WITH"]
    }
}
impl AsRef<str> for ComparisonOperator {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for ComparisonOperator {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for ComparisonOperator {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(ComparisonOperator::from(data.as_str()))
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
pub enum ConditionalOperator {
    And,
    Or,
    /// A value the service returned that this version of the client does not know about
    Unknown(String),
}
impl std::convert::From<&str> for ConditionalOperator {
    fn from(s: &str) -> Self {
        match s {
            "AND" => ConditionalOperator::And,
            "OR" => ConditionalOperator::Or,
            other => ConditionalOperator::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ConditionalOperator {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ConditionalOperator::from(s))
    }
}
impl ConditionalOperator {
    pub fn as_str(&self) -> &str {
        match self {
            ConditionalOperator::And => "AND",
            ConditionalOperator::Or => "OR",
            ConditionalOperator::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this version of the client
    pub fn values() -> &'static [&'static str] {
        &["AND", "OR"]
    }
}
impl AsRef<str> for ConditionalOperator {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for ConditionalOperator {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for ConditionalOperator {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(ConditionalOperator::from(data.as_str()))
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
pub enum AttributeAction {
    Add,
    Put,
    Delete,
    /// A value the service returned that this version of the client does not know about
    Unknown(String),
}
impl std::convert::From<&str> for AttributeAction {
    fn from(s: &str) -> Self {
        match s {
            "ADD" => AttributeAction::Add,
            "PUT" => AttributeAction::Put,
            "DELETE" => AttributeAction::Delete,
            other => AttributeAction::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for AttributeAction {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(AttributeAction::from(s))
    }
}
impl AttributeAction {
    pub fn as_str(&self) -> &str {
        match self {
            AttributeAction::Add => "ADD",
            AttributeAction::Put => "PUT",
            AttributeAction::Delete => "DELETE",
            AttributeAction::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this version of the client
    pub fn values() -> &'static [&'static str] {
        &["ADD", "PUT", "DELETE"]
    }
}
impl AsRef<str> for AttributeAction {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for AttributeAction {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for AttributeAction {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(AttributeAction::from(data.as_str()))
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
pub enum ReturnValuesOnConditionCheckFailure {
    AllOld,
    None,
    /// A value the service returned that this version of the client does not know about
    Unknown(String),
}
impl std::convert::From<&str> for ReturnValuesOnConditionCheckFailure {
    fn from(s: &str) -> Self {
        match s {
            "ALL_OLD" => ReturnValuesOnConditionCheckFailure::AllOld,
            "NONE" => ReturnValuesOnConditionCheckFailure::None,
            other => ReturnValuesOnConditionCheckFailure::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for ReturnValuesOnConditionCheckFailure {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ReturnValuesOnConditionCheckFailure::from(s))
    }
}
impl ReturnValuesOnConditionCheckFailure {
    pub fn as_str(&self) -> &str {
        match self {
            ReturnValuesOnConditionCheckFailure::AllOld => "ALL_OLD",
            ReturnValuesOnConditionCheckFailure::None => "NONE",
            ReturnValuesOnConditionCheckFailure::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this version of the client
    pub fn values() -> &'static [&'static str] {
        &["ALL_OLD", "NONE"]
    }
}
impl AsRef<str> for ReturnValuesOnConditionCheckFailure {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for ReturnValuesOnConditionCheckFailure {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for ReturnValuesOnConditionCheckFailure {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(ReturnValuesOnConditionCheckFailure::from(data.as_str()))
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
pub enum TimeToLiveStatus {
    Enabling,
    Disabling,
    Enabled,
    Disabled,
    /// A value the service returned that this version of the client does not know about
    Unknown(String),
}
impl std::convert::From<&str> for TimeToLiveStatus {
    fn from(s: &str) -> Self {
        match s {
            "ENABLING" => TimeToLiveStatus::Enabling,
            "DISABLING" => TimeToLiveStatus::Disabling,
            "ENABLED" => TimeToLiveStatus::Enabled,
            "DISABLED" => TimeToLiveStatus::Disabled,
            other => TimeToLiveStatus::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for TimeToLiveStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(TimeToLiveStatus::from(s))
    }
}
impl TimeToLiveStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TimeToLiveStatus::Enabling => "ENABLING",
            TimeToLiveStatus::Disabling => "DISABLING",
            TimeToLiveStatus::Enabled => "ENABLED",
            TimeToLiveStatus::Disabled => "DISABLED",
            TimeToLiveStatus::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this version of the client
    pub fn values() -> &'static [&'static str] {
        &["ENABLING", "DISABLING", "ENABLED", "DISABLED"]
    }
}
impl AsRef<str> for TimeToLiveStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for TimeToLiveStatus {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for TimeToLiveStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(TimeToLiveStatus::from(data.as_str()))
    }
}

/// Represents the data for an attribute
///
/// Each attribute value is described as a name-value pair. The name is the data type, and the value is the data itself.
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum AttributeValue {
    /// An attribute of type String
    #[serde(rename = "S")]
    S(std::string::String),
    /// An attribute of type Number, sent as a string to preserve precision
    #[serde(rename = "N")]
    N(std::string::String),
    /// An attribute of type Binary
    #[serde(rename = "B", with = "smithy_json::serde_with::blob")]
    B(smithy_types::Blob),
    #[serde(rename = "SS")]
    Ss(std::vec::Vec<std::string::String>),
    #[serde(rename = "NS")]
    Ns(std::vec::Vec<std::string::String>),
    #[serde(rename = "BS", with = "smithy_json::serde_with::blob_list")]
    Bs(std::vec::Vec<smithy_types::Blob>),
    /// An attribute of type Map
    #[serde(rename = "M")]
    M(std::collections::HashMap<std::string::String, crate::model::AttributeValue>),
    /// An attribute of type List
    #[serde(rename = "L")]
    L(std::vec::Vec<crate::model::AttributeValue>),
    #[serde(rename = "NULL")]
    Null(bool),
    #[serde(rename = "BOOL")]
    Bool(bool),
}
impl AttributeValue {
    /// Returns the inner value if this is a [`S`](AttributeValue::S), otherwise returns `self`
    pub fn as_s(&self) -> std::result::Result<&std::string::String, &Self> {
        if let AttributeValue::S(val) = &self {
            Ok(&val)
        } else {
            Err(self)
        }
    }
    pub fn is_s(&self) -> bool {
        self.as_s().is_ok()
    }
    /// Returns the inner value if this is a [`N`](AttributeValue::N), otherwise returns `self`
    pub fn as_n(&self) -> std::result::Result<&std::string::String, &Self> {
        if let AttributeValue::N(val) = &self {
            Ok(&val)
        } else {
            Err(self)
        }
    }
    pub fn is_n(&self) -> bool {
        self.as_n().is_ok()
    }
    /// Returns the inner value if this is a [`B`](AttributeValue::B), otherwise returns `self`
    pub fn as_b(&self) -> std::result::Result<&smithy_types::Blob, &Self> {
        if let AttributeValue::B(val) = &self {
            Ok(&val)
        } else {
            Err(self)
        }
    }
    pub fn is_b(&self) -> bool {
        self.as_b().is_ok()
    }
    /// Returns the inner value if this is a [`Ss`](AttributeValue::Ss), otherwise returns `self`
    pub fn as_ss(&self) -> std::result::Result<&std::vec::Vec<std::string::String>, &Self> {
        if let AttributeValue::Ss(val) = &self {
            Ok(&val)
        } else {
            Err(self)
        }
    }
    pub fn is_ss(&self) -> bool {
        self.as_ss().is_ok()
    }
    /// Returns the inner value if this is a [`Ns`](AttributeValue::Ns), otherwise returns `self`
    pub fn as_ns(&self) -> std::result::Result<&std::vec::Vec<std::string::String>, &Self> {
        if let AttributeValue::Ns(val) = &self {
            Ok(&val)
        } else {
            Err(self)
        }
    }
    pub fn is_ns(&self) -> bool {
        self.as_ns().is_ok()
    }
    /// Returns the inner value if this is a [`Bs`](AttributeValue::Bs), otherwise returns `self`
    pub fn as_bs(&self) -> std::result::Result<&std::vec::Vec<smithy_types::Blob>, &Self> {
        if let AttributeValue::Bs(val) = &self {
            Ok(&val)
        } else {
            Err(self)
        }
    }
    pub fn is_bs(&self) -> bool {
        self.as_bs().is_ok()
    }
    /// Returns the inner value if this is a [`M`](AttributeValue::M), otherwise returns `self`
    pub fn as_m(
        &self,
    ) -> std::result::Result<&std::collections::HashMap<std::string::String, crate::model::AttributeValue>, &Self> {
        if let AttributeValue::M(val) = &self {
            Ok(&val)
        } else {
            Err(self)
        }
    }
    pub fn is_m(&self) -> bool {
        self.as_m().is_ok()
    }
    /// Returns the inner value if this is a [`L`](AttributeValue::L), otherwise returns `self`
    pub fn as_l(&self) -> std::result::Result<&std::vec::Vec<crate::model::AttributeValue>, &Self> {
        if let AttributeValue::L(val) = &self {
            Ok(&val)
        } else {
            Err(self)
        }
    }
    pub fn is_l(&self) -> bool {
        self.as_l().is_ok()
    }
    /// Returns the inner value if this is a [`Null`](AttributeValue::Null), otherwise returns `self`
    pub fn as_null(&self) -> std::result::Result<&bool, &Self> {
        if let AttributeValue::Null(val) = &self {
            Ok(&val)
        } else {
            Err(self)
        }
    }
    pub fn is_null(&self) -> bool {
        self.as_null().is_ok()
    }
    /// Returns the inner value if this is a [`Bool`](AttributeValue::Bool), otherwise returns `self`
    pub fn as_bool(&self) -> std::result::Result<&bool, &Self> {
        if let AttributeValue::Bool(val) = &self {
            Ok(&val)
        } else {
            Err(self)
        }
    }
    pub fn is_bool(&self) -> bool {
        self.as_bool().is_ok()
    }
}

/// Represents an attribute for describing the key schema for the table and indexes
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct AttributeDefinition {
    #[serde(rename = "AttributeName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub attribute_name: std::option::Option<std::string::String>,
    #[serde(rename = "AttributeType")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub attribute_type: std::option::Option<crate::model::ScalarAttributeType>,
}
impl AttributeDefinition {
    /// Creates a new builder-style object to manufacture [`AttributeDefinition`](crate::model::AttributeDefinition)
    pub fn builder() -> crate::model::attribute_definition::Builder {
        crate::model::attribute_definition::Builder::default()
    }
}
/// See [`AttributeDefinition`](crate::model::AttributeDefinition)
pub mod attribute_definition {
    /// A builder for [`AttributeDefinition`](crate::model::AttributeDefinition)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        attribute_name: std::option::Option<std::string::String>,
        attribute_type: std::option::Option<crate::model::ScalarAttributeType>,
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
        pub fn attribute_type(mut self, inp: crate::model::ScalarAttributeType) -> Self {
            self.attribute_type = Some(inp);
            self
        }
        pub fn set_attribute_type(
            mut self,
            inp: std::option::Option<crate::model::ScalarAttributeType>,
        ) -> Self {
            self.attribute_type = inp;
            self
        }
        /// Consumes the builder and constructs a [`AttributeDefinition`](crate::model::AttributeDefinition)
        pub fn build(self) -> crate::model::AttributeDefinition {
            crate::model::AttributeDefinition {
                attribute_name: self.attribute_name,
                attribute_type: self.attribute_type,
            }
        }
    }
}

/// Represents a single element of a key schema
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct KeySchemaElement {
    #[serde(rename = "AttributeName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub attribute_name: std::option::Option<std::string::String>,
    /// The role that this key attribute will assume: `HASH` (partition key) or `RANGE` (sort key)
    #[serde(rename = "KeyType")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub key_type: std::option::Option<crate::model::KeyType>,
}
impl KeySchemaElement {
    /// Creates a new builder-style object to manufacture [`KeySchemaElement`](crate::model::KeySchemaElement)
    pub fn builder() -> crate::model::key_schema_element::Builder {
        crate::model::key_schema_element::Builder::default()
    }
}
/// See [`KeySchemaElement`](crate::model::KeySchemaElement)
pub mod key_schema_element {
    /// A builder for [`KeySchemaElement`](crate::model::KeySchemaElement)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        attribute_name: std::option::Option<std::string::String>,
        key_type: std::option::Option<crate::model::KeyType>,
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
        /// The role that this key attribute will assume: `HASH` (partition key) or `RANGE` (sort key)
        pub fn key_type(mut self, inp: crate::model::KeyType) -> Self {
            self.key_type = Some(inp);
            self
        }
        pub fn set_key_type(mut self, inp: std::option::Option<crate::model::KeyType>) -> Self {
            self.key_type = inp;
            self
        }
        /// Consumes the builder and constructs a [`KeySchemaElement`](crate::model::KeySchemaElement)
        pub fn build(self) -> crate::model::KeySchemaElement {
            crate::model::KeySchemaElement {
                attribute_name: self.attribute_name,
                key_type: self.key_type,
            }
        }
    }
}

/// Represents the provisioned throughput settings for a specified table or index
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct ProvisionedThroughput {
    #[serde(rename = "ReadCapacityUnits")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub read_capacity_units: std::option::Option<i64>,
    #[serde(rename = "WriteCapacityUnits")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub write_capacity_units: std::option::Option<i64>,
}
impl ProvisionedThroughput {
    /// Creates a new builder-style object to manufacture [`ProvisionedThroughput`](crate::model::ProvisionedThroughput)
    pub fn builder() -> crate::model::provisioned_throughput::Builder {
        crate::model::provisioned_throughput::Builder::default()
    }
}
/// See [`ProvisionedThroughput`](crate::model::ProvisionedThroughput)
pub mod provisioned_throughput {
    /// A builder for [`ProvisionedThroughput`](crate::model::ProvisionedThroughput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        read_capacity_units: std::option::Option<i64>,
        write_capacity_units: std::option::Option<i64>,
    }
    impl Builder {
        pub fn read_capacity_units(mut self, inp: i64) -> Self {
            self.read_capacity_units = Some(inp);
            self
        }
        pub fn set_read_capacity_units(mut self, inp: std::option::Option<i64>) -> Self {
            self.read_capacity_units = inp;
            self
        }
        pub fn write_capacity_units(mut self, inp: i64) -> Self {
            self.write_capacity_units = Some(inp);
            self
        }
        pub fn set_write_capacity_units(mut self, inp: std::option::Option<i64>) -> Self {
            self.write_capacity_units = inp;
            self
        }
        /// Consumes the builder and constructs a [`ProvisionedThroughput`](crate::model::ProvisionedThroughput)
        pub fn build(self) -> crate::model::ProvisionedThroughput {
            crate::model::ProvisionedThroughput {
                read_capacity_units: self.read_capacity_units,
                write_capacity_units: self.write_capacity_units,
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
pub struct ProvisionedThroughputDescription {
    #[serde(rename = "LastIncreaseDateTime", with = "smithy_json::serde_with::epoch_seconds_option")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_increase_date_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "LastDecreaseDateTime", with = "smithy_json::serde_with::epoch_seconds_option")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_decrease_date_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "NumberOfDecreasesToday")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub number_of_decreases_today: std::option::Option<i64>,
    #[serde(rename = "ReadCapacityUnits")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub read_capacity_units: std::option::Option<i64>,
    #[serde(rename = "WriteCapacityUnits")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub write_capacity_units: std::option::Option<i64>,
}
impl ProvisionedThroughputDescription {
    /// Creates a new builder-style object to manufacture [`ProvisionedThroughputDescription`](crate::model::ProvisionedThroughputDescription)
    pub fn builder() -> crate::model::provisioned_throughput_description::Builder {
        crate::model::provisioned_throughput_description::Builder::default()
    }
}
/// See [`ProvisionedThroughputDescription`](crate::model::ProvisionedThroughputDescription)
pub mod provisioned_throughput_description {
    /// A builder for [`ProvisionedThroughputDescription`](crate::model::ProvisionedThroughputDescription)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        last_increase_date_time: std::option::Option<smithy_types::Instant>,
        last_decrease_date_time: std::option::Option<smithy_types::Instant>,
        number_of_decreases_today: std::option::Option<i64>,
        read_capacity_units: std::option::Option<i64>,
        write_capacity_units: std::option::Option<i64>,
    }
    impl Builder {
        pub fn last_increase_date_time(mut self, inp: smithy_types::Instant) -> Self {
            self.last_increase_date_time = Some(inp);
            self
        }
        pub fn set_last_increase_date_time(
            mut self,
            inp: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.last_increase_date_time = inp;
            self
        }
        pub fn last_decrease_date_time(mut self, inp: smithy_types::Instant) -> Self {
            self.last_decrease_date_time = Some(inp);
            self
        }
        pub fn set_last_decrease_date_time(
            mut self,
            inp: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.last_decrease_date_time = inp;
            self
        }
        pub fn number_of_decreases_today(mut self, inp: i64) -> Self {
            self.number_of_decreases_today = Some(inp);
            self
        }
        pub fn set_number_of_decreases_today(mut self, inp: std::option::Option<i64>) -> Self {
            self.number_of_decreases_today = inp;
            self
        }
        pub fn read_capacity_units(mut self, inp: i64) -> Self {
            self.read_capacity_units = Some(inp);
            self
        }
        pub fn set_read_capacity_units(mut self, inp: std::option::Option<i64>) -> Self {
            self.read_capacity_units = inp;
            self
        }
        pub fn write_capacity_units(mut self, inp: i64) -> Self {
            self.write_capacity_units = Some(inp);
            self
        }
        pub fn set_write_capacity_units(mut self, inp: std::option::Option<i64>) -> Self {
            self.write_capacity_units = inp;
            self
        }
        /// Consumes the builder and constructs a [`ProvisionedThroughputDescription`](crate::model::ProvisionedThroughputDescription)
        pub fn build(self) -> crate::model::ProvisionedThroughputDescription {
            crate::model::ProvisionedThroughputDescription {
                last_increase_date_time: self.last_increase_date_time,
                last_decrease_date_time: self.last_decrease_date_time,
                number_of_decreases_today: self.number_of_decreases_today,
                read_capacity_units: self.read_capacity_units,
                write_capacity_units: self.write_capacity_units,
            }
        }
    }
}

/// Represents attributes that are copied (projected) from the table into an index
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Projection {
    #[serde(rename = "ProjectionType")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub projection_type: std::option::Option<crate::model::ProjectionType>,
    #[serde(rename = "NonKeyAttributes")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub non_key_attributes: std::option::Option<std::vec::Vec<std::string::String>>,
}
impl Projection {
    /// Creates a new builder-style object to manufacture [`Projection`](crate::model::Projection)
    pub fn builder() -> crate::model::projection::Builder {
        crate::model::projection::Builder::default()
    }
}
/// See [`Projection`](crate::model::Projection)
pub mod projection {
    /// A builder for [`Projection`](crate::model::Projection)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        projection_type: std::option::Option<crate::model::ProjectionType>,
        non_key_attributes: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        pub fn projection_type(mut self, inp: crate::model::ProjectionType) -> Self {
            self.projection_type = Some(inp);
            self
        }
        pub fn set_projection_type(
            mut self,
            inp: std::option::Option<crate::model::ProjectionType>,
        ) -> Self {
            self.projection_type = inp;
            self
        }
        pub fn non_key_attributes(mut self, inp: impl Into<std::string::String>) -> Self {
            let mut v = self.non_key_attributes.unwrap_or_default();
            v.push(inp.into());
            self.non_key_attributes = Some(v);
            self
        }
        pub fn set_non_key_attributes(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.non_key_attributes = inp;
            self
        }
        /// Consumes the builder and constructs a [`Projection`](crate::model::Projection)
        pub fn build(self) -> crate::model::Projection {
            crate::model::Projection {
                projection_type: self.projection_type,
                non_key_attributes: self.non_key_attributes,
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
pub struct LocalSecondaryIndex {
    #[serde(rename = "IndexName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub index_name: std::option::Option<std::string::String>,
    #[serde(rename = "KeySchema")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub key_schema: std::option::Option<std::vec::Vec<crate::model::KeySchemaElement>>,
    #[serde(rename = "Projection")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub projection: std::option::Option<crate::model::Projection>,
}
impl LocalSecondaryIndex {
    /// Creates a new builder-style object to manufacture [`LocalSecondaryIndex`](crate::model::LocalSecondaryIndex)
    pub fn builder() -> crate::model::local_secondary_index::Builder {
        crate::model::local_secondary_index::Builder::default()
    }
}
/// See [`LocalSecondaryIndex`](crate::model::LocalSecondaryIndex)
pub mod local_secondary_index {
    /// A builder for [`LocalSecondaryIndex`](crate::model::LocalSecondaryIndex)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        index_name: std::option::Option<std::string::String>,
        key_schema: std::option::Option<std::vec::Vec<crate::model::KeySchemaElement>>,
        projection: std::option::Option<crate::model::Projection>,
    }
    impl Builder {
        pub fn index_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.index_name = Some(inp.into());
            self
        }
        pub fn set_index_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.index_name = inp;
            self
        }
        pub fn key_schema(mut self, inp: impl Into<crate::model::KeySchemaElement>) -> Self {
            let mut v = self.key_schema.unwrap_or_default();
            v.push(inp.into());
            self.key_schema = Some(v);
            self
        }
        pub fn set_key_schema(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::KeySchemaElement>>,
        ) -> Self {
            self.key_schema = inp;
            self
        }
        pub fn projection(mut self, inp: crate::model::Projection) -> Self {
            self.projection = Some(inp);
            self
        }
        pub fn set_projection(
            mut self,
            inp: std::option::Option<crate::model::Projection>,
        ) -> Self {
            self.projection = inp;
            self
        }
        /// Consumes the builder and constructs a [`LocalSecondaryIndex`](crate::model::LocalSecondaryIndex)
        pub fn build(self) -> crate::model::LocalSecondaryIndex {
            crate::model::LocalSecondaryIndex {
                index_name: self.index_name,
                key_schema: self.key_schema,
                projection: self.projection,
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
pub struct GlobalSecondaryIndex {
    #[serde(rename = "IndexName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub index_name: std::option::Option<std::string::String>,
    #[serde(rename = "KeySchema")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub key_schema: std::option::Option<std::vec::Vec<crate::model::KeySchemaElement>>,
    #[serde(rename = "Projection")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub projection: std::option::Option<crate::model::Projection>,
    #[serde(rename = "ProvisionedThroughput")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub provisioned_throughput: std::option::Option<crate::model::ProvisionedThroughput>,
}
impl GlobalSecondaryIndex {
    /// Creates a new builder-style object to manufacture [`GlobalSecondaryIndex`](crate::model::GlobalSecondaryIndex)
    pub fn builder() -> crate::model::global_secondary_index::Builder {
        crate::model::global_secondary_index::Builder::default()
    }
}
/// See [`GlobalSecondaryIndex`](crate::model::GlobalSecondaryIndex)
pub mod global_secondary_index {
    /// A builder for [`GlobalSecondaryIndex`](crate::model::GlobalSecondaryIndex)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        index_name: std::option::Option<std::string::String>,
        key_schema: std::option::Option<std::vec::Vec<crate::model::KeySchemaElement>>,
        projection: std::option::Option<crate::model::Projection>,
        provisioned_throughput: std::option::Option<crate::model::ProvisionedThroughput>,
    }
    impl Builder {
        pub fn index_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.index_name = Some(inp.into());
            self
        }
        pub fn set_index_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.index_name = inp;
            self
        }
        pub fn key_schema(mut self, inp: impl Into<crate::model::KeySchemaElement>) -> Self {
            let mut v = self.key_schema.unwrap_or_default();
            v.push(inp.into());
            self.key_schema = Some(v);
            self
        }
        pub fn set_key_schema(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::KeySchemaElement>>,
        ) -> Self {
            self.key_schema = inp;
            self
        }
        pub fn projection(mut self, inp: crate::model::Projection) -> Self {
            self.projection = Some(inp);
            self
        }
        pub fn set_projection(
            mut self,
            inp: std::option::Option<crate::model::Projection>,
        ) -> Self {
            self.projection = inp;
            self
        }
        pub fn provisioned_throughput(mut self, inp: crate::model::ProvisionedThroughput) -> Self {
            self.provisioned_throughput = Some(inp);
            self
        }
        pub fn set_provisioned_throughput(
            mut self,
            inp: std::option::Option<crate::model::ProvisionedThroughput>,
        ) -> Self {
            self.provisioned_throughput = inp;
            self
        }
        /// Consumes the builder and constructs a [`GlobalSecondaryIndex`](crate::model::GlobalSecondaryIndex)
        pub fn build(self) -> crate::model::GlobalSecondaryIndex {
            crate::model::GlobalSecondaryIndex {
                index_name: self.index_name,
                key_schema: self.key_schema,
                projection: self.projection,
                provisioned_throughput: self.provisioned_throughput,
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
pub struct LocalSecondaryIndexDescription {
    #[serde(rename = "IndexName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub index_name: std::option::Option<std::string::String>,
    #[serde(rename = "KeySchema")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub key_schema: std::option::Option<std::vec::Vec<crate::model::KeySchemaElement>>,
    #[serde(rename = "Projection")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub projection: std::option::Option<crate::model::Projection>,
    #[serde(rename = "IndexSizeBytes")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub index_size_bytes: std::option::Option<i64>,
    #[serde(rename = "ItemCount")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub item_count: std::option::Option<i64>,
    #[serde(rename = "IndexArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub index_arn: std::option::Option<std::string::String>,
}
impl LocalSecondaryIndexDescription {
    /// Creates a new builder-style object to manufacture [`LocalSecondaryIndexDescription`](crate::model::LocalSecondaryIndexDescription)
    pub fn builder() -> crate::model::local_secondary_index_description::Builder {
        crate::model::local_secondary_index_description::Builder::default()
    }
}
/// See [`LocalSecondaryIndexDescription`](crate::model::LocalSecondaryIndexDescription)
pub mod local_secondary_index_description {
    /// A builder for [`LocalSecondaryIndexDescription`](crate::model::LocalSecondaryIndexDescription)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        index_name: std::option::Option<std::string::String>,
        key_schema: std::option::Option<std::vec::Vec<crate::model::KeySchemaElement>>,
        projection: std::option::Option<crate::model::Projection>,
        index_size_bytes: std::option::Option<i64>,
        item_count: std::option::Option<i64>,
        index_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn index_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.index_name = Some(inp.into());
            self
        }
        pub fn set_index_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.index_name = inp;
            self
        }
        pub fn key_schema(mut self, inp: impl Into<crate::model::KeySchemaElement>) -> Self {
            let mut v = self.key_schema.unwrap_or_default();
            v.push(inp.into());
            self.key_schema = Some(v);
            self
        }
        pub fn set_key_schema(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::KeySchemaElement>>,
        ) -> Self {
            self.key_schema = inp;
            self
        }
        pub fn projection(mut self, inp: crate::model::Projection) -> Self {
            self.projection = Some(inp);
            self
        }
        pub fn set_projection(
            mut self,
            inp: std::option::Option<crate::model::Projection>,
        ) -> Self {
            self.projection = inp;
            self
        }
        pub fn index_size_bytes(mut self, inp: i64) -> Self {
            self.index_size_bytes = Some(inp);
            self
        }
        pub fn set_index_size_bytes(mut self, inp: std::option::Option<i64>) -> Self {
            self.index_size_bytes = inp;
            self
        }
        pub fn item_count(mut self, inp: i64) -> Self {
            self.item_count = Some(inp);
            self
        }
        pub fn set_item_count(mut self, inp: std::option::Option<i64>) -> Self {
            self.item_count = inp;
            self
        }
        pub fn index_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.index_arn = Some(inp.into());
            self
        }
        pub fn set_index_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.index_arn = inp;
            self
        }
        /// Consumes the builder and constructs a [`LocalSecondaryIndexDescription`](crate::model::LocalSecondaryIndexDescription)
        pub fn build(self) -> crate::model::LocalSecondaryIndexDescription {
            crate::model::LocalSecondaryIndexDescription {
                index_name: self.index_name,
                key_schema: self.key_schema,
                projection: self.projection,
                index_size_bytes: self.index_size_bytes,
                item_count: self.item_count,
                index_arn: self.index_arn,
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
pub struct GlobalSecondaryIndexDescription {
    #[serde(rename = "IndexName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub index_name: std::option::Option<std::string::String>,
    #[serde(rename = "KeySchema")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub key_schema: std::option::Option<std::vec::Vec<crate::model::KeySchemaElement>>,
    #[serde(rename = "Projection")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub projection: std::option::Option<crate::model::Projection>,
    #[serde(rename = "IndexStatus")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub index_status: std::option::Option<crate::model::IndexStatus>,
    #[serde(rename = "Backfilling")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub backfilling: std::option::Option<bool>,
    #[serde(rename = "ProvisionedThroughput")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub provisioned_throughput: std::option::Option<crate::model::ProvisionedThroughputDescription>,
    #[serde(rename = "IndexSizeBytes")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub index_size_bytes: std::option::Option<i64>,
    #[serde(rename = "ItemCount")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub item_count: std::option::Option<i64>,
    #[serde(rename = "IndexArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub index_arn: std::option::Option<std::string::String>,
}
impl GlobalSecondaryIndexDescription {
    /// Creates a new builder-style object to manufacture [`GlobalSecondaryIndexDescription`](crate::model::GlobalSecondaryIndexDescription)
    pub fn builder() -> crate::model::global_secondary_index_description::Builder {
        crate::model::global_secondary_index_description::Builder::default()
    }
}
/// See [`GlobalSecondaryIndexDescription`](crate::model::GlobalSecondaryIndexDescription)
pub mod global_secondary_index_description {
    /// A builder for [`GlobalSecondaryIndexDescription`](crate::model::GlobalSecondaryIndexDescription)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        index_name: std::option::Option<std::string::String>,
        key_schema: std::option::Option<std::vec::Vec<crate::model::KeySchemaElement>>,
        projection: std::option::Option<crate::model::Projection>,
        index_status: std::option::Option<crate::model::IndexStatus>,
        backfilling: std::option::Option<bool>,
        provisioned_throughput: std::option::Option<crate::model::ProvisionedThroughputDescription>,
        index_size_bytes: std::option::Option<i64>,
        item_count: std::option::Option<i64>,
        index_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn index_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.index_name = Some(inp.into());
            self
        }
        pub fn set_index_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.index_name = inp;
            self
        }
        pub fn key_schema(mut self, inp: impl Into<crate::model::KeySchemaElement>) -> Self {
            let mut v = self.key_schema.unwrap_or_default();
            v.push(inp.into());
            self.key_schema = Some(v);
            self
        }
        pub fn set_key_schema(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::KeySchemaElement>>,
        ) -> Self {
            self.key_schema = inp;
            self
        }
        pub fn projection(mut self, inp: crate::model::Projection) -> Self {
            self.projection = Some(inp);
            self
        }
        pub fn set_projection(
            mut self,
            inp: std::option::Option<crate::model::Projection>,
        ) -> Self {
            self.projection = inp;
            self
        }
        pub fn index_status(mut self, inp: crate::model::IndexStatus) -> Self {
            self.index_status = Some(inp);
            self
        }
        pub fn set_index_status(
            mut self,
            inp: std::option::Option<crate::model::IndexStatus>,
        ) -> Self {
            self.index_status = inp;
            self
        }
        pub fn backfilling(mut self, inp: bool) -> Self {
            self.backfilling = Some(inp);
            self
        }
        pub fn set_backfilling(mut self, inp: std::option::Option<bool>) -> Self {
            self.backfilling = inp;
            self
        }
        pub fn provisioned_throughput(
            mut self,
            inp: crate::model::ProvisionedThroughputDescription,
        ) -> Self {
            self.provisioned_throughput = Some(inp);
            self
        }
        pub fn set_provisioned_throughput(
            mut self,
            inp: std::option::Option<crate::model::ProvisionedThroughputDescription>,
        ) -> Self {
            self.provisioned_throughput = inp;
            self
        }
        pub fn index_size_bytes(mut self, inp: i64) -> Self {
            self.index_size_bytes = Some(inp);
            self
        }
        pub fn set_index_size_bytes(mut self, inp: std::option::Option<i64>) -> Self {
            self.index_size_bytes = inp;
            self
        }
        pub fn item_count(mut self, inp: i64) -> Self {
            self.item_count = Some(inp);
            self
        }
        pub fn set_item_count(mut self, inp: std::option::Option<i64>) -> Self {
            self.item_count = inp;
            self
        }
        pub fn index_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.index_arn = Some(inp.into());
            self
        }
        pub fn set_index_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.index_arn = inp;
            self
        }
        /// Consumes the builder and constructs a [`GlobalSecondaryIndexDescription`](crate::model::GlobalSecondaryIndexDescription)
        pub fn build(self) -> crate::model::GlobalSecondaryIndexDescription {
            crate::model::GlobalSecondaryIndexDescription {
                index_name: self.index_name,
                key_schema: self.key_schema,
                projection: self.projection,
                index_status: self.index_status,
                backfilling: self.backfilling,
                provisioned_throughput: self.provisioned_throughput,
                index_size_bytes: self.index_size_bytes,
                item_count: self.item_count,
                index_arn: self.index_arn,
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
pub struct StreamSpecification {
    #[serde(rename = "StreamEnabled")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub stream_enabled: std::option::Option<bool>,
    #[serde(rename = "StreamViewType")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub stream_view_type: std::option::Option<crate::model::StreamViewType>,
}
impl StreamSpecification {
    /// Creates a new builder-style object to manufacture [`StreamSpecification`](crate::model::StreamSpecification)
    pub fn builder() -> crate::model::stream_specification::Builder {
        crate::model::stream_specification::Builder::default()
    }
}
/// See [`StreamSpecification`](crate::model::StreamSpecification)
pub mod stream_specification {
    /// A builder for [`StreamSpecification`](crate::model::StreamSpecification)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        stream_enabled: std::option::Option<bool>,
        stream_view_type: std::option::Option<crate::model::StreamViewType>,
    }
    impl Builder {
        pub fn stream_enabled(mut self, inp: bool) -> Self {
            self.stream_enabled = Some(inp);
            self
        }
        pub fn set_stream_enabled(mut self, inp: std::option::Option<bool>) -> Self {
            self.stream_enabled = inp;
            self
        }
        pub fn stream_view_type(mut self, inp: crate::model::StreamViewType) -> Self {
            self.stream_view_type = Some(inp);
            self
        }
        pub fn set_stream_view_type(
            mut self,
            inp: std::option::Option<crate::model::StreamViewType>,
        ) -> Self {
            self.stream_view_type = inp;
            self
        }
        /// Consumes the builder and constructs a [`StreamSpecification`](crate::model::StreamSpecification)
        pub fn build(self) -> crate::model::StreamSpecification {
            crate::model::StreamSpecification {
                stream_enabled: self.stream_enabled,
                stream_view_type: self.stream_view_type,
            }
        }
    }
}

/// Represents the settings used to enable server-side encryption
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct SseSpecification {
    #[serde(rename = "Enabled")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub enabled: std::option::Option<bool>,
    #[serde(rename = "SSEType")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sse_type: std::option::Option<crate::model::SseType>,
    #[serde(rename = "KMSMasterKeyId")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kms_master_key_id: std::option::Option<std::string::String>,
}
impl SseSpecification {
    /// Creates a new builder-style object to manufacture [`SseSpecification`](crate::model::SseSpecification)
    pub fn builder() -> crate::model::sse_specification::Builder {
        crate::model::sse_specification::Builder::default()
    }
}
/// See [`SseSpecification`](crate::model::SseSpecification)
pub mod sse_specification {
    /// A builder for [`SseSpecification`](crate::model::SseSpecification)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        enabled: std::option::Option<bool>,
        sse_type: std::option::Option<crate::model::SseType>,
        kms_master_key_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn enabled(mut self, inp: bool) -> Self {
            self.enabled = Some(inp);
            self
        }
        pub fn set_enabled(mut self, inp: std::option::Option<bool>) -> Self {
            self.enabled = inp;
            self
        }
        pub fn sse_type(mut self, inp: crate::model::SseType) -> Self {
            self.sse_type = Some(inp);
            self
        }
        pub fn set_sse_type(mut self, inp: std::option::Option<crate::model::SseType>) -> Self {
            self.sse_type = inp;
            self
        }
        pub fn kms_master_key_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.kms_master_key_id = Some(inp.into());
            self
        }
        pub fn set_kms_master_key_id(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.kms_master_key_id = inp;
            self
        }
        /// Consumes the builder and constructs a [`SseSpecification`](crate::model::SseSpecification)
        pub fn build(self) -> crate::model::SseSpecification {
            crate::model::SseSpecification {
                enabled: self.enabled,
                sse_type: self.sse_type,
                kms_master_key_id: self.kms_master_key_id,
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
pub struct SseDescription {
    #[serde(rename = "Status")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<crate::model::SseStatus>,
    #[serde(rename = "SSEType")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sse_type: std::option::Option<crate::model::SseType>,
    #[serde(rename = "KMSMasterKeyArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub kms_master_key_arn: std::option::Option<std::string::String>,
    #[serde(rename = "InaccessibleEncryptionDateTime", with = "smithy_json::serde_with::epoch_seconds_option")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub inaccessible_encryption_date_time: std::option::Option<smithy_types::Instant>,
}
impl SseDescription {
    /// Creates a new builder-style object to manufacture [`SseDescription`](crate::model::SseDescription)
    pub fn builder() -> crate::model::sse_description::Builder {
        crate::model::sse_description::Builder::default()
    }
}
/// See [`SseDescription`](crate::model::SseDescription)
pub mod sse_description {
    /// A builder for [`SseDescription`](crate::model::SseDescription)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        status: std::option::Option<crate::model::SseStatus>,
        sse_type: std::option::Option<crate::model::SseType>,
        kms_master_key_arn: std::option::Option<std::string::String>,
        inaccessible_encryption_date_time: std::option::Option<smithy_types::Instant>,
    }
    impl Builder {
        pub fn status(mut self, inp: crate::model::SseStatus) -> Self {
            self.status = Some(inp);
            self
        }
        pub fn set_status(mut self, inp: std::option::Option<crate::model::SseStatus>) -> Self {
            self.status = inp;
            self
        }
        pub fn sse_type(mut self, inp: crate::model::SseType) -> Self {
            self.sse_type = Some(inp);
            self
        }
        pub fn set_sse_type(mut self, inp: std::option::Option<crate::model::SseType>) -> Self {
            self.sse_type = inp;
            self
        }
        pub fn kms_master_key_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.kms_master_key_arn = Some(inp.into());
            self
        }
        pub fn set_kms_master_key_arn(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.kms_master_key_arn = inp;
            self
        }
        pub fn inaccessible_encryption_date_time(mut self, inp: smithy_types::Instant) -> Self {
            self.inaccessible_encryption_date_time = Some(inp);
            self
        }
        pub fn set_inaccessible_encryption_date_time(
            mut self,
            inp: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.inaccessible_encryption_date_time = inp;
            self
        }
        /// Consumes the builder and constructs a [`SseDescription`](crate::model::SseDescription)
        pub fn build(self) -> crate::model::SseDescription {
            crate::model::SseDescription {
                status: self.status,
                sse_type: self.sse_type,
                kms_master_key_arn: self.kms_master_key_arn,
                inaccessible_encryption_date_time: self.inaccessible_encryption_date_time,
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
pub struct BillingModeSummary {
    #[serde(rename = "BillingMode")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub billing_mode: std::option::Option<crate::model::BillingMode>,
    #[serde(rename = "LastUpdateToPayPerRequestDateTime", with = "smithy_json::serde_with::epoch_seconds_option")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_update_to_pay_per_request_date_time: std::option::Option<smithy_types::Instant>,
}
impl BillingModeSummary {
    /// Creates a new builder-style object to manufacture [`BillingModeSummary`](crate::model::BillingModeSummary)
    pub fn builder() -> crate::model::billing_mode_summary::Builder {
        crate::model::billing_mode_summary::Builder::default()
    }
}
/// See [`BillingModeSummary`](crate::model::BillingModeSummary)
pub mod billing_mode_summary {
    /// A builder for [`BillingModeSummary`](crate::model::BillingModeSummary)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        billing_mode: std::option::Option<crate::model::BillingMode>,
        last_update_to_pay_per_request_date_time: std::option::Option<smithy_types::Instant>,
    }
    impl Builder {
        pub fn billing_mode(mut self, inp: crate::model::BillingMode) -> Self {
            self.billing_mode = Some(inp);
            self
        }
        pub fn set_billing_mode(
            mut self,
            inp: std::option::Option<crate::model::BillingMode>,
        ) -> Self {
            self.billing_mode = inp;
            self
        }
        pub fn last_update_to_pay_per_request_date_time(
            mut self,
            inp: smithy_types::Instant,
        ) -> Self {
            self.last_update_to_pay_per_request_date_time = Some(inp);
            self
        }
        pub fn set_last_update_to_pay_per_request_date_time(
            mut self,
            inp: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.last_update_to_pay_per_request_date_time = inp;
            self
        }
        /// Consumes the builder and constructs a [`BillingModeSummary`](crate::model::BillingModeSummary)
        pub fn build(self) -> crate::model::BillingModeSummary {
            crate::model::BillingModeSummary {
                billing_mode: self.billing_mode,
                last_update_to_pay_per_request_date_time:
                    self.last_update_to_pay_per_request_date_time,
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
pub struct Tag {
    #[serde(rename = "Key")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub key: std::option::Option<std::string::String>,
    #[serde(rename = "Value")]
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

/// Represents the properties of a table
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct TableDescription {
    #[serde(rename = "AttributeDefinitions")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub attribute_definitions:
        std::option::Option<std::vec::Vec<crate::model::AttributeDefinition>>,
    #[serde(rename = "TableName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub table_name: std::option::Option<std::string::String>,
    #[serde(rename = "KeySchema")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub key_schema: std::option::Option<std::vec::Vec<crate::model::KeySchemaElement>>,
    /// The current state of the table. Only an `ACTIVE` table accepts reads and writes.
    #[serde(rename = "TableStatus")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub table_status: std::option::Option<crate::model::TableStatus>,
    #[serde(rename = "CreationDateTime", with = "smithy_json::serde_with::epoch_seconds_option")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_date_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "ProvisionedThroughput")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub provisioned_throughput: std::option::Option<crate::model::ProvisionedThroughputDescription>,
    #[serde(rename = "TableSizeBytes")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub table_size_bytes: std::option::Option<i64>,
    #[serde(rename = "ItemCount")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub item_count: std::option::Option<i64>,
    #[serde(rename = "TableArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub table_arn: std::option::Option<std::string::String>,
    #[serde(rename = "TableId")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub table_id: std::option::Option<std::string::String>,
    #[serde(rename = "BillingModeSummary")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub billing_mode_summary: std::option::Option<crate::model::BillingModeSummary>,
    #[serde(rename = "LocalSecondaryIndexes")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub local_secondary_indexes:
        std::option::Option<std::vec::Vec<crate::model::LocalSecondaryIndexDescription>>,
    #[serde(rename = "GlobalSecondaryIndexes")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub global_secondary_indexes:
        std::option::Option<std::vec::Vec<crate::model::GlobalSecondaryIndexDescription>>,
    #[serde(rename = "StreamSpecification")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub stream_specification: std::option::Option<crate::model::StreamSpecification>,
    #[serde(rename = "LatestStreamLabel")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub latest_stream_label: std::option::Option<std::string::String>,
    #[serde(rename = "LatestStreamArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub latest_stream_arn: std::option::Option<std::string::String>,
    #[serde(rename = "SSEDescription")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sse_description: std::option::Option<crate::model::SseDescription>,
}
impl TableDescription {
    /// Creates a new builder-style object to manufacture [`TableDescription`](crate::model::TableDescription)
    pub fn builder() -> crate::model::table_description::Builder {
        crate::model::table_description::Builder::default()
    }
}
/// See [`TableDescription`](crate::model::TableDescription)
pub mod table_description {
    /// A builder for [`TableDescription`](crate::model::TableDescription)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        attribute_definitions:
            std::option::Option<std::vec::Vec<crate::model::AttributeDefinition>>,
        table_name: std::option::Option<std::string::String>,
        key_schema: std::option::Option<std::vec::Vec<crate::model::KeySchemaElement>>,
        table_status: std::option::Option<crate::model::TableStatus>,
        creation_date_time: std::option::Option<smithy_types::Instant>,
        provisioned_throughput: std::option::Option<crate::model::ProvisionedThroughputDescription>,
        table_size_bytes: std::option::Option<i64>,
        item_count: std::option::Option<i64>,
        table_arn: std::option::Option<std::string::String>,
        table_id: std::option::Option<std::string::String>,
        billing_mode_summary: std::option::Option<crate::model::BillingModeSummary>,
        local_secondary_indexes:
            std::option::Option<std::vec::Vec<crate::model::LocalSecondaryIndexDescription>>,
        global_secondary_indexes:
            std::option::Option<std::vec::Vec<crate::model::GlobalSecondaryIndexDescription>>,
        stream_specification: std::option::Option<crate::model::StreamSpecification>,
        latest_stream_label: std::option::Option<std::string::String>,
        latest_stream_arn: std::option::Option<std::string::String>,
        sse_description: std::option::Option<crate::model::SseDescription>,
    }
    impl Builder {
        pub fn attribute_definitions(
            mut self,
            inp: impl Into<crate::model::AttributeDefinition>,
        ) -> Self {
            let mut v = self.attribute_definitions.unwrap_or_default();
            v.push(inp.into());
            self.attribute_definitions = Some(v);
            self
        }
        pub fn set_attribute_definitions(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::AttributeDefinition>>,
        ) -> Self {
            self.attribute_definitions = inp;
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
        pub fn key_schema(mut self, inp: impl Into<crate::model::KeySchemaElement>) -> Self {
            let mut v = self.key_schema.unwrap_or_default();
            v.push(inp.into());
            self.key_schema = Some(v);
            self
        }
        pub fn set_key_schema(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::KeySchemaElement>>,
        ) -> Self {
            self.key_schema = inp;
            self
        }
        /// The current state of the table. Only an `ACTIVE` table accepts reads and writes.
        pub fn table_status(mut self, inp: crate::model::TableStatus) -> Self {
            self.table_status = Some(inp);
            self
        }
        pub fn set_table_status(
            mut self,
            inp: std::option::Option<crate::model::TableStatus>,
        ) -> Self {
            self.table_status = inp;
            self
        }
        pub fn creation_date_time(mut self, inp: smithy_types::Instant) -> Self {
            self.creation_date_time = Some(inp);
            self
        }
        pub fn set_creation_date_time(
            mut self,
            inp: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.creation_date_time = inp;
            self
        }
        pub fn provisioned_throughput(
            mut self,
            inp: crate::model::ProvisionedThroughputDescription,
        ) -> Self {
            self.provisioned_throughput = Some(inp);
            self
        }
        pub fn set_provisioned_throughput(
            mut self,
            inp: std::option::Option<crate::model::ProvisionedThroughputDescription>,
        ) -> Self {
            self.provisioned_throughput = inp;
            self
        }
        pub fn table_size_bytes(mut self, inp: i64) -> Self {
            self.table_size_bytes = Some(inp);
            self
        }
        pub fn set_table_size_bytes(mut self, inp: std::option::Option<i64>) -> Self {
            self.table_size_bytes = inp;
            self
        }
        pub fn item_count(mut self, inp: i64) -> Self {
            self.item_count = Some(inp);
            self
        }
        pub fn set_item_count(mut self, inp: std::option::Option<i64>) -> Self {
            self.item_count = inp;
            self
        }
        pub fn table_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.table_arn = Some(inp.into());
            self
        }
        pub fn set_table_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.table_arn = inp;
            self
        }
        pub fn table_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.table_id = Some(inp.into());
            self
        }
        pub fn set_table_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.table_id = inp;
            self
        }
        pub fn billing_mode_summary(mut self, inp: crate::model::BillingModeSummary) -> Self {
            self.billing_mode_summary = Some(inp);
            self
        }
        pub fn set_billing_mode_summary(
            mut self,
            inp: std::option::Option<crate::model::BillingModeSummary>,
        ) -> Self {
            self.billing_mode_summary = inp;
            self
        }
        pub fn local_secondary_indexes(
            mut self,
            inp: impl Into<crate::model::LocalSecondaryIndexDescription>,
        ) -> Self {
            let mut v = self.local_secondary_indexes.unwrap_or_default();
            v.push(inp.into());
            self.local_secondary_indexes = Some(v);
            self
        }
        pub fn set_local_secondary_indexes(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::LocalSecondaryIndexDescription>>,
        ) -> Self {
            self.local_secondary_indexes = inp;
            self
        }
        pub fn global_secondary_indexes(
            mut self,
            inp: impl Into<crate::model::GlobalSecondaryIndexDescription>,
        ) -> Self {
            let mut v = self.global_secondary_indexes.unwrap_or_default();
            v.push(inp.into());
            self.global_secondary_indexes = Some(v);
            self
        }
        pub fn set_global_secondary_indexes(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::GlobalSecondaryIndexDescription>>,
        ) -> Self {
            self.global_secondary_indexes = inp;
            self
        }
        pub fn stream_specification(mut self, inp: crate::model::StreamSpecification) -> Self {
            self.stream_specification = Some(inp);
            self
        }
        pub fn set_stream_specification(
            mut self,
            inp: std::option::Option<crate::model::StreamSpecification>,
        ) -> Self {
            self.stream_specification = inp;
            self
        }
        pub fn latest_stream_label(mut self, inp: impl Into<std::string::String>) -> Self {
            self.latest_stream_label = Some(inp.into());
            self
        }
        pub fn set_latest_stream_label(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.latest_stream_label = inp;
            self
        }
        pub fn latest_stream_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.latest_stream_arn = Some(inp.into());
            self
        }
        pub fn set_latest_stream_arn(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.latest_stream_arn = inp;
            self
        }
        pub fn sse_description(mut self, inp: crate::model::SseDescription) -> Self {
            self.sse_description = Some(inp);
            self
        }
        pub fn set_sse_description(
            mut self,
            inp: std::option::Option<crate::model::SseDescription>,
        ) -> Self {
            self.sse_description = inp;
            self
        }
        /// Consumes the builder and constructs a [`TableDescription`](crate::model::TableDescription)
        pub fn build(self) -> crate::model::TableDescription {
            crate::model::TableDescription {
                attribute_definitions: self.attribute_definitions,
                table_name: self.table_name,
                key_schema: self.key_schema,
                table_status: self.table_status,
                creation_date_time: self.creation_date_time,
                provisioned_throughput: self.provisioned_throughput,
                table_size_bytes: self.table_size_bytes,
                item_count: self.item_count,
                table_arn: self.table_arn,
                table_id: self.table_id,
                billing_mode_summary: self.billing_mode_summary,
                local_secondary_indexes: self.local_secondary_indexes,
                global_secondary_indexes: self.global_secondary_indexes,
                stream_specification: self.stream_specification,
                latest_stream_label: self.latest_stream_label,
                latest_stream_arn: self.latest_stream_arn,
                sse_description: self.sse_description,
            }
        }
    }
}

/// Represents a set of primary keys and, for each key, the attributes to retrieve from the table
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct KeysAndAttributes {
    #[serde(rename = "Keys")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub keys:
        std::option::Option<std::vec::Vec<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>>,
    #[serde(rename = "AttributesToGet")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub attributes_to_get: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "ConsistentRead")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub consistent_read: std::option::Option<bool>,
    #[serde(rename = "ProjectionExpression")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub projection_expression: std::option::Option<std::string::String>,
    #[serde(rename = "ExpressionAttributeNames")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub expression_attribute_names:
        std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
}
impl KeysAndAttributes {
    /// Creates a new builder-style object to manufacture [`KeysAndAttributes`](crate::model::KeysAndAttributes)
    pub fn builder() -> crate::model::keys_and_attributes::Builder {
        crate::model::keys_and_attributes::Builder::default()
    }
}
/// See [`KeysAndAttributes`](crate::model::KeysAndAttributes)
pub mod keys_and_attributes {
    /// A builder for [`KeysAndAttributes`](crate::model::KeysAndAttributes)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        keys:
            std::option::Option<std::vec::Vec<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>>,
        attributes_to_get: std::option::Option<std::vec::Vec<std::string::String>>,
        consistent_read: std::option::Option<bool>,
        projection_expression: std::option::Option<std::string::String>,
        expression_attribute_names:
            std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    }
    impl Builder {
        pub fn keys(
            mut self,
            inp: impl Into<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        ) -> Self {
            let mut v = self.keys.unwrap_or_default();
            v.push(inp.into());
            self.keys = Some(v);
            self
        }
        pub fn set_keys(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>>,
        ) -> Self {
            self.keys = inp;
            self
        }
        pub fn attributes_to_get(mut self, inp: impl Into<std::string::String>) -> Self {
            let mut v = self.attributes_to_get.unwrap_or_default();
            v.push(inp.into());
            self.attributes_to_get = Some(v);
            self
        }
        pub fn set_attributes_to_get(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.attributes_to_get = inp;
            self
        }
        pub fn consistent_read(mut self, inp: bool) -> Self {
            self.consistent_read = Some(inp);
            self
        }
        pub fn set_consistent_read(mut self, inp: std::option::Option<bool>) -> Self {
            self.consistent_read = inp;
            self
        }
        pub fn projection_expression(mut self, inp: impl Into<std::string::String>) -> Self {
            self.projection_expression = Some(inp.into());
            self
        }
        pub fn set_projection_expression(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.projection_expression = inp;
            self
        }
        pub fn expression_attribute_names(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.expression_attribute_names.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.expression_attribute_names = Some(hash_map);
            self
        }
        pub fn set_expression_attribute_names(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        ) -> Self {
            self.expression_attribute_names = inp;
            self
        }
        /// Consumes the builder and constructs a [`KeysAndAttributes`](crate::model::KeysAndAttributes)
        pub fn build(self) -> crate::model::KeysAndAttributes {
            crate::model::KeysAndAttributes {
                keys: self.keys,
                attributes_to_get: self.attributes_to_get,
                consistent_read: self.consistent_read,
                projection_expression: self.projection_expression,
                expression_attribute_names: self.expression_attribute_names,
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
pub struct Capacity {
    #[serde(rename = "ReadCapacityUnits")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub read_capacity_units: std::option::Option<f64>,
    #[serde(rename = "WriteCapacityUnits")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub write_capacity_units: std::option::Option<f64>,
    #[serde(rename = "CapacityUnits")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub capacity_units: std::option::Option<f64>,
}
impl Capacity {
    /// Creates a new builder-style object to manufacture [`Capacity`](crate::model::Capacity)
    pub fn builder() -> crate::model::capacity::Builder {
        crate::model::capacity::Builder::default()
    }
}
/// See [`Capacity`](crate::model::Capacity)
pub mod capacity {
    /// A builder for [`Capacity`](crate::model::Capacity)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        read_capacity_units: std::option::Option<f64>,
        write_capacity_units: std::option::Option<f64>,
        capacity_units: std::option::Option<f64>,
    }
    impl Builder {
        pub fn read_capacity_units(mut self, inp: f64) -> Self {
            self.read_capacity_units = Some(inp);
            self
        }
        pub fn set_read_capacity_units(mut self, inp: std::option::Option<f64>) -> Self {
            self.read_capacity_units = inp;
            self
        }
        pub fn write_capacity_units(mut self, inp: f64) -> Self {
            self.write_capacity_units = Some(inp);
            self
        }
        pub fn set_write_capacity_units(mut self, inp: std::option::Option<f64>) -> Self {
            self.write_capacity_units = inp;
            self
        }
        pub fn capacity_units(mut self, inp: f64) -> Self {
            self.capacity_units = Some(inp);
            self
        }
        pub fn set_capacity_units(mut self, inp: std::option::Option<f64>) -> Self {
            self.capacity_units = inp;
            self
        }
        /// Consumes the builder and constructs a [`Capacity`](crate::model::Capacity)
        pub fn build(self) -> crate::model::Capacity {
            crate::model::Capacity {
                read_capacity_units: self.read_capacity_units,
                write_capacity_units: self.write_capacity_units,
                capacity_units: self.capacity_units,
            }
        }
    }
}

/// The capacity units consumed by an operation
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct ConsumedCapacity {
    #[serde(rename = "TableName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub table_name: std::option::Option<std::string::String>,
    #[serde(rename = "CapacityUnits")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub capacity_units: std::option::Option<f64>,
    #[serde(rename = "ReadCapacityUnits")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub read_capacity_units: std::option::Option<f64>,
    #[serde(rename = "WriteCapacityUnits")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub write_capacity_units: std::option::Option<f64>,
    #[serde(rename = "Table")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub table: std::option::Option<crate::model::Capacity>,
    #[serde(rename = "LocalSecondaryIndexes")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub local_secondary_indexes:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::Capacity>>,
    #[serde(rename = "GlobalSecondaryIndexes")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub global_secondary_indexes:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::Capacity>>,
}
impl ConsumedCapacity {
    /// Creates a new builder-style object to manufacture [`ConsumedCapacity`](crate::model::ConsumedCapacity)
    pub fn builder() -> crate::model::consumed_capacity::Builder {
        crate::model::consumed_capacity::Builder::default()
    }
}
/// See [`ConsumedCapacity`](crate::model::ConsumedCapacity)
pub mod consumed_capacity {
    /// A builder for [`ConsumedCapacity`](crate::model::ConsumedCapacity)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        table_name: std::option::Option<std::string::String>,
        capacity_units: std::option::Option<f64>,
        read_capacity_units: std::option::Option<f64>,
        write_capacity_units: std::option::Option<f64>,
        table: std::option::Option<crate::model::Capacity>,
        local_secondary_indexes:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::Capacity>>,
        global_secondary_indexes:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::Capacity>>,
    }
    impl Builder {
        pub fn table_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.table_name = Some(inp.into());
            self
        }
        pub fn set_table_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.table_name = inp;
            self
        }
        pub fn capacity_units(mut self, inp: f64) -> Self {
            self.capacity_units = Some(inp);
            self
        }
        pub fn set_capacity_units(mut self, inp: std::option::Option<f64>) -> Self {
            self.capacity_units = inp;
            self
        }
        pub fn read_capacity_units(mut self, inp: f64) -> Self {
            self.read_capacity_units = Some(inp);
            self
        }
        pub fn set_read_capacity_units(mut self, inp: std::option::Option<f64>) -> Self {
            self.read_capacity_units = inp;
            self
        }
        pub fn write_capacity_units(mut self, inp: f64) -> Self {
            self.write_capacity_units = Some(inp);
            self
        }
        pub fn set_write_capacity_units(mut self, inp: std::option::Option<f64>) -> Self {
            self.write_capacity_units = inp;
            self
        }
        pub fn table(mut self, inp: crate::model::Capacity) -> Self {
            self.table = Some(inp);
            self
        }
        pub fn set_table(mut self, inp: std::option::Option<crate::model::Capacity>) -> Self {
            self.table = inp;
            self
        }
        pub fn local_secondary_indexes(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::Capacity>,
        ) -> Self {
            let mut hash_map = self.local_secondary_indexes.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.local_secondary_indexes = Some(hash_map);
            self
        }
        pub fn set_local_secondary_indexes(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::Capacity>>,
        ) -> Self {
            self.local_secondary_indexes = inp;
            self
        }
        pub fn global_secondary_indexes(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::Capacity>,
        ) -> Self {
            let mut hash_map = self.global_secondary_indexes.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.global_secondary_indexes = Some(hash_map);
            self
        }
        pub fn set_global_secondary_indexes(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::Capacity>>,
        ) -> Self {
            self.global_secondary_indexes = inp;
            self
        }
        /// Consumes the builder and constructs a [`ConsumedCapacity`](crate::model::ConsumedCapacity)
        pub fn build(self) -> crate::model::ConsumedCapacity {
            crate::model::ConsumedCapacity {
                table_name: self.table_name,
                capacity_units: self.capacity_units,
                read_capacity_units: self.read_capacity_units,
                write_capacity_units: self.write_capacity_units,
                table: self.table,
                local_secondary_indexes: self.local_secondary_indexes,
                global_secondary_indexes: self.global_secondary_indexes,
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
pub struct ItemCollectionMetrics {
    #[serde(rename = "ItemCollectionKey")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub item_collection_key:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
    #[serde(rename = "SizeEstimateRangeGB")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub size_estimate_range_gb: std::option::Option<std::vec::Vec<f64>>,
}
impl ItemCollectionMetrics {
    /// Creates a new builder-style object to manufacture [`ItemCollectionMetrics`](crate::model::ItemCollectionMetrics)
    pub fn builder() -> crate::model::item_collection_metrics::Builder {
        crate::model::item_collection_metrics::Builder::default()
    }
}
/// See [`ItemCollectionMetrics`](crate::model::ItemCollectionMetrics)
pub mod item_collection_metrics {
    /// A builder for [`ItemCollectionMetrics`](crate::model::ItemCollectionMetrics)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        item_collection_key:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        size_estimate_range_gb: std::option::Option<std::vec::Vec<f64>>,
    }
    impl Builder {
        pub fn item_collection_key(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::AttributeValue>,
        ) -> Self {
            let mut hash_map = self.item_collection_key.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.item_collection_key = Some(hash_map);
            self
        }
        pub fn set_item_collection_key(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        ) -> Self {
            self.item_collection_key = inp;
            self
        }
        pub fn size_estimate_range_gb(mut self, inp: impl Into<f64>) -> Self {
            let mut v = self.size_estimate_range_gb.unwrap_or_default();
            v.push(inp.into());
            self.size_estimate_range_gb = Some(v);
            self
        }
        pub fn set_size_estimate_range_gb(
            mut self,
            inp: std::option::Option<std::vec::Vec<f64>>,
        ) -> Self {
            self.size_estimate_range_gb = inp;
            self
        }
        /// Consumes the builder and constructs a [`ItemCollectionMetrics`](crate::model::ItemCollectionMetrics)
        pub fn build(self) -> crate::model::ItemCollectionMetrics {
            crate::model::ItemCollectionMetrics {
                item_collection_key: self.item_collection_key,
                size_estimate_range_gb: self.size_estimate_range_gb,
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
pub struct ExpectedAttributeValue {
    #[serde(rename = "Value")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub value: std::option::Option<crate::model::AttributeValue>,
    #[serde(rename = "Exists")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub exists: std::option::Option<bool>,
    #[serde(rename = "ComparisonOperator")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub comparison_operator: std::option::Option<crate::model::ComparisonOperator>,
    #[serde(rename = "AttributeValueList")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub attribute_value_list: std::option::Option<std::vec::Vec<crate::model::AttributeValue>>,
}
impl ExpectedAttributeValue {
    /// Creates a new builder-style object to manufacture [`ExpectedAttributeValue`](crate::model::ExpectedAttributeValue)
    pub fn builder() -> crate::model::expected_attribute_value::Builder {
        crate::model::expected_attribute_value::Builder::default()
    }
}
/// See [`ExpectedAttributeValue`](crate::model::ExpectedAttributeValue)
pub mod expected_attribute_value {
    /// A builder for [`ExpectedAttributeValue`](crate::model::ExpectedAttributeValue)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        value: std::option::Option<crate::model::AttributeValue>,
        exists: std::option::Option<bool>,
        comparison_operator: std::option::Option<crate::model::ComparisonOperator>,
        attribute_value_list: std::option::Option<std::vec::Vec<crate::model::AttributeValue>>,
    }
    impl Builder {
        pub fn value(mut self, inp: crate::model::AttributeValue) -> Self {
            self.value = Some(inp);
            self
        }
        pub fn set_value(mut self, inp: std::option::Option<crate::model::AttributeValue>) -> Self {
            self.value = inp;
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
        pub fn comparison_operator(mut self, inp: crate::model::ComparisonOperator) -> Self {
            self.comparison_operator = Some(inp);
            self
        }
        pub fn set_comparison_operator(
            mut self,
            inp: std::option::Option<crate::model::ComparisonOperator>,
        ) -> Self {
            self.comparison_operator = inp;
            self
        }
        pub fn attribute_value_list(
            mut self,
            inp: impl Into<crate::model::AttributeValue>,
        ) -> Self {
            let mut v = self.attribute_value_list.unwrap_or_default();
            v.push(inp.into());
            self.attribute_value_list = Some(v);
            self
        }
        pub fn set_attribute_value_list(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::AttributeValue>>,
        ) -> Self {
            self.attribute_value_list = inp;
            self
        }
        /// Consumes the builder and constructs a [`ExpectedAttributeValue`](crate::model::ExpectedAttributeValue)
        pub fn build(self) -> crate::model::ExpectedAttributeValue {
            crate::model::ExpectedAttributeValue {
                value: self.value,
                exists: self.exists,
                comparison_operator: self.comparison_operator,
                attribute_value_list: self.attribute_value_list,
            }
        }
    }
}

/// Represents the selection criteria for a `Query` or `Scan` operation
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Condition {
    #[serde(rename = "AttributeValueList")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub attribute_value_list: std::option::Option<std::vec::Vec<crate::model::AttributeValue>>,
    #[serde(rename = "ComparisonOperator")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub comparison_operator: std::option::Option<crate::model::ComparisonOperator>,
}
impl Condition {
    /// Creates a new builder-style object to manufacture [`Condition`](crate::model::Condition)
    pub fn builder() -> crate::model::condition::Builder {
        crate::model::condition::Builder::default()
    }
}
/// See [`Condition`](crate::model::Condition)
pub mod condition {
    /// A builder for [`Condition`](crate::model::Condition)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        attribute_value_list: std::option::Option<std::vec::Vec<crate::model::AttributeValue>>,
        comparison_operator: std::option::Option<crate::model::ComparisonOperator>,
    }
    impl Builder {
        pub fn attribute_value_list(
            mut self,
            inp: impl Into<crate::model::AttributeValue>,
        ) -> Self {
            let mut v = self.attribute_value_list.unwrap_or_default();
            v.push(inp.into());
            self.attribute_value_list = Some(v);
            self
        }
        pub fn set_attribute_value_list(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::AttributeValue>>,
        ) -> Self {
            self.attribute_value_list = inp;
            self
        }
        pub fn comparison_operator(mut self, inp: crate::model::ComparisonOperator) -> Self {
            self.comparison_operator = Some(inp);
            self
        }
        pub fn set_comparison_operator(
            mut self,
            inp: std::option::Option<crate::model::ComparisonOperator>,
        ) -> Self {
            self.comparison_operator = inp;
            self
        }
        /// Consumes the builder and constructs a [`Condition`](crate::model::Condition)
        pub fn build(self) -> crate::model::Condition {
            crate::model::Condition {
                attribute_value_list: self.attribute_value_list,
                comparison_operator: self.comparison_operator,
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
pub struct AttributeValueUpdate {
    #[serde(rename = "Value")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub value: std::option::Option<crate::model::AttributeValue>,
    #[serde(rename = "Action")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub action: std::option::Option<crate::model::AttributeAction>,
}
impl AttributeValueUpdate {
    /// Creates a new builder-style object to manufacture [`AttributeValueUpdate`](crate::model::AttributeValueUpdate)
    pub fn builder() -> crate::model::attribute_value_update::Builder {
        crate::model::attribute_value_update::Builder::default()
    }
}
/// See [`AttributeValueUpdate`](crate::model::AttributeValueUpdate)
pub mod attribute_value_update {
    /// A builder for [`AttributeValueUpdate`](crate::model::AttributeValueUpdate)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        value: std::option::Option<crate::model::AttributeValue>,
        action: std::option::Option<crate::model::AttributeAction>,
    }
    impl Builder {
        pub fn value(mut self, inp: crate::model::AttributeValue) -> Self {
            self.value = Some(inp);
            self
        }
        pub fn set_value(mut self, inp: std::option::Option<crate::model::AttributeValue>) -> Self {
            self.value = inp;
            self
        }
        pub fn action(mut self, inp: crate::model::AttributeAction) -> Self {
            self.action = Some(inp);
            self
        }
        pub fn set_action(
            mut self,
            inp: std::option::Option<crate::model::AttributeAction>,
        ) -> Self {
            self.action = inp;
            self
        }
        /// Consumes the builder and constructs a [`AttributeValueUpdate`](crate::model::AttributeValueUpdate)
        pub fn build(self) -> crate::model::AttributeValueUpdate {
            crate::model::AttributeValueUpdate {
                value: self.value,
                action: self.action,
            }
        }
    }
}

/// A request to perform a `PutItem` operation as part of a `BatchWriteItem`
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct PutRequest {
    #[serde(rename = "Item")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub item:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
}
impl PutRequest {
    /// Creates a new builder-style object to manufacture [`PutRequest`](crate::model::PutRequest)
    pub fn builder() -> crate::model::put_request::Builder {
        crate::model::put_request::Builder::default()
    }
}
/// See [`PutRequest`](crate::model::PutRequest)
pub mod put_request {
    /// A builder for [`PutRequest`](crate::model::PutRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        item:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
    }
    impl Builder {
        pub fn item(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::AttributeValue>,
        ) -> Self {
            let mut hash_map = self.item.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.item = Some(hash_map);
            self
        }
        pub fn set_item(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        ) -> Self {
            self.item = inp;
            self
        }
        /// Consumes the builder and constructs a [`PutRequest`](crate::model::PutRequest)
        pub fn build(self) -> crate::model::PutRequest {
            crate::model::PutRequest {
                item: self.item,
            }
        }
    }
}

/// A request to perform a `DeleteItem` operation as part of a `BatchWriteItem`
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct DeleteRequest {
    #[serde(rename = "Key")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub key:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
}
impl DeleteRequest {
    /// Creates a new builder-style object to manufacture [`DeleteRequest`](crate::model::DeleteRequest)
    pub fn builder() -> crate::model::delete_request::Builder {
        crate::model::delete_request::Builder::default()
    }
}
/// See [`DeleteRequest`](crate::model::DeleteRequest)
pub mod delete_request {
    /// A builder for [`DeleteRequest`](crate::model::DeleteRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        key:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
    }
    impl Builder {
        pub fn key(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::AttributeValue>,
        ) -> Self {
            let mut hash_map = self.key.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.key = Some(hash_map);
            self
        }
        pub fn set_key(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        ) -> Self {
            self.key = inp;
            self
        }
        /// Consumes the builder and constructs a [`DeleteRequest`](crate::model::DeleteRequest)
        pub fn build(self) -> crate::model::DeleteRequest {
            crate::model::DeleteRequest {
                key: self.key,
            }
        }
    }
}

/// Represents an operation to perform, either `DeleteItem` or `PutItem`
///
/// Exactly one of the two requests should be set.
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct WriteRequest {
    #[serde(rename = "PutRequest")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub put_request: std::option::Option<crate::model::PutRequest>,
    #[serde(rename = "DeleteRequest")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub delete_request: std::option::Option<crate::model::DeleteRequest>,
}
impl WriteRequest {
    /// Creates a new builder-style object to manufacture [`WriteRequest`](crate::model::WriteRequest)
    pub fn builder() -> crate::model::write_request::Builder {
        crate::model::write_request::Builder::default()
    }
}
/// See [`WriteRequest`](crate::model::WriteRequest)
pub mod write_request {
    /// A builder for [`WriteRequest`](crate::model::WriteRequest)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        put_request: std::option::Option<crate::model::PutRequest>,
        delete_request: std::option::Option<crate::model::DeleteRequest>,
    }
    impl Builder {
        pub fn put_request(mut self, inp: crate::model::PutRequest) -> Self {
            self.put_request = Some(inp);
            self
        }
        pub fn set_put_request(
            mut self,
            inp: std::option::Option<crate::model::PutRequest>,
        ) -> Self {
            self.put_request = inp;
            self
        }
        pub fn delete_request(mut self, inp: crate::model::DeleteRequest) -> Self {
            self.delete_request = Some(inp);
            self
        }
        pub fn set_delete_request(
            mut self,
            inp: std::option::Option<crate::model::DeleteRequest>,
        ) -> Self {
            self.delete_request = inp;
            self
        }
        /// Consumes the builder and constructs a [`WriteRequest`](crate::model::WriteRequest)
        pub fn build(self) -> crate::model::WriteRequest {
            crate::model::WriteRequest {
                put_request: self.put_request,
                delete_request: self.delete_request,
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
pub struct UpdateGlobalSecondaryIndexAction {
    #[serde(rename = "IndexName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub index_name: std::option::Option<std::string::String>,
    #[serde(rename = "ProvisionedThroughput")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub provisioned_throughput: std::option::Option<crate::model::ProvisionedThroughput>,
}
impl UpdateGlobalSecondaryIndexAction {
    /// Creates a new builder-style object to manufacture [`UpdateGlobalSecondaryIndexAction`](crate::model::UpdateGlobalSecondaryIndexAction)
    pub fn builder() -> crate::model::update_global_secondary_index_action::Builder {
        crate::model::update_global_secondary_index_action::Builder::default()
    }
}
/// See [`UpdateGlobalSecondaryIndexAction`](crate::model::UpdateGlobalSecondaryIndexAction)
pub mod update_global_secondary_index_action {
    /// A builder for [`UpdateGlobalSecondaryIndexAction`](crate::model::UpdateGlobalSecondaryIndexAction)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        index_name: std::option::Option<std::string::String>,
        provisioned_throughput: std::option::Option<crate::model::ProvisionedThroughput>,
    }
    impl Builder {
        pub fn index_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.index_name = Some(inp.into());
            self
        }
        pub fn set_index_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.index_name = inp;
            self
        }
        pub fn provisioned_throughput(mut self, inp: crate::model::ProvisionedThroughput) -> Self {
            self.provisioned_throughput = Some(inp);
            self
        }
        pub fn set_provisioned_throughput(
            mut self,
            inp: std::option::Option<crate::model::ProvisionedThroughput>,
        ) -> Self {
            self.provisioned_throughput = inp;
            self
        }
        /// Consumes the builder and constructs a [`UpdateGlobalSecondaryIndexAction`](crate::model::UpdateGlobalSecondaryIndexAction)
        pub fn build(self) -> crate::model::UpdateGlobalSecondaryIndexAction {
            crate::model::UpdateGlobalSecondaryIndexAction {
                index_name: self.index_name,
                provisioned_throughput: self.provisioned_throughput,
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
pub struct CreateGlobalSecondaryIndexAction {
    #[serde(rename = "IndexName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub index_name: std::option::Option<std::string::String>,
    #[serde(rename = "KeySchema")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub key_schema: std::option::Option<std::vec::Vec<crate::model::KeySchemaElement>>,
    #[serde(rename = "Projection")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub projection: std::option::Option<crate::model::Projection>,
    #[serde(rename = "ProvisionedThroughput")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub provisioned_throughput: std::option::Option<crate::model::ProvisionedThroughput>,
}
impl CreateGlobalSecondaryIndexAction {
    /// Creates a new builder-style object to manufacture [`CreateGlobalSecondaryIndexAction`](crate::model::CreateGlobalSecondaryIndexAction)
    pub fn builder() -> crate::model::create_global_secondary_index_action::Builder {
        crate::model::create_global_secondary_index_action::Builder::default()
    }
}
/// See [`CreateGlobalSecondaryIndexAction`](crate::model::CreateGlobalSecondaryIndexAction)
pub mod create_global_secondary_index_action {
    /// A builder for [`CreateGlobalSecondaryIndexAction`](crate::model::CreateGlobalSecondaryIndexAction)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        index_name: std::option::Option<std::string::String>,
        key_schema: std::option::Option<std::vec::Vec<crate::model::KeySchemaElement>>,
        projection: std::option::Option<crate::model::Projection>,
        provisioned_throughput: std::option::Option<crate::model::ProvisionedThroughput>,
    }
    impl Builder {
        pub fn index_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.index_name = Some(inp.into());
            self
        }
        pub fn set_index_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.index_name = inp;
            self
        }
        pub fn key_schema(mut self, inp: impl Into<crate::model::KeySchemaElement>) -> Self {
            let mut v = self.key_schema.unwrap_or_default();
            v.push(inp.into());
            self.key_schema = Some(v);
            self
        }
        pub fn set_key_schema(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::KeySchemaElement>>,
        ) -> Self {
            self.key_schema = inp;
            self
        }
        pub fn projection(mut self, inp: crate::model::Projection) -> Self {
            self.projection = Some(inp);
            self
        }
        pub fn set_projection(
            mut self,
            inp: std::option::Option<crate::model::Projection>,
        ) -> Self {
            self.projection = inp;
            self
        }
        pub fn provisioned_throughput(mut self, inp: crate::model::ProvisionedThroughput) -> Self {
            self.provisioned_throughput = Some(inp);
            self
        }
        pub fn set_provisioned_throughput(
            mut self,
            inp: std::option::Option<crate::model::ProvisionedThroughput>,
        ) -> Self {
            self.provisioned_throughput = inp;
            self
        }
        /// Consumes the builder and constructs a [`CreateGlobalSecondaryIndexAction`](crate::model::CreateGlobalSecondaryIndexAction)
        pub fn build(self) -> crate::model::CreateGlobalSecondaryIndexAction {
            crate::model::CreateGlobalSecondaryIndexAction {
                index_name: self.index_name,
                key_schema: self.key_schema,
                projection: self.projection,
                provisioned_throughput: self.provisioned_throughput,
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
pub struct DeleteGlobalSecondaryIndexAction {
    #[serde(rename = "IndexName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub index_name: std::option::Option<std::string::String>,
}
impl DeleteGlobalSecondaryIndexAction {
    /// Creates a new builder-style object to manufacture [`DeleteGlobalSecondaryIndexAction`](crate::model::DeleteGlobalSecondaryIndexAction)
    pub fn builder() -> crate::model::delete_global_secondary_index_action::Builder {
        crate::model::delete_global_secondary_index_action::Builder::default()
    }
}
/// See [`DeleteGlobalSecondaryIndexAction`](crate::model::DeleteGlobalSecondaryIndexAction)
pub mod delete_global_secondary_index_action {
    /// A builder for [`DeleteGlobalSecondaryIndexAction`](crate::model::DeleteGlobalSecondaryIndexAction)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        index_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn index_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.index_name = Some(inp.into());
            self
        }
        pub fn set_index_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.index_name = inp;
            self
        }
        /// Consumes the builder and constructs a [`DeleteGlobalSecondaryIndexAction`](crate::model::DeleteGlobalSecondaryIndexAction)
        pub fn build(self) -> crate::model::DeleteGlobalSecondaryIndexAction {
            crate::model::DeleteGlobalSecondaryIndexAction {
                index_name: self.index_name,
            }
        }
    }
}

/// One of the new global secondary index actions for `UpdateTable`: update, create or delete
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct GlobalSecondaryIndexUpdate {
    #[serde(rename = "Update")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update: std::option::Option<crate::model::UpdateGlobalSecondaryIndexAction>,
    #[serde(rename = "Create")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub create: std::option::Option<crate::model::CreateGlobalSecondaryIndexAction>,
    #[serde(rename = "Delete")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub delete: std::option::Option<crate::model::DeleteGlobalSecondaryIndexAction>,
}
impl GlobalSecondaryIndexUpdate {
    /// Creates a new builder-style object to manufacture [`GlobalSecondaryIndexUpdate`](crate::model::GlobalSecondaryIndexUpdate)
    pub fn builder() -> crate::model::global_secondary_index_update::Builder {
        crate::model::global_secondary_index_update::Builder::default()
    }
}
/// See [`GlobalSecondaryIndexUpdate`](crate::model::GlobalSecondaryIndexUpdate)
pub mod global_secondary_index_update {
    /// A builder for [`GlobalSecondaryIndexUpdate`](crate::model::GlobalSecondaryIndexUpdate)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        update: std::option::Option<crate::model::UpdateGlobalSecondaryIndexAction>,
        create: std::option::Option<crate::model::CreateGlobalSecondaryIndexAction>,
        delete: std::option::Option<crate::model::DeleteGlobalSecondaryIndexAction>,
    }
    impl Builder {
        pub fn update(mut self, inp: crate::model::UpdateGlobalSecondaryIndexAction) -> Self {
            self.update = Some(inp);
            self
        }
        pub fn set_update(
            mut self,
            inp: std::option::Option<crate::model::UpdateGlobalSecondaryIndexAction>,
        ) -> Self {
            self.update = inp;
            self
        }
        pub fn create(mut self, inp: crate::model::CreateGlobalSecondaryIndexAction) -> Self {
            self.create = Some(inp);
            self
        }
        pub fn set_create(
            mut self,
            inp: std::option::Option<crate::model::CreateGlobalSecondaryIndexAction>,
        ) -> Self {
            self.create = inp;
            self
        }
        pub fn delete(mut self, inp: crate::model::DeleteGlobalSecondaryIndexAction) -> Self {
            self.delete = Some(inp);
            self
        }
        pub fn set_delete(
            mut self,
            inp: std::option::Option<crate::model::DeleteGlobalSecondaryIndexAction>,
        ) -> Self {
            self.delete = inp;
            self
        }
        /// Consumes the builder and constructs a [`GlobalSecondaryIndexUpdate`](crate::model::GlobalSecondaryIndexUpdate)
        pub fn build(self) -> crate::model::GlobalSecondaryIndexUpdate {
            crate::model::GlobalSecondaryIndexUpdate {
                update: self.update,
                create: self.create,
                delete: self.delete,
            }
        }
    }
}

/// Specifies an item and related attribute values to retrieve in a `TransactGetItem` object
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Get {
    #[serde(rename = "Key")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub key:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
    #[serde(rename = "TableName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub table_name: std::option::Option<std::string::String>,
    #[serde(rename = "ProjectionExpression")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub projection_expression: std::option::Option<std::string::String>,
    #[serde(rename = "ExpressionAttributeNames")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub expression_attribute_names:
        std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
}
impl Get {
    /// Creates a new builder-style object to manufacture [`Get`](crate::model::Get)
    pub fn builder() -> crate::model::get::Builder {
        crate::model::get::Builder::default()
    }
}
/// See [`Get`](crate::model::Get)
pub mod get {
    /// A builder for [`Get`](crate::model::Get)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        key:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        table_name: std::option::Option<std::string::String>,
        projection_expression: std::option::Option<std::string::String>,
        expression_attribute_names:
            std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    }
    impl Builder {
        pub fn key(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::AttributeValue>,
        ) -> Self {
            let mut hash_map = self.key.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.key = Some(hash_map);
            self
        }
        pub fn set_key(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        ) -> Self {
            self.key = inp;
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
        pub fn projection_expression(mut self, inp: impl Into<std::string::String>) -> Self {
            self.projection_expression = Some(inp.into());
            self
        }
        pub fn set_projection_expression(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.projection_expression = inp;
            self
        }
        pub fn expression_attribute_names(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.expression_attribute_names.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.expression_attribute_names = Some(hash_map);
            self
        }
        pub fn set_expression_attribute_names(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        ) -> Self {
            self.expression_attribute_names = inp;
            self
        }
        /// Consumes the builder and constructs a [`Get`](crate::model::Get)
        pub fn build(self) -> crate::model::Get {
            crate::model::Get {
                key: self.key,
                table_name: self.table_name,
                projection_expression: self.projection_expression,
                expression_attribute_names: self.expression_attribute_names,
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
pub struct TransactGetItem {
    #[serde(rename = "Get")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub get: std::option::Option<crate::model::Get>,
}
impl TransactGetItem {
    /// Creates a new builder-style object to manufacture [`TransactGetItem`](crate::model::TransactGetItem)
    pub fn builder() -> crate::model::transact_get_item::Builder {
        crate::model::transact_get_item::Builder::default()
    }
}
/// See [`TransactGetItem`](crate::model::TransactGetItem)
pub mod transact_get_item {
    /// A builder for [`TransactGetItem`](crate::model::TransactGetItem)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        get: std::option::Option<crate::model::Get>,
    }
    impl Builder {
        pub fn get(mut self, inp: crate::model::Get) -> Self {
            self.get = Some(inp);
            self
        }
        pub fn set_get(mut self, inp: std::option::Option<crate::model::Get>) -> Self {
            self.get = inp;
            self
        }
        /// Consumes the builder and constructs a [`TransactGetItem`](crate::model::TransactGetItem)
        pub fn build(self) -> crate::model::TransactGetItem {
            crate::model::TransactGetItem {
                get: self.get,
            }
        }
    }
}

/// Details for the requested item
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct ItemResponse {
    #[serde(rename = "Item")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub item:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
}
impl ItemResponse {
    /// Creates a new builder-style object to manufacture [`ItemResponse`](crate::model::ItemResponse)
    pub fn builder() -> crate::model::item_response::Builder {
        crate::model::item_response::Builder::default()
    }
}
/// See [`ItemResponse`](crate::model::ItemResponse)
pub mod item_response {
    /// A builder for [`ItemResponse`](crate::model::ItemResponse)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        item:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
    }
    impl Builder {
        pub fn item(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::AttributeValue>,
        ) -> Self {
            let mut hash_map = self.item.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.item = Some(hash_map);
            self
        }
        pub fn set_item(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        ) -> Self {
            self.item = inp;
            self
        }
        /// Consumes the builder and constructs a [`ItemResponse`](crate::model::ItemResponse)
        pub fn build(self) -> crate::model::ItemResponse {
            crate::model::ItemResponse {
                item: self.item,
            }
        }
    }
}

/// A condition that must hold for the whole transaction to succeed
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct ConditionCheck {
    #[serde(rename = "Key")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub key:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
    #[serde(rename = "TableName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub table_name: std::option::Option<std::string::String>,
    #[serde(rename = "ConditionExpression")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub condition_expression: std::option::Option<std::string::String>,
    #[serde(rename = "ExpressionAttributeNames")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub expression_attribute_names:
        std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    #[serde(rename = "ExpressionAttributeValues")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub expression_attribute_values:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
    #[serde(rename = "ReturnValuesOnConditionCheckFailure")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub return_values_on_condition_check_failure:
        std::option::Option<crate::model::ReturnValuesOnConditionCheckFailure>,
}
impl ConditionCheck {
    /// Creates a new builder-style object to manufacture [`ConditionCheck`](crate::model::ConditionCheck)
    pub fn builder() -> crate::model::condition_check::Builder {
        crate::model::condition_check::Builder::default()
    }
}
/// See [`ConditionCheck`](crate::model::ConditionCheck)
pub mod condition_check {
    /// A builder for [`ConditionCheck`](crate::model::ConditionCheck)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        key:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        table_name: std::option::Option<std::string::String>,
        condition_expression: std::option::Option<std::string::String>,
        expression_attribute_names:
            std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        expression_attribute_values:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        return_values_on_condition_check_failure:
            std::option::Option<crate::model::ReturnValuesOnConditionCheckFailure>,
    }
    impl Builder {
        pub fn key(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::AttributeValue>,
        ) -> Self {
            let mut hash_map = self.key.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.key = Some(hash_map);
            self
        }
        pub fn set_key(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        ) -> Self {
            self.key = inp;
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
        pub fn condition_expression(mut self, inp: impl Into<std::string::String>) -> Self {
            self.condition_expression = Some(inp.into());
            self
        }
        pub fn set_condition_expression(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.condition_expression = inp;
            self
        }
        pub fn expression_attribute_names(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.expression_attribute_names.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.expression_attribute_names = Some(hash_map);
            self
        }
        pub fn set_expression_attribute_names(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        ) -> Self {
            self.expression_attribute_names = inp;
            self
        }
        pub fn expression_attribute_values(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::AttributeValue>,
        ) -> Self {
            let mut hash_map = self.expression_attribute_values.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.expression_attribute_values = Some(hash_map);
            self
        }
        pub fn set_expression_attribute_values(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        ) -> Self {
            self.expression_attribute_values = inp;
            self
        }
        pub fn return_values_on_condition_check_failure(
            mut self,
            inp: crate::model::ReturnValuesOnConditionCheckFailure,
        ) -> Self {
            self.return_values_on_condition_check_failure = Some(inp);
            self
        }
        pub fn set_return_values_on_condition_check_failure(
            mut self,
            inp: std::option::Option<crate::model::ReturnValuesOnConditionCheckFailure>,
        ) -> Self {
            self.return_values_on_condition_check_failure = inp;
            self
        }
        /// Consumes the builder and constructs a [`ConditionCheck`](crate::model::ConditionCheck)
        pub fn build(self) -> crate::model::ConditionCheck {
            crate::model::ConditionCheck {
                key: self.key,
                table_name: self.table_name,
                condition_expression: self.condition_expression,
                expression_attribute_names: self.expression_attribute_names,
                expression_attribute_values: self.expression_attribute_values,
                return_values_on_condition_check_failure:
                    self.return_values_on_condition_check_failure,
            }
        }
    }
}

/// A request to perform a `PutItem` operation within a transaction
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Put {
    #[serde(rename = "Item")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub item:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
    #[serde(rename = "TableName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub table_name: std::option::Option<std::string::String>,
    #[serde(rename = "ConditionExpression")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub condition_expression: std::option::Option<std::string::String>,
    #[serde(rename = "ExpressionAttributeNames")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub expression_attribute_names:
        std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    #[serde(rename = "ExpressionAttributeValues")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub expression_attribute_values:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
    #[serde(rename = "ReturnValuesOnConditionCheckFailure")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub return_values_on_condition_check_failure:
        std::option::Option<crate::model::ReturnValuesOnConditionCheckFailure>,
}
impl Put {
    /// Creates a new builder-style object to manufacture [`Put`](crate::model::Put)
    pub fn builder() -> crate::model::put::Builder {
        crate::model::put::Builder::default()
    }
}
/// See [`Put`](crate::model::Put)
pub mod put {
    /// A builder for [`Put`](crate::model::Put)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        item:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        table_name: std::option::Option<std::string::String>,
        condition_expression: std::option::Option<std::string::String>,
        expression_attribute_names:
            std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        expression_attribute_values:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        return_values_on_condition_check_failure:
            std::option::Option<crate::model::ReturnValuesOnConditionCheckFailure>,
    }
    impl Builder {
        pub fn item(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::AttributeValue>,
        ) -> Self {
            let mut hash_map = self.item.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.item = Some(hash_map);
            self
        }
        pub fn set_item(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        ) -> Self {
            self.item = inp;
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
        pub fn condition_expression(mut self, inp: impl Into<std::string::String>) -> Self {
            self.condition_expression = Some(inp.into());
            self
        }
        pub fn set_condition_expression(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.condition_expression = inp;
            self
        }
        pub fn expression_attribute_names(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.expression_attribute_names.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.expression_attribute_names = Some(hash_map);
            self
        }
        pub fn set_expression_attribute_names(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        ) -> Self {
            self.expression_attribute_names = inp;
            self
        }
        pub fn expression_attribute_values(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::AttributeValue>,
        ) -> Self {
            let mut hash_map = self.expression_attribute_values.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.expression_attribute_values = Some(hash_map);
            self
        }
        pub fn set_expression_attribute_values(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        ) -> Self {
            self.expression_attribute_values = inp;
            self
        }
        pub fn return_values_on_condition_check_failure(
            mut self,
            inp: crate::model::ReturnValuesOnConditionCheckFailure,
        ) -> Self {
            self.return_values_on_condition_check_failure = Some(inp);
            self
        }
        pub fn set_return_values_on_condition_check_failure(
            mut self,
            inp: std::option::Option<crate::model::ReturnValuesOnConditionCheckFailure>,
        ) -> Self {
            self.return_values_on_condition_check_failure = inp;
            self
        }
        /// Consumes the builder and constructs a [`Put`](crate::model::Put)
        pub fn build(self) -> crate::model::Put {
            crate::model::Put {
                item: self.item,
                table_name: self.table_name,
                condition_expression: self.condition_expression,
                expression_attribute_names: self.expression_attribute_names,
                expression_attribute_values: self.expression_attribute_values,
                return_values_on_condition_check_failure:
                    self.return_values_on_condition_check_failure,
            }
        }
    }
}

/// A request to perform a `DeleteItem` operation within a transaction
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Delete {
    #[serde(rename = "Key")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub key:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
    #[serde(rename = "TableName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub table_name: std::option::Option<std::string::String>,
    #[serde(rename = "ConditionExpression")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub condition_expression: std::option::Option<std::string::String>,
    #[serde(rename = "ExpressionAttributeNames")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub expression_attribute_names:
        std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    #[serde(rename = "ExpressionAttributeValues")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub expression_attribute_values:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
    #[serde(rename = "ReturnValuesOnConditionCheckFailure")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub return_values_on_condition_check_failure:
        std::option::Option<crate::model::ReturnValuesOnConditionCheckFailure>,
}
impl Delete {
    /// Creates a new builder-style object to manufacture [`Delete`](crate::model::Delete)
    pub fn builder() -> crate::model::delete::Builder {
        crate::model::delete::Builder::default()
    }
}
/// See [`Delete`](crate::model::Delete)
pub mod delete {
    /// A builder for [`Delete`](crate::model::Delete)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        key:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        table_name: std::option::Option<std::string::String>,
        condition_expression: std::option::Option<std::string::String>,
        expression_attribute_names:
            std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        expression_attribute_values:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        return_values_on_condition_check_failure:
            std::option::Option<crate::model::ReturnValuesOnConditionCheckFailure>,
    }
    impl Builder {
        pub fn key(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::AttributeValue>,
        ) -> Self {
            let mut hash_map = self.key.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.key = Some(hash_map);
            self
        }
        pub fn set_key(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        ) -> Self {
            self.key = inp;
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
        pub fn condition_expression(mut self, inp: impl Into<std::string::String>) -> Self {
            self.condition_expression = Some(inp.into());
            self
        }
        pub fn set_condition_expression(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.condition_expression = inp;
            self
        }
        pub fn expression_attribute_names(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.expression_attribute_names.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.expression_attribute_names = Some(hash_map);
            self
        }
        pub fn set_expression_attribute_names(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        ) -> Self {
            self.expression_attribute_names = inp;
            self
        }
        pub fn expression_attribute_values(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::AttributeValue>,
        ) -> Self {
            let mut hash_map = self.expression_attribute_values.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.expression_attribute_values = Some(hash_map);
            self
        }
        pub fn set_expression_attribute_values(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        ) -> Self {
            self.expression_attribute_values = inp;
            self
        }
        pub fn return_values_on_condition_check_failure(
            mut self,
            inp: crate::model::ReturnValuesOnConditionCheckFailure,
        ) -> Self {
            self.return_values_on_condition_check_failure = Some(inp);
            self
        }
        pub fn set_return_values_on_condition_check_failure(
            mut self,
            inp: std::option::Option<crate::model::ReturnValuesOnConditionCheckFailure>,
        ) -> Self {
            self.return_values_on_condition_check_failure = inp;
            self
        }
        /// Consumes the builder and constructs a [`Delete`](crate::model::Delete)
        pub fn build(self) -> crate::model::Delete {
            crate::model::Delete {
                key: self.key,
                table_name: self.table_name,
                condition_expression: self.condition_expression,
                expression_attribute_names: self.expression_attribute_names,
                expression_attribute_values: self.expression_attribute_values,
                return_values_on_condition_check_failure:
                    self.return_values_on_condition_check_failure,
            }
        }
    }
}

/// A request to perform an `UpdateItem` operation within a transaction
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Update {
    #[serde(rename = "Key")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub key:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
    #[serde(rename = "UpdateExpression")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update_expression: std::option::Option<std::string::String>,
    #[serde(rename = "TableName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub table_name: std::option::Option<std::string::String>,
    #[serde(rename = "ConditionExpression")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub condition_expression: std::option::Option<std::string::String>,
    #[serde(rename = "ExpressionAttributeNames")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub expression_attribute_names:
        std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    #[serde(rename = "ExpressionAttributeValues")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub expression_attribute_values:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
    #[serde(rename = "ReturnValuesOnConditionCheckFailure")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub return_values_on_condition_check_failure:
        std::option::Option<crate::model::ReturnValuesOnConditionCheckFailure>,
}
impl Update {
    /// Creates a new builder-style object to manufacture [`Update`](crate::model::Update)
    pub fn builder() -> crate::model::update::Builder {
        crate::model::update::Builder::default()
    }
}
/// See [`Update`](crate::model::Update)
pub mod update {
    /// A builder for [`Update`](crate::model::Update)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        key:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        update_expression: std::option::Option<std::string::String>,
        table_name: std::option::Option<std::string::String>,
        condition_expression: std::option::Option<std::string::String>,
        expression_attribute_names:
            std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        expression_attribute_values:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        return_values_on_condition_check_failure:
            std::option::Option<crate::model::ReturnValuesOnConditionCheckFailure>,
    }
    impl Builder {
        pub fn key(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::AttributeValue>,
        ) -> Self {
            let mut hash_map = self.key.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.key = Some(hash_map);
            self
        }
        pub fn set_key(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        ) -> Self {
            self.key = inp;
            self
        }
        pub fn update_expression(mut self, inp: impl Into<std::string::String>) -> Self {
            self.update_expression = Some(inp.into());
            self
        }
        pub fn set_update_expression(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.update_expression = inp;
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
        pub fn condition_expression(mut self, inp: impl Into<std::string::String>) -> Self {
            self.condition_expression = Some(inp.into());
            self
        }
        pub fn set_condition_expression(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.condition_expression = inp;
            self
        }
        pub fn expression_attribute_names(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.expression_attribute_names.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.expression_attribute_names = Some(hash_map);
            self
        }
        pub fn set_expression_attribute_names(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        ) -> Self {
            self.expression_attribute_names = inp;
            self
        }
        pub fn expression_attribute_values(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::AttributeValue>,
        ) -> Self {
            let mut hash_map = self.expression_attribute_values.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.expression_attribute_values = Some(hash_map);
            self
        }
        pub fn set_expression_attribute_values(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        ) -> Self {
            self.expression_attribute_values = inp;
            self
        }
        pub fn return_values_on_condition_check_failure(
            mut self,
            inp: crate::model::ReturnValuesOnConditionCheckFailure,
        ) -> Self {
            self.return_values_on_condition_check_failure = Some(inp);
            self
        }
        pub fn set_return_values_on_condition_check_failure(
            mut self,
            inp: std::option::Option<crate::model::ReturnValuesOnConditionCheckFailure>,
        ) -> Self {
            self.return_values_on_condition_check_failure = inp;
            self
        }
        /// Consumes the builder and constructs a [`Update`](crate::model::Update)
        pub fn build(self) -> crate::model::Update {
            crate::model::Update {
                key: self.key,
                update_expression: self.update_expression,
                table_name: self.table_name,
                condition_expression: self.condition_expression,
                expression_attribute_names: self.expression_attribute_names,
                expression_attribute_values: self.expression_attribute_values,
                return_values_on_condition_check_failure:
                    self.return_values_on_condition_check_failure,
            }
        }
    }
}

/// A list of requests that can perform update, put, delete, or check operations on multiple items in one or more tables atomically
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct TransactWriteItem {
    #[serde(rename = "ConditionCheck")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub condition_check: std::option::Option<crate::model::ConditionCheck>,
    #[serde(rename = "Put")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub put: std::option::Option<crate::model::Put>,
    #[serde(rename = "Delete")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub delete: std::option::Option<crate::model::Delete>,
    #[serde(rename = "Update")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update: std::option::Option<crate::model::Update>,
}
impl TransactWriteItem {
    /// Creates a new builder-style object to manufacture [`TransactWriteItem`](crate::model::TransactWriteItem)
    pub fn builder() -> crate::model::transact_write_item::Builder {
        crate::model::transact_write_item::Builder::default()
    }
}
/// See [`TransactWriteItem`](crate::model::TransactWriteItem)
pub mod transact_write_item {
    /// A builder for [`TransactWriteItem`](crate::model::TransactWriteItem)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        condition_check: std::option::Option<crate::model::ConditionCheck>,
        put: std::option::Option<crate::model::Put>,
        delete: std::option::Option<crate::model::Delete>,
        update: std::option::Option<crate::model::Update>,
    }
    impl Builder {
        pub fn condition_check(mut self, inp: crate::model::ConditionCheck) -> Self {
            self.condition_check = Some(inp);
            self
        }
        pub fn set_condition_check(
            mut self,
            inp: std::option::Option<crate::model::ConditionCheck>,
        ) -> Self {
            self.condition_check = inp;
            self
        }
        pub fn put(mut self, inp: crate::model::Put) -> Self {
            self.put = Some(inp);
            self
        }
        pub fn set_put(mut self, inp: std::option::Option<crate::model::Put>) -> Self {
            self.put = inp;
            self
        }
        pub fn delete(mut self, inp: crate::model::Delete) -> Self {
            self.delete = Some(inp);
            self
        }
        pub fn set_delete(mut self, inp: std::option::Option<crate::model::Delete>) -> Self {
            self.delete = inp;
            self
        }
        pub fn update(mut self, inp: crate::model::Update) -> Self {
            self.update = Some(inp);
            self
        }
        pub fn set_update(mut self, inp: std::option::Option<crate::model::Update>) -> Self {
            self.update = inp;
            self
        }
        /// Consumes the builder and constructs a [`TransactWriteItem`](crate::model::TransactWriteItem)
        pub fn build(self) -> crate::model::TransactWriteItem {
            crate::model::TransactWriteItem {
                condition_check: self.condition_check,
                put: self.put,
                delete: self.delete,
                update: self.update,
            }
        }
    }
}

/// The reason a request in a transaction was rejected
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct CancellationReason {
    #[serde(rename = "Item")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub item:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
    #[serde(rename = "Code")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub code: std::option::Option<std::string::String>,
    #[serde(rename = "Message")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub message: std::option::Option<std::string::String>,
}
impl CancellationReason {
    /// Creates a new builder-style object to manufacture [`CancellationReason`](crate::model::CancellationReason)
    pub fn builder() -> crate::model::cancellation_reason::Builder {
        crate::model::cancellation_reason::Builder::default()
    }
}
/// See [`CancellationReason`](crate::model::CancellationReason)
pub mod cancellation_reason {
    /// A builder for [`CancellationReason`](crate::model::CancellationReason)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        item:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        code: std::option::Option<std::string::String>,
        message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn item(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::AttributeValue>,
        ) -> Self {
            let mut hash_map = self.item.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.item = Some(hash_map);
            self
        }
        pub fn set_item(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        ) -> Self {
            self.item = inp;
            self
        }
        pub fn code(mut self, inp: impl Into<std::string::String>) -> Self {
            self.code = Some(inp.into());
            self
        }
        pub fn set_code(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.code = inp;
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
        /// Consumes the builder and constructs a [`CancellationReason`](crate::model::CancellationReason)
        pub fn build(self) -> crate::model::CancellationReason {
            crate::model::CancellationReason {
                item: self.item,
                code: self.code,
                message: self.message,
            }
        }
    }
}

/// Represents the settings used to enable or disable Time to Live for the specified table
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct TimeToLiveSpecification {
    #[serde(rename = "Enabled")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub enabled: std::option::Option<bool>,
    #[serde(rename = "AttributeName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub attribute_name: std::option::Option<std::string::String>,
}
impl TimeToLiveSpecification {
    /// Creates a new builder-style object to manufacture [`TimeToLiveSpecification`](crate::model::TimeToLiveSpecification)
    pub fn builder() -> crate::model::time_to_live_specification::Builder {
        crate::model::time_to_live_specification::Builder::default()
    }
}
/// See [`TimeToLiveSpecification`](crate::model::TimeToLiveSpecification)
pub mod time_to_live_specification {
    /// A builder for [`TimeToLiveSpecification`](crate::model::TimeToLiveSpecification)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        enabled: std::option::Option<bool>,
        attribute_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn enabled(mut self, inp: bool) -> Self {
            self.enabled = Some(inp);
            self
        }
        pub fn set_enabled(mut self, inp: std::option::Option<bool>) -> Self {
            self.enabled = inp;
            self
        }
        pub fn attribute_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.attribute_name = Some(inp.into());
            self
        }
        pub fn set_attribute_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.attribute_name = inp;
            self
        }
        /// Consumes the builder and constructs a [`TimeToLiveSpecification`](crate::model::TimeToLiveSpecification)
        pub fn build(self) -> crate::model::TimeToLiveSpecification {
            crate::model::TimeToLiveSpecification {
                enabled: self.enabled,
                attribute_name: self.attribute_name,
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
pub struct TimeToLiveDescription {
    #[serde(rename = "TimeToLiveStatus")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub time_to_live_status: std::option::Option<crate::model::TimeToLiveStatus>,
    #[serde(rename = "AttributeName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub attribute_name: std::option::Option<std::string::String>,
}
impl TimeToLiveDescription {
    /// Creates a new builder-style object to manufacture [`TimeToLiveDescription`](crate::model::TimeToLiveDescription)
    pub fn builder() -> crate::model::time_to_live_description::Builder {
        crate::model::time_to_live_description::Builder::default()
    }
}
/// See [`TimeToLiveDescription`](crate::model::TimeToLiveDescription)
pub mod time_to_live_description {
    /// A builder for [`TimeToLiveDescription`](crate::model::TimeToLiveDescription)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        time_to_live_status: std::option::Option<crate::model::TimeToLiveStatus>,
        attribute_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn time_to_live_status(mut self, inp: crate::model::TimeToLiveStatus) -> Self {
            self.time_to_live_status = Some(inp);
            self
        }
        pub fn set_time_to_live_status(
            mut self,
            inp: std::option::Option<crate::model::TimeToLiveStatus>,
        ) -> Self {
            self.time_to_live_status = inp;
            self
        }
        pub fn attribute_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.attribute_name = Some(inp.into());
            self
        }
        pub fn set_attribute_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.attribute_name = inp;
            self
        }
        /// Consumes the builder and constructs a [`TimeToLiveDescription`](crate::model::TimeToLiveDescription)
        pub fn build(self) -> crate::model::TimeToLiveDescription {
            crate::model::TimeToLiveDescription {
                time_to_live_status: self.time_to_live_status,
                attribute_name: self.attribute_name,
            }
        }
    }
}
