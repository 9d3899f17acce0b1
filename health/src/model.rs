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
pub enum EntityStatusCode {
    Impaired,
    Unimpaired,
    UnknownValue,
    /// A value the service returned that this version of the client does not know about
    Unknown(String),
}
impl std::convert::From<&str> for EntityStatusCode {
    fn from(s: &str) -> Self {
        match s {
            "IMPAIRED" => EntityStatusCode::Impaired,
            "UNIMPAIRED" => EntityStatusCode::Unimpaired,
            "UNKNOWN" => EntityStatusCode::UnknownValue,
            other => EntityStatusCode::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for EntityStatusCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(EntityStatusCode::from(s))
    }
}
impl EntityStatusCode {
    pub fn as_str(&self) -> &str {
        match self {
            EntityStatusCode::Impaired => "IMPAIRED",
            EntityStatusCode::Unimpaired => "UNIMPAIRED",
            EntityStatusCode::UnknownValue => "UNKNOWN",
            EntityStatusCode::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this version of the client
    pub fn values() -> &'static [&'static str] {
        &["IMPAIRED", "UNIMPAIRED", "UNKNOWN"]
    }
}
impl AsRef<str> for EntityStatusCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for EntityStatusCode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for EntityStatusCode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(EntityStatusCode::from(data.as_str()))
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
pub enum EventStatusCode {
    Open,
    Closed,
    Upcoming,
    /// A value the service returned that this version of the client does not know about
    Unknown(String),
}
impl std::convert::From<&str> for EventStatusCode {
    fn from(s: &str) -> Self {
        match s {
            "open" => EventStatusCode::Open,
            "closed" => EventStatusCode::Closed,
            "upcoming" => EventStatusCode::Upcoming,
            other => EventStatusCode::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for EventStatusCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(EventStatusCode::from(s))
    }
}
impl EventStatusCode {
    pub fn as_str(&self) -> &str {
        match self {
            EventStatusCode::Open => "open",
            EventStatusCode::Closed => "closed",
            EventStatusCode::Upcoming => "upcoming",
            EventStatusCode::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this version of the client
    pub fn values() -> &'static [&'static str] {
        &["open", "closed", "upcoming"]
    }
}
impl AsRef<str> for EventStatusCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for EventStatusCode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for EventStatusCode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(EventStatusCode::from(data.as_str()))
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
pub enum EventTypeCategory {
    Issue,
    AccountNotification,
    ScheduledChange,
    Investigation,
    /// A value the service returned that this version of the client does not know about
    Unknown(String),
}
impl std::convert::From<&str> for EventTypeCategory {
    fn from(s: &str) -> Self {
        match s {
            "issue" => EventTypeCategory::Issue,
            "accountNotification" => EventTypeCategory::AccountNotification,
            "scheduledChange" => EventTypeCategory::ScheduledChange,
            "investigation" => EventTypeCategory::Investigation,
            other => EventTypeCategory::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for EventTypeCategory {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(EventTypeCategory::from(s))
    }
}
impl EventTypeCategory {
    pub fn as_str(&self) -> &str {
        match self {
            EventTypeCategory::Issue => "issue",
            EventTypeCategory::AccountNotification => "accountNotification",
            EventTypeCategory::ScheduledChange => "scheduledChange",
            EventTypeCategory::Investigation => "investigation",
            EventTypeCategory::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this version of the client
    pub fn values() -> &'static [&'static str] {
        &["issue", "accountNotification", "scheduledChange", "investigation"]
    }
}
impl AsRef<str> for EventTypeCategory {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for EventTypeCategory {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for EventTypeCategory {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(EventTypeCategory::from(data.as_str()))
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
pub enum EventAggregateField {
    EventTypeCategory,
    /// A value the service returned that this version of the client does not know about
    Unknown(String),
}
impl std::convert::From<&str> for EventAggregateField {
    fn from(s: &str) -> Self {
        match s {
            "eventTypeCategory" => EventAggregateField::EventTypeCategory,
            other => EventAggregateField::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for EventAggregateField {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(EventAggregateField::from(s))
    }
}
impl EventAggregateField {
    pub fn as_str(&self) -> &str {
        match self {
            EventAggregateField::EventTypeCategory => "eventTypeCategory",
            EventAggregateField::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this version of the client
    pub fn values() -> &'static [&'static str] {
        &["eventTypeCategory"]
    }
}
impl AsRef<str> for EventAggregateField {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for EventAggregateField {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for EventAggregateField {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(EventAggregateField::from(data.as_str()))
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
pub enum EventScopeCode {
    Public,
    AccountSpecific,
    None,
    /// A value the service returned that this version of the client does not know about
    Unknown(String),
}
impl std::convert::From<&str> for EventScopeCode {
    fn from(s: &str) -> Self {
        match s {
            "PUBLIC" => EventScopeCode::Public,
            "ACCOUNT_SPECIFIC" => EventScopeCode::AccountSpecific,
            "NONE" => EventScopeCode::None,
            other => EventScopeCode::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for EventScopeCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(EventScopeCode::from(s))
    }
}
impl EventScopeCode {
    pub fn as_str(&self) -> &str {
        match self {
            EventScopeCode::Public => "PUBLIC",
            EventScopeCode::AccountSpecific => "ACCOUNT_SPECIFIC",
            EventScopeCode::None => "NONE",
            EventScopeCode::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this version of the client
    pub fn values() -> &'static [&'static str] {
        &["PUBLIC", "ACCOUNT_SPECIFIC", "NONE"]
    }
}
impl AsRef<str> for EventScopeCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for EventScopeCode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for EventScopeCode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(EventScopeCode::from(data.as_str()))
    }
}

/// A range of dates and times that is used by the `EventFilter` and `EntityFilter` objects
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct DateTimeRange {
    #[serde(rename = "from", with = "smithy_json::serde_with::epoch_seconds_option")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub from: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "to", with = "smithy_json::serde_with::epoch_seconds_option")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub to: std::option::Option<smithy_types::Instant>,
}
impl DateTimeRange {
    /// Creates a new builder-style object to manufacture [`DateTimeRange`](crate::model::DateTimeRange)
    pub fn builder() -> crate::model::date_time_range::Builder {
        crate::model::date_time_range::Builder::default()
    }
}
/// See [`DateTimeRange`](crate::model::DateTimeRange)
pub mod date_time_range {
    /// A builder for [`DateTimeRange`](crate::model::DateTimeRange)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        from: std::option::Option<smithy_types::Instant>,
        to: std::option::Option<smithy_types::Instant>,
    }
    impl Builder {
        pub fn from(mut self, inp: smithy_types::Instant) -> Self {
            self.from = Some(inp);
            self
        }
        pub fn set_from(mut self, inp: std::option::Option<smithy_types::Instant>) -> Self {
            self.from = inp;
            self
        }
        pub fn to(mut self, inp: smithy_types::Instant) -> Self {
            self.to = Some(inp);
            self
        }
        pub fn set_to(mut self, inp: std::option::Option<smithy_types::Instant>) -> Self {
            self.to = inp;
            self
        }
        /// Consumes the builder and constructs a [`DateTimeRange`](crate::model::DateTimeRange)
        pub fn build(self) -> crate::model::DateTimeRange {
            crate::model::DateTimeRange {
                from: self.from,
                to: self.to,
            }
        }
    }
}

/// The values to use to filter results from the `DescribeAffectedEntities` operation
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct EntityFilter {
    #[serde(rename = "eventArns")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub event_arns: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "entityArns")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entity_arns: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "entityValues")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entity_values: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "lastUpdatedTimes")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_updated_times: std::option::Option<std::vec::Vec<crate::model::DateTimeRange>>,
    #[serde(rename = "tags")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tags:
        std::option::Option<std::vec::Vec<std::collections::HashMap<std::string::String, std::string::String>>>,
    #[serde(rename = "statusCodes")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status_codes: std::option::Option<std::vec::Vec<crate::model::EntityStatusCode>>,
}
impl EntityFilter {
    /// Creates a new builder-style object to manufacture [`EntityFilter`](crate::model::EntityFilter)
    pub fn builder() -> crate::model::entity_filter::Builder {
        crate::model::entity_filter::Builder::default()
    }
}
/// See [`EntityFilter`](crate::model::EntityFilter)
pub mod entity_filter {
    /// A builder for [`EntityFilter`](crate::model::EntityFilter)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        event_arns: std::option::Option<std::vec::Vec<std::string::String>>,
        entity_arns: std::option::Option<std::vec::Vec<std::string::String>>,
        entity_values: std::option::Option<std::vec::Vec<std::string::String>>,
        last_updated_times: std::option::Option<std::vec::Vec<crate::model::DateTimeRange>>,
        tags:
            std::option::Option<std::vec::Vec<std::collections::HashMap<std::string::String, std::string::String>>>,
        status_codes: std::option::Option<std::vec::Vec<crate::model::EntityStatusCode>>,
    }
    impl Builder {
        pub fn event_arns(mut self, inp: impl Into<std::string::String>) -> Self {
            let mut v = self.event_arns.unwrap_or_default();
            v.push(inp.into());
            self.event_arns = Some(v);
            self
        }
        pub fn set_event_arns(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.event_arns = inp;
            self
        }
        pub fn entity_arns(mut self, inp: impl Into<std::string::String>) -> Self {
            let mut v = self.entity_arns.unwrap_or_default();
            v.push(inp.into());
            self.entity_arns = Some(v);
            self
        }
        pub fn set_entity_arns(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.entity_arns = inp;
            self
        }
        pub fn entity_values(mut self, inp: impl Into<std::string::String>) -> Self {
            let mut v = self.entity_values.unwrap_or_default();
            v.push(inp.into());
            self.entity_values = Some(v);
            self
        }
        pub fn set_entity_values(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.entity_values = inp;
            self
        }
        pub fn last_updated_times(mut self, inp: impl Into<crate::model::DateTimeRange>) -> Self {
            let mut v = self.last_updated_times.unwrap_or_default();
            v.push(inp.into());
            self.last_updated_times = Some(v);
            self
        }
        pub fn set_last_updated_times(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::DateTimeRange>>,
        ) -> Self {
            self.last_updated_times = inp;
            self
        }
        pub fn tags(
            mut self,
            inp: impl Into<std::collections::HashMap<std::string::String, std::string::String>>,
        ) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(inp.into());
            self.tags = Some(v);
            self
        }
        pub fn set_tags(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::collections::HashMap<std::string::String, std::string::String>>>,
        ) -> Self {
            self.tags = inp;
            self
        }
        pub fn status_codes(mut self, inp: impl Into<crate::model::EntityStatusCode>) -> Self {
            let mut v = self.status_codes.unwrap_or_default();
            v.push(inp.into());
            self.status_codes = Some(v);
            self
        }
        pub fn set_status_codes(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::EntityStatusCode>>,
        ) -> Self {
            self.status_codes = inp;
            self
        }
        /// Consumes the builder and constructs a [`EntityFilter`](crate::model::EntityFilter)
        pub fn build(self) -> crate::model::EntityFilter {
            crate::model::EntityFilter {
                event_arns: self.event_arns,
                entity_arns: self.entity_arns,
                entity_values: self.entity_values,
                last_updated_times: self.last_updated_times,
                tags: self.tags,
                status_codes: self.status_codes,
            }
        }
    }
}

/// Information about an entity that is affected by a Health event
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct AffectedEntity {
    #[serde(rename = "entityArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entity_arn: std::option::Option<std::string::String>,
    #[serde(rename = "eventArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub event_arn: std::option::Option<std::string::String>,
    #[serde(rename = "entityValue")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entity_value: std::option::Option<std::string::String>,
    #[serde(rename = "entityUrl")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entity_url: std::option::Option<std::string::String>,
    #[serde(rename = "awsAccountId")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub aws_account_id: std::option::Option<std::string::String>,
    #[serde(rename = "lastUpdatedTime", with = "smithy_json::serde_with::epoch_seconds_option")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_updated_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "statusCode")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status_code: std::option::Option<crate::model::EntityStatusCode>,
    #[serde(rename = "tags")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tags:
        std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
}
impl AffectedEntity {
    /// Creates a new builder-style object to manufacture [`AffectedEntity`](crate::model::AffectedEntity)
    pub fn builder() -> crate::model::affected_entity::Builder {
        crate::model::affected_entity::Builder::default()
    }
}
/// See [`AffectedEntity`](crate::model::AffectedEntity)
pub mod affected_entity {
    /// A builder for [`AffectedEntity`](crate::model::AffectedEntity)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        entity_arn: std::option::Option<std::string::String>,
        event_arn: std::option::Option<std::string::String>,
        entity_value: std::option::Option<std::string::String>,
        entity_url: std::option::Option<std::string::String>,
        aws_account_id: std::option::Option<std::string::String>,
        last_updated_time: std::option::Option<smithy_types::Instant>,
        status_code: std::option::Option<crate::model::EntityStatusCode>,
        tags:
            std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    }
    impl Builder {
        pub fn entity_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.entity_arn = Some(inp.into());
            self
        }
        pub fn set_entity_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.entity_arn = inp;
            self
        }
        pub fn event_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.event_arn = Some(inp.into());
            self
        }
        pub fn set_event_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.event_arn = inp;
            self
        }
        pub fn entity_value(mut self, inp: impl Into<std::string::String>) -> Self {
            self.entity_value = Some(inp.into());
            self
        }
        pub fn set_entity_value(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.entity_value = inp;
            self
        }
        pub fn entity_url(mut self, inp: impl Into<std::string::String>) -> Self {
            self.entity_url = Some(inp.into());
            self
        }
        pub fn set_entity_url(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.entity_url = inp;
            self
        }
        pub fn aws_account_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.aws_account_id = Some(inp.into());
            self
        }
        pub fn set_aws_account_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.aws_account_id = inp;
            self
        }
        pub fn last_updated_time(mut self, inp: smithy_types::Instant) -> Self {
            self.last_updated_time = Some(inp);
            self
        }
        pub fn set_last_updated_time(
            mut self,
            inp: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.last_updated_time = inp;
            self
        }
        pub fn status_code(mut self, inp: crate::model::EntityStatusCode) -> Self {
            self.status_code = Some(inp);
            self
        }
        pub fn set_status_code(
            mut self,
            inp: std::option::Option<crate::model::EntityStatusCode>,
        ) -> Self {
            self.status_code = inp;
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
        /// Consumes the builder and constructs a [`AffectedEntity`](crate::model::AffectedEntity)
        pub fn build(self) -> crate::model::AffectedEntity {
            crate::model::AffectedEntity {
                entity_arn: self.entity_arn,
                event_arn: self.event_arn,
                entity_value: self.entity_value,
                entity_url: self.entity_url,
                aws_account_id: self.aws_account_id,
                last_updated_time: self.last_updated_time,
                status_code: self.status_code,
                tags: self.tags,
            }
        }
    }
}

/// The values used to filter results from the organization operations
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct EventAccountFilter {
    #[serde(rename = "eventArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub event_arn: std::option::Option<std::string::String>,
    #[serde(rename = "awsAccountId")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub aws_account_id: std::option::Option<std::string::String>,
}
impl EventAccountFilter {
    /// Creates a new builder-style object to manufacture [`EventAccountFilter`](crate::model::EventAccountFilter)
    pub fn builder() -> crate::model::event_account_filter::Builder {
        crate::model::event_account_filter::Builder::default()
    }
}
/// See [`EventAccountFilter`](crate::model::EventAccountFilter)
pub mod event_account_filter {
    /// A builder for [`EventAccountFilter`](crate::model::EventAccountFilter)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        event_arn: std::option::Option<std::string::String>,
        aws_account_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn event_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.event_arn = Some(inp.into());
            self
        }
        pub fn set_event_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.event_arn = inp;
            self
        }
        pub fn aws_account_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.aws_account_id = Some(inp.into());
            self
        }
        pub fn set_aws_account_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.aws_account_id = inp;
            self
        }
        /// Consumes the builder and constructs a [`EventAccountFilter`](crate::model::EventAccountFilter)
        pub fn build(self) -> crate::model::EventAccountFilter {
            crate::model::EventAccountFilter {
                event_arn: self.event_arn,
                aws_account_id: self.aws_account_id,
            }
        }
    }
}

/// The number of entities that are affected by one or more events
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct EntityAggregate {
    #[serde(rename = "eventArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub event_arn: std::option::Option<std::string::String>,
    #[serde(rename = "count")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub count: std::option::Option<i32>,
}
impl EntityAggregate {
    /// Creates a new builder-style object to manufacture [`EntityAggregate`](crate::model::EntityAggregate)
    pub fn builder() -> crate::model::entity_aggregate::Builder {
        crate::model::entity_aggregate::Builder::default()
    }
}
/// See [`EntityAggregate`](crate::model::EntityAggregate)
pub mod entity_aggregate {
    /// A builder for [`EntityAggregate`](crate::model::EntityAggregate)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        event_arn: std::option::Option<std::string::String>,
        count: std::option::Option<i32>,
    }
    impl Builder {
        pub fn event_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.event_arn = Some(inp.into());
            self
        }
        pub fn set_event_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.event_arn = inp;
            self
        }
        pub fn count(mut self, inp: i32) -> Self {
            self.count = Some(inp);
            self
        }
        pub fn set_count(mut self, inp: std::option::Option<i32>) -> Self {
            self.count = inp;
            self
        }
        /// Consumes the builder and constructs a [`EntityAggregate`](crate::model::EntityAggregate)
        pub fn build(self) -> crate::model::EntityAggregate {
            crate::model::EntityAggregate {
                event_arn: self.event_arn,
                count: self.count,
            }
        }
    }
}

/// The values to use to filter results from the `DescribeEvents` and `DescribeEventAggregates` operations
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct EventFilter {
    #[serde(rename = "eventArns")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub event_arns: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "eventTypeCodes")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub event_type_codes: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "services")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub services: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "regions")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub regions: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "availabilityZones")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub availability_zones: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "startTimes")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub start_times: std::option::Option<std::vec::Vec<crate::model::DateTimeRange>>,
    #[serde(rename = "endTimes")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub end_times: std::option::Option<std::vec::Vec<crate::model::DateTimeRange>>,
    #[serde(rename = "lastUpdatedTimes")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_updated_times: std::option::Option<std::vec::Vec<crate::model::DateTimeRange>>,
    #[serde(rename = "entityArns")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entity_arns: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "entityValues")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entity_values: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "eventTypeCategories")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub event_type_categories: std::option::Option<std::vec::Vec<crate::model::EventTypeCategory>>,
    #[serde(rename = "tags")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tags:
        std::option::Option<std::vec::Vec<std::collections::HashMap<std::string::String, std::string::String>>>,
    #[serde(rename = "eventStatusCodes")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub event_status_codes: std::option::Option<std::vec::Vec<crate::model::EventStatusCode>>,
}
impl EventFilter {
    /// Creates a new builder-style object to manufacture [`EventFilter`](crate::model::EventFilter)
    pub fn builder() -> crate::model::event_filter::Builder {
        crate::model::event_filter::Builder::default()
    }
}
/// See [`EventFilter`](crate::model::EventFilter)
pub mod event_filter {
    /// A builder for [`EventFilter`](crate::model::EventFilter)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        event_arns: std::option::Option<std::vec::Vec<std::string::String>>,
        event_type_codes: std::option::Option<std::vec::Vec<std::string::String>>,
        services: std::option::Option<std::vec::Vec<std::string::String>>,
        regions: std::option::Option<std::vec::Vec<std::string::String>>,
        availability_zones: std::option::Option<std::vec::Vec<std::string::String>>,
        start_times: std::option::Option<std::vec::Vec<crate::model::DateTimeRange>>,
        end_times: std::option::Option<std::vec::Vec<crate::model::DateTimeRange>>,
        last_updated_times: std::option::Option<std::vec::Vec<crate::model::DateTimeRange>>,
        entity_arns: std::option::Option<std::vec::Vec<std::string::String>>,
        entity_values: std::option::Option<std::vec::Vec<std::string::String>>,
        event_type_categories: std::option::Option<std::vec::Vec<crate::model::EventTypeCategory>>,
        tags:
            std::option::Option<std::vec::Vec<std::collections::HashMap<std::string::String, std::string::String>>>,
        event_status_codes: std::option::Option<std::vec::Vec<crate::model::EventStatusCode>>,
    }
    impl Builder {
        pub fn event_arns(mut self, inp: impl Into<std::string::String>) -> Self {
            let mut v = self.event_arns.unwrap_or_default();
            v.push(inp.into());
            self.event_arns = Some(v);
            self
        }
        pub fn set_event_arns(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.event_arns = inp;
            self
        }
        pub fn event_type_codes(mut self, inp: impl Into<std::string::String>) -> Self {
            let mut v = self.event_type_codes.unwrap_or_default();
            v.push(inp.into());
            self.event_type_codes = Some(v);
            self
        }
        pub fn set_event_type_codes(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.event_type_codes = inp;
            self
        }
        pub fn services(mut self, inp: impl Into<std::string::String>) -> Self {
            let mut v = self.services.unwrap_or_default();
            v.push(inp.into());
            self.services = Some(v);
            self
        }
        pub fn set_services(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.services = inp;
            self
        }
        pub fn regions(mut self, inp: impl Into<std::string::String>) -> Self {
            let mut v = self.regions.unwrap_or_default();
            v.push(inp.into());
            self.regions = Some(v);
            self
        }
        pub fn set_regions(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.regions = inp;
            self
        }
        pub fn availability_zones(mut self, inp: impl Into<std::string::String>) -> Self {
            let mut v = self.availability_zones.unwrap_or_default();
            v.push(inp.into());
            self.availability_zones = Some(v);
            self
        }
        pub fn set_availability_zones(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.availability_zones = inp;
            self
        }
        pub fn start_times(mut self, inp: impl Into<crate::model::DateTimeRange>) -> Self {
            let mut v = self.start_times.unwrap_or_default();
            v.push(inp.into());
            self.start_times = Some(v);
            self
        }
        pub fn set_start_times(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::DateTimeRange>>,
        ) -> Self {
            self.start_times = inp;
            self
        }
        pub fn end_times(mut self, inp: impl Into<crate::model::DateTimeRange>) -> Self {
            let mut v = self.end_times.unwrap_or_default();
            v.push(inp.into());
            self.end_times = Some(v);
            self
        }
        pub fn set_end_times(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::DateTimeRange>>,
        ) -> Self {
            self.end_times = inp;
            self
        }
        pub fn last_updated_times(mut self, inp: impl Into<crate::model::DateTimeRange>) -> Self {
            let mut v = self.last_updated_times.unwrap_or_default();
            v.push(inp.into());
            self.last_updated_times = Some(v);
            self
        }
        pub fn set_last_updated_times(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::DateTimeRange>>,
        ) -> Self {
            self.last_updated_times = inp;
            self
        }
        pub fn entity_arns(mut self, inp: impl Into<std::string::String>) -> Self {
            let mut v = self.entity_arns.unwrap_or_default();
            v.push(inp.into());
            self.entity_arns = Some(v);
            self
        }
        pub fn set_entity_arns(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.entity_arns = inp;
            self
        }
        pub fn entity_values(mut self, inp: impl Into<std::string::String>) -> Self {
            let mut v = self.entity_values.unwrap_or_default();
            v.push(inp.into());
            self.entity_values = Some(v);
            self
        }
        pub fn set_entity_values(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.entity_values = inp;
            self
        }
        pub fn event_type_categories(
            mut self,
            inp: impl Into<crate::model::EventTypeCategory>,
        ) -> Self {
            let mut v = self.event_type_categories.unwrap_or_default();
            v.push(inp.into());
            self.event_type_categories = Some(v);
            self
        }
        pub fn set_event_type_categories(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::EventTypeCategory>>,
        ) -> Self {
            self.event_type_categories = inp;
            self
        }
        pub fn tags(
            mut self,
            inp: impl Into<std::collections::HashMap<std::string::String, std::string::String>>,
        ) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(inp.into());
            self.tags = Some(v);
            self
        }
        pub fn set_tags(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::collections::HashMap<std::string::String, std::string::String>>>,
        ) -> Self {
            self.tags = inp;
            self
        }
        pub fn event_status_codes(mut self, inp: impl Into<crate::model::EventStatusCode>) -> Self {
            let mut v = self.event_status_codes.unwrap_or_default();
            v.push(inp.into());
            self.event_status_codes = Some(v);
            self
        }
        pub fn set_event_status_codes(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::EventStatusCode>>,
        ) -> Self {
            self.event_status_codes = inp;
            self
        }
        /// Consumes the builder and constructs a [`EventFilter`](crate::model::EventFilter)
        pub fn build(self) -> crate::model::EventFilter {
            crate::model::EventFilter {
                event_arns: self.event_arns,
                event_type_codes: self.event_type_codes,
                services: self.services,
                regions: self.regions,
                availability_zones: self.availability_zones,
                start_times: self.start_times,
                end_times: self.end_times,
                last_updated_times: self.last_updated_times,
                entity_arns: self.entity_arns,
                entity_values: self.entity_values,
                event_type_categories: self.event_type_categories,
                tags: self.tags,
                event_status_codes: self.event_status_codes,
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
pub struct EventAggregate {
    #[serde(rename = "aggregateValue")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub aggregate_value: std::option::Option<std::string::String>,
    #[serde(rename = "count")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub count: std::option::Option<i32>,
}
impl EventAggregate {
    /// Creates a new builder-style object to manufacture [`EventAggregate`](crate::model::EventAggregate)
    pub fn builder() -> crate::model::event_aggregate::Builder {
        crate::model::event_aggregate::Builder::default()
    }
}
/// See [`EventAggregate`](crate::model::EventAggregate)
pub mod event_aggregate {
    /// A builder for [`EventAggregate`](crate::model::EventAggregate)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        aggregate_value: std::option::Option<std::string::String>,
        count: std::option::Option<i32>,
    }
    impl Builder {
        pub fn aggregate_value(mut self, inp: impl Into<std::string::String>) -> Self {
            self.aggregate_value = Some(inp.into());
            self
        }
        pub fn set_aggregate_value(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.aggregate_value = inp;
            self
        }
        pub fn count(mut self, inp: i32) -> Self {
            self.count = Some(inp);
            self
        }
        pub fn set_count(mut self, inp: std::option::Option<i32>) -> Self {
            self.count = inp;
            self
        }
        /// Consumes the builder and constructs a [`EventAggregate`](crate::model::EventAggregate)
        pub fn build(self) -> crate::model::EventAggregate {
            crate::model::EventAggregate {
                aggregate_value: self.aggregate_value,
                count: self.count,
            }
        }
    }
}

/// Summary information about an AWS Health event
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
    #[serde(rename = "arn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub arn: std::option::Option<std::string::String>,
    #[serde(rename = "service")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub service: std::option::Option<std::string::String>,
    #[serde(rename = "eventTypeCode")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub event_type_code: std::option::Option<std::string::String>,
    #[serde(rename = "eventTypeCategory")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub event_type_category: std::option::Option<crate::model::EventTypeCategory>,
    #[serde(rename = "region")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub region: std::option::Option<std::string::String>,
    #[serde(rename = "availabilityZone")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub availability_zone: std::option::Option<std::string::String>,
    #[serde(rename = "startTime", with = "smithy_json::serde_with::epoch_seconds_option")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub start_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "endTime", with = "smithy_json::serde_with::epoch_seconds_option")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub end_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "lastUpdatedTime", with = "smithy_json::serde_with::epoch_seconds_option")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_updated_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "statusCode")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status_code: std::option::Option<crate::model::EventStatusCode>,
    #[serde(rename = "eventScopeCode")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub event_scope_code: std::option::Option<crate::model::EventScopeCode>,
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
        arn: std::option::Option<std::string::String>,
        service: std::option::Option<std::string::String>,
        event_type_code: std::option::Option<std::string::String>,
        event_type_category: std::option::Option<crate::model::EventTypeCategory>,
        region: std::option::Option<std::string::String>,
        availability_zone: std::option::Option<std::string::String>,
        start_time: std::option::Option<smithy_types::Instant>,
        end_time: std::option::Option<smithy_types::Instant>,
        last_updated_time: std::option::Option<smithy_types::Instant>,
        status_code: std::option::Option<crate::model::EventStatusCode>,
        event_scope_code: std::option::Option<crate::model::EventScopeCode>,
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
        pub fn service(mut self, inp: impl Into<std::string::String>) -> Self {
            self.service = Some(inp.into());
            self
        }
        pub fn set_service(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.service = inp;
            self
        }
        pub fn event_type_code(mut self, inp: impl Into<std::string::String>) -> Self {
            self.event_type_code = Some(inp.into());
            self
        }
        pub fn set_event_type_code(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.event_type_code = inp;
            self
        }
        pub fn event_type_category(mut self, inp: crate::model::EventTypeCategory) -> Self {
            self.event_type_category = Some(inp);
            self
        }
        pub fn set_event_type_category(
            mut self,
            inp: std::option::Option<crate::model::EventTypeCategory>,
        ) -> Self {
            self.event_type_category = inp;
            self
        }
        pub fn region(mut self, inp: impl Into<std::string::String>) -> Self {
            self.region = Some(inp.into());
            self
        }
        pub fn set_region(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.region = inp;
            self
        }
        pub fn availability_zone(mut self, inp: impl Into<std::string::String>) -> Self {
            self.availability_zone = Some(inp.into());
            self
        }
        pub fn set_availability_zone(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.availability_zone = inp;
            self
        }
        pub fn start_time(mut self, inp: smithy_types::Instant) -> Self {
            self.start_time = Some(inp);
            self
        }
        pub fn set_start_time(mut self, inp: std::option::Option<smithy_types::Instant>) -> Self {
            self.start_time = inp;
            self
        }
        pub fn end_time(mut self, inp: smithy_types::Instant) -> Self {
            self.end_time = Some(inp);
            self
        }
        pub fn set_end_time(mut self, inp: std::option::Option<smithy_types::Instant>) -> Self {
            self.end_time = inp;
            self
        }
        pub fn last_updated_time(mut self, inp: smithy_types::Instant) -> Self {
            self.last_updated_time = Some(inp);
            self
        }
        pub fn set_last_updated_time(
            mut self,
            inp: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.last_updated_time = inp;
            self
        }
        pub fn status_code(mut self, inp: crate::model::EventStatusCode) -> Self {
            self.status_code = Some(inp);
            self
        }
        pub fn set_status_code(
            mut self,
            inp: std::option::Option<crate::model::EventStatusCode>,
        ) -> Self {
            self.status_code = inp;
            self
        }
        pub fn event_scope_code(mut self, inp: crate::model::EventScopeCode) -> Self {
            self.event_scope_code = Some(inp);
            self
        }
        pub fn set_event_scope_code(
            mut self,
            inp: std::option::Option<crate::model::EventScopeCode>,
        ) -> Self {
            self.event_scope_code = inp;
            self
        }
        /// Consumes the builder and constructs a [`Event`](crate::model::Event)
        pub fn build(self) -> crate::model::Event {
            crate::model::Event {
                arn: self.arn,
                service: self.service,
                event_type_code: self.event_type_code,
                event_type_category: self.event_type_category,
                region: self.region,
                availability_zone: self.availability_zone,
                start_time: self.start_time,
                end_time: self.end_time,
                last_updated_time: self.last_updated_time,
                status_code: self.status_code,
                event_scope_code: self.event_scope_code,
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
pub struct EventDescription {
    #[serde(rename = "latestDescription")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub latest_description: std::option::Option<std::string::String>,
}
impl EventDescription {
    /// Creates a new builder-style object to manufacture [`EventDescription`](crate::model::EventDescription)
    pub fn builder() -> crate::model::event_description::Builder {
        crate::model::event_description::Builder::default()
    }
}
/// See [`EventDescription`](crate::model::EventDescription)
pub mod event_description {
    /// A builder for [`EventDescription`](crate::model::EventDescription)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        latest_description: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn latest_description(mut self, inp: impl Into<std::string::String>) -> Self {
            self.latest_description = Some(inp.into());
            self
        }
        pub fn set_latest_description(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.latest_description = inp;
            self
        }
        /// Consumes the builder and constructs a [`EventDescription`](crate::model::EventDescription)
        pub fn build(self) -> crate::model::EventDescription {
            crate::model::EventDescription {
                latest_description: self.latest_description,
            }
        }
    }
}

/// Detailed information about an event
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct EventDetails {
    #[serde(rename = "event")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub event: std::option::Option<crate::model::Event>,
    #[serde(rename = "eventDescription")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub event_description: std::option::Option<crate::model::EventDescription>,
    #[serde(rename = "eventMetadata")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub event_metadata:
        std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
}
impl EventDetails {
    /// Creates a new builder-style object to manufacture [`EventDetails`](crate::model::EventDetails)
    pub fn builder() -> crate::model::event_details::Builder {
        crate::model::event_details::Builder::default()
    }
}
/// See [`EventDetails`](crate::model::EventDetails)
pub mod event_details {
    /// A builder for [`EventDetails`](crate::model::EventDetails)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        event: std::option::Option<crate::model::Event>,
        event_description: std::option::Option<crate::model::EventDescription>,
        event_metadata:
            std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    }
    impl Builder {
        pub fn event(mut self, inp: crate::model::Event) -> Self {
            self.event = Some(inp);
            self
        }
        pub fn set_event(mut self, inp: std::option::Option<crate::model::Event>) -> Self {
            self.event = inp;
            self
        }
        pub fn event_description(mut self, inp: crate::model::EventDescription) -> Self {
            self.event_description = Some(inp);
            self
        }
        pub fn set_event_description(
            mut self,
            inp: std::option::Option<crate::model::EventDescription>,
        ) -> Self {
            self.event_description = inp;
            self
        }
        pub fn event_metadata(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.event_metadata.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.event_metadata = Some(hash_map);
            self
        }
        pub fn set_event_metadata(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        ) -> Self {
            self.event_metadata = inp;
            self
        }
        /// Consumes the builder and constructs a [`EventDetails`](crate::model::EventDetails)
        pub fn build(self) -> crate::model::EventDetails {
            crate::model::EventDetails {
                event: self.event,
                event_description: self.event_description,
                event_metadata: self.event_metadata,
            }
        }
    }
}

/// Error information returned when a `DescribeEventDetails` operation cannot find a specified event
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct EventDetailsErrorItem {
    #[serde(rename = "eventArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub event_arn: std::option::Option<std::string::String>,
    #[serde(rename = "errorName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub error_name: std::option::Option<std::string::String>,
    #[serde(rename = "errorMessage")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub error_message: std::option::Option<std::string::String>,
}
impl EventDetailsErrorItem {
    /// Creates a new builder-style object to manufacture [`EventDetailsErrorItem`](crate::model::EventDetailsErrorItem)
    pub fn builder() -> crate::model::event_details_error_item::Builder {
        crate::model::event_details_error_item::Builder::default()
    }
}
/// See [`EventDetailsErrorItem`](crate::model::EventDetailsErrorItem)
pub mod event_details_error_item {
    /// A builder for [`EventDetailsErrorItem`](crate::model::EventDetailsErrorItem)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        event_arn: std::option::Option<std::string::String>,
        error_name: std::option::Option<std::string::String>,
        error_message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn event_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.event_arn = Some(inp.into());
            self
        }
        pub fn set_event_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.event_arn = inp;
            self
        }
        pub fn error_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.error_name = Some(inp.into());
            self
        }
        pub fn set_error_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.error_name = inp;
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
        /// Consumes the builder and constructs a [`EventDetailsErrorItem`](crate::model::EventDetailsErrorItem)
        pub fn build(self) -> crate::model::EventDetailsErrorItem {
            crate::model::EventDetailsErrorItem {
                event_arn: self.event_arn,
                error_name: self.error_name,
                error_message: self.error_message,
            }
        }
    }
}

/// Summary information about an event, returned by the `DescribeEventsForOrganization` operation
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct OrganizationEvent {
    #[serde(rename = "arn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub arn: std::option::Option<std::string::String>,
    #[serde(rename = "service")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub service: std::option::Option<std::string::String>,
    #[serde(rename = "eventTypeCode")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub event_type_code: std::option::Option<std::string::String>,
    #[serde(rename = "eventTypeCategory")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub event_type_category: std::option::Option<crate::model::EventTypeCategory>,
    #[serde(rename = "eventScopeCode")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub event_scope_code: std::option::Option<crate::model::EventScopeCode>,
    #[serde(rename = "region")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub region: std::option::Option<std::string::String>,
    #[serde(rename = "startTime", with = "smithy_json::serde_with::epoch_seconds_option")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub start_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "endTime", with = "smithy_json::serde_with::epoch_seconds_option")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub end_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "lastUpdatedTime", with = "smithy_json::serde_with::epoch_seconds_option")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_updated_time: std::option::Option<smithy_types::Instant>,
    #[serde(rename = "statusCode")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status_code: std::option::Option<crate::model::EventStatusCode>,
}
impl OrganizationEvent {
    /// Creates a new builder-style object to manufacture [`OrganizationEvent`](crate::model::OrganizationEvent)
    pub fn builder() -> crate::model::organization_event::Builder {
        crate::model::organization_event::Builder::default()
    }
}
/// See [`OrganizationEvent`](crate::model::OrganizationEvent)
pub mod organization_event {
    /// A builder for [`OrganizationEvent`](crate::model::OrganizationEvent)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        arn: std::option::Option<std::string::String>,
        service: std::option::Option<std::string::String>,
        event_type_code: std::option::Option<std::string::String>,
        event_type_category: std::option::Option<crate::model::EventTypeCategory>,
        event_scope_code: std::option::Option<crate::model::EventScopeCode>,
        region: std::option::Option<std::string::String>,
        start_time: std::option::Option<smithy_types::Instant>,
        end_time: std::option::Option<smithy_types::Instant>,
        last_updated_time: std::option::Option<smithy_types::Instant>,
        status_code: std::option::Option<crate::model::EventStatusCode>,
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
        pub fn service(mut self, inp: impl Into<std::string::String>) -> Self {
            self.service = Some(inp.into());
            self
        }
        pub fn set_service(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.service = inp;
            self
        }
        pub fn event_type_code(mut self, inp: impl Into<std::string::String>) -> Self {
            self.event_type_code = Some(inp.into());
            self
        }
        pub fn set_event_type_code(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.event_type_code = inp;
            self
        }
        pub fn event_type_category(mut self, inp: crate::model::EventTypeCategory) -> Self {
            self.event_type_category = Some(inp);
            self
        }
        pub fn set_event_type_category(
            mut self,
            inp: std::option::Option<crate::model::EventTypeCategory>,
        ) -> Self {
            self.event_type_category = inp;
            self
        }
        pub fn event_scope_code(mut self, inp: crate::model::EventScopeCode) -> Self {
            self.event_scope_code = Some(inp);
            self
        }
        pub fn set_event_scope_code(
            mut self,
            inp: std::option::Option<crate::model::EventScopeCode>,
        ) -> Self {
            self.event_scope_code = inp;
            self
        }
        pub fn region(mut self, inp: impl Into<std::string::String>) -> Self {
            self.region = Some(inp.into());
            self
        }
        pub fn set_region(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.region = inp;
            self
        }
        pub fn start_time(mut self, inp: smithy_types::Instant) -> Self {
            self.start_time = Some(inp);
            self
        }
        pub fn set_start_time(mut self, inp: std::option::Option<smithy_types::Instant>) -> Self {
            self.start_time = inp;
            self
        }
        pub fn end_time(mut self, inp: smithy_types::Instant) -> Self {
            self.end_time = Some(inp);
            self
        }
        pub fn set_end_time(mut self, inp: std::option::Option<smithy_types::Instant>) -> Self {
            self.end_time = inp;
            self
        }
        pub fn last_updated_time(mut self, inp: smithy_types::Instant) -> Self {
            self.last_updated_time = Some(inp);
            self
        }
        pub fn set_last_updated_time(
            mut self,
            inp: std::option::Option<smithy_types::Instant>,
        ) -> Self {
            self.last_updated_time = inp;
            self
        }
        pub fn status_code(mut self, inp: crate::model::EventStatusCode) -> Self {
            self.status_code = Some(inp);
            self
        }
        pub fn set_status_code(
            mut self,
            inp: std::option::Option<crate::model::EventStatusCode>,
        ) -> Self {
            self.status_code = inp;
            self
        }
        /// Consumes the builder and constructs a [`OrganizationEvent`](crate::model::OrganizationEvent)
        pub fn build(self) -> crate::model::OrganizationEvent {
            crate::model::OrganizationEvent {
                arn: self.arn,
                service: self.service,
                event_type_code: self.event_type_code,
                event_type_category: self.event_type_category,
                event_scope_code: self.event_scope_code,
                region: self.region,
                start_time: self.start_time,
                end_time: self.end_time,
                last_updated_time: self.last_updated_time,
                status_code: self.status_code,
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
pub struct OrganizationEventDetails {
    #[serde(rename = "awsAccountId")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub aws_account_id: std::option::Option<std::string::String>,
    #[serde(rename = "event")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub event: std::option::Option<crate::model::Event>,
    #[serde(rename = "eventDescription")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub event_description: std::option::Option<crate::model::EventDescription>,
    #[serde(rename = "eventMetadata")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub event_metadata:
        std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
}
impl OrganizationEventDetails {
    /// Creates a new builder-style object to manufacture [`OrganizationEventDetails`](crate::model::OrganizationEventDetails)
    pub fn builder() -> crate::model::organization_event_details::Builder {
        crate::model::organization_event_details::Builder::default()
    }
}
/// See [`OrganizationEventDetails`](crate::model::OrganizationEventDetails)
pub mod organization_event_details {
    /// A builder for [`OrganizationEventDetails`](crate::model::OrganizationEventDetails)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        aws_account_id: std::option::Option<std::string::String>,
        event: std::option::Option<crate::model::Event>,
        event_description: std::option::Option<crate::model::EventDescription>,
        event_metadata:
            std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    }
    impl Builder {
        pub fn aws_account_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.aws_account_id = Some(inp.into());
            self
        }
        pub fn set_aws_account_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.aws_account_id = inp;
            self
        }
        pub fn event(mut self, inp: crate::model::Event) -> Self {
            self.event = Some(inp);
            self
        }
        pub fn set_event(mut self, inp: std::option::Option<crate::model::Event>) -> Self {
            self.event = inp;
            self
        }
        pub fn event_description(mut self, inp: crate::model::EventDescription) -> Self {
            self.event_description = Some(inp);
            self
        }
        pub fn set_event_description(
            mut self,
            inp: std::option::Option<crate::model::EventDescription>,
        ) -> Self {
            self.event_description = inp;
            self
        }
        pub fn event_metadata(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            let mut hash_map = self.event_metadata.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.event_metadata = Some(hash_map);
            self
        }
        pub fn set_event_metadata(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        ) -> Self {
            self.event_metadata = inp;
            self
        }
        /// Consumes the builder and constructs a [`OrganizationEventDetails`](crate::model::OrganizationEventDetails)
        pub fn build(self) -> crate::model::OrganizationEventDetails {
            crate::model::OrganizationEventDetails {
                aws_account_id: self.aws_account_id,
                event: self.event,
                event_description: self.event_description,
                event_metadata: self.event_metadata,
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
pub struct OrganizationEventDetailsErrorItem {
    #[serde(rename = "awsAccountId")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub aws_account_id: std::option::Option<std::string::String>,
    #[serde(rename = "eventArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub event_arn: std::option::Option<std::string::String>,
    #[serde(rename = "errorName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub error_name: std::option::Option<std::string::String>,
    #[serde(rename = "errorMessage")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub error_message: std::option::Option<std::string::String>,
}
impl OrganizationEventDetailsErrorItem {
    /// Creates a new builder-style object to manufacture [`OrganizationEventDetailsErrorItem`](crate::model::OrganizationEventDetailsErrorItem)
    pub fn builder() -> crate::model::organization_event_details_error_item::Builder {
        crate::model::organization_event_details_error_item::Builder::default()
    }
}
/// See [`OrganizationEventDetailsErrorItem`](crate::model::OrganizationEventDetailsErrorItem)
pub mod organization_event_details_error_item {
    /// A builder for [`OrganizationEventDetailsErrorItem`](crate::model::OrganizationEventDetailsErrorItem)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        aws_account_id: std::option::Option<std::string::String>,
        event_arn: std::option::Option<std::string::String>,
        error_name: std::option::Option<std::string::String>,
        error_message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn aws_account_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.aws_account_id = Some(inp.into());
            self
        }
        pub fn set_aws_account_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.aws_account_id = inp;
            self
        }
        pub fn event_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.event_arn = Some(inp.into());
            self
        }
        pub fn set_event_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.event_arn = inp;
            self
        }
        pub fn error_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.error_name = Some(inp.into());
            self
        }
        pub fn set_error_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.error_name = inp;
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
        /// Consumes the builder and constructs a [`OrganizationEventDetailsErrorItem`](crate::model::OrganizationEventDetailsErrorItem)
        pub fn build(self) -> crate::model::OrganizationEventDetailsErrorItem {
            crate::model::OrganizationEventDetailsErrorItem {
                aws_account_id: self.aws_account_id,
                event_arn: self.event_arn,
                error_name: self.error_name,
                error_message: self.error_message,
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
pub struct OrganizationAffectedEntitiesErrorItem {
    #[serde(rename = "awsAccountId")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub aws_account_id: std::option::Option<std::string::String>,
    #[serde(rename = "eventArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub event_arn: std::option::Option<std::string::String>,
    #[serde(rename = "errorName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub error_name: std::option::Option<std::string::String>,
    #[serde(rename = "errorMessage")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub error_message: std::option::Option<std::string::String>,
}
impl OrganizationAffectedEntitiesErrorItem {
    /// Creates a new builder-style object to manufacture [`OrganizationAffectedEntitiesErrorItem`](crate::model::OrganizationAffectedEntitiesErrorItem)
    pub fn builder() -> crate::model::organization_affected_entities_error_item::Builder {
        crate::model::organization_affected_entities_error_item::Builder::default()
    }
}
/// See [`OrganizationAffectedEntitiesErrorItem`](crate::model::OrganizationAffectedEntitiesErrorItem)
pub mod organization_affected_entities_error_item {
    /// A builder for [`OrganizationAffectedEntitiesErrorItem`](crate::model::OrganizationAffectedEntitiesErrorItem)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        aws_account_id: std::option::Option<std::string::String>,
        event_arn: std::option::Option<std::string::String>,
        error_name: std::option::Option<std::string::String>,
        error_message: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn aws_account_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.aws_account_id = Some(inp.into());
            self
        }
        pub fn set_aws_account_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.aws_account_id = inp;
            self
        }
        pub fn event_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.event_arn = Some(inp.into());
            self
        }
        pub fn set_event_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.event_arn = inp;
            self
        }
        pub fn error_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.error_name = Some(inp.into());
            self
        }
        pub fn set_error_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.error_name = inp;
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
        /// Consumes the builder and constructs a [`OrganizationAffectedEntitiesErrorItem`](crate::model::OrganizationAffectedEntitiesErrorItem)
        pub fn build(self) -> crate::model::OrganizationAffectedEntitiesErrorItem {
            crate::model::OrganizationAffectedEntitiesErrorItem {
                aws_account_id: self.aws_account_id,
                event_arn: self.event_arn,
                error_name: self.error_name,
                error_message: self.error_message,
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
pub struct OrganizationEventFilter {
    #[serde(rename = "eventTypeCodes")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub event_type_codes: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "awsAccountIds")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub aws_account_ids: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "services")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub services: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "regions")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub regions: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "startTime")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub start_time: std::option::Option<crate::model::DateTimeRange>,
    #[serde(rename = "endTime")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub end_time: std::option::Option<crate::model::DateTimeRange>,
    #[serde(rename = "lastUpdatedTime")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_updated_time: std::option::Option<crate::model::DateTimeRange>,
    #[serde(rename = "entityArns")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entity_arns: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "entityValues")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entity_values: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "eventTypeCategories")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub event_type_categories: std::option::Option<std::vec::Vec<crate::model::EventTypeCategory>>,
    #[serde(rename = "eventStatusCodes")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub event_status_codes: std::option::Option<std::vec::Vec<crate::model::EventStatusCode>>,
}
impl OrganizationEventFilter {
    /// Creates a new builder-style object to manufacture [`OrganizationEventFilter`](crate::model::OrganizationEventFilter)
    pub fn builder() -> crate::model::organization_event_filter::Builder {
        crate::model::organization_event_filter::Builder::default()
    }
}
/// See [`OrganizationEventFilter`](crate::model::OrganizationEventFilter)
pub mod organization_event_filter {
    /// A builder for [`OrganizationEventFilter`](crate::model::OrganizationEventFilter)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        event_type_codes: std::option::Option<std::vec::Vec<std::string::String>>,
        aws_account_ids: std::option::Option<std::vec::Vec<std::string::String>>,
        services: std::option::Option<std::vec::Vec<std::string::String>>,
        regions: std::option::Option<std::vec::Vec<std::string::String>>,
        start_time: std::option::Option<crate::model::DateTimeRange>,
        end_time: std::option::Option<crate::model::DateTimeRange>,
        last_updated_time: std::option::Option<crate::model::DateTimeRange>,
        entity_arns: std::option::Option<std::vec::Vec<std::string::String>>,
        entity_values: std::option::Option<std::vec::Vec<std::string::String>>,
        event_type_categories: std::option::Option<std::vec::Vec<crate::model::EventTypeCategory>>,
        event_status_codes: std::option::Option<std::vec::Vec<crate::model::EventStatusCode>>,
    }
    impl Builder {
        pub fn event_type_codes(mut self, inp: impl Into<std::string::String>) -> Self {
            let mut v = self.event_type_codes.unwrap_or_default();
            v.push(inp.into());
            self.event_type_codes = Some(v);
            self
        }
        pub fn set_event_type_codes(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.event_type_codes = inp;
            self
        }
        pub fn aws_account_ids(mut self, inp: impl Into<std::string::String>) -> Self {
            let mut v = self.aws_account_ids.unwrap_or_default();
            v.push(inp.into());
            self.aws_account_ids = Some(v);
            self
        }
        pub fn set_aws_account_ids(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.aws_account_ids = inp;
            self
        }
        pub fn services(mut self, inp: impl Into<std::string::String>) -> Self {
            let mut v = self.services.unwrap_or_default();
            v.push(inp.into());
            self.services = Some(v);
            self
        }
        pub fn set_services(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.services = inp;
            self
        }
        pub fn regions(mut self, inp: impl Into<std::string::String>) -> Self {
            let mut v = self.regions.unwrap_or_default();
            v.push(inp.into());
            self.regions = Some(v);
            self
        }
        pub fn set_regions(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.regions = inp;
            self
        }
        pub fn start_time(mut self, inp: crate::model::DateTimeRange) -> Self {
            self.start_time = Some(inp);
            self
        }
        pub fn set_start_time(
            mut self,
            inp: std::option::Option<crate::model::DateTimeRange>,
        ) -> Self {
            self.start_time = inp;
            self
        }
        pub fn end_time(mut self, inp: crate::model::DateTimeRange) -> Self {
            self.end_time = Some(inp);
            self
        }
        pub fn set_end_time(
            mut self,
            inp: std::option::Option<crate::model::DateTimeRange>,
        ) -> Self {
            self.end_time = inp;
            self
        }
        pub fn last_updated_time(mut self, inp: crate::model::DateTimeRange) -> Self {
            self.last_updated_time = Some(inp);
            self
        }
        pub fn set_last_updated_time(
            mut self,
            inp: std::option::Option<crate::model::DateTimeRange>,
        ) -> Self {
            self.last_updated_time = inp;
            self
        }
        pub fn entity_arns(mut self, inp: impl Into<std::string::String>) -> Self {
            let mut v = self.entity_arns.unwrap_or_default();
            v.push(inp.into());
            self.entity_arns = Some(v);
            self
        }
        pub fn set_entity_arns(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.entity_arns = inp;
            self
        }
        pub fn entity_values(mut self, inp: impl Into<std::string::String>) -> Self {
            let mut v = self.entity_values.unwrap_or_default();
            v.push(inp.into());
            self.entity_values = Some(v);
            self
        }
        pub fn set_entity_values(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.entity_values = inp;
            self
        }
        pub fn event_type_categories(
            mut self,
            inp: impl Into<crate::model::EventTypeCategory>,
        ) -> Self {
            let mut v = self.event_type_categories.unwrap_or_default();
            v.push(inp.into());
            self.event_type_categories = Some(v);
            self
        }
        pub fn set_event_type_categories(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::EventTypeCategory>>,
        ) -> Self {
            self.event_type_categories = inp;
            self
        }
        pub fn event_status_codes(mut self, inp: impl Into<crate::model::EventStatusCode>) -> Self {
            let mut v = self.event_status_codes.unwrap_or_default();
            v.push(inp.into());
            self.event_status_codes = Some(v);
            self
        }
        pub fn set_event_status_codes(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::EventStatusCode>>,
        ) -> Self {
            self.event_status_codes = inp;
            self
        }
        /// Consumes the builder and constructs a [`OrganizationEventFilter`](crate::model::OrganizationEventFilter)
        pub fn build(self) -> crate::model::OrganizationEventFilter {
            crate::model::OrganizationEventFilter {
                event_type_codes: self.event_type_codes,
                aws_account_ids: self.aws_account_ids,
                services: self.services,
                regions: self.regions,
                start_time: self.start_time,
                end_time: self.end_time,
                last_updated_time: self.last_updated_time,
                entity_arns: self.entity_arns,
                entity_values: self.entity_values,
                event_type_categories: self.event_type_categories,
                event_status_codes: self.event_status_codes,
            }
        }
    }
}

/// The values to use to filter results from the `DescribeEventTypes` operation
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct EventTypeFilter {
    #[serde(rename = "eventTypeCodes")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub event_type_codes: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "services")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub services: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "eventTypeCategories")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub event_type_categories: std::option::Option<std::vec::Vec<crate::model::EventTypeCategory>>,
}
impl EventTypeFilter {
    /// Creates a new builder-style object to manufacture [`EventTypeFilter`](crate::model::EventTypeFilter)
    pub fn builder() -> crate::model::event_type_filter::Builder {
        crate::model::event_type_filter::Builder::default()
    }
}
/// See [`EventTypeFilter`](crate::model::EventTypeFilter)
pub mod event_type_filter {
    /// A builder for [`EventTypeFilter`](crate::model::EventTypeFilter)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        event_type_codes: std::option::Option<std::vec::Vec<std::string::String>>,
        services: std::option::Option<std::vec::Vec<std::string::String>>,
        event_type_categories: std::option::Option<std::vec::Vec<crate::model::EventTypeCategory>>,
    }
    impl Builder {
        pub fn event_type_codes(mut self, inp: impl Into<std::string::String>) -> Self {
            let mut v = self.event_type_codes.unwrap_or_default();
            v.push(inp.into());
            self.event_type_codes = Some(v);
            self
        }
        pub fn set_event_type_codes(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.event_type_codes = inp;
            self
        }
        pub fn services(mut self, inp: impl Into<std::string::String>) -> Self {
            let mut v = self.services.unwrap_or_default();
            v.push(inp.into());
            self.services = Some(v);
            self
        }
        pub fn set_services(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.services = inp;
            self
        }
        pub fn event_type_categories(
            mut self,
            inp: impl Into<crate::model::EventTypeCategory>,
        ) -> Self {
            let mut v = self.event_type_categories.unwrap_or_default();
            v.push(inp.into());
            self.event_type_categories = Some(v);
            self
        }
        pub fn set_event_type_categories(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::EventTypeCategory>>,
        ) -> Self {
            self.event_type_categories = inp;
            self
        }
        /// Consumes the builder and constructs a [`EventTypeFilter`](crate::model::EventTypeFilter)
        pub fn build(self) -> crate::model::EventTypeFilter {
            crate::model::EventTypeFilter {
                event_type_codes: self.event_type_codes,
                services: self.services,
                event_type_categories: self.event_type_categories,
            }
        }
    }
}

/// Metadata about a type of event that is reported by AWS Health
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct EventType {
    #[serde(rename = "service")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub service: std::option::Option<std::string::String>,
    #[serde(rename = "code")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub code: std::option::Option<std::string::String>,
    #[serde(rename = "category")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub category: std::option::Option<crate::model::EventTypeCategory>,
}
impl EventType {
    /// Creates a new builder-style object to manufacture [`EventType`](crate::model::EventType)
    pub fn builder() -> crate::model::event_type::Builder {
        crate::model::event_type::Builder::default()
    }
}
/// See [`EventType`](crate::model::EventType)
pub mod event_type {
    /// A builder for [`EventType`](crate::model::EventType)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        service: std::option::Option<std::string::String>,
        code: std::option::Option<std::string::String>,
        category: std::option::Option<crate::model::EventTypeCategory>,
    }
    impl Builder {
        pub fn service(mut self, inp: impl Into<std::string::String>) -> Self {
            self.service = Some(inp.into());
            self
        }
        pub fn set_service(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.service = inp;
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
        pub fn category(mut self, inp: crate::model::EventTypeCategory) -> Self {
            self.category = Some(inp);
            self
        }
        pub fn set_category(
            mut self,
            inp: std::option::Option<crate::model::EventTypeCategory>,
        ) -> Self {
            self.category = inp;
            self
        }
        /// Consumes the builder and constructs a [`EventType`](crate::model::EventType)
        pub fn build(self) -> crate::model::EventType {
            crate::model::EventType {
                service: self.service,
                code: self.code,
                category: self.category,
            }
        }
    }
}
