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
pub struct DescribeAffectedAccountsForOrganizationOutput {
    #[serde(rename = "affectedAccounts")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub affected_accounts: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "eventScopeCode")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub event_scope_code: std::option::Option<crate::model::EventScopeCode>,
    #[serde(rename = "nextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}
impl DescribeAffectedAccountsForOrganizationOutput {
    /// Creates a new builder-style object to manufacture [`DescribeAffectedAccountsForOrganizationOutput`](crate::output::DescribeAffectedAccountsForOrganizationOutput)
    pub fn builder() -> crate::output::describe_affected_accounts_for_organization_output::Builder {
        crate::output::describe_affected_accounts_for_organization_output::Builder::default()
    }
}
/// See [`DescribeAffectedAccountsForOrganizationOutput`](crate::output::DescribeAffectedAccountsForOrganizationOutput)
pub mod describe_affected_accounts_for_organization_output {
    /// A builder for [`DescribeAffectedAccountsForOrganizationOutput`](crate::output::DescribeAffectedAccountsForOrganizationOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        affected_accounts: std::option::Option<std::vec::Vec<std::string::String>>,
        event_scope_code: std::option::Option<crate::model::EventScopeCode>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn affected_accounts(mut self, inp: impl Into<std::string::String>) -> Self {
            let mut v = self.affected_accounts.unwrap_or_default();
            v.push(inp.into());
            self.affected_accounts = Some(v);
            self
        }
        pub fn set_affected_accounts(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.affected_accounts = inp;
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
        pub fn next_token(mut self, inp: impl Into<std::string::String>) -> Self {
            self.next_token = Some(inp.into());
            self
        }
        pub fn set_next_token(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.next_token = inp;
            self
        }
        /// Consumes the builder and constructs a [`DescribeAffectedAccountsForOrganizationOutput`](crate::output::DescribeAffectedAccountsForOrganizationOutput)
        pub fn build(self) -> crate::output::DescribeAffectedAccountsForOrganizationOutput {
            crate::output::DescribeAffectedAccountsForOrganizationOutput {
                affected_accounts: self.affected_accounts,
                event_scope_code: self.event_scope_code,
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
pub struct DescribeAffectedEntitiesOutput {
    #[serde(rename = "entities")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entities: std::option::Option<std::vec::Vec<crate::model::AffectedEntity>>,
    #[serde(rename = "nextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}
impl DescribeAffectedEntitiesOutput {
    /// Creates a new builder-style object to manufacture [`DescribeAffectedEntitiesOutput`](crate::output::DescribeAffectedEntitiesOutput)
    pub fn builder() -> crate::output::describe_affected_entities_output::Builder {
        crate::output::describe_affected_entities_output::Builder::default()
    }
}
/// See [`DescribeAffectedEntitiesOutput`](crate::output::DescribeAffectedEntitiesOutput)
pub mod describe_affected_entities_output {
    /// A builder for [`DescribeAffectedEntitiesOutput`](crate::output::DescribeAffectedEntitiesOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        entities: std::option::Option<std::vec::Vec<crate::model::AffectedEntity>>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn entities(mut self, inp: impl Into<crate::model::AffectedEntity>) -> Self {
            let mut v = self.entities.unwrap_or_default();
            v.push(inp.into());
            self.entities = Some(v);
            self
        }
        pub fn set_entities(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::AffectedEntity>>,
        ) -> Self {
            self.entities = inp;
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
        /// Consumes the builder and constructs a [`DescribeAffectedEntitiesOutput`](crate::output::DescribeAffectedEntitiesOutput)
        pub fn build(self) -> crate::output::DescribeAffectedEntitiesOutput {
            crate::output::DescribeAffectedEntitiesOutput {
                entities: self.entities,
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
pub struct DescribeAffectedEntitiesForOrganizationOutput {
    #[serde(rename = "entities")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entities: std::option::Option<std::vec::Vec<crate::model::AffectedEntity>>,
    #[serde(rename = "failedSet")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub failed_set:
        std::option::Option<std::vec::Vec<crate::model::OrganizationAffectedEntitiesErrorItem>>,
    #[serde(rename = "nextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}
impl DescribeAffectedEntitiesForOrganizationOutput {
    /// Creates a new builder-style object to manufacture [`DescribeAffectedEntitiesForOrganizationOutput`](crate::output::DescribeAffectedEntitiesForOrganizationOutput)
    pub fn builder() -> crate::output::describe_affected_entities_for_organization_output::Builder {
        crate::output::describe_affected_entities_for_organization_output::Builder::default()
    }
}
/// See [`DescribeAffectedEntitiesForOrganizationOutput`](crate::output::DescribeAffectedEntitiesForOrganizationOutput)
pub mod describe_affected_entities_for_organization_output {
    /// A builder for [`DescribeAffectedEntitiesForOrganizationOutput`](crate::output::DescribeAffectedEntitiesForOrganizationOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        entities: std::option::Option<std::vec::Vec<crate::model::AffectedEntity>>,
        failed_set:
            std::option::Option<std::vec::Vec<crate::model::OrganizationAffectedEntitiesErrorItem>>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn entities(mut self, inp: impl Into<crate::model::AffectedEntity>) -> Self {
            let mut v = self.entities.unwrap_or_default();
            v.push(inp.into());
            self.entities = Some(v);
            self
        }
        pub fn set_entities(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::AffectedEntity>>,
        ) -> Self {
            self.entities = inp;
            self
        }
        pub fn failed_set(
            mut self,
            inp: impl Into<crate::model::OrganizationAffectedEntitiesErrorItem>,
        ) -> Self {
            let mut v = self.failed_set.unwrap_or_default();
            v.push(inp.into());
            self.failed_set = Some(v);
            self
        }
        pub fn set_failed_set(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::OrganizationAffectedEntitiesErrorItem>>,
        ) -> Self {
            self.failed_set = inp;
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
        /// Consumes the builder and constructs a [`DescribeAffectedEntitiesForOrganizationOutput`](crate::output::DescribeAffectedEntitiesForOrganizationOutput)
        pub fn build(self) -> crate::output::DescribeAffectedEntitiesForOrganizationOutput {
            crate::output::DescribeAffectedEntitiesForOrganizationOutput {
                entities: self.entities,
                failed_set: self.failed_set,
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
pub struct DescribeEntityAggregatesOutput {
    #[serde(rename = "entityAggregates")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entity_aggregates: std::option::Option<std::vec::Vec<crate::model::EntityAggregate>>,
}
impl DescribeEntityAggregatesOutput {
    /// Creates a new builder-style object to manufacture [`DescribeEntityAggregatesOutput`](crate::output::DescribeEntityAggregatesOutput)
    pub fn builder() -> crate::output::describe_entity_aggregates_output::Builder {
        crate::output::describe_entity_aggregates_output::Builder::default()
    }
}
/// See [`DescribeEntityAggregatesOutput`](crate::output::DescribeEntityAggregatesOutput)
pub mod describe_entity_aggregates_output {
    /// A builder for [`DescribeEntityAggregatesOutput`](crate::output::DescribeEntityAggregatesOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        entity_aggregates: std::option::Option<std::vec::Vec<crate::model::EntityAggregate>>,
    }
    impl Builder {
        pub fn entity_aggregates(mut self, inp: impl Into<crate::model::EntityAggregate>) -> Self {
            let mut v = self.entity_aggregates.unwrap_or_default();
            v.push(inp.into());
            self.entity_aggregates = Some(v);
            self
        }
        pub fn set_entity_aggregates(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::EntityAggregate>>,
        ) -> Self {
            self.entity_aggregates = inp;
            self
        }
        /// Consumes the builder and constructs a [`DescribeEntityAggregatesOutput`](crate::output::DescribeEntityAggregatesOutput)
        pub fn build(self) -> crate::output::DescribeEntityAggregatesOutput {
            crate::output::DescribeEntityAggregatesOutput {
                entity_aggregates: self.entity_aggregates,
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
pub struct DescribeEventAggregatesOutput {
    #[serde(rename = "eventAggregates")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub event_aggregates: std::option::Option<std::vec::Vec<crate::model::EventAggregate>>,
    #[serde(rename = "nextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}
impl DescribeEventAggregatesOutput {
    /// Creates a new builder-style object to manufacture [`DescribeEventAggregatesOutput`](crate::output::DescribeEventAggregatesOutput)
    pub fn builder() -> crate::output::describe_event_aggregates_output::Builder {
        crate::output::describe_event_aggregates_output::Builder::default()
    }
}
/// See [`DescribeEventAggregatesOutput`](crate::output::DescribeEventAggregatesOutput)
pub mod describe_event_aggregates_output {
    /// A builder for [`DescribeEventAggregatesOutput`](crate::output::DescribeEventAggregatesOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        event_aggregates: std::option::Option<std::vec::Vec<crate::model::EventAggregate>>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn event_aggregates(mut self, inp: impl Into<crate::model::EventAggregate>) -> Self {
            let mut v = self.event_aggregates.unwrap_or_default();
            v.push(inp.into());
            self.event_aggregates = Some(v);
            self
        }
        pub fn set_event_aggregates(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::EventAggregate>>,
        ) -> Self {
            self.event_aggregates = inp;
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
        /// Consumes the builder and constructs a [`DescribeEventAggregatesOutput`](crate::output::DescribeEventAggregatesOutput)
        pub fn build(self) -> crate::output::DescribeEventAggregatesOutput {
            crate::output::DescribeEventAggregatesOutput {
                event_aggregates: self.event_aggregates,
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
pub struct DescribeEventDetailsOutput {
    #[serde(rename = "successfulSet")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub successful_set: std::option::Option<std::vec::Vec<crate::model::EventDetails>>,
    #[serde(rename = "failedSet")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub failed_set: std::option::Option<std::vec::Vec<crate::model::EventDetailsErrorItem>>,
}
impl DescribeEventDetailsOutput {
    /// Creates a new builder-style object to manufacture [`DescribeEventDetailsOutput`](crate::output::DescribeEventDetailsOutput)
    pub fn builder() -> crate::output::describe_event_details_output::Builder {
        crate::output::describe_event_details_output::Builder::default()
    }
}
/// See [`DescribeEventDetailsOutput`](crate::output::DescribeEventDetailsOutput)
pub mod describe_event_details_output {
    /// A builder for [`DescribeEventDetailsOutput`](crate::output::DescribeEventDetailsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        successful_set: std::option::Option<std::vec::Vec<crate::model::EventDetails>>,
        failed_set: std::option::Option<std::vec::Vec<crate::model::EventDetailsErrorItem>>,
    }
    impl Builder {
        pub fn successful_set(mut self, inp: impl Into<crate::model::EventDetails>) -> Self {
            let mut v = self.successful_set.unwrap_or_default();
            v.push(inp.into());
            self.successful_set = Some(v);
            self
        }
        pub fn set_successful_set(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::EventDetails>>,
        ) -> Self {
            self.successful_set = inp;
            self
        }
        pub fn failed_set(mut self, inp: impl Into<crate::model::EventDetailsErrorItem>) -> Self {
            let mut v = self.failed_set.unwrap_or_default();
            v.push(inp.into());
            self.failed_set = Some(v);
            self
        }
        pub fn set_failed_set(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::EventDetailsErrorItem>>,
        ) -> Self {
            self.failed_set = inp;
            self
        }
        /// Consumes the builder and constructs a [`DescribeEventDetailsOutput`](crate::output::DescribeEventDetailsOutput)
        pub fn build(self) -> crate::output::DescribeEventDetailsOutput {
            crate::output::DescribeEventDetailsOutput {
                successful_set: self.successful_set,
                failed_set: self.failed_set,
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
pub struct DescribeEventDetailsForOrganizationOutput {
    #[serde(rename = "successfulSet")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub successful_set: std::option::Option<std::vec::Vec<crate::model::OrganizationEventDetails>>,
    #[serde(rename = "failedSet")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub failed_set:
        std::option::Option<std::vec::Vec<crate::model::OrganizationEventDetailsErrorItem>>,
}
impl DescribeEventDetailsForOrganizationOutput {
    /// Creates a new builder-style object to manufacture [`DescribeEventDetailsForOrganizationOutput`](crate::output::DescribeEventDetailsForOrganizationOutput)
    pub fn builder() -> crate::output::describe_event_details_for_organization_output::Builder {
        crate::output::describe_event_details_for_organization_output::Builder::default()
    }
}
/// See [`DescribeEventDetailsForOrganizationOutput`](crate::output::DescribeEventDetailsForOrganizationOutput)
pub mod describe_event_details_for_organization_output {
    /// A builder for [`DescribeEventDetailsForOrganizationOutput`](crate::output::DescribeEventDetailsForOrganizationOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        successful_set: std::option::Option<std::vec::Vec<crate::model::OrganizationEventDetails>>,
        failed_set:
            std::option::Option<std::vec::Vec<crate::model::OrganizationEventDetailsErrorItem>>,
    }
    impl Builder {
        pub fn successful_set(
            mut self,
            inp: impl Into<crate::model::OrganizationEventDetails>,
        ) -> Self {
            let mut v = self.successful_set.unwrap_or_default();
            v.push(inp.into());
            self.successful_set = Some(v);
            self
        }
        pub fn set_successful_set(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::OrganizationEventDetails>>,
        ) -> Self {
            self.successful_set = inp;
            self
        }
        pub fn failed_set(
            mut self,
            inp: impl Into<crate::model::OrganizationEventDetailsErrorItem>,
        ) -> Self {
            let mut v = self.failed_set.unwrap_or_default();
            v.push(inp.into());
            self.failed_set = Some(v);
            self
        }
        pub fn set_failed_set(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::OrganizationEventDetailsErrorItem>>,
        ) -> Self {
            self.failed_set = inp;
            self
        }
        /// Consumes the builder and constructs a [`DescribeEventDetailsForOrganizationOutput`](crate::output::DescribeEventDetailsForOrganizationOutput)
        pub fn build(self) -> crate::output::DescribeEventDetailsForOrganizationOutput {
            crate::output::DescribeEventDetailsForOrganizationOutput {
                successful_set: self.successful_set,
                failed_set: self.failed_set,
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
pub struct DescribeEventTypesOutput {
    #[serde(rename = "eventTypes")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub event_types: std::option::Option<std::vec::Vec<crate::model::EventType>>,
    #[serde(rename = "nextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}
impl DescribeEventTypesOutput {
    /// Creates a new builder-style object to manufacture [`DescribeEventTypesOutput`](crate::output::DescribeEventTypesOutput)
    pub fn builder() -> crate::output::describe_event_types_output::Builder {
        crate::output::describe_event_types_output::Builder::default()
    }
}
/// See [`DescribeEventTypesOutput`](crate::output::DescribeEventTypesOutput)
pub mod describe_event_types_output {
    /// A builder for [`DescribeEventTypesOutput`](crate::output::DescribeEventTypesOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        event_types: std::option::Option<std::vec::Vec<crate::model::EventType>>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn event_types(mut self, inp: impl Into<crate::model::EventType>) -> Self {
            let mut v = self.event_types.unwrap_or_default();
            v.push(inp.into());
            self.event_types = Some(v);
            self
        }
        pub fn set_event_types(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::EventType>>,
        ) -> Self {
            self.event_types = inp;
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
        /// Consumes the builder and constructs a [`DescribeEventTypesOutput`](crate::output::DescribeEventTypesOutput)
        pub fn build(self) -> crate::output::DescribeEventTypesOutput {
            crate::output::DescribeEventTypesOutput {
                event_types: self.event_types,
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
pub struct DescribeEventsOutput {
    #[serde(rename = "events")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub events: std::option::Option<std::vec::Vec<crate::model::Event>>,
    #[serde(rename = "nextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}
impl DescribeEventsOutput {
    /// Creates a new builder-style object to manufacture [`DescribeEventsOutput`](crate::output::DescribeEventsOutput)
    pub fn builder() -> crate::output::describe_events_output::Builder {
        crate::output::describe_events_output::Builder::default()
    }
}
/// See [`DescribeEventsOutput`](crate::output::DescribeEventsOutput)
pub mod describe_events_output {
    /// A builder for [`DescribeEventsOutput`](crate::output::DescribeEventsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        events: std::option::Option<std::vec::Vec<crate::model::Event>>,
        next_token: std::option::Option<std::string::String>,
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
        pub fn next_token(mut self, inp: impl Into<std::string::String>) -> Self {
            self.next_token = Some(inp.into());
            self
        }
        pub fn set_next_token(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.next_token = inp;
            self
        }
        /// Consumes the builder and constructs a [`DescribeEventsOutput`](crate::output::DescribeEventsOutput)
        pub fn build(self) -> crate::output::DescribeEventsOutput {
            crate::output::DescribeEventsOutput {
                events: self.events,
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
pub struct DescribeEventsForOrganizationOutput {
    #[serde(rename = "events")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub events: std::option::Option<std::vec::Vec<crate::model::OrganizationEvent>>,
    #[serde(rename = "nextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}
impl DescribeEventsForOrganizationOutput {
    /// Creates a new builder-style object to manufacture [`DescribeEventsForOrganizationOutput`](crate::output::DescribeEventsForOrganizationOutput)
    pub fn builder() -> crate::output::describe_events_for_organization_output::Builder {
        crate::output::describe_events_for_organization_output::Builder::default()
    }
}
/// See [`DescribeEventsForOrganizationOutput`](crate::output::DescribeEventsForOrganizationOutput)
pub mod describe_events_for_organization_output {
    /// A builder for [`DescribeEventsForOrganizationOutput`](crate::output::DescribeEventsForOrganizationOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        events: std::option::Option<std::vec::Vec<crate::model::OrganizationEvent>>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn events(mut self, inp: impl Into<crate::model::OrganizationEvent>) -> Self {
            let mut v = self.events.unwrap_or_default();
            v.push(inp.into());
            self.events = Some(v);
            self
        }
        pub fn set_events(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::OrganizationEvent>>,
        ) -> Self {
            self.events = inp;
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
        /// Consumes the builder and constructs a [`DescribeEventsForOrganizationOutput`](crate::output::DescribeEventsForOrganizationOutput)
        pub fn build(self) -> crate::output::DescribeEventsForOrganizationOutput {
            crate::output::DescribeEventsForOrganizationOutput {
                events: self.events,
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
pub struct DescribeHealthServiceStatusForOrganizationOutput {
    #[serde(rename = "healthServiceAccessStatusForOrganization")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub health_service_access_status_for_organization: std::option::Option<std::string::String>,
}
impl DescribeHealthServiceStatusForOrganizationOutput {
    /// Creates a new builder-style object to manufacture [`DescribeHealthServiceStatusForOrganizationOutput`](crate::output::DescribeHealthServiceStatusForOrganizationOutput)
    pub fn builder(
    ) -> crate::output::describe_health_service_status_for_organization_output::Builder {
        crate::output::describe_health_service_status_for_organization_output::Builder::default()
    }
}
/// See [`DescribeHealthServiceStatusForOrganizationOutput`](crate::output::DescribeHealthServiceStatusForOrganizationOutput)
pub mod describe_health_service_status_for_organization_output {
    /// A builder for [`DescribeHealthServiceStatusForOrganizationOutput`](crate::output::DescribeHealthServiceStatusForOrganizationOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        health_service_access_status_for_organization: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn health_service_access_status_for_organization(
            mut self,
            inp: impl Into<std::string::String>,
        ) -> Self {
            self.health_service_access_status_for_organization = Some(inp.into());
            self
        }
        pub fn set_health_service_access_status_for_organization(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.health_service_access_status_for_organization = inp;
            self
        }
        /// Consumes the builder and constructs a [`DescribeHealthServiceStatusForOrganizationOutput`](crate::output::DescribeHealthServiceStatusForOrganizationOutput)
        pub fn build(self) -> crate::output::DescribeHealthServiceStatusForOrganizationOutput {
            crate::output::DescribeHealthServiceStatusForOrganizationOutput {
                health_service_access_status_for_organization:
                    self.health_service_access_status_for_organization,
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
pub struct DisableHealthServiceAccessForOrganizationOutput {
}
impl DisableHealthServiceAccessForOrganizationOutput {
    /// Creates a new builder-style object to manufacture [`DisableHealthServiceAccessForOrganizationOutput`](crate::output::DisableHealthServiceAccessForOrganizationOutput)
    pub fn builder(
    ) -> crate::output::disable_health_service_access_for_organization_output::Builder {
        crate::output::disable_health_service_access_for_organization_output::Builder::default()
    }
}
/// See [`DisableHealthServiceAccessForOrganizationOutput`](crate::output::DisableHealthServiceAccessForOrganizationOutput)
pub mod disable_health_service_access_for_organization_output {
    /// A builder for [`DisableHealthServiceAccessForOrganizationOutput`](crate::output::DisableHealthServiceAccessForOrganizationOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
    }
    impl Builder {
        /// Consumes the builder and constructs a [`DisableHealthServiceAccessForOrganizationOutput`](crate::output::DisableHealthServiceAccessForOrganizationOutput)
        pub fn build(self) -> crate::output::DisableHealthServiceAccessForOrganizationOutput {
            crate::output::DisableHealthServiceAccessForOrganizationOutput {
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
pub struct EnableHealthServiceAccessForOrganizationOutput {
}
impl EnableHealthServiceAccessForOrganizationOutput {
    /// Creates a new builder-style object to manufacture [`EnableHealthServiceAccessForOrganizationOutput`](crate::output::EnableHealthServiceAccessForOrganizationOutput)
    pub fn builder(
    ) -> crate::output::enable_health_service_access_for_organization_output::Builder {
        crate::output::enable_health_service_access_for_organization_output::Builder::default()
    }
}
/// See [`EnableHealthServiceAccessForOrganizationOutput`](crate::output::EnableHealthServiceAccessForOrganizationOutput)
pub mod enable_health_service_access_for_organization_output {
    /// A builder for [`EnableHealthServiceAccessForOrganizationOutput`](crate::output::EnableHealthServiceAccessForOrganizationOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
    }
    impl Builder {
        /// Consumes the builder and constructs a [`EnableHealthServiceAccessForOrganizationOutput`](crate::output::EnableHealthServiceAccessForOrganizationOutput)
        pub fn build(self) -> crate::output::EnableHealthServiceAccessForOrganizationOutput {
            crate::output::EnableHealthServiceAccessForOrganizationOutput {
            }
        }
    }
}
