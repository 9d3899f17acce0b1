/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#[derive(std::fmt::Debug)]
pub(crate) struct Handle {
    client: aws_hyper::Client<aws_hyper::conn::Standard>,
    conf: crate::Config,
}

/// Client for AWS Health APIs and Notifications
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

    /// Returns a list of accounts in the organization that are affected by the provided event
    pub fn describe_affected_accounts_for_organization(
        &self,
    ) -> fluent_builders::DescribeAffectedAccountsForOrganization {
        fluent_builders::DescribeAffectedAccountsForOrganization::new(self.handle.clone())
    }

    /// Returns a list of entities that have been affected by the specified events
    pub fn describe_affected_entities(&self) -> fluent_builders::DescribeAffectedEntities {
        fluent_builders::DescribeAffectedEntities::new(self.handle.clone())
    }

    /// Returns a list of entities that have been affected by one or more events for one or more accounts in your organization
    pub fn describe_affected_entities_for_organization(
        &self,
    ) -> fluent_builders::DescribeAffectedEntitiesForOrganization {
        fluent_builders::DescribeAffectedEntitiesForOrganization::new(self.handle.clone())
    }

    /// Returns the number of entities that are affected by each of the specified events
    pub fn describe_entity_aggregates(&self) -> fluent_builders::DescribeEntityAggregates {
        fluent_builders::DescribeEntityAggregates::new(self.handle.clone())
    }

    /// Returns the number of events of each event type (issue, scheduled change, and account notification)
    pub fn describe_event_aggregates(&self) -> fluent_builders::DescribeEventAggregates {
        fluent_builders::DescribeEventAggregates::new(self.handle.clone())
    }

    /// Returns detailed information about one or more specified events
    pub fn describe_event_details(&self) -> fluent_builders::DescribeEventDetails {
        fluent_builders::DescribeEventDetails::new(self.handle.clone())
    }

    /// Returns detailed information about one or more specified events for one or more accounts in your organization
    pub fn describe_event_details_for_organization(
        &self,
    ) -> fluent_builders::DescribeEventDetailsForOrganization {
        fluent_builders::DescribeEventDetailsForOrganization::new(self.handle.clone())
    }

    /// Returns the event types that meet the specified filter criteria
    pub fn describe_event_types(&self) -> fluent_builders::DescribeEventTypes {
        fluent_builders::DescribeEventTypes::new(self.handle.clone())
    }

    /// Returns information about events that meet the specified filter criteria
    pub fn describe_events(&self) -> fluent_builders::DescribeEvents {
        fluent_builders::DescribeEvents::new(self.handle.clone())
    }

    /// Returns information about events across your organization in AWS Organizations
    pub fn describe_events_for_organization(
        &self,
    ) -> fluent_builders::DescribeEventsForOrganization {
        fluent_builders::DescribeEventsForOrganization::new(self.handle.clone())
    }

    /// This operation provides status information on enabling or disabling AWS Health to work with your organization
    pub fn describe_health_service_status_for_organization(
        &self,
    ) -> fluent_builders::DescribeHealthServiceStatusForOrganization {
        fluent_builders::DescribeHealthServiceStatusForOrganization::new(self.handle.clone())
    }

    /// Disables AWS Health from working with AWS Organizations
    pub fn disable_health_service_access_for_organization(
        &self,
    ) -> fluent_builders::DisableHealthServiceAccessForOrganization {
        fluent_builders::DisableHealthServiceAccessForOrganization::new(self.handle.clone())
    }

    /// Calling this operation enables AWS Health to work with AWS Organizations
    pub fn enable_health_service_access_for_organization(
        &self,
    ) -> fluent_builders::EnableHealthServiceAccessForOrganization {
        fluent_builders::EnableHealthServiceAccessForOrganization::new(self.handle.clone())
    }
}

pub mod fluent_builders {
    #[derive(std::fmt::Debug)]
    pub struct DescribeAffectedAccountsForOrganization {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_affected_accounts_for_organization_input::Builder,
    }
    impl DescribeAffectedAccountsForOrganization {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(
            self) -> (super::Client, crate::input::describe_affected_accounts_for_organization_input::Builder,
        ) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeAffectedAccountsForOrganizationOutput,
            aws_hyper::SdkError<crate::error::DescribeAffectedAccountsForOrganizationError>,
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
        pub fn event_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.event_arn(inp);
            self
        }
        pub fn set_event_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_event_arn(inp);
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
        pub fn max_results(mut self, inp: i32) -> Self {
            self.inner = self.inner.max_results(inp);
            self
        }
        pub fn set_max_results(mut self, inp: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct DescribeAffectedEntities {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_affected_entities_input::Builder,
    }
    impl DescribeAffectedEntities {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(
            self) -> (super::Client, crate::input::describe_affected_entities_input::Builder,
        ) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeAffectedEntitiesOutput,
            aws_hyper::SdkError<crate::error::DescribeAffectedEntitiesError>,
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
        pub fn filter(mut self, inp: crate::model::EntityFilter) -> Self {
            self.inner = self.inner.filter(inp);
            self
        }
        pub fn set_filter(mut self, inp: std::option::Option<crate::model::EntityFilter>) -> Self {
            self.inner = self.inner.set_filter(inp);
            self
        }
        pub fn locale(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.locale(inp);
            self
        }
        pub fn set_locale(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_locale(inp);
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
        pub fn max_results(mut self, inp: i32) -> Self {
            self.inner = self.inner.max_results(inp);
            self
        }
        pub fn set_max_results(mut self, inp: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct DescribeAffectedEntitiesForOrganization {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_affected_entities_for_organization_input::Builder,
    }
    impl DescribeAffectedEntitiesForOrganization {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(
            self) -> (super::Client, crate::input::describe_affected_entities_for_organization_input::Builder,
        ) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeAffectedEntitiesForOrganizationOutput,
            aws_hyper::SdkError<crate::error::DescribeAffectedEntitiesForOrganizationError>,
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
        pub fn organization_entity_filters(
            mut self,
            inp: impl Into<crate::model::EventAccountFilter>,
        ) -> Self {
            self.inner = self.inner.organization_entity_filters(inp);
            self
        }
        pub fn set_organization_entity_filters(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::EventAccountFilter>>,
        ) -> Self {
            self.inner = self.inner.set_organization_entity_filters(inp);
            self
        }
        pub fn locale(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.locale(inp);
            self
        }
        pub fn set_locale(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_locale(inp);
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
        pub fn max_results(mut self, inp: i32) -> Self {
            self.inner = self.inner.max_results(inp);
            self
        }
        pub fn set_max_results(mut self, inp: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct DescribeEntityAggregates {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_entity_aggregates_input::Builder,
    }
    impl DescribeEntityAggregates {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(
            self) -> (super::Client, crate::input::describe_entity_aggregates_input::Builder,
        ) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeEntityAggregatesOutput,
            aws_hyper::SdkError<crate::error::DescribeEntityAggregatesError>,
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
        pub fn event_arns(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.event_arns(inp);
            self
        }
        pub fn set_event_arns(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.inner = self.inner.set_event_arns(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct DescribeEventAggregates {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_event_aggregates_input::Builder,
    }
    impl DescribeEventAggregates {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(
            self) -> (super::Client, crate::input::describe_event_aggregates_input::Builder,
        ) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeEventAggregatesOutput,
            aws_hyper::SdkError<crate::error::DescribeEventAggregatesError>,
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
        pub fn filter(mut self, inp: crate::model::EventFilter) -> Self {
            self.inner = self.inner.filter(inp);
            self
        }
        pub fn set_filter(mut self, inp: std::option::Option<crate::model::EventFilter>) -> Self {
            self.inner = self.inner.set_filter(inp);
            self
        }
        pub fn aggregate_field(mut self, inp: crate::model::EventAggregateField) -> Self {
            self.inner = self.inner.aggregate_field(inp);
            self
        }
        pub fn set_aggregate_field(
            mut self,
            inp: std::option::Option<crate::model::EventAggregateField>,
        ) -> Self {
            self.inner = self.inner.set_aggregate_field(inp);
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
    pub struct DescribeEventDetails {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_event_details_input::Builder,
    }
    impl DescribeEventDetails {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(
            self) -> (super::Client, crate::input::describe_event_details_input::Builder,
        ) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeEventDetailsOutput,
            aws_hyper::SdkError<crate::error::DescribeEventDetailsError>,
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
        pub fn event_arns(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.event_arns(inp);
            self
        }
        pub fn set_event_arns(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.inner = self.inner.set_event_arns(inp);
            self
        }
        pub fn locale(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.locale(inp);
            self
        }
        pub fn set_locale(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_locale(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct DescribeEventDetailsForOrganization {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_event_details_for_organization_input::Builder,
    }
    impl DescribeEventDetailsForOrganization {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(
            self) -> (super::Client, crate::input::describe_event_details_for_organization_input::Builder,
        ) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeEventDetailsForOrganizationOutput,
            aws_hyper::SdkError<crate::error::DescribeEventDetailsForOrganizationError>,
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
        pub fn organization_event_detail_filters(
            mut self,
            inp: impl Into<crate::model::EventAccountFilter>,
        ) -> Self {
            self.inner = self.inner.organization_event_detail_filters(inp);
            self
        }
        pub fn set_organization_event_detail_filters(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::EventAccountFilter>>,
        ) -> Self {
            self.inner = self.inner.set_organization_event_detail_filters(inp);
            self
        }
        pub fn locale(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.locale(inp);
            self
        }
        pub fn set_locale(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_locale(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct DescribeEventTypes {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_event_types_input::Builder,
    }
    impl DescribeEventTypes {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(
            self) -> (super::Client, crate::input::describe_event_types_input::Builder,
        ) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeEventTypesOutput,
            aws_hyper::SdkError<crate::error::DescribeEventTypesError>,
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
        pub fn filter(mut self, inp: crate::model::EventTypeFilter) -> Self {
            self.inner = self.inner.filter(inp);
            self
        }
        pub fn set_filter(
            mut self,
            inp: std::option::Option<crate::model::EventTypeFilter>,
        ) -> Self {
            self.inner = self.inner.set_filter(inp);
            self
        }
        pub fn locale(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.locale(inp);
            self
        }
        pub fn set_locale(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_locale(inp);
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
        pub fn max_results(mut self, inp: i32) -> Self {
            self.inner = self.inner.max_results(inp);
            self
        }
        pub fn set_max_results(mut self, inp: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct DescribeEvents {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_events_input::Builder,
    }
    impl DescribeEvents {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> (super::Client, crate::input::describe_events_input::Builder) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeEventsOutput,
            aws_hyper::SdkError<crate::error::DescribeEventsError>,
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
        pub fn filter(mut self, inp: crate::model::EventFilter) -> Self {
            self.inner = self.inner.filter(inp);
            self
        }
        pub fn set_filter(mut self, inp: std::option::Option<crate::model::EventFilter>) -> Self {
            self.inner = self.inner.set_filter(inp);
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
        pub fn max_results(mut self, inp: i32) -> Self {
            self.inner = self.inner.max_results(inp);
            self
        }
        pub fn set_max_results(mut self, inp: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(inp);
            self
        }
        pub fn locale(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.locale(inp);
            self
        }
        pub fn set_locale(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_locale(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct DescribeEventsForOrganization {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_events_for_organization_input::Builder,
    }
    impl DescribeEventsForOrganization {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(
            self) -> (super::Client, crate::input::describe_events_for_organization_input::Builder,
        ) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeEventsForOrganizationOutput,
            aws_hyper::SdkError<crate::error::DescribeEventsForOrganizationError>,
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
        pub fn filter(mut self, inp: crate::model::OrganizationEventFilter) -> Self {
            self.inner = self.inner.filter(inp);
            self
        }
        pub fn set_filter(
            mut self,
            inp: std::option::Option<crate::model::OrganizationEventFilter>,
        ) -> Self {
            self.inner = self.inner.set_filter(inp);
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
        pub fn max_results(mut self, inp: i32) -> Self {
            self.inner = self.inner.max_results(inp);
            self
        }
        pub fn set_max_results(mut self, inp: std::option::Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(inp);
            self
        }
        pub fn locale(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.locale(inp);
            self
        }
        pub fn set_locale(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_locale(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct DescribeHealthServiceStatusForOrganization {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_health_service_status_for_organization_input::Builder,
    }
    impl DescribeHealthServiceStatusForOrganization {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(
            self) -> (super::Client, crate::input::describe_health_service_status_for_organization_input::Builder,
        ) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeHealthServiceStatusForOrganizationOutput,
            aws_hyper::SdkError<crate::error::DescribeHealthServiceStatusForOrganizationError>,
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
    pub struct DisableHealthServiceAccessForOrganization {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::disable_health_service_access_for_organization_input::Builder,
    }
    impl DisableHealthServiceAccessForOrganization {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(
            self) -> (super::Client, crate::input::disable_health_service_access_for_organization_input::Builder,
        ) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DisableHealthServiceAccessForOrganizationOutput,
            aws_hyper::SdkError<crate::error::DisableHealthServiceAccessForOrganizationError>,
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
    pub struct EnableHealthServiceAccessForOrganization {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::enable_health_service_access_for_organization_input::Builder,
    }
    impl EnableHealthServiceAccessForOrganization {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(
            self) -> (super::Client, crate::input::enable_health_service_access_for_organization_input::Builder,
        ) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::EnableHealthServiceAccessForOrganizationOutput,
            aws_hyper::SdkError<crate::error::EnableHealthServiceAccessForOrganizationError>,
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
}
