/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// See [`DescribeAffectedAccountsForOrganizationInput`](crate::input::DescribeAffectedAccountsForOrganizationInput)
pub mod describe_affected_accounts_for_organization_input {
    /// A builder for [`DescribeAffectedAccountsForOrganizationInput`](crate::input::DescribeAffectedAccountsForOrganizationInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        event_arn: std::option::Option<std::string::String>,
        next_token: std::option::Option<std::string::String>,
        max_results: std::option::Option<i32>,
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
        pub fn next_token(mut self, inp: impl Into<std::string::String>) -> Self {
            self.next_token = Some(inp.into());
            self
        }
        pub fn set_next_token(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.next_token = inp;
            self
        }
        pub fn max_results(mut self, inp: i32) -> Self {
            self.max_results = Some(inp);
            self
        }
        pub fn set_max_results(mut self, inp: std::option::Option<i32>) -> Self {
            self.max_results = inp;
            self
        }
        /// Consumes the builder and constructs a [`DescribeAffectedAccountsForOrganizationInput`](crate::input::DescribeAffectedAccountsForOrganizationInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeAffectedAccountsForOrganizationInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DescribeAffectedAccountsForOrganizationInput {
                event_arn: self.event_arn,
                next_token: self.next_token,
                max_results: self.max_results,
            })
        }
    }
}

impl DescribeAffectedAccountsForOrganizationInput {
    /// Consumes the builder and constructs an Operation<[`DescribeAffectedAccountsForOrganization`](crate::operation::DescribeAffectedAccountsForOrganization)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DescribeAffectedAccountsForOrganization, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let body = smithy_json::to_body(&input)
            .map_err(|err| smithy_http::operation::BuildError::SerializationError(err.into()))?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.1")
            .header("x-amz-target", "AWSHealth_20160804.DescribeAffectedAccountsForOrganization")
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        let mut request = smithy_http::operation::Request::new(request);
        {
            let mut props = request.properties_mut();
            props.insert(aws_http::user_agent::AwsUserAgent::new_from_environment(
                aws_types::os_shim_internal::Env::real(),
                crate::API_METADATA.clone(),
            ));
            props.insert(aws_sig_auth::signer::OperationSigningConfig::default_config());
            props.insert(aws_types::SigningService::from_static("health"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::DescribeAffectedAccountsForOrganization::new())
            .with_metadata(smithy_http::operation::Metadata::new("DescribeAffectedAccountsForOrganization", "health"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`DescribeAffectedAccountsForOrganizationInput`](crate::input::DescribeAffectedAccountsForOrganizationInput)
    pub fn builder() -> crate::input::describe_affected_accounts_for_organization_input::Builder {
        crate::input::describe_affected_accounts_for_organization_input::Builder::default()
    }
}

/// See [`DescribeAffectedEntitiesInput`](crate::input::DescribeAffectedEntitiesInput)
pub mod describe_affected_entities_input {
    /// A builder for [`DescribeAffectedEntitiesInput`](crate::input::DescribeAffectedEntitiesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        filter: std::option::Option<crate::model::EntityFilter>,
        locale: std::option::Option<std::string::String>,
        next_token: std::option::Option<std::string::String>,
        max_results: std::option::Option<i32>,
    }
    impl Builder {
        pub fn filter(mut self, inp: crate::model::EntityFilter) -> Self {
            self.filter = Some(inp);
            self
        }
        pub fn set_filter(mut self, inp: std::option::Option<crate::model::EntityFilter>) -> Self {
            self.filter = inp;
            self
        }
        pub fn locale(mut self, inp: impl Into<std::string::String>) -> Self {
            self.locale = Some(inp.into());
            self
        }
        pub fn set_locale(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.locale = inp;
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
        pub fn max_results(mut self, inp: i32) -> Self {
            self.max_results = Some(inp);
            self
        }
        pub fn set_max_results(mut self, inp: std::option::Option<i32>) -> Self {
            self.max_results = inp;
            self
        }
        /// Consumes the builder and constructs a [`DescribeAffectedEntitiesInput`](crate::input::DescribeAffectedEntitiesInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeAffectedEntitiesInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DescribeAffectedEntitiesInput {
                filter: self.filter,
                locale: self.locale,
                next_token: self.next_token,
                max_results: self.max_results,
            })
        }
    }
}

impl DescribeAffectedEntitiesInput {
    /// Consumes the builder and constructs an Operation<[`DescribeAffectedEntities`](crate::operation::DescribeAffectedEntities)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DescribeAffectedEntities, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let body = smithy_json::to_body(&input)
            .map_err(|err| smithy_http::operation::BuildError::SerializationError(err.into()))?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.1")
            .header("x-amz-target", "AWSHealth_20160804.DescribeAffectedEntities")
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        let mut request = smithy_http::operation::Request::new(request);
        {
            let mut props = request.properties_mut();
            props.insert(aws_http::user_agent::AwsUserAgent::new_from_environment(
                aws_types::os_shim_internal::Env::real(),
                crate::API_METADATA.clone(),
            ));
            props.insert(aws_sig_auth::signer::OperationSigningConfig::default_config());
            props.insert(aws_types::SigningService::from_static("health"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::DescribeAffectedEntities::new())
            .with_metadata(smithy_http::operation::Metadata::new("DescribeAffectedEntities", "health"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`DescribeAffectedEntitiesInput`](crate::input::DescribeAffectedEntitiesInput)
    pub fn builder() -> crate::input::describe_affected_entities_input::Builder {
        crate::input::describe_affected_entities_input::Builder::default()
    }
}

/// See [`DescribeAffectedEntitiesForOrganizationInput`](crate::input::DescribeAffectedEntitiesForOrganizationInput)
pub mod describe_affected_entities_for_organization_input {
    /// A builder for [`DescribeAffectedEntitiesForOrganizationInput`](crate::input::DescribeAffectedEntitiesForOrganizationInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        organization_entity_filters:
            std::option::Option<std::vec::Vec<crate::model::EventAccountFilter>>,
        locale: std::option::Option<std::string::String>,
        next_token: std::option::Option<std::string::String>,
        max_results: std::option::Option<i32>,
    }
    impl Builder {
        pub fn organization_entity_filters(
            mut self,
            inp: impl Into<crate::model::EventAccountFilter>,
        ) -> Self {
            let mut v = self.organization_entity_filters.unwrap_or_default();
            v.push(inp.into());
            self.organization_entity_filters = Some(v);
            self
        }
        pub fn set_organization_entity_filters(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::EventAccountFilter>>,
        ) -> Self {
            self.organization_entity_filters = inp;
            self
        }
        pub fn locale(mut self, inp: impl Into<std::string::String>) -> Self {
            self.locale = Some(inp.into());
            self
        }
        pub fn set_locale(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.locale = inp;
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
        pub fn max_results(mut self, inp: i32) -> Self {
            self.max_results = Some(inp);
            self
        }
        pub fn set_max_results(mut self, inp: std::option::Option<i32>) -> Self {
            self.max_results = inp;
            self
        }
        /// Consumes the builder and constructs a [`DescribeAffectedEntitiesForOrganizationInput`](crate::input::DescribeAffectedEntitiesForOrganizationInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeAffectedEntitiesForOrganizationInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DescribeAffectedEntitiesForOrganizationInput {
                organization_entity_filters: self.organization_entity_filters,
                locale: self.locale,
                next_token: self.next_token,
                max_results: self.max_results,
            })
        }
    }
}

impl DescribeAffectedEntitiesForOrganizationInput {
    /// Consumes the builder and constructs an Operation<[`DescribeAffectedEntitiesForOrganization`](crate::operation::DescribeAffectedEntitiesForOrganization)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DescribeAffectedEntitiesForOrganization, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let body = smithy_json::to_body(&input)
            .map_err(|err| smithy_http::operation::BuildError::SerializationError(err.into()))?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.1")
            .header("x-amz-target", "AWSHealth_20160804.DescribeAffectedEntitiesForOrganization")
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        let mut request = smithy_http::operation::Request::new(request);
        {
            let mut props = request.properties_mut();
            props.insert(aws_http::user_agent::AwsUserAgent::new_from_environment(
                aws_types::os_shim_internal::Env::real(),
                crate::API_METADATA.clone(),
            ));
            props.insert(aws_sig_auth::signer::OperationSigningConfig::default_config());
            props.insert(aws_types::SigningService::from_static("health"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::DescribeAffectedEntitiesForOrganization::new())
            .with_metadata(smithy_http::operation::Metadata::new("DescribeAffectedEntitiesForOrganization", "health"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`DescribeAffectedEntitiesForOrganizationInput`](crate::input::DescribeAffectedEntitiesForOrganizationInput)
    pub fn builder() -> crate::input::describe_affected_entities_for_organization_input::Builder {
        crate::input::describe_affected_entities_for_organization_input::Builder::default()
    }
}

/// See [`DescribeEntityAggregatesInput`](crate::input::DescribeEntityAggregatesInput)
pub mod describe_entity_aggregates_input {
    /// A builder for [`DescribeEntityAggregatesInput`](crate::input::DescribeEntityAggregatesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        event_arns: std::option::Option<std::vec::Vec<std::string::String>>,
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
        /// Consumes the builder and constructs a [`DescribeEntityAggregatesInput`](crate::input::DescribeEntityAggregatesInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeEntityAggregatesInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DescribeEntityAggregatesInput {
                event_arns: self.event_arns,
            })
        }
    }
}

impl DescribeEntityAggregatesInput {
    /// Consumes the builder and constructs an Operation<[`DescribeEntityAggregates`](crate::operation::DescribeEntityAggregates)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DescribeEntityAggregates, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let body = smithy_json::to_body(&input)
            .map_err(|err| smithy_http::operation::BuildError::SerializationError(err.into()))?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.1")
            .header("x-amz-target", "AWSHealth_20160804.DescribeEntityAggregates")
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        let mut request = smithy_http::operation::Request::new(request);
        {
            let mut props = request.properties_mut();
            props.insert(aws_http::user_agent::AwsUserAgent::new_from_environment(
                aws_types::os_shim_internal::Env::real(),
                crate::API_METADATA.clone(),
            ));
            props.insert(aws_sig_auth::signer::OperationSigningConfig::default_config());
            props.insert(aws_types::SigningService::from_static("health"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::DescribeEntityAggregates::new())
            .with_metadata(smithy_http::operation::Metadata::new("DescribeEntityAggregates", "health"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`DescribeEntityAggregatesInput`](crate::input::DescribeEntityAggregatesInput)
    pub fn builder() -> crate::input::describe_entity_aggregates_input::Builder {
        crate::input::describe_entity_aggregates_input::Builder::default()
    }
}

/// See [`DescribeEventAggregatesInput`](crate::input::DescribeEventAggregatesInput)
pub mod describe_event_aggregates_input {
    /// A builder for [`DescribeEventAggregatesInput`](crate::input::DescribeEventAggregatesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        filter: std::option::Option<crate::model::EventFilter>,
        aggregate_field: std::option::Option<crate::model::EventAggregateField>,
        max_results: std::option::Option<i32>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn filter(mut self, inp: crate::model::EventFilter) -> Self {
            self.filter = Some(inp);
            self
        }
        pub fn set_filter(mut self, inp: std::option::Option<crate::model::EventFilter>) -> Self {
            self.filter = inp;
            self
        }
        pub fn aggregate_field(mut self, inp: crate::model::EventAggregateField) -> Self {
            self.aggregate_field = Some(inp);
            self
        }
        pub fn set_aggregate_field(
            mut self,
            inp: std::option::Option<crate::model::EventAggregateField>,
        ) -> Self {
            self.aggregate_field = inp;
            self
        }
        pub fn max_results(mut self, inp: i32) -> Self {
            self.max_results = Some(inp);
            self
        }
        pub fn set_max_results(mut self, inp: std::option::Option<i32>) -> Self {
            self.max_results = inp;
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
        /// Consumes the builder and constructs a [`DescribeEventAggregatesInput`](crate::input::DescribeEventAggregatesInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeEventAggregatesInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DescribeEventAggregatesInput {
                filter: self.filter,
                aggregate_field: self.aggregate_field,
                max_results: self.max_results,
                next_token: self.next_token,
            })
        }
    }
}

impl DescribeEventAggregatesInput {
    /// Consumes the builder and constructs an Operation<[`DescribeEventAggregates`](crate::operation::DescribeEventAggregates)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DescribeEventAggregates, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let body = smithy_json::to_body(&input)
            .map_err(|err| smithy_http::operation::BuildError::SerializationError(err.into()))?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.1")
            .header("x-amz-target", "AWSHealth_20160804.DescribeEventAggregates")
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        let mut request = smithy_http::operation::Request::new(request);
        {
            let mut props = request.properties_mut();
            props.insert(aws_http::user_agent::AwsUserAgent::new_from_environment(
                aws_types::os_shim_internal::Env::real(),
                crate::API_METADATA.clone(),
            ));
            props.insert(aws_sig_auth::signer::OperationSigningConfig::default_config());
            props.insert(aws_types::SigningService::from_static("health"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::DescribeEventAggregates::new())
            .with_metadata(smithy_http::operation::Metadata::new("DescribeEventAggregates", "health"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`DescribeEventAggregatesInput`](crate::input::DescribeEventAggregatesInput)
    pub fn builder() -> crate::input::describe_event_aggregates_input::Builder {
        crate::input::describe_event_aggregates_input::Builder::default()
    }
}

/// See [`DescribeEventDetailsInput`](crate::input::DescribeEventDetailsInput)
pub mod describe_event_details_input {
    /// A builder for [`DescribeEventDetailsInput`](crate::input::DescribeEventDetailsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        event_arns: std::option::Option<std::vec::Vec<std::string::String>>,
        locale: std::option::Option<std::string::String>,
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
        pub fn locale(mut self, inp: impl Into<std::string::String>) -> Self {
            self.locale = Some(inp.into());
            self
        }
        pub fn set_locale(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.locale = inp;
            self
        }
        /// Consumes the builder and constructs a [`DescribeEventDetailsInput`](crate::input::DescribeEventDetailsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeEventDetailsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DescribeEventDetailsInput {
                event_arns: self.event_arns,
                locale: self.locale,
            })
        }
    }
}

impl DescribeEventDetailsInput {
    /// Consumes the builder and constructs an Operation<[`DescribeEventDetails`](crate::operation::DescribeEventDetails)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DescribeEventDetails, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let body = smithy_json::to_body(&input)
            .map_err(|err| smithy_http::operation::BuildError::SerializationError(err.into()))?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.1")
            .header("x-amz-target", "AWSHealth_20160804.DescribeEventDetails")
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        let mut request = smithy_http::operation::Request::new(request);
        {
            let mut props = request.properties_mut();
            props.insert(aws_http::user_agent::AwsUserAgent::new_from_environment(
                aws_types::os_shim_internal::Env::real(),
                crate::API_METADATA.clone(),
            ));
            props.insert(aws_sig_auth::signer::OperationSigningConfig::default_config());
            props.insert(aws_types::SigningService::from_static("health"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::DescribeEventDetails::new())
            .with_metadata(smithy_http::operation::Metadata::new("DescribeEventDetails", "health"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`DescribeEventDetailsInput`](crate::input::DescribeEventDetailsInput)
    pub fn builder() -> crate::input::describe_event_details_input::Builder {
        crate::input::describe_event_details_input::Builder::default()
    }
}

/// See [`DescribeEventDetailsForOrganizationInput`](crate::input::DescribeEventDetailsForOrganizationInput)
pub mod describe_event_details_for_organization_input {
    /// A builder for [`DescribeEventDetailsForOrganizationInput`](crate::input::DescribeEventDetailsForOrganizationInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        organization_event_detail_filters:
            std::option::Option<std::vec::Vec<crate::model::EventAccountFilter>>,
        locale: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn organization_event_detail_filters(
            mut self,
            inp: impl Into<crate::model::EventAccountFilter>,
        ) -> Self {
            let mut v = self.organization_event_detail_filters.unwrap_or_default();
            v.push(inp.into());
            self.organization_event_detail_filters = Some(v);
            self
        }
        pub fn set_organization_event_detail_filters(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::EventAccountFilter>>,
        ) -> Self {
            self.organization_event_detail_filters = inp;
            self
        }
        pub fn locale(mut self, inp: impl Into<std::string::String>) -> Self {
            self.locale = Some(inp.into());
            self
        }
        pub fn set_locale(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.locale = inp;
            self
        }
        /// Consumes the builder and constructs a [`DescribeEventDetailsForOrganizationInput`](crate::input::DescribeEventDetailsForOrganizationInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeEventDetailsForOrganizationInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DescribeEventDetailsForOrganizationInput {
                organization_event_detail_filters: self.organization_event_detail_filters,
                locale: self.locale,
            })
        }
    }
}

impl DescribeEventDetailsForOrganizationInput {
    /// Consumes the builder and constructs an Operation<[`DescribeEventDetailsForOrganization`](crate::operation::DescribeEventDetailsForOrganization)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DescribeEventDetailsForOrganization, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let body = smithy_json::to_body(&input)
            .map_err(|err| smithy_http::operation::BuildError::SerializationError(err.into()))?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.1")
            .header("x-amz-target", "AWSHealth_20160804.DescribeEventDetailsForOrganization")
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        let mut request = smithy_http::operation::Request::new(request);
        {
            let mut props = request.properties_mut();
            props.insert(aws_http::user_agent::AwsUserAgent::new_from_environment(
                aws_types::os_shim_internal::Env::real(),
                crate::API_METADATA.clone(),
            ));
            props.insert(aws_sig_auth::signer::OperationSigningConfig::default_config());
            props.insert(aws_types::SigningService::from_static("health"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::DescribeEventDetailsForOrganization::new())
            .with_metadata(smithy_http::operation::Metadata::new("DescribeEventDetailsForOrganization", "health"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`DescribeEventDetailsForOrganizationInput`](crate::input::DescribeEventDetailsForOrganizationInput)
    pub fn builder() -> crate::input::describe_event_details_for_organization_input::Builder {
        crate::input::describe_event_details_for_organization_input::Builder::default()
    }
}

/// See [`DescribeEventTypesInput`](crate::input::DescribeEventTypesInput)
pub mod describe_event_types_input {
    /// A builder for [`DescribeEventTypesInput`](crate::input::DescribeEventTypesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        filter: std::option::Option<crate::model::EventTypeFilter>,
        locale: std::option::Option<std::string::String>,
        next_token: std::option::Option<std::string::String>,
        max_results: std::option::Option<i32>,
    }
    impl Builder {
        pub fn filter(mut self, inp: crate::model::EventTypeFilter) -> Self {
            self.filter = Some(inp);
            self
        }
        pub fn set_filter(
            mut self,
            inp: std::option::Option<crate::model::EventTypeFilter>,
        ) -> Self {
            self.filter = inp;
            self
        }
        pub fn locale(mut self, inp: impl Into<std::string::String>) -> Self {
            self.locale = Some(inp.into());
            self
        }
        pub fn set_locale(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.locale = inp;
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
        pub fn max_results(mut self, inp: i32) -> Self {
            self.max_results = Some(inp);
            self
        }
        pub fn set_max_results(mut self, inp: std::option::Option<i32>) -> Self {
            self.max_results = inp;
            self
        }
        /// Consumes the builder and constructs a [`DescribeEventTypesInput`](crate::input::DescribeEventTypesInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeEventTypesInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DescribeEventTypesInput {
                filter: self.filter,
                locale: self.locale,
                next_token: self.next_token,
                max_results: self.max_results,
            })
        }
    }
}

impl DescribeEventTypesInput {
    /// Consumes the builder and constructs an Operation<[`DescribeEventTypes`](crate::operation::DescribeEventTypes)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DescribeEventTypes, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let body = smithy_json::to_body(&input)
            .map_err(|err| smithy_http::operation::BuildError::SerializationError(err.into()))?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.1")
            .header("x-amz-target", "AWSHealth_20160804.DescribeEventTypes")
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        let mut request = smithy_http::operation::Request::new(request);
        {
            let mut props = request.properties_mut();
            props.insert(aws_http::user_agent::AwsUserAgent::new_from_environment(
                aws_types::os_shim_internal::Env::real(),
                crate::API_METADATA.clone(),
            ));
            props.insert(aws_sig_auth::signer::OperationSigningConfig::default_config());
            props.insert(aws_types::SigningService::from_static("health"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::DescribeEventTypes::new())
            .with_metadata(smithy_http::operation::Metadata::new("DescribeEventTypes", "health"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`DescribeEventTypesInput`](crate::input::DescribeEventTypesInput)
    pub fn builder() -> crate::input::describe_event_types_input::Builder {
        crate::input::describe_event_types_input::Builder::default()
    }
}

/// See [`DescribeEventsInput`](crate::input::DescribeEventsInput)
pub mod describe_events_input {
    /// A builder for [`DescribeEventsInput`](crate::input::DescribeEventsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        filter: std::option::Option<crate::model::EventFilter>,
        next_token: std::option::Option<std::string::String>,
        max_results: std::option::Option<i32>,
        locale: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn filter(mut self, inp: crate::model::EventFilter) -> Self {
            self.filter = Some(inp);
            self
        }
        pub fn set_filter(mut self, inp: std::option::Option<crate::model::EventFilter>) -> Self {
            self.filter = inp;
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
        pub fn max_results(mut self, inp: i32) -> Self {
            self.max_results = Some(inp);
            self
        }
        pub fn set_max_results(mut self, inp: std::option::Option<i32>) -> Self {
            self.max_results = inp;
            self
        }
        pub fn locale(mut self, inp: impl Into<std::string::String>) -> Self {
            self.locale = Some(inp.into());
            self
        }
        pub fn set_locale(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.locale = inp;
            self
        }
        /// Consumes the builder and constructs a [`DescribeEventsInput`](crate::input::DescribeEventsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeEventsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DescribeEventsInput {
                filter: self.filter,
                next_token: self.next_token,
                max_results: self.max_results,
                locale: self.locale,
            })
        }
    }
}

impl DescribeEventsInput {
    /// Consumes the builder and constructs an Operation<[`DescribeEvents`](crate::operation::DescribeEvents)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DescribeEvents, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let body = smithy_json::to_body(&input)
            .map_err(|err| smithy_http::operation::BuildError::SerializationError(err.into()))?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.1")
            .header("x-amz-target", "AWSHealth_20160804.DescribeEvents")
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        let mut request = smithy_http::operation::Request::new(request);
        {
            let mut props = request.properties_mut();
            props.insert(aws_http::user_agent::AwsUserAgent::new_from_environment(
                aws_types::os_shim_internal::Env::real(),
                crate::API_METADATA.clone(),
            ));
            props.insert(aws_sig_auth::signer::OperationSigningConfig::default_config());
            props.insert(aws_types::SigningService::from_static("health"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::DescribeEvents::new())
            .with_metadata(smithy_http::operation::Metadata::new("DescribeEvents", "health"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`DescribeEventsInput`](crate::input::DescribeEventsInput)
    pub fn builder() -> crate::input::describe_events_input::Builder {
        crate::input::describe_events_input::Builder::default()
    }
}

/// See [`DescribeEventsForOrganizationInput`](crate::input::DescribeEventsForOrganizationInput)
pub mod describe_events_for_organization_input {
    /// A builder for [`DescribeEventsForOrganizationInput`](crate::input::DescribeEventsForOrganizationInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        filter: std::option::Option<crate::model::OrganizationEventFilter>,
        next_token: std::option::Option<std::string::String>,
        max_results: std::option::Option<i32>,
        locale: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn filter(mut self, inp: crate::model::OrganizationEventFilter) -> Self {
            self.filter = Some(inp);
            self
        }
        pub fn set_filter(
            mut self,
            inp: std::option::Option<crate::model::OrganizationEventFilter>,
        ) -> Self {
            self.filter = inp;
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
        pub fn max_results(mut self, inp: i32) -> Self {
            self.max_results = Some(inp);
            self
        }
        pub fn set_max_results(mut self, inp: std::option::Option<i32>) -> Self {
            self.max_results = inp;
            self
        }
        pub fn locale(mut self, inp: impl Into<std::string::String>) -> Self {
            self.locale = Some(inp.into());
            self
        }
        pub fn set_locale(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.locale = inp;
            self
        }
        /// Consumes the builder and constructs a [`DescribeEventsForOrganizationInput`](crate::input::DescribeEventsForOrganizationInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeEventsForOrganizationInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DescribeEventsForOrganizationInput {
                filter: self.filter,
                next_token: self.next_token,
                max_results: self.max_results,
                locale: self.locale,
            })
        }
    }
}

impl DescribeEventsForOrganizationInput {
    /// Consumes the builder and constructs an Operation<[`DescribeEventsForOrganization`](crate::operation::DescribeEventsForOrganization)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DescribeEventsForOrganization, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let body = smithy_json::to_body(&input)
            .map_err(|err| smithy_http::operation::BuildError::SerializationError(err.into()))?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.1")
            .header("x-amz-target", "AWSHealth_20160804.DescribeEventsForOrganization")
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        let mut request = smithy_http::operation::Request::new(request);
        {
            let mut props = request.properties_mut();
            props.insert(aws_http::user_agent::AwsUserAgent::new_from_environment(
                aws_types::os_shim_internal::Env::real(),
                crate::API_METADATA.clone(),
            ));
            props.insert(aws_sig_auth::signer::OperationSigningConfig::default_config());
            props.insert(aws_types::SigningService::from_static("health"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::DescribeEventsForOrganization::new())
            .with_metadata(smithy_http::operation::Metadata::new("DescribeEventsForOrganization", "health"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`DescribeEventsForOrganizationInput`](crate::input::DescribeEventsForOrganizationInput)
    pub fn builder() -> crate::input::describe_events_for_organization_input::Builder {
        crate::input::describe_events_for_organization_input::Builder::default()
    }
}

/// See [`DescribeHealthServiceStatusForOrganizationInput`](crate::input::DescribeHealthServiceStatusForOrganizationInput)
pub mod describe_health_service_status_for_organization_input {
    /// A builder for [`DescribeHealthServiceStatusForOrganizationInput`](crate::input::DescribeHealthServiceStatusForOrganizationInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
    }
    impl Builder {
        /// Consumes the builder and constructs a [`DescribeHealthServiceStatusForOrganizationInput`](crate::input::DescribeHealthServiceStatusForOrganizationInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeHealthServiceStatusForOrganizationInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DescribeHealthServiceStatusForOrganizationInput {
            })
        }
    }
}

impl DescribeHealthServiceStatusForOrganizationInput {
    /// Consumes the builder and constructs an Operation<[`DescribeHealthServiceStatusForOrganization`](crate::operation::DescribeHealthServiceStatusForOrganization)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DescribeHealthServiceStatusForOrganization, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let body = smithy_json::to_body(&input)
            .map_err(|err| smithy_http::operation::BuildError::SerializationError(err.into()))?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.1")
            .header("x-amz-target", "AWSHealth_20160804.DescribeHealthServiceStatusForOrganization")
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        let mut request = smithy_http::operation::Request::new(request);
        {
            let mut props = request.properties_mut();
            props.insert(aws_http::user_agent::AwsUserAgent::new_from_environment(
                aws_types::os_shim_internal::Env::real(),
                crate::API_METADATA.clone(),
            ));
            props.insert(aws_sig_auth::signer::OperationSigningConfig::default_config());
            props.insert(aws_types::SigningService::from_static("health"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::DescribeHealthServiceStatusForOrganization::new())
            .with_metadata(smithy_http::operation::Metadata::new("DescribeHealthServiceStatusForOrganization", "health"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`DescribeHealthServiceStatusForOrganizationInput`](crate::input::DescribeHealthServiceStatusForOrganizationInput)
    pub fn builder(
    ) -> crate::input::describe_health_service_status_for_organization_input::Builder {
        crate::input::describe_health_service_status_for_organization_input::Builder::default()
    }
}

/// See [`DisableHealthServiceAccessForOrganizationInput`](crate::input::DisableHealthServiceAccessForOrganizationInput)
pub mod disable_health_service_access_for_organization_input {
    /// A builder for [`DisableHealthServiceAccessForOrganizationInput`](crate::input::DisableHealthServiceAccessForOrganizationInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
    }
    impl Builder {
        /// Consumes the builder and constructs a [`DisableHealthServiceAccessForOrganizationInput`](crate::input::DisableHealthServiceAccessForOrganizationInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DisableHealthServiceAccessForOrganizationInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DisableHealthServiceAccessForOrganizationInput {
            })
        }
    }
}

impl DisableHealthServiceAccessForOrganizationInput {
    /// Consumes the builder and constructs an Operation<[`DisableHealthServiceAccessForOrganization`](crate::operation::DisableHealthServiceAccessForOrganization)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DisableHealthServiceAccessForOrganization, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let body = smithy_json::to_body(&input)
            .map_err(|err| smithy_http::operation::BuildError::SerializationError(err.into()))?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.1")
            .header("x-amz-target", "AWSHealth_20160804.DisableHealthServiceAccessForOrganization")
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        let mut request = smithy_http::operation::Request::new(request);
        {
            let mut props = request.properties_mut();
            props.insert(aws_http::user_agent::AwsUserAgent::new_from_environment(
                aws_types::os_shim_internal::Env::real(),
                crate::API_METADATA.clone(),
            ));
            props.insert(aws_sig_auth::signer::OperationSigningConfig::default_config());
            props.insert(aws_types::SigningService::from_static("health"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::DisableHealthServiceAccessForOrganization::new())
            .with_metadata(smithy_http::operation::Metadata::new("DisableHealthServiceAccessForOrganization", "health"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`DisableHealthServiceAccessForOrganizationInput`](crate::input::DisableHealthServiceAccessForOrganizationInput)
    pub fn builder(
    ) -> crate::input::disable_health_service_access_for_organization_input::Builder {
        crate::input::disable_health_service_access_for_organization_input::Builder::default()
    }
}

/// See [`EnableHealthServiceAccessForOrganizationInput`](crate::input::EnableHealthServiceAccessForOrganizationInput)
pub mod enable_health_service_access_for_organization_input {
    /// A builder for [`EnableHealthServiceAccessForOrganizationInput`](crate::input::EnableHealthServiceAccessForOrganizationInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
    }
    impl Builder {
        /// Consumes the builder and constructs a [`EnableHealthServiceAccessForOrganizationInput`](crate::input::EnableHealthServiceAccessForOrganizationInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::EnableHealthServiceAccessForOrganizationInput, smithy_http::operation::BuildError> {
            Ok(crate::input::EnableHealthServiceAccessForOrganizationInput {
            })
        }
    }
}

impl EnableHealthServiceAccessForOrganizationInput {
    /// Consumes the builder and constructs an Operation<[`EnableHealthServiceAccessForOrganization`](crate::operation::EnableHealthServiceAccessForOrganization)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::EnableHealthServiceAccessForOrganization, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let body = smithy_json::to_body(&input)
            .map_err(|err| smithy_http::operation::BuildError::SerializationError(err.into()))?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.1")
            .header("x-amz-target", "AWSHealth_20160804.EnableHealthServiceAccessForOrganization")
            .header(http::header::CONTENT_LENGTH, body.len())
            .body(smithy_http::body::SdkBody::from(body))?;
        let mut request = smithy_http::operation::Request::new(request);
        {
            let mut props = request.properties_mut();
            props.insert(aws_http::user_agent::AwsUserAgent::new_from_environment(
                aws_types::os_shim_internal::Env::real(),
                crate::API_METADATA.clone(),
            ));
            props.insert(aws_sig_auth::signer::OperationSigningConfig::default_config());
            props.insert(aws_types::SigningService::from_static("health"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::EnableHealthServiceAccessForOrganization::new())
            .with_metadata(smithy_http::operation::Metadata::new("EnableHealthServiceAccessForOrganization", "health"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`EnableHealthServiceAccessForOrganizationInput`](crate::input::EnableHealthServiceAccessForOrganizationInput)
    pub fn builder() -> crate::input::enable_health_service_access_for_organization_input::Builder {
        crate::input::enable_health_service_access_for_organization_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct DescribeAffectedAccountsForOrganizationInput {
    #[serde(rename = "eventArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub event_arn: std::option::Option<std::string::String>,
    #[serde(rename = "nextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
    #[serde(rename = "maxResults")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_results: std::option::Option<i32>,
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct DescribeAffectedEntitiesInput {
    #[serde(rename = "filter")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub filter: std::option::Option<crate::model::EntityFilter>,
    #[serde(rename = "locale")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub locale: std::option::Option<std::string::String>,
    #[serde(rename = "nextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
    #[serde(rename = "maxResults")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_results: std::option::Option<i32>,
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct DescribeAffectedEntitiesForOrganizationInput {
    #[serde(rename = "organizationEntityFilters")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub organization_entity_filters:
        std::option::Option<std::vec::Vec<crate::model::EventAccountFilter>>,
    #[serde(rename = "locale")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub locale: std::option::Option<std::string::String>,
    #[serde(rename = "nextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
    #[serde(rename = "maxResults")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_results: std::option::Option<i32>,
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct DescribeEntityAggregatesInput {
    #[serde(rename = "eventArns")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub event_arns: std::option::Option<std::vec::Vec<std::string::String>>,
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct DescribeEventAggregatesInput {
    #[serde(rename = "filter")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub filter: std::option::Option<crate::model::EventFilter>,
    #[serde(rename = "aggregateField")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub aggregate_field: std::option::Option<crate::model::EventAggregateField>,
    #[serde(rename = "maxResults")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_results: std::option::Option<i32>,
    #[serde(rename = "nextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct DescribeEventDetailsInput {
    #[serde(rename = "eventArns")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub event_arns: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "locale")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub locale: std::option::Option<std::string::String>,
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct DescribeEventDetailsForOrganizationInput {
    #[serde(rename = "organizationEventDetailFilters")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub organization_event_detail_filters:
        std::option::Option<std::vec::Vec<crate::model::EventAccountFilter>>,
    #[serde(rename = "locale")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub locale: std::option::Option<std::string::String>,
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct DescribeEventTypesInput {
    #[serde(rename = "filter")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub filter: std::option::Option<crate::model::EventTypeFilter>,
    #[serde(rename = "locale")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub locale: std::option::Option<std::string::String>,
    #[serde(rename = "nextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
    #[serde(rename = "maxResults")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_results: std::option::Option<i32>,
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct DescribeEventsInput {
    #[serde(rename = "filter")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub filter: std::option::Option<crate::model::EventFilter>,
    #[serde(rename = "nextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
    #[serde(rename = "maxResults")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_results: std::option::Option<i32>,
    #[serde(rename = "locale")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub locale: std::option::Option<std::string::String>,
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct DescribeEventsForOrganizationInput {
    #[serde(rename = "filter")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub filter: std::option::Option<crate::model::OrganizationEventFilter>,
    #[serde(rename = "nextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
    #[serde(rename = "maxResults")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub max_results: std::option::Option<i32>,
    #[serde(rename = "locale")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub locale: std::option::Option<std::string::String>,
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct DescribeHealthServiceStatusForOrganizationInput {
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct DisableHealthServiceAccessForOrganizationInput {
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct EnableHealthServiceAccessForOrganizationInput {
}
