/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// See [`CreateAnalyzerInput`](crate::input::CreateAnalyzerInput)
pub mod create_analyzer_input {
    /// A builder for [`CreateAnalyzerInput`](crate::input::CreateAnalyzerInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        analyzer_name: std::option::Option<std::string::String>,
        r#type: std::option::Option<crate::model::Type>,
        archive_rules: std::option::Option<std::vec::Vec<crate::model::InlineArchiveRule>>,
        tags:
            std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        client_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn analyzer_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.analyzer_name = Some(inp.into());
            self
        }
        pub fn set_analyzer_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.analyzer_name = inp;
            self
        }
        pub fn r#type(mut self, inp: crate::model::Type) -> Self {
            self.r#type = Some(inp);
            self
        }
        pub fn set_type(mut self, inp: std::option::Option<crate::model::Type>) -> Self {
            self.r#type = inp;
            self
        }
        /// Archive rules created together with the analyzer
        pub fn archive_rules(mut self, inp: impl Into<crate::model::InlineArchiveRule>) -> Self {
            let mut v = self.archive_rules.unwrap_or_default();
            v.push(inp.into());
            self.archive_rules = Some(v);
            self
        }
        pub fn set_archive_rules(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::InlineArchiveRule>>,
        ) -> Self {
            self.archive_rules = inp;
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
        pub fn client_token(mut self, inp: impl Into<std::string::String>) -> Self {
            self.client_token = Some(inp.into());
            self
        }
        pub fn set_client_token(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.client_token = inp;
            self
        }
        /// Consumes the builder and constructs a [`CreateAnalyzerInput`](crate::input::CreateAnalyzerInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::CreateAnalyzerInput, smithy_http::operation::BuildError> {
            Ok(crate::input::CreateAnalyzerInput {
                analyzer_name: self.analyzer_name,
                r#type: self.r#type,
                archive_rules: self.archive_rules,
                tags: self.tags,
                client_token: self.client_token,
            })
        }
    }
}

impl CreateAnalyzerInput {
    /// Consumes the builder and constructs an Operation<[`CreateAnalyzer`](crate::operation::CreateAnalyzer)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::CreateAnalyzer, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let mut input = self.clone();
        if input.client_token.is_none() {
            input.client_token = Some(config.make_token.make_idempotency_token());
        }
        let uri = String::from("/analyzer");
        let builder = http::Request::builder().method("PUT").uri(uri);
        let body = smithy_json::to_body(&input)
            .map_err(|err| smithy_http::operation::BuildError::SerializationError(err.into()))?;
        let request = builder
            .header(http::header::CONTENT_TYPE, "application/json")
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
            props.insert(aws_types::SigningService::from_static("access-analyzer"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::CreateAnalyzer::new())
            .with_metadata(smithy_http::operation::Metadata::new("CreateAnalyzer", "accessanalyzer"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`CreateAnalyzerInput`](crate::input::CreateAnalyzerInput)
    pub fn builder() -> crate::input::create_analyzer_input::Builder {
        crate::input::create_analyzer_input::Builder::default()
    }
}

/// See [`CreateArchiveRuleInput`](crate::input::CreateArchiveRuleInput)
pub mod create_archive_rule_input {
    /// A builder for [`CreateArchiveRuleInput`](crate::input::CreateArchiveRuleInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        analyzer_name: std::option::Option<std::string::String>,
        rule_name: std::option::Option<std::string::String>,
        filter:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::Criterion>>,
        client_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn analyzer_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.analyzer_name = Some(inp.into());
            self
        }
        pub fn set_analyzer_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.analyzer_name = inp;
            self
        }
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
        pub fn client_token(mut self, inp: impl Into<std::string::String>) -> Self {
            self.client_token = Some(inp.into());
            self
        }
        pub fn set_client_token(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.client_token = inp;
            self
        }
        /// Consumes the builder and constructs a [`CreateArchiveRuleInput`](crate::input::CreateArchiveRuleInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::CreateArchiveRuleInput, smithy_http::operation::BuildError> {
            Ok(crate::input::CreateArchiveRuleInput {
                analyzer_name: self.analyzer_name,
                rule_name: self.rule_name,
                filter: self.filter,
                client_token: self.client_token,
            })
        }
    }
}

impl CreateArchiveRuleInput {
    /// Consumes the builder and constructs an Operation<[`CreateArchiveRule`](crate::operation::CreateArchiveRule)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::CreateArchiveRule, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let mut input = self.clone();
        if input.client_token.is_none() {
            input.client_token = Some(config.make_token.make_idempotency_token());
        }
        let mut uri = String::new();
        input.uri_base(&mut uri)?;
        let builder = http::Request::builder().method("PUT").uri(uri);
        let body = smithy_json::to_body(&input)
            .map_err(|err| smithy_http::operation::BuildError::SerializationError(err.into()))?;
        let request = builder
            .header(http::header::CONTENT_TYPE, "application/json")
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
            props.insert(aws_types::SigningService::from_static("access-analyzer"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::CreateArchiveRule::new())
            .with_metadata(smithy_http::operation::Metadata::new("CreateArchiveRule", "accessanalyzer"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    fn uri_base(
        &self,
        output: &mut String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let analyzer_name = match self.analyzer_name.as_deref() {
            Some(label) if !label.is_empty() => smithy_http::label::fmt_string(label, false),
            _ => {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "analyzer_name",
                    details: "cannot be empty or unset",
                })
            }
        };
        output.push_str(&format!("/analyzer/{}/archive-rule", analyzer_name));
        Ok(())
    }
    /// Creates a new builder-style object to manufacture [`CreateArchiveRuleInput`](crate::input::CreateArchiveRuleInput)
    pub fn builder() -> crate::input::create_archive_rule_input::Builder {
        crate::input::create_archive_rule_input::Builder::default()
    }
}

/// See [`DeleteAnalyzerInput`](crate::input::DeleteAnalyzerInput)
pub mod delete_analyzer_input {
    /// A builder for [`DeleteAnalyzerInput`](crate::input::DeleteAnalyzerInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        analyzer_name: std::option::Option<std::string::String>,
        client_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn analyzer_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.analyzer_name = Some(inp.into());
            self
        }
        pub fn set_analyzer_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.analyzer_name = inp;
            self
        }
        pub fn client_token(mut self, inp: impl Into<std::string::String>) -> Self {
            self.client_token = Some(inp.into());
            self
        }
        pub fn set_client_token(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.client_token = inp;
            self
        }
        /// Consumes the builder and constructs a [`DeleteAnalyzerInput`](crate::input::DeleteAnalyzerInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DeleteAnalyzerInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DeleteAnalyzerInput {
                analyzer_name: self.analyzer_name,
                client_token: self.client_token,
            })
        }
    }
}

impl DeleteAnalyzerInput {
    /// Consumes the builder and constructs an Operation<[`DeleteAnalyzer`](crate::operation::DeleteAnalyzer)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DeleteAnalyzer, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let mut input = self.clone();
        if input.client_token.is_none() {
            input.client_token = Some(config.make_token.make_idempotency_token());
        }
        let mut uri = String::new();
        input.uri_base(&mut uri)?;
        input.uri_query(&mut uri);
        let builder = http::Request::builder().method("DELETE").uri(uri);
        let request = builder.body(smithy_http::body::SdkBody::empty())?;
        let mut request = smithy_http::operation::Request::new(request);
        {
            let mut props = request.properties_mut();
            props.insert(aws_http::user_agent::AwsUserAgent::new_from_environment(
                aws_types::os_shim_internal::Env::real(),
                crate::API_METADATA.clone(),
            ));
            props.insert(aws_sig_auth::signer::OperationSigningConfig::default_config());
            props.insert(aws_types::SigningService::from_static("access-analyzer"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::DeleteAnalyzer::new())
            .with_metadata(smithy_http::operation::Metadata::new("DeleteAnalyzer", "accessanalyzer"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    fn uri_base(
        &self,
        output: &mut String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let analyzer_name = match self.analyzer_name.as_deref() {
            Some(label) if !label.is_empty() => smithy_http::label::fmt_string(label, false),
            _ => {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "analyzer_name",
                    details: "cannot be empty or unset",
                })
            }
        };
        output.push_str(&format!("/analyzer/{}", analyzer_name));
        Ok(())
    }
    fn uri_query(&self, output: &mut String) {
        let mut query = smithy_http::query::Writer::new(output);
        if let Some(inner_1) = &self.client_token {
            query.push_kv("clientToken", &smithy_http::query::fmt_string(inner_1));
        }
    }
    /// Creates a new builder-style object to manufacture [`DeleteAnalyzerInput`](crate::input::DeleteAnalyzerInput)
    pub fn builder() -> crate::input::delete_analyzer_input::Builder {
        crate::input::delete_analyzer_input::Builder::default()
    }
}

/// See [`DeleteArchiveRuleInput`](crate::input::DeleteArchiveRuleInput)
pub mod delete_archive_rule_input {
    /// A builder for [`DeleteArchiveRuleInput`](crate::input::DeleteArchiveRuleInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        analyzer_name: std::option::Option<std::string::String>,
        rule_name: std::option::Option<std::string::String>,
        client_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn analyzer_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.analyzer_name = Some(inp.into());
            self
        }
        pub fn set_analyzer_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.analyzer_name = inp;
            self
        }
        pub fn rule_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.rule_name = Some(inp.into());
            self
        }
        pub fn set_rule_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.rule_name = inp;
            self
        }
        pub fn client_token(mut self, inp: impl Into<std::string::String>) -> Self {
            self.client_token = Some(inp.into());
            self
        }
        pub fn set_client_token(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.client_token = inp;
            self
        }
        /// Consumes the builder and constructs a [`DeleteArchiveRuleInput`](crate::input::DeleteArchiveRuleInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DeleteArchiveRuleInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DeleteArchiveRuleInput {
                analyzer_name: self.analyzer_name,
                rule_name: self.rule_name,
                client_token: self.client_token,
            })
        }
    }
}

impl DeleteArchiveRuleInput {
    /// Consumes the builder and constructs an Operation<[`DeleteArchiveRule`](crate::operation::DeleteArchiveRule)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DeleteArchiveRule, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let mut input = self.clone();
        if input.client_token.is_none() {
            input.client_token = Some(config.make_token.make_idempotency_token());
        }
        let mut uri = String::new();
        input.uri_base(&mut uri)?;
        input.uri_query(&mut uri);
        let builder = http::Request::builder().method("DELETE").uri(uri);
        let request = builder.body(smithy_http::body::SdkBody::empty())?;
        let mut request = smithy_http::operation::Request::new(request);
        {
            let mut props = request.properties_mut();
            props.insert(aws_http::user_agent::AwsUserAgent::new_from_environment(
                aws_types::os_shim_internal::Env::real(),
                crate::API_METADATA.clone(),
            ));
            props.insert(aws_sig_auth::signer::OperationSigningConfig::default_config());
            props.insert(aws_types::SigningService::from_static("access-analyzer"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::DeleteArchiveRule::new())
            .with_metadata(smithy_http::operation::Metadata::new("DeleteArchiveRule", "accessanalyzer"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    fn uri_base(
        &self,
        output: &mut String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let analyzer_name = match self.analyzer_name.as_deref() {
            Some(label) if !label.is_empty() => smithy_http::label::fmt_string(label, false),
            _ => {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "analyzer_name",
                    details: "cannot be empty or unset",
                })
            }
        };
        let rule_name = match self.rule_name.as_deref() {
            Some(label) if !label.is_empty() => smithy_http::label::fmt_string(label, false),
            _ => {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "rule_name",
                    details: "cannot be empty or unset",
                })
            }
        };
        output.push_str(&format!("/analyzer/{}/archive-rule/{}", analyzer_name, rule_name));
        Ok(())
    }
    fn uri_query(&self, output: &mut String) {
        let mut query = smithy_http::query::Writer::new(output);
        if let Some(inner_1) = &self.client_token {
            query.push_kv("clientToken", &smithy_http::query::fmt_string(inner_1));
        }
    }
    /// Creates a new builder-style object to manufacture [`DeleteArchiveRuleInput`](crate::input::DeleteArchiveRuleInput)
    pub fn builder() -> crate::input::delete_archive_rule_input::Builder {
        crate::input::delete_archive_rule_input::Builder::default()
    }
}

/// See [`GetAnalyzedResourceInput`](crate::input::GetAnalyzedResourceInput)
pub mod get_analyzed_resource_input {
    /// A builder for [`GetAnalyzedResourceInput`](crate::input::GetAnalyzedResourceInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        analyzer_arn: std::option::Option<std::string::String>,
        resource_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn analyzer_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.analyzer_arn = Some(inp.into());
            self
        }
        pub fn set_analyzer_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.analyzer_arn = inp;
            self
        }
        pub fn resource_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.resource_arn = Some(inp.into());
            self
        }
        pub fn set_resource_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.resource_arn = inp;
            self
        }
        /// Consumes the builder and constructs a [`GetAnalyzedResourceInput`](crate::input::GetAnalyzedResourceInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetAnalyzedResourceInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetAnalyzedResourceInput {
                analyzer_arn: self.analyzer_arn,
                resource_arn: self.resource_arn,
            })
        }
    }
}

impl GetAnalyzedResourceInput {
    /// Consumes the builder and constructs an Operation<[`GetAnalyzedResource`](crate::operation::GetAnalyzedResource)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetAnalyzedResource, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let mut uri = String::from("/analyzed-resource");
        input.uri_query(&mut uri);
        let builder = http::Request::builder().method("GET").uri(uri);
        let request = builder.body(smithy_http::body::SdkBody::empty())?;
        let mut request = smithy_http::operation::Request::new(request);
        {
            let mut props = request.properties_mut();
            props.insert(aws_http::user_agent::AwsUserAgent::new_from_environment(
                aws_types::os_shim_internal::Env::real(),
                crate::API_METADATA.clone(),
            ));
            props.insert(aws_sig_auth::signer::OperationSigningConfig::default_config());
            props.insert(aws_types::SigningService::from_static("access-analyzer"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::GetAnalyzedResource::new())
            .with_metadata(smithy_http::operation::Metadata::new("GetAnalyzedResource", "accessanalyzer"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    fn uri_query(&self, output: &mut String) {
        let mut query = smithy_http::query::Writer::new(output);
        if let Some(inner_1) = &self.analyzer_arn {
            query.push_kv("analyzerArn", &smithy_http::query::fmt_string(inner_1));
        }
        if let Some(inner_2) = &self.resource_arn {
            query.push_kv("resourceArn", &smithy_http::query::fmt_string(inner_2));
        }
    }
    /// Creates a new builder-style object to manufacture [`GetAnalyzedResourceInput`](crate::input::GetAnalyzedResourceInput)
    pub fn builder() -> crate::input::get_analyzed_resource_input::Builder {
        crate::input::get_analyzed_resource_input::Builder::default()
    }
}

/// See [`GetAnalyzerInput`](crate::input::GetAnalyzerInput)
pub mod get_analyzer_input {
    /// A builder for [`GetAnalyzerInput`](crate::input::GetAnalyzerInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        analyzer_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn analyzer_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.analyzer_name = Some(inp.into());
            self
        }
        pub fn set_analyzer_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.analyzer_name = inp;
            self
        }
        /// Consumes the builder and constructs a [`GetAnalyzerInput`](crate::input::GetAnalyzerInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetAnalyzerInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetAnalyzerInput {
                analyzer_name: self.analyzer_name,
            })
        }
    }
}

impl GetAnalyzerInput {
    /// Consumes the builder and constructs an Operation<[`GetAnalyzer`](crate::operation::GetAnalyzer)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetAnalyzer, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let mut uri = String::new();
        input.uri_base(&mut uri)?;
        let builder = http::Request::builder().method("GET").uri(uri);
        let request = builder.body(smithy_http::body::SdkBody::empty())?;
        let mut request = smithy_http::operation::Request::new(request);
        {
            let mut props = request.properties_mut();
            props.insert(aws_http::user_agent::AwsUserAgent::new_from_environment(
                aws_types::os_shim_internal::Env::real(),
                crate::API_METADATA.clone(),
            ));
            props.insert(aws_sig_auth::signer::OperationSigningConfig::default_config());
            props.insert(aws_types::SigningService::from_static("access-analyzer"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::GetAnalyzer::new())
            .with_metadata(smithy_http::operation::Metadata::new("GetAnalyzer", "accessanalyzer"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    fn uri_base(
        &self,
        output: &mut String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let analyzer_name = match self.analyzer_name.as_deref() {
            Some(label) if !label.is_empty() => smithy_http::label::fmt_string(label, false),
            _ => {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "analyzer_name",
                    details: "cannot be empty or unset",
                })
            }
        };
        output.push_str(&format!("/analyzer/{}", analyzer_name));
        Ok(())
    }
    /// Creates a new builder-style object to manufacture [`GetAnalyzerInput`](crate::input::GetAnalyzerInput)
    pub fn builder() -> crate::input::get_analyzer_input::Builder {
        crate::input::get_analyzer_input::Builder::default()
    }
}

/// See [`GetArchiveRuleInput`](crate::input::GetArchiveRuleInput)
pub mod get_archive_rule_input {
    /// A builder for [`GetArchiveRuleInput`](crate::input::GetArchiveRuleInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        analyzer_name: std::option::Option<std::string::String>,
        rule_name: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn analyzer_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.analyzer_name = Some(inp.into());
            self
        }
        pub fn set_analyzer_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.analyzer_name = inp;
            self
        }
        pub fn rule_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.rule_name = Some(inp.into());
            self
        }
        pub fn set_rule_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.rule_name = inp;
            self
        }
        /// Consumes the builder and constructs a [`GetArchiveRuleInput`](crate::input::GetArchiveRuleInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetArchiveRuleInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetArchiveRuleInput {
                analyzer_name: self.analyzer_name,
                rule_name: self.rule_name,
            })
        }
    }
}

impl GetArchiveRuleInput {
    /// Consumes the builder and constructs an Operation<[`GetArchiveRule`](crate::operation::GetArchiveRule)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetArchiveRule, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let mut uri = String::new();
        input.uri_base(&mut uri)?;
        let builder = http::Request::builder().method("GET").uri(uri);
        let request = builder.body(smithy_http::body::SdkBody::empty())?;
        let mut request = smithy_http::operation::Request::new(request);
        {
            let mut props = request.properties_mut();
            props.insert(aws_http::user_agent::AwsUserAgent::new_from_environment(
                aws_types::os_shim_internal::Env::real(),
                crate::API_METADATA.clone(),
            ));
            props.insert(aws_sig_auth::signer::OperationSigningConfig::default_config());
            props.insert(aws_types::SigningService::from_static("access-analyzer"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::GetArchiveRule::new())
            .with_metadata(smithy_http::operation::Metadata::new("GetArchiveRule", "accessanalyzer"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    fn uri_base(
        &self,
        output: &mut String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let analyzer_name = match self.analyzer_name.as_deref() {
            Some(label) if !label.is_empty() => smithy_http::label::fmt_string(label, false),
            _ => {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "analyzer_name",
                    details: "cannot be empty or unset",
                })
            }
        };
        let rule_name = match self.rule_name.as_deref() {
            Some(label) if !label.is_empty() => smithy_http::label::fmt_string(label, false),
            _ => {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "rule_name",
                    details: "cannot be empty or unset",
                })
            }
        };
        output.push_str(&format!("/analyzer/{}/archive-rule/{}", analyzer_name, rule_name));
        Ok(())
    }
    /// Creates a new builder-style object to manufacture [`GetArchiveRuleInput`](crate::input::GetArchiveRuleInput)
    pub fn builder() -> crate::input::get_archive_rule_input::Builder {
        crate::input::get_archive_rule_input::Builder::default()
    }
}

/// See [`GetFindingInput`](crate::input::GetFindingInput)
pub mod get_finding_input {
    /// A builder for [`GetFindingInput`](crate::input::GetFindingInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        analyzer_arn: std::option::Option<std::string::String>,
        id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn analyzer_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.analyzer_arn = Some(inp.into());
            self
        }
        pub fn set_analyzer_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.analyzer_arn = inp;
            self
        }
        pub fn id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.id = Some(inp.into());
            self
        }
        pub fn set_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.id = inp;
            self
        }
        /// Consumes the builder and constructs a [`GetFindingInput`](crate::input::GetFindingInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetFindingInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetFindingInput {
                analyzer_arn: self.analyzer_arn,
                id: self.id,
            })
        }
    }
}

impl GetFindingInput {
    /// Consumes the builder and constructs an Operation<[`GetFinding`](crate::operation::GetFinding)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetFinding, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let mut uri = String::new();
        input.uri_base(&mut uri)?;
        input.uri_query(&mut uri);
        let builder = http::Request::builder().method("GET").uri(uri);
        let request = builder.body(smithy_http::body::SdkBody::empty())?;
        let mut request = smithy_http::operation::Request::new(request);
        {
            let mut props = request.properties_mut();
            props.insert(aws_http::user_agent::AwsUserAgent::new_from_environment(
                aws_types::os_shim_internal::Env::real(),
                crate::API_METADATA.clone(),
            ));
            props.insert(aws_sig_auth::signer::OperationSigningConfig::default_config());
            props.insert(aws_types::SigningService::from_static("access-analyzer"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::GetFinding::new())
            .with_metadata(smithy_http::operation::Metadata::new("GetFinding", "accessanalyzer"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    fn uri_base(
        &self,
        output: &mut String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let id = match self.id.as_deref() {
            Some(label) if !label.is_empty() => smithy_http::label::fmt_string(label, false),
            _ => {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "id",
                    details: "cannot be empty or unset",
                })
            }
        };
        output.push_str(&format!("/finding/{}", id));
        Ok(())
    }
    fn uri_query(&self, output: &mut String) {
        let mut query = smithy_http::query::Writer::new(output);
        if let Some(inner_1) = &self.analyzer_arn {
            query.push_kv("analyzerArn", &smithy_http::query::fmt_string(inner_1));
        }
    }
    /// Creates a new builder-style object to manufacture [`GetFindingInput`](crate::input::GetFindingInput)
    pub fn builder() -> crate::input::get_finding_input::Builder {
        crate::input::get_finding_input::Builder::default()
    }
}

/// See [`ListAnalyzedResourcesInput`](crate::input::ListAnalyzedResourcesInput)
pub mod list_analyzed_resources_input {
    /// A builder for [`ListAnalyzedResourcesInput`](crate::input::ListAnalyzedResourcesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        analyzer_arn: std::option::Option<std::string::String>,
        resource_type: std::option::Option<crate::model::ResourceType>,
        next_token: std::option::Option<std::string::String>,
        max_results: std::option::Option<i32>,
    }
    impl Builder {
        pub fn analyzer_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.analyzer_arn = Some(inp.into());
            self
        }
        pub fn set_analyzer_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.analyzer_arn = inp;
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
        /// Consumes the builder and constructs a [`ListAnalyzedResourcesInput`](crate::input::ListAnalyzedResourcesInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListAnalyzedResourcesInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListAnalyzedResourcesInput {
                analyzer_arn: self.analyzer_arn,
                resource_type: self.resource_type,
                next_token: self.next_token,
                max_results: self.max_results,
            })
        }
    }
}

impl ListAnalyzedResourcesInput {
    /// Consumes the builder and constructs an Operation<[`ListAnalyzedResources`](crate::operation::ListAnalyzedResources)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListAnalyzedResources, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let uri = String::from("/analyzed-resource");
        let builder = http::Request::builder().method("POST").uri(uri);
        let body = smithy_json::to_body(&input)
            .map_err(|err| smithy_http::operation::BuildError::SerializationError(err.into()))?;
        let request = builder
            .header(http::header::CONTENT_TYPE, "application/json")
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
            props.insert(aws_types::SigningService::from_static("access-analyzer"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::ListAnalyzedResources::new())
            .with_metadata(smithy_http::operation::Metadata::new("ListAnalyzedResources", "accessanalyzer"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`ListAnalyzedResourcesInput`](crate::input::ListAnalyzedResourcesInput)
    pub fn builder() -> crate::input::list_analyzed_resources_input::Builder {
        crate::input::list_analyzed_resources_input::Builder::default()
    }
}

/// See [`ListAnalyzersInput`](crate::input::ListAnalyzersInput)
pub mod list_analyzers_input {
    /// A builder for [`ListAnalyzersInput`](crate::input::ListAnalyzersInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        next_token: std::option::Option<std::string::String>,
        max_results: std::option::Option<i32>,
        r#type: std::option::Option<crate::model::Type>,
    }
    impl Builder {
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
        pub fn r#type(mut self, inp: crate::model::Type) -> Self {
            self.r#type = Some(inp);
            self
        }
        pub fn set_type(mut self, inp: std::option::Option<crate::model::Type>) -> Self {
            self.r#type = inp;
            self
        }
        /// Consumes the builder and constructs a [`ListAnalyzersInput`](crate::input::ListAnalyzersInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListAnalyzersInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListAnalyzersInput {
                next_token: self.next_token,
                max_results: self.max_results,
                r#type: self.r#type,
            })
        }
    }
}

impl ListAnalyzersInput {
    /// Consumes the builder and constructs an Operation<[`ListAnalyzers`](crate::operation::ListAnalyzers)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListAnalyzers, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let mut uri = String::from("/analyzer");
        input.uri_query(&mut uri);
        let builder = http::Request::builder().method("GET").uri(uri);
        let request = builder.body(smithy_http::body::SdkBody::empty())?;
        let mut request = smithy_http::operation::Request::new(request);
        {
            let mut props = request.properties_mut();
            props.insert(aws_http::user_agent::AwsUserAgent::new_from_environment(
                aws_types::os_shim_internal::Env::real(),
                crate::API_METADATA.clone(),
            ));
            props.insert(aws_sig_auth::signer::OperationSigningConfig::default_config());
            props.insert(aws_types::SigningService::from_static("access-analyzer"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::ListAnalyzers::new())
            .with_metadata(smithy_http::operation::Metadata::new("ListAnalyzers", "accessanalyzer"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    fn uri_query(&self, output: &mut String) {
        let mut query = smithy_http::query::Writer::new(output);
        if let Some(inner_1) = &self.next_token {
            query.push_kv("nextToken", &smithy_http::query::fmt_string(inner_1));
        }
        if let Some(inner_2) = &self.max_results {
            query.push_kv("maxResults", &inner_2.to_string());
        }
        if let Some(inner_3) = &self.r#type {
            query.push_kv("type", &smithy_http::query::fmt_string(inner_3.as_str()));
        }
    }
    /// Creates a new builder-style object to manufacture [`ListAnalyzersInput`](crate::input::ListAnalyzersInput)
    pub fn builder() -> crate::input::list_analyzers_input::Builder {
        crate::input::list_analyzers_input::Builder::default()
    }
}

/// See [`ListArchiveRulesInput`](crate::input::ListArchiveRulesInput)
pub mod list_archive_rules_input {
    /// A builder for [`ListArchiveRulesInput`](crate::input::ListArchiveRulesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        analyzer_name: std::option::Option<std::string::String>,
        next_token: std::option::Option<std::string::String>,
        max_results: std::option::Option<i32>,
    }
    impl Builder {
        pub fn analyzer_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.analyzer_name = Some(inp.into());
            self
        }
        pub fn set_analyzer_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.analyzer_name = inp;
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
        /// Consumes the builder and constructs a [`ListArchiveRulesInput`](crate::input::ListArchiveRulesInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListArchiveRulesInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListArchiveRulesInput {
                analyzer_name: self.analyzer_name,
                next_token: self.next_token,
                max_results: self.max_results,
            })
        }
    }
}

impl ListArchiveRulesInput {
    /// Consumes the builder and constructs an Operation<[`ListArchiveRules`](crate::operation::ListArchiveRules)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListArchiveRules, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let mut uri = String::new();
        input.uri_base(&mut uri)?;
        input.uri_query(&mut uri);
        let builder = http::Request::builder().method("GET").uri(uri);
        let request = builder.body(smithy_http::body::SdkBody::empty())?;
        let mut request = smithy_http::operation::Request::new(request);
        {
            let mut props = request.properties_mut();
            props.insert(aws_http::user_agent::AwsUserAgent::new_from_environment(
                aws_types::os_shim_internal::Env::real(),
                crate::API_METADATA.clone(),
            ));
            props.insert(aws_sig_auth::signer::OperationSigningConfig::default_config());
            props.insert(aws_types::SigningService::from_static("access-analyzer"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::ListArchiveRules::new())
            .with_metadata(smithy_http::operation::Metadata::new("ListArchiveRules", "accessanalyzer"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    fn uri_base(
        &self,
        output: &mut String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let analyzer_name = match self.analyzer_name.as_deref() {
            Some(label) if !label.is_empty() => smithy_http::label::fmt_string(label, false),
            _ => {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "analyzer_name",
                    details: "cannot be empty or unset",
                })
            }
        };
        output.push_str(&format!("/analyzer/{}/archive-rule", analyzer_name));
        Ok(())
    }
    fn uri_query(&self, output: &mut String) {
        let mut query = smithy_http::query::Writer::new(output);
        if let Some(inner_1) = &self.next_token {
            query.push_kv("nextToken", &smithy_http::query::fmt_string(inner_1));
        }
        if let Some(inner_2) = &self.max_results {
            query.push_kv("maxResults", &inner_2.to_string());
        }
    }
    /// Creates a new builder-style object to manufacture [`ListArchiveRulesInput`](crate::input::ListArchiveRulesInput)
    pub fn builder() -> crate::input::list_archive_rules_input::Builder {
        crate::input::list_archive_rules_input::Builder::default()
    }
}

/// See [`ListFindingsInput`](crate::input::ListFindingsInput)
pub mod list_findings_input {
    /// A builder for [`ListFindingsInput`](crate::input::ListFindingsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        analyzer_arn: std::option::Option<std::string::String>,
        filter:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::Criterion>>,
        sort: std::option::Option<crate::model::SortCriteria>,
        next_token: std::option::Option<std::string::String>,
        max_results: std::option::Option<i32>,
    }
    impl Builder {
        pub fn analyzer_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.analyzer_arn = Some(inp.into());
            self
        }
        pub fn set_analyzer_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.analyzer_arn = inp;
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
        pub fn sort(mut self, inp: crate::model::SortCriteria) -> Self {
            self.sort = Some(inp);
            self
        }
        pub fn set_sort(mut self, inp: std::option::Option<crate::model::SortCriteria>) -> Self {
            self.sort = inp;
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
        /// Consumes the builder and constructs a [`ListFindingsInput`](crate::input::ListFindingsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListFindingsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListFindingsInput {
                analyzer_arn: self.analyzer_arn,
                filter: self.filter,
                sort: self.sort,
                next_token: self.next_token,
                max_results: self.max_results,
            })
        }
    }
}

impl ListFindingsInput {
    /// Consumes the builder and constructs an Operation<[`ListFindings`](crate::operation::ListFindings)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListFindings, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let uri = String::from("/finding");
        let builder = http::Request::builder().method("POST").uri(uri);
        let body = smithy_json::to_body(&input)
            .map_err(|err| smithy_http::operation::BuildError::SerializationError(err.into()))?;
        let request = builder
            .header(http::header::CONTENT_TYPE, "application/json")
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
            props.insert(aws_types::SigningService::from_static("access-analyzer"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::ListFindings::new())
            .with_metadata(smithy_http::operation::Metadata::new("ListFindings", "accessanalyzer"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`ListFindingsInput`](crate::input::ListFindingsInput)
    pub fn builder() -> crate::input::list_findings_input::Builder {
        crate::input::list_findings_input::Builder::default()
    }
}

/// See [`ListTagsForResourceInput`](crate::input::ListTagsForResourceInput)
pub mod list_tags_for_resource_input {
    /// A builder for [`ListTagsForResourceInput`](crate::input::ListTagsForResourceInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        resource_arn: std::option::Option<std::string::String>,
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
        /// Consumes the builder and constructs a [`ListTagsForResourceInput`](crate::input::ListTagsForResourceInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListTagsForResourceInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListTagsForResourceInput {
                resource_arn: self.resource_arn,
            })
        }
    }
}

impl ListTagsForResourceInput {
    /// Consumes the builder and constructs an Operation<[`ListTagsForResource`](crate::operation::ListTagsForResource)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListTagsForResource, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let mut uri = String::new();
        input.uri_base(&mut uri)?;
        let builder = http::Request::builder().method("GET").uri(uri);
        let request = builder.body(smithy_http::body::SdkBody::empty())?;
        let mut request = smithy_http::operation::Request::new(request);
        {
            let mut props = request.properties_mut();
            props.insert(aws_http::user_agent::AwsUserAgent::new_from_environment(
                aws_types::os_shim_internal::Env::real(),
                crate::API_METADATA.clone(),
            ));
            props.insert(aws_sig_auth::signer::OperationSigningConfig::default_config());
            props.insert(aws_types::SigningService::from_static("access-analyzer"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::ListTagsForResource::new())
            .with_metadata(smithy_http::operation::Metadata::new("ListTagsForResource", "accessanalyzer"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    fn uri_base(
        &self,
        output: &mut String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let resource_arn = match self.resource_arn.as_deref() {
            Some(label) if !label.is_empty() => smithy_http::label::fmt_string(label, false),
            _ => {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "resource_arn",
                    details: "cannot be empty or unset",
                })
            }
        };
        output.push_str(&format!("/tags/{}", resource_arn));
        Ok(())
    }
    /// Creates a new builder-style object to manufacture [`ListTagsForResourceInput`](crate::input::ListTagsForResourceInput)
    pub fn builder() -> crate::input::list_tags_for_resource_input::Builder {
        crate::input::list_tags_for_resource_input::Builder::default()
    }
}

/// See [`StartResourceScanInput`](crate::input::StartResourceScanInput)
pub mod start_resource_scan_input {
    /// A builder for [`StartResourceScanInput`](crate::input::StartResourceScanInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        analyzer_arn: std::option::Option<std::string::String>,
        resource_arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn analyzer_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.analyzer_arn = Some(inp.into());
            self
        }
        pub fn set_analyzer_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.analyzer_arn = inp;
            self
        }
        pub fn resource_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.resource_arn = Some(inp.into());
            self
        }
        pub fn set_resource_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.resource_arn = inp;
            self
        }
        /// Consumes the builder and constructs a [`StartResourceScanInput`](crate::input::StartResourceScanInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::StartResourceScanInput, smithy_http::operation::BuildError> {
            Ok(crate::input::StartResourceScanInput {
                analyzer_arn: self.analyzer_arn,
                resource_arn: self.resource_arn,
            })
        }
    }
}

impl StartResourceScanInput {
    /// Consumes the builder and constructs an Operation<[`StartResourceScan`](crate::operation::StartResourceScan)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::StartResourceScan, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let uri = String::from("/resource/scan");
        let builder = http::Request::builder().method("POST").uri(uri);
        let body = smithy_json::to_body(&input)
            .map_err(|err| smithy_http::operation::BuildError::SerializationError(err.into()))?;
        let request = builder
            .header(http::header::CONTENT_TYPE, "application/json")
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
            props.insert(aws_types::SigningService::from_static("access-analyzer"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::StartResourceScan::new())
            .with_metadata(smithy_http::operation::Metadata::new("StartResourceScan", "accessanalyzer"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`StartResourceScanInput`](crate::input::StartResourceScanInput)
    pub fn builder() -> crate::input::start_resource_scan_input::Builder {
        crate::input::start_resource_scan_input::Builder::default()
    }
}

/// See [`TagResourceInput`](crate::input::TagResourceInput)
pub mod tag_resource_input {
    /// A builder for [`TagResourceInput`](crate::input::TagResourceInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        resource_arn: std::option::Option<std::string::String>,
        tags:
            std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
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
        /// Consumes the builder and constructs a [`TagResourceInput`](crate::input::TagResourceInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::TagResourceInput, smithy_http::operation::BuildError> {
            Ok(crate::input::TagResourceInput {
                resource_arn: self.resource_arn,
                tags: self.tags,
            })
        }
    }
}

impl TagResourceInput {
    /// Consumes the builder and constructs an Operation<[`TagResource`](crate::operation::TagResource)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::TagResource, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let mut uri = String::new();
        input.uri_base(&mut uri)?;
        let builder = http::Request::builder().method("POST").uri(uri);
        let body = smithy_json::to_body(&input)
            .map_err(|err| smithy_http::operation::BuildError::SerializationError(err.into()))?;
        let request = builder
            .header(http::header::CONTENT_TYPE, "application/json")
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
            props.insert(aws_types::SigningService::from_static("access-analyzer"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::TagResource::new())
            .with_metadata(smithy_http::operation::Metadata::new("TagResource", "accessanalyzer"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    fn uri_base(
        &self,
        output: &mut String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let resource_arn = match self.resource_arn.as_deref() {
            Some(label) if !label.is_empty() => smithy_http::label::fmt_string(label, false),
            _ => {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "resource_arn",
                    details: "cannot be empty or unset",
                })
            }
        };
        output.push_str(&format!("/tags/{}", resource_arn));
        Ok(())
    }
    /// Creates a new builder-style object to manufacture [`TagResourceInput`](crate::input::TagResourceInput)
    pub fn builder() -> crate::input::tag_resource_input::Builder {
        crate::input::tag_resource_input::Builder::default()
    }
}

/// See [`UntagResourceInput`](crate::input::UntagResourceInput)
pub mod untag_resource_input {
    /// A builder for [`UntagResourceInput`](crate::input::UntagResourceInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        resource_arn: std::option::Option<std::string::String>,
        tag_keys: std::option::Option<std::vec::Vec<std::string::String>>,
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
        pub fn tag_keys(mut self, inp: impl Into<std::string::String>) -> Self {
            let mut v = self.tag_keys.unwrap_or_default();
            v.push(inp.into());
            self.tag_keys = Some(v);
            self
        }
        pub fn set_tag_keys(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.tag_keys = inp;
            self
        }
        /// Consumes the builder and constructs a [`UntagResourceInput`](crate::input::UntagResourceInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::UntagResourceInput, smithy_http::operation::BuildError> {
            Ok(crate::input::UntagResourceInput {
                resource_arn: self.resource_arn,
                tag_keys: self.tag_keys,
            })
        }
    }
}

impl UntagResourceInput {
    /// Consumes the builder and constructs an Operation<[`UntagResource`](crate::operation::UntagResource)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::UntagResource, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let mut uri = String::new();
        input.uri_base(&mut uri)?;
        input.uri_query(&mut uri);
        let builder = http::Request::builder().method("DELETE").uri(uri);
        let request = builder.body(smithy_http::body::SdkBody::empty())?;
        let mut request = smithy_http::operation::Request::new(request);
        {
            let mut props = request.properties_mut();
            props.insert(aws_http::user_agent::AwsUserAgent::new_from_environment(
                aws_types::os_shim_internal::Env::real(),
                crate::API_METADATA.clone(),
            ));
            props.insert(aws_sig_auth::signer::OperationSigningConfig::default_config());
            props.insert(aws_types::SigningService::from_static("access-analyzer"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::UntagResource::new())
            .with_metadata(smithy_http::operation::Metadata::new("UntagResource", "accessanalyzer"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    fn uri_base(
        &self,
        output: &mut String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let resource_arn = match self.resource_arn.as_deref() {
            Some(label) if !label.is_empty() => smithy_http::label::fmt_string(label, false),
            _ => {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "resource_arn",
                    details: "cannot be empty or unset",
                })
            }
        };
        output.push_str(&format!("/tags/{}", resource_arn));
        Ok(())
    }
    fn uri_query(&self, output: &mut String) {
        let mut query = smithy_http::query::Writer::new(output);
        if let Some(inner_1) = &self.tag_keys {
            for inner_100 in inner_1 {
                query.push_kv("tagKeys", &smithy_http::query::fmt_string(inner_100));
            }
        }
    }
    /// Creates a new builder-style object to manufacture [`UntagResourceInput`](crate::input::UntagResourceInput)
    pub fn builder() -> crate::input::untag_resource_input::Builder {
        crate::input::untag_resource_input::Builder::default()
    }
}

/// See [`UpdateArchiveRuleInput`](crate::input::UpdateArchiveRuleInput)
pub mod update_archive_rule_input {
    /// A builder for [`UpdateArchiveRuleInput`](crate::input::UpdateArchiveRuleInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        analyzer_name: std::option::Option<std::string::String>,
        rule_name: std::option::Option<std::string::String>,
        filter:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::Criterion>>,
        client_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn analyzer_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.analyzer_name = Some(inp.into());
            self
        }
        pub fn set_analyzer_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.analyzer_name = inp;
            self
        }
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
        pub fn client_token(mut self, inp: impl Into<std::string::String>) -> Self {
            self.client_token = Some(inp.into());
            self
        }
        pub fn set_client_token(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.client_token = inp;
            self
        }
        /// Consumes the builder and constructs a [`UpdateArchiveRuleInput`](crate::input::UpdateArchiveRuleInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::UpdateArchiveRuleInput, smithy_http::operation::BuildError> {
            Ok(crate::input::UpdateArchiveRuleInput {
                analyzer_name: self.analyzer_name,
                rule_name: self.rule_name,
                filter: self.filter,
                client_token: self.client_token,
            })
        }
    }
}

impl UpdateArchiveRuleInput {
    /// Consumes the builder and constructs an Operation<[`UpdateArchiveRule`](crate::operation::UpdateArchiveRule)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::UpdateArchiveRule, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let mut input = self.clone();
        if input.client_token.is_none() {
            input.client_token = Some(config.make_token.make_idempotency_token());
        }
        let mut uri = String::new();
        input.uri_base(&mut uri)?;
        let builder = http::Request::builder().method("PUT").uri(uri);
        let body = smithy_json::to_body(&input)
            .map_err(|err| smithy_http::operation::BuildError::SerializationError(err.into()))?;
        let request = builder
            .header(http::header::CONTENT_TYPE, "application/json")
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
            props.insert(aws_types::SigningService::from_static("access-analyzer"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::UpdateArchiveRule::new())
            .with_metadata(smithy_http::operation::Metadata::new("UpdateArchiveRule", "accessanalyzer"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    fn uri_base(
        &self,
        output: &mut String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let analyzer_name = match self.analyzer_name.as_deref() {
            Some(label) if !label.is_empty() => smithy_http::label::fmt_string(label, false),
            _ => {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "analyzer_name",
                    details: "cannot be empty or unset",
                })
            }
        };
        let rule_name = match self.rule_name.as_deref() {
            Some(label) if !label.is_empty() => smithy_http::label::fmt_string(label, false),
            _ => {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "rule_name",
                    details: "cannot be empty or unset",
                })
            }
        };
        output.push_str(&format!("/analyzer/{}/archive-rule/{}", analyzer_name, rule_name));
        Ok(())
    }
    /// Creates a new builder-style object to manufacture [`UpdateArchiveRuleInput`](crate::input::UpdateArchiveRuleInput)
    pub fn builder() -> crate::input::update_archive_rule_input::Builder {
        crate::input::update_archive_rule_input::Builder::default()
    }
}

/// See [`UpdateFindingsInput`](crate::input::UpdateFindingsInput)
pub mod update_findings_input {
    /// A builder for [`UpdateFindingsInput`](crate::input::UpdateFindingsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        analyzer_arn: std::option::Option<std::string::String>,
        status: std::option::Option<crate::model::FindingStatusUpdate>,
        ids: std::option::Option<std::vec::Vec<std::string::String>>,
        resource_arn: std::option::Option<std::string::String>,
        client_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn analyzer_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.analyzer_arn = Some(inp.into());
            self
        }
        pub fn set_analyzer_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.analyzer_arn = inp;
            self
        }
        pub fn status(mut self, inp: crate::model::FindingStatusUpdate) -> Self {
            self.status = Some(inp);
            self
        }
        pub fn set_status(
            mut self,
            inp: std::option::Option<crate::model::FindingStatusUpdate>,
        ) -> Self {
            self.status = inp;
            self
        }
        pub fn ids(mut self, inp: impl Into<std::string::String>) -> Self {
            let mut v = self.ids.unwrap_or_default();
            v.push(inp.into());
            self.ids = Some(v);
            self
        }
        pub fn set_ids(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.ids = inp;
            self
        }
        pub fn resource_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.resource_arn = Some(inp.into());
            self
        }
        pub fn set_resource_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.resource_arn = inp;
            self
        }
        pub fn client_token(mut self, inp: impl Into<std::string::String>) -> Self {
            self.client_token = Some(inp.into());
            self
        }
        pub fn set_client_token(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.client_token = inp;
            self
        }
        /// Consumes the builder and constructs a [`UpdateFindingsInput`](crate::input::UpdateFindingsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::UpdateFindingsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::UpdateFindingsInput {
                analyzer_arn: self.analyzer_arn,
                status: self.status,
                ids: self.ids,
                resource_arn: self.resource_arn,
                client_token: self.client_token,
            })
        }
    }
}

impl UpdateFindingsInput {
    /// Consumes the builder and constructs an Operation<[`UpdateFindings`](crate::operation::UpdateFindings)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::UpdateFindings, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let mut input = self.clone();
        if input.client_token.is_none() {
            input.client_token = Some(config.make_token.make_idempotency_token());
        }
        let uri = String::from("/finding");
        let builder = http::Request::builder().method("PUT").uri(uri);
        let body = smithy_json::to_body(&input)
            .map_err(|err| smithy_http::operation::BuildError::SerializationError(err.into()))?;
        let request = builder
            .header(http::header::CONTENT_TYPE, "application/json")
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
            props.insert(aws_types::SigningService::from_static("access-analyzer"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::UpdateFindings::new())
            .with_metadata(smithy_http::operation::Metadata::new("UpdateFindings", "accessanalyzer"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`UpdateFindingsInput`](crate::input::UpdateFindingsInput)
    pub fn builder() -> crate::input::update_findings_input::Builder {
        crate::input::update_findings_input::Builder::default()
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
pub struct CreateAnalyzerInput {
    #[serde(rename = "analyzerName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub analyzer_name: std::option::Option<std::string::String>,
    #[serde(rename = "type")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub r#type: std::option::Option<crate::model::Type>,
    /// Archive rules created together with the analyzer
    #[serde(rename = "archiveRules")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub archive_rules: std::option::Option<std::vec::Vec<crate::model::InlineArchiveRule>>,
    #[serde(rename = "tags")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tags:
        std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    #[serde(rename = "clientToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub client_token: std::option::Option<std::string::String>,
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct CreateArchiveRuleInput {
    #[serde(skip)]
    pub analyzer_name: std::option::Option<std::string::String>,
    #[serde(rename = "ruleName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub rule_name: std::option::Option<std::string::String>,
    #[serde(rename = "filter")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub filter:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::Criterion>>,
    #[serde(rename = "clientToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub client_token: std::option::Option<std::string::String>,
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct DeleteAnalyzerInput {
    #[serde(skip)]
    pub analyzer_name: std::option::Option<std::string::String>,
    #[serde(skip)]
    pub client_token: std::option::Option<std::string::String>,
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct DeleteArchiveRuleInput {
    #[serde(skip)]
    pub analyzer_name: std::option::Option<std::string::String>,
    #[serde(skip)]
    pub rule_name: std::option::Option<std::string::String>,
    #[serde(skip)]
    pub client_token: std::option::Option<std::string::String>,
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct GetAnalyzedResourceInput {
    #[serde(skip)]
    pub analyzer_arn: std::option::Option<std::string::String>,
    #[serde(skip)]
    pub resource_arn: std::option::Option<std::string::String>,
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct GetAnalyzerInput {
    #[serde(skip)]
    pub analyzer_name: std::option::Option<std::string::String>,
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct GetArchiveRuleInput {
    #[serde(skip)]
    pub analyzer_name: std::option::Option<std::string::String>,
    #[serde(skip)]
    pub rule_name: std::option::Option<std::string::String>,
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct GetFindingInput {
    #[serde(skip)]
    pub analyzer_arn: std::option::Option<std::string::String>,
    #[serde(skip)]
    pub id: std::option::Option<std::string::String>,
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct ListAnalyzedResourcesInput {
    #[serde(rename = "analyzerArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub analyzer_arn: std::option::Option<std::string::String>,
    #[serde(rename = "resourceType")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_type: std::option::Option<crate::model::ResourceType>,
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
pub struct ListAnalyzersInput {
    #[serde(skip)]
    pub next_token: std::option::Option<std::string::String>,
    #[serde(skip)]
    pub max_results: std::option::Option<i32>,
    #[serde(skip)]
    pub r#type: std::option::Option<crate::model::Type>,
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct ListArchiveRulesInput {
    #[serde(skip)]
    pub analyzer_name: std::option::Option<std::string::String>,
    #[serde(skip)]
    pub next_token: std::option::Option<std::string::String>,
    #[serde(skip)]
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
pub struct ListFindingsInput {
    #[serde(rename = "analyzerArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub analyzer_arn: std::option::Option<std::string::String>,
    #[serde(rename = "filter")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub filter:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::Criterion>>,
    #[serde(rename = "sort")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sort: std::option::Option<crate::model::SortCriteria>,
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
pub struct ListTagsForResourceInput {
    #[serde(skip)]
    pub resource_arn: std::option::Option<std::string::String>,
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct StartResourceScanInput {
    #[serde(rename = "analyzerArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub analyzer_arn: std::option::Option<std::string::String>,
    #[serde(rename = "resourceArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_arn: std::option::Option<std::string::String>,
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct TagResourceInput {
    #[serde(skip)]
    pub resource_arn: std::option::Option<std::string::String>,
    #[serde(rename = "tags")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tags:
        std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct UntagResourceInput {
    #[serde(skip)]
    pub resource_arn: std::option::Option<std::string::String>,
    #[serde(skip)]
    pub tag_keys: std::option::Option<std::vec::Vec<std::string::String>>,
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct UpdateArchiveRuleInput {
    #[serde(skip)]
    pub analyzer_name: std::option::Option<std::string::String>,
    #[serde(skip)]
    pub rule_name: std::option::Option<std::string::String>,
    #[serde(rename = "filter")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub filter:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::Criterion>>,
    #[serde(rename = "clientToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub client_token: std::option::Option<std::string::String>,
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct UpdateFindingsInput {
    #[serde(rename = "analyzerArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub analyzer_arn: std::option::Option<std::string::String>,
    #[serde(rename = "status")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<crate::model::FindingStatusUpdate>,
    #[serde(rename = "ids")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub ids: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "resourceArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_arn: std::option::Option<std::string::String>,
    #[serde(rename = "clientToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub client_token: std::option::Option<std::string::String>,
}
