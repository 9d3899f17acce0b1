/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// See [`CreateInputInput`](crate::input::CreateInputInput)
pub mod create_input_input {
    /// A builder for [`CreateInputInput`](crate::input::CreateInputInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        input_name: std::option::Option<std::string::String>,
        input_description: std::option::Option<std::string::String>,
        input_definition: std::option::Option<crate::model::InputDefinition>,
        tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
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
        pub fn tags(mut self, inp: impl Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(inp.into());
            self.tags = Some(v);
            self
        }
        pub fn set_tags(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::Tag>>,
        ) -> Self {
            self.tags = inp;
            self
        }
        /// Consumes the builder and constructs a [`CreateInputInput`](crate::input::CreateInputInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::CreateInputInput, smithy_http::operation::BuildError> {
            Ok(crate::input::CreateInputInput {
                input_name: self.input_name,
                input_description: self.input_description,
                input_definition: self.input_definition,
                tags: self.tags,
            })
        }
    }
}

impl CreateInputInput {
    /// Consumes the builder and constructs an Operation<[`CreateInput`](crate::operation::CreateInput)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::CreateInput, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let uri = String::from("/inputs");
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
            props.insert(aws_types::SigningService::from_static("iotevents"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::CreateInput::new())
            .with_metadata(smithy_http::operation::Metadata::new("CreateInput", "iotevents"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`CreateInputInput`](crate::input::CreateInputInput)
    pub fn builder() -> crate::input::create_input_input::Builder {
        crate::input::create_input_input::Builder::default()
    }
}

/// See [`DescribeInputInput`](crate::input::DescribeInputInput)
pub mod describe_input_input {
    /// A builder for [`DescribeInputInput`](crate::input::DescribeInputInput)
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
        /// Consumes the builder and constructs a [`DescribeInputInput`](crate::input::DescribeInputInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeInputInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DescribeInputInput {
                input_name: self.input_name,
            })
        }
    }
}

impl DescribeInputInput {
    /// Consumes the builder and constructs an Operation<[`DescribeInput`](crate::operation::DescribeInput)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DescribeInput, aws_http::AwsErrorRetryPolicy>,
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
            props.insert(aws_types::SigningService::from_static("iotevents"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::DescribeInput::new())
            .with_metadata(smithy_http::operation::Metadata::new("DescribeInput", "iotevents"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    fn uri_base(
        &self,
        output: &mut String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let input_name = match self.input_name.as_deref() {
            Some(label) if !label.is_empty() => smithy_http::label::fmt_string(label, false),
            _ => {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "input_name",
                    details: "cannot be empty or unset",
                })
            }
        };
        output.push_str(&format!("/inputs/{}", input_name));
        Ok(())
    }
    /// Creates a new builder-style object to manufacture [`DescribeInputInput`](crate::input::DescribeInputInput)
    pub fn builder() -> crate::input::describe_input_input::Builder {
        crate::input::describe_input_input::Builder::default()
    }
}

/// See [`ListInputsInput`](crate::input::ListInputsInput)
pub mod list_inputs_input {
    /// A builder for [`ListInputsInput`](crate::input::ListInputsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        next_token: std::option::Option<std::string::String>,
        max_results: std::option::Option<i32>,
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
        /// Consumes the builder and constructs a [`ListInputsInput`](crate::input::ListInputsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListInputsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListInputsInput {
                next_token: self.next_token,
                max_results: self.max_results,
            })
        }
    }
}

impl ListInputsInput {
    /// Consumes the builder and constructs an Operation<[`ListInputs`](crate::operation::ListInputs)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListInputs, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let mut uri = String::from("/inputs");
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
            props.insert(aws_types::SigningService::from_static("iotevents"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::ListInputs::new())
            .with_metadata(smithy_http::operation::Metadata::new("ListInputs", "iotevents"))
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
    }
    /// Creates a new builder-style object to manufacture [`ListInputsInput`](crate::input::ListInputsInput)
    pub fn builder() -> crate::input::list_inputs_input::Builder {
        crate::input::list_inputs_input::Builder::default()
    }
}

/// See [`UpdateInputInput`](crate::input::UpdateInputInput)
pub mod update_input_input {
    /// A builder for [`UpdateInputInput`](crate::input::UpdateInputInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        input_name: std::option::Option<std::string::String>,
        input_description: std::option::Option<std::string::String>,
        input_definition: std::option::Option<crate::model::InputDefinition>,
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
        /// Consumes the builder and constructs a [`UpdateInputInput`](crate::input::UpdateInputInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::UpdateInputInput, smithy_http::operation::BuildError> {
            Ok(crate::input::UpdateInputInput {
                input_name: self.input_name,
                input_description: self.input_description,
                input_definition: self.input_definition,
            })
        }
    }
}

impl UpdateInputInput {
    /// Consumes the builder and constructs an Operation<[`UpdateInput`](crate::operation::UpdateInput)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::UpdateInput, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
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
            props.insert(aws_types::SigningService::from_static("iotevents"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::UpdateInput::new())
            .with_metadata(smithy_http::operation::Metadata::new("UpdateInput", "iotevents"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    fn uri_base(
        &self,
        output: &mut String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let input_name = match self.input_name.as_deref() {
            Some(label) if !label.is_empty() => smithy_http::label::fmt_string(label, false),
            _ => {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "input_name",
                    details: "cannot be empty or unset",
                })
            }
        };
        output.push_str(&format!("/inputs/{}", input_name));
        Ok(())
    }
    /// Creates a new builder-style object to manufacture [`UpdateInputInput`](crate::input::UpdateInputInput)
    pub fn builder() -> crate::input::update_input_input::Builder {
        crate::input::update_input_input::Builder::default()
    }
}

/// See [`DeleteInputInput`](crate::input::DeleteInputInput)
pub mod delete_input_input {
    /// A builder for [`DeleteInputInput`](crate::input::DeleteInputInput)
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
        /// Consumes the builder and constructs a [`DeleteInputInput`](crate::input::DeleteInputInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DeleteInputInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DeleteInputInput {
                input_name: self.input_name,
            })
        }
    }
}

impl DeleteInputInput {
    /// Consumes the builder and constructs an Operation<[`DeleteInput`](crate::operation::DeleteInput)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DeleteInput, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let mut uri = String::new();
        input.uri_base(&mut uri)?;
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
            props.insert(aws_types::SigningService::from_static("iotevents"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::DeleteInput::new())
            .with_metadata(smithy_http::operation::Metadata::new("DeleteInput", "iotevents"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    fn uri_base(
        &self,
        output: &mut String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let input_name = match self.input_name.as_deref() {
            Some(label) if !label.is_empty() => smithy_http::label::fmt_string(label, false),
            _ => {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "input_name",
                    details: "cannot be empty or unset",
                })
            }
        };
        output.push_str(&format!("/inputs/{}", input_name));
        Ok(())
    }
    /// Creates a new builder-style object to manufacture [`DeleteInputInput`](crate::input::DeleteInputInput)
    pub fn builder() -> crate::input::delete_input_input::Builder {
        crate::input::delete_input_input::Builder::default()
    }
}

/// See [`CreateDetectorModelInput`](crate::input::CreateDetectorModelInput)
pub mod create_detector_model_input {
    /// A builder for [`CreateDetectorModelInput`](crate::input::CreateDetectorModelInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        detector_model_name: std::option::Option<std::string::String>,
        detector_model_definition: std::option::Option<crate::model::DetectorModelDefinition>,
        detector_model_description: std::option::Option<std::string::String>,
        key: std::option::Option<std::string::String>,
        role_arn: std::option::Option<std::string::String>,
        tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
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
        pub fn key(mut self, inp: impl Into<std::string::String>) -> Self {
            self.key = Some(inp.into());
            self
        }
        pub fn set_key(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.key = inp;
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
        pub fn tags(mut self, inp: impl Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(inp.into());
            self.tags = Some(v);
            self
        }
        pub fn set_tags(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::Tag>>,
        ) -> Self {
            self.tags = inp;
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
        /// Consumes the builder and constructs a [`CreateDetectorModelInput`](crate::input::CreateDetectorModelInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::CreateDetectorModelInput, smithy_http::operation::BuildError> {
            Ok(crate::input::CreateDetectorModelInput {
                detector_model_name: self.detector_model_name,
                detector_model_definition: self.detector_model_definition,
                detector_model_description: self.detector_model_description,
                key: self.key,
                role_arn: self.role_arn,
                tags: self.tags,
                evaluation_method: self.evaluation_method,
            })
        }
    }
}

impl CreateDetectorModelInput {
    /// Consumes the builder and constructs an Operation<[`CreateDetectorModel`](crate::operation::CreateDetectorModel)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::CreateDetectorModel, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let uri = String::from("/detector-models");
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
            props.insert(aws_types::SigningService::from_static("iotevents"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::CreateDetectorModel::new())
            .with_metadata(smithy_http::operation::Metadata::new("CreateDetectorModel", "iotevents"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`CreateDetectorModelInput`](crate::input::CreateDetectorModelInput)
    pub fn builder() -> crate::input::create_detector_model_input::Builder {
        crate::input::create_detector_model_input::Builder::default()
    }
}

/// See [`DescribeDetectorModelInput`](crate::input::DescribeDetectorModelInput)
pub mod describe_detector_model_input {
    /// A builder for [`DescribeDetectorModelInput`](crate::input::DescribeDetectorModelInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        detector_model_name: std::option::Option<std::string::String>,
        detector_model_version: std::option::Option<std::string::String>,
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
        /// Consumes the builder and constructs a [`DescribeDetectorModelInput`](crate::input::DescribeDetectorModelInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeDetectorModelInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DescribeDetectorModelInput {
                detector_model_name: self.detector_model_name,
                detector_model_version: self.detector_model_version,
            })
        }
    }
}

impl DescribeDetectorModelInput {
    /// Consumes the builder and constructs an Operation<[`DescribeDetectorModel`](crate::operation::DescribeDetectorModel)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DescribeDetectorModel, aws_http::AwsErrorRetryPolicy>,
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
            props.insert(aws_types::SigningService::from_static("iotevents"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::DescribeDetectorModel::new())
            .with_metadata(smithy_http::operation::Metadata::new("DescribeDetectorModel", "iotevents"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    fn uri_base(
        &self,
        output: &mut String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let detector_model_name = match self.detector_model_name.as_deref() {
            Some(label) if !label.is_empty() => smithy_http::label::fmt_string(label, false),
            _ => {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "detector_model_name",
                    details: "cannot be empty or unset",
                })
            }
        };
        output.push_str(&format!("/detector-models/{}", detector_model_name));
        Ok(())
    }
    fn uri_query(&self, output: &mut String) {
        let mut query = smithy_http::query::Writer::new(output);
        if let Some(inner_1) = &self.detector_model_version {
            query.push_kv("version", &smithy_http::query::fmt_string(inner_1));
        }
    }
    /// Creates a new builder-style object to manufacture [`DescribeDetectorModelInput`](crate::input::DescribeDetectorModelInput)
    pub fn builder() -> crate::input::describe_detector_model_input::Builder {
        crate::input::describe_detector_model_input::Builder::default()
    }
}

/// See [`UpdateDetectorModelInput`](crate::input::UpdateDetectorModelInput)
pub mod update_detector_model_input {
    /// A builder for [`UpdateDetectorModelInput`](crate::input::UpdateDetectorModelInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        detector_model_name: std::option::Option<std::string::String>,
        detector_model_definition: std::option::Option<crate::model::DetectorModelDefinition>,
        detector_model_description: std::option::Option<std::string::String>,
        role_arn: std::option::Option<std::string::String>,
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
        pub fn role_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.role_arn = Some(inp.into());
            self
        }
        pub fn set_role_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.role_arn = inp;
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
        /// Consumes the builder and constructs a [`UpdateDetectorModelInput`](crate::input::UpdateDetectorModelInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::UpdateDetectorModelInput, smithy_http::operation::BuildError> {
            Ok(crate::input::UpdateDetectorModelInput {
                detector_model_name: self.detector_model_name,
                detector_model_definition: self.detector_model_definition,
                detector_model_description: self.detector_model_description,
                role_arn: self.role_arn,
                evaluation_method: self.evaluation_method,
            })
        }
    }
}

impl UpdateDetectorModelInput {
    /// Consumes the builder and constructs an Operation<[`UpdateDetectorModel`](crate::operation::UpdateDetectorModel)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::UpdateDetectorModel, aws_http::AwsErrorRetryPolicy>,
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
            props.insert(aws_types::SigningService::from_static("iotevents"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::UpdateDetectorModel::new())
            .with_metadata(smithy_http::operation::Metadata::new("UpdateDetectorModel", "iotevents"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    fn uri_base(
        &self,
        output: &mut String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let detector_model_name = match self.detector_model_name.as_deref() {
            Some(label) if !label.is_empty() => smithy_http::label::fmt_string(label, false),
            _ => {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "detector_model_name",
                    details: "cannot be empty or unset",
                })
            }
        };
        output.push_str(&format!("/detector-models/{}", detector_model_name));
        Ok(())
    }
    /// Creates a new builder-style object to manufacture [`UpdateDetectorModelInput`](crate::input::UpdateDetectorModelInput)
    pub fn builder() -> crate::input::update_detector_model_input::Builder {
        crate::input::update_detector_model_input::Builder::default()
    }
}

/// See [`ListDetectorModelsInput`](crate::input::ListDetectorModelsInput)
pub mod list_detector_models_input {
    /// A builder for [`ListDetectorModelsInput`](crate::input::ListDetectorModelsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        next_token: std::option::Option<std::string::String>,
        max_results: std::option::Option<i32>,
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
        /// Consumes the builder and constructs a [`ListDetectorModelsInput`](crate::input::ListDetectorModelsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListDetectorModelsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListDetectorModelsInput {
                next_token: self.next_token,
                max_results: self.max_results,
            })
        }
    }
}

impl ListDetectorModelsInput {
    /// Consumes the builder and constructs an Operation<[`ListDetectorModels`](crate::operation::ListDetectorModels)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListDetectorModels, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let mut uri = String::from("/detector-models");
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
            props.insert(aws_types::SigningService::from_static("iotevents"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::ListDetectorModels::new())
            .with_metadata(smithy_http::operation::Metadata::new("ListDetectorModels", "iotevents"))
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
    }
    /// Creates a new builder-style object to manufacture [`ListDetectorModelsInput`](crate::input::ListDetectorModelsInput)
    pub fn builder() -> crate::input::list_detector_models_input::Builder {
        crate::input::list_detector_models_input::Builder::default()
    }
}

/// See [`ListDetectorModelVersionsInput`](crate::input::ListDetectorModelVersionsInput)
pub mod list_detector_model_versions_input {
    /// A builder for [`ListDetectorModelVersionsInput`](crate::input::ListDetectorModelVersionsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        detector_model_name: std::option::Option<std::string::String>,
        next_token: std::option::Option<std::string::String>,
        max_results: std::option::Option<i32>,
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
        /// Consumes the builder and constructs a [`ListDetectorModelVersionsInput`](crate::input::ListDetectorModelVersionsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListDetectorModelVersionsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListDetectorModelVersionsInput {
                detector_model_name: self.detector_model_name,
                next_token: self.next_token,
                max_results: self.max_results,
            })
        }
    }
}

impl ListDetectorModelVersionsInput {
    /// Consumes the builder and constructs an Operation<[`ListDetectorModelVersions`](crate::operation::ListDetectorModelVersions)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListDetectorModelVersions, aws_http::AwsErrorRetryPolicy>,
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
            props.insert(aws_types::SigningService::from_static("iotevents"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::ListDetectorModelVersions::new())
            .with_metadata(smithy_http::operation::Metadata::new("ListDetectorModelVersions", "iotevents"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    fn uri_base(
        &self,
        output: &mut String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let detector_model_name = match self.detector_model_name.as_deref() {
            Some(label) if !label.is_empty() => smithy_http::label::fmt_string(label, false),
            _ => {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "detector_model_name",
                    details: "cannot be empty or unset",
                })
            }
        };
        output.push_str(&format!("/detector-models/{}/versions", detector_model_name));
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
    /// Creates a new builder-style object to manufacture [`ListDetectorModelVersionsInput`](crate::input::ListDetectorModelVersionsInput)
    pub fn builder() -> crate::input::list_detector_model_versions_input::Builder {
        crate::input::list_detector_model_versions_input::Builder::default()
    }
}

/// See [`DeleteDetectorModelInput`](crate::input::DeleteDetectorModelInput)
pub mod delete_detector_model_input {
    /// A builder for [`DeleteDetectorModelInput`](crate::input::DeleteDetectorModelInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        detector_model_name: std::option::Option<std::string::String>,
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
        /// Consumes the builder and constructs a [`DeleteDetectorModelInput`](crate::input::DeleteDetectorModelInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DeleteDetectorModelInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DeleteDetectorModelInput {
                detector_model_name: self.detector_model_name,
            })
        }
    }
}

impl DeleteDetectorModelInput {
    /// Consumes the builder and constructs an Operation<[`DeleteDetectorModel`](crate::operation::DeleteDetectorModel)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DeleteDetectorModel, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let mut uri = String::new();
        input.uri_base(&mut uri)?;
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
            props.insert(aws_types::SigningService::from_static("iotevents"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::DeleteDetectorModel::new())
            .with_metadata(smithy_http::operation::Metadata::new("DeleteDetectorModel", "iotevents"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    fn uri_base(
        &self,
        output: &mut String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let detector_model_name = match self.detector_model_name.as_deref() {
            Some(label) if !label.is_empty() => smithy_http::label::fmt_string(label, false),
            _ => {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "detector_model_name",
                    details: "cannot be empty or unset",
                })
            }
        };
        output.push_str(&format!("/detector-models/{}", detector_model_name));
        Ok(())
    }
    /// Creates a new builder-style object to manufacture [`DeleteDetectorModelInput`](crate::input::DeleteDetectorModelInput)
    pub fn builder() -> crate::input::delete_detector_model_input::Builder {
        crate::input::delete_detector_model_input::Builder::default()
    }
}

/// See [`DescribeLoggingOptionsInput`](crate::input::DescribeLoggingOptionsInput)
pub mod describe_logging_options_input {
    /// A builder for [`DescribeLoggingOptionsInput`](crate::input::DescribeLoggingOptionsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
    }
    impl Builder {
        /// Consumes the builder and constructs a [`DescribeLoggingOptionsInput`](crate::input::DescribeLoggingOptionsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeLoggingOptionsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DescribeLoggingOptionsInput {
            })
        }
    }
}

impl DescribeLoggingOptionsInput {
    /// Consumes the builder and constructs an Operation<[`DescribeLoggingOptions`](crate::operation::DescribeLoggingOptions)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DescribeLoggingOptions, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let uri = String::from("/logging");
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
            props.insert(aws_types::SigningService::from_static("iotevents"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::DescribeLoggingOptions::new())
            .with_metadata(smithy_http::operation::Metadata::new("DescribeLoggingOptions", "iotevents"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`DescribeLoggingOptionsInput`](crate::input::DescribeLoggingOptionsInput)
    pub fn builder() -> crate::input::describe_logging_options_input::Builder {
        crate::input::describe_logging_options_input::Builder::default()
    }
}

/// See [`PutLoggingOptionsInput`](crate::input::PutLoggingOptionsInput)
pub mod put_logging_options_input {
    /// A builder for [`PutLoggingOptionsInput`](crate::input::PutLoggingOptionsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        logging_options: std::option::Option<crate::model::LoggingOptions>,
    }
    impl Builder {
        pub fn logging_options(mut self, inp: crate::model::LoggingOptions) -> Self {
            self.logging_options = Some(inp);
            self
        }
        pub fn set_logging_options(
            mut self,
            inp: std::option::Option<crate::model::LoggingOptions>,
        ) -> Self {
            self.logging_options = inp;
            self
        }
        /// Consumes the builder and constructs a [`PutLoggingOptionsInput`](crate::input::PutLoggingOptionsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::PutLoggingOptionsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::PutLoggingOptionsInput {
                logging_options: self.logging_options,
            })
        }
    }
}

impl PutLoggingOptionsInput {
    /// Consumes the builder and constructs an Operation<[`PutLoggingOptions`](crate::operation::PutLoggingOptions)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::PutLoggingOptions, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let uri = String::from("/logging");
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
            props.insert(aws_types::SigningService::from_static("iotevents"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::PutLoggingOptions::new())
            .with_metadata(smithy_http::operation::Metadata::new("PutLoggingOptions", "iotevents"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`PutLoggingOptionsInput`](crate::input::PutLoggingOptionsInput)
    pub fn builder() -> crate::input::put_logging_options_input::Builder {
        crate::input::put_logging_options_input::Builder::default()
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
        let mut uri = String::from("/tags");
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
            props.insert(aws_types::SigningService::from_static("iotevents"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::ListTagsForResource::new())
            .with_metadata(smithy_http::operation::Metadata::new("ListTagsForResource", "iotevents"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    fn uri_query(&self, output: &mut String) {
        let mut query = smithy_http::query::Writer::new(output);
        if let Some(inner_1) = &self.resource_arn {
            query.push_kv("resourceArn", &smithy_http::query::fmt_string(inner_1));
        }
    }
    /// Creates a new builder-style object to manufacture [`ListTagsForResourceInput`](crate::input::ListTagsForResourceInput)
    pub fn builder() -> crate::input::list_tags_for_resource_input::Builder {
        crate::input::list_tags_for_resource_input::Builder::default()
    }
}

/// See [`TagResourceInput`](crate::input::TagResourceInput)
pub mod tag_resource_input {
    /// A builder for [`TagResourceInput`](crate::input::TagResourceInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        resource_arn: std::option::Option<std::string::String>,
        tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
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
        pub fn tags(mut self, inp: impl Into<crate::model::Tag>) -> Self {
            let mut v = self.tags.unwrap_or_default();
            v.push(inp.into());
            self.tags = Some(v);
            self
        }
        pub fn set_tags(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::Tag>>,
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
        let mut uri = String::from("/tags");
        input.uri_query(&mut uri);
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
            props.insert(aws_types::SigningService::from_static("iotevents"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::TagResource::new())
            .with_metadata(smithy_http::operation::Metadata::new("TagResource", "iotevents"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    fn uri_query(&self, output: &mut String) {
        let mut query = smithy_http::query::Writer::new(output);
        if let Some(inner_1) = &self.resource_arn {
            query.push_kv("resourceArn", &smithy_http::query::fmt_string(inner_1));
        }
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
        let mut uri = String::from("/tags");
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
            props.insert(aws_types::SigningService::from_static("iotevents"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::UntagResource::new())
            .with_metadata(smithy_http::operation::Metadata::new("UntagResource", "iotevents"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    fn uri_query(&self, output: &mut String) {
        let mut query = smithy_http::query::Writer::new(output);
        if let Some(inner_1) = &self.resource_arn {
            query.push_kv("resourceArn", &smithy_http::query::fmt_string(inner_1));
        }
        if let Some(inner_2) = &self.tag_keys {
            for inner_101 in inner_2 {
                query.push_kv("tagKeys", &smithy_http::query::fmt_string(inner_101));
            }
        }
    }
    /// Creates a new builder-style object to manufacture [`UntagResourceInput`](crate::input::UntagResourceInput)
    pub fn builder() -> crate::input::untag_resource_input::Builder {
        crate::input::untag_resource_input::Builder::default()
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
pub struct CreateInputInput {
    #[serde(rename = "inputName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub input_name: std::option::Option<std::string::String>,
    #[serde(rename = "inputDescription")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub input_description: std::option::Option<std::string::String>,
    #[serde(rename = "inputDefinition")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub input_definition: std::option::Option<crate::model::InputDefinition>,
    #[serde(rename = "tags")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct DescribeInputInput {
    #[serde(skip)]
    pub input_name: std::option::Option<std::string::String>,
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct ListInputsInput {
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
pub struct UpdateInputInput {
    #[serde(skip)]
    pub input_name: std::option::Option<std::string::String>,
    #[serde(rename = "inputDescription")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub input_description: std::option::Option<std::string::String>,
    #[serde(rename = "inputDefinition")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub input_definition: std::option::Option<crate::model::InputDefinition>,
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct DeleteInputInput {
    #[serde(skip)]
    pub input_name: std::option::Option<std::string::String>,
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct CreateDetectorModelInput {
    #[serde(rename = "detectorModelName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub detector_model_name: std::option::Option<std::string::String>,
    #[serde(rename = "detectorModelDefinition")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub detector_model_definition: std::option::Option<crate::model::DetectorModelDefinition>,
    #[serde(rename = "detectorModelDescription")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub detector_model_description: std::option::Option<std::string::String>,
    #[serde(rename = "key")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub key: std::option::Option<std::string::String>,
    #[serde(rename = "roleArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub role_arn: std::option::Option<std::string::String>,
    #[serde(rename = "tags")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    #[serde(rename = "evaluationMethod")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub evaluation_method: std::option::Option<crate::model::EvaluationMethod>,
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct DescribeDetectorModelInput {
    #[serde(skip)]
    pub detector_model_name: std::option::Option<std::string::String>,
    #[serde(skip)]
    pub detector_model_version: std::option::Option<std::string::String>,
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct UpdateDetectorModelInput {
    #[serde(skip)]
    pub detector_model_name: std::option::Option<std::string::String>,
    #[serde(rename = "detectorModelDefinition")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub detector_model_definition: std::option::Option<crate::model::DetectorModelDefinition>,
    #[serde(rename = "detectorModelDescription")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub detector_model_description: std::option::Option<std::string::String>,
    #[serde(rename = "roleArn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub role_arn: std::option::Option<std::string::String>,
    #[serde(rename = "evaluationMethod")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub evaluation_method: std::option::Option<crate::model::EvaluationMethod>,
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct ListDetectorModelsInput {
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
pub struct ListDetectorModelVersionsInput {
    #[serde(skip)]
    pub detector_model_name: std::option::Option<std::string::String>,
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
pub struct DeleteDetectorModelInput {
    #[serde(skip)]
    pub detector_model_name: std::option::Option<std::string::String>,
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct DescribeLoggingOptionsInput {
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct PutLoggingOptionsInput {
    #[serde(rename = "loggingOptions")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub logging_options: std::option::Option<crate::model::LoggingOptions>,
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
pub struct TagResourceInput {
    #[serde(skip)]
    pub resource_arn: std::option::Option<std::string::String>,
    #[serde(rename = "tags")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
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
