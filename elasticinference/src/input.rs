/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// See [`DescribeAcceleratorOfferingsInput`](crate::input::DescribeAcceleratorOfferingsInput)
pub mod describe_accelerator_offerings_input {
    /// A builder for [`DescribeAcceleratorOfferingsInput`](crate::input::DescribeAcceleratorOfferingsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        location_type: std::option::Option<crate::model::LocationType>,
        accelerator_types: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        pub fn location_type(mut self, inp: crate::model::LocationType) -> Self {
            self.location_type = Some(inp);
            self
        }
        pub fn set_location_type(
            mut self,
            inp: std::option::Option<crate::model::LocationType>,
        ) -> Self {
            self.location_type = inp;
            self
        }
        pub fn accelerator_types(mut self, inp: impl Into<std::string::String>) -> Self {
            let mut v = self.accelerator_types.unwrap_or_default();
            v.push(inp.into());
            self.accelerator_types = Some(v);
            self
        }
        pub fn set_accelerator_types(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.accelerator_types = inp;
            self
        }
        /// Consumes the builder and constructs a [`DescribeAcceleratorOfferingsInput`](crate::input::DescribeAcceleratorOfferingsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeAcceleratorOfferingsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DescribeAcceleratorOfferingsInput {
                location_type: self.location_type,
                accelerator_types: self.accelerator_types,
            })
        }
    }
}

impl DescribeAcceleratorOfferingsInput {
    /// Consumes the builder and constructs an Operation<[`DescribeAcceleratorOfferings`](crate::operation::DescribeAcceleratorOfferings)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DescribeAcceleratorOfferings, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let uri = String::from("/describe-accelerator-offerings");
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
            props.insert(aws_types::SigningService::from_static("elastic-inference"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::DescribeAcceleratorOfferings::new())
            .with_metadata(smithy_http::operation::Metadata::new("DescribeAcceleratorOfferings", "elasticinference"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`DescribeAcceleratorOfferingsInput`](crate::input::DescribeAcceleratorOfferingsInput)
    pub fn builder() -> crate::input::describe_accelerator_offerings_input::Builder {
        crate::input::describe_accelerator_offerings_input::Builder::default()
    }
}

/// See [`DescribeAcceleratorTypesInput`](crate::input::DescribeAcceleratorTypesInput)
pub mod describe_accelerator_types_input {
    /// A builder for [`DescribeAcceleratorTypesInput`](crate::input::DescribeAcceleratorTypesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
    }
    impl Builder {
        /// Consumes the builder and constructs a [`DescribeAcceleratorTypesInput`](crate::input::DescribeAcceleratorTypesInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeAcceleratorTypesInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DescribeAcceleratorTypesInput {
            })
        }
    }
}

impl DescribeAcceleratorTypesInput {
    /// Consumes the builder and constructs an Operation<[`DescribeAcceleratorTypes`](crate::operation::DescribeAcceleratorTypes)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DescribeAcceleratorTypes, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let uri = String::from("/describe-accelerator-types");
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
            props.insert(aws_types::SigningService::from_static("elastic-inference"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::DescribeAcceleratorTypes::new())
            .with_metadata(smithy_http::operation::Metadata::new("DescribeAcceleratorTypes", "elasticinference"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`DescribeAcceleratorTypesInput`](crate::input::DescribeAcceleratorTypesInput)
    pub fn builder() -> crate::input::describe_accelerator_types_input::Builder {
        crate::input::describe_accelerator_types_input::Builder::default()
    }
}

/// See [`DescribeAcceleratorsInput`](crate::input::DescribeAcceleratorsInput)
pub mod describe_accelerators_input {
    /// A builder for [`DescribeAcceleratorsInput`](crate::input::DescribeAcceleratorsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        accelerator_ids: std::option::Option<std::vec::Vec<std::string::String>>,
        filters: std::option::Option<std::vec::Vec<crate::model::Filter>>,
        max_results: std::option::Option<i32>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn accelerator_ids(mut self, inp: impl Into<std::string::String>) -> Self {
            let mut v = self.accelerator_ids.unwrap_or_default();
            v.push(inp.into());
            self.accelerator_ids = Some(v);
            self
        }
        pub fn set_accelerator_ids(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.accelerator_ids = inp;
            self
        }
        pub fn filters(mut self, inp: impl Into<crate::model::Filter>) -> Self {
            let mut v = self.filters.unwrap_or_default();
            v.push(inp.into());
            self.filters = Some(v);
            self
        }
        pub fn set_filters(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::Filter>>,
        ) -> Self {
            self.filters = inp;
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
        /// Consumes the builder and constructs a [`DescribeAcceleratorsInput`](crate::input::DescribeAcceleratorsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeAcceleratorsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DescribeAcceleratorsInput {
                accelerator_ids: self.accelerator_ids,
                filters: self.filters,
                max_results: self.max_results,
                next_token: self.next_token,
            })
        }
    }
}

impl DescribeAcceleratorsInput {
    /// Consumes the builder and constructs an Operation<[`DescribeAccelerators`](crate::operation::DescribeAccelerators)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DescribeAccelerators, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let uri = String::from("/describe-accelerators");
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
            props.insert(aws_types::SigningService::from_static("elastic-inference"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::DescribeAccelerators::new())
            .with_metadata(smithy_http::operation::Metadata::new("DescribeAccelerators", "elasticinference"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`DescribeAcceleratorsInput`](crate::input::DescribeAcceleratorsInput)
    pub fn builder() -> crate::input::describe_accelerators_input::Builder {
        crate::input::describe_accelerators_input::Builder::default()
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
            props.insert(aws_types::SigningService::from_static("elastic-inference"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::ListTagsForResource::new())
            .with_metadata(smithy_http::operation::Metadata::new("ListTagsForResource", "elasticinference"))
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
            props.insert(aws_types::SigningService::from_static("elastic-inference"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::TagResource::new())
            .with_metadata(smithy_http::operation::Metadata::new("TagResource", "elasticinference"))
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
            props.insert(aws_types::SigningService::from_static("elastic-inference"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::UntagResource::new())
            .with_metadata(smithy_http::operation::Metadata::new("UntagResource", "elasticinference"))
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

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct DescribeAcceleratorOfferingsInput {
    #[serde(rename = "locationType")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub location_type: std::option::Option<crate::model::LocationType>,
    #[serde(rename = "acceleratorTypes")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub accelerator_types: std::option::Option<std::vec::Vec<std::string::String>>,
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct DescribeAcceleratorTypesInput {
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct DescribeAcceleratorsInput {
    #[serde(rename = "acceleratorIds")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub accelerator_ids: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "filters")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub filters: std::option::Option<std::vec::Vec<crate::model::Filter>>,
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
