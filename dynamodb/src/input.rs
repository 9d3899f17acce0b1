/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// See [`BatchGetItemInput`](crate::input::BatchGetItemInput)
pub mod batch_get_item_input {
    /// A builder for [`BatchGetItemInput`](crate::input::BatchGetItemInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        request_items:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::KeysAndAttributes>>,
        return_consumed_capacity: std::option::Option<crate::model::ReturnConsumedCapacity>,
    }
    impl Builder {
        pub fn request_items(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::KeysAndAttributes>,
        ) -> Self {
            let mut hash_map = self.request_items.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.request_items = Some(hash_map);
            self
        }
        pub fn set_request_items(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::KeysAndAttributes>>,
        ) -> Self {
            self.request_items = inp;
            self
        }
        pub fn return_consumed_capacity(
            mut self,
            inp: crate::model::ReturnConsumedCapacity,
        ) -> Self {
            self.return_consumed_capacity = Some(inp);
            self
        }
        pub fn set_return_consumed_capacity(
            mut self,
            inp: std::option::Option<crate::model::ReturnConsumedCapacity>,
        ) -> Self {
            self.return_consumed_capacity = inp;
            self
        }
        /// Consumes the builder and constructs a [`BatchGetItemInput`](crate::input::BatchGetItemInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::BatchGetItemInput, smithy_http::operation::BuildError> {
            Ok(crate::input::BatchGetItemInput {
                request_items: self.request_items,
                return_consumed_capacity: self.return_consumed_capacity,
            })
        }
    }
}

impl BatchGetItemInput {
    /// Consumes the builder and constructs an Operation<[`BatchGetItem`](crate::operation::BatchGetItem)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::BatchGetItem, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let body = smithy_json::to_body(&input)
            .map_err(|err| smithy_http::operation::BuildError::SerializationError(err.into()))?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.0")
            .header("x-amz-target", "DynamoDB_20120810.BatchGetItem")
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
            props.insert(aws_types::SigningService::from_static("dynamodb"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::BatchGetItem::new())
            .with_metadata(smithy_http::operation::Metadata::new("BatchGetItem", "dynamodb"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`BatchGetItemInput`](crate::input::BatchGetItemInput)
    pub fn builder() -> crate::input::batch_get_item_input::Builder {
        crate::input::batch_get_item_input::Builder::default()
    }
}

/// See [`BatchWriteItemInput`](crate::input::BatchWriteItemInput)
pub mod batch_write_item_input {
    /// A builder for [`BatchWriteItemInput`](crate::input::BatchWriteItemInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        request_items:
            std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<crate::model::WriteRequest>>>,
        return_consumed_capacity: std::option::Option<crate::model::ReturnConsumedCapacity>,
        return_item_collection_metrics:
            std::option::Option<crate::model::ReturnItemCollectionMetrics>,
    }
    impl Builder {
        pub fn request_items(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::vec::Vec<crate::model::WriteRequest>>,
        ) -> Self {
            let mut hash_map = self.request_items.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.request_items = Some(hash_map);
            self
        }
        pub fn set_request_items(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<crate::model::WriteRequest>>>,
        ) -> Self {
            self.request_items = inp;
            self
        }
        pub fn return_consumed_capacity(
            mut self,
            inp: crate::model::ReturnConsumedCapacity,
        ) -> Self {
            self.return_consumed_capacity = Some(inp);
            self
        }
        pub fn set_return_consumed_capacity(
            mut self,
            inp: std::option::Option<crate::model::ReturnConsumedCapacity>,
        ) -> Self {
            self.return_consumed_capacity = inp;
            self
        }
        pub fn return_item_collection_metrics(
            mut self,
            inp: crate::model::ReturnItemCollectionMetrics,
        ) -> Self {
            self.return_item_collection_metrics = Some(inp);
            self
        }
        pub fn set_return_item_collection_metrics(
            mut self,
            inp: std::option::Option<crate::model::ReturnItemCollectionMetrics>,
        ) -> Self {
            self.return_item_collection_metrics = inp;
            self
        }
        /// Consumes the builder and constructs a [`BatchWriteItemInput`](crate::input::BatchWriteItemInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::BatchWriteItemInput, smithy_http::operation::BuildError> {
            Ok(crate::input::BatchWriteItemInput {
                request_items: self.request_items,
                return_consumed_capacity: self.return_consumed_capacity,
                return_item_collection_metrics: self.return_item_collection_metrics,
            })
        }
    }
}

impl BatchWriteItemInput {
    /// Consumes the builder and constructs an Operation<[`BatchWriteItem`](crate::operation::BatchWriteItem)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::BatchWriteItem, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let body = smithy_json::to_body(&input)
            .map_err(|err| smithy_http::operation::BuildError::SerializationError(err.into()))?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.0")
            .header("x-amz-target", "DynamoDB_20120810.BatchWriteItem")
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
            props.insert(aws_types::SigningService::from_static("dynamodb"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::BatchWriteItem::new())
            .with_metadata(smithy_http::operation::Metadata::new("BatchWriteItem", "dynamodb"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`BatchWriteItemInput`](crate::input::BatchWriteItemInput)
    pub fn builder() -> crate::input::batch_write_item_input::Builder {
        crate::input::batch_write_item_input::Builder::default()
    }
}

/// See [`CreateTableInput`](crate::input::CreateTableInput)
pub mod create_table_input {
    /// A builder for [`CreateTableInput`](crate::input::CreateTableInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        attribute_definitions:
            std::option::Option<std::vec::Vec<crate::model::AttributeDefinition>>,
        table_name: std::option::Option<std::string::String>,
        key_schema: std::option::Option<std::vec::Vec<crate::model::KeySchemaElement>>,
        local_secondary_indexes:
            std::option::Option<std::vec::Vec<crate::model::LocalSecondaryIndex>>,
        global_secondary_indexes:
            std::option::Option<std::vec::Vec<crate::model::GlobalSecondaryIndex>>,
        billing_mode: std::option::Option<crate::model::BillingMode>,
        provisioned_throughput: std::option::Option<crate::model::ProvisionedThroughput>,
        stream_specification: std::option::Option<crate::model::StreamSpecification>,
        sse_specification: std::option::Option<crate::model::SseSpecification>,
        tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
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
        pub fn local_secondary_indexes(
            mut self,
            inp: impl Into<crate::model::LocalSecondaryIndex>,
        ) -> Self {
            let mut v = self.local_secondary_indexes.unwrap_or_default();
            v.push(inp.into());
            self.local_secondary_indexes = Some(v);
            self
        }
        pub fn set_local_secondary_indexes(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::LocalSecondaryIndex>>,
        ) -> Self {
            self.local_secondary_indexes = inp;
            self
        }
        pub fn global_secondary_indexes(
            mut self,
            inp: impl Into<crate::model::GlobalSecondaryIndex>,
        ) -> Self {
            let mut v = self.global_secondary_indexes.unwrap_or_default();
            v.push(inp.into());
            self.global_secondary_indexes = Some(v);
            self
        }
        pub fn set_global_secondary_indexes(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::GlobalSecondaryIndex>>,
        ) -> Self {
            self.global_secondary_indexes = inp;
            self
        }
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
        pub fn sse_specification(mut self, inp: crate::model::SseSpecification) -> Self {
            self.sse_specification = Some(inp);
            self
        }
        pub fn set_sse_specification(
            mut self,
            inp: std::option::Option<crate::model::SseSpecification>,
        ) -> Self {
            self.sse_specification = inp;
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
        /// Consumes the builder and constructs a [`CreateTableInput`](crate::input::CreateTableInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::CreateTableInput, smithy_http::operation::BuildError> {
            Ok(crate::input::CreateTableInput {
                attribute_definitions: self.attribute_definitions,
                table_name: self.table_name,
                key_schema: self.key_schema,
                local_secondary_indexes: self.local_secondary_indexes,
                global_secondary_indexes: self.global_secondary_indexes,
                billing_mode: self.billing_mode,
                provisioned_throughput: self.provisioned_throughput,
                stream_specification: self.stream_specification,
                sse_specification: self.sse_specification,
                tags: self.tags,
            })
        }
    }
}

impl CreateTableInput {
    /// Consumes the builder and constructs an Operation<[`CreateTable`](crate::operation::CreateTable)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::CreateTable, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let body = smithy_json::to_body(&input)
            .map_err(|err| smithy_http::operation::BuildError::SerializationError(err.into()))?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.0")
            .header("x-amz-target", "DynamoDB_20120810.CreateTable")
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
            props.insert(aws_types::SigningService::from_static("dynamodb"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::CreateTable::new())
            .with_metadata(smithy_http::operation::Metadata::new("CreateTable", "dynamodb"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`CreateTableInput`](crate::input::CreateTableInput)
    pub fn builder() -> crate::input::create_table_input::Builder {
        crate::input::create_table_input::Builder::default()
    }
}

/// See [`DeleteItemInput`](crate::input::DeleteItemInput)
pub mod delete_item_input {
    /// A builder for [`DeleteItemInput`](crate::input::DeleteItemInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        table_name: std::option::Option<std::string::String>,
        key:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        expected:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::ExpectedAttributeValue>>,
        conditional_operator: std::option::Option<crate::model::ConditionalOperator>,
        return_values: std::option::Option<crate::model::ReturnValue>,
        return_consumed_capacity: std::option::Option<crate::model::ReturnConsumedCapacity>,
        return_item_collection_metrics:
            std::option::Option<crate::model::ReturnItemCollectionMetrics>,
        condition_expression: std::option::Option<std::string::String>,
        expression_attribute_names:
            std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        expression_attribute_values:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
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
        pub fn expected(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::ExpectedAttributeValue>,
        ) -> Self {
            let mut hash_map = self.expected.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.expected = Some(hash_map);
            self
        }
        pub fn set_expected(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::ExpectedAttributeValue>>,
        ) -> Self {
            self.expected = inp;
            self
        }
        pub fn conditional_operator(mut self, inp: crate::model::ConditionalOperator) -> Self {
            self.conditional_operator = Some(inp);
            self
        }
        pub fn set_conditional_operator(
            mut self,
            inp: std::option::Option<crate::model::ConditionalOperator>,
        ) -> Self {
            self.conditional_operator = inp;
            self
        }
        pub fn return_values(mut self, inp: crate::model::ReturnValue) -> Self {
            self.return_values = Some(inp);
            self
        }
        pub fn set_return_values(
            mut self,
            inp: std::option::Option<crate::model::ReturnValue>,
        ) -> Self {
            self.return_values = inp;
            self
        }
        pub fn return_consumed_capacity(
            mut self,
            inp: crate::model::ReturnConsumedCapacity,
        ) -> Self {
            self.return_consumed_capacity = Some(inp);
            self
        }
        pub fn set_return_consumed_capacity(
            mut self,
            inp: std::option::Option<crate::model::ReturnConsumedCapacity>,
        ) -> Self {
            self.return_consumed_capacity = inp;
            self
        }
        pub fn return_item_collection_metrics(
            mut self,
            inp: crate::model::ReturnItemCollectionMetrics,
        ) -> Self {
            self.return_item_collection_metrics = Some(inp);
            self
        }
        pub fn set_return_item_collection_metrics(
            mut self,
            inp: std::option::Option<crate::model::ReturnItemCollectionMetrics>,
        ) -> Self {
            self.return_item_collection_metrics = inp;
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
        /// Consumes the builder and constructs a [`DeleteItemInput`](crate::input::DeleteItemInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DeleteItemInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DeleteItemInput {
                table_name: self.table_name,
                key: self.key,
                expected: self.expected,
                conditional_operator: self.conditional_operator,
                return_values: self.return_values,
                return_consumed_capacity: self.return_consumed_capacity,
                return_item_collection_metrics: self.return_item_collection_metrics,
                condition_expression: self.condition_expression,
                expression_attribute_names: self.expression_attribute_names,
                expression_attribute_values: self.expression_attribute_values,
            })
        }
    }
}

impl DeleteItemInput {
    /// Consumes the builder and constructs an Operation<[`DeleteItem`](crate::operation::DeleteItem)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DeleteItem, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let body = smithy_json::to_body(&input)
            .map_err(|err| smithy_http::operation::BuildError::SerializationError(err.into()))?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.0")
            .header("x-amz-target", "DynamoDB_20120810.DeleteItem")
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
            props.insert(aws_types::SigningService::from_static("dynamodb"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::DeleteItem::new())
            .with_metadata(smithy_http::operation::Metadata::new("DeleteItem", "dynamodb"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`DeleteItemInput`](crate::input::DeleteItemInput)
    pub fn builder() -> crate::input::delete_item_input::Builder {
        crate::input::delete_item_input::Builder::default()
    }
}

/// See [`DeleteTableInput`](crate::input::DeleteTableInput)
pub mod delete_table_input {
    /// A builder for [`DeleteTableInput`](crate::input::DeleteTableInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        table_name: std::option::Option<std::string::String>,
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
        /// Consumes the builder and constructs a [`DeleteTableInput`](crate::input::DeleteTableInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DeleteTableInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DeleteTableInput {
                table_name: self.table_name,
            })
        }
    }
}

impl DeleteTableInput {
    /// Consumes the builder and constructs an Operation<[`DeleteTable`](crate::operation::DeleteTable)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DeleteTable, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let body = smithy_json::to_body(&input)
            .map_err(|err| smithy_http::operation::BuildError::SerializationError(err.into()))?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.0")
            .header("x-amz-target", "DynamoDB_20120810.DeleteTable")
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
            props.insert(aws_types::SigningService::from_static("dynamodb"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::DeleteTable::new())
            .with_metadata(smithy_http::operation::Metadata::new("DeleteTable", "dynamodb"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`DeleteTableInput`](crate::input::DeleteTableInput)
    pub fn builder() -> crate::input::delete_table_input::Builder {
        crate::input::delete_table_input::Builder::default()
    }
}

/// See [`DescribeTableInput`](crate::input::DescribeTableInput)
pub mod describe_table_input {
    /// A builder for [`DescribeTableInput`](crate::input::DescribeTableInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        table_name: std::option::Option<std::string::String>,
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
        /// Consumes the builder and constructs a [`DescribeTableInput`](crate::input::DescribeTableInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeTableInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DescribeTableInput {
                table_name: self.table_name,
            })
        }
    }
}

impl DescribeTableInput {
    /// Consumes the builder and constructs an Operation<[`DescribeTable`](crate::operation::DescribeTable)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DescribeTable, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let body = smithy_json::to_body(&input)
            .map_err(|err| smithy_http::operation::BuildError::SerializationError(err.into()))?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.0")
            .header("x-amz-target", "DynamoDB_20120810.DescribeTable")
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
            props.insert(aws_types::SigningService::from_static("dynamodb"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::DescribeTable::new())
            .with_metadata(smithy_http::operation::Metadata::new("DescribeTable", "dynamodb"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`DescribeTableInput`](crate::input::DescribeTableInput)
    pub fn builder() -> crate::input::describe_table_input::Builder {
        crate::input::describe_table_input::Builder::default()
    }
}

/// See [`DescribeLimitsInput`](crate::input::DescribeLimitsInput)
pub mod describe_limits_input {
    /// A builder for [`DescribeLimitsInput`](crate::input::DescribeLimitsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
    }
    impl Builder {
        /// Consumes the builder and constructs a [`DescribeLimitsInput`](crate::input::DescribeLimitsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeLimitsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DescribeLimitsInput {
            })
        }
    }
}

impl DescribeLimitsInput {
    /// Consumes the builder and constructs an Operation<[`DescribeLimits`](crate::operation::DescribeLimits)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DescribeLimits, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let body = smithy_json::to_body(&input)
            .map_err(|err| smithy_http::operation::BuildError::SerializationError(err.into()))?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.0")
            .header("x-amz-target", "DynamoDB_20120810.DescribeLimits")
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
            props.insert(aws_types::SigningService::from_static("dynamodb"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::DescribeLimits::new())
            .with_metadata(smithy_http::operation::Metadata::new("DescribeLimits", "dynamodb"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`DescribeLimitsInput`](crate::input::DescribeLimitsInput)
    pub fn builder() -> crate::input::describe_limits_input::Builder {
        crate::input::describe_limits_input::Builder::default()
    }
}

/// See [`DescribeTimeToLiveInput`](crate::input::DescribeTimeToLiveInput)
pub mod describe_time_to_live_input {
    /// A builder for [`DescribeTimeToLiveInput`](crate::input::DescribeTimeToLiveInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        table_name: std::option::Option<std::string::String>,
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
        /// Consumes the builder and constructs a [`DescribeTimeToLiveInput`](crate::input::DescribeTimeToLiveInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeTimeToLiveInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DescribeTimeToLiveInput {
                table_name: self.table_name,
            })
        }
    }
}

impl DescribeTimeToLiveInput {
    /// Consumes the builder and constructs an Operation<[`DescribeTimeToLive`](crate::operation::DescribeTimeToLive)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DescribeTimeToLive, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let body = smithy_json::to_body(&input)
            .map_err(|err| smithy_http::operation::BuildError::SerializationError(err.into()))?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.0")
            .header("x-amz-target", "DynamoDB_20120810.DescribeTimeToLive")
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
            props.insert(aws_types::SigningService::from_static("dynamodb"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::DescribeTimeToLive::new())
            .with_metadata(smithy_http::operation::Metadata::new("DescribeTimeToLive", "dynamodb"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`DescribeTimeToLiveInput`](crate::input::DescribeTimeToLiveInput)
    pub fn builder() -> crate::input::describe_time_to_live_input::Builder {
        crate::input::describe_time_to_live_input::Builder::default()
    }
}

/// See [`GetItemInput`](crate::input::GetItemInput)
pub mod get_item_input {
    /// A builder for [`GetItemInput`](crate::input::GetItemInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        table_name: std::option::Option<std::string::String>,
        key:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        attributes_to_get: std::option::Option<std::vec::Vec<std::string::String>>,
        consistent_read: std::option::Option<bool>,
        return_consumed_capacity: std::option::Option<crate::model::ReturnConsumedCapacity>,
        projection_expression: std::option::Option<std::string::String>,
        expression_attribute_names:
            std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
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
        pub fn return_consumed_capacity(
            mut self,
            inp: crate::model::ReturnConsumedCapacity,
        ) -> Self {
            self.return_consumed_capacity = Some(inp);
            self
        }
        pub fn set_return_consumed_capacity(
            mut self,
            inp: std::option::Option<crate::model::ReturnConsumedCapacity>,
        ) -> Self {
            self.return_consumed_capacity = inp;
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
        /// Consumes the builder and constructs a [`GetItemInput`](crate::input::GetItemInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetItemInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetItemInput {
                table_name: self.table_name,
                key: self.key,
                attributes_to_get: self.attributes_to_get,
                consistent_read: self.consistent_read,
                return_consumed_capacity: self.return_consumed_capacity,
                projection_expression: self.projection_expression,
                expression_attribute_names: self.expression_attribute_names,
            })
        }
    }
}

impl GetItemInput {
    /// Consumes the builder and constructs an Operation<[`GetItem`](crate::operation::GetItem)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetItem, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let body = smithy_json::to_body(&input)
            .map_err(|err| smithy_http::operation::BuildError::SerializationError(err.into()))?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.0")
            .header("x-amz-target", "DynamoDB_20120810.GetItem")
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
            props.insert(aws_types::SigningService::from_static("dynamodb"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::GetItem::new())
            .with_metadata(smithy_http::operation::Metadata::new("GetItem", "dynamodb"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`GetItemInput`](crate::input::GetItemInput)
    pub fn builder() -> crate::input::get_item_input::Builder {
        crate::input::get_item_input::Builder::default()
    }
}

/// See [`ListTablesInput`](crate::input::ListTablesInput)
pub mod list_tables_input {
    /// A builder for [`ListTablesInput`](crate::input::ListTablesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        exclusive_start_table_name: std::option::Option<std::string::String>,
        limit: std::option::Option<i32>,
    }
    impl Builder {
        /// The first table name that this operation will evaluate. Use the value that was returned for `LastEvaluatedTableName` in a previous operation, so that you can obtain the next page of results.
        pub fn exclusive_start_table_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.exclusive_start_table_name = Some(inp.into());
            self
        }
        pub fn set_exclusive_start_table_name(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.exclusive_start_table_name = inp;
            self
        }
        pub fn limit(mut self, inp: i32) -> Self {
            self.limit = Some(inp);
            self
        }
        pub fn set_limit(mut self, inp: std::option::Option<i32>) -> Self {
            self.limit = inp;
            self
        }
        /// Consumes the builder and constructs a [`ListTablesInput`](crate::input::ListTablesInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListTablesInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListTablesInput {
                exclusive_start_table_name: self.exclusive_start_table_name,
                limit: self.limit,
            })
        }
    }
}

impl ListTablesInput {
    /// Consumes the builder and constructs an Operation<[`ListTables`](crate::operation::ListTables)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListTables, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let body = smithy_json::to_body(&input)
            .map_err(|err| smithy_http::operation::BuildError::SerializationError(err.into()))?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.0")
            .header("x-amz-target", "DynamoDB_20120810.ListTables")
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
            props.insert(aws_types::SigningService::from_static("dynamodb"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::ListTables::new())
            .with_metadata(smithy_http::operation::Metadata::new("ListTables", "dynamodb"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`ListTablesInput`](crate::input::ListTablesInput)
    pub fn builder() -> crate::input::list_tables_input::Builder {
        crate::input::list_tables_input::Builder::default()
    }
}

/// See [`PutItemInput`](crate::input::PutItemInput)
pub mod put_item_input {
    /// A builder for [`PutItemInput`](crate::input::PutItemInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        table_name: std::option::Option<std::string::String>,
        item:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        expected:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::ExpectedAttributeValue>>,
        return_values: std::option::Option<crate::model::ReturnValue>,
        return_consumed_capacity: std::option::Option<crate::model::ReturnConsumedCapacity>,
        return_item_collection_metrics:
            std::option::Option<crate::model::ReturnItemCollectionMetrics>,
        conditional_operator: std::option::Option<crate::model::ConditionalOperator>,
        condition_expression: std::option::Option<std::string::String>,
        expression_attribute_names:
            std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        expression_attribute_values:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
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
        pub fn expected(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::ExpectedAttributeValue>,
        ) -> Self {
            let mut hash_map = self.expected.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.expected = Some(hash_map);
            self
        }
        pub fn set_expected(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::ExpectedAttributeValue>>,
        ) -> Self {
            self.expected = inp;
            self
        }
        pub fn return_values(mut self, inp: crate::model::ReturnValue) -> Self {
            self.return_values = Some(inp);
            self
        }
        pub fn set_return_values(
            mut self,
            inp: std::option::Option<crate::model::ReturnValue>,
        ) -> Self {
            self.return_values = inp;
            self
        }
        pub fn return_consumed_capacity(
            mut self,
            inp: crate::model::ReturnConsumedCapacity,
        ) -> Self {
            self.return_consumed_capacity = Some(inp);
            self
        }
        pub fn set_return_consumed_capacity(
            mut self,
            inp: std::option::Option<crate::model::ReturnConsumedCapacity>,
        ) -> Self {
            self.return_consumed_capacity = inp;
            self
        }
        pub fn return_item_collection_metrics(
            mut self,
            inp: crate::model::ReturnItemCollectionMetrics,
        ) -> Self {
            self.return_item_collection_metrics = Some(inp);
            self
        }
        pub fn set_return_item_collection_metrics(
            mut self,
            inp: std::option::Option<crate::model::ReturnItemCollectionMetrics>,
        ) -> Self {
            self.return_item_collection_metrics = inp;
            self
        }
        pub fn conditional_operator(mut self, inp: crate::model::ConditionalOperator) -> Self {
            self.conditional_operator = Some(inp);
            self
        }
        pub fn set_conditional_operator(
            mut self,
            inp: std::option::Option<crate::model::ConditionalOperator>,
        ) -> Self {
            self.conditional_operator = inp;
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
        /// Consumes the builder and constructs a [`PutItemInput`](crate::input::PutItemInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::PutItemInput, smithy_http::operation::BuildError> {
            Ok(crate::input::PutItemInput {
                table_name: self.table_name,
                item: self.item,
                expected: self.expected,
                return_values: self.return_values,
                return_consumed_capacity: self.return_consumed_capacity,
                return_item_collection_metrics: self.return_item_collection_metrics,
                conditional_operator: self.conditional_operator,
                condition_expression: self.condition_expression,
                expression_attribute_names: self.expression_attribute_names,
                expression_attribute_values: self.expression_attribute_values,
            })
        }
    }
}

impl PutItemInput {
    /// Consumes the builder and constructs an Operation<[`PutItem`](crate::operation::PutItem)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::PutItem, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let body = smithy_json::to_body(&input)
            .map_err(|err| smithy_http::operation::BuildError::SerializationError(err.into()))?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.0")
            .header("x-amz-target", "DynamoDB_20120810.PutItem")
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
            props.insert(aws_types::SigningService::from_static("dynamodb"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::PutItem::new())
            .with_metadata(smithy_http::operation::Metadata::new("PutItem", "dynamodb"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`PutItemInput`](crate::input::PutItemInput)
    pub fn builder() -> crate::input::put_item_input::Builder {
        crate::input::put_item_input::Builder::default()
    }
}

/// See [`QueryInput`](crate::input::QueryInput)
pub mod query_input {
    /// A builder for [`QueryInput`](crate::input::QueryInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        table_name: std::option::Option<std::string::String>,
        index_name: std::option::Option<std::string::String>,
        select: std::option::Option<crate::model::Select>,
        attributes_to_get: std::option::Option<std::vec::Vec<std::string::String>>,
        limit: std::option::Option<i32>,
        consistent_read: std::option::Option<bool>,
        key_conditions:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::Condition>>,
        query_filter:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::Condition>>,
        conditional_operator: std::option::Option<crate::model::ConditionalOperator>,
        scan_index_forward: std::option::Option<bool>,
        exclusive_start_key:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        return_consumed_capacity: std::option::Option<crate::model::ReturnConsumedCapacity>,
        projection_expression: std::option::Option<std::string::String>,
        filter_expression: std::option::Option<std::string::String>,
        key_condition_expression: std::option::Option<std::string::String>,
        expression_attribute_names:
            std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        expression_attribute_values:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
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
        pub fn index_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.index_name = Some(inp.into());
            self
        }
        pub fn set_index_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.index_name = inp;
            self
        }
        pub fn select(mut self, inp: crate::model::Select) -> Self {
            self.select = Some(inp);
            self
        }
        pub fn set_select(mut self, inp: std::option::Option<crate::model::Select>) -> Self {
            self.select = inp;
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
        pub fn limit(mut self, inp: i32) -> Self {
            self.limit = Some(inp);
            self
        }
        pub fn set_limit(mut self, inp: std::option::Option<i32>) -> Self {
            self.limit = inp;
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
        pub fn key_conditions(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::Condition>,
        ) -> Self {
            let mut hash_map = self.key_conditions.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.key_conditions = Some(hash_map);
            self
        }
        pub fn set_key_conditions(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::Condition>>,
        ) -> Self {
            self.key_conditions = inp;
            self
        }
        pub fn query_filter(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::Condition>,
        ) -> Self {
            let mut hash_map = self.query_filter.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.query_filter = Some(hash_map);
            self
        }
        pub fn set_query_filter(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::Condition>>,
        ) -> Self {
            self.query_filter = inp;
            self
        }
        pub fn conditional_operator(mut self, inp: crate::model::ConditionalOperator) -> Self {
            self.conditional_operator = Some(inp);
            self
        }
        pub fn set_conditional_operator(
            mut self,
            inp: std::option::Option<crate::model::ConditionalOperator>,
        ) -> Self {
            self.conditional_operator = inp;
            self
        }
        pub fn scan_index_forward(mut self, inp: bool) -> Self {
            self.scan_index_forward = Some(inp);
            self
        }
        pub fn set_scan_index_forward(mut self, inp: std::option::Option<bool>) -> Self {
            self.scan_index_forward = inp;
            self
        }
        pub fn exclusive_start_key(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::AttributeValue>,
        ) -> Self {
            let mut hash_map = self.exclusive_start_key.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.exclusive_start_key = Some(hash_map);
            self
        }
        pub fn set_exclusive_start_key(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        ) -> Self {
            self.exclusive_start_key = inp;
            self
        }
        pub fn return_consumed_capacity(
            mut self,
            inp: crate::model::ReturnConsumedCapacity,
        ) -> Self {
            self.return_consumed_capacity = Some(inp);
            self
        }
        pub fn set_return_consumed_capacity(
            mut self,
            inp: std::option::Option<crate::model::ReturnConsumedCapacity>,
        ) -> Self {
            self.return_consumed_capacity = inp;
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
        pub fn filter_expression(mut self, inp: impl Into<std::string::String>) -> Self {
            self.filter_expression = Some(inp.into());
            self
        }
        pub fn set_filter_expression(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.filter_expression = inp;
            self
        }
        pub fn key_condition_expression(mut self, inp: impl Into<std::string::String>) -> Self {
            self.key_condition_expression = Some(inp.into());
            self
        }
        pub fn set_key_condition_expression(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.key_condition_expression = inp;
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
        /// Consumes the builder and constructs a [`QueryInput`](crate::input::QueryInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::QueryInput, smithy_http::operation::BuildError> {
            Ok(crate::input::QueryInput {
                table_name: self.table_name,
                index_name: self.index_name,
                select: self.select,
                attributes_to_get: self.attributes_to_get,
                limit: self.limit,
                consistent_read: self.consistent_read,
                key_conditions: self.key_conditions,
                query_filter: self.query_filter,
                conditional_operator: self.conditional_operator,
                scan_index_forward: self.scan_index_forward,
                exclusive_start_key: self.exclusive_start_key,
                return_consumed_capacity: self.return_consumed_capacity,
                projection_expression: self.projection_expression,
                filter_expression: self.filter_expression,
                key_condition_expression: self.key_condition_expression,
                expression_attribute_names: self.expression_attribute_names,
                expression_attribute_values: self.expression_attribute_values,
            })
        }
    }
}

impl QueryInput {
    /// Consumes the builder and constructs an Operation<[`Query`](crate::operation::Query)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::Query, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let body = smithy_json::to_body(&input)
            .map_err(|err| smithy_http::operation::BuildError::SerializationError(err.into()))?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.0")
            .header("x-amz-target", "DynamoDB_20120810.Query")
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
            props.insert(aws_types::SigningService::from_static("dynamodb"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::Query::new())
            .with_metadata(smithy_http::operation::Metadata::new("Query", "dynamodb"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`QueryInput`](crate::input::QueryInput)
    pub fn builder() -> crate::input::query_input::Builder {
        crate::input::query_input::Builder::default()
    }
}

/// See [`ScanInput`](crate::input::ScanInput)
pub mod scan_input {
    /// A builder for [`ScanInput`](crate::input::ScanInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        table_name: std::option::Option<std::string::String>,
        index_name: std::option::Option<std::string::String>,
        attributes_to_get: std::option::Option<std::vec::Vec<std::string::String>>,
        limit: std::option::Option<i32>,
        select: std::option::Option<crate::model::Select>,
        scan_filter:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::Condition>>,
        conditional_operator: std::option::Option<crate::model::ConditionalOperator>,
        exclusive_start_key:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        return_consumed_capacity: std::option::Option<crate::model::ReturnConsumedCapacity>,
        total_segments: std::option::Option<i32>,
        segment: std::option::Option<i32>,
        projection_expression: std::option::Option<std::string::String>,
        filter_expression: std::option::Option<std::string::String>,
        expression_attribute_names:
            std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        expression_attribute_values:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        consistent_read: std::option::Option<bool>,
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
        pub fn index_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.index_name = Some(inp.into());
            self
        }
        pub fn set_index_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.index_name = inp;
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
        pub fn limit(mut self, inp: i32) -> Self {
            self.limit = Some(inp);
            self
        }
        pub fn set_limit(mut self, inp: std::option::Option<i32>) -> Self {
            self.limit = inp;
            self
        }
        pub fn select(mut self, inp: crate::model::Select) -> Self {
            self.select = Some(inp);
            self
        }
        pub fn set_select(mut self, inp: std::option::Option<crate::model::Select>) -> Self {
            self.select = inp;
            self
        }
        pub fn scan_filter(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::Condition>,
        ) -> Self {
            let mut hash_map = self.scan_filter.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.scan_filter = Some(hash_map);
            self
        }
        pub fn set_scan_filter(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::Condition>>,
        ) -> Self {
            self.scan_filter = inp;
            self
        }
        pub fn conditional_operator(mut self, inp: crate::model::ConditionalOperator) -> Self {
            self.conditional_operator = Some(inp);
            self
        }
        pub fn set_conditional_operator(
            mut self,
            inp: std::option::Option<crate::model::ConditionalOperator>,
        ) -> Self {
            self.conditional_operator = inp;
            self
        }
        pub fn exclusive_start_key(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::AttributeValue>,
        ) -> Self {
            let mut hash_map = self.exclusive_start_key.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.exclusive_start_key = Some(hash_map);
            self
        }
        pub fn set_exclusive_start_key(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        ) -> Self {
            self.exclusive_start_key = inp;
            self
        }
        pub fn return_consumed_capacity(
            mut self,
            inp: crate::model::ReturnConsumedCapacity,
        ) -> Self {
            self.return_consumed_capacity = Some(inp);
            self
        }
        pub fn set_return_consumed_capacity(
            mut self,
            inp: std::option::Option<crate::model::ReturnConsumedCapacity>,
        ) -> Self {
            self.return_consumed_capacity = inp;
            self
        }
        pub fn total_segments(mut self, inp: i32) -> Self {
            self.total_segments = Some(inp);
            self
        }
        pub fn set_total_segments(mut self, inp: std::option::Option<i32>) -> Self {
            self.total_segments = inp;
            self
        }
        pub fn segment(mut self, inp: i32) -> Self {
            self.segment = Some(inp);
            self
        }
        pub fn set_segment(mut self, inp: std::option::Option<i32>) -> Self {
            self.segment = inp;
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
        pub fn filter_expression(mut self, inp: impl Into<std::string::String>) -> Self {
            self.filter_expression = Some(inp.into());
            self
        }
        pub fn set_filter_expression(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.filter_expression = inp;
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
        pub fn consistent_read(mut self, inp: bool) -> Self {
            self.consistent_read = Some(inp);
            self
        }
        pub fn set_consistent_read(mut self, inp: std::option::Option<bool>) -> Self {
            self.consistent_read = inp;
            self
        }
        /// Consumes the builder and constructs a [`ScanInput`](crate::input::ScanInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ScanInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ScanInput {
                table_name: self.table_name,
                index_name: self.index_name,
                attributes_to_get: self.attributes_to_get,
                limit: self.limit,
                select: self.select,
                scan_filter: self.scan_filter,
                conditional_operator: self.conditional_operator,
                exclusive_start_key: self.exclusive_start_key,
                return_consumed_capacity: self.return_consumed_capacity,
                total_segments: self.total_segments,
                segment: self.segment,
                projection_expression: self.projection_expression,
                filter_expression: self.filter_expression,
                expression_attribute_names: self.expression_attribute_names,
                expression_attribute_values: self.expression_attribute_values,
                consistent_read: self.consistent_read,
            })
        }
    }
}

impl ScanInput {
    /// Consumes the builder and constructs an Operation<[`Scan`](crate::operation::Scan)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::Scan, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let body = smithy_json::to_body(&input)
            .map_err(|err| smithy_http::operation::BuildError::SerializationError(err.into()))?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.0")
            .header("x-amz-target", "DynamoDB_20120810.Scan")
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
            props.insert(aws_types::SigningService::from_static("dynamodb"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::Scan::new())
            .with_metadata(smithy_http::operation::Metadata::new("Scan", "dynamodb"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`ScanInput`](crate::input::ScanInput)
    pub fn builder() -> crate::input::scan_input::Builder {
        crate::input::scan_input::Builder::default()
    }
}

/// See [`TransactGetItemsInput`](crate::input::TransactGetItemsInput)
pub mod transact_get_items_input {
    /// A builder for [`TransactGetItemsInput`](crate::input::TransactGetItemsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        transact_items: std::option::Option<std::vec::Vec<crate::model::TransactGetItem>>,
        return_consumed_capacity: std::option::Option<crate::model::ReturnConsumedCapacity>,
    }
    impl Builder {
        pub fn transact_items(mut self, inp: impl Into<crate::model::TransactGetItem>) -> Self {
            let mut v = self.transact_items.unwrap_or_default();
            v.push(inp.into());
            self.transact_items = Some(v);
            self
        }
        pub fn set_transact_items(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::TransactGetItem>>,
        ) -> Self {
            self.transact_items = inp;
            self
        }
        pub fn return_consumed_capacity(
            mut self,
            inp: crate::model::ReturnConsumedCapacity,
        ) -> Self {
            self.return_consumed_capacity = Some(inp);
            self
        }
        pub fn set_return_consumed_capacity(
            mut self,
            inp: std::option::Option<crate::model::ReturnConsumedCapacity>,
        ) -> Self {
            self.return_consumed_capacity = inp;
            self
        }
        /// Consumes the builder and constructs a [`TransactGetItemsInput`](crate::input::TransactGetItemsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::TransactGetItemsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::TransactGetItemsInput {
                transact_items: self.transact_items,
                return_consumed_capacity: self.return_consumed_capacity,
            })
        }
    }
}

impl TransactGetItemsInput {
    /// Consumes the builder and constructs an Operation<[`TransactGetItems`](crate::operation::TransactGetItems)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::TransactGetItems, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let body = smithy_json::to_body(&input)
            .map_err(|err| smithy_http::operation::BuildError::SerializationError(err.into()))?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.0")
            .header("x-amz-target", "DynamoDB_20120810.TransactGetItems")
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
            props.insert(aws_types::SigningService::from_static("dynamodb"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::TransactGetItems::new())
            .with_metadata(smithy_http::operation::Metadata::new("TransactGetItems", "dynamodb"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`TransactGetItemsInput`](crate::input::TransactGetItemsInput)
    pub fn builder() -> crate::input::transact_get_items_input::Builder {
        crate::input::transact_get_items_input::Builder::default()
    }
}

/// See [`TransactWriteItemsInput`](crate::input::TransactWriteItemsInput)
pub mod transact_write_items_input {
    /// A builder for [`TransactWriteItemsInput`](crate::input::TransactWriteItemsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        transact_items: std::option::Option<std::vec::Vec<crate::model::TransactWriteItem>>,
        return_consumed_capacity: std::option::Option<crate::model::ReturnConsumedCapacity>,
        return_item_collection_metrics:
            std::option::Option<crate::model::ReturnItemCollectionMetrics>,
        client_request_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn transact_items(mut self, inp: impl Into<crate::model::TransactWriteItem>) -> Self {
            let mut v = self.transact_items.unwrap_or_default();
            v.push(inp.into());
            self.transact_items = Some(v);
            self
        }
        pub fn set_transact_items(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::TransactWriteItem>>,
        ) -> Self {
            self.transact_items = inp;
            self
        }
        pub fn return_consumed_capacity(
            mut self,
            inp: crate::model::ReturnConsumedCapacity,
        ) -> Self {
            self.return_consumed_capacity = Some(inp);
            self
        }
        pub fn set_return_consumed_capacity(
            mut self,
            inp: std::option::Option<crate::model::ReturnConsumedCapacity>,
        ) -> Self {
            self.return_consumed_capacity = inp;
            self
        }
        pub fn return_item_collection_metrics(
            mut self,
            inp: crate::model::ReturnItemCollectionMetrics,
        ) -> Self {
            self.return_item_collection_metrics = Some(inp);
            self
        }
        pub fn set_return_item_collection_metrics(
            mut self,
            inp: std::option::Option<crate::model::ReturnItemCollectionMetrics>,
        ) -> Self {
            self.return_item_collection_metrics = inp;
            self
        }
        pub fn client_request_token(mut self, inp: impl Into<std::string::String>) -> Self {
            self.client_request_token = Some(inp.into());
            self
        }
        pub fn set_client_request_token(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.client_request_token = inp;
            self
        }
        /// Consumes the builder and constructs a [`TransactWriteItemsInput`](crate::input::TransactWriteItemsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::TransactWriteItemsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::TransactWriteItemsInput {
                transact_items: self.transact_items,
                return_consumed_capacity: self.return_consumed_capacity,
                return_item_collection_metrics: self.return_item_collection_metrics,
                client_request_token: self.client_request_token,
            })
        }
    }
}

impl TransactWriteItemsInput {
    /// Consumes the builder and constructs an Operation<[`TransactWriteItems`](crate::operation::TransactWriteItems)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::TransactWriteItems, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let mut input = self.clone();
        if input.client_request_token.is_none() {
            input.client_request_token = Some(config.make_token.make_idempotency_token());
        }
        let body = smithy_json::to_body(&input)
            .map_err(|err| smithy_http::operation::BuildError::SerializationError(err.into()))?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.0")
            .header("x-amz-target", "DynamoDB_20120810.TransactWriteItems")
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
            props.insert(aws_types::SigningService::from_static("dynamodb"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::TransactWriteItems::new())
            .with_metadata(smithy_http::operation::Metadata::new("TransactWriteItems", "dynamodb"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`TransactWriteItemsInput`](crate::input::TransactWriteItemsInput)
    pub fn builder() -> crate::input::transact_write_items_input::Builder {
        crate::input::transact_write_items_input::Builder::default()
    }
}

/// See [`UpdateItemInput`](crate::input::UpdateItemInput)
pub mod update_item_input {
    /// A builder for [`UpdateItemInput`](crate::input::UpdateItemInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        table_name: std::option::Option<std::string::String>,
        key:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
        attribute_updates:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValueUpdate>>,
        expected:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::ExpectedAttributeValue>>,
        conditional_operator: std::option::Option<crate::model::ConditionalOperator>,
        return_values: std::option::Option<crate::model::ReturnValue>,
        return_consumed_capacity: std::option::Option<crate::model::ReturnConsumedCapacity>,
        return_item_collection_metrics:
            std::option::Option<crate::model::ReturnItemCollectionMetrics>,
        update_expression: std::option::Option<std::string::String>,
        condition_expression: std::option::Option<std::string::String>,
        expression_attribute_names:
            std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
        expression_attribute_values:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
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
        pub fn attribute_updates(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::AttributeValueUpdate>,
        ) -> Self {
            let mut hash_map = self.attribute_updates.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.attribute_updates = Some(hash_map);
            self
        }
        pub fn set_attribute_updates(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValueUpdate>>,
        ) -> Self {
            self.attribute_updates = inp;
            self
        }
        pub fn expected(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::ExpectedAttributeValue>,
        ) -> Self {
            let mut hash_map = self.expected.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.expected = Some(hash_map);
            self
        }
        pub fn set_expected(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::ExpectedAttributeValue>>,
        ) -> Self {
            self.expected = inp;
            self
        }
        pub fn conditional_operator(mut self, inp: crate::model::ConditionalOperator) -> Self {
            self.conditional_operator = Some(inp);
            self
        }
        pub fn set_conditional_operator(
            mut self,
            inp: std::option::Option<crate::model::ConditionalOperator>,
        ) -> Self {
            self.conditional_operator = inp;
            self
        }
        pub fn return_values(mut self, inp: crate::model::ReturnValue) -> Self {
            self.return_values = Some(inp);
            self
        }
        pub fn set_return_values(
            mut self,
            inp: std::option::Option<crate::model::ReturnValue>,
        ) -> Self {
            self.return_values = inp;
            self
        }
        pub fn return_consumed_capacity(
            mut self,
            inp: crate::model::ReturnConsumedCapacity,
        ) -> Self {
            self.return_consumed_capacity = Some(inp);
            self
        }
        pub fn set_return_consumed_capacity(
            mut self,
            inp: std::option::Option<crate::model::ReturnConsumedCapacity>,
        ) -> Self {
            self.return_consumed_capacity = inp;
            self
        }
        pub fn return_item_collection_metrics(
            mut self,
            inp: crate::model::ReturnItemCollectionMetrics,
        ) -> Self {
            self.return_item_collection_metrics = Some(inp);
            self
        }
        pub fn set_return_item_collection_metrics(
            mut self,
            inp: std::option::Option<crate::model::ReturnItemCollectionMetrics>,
        ) -> Self {
            self.return_item_collection_metrics = inp;
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
        /// Consumes the builder and constructs a [`UpdateItemInput`](crate::input::UpdateItemInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::UpdateItemInput, smithy_http::operation::BuildError> {
            Ok(crate::input::UpdateItemInput {
                table_name: self.table_name,
                key: self.key,
                attribute_updates: self.attribute_updates,
                expected: self.expected,
                conditional_operator: self.conditional_operator,
                return_values: self.return_values,
                return_consumed_capacity: self.return_consumed_capacity,
                return_item_collection_metrics: self.return_item_collection_metrics,
                update_expression: self.update_expression,
                condition_expression: self.condition_expression,
                expression_attribute_names: self.expression_attribute_names,
                expression_attribute_values: self.expression_attribute_values,
            })
        }
    }
}

impl UpdateItemInput {
    /// Consumes the builder and constructs an Operation<[`UpdateItem`](crate::operation::UpdateItem)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::UpdateItem, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let body = smithy_json::to_body(&input)
            .map_err(|err| smithy_http::operation::BuildError::SerializationError(err.into()))?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.0")
            .header("x-amz-target", "DynamoDB_20120810.UpdateItem")
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
            props.insert(aws_types::SigningService::from_static("dynamodb"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::UpdateItem::new())
            .with_metadata(smithy_http::operation::Metadata::new("UpdateItem", "dynamodb"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`UpdateItemInput`](crate::input::UpdateItemInput)
    pub fn builder() -> crate::input::update_item_input::Builder {
        crate::input::update_item_input::Builder::default()
    }
}

/// See [`UpdateTableInput`](crate::input::UpdateTableInput)
pub mod update_table_input {
    /// A builder for [`UpdateTableInput`](crate::input::UpdateTableInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        attribute_definitions:
            std::option::Option<std::vec::Vec<crate::model::AttributeDefinition>>,
        table_name: std::option::Option<std::string::String>,
        billing_mode: std::option::Option<crate::model::BillingMode>,
        provisioned_throughput: std::option::Option<crate::model::ProvisionedThroughput>,
        global_secondary_index_updates:
            std::option::Option<std::vec::Vec<crate::model::GlobalSecondaryIndexUpdate>>,
        stream_specification: std::option::Option<crate::model::StreamSpecification>,
        sse_specification: std::option::Option<crate::model::SseSpecification>,
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
        pub fn global_secondary_index_updates(
            mut self,
            inp: impl Into<crate::model::GlobalSecondaryIndexUpdate>,
        ) -> Self {
            let mut v = self.global_secondary_index_updates.unwrap_or_default();
            v.push(inp.into());
            self.global_secondary_index_updates = Some(v);
            self
        }
        pub fn set_global_secondary_index_updates(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::GlobalSecondaryIndexUpdate>>,
        ) -> Self {
            self.global_secondary_index_updates = inp;
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
        pub fn sse_specification(mut self, inp: crate::model::SseSpecification) -> Self {
            self.sse_specification = Some(inp);
            self
        }
        pub fn set_sse_specification(
            mut self,
            inp: std::option::Option<crate::model::SseSpecification>,
        ) -> Self {
            self.sse_specification = inp;
            self
        }
        /// Consumes the builder and constructs a [`UpdateTableInput`](crate::input::UpdateTableInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::UpdateTableInput, smithy_http::operation::BuildError> {
            Ok(crate::input::UpdateTableInput {
                attribute_definitions: self.attribute_definitions,
                table_name: self.table_name,
                billing_mode: self.billing_mode,
                provisioned_throughput: self.provisioned_throughput,
                global_secondary_index_updates: self.global_secondary_index_updates,
                stream_specification: self.stream_specification,
                sse_specification: self.sse_specification,
            })
        }
    }
}

impl UpdateTableInput {
    /// Consumes the builder and constructs an Operation<[`UpdateTable`](crate::operation::UpdateTable)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::UpdateTable, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let body = smithy_json::to_body(&input)
            .map_err(|err| smithy_http::operation::BuildError::SerializationError(err.into()))?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.0")
            .header("x-amz-target", "DynamoDB_20120810.UpdateTable")
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
            props.insert(aws_types::SigningService::from_static("dynamodb"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::UpdateTable::new())
            .with_metadata(smithy_http::operation::Metadata::new("UpdateTable", "dynamodb"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`UpdateTableInput`](crate::input::UpdateTableInput)
    pub fn builder() -> crate::input::update_table_input::Builder {
        crate::input::update_table_input::Builder::default()
    }
}

/// See [`UpdateTimeToLiveInput`](crate::input::UpdateTimeToLiveInput)
pub mod update_time_to_live_input {
    /// A builder for [`UpdateTimeToLiveInput`](crate::input::UpdateTimeToLiveInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        table_name: std::option::Option<std::string::String>,
        time_to_live_specification: std::option::Option<crate::model::TimeToLiveSpecification>,
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
        pub fn time_to_live_specification(
            mut self,
            inp: crate::model::TimeToLiveSpecification,
        ) -> Self {
            self.time_to_live_specification = Some(inp);
            self
        }
        pub fn set_time_to_live_specification(
            mut self,
            inp: std::option::Option<crate::model::TimeToLiveSpecification>,
        ) -> Self {
            self.time_to_live_specification = inp;
            self
        }
        /// Consumes the builder and constructs a [`UpdateTimeToLiveInput`](crate::input::UpdateTimeToLiveInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::UpdateTimeToLiveInput, smithy_http::operation::BuildError> {
            Ok(crate::input::UpdateTimeToLiveInput {
                table_name: self.table_name,
                time_to_live_specification: self.time_to_live_specification,
            })
        }
    }
}

impl UpdateTimeToLiveInput {
    /// Consumes the builder and constructs an Operation<[`UpdateTimeToLive`](crate::operation::UpdateTimeToLive)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::UpdateTimeToLive, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let body = smithy_json::to_body(&input)
            .map_err(|err| smithy_http::operation::BuildError::SerializationError(err.into()))?;
        let request = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(http::header::CONTENT_TYPE, "application/x-amz-json-1.0")
            .header("x-amz-target", "DynamoDB_20120810.UpdateTimeToLive")
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
            props.insert(aws_types::SigningService::from_static("dynamodb"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::UpdateTimeToLive::new())
            .with_metadata(smithy_http::operation::Metadata::new("UpdateTimeToLive", "dynamodb"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`UpdateTimeToLiveInput`](crate::input::UpdateTimeToLiveInput)
    pub fn builder() -> crate::input::update_time_to_live_input::Builder {
        crate::input::update_time_to_live_input::Builder::default()
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
pub struct BatchGetItemInput {
    #[serde(rename = "RequestItems")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub request_items:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::KeysAndAttributes>>,
    #[serde(rename = "ReturnConsumedCapacity")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub return_consumed_capacity: std::option::Option<crate::model::ReturnConsumedCapacity>,
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct BatchWriteItemInput {
    #[serde(rename = "RequestItems")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub request_items:
        std::option::Option<std::collections::HashMap<std::string::String, std::vec::Vec<crate::model::WriteRequest>>>,
    #[serde(rename = "ReturnConsumedCapacity")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub return_consumed_capacity: std::option::Option<crate::model::ReturnConsumedCapacity>,
    #[serde(rename = "ReturnItemCollectionMetrics")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub return_item_collection_metrics:
        std::option::Option<crate::model::ReturnItemCollectionMetrics>,
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct CreateTableInput {
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
    #[serde(rename = "LocalSecondaryIndexes")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub local_secondary_indexes:
        std::option::Option<std::vec::Vec<crate::model::LocalSecondaryIndex>>,
    #[serde(rename = "GlobalSecondaryIndexes")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub global_secondary_indexes:
        std::option::Option<std::vec::Vec<crate::model::GlobalSecondaryIndex>>,
    #[serde(rename = "BillingMode")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub billing_mode: std::option::Option<crate::model::BillingMode>,
    #[serde(rename = "ProvisionedThroughput")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub provisioned_throughput: std::option::Option<crate::model::ProvisionedThroughput>,
    #[serde(rename = "StreamSpecification")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub stream_specification: std::option::Option<crate::model::StreamSpecification>,
    #[serde(rename = "SSESpecification")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sse_specification: std::option::Option<crate::model::SseSpecification>,
    #[serde(rename = "Tags")]
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
pub struct DeleteItemInput {
    #[serde(rename = "TableName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub table_name: std::option::Option<std::string::String>,
    #[serde(rename = "Key")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub key:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
    #[serde(rename = "Expected")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub expected:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::ExpectedAttributeValue>>,
    #[serde(rename = "ConditionalOperator")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub conditional_operator: std::option::Option<crate::model::ConditionalOperator>,
    #[serde(rename = "ReturnValues")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub return_values: std::option::Option<crate::model::ReturnValue>,
    #[serde(rename = "ReturnConsumedCapacity")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub return_consumed_capacity: std::option::Option<crate::model::ReturnConsumedCapacity>,
    #[serde(rename = "ReturnItemCollectionMetrics")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub return_item_collection_metrics:
        std::option::Option<crate::model::ReturnItemCollectionMetrics>,
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
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct DeleteTableInput {
    #[serde(rename = "TableName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub table_name: std::option::Option<std::string::String>,
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct DescribeTableInput {
    #[serde(rename = "TableName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub table_name: std::option::Option<std::string::String>,
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct DescribeLimitsInput {
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct DescribeTimeToLiveInput {
    #[serde(rename = "TableName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub table_name: std::option::Option<std::string::String>,
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct GetItemInput {
    #[serde(rename = "TableName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub table_name: std::option::Option<std::string::String>,
    #[serde(rename = "Key")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub key:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
    #[serde(rename = "AttributesToGet")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub attributes_to_get: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "ConsistentRead")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub consistent_read: std::option::Option<bool>,
    #[serde(rename = "ReturnConsumedCapacity")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub return_consumed_capacity: std::option::Option<crate::model::ReturnConsumedCapacity>,
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

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct ListTablesInput {
    /// The first table name that this operation will evaluate. Use the value that was returned for `LastEvaluatedTableName` in a previous operation, so that you can obtain the next page of results.
    #[serde(rename = "ExclusiveStartTableName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub exclusive_start_table_name: std::option::Option<std::string::String>,
    #[serde(rename = "Limit")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub limit: std::option::Option<i32>,
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct PutItemInput {
    #[serde(rename = "TableName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub table_name: std::option::Option<std::string::String>,
    #[serde(rename = "Item")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub item:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
    #[serde(rename = "Expected")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub expected:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::ExpectedAttributeValue>>,
    #[serde(rename = "ReturnValues")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub return_values: std::option::Option<crate::model::ReturnValue>,
    #[serde(rename = "ReturnConsumedCapacity")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub return_consumed_capacity: std::option::Option<crate::model::ReturnConsumedCapacity>,
    #[serde(rename = "ReturnItemCollectionMetrics")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub return_item_collection_metrics:
        std::option::Option<crate::model::ReturnItemCollectionMetrics>,
    #[serde(rename = "ConditionalOperator")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub conditional_operator: std::option::Option<crate::model::ConditionalOperator>,
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
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct QueryInput {
    #[serde(rename = "TableName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub table_name: std::option::Option<std::string::String>,
    #[serde(rename = "IndexName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub index_name: std::option::Option<std::string::String>,
    #[serde(rename = "Select")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub select: std::option::Option<crate::model::Select>,
    #[serde(rename = "AttributesToGet")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub attributes_to_get: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "Limit")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub limit: std::option::Option<i32>,
    #[serde(rename = "ConsistentRead")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub consistent_read: std::option::Option<bool>,
    #[serde(rename = "KeyConditions")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub key_conditions:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::Condition>>,
    #[serde(rename = "QueryFilter")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub query_filter:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::Condition>>,
    #[serde(rename = "ConditionalOperator")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub conditional_operator: std::option::Option<crate::model::ConditionalOperator>,
    #[serde(rename = "ScanIndexForward")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scan_index_forward: std::option::Option<bool>,
    #[serde(rename = "ExclusiveStartKey")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub exclusive_start_key:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
    #[serde(rename = "ReturnConsumedCapacity")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub return_consumed_capacity: std::option::Option<crate::model::ReturnConsumedCapacity>,
    #[serde(rename = "ProjectionExpression")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub projection_expression: std::option::Option<std::string::String>,
    #[serde(rename = "FilterExpression")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub filter_expression: std::option::Option<std::string::String>,
    #[serde(rename = "KeyConditionExpression")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub key_condition_expression: std::option::Option<std::string::String>,
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
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct ScanInput {
    #[serde(rename = "TableName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub table_name: std::option::Option<std::string::String>,
    #[serde(rename = "IndexName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub index_name: std::option::Option<std::string::String>,
    #[serde(rename = "AttributesToGet")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub attributes_to_get: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "Limit")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub limit: std::option::Option<i32>,
    #[serde(rename = "Select")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub select: std::option::Option<crate::model::Select>,
    #[serde(rename = "ScanFilter")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scan_filter:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::Condition>>,
    #[serde(rename = "ConditionalOperator")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub conditional_operator: std::option::Option<crate::model::ConditionalOperator>,
    #[serde(rename = "ExclusiveStartKey")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub exclusive_start_key:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
    #[serde(rename = "ReturnConsumedCapacity")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub return_consumed_capacity: std::option::Option<crate::model::ReturnConsumedCapacity>,
    #[serde(rename = "TotalSegments")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub total_segments: std::option::Option<i32>,
    #[serde(rename = "Segment")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub segment: std::option::Option<i32>,
    #[serde(rename = "ProjectionExpression")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub projection_expression: std::option::Option<std::string::String>,
    #[serde(rename = "FilterExpression")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub filter_expression: std::option::Option<std::string::String>,
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
    #[serde(rename = "ConsistentRead")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub consistent_read: std::option::Option<bool>,
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct TransactGetItemsInput {
    #[serde(rename = "TransactItems")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub transact_items: std::option::Option<std::vec::Vec<crate::model::TransactGetItem>>,
    #[serde(rename = "ReturnConsumedCapacity")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub return_consumed_capacity: std::option::Option<crate::model::ReturnConsumedCapacity>,
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct TransactWriteItemsInput {
    #[serde(rename = "TransactItems")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub transact_items: std::option::Option<std::vec::Vec<crate::model::TransactWriteItem>>,
    #[serde(rename = "ReturnConsumedCapacity")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub return_consumed_capacity: std::option::Option<crate::model::ReturnConsumedCapacity>,
    #[serde(rename = "ReturnItemCollectionMetrics")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub return_item_collection_metrics:
        std::option::Option<crate::model::ReturnItemCollectionMetrics>,
    #[serde(rename = "ClientRequestToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub client_request_token: std::option::Option<std::string::String>,
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct UpdateItemInput {
    #[serde(rename = "TableName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub table_name: std::option::Option<std::string::String>,
    #[serde(rename = "Key")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub key:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValue>>,
    #[serde(rename = "AttributeUpdates")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub attribute_updates:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::AttributeValueUpdate>>,
    #[serde(rename = "Expected")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub expected:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::ExpectedAttributeValue>>,
    #[serde(rename = "ConditionalOperator")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub conditional_operator: std::option::Option<crate::model::ConditionalOperator>,
    #[serde(rename = "ReturnValues")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub return_values: std::option::Option<crate::model::ReturnValue>,
    #[serde(rename = "ReturnConsumedCapacity")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub return_consumed_capacity: std::option::Option<crate::model::ReturnConsumedCapacity>,
    #[serde(rename = "ReturnItemCollectionMetrics")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub return_item_collection_metrics:
        std::option::Option<crate::model::ReturnItemCollectionMetrics>,
    #[serde(rename = "UpdateExpression")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update_expression: std::option::Option<std::string::String>,
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
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct UpdateTableInput {
    #[serde(rename = "AttributeDefinitions")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub attribute_definitions:
        std::option::Option<std::vec::Vec<crate::model::AttributeDefinition>>,
    #[serde(rename = "TableName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub table_name: std::option::Option<std::string::String>,
    #[serde(rename = "BillingMode")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub billing_mode: std::option::Option<crate::model::BillingMode>,
    #[serde(rename = "ProvisionedThroughput")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub provisioned_throughput: std::option::Option<crate::model::ProvisionedThroughput>,
    #[serde(rename = "GlobalSecondaryIndexUpdates")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub global_secondary_index_updates:
        std::option::Option<std::vec::Vec<crate::model::GlobalSecondaryIndexUpdate>>,
    #[serde(rename = "StreamSpecification")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub stream_specification: std::option::Option<crate::model::StreamSpecification>,
    #[serde(rename = "SSESpecification")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sse_specification: std::option::Option<crate::model::SseSpecification>,
}

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
)]
pub struct UpdateTimeToLiveInput {
    #[serde(rename = "TableName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub table_name: std::option::Option<std::string::String>,
    #[serde(rename = "TimeToLiveSpecification")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub time_to_live_specification: std::option::Option<crate::model::TimeToLiveSpecification>,
}
