/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// See [`GetScreenDataInput`](crate::input::GetScreenDataInput)
pub mod get_screen_data_input {
    /// A builder for [`GetScreenDataInput`](crate::input::GetScreenDataInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        workbook_id: std::option::Option<std::string::String>,
        app_id: std::option::Option<std::string::String>,
        screen_id: std::option::Option<std::string::String>,
        variables:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::VariableValue>>,
        max_results: std::option::Option<i32>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn workbook_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.workbook_id = Some(inp.into());
            self
        }
        pub fn set_workbook_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.workbook_id = inp;
            self
        }
        pub fn app_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.app_id = Some(inp.into());
            self
        }
        pub fn set_app_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.app_id = inp;
            self
        }
        pub fn screen_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.screen_id = Some(inp.into());
            self
        }
        pub fn set_screen_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.screen_id = inp;
            self
        }
        pub fn variables(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::VariableValue>,
        ) -> Self {
            let mut hash_map = self.variables.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.variables = Some(hash_map);
            self
        }
        pub fn set_variables(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::VariableValue>>,
        ) -> Self {
            self.variables = inp;
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
        /// Consumes the builder and constructs a [`GetScreenDataInput`](crate::input::GetScreenDataInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::GetScreenDataInput, smithy_http::operation::BuildError> {
            Ok(crate::input::GetScreenDataInput {
                workbook_id: self.workbook_id,
                app_id: self.app_id,
                screen_id: self.screen_id,
                variables: self.variables,
                max_results: self.max_results,
                next_token: self.next_token,
            })
        }
    }
}

impl GetScreenDataInput {
    /// Consumes the builder and constructs an Operation<[`GetScreenData`](crate::operation::GetScreenData)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::GetScreenData, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let input = self;
        let uri = String::from("/screendata");
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
            props.insert(aws_types::SigningService::from_static("honeycode"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::GetScreenData::new())
            .with_metadata(smithy_http::operation::Metadata::new("GetScreenData", "honeycode"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    /// Creates a new builder-style object to manufacture [`GetScreenDataInput`](crate::input::GetScreenDataInput)
    pub fn builder() -> crate::input::get_screen_data_input::Builder {
        crate::input::get_screen_data_input::Builder::default()
    }
}

/// See [`InvokeScreenAutomationInput`](crate::input::InvokeScreenAutomationInput)
pub mod invoke_screen_automation_input {
    /// A builder for [`InvokeScreenAutomationInput`](crate::input::InvokeScreenAutomationInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        workbook_id: std::option::Option<std::string::String>,
        app_id: std::option::Option<std::string::String>,
        screen_id: std::option::Option<std::string::String>,
        screen_automation_id: std::option::Option<std::string::String>,
        variables:
            std::option::Option<std::collections::HashMap<std::string::String, crate::model::VariableValue>>,
        row_id: std::option::Option<std::string::String>,
        client_request_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn workbook_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.workbook_id = Some(inp.into());
            self
        }
        pub fn set_workbook_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.workbook_id = inp;
            self
        }
        pub fn app_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.app_id = Some(inp.into());
            self
        }
        pub fn set_app_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.app_id = inp;
            self
        }
        pub fn screen_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.screen_id = Some(inp.into());
            self
        }
        pub fn set_screen_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.screen_id = inp;
            self
        }
        pub fn screen_automation_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.screen_automation_id = Some(inp.into());
            self
        }
        pub fn set_screen_automation_id(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.screen_automation_id = inp;
            self
        }
        pub fn variables(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::VariableValue>,
        ) -> Self {
            let mut hash_map = self.variables.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.variables = Some(hash_map);
            self
        }
        pub fn set_variables(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::VariableValue>>,
        ) -> Self {
            self.variables = inp;
            self
        }
        pub fn row_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.row_id = Some(inp.into());
            self
        }
        pub fn set_row_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.row_id = inp;
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
        /// Consumes the builder and constructs a [`InvokeScreenAutomationInput`](crate::input::InvokeScreenAutomationInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::InvokeScreenAutomationInput, smithy_http::operation::BuildError> {
            Ok(crate::input::InvokeScreenAutomationInput {
                workbook_id: self.workbook_id,
                app_id: self.app_id,
                screen_id: self.screen_id,
                screen_automation_id: self.screen_automation_id,
                variables: self.variables,
                row_id: self.row_id,
                client_request_token: self.client_request_token,
            })
        }
    }
}

impl InvokeScreenAutomationInput {
    /// Consumes the builder and constructs an Operation<[`InvokeScreenAutomation`](crate::operation::InvokeScreenAutomation)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::InvokeScreenAutomation, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let mut input = self.clone();
        if input.client_request_token.is_none() {
            input.client_request_token = Some(config.make_token.make_idempotency_token());
        }
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
            props.insert(aws_types::SigningService::from_static("honeycode"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::InvokeScreenAutomation::new())
            .with_metadata(smithy_http::operation::Metadata::new("InvokeScreenAutomation", "honeycode"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    fn uri_base(
        &self,
        output: &mut String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let workbook_id = match self.workbook_id.as_deref() {
            Some(label) if !label.is_empty() => smithy_http::label::fmt_string(label, false),
            _ => {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "workbook_id",
                    details: "cannot be empty or unset",
                })
            }
        };
        let app_id = match self.app_id.as_deref() {
            Some(label) if !label.is_empty() => smithy_http::label::fmt_string(label, false),
            _ => {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "app_id",
                    details: "cannot be empty or unset",
                })
            }
        };
        let screen_id = match self.screen_id.as_deref() {
            Some(label) if !label.is_empty() => smithy_http::label::fmt_string(label, false),
            _ => {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "screen_id",
                    details: "cannot be empty or unset",
                })
            }
        };
        let screen_automation_id = match self.screen_automation_id.as_deref() {
            Some(label) if !label.is_empty() => smithy_http::label::fmt_string(label, false),
            _ => {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "screen_automation_id",
                    details: "cannot be empty or unset",
                })
            }
        };
        output.push_str(&format!("/workbooks/{}/apps/{}/screens/{}/automations/{}", workbook_id, app_id, screen_id, screen_automation_id));
        Ok(())
    }
    /// Creates a new builder-style object to manufacture [`InvokeScreenAutomationInput`](crate::input::InvokeScreenAutomationInput)
    pub fn builder() -> crate::input::invoke_screen_automation_input::Builder {
        crate::input::invoke_screen_automation_input::Builder::default()
    }
}

/// See [`ListTablesInput`](crate::input::ListTablesInput)
pub mod list_tables_input {
    /// A builder for [`ListTablesInput`](crate::input::ListTablesInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        workbook_id: std::option::Option<std::string::String>,
        max_results: std::option::Option<i32>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn workbook_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.workbook_id = Some(inp.into());
            self
        }
        pub fn set_workbook_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.workbook_id = inp;
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
        /// Consumes the builder and constructs a [`ListTablesInput`](crate::input::ListTablesInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListTablesInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListTablesInput {
                workbook_id: self.workbook_id,
                max_results: self.max_results,
                next_token: self.next_token,
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
            props.insert(aws_types::SigningService::from_static("honeycode"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::ListTables::new())
            .with_metadata(smithy_http::operation::Metadata::new("ListTables", "honeycode"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    fn uri_base(
        &self,
        output: &mut String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let workbook_id = match self.workbook_id.as_deref() {
            Some(label) if !label.is_empty() => smithy_http::label::fmt_string(label, false),
            _ => {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "workbook_id",
                    details: "cannot be empty or unset",
                })
            }
        };
        output.push_str(&format!("/workbooks/{}/tables", workbook_id));
        Ok(())
    }
    fn uri_query(&self, output: &mut String) {
        let mut query = smithy_http::query::Writer::new(output);
        if let Some(inner_1) = &self.max_results {
            query.push_kv("maxResults", &inner_1.to_string());
        }
        if let Some(inner_2) = &self.next_token {
            query.push_kv("nextToken", &smithy_http::query::fmt_string(inner_2));
        }
    }
    /// Creates a new builder-style object to manufacture [`ListTablesInput`](crate::input::ListTablesInput)
    pub fn builder() -> crate::input::list_tables_input::Builder {
        crate::input::list_tables_input::Builder::default()
    }
}

/// See [`ListTableColumnsInput`](crate::input::ListTableColumnsInput)
pub mod list_table_columns_input {
    /// A builder for [`ListTableColumnsInput`](crate::input::ListTableColumnsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        workbook_id: std::option::Option<std::string::String>,
        table_id: std::option::Option<std::string::String>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn workbook_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.workbook_id = Some(inp.into());
            self
        }
        pub fn set_workbook_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.workbook_id = inp;
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
        pub fn next_token(mut self, inp: impl Into<std::string::String>) -> Self {
            self.next_token = Some(inp.into());
            self
        }
        pub fn set_next_token(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.next_token = inp;
            self
        }
        /// Consumes the builder and constructs a [`ListTableColumnsInput`](crate::input::ListTableColumnsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListTableColumnsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListTableColumnsInput {
                workbook_id: self.workbook_id,
                table_id: self.table_id,
                next_token: self.next_token,
            })
        }
    }
}

impl ListTableColumnsInput {
    /// Consumes the builder and constructs an Operation<[`ListTableColumns`](crate::operation::ListTableColumns)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListTableColumns, aws_http::AwsErrorRetryPolicy>,
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
            props.insert(aws_types::SigningService::from_static("honeycode"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::ListTableColumns::new())
            .with_metadata(smithy_http::operation::Metadata::new("ListTableColumns", "honeycode"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    fn uri_base(
        &self,
        output: &mut String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let workbook_id = match self.workbook_id.as_deref() {
            Some(label) if !label.is_empty() => smithy_http::label::fmt_string(label, false),
            _ => {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "workbook_id",
                    details: "cannot be empty or unset",
                })
            }
        };
        let table_id = match self.table_id.as_deref() {
            Some(label) if !label.is_empty() => smithy_http::label::fmt_string(label, false),
            _ => {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "table_id",
                    details: "cannot be empty or unset",
                })
            }
        };
        output.push_str(&format!("/workbooks/{}/tables/{}/columns", workbook_id, table_id));
        Ok(())
    }
    fn uri_query(&self, output: &mut String) {
        let mut query = smithy_http::query::Writer::new(output);
        if let Some(inner_1) = &self.next_token {
            query.push_kv("nextToken", &smithy_http::query::fmt_string(inner_1));
        }
    }
    /// Creates a new builder-style object to manufacture [`ListTableColumnsInput`](crate::input::ListTableColumnsInput)
    pub fn builder() -> crate::input::list_table_columns_input::Builder {
        crate::input::list_table_columns_input::Builder::default()
    }
}

/// See [`ListTableRowsInput`](crate::input::ListTableRowsInput)
pub mod list_table_rows_input {
    /// A builder for [`ListTableRowsInput`](crate::input::ListTableRowsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        workbook_id: std::option::Option<std::string::String>,
        table_id: std::option::Option<std::string::String>,
        row_ids: std::option::Option<std::vec::Vec<std::string::String>>,
        max_results: std::option::Option<i32>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn workbook_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.workbook_id = Some(inp.into());
            self
        }
        pub fn set_workbook_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.workbook_id = inp;
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
        pub fn row_ids(mut self, inp: impl Into<std::string::String>) -> Self {
            let mut v = self.row_ids.unwrap_or_default();
            v.push(inp.into());
            self.row_ids = Some(v);
            self
        }
        pub fn set_row_ids(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.row_ids = inp;
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
        /// Consumes the builder and constructs a [`ListTableRowsInput`](crate::input::ListTableRowsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::ListTableRowsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::ListTableRowsInput {
                workbook_id: self.workbook_id,
                table_id: self.table_id,
                row_ids: self.row_ids,
                max_results: self.max_results,
                next_token: self.next_token,
            })
        }
    }
}

impl ListTableRowsInput {
    /// Consumes the builder and constructs an Operation<[`ListTableRows`](crate::operation::ListTableRows)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::ListTableRows, aws_http::AwsErrorRetryPolicy>,
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
            props.insert(aws_types::SigningService::from_static("honeycode"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::ListTableRows::new())
            .with_metadata(smithy_http::operation::Metadata::new("ListTableRows", "honeycode"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    fn uri_base(
        &self,
        output: &mut String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let workbook_id = match self.workbook_id.as_deref() {
            Some(label) if !label.is_empty() => smithy_http::label::fmt_string(label, false),
            _ => {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "workbook_id",
                    details: "cannot be empty or unset",
                })
            }
        };
        let table_id = match self.table_id.as_deref() {
            Some(label) if !label.is_empty() => smithy_http::label::fmt_string(label, false),
            _ => {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "table_id",
                    details: "cannot be empty or unset",
                })
            }
        };
        output.push_str(&format!("/workbooks/{}/tables/{}/rows/list", workbook_id, table_id));
        Ok(())
    }
    /// Creates a new builder-style object to manufacture [`ListTableRowsInput`](crate::input::ListTableRowsInput)
    pub fn builder() -> crate::input::list_table_rows_input::Builder {
        crate::input::list_table_rows_input::Builder::default()
    }
}

/// See [`QueryTableRowsInput`](crate::input::QueryTableRowsInput)
pub mod query_table_rows_input {
    /// A builder for [`QueryTableRowsInput`](crate::input::QueryTableRowsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        workbook_id: std::option::Option<std::string::String>,
        table_id: std::option::Option<std::string::String>,
        filter_formula: std::option::Option<crate::model::Filter>,
        max_results: std::option::Option<i32>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn workbook_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.workbook_id = Some(inp.into());
            self
        }
        pub fn set_workbook_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.workbook_id = inp;
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
        pub fn filter_formula(mut self, inp: crate::model::Filter) -> Self {
            self.filter_formula = Some(inp);
            self
        }
        pub fn set_filter_formula(
            mut self,
            inp: std::option::Option<crate::model::Filter>,
        ) -> Self {
            self.filter_formula = inp;
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
        /// Consumes the builder and constructs a [`QueryTableRowsInput`](crate::input::QueryTableRowsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::QueryTableRowsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::QueryTableRowsInput {
                workbook_id: self.workbook_id,
                table_id: self.table_id,
                filter_formula: self.filter_formula,
                max_results: self.max_results,
                next_token: self.next_token,
            })
        }
    }
}

impl QueryTableRowsInput {
    /// Consumes the builder and constructs an Operation<[`QueryTableRows`](crate::operation::QueryTableRows)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::QueryTableRows, aws_http::AwsErrorRetryPolicy>,
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
            props.insert(aws_types::SigningService::from_static("honeycode"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::QueryTableRows::new())
            .with_metadata(smithy_http::operation::Metadata::new("QueryTableRows", "honeycode"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    fn uri_base(
        &self,
        output: &mut String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let workbook_id = match self.workbook_id.as_deref() {
            Some(label) if !label.is_empty() => smithy_http::label::fmt_string(label, false),
            _ => {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "workbook_id",
                    details: "cannot be empty or unset",
                })
            }
        };
        let table_id = match self.table_id.as_deref() {
            Some(label) if !label.is_empty() => smithy_http::label::fmt_string(label, false),
            _ => {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "table_id",
                    details: "cannot be empty or unset",
                })
            }
        };
        output.push_str(&format!("/workbooks/{}/tables/{}/rows/query", workbook_id, table_id));
        Ok(())
    }
    /// Creates a new builder-style object to manufacture [`QueryTableRowsInput`](crate::input::QueryTableRowsInput)
    pub fn builder() -> crate::input::query_table_rows_input::Builder {
        crate::input::query_table_rows_input::Builder::default()
    }
}

/// See [`BatchCreateTableRowsInput`](crate::input::BatchCreateTableRowsInput)
pub mod batch_create_table_rows_input {
    /// A builder for [`BatchCreateTableRowsInput`](crate::input::BatchCreateTableRowsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        workbook_id: std::option::Option<std::string::String>,
        table_id: std::option::Option<std::string::String>,
        rows_to_create: std::option::Option<std::vec::Vec<crate::model::CreateRowData>>,
        client_request_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn workbook_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.workbook_id = Some(inp.into());
            self
        }
        pub fn set_workbook_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.workbook_id = inp;
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
        pub fn rows_to_create(mut self, inp: impl Into<crate::model::CreateRowData>) -> Self {
            let mut v = self.rows_to_create.unwrap_or_default();
            v.push(inp.into());
            self.rows_to_create = Some(v);
            self
        }
        pub fn set_rows_to_create(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::CreateRowData>>,
        ) -> Self {
            self.rows_to_create = inp;
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
        /// Consumes the builder and constructs a [`BatchCreateTableRowsInput`](crate::input::BatchCreateTableRowsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::BatchCreateTableRowsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::BatchCreateTableRowsInput {
                workbook_id: self.workbook_id,
                table_id: self.table_id,
                rows_to_create: self.rows_to_create,
                client_request_token: self.client_request_token,
            })
        }
    }
}

impl BatchCreateTableRowsInput {
    /// Consumes the builder and constructs an Operation<[`BatchCreateTableRows`](crate::operation::BatchCreateTableRows)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::BatchCreateTableRows, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let mut input = self.clone();
        if input.client_request_token.is_none() {
            input.client_request_token = Some(config.make_token.make_idempotency_token());
        }
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
            props.insert(aws_types::SigningService::from_static("honeycode"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::BatchCreateTableRows::new())
            .with_metadata(smithy_http::operation::Metadata::new("BatchCreateTableRows", "honeycode"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    fn uri_base(
        &self,
        output: &mut String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let workbook_id = match self.workbook_id.as_deref() {
            Some(label) if !label.is_empty() => smithy_http::label::fmt_string(label, false),
            _ => {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "workbook_id",
                    details: "cannot be empty or unset",
                })
            }
        };
        let table_id = match self.table_id.as_deref() {
            Some(label) if !label.is_empty() => smithy_http::label::fmt_string(label, false),
            _ => {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "table_id",
                    details: "cannot be empty or unset",
                })
            }
        };
        output.push_str(&format!("/workbooks/{}/tables/{}/rows/batchcreate", workbook_id, table_id));
        Ok(())
    }
    /// Creates a new builder-style object to manufacture [`BatchCreateTableRowsInput`](crate::input::BatchCreateTableRowsInput)
    pub fn builder() -> crate::input::batch_create_table_rows_input::Builder {
        crate::input::batch_create_table_rows_input::Builder::default()
    }
}

/// See [`BatchDeleteTableRowsInput`](crate::input::BatchDeleteTableRowsInput)
pub mod batch_delete_table_rows_input {
    /// A builder for [`BatchDeleteTableRowsInput`](crate::input::BatchDeleteTableRowsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        workbook_id: std::option::Option<std::string::String>,
        table_id: std::option::Option<std::string::String>,
        row_ids: std::option::Option<std::vec::Vec<std::string::String>>,
        client_request_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn workbook_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.workbook_id = Some(inp.into());
            self
        }
        pub fn set_workbook_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.workbook_id = inp;
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
        pub fn row_ids(mut self, inp: impl Into<std::string::String>) -> Self {
            let mut v = self.row_ids.unwrap_or_default();
            v.push(inp.into());
            self.row_ids = Some(v);
            self
        }
        pub fn set_row_ids(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.row_ids = inp;
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
        /// Consumes the builder and constructs a [`BatchDeleteTableRowsInput`](crate::input::BatchDeleteTableRowsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::BatchDeleteTableRowsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::BatchDeleteTableRowsInput {
                workbook_id: self.workbook_id,
                table_id: self.table_id,
                row_ids: self.row_ids,
                client_request_token: self.client_request_token,
            })
        }
    }
}

impl BatchDeleteTableRowsInput {
    /// Consumes the builder and constructs an Operation<[`BatchDeleteTableRows`](crate::operation::BatchDeleteTableRows)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::BatchDeleteTableRows, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let mut input = self.clone();
        if input.client_request_token.is_none() {
            input.client_request_token = Some(config.make_token.make_idempotency_token());
        }
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
            props.insert(aws_types::SigningService::from_static("honeycode"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::BatchDeleteTableRows::new())
            .with_metadata(smithy_http::operation::Metadata::new("BatchDeleteTableRows", "honeycode"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    fn uri_base(
        &self,
        output: &mut String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let workbook_id = match self.workbook_id.as_deref() {
            Some(label) if !label.is_empty() => smithy_http::label::fmt_string(label, false),
            _ => {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "workbook_id",
                    details: "cannot be empty or unset",
                })
            }
        };
        let table_id = match self.table_id.as_deref() {
            Some(label) if !label.is_empty() => smithy_http::label::fmt_string(label, false),
            _ => {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "table_id",
                    details: "cannot be empty or unset",
                })
            }
        };
        output.push_str(&format!("/workbooks/{}/tables/{}/rows/batchdelete", workbook_id, table_id));
        Ok(())
    }
    /// Creates a new builder-style object to manufacture [`BatchDeleteTableRowsInput`](crate::input::BatchDeleteTableRowsInput)
    pub fn builder() -> crate::input::batch_delete_table_rows_input::Builder {
        crate::input::batch_delete_table_rows_input::Builder::default()
    }
}

/// See [`BatchUpdateTableRowsInput`](crate::input::BatchUpdateTableRowsInput)
pub mod batch_update_table_rows_input {
    /// A builder for [`BatchUpdateTableRowsInput`](crate::input::BatchUpdateTableRowsInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        workbook_id: std::option::Option<std::string::String>,
        table_id: std::option::Option<std::string::String>,
        rows_to_update: std::option::Option<std::vec::Vec<crate::model::UpdateRowData>>,
        client_request_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn workbook_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.workbook_id = Some(inp.into());
            self
        }
        pub fn set_workbook_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.workbook_id = inp;
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
        pub fn rows_to_update(mut self, inp: impl Into<crate::model::UpdateRowData>) -> Self {
            let mut v = self.rows_to_update.unwrap_or_default();
            v.push(inp.into());
            self.rows_to_update = Some(v);
            self
        }
        pub fn set_rows_to_update(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::UpdateRowData>>,
        ) -> Self {
            self.rows_to_update = inp;
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
        /// Consumes the builder and constructs a [`BatchUpdateTableRowsInput`](crate::input::BatchUpdateTableRowsInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::BatchUpdateTableRowsInput, smithy_http::operation::BuildError> {
            Ok(crate::input::BatchUpdateTableRowsInput {
                workbook_id: self.workbook_id,
                table_id: self.table_id,
                rows_to_update: self.rows_to_update,
                client_request_token: self.client_request_token,
            })
        }
    }
}

impl BatchUpdateTableRowsInput {
    /// Consumes the builder and constructs an Operation<[`BatchUpdateTableRows`](crate::operation::BatchUpdateTableRows)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::BatchUpdateTableRows, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let mut input = self.clone();
        if input.client_request_token.is_none() {
            input.client_request_token = Some(config.make_token.make_idempotency_token());
        }
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
            props.insert(aws_types::SigningService::from_static("honeycode"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::BatchUpdateTableRows::new())
            .with_metadata(smithy_http::operation::Metadata::new("BatchUpdateTableRows", "honeycode"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    fn uri_base(
        &self,
        output: &mut String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let workbook_id = match self.workbook_id.as_deref() {
            Some(label) if !label.is_empty() => smithy_http::label::fmt_string(label, false),
            _ => {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "workbook_id",
                    details: "cannot be empty or unset",
                })
            }
        };
        let table_id = match self.table_id.as_deref() {
            Some(label) if !label.is_empty() => smithy_http::label::fmt_string(label, false),
            _ => {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "table_id",
                    details: "cannot be empty or unset",
                })
            }
        };
        output.push_str(&format!("/workbooks/{}/tables/{}/rows/batchupdate", workbook_id, table_id));
        Ok(())
    }
    /// Creates a new builder-style object to manufacture [`BatchUpdateTableRowsInput`](crate::input::BatchUpdateTableRowsInput)
    pub fn builder() -> crate::input::batch_update_table_rows_input::Builder {
        crate::input::batch_update_table_rows_input::Builder::default()
    }
}

/// See [`StartTableDataImportJobInput`](crate::input::StartTableDataImportJobInput)
pub mod start_table_data_import_job_input {
    /// A builder for [`StartTableDataImportJobInput`](crate::input::StartTableDataImportJobInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        workbook_id: std::option::Option<std::string::String>,
        destination_table_id: std::option::Option<std::string::String>,
        data_source: std::option::Option<crate::model::ImportDataSource>,
        data_format: std::option::Option<crate::model::ImportSourceDataFormat>,
        import_options: std::option::Option<crate::model::ImportOptions>,
        client_request_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn workbook_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.workbook_id = Some(inp.into());
            self
        }
        pub fn set_workbook_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.workbook_id = inp;
            self
        }
        pub fn destination_table_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.destination_table_id = Some(inp.into());
            self
        }
        pub fn set_destination_table_id(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.destination_table_id = inp;
            self
        }
        pub fn data_source(mut self, inp: crate::model::ImportDataSource) -> Self {
            self.data_source = Some(inp);
            self
        }
        pub fn set_data_source(
            mut self,
            inp: std::option::Option<crate::model::ImportDataSource>,
        ) -> Self {
            self.data_source = inp;
            self
        }
        pub fn data_format(mut self, inp: crate::model::ImportSourceDataFormat) -> Self {
            self.data_format = Some(inp);
            self
        }
        pub fn set_data_format(
            mut self,
            inp: std::option::Option<crate::model::ImportSourceDataFormat>,
        ) -> Self {
            self.data_format = inp;
            self
        }
        pub fn import_options(mut self, inp: crate::model::ImportOptions) -> Self {
            self.import_options = Some(inp);
            self
        }
        pub fn set_import_options(
            mut self,
            inp: std::option::Option<crate::model::ImportOptions>,
        ) -> Self {
            self.import_options = inp;
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
        /// Consumes the builder and constructs a [`StartTableDataImportJobInput`](crate::input::StartTableDataImportJobInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::StartTableDataImportJobInput, smithy_http::operation::BuildError> {
            Ok(crate::input::StartTableDataImportJobInput {
                workbook_id: self.workbook_id,
                destination_table_id: self.destination_table_id,
                data_source: self.data_source,
                data_format: self.data_format,
                import_options: self.import_options,
                client_request_token: self.client_request_token,
            })
        }
    }
}

impl StartTableDataImportJobInput {
    /// Consumes the builder and constructs an Operation<[`StartTableDataImportJob`](crate::operation::StartTableDataImportJob)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::StartTableDataImportJob, aws_http::AwsErrorRetryPolicy>,
        smithy_http::operation::BuildError,
    > {
        let mut input = self.clone();
        if input.client_request_token.is_none() {
            input.client_request_token = Some(config.make_token.make_idempotency_token());
        }
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
            props.insert(aws_types::SigningService::from_static("honeycode"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::StartTableDataImportJob::new())
            .with_metadata(smithy_http::operation::Metadata::new("StartTableDataImportJob", "honeycode"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    fn uri_base(
        &self,
        output: &mut String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let workbook_id = match self.workbook_id.as_deref() {
            Some(label) if !label.is_empty() => smithy_http::label::fmt_string(label, false),
            _ => {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "workbook_id",
                    details: "cannot be empty or unset",
                })
            }
        };
        let destination_table_id = match self.destination_table_id.as_deref() {
            Some(label) if !label.is_empty() => smithy_http::label::fmt_string(label, false),
            _ => {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "destination_table_id",
                    details: "cannot be empty or unset",
                })
            }
        };
        output.push_str(&format!("/workbooks/{}/tables/{}/import", workbook_id, destination_table_id));
        Ok(())
    }
    /// Creates a new builder-style object to manufacture [`StartTableDataImportJobInput`](crate::input::StartTableDataImportJobInput)
    pub fn builder() -> crate::input::start_table_data_import_job_input::Builder {
        crate::input::start_table_data_import_job_input::Builder::default()
    }
}

/// See [`DescribeTableDataImportJobInput`](crate::input::DescribeTableDataImportJobInput)
pub mod describe_table_data_import_job_input {
    /// A builder for [`DescribeTableDataImportJobInput`](crate::input::DescribeTableDataImportJobInput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        workbook_id: std::option::Option<std::string::String>,
        table_id: std::option::Option<std::string::String>,
        job_id: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn workbook_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.workbook_id = Some(inp.into());
            self
        }
        pub fn set_workbook_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.workbook_id = inp;
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
        pub fn job_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.job_id = Some(inp.into());
            self
        }
        pub fn set_job_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.job_id = inp;
            self
        }
        /// Consumes the builder and constructs a [`DescribeTableDataImportJobInput`](crate::input::DescribeTableDataImportJobInput)
        pub fn build(
            self,
        ) -> std::result::Result<crate::input::DescribeTableDataImportJobInput, smithy_http::operation::BuildError> {
            Ok(crate::input::DescribeTableDataImportJobInput {
                workbook_id: self.workbook_id,
                table_id: self.table_id,
                job_id: self.job_id,
            })
        }
    }
}

impl DescribeTableDataImportJobInput {
    /// Consumes the builder and constructs an Operation<[`DescribeTableDataImportJob`](crate::operation::DescribeTableDataImportJob)>
    pub fn make_operation(
        &self,
        config: &crate::config::Config,
    ) -> std::result::Result<
        smithy_http::operation::Operation<crate::operation::DescribeTableDataImportJob, aws_http::AwsErrorRetryPolicy>,
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
            props.insert(aws_types::SigningService::from_static("honeycode"));
            aws_endpoint::set_endpoint_resolver(&mut props, config.endpoint_resolver.clone());
            if let Some(region) = &config.region {
                props.insert(region.clone());
            }
            aws_auth::provider::set_provider(&mut props, config.credentials_provider.clone());
        }
        let op = smithy_http::operation::Operation::new(request, crate::operation::DescribeTableDataImportJob::new())
            .with_metadata(smithy_http::operation::Metadata::new("DescribeTableDataImportJob", "honeycode"))
            .with_retry_policy(aws_http::AwsErrorRetryPolicy::new());
        Ok(op)
    }
    fn uri_base(
        &self,
        output: &mut String,
    ) -> std::result::Result<(), smithy_http::operation::BuildError> {
        let workbook_id = match self.workbook_id.as_deref() {
            Some(label) if !label.is_empty() => smithy_http::label::fmt_string(label, false),
            _ => {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "workbook_id",
                    details: "cannot be empty or unset",
                })
            }
        };
        let table_id = match self.table_id.as_deref() {
            Some(label) if !label.is_empty() => smithy_http::label::fmt_string(label, false),
            _ => {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "table_id",
                    details: "cannot be empty or unset",
                })
            }
        };
        let job_id = match self.job_id.as_deref() {
            Some(label) if !label.is_empty() => smithy_http::label::fmt_string(label, false),
            _ => {
                return Err(smithy_http::operation::BuildError::MissingField {
                    field: "job_id",
                    details: "cannot be empty or unset",
                })
            }
        };
        output.push_str(&format!("/workbooks/{}/tables/{}/import/{}", workbook_id, table_id, job_id));
        Ok(())
    }
    /// Creates a new builder-style object to manufacture [`DescribeTableDataImportJobInput`](crate::input::DescribeTableDataImportJobInput)
    pub fn builder() -> crate::input::describe_table_data_import_job_input::Builder {
        crate::input::describe_table_data_import_job_input::Builder::default()
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
pub struct GetScreenDataInput {
    #[serde(rename = "workbookId")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub workbook_id: std::option::Option<std::string::String>,
    #[serde(rename = "appId")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub app_id: std::option::Option<std::string::String>,
    #[serde(rename = "screenId")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub screen_id: std::option::Option<std::string::String>,
    #[serde(rename = "variables")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub variables:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::VariableValue>>,
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
pub struct InvokeScreenAutomationInput {
    #[serde(skip)]
    pub workbook_id: std::option::Option<std::string::String>,
    #[serde(skip)]
    pub app_id: std::option::Option<std::string::String>,
    #[serde(skip)]
    pub screen_id: std::option::Option<std::string::String>,
    #[serde(skip)]
    pub screen_automation_id: std::option::Option<std::string::String>,
    #[serde(rename = "variables")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub variables:
        std::option::Option<std::collections::HashMap<std::string::String, crate::model::VariableValue>>,
    #[serde(rename = "rowId")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub row_id: std::option::Option<std::string::String>,
    #[serde(rename = "clientRequestToken")]
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
pub struct ListTablesInput {
    #[serde(skip)]
    pub workbook_id: std::option::Option<std::string::String>,
    #[serde(skip)]
    pub max_results: std::option::Option<i32>,
    #[serde(skip)]
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
pub struct ListTableColumnsInput {
    #[serde(skip)]
    pub workbook_id: std::option::Option<std::string::String>,
    #[serde(skip)]
    pub table_id: std::option::Option<std::string::String>,
    #[serde(skip)]
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
pub struct ListTableRowsInput {
    #[serde(skip)]
    pub workbook_id: std::option::Option<std::string::String>,
    #[serde(skip)]
    pub table_id: std::option::Option<std::string::String>,
    #[serde(rename = "rowIds")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub row_ids: std::option::Option<std::vec::Vec<std::string::String>>,
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
pub struct QueryTableRowsInput {
    #[serde(skip)]
    pub workbook_id: std::option::Option<std::string::String>,
    #[serde(skip)]
    pub table_id: std::option::Option<std::string::String>,
    #[serde(rename = "filterFormula")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub filter_formula: std::option::Option<crate::model::Filter>,
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
pub struct BatchCreateTableRowsInput {
    #[serde(skip)]
    pub workbook_id: std::option::Option<std::string::String>,
    #[serde(skip)]
    pub table_id: std::option::Option<std::string::String>,
    #[serde(rename = "rowsToCreate")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub rows_to_create: std::option::Option<std::vec::Vec<crate::model::CreateRowData>>,
    #[serde(rename = "clientRequestToken")]
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
pub struct BatchDeleteTableRowsInput {
    #[serde(skip)]
    pub workbook_id: std::option::Option<std::string::String>,
    #[serde(skip)]
    pub table_id: std::option::Option<std::string::String>,
    #[serde(rename = "rowIds")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub row_ids: std::option::Option<std::vec::Vec<std::string::String>>,
    #[serde(rename = "clientRequestToken")]
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
pub struct BatchUpdateTableRowsInput {
    #[serde(skip)]
    pub workbook_id: std::option::Option<std::string::String>,
    #[serde(skip)]
    pub table_id: std::option::Option<std::string::String>,
    #[serde(rename = "rowsToUpdate")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub rows_to_update: std::option::Option<std::vec::Vec<crate::model::UpdateRowData>>,
    #[serde(rename = "clientRequestToken")]
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
pub struct StartTableDataImportJobInput {
    #[serde(skip)]
    pub workbook_id: std::option::Option<std::string::String>,
    #[serde(skip)]
    pub destination_table_id: std::option::Option<std::string::String>,
    #[serde(rename = "dataSource")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub data_source: std::option::Option<crate::model::ImportDataSource>,
    #[serde(rename = "dataFormat")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub data_format: std::option::Option<crate::model::ImportSourceDataFormat>,
    #[serde(rename = "importOptions")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub import_options: std::option::Option<crate::model::ImportOptions>,
    #[serde(rename = "clientRequestToken")]
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
pub struct DescribeTableDataImportJobInput {
    #[serde(skip)]
    pub workbook_id: std::option::Option<std::string::String>,
    #[serde(skip)]
    pub table_id: std::option::Option<std::string::String>,
    #[serde(skip)]
    pub job_id: std::option::Option<std::string::String>,
}
