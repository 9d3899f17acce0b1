/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#[derive(std::fmt::Debug)]
pub(crate) struct Handle {
    client: aws_hyper::Client<aws_hyper::conn::Standard>,
    conf: crate::Config,
}

/// Client for AWS IoT Events
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

    /// Creates an input
    pub fn create_input(&self) -> fluent_builders::CreateInput {
        fluent_builders::CreateInput::new(self.handle.clone())
    }

    /// Describes an input
    pub fn describe_input(&self) -> fluent_builders::DescribeInput {
        fluent_builders::DescribeInput::new(self.handle.clone())
    }

    /// Lists the inputs you have created
    pub fn list_inputs(&self) -> fluent_builders::ListInputs {
        fluent_builders::ListInputs::new(self.handle.clone())
    }

    /// Updates an input
    pub fn update_input(&self) -> fluent_builders::UpdateInput {
        fluent_builders::UpdateInput::new(self.handle.clone())
    }

    /// Deletes an input
    pub fn delete_input(&self) -> fluent_builders::DeleteInput {
        fluent_builders::DeleteInput::new(self.handle.clone())
    }

    /// Creates a detector model
    pub fn create_detector_model(&self) -> fluent_builders::CreateDetectorModel {
        fluent_builders::CreateDetectorModel::new(self.handle.clone())
    }

    /// Describes a detector model. If the `version` parameter is not specified, information about the latest version is returned.
    pub fn describe_detector_model(&self) -> fluent_builders::DescribeDetectorModel {
        fluent_builders::DescribeDetectorModel::new(self.handle.clone())
    }

    /// Updates a detector model. Detectors created by the previous version are deleted and then re-created as new inputs arrive.
    pub fn update_detector_model(&self) -> fluent_builders::UpdateDetectorModel {
        fluent_builders::UpdateDetectorModel::new(self.handle.clone())
    }

    /// Lists the detector models you have created
    pub fn list_detector_models(&self) -> fluent_builders::ListDetectorModels {
        fluent_builders::ListDetectorModels::new(self.handle.clone())
    }

    /// Lists all the versions of a detector model
    pub fn list_detector_model_versions(&self) -> fluent_builders::ListDetectorModelVersions {
        fluent_builders::ListDetectorModelVersions::new(self.handle.clone())
    }

    /// Deletes a detector model. Any active instances of the detector model are also deleted.
    pub fn delete_detector_model(&self) -> fluent_builders::DeleteDetectorModel {
        fluent_builders::DeleteDetectorModel::new(self.handle.clone())
    }

    /// Retrieves the current settings of the AWS IoT Events logging options
    pub fn describe_logging_options(&self) -> fluent_builders::DescribeLoggingOptions {
        fluent_builders::DescribeLoggingOptions::new(self.handle.clone())
    }

    /// Sets or updates the AWS IoT Events logging options
    pub fn put_logging_options(&self) -> fluent_builders::PutLoggingOptions {
        fluent_builders::PutLoggingOptions::new(self.handle.clone())
    }

    /// Lists the tags (metadata) you have assigned to the resource
    pub fn list_tags_for_resource(&self) -> fluent_builders::ListTagsForResource {
        fluent_builders::ListTagsForResource::new(self.handle.clone())
    }

    /// Adds to or modifies the tags of the given resource
    pub fn tag_resource(&self) -> fluent_builders::TagResource {
        fluent_builders::TagResource::new(self.handle.clone())
    }

    /// Removes the given tags (metadata) from the resource
    pub fn untag_resource(&self) -> fluent_builders::UntagResource {
        fluent_builders::UntagResource::new(self.handle.clone())
    }
}

pub mod fluent_builders {
    #[derive(std::fmt::Debug)]
    pub struct CreateInput {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::create_input_input::Builder,
    }
    impl CreateInput {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> (super::Client, crate::input::create_input_input::Builder) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::CreateInputOutput,
            aws_hyper::SdkError<crate::error::CreateInputError>,
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
        pub fn input_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.input_name(inp);
            self
        }
        pub fn set_input_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_input_name(inp);
            self
        }
        pub fn input_description(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.input_description(inp);
            self
        }
        pub fn set_input_description(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.inner = self.inner.set_input_description(inp);
            self
        }
        pub fn input_definition(mut self, inp: crate::model::InputDefinition) -> Self {
            self.inner = self.inner.input_definition(inp);
            self
        }
        pub fn set_input_definition(
            mut self,
            inp: std::option::Option<crate::model::InputDefinition>,
        ) -> Self {
            self.inner = self.inner.set_input_definition(inp);
            self
        }
        pub fn tags(mut self, inp: impl Into<crate::model::Tag>) -> Self {
            self.inner = self.inner.tags(inp);
            self
        }
        pub fn set_tags(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::Tag>>,
        ) -> Self {
            self.inner = self.inner.set_tags(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct DescribeInput {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_input_input::Builder,
    }
    impl DescribeInput {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> (super::Client, crate::input::describe_input_input::Builder) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeInputOutput,
            aws_hyper::SdkError<crate::error::DescribeInputError>,
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
        pub fn input_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.input_name(inp);
            self
        }
        pub fn set_input_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_input_name(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct ListInputs {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::list_inputs_input::Builder,
    }
    impl ListInputs {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> (super::Client, crate::input::list_inputs_input::Builder) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListInputsOutput,
            aws_hyper::SdkError<crate::error::ListInputsError>,
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
    pub struct UpdateInput {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::update_input_input::Builder,
    }
    impl UpdateInput {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> (super::Client, crate::input::update_input_input::Builder) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::UpdateInputOutput,
            aws_hyper::SdkError<crate::error::UpdateInputError>,
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
        pub fn input_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.input_name(inp);
            self
        }
        pub fn set_input_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_input_name(inp);
            self
        }
        pub fn input_description(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.input_description(inp);
            self
        }
        pub fn set_input_description(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.inner = self.inner.set_input_description(inp);
            self
        }
        pub fn input_definition(mut self, inp: crate::model::InputDefinition) -> Self {
            self.inner = self.inner.input_definition(inp);
            self
        }
        pub fn set_input_definition(
            mut self,
            inp: std::option::Option<crate::model::InputDefinition>,
        ) -> Self {
            self.inner = self.inner.set_input_definition(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct DeleteInput {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::delete_input_input::Builder,
    }
    impl DeleteInput {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> (super::Client, crate::input::delete_input_input::Builder) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DeleteInputOutput,
            aws_hyper::SdkError<crate::error::DeleteInputError>,
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
        pub fn input_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.input_name(inp);
            self
        }
        pub fn set_input_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_input_name(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct CreateDetectorModel {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::create_detector_model_input::Builder,
    }
    impl CreateDetectorModel {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(
            self) -> (super::Client, crate::input::create_detector_model_input::Builder,
        ) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::CreateDetectorModelOutput,
            aws_hyper::SdkError<crate::error::CreateDetectorModelError>,
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
        pub fn detector_model_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.detector_model_name(inp);
            self
        }
        pub fn set_detector_model_name(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.inner = self.inner.set_detector_model_name(inp);
            self
        }
        pub fn detector_model_definition(
            mut self,
            inp: crate::model::DetectorModelDefinition,
        ) -> Self {
            self.inner = self.inner.detector_model_definition(inp);
            self
        }
        pub fn set_detector_model_definition(
            mut self,
            inp: std::option::Option<crate::model::DetectorModelDefinition>,
        ) -> Self {
            self.inner = self.inner.set_detector_model_definition(inp);
            self
        }
        pub fn detector_model_description(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.detector_model_description(inp);
            self
        }
        pub fn set_detector_model_description(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.inner = self.inner.set_detector_model_description(inp);
            self
        }
        pub fn key(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.key(inp);
            self
        }
        pub fn set_key(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_key(inp);
            self
        }
        pub fn role_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.role_arn(inp);
            self
        }
        pub fn set_role_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_role_arn(inp);
            self
        }
        pub fn tags(mut self, inp: impl Into<crate::model::Tag>) -> Self {
            self.inner = self.inner.tags(inp);
            self
        }
        pub fn set_tags(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::Tag>>,
        ) -> Self {
            self.inner = self.inner.set_tags(inp);
            self
        }
        pub fn evaluation_method(mut self, inp: crate::model::EvaluationMethod) -> Self {
            self.inner = self.inner.evaluation_method(inp);
            self
        }
        pub fn set_evaluation_method(
            mut self,
            inp: std::option::Option<crate::model::EvaluationMethod>,
        ) -> Self {
            self.inner = self.inner.set_evaluation_method(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct DescribeDetectorModel {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_detector_model_input::Builder,
    }
    impl DescribeDetectorModel {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(
            self) -> (super::Client, crate::input::describe_detector_model_input::Builder,
        ) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeDetectorModelOutput,
            aws_hyper::SdkError<crate::error::DescribeDetectorModelError>,
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
        pub fn detector_model_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.detector_model_name(inp);
            self
        }
        pub fn set_detector_model_name(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.inner = self.inner.set_detector_model_name(inp);
            self
        }
        pub fn detector_model_version(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.detector_model_version(inp);
            self
        }
        pub fn set_detector_model_version(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.inner = self.inner.set_detector_model_version(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct UpdateDetectorModel {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::update_detector_model_input::Builder,
    }
    impl UpdateDetectorModel {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(
            self) -> (super::Client, crate::input::update_detector_model_input::Builder,
        ) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::UpdateDetectorModelOutput,
            aws_hyper::SdkError<crate::error::UpdateDetectorModelError>,
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
        pub fn detector_model_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.detector_model_name(inp);
            self
        }
        pub fn set_detector_model_name(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.inner = self.inner.set_detector_model_name(inp);
            self
        }
        pub fn detector_model_definition(
            mut self,
            inp: crate::model::DetectorModelDefinition,
        ) -> Self {
            self.inner = self.inner.detector_model_definition(inp);
            self
        }
        pub fn set_detector_model_definition(
            mut self,
            inp: std::option::Option<crate::model::DetectorModelDefinition>,
        ) -> Self {
            self.inner = self.inner.set_detector_model_definition(inp);
            self
        }
        pub fn detector_model_description(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.detector_model_description(inp);
            self
        }
        pub fn set_detector_model_description(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.inner = self.inner.set_detector_model_description(inp);
            self
        }
        pub fn role_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.role_arn(inp);
            self
        }
        pub fn set_role_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_role_arn(inp);
            self
        }
        pub fn evaluation_method(mut self, inp: crate::model::EvaluationMethod) -> Self {
            self.inner = self.inner.evaluation_method(inp);
            self
        }
        pub fn set_evaluation_method(
            mut self,
            inp: std::option::Option<crate::model::EvaluationMethod>,
        ) -> Self {
            self.inner = self.inner.set_evaluation_method(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct ListDetectorModels {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::list_detector_models_input::Builder,
    }
    impl ListDetectorModels {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(
            self) -> (super::Client, crate::input::list_detector_models_input::Builder,
        ) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListDetectorModelsOutput,
            aws_hyper::SdkError<crate::error::ListDetectorModelsError>,
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
    pub struct ListDetectorModelVersions {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::list_detector_model_versions_input::Builder,
    }
    impl ListDetectorModelVersions {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(
            self) -> (super::Client, crate::input::list_detector_model_versions_input::Builder,
        ) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListDetectorModelVersionsOutput,
            aws_hyper::SdkError<crate::error::ListDetectorModelVersionsError>,
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
        pub fn detector_model_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.detector_model_name(inp);
            self
        }
        pub fn set_detector_model_name(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.inner = self.inner.set_detector_model_name(inp);
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
    pub struct DeleteDetectorModel {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::delete_detector_model_input::Builder,
    }
    impl DeleteDetectorModel {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(
            self) -> (super::Client, crate::input::delete_detector_model_input::Builder,
        ) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DeleteDetectorModelOutput,
            aws_hyper::SdkError<crate::error::DeleteDetectorModelError>,
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
        pub fn detector_model_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.detector_model_name(inp);
            self
        }
        pub fn set_detector_model_name(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.inner = self.inner.set_detector_model_name(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct DescribeLoggingOptions {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_logging_options_input::Builder,
    }
    impl DescribeLoggingOptions {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(
            self) -> (super::Client, crate::input::describe_logging_options_input::Builder,
        ) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeLoggingOptionsOutput,
            aws_hyper::SdkError<crate::error::DescribeLoggingOptionsError>,
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
    pub struct PutLoggingOptions {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::put_logging_options_input::Builder,
    }
    impl PutLoggingOptions {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(
            self) -> (super::Client, crate::input::put_logging_options_input::Builder,
        ) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::PutLoggingOptionsOutput,
            aws_hyper::SdkError<crate::error::PutLoggingOptionsError>,
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
        pub fn logging_options(mut self, inp: crate::model::LoggingOptions) -> Self {
            self.inner = self.inner.logging_options(inp);
            self
        }
        pub fn set_logging_options(
            mut self,
            inp: std::option::Option<crate::model::LoggingOptions>,
        ) -> Self {
            self.inner = self.inner.set_logging_options(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct ListTagsForResource {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::list_tags_for_resource_input::Builder,
    }
    impl ListTagsForResource {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(
            self) -> (super::Client, crate::input::list_tags_for_resource_input::Builder,
        ) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListTagsForResourceOutput,
            aws_hyper::SdkError<crate::error::ListTagsForResourceError>,
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
        pub fn resource_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.resource_arn(inp);
            self
        }
        pub fn set_resource_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_resource_arn(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct TagResource {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::tag_resource_input::Builder,
    }
    impl TagResource {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> (super::Client, crate::input::tag_resource_input::Builder) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::TagResourceOutput,
            aws_hyper::SdkError<crate::error::TagResourceError>,
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
        pub fn resource_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.resource_arn(inp);
            self
        }
        pub fn set_resource_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_resource_arn(inp);
            self
        }
        pub fn tags(mut self, inp: impl Into<crate::model::Tag>) -> Self {
            self.inner = self.inner.tags(inp);
            self
        }
        pub fn set_tags(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::Tag>>,
        ) -> Self {
            self.inner = self.inner.set_tags(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct UntagResource {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::untag_resource_input::Builder,
    }
    impl UntagResource {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> (super::Client, crate::input::untag_resource_input::Builder) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::UntagResourceOutput,
            aws_hyper::SdkError<crate::error::UntagResourceError>,
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
        pub fn resource_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.resource_arn(inp);
            self
        }
        pub fn set_resource_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_resource_arn(inp);
            self
        }
        pub fn tag_keys(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.tag_keys(inp);
            self
        }
        pub fn set_tag_keys(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.inner = self.inner.set_tag_keys(inp);
            self
        }
    }
}
