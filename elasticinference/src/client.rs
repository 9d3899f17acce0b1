/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#[derive(std::fmt::Debug)]
pub(crate) struct Handle {
    client: aws_hyper::Client<aws_hyper::conn::Standard>,
    conf: crate::Config,
}

/// Client for Amazon Elastic Inference
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

    /// Describes the locations in which a given accelerator type or set of types is present in a given region
    pub fn describe_accelerator_offerings(&self) -> fluent_builders::DescribeAcceleratorOfferings {
        fluent_builders::DescribeAcceleratorOfferings::new(self.handle.clone())
    }

    /// Describes the accelerator types available in a given region, as well as their characteristics, such as memory and throughput
    pub fn describe_accelerator_types(&self) -> fluent_builders::DescribeAcceleratorTypes {
        fluent_builders::DescribeAcceleratorTypes::new(self.handle.clone())
    }

    /// Describes information over a provided set of accelerators belonging to an account
    pub fn describe_accelerators(&self) -> fluent_builders::DescribeAccelerators {
        fluent_builders::DescribeAccelerators::new(self.handle.clone())
    }

    /// Returns all tags of an Elastic Inference Accelerator
    pub fn list_tags_for_resource(&self) -> fluent_builders::ListTagsForResource {
        fluent_builders::ListTagsForResource::new(self.handle.clone())
    }

    /// Adds the specified tags to an Elastic Inference Accelerator
    pub fn tag_resource(&self) -> fluent_builders::TagResource {
        fluent_builders::TagResource::new(self.handle.clone())
    }

    /// Removes the specified tags from an Elastic Inference Accelerator
    pub fn untag_resource(&self) -> fluent_builders::UntagResource {
        fluent_builders::UntagResource::new(self.handle.clone())
    }
}

pub mod fluent_builders {
    #[derive(std::fmt::Debug)]
    pub struct DescribeAcceleratorOfferings {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_accelerator_offerings_input::Builder,
    }
    impl DescribeAcceleratorOfferings {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(
            self) -> (super::Client, crate::input::describe_accelerator_offerings_input::Builder,
        ) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeAcceleratorOfferingsOutput,
            aws_hyper::SdkError<crate::error::DescribeAcceleratorOfferingsError>,
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
        pub fn location_type(mut self, inp: crate::model::LocationType) -> Self {
            self.inner = self.inner.location_type(inp);
            self
        }
        pub fn set_location_type(
            mut self,
            inp: std::option::Option<crate::model::LocationType>,
        ) -> Self {
            self.inner = self.inner.set_location_type(inp);
            self
        }
        pub fn accelerator_types(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.accelerator_types(inp);
            self
        }
        pub fn set_accelerator_types(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.inner = self.inner.set_accelerator_types(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct DescribeAcceleratorTypes {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_accelerator_types_input::Builder,
    }
    impl DescribeAcceleratorTypes {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(
            self) -> (super::Client, crate::input::describe_accelerator_types_input::Builder,
        ) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeAcceleratorTypesOutput,
            aws_hyper::SdkError<crate::error::DescribeAcceleratorTypesError>,
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
    pub struct DescribeAccelerators {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::describe_accelerators_input::Builder,
    }
    impl DescribeAccelerators {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(
            self) -> (super::Client, crate::input::describe_accelerators_input::Builder,
        ) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DescribeAcceleratorsOutput,
            aws_hyper::SdkError<crate::error::DescribeAcceleratorsError>,
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
        pub fn accelerator_ids(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.accelerator_ids(inp);
            self
        }
        pub fn set_accelerator_ids(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.inner = self.inner.set_accelerator_ids(inp);
            self
        }
        pub fn filters(mut self, inp: impl Into<crate::model::Filter>) -> Self {
            self.inner = self.inner.filters(inp);
            self
        }
        pub fn set_filters(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::Filter>>,
        ) -> Self {
            self.inner = self.inner.set_filters(inp);
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
        pub fn tags(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<std::string::String>,
        ) -> Self {
            self.inner = self.inner.tags(k, v);
            self
        }
        pub fn set_tags(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
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
