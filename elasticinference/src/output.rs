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
pub struct DescribeAcceleratorOfferingsOutput {
    #[serde(rename = "acceleratorTypeOfferings")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub accelerator_type_offerings:
        std::option::Option<std::vec::Vec<crate::model::AcceleratorTypeOffering>>,
}
impl DescribeAcceleratorOfferingsOutput {
    /// Creates a new builder-style object to manufacture [`DescribeAcceleratorOfferingsOutput`](crate::output::DescribeAcceleratorOfferingsOutput)
    pub fn builder() -> crate::output::describe_accelerator_offerings_output::Builder {
        crate::output::describe_accelerator_offerings_output::Builder::default()
    }
}
/// See [`DescribeAcceleratorOfferingsOutput`](crate::output::DescribeAcceleratorOfferingsOutput)
pub mod describe_accelerator_offerings_output {
    /// A builder for [`DescribeAcceleratorOfferingsOutput`](crate::output::DescribeAcceleratorOfferingsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        accelerator_type_offerings:
            std::option::Option<std::vec::Vec<crate::model::AcceleratorTypeOffering>>,
    }
    impl Builder {
        pub fn accelerator_type_offerings(
            mut self,
            inp: impl Into<crate::model::AcceleratorTypeOffering>,
        ) -> Self {
            let mut v = self.accelerator_type_offerings.unwrap_or_default();
            v.push(inp.into());
            self.accelerator_type_offerings = Some(v);
            self
        }
        pub fn set_accelerator_type_offerings(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::AcceleratorTypeOffering>>,
        ) -> Self {
            self.accelerator_type_offerings = inp;
            self
        }
        /// Consumes the builder and constructs a [`DescribeAcceleratorOfferingsOutput`](crate::output::DescribeAcceleratorOfferingsOutput)
        pub fn build(self) -> crate::output::DescribeAcceleratorOfferingsOutput {
            crate::output::DescribeAcceleratorOfferingsOutput {
                accelerator_type_offerings: self.accelerator_type_offerings,
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
pub struct DescribeAcceleratorTypesOutput {
    #[serde(rename = "acceleratorTypes")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub accelerator_types: std::option::Option<std::vec::Vec<crate::model::AcceleratorType>>,
}
impl DescribeAcceleratorTypesOutput {
    /// Creates a new builder-style object to manufacture [`DescribeAcceleratorTypesOutput`](crate::output::DescribeAcceleratorTypesOutput)
    pub fn builder() -> crate::output::describe_accelerator_types_output::Builder {
        crate::output::describe_accelerator_types_output::Builder::default()
    }
}
/// See [`DescribeAcceleratorTypesOutput`](crate::output::DescribeAcceleratorTypesOutput)
pub mod describe_accelerator_types_output {
    /// A builder for [`DescribeAcceleratorTypesOutput`](crate::output::DescribeAcceleratorTypesOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        accelerator_types: std::option::Option<std::vec::Vec<crate::model::AcceleratorType>>,
    }
    impl Builder {
        pub fn accelerator_types(mut self, inp: impl Into<crate::model::AcceleratorType>) -> Self {
            let mut v = self.accelerator_types.unwrap_or_default();
            v.push(inp.into());
            self.accelerator_types = Some(v);
            self
        }
        pub fn set_accelerator_types(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::AcceleratorType>>,
        ) -> Self {
            self.accelerator_types = inp;
            self
        }
        /// Consumes the builder and constructs a [`DescribeAcceleratorTypesOutput`](crate::output::DescribeAcceleratorTypesOutput)
        pub fn build(self) -> crate::output::DescribeAcceleratorTypesOutput {
            crate::output::DescribeAcceleratorTypesOutput {
                accelerator_types: self.accelerator_types,
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
pub struct DescribeAcceleratorsOutput {
    #[serde(rename = "acceleratorSet")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub accelerator_set:
        std::option::Option<std::vec::Vec<crate::model::ElasticInferenceAccelerator>>,
    #[serde(rename = "nextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}
impl DescribeAcceleratorsOutput {
    /// Creates a new builder-style object to manufacture [`DescribeAcceleratorsOutput`](crate::output::DescribeAcceleratorsOutput)
    pub fn builder() -> crate::output::describe_accelerators_output::Builder {
        crate::output::describe_accelerators_output::Builder::default()
    }
}
/// See [`DescribeAcceleratorsOutput`](crate::output::DescribeAcceleratorsOutput)
pub mod describe_accelerators_output {
    /// A builder for [`DescribeAcceleratorsOutput`](crate::output::DescribeAcceleratorsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        accelerator_set:
            std::option::Option<std::vec::Vec<crate::model::ElasticInferenceAccelerator>>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn accelerator_set(
            mut self,
            inp: impl Into<crate::model::ElasticInferenceAccelerator>,
        ) -> Self {
            let mut v = self.accelerator_set.unwrap_or_default();
            v.push(inp.into());
            self.accelerator_set = Some(v);
            self
        }
        pub fn set_accelerator_set(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::ElasticInferenceAccelerator>>,
        ) -> Self {
            self.accelerator_set = inp;
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
        /// Consumes the builder and constructs a [`DescribeAcceleratorsOutput`](crate::output::DescribeAcceleratorsOutput)
        pub fn build(self) -> crate::output::DescribeAcceleratorsOutput {
            crate::output::DescribeAcceleratorsOutput {
                accelerator_set: self.accelerator_set,
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
pub struct ListTagsForResourceOutput {
    #[serde(rename = "tags")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tags:
        std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
}
impl ListTagsForResourceOutput {
    /// Creates a new builder-style object to manufacture [`ListTagsForResourceOutput`](crate::output::ListTagsForResourceOutput)
    pub fn builder() -> crate::output::list_tags_for_resource_output::Builder {
        crate::output::list_tags_for_resource_output::Builder::default()
    }
}
/// See [`ListTagsForResourceOutput`](crate::output::ListTagsForResourceOutput)
pub mod list_tags_for_resource_output {
    /// A builder for [`ListTagsForResourceOutput`](crate::output::ListTagsForResourceOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        tags:
            std::option::Option<std::collections::HashMap<std::string::String, std::string::String>>,
    }
    impl Builder {
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
        /// Consumes the builder and constructs a [`ListTagsForResourceOutput`](crate::output::ListTagsForResourceOutput)
        pub fn build(self) -> crate::output::ListTagsForResourceOutput {
            crate::output::ListTagsForResourceOutput {
                tags: self.tags,
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
pub struct TagResourceOutput {
}
impl TagResourceOutput {
    /// Creates a new builder-style object to manufacture [`TagResourceOutput`](crate::output::TagResourceOutput)
    pub fn builder() -> crate::output::tag_resource_output::Builder {
        crate::output::tag_resource_output::Builder::default()
    }
}
/// See [`TagResourceOutput`](crate::output::TagResourceOutput)
pub mod tag_resource_output {
    /// A builder for [`TagResourceOutput`](crate::output::TagResourceOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
    }
    impl Builder {
        /// Consumes the builder and constructs a [`TagResourceOutput`](crate::output::TagResourceOutput)
        pub fn build(self) -> crate::output::TagResourceOutput {
            crate::output::TagResourceOutput {
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
pub struct UntagResourceOutput {
}
impl UntagResourceOutput {
    /// Creates a new builder-style object to manufacture [`UntagResourceOutput`](crate::output::UntagResourceOutput)
    pub fn builder() -> crate::output::untag_resource_output::Builder {
        crate::output::untag_resource_output::Builder::default()
    }
}
/// See [`UntagResourceOutput`](crate::output::UntagResourceOutput)
pub mod untag_resource_output {
    /// A builder for [`UntagResourceOutput`](crate::output::UntagResourceOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
    }
    impl Builder {
        /// Consumes the builder and constructs a [`UntagResourceOutput`](crate::output::UntagResourceOutput)
        pub fn build(self) -> crate::output::UntagResourceOutput {
            crate::output::UntagResourceOutput {
            }
        }
    }
}
