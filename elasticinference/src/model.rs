/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::Eq,
    std::cmp::Ord,
    std::cmp::PartialEq,
    std::cmp::PartialOrd,
    std::fmt::Debug,
    std::hash::Hash,
)]
pub enum LocationType {
    Region,
    AvailabilityZone,
    AvailabilityZoneId,
    /// A value the service returned that this version of the client does not know about
    Unknown(String),
}
impl std::convert::From<&str> for LocationType {
    fn from(s: &str) -> Self {
        match s {
            "region" => LocationType::Region,
            "availability-zone" => LocationType::AvailabilityZone,
            "availability-zone-id" => LocationType::AvailabilityZoneId,
            other => LocationType::Unknown(other.to_owned()),
        }
    }
}
impl std::str::FromStr for LocationType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(LocationType::from(s))
    }
}
impl LocationType {
    pub fn as_str(&self) -> &str {
        match self {
            LocationType::Region => "region",
            LocationType::AvailabilityZone => "availability-zone",
            LocationType::AvailabilityZoneId => "availability-zone-id",
            LocationType::Unknown(s) => s.as_ref(),
        }
    }
    /// Every value known to this version of the client
    pub fn values() -> &'static [&'static str] {
        &["region", "availability-zone", "availability-zone-id"]
    }
}
impl AsRef<str> for LocationType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl serde::Serialize for LocationType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for LocationType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(LocationType::from(data.as_str()))
    }
}

/// The offering for an Elastic Inference Accelerator type
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct AcceleratorTypeOffering {
    #[serde(rename = "acceleratorType")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub accelerator_type: std::option::Option<std::string::String>,
    #[serde(rename = "locationType")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub location_type: std::option::Option<crate::model::LocationType>,
    #[serde(rename = "location")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub location: std::option::Option<std::string::String>,
}
impl AcceleratorTypeOffering {
    /// Creates a new builder-style object to manufacture [`AcceleratorTypeOffering`](crate::model::AcceleratorTypeOffering)
    pub fn builder() -> crate::model::accelerator_type_offering::Builder {
        crate::model::accelerator_type_offering::Builder::default()
    }
}
/// See [`AcceleratorTypeOffering`](crate::model::AcceleratorTypeOffering)
pub mod accelerator_type_offering {
    /// A builder for [`AcceleratorTypeOffering`](crate::model::AcceleratorTypeOffering)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        accelerator_type: std::option::Option<std::string::String>,
        location_type: std::option::Option<crate::model::LocationType>,
        location: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn accelerator_type(mut self, inp: impl Into<std::string::String>) -> Self {
            self.accelerator_type = Some(inp.into());
            self
        }
        pub fn set_accelerator_type(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.accelerator_type = inp;
            self
        }
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
        pub fn location(mut self, inp: impl Into<std::string::String>) -> Self {
            self.location = Some(inp.into());
            self
        }
        pub fn set_location(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.location = inp;
            self
        }
        /// Consumes the builder and constructs a [`AcceleratorTypeOffering`](crate::model::AcceleratorTypeOffering)
        pub fn build(self) -> crate::model::AcceleratorTypeOffering {
            crate::model::AcceleratorTypeOffering {
                accelerator_type: self.accelerator_type,
                location_type: self.location_type,
                location: self.location,
            }
        }
    }
}

/// The memory information of an Elastic Inference Accelerator type
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct MemoryInfo {
    #[serde(rename = "sizeInMiB")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub size_in_mi_b: std::option::Option<i32>,
}
impl MemoryInfo {
    /// Creates a new builder-style object to manufacture [`MemoryInfo`](crate::model::MemoryInfo)
    pub fn builder() -> crate::model::memory_info::Builder {
        crate::model::memory_info::Builder::default()
    }
}
/// See [`MemoryInfo`](crate::model::MemoryInfo)
pub mod memory_info {
    /// A builder for [`MemoryInfo`](crate::model::MemoryInfo)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        size_in_mi_b: std::option::Option<i32>,
    }
    impl Builder {
        pub fn size_in_mi_b(mut self, inp: i32) -> Self {
            self.size_in_mi_b = Some(inp);
            self
        }
        pub fn set_size_in_mi_b(mut self, inp: std::option::Option<i32>) -> Self {
            self.size_in_mi_b = inp;
            self
        }
        /// Consumes the builder and constructs a [`MemoryInfo`](crate::model::MemoryInfo)
        pub fn build(self) -> crate::model::MemoryInfo {
            crate::model::MemoryInfo {
                size_in_mi_b: self.size_in_mi_b,
            }
        }
    }
}

/// A throughput entry for an Elastic Inference Accelerator type
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct KeyValuePair {
    /// The throughput value of the Elastic Inference Accelerator type. It can assume the following values: TFLOPS16bit: the throughput expressed in 16bit TeraFLOPS. TFLOPS32bit: the throughput expressed in 32bit TeraFLOPS.
    #[serde(rename = "key")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub key: std::option::Option<std::string::String>,
    #[serde(rename = "value")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub value: std::option::Option<i32>,
}
impl KeyValuePair {
    /// Creates a new builder-style object to manufacture [`KeyValuePair`](crate::model::KeyValuePair)
    pub fn builder() -> crate::model::key_value_pair::Builder {
        crate::model::key_value_pair::Builder::default()
    }
}
/// See [`KeyValuePair`](crate::model::KeyValuePair)
pub mod key_value_pair {
    /// A builder for [`KeyValuePair`](crate::model::KeyValuePair)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        key: std::option::Option<std::string::String>,
        value: std::option::Option<i32>,
    }
    impl Builder {
        /// The throughput value of the Elastic Inference Accelerator type. It can assume the following values: TFLOPS16bit: the throughput expressed in 16bit TeraFLOPS. TFLOPS32bit: the throughput expressed in 32bit TeraFLOPS.
        pub fn key(mut self, inp: impl Into<std::string::String>) -> Self {
            self.key = Some(inp.into());
            self
        }
        pub fn set_key(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.key = inp;
            self
        }
        pub fn value(mut self, inp: i32) -> Self {
            self.value = Some(inp);
            self
        }
        pub fn set_value(mut self, inp: std::option::Option<i32>) -> Self {
            self.value = inp;
            self
        }
        /// Consumes the builder and constructs a [`KeyValuePair`](crate::model::KeyValuePair)
        pub fn build(self) -> crate::model::KeyValuePair {
            crate::model::KeyValuePair {
                key: self.key,
                value: self.value,
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
    serde::Serialize,
    serde::Deserialize,
)]
pub struct AcceleratorType {
    #[serde(rename = "acceleratorTypeName")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub accelerator_type_name: std::option::Option<std::string::String>,
    #[serde(rename = "memoryInfo")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub memory_info: std::option::Option<crate::model::MemoryInfo>,
    #[serde(rename = "throughputInfo")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub throughput_info: std::option::Option<std::vec::Vec<crate::model::KeyValuePair>>,
}
impl AcceleratorType {
    /// Creates a new builder-style object to manufacture [`AcceleratorType`](crate::model::AcceleratorType)
    pub fn builder() -> crate::model::accelerator_type::Builder {
        crate::model::accelerator_type::Builder::default()
    }
}
/// See [`AcceleratorType`](crate::model::AcceleratorType)
pub mod accelerator_type {
    /// A builder for [`AcceleratorType`](crate::model::AcceleratorType)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        accelerator_type_name: std::option::Option<std::string::String>,
        memory_info: std::option::Option<crate::model::MemoryInfo>,
        throughput_info: std::option::Option<std::vec::Vec<crate::model::KeyValuePair>>,
    }
    impl Builder {
        pub fn accelerator_type_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.accelerator_type_name = Some(inp.into());
            self
        }
        pub fn set_accelerator_type_name(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.accelerator_type_name = inp;
            self
        }
        pub fn memory_info(mut self, inp: crate::model::MemoryInfo) -> Self {
            self.memory_info = Some(inp);
            self
        }
        pub fn set_memory_info(
            mut self,
            inp: std::option::Option<crate::model::MemoryInfo>,
        ) -> Self {
            self.memory_info = inp;
            self
        }
        pub fn throughput_info(mut self, inp: impl Into<crate::model::KeyValuePair>) -> Self {
            let mut v = self.throughput_info.unwrap_or_default();
            v.push(inp.into());
            self.throughput_info = Some(v);
            self
        }
        pub fn set_throughput_info(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::KeyValuePair>>,
        ) -> Self {
            self.throughput_info = inp;
            self
        }
        /// Consumes the builder and constructs a [`AcceleratorType`](crate::model::AcceleratorType)
        pub fn build(self) -> crate::model::AcceleratorType {
            crate::model::AcceleratorType {
                accelerator_type_name: self.accelerator_type_name,
                memory_info: self.memory_info,
                throughput_info: self.throughput_info,
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
    serde::Serialize,
    serde::Deserialize,
)]
pub struct ElasticInferenceAcceleratorHealth {
    #[serde(rename = "status")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<std::string::String>,
}
impl ElasticInferenceAcceleratorHealth {
    /// Creates a new builder-style object to manufacture [`ElasticInferenceAcceleratorHealth`](crate::model::ElasticInferenceAcceleratorHealth)
    pub fn builder() -> crate::model::elastic_inference_accelerator_health::Builder {
        crate::model::elastic_inference_accelerator_health::Builder::default()
    }
}
/// See [`ElasticInferenceAcceleratorHealth`](crate::model::ElasticInferenceAcceleratorHealth)
pub mod elastic_inference_accelerator_health {
    /// A builder for [`ElasticInferenceAcceleratorHealth`](crate::model::ElasticInferenceAcceleratorHealth)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        status: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn status(mut self, inp: impl Into<std::string::String>) -> Self {
            self.status = Some(inp.into());
            self
        }
        pub fn set_status(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.status = inp;
            self
        }
        /// Consumes the builder and constructs a [`ElasticInferenceAcceleratorHealth`](crate::model::ElasticInferenceAcceleratorHealth)
        pub fn build(self) -> crate::model::ElasticInferenceAcceleratorHealth {
            crate::model::ElasticInferenceAcceleratorHealth {
                status: self.status,
            }
        }
    }
}

/// The details of an Elastic Inference Accelerator
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct ElasticInferenceAccelerator {
    #[serde(rename = "acceleratorHealth")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub accelerator_health: std::option::Option<crate::model::ElasticInferenceAcceleratorHealth>,
    #[serde(rename = "acceleratorType")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub accelerator_type: std::option::Option<std::string::String>,
    #[serde(rename = "acceleratorId")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub accelerator_id: std::option::Option<std::string::String>,
    #[serde(rename = "availabilityZone")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub availability_zone: std::option::Option<std::string::String>,
    #[serde(rename = "attachedResource")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub attached_resource: std::option::Option<std::string::String>,
}
impl ElasticInferenceAccelerator {
    /// Creates a new builder-style object to manufacture [`ElasticInferenceAccelerator`](crate::model::ElasticInferenceAccelerator)
    pub fn builder() -> crate::model::elastic_inference_accelerator::Builder {
        crate::model::elastic_inference_accelerator::Builder::default()
    }
}
/// See [`ElasticInferenceAccelerator`](crate::model::ElasticInferenceAccelerator)
pub mod elastic_inference_accelerator {
    /// A builder for [`ElasticInferenceAccelerator`](crate::model::ElasticInferenceAccelerator)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        accelerator_health: std::option::Option<crate::model::ElasticInferenceAcceleratorHealth>,
        accelerator_type: std::option::Option<std::string::String>,
        accelerator_id: std::option::Option<std::string::String>,
        availability_zone: std::option::Option<std::string::String>,
        attached_resource: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn accelerator_health(
            mut self,
            inp: crate::model::ElasticInferenceAcceleratorHealth,
        ) -> Self {
            self.accelerator_health = Some(inp);
            self
        }
        pub fn set_accelerator_health(
            mut self,
            inp: std::option::Option<crate::model::ElasticInferenceAcceleratorHealth>,
        ) -> Self {
            self.accelerator_health = inp;
            self
        }
        pub fn accelerator_type(mut self, inp: impl Into<std::string::String>) -> Self {
            self.accelerator_type = Some(inp.into());
            self
        }
        pub fn set_accelerator_type(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.accelerator_type = inp;
            self
        }
        pub fn accelerator_id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.accelerator_id = Some(inp.into());
            self
        }
        pub fn set_accelerator_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.accelerator_id = inp;
            self
        }
        pub fn availability_zone(mut self, inp: impl Into<std::string::String>) -> Self {
            self.availability_zone = Some(inp.into());
            self
        }
        pub fn set_availability_zone(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.availability_zone = inp;
            self
        }
        pub fn attached_resource(mut self, inp: impl Into<std::string::String>) -> Self {
            self.attached_resource = Some(inp.into());
            self
        }
        pub fn set_attached_resource(
            mut self,
            inp: std::option::Option<std::string::String>,
        ) -> Self {
            self.attached_resource = inp;
            self
        }
        /// Consumes the builder and constructs a [`ElasticInferenceAccelerator`](crate::model::ElasticInferenceAccelerator)
        pub fn build(self) -> crate::model::ElasticInferenceAccelerator {
            crate::model::ElasticInferenceAccelerator {
                accelerator_health: self.accelerator_health,
                accelerator_type: self.accelerator_type,
                accelerator_id: self.accelerator_id,
                availability_zone: self.availability_zone,
                attached_resource: self.attached_resource,
            }
        }
    }
}

/// A filter expression for the Elastic Inference Accelerator list
#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Filter {
    /// The filter name for the Elastic Inference Accelerator list. It can assume the following values: accelerator-type, instance-id, attachment-id, availability-zone
    #[serde(rename = "name")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,
    /// The values for the filter of the Elastic Inference Accelerator list
    #[serde(rename = "values")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub values: std::option::Option<std::vec::Vec<std::string::String>>,
}
impl Filter {
    /// Creates a new builder-style object to manufacture [`Filter`](crate::model::Filter)
    pub fn builder() -> crate::model::filter::Builder {
        crate::model::filter::Builder::default()
    }
}
/// See [`Filter`](crate::model::Filter)
pub mod filter {
    /// A builder for [`Filter`](crate::model::Filter)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        name: std::option::Option<std::string::String>,
        values: std::option::Option<std::vec::Vec<std::string::String>>,
    }
    impl Builder {
        /// The filter name for the Elastic Inference Accelerator list. It can assume the following values: accelerator-type, instance-id, attachment-id, availability-zone
        pub fn name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.name = Some(inp.into());
            self
        }
        pub fn set_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.name = inp;
            self
        }
        /// The values for the filter of the Elastic Inference Accelerator list
        pub fn values(mut self, inp: impl Into<std::string::String>) -> Self {
            let mut v = self.values.unwrap_or_default();
            v.push(inp.into());
            self.values = Some(v);
            self
        }
        pub fn set_values(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.values = inp;
            self
        }
        /// Consumes the builder and constructs a [`Filter`](crate::model::Filter)
        pub fn build(self) -> crate::model::Filter {
            crate::model::Filter {
                name: self.name,
                values: self.values,
            }
        }
    }
}
