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
pub struct CreateInputOutput {
    #[serde(rename = "inputConfiguration")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub input_configuration: std::option::Option<crate::model::InputConfiguration>,
}
impl CreateInputOutput {
    /// Creates a new builder-style object to manufacture [`CreateInputOutput`](crate::output::CreateInputOutput)
    pub fn builder() -> crate::output::create_input_output::Builder {
        crate::output::create_input_output::Builder::default()
    }
}
/// See [`CreateInputOutput`](crate::output::CreateInputOutput)
pub mod create_input_output {
    /// A builder for [`CreateInputOutput`](crate::output::CreateInputOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        input_configuration: std::option::Option<crate::model::InputConfiguration>,
    }
    impl Builder {
        pub fn input_configuration(mut self, inp: crate::model::InputConfiguration) -> Self {
            self.input_configuration = Some(inp);
            self
        }
        pub fn set_input_configuration(
            mut self,
            inp: std::option::Option<crate::model::InputConfiguration>,
        ) -> Self {
            self.input_configuration = inp;
            self
        }
        /// Consumes the builder and constructs a [`CreateInputOutput`](crate::output::CreateInputOutput)
        pub fn build(self) -> crate::output::CreateInputOutput {
            crate::output::CreateInputOutput {
                input_configuration: self.input_configuration,
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
pub struct DescribeInputOutput {
    #[serde(rename = "input")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub input: std::option::Option<crate::model::Input>,
}
impl DescribeInputOutput {
    /// Creates a new builder-style object to manufacture [`DescribeInputOutput`](crate::output::DescribeInputOutput)
    pub fn builder() -> crate::output::describe_input_output::Builder {
        crate::output::describe_input_output::Builder::default()
    }
}
/// See [`DescribeInputOutput`](crate::output::DescribeInputOutput)
pub mod describe_input_output {
    /// A builder for [`DescribeInputOutput`](crate::output::DescribeInputOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        input: std::option::Option<crate::model::Input>,
    }
    impl Builder {
        pub fn input(mut self, inp: crate::model::Input) -> Self {
            self.input = Some(inp);
            self
        }
        pub fn set_input(mut self, inp: std::option::Option<crate::model::Input>) -> Self {
            self.input = inp;
            self
        }
        /// Consumes the builder and constructs a [`DescribeInputOutput`](crate::output::DescribeInputOutput)
        pub fn build(self) -> crate::output::DescribeInputOutput {
            crate::output::DescribeInputOutput {
                input: self.input,
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
pub struct ListInputsOutput {
    #[serde(rename = "inputSummaries")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub input_summaries: std::option::Option<std::vec::Vec<crate::model::InputSummary>>,
    #[serde(rename = "nextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}
impl ListInputsOutput {
    /// Creates a new builder-style object to manufacture [`ListInputsOutput`](crate::output::ListInputsOutput)
    pub fn builder() -> crate::output::list_inputs_output::Builder {
        crate::output::list_inputs_output::Builder::default()
    }
}
/// See [`ListInputsOutput`](crate::output::ListInputsOutput)
pub mod list_inputs_output {
    /// A builder for [`ListInputsOutput`](crate::output::ListInputsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        input_summaries: std::option::Option<std::vec::Vec<crate::model::InputSummary>>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn input_summaries(mut self, inp: impl Into<crate::model::InputSummary>) -> Self {
            let mut v = self.input_summaries.unwrap_or_default();
            v.push(inp.into());
            self.input_summaries = Some(v);
            self
        }
        pub fn set_input_summaries(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::InputSummary>>,
        ) -> Self {
            self.input_summaries = inp;
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
        /// Consumes the builder and constructs a [`ListInputsOutput`](crate::output::ListInputsOutput)
        pub fn build(self) -> crate::output::ListInputsOutput {
            crate::output::ListInputsOutput {
                input_summaries: self.input_summaries,
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
pub struct UpdateInputOutput {
    #[serde(rename = "inputConfiguration")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub input_configuration: std::option::Option<crate::model::InputConfiguration>,
}
impl UpdateInputOutput {
    /// Creates a new builder-style object to manufacture [`UpdateInputOutput`](crate::output::UpdateInputOutput)
    pub fn builder() -> crate::output::update_input_output::Builder {
        crate::output::update_input_output::Builder::default()
    }
}
/// See [`UpdateInputOutput`](crate::output::UpdateInputOutput)
pub mod update_input_output {
    /// A builder for [`UpdateInputOutput`](crate::output::UpdateInputOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        input_configuration: std::option::Option<crate::model::InputConfiguration>,
    }
    impl Builder {
        pub fn input_configuration(mut self, inp: crate::model::InputConfiguration) -> Self {
            self.input_configuration = Some(inp);
            self
        }
        pub fn set_input_configuration(
            mut self,
            inp: std::option::Option<crate::model::InputConfiguration>,
        ) -> Self {
            self.input_configuration = inp;
            self
        }
        /// Consumes the builder and constructs a [`UpdateInputOutput`](crate::output::UpdateInputOutput)
        pub fn build(self) -> crate::output::UpdateInputOutput {
            crate::output::UpdateInputOutput {
                input_configuration: self.input_configuration,
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
pub struct DeleteInputOutput {
}
impl DeleteInputOutput {
    /// Creates a new builder-style object to manufacture [`DeleteInputOutput`](crate::output::DeleteInputOutput)
    pub fn builder() -> crate::output::delete_input_output::Builder {
        crate::output::delete_input_output::Builder::default()
    }
}
/// See [`DeleteInputOutput`](crate::output::DeleteInputOutput)
pub mod delete_input_output {
    /// A builder for [`DeleteInputOutput`](crate::output::DeleteInputOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
    }
    impl Builder {
        /// Consumes the builder and constructs a [`DeleteInputOutput`](crate::output::DeleteInputOutput)
        pub fn build(self) -> crate::output::DeleteInputOutput {
            crate::output::DeleteInputOutput {
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
pub struct CreateDetectorModelOutput {
    #[serde(rename = "detectorModelConfiguration")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub detector_model_configuration: std::option::Option<crate::model::DetectorModelConfiguration>,
}
impl CreateDetectorModelOutput {
    /// Creates a new builder-style object to manufacture [`CreateDetectorModelOutput`](crate::output::CreateDetectorModelOutput)
    pub fn builder() -> crate::output::create_detector_model_output::Builder {
        crate::output::create_detector_model_output::Builder::default()
    }
}
/// See [`CreateDetectorModelOutput`](crate::output::CreateDetectorModelOutput)
pub mod create_detector_model_output {
    /// A builder for [`CreateDetectorModelOutput`](crate::output::CreateDetectorModelOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        detector_model_configuration: std::option::Option<crate::model::DetectorModelConfiguration>,
    }
    impl Builder {
        pub fn detector_model_configuration(
            mut self,
            inp: crate::model::DetectorModelConfiguration,
        ) -> Self {
            self.detector_model_configuration = Some(inp);
            self
        }
        pub fn set_detector_model_configuration(
            mut self,
            inp: std::option::Option<crate::model::DetectorModelConfiguration>,
        ) -> Self {
            self.detector_model_configuration = inp;
            self
        }
        /// Consumes the builder and constructs a [`CreateDetectorModelOutput`](crate::output::CreateDetectorModelOutput)
        pub fn build(self) -> crate::output::CreateDetectorModelOutput {
            crate::output::CreateDetectorModelOutput {
                detector_model_configuration: self.detector_model_configuration,
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
pub struct DescribeDetectorModelOutput {
    #[serde(rename = "detectorModel")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub detector_model: std::option::Option<crate::model::DetectorModel>,
}
impl DescribeDetectorModelOutput {
    /// Creates a new builder-style object to manufacture [`DescribeDetectorModelOutput`](crate::output::DescribeDetectorModelOutput)
    pub fn builder() -> crate::output::describe_detector_model_output::Builder {
        crate::output::describe_detector_model_output::Builder::default()
    }
}
/// See [`DescribeDetectorModelOutput`](crate::output::DescribeDetectorModelOutput)
pub mod describe_detector_model_output {
    /// A builder for [`DescribeDetectorModelOutput`](crate::output::DescribeDetectorModelOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        detector_model: std::option::Option<crate::model::DetectorModel>,
    }
    impl Builder {
        pub fn detector_model(mut self, inp: crate::model::DetectorModel) -> Self {
            self.detector_model = Some(inp);
            self
        }
        pub fn set_detector_model(
            mut self,
            inp: std::option::Option<crate::model::DetectorModel>,
        ) -> Self {
            self.detector_model = inp;
            self
        }
        /// Consumes the builder and constructs a [`DescribeDetectorModelOutput`](crate::output::DescribeDetectorModelOutput)
        pub fn build(self) -> crate::output::DescribeDetectorModelOutput {
            crate::output::DescribeDetectorModelOutput {
                detector_model: self.detector_model,
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
pub struct UpdateDetectorModelOutput {
    #[serde(rename = "detectorModelConfiguration")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub detector_model_configuration: std::option::Option<crate::model::DetectorModelConfiguration>,
}
impl UpdateDetectorModelOutput {
    /// Creates a new builder-style object to manufacture [`UpdateDetectorModelOutput`](crate::output::UpdateDetectorModelOutput)
    pub fn builder() -> crate::output::update_detector_model_output::Builder {
        crate::output::update_detector_model_output::Builder::default()
    }
}
/// See [`UpdateDetectorModelOutput`](crate::output::UpdateDetectorModelOutput)
pub mod update_detector_model_output {
    /// A builder for [`UpdateDetectorModelOutput`](crate::output::UpdateDetectorModelOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        detector_model_configuration: std::option::Option<crate::model::DetectorModelConfiguration>,
    }
    impl Builder {
        pub fn detector_model_configuration(
            mut self,
            inp: crate::model::DetectorModelConfiguration,
        ) -> Self {
            self.detector_model_configuration = Some(inp);
            self
        }
        pub fn set_detector_model_configuration(
            mut self,
            inp: std::option::Option<crate::model::DetectorModelConfiguration>,
        ) -> Self {
            self.detector_model_configuration = inp;
            self
        }
        /// Consumes the builder and constructs a [`UpdateDetectorModelOutput`](crate::output::UpdateDetectorModelOutput)
        pub fn build(self) -> crate::output::UpdateDetectorModelOutput {
            crate::output::UpdateDetectorModelOutput {
                detector_model_configuration: self.detector_model_configuration,
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
pub struct ListDetectorModelsOutput {
    #[serde(rename = "detectorModelSummaries")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub detector_model_summaries:
        std::option::Option<std::vec::Vec<crate::model::DetectorModelSummary>>,
    #[serde(rename = "nextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}
impl ListDetectorModelsOutput {
    /// Creates a new builder-style object to manufacture [`ListDetectorModelsOutput`](crate::output::ListDetectorModelsOutput)
    pub fn builder() -> crate::output::list_detector_models_output::Builder {
        crate::output::list_detector_models_output::Builder::default()
    }
}
/// See [`ListDetectorModelsOutput`](crate::output::ListDetectorModelsOutput)
pub mod list_detector_models_output {
    /// A builder for [`ListDetectorModelsOutput`](crate::output::ListDetectorModelsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        detector_model_summaries:
            std::option::Option<std::vec::Vec<crate::model::DetectorModelSummary>>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn detector_model_summaries(
            mut self,
            inp: impl Into<crate::model::DetectorModelSummary>,
        ) -> Self {
            let mut v = self.detector_model_summaries.unwrap_or_default();
            v.push(inp.into());
            self.detector_model_summaries = Some(v);
            self
        }
        pub fn set_detector_model_summaries(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::DetectorModelSummary>>,
        ) -> Self {
            self.detector_model_summaries = inp;
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
        /// Consumes the builder and constructs a [`ListDetectorModelsOutput`](crate::output::ListDetectorModelsOutput)
        pub fn build(self) -> crate::output::ListDetectorModelsOutput {
            crate::output::ListDetectorModelsOutput {
                detector_model_summaries: self.detector_model_summaries,
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
pub struct ListDetectorModelVersionsOutput {
    #[serde(rename = "detectorModelVersionSummaries")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub detector_model_version_summaries:
        std::option::Option<std::vec::Vec<crate::model::DetectorModelVersionSummary>>,
    #[serde(rename = "nextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}
impl ListDetectorModelVersionsOutput {
    /// Creates a new builder-style object to manufacture [`ListDetectorModelVersionsOutput`](crate::output::ListDetectorModelVersionsOutput)
    pub fn builder() -> crate::output::list_detector_model_versions_output::Builder {
        crate::output::list_detector_model_versions_output::Builder::default()
    }
}
/// See [`ListDetectorModelVersionsOutput`](crate::output::ListDetectorModelVersionsOutput)
pub mod list_detector_model_versions_output {
    /// A builder for [`ListDetectorModelVersionsOutput`](crate::output::ListDetectorModelVersionsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        detector_model_version_summaries:
            std::option::Option<std::vec::Vec<crate::model::DetectorModelVersionSummary>>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn detector_model_version_summaries(
            mut self,
            inp: impl Into<crate::model::DetectorModelVersionSummary>,
        ) -> Self {
            let mut v = self.detector_model_version_summaries.unwrap_or_default();
            v.push(inp.into());
            self.detector_model_version_summaries = Some(v);
            self
        }
        pub fn set_detector_model_version_summaries(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::DetectorModelVersionSummary>>,
        ) -> Self {
            self.detector_model_version_summaries = inp;
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
        /// Consumes the builder and constructs a [`ListDetectorModelVersionsOutput`](crate::output::ListDetectorModelVersionsOutput)
        pub fn build(self) -> crate::output::ListDetectorModelVersionsOutput {
            crate::output::ListDetectorModelVersionsOutput {
                detector_model_version_summaries: self.detector_model_version_summaries,
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
pub struct DeleteDetectorModelOutput {
}
impl DeleteDetectorModelOutput {
    /// Creates a new builder-style object to manufacture [`DeleteDetectorModelOutput`](crate::output::DeleteDetectorModelOutput)
    pub fn builder() -> crate::output::delete_detector_model_output::Builder {
        crate::output::delete_detector_model_output::Builder::default()
    }
}
/// See [`DeleteDetectorModelOutput`](crate::output::DeleteDetectorModelOutput)
pub mod delete_detector_model_output {
    /// A builder for [`DeleteDetectorModelOutput`](crate::output::DeleteDetectorModelOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
    }
    impl Builder {
        /// Consumes the builder and constructs a [`DeleteDetectorModelOutput`](crate::output::DeleteDetectorModelOutput)
        pub fn build(self) -> crate::output::DeleteDetectorModelOutput {
            crate::output::DeleteDetectorModelOutput {
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
pub struct DescribeLoggingOptionsOutput {
    #[serde(rename = "loggingOptions")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub logging_options: std::option::Option<crate::model::LoggingOptions>,
}
impl DescribeLoggingOptionsOutput {
    /// Creates a new builder-style object to manufacture [`DescribeLoggingOptionsOutput`](crate::output::DescribeLoggingOptionsOutput)
    pub fn builder() -> crate::output::describe_logging_options_output::Builder {
        crate::output::describe_logging_options_output::Builder::default()
    }
}
/// See [`DescribeLoggingOptionsOutput`](crate::output::DescribeLoggingOptionsOutput)
pub mod describe_logging_options_output {
    /// A builder for [`DescribeLoggingOptionsOutput`](crate::output::DescribeLoggingOptionsOutput)
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
        /// Consumes the builder and constructs a [`DescribeLoggingOptionsOutput`](crate::output::DescribeLoggingOptionsOutput)
        pub fn build(self) -> crate::output::DescribeLoggingOptionsOutput {
            crate::output::DescribeLoggingOptionsOutput {
                logging_options: self.logging_options,
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
pub struct PutLoggingOptionsOutput {
}
impl PutLoggingOptionsOutput {
    /// Creates a new builder-style object to manufacture [`PutLoggingOptionsOutput`](crate::output::PutLoggingOptionsOutput)
    pub fn builder() -> crate::output::put_logging_options_output::Builder {
        crate::output::put_logging_options_output::Builder::default()
    }
}
/// See [`PutLoggingOptionsOutput`](crate::output::PutLoggingOptionsOutput)
pub mod put_logging_options_output {
    /// A builder for [`PutLoggingOptionsOutput`](crate::output::PutLoggingOptionsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
    }
    impl Builder {
        /// Consumes the builder and constructs a [`PutLoggingOptionsOutput`](crate::output::PutLoggingOptionsOutput)
        pub fn build(self) -> crate::output::PutLoggingOptionsOutput {
            crate::output::PutLoggingOptionsOutput {
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
    pub tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
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
        tags: std::option::Option<std::vec::Vec<crate::model::Tag>>,
    }
    impl Builder {
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
