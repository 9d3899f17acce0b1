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
pub struct CreateAnalyzerOutput {
    #[serde(rename = "arn")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub arn: std::option::Option<std::string::String>,
}
impl CreateAnalyzerOutput {
    /// Creates a new builder-style object to manufacture [`CreateAnalyzerOutput`](crate::output::CreateAnalyzerOutput)
    pub fn builder() -> crate::output::create_analyzer_output::Builder {
        crate::output::create_analyzer_output::Builder::default()
    }
}
/// See [`CreateAnalyzerOutput`](crate::output::CreateAnalyzerOutput)
pub mod create_analyzer_output {
    /// A builder for [`CreateAnalyzerOutput`](crate::output::CreateAnalyzerOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        arn: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.arn = Some(inp.into());
            self
        }
        pub fn set_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.arn = inp;
            self
        }
        /// Consumes the builder and constructs a [`CreateAnalyzerOutput`](crate::output::CreateAnalyzerOutput)
        pub fn build(self) -> crate::output::CreateAnalyzerOutput {
            crate::output::CreateAnalyzerOutput {
                arn: self.arn,
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
pub struct CreateArchiveRuleOutput {
}
impl CreateArchiveRuleOutput {
    /// Creates a new builder-style object to manufacture [`CreateArchiveRuleOutput`](crate::output::CreateArchiveRuleOutput)
    pub fn builder() -> crate::output::create_archive_rule_output::Builder {
        crate::output::create_archive_rule_output::Builder::default()
    }
}
/// See [`CreateArchiveRuleOutput`](crate::output::CreateArchiveRuleOutput)
pub mod create_archive_rule_output {
    /// A builder for [`CreateArchiveRuleOutput`](crate::output::CreateArchiveRuleOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
    }
    impl Builder {
        /// Consumes the builder and constructs a [`CreateArchiveRuleOutput`](crate::output::CreateArchiveRuleOutput)
        pub fn build(self) -> crate::output::CreateArchiveRuleOutput {
            crate::output::CreateArchiveRuleOutput {
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
pub struct DeleteAnalyzerOutput {
}
impl DeleteAnalyzerOutput {
    /// Creates a new builder-style object to manufacture [`DeleteAnalyzerOutput`](crate::output::DeleteAnalyzerOutput)
    pub fn builder() -> crate::output::delete_analyzer_output::Builder {
        crate::output::delete_analyzer_output::Builder::default()
    }
}
/// See [`DeleteAnalyzerOutput`](crate::output::DeleteAnalyzerOutput)
pub mod delete_analyzer_output {
    /// A builder for [`DeleteAnalyzerOutput`](crate::output::DeleteAnalyzerOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
    }
    impl Builder {
        /// Consumes the builder and constructs a [`DeleteAnalyzerOutput`](crate::output::DeleteAnalyzerOutput)
        pub fn build(self) -> crate::output::DeleteAnalyzerOutput {
            crate::output::DeleteAnalyzerOutput {
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
pub struct DeleteArchiveRuleOutput {
}
impl DeleteArchiveRuleOutput {
    /// Creates a new builder-style object to manufacture [`DeleteArchiveRuleOutput`](crate::output::DeleteArchiveRuleOutput)
    pub fn builder() -> crate::output::delete_archive_rule_output::Builder {
        crate::output::delete_archive_rule_output::Builder::default()
    }
}
/// See [`DeleteArchiveRuleOutput`](crate::output::DeleteArchiveRuleOutput)
pub mod delete_archive_rule_output {
    /// A builder for [`DeleteArchiveRuleOutput`](crate::output::DeleteArchiveRuleOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
    }
    impl Builder {
        /// Consumes the builder and constructs a [`DeleteArchiveRuleOutput`](crate::output::DeleteArchiveRuleOutput)
        pub fn build(self) -> crate::output::DeleteArchiveRuleOutput {
            crate::output::DeleteArchiveRuleOutput {
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
pub struct GetAnalyzedResourceOutput {
    #[serde(rename = "resource")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource: std::option::Option<crate::model::AnalyzedResource>,
}
impl GetAnalyzedResourceOutput {
    /// Creates a new builder-style object to manufacture [`GetAnalyzedResourceOutput`](crate::output::GetAnalyzedResourceOutput)
    pub fn builder() -> crate::output::get_analyzed_resource_output::Builder {
        crate::output::get_analyzed_resource_output::Builder::default()
    }
}
/// See [`GetAnalyzedResourceOutput`](crate::output::GetAnalyzedResourceOutput)
pub mod get_analyzed_resource_output {
    /// A builder for [`GetAnalyzedResourceOutput`](crate::output::GetAnalyzedResourceOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        resource: std::option::Option<crate::model::AnalyzedResource>,
    }
    impl Builder {
        pub fn resource(mut self, inp: crate::model::AnalyzedResource) -> Self {
            self.resource = Some(inp);
            self
        }
        pub fn set_resource(
            mut self,
            inp: std::option::Option<crate::model::AnalyzedResource>,
        ) -> Self {
            self.resource = inp;
            self
        }
        /// Consumes the builder and constructs a [`GetAnalyzedResourceOutput`](crate::output::GetAnalyzedResourceOutput)
        pub fn build(self) -> crate::output::GetAnalyzedResourceOutput {
            crate::output::GetAnalyzedResourceOutput {
                resource: self.resource,
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
pub struct GetAnalyzerOutput {
    #[serde(rename = "analyzer")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub analyzer: std::option::Option<crate::model::AnalyzerSummary>,
}
impl GetAnalyzerOutput {
    /// Creates a new builder-style object to manufacture [`GetAnalyzerOutput`](crate::output::GetAnalyzerOutput)
    pub fn builder() -> crate::output::get_analyzer_output::Builder {
        crate::output::get_analyzer_output::Builder::default()
    }
}
/// See [`GetAnalyzerOutput`](crate::output::GetAnalyzerOutput)
pub mod get_analyzer_output {
    /// A builder for [`GetAnalyzerOutput`](crate::output::GetAnalyzerOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        analyzer: std::option::Option<crate::model::AnalyzerSummary>,
    }
    impl Builder {
        pub fn analyzer(mut self, inp: crate::model::AnalyzerSummary) -> Self {
            self.analyzer = Some(inp);
            self
        }
        pub fn set_analyzer(
            mut self,
            inp: std::option::Option<crate::model::AnalyzerSummary>,
        ) -> Self {
            self.analyzer = inp;
            self
        }
        /// Consumes the builder and constructs a [`GetAnalyzerOutput`](crate::output::GetAnalyzerOutput)
        pub fn build(self) -> crate::output::GetAnalyzerOutput {
            crate::output::GetAnalyzerOutput {
                analyzer: self.analyzer,
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
pub struct GetArchiveRuleOutput {
    #[serde(rename = "archiveRule")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub archive_rule: std::option::Option<crate::model::ArchiveRuleSummary>,
}
impl GetArchiveRuleOutput {
    /// Creates a new builder-style object to manufacture [`GetArchiveRuleOutput`](crate::output::GetArchiveRuleOutput)
    pub fn builder() -> crate::output::get_archive_rule_output::Builder {
        crate::output::get_archive_rule_output::Builder::default()
    }
}
/// See [`GetArchiveRuleOutput`](crate::output::GetArchiveRuleOutput)
pub mod get_archive_rule_output {
    /// A builder for [`GetArchiveRuleOutput`](crate::output::GetArchiveRuleOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        archive_rule: std::option::Option<crate::model::ArchiveRuleSummary>,
    }
    impl Builder {
        pub fn archive_rule(mut self, inp: crate::model::ArchiveRuleSummary) -> Self {
            self.archive_rule = Some(inp);
            self
        }
        pub fn set_archive_rule(
            mut self,
            inp: std::option::Option<crate::model::ArchiveRuleSummary>,
        ) -> Self {
            self.archive_rule = inp;
            self
        }
        /// Consumes the builder and constructs a [`GetArchiveRuleOutput`](crate::output::GetArchiveRuleOutput)
        pub fn build(self) -> crate::output::GetArchiveRuleOutput {
            crate::output::GetArchiveRuleOutput {
                archive_rule: self.archive_rule,
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
pub struct GetFindingOutput {
    #[serde(rename = "finding")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub finding: std::option::Option<crate::model::Finding>,
}
impl GetFindingOutput {
    /// Creates a new builder-style object to manufacture [`GetFindingOutput`](crate::output::GetFindingOutput)
    pub fn builder() -> crate::output::get_finding_output::Builder {
        crate::output::get_finding_output::Builder::default()
    }
}
/// See [`GetFindingOutput`](crate::output::GetFindingOutput)
pub mod get_finding_output {
    /// A builder for [`GetFindingOutput`](crate::output::GetFindingOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        finding: std::option::Option<crate::model::Finding>,
    }
    impl Builder {
        pub fn finding(mut self, inp: crate::model::Finding) -> Self {
            self.finding = Some(inp);
            self
        }
        pub fn set_finding(mut self, inp: std::option::Option<crate::model::Finding>) -> Self {
            self.finding = inp;
            self
        }
        /// Consumes the builder and constructs a [`GetFindingOutput`](crate::output::GetFindingOutput)
        pub fn build(self) -> crate::output::GetFindingOutput {
            crate::output::GetFindingOutput {
                finding: self.finding,
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
pub struct ListAnalyzedResourcesOutput {
    #[serde(rename = "analyzedResources")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub analyzed_resources:
        std::option::Option<std::vec::Vec<crate::model::AnalyzedResourceSummary>>,
    #[serde(rename = "nextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}
impl ListAnalyzedResourcesOutput {
    /// Creates a new builder-style object to manufacture [`ListAnalyzedResourcesOutput`](crate::output::ListAnalyzedResourcesOutput)
    pub fn builder() -> crate::output::list_analyzed_resources_output::Builder {
        crate::output::list_analyzed_resources_output::Builder::default()
    }
}
/// See [`ListAnalyzedResourcesOutput`](crate::output::ListAnalyzedResourcesOutput)
pub mod list_analyzed_resources_output {
    /// A builder for [`ListAnalyzedResourcesOutput`](crate::output::ListAnalyzedResourcesOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        analyzed_resources:
            std::option::Option<std::vec::Vec<crate::model::AnalyzedResourceSummary>>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn analyzed_resources(
            mut self,
            inp: impl Into<crate::model::AnalyzedResourceSummary>,
        ) -> Self {
            let mut v = self.analyzed_resources.unwrap_or_default();
            v.push(inp.into());
            self.analyzed_resources = Some(v);
            self
        }
        pub fn set_analyzed_resources(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::AnalyzedResourceSummary>>,
        ) -> Self {
            self.analyzed_resources = inp;
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
        /// Consumes the builder and constructs a [`ListAnalyzedResourcesOutput`](crate::output::ListAnalyzedResourcesOutput)
        pub fn build(self) -> crate::output::ListAnalyzedResourcesOutput {
            crate::output::ListAnalyzedResourcesOutput {
                analyzed_resources: self.analyzed_resources,
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
pub struct ListAnalyzersOutput {
    #[serde(rename = "analyzers")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub analyzers: std::option::Option<std::vec::Vec<crate::model::AnalyzerSummary>>,
    #[serde(rename = "nextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}
impl ListAnalyzersOutput {
    /// Creates a new builder-style object to manufacture [`ListAnalyzersOutput`](crate::output::ListAnalyzersOutput)
    pub fn builder() -> crate::output::list_analyzers_output::Builder {
        crate::output::list_analyzers_output::Builder::default()
    }
}
/// See [`ListAnalyzersOutput`](crate::output::ListAnalyzersOutput)
pub mod list_analyzers_output {
    /// A builder for [`ListAnalyzersOutput`](crate::output::ListAnalyzersOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        analyzers: std::option::Option<std::vec::Vec<crate::model::AnalyzerSummary>>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn analyzers(mut self, inp: impl Into<crate::model::AnalyzerSummary>) -> Self {
            let mut v = self.analyzers.unwrap_or_default();
            v.push(inp.into());
            self.analyzers = Some(v);
            self
        }
        pub fn set_analyzers(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::AnalyzerSummary>>,
        ) -> Self {
            self.analyzers = inp;
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
        /// Consumes the builder and constructs a [`ListAnalyzersOutput`](crate::output::ListAnalyzersOutput)
        pub fn build(self) -> crate::output::ListAnalyzersOutput {
            crate::output::ListAnalyzersOutput {
                analyzers: self.analyzers,
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
pub struct ListArchiveRulesOutput {
    #[serde(rename = "archiveRules")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub archive_rules: std::option::Option<std::vec::Vec<crate::model::ArchiveRuleSummary>>,
    #[serde(rename = "nextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}
impl ListArchiveRulesOutput {
    /// Creates a new builder-style object to manufacture [`ListArchiveRulesOutput`](crate::output::ListArchiveRulesOutput)
    pub fn builder() -> crate::output::list_archive_rules_output::Builder {
        crate::output::list_archive_rules_output::Builder::default()
    }
}
/// See [`ListArchiveRulesOutput`](crate::output::ListArchiveRulesOutput)
pub mod list_archive_rules_output {
    /// A builder for [`ListArchiveRulesOutput`](crate::output::ListArchiveRulesOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        archive_rules: std::option::Option<std::vec::Vec<crate::model::ArchiveRuleSummary>>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn archive_rules(mut self, inp: impl Into<crate::model::ArchiveRuleSummary>) -> Self {
            let mut v = self.archive_rules.unwrap_or_default();
            v.push(inp.into());
            self.archive_rules = Some(v);
            self
        }
        pub fn set_archive_rules(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::ArchiveRuleSummary>>,
        ) -> Self {
            self.archive_rules = inp;
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
        /// Consumes the builder and constructs a [`ListArchiveRulesOutput`](crate::output::ListArchiveRulesOutput)
        pub fn build(self) -> crate::output::ListArchiveRulesOutput {
            crate::output::ListArchiveRulesOutput {
                archive_rules: self.archive_rules,
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
pub struct ListFindingsOutput {
    #[serde(rename = "findings")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub findings: std::option::Option<std::vec::Vec<crate::model::FindingSummary>>,
    #[serde(rename = "nextToken")]
    #[serde(default)]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next_token: std::option::Option<std::string::String>,
}
impl ListFindingsOutput {
    /// Creates a new builder-style object to manufacture [`ListFindingsOutput`](crate::output::ListFindingsOutput)
    pub fn builder() -> crate::output::list_findings_output::Builder {
        crate::output::list_findings_output::Builder::default()
    }
}
/// See [`ListFindingsOutput`](crate::output::ListFindingsOutput)
pub mod list_findings_output {
    /// A builder for [`ListFindingsOutput`](crate::output::ListFindingsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
        findings: std::option::Option<std::vec::Vec<crate::model::FindingSummary>>,
        next_token: std::option::Option<std::string::String>,
    }
    impl Builder {
        pub fn findings(mut self, inp: impl Into<crate::model::FindingSummary>) -> Self {
            let mut v = self.findings.unwrap_or_default();
            v.push(inp.into());
            self.findings = Some(v);
            self
        }
        pub fn set_findings(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::FindingSummary>>,
        ) -> Self {
            self.findings = inp;
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
        /// Consumes the builder and constructs a [`ListFindingsOutput`](crate::output::ListFindingsOutput)
        pub fn build(self) -> crate::output::ListFindingsOutput {
            crate::output::ListFindingsOutput {
                findings: self.findings,
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
pub struct StartResourceScanOutput {
}
impl StartResourceScanOutput {
    /// Creates a new builder-style object to manufacture [`StartResourceScanOutput`](crate::output::StartResourceScanOutput)
    pub fn builder() -> crate::output::start_resource_scan_output::Builder {
        crate::output::start_resource_scan_output::Builder::default()
    }
}
/// See [`StartResourceScanOutput`](crate::output::StartResourceScanOutput)
pub mod start_resource_scan_output {
    /// A builder for [`StartResourceScanOutput`](crate::output::StartResourceScanOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
    }
    impl Builder {
        /// Consumes the builder and constructs a [`StartResourceScanOutput`](crate::output::StartResourceScanOutput)
        pub fn build(self) -> crate::output::StartResourceScanOutput {
            crate::output::StartResourceScanOutput {
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

#[non_exhaustive]
#[derive(
    std::clone::Clone,
    std::cmp::PartialEq,
    std::fmt::Debug,
    std::default::Default,
    serde::Deserialize,
)]
pub struct UpdateArchiveRuleOutput {
}
impl UpdateArchiveRuleOutput {
    /// Creates a new builder-style object to manufacture [`UpdateArchiveRuleOutput`](crate::output::UpdateArchiveRuleOutput)
    pub fn builder() -> crate::output::update_archive_rule_output::Builder {
        crate::output::update_archive_rule_output::Builder::default()
    }
}
/// See [`UpdateArchiveRuleOutput`](crate::output::UpdateArchiveRuleOutput)
pub mod update_archive_rule_output {
    /// A builder for [`UpdateArchiveRuleOutput`](crate::output::UpdateArchiveRuleOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
    }
    impl Builder {
        /// Consumes the builder and constructs a [`UpdateArchiveRuleOutput`](crate::output::UpdateArchiveRuleOutput)
        pub fn build(self) -> crate::output::UpdateArchiveRuleOutput {
            crate::output::UpdateArchiveRuleOutput {
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
pub struct UpdateFindingsOutput {
}
impl UpdateFindingsOutput {
    /// Creates a new builder-style object to manufacture [`UpdateFindingsOutput`](crate::output::UpdateFindingsOutput)
    pub fn builder() -> crate::output::update_findings_output::Builder {
        crate::output::update_findings_output::Builder::default()
    }
}
/// See [`UpdateFindingsOutput`](crate::output::UpdateFindingsOutput)
pub mod update_findings_output {
    /// A builder for [`UpdateFindingsOutput`](crate::output::UpdateFindingsOutput)
    #[non_exhaustive]
    #[derive(std::default::Default, std::clone::Clone, std::cmp::PartialEq, std::fmt::Debug)]
    pub struct Builder {
    }
    impl Builder {
        /// Consumes the builder and constructs a [`UpdateFindingsOutput`](crate::output::UpdateFindingsOutput)
        pub fn build(self) -> crate::output::UpdateFindingsOutput {
            crate::output::UpdateFindingsOutput {
            }
        }
    }
}
