/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#[derive(std::fmt::Debug)]
pub(crate) struct Handle {
    client: aws_hyper::Client<aws_hyper::conn::Standard>,
    conf: crate::Config,
}

/// Client for Access Analyzer
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

    /// Creates an analyzer for your account
    pub fn create_analyzer(&self) -> fluent_builders::CreateAnalyzer {
        fluent_builders::CreateAnalyzer::new(self.handle.clone())
    }

    /// Creates an archive rule for the specified analyzer
    pub fn create_archive_rule(&self) -> fluent_builders::CreateArchiveRule {
        fluent_builders::CreateArchiveRule::new(self.handle.clone())
    }

    /// Deletes the specified analyzer and every finding it generated
    pub fn delete_analyzer(&self) -> fluent_builders::DeleteAnalyzer {
        fluent_builders::DeleteAnalyzer::new(self.handle.clone())
    }

    /// Deletes the specified archive rule
    pub fn delete_archive_rule(&self) -> fluent_builders::DeleteArchiveRule {
        fluent_builders::DeleteArchiveRule::new(self.handle.clone())
    }

    /// Retrieves information about a resource that was analyzed
    pub fn get_analyzed_resource(&self) -> fluent_builders::GetAnalyzedResource {
        fluent_builders::GetAnalyzedResource::new(self.handle.clone())
    }

    /// Retrieves information about the specified analyzer
    pub fn get_analyzer(&self) -> fluent_builders::GetAnalyzer {
        fluent_builders::GetAnalyzer::new(self.handle.clone())
    }

    /// Retrieves information about an archive rule
    pub fn get_archive_rule(&self) -> fluent_builders::GetArchiveRule {
        fluent_builders::GetArchiveRule::new(self.handle.clone())
    }

    /// Retrieves information about the specified finding
    pub fn get_finding(&self) -> fluent_builders::GetFinding {
        fluent_builders::GetFinding::new(self.handle.clone())
    }

    /// Retrieves a list of resources of the specified type that have been analyzed
    pub fn list_analyzed_resources(&self) -> fluent_builders::ListAnalyzedResources {
        fluent_builders::ListAnalyzedResources::new(self.handle.clone())
    }

    /// Retrieves a list of analyzers
    pub fn list_analyzers(&self) -> fluent_builders::ListAnalyzers {
        fluent_builders::ListAnalyzers::new(self.handle.clone())
    }

    /// Retrieves a list of archive rules created for the specified analyzer
    pub fn list_archive_rules(&self) -> fluent_builders::ListArchiveRules {
        fluent_builders::ListArchiveRules::new(self.handle.clone())
    }

    /// Retrieves a list of findings generated by the specified analyzer
    pub fn list_findings(&self) -> fluent_builders::ListFindings {
        fluent_builders::ListFindings::new(self.handle.clone())
    }

    /// Retrieves a list of tags applied to the specified resource
    pub fn list_tags_for_resource(&self) -> fluent_builders::ListTagsForResource {
        fluent_builders::ListTagsForResource::new(self.handle.clone())
    }

    /// Immediately starts a scan of the policies applied to the specified resource
    pub fn start_resource_scan(&self) -> fluent_builders::StartResourceScan {
        fluent_builders::StartResourceScan::new(self.handle.clone())
    }

    /// Adds a tag to the specified resource
    pub fn tag_resource(&self) -> fluent_builders::TagResource {
        fluent_builders::TagResource::new(self.handle.clone())
    }

    /// Removes a tag from the specified resource
    pub fn untag_resource(&self) -> fluent_builders::UntagResource {
        fluent_builders::UntagResource::new(self.handle.clone())
    }

    /// Updates the criteria and values for the specified archive rule
    pub fn update_archive_rule(&self) -> fluent_builders::UpdateArchiveRule {
        fluent_builders::UpdateArchiveRule::new(self.handle.clone())
    }

    /// Updates the status for the specified findings
    pub fn update_findings(&self) -> fluent_builders::UpdateFindings {
        fluent_builders::UpdateFindings::new(self.handle.clone())
    }
}

pub mod fluent_builders {
    #[derive(std::fmt::Debug)]
    pub struct CreateAnalyzer {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::create_analyzer_input::Builder,
    }
    impl CreateAnalyzer {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> (super::Client, crate::input::create_analyzer_input::Builder) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::CreateAnalyzerOutput,
            aws_hyper::SdkError<crate::error::CreateAnalyzerError>,
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
        pub fn analyzer_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.analyzer_name(inp);
            self
        }
        pub fn set_analyzer_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_analyzer_name(inp);
            self
        }
        pub fn r#type(mut self, inp: crate::model::Type) -> Self {
            self.inner = self.inner.r#type(inp);
            self
        }
        pub fn set_type(mut self, inp: std::option::Option<crate::model::Type>) -> Self {
            self.inner = self.inner.set_type(inp);
            self
        }
        /// Archive rules created together with the analyzer
        pub fn archive_rules(mut self, inp: impl Into<crate::model::InlineArchiveRule>) -> Self {
            self.inner = self.inner.archive_rules(inp);
            self
        }
        pub fn set_archive_rules(
            mut self,
            inp: std::option::Option<std::vec::Vec<crate::model::InlineArchiveRule>>,
        ) -> Self {
            self.inner = self.inner.set_archive_rules(inp);
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
        pub fn client_token(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.client_token(inp);
            self
        }
        pub fn set_client_token(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_client_token(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct CreateArchiveRule {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::create_archive_rule_input::Builder,
    }
    impl CreateArchiveRule {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(
            self) -> (super::Client, crate::input::create_archive_rule_input::Builder,
        ) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::CreateArchiveRuleOutput,
            aws_hyper::SdkError<crate::error::CreateArchiveRuleError>,
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
        pub fn analyzer_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.analyzer_name(inp);
            self
        }
        pub fn set_analyzer_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_analyzer_name(inp);
            self
        }
        pub fn rule_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.rule_name(inp);
            self
        }
        pub fn set_rule_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_rule_name(inp);
            self
        }
        pub fn filter(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::Criterion>,
        ) -> Self {
            self.inner = self.inner.filter(k, v);
            self
        }
        pub fn set_filter(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::Criterion>>,
        ) -> Self {
            self.inner = self.inner.set_filter(inp);
            self
        }
        pub fn client_token(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.client_token(inp);
            self
        }
        pub fn set_client_token(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_client_token(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct DeleteAnalyzer {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::delete_analyzer_input::Builder,
    }
    impl DeleteAnalyzer {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> (super::Client, crate::input::delete_analyzer_input::Builder) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DeleteAnalyzerOutput,
            aws_hyper::SdkError<crate::error::DeleteAnalyzerError>,
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
        pub fn analyzer_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.analyzer_name(inp);
            self
        }
        pub fn set_analyzer_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_analyzer_name(inp);
            self
        }
        pub fn client_token(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.client_token(inp);
            self
        }
        pub fn set_client_token(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_client_token(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct DeleteArchiveRule {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::delete_archive_rule_input::Builder,
    }
    impl DeleteArchiveRule {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(
            self) -> (super::Client, crate::input::delete_archive_rule_input::Builder,
        ) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::DeleteArchiveRuleOutput,
            aws_hyper::SdkError<crate::error::DeleteArchiveRuleError>,
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
        pub fn analyzer_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.analyzer_name(inp);
            self
        }
        pub fn set_analyzer_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_analyzer_name(inp);
            self
        }
        pub fn rule_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.rule_name(inp);
            self
        }
        pub fn set_rule_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_rule_name(inp);
            self
        }
        pub fn client_token(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.client_token(inp);
            self
        }
        pub fn set_client_token(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_client_token(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct GetAnalyzedResource {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::get_analyzed_resource_input::Builder,
    }
    impl GetAnalyzedResource {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(
            self) -> (super::Client, crate::input::get_analyzed_resource_input::Builder,
        ) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::GetAnalyzedResourceOutput,
            aws_hyper::SdkError<crate::error::GetAnalyzedResourceError>,
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
        pub fn analyzer_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.analyzer_arn(inp);
            self
        }
        pub fn set_analyzer_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_analyzer_arn(inp);
            self
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
    pub struct GetAnalyzer {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::get_analyzer_input::Builder,
    }
    impl GetAnalyzer {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> (super::Client, crate::input::get_analyzer_input::Builder) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::GetAnalyzerOutput,
            aws_hyper::SdkError<crate::error::GetAnalyzerError>,
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
        pub fn analyzer_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.analyzer_name(inp);
            self
        }
        pub fn set_analyzer_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_analyzer_name(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct GetArchiveRule {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::get_archive_rule_input::Builder,
    }
    impl GetArchiveRule {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> (super::Client, crate::input::get_archive_rule_input::Builder) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::GetArchiveRuleOutput,
            aws_hyper::SdkError<crate::error::GetArchiveRuleError>,
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
        pub fn analyzer_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.analyzer_name(inp);
            self
        }
        pub fn set_analyzer_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_analyzer_name(inp);
            self
        }
        pub fn rule_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.rule_name(inp);
            self
        }
        pub fn set_rule_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_rule_name(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct GetFinding {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::get_finding_input::Builder,
    }
    impl GetFinding {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> (super::Client, crate::input::get_finding_input::Builder) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::GetFindingOutput,
            aws_hyper::SdkError<crate::error::GetFindingError>,
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
        pub fn analyzer_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.analyzer_arn(inp);
            self
        }
        pub fn set_analyzer_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_analyzer_arn(inp);
            self
        }
        pub fn id(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.id(inp);
            self
        }
        pub fn set_id(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_id(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct ListAnalyzedResources {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::list_analyzed_resources_input::Builder,
    }
    impl ListAnalyzedResources {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(
            self) -> (super::Client, crate::input::list_analyzed_resources_input::Builder,
        ) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListAnalyzedResourcesOutput,
            aws_hyper::SdkError<crate::error::ListAnalyzedResourcesError>,
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
        pub fn analyzer_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.analyzer_arn(inp);
            self
        }
        pub fn set_analyzer_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_analyzer_arn(inp);
            self
        }
        pub fn resource_type(mut self, inp: crate::model::ResourceType) -> Self {
            self.inner = self.inner.resource_type(inp);
            self
        }
        pub fn set_resource_type(
            mut self,
            inp: std::option::Option<crate::model::ResourceType>,
        ) -> Self {
            self.inner = self.inner.set_resource_type(inp);
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
    pub struct ListAnalyzers {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::list_analyzers_input::Builder,
    }
    impl ListAnalyzers {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> (super::Client, crate::input::list_analyzers_input::Builder) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListAnalyzersOutput,
            aws_hyper::SdkError<crate::error::ListAnalyzersError>,
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
        pub fn r#type(mut self, inp: crate::model::Type) -> Self {
            self.inner = self.inner.r#type(inp);
            self
        }
        pub fn set_type(mut self, inp: std::option::Option<crate::model::Type>) -> Self {
            self.inner = self.inner.set_type(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct ListArchiveRules {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::list_archive_rules_input::Builder,
    }
    impl ListArchiveRules {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(
            self) -> (super::Client, crate::input::list_archive_rules_input::Builder,
        ) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListArchiveRulesOutput,
            aws_hyper::SdkError<crate::error::ListArchiveRulesError>,
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
        pub fn analyzer_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.analyzer_name(inp);
            self
        }
        pub fn set_analyzer_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_analyzer_name(inp);
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
    pub struct ListFindings {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::list_findings_input::Builder,
    }
    impl ListFindings {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> (super::Client, crate::input::list_findings_input::Builder) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::ListFindingsOutput,
            aws_hyper::SdkError<crate::error::ListFindingsError>,
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
        pub fn analyzer_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.analyzer_arn(inp);
            self
        }
        pub fn set_analyzer_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_analyzer_arn(inp);
            self
        }
        pub fn filter(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::Criterion>,
        ) -> Self {
            self.inner = self.inner.filter(k, v);
            self
        }
        pub fn set_filter(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::Criterion>>,
        ) -> Self {
            self.inner = self.inner.set_filter(inp);
            self
        }
        pub fn sort(mut self, inp: crate::model::SortCriteria) -> Self {
            self.inner = self.inner.sort(inp);
            self
        }
        pub fn set_sort(mut self, inp: std::option::Option<crate::model::SortCriteria>) -> Self {
            self.inner = self.inner.set_sort(inp);
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
    pub struct StartResourceScan {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::start_resource_scan_input::Builder,
    }
    impl StartResourceScan {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(
            self) -> (super::Client, crate::input::start_resource_scan_input::Builder,
        ) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::StartResourceScanOutput,
            aws_hyper::SdkError<crate::error::StartResourceScanError>,
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
        pub fn analyzer_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.analyzer_arn(inp);
            self
        }
        pub fn set_analyzer_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_analyzer_arn(inp);
            self
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
    #[derive(std::fmt::Debug)]
    pub struct UpdateArchiveRule {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::update_archive_rule_input::Builder,
    }
    impl UpdateArchiveRule {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(
            self) -> (super::Client, crate::input::update_archive_rule_input::Builder,
        ) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::UpdateArchiveRuleOutput,
            aws_hyper::SdkError<crate::error::UpdateArchiveRuleError>,
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
        pub fn analyzer_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.analyzer_name(inp);
            self
        }
        pub fn set_analyzer_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_analyzer_name(inp);
            self
        }
        pub fn rule_name(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.rule_name(inp);
            self
        }
        pub fn set_rule_name(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_rule_name(inp);
            self
        }
        pub fn filter(
            mut self,
            k: impl Into<std::string::String>,
            v: impl Into<crate::model::Criterion>,
        ) -> Self {
            self.inner = self.inner.filter(k, v);
            self
        }
        pub fn set_filter(
            mut self,
            inp: std::option::Option<std::collections::HashMap<std::string::String, crate::model::Criterion>>,
        ) -> Self {
            self.inner = self.inner.set_filter(inp);
            self
        }
        pub fn client_token(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.client_token(inp);
            self
        }
        pub fn set_client_token(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_client_token(inp);
            self
        }
    }
    #[derive(std::fmt::Debug)]
    pub struct UpdateFindings {
        handle: std::sync::Arc<super::Handle>,
        inner: crate::input::update_findings_input::Builder,
    }
    impl UpdateFindings {
        pub(crate) fn new(handle: std::sync::Arc<super::Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub fn into_inner(self) -> (super::Client, crate::input::update_findings_input::Builder) {
            (super::Client { handle: self.handle }, self.inner)
        }

        pub async fn send(
            self,
        ) -> std::result::Result<
            crate::output::UpdateFindingsOutput,
            aws_hyper::SdkError<crate::error::UpdateFindingsError>,
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
        pub fn analyzer_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.analyzer_arn(inp);
            self
        }
        pub fn set_analyzer_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_analyzer_arn(inp);
            self
        }
        pub fn status(mut self, inp: crate::model::FindingStatusUpdate) -> Self {
            self.inner = self.inner.status(inp);
            self
        }
        pub fn set_status(
            mut self,
            inp: std::option::Option<crate::model::FindingStatusUpdate>,
        ) -> Self {
            self.inner = self.inner.set_status(inp);
            self
        }
        pub fn ids(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.ids(inp);
            self
        }
        pub fn set_ids(
            mut self,
            inp: std::option::Option<std::vec::Vec<std::string::String>>,
        ) -> Self {
            self.inner = self.inner.set_ids(inp);
            self
        }
        pub fn resource_arn(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.resource_arn(inp);
            self
        }
        pub fn set_resource_arn(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_resource_arn(inp);
            self
        }
        pub fn client_token(mut self, inp: impl Into<std::string::String>) -> Self {
            self.inner = self.inner.client_token(inp);
            self
        }
        pub fn set_client_token(mut self, inp: std::option::Option<std::string::String>) -> Self {
            self.inner = self.inner.set_client_token(inp);
            self
        }
    }
}
