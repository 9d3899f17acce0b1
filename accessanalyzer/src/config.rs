/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::sync::Arc;

/// Configuration for the Access Analyzer client
///
/// Built with [`Config::builder`]. Once built, a `Config` is immutable and shared by every
/// request made through a [`Client`](crate::Client).
pub struct Config {
    pub(crate) make_token: Box<dyn smithy_http::idempotency_token::MakeIdempotencyToken>,
    pub(crate) endpoint_resolver: aws_endpoint::AwsEndpointResolver,
    pub(crate) region: Option<aws_types::region::Region>,
    pub(crate) credentials_provider: aws_auth::CredentialsProvider,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut config = f.debug_struct("Config");
        config.field("region", &self.region);
        config.finish()
    }
}

impl Config {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The region requests are sent to, if one was configured or found in the environment
    pub fn region(&self) -> Option<&aws_types::region::Region> {
        self.region.as_ref()
    }
}

#[derive(Default)]
pub struct Builder {
    make_token: Option<Box<dyn smithy_http::idempotency_token::MakeIdempotencyToken>>,
    endpoint_resolver: Option<aws_endpoint::AwsEndpointResolver>,
    region: Option<aws_types::region::Region>,
    credentials_provider: Option<aws_auth::CredentialsProvider>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source of the idempotency tokens filled into requests that leave them unset
    pub fn make_token(
        mut self,
        make_token: impl smithy_http::idempotency_token::MakeIdempotencyToken + 'static,
    ) -> Self {
        self.make_token = Some(Box::new(make_token));
        self
    }

    /// Override the endpoint requests are sent to
    ///
    /// `smithy_http::endpoint::Endpoint` implements `ResolveAwsEndpoint` for a fixed URI, eg. a
    /// local test server.
    pub fn endpoint_resolver(
        mut self,
        endpoint_resolver: impl aws_endpoint::ResolveAwsEndpoint + 'static,
    ) -> Self {
        self.endpoint_resolver = Some(Arc::new(endpoint_resolver));
        self
    }

    pub fn region(mut self, region_provider: impl aws_types::region::ProvideRegion) -> Self {
        self.region = region_provider.region();
        self
    }

    pub fn credentials_provider(
        mut self,
        credentials_provider: impl aws_auth::ProvideCredentials + 'static,
    ) -> Self {
        self.credentials_provider = Some(Arc::new(credentials_provider));
        self
    }

    pub fn build(self) -> Config {
        Config {
            make_token: self
                .make_token
                .unwrap_or_else(|| Box::new(smithy_http::idempotency_token::default_provider())),
            endpoint_resolver: self
                .endpoint_resolver
                .unwrap_or_else(|| Arc::new(crate::aws_endpoint::endpoint_resolver())),
            region: self.region.or_else(|| {
                use aws_types::region::ProvideRegion;
                aws_types::region::default_provider().region()
            }),
            credentials_provider: self
                .credentials_provider
                .unwrap_or_else(|| Arc::new(aws_auth::provider::default_provider())),
        }
    }
}
