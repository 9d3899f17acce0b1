/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::{AwsEndpoint, BoxError, CredentialScope, ResolveAwsEndpoint};
use aws_types::region::Region;
use smithy_http::endpoint::Endpoint;

/// Endpoint metadata for a service
///
/// Every service client carries one of these as its default resolver.
#[derive(Debug, Clone)]
pub struct Metadata {
    /// URI for the endpoint.
    ///
    /// May contain `{region}` which will replaced with the region during endpoint construction
    pub uri_template: &'static str,

    /// Protocol to use for this endpoint
    pub protocol: Protocol,

    /// Credential scope to set for requests to this endpoint
    pub credential_scope: CredentialScope,

    /// Signature versions supported by this endpoint.
    ///
    /// Currently unused since the SDK only supports SigV4
    pub signature_versions: SignatureVersion,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Protocol {
    Http,
    Https,
}

impl Protocol {
    fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum SignatureVersion {
    V4,
}

impl ResolveAwsEndpoint for Metadata {
    fn resolve_endpoint(&self, region: &Region) -> Result<AwsEndpoint, BoxError> {
        let uri = self.uri_template.replace("{region}", region.as_ref());
        let uri = format!("{}://{}", self.protocol.as_str(), uri);
        let endpoint = Endpoint::immutable(uri.parse()?);
        Ok(AwsEndpoint {
            endpoint,
            credential_scope: CredentialScope {
                service: self.credential_scope.service.clone(),
                region: self
                    .credential_scope
                    .region
                    .clone()
                    .or_else(|| Some(region.clone().into())),
            },
        })
    }
}

#[cfg(test)]
mod test {
    use crate::metadata::{Metadata, Protocol, SignatureVersion};
    use crate::{CredentialScope, ResolveAwsEndpoint};
    use aws_types::region::{Region, SigningRegion};
    use http::Uri;

    #[test]
    fn regional_template() {
        let metadata = Metadata {
            uri_template: "api.elastic-inference.{region}.amazonaws.com",
            protocol: Protocol::Https,
            credential_scope: CredentialScope::default(),
            signature_versions: SignatureVersion::V4,
        };
        let endpoint = metadata
            .resolve_endpoint(&Region::new("us-west-2"))
            .expect("valid endpoint");
        assert_eq!(
            endpoint.endpoint().uri(),
            &Uri::from_static("https://api.elastic-inference.us-west-2.amazonaws.com")
        );
        assert_eq!(
            endpoint.credential_scope().region(),
            Some(&SigningRegion::from_static("us-west-2"))
        );
    }

    #[test]
    fn global_endpoint_pins_signing_region() {
        let metadata = Metadata {
            uri_template: "health.us-east-1.amazonaws.com",
            protocol: Protocol::Https,
            credential_scope: CredentialScope::builder()
                .region(SigningRegion::from_static("us-east-1"))
                .build(),
            signature_versions: SignatureVersion::V4,
        };
        let endpoint = metadata
            .resolve_endpoint(&Region::new("eu-west-1"))
            .expect("valid endpoint");
        assert_eq!(
            endpoint.endpoint().uri(),
            &Uri::from_static("https://health.us-east-1.amazonaws.com")
        );
        assert_eq!(
            endpoint.credential_scope().region(),
            Some(&SigningRegion::from_static("us-east-1"))
        );
    }
}
