/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_auth::Credentials;
use aws_sigv4::{PayloadChecksumKind, SigningParams, SigningSettings, UriEncoding};
use aws_types::{SigningRegion, SigningService};
use std::fmt;
use std::time::SystemTime;

pub use aws_sigv4::{SignableBody, SigningError};

#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub enum SigningAlgorithm {
    SigV4,
}

/// Signing Configuration for an Operation
///
/// Although these fields MAY be customized on a per request basis, they are generally static
/// for a given operation
#[derive(Clone, PartialEq, Eq, Debug)]
#[non_exhaustive]
pub struct OperationSigningConfig {
    pub algorithm: SigningAlgorithm,
    pub signing_options: SigningOptions,
    pub signing_requirements: SigningRequirements,
}

impl OperationSigningConfig {
    /// The signing configuration used by every JSON protocol operation
    pub fn default_config() -> Self {
        OperationSigningConfig {
            algorithm: SigningAlgorithm::SigV4,
            signing_options: SigningOptions {
                double_uri_encode: true,
                content_sha256_header: false,
            },
            signing_requirements: SigningRequirements::Required,
        }
    }
}

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum SigningRequirements {
    /// A signature MUST be added.
    ///
    /// If no credentials are provided, this will return an error without dispatching the operation.
    Required,

    /// A signature MUST NOT be added.
    Disabled,
}

#[derive(Clone, Eq, PartialEq, Debug)]
#[non_exhaustive]
pub struct SigningOptions {
    pub double_uri_encode: bool,
    pub content_sha256_header: bool,
}

/// Signing Configuration for an individual Request
///
/// These fields may vary on a per-request basis
#[derive(Clone, PartialEq, Eq)]
pub struct RequestConfig<'a> {
    pub request_ts: SystemTime,
    pub region: &'a SigningRegion,
    pub service: &'a SigningService,
}

/// A computed SigV4 signature, hex encoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature(String);

impl AsRef<str> for Signature {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Default)]
pub struct SigV4Signer {
    _private: (),
}

impl fmt::Debug for SigV4Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigV4Signer").finish()
    }
}

impl SigV4Signer {
    pub fn new() -> Self {
        SigV4Signer { _private: () }
    }

    fn settings(operation_config: &OperationSigningConfig) -> SigningSettings {
        let mut settings = SigningSettings::default();
        settings.uri_encoding = if operation_config.signing_options.double_uri_encode {
            UriEncoding::Double
        } else {
            UriEncoding::Single
        };
        settings.payload_checksum_kind = if operation_config.signing_options.content_sha256_header
        {
            PayloadChecksumKind::XAmzSha256
        } else {
            PayloadChecksumKind::NoHeader
        };
        settings
    }

    /// Sign a request using the SigV4 Protocol
    ///
    /// Although this function may be used, end users will not typically
    /// interact with this code. It is generally used via middleware in the request pipeline. See [`SigV4SigningStage`](crate::middleware::SigV4SigningStage).
    pub fn sign<B>(
        &self,
        operation_config: &OperationSigningConfig,
        request_config: &RequestConfig<'_>,
        credentials: &Credentials,
        body: SignableBody<'_>,
        request: &mut http::Request<B>,
    ) -> Result<Signature, SigningError> {
        let params = SigningParams {
            access_key: credentials.access_key_id(),
            secret_key: credentials.secret_access_key(),
            security_token: credentials.session_token(),
            region: request_config.region.as_ref(),
            service_name: request_config.service.as_ref(),
            date_time: request_config.request_ts,
            settings: Self::settings(operation_config),
        };
        let signature = aws_sigv4::sign_http_request(request, body, &params)?;
        tracing::trace!(signature = %signature, "signed request");
        Ok(Signature(signature))
    }
}

#[cfg(test)]
mod tests {
    use super::{OperationSigningConfig, RequestConfig, SigV4Signer};
    use aws_auth::Credentials;
    use aws_sigv4::SignableBody;
    use aws_types::{SigningRegion, SigningService};
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn sign_json_request() {
        let creds = Credentials::from_keys(
            "AKIDEXAMPLE",
            "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY",
            Some("session-token".to_string()),
        );
        let region = SigningRegion::from_static("us-east-1");
        let service = SigningService::from_static("dynamodb");
        let request_config = RequestConfig {
            // 2021-05-20T00:00:00Z
            request_ts: UNIX_EPOCH + Duration::from_secs(1621468800),
            region: &region,
            service: &service,
        };
        let mut req = http::Request::builder()
            .method("POST")
            .uri("https://dynamodb.us-east-1.amazonaws.com/")
            .header("content-type", "application/x-amz-json-1.0")
            .header("x-amz-target", "DynamoDB_20120810.ListTables")
            .body(())
            .unwrap();
        let signature = SigV4Signer::new()
            .sign(
                &OperationSigningConfig::default_config(),
                &request_config,
                &creds,
                SignableBody::Bytes(b"{}"),
                &mut req,
            )
            .expect("signing succeeds");
        assert_eq!(
            signature.as_ref(),
            "4dcabfc2ad09ec4abf48a2856ffe37ed2cc137b700489b6e32e6fbf41f64b88d"
        );
        assert_eq!(req.headers()["x-amz-date"], "20210520T000000Z");
    }
}
