/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::signer::{
    OperationSigningConfig, RequestConfig, SigV4Signer, SignableBody, SigningError,
    SigningRequirements,
};
use aws_auth::{Credentials, CredentialsError, CredentialsProvider};
use aws_types::{SigningRegion, SigningService};
use smithy_http::middleware::MapRequest;
use smithy_http::operation::Request;
use smithy_http::property_bag::PropertyBag;
use std::time::SystemTime;
use thiserror::Error;

/// Middleware stage to sign requests with SigV4
///
/// SigV4SigningStage will load configuration from the request property bag and add
/// a signature.
///
/// Prior to signing, the following fields MUST be present in the property bag:
/// - [`SigningRegion`](SigningRegion): The region used when signing the request, eg. `us-east-1`
/// - [`SigningService`](SigningService): The name of the service to use when signing the request, eg. `dynamodb`
/// - [`CredentialsProvider`](CredentialsProvider): A credentials provider to retrieve credentials
/// - [`OperationSigningConfig`](OperationSigningConfig): Operation specific signing configuration, eg.
///   changes to URL encoding behavior, or headers that must be omitted.
/// If any of these fields are missing, the middleware will return an error.
///
/// The following fields MAY be present in the property bag:
/// - [`SystemTime`](SystemTime): The timestamp to use when signing the request. If this field is not present
///   [`SystemTime::now`](SystemTime::now) will be used.
#[derive(Clone, Debug)]
pub struct SigV4SigningStage {
    signer: SigV4Signer,
}

impl SigV4SigningStage {
    pub fn new(signer: SigV4Signer) -> Self {
        Self { signer }
    }
}

#[derive(Debug, Error)]
pub enum SigningStageError {
    #[error("No credentials provider in the property bag")]
    MissingCredentialsProvider,
    #[error("No signing region in the property bag")]
    MissingSigningRegion,
    #[error("No signing service in the property bag")]
    MissingSigningService,
    #[error("No signing configuration in the property bag")]
    MissingSigningConfig,
    #[error("The request body could not be signed by this configuration")]
    InvalidBodyType,
    #[error("Signing failed")]
    SigningFailure(#[from] SigningError),
    #[error("Failed to load credentials from the credentials provider")]
    CredentialsLoadingError(#[from] CredentialsError),
}

/// Extract a signing config from a [`PropertyBag`](smithy_http::property_bag::PropertyBag)
fn signing_config(
    config: &PropertyBag,
) -> Result<(&OperationSigningConfig, RequestConfig, Credentials), SigningStageError> {
    let operation_config = config
        .get::<OperationSigningConfig>()
        .ok_or(SigningStageError::MissingSigningConfig)?;
    let cred_provider = config
        .get::<CredentialsProvider>()
        .ok_or(SigningStageError::MissingCredentialsProvider)?;
    let creds = cred_provider.provide_credentials()?;
    let region = config
        .get::<SigningRegion>()
        .ok_or(SigningStageError::MissingSigningRegion)?;
    let signing_service = config
        .get::<SigningService>()
        .ok_or(SigningStageError::MissingSigningService)?;
    let request_config = RequestConfig {
        request_ts: config
            .get::<SystemTime>()
            .copied()
            .unwrap_or_else(SystemTime::now),
        region,
        service: signing_service,
    };
    Ok((operation_config, request_config, creds))
}

impl MapRequest for SigV4SigningStage {
    type Error = SigningStageError;

    fn apply(&self, req: Request) -> Result<Request, Self::Error> {
        req.augment(|req, config| {
            if let Some(OperationSigningConfig {
                signing_requirements: SigningRequirements::Disabled,
                ..
            }) = config.get::<OperationSigningConfig>()
            {
                return Ok(req);
            }
            let (operation_config, request_config, creds) = signing_config(config)?;

            // Only bodies held in memory can be signed. The signer sees the request with a
            // borrowed body, and the signed headers are moved back onto the original body.
            let (parts, body) = req.into_parts();
            let signable_body = body.bytes().ok_or(SigningStageError::InvalidBodyType)?;
            let mut signable_request = http::Request::from_parts(parts, ());
            self.signer.sign(
                operation_config,
                &request_config,
                &creds,
                SignableBody::Bytes(signable_body),
                &mut signable_request,
            )?;
            let (signed_parts, _) = signable_request.into_parts();
            Ok(http::Request::from_parts(signed_parts, body))
        })
    }
}

#[cfg(test)]
mod test {
    use crate::middleware::{SigV4SigningStage, SigningStageError};
    use crate::signer::{OperationSigningConfig, SigV4Signer};
    use aws_auth::{Credentials, CredentialsProvider};
    use aws_types::{SigningRegion, SigningService};
    use smithy_http::body::SdkBody;
    use smithy_http::middleware::MapRequest;
    use smithy_http::operation;
    use std::sync::Arc;
    use std::time::{Duration, UNIX_EPOCH};

    fn request() -> operation::Request {
        let req = http::Request::builder()
            .method("POST")
            .uri("https://honeycode.us-west-2.amazonaws.com/workbooks/wb/tables")
            .body(SdkBody::from("{}"))
            .unwrap();
        operation::Request::new(req)
    }

    #[test]
    fn signs_requests() {
        let mut req = request();
        {
            let mut conf = req.properties_mut();
            conf.insert(UNIX_EPOCH + Duration::new(1611160427, 0));
            conf.insert(SigningRegion::from_static("us-west-2"));
            conf.insert(SigningService::from_static("honeycode"));
            conf.insert(OperationSigningConfig::default_config());
            let provider: CredentialsProvider =
                Arc::new(Credentials::from_keys("AKIDEXAMPLE", "secret", None));
            conf.insert(provider);
        }
        let signer = SigV4SigningStage::new(SigV4Signer::new());
        let req = signer.apply(req).expect("signing succeeded");
        let auth = req.http().headers()["authorization"].to_str().unwrap();
        assert!(auth.starts_with(
            "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20210120/us-west-2/honeycode/aws4_request"
        ));
        assert_eq!(req.http().headers()["x-amz-date"], "20210120T163347Z");
        assert_eq!(req.http().body().bytes(), Some(&b"{}"[..]));
    }

    #[test]
    fn missing_configuration_fails() {
        let signer = SigV4SigningStage::new(SigV4Signer::new());
        let err = signer.apply(request()).expect_err("no signing config");
        assert!(matches!(err, SigningStageError::MissingSigningConfig));
    }
}
