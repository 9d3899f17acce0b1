/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Utilities to sign HTTP requests.

mod canonical_request;

use crate::date_fmt::format_date_time;
use crate::sign::{calculate_signature, generate_signing_key, sha256_hex_string};
use canonical_request::{CanonicalRequest, StringToSign, HMAC_256, X_AMZ_CONTENT_SHA_256, X_AMZ_DATE, X_AMZ_SECURITY_TOKEN};
use chrono::{DateTime, Utc};
use http::header::{HeaderName, HeaderValue, AUTHORIZATION};
use std::time::SystemTime;

/// Settings that alter how a request is signed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct SigningSettings {
    /// URI encoding setting. Every AWS service except S3 double encodes the path.
    pub uri_encoding: UriEncoding,

    /// Whether to add an `x-amz-content-sha256` header carrying the payload hash
    pub payload_checksum_kind: PayloadChecksumKind,
}

impl Default for SigningSettings {
    fn default() -> Self {
        Self {
            uri_encoding: UriEncoding::Double,
            payload_checksum_kind: PayloadChecksumKind::NoHeader,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UriEncoding {
    /// Re-encode `%` in the already encoded path as `%25`
    Double,
    /// Use the path as-is
    Single,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadChecksumKind {
    XAmzSha256,
    NoHeader,
}

/// The body of the request, as seen by the signer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignableBody<'a> {
    /// A body held in memory
    Bytes(&'a [u8]),
    /// A body that cannot be read ahead of time; signed as `UNSIGNED-PAYLOAD`
    UnsignedPayload,
}

/// Inputs to a signature: credentials, scope and time
#[derive(Clone, Copy)]
pub struct SigningParams<'a> {
    pub access_key: &'a str,
    pub secret_key: &'a str,
    pub security_token: Option<&'a str>,
    pub region: &'a str,
    pub service_name: &'a str,
    /// Timestamp to use in the signature (should be `SystemTime::now()` unless testing).
    pub date_time: SystemTime,
    pub settings: SigningSettings,
}

impl<'a> std::fmt::Debug for SigningParams<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningParams")
            .field("access_key", &self.access_key)
            .field("secret_key", &"** redacted **")
            .field("region", &self.region)
            .field("service_name", &self.service_name)
            .field("date_time", &self.date_time)
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SigningError {
    #[error("request URI must have an authority to be signed: `{0}`")]
    MissingAuthority(http::Uri),
    #[error("signing produced an invalid header value")]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),
    #[error("request header `{0}` is not valid ASCII and cannot be signed")]
    UnsignableHeader(HeaderName),
}

/// Sign `request`, adding `authorization`, `x-amz-date` and, as needed, `x-amz-security-token`
/// and `x-amz-content-sha256` headers
///
/// Returns the hex encoded signature.
pub fn sign<B>(
    request: &mut http::Request<B>,
    body: SignableBody<'_>,
    params: &SigningParams<'_>,
) -> Result<String, SigningError> {
    let date_time: DateTime<Utc> = DateTime::from(params.date_time);
    let payload_hash = match body {
        SignableBody::Bytes(data) => sha256_hex_string(data),
        SignableBody::UnsignedPayload => canonical_request::UNSIGNED_PAYLOAD.to_string(),
    };
    let creq = CanonicalRequest::from(
        request.method(),
        request.uri(),
        request.headers(),
        &params.settings,
        &date_time,
        params.security_token,
        &payload_hash,
    )?;
    let encoded_creq = sha256_hex_string(creq.to_string().as_bytes());
    let sts = StringToSign::new(date_time, params.region, params.service_name, &encoded_creq);
    let signing_key = generate_signing_key(
        params.secret_key,
        date_time.date(),
        params.region,
        params.service_name,
    );
    let signature = calculate_signature(signing_key, sts.to_string().as_bytes());

    let authorization = format!(
        "{} Credential={}/{}, SignedHeaders={}, Signature={}",
        HMAC_256, params.access_key, sts.scope, creq.signed_headers, signature
    );
    let headers = request.headers_mut();
    headers.insert(
        HeaderName::from_static(X_AMZ_DATE),
        HeaderValue::from_str(&format_date_time(&date_time))?,
    );
    if let Some(token) = params.security_token {
        let mut token = HeaderValue::from_str(token)?;
        token.set_sensitive(true);
        headers.insert(HeaderName::from_static(X_AMZ_SECURITY_TOKEN), token);
    }
    if params.settings.payload_checksum_kind == PayloadChecksumKind::XAmzSha256 {
        headers.insert(
            HeaderName::from_static(X_AMZ_CONTENT_SHA_256),
            HeaderValue::from_str(&payload_hash)?,
        );
    }
    let mut authorization = HeaderValue::from_str(&authorization)?;
    authorization.set_sensitive(true);
    headers.insert(AUTHORIZATION, authorization);
    Ok(signature)
}

#[cfg(test)]
mod tests {
    use super::{sign, SignableBody, SigningParams, SigningSettings};
    use crate::date_fmt::parse_date_time;
    use pretty_assertions::assert_eq;
    use std::time::SystemTime;

    const SECRET: &str = "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY";

    fn params(date: &str, service: &'static str, token: Option<&'static str>) -> SigningParams<'static> {
        let date_time = parse_date_time(date).unwrap();
        SigningParams {
            access_key: "AKIDEXAMPLE",
            secret_key: SECRET,
            security_token: token,
            region: "us-east-1",
            service_name: service,
            date_time: SystemTime::from(date_time),
            settings: SigningSettings::default(),
        }
    }

    #[test]
    fn sign_vanilla_with_query_params() {
        let mut req = http::Request::builder()
            .uri("https://example.amazonaws.com/?Param2=value2&Param1=value1")
            .body(())
            .unwrap();
        let signature = sign(
            &mut req,
            SignableBody::Bytes(b""),
            &params("20150830T123600Z", "service", None),
        )
        .expect("valid request");
        assert_eq!(
            signature,
            "b97d918cfa904a5beff61c982a1b6f458b799221646efd99d3219ec94cdf2500"
        );
        assert_eq!(
            req.headers()["authorization"],
            "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/service/aws4_request, SignedHeaders=host;x-amz-date, Signature=b97d918cfa904a5beff61c982a1b6f458b799221646efd99d3219ec94cdf2500"
        );
        assert_eq!(req.headers()["x-amz-date"], "20150830T123600Z");
    }

    #[test]
    fn user_agent_is_not_signed() {
        let mut req = http::Request::builder()
            .method("POST")
            .uri("https://dynamodb.us-east-1.amazonaws.com/")
            .header("content-type", "application/x-amz-json-1.0")
            .header("x-amz-target", "DynamoDB_20120810.ListTables")
            .header("user-agent", "aws-sdk-rust/0.1.0 os/linux")
            .body(())
            .unwrap();
        let signature = sign(
            &mut req,
            SignableBody::Bytes(b"{}"),
            &params("20210520T000000Z", "dynamodb", Some("session-token")),
        )
        .expect("valid request");
        assert_eq!(
            signature,
            "4dcabfc2ad09ec4abf48a2856ffe37ed2cc137b700489b6e32e6fbf41f64b88d"
        );
        let auth = req.headers()["authorization"].to_str().unwrap();
        assert!(auth.contains(
            "SignedHeaders=content-type;host;x-amz-date;x-amz-security-token;x-amz-target,"
        ));
        assert_eq!(req.headers()["x-amz-security-token"], "session-token");
    }

    #[test]
    fn relative_uris_cannot_be_signed() {
        let mut req = http::Request::builder().uri("/").body(()).unwrap();
        assert!(sign(
            &mut req,
            SignableBody::UnsignedPayload,
            &params("20150830T123600Z", "service", None)
        )
        .is_err());
    }
}
