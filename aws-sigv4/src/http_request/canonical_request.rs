/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use super::{PayloadChecksumKind, SigningError, SigningSettings, UriEncoding};
use crate::date_fmt::{format_date, format_date_time};
use chrono::{Date, DateTime, Utc};
use http::header::{HeaderName, HOST, USER_AGENT};
use http::{HeaderMap, HeaderValue, Method, Uri};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;

pub(crate) const HMAC_256: &str = "AWS4-HMAC-SHA256";
pub(crate) const X_AMZ_SECURITY_TOKEN: &str = "x-amz-security-token";
pub(crate) const X_AMZ_DATE: &str = "x-amz-date";
pub(crate) const X_AMZ_CONTENT_SHA_256: &str = "x-amz-content-sha256";
pub(crate) const UNSIGNED_PAYLOAD: &str = "UNSIGNED-PAYLOAD";

/// Everything but the RFC 3986 unreserved characters
const QUERY_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

fn percent_encode(value: &str) -> String {
    percent_encoding::utf8_percent_encode(value, QUERY_ESCAPE).to_string()
}

#[derive(Debug, PartialEq)]
pub(crate) struct CanonicalRequest<'a> {
    pub(crate) method: &'a Method,
    pub(crate) path: String,
    pub(crate) params: Option<String>,
    pub(crate) headers: HeaderMap,
    pub(crate) signed_headers: SignedHeaders,
    pub(crate) content_sha256: &'a str,
}

impl<'a> CanonicalRequest<'a> {
    /// Construct a CanonicalRequest from the parts of an HTTP request
    ///
    /// The canonical headers include headers not present on the request: `host` is derived
    /// from the URI, `x-amz-date` from `date_time`, and `x-amz-security-token` and
    /// `x-amz-content-sha256` are added when applicable. `user-agent` is never signed.
    pub(crate) fn from(
        method: &'a Method,
        uri: &Uri,
        headers: &HeaderMap,
        settings: &SigningSettings,
        date_time: &DateTime<Utc>,
        security_token: Option<&str>,
        payload_hash: &'a str,
    ) -> Result<CanonicalRequest<'a>, SigningError> {
        let path = match uri.path() {
            "" => "/",
            path => path,
        };
        let path = match settings.uri_encoding {
            UriEncoding::Double => path.replace('%', "%25"),
            UriEncoding::Single => path.to_string(),
        };

        let mut canonical_headers = headers.clone();
        if !canonical_headers.contains_key(HOST) {
            let authority = uri
                .authority()
                .ok_or_else(|| SigningError::MissingAuthority(uri.clone()))?;
            canonical_headers.insert(HOST, HeaderValue::try_from(authority.as_str())?);
        }
        canonical_headers.insert(
            HeaderName::from_static(X_AMZ_DATE),
            HeaderValue::from_str(&format_date_time(date_time))?,
        );
        if let Some(security_token) = security_token {
            canonical_headers.insert(
                HeaderName::from_static(X_AMZ_SECURITY_TOKEN),
                HeaderValue::from_str(security_token)?,
            );
        }
        if settings.payload_checksum_kind == PayloadChecksumKind::XAmzSha256 {
            canonical_headers.insert(
                HeaderName::from_static(X_AMZ_CONTENT_SHA_256),
                HeaderValue::from_str(payload_hash)?,
            );
        }

        let mut signed_headers = Vec::with_capacity(canonical_headers.keys_len());
        for name in canonical_headers.keys() {
            if name == USER_AGENT {
                continue;
            }
            for value in canonical_headers.get_all(name) {
                value
                    .to_str()
                    .map_err(|_| SigningError::UnsignableHeader(name.clone()))?;
            }
            signed_headers.push(CanonicalHeaderName(name.clone()));
        }

        Ok(CanonicalRequest {
            method,
            path,
            params: Self::params(uri),
            headers: canonical_headers,
            signed_headers: SignedHeaders::new(signed_headers),
            content_sha256: payload_hash,
        })
    }

    fn params(uri: &Uri) -> Option<String> {
        let query = uri.query()?;
        let mut params: Vec<(Cow<str>, Cow<str>)> =
            form_urlencoded::parse(query.as_bytes()).collect();
        // Sort by param name, and then by param value
        params.sort();
        let encoded: Vec<String> = params
            .iter()
            .map(|(key, value)| format!("{}={}", percent_encode(key), percent_encode(value)))
            .collect();
        Some(encoded.join("&"))
    }
}

impl<'a> fmt::Display for CanonicalRequest<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.method)?;
        writeln!(f, "{}", self.path)?;
        writeln!(f, "{}", self.params.as_deref().unwrap_or(""))?;
        for header in &self.signed_headers.inner {
            let values: Vec<&str> = self
                .headers
                .get_all(&header.0)
                .iter()
                .filter_map(|value| value.to_str().ok())
                .map(str::trim)
                .collect();
            writeln!(f, "{}:{}", header.0.as_str(), values.join(","))?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.signed_headers)?;
        write!(f, "{}", self.content_sha256)
    }
}

#[derive(Debug, PartialEq, Default)]
pub(crate) struct SignedHeaders {
    inner: Vec<CanonicalHeaderName>,
}

impl SignedHeaders {
    fn new(mut inner: Vec<CanonicalHeaderName>) -> Self {
        inner.sort();
        SignedHeaders { inner }
    }
}

impl fmt::Display for SignedHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.inner.iter().map(|name| name.0.as_str()).collect();
        write!(f, "{}", names.join(";"))
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub(crate) struct CanonicalHeaderName(HeaderName);

impl PartialOrd for CanonicalHeaderName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CanonicalHeaderName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.as_str().cmp(other.0.as_str())
    }
}

#[derive(PartialEq, Debug, Clone)]
pub(crate) struct Scope<'a> {
    pub(crate) date: Date<Utc>,
    pub(crate) region: &'a str,
    pub(crate) service: &'a str,
}

impl<'a> fmt::Display for Scope<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/aws4_request",
            format_date(&self.date),
            self.region,
            self.service
        )
    }
}

#[derive(PartialEq, Debug)]
pub(crate) struct StringToSign<'a> {
    pub(crate) scope: Scope<'a>,
    pub(crate) date: DateTime<Utc>,
    pub(crate) hashed_creq: &'a str,
}

impl<'a> StringToSign<'a> {
    pub(crate) fn new(
        date: DateTime<Utc>,
        region: &'a str,
        service: &'a str,
        hashed_creq: &'a str,
    ) -> Self {
        let scope = Scope {
            date: date.date(),
            region,
            service,
        };
        Self {
            scope,
            date,
            hashed_creq,
        }
    }
}

impl<'a> fmt::Display for StringToSign<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n{}\n{}\n{}",
            HMAC_256,
            format_date_time(&self.date),
            self.scope,
            self.hashed_creq
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{CanonicalRequest, Scope, StringToSign};
    use crate::date_fmt::parse_date_time;
    use crate::http_request::{PayloadChecksumKind, SigningSettings, UriEncoding};
    use crate::sign::sha256_hex_string;
    use http::{HeaderMap, Method, Uri};
    use pretty_assertions::assert_eq;

    const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    fn creq_for(uri: &str, settings: &SigningSettings) -> String {
        let method = Method::GET;
        let date = parse_date_time("20150830T123600Z").unwrap();
        CanonicalRequest::from(
            &method,
            &uri.parse::<Uri>().unwrap(),
            &HeaderMap::new(),
            settings,
            &date,
            None,
            EMPTY_SHA256,
        )
        .expect("valid request")
        .to_string()
    }

    #[test]
    fn vanilla_query_order() {
        let creq = creq_for(
            "https://example.amazonaws.com/?Param2=value2&Param1=value1",
            &SigningSettings::default(),
        );
        assert_eq!(
            creq,
            "GET\n/\nParam1=value1&Param2=value2\nhost:example.amazonaws.com\nx-amz-date:20150830T123600Z\n\nhost;x-amz-date\ne3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            sha256_hex_string(creq.as_bytes()),
            "816cd5b414d056048ba4f7c5386d6e0533120fb1fcfa93762cf0fc39e2cf19e0"
        );
    }

    #[test]
    fn set_xamz_sha_256() {
        let mut settings = SigningSettings::default();
        settings.payload_checksum_kind = PayloadChecksumKind::XAmzSha256;
        let creq = creq_for("https://example.amazonaws.com/", &settings);
        assert!(creq.contains("\nhost;x-amz-content-sha256;x-amz-date\n"));
    }

    #[test]
    fn double_url_encode() {
        let creq = creq_for(
            "https://iotevents.us-east-1.amazonaws.com/inputs/my%20input",
            &SigningSettings::default(),
        );
        assert!(creq.starts_with("GET\n/inputs/my%2520input\n"));

        let mut settings = SigningSettings::default();
        settings.uri_encoding = UriEncoding::Single;
        let creq = creq_for(
            "https://iotevents.us-east-1.amazonaws.com/inputs/my%20input",
            &settings,
        );
        assert!(creq.starts_with("GET\n/inputs/my%20input\n"));
    }

    #[test]
    fn tilde_in_uri() {
        let creq = creq_for(
            "https://s3.us-east-1.amazonaws.com/my-bucket?list-type=2&prefix=~objprefix&single&k=&unreserved=-_.~",
            &SigningSettings::default(),
        );
        assert!(creq.contains("\nk=&list-type=2&prefix=~objprefix&single=&unreserved=-_.~\n"));
    }

    #[test]
    fn generate_scope() {
        let date = parse_date_time("20150830T123600Z").unwrap();
        let scope = Scope {
            date: date.date(),
            region: "us-east-1",
            service: "iam",
        };
        assert_eq!(scope.to_string(), "20150830/us-east-1/iam/aws4_request");
    }

    #[test]
    fn string_to_sign() {
        let date = parse_date_time("20150830T123600Z").unwrap();
        let sts = StringToSign::new(
            date,
            "us-east-1",
            "service",
            "816cd5b414d056048ba4f7c5386d6e0533120fb1fcfa93762cf0fc39e2cf19e0",
        );
        assert_eq!(
            sts.to_string(),
            "AWS4-HMAC-SHA256\n20150830T123600Z\n20150830/us-east-1/service/aws4_request\n816cd5b414d056048ba4f7c5386d6e0533120fb1fcfa93762cf0fc39e2cf19e0"
        );
    }
}
