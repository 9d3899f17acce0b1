/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::uri::{Authority, PathAndQuery, Uri};
use std::borrow::Cow;
use std::convert::TryFrom;
use thiserror::Error;

/// API Endpoint
///
/// The scheme, authority, and (optional) base path that requests are sent to. Paths
/// from an operation are appended to the endpoint's path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    uri: http::Uri,
}

#[non_exhaustive]
#[derive(Debug, Error, Eq, PartialEq, Clone)]
pub enum InvalidEndpoint {
    #[error("endpoint `{0}` must have a scheme")]
    EndpointMustHaveScheme(String),
    #[error("endpoint `{0}` must have an authority")]
    EndpointMustHaveAuthority(String),
    #[error("request path could not be merged into endpoint `{0}`")]
    InvalidPath(String),
}

impl Endpoint {
    /// Create a new endpoint from a URI
    ///
    /// ```rust
    /// # use smithy_http::endpoint::Endpoint;
    /// use http::Uri;
    /// let endpoint = Endpoint::immutable(Uri::from_static("http://localhost:8000"));
    /// ```
    pub fn immutable(uri: Uri) -> Self {
        Endpoint { uri }
    }

    pub fn uri(&self) -> &http::Uri {
        &self.uri
    }

    /// Set the endpoint on `uri`, keeping the path and query of `uri`
    pub fn set_endpoint(&self, uri: &mut http::Uri) -> Result<(), InvalidEndpoint> {
        let describe = || self.uri.to_string();
        let authority: Authority = self
            .uri
            .authority()
            .cloned()
            .ok_or_else(|| InvalidEndpoint::EndpointMustHaveAuthority(describe()))?;
        let scheme = self
            .uri
            .scheme()
            .cloned()
            .ok_or_else(|| InvalidEndpoint::EndpointMustHaveScheme(describe()))?;
        let path_and_query = PathAndQuery::try_from(Self::merge_paths(&self.uri, uri).as_ref())
            .map_err(|_| InvalidEndpoint::InvalidPath(describe()))?;
        let new_uri = Uri::builder()
            .authority(authority)
            .scheme(scheme)
            .path_and_query(path_and_query)
            .build()
            .map_err(|_| InvalidEndpoint::InvalidPath(describe()))?;
        *uri = new_uri;
        Ok(())
    }

    fn merge_paths<'a>(endpoint: &'a Uri, uri: &'a Uri) -> Cow<'a, str> {
        if let Some(query) = endpoint.path_and_query().and_then(|pq| pq.query()) {
            tracing::warn!(query = %query, "query specified in endpoint will be ignored during endpoint resolution");
        }
        let endpoint_path = endpoint.path();
        let uri_path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
        if endpoint_path.is_empty() || endpoint_path == "/" {
            Cow::Borrowed(uri_path_and_query)
        } else {
            let ep_no_slash = endpoint_path.strip_suffix('/').unwrap_or(endpoint_path);
            let uri_path_no_slash = uri_path_and_query
                .strip_prefix('/')
                .unwrap_or(uri_path_and_query);
            Cow::Owned(format!("{}/{}", ep_no_slash, uri_path_no_slash))
        }
    }
}

#[cfg(test)]
mod test {
    use crate::endpoint::{Endpoint, InvalidEndpoint};
    use http::Uri;

    #[test]
    fn endpoint_replaces_scheme_and_authority() {
        let ep = Endpoint::immutable(Uri::from_static("https://dynamodb.us-east-1.amazonaws.com"));
        let mut uri = Uri::from_static("/");
        ep.set_endpoint(&mut uri).expect("valid endpoint");
        assert_eq!(
            uri,
            Uri::from_static("https://dynamodb.us-east-1.amazonaws.com/")
        );
    }

    #[test]
    fn endpoint_custom_port() {
        let ep = Endpoint::immutable(Uri::from_static("http://localhost:8000"));
        let mut uri = Uri::from_static("/analyzer?maxResults=5");
        ep.set_endpoint(&mut uri).expect("valid endpoint");
        assert_eq!(
            uri,
            Uri::from_static("http://localhost:8000/analyzer?maxResults=5")
        );
    }

    #[test]
    fn endpoint_with_path() {
        for endpoint in &[
            // trailing slashes are normalized
            "https://us-east-1.honeycode.amazonaws.com/private",
            "https://us-east-1.honeycode.amazonaws.com/private/",
        ] {
            let ep = Endpoint::immutable(Uri::from_static(endpoint));
            let mut uri = Uri::from_static("/screendata?k=v");
            ep.set_endpoint(&mut uri).expect("valid endpoint");
            assert_eq!(
                uri,
                Uri::from_static("https://us-east-1.honeycode.amazonaws.com/private/screendata?k=v")
            );
        }
    }

    #[test]
    fn endpoint_without_authority_is_rejected() {
        let ep = Endpoint::immutable(Uri::from_static("/just/a/path"));
        let mut uri = Uri::from_static("/");
        assert_eq!(
            ep.set_endpoint(&mut uri),
            Err(InvalidEndpoint::EndpointMustHaveAuthority(
                "/just/a/path".to_string()
            ))
        );
    }
}
