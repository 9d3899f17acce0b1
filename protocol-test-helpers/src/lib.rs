/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use assert_json_diff::assert_json_eq_no_panic;
use http::{Request, Uri};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ProtocolTestFailure {
    #[error("missing query param: expected `{expected}`, found {found:?}")]
    MissingQueryParam {
        expected: String,
        found: Vec<String>,
    },
    #[error("forbidden query param present: `{expected}`")]
    ForbiddenQueryParam { expected: String },
    #[error("required query param missing: `{expected}`")]
    RequiredQueryParam { expected: String },

    #[error("invalid header value for key `{key}`: expected `{expected}`, found `{found}`")]
    InvalidHeader {
        key: String,
        expected: String,
        found: String,
    },
    #[error("missing required header: `{expected}`")]
    MissingHeader { expected: String },
    #[error("Header `{forbidden}` was forbidden but found: `{found}`")]
    ForbiddenHeader { forbidden: String, found: String },
    #[error("body did not match. Hint:\n{hint}")]
    BodyDidNotMatch { hint: String },
    #[error("Expected body to be valid {expected} but instead: {found}")]
    InvalidBodyFormat { expected: String, found: String },
}

/// Check that the protocol test succeeded & print the pretty error
/// if it did not
///
/// The primary motivation is making multiline debug output
/// readable & using the cleaner Display implementation
#[track_caller]
pub fn assert_ok(inp: Result<(), ProtocolTestFailure>) {
    if let Err(e) = inp {
        eprintln!("{}", e);
        panic!("Protocol test failed");
    }
}

#[derive(Eq, PartialEq, Hash)]
struct QueryParam<'a> {
    key: &'a str,
    value: Option<&'a str>,
}

impl<'a> QueryParam<'a> {
    fn parse(s: &'a str) -> Self {
        let mut parsed = s.split('=');
        QueryParam {
            key: parsed.next().unwrap_or_default(),
            value: parsed.next(),
        }
    }
}

fn extract_params(uri: &Uri) -> HashSet<&str> {
    uri.query()
        .unwrap_or_default()
        .split('&')
        .filter(|param| !param.is_empty())
        .collect()
}

/// Every `key=value` in `expected_params` must appear, exactly as encoded, in the query string
pub fn validate_query_string<B>(
    request: &Request<B>,
    expected_params: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let actual_params = extract_params(request.uri());
    for param in expected_params {
        if !actual_params.contains(param) {
            return Err(ProtocolTestFailure::MissingQueryParam {
                expected: param.to_string(),
                found: actual_params.iter().map(|s| s.to_string()).collect(),
            });
        }
    }
    Ok(())
}

fn query_keys(uri: &Uri) -> HashSet<&str> {
    extract_params(uri)
        .iter()
        .map(|param| QueryParam::parse(param).key)
        .collect()
}

pub fn forbid_query_params<B>(
    request: &Request<B>,
    forbid_keys: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let actual_keys = query_keys(request.uri());
    for key in forbid_keys {
        if actual_keys.contains(*key) {
            return Err(ProtocolTestFailure::ForbiddenQueryParam {
                expected: key.to_string(),
            });
        }
    }
    Ok(())
}

pub fn require_query_params<B>(
    request: &Request<B>,
    require_keys: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let actual_keys = query_keys(request.uri());
    for key in require_keys {
        if !actual_keys.contains(*key) {
            return Err(ProtocolTestFailure::RequiredQueryParam {
                expected: key.to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_headers<B>(
    request: &Request<B>,
    expected_headers: &[(&str, &str)],
) -> Result<(), ProtocolTestFailure> {
    for (key, expected_value) in expected_headers {
        // Protocol tests store header lists as comma-delimited
        if !request.headers().contains_key(*key) {
            return Err(ProtocolTestFailure::MissingHeader {
                expected: key.to_string(),
            });
        }
        let actual_value: String = request
            .headers()
            .get_all(*key)
            .iter()
            .map(|hv| hv.to_str().unwrap_or("<non-ascii header value>"))
            .collect::<Vec<_>>()
            .join(", ");
        if *expected_value != actual_value {
            return Err(ProtocolTestFailure::InvalidHeader {
                key: key.to_string(),
                expected: expected_value.to_string(),
                found: actual_value,
            });
        }
    }
    Ok(())
}

pub fn forbid_headers<B>(
    request: &Request<B>,
    forbidden_headers: &[&str],
) -> Result<(), ProtocolTestFailure> {
    for key in forbidden_headers {
        if let Some(value) = request.headers().get(*key) {
            return Err(ProtocolTestFailure::ForbiddenHeader {
                forbidden: key.to_string(),
                found: format!("{}: {:?}", key, value),
            });
        }
    }
    Ok(())
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MediaType {
    /// Json media types are deserialized and compared
    Json,
    /// Other media types are compared literally
    Other(String),
}

impl<T: AsRef<str>> From<T> for MediaType {
    fn from(inp: T) -> Self {
        let media_type = inp.as_ref();
        match media_type {
            "application/json" => MediaType::Json,
            json if json.starts_with("application/x-amz-json-") => MediaType::Json,
            other => MediaType::Other(other.to_string()),
        }
    }
}

/// Compare a request body against the expected body
///
/// JSON bodies are compared structurally so key order and whitespace do not matter. An empty
/// expected body matches an empty actual body.
pub fn validate_body<T: AsRef<[u8]>>(
    actual_body: T,
    expected_body: &str,
    media_type: MediaType,
) -> Result<(), ProtocolTestFailure> {
    let body_str = std::str::from_utf8(actual_body.as_ref());
    match (media_type, body_str) {
        (_, Ok(actual)) if actual.is_empty() && expected_body.is_empty() => Ok(()),
        (MediaType::Json, Ok(actual_body)) => validate_json_body(actual_body, expected_body),
        (MediaType::Json, Err(_)) => Err(ProtocolTestFailure::InvalidBodyFormat {
            expected: "json".to_owned(),
            found: "input was not valid UTF-8".to_owned(),
        }),
        (MediaType::Other(media_type), Ok(actual_body)) => {
            if actual_body != expected_body {
                Err(ProtocolTestFailure::BodyDidNotMatch {
                    hint: format!(
                        "{} body did not match.\nexpected: {}\nactual: {}",
                        media_type, expected_body, actual_body
                    ),
                })
            } else {
                Ok(())
            }
        }
        (MediaType::Other(media_type), Err(_)) => Err(ProtocolTestFailure::InvalidBodyFormat {
            expected: media_type,
            found: "input was not valid UTF-8".to_owned(),
        }),
    }
}

fn validate_json_body(actual: &str, expected: &str) -> Result<(), ProtocolTestFailure> {
    let actual_json: serde_json::Value =
        serde_json::from_str(actual).map_err(|e| ProtocolTestFailure::InvalidBodyFormat {
            expected: "json".to_owned(),
            found: e.to_string() + actual,
        })?;
    let expected_json: serde_json::Value =
        serde_json::from_str(expected).map_err(|e| ProtocolTestFailure::InvalidBodyFormat {
            expected: "json".to_owned(),
            found: e.to_string() + expected,
        })?;
    assert_json_eq_no_panic(&actual_json, &expected_json)
        .map_err(|hint| ProtocolTestFailure::BodyDidNotMatch { hint })
}

#[cfg(test)]
mod tests {
    use crate::{
        forbid_headers, forbid_query_params, require_query_params, validate_body,
        validate_headers, validate_query_string, MediaType, ProtocolTestFailure,
    };
    use http::Request;

    #[test]
    fn test_validate_empty_query_string() {
        let request = Request::builder().uri("/foo").body(()).unwrap();
        validate_query_string(&request, &[]).expect("no required params should pass");
        validate_query_string(&request, &["a"])
            .err()
            .expect("no params provided");
    }

    #[test]
    fn test_validate_query_string() {
        let request = Request::builder()
            .uri("/analyzer?maxResults=5&c&type=ACCOUNT&nextToken=a%20b")
            .body(())
            .unwrap();
        validate_query_string(&request, &["maxResults=5"]).expect("param is in the query string");
        validate_query_string(&request, &["c", "maxResults=5"])
            .expect("both params are in the query string");
        validate_query_string(&request, &["maxResults=5", "c", "type=ACCOUNT", "nextToken=a%20b"])
            .expect("all params are in the query string");

        validate_query_string(&request, &["maxResults"]).expect_err("no parameter should match");
        validate_query_string(&request, &["maxResults=50"]).expect_err("no parameter should match");
        validate_query_string(&request, &["nextToken=a%20"]).expect_err("no parameter should match");
    }

    #[test]
    fn test_forbid_query_param() {
        let request = Request::builder()
            .uri("/foo?a=b&c&d=efg&hello=a%20b")
            .body(())
            .unwrap();
        forbid_query_params(&request, &["a"]).expect_err("a is a query param");
        forbid_query_params(&request, &["not_included"]).expect("query param not included");
        forbid_query_params(&request, &["a=b"]).expect("should be matching against keys");
        forbid_query_params(&request, &["c"]).expect_err("c is a query param");
    }

    #[test]
    fn test_require_query_param() {
        let request = Request::builder()
            .uri("/tags?resourceArn=arn&tagKeys=a&tagKeys=b")
            .body(())
            .unwrap();
        require_query_params(&request, &["resourceArn"]).expect("resourceArn is a query param");
        require_query_params(&request, &["not_included"]).expect_err("query param not included");
        require_query_params(&request, &["tagKeys=a"]).expect_err("should be matching against keys");
        require_query_params(&request, &["tagKeys"]).expect("tagKeys is a query param");
    }

    #[test]
    fn test_validate_headers() {
        let request = Request::builder()
            .uri("/")
            .header("X-Foo", "foo")
            .header("X-Foo-List", "foo")
            .header("X-Foo-List", "bar")
            .header("X-Inline", "inline, other")
            .body(())
            .unwrap();

        validate_headers(&request, &[("X-Foo", "foo")]).expect("header present");
        validate_headers(&request, &[("X-Foo", "Foo")]).expect_err("case sensitive");
        validate_headers(&request, &[("x-foo-list", "foo, bar")]).expect("list concat");
        validate_headers(&request, &[("X-Foo-List", "foo")])
            .expect_err("all list members must be specified");
        validate_headers(&request, &[("X-Inline", "inline, other")])
            .expect("inline header lists also work");
        assert_eq!(
            validate_headers(&request, &[("missing", "value")]),
            Err(ProtocolTestFailure::MissingHeader {
                expected: "missing".to_owned()
            })
        );
        forbid_headers(&request, &["X-Foo"]).expect_err("X-Foo is set");
        forbid_headers(&request, &["X-Bar"]).expect("X-Bar is not set");
    }

    #[test]
    fn test_validate_json_body() {
        let expected = r#"{"abc": true, "def": "hello"}"#;
        validate_body(r#"{"def":"hello","abc":true}"#, expected, MediaType::Json)
            .expect("key order does not matter");
        validate_body(
            r#"{"abc": true, "def": "hello", "ghi": 5}"#,
            expected,
            MediaType::Json,
        )
        .expect_err("bodies do not match");
        validate_body("", "", MediaType::from("application/x-amz-json-1.0"))
            .expect("empty bodies match");
        validate_body("not json", expected, MediaType::Json).expect_err("invalid json");
    }

    #[test]
    fn test_validate_non_json_body() {
        let expected = r#"hello"#;
        validate_body("hello", expected, MediaType::from("something/else"))
            .expect("bodies match");
        validate_body("goodbye", expected, MediaType::from("something/else"))
            .expect_err("bodies do not match");
        assert_eq!(
            MediaType::from("application/x-amz-json-1.1"),
            MediaType::Json
        );
    }
}
