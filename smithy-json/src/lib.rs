/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! JSON support shared by the `awsJson1_0`, `awsJson1_1` and `restJson1` protocols
//!
//! Structures serialize with `serde` derives. The modules here cover the shapes serde can't
//! express directly: epoch-second timestamps, base64 blobs and the protocol error envelope.

pub mod error;
pub mod serde_with;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Deserialize a response body, treating an empty body as `{}`
pub fn from_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        serde_json::from_slice(b"{}")
    } else {
        serde_json::from_slice(body)
    }
}

/// Serialize a request body
pub fn to_body<T: Serialize>(input: &T) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(input)
}

#[cfg(test)]
mod test {
    use crate::from_body;
    use serde::Deserialize;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Output {
        #[serde(rename = "nextToken")]
        next_token: Option<String>,
    }

    #[test]
    fn empty_bodies_are_empty_objects() {
        assert_eq!(
            from_body::<Output>(b"").expect("valid"),
            Output { next_token: None }
        );
        assert_eq!(
            from_body::<Output>(b"  \n").expect("valid"),
            Output { next_token: None }
        );
        assert_eq!(
            from_body::<Output>(br#"{"nextToken": "abc", "other": 5}"#).expect("valid"),
            Output {
                next_token: Some("abc".to_string())
            }
        );
    }

    #[test]
    fn malformed_bodies_fail() {
        assert!(from_body::<Output>(b"{").is_err());
    }
}
