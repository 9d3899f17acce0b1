/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod instant;
pub mod retry;

use crate::retry::{ErrorKind, ProvideErrorKind};
use std::collections::HashMap;
use std::fmt;
use std::fmt::{Display, Formatter};

pub use crate::instant::Instant;

/// Binary data
///
/// On the wire, JSON protocols encode blobs as base64 strings.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Blob {
    inner: Vec<u8>,
}

impl Blob {
    pub fn new<T: Into<Vec<u8>>>(inp: T) -> Self {
        Blob { inner: inp.into() }
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.inner
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}

/// Open content: an arbitrary JSON-like value
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Object(HashMap<String, Document>),
    Array(Vec<Document>),
    Number(Number),
    String(String),
    Bool(bool),
    Null,
}

/// A number type that implements Javascript / JSON semantics, modeled on serde_json:
/// https://docs.serde.rs/src/serde_json/number.rs.html#20-22
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    PosInt(u64),
    NegInt(i64),
    Float(f64),
}

/// Generic error returned by a service
///
/// Every service error carries this metadata. When a response cannot be mapped to a modeled
/// error, the generic error is all that remains.
#[derive(Debug, Eq, PartialEq, Default, Clone)]
pub struct Error {
    pub code: Option<String>,
    pub message: Option<String>,
    pub request_id: Option<String>,
}

impl Error {
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}

impl ProvideErrorKind for Error {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        Error::code(self)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut fmt = f.debug_struct("Error");
        if let Some(code) = &self.code {
            fmt.field("code", code);
        }
        if let Some(message) = &self.message {
            fmt.field("message", message);
        }
        if let Some(req_id) = &self.request_id {
            fmt.field("request_id", req_id);
        }
        fmt.finish()
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod test {
    use crate::retry::ProvideErrorKind;
    use crate::{Blob, Error};

    #[test]
    fn blob_exposes_bytes() {
        let blob = Blob::new("hello");
        assert_eq!(blob.as_ref(), b"hello");
        assert_eq!(blob.into_inner(), b"hello".to_vec());
    }

    #[test]
    fn generic_error_display_omits_missing_fields() {
        let err = Error {
            code: Some("ThrottlingException".to_string()),
            message: None,
            request_id: Some("abc-123".to_string()),
        };
        assert_eq!(
            format!("{}", err),
            "Error { code: \"ThrottlingException\", request_id: \"abc-123\" }"
        );
        assert_eq!(ProvideErrorKind::code(&err), Some("ThrottlingException"));
        assert_eq!(err.retryable_error_kind(), None);
    }
}
