/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::{HeaderMap, HeaderValue};
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::pin::Pin;
use std::task::{Context, Poll};

type BodyError = Box<dyn Error + Send + Sync>;

/// SdkBody type
///
/// This is the Body used for dispatching all HTTP Requests. Every request body is loaded into
/// memory up front, so a body can be signed and cloned for retries.
/// For handling responses, the type of the body will be controlled by the HTTP stack.
pub enum SdkBody {
    Once(Option<Bytes>),
}

impl SdkBody {
    pub fn empty() -> Self {
        SdkBody::Once(None)
    }

    fn poll_inner(&mut self) -> Poll<Option<Result<Bytes, BodyError>>> {
        match self {
            SdkBody::Once(ref mut opt) => Poll::Ready(opt.take().map(Ok)),
        }
    }

    /// Return the bytes of this body, if they are still available
    ///
    /// Once the body has been polled, the data is no longer available.
    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            SdkBody::Once(Some(bytes)) => Some(&bytes[..]),
            SdkBody::Once(None) => Some(&[]),
        }
    }

    pub fn try_clone(&self) -> Option<Self> {
        match self {
            SdkBody::Once(bytes) => Some(SdkBody::Once(bytes.clone())),
        }
    }

    pub fn content_length(&self) -> Option<u64> {
        self.bytes().map(|bytes| bytes.len() as u64)
    }
}

impl Debug for SdkBody {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SdkBody::Once(Some(bytes)) => match std::str::from_utf8(bytes) {
                Ok(text) => write!(f, "SdkBody({:?})", text),
                Err(_) => write!(f, "SdkBody({} bytes)", bytes.len()),
            },
            SdkBody::Once(None) => write!(f, "SdkBody(<empty>)"),
        }
    }
}

impl Default for SdkBody {
    fn default() -> Self {
        SdkBody::empty()
    }
}

impl From<&str> for SdkBody {
    fn from(s: &str) -> Self {
        SdkBody::Once(Some(Bytes::copy_from_slice(s.as_bytes())))
    }
}

impl From<String> for SdkBody {
    fn from(s: String) -> Self {
        SdkBody::from(Bytes::from(s))
    }
}

impl From<Bytes> for SdkBody {
    fn from(bytes: Bytes) -> Self {
        SdkBody::Once(Some(bytes))
    }
}

impl From<Vec<u8>> for SdkBody {
    fn from(data: Vec<u8>) -> SdkBody {
        Self::from(Bytes::from(data))
    }
}

impl http_body::Body for SdkBody {
    type Data = Bytes;
    type Error = BodyError;

    fn poll_data(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Self::Data, Self::Error>>> {
        self.poll_inner()
    }

    fn poll_trailers(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Result<Option<HeaderMap<HeaderValue>>, Self::Error>> {
        Poll::Ready(Ok(None))
    }

    fn is_end_stream(&self) -> bool {
        matches!(self, SdkBody::Once(None))
    }

    fn size_hint(&self) -> http_body::SizeHint {
        match self.content_length() {
            Some(len) => http_body::SizeHint::with_exact(len),
            None => http_body::SizeHint::default(),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use http_body::Body;

    #[tokio::test]
    async fn body_is_read_once() {
        let mut body = SdkBody::from("hello");
        assert_eq!(body.content_length(), Some(5));
        let copy = body.try_clone().expect("in-memory bodies can be cloned");
        let data = body.data().await.expect("data").expect("no error");
        assert_eq!(&data[..], b"hello");
        assert!(body.data().await.is_none());
        assert!(body.is_end_stream());
        assert_eq!(copy.bytes(), Some(&b"hello"[..]));
    }

    #[test]
    fn debug_shows_text() {
        assert_eq!(format!("{:?}", SdkBody::from("{}")), "SdkBody(\"{}\")");
        assert_eq!(format!("{:?}", SdkBody::empty()), "SdkBody(<empty>)");
    }
}
