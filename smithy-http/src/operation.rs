/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::body::SdkBody;
use crate::property_bag::PropertyBag;
use std::borrow::Cow;
use std::error::Error;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;

type BoxError = Box<dyn Error + Send + Sync>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    operation: Cow<'static, str>,
    service: Cow<'static, str>,
}

impl Metadata {
    pub fn name(&self) -> &str {
        &self.operation
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn new(
        operation: impl Into<Cow<'static, str>>,
        service: impl Into<Cow<'static, str>>,
    ) -> Self {
        Metadata {
            operation: operation.into(),
            service: service.into(),
        }
    }
}

#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct Parts<H, R> {
    pub response_handler: H,
    pub retry_policy: R,
    pub metadata: Option<Metadata>,
}

/// An error that occurred while turning an operation input into an HTTP request
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BuildError {
    /// A required field was not set, or was set to a value that cannot be placed in the request
    #[error("{field} was missing or invalid: {details}")]
    MissingField {
        field: &'static str,
        details: &'static str,
    },

    #[error("invalid field `{field}`: {details}")]
    InvalidField { field: &'static str, details: String },

    #[error("failed to serialize the request body")]
    SerializationError(#[source] BoxError),

    #[error("invalid uri `{uri}`: {message}")]
    InvalidUri {
        uri: String,
        message: Cow<'static, str>,
        #[source]
        err: http::uri::InvalidUri,
    },

    #[error("failed to construct the HTTP request")]
    Other(#[source] BoxError),
}

impl From<http::Error> for BuildError {
    fn from(err: http::Error) -> Self {
        BuildError::Other(err.into())
    }
}

/// A request that is ready to be dispatched, paired with everything needed to handle its response
#[derive(Debug)]
pub struct Operation<H, R> {
    request: Request,
    parts: Parts<H, R>,
}

impl<H, R> Operation<H, R> {
    pub fn into_request_response(self) -> (Request, Parts<H, R>) {
        (self.request, self.parts)
    }

    pub fn from_parts(request: Request, parts: Parts<H, R>) -> Self {
        Self { request, parts }
    }

    pub fn properties_mut(&mut self) -> MutexGuard<'_, PropertyBag> {
        self.request.properties_mut()
    }

    pub fn properties(&self) -> MutexGuard<'_, PropertyBag> {
        self.request.properties()
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.parts.metadata = Some(metadata);
        self
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.parts.metadata.as_ref()
    }

    pub fn with_retry_policy<R2>(self, retry_policy: R2) -> Operation<H, R2> {
        Operation {
            request: self.request,
            parts: Parts {
                response_handler: self.parts.response_handler,
                retry_policy,
                metadata: self.parts.metadata,
            },
        }
    }

    pub fn retry_policy(&self) -> &R {
        &self.parts.retry_policy
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn request_mut(&mut self) -> &mut Request {
        &mut self.request
    }

    pub fn try_clone(&self) -> Option<Self>
    where
        H: Clone,
        R: Clone,
    {
        let request = self.request.try_clone()?;
        Some(Self {
            request,
            parts: self.parts.clone(),
        })
    }
}

impl<H> Operation<H, ()> {
    pub fn new(request: Request, response_handler: H) -> Self {
        Operation {
            request,
            parts: Parts {
                response_handler,
                retry_policy: (),
                metadata: None,
            },
        }
    }
}

#[derive(Debug)]
pub struct Request {
    /// The underlying HTTP Request
    inner: http::Request<SdkBody>,

    /// Property bag of configuration options
    ///
    /// Middleware can read and write from the property bag and use its
    /// contents to augment the request (see [`Request::augment`](Request::augment))
    ///
    /// Retries clone the request, and every clone shares the same property bag.
    properties: Arc<Mutex<PropertyBag>>,
}

impl Request {
    pub fn new(base: http::Request<SdkBody>) -> Self {
        Request {
            inner: base,
            properties: Arc::new(Mutex::new(PropertyBag::new())),
        }
    }

    /// Transform the inner HTTP request with access to the property bag
    pub fn augment<T>(
        self,
        f: impl FnOnce(http::Request<SdkBody>, &mut PropertyBag) -> Result<http::Request<SdkBody>, T>,
    ) -> Result<Request, T> {
        let inner = {
            let mut properties = lock(&self.properties);
            f(self.inner, &mut *properties)?
        };
        Ok(Request {
            inner,
            properties: self.properties,
        })
    }

    pub fn properties_mut(&mut self) -> MutexGuard<'_, PropertyBag> {
        lock(&self.properties)
    }

    pub fn properties(&self) -> MutexGuard<'_, PropertyBag> {
        lock(&self.properties)
    }

    pub fn http(&self) -> &http::Request<SdkBody> {
        &self.inner
    }

    pub fn http_mut(&mut self) -> &mut http::Request<SdkBody> {
        &mut self.inner
    }

    pub fn try_clone(&self) -> Option<Request> {
        let cloned_body = self.inner.body().try_clone()?;
        let mut cloned_request = http::Request::new(cloned_body);
        *cloned_request.uri_mut() = self.inner.uri().clone();
        *cloned_request.method_mut() = self.inner.method().clone();
        *cloned_request.version_mut() = self.inner.version();
        *cloned_request.headers_mut() = self.inner.headers().clone();
        Some(Request {
            inner: cloned_request,
            properties: self.properties.clone(),
        })
    }

    pub fn into_parts(self) -> (http::Request<SdkBody>, Arc<Mutex<PropertyBag>>) {
        (self.inner, self.properties)
    }
}

/// Lock the property bag, ignoring poisoning
fn lock(properties: &Mutex<PropertyBag>) -> MutexGuard<'_, PropertyBag> {
    properties.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use crate::operation::{Metadata, Operation, Request};
    use http::header::{AUTHORIZATION, CONTENT_LENGTH};
    use http::Uri;

    fn test_request() -> Request {
        Request::new(
            http::Request::builder()
                .uri(Uri::from_static("http://www.amazon.com"))
                .method("POST")
                .header(CONTENT_LENGTH, 456)
                .header(AUTHORIZATION, "Token: hello")
                .body(SdkBody::from("hello world!"))
                .expect("valid request"),
        )
    }

    #[test]
    fn try_clone_clones_all_data() {
        let mut request = test_request();
        request.properties_mut().insert("hello");
        let cloned = request.try_clone().expect("request is cloneable");

        let (request, config) = cloned.into_parts();
        assert_eq!(request.uri(), &Uri::from_static("http://www.amazon.com"));
        assert_eq!(request.method(), "POST");
        assert_eq!(request.headers().len(), 2);
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "Token: hello"
        );
        assert_eq!(request.headers().get(CONTENT_LENGTH).unwrap(), "456");
        assert_eq!(request.body().bytes().unwrap(), "hello world!".as_bytes());
        assert_eq!(config.lock().unwrap().get::<&str>(), Some(&"hello"));
    }

    #[test]
    fn clones_share_properties() {
        let request = test_request();
        let mut cloned = request.try_clone().expect("cloneable");
        cloned.properties_mut().insert(5_u32);
        assert_eq!(request.properties().get::<u32>(), Some(&5));
    }

    #[test]
    fn augment_updates_request_and_properties() {
        let request = test_request()
            .augment(|mut req, props| {
                props.insert(Metadata::new("ListTables", "dynamodb"));
                req.headers_mut().remove(AUTHORIZATION);
                Ok::<_, ()>(req)
            })
            .expect("infallible");
        assert!(request.http().headers().get(AUTHORIZATION).is_none());
        assert_eq!(
            request.properties().get::<Metadata>().map(|m| m.name().to_string()),
            Some("ListTables".to_string())
        );
    }

    #[test]
    fn operation_swaps_retry_policy() {
        #[derive(Clone, Debug, PartialEq)]
        struct Policy(u8);

        let operation = Operation::new(test_request(), ())
            .with_metadata(Metadata::new("GetItem", "dynamodb"))
            .with_retry_policy(Policy(3));
        assert_eq!(operation.retry_policy(), &Policy(3));
        let cloned = operation.try_clone().expect("cloneable");
        assert_eq!(cloned.metadata().map(|m| m.service()), Some("dynamodb"));
    }
}
