// packages/fakenet/src/request.rs
//! Outgoing request
//!
//! Matchers only ever read a request. The URL is kept exactly as the caller
//! wrote it, so `http://example.org` never gains a trailing slash before
//! pattern matching.

use crate::body::{self, Body};
use crate::interception::response::Headers;
use crate::utils::errors::{FakeNetError, Result};
use bytes::Bytes;
use hyper::Method;

/// An outgoing HTTP request
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    url: String,
    headers: Headers,
    body: Bytes,
}

impl Request {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Headers::new(),
            body: Bytes::new(),
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    /// Set a header, replacing any previous values for `key`
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), vec![value.into()]);
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The URL string matchers compare against
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn header(&self, key: &str) -> Option<&[String]> {
        self.headers.get(key).map(Vec::as_slice)
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Convert into a hyper request for the network transport
    pub fn into_http(self) -> Result<hyper::Request<Body>> {
        let mut builder = hyper::Request::builder()
            .method(self.method)
            .uri(self.url.as_str());

        for (name, values) in &self.headers {
            for value in values {
                builder = builder.header(name.as_str(), value.as_str());
            }
        }

        builder.body(body::full_body(self.body)).map_err(|e| {
            FakeNetError::InvalidRequest(format!("{}: {}", self.url, e))
        })
    }
}
