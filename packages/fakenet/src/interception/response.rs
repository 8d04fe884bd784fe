// packages/fakenet/src/interception/response.rs
//! Canned responses
//!
//! A [`Response`] always starts fully initialized with zero values (status 0,
//! empty body, no headers). Each `with_*` call consumes the value and returns
//! the updated one, so a response is finished before any registry sees it.

use crate::body::{self, Body};
use crate::utils::errors::{FakeNetError, Result};
use bytes::Bytes;
use std::collections::HashMap;

/// Header map: unique keys, each with an ordered list of values
pub type Headers = HashMap<String, Vec<String>>;

/// HTTP response, either canned by an interceptor or read from the network
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    status: i32,
    headers: Headers,
    body: Bytes,
}

impl Response {
    pub fn new(status: i32) -> Self {
        Self {
            status,
            ..Default::default()
        }
    }

    pub(crate) fn from_parts(status: i32, headers: Headers, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Set the status code. Not validated: 0, -1 or 1000 are stored as
    /// given, and only [`into_http`](Self::into_http) rejects them.
    pub fn with_status(mut self, code: i32) -> Self {
        self.status = code;
        self
    }

    pub fn with_body(mut self, content: impl Into<String>) -> Self {
        self.body = Bytes::from(content.into());
        self
    }

    /// Set `key` to a single value, dropping whatever it held before
    pub fn with_header(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_header_values(key, [value])
    }

    /// Set the full value list of `key`, dropping whatever it held before
    pub fn with_header_values<I, V>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.headers.insert(key.into(), values);
        self
    }

    pub fn status(&self) -> i32 {
        self.status
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn header(&self, key: &str) -> Option<&[String]> {
        self.headers.get(key).map(Vec::as_slice)
    }

    pub fn bytes(&self) -> &Bytes {
        &self.body
    }

    /// Body as text, replacing invalid UTF-8
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Single-read body stream
    pub fn into_body(self) -> Body {
        body::full_body(self.body)
    }

    /// Convert into a hyper response.
    ///
    /// Fails for values hyper refuses, e.g. status 0 or a header name with
    /// spaces.
    pub fn into_http(self) -> Result<hyper::Response<Body>> {
        let status = u16::try_from(self.status).map_err(|_| {
            FakeNetError::InvalidResponse(format!("status {} out of range", self.status))
        })?;
        let mut builder = hyper::Response::builder().status(status);

        for (name, values) in &self.headers {
            for value in values {
                builder = builder.header(name.as_str(), value.as_str());
            }
        }

        builder
            .body(body::full_body(self.body))
            .map_err(|e| FakeNetError::InvalidResponse(e.to_string()))
    }
}
