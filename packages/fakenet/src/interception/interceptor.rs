// packages/fakenet/src/interception/interceptor.rs
//! Interceptors
//!
//! An interceptor pairs a [`Matcher`] with a fixed outcome: a canned
//! response, a simulated error, or both. The outcome is decided when the
//! interceptor is built and never depends on the request it answers.

use crate::interception::matcher::{MatchAll, Matcher, UrlMatcher};
use crate::interception::response::Response;
use crate::request::Request;
use crate::utils::errors::{FakeNetError, Result, SimulatedError};
use std::sync::Arc;

/// What a matched interceptor hands back
#[derive(Debug, Clone, Default)]
pub struct Outcome {
    pub response: Option<Response>,
    pub error: Option<SimulatedError>,
}

impl Outcome {
    /// Collapse into what a caller of `send` sees.
    ///
    /// The error wins when both are set. An empty outcome yields a
    /// zero-valued response rather than an error.
    pub fn into_result(self) -> Result<Response> {
        match self.error {
            Some(err) => Err(FakeNetError::Simulated(err)),
            None => Ok(self.response.unwrap_or_default()),
        }
    }
}

/// A matcher plus a predetermined outcome.
///
/// `Interceptor::new()` has no matcher and is inert: it matches nothing.
/// Attach one with [`with_url_matcher`](Self::with_url_matcher) or
/// [`with_matcher`](Self::with_matcher), or start from
/// [`catch_all`](Self::catch_all) / [`catch_url`](Self::catch_url).
#[derive(Debug, Clone, Default)]
pub struct Interceptor {
    matcher: Option<Arc<dyn Matcher>>,
    response: Option<Response>,
    error: Option<SimulatedError>,
}

impl Interceptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every request with `response` and `error`
    pub fn catch_all(response: Option<Response>, error: Option<SimulatedError>) -> Self {
        Self {
            matcher: Some(Arc::new(MatchAll)),
            response,
            error,
        }
    }

    /// Answer requests whose URL matches the glob `pattern`
    pub fn catch_url(
        pattern: impl Into<String>,
        response: Option<Response>,
        error: Option<SimulatedError>,
    ) -> Self {
        Self {
            matcher: Some(Arc::new(UrlMatcher::new(pattern))),
            response,
            error,
        }
    }

    pub fn with_matcher(mut self, matcher: impl Matcher + 'static) -> Self {
        self.matcher = Some(Arc::new(matcher));
        self
    }

    pub fn with_url_matcher(self, pattern: impl Into<String>) -> Self {
        self.with_matcher(UrlMatcher::new(pattern))
    }

    pub fn with_response(mut self, response: Response) -> Self {
        self.response = Some(response);
        self
    }

    pub fn with_error(mut self, error: SimulatedError) -> Self {
        self.error = Some(error);
        self
    }

    pub fn with_body(self, content: impl Into<String>) -> Self {
        self.map_response(|resp| resp.with_body(content))
    }

    pub fn with_status(self, code: i32) -> Self {
        self.map_response(|resp| resp.with_status(code))
    }

    pub fn with_header(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.map_response(|resp| resp.with_header(key, value))
    }

    pub fn with_header_values<I, V>(self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.map_response(|resp| resp.with_header_values(key, values))
    }

    // Allocates the zero-valued response on first use.
    fn map_response(mut self, f: impl FnOnce(Response) -> Response) -> Self {
        let response = self.response.take().unwrap_or_default();
        self.response = Some(f(response));
        self
    }

    /// Whether this interceptor applies. Inert interceptors never do.
    pub fn matches(&self, request: &Request) -> bool {
        self.matcher
            .as_ref()
            .map_or(false, |matcher| matcher.matches(request))
    }

    /// The stored outcome, verbatim
    pub fn resolve(&self, _request: &Request) -> Outcome {
        Outcome {
            response: self.response.clone(),
            error: self.error.clone(),
        }
    }

    pub fn matcher(&self) -> Option<&dyn Matcher> {
        self.matcher.as_deref()
    }

    pub fn response(&self) -> Option<&Response> {
        self.response.as_ref()
    }

    pub fn error(&self) -> Option<&SimulatedError> {
        self.error.as_ref()
    }
}
