// packages/fakenet/src/client.rs
//! Fake HTTP client
//!
//! [`FakeClient`] is the entry point tests use. Every request is first
//! resolved against the interceptor registry; only when nothing matches is
//! it handed to the injected [`Transport`].
//!
//! ```text
//! send(request)
//!     │
//!     ├─ Registry::resolve (newest → oldest, under lock)
//!     │       ├─ Matched(outcome) → canned response / simulated error
//!     │       └─ NoMatch ──┐
//!     │                    │ (lock released)
//!     └────────────────────┴─→ Transport::round_trip
//! ```

use crate::interception::interceptor::Interceptor;
use crate::interception::registry::{Registry, Resolution};
use crate::interception::response::Response;
use crate::request::Request;
use crate::transport::{HyperTransport, OfflineTransport, Transport};
use crate::utils::config::ClientConfig;
use crate::utils::errors::{FakeNetError, Result};
use bytes::Bytes;
use tracing::{debug, info, warn};

/// HTTP client that answers from registered interceptors.
///
/// Safe to share between threads (wrap it in an `Arc`); interceptors can be
/// added while other threads are sending requests.
pub struct FakeClient {
    config: ClientConfig,
    registry: Registry,
    transport: Box<dyn Transport>,
}

impl FakeClient {
    /// Client that falls back to the real network
    pub fn new() -> Self {
        Self::with_transport(HyperTransport::new())
    }

    /// Client whose unmatched requests fail with `NoRoute`
    pub fn offline() -> Self {
        Self::with_transport(OfflineTransport)
    }

    pub fn with_transport(transport: impl Transport + 'static) -> Self {
        Self::with_config(ClientConfig::default(), transport)
    }

    pub fn with_config(config: ClientConfig, transport: impl Transport + 'static) -> Self {
        info!(
            "Creating fake HTTP client (fallthrough {})",
            if config.allow_fallthrough { "enabled" } else { "disabled" }
        );

        Self {
            config,
            registry: Registry::new(),
            transport: Box::new(transport),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Add an interceptor. Newer interceptors take priority over older ones.
    pub fn intercept(&self, interceptor: Interceptor) {
        self.registry.intercept(interceptor);
    }

    /// Answer every request with `code` and `body`
    pub fn catch_all(&self, code: i32, body: impl Into<String>) {
        let response = Response::new(code).with_body(body);
        self.intercept(Interceptor::catch_all(Some(response), None));
    }

    /// Answer requests whose URL matches the glob `pattern` with `code` and
    /// `body`
    pub fn intercept_url(&self, pattern: impl Into<String>, code: i32, body: impl Into<String>) {
        let response = Response::new(code).with_body(body);
        self.intercept(Interceptor::catch_url(pattern, Some(response), None));
    }

    /// Look `request` up without sending it
    pub fn resolve(&self, request: &Request) -> Resolution {
        self.registry.resolve(request)
    }

    /// Send a request: canned outcome if intercepted, transport otherwise
    pub async fn send(&self, request: Request) -> Result<Response> {
        if self.config.log_requests {
            self.log_request(&request);
        }

        match self.registry.resolve(&request) {
            Resolution::Matched(outcome) => outcome.into_result(),
            Resolution::NoMatch if !self.config.allow_fallthrough => {
                warn!("Unmatched request with fallthrough disabled: {}", request.url());
                Err(FakeNetError::NoRoute(request.url().to_string()))
            }
            Resolution::NoMatch => {
                debug!("Falling through to transport: {}", request.url());
                self.transport.round_trip(request).await
            }
        }
    }

    pub async fn get(&self, url: impl Into<String>) -> Result<Response> {
        self.send(Request::get(url)).await
    }

    pub async fn post(&self, url: impl Into<String>, body: impl Into<Bytes>) -> Result<Response> {
        self.send(Request::post(url).with_body(body)).await
    }

    /// Number of registered interceptors
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    fn log_request(&self, request: &Request) {
        debug!("Request: {} {}", request.method(), request.url());
        for (name, values) in request.headers() {
            debug!("  {}: {}", name, values.join(", "));
        }

        let body = request.body();
        if !body.is_empty() {
            let shown = &body[..body.len().min(self.config.max_log_body_size)];
            debug!("  body ({} bytes): {}", body.len(), String::from_utf8_lossy(shown));
        }
    }
}

impl Default for FakeClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::SimulatedError;
    use futures::future::{BoxFuture, FutureExt};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Counts fallthroughs and answers 599
    #[derive(Default)]
    struct CountingTransport {
        calls: AtomicUsize,
    }

    impl Transport for CountingTransport {
        fn round_trip(&self, _request: Request) -> BoxFuture<'_, Result<Response>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            futures::future::ready(Ok(Response::new(599))).boxed()
        }
    }

    #[tokio::test]
    async fn test_catch_all() {
        let client = FakeClient::offline();
        client.catch_all(200, "OK");

        let resp = client.get("http://example.org/").await.unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.text(), "OK");
    }

    #[tokio::test]
    async fn test_fallthrough_uses_transport() {
        let transport = Arc::new(CountingTransport::default());
        let client = FakeClient::with_transport(Arc::clone(&transport));
        client.intercept_url("http://example.org", 200, "OK");

        let resp = client.get("http://example.org").await.unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);

        let resp = client.get("http://other.org").await.unwrap();
        assert_eq!(resp.status(), 599);
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fallthrough_disabled() {
        let transport = Arc::new(CountingTransport::default());
        let client = FakeClient::with_config(ClientConfig::sealed(), Arc::clone(&transport));

        let result = client.get("http://example.org").await;
        assert!(matches!(result, Err(FakeNetError::NoRoute(_))));
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_simulated_error_passes_through() {
        let client = FakeClient::offline();
        let err = SimulatedError::msg("connection reset by peer");
        client.intercept(Interceptor::catch_all(None, Some(err.clone())));

        let result = client.post("http://example.org/upload", "data").await;
        let returned = result.unwrap_err();
        assert!(returned.as_simulated().unwrap().ptr_eq(&err));
        assert_eq!(returned.to_string(), "connection reset by peer");
    }

    #[tokio::test]
    async fn test_logging_does_not_change_outcome() {
        let config = ClientConfig {
            log_requests: true,
            max_log_body_size: 4,
            ..Default::default()
        };
        let client = FakeClient::with_config(config, OfflineTransport);
        client.catch_all(200, "OK");

        let resp = client
            .send(Request::post("http://example.org").with_body("a long request body"))
            .await
            .unwrap();
        assert_eq!(resp.text(), "OK");
    }

    #[test]
    fn test_resolve_without_sending() {
        let client = FakeClient::offline();
        assert!(client.is_empty());
        assert!(!client.resolve(&Request::get("http://example.org")).is_match());

        client.intercept_url("http://example.org/*", 200, "");
        assert_eq!(client.len(), 1);
        assert!(client.resolve(&Request::get("http://example.org/a")).is_match());
    }

    #[tokio::test]
    async fn test_shared_client() {
        let client = Arc::new(FakeClient::offline());
        client.catch_all(200, "shared");

        let tasks: Vec<_> = (0..4)
            .map(|i| {
                let client = Arc::clone(&client);
                tokio::spawn(async move {
                    client.intercept_url(format!("http://task{}.org", i), 201, "mine");
                    client.get(format!("http://task{}.org", i)).await
                })
            })
            .collect();

        for task in tasks {
            assert_eq!(task.await.unwrap().unwrap().status(), 201);
        }
        assert_eq!(client.get("http://elsewhere.org").await.unwrap().text(), "shared");
    }
}
