// packages/fakenet/src/transport.rs
//! Fallback transports
//!
//! A [`FakeClient`](crate::client::FakeClient) only calls its transport when
//! no interceptor matched. The transport is injected, so tests can swap the
//! network for something deterministic.
//!
//! - [`HyperTransport`]: real HTTP/HTTPS requests through hyper-util's client
//! - [`OfflineTransport`]: refuses every request

use crate::interception::response::{Headers, Response};
use crate::request::Request;
use crate::utils::errors::{FakeNetError, Result};
use bytes::Bytes;
use futures::future::{BoxFuture, FutureExt};
use http_body_util::{BodyExt, Full};
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use std::sync::Arc;
use tracing::{debug, warn};

/// Executes a request that no interceptor claimed
pub trait Transport: Send + Sync {
    fn round_trip(&self, request: Request) -> BoxFuture<'_, Result<Response>>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn round_trip(&self, request: Request) -> BoxFuture<'_, Result<Response>> {
        (**self).round_trip(request)
    }
}

/// Real network transport backed by hyper-util's legacy client.
///
/// Both `http` and `https` URLs are accepted; TLS is handled by rustls with
/// the Mozilla root set.
pub struct HyperTransport {
    http_client: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
}

impl HyperTransport {
    pub fn new() -> Self {
        let https_connector = HttpsConnectorBuilder::new()
            .with_webpki_roots()
            .https_or_http()
            .enable_http1()
            .build();

        let http_client = Client::builder(TokioExecutor::new()).build(https_connector);

        Self { http_client }
    }

    async fn execute(&self, request: Request) -> Result<Response> {
        let http_req = request.into_http()?;
        let method = http_req.method().clone();
        let uri = http_req.uri().clone();

        debug!("Forwarding {} {} to the network", method, uri);

        let response = self.http_client.request(http_req).await.map_err(|e| {
            FakeNetError::Transport(format!("{} {} failed: {}", method, uri, e))
        })?;

        let (parts, body) = response.into_parts();
        let body_bytes = body
            .collect()
            .await
            .map_err(|e| FakeNetError::Transport(format!("Response body error: {}", e)))?
            .to_bytes();

        let mut headers = Headers::new();
        for (name, value) in &parts.headers {
            match value.to_str() {
                Ok(val_str) => headers
                    .entry(name.as_str().to_string())
                    .or_default()
                    .push(val_str.to_string()),
                Err(_) => warn!("Dropping non-text header {} from {}", name, uri),
            }
        }

        debug!("Network response: {} from {}", parts.status, uri);

        Ok(Response::from_parts(i32::from(parts.status.as_u16()), headers, body_bytes))
    }
}

impl Default for HyperTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HyperTransport {
    fn round_trip(&self, request: Request) -> BoxFuture<'_, Result<Response>> {
        self.execute(request).boxed()
    }
}

/// Transport for fully sealed tests: every fallthrough is an error
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineTransport;

impl Transport for OfflineTransport {
    fn round_trip(&self, request: Request) -> BoxFuture<'_, Result<Response>> {
        warn!("Offline transport refused {} {}", request.method(), request.url());
        futures::future::ready(Err(FakeNetError::NoRoute(request.url().to_string()))).boxed()
    }
}
