// packages/fakenet/src/lib.rs
//! FakeNet: a programmable fake HTTP transport for tests
//!
//! Register interceptors on a [`FakeClient`] and the code under test gets
//! canned responses or simulated network errors instead of real I/O.
//!
//! # Architecture
//!
//! - **interception**: responses, matchers, interceptors and the registry
//! - **client**: the `FakeClient` façade
//! - **transport**: fallback used when no interceptor matches
//! - **request** / **body**: request value and body helpers
//! - **observability**: tracing setup
//! - **utils**: configuration and errors
//!
//! # Example
//!
//! ```no_run
//! use fakenet::{FakeClient, Interceptor, SimulatedError};
//!
//! # async fn run() -> fakenet::Result<()> {
//! let client = FakeClient::offline();
//! client.intercept(Interceptor::catch_all(None, Some(SimulatedError::msg("unexpected call"))));
//! client.intercept_url("http://example.org/*", 200, "OK");
//!
//! let resp = client.get("http://example.org/health").await?;
//! assert_eq!(resp.text(), "OK");
//! # Ok(())
//! # }
//! ```

pub mod body;
pub mod client;
pub mod interception;
pub mod observability;
pub mod request;
pub mod transport;
pub mod utils;

// Re-export commonly used types
pub use client::FakeClient;
pub use interception::{Interceptor, MatchAll, Matcher, Outcome, Resolution, Response, UrlMatcher};
pub use request::Request;
pub use transport::{HyperTransport, OfflineTransport, Transport};
pub use utils::config::ClientConfig;
pub use utils::errors::{FakeNetError, Result, SimulatedError};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
