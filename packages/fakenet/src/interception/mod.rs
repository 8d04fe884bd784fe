// packages/fakenet/src/interception/mod.rs
//! Request interception layer
//!
//! This module decides, for each outgoing request, whether a canned outcome
//! answers it:
//!
//! - **Response**: canned status, headers and body, built with `with_*` calls
//! - **Matcher**: predicate over a request (match-all or URL glob)
//! - **Interceptor**: a matcher paired with a response and/or simulated error
//! - **Registry**: ordered interceptors, newest checked first
//!
//! # Architecture
//!
//! ```text
//! Code under test
//!     │
//!     └─ FakeClient::send → Registry (newest → oldest)
//!                               ├─ Interceptor matches → Outcome
//!                               └─ nothing matches    → Transport
//! ```

pub mod interceptor;
pub mod matcher;
pub mod registry;
pub mod response;

// Re-export commonly used types
pub use interceptor::{Interceptor, Outcome};
pub use matcher::{MatchAll, Matcher, UrlMatcher};
pub use registry::{Registry, Resolution};
pub use response::{Headers, Response};
