// packages/fakenet/src/utils/errors.rs
//! Error types for the fake transport
//!
//! `NoMatch` is deliberately absent: an unmatched request is a
//! [`Resolution`](crate::interception::Resolution), not a failure.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, FakeNetError>;

/// Errors surfaced by a [`FakeClient`](crate::client::FakeClient)
#[derive(Debug, Error)]
pub enum FakeNetError {
    /// Error attached to an interceptor, passed through untouched
    #[error(transparent)]
    Simulated(SimulatedError),

    #[error("No interceptor matched and fallthrough is disabled: {0}")]
    NoRoute(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl FakeNetError {
    /// The simulated error, if this failure came from an interceptor
    pub fn as_simulated(&self) -> Option<&SimulatedError> {
        match self {
            Self::Simulated(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SimulatedError> for FakeNetError {
    fn from(err: SimulatedError) -> Self {
        Self::Simulated(err)
    }
}

/// Opaque error a test attaches to an interceptor to emulate a network fault.
///
/// Cloning shares the same underlying error, so every request resolved by
/// the interceptor observes the identical value.
#[derive(Clone)]
pub struct SimulatedError(Arc<dyn StdError + Send + Sync + 'static>);

impl SimulatedError {
    pub fn new<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self(Arc::new(err))
    }

    /// Simulated error carrying only a message
    pub fn msg(message: impl Into<String>) -> Self {
        let message: String = message.into();
        let boxed: Box<dyn StdError + Send + Sync> = message.into();
        Self(Arc::from(boxed))
    }

    pub fn inner(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.0.as_ref()
    }

    /// Downcast to the concrete error the test attached
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.0.downcast_ref::<E>()
    }

    /// True when both values share the same underlying error
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for SimulatedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for SimulatedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl StdError for SimulatedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}
