// packages/fakenet/src/utils/config.rs
//! Client configuration
//!
//! Layered with the `config` crate: built-in defaults, an optional file,
//! then `FAKENET_*` environment variables.

use crate::utils::errors::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Configuration for a [`FakeClient`](crate::client::FakeClient)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Send unmatched requests to the fallback transport.
    /// When false they fail with `NoRoute`.
    pub allow_fallthrough: bool,

    /// Log every request passing through the client
    pub log_requests: bool,

    /// Maximum body size to log (bytes)
    pub max_log_body_size: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            allow_fallthrough: true,
            log_requests: false,
            max_log_body_size: 1024,
        }
    }
}

impl ClientConfig {
    /// Config that never lets a request reach the network
    pub fn sealed() -> Self {
        Self {
            allow_fallthrough: false,
            ..Default::default()
        }
    }

    /// Load from the environment (`FAKENET_ALLOW_FALLTHROUGH`, ...)
    pub fn load() -> Result<Self> {
        Self::build(None)
    }

    /// Load from a file (format taken from its extension), with environment
    /// overrides applied on top
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::build(Some(path.as_ref()))
    }

    fn build(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            debug!("Loading client config from {}", path.display());
            builder = builder.add_source(File::from(path).required(true));
        }

        let settings = builder
            .add_source(Environment::with_prefix("FAKENET").try_parsing(true))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
