// packages/fakenet/src/utils/mod.rs
//! Shared configuration and error types

pub mod config;
pub mod errors;

pub use self::config::ClientConfig;
pub use self::errors::{FakeNetError, Result, SimulatedError};
