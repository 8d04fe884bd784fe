// packages/fakenet/src/interception/registry.rs
//! Interceptor registry
//!
//! Append-only list of interceptors. Resolution walks it from the most
//! recently added entry to the oldest, so a specific override registered
//! after a broad catch-all takes precedence without any removal API.

use crate::interception::interceptor::{Interceptor, Outcome};
use crate::request::Request;
use parking_lot::Mutex;
use tracing::debug;

/// Result of looking a request up in the registry
#[derive(Debug, Clone)]
pub enum Resolution {
    /// An interceptor claimed the request
    Matched(Outcome),

    /// Nothing matched; hand the request to the real transport
    NoMatch,
}

impl Resolution {
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matched(_))
    }

    pub fn into_outcome(self) -> Option<Outcome> {
        match self {
            Self::Matched(outcome) => Some(outcome),
            Self::NoMatch => None,
        }
    }
}

/// Ordered interceptor collection
#[derive(Debug, Default)]
pub struct Registry {
    /// Insertion order; the last entry is checked first
    interceptors: Mutex<Vec<Interceptor>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an interceptor. It takes priority over everything already here.
    pub fn intercept(&self, interceptor: Interceptor) {
        let mut interceptors = self.interceptors.lock();
        interceptors.push(interceptor);
        debug!("Registered interceptor #{}", interceptors.len());
    }

    /// Find the newest interceptor matching `request`.
    ///
    /// The lock covers the scan only; the outcome is cloned out before it is
    /// released.
    pub fn resolve(&self, request: &Request) -> Resolution {
        let interceptors = self.interceptors.lock();

        let found = interceptors
            .iter()
            .enumerate()
            .rev()
            .find(|(_, interceptor)| interceptor.matches(request));

        match found {
            Some((index, interceptor)) => {
                debug!(
                    "Interceptor #{} matched {} {}",
                    index + 1,
                    request.method(),
                    request.url()
                );
                Resolution::Matched(interceptor.resolve(request))
            }
            None => {
                debug!("No interceptor for {} {}", request.method(), request.url());
                Resolution::NoMatch
            }
        }
    }

    pub fn len(&self) -> usize {
        self.interceptors.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.interceptors.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interception::response::Response;
    use crate::utils::errors::SimulatedError;
    use std::sync::Arc;
    use std::thread;

    fn status_of(resolution: Resolution) -> i32 {
        resolution
            .into_outcome()
            .and_then(|outcome| outcome.response)
            .map(|resp| resp.status())
            .unwrap()
    }

    #[test]
    fn test_empty_registry() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert!(!registry.resolve(&Request::get("http://example.org")).is_match());
    }

    #[test]
    fn test_newest_wins() {
        let registry = Registry::new();
        registry.intercept(Interceptor::catch_all(Some(Response::new(200)), None));
        registry.intercept(Interceptor::catch_all(Some(Response::new(201)), None));

        assert_eq!(registry.len(), 2);
        assert_eq!(status_of(registry.resolve(&Request::get("http://x.org"))), 201);
    }

    #[test]
    fn test_specific_override_after_catch_all() {
        let registry = Registry::new();
        registry.intercept(Interceptor::catch_all(None, Some(SimulatedError::msg("fell through"))));
        registry.intercept(Interceptor::catch_url(
            "http://example.org/*",
            Some(Response::new(200)),
            None,
        ));

        assert_eq!(
            status_of(registry.resolve(&Request::get("http://example.org/users"))),
            200
        );

        let other = registry
            .resolve(&Request::get("http://other.org"))
            .into_outcome()
            .unwrap();
        assert!(other.response.is_none());
        assert!(other.error.is_some());
    }

    #[test]
    fn test_older_entry_used_when_newer_does_not_match() {
        let registry = Registry::new();
        registry.intercept(Interceptor::catch_all(Some(Response::new(404)), None));
        registry.intercept(Interceptor::catch_url(
            "http://example.org",
            Some(Response::new(200)),
            None,
        ));

        assert_eq!(status_of(registry.resolve(&Request::get("http://example.com"))), 404);
    }

    #[test]
    fn test_inert_and_malformed_entries_are_skipped() {
        let registry = Registry::new();
        registry.intercept(Interceptor::new().with_status(500));
        registry.intercept(Interceptor::catch_url("http://[", Some(Response::new(500)), None));

        assert!(!registry.resolve(&Request::get("http://[")).is_match());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_concurrent_intercept_and_resolve() {
        let registry = Arc::new(Registry::new());
        registry.intercept(Interceptor::catch_all(Some(Response::new(200)), None));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    let url = format!("http://host{}.org", i);
                    registry.intercept(Interceptor::catch_url(
                        url.clone(),
                        Some(Response::new(300 + i)),
                        None,
                    ));
                    status_of(registry.resolve(&Request::get(url)))
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), 300 + i as i32);
        }
        assert_eq!(registry.len(), 9);
    }
}
