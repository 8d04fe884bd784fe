// packages/fakenet/src/interception/matcher.rs
//! Request matchers
//!
//! A matcher decides whether an interceptor applies to a request. Two are
//! built in:
//!
//! - [`MatchAll`]: every request
//! - [`UrlMatcher`]: the full URL string against a shell-style glob
//!
//! # Malformed patterns
//!
//! A glob that fails to compile (e.g. an unclosed `[`) produces a matcher
//! that never matches. The error is logged at `warn` level and otherwise
//! dropped, so a typo in a pattern makes requests fall through instead of
//! failing the test setup. Check [`UrlMatcher::is_valid`] to catch it early.

use crate::request::Request;
use glob::Pattern;
use std::fmt;
use tracing::{trace, warn};

/// Predicate over an outgoing request
pub trait Matcher: fmt::Debug + Send + Sync {
    fn matches(&self, request: &Request) -> bool;
}

/// Matches every request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchAll;

impl Matcher for MatchAll {
    fn matches(&self, _request: &Request) -> bool {
        true
    }
}

/// Matches requests whose whole URL fits a glob pattern.
///
/// `*` matches any run of characters (slashes included, so `**` is the same
/// as `*`), `?` a single character and `[...]` a character class, negated
/// with either `[!...]` or `[^...]`. Without wildcards the pattern is an
/// exact string comparison.
#[derive(Debug, Clone)]
pub struct UrlMatcher {
    pattern: String,
    compiled: Option<Pattern>,
}

impl UrlMatcher {
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();

        let compiled = match Pattern::new(&to_url_glob(&pattern)) {
            Ok(compiled) => Some(compiled),
            Err(e) => {
                warn!("URL pattern {:?} is invalid and will never match: {}", pattern, e);
                None
            }
        };

        Self { pattern, compiled }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether the pattern compiled
    pub fn is_valid(&self) -> bool {
        self.compiled.is_some()
    }
}

/// Rewrite shell-glob syntax into what `glob::Pattern` accepts over a flat
/// string: runs of `*` collapse to one, and a `[^` class opener becomes `[!`.
/// Class bodies are copied untouched.
fn to_url_glob(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '*' => {
                out.push('*');
                while chars.peek() == Some(&'*') {
                    chars.next();
                }
            }
            '[' => {
                out.push('[');
                if chars.peek() == Some(&'^') {
                    chars.next();
                    out.push('!');
                } else if chars.peek() == Some(&'!') {
                    chars.next();
                    out.push('!');
                }

                // First class member is literal, even `]`
                if let Some(first) = chars.next() {
                    out.push(first);
                }
                for member in chars.by_ref() {
                    out.push(member);
                    if member == ']' {
                        break;
                    }
                }
            }
            _ => out.push(c),
        }
    }

    out
}

impl Matcher for UrlMatcher {
    fn matches(&self, request: &Request) -> bool {
        let Some(compiled) = &self.compiled else {
            return false;
        };

        let matched = compiled.matches(request.url());
        trace!("Pattern {} vs {}: {}", self.pattern, request.url(), matched);
        matched
    }
}
