// packages/fakenet/src/body.rs
//! Body helpers
//!
//! Canned bodies are `Full<Bytes>`: a single-read body whose drop is the
//! no-op close.

use bytes::Bytes;
use http_body_util::{BodyExt, Full};

/// Body type handed to and returned from hyper
pub type Body = Full<Bytes>;

/// Wrap a string or bytes in a single-read body
pub fn full_body(content: impl Into<Bytes>) -> Body {
    Full::new(content.into())
}

/// Drain a body into its bytes
pub async fn into_bytes(body: Body) -> Bytes {
    match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(never) => match never {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::body::Body as _;

    #[tokio::test]
    async fn test_full_body_reads_once() {
        let body = full_body("hello");
        assert_eq!(body.size_hint().exact(), Some(5));

        let bytes = into_bytes(body).await;
        assert_eq!(&bytes[..], b"hello");
    }

    #[tokio::test]
    async fn test_empty_full_body() {
        let body = full_body("");
        assert!(body.is_end_stream());
        assert!(into_bytes(body).await.is_empty());
    }

    #[tokio::test]
    async fn test_owned_string_body() {
        let body = full_body(String::from("owned"));
        assert_eq!(&into_bytes(body).await[..], b"owned");
    }
}
