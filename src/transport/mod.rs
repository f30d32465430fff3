//! HTTP transport abstraction.
//!
//! The executor talks to the network through an injectable transport so that
//! tests and alternative stacks can observe the final URL/headers/body and
//! return a synthetic response without going through `reqwest`.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use url::Url;

use crate::error::ClientError;

mod client;
#[cfg(test)]
mod tests;

pub use client::ReqwestTransport;

/// Transport-level request data.
///
/// Immutable once sent: a reauthorization retry signs a fresh copy instead of
/// mutating the request that already went out.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub url: Url,
    pub method: reqwest::Method,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
}

impl TransportRequest {
    /// Insert a header, replacing any existing value for the same name.
    /// Convenience for authorizers signing a request.
    pub fn insert_header(&mut self, name: &str, value: &str) -> Result<(), ClientError> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ClientError::Configuration(format!("invalid header name '{name}': {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| ClientError::Configuration(format!("invalid header value: {e}")))?;
        self.headers.insert(name, value);
        Ok(())
    }
}

/// Raw bytes plus transport metadata from one physical send.
///
/// Ephemeral: consumed by a custom handler, the reauthorization predicate, or
/// the decoder, and not retained beyond one attempt.
#[derive(Debug, Clone)]
pub struct ResponseEnvelope {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl ResponseEnvelope {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Look up a response header as UTF-8, if present and valid.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Sends a constructed request and returns response bytes plus metadata.
///
/// One call corresponds to one physical send. Cancelable: dropping the
/// returned future aborts the in-flight request.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: TransportRequest) -> Result<ResponseEnvelope, ClientError>;
}
