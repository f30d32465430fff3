//! Core error types.

use crate::transport::ResponseEnvelope;

/// Boxed error payload used to carry underlying failures for diagnostics.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Terminal error returned to the caller; exactly one per call.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Network/connection-level failure. Wraps the underlying transport error.
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// The response body did not match the expected schema.
    #[error("decoding error: {0}")]
    Decoding(#[source] BoxError),

    /// Signing was rejected, or reauthorization exhausted without a
    /// successful decode.
    #[error("authorization failed: {0}")]
    Authorization(AuthFailure),

    /// Caller-defined error produced by a custom handler. Passed through
    /// verbatim, never reclassified by the executor.
    #[error("{0}")]
    Custom(BoxError),

    /// Invalid endpoint URL, header name/value, or client setup problem.
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Why an authorization-gated call failed.
#[derive(Debug)]
pub enum AuthFailure {
    /// The reauthorization loop hit the authorizer's retry limit without a
    /// successful decode.
    RetryLimitReached,

    /// The reauthorization predicate stopped reporting failure before any
    /// response decoded; carries the last response for diagnostics.
    Rejected(ResponseEnvelope),

    /// The authorizer refused to sign the request.
    Signing(String),
}

impl std::fmt::Display for AuthFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RetryLimitReached => write!(f, "retry limit reached"),
            Self::Rejected(envelope) => {
                write!(f, "rejected by server (status {})", envelope.status)
            }
            Self::Signing(reason) => write!(f, "signing failed: {reason}"),
        }
    }
}

impl ClientError {
    /// Wrap a transport-level failure.
    pub fn transport(err: impl Into<BoxError>) -> Self {
        Self::Transport(err.into())
    }

    /// Wrap a schema/decoding failure.
    pub fn decoding(err: impl Into<BoxError>) -> Self {
        Self::Decoding(err.into())
    }

    /// Wrap a caller-defined error for return from a custom handler.
    pub fn custom(err: impl Into<BoxError>) -> Self {
        Self::Custom(err.into())
    }

    /// A signing rejection from an authorizer.
    pub fn signing(reason: impl Into<String>) -> Self {
        Self::Authorization(AuthFailure::Signing(reason.into()))
    }

    /// Whether this is a network-level failure.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Whether this is a schema mismatch on the non-retry path.
    pub fn is_decoding(&self) -> bool {
        matches!(self, Self::Decoding(_))
    }

    /// Whether this call failed for authorization reasons.
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::Authorization(_))
    }
}
