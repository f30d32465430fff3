//! Authorization capability.
//!
//! An [`Authorizer`] signs outgoing requests, judges whether a response
//! indicates an authorization failure, and can refresh credentials. Only
//! `authorize` is required; detection and refresh are opt-in through default
//! methods, so an authorizer that never overrides `should_reauthorize` never
//! triggers the reauthorization loop.

use async_trait::async_trait;

use crate::defaults;
use crate::error::ClientError;
use crate::executor::ExecutorHandle;
use crate::transport::{ResponseEnvelope, TransportRequest};

mod bearer;

pub use bearer::BearerAuthorizer;

/// Signs requests, detects authorization failures, refreshes credentials.
///
/// At most one authorizer is attached per executor; its lifetime spans the
/// executor's. Internal credential state is the authorizer's own
/// responsibility: the executor never locks or owns it, so coalescing
/// concurrent refreshes is up to the implementation.
#[async_trait]
pub trait Authorizer: Send + Sync {
    /// Produce a signed copy of `request`.
    ///
    /// A failure here aborts the in-flight call and surfaces to the caller;
    /// it is never silently ignored.
    fn authorize(&self, request: TransportRequest) -> Result<TransportRequest, ClientError>;

    /// Whether `envelope` indicates an authorization failure.
    ///
    /// Pure predicate, cannot fail. Defaults to `false`.
    fn should_reauthorize(&self, _envelope: &ResponseEnvelope) -> bool {
        false
    }

    /// Attempt to regain valid credentials. Defaults to a no-op.
    ///
    /// Receives an executor handle so implementations can call a token
    /// endpoint through the same transport stack; the executor does not
    /// guard against the resulting re-entrancy. A failure is fatal to the
    /// current call and is not retried by the executor.
    async fn refresh(&self, _http: &dyn ExecutorHandle) -> Result<(), ClientError> {
        Ok(())
    }

    /// Upper bound on reauthorization attempts per call.
    ///
    /// The limit is absolute: the loop stops once this many resends happened,
    /// whatever `should_reauthorize` says about the last response.
    fn max_retry_limit(&self) -> u32 {
        defaults::auth::MAX_RETRY_LIMIT
    }
}
