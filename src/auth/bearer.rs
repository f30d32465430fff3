//! Ready-made bearer-token authorizer.

use std::sync::RwLock;

use reqwest::header::AUTHORIZATION;

use super::Authorizer;
use crate::error::ClientError;
use crate::transport::{ResponseEnvelope, TransportRequest};

/// Signs requests with `Authorization: Bearer <token>` from a shared token
/// slot and flags 401 responses as authorization failures.
///
/// Refreshing is left to the embedding application: replace the token via
/// [`set_token`](Self::set_token), or wrap this type in an authorizer whose
/// `refresh` calls a token endpoint.
pub struct BearerAuthorizer {
    token: RwLock<Option<String>>,
}

impl BearerAuthorizer {
    /// Start with a known token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }

    /// Start without a token; signing fails until one is set.
    pub fn empty() -> Self {
        Self {
            token: RwLock::new(None),
        }
    }

    /// Replace the current token.
    pub fn set_token(&self, token: impl Into<String>) {
        if let Ok(mut slot) = self.token.write() {
            *slot = Some(token.into());
        }
    }

    /// The current token, if any.
    pub fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|slot| slot.clone())
    }
}

impl Authorizer for BearerAuthorizer {
    fn authorize(&self, mut request: TransportRequest) -> Result<TransportRequest, ClientError> {
        let token = self
            .token()
            .ok_or_else(|| ClientError::signing("no bearer token available"))?;
        let value = format!("Bearer {token}");
        let value = reqwest::header::HeaderValue::from_str(&value)
            .map_err(|e| ClientError::signing(format!("invalid bearer token: {e}")))?;
        request.headers.insert(AUTHORIZATION, value);
        Ok(request)
    }

    fn should_reauthorize(&self, envelope: &ResponseEnvelope) -> bool {
        envelope.status == 401
    }
}
