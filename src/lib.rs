//! authwire
//!
//! An HTTP request executor that layers pluggable request signing, automatic
//! re-authorization, and typed response decoding over a generic transport.
//!
//! A caller issues a typed request and receives either a decoded value or a
//! classified error. When a server rejects a request for authorization
//! reasons, the executor refreshes credentials through the attached
//! [`Authorizer`], re-signs, resends, and decodes, bounded by the authorizer's
//! retry limit. A per-call custom handler bypasses that path entirely for
//! domain-specific response mapping.
//!
//! # Example
//!
//! ```rust,ignore
//! use authwire::{BearerAuthorizer, HttpExecutor};
//! use std::sync::Arc;
//!
//! #[derive(serde::Deserialize)]
//! struct User { name: String }
//!
//! let executor = HttpExecutor::builder()
//!     .authorizer(Arc::new(BearerAuthorizer::new("token")))
//!     .build()?;
//! let user: User = executor.get("https://api.example.com/me").await?;
//! ```
#![deny(unsafe_code)]

pub mod auth;
pub mod decode;
pub mod defaults;
pub mod error;
pub mod executor;
pub mod transport;
pub mod types;
pub mod utils;

pub use auth::{Authorizer, BearerAuthorizer};
pub use decode::{JsonDecoder, ResponseDecoder};
pub use error::{AuthFailure, ClientError};
pub use executor::{CustomHandler, ExecutorHandle, HttpExecutor, HttpExecutorBuilder};
pub use transport::{HttpTransport, ReqwestTransport, ResponseEnvelope, TransportRequest};
pub use types::{CommandVerb, Endpoint, HttpConfig, RequestMethod};
