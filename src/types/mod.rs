//! Core request types.

pub mod endpoint;
pub mod http;
pub mod method;

pub use endpoint::Endpoint;
pub use http::{HttpConfig, HttpConfigBuilder};
pub use method::{CommandVerb, RequestMethod};
