//! Endpoint resolution.

use url::Url;

use crate::error::ClientError;

/// Anything that resolves to a request URL.
pub trait Endpoint {
    fn url(&self) -> Result<Url, ClientError>;
}

impl Endpoint for Url {
    fn url(&self) -> Result<Url, ClientError> {
        Ok(self.clone())
    }
}

impl Endpoint for &str {
    fn url(&self) -> Result<Url, ClientError> {
        Ok(Url::parse(self)?)
    }
}

impl Endpoint for String {
    fn url(&self) -> Result<Url, ClientError> {
        self.as_str().url()
    }
}
