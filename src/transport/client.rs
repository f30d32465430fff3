//! Default transport over `reqwest`.

use async_trait::async_trait;

use super::{HttpTransport, ResponseEnvelope, TransportRequest};
use crate::error::ClientError;
use crate::types::HttpConfig;

/// `reqwest`-backed transport, built from an [`HttpConfig`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a client from the configuration's timeouts, user agent, and proxy.
    pub fn new(config: &HttpConfig) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent);
        }
        if let Some(proxy) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy)
                .map_err(|e| ClientError::Configuration(format!("invalid proxy '{proxy}': {e}")))?;
            builder = builder.proxy(proxy);
        }
        let client = builder
            .build()
            .map_err(|e| ClientError::Configuration(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: TransportRequest) -> Result<ResponseEnvelope, ClientError> {
        let mut builder = self
            .client
            .request(request.method.clone(), request.url.clone())
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ClientError::Transport(Box::new(e)))?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::Transport(Box::new(e)))?;

        tracing::debug!(
            "{} {} -> {} ({} bytes)",
            request.method,
            request.url,
            status,
            body.len()
        );

        Ok(ResponseEnvelope {
            status,
            headers,
            body,
        })
    }
}
