//! Request executor.
//!
//! Orchestrates signing, sending, custom-handler dispatch, reauthorization
//! retry, and decoding into one operation, and owns the error-classification
//! policy. Within a call, operations are strictly sequential
//! (sign, send, evaluate, then refresh/re-sign/resend rounds); there is no
//! concurrent fan-out of retries. The executor keeps no state across calls,
//! so concurrent calls on one instance are independent unless they share an
//! authorizer with its own mutable credential cache.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::auth::Authorizer;
use crate::decode::{JsonDecoder, ResponseDecoder};
use crate::error::{AuthFailure, ClientError};
use crate::transport::{HttpTransport, ReqwestTransport, ResponseEnvelope, TransportRequest};
use crate::types::{Endpoint, HttpConfig, RequestMethod};
use crate::utils::headers;
use crate::utils::query::append_query_pairs;


/// Caller-supplied override for a single call.
///
/// Consumes the first response and bypasses both the reauthorization
/// predicate and the default decoder; its result or error is returned to the
/// caller untouched. Use it to map specific responses into domain errors
/// (e.g. treating a 429 as a quota error rather than an auth failure).
pub type CustomHandler<T> = Box<dyn FnOnce(&ResponseEnvelope) -> Result<T, ClientError> + Send>;

/// Object-safe executor surface handed to [`Authorizer::refresh`].
///
/// Lets a refresh implementation reach a token endpoint through the same
/// transport stack without the executor's generics.
#[async_trait]
pub trait ExecutorHandle: Send + Sync {
    /// One unsigned physical send: no signing, no retry, no decoding.
    async fn send_raw(&self, request: TransportRequest) -> Result<ResponseEnvelope, ClientError>;
}

/// Authorization-aware typed HTTP request executor.
pub struct HttpExecutor<D = JsonDecoder> {
    transport: Arc<dyn HttpTransport>,
    authorizer: Option<Arc<dyn Authorizer>>,
    decoder: D,
    config: HttpConfig,
}

impl HttpExecutor {
    /// Returns a builder wiring transport, authorizer, decoder, and config.
    pub fn builder() -> HttpExecutorBuilder {
        HttpExecutorBuilder::new()
    }

    /// Executor over the given transport with defaults everywhere else.
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            authorizer: None,
            decoder: JsonDecoder,
            config: HttpConfig::default(),
        }
    }
}

impl<D: ResponseDecoder> HttpExecutor<D> {
    /// Issue one logical request and decode the response into `T`.
    ///
    /// Signing happens iff `should_authorize` is true and an authorizer is
    /// attached; exactly one physical send occurs before any reauthorization
    /// decision. If the authorizer flags the first response, the executor
    /// enters the bounded refresh/re-sign/resend loop. Cancelable: dropping
    /// the future unwinds at the in-flight send or refresh.
    pub async fn request<T: DeserializeOwned, E: Endpoint>(
        &self,
        endpoint: E,
        method: RequestMethod,
        custom_headers: &HashMap<String, String>,
        should_authorize: bool,
        custom_handler: Option<CustomHandler<T>>,
    ) -> Result<T, ClientError> {
        let base = self.build_request(endpoint, &method, custom_headers)?;

        let signer = if should_authorize {
            self.authorizer.as_deref()
        } else {
            None
        };
        let outgoing = match signer {
            Some(authorizer) => authorizer.authorize(base.clone())?,
            None => base.clone(),
        };

        tracing::debug!("sending {} {}", outgoing.method, outgoing.url);
        let envelope = self.transport.execute(outgoing).await?;

        if let Some(handler) = custom_handler {
            return handler(&envelope);
        }

        let Some(authorizer) = self.authorizer.as_deref() else {
            return self.decoder.decode(&envelope.body);
        };

        if !authorizer.should_reauthorize(&envelope) {
            return self.decoder.decode(&envelope.body);
        }

        self.reauthorize(authorizer, base, envelope).await
    }

    /// Bounded refresh/re-sign/resend loop, entered once the first response
    /// was flagged as an authorization failure.
    ///
    /// The body always runs at least once, so a limit of zero still means one
    /// refresh attempt. A successful decode returns immediately, whatever the
    /// predicate would say about that response. Refresh, signing, and
    /// transport failures propagate as-is; decode failures only drive loop
    /// continuation and are never surfaced directly from here.
    async fn reauthorize<T: DeserializeOwned>(
        &self,
        authorizer: &dyn Authorizer,
        base: TransportRequest,
        first: ResponseEnvelope,
    ) -> Result<T, ClientError> {
        let limit = authorizer.max_retry_limit();
        let mut attempt_count: u32 = 0;
        let mut last = first;

        loop {
            tracing::debug!(
                "reauthorizing {} (attempt {} of {})",
                base.url,
                attempt_count + 1,
                limit.max(1)
            );
            authorizer.refresh(self as &dyn ExecutorHandle).await?;

            let signed = authorizer.authorize(base.clone())?;
            last = self.transport.execute(signed).await?;
            attempt_count += 1;

            if let Ok(value) = self.decoder.decode::<T>(&last.body) {
                return Ok(value);
            }

            if attempt_count >= limit {
                tracing::warn!(
                    "reauthorization gave up after {} attempt(s): retry limit reached",
                    attempt_count
                );
                return Err(ClientError::Authorization(AuthFailure::RetryLimitReached));
            }
            if !authorizer.should_reauthorize(&last) {
                tracing::warn!(
                    "reauthorization gave up after {} attempt(s): response no longer flagged",
                    attempt_count
                );
                return Err(ClientError::Authorization(AuthFailure::Rejected(last)));
            }
        }
    }

    fn build_request(
        &self,
        endpoint: impl Endpoint,
        method: &RequestMethod,
        custom_headers: &HashMap<String, String>,
    ) -> Result<TransportRequest, ClientError> {
        let mut url = endpoint.url()?;
        if let Some(pairs) = method.query() {
            append_query_pairs(&mut url, pairs);
        }

        // base headers first, then per-request entries; last write wins per key
        let mut header_map = headers::header_map(&self.config.headers)?;
        headers::merge_headers(&mut header_map, custom_headers)?;

        Ok(TransportRequest {
            url,
            method: method.http_method(),
            headers: header_map,
            body: method.body(),
        })
    }

    /// Signed GET with default headers.
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: impl Endpoint,
    ) -> Result<T, ClientError> {
        self.request(endpoint, RequestMethod::get(), &HashMap::new(), true, None)
            .await
    }

    /// Signed GET with query pairs appended to the endpoint URL.
    pub async fn get_with_query<T, I, K, V>(
        &self,
        endpoint: impl Endpoint,
        mapping: I,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        self.request(
            endpoint,
            RequestMethod::get_with_query(mapping),
            &HashMap::new(),
            true,
            None,
        )
        .await
    }

    /// Signed POST with a JSON body.
    pub async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: impl Endpoint,
        body: &B,
    ) -> Result<T, ClientError> {
        self.request(
            endpoint,
            RequestMethod::post_json(body)?,
            &HashMap::new(),
            true,
            None,
        )
        .await
    }

    /// Signed PATCH with a JSON body.
    pub async fn patch_json<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: impl Endpoint,
        body: &B,
    ) -> Result<T, ClientError> {
        self.request(
            endpoint,
            RequestMethod::patch_json(body)?,
            &HashMap::new(),
            true,
            None,
        )
        .await
    }

    /// Signed DELETE with default headers.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        endpoint: impl Endpoint,
    ) -> Result<T, ClientError> {
        self.request(
            endpoint,
            RequestMethod::delete(),
            &HashMap::new(),
            true,
            None,
        )
        .await
    }
}

#[async_trait]
impl<D: ResponseDecoder> ExecutorHandle for HttpExecutor<D> {
    async fn send_raw(&self, request: TransportRequest) -> Result<ResponseEnvelope, ClientError> {
        self.transport.execute(request).await
    }
}

/// Builder for [`HttpExecutor`].
#[derive(Default)]
pub struct HttpExecutorBuilder<D = JsonDecoder> {
    transport: Option<Arc<dyn HttpTransport>>,
    authorizer: Option<Arc<dyn Authorizer>>,
    decoder: D,
    config: HttpConfig,
}

impl HttpExecutorBuilder {
    /// Create a new builder with the JSON decoder and default config.
    pub fn new() -> Self {
        Self {
            transport: None,
            authorizer: None,
            decoder: JsonDecoder,
            config: HttpConfig::default(),
        }
    }
}

impl<D: ResponseDecoder> HttpExecutorBuilder<D> {
    /// Inject a transport. Defaults to [`ReqwestTransport`] built from the
    /// configuration.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Attach an authorizer (at most one per executor).
    pub fn authorizer(mut self, authorizer: Arc<dyn Authorizer>) -> Self {
        self.authorizer = Some(authorizer);
        self
    }

    /// Set the HTTP configuration (timeouts, base headers, user agent).
    pub fn config(mut self, config: HttpConfig) -> Self {
        self.config = config;
        self
    }

    /// Swap the response decoder.
    pub fn decoder<E: ResponseDecoder>(self, decoder: E) -> HttpExecutorBuilder<E> {
        HttpExecutorBuilder {
            transport: self.transport,
            authorizer: self.authorizer,
            decoder,
            config: self.config,
        }
    }

    /// Build the executor, constructing the default transport if none was
    /// injected.
    pub fn build(self) -> Result<HttpExecutor<D>, ClientError> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(&self.config)?),
        };
        Ok(HttpExecutor {
            transport,
            authorizer: self.authorizer,
            decoder: self.decoder,
            config: self.config,
        })
    }
}
