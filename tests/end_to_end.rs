//! End-to-end tests running the executor over the real reqwest transport
//! against a local mock server.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use authwire::{
    Authorizer, BearerAuthorizer, ClientError, ExecutorHandle, HttpExecutor, RequestMethod,
    ResponseEnvelope, TransportRequest,
};
use reqwest::header::{AUTHORIZATION, HeaderValue};
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq)]
struct Message {
    message: String,
}

/// Signs with the current token; refresh swaps in a fresh one.
struct RotatingAuthorizer {
    token: RwLock<String>,
    fresh: String,
}

#[async_trait]
impl Authorizer for RotatingAuthorizer {
    fn authorize(&self, mut request: TransportRequest) -> Result<TransportRequest, ClientError> {
        let token = self
            .token
            .read()
            .map_err(|_| ClientError::signing("token slot poisoned"))?;
        let value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| ClientError::signing(format!("invalid token: {e}")))?;
        request.headers.insert(AUTHORIZATION, value);
        Ok(request)
    }

    fn should_reauthorize(&self, envelope: &ResponseEnvelope) -> bool {
        envelope.status == 401
    }

    async fn refresh(&self, _http: &dyn ExecutorHandle) -> Result<(), ClientError> {
        *self
            .token
            .write()
            .map_err(|_| ClientError::signing("token slot poisoned"))? = self.fresh.clone();
        Ok(())
    }
}

#[tokio::test]
async fn reauthorizes_after_401_and_decodes() {
    let mut server = mockito::Server::new_async().await;
    let _stale = server
        .mock("GET", "/data")
        .match_header("authorization", "Bearer stale")
        .with_status(401)
        .with_body("unauthorized")
        .expect(1)
        .create_async()
        .await;
    let _fresh = server
        .mock("GET", "/data")
        .match_header("authorization", "Bearer fresh")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"hi"}"#)
        .expect(1)
        .create_async()
        .await;

    let authorizer = Arc::new(RotatingAuthorizer {
        token: RwLock::new("stale".to_string()),
        fresh: "fresh".to_string(),
    });
    let executor = HttpExecutor::builder()
        .authorizer(authorizer)
        .build()
        .unwrap();

    let value: Message = executor
        .request(
            format!("{}/data", server.url()),
            RequestMethod::get(),
            &HashMap::new(),
            true,
            None,
        )
        .await
        .unwrap();

    assert_eq!(value.message, "hi");
}

#[tokio::test]
async fn query_pairs_append_to_existing_query_string() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/search")
        .match_query(mockito::Matcher::AllOf(vec![
            mockito::Matcher::UrlEncoded("a".into(), "1".into()),
            mockito::Matcher::UrlEncoded("b".into(), "2".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"message":"found"}"#)
        .create_async()
        .await;

    let executor = HttpExecutor::builder().build().unwrap();
    let value: Message = executor
        .request(
            format!("{}/search?a=1", server.url()),
            RequestMethod::get_with_query([("b", "2")]),
            &HashMap::new(),
            false,
            None,
        )
        .await
        .unwrap();

    assert_eq!(value.message, "found");
}

#[tokio::test]
async fn bearer_authorizer_signs_convenience_get() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/me")
        .match_header("authorization", "Bearer t0")
        .with_status(200)
        .with_body(r#"{"message":"me"}"#)
        .create_async()
        .await;

    let executor = HttpExecutor::builder()
        .authorizer(Arc::new(BearerAuthorizer::new("t0")))
        .build()
        .unwrap();

    let value: Message = executor.get(format!("{}/me", server.url())).await.unwrap();
    assert_eq!(value.message, "me");
}

#[tokio::test]
async fn custom_handler_maps_status_to_domain_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/flaky")
        .with_status(429)
        .with_body("slow down")
        .create_async()
        .await;

    let executor = HttpExecutor::builder().build().unwrap();
    let handler: authwire::CustomHandler<Message> = Box::new(|envelope| {
        if envelope.status == 429 {
            Err(ClientError::custom("quota exhausted"))
        } else {
            Ok(Message {
                message: "ok".to_string(),
            })
        }
    });

    let err = executor
        .request::<Message, _>(
            format!("{}/flaky", server.url()),
            RequestMethod::get(),
            &HashMap::new(),
            false,
            Some(handler),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Custom(_)));
}
