use reqwest::header::{HeaderMap, HeaderValue};
use url::Url;

use super::*;
use crate::types::HttpConfig;

fn request(url: Url, method: reqwest::Method) -> TransportRequest {
    TransportRequest {
        url,
        method,
        headers: HeaderMap::new(),
        body: None,
    }
}

#[tokio::test]
async fn get_roundtrip_returns_envelope() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/hello")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok":true}"#)
        .create_async()
        .await;

    let transport = ReqwestTransport::new(&HttpConfig::default()).unwrap();
    let url = Url::parse(&format!("{}/hello", server.url())).unwrap();

    let envelope = transport
        .execute(request(url, reqwest::Method::GET))
        .await
        .unwrap();

    assert_eq!(envelope.status, 200);
    assert!(envelope.is_success());
    assert_eq!(envelope.header("content-type"), Some("application/json"));
    assert_eq!(envelope.body.as_ref(), br#"{"ok":true}"#);
}

#[tokio::test]
async fn post_sends_headers_and_body() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", "/submit")
        .match_header("x-test", "1")
        .match_body("payload")
        .with_status(204)
        .create_async()
        .await;

    let transport = ReqwestTransport::new(&HttpConfig::default()).unwrap();
    let url = Url::parse(&format!("{}/submit", server.url())).unwrap();
    let mut req = request(url, reqwest::Method::POST);
    req.insert_header("x-test", "1").unwrap();
    req.body = Some(bytes::Bytes::from_static(b"payload"));

    let envelope = transport.execute(req).await.unwrap();
    assert_eq!(envelope.status, 204);
}

#[tokio::test]
async fn connection_failure_is_transport_error() {
    let transport = ReqwestTransport::new(&HttpConfig::default()).unwrap();
    // Reserved TLD, nothing listens here.
    let url = Url::parse("http://unreachable.invalid/").unwrap();

    let err = transport
        .execute(request(url, reqwest::Method::GET))
        .await
        .unwrap_err();
    assert!(err.is_transport());
}

#[test]
fn insert_header_rejects_invalid_names() {
    let mut req = request(
        Url::parse("http://example.com/").unwrap(),
        reqwest::Method::GET,
    );
    assert!(req.insert_header("bad header", "v").is_err());
    assert!(req.insert_header("x-ok", "v").is_ok());
}
