//! Tests for the HTTP client module

use super::*;
use crate::error::Error;
use crate::pagination::RequestOutcome;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    HttpClient::with_config(HttpClientConfig::builder().base_url(server.uri()).build()).unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.base_url.is_none());
    assert!(config.default_headers.is_empty());
    assert!(config.user_agent.starts_with("extralife-client/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://www.extra-life.org/api/")
        .timeout(Duration::from_secs(60))
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(
        config.base_url,
        Some("https://www.extra-life.org/api/".to_string())
    );
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_http_client_is_shareable() {
    fn assert_send_sync<T: Send + Sync + Clone>() {}
    assert_send_sync::<HttpClient>();
}

#[test]
fn test_build_url() {
    let client = HttpClient::with_config(
        HttpClientConfig::builder()
            .base_url("https://www.extra-life.org/api/")
            .build(),
    )
    .unwrap();

    assert_eq!(
        client.build_url("participants"),
        "https://www.extra-life.org/api/participants"
    );
    assert_eq!(
        client.build_url("/donors/ABC"),
        "https://www.extra-life.org/api/donors/ABC"
    );
    assert_eq!(
        client.build_url("https://other.example.com/participants?offset=101"),
        "https://other.example.com/participants?offset=101"
    );
}

#[tokio::test]
async fn test_fetch_single_page_success_with_links() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/participants"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header(
                    "Link",
                    "<https://www.extra-life.org/api/participants?offset=101>;rel=\"next\"",
                )
                .set_body_json(json!([{"participantID": 1}])),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let outcome: RequestOutcome<Vec<Value>> =
        client.fetch_single_page("participants").await.unwrap();

    match outcome {
        RequestOutcome::Success { body, links } => {
            assert_eq!(body.len(), 1);
            assert_eq!(
                links.unwrap().next_link(),
                Some("https://www.extra-life.org/api/participants?offset=101")
            );
        }
        other => panic!("Expected Success, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_single_page_without_link_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/participants/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"participantID": 5})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let outcome: RequestOutcome<Value> = client.fetch_single_page("participants/5").await.unwrap();

    assert_eq!(
        outcome,
        RequestOutcome::Success {
            body: json!({"participantID": 5}),
            links: None,
        }
    );
}

#[tokio::test]
async fn test_fetch_single_page_uses_first_link_value() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/donors"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("link", "<https://a.test/first>;rel=\"next\"")
                .append_header("link", "<https://a.test/second>;rel=\"next\"")
                .set_body_json(json!([])),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let outcome: RequestOutcome<Vec<Value>> = client.fetch_single_page("donors").await.unwrap();
    let page = outcome.into_page().unwrap().unwrap();

    assert_eq!(page.next_url(), Some("https://a.test/first"));
}

#[tokio::test]
async fn test_fetch_single_page_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/participants/404"))
        .respond_with(ResponseTemplate::new(404).set_body_string("missing"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let outcome: RequestOutcome<Value> =
        client.fetch_single_page("participants/404").await.unwrap();

    assert!(outcome.is_not_found());
}

#[tokio::test]
async fn test_fetch_single_page_failure_carries_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/participants"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let outcome: RequestOutcome<Value> = client.fetch_single_page("participants").await.unwrap();

    assert_eq!(
        outcome,
        RequestOutcome::Failure {
            status: 500,
            reason: "Internal Server Error".to_string(),
        }
    );
}

#[tokio::test]
async fn test_fetch_single_page_nonstandard_status_uses_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/participants"))
        .respond_with(ResponseTemplate::new(599).set_body_string("upstream gave up"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let outcome: RequestOutcome<Value> = client.fetch_single_page("participants").await.unwrap();

    assert_eq!(
        outcome,
        RequestOutcome::Failure {
            status: 599,
            reason: "upstream gave up".to_string(),
        }
    );
}

#[tokio::test]
async fn test_fetch_single_page_malformed_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/participants/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .fetch_single_page::<Value>("participants/1")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Decode { .. }));
    assert!(err.to_string().contains("/participants/1"));
}

#[tokio::test]
async fn test_get_json_maps_not_found_to_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/donors/NOPE"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let donor: Option<Value> = client.get_json("donors/NOPE").await.unwrap();
    assert!(donor.is_none());
}

#[tokio::test]
async fn test_default_headers_are_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/participants"))
        .and(header("X-Request-Source", "tests"))
        .and(header("user-agent", "test-agent/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(server.uri())
        .header("X-Request-Source", "tests")
        .user_agent("test-agent/1.0")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let items: Vec<Value> = client.fetch_all("participants").await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_timeout_surfaces_as_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(500))
                .set_body_json(json!([])),
        )
        .mount(&server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(server.uri())
        .timeout(Duration::from_millis(50))
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let err = client.fetch_all::<Value>("slow").await.unwrap_err();
    match err {
        Error::Http(e) => assert!(e.is_timeout()),
        other => panic!("Expected Http timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn test_shared_client_concurrent_calls() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/participants/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"participantID": 1})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/participants/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"participantID": 2})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let other = client.clone();

    let (a, b) = tokio::join!(
        client.get_json::<Value>("participants/1"),
        other.get_json::<Value>("participants/2"),
    );

    assert_eq!(a.unwrap().unwrap()["participantID"], 1);
    assert_eq!(b.unwrap().unwrap()["participantID"], 2);
}
