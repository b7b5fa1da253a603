//! Tests for the HTTP client module

use super::*;
use crate::error::Error;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = HttpClientConfig::builder()
        .base_url(format!("{}/api/", server.uri()))
        .no_rate_limit()
        .build();
    HttpClient::with_config(config).unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.base_url, "https://dab.yeet.su/api/");
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.rate_limit.is_some());
    assert!(config.user_agent.starts_with("dab-feed/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://example.com/api/")
        .timeout(Duration::from_secs(5))
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .no_rate_limit()
        .build();

    assert_eq!(config.base_url, "https://example.com/api/");
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert!(config.rate_limit.is_none());
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[tokio::test]
async fn test_throttled_client_still_reaches_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(2)
        .mount(&server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(format!("{}/api/", server.uri()))
        .rate_limit(RateLimiterConfig::new(50, 1))
        .build();
    let client = HttpClient::with_config(config).unwrap();
    assert!(client.is_throttled());
    assert!(!client_for(&server).is_throttled());

    for _ in 0..2 {
        client.get("search", RequestConfig::default()).await.unwrap();
    }
}

#[test]
fn test_request_config_builder() {
    let config = RequestConfig::new()
        .query("q", "daft punk")
        .query("offset", 20)
        .header("X-Request-Id", "abc123")
        .json(serde_json::json!({"key": "value"}))
        .session("session=xyz");

    assert_eq!(
        config.query,
        vec![
            ("q".to_string(), "daft punk".to_string()),
            ("offset".to_string(), "20".to_string())
        ]
    );
    assert_eq!(
        config.headers.get("X-Request-Id"),
        Some(&"abc123".to_string())
    );
    assert!(config.body.is_some());
    assert_eq!(config.session.as_deref(), Some("session=xyz"));
}

#[test]
fn test_build_url_relative_and_absolute() {
    let config = HttpClientConfig::builder()
        .base_url("https://dab.yeet.su/api")
        .no_rate_limit()
        .build();
    let client = HttpClient::with_config(config).unwrap();

    assert_eq!(
        client.build_url("auth/login").unwrap().as_str(),
        "https://dab.yeet.su/api/auth/login"
    );
    assert_eq!(
        client.build_url("/search").unwrap().as_str(),
        "https://dab.yeet.su/api/search"
    );
    assert_eq!(
        client.build_url("https://cdn.example.com/x").unwrap().as_str(),
        "https://cdn.example.com/x"
    );
}

#[test]
fn test_invalid_base_url() {
    let config = HttpClientConfig::builder()
        .base_url("not a url")
        .no_rate_limit()
        .build();
    let result = HttpClient::with_config(config);
    assert!(matches!(result, Err(Error::InvalidUrl(_))));
}

#[tokio::test]
async fn test_get_json_with_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(query_param("q", "test"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "value": 42,
            "unknown": "ignored"
        })))
        .mount(&mock_server)
        .await;

    #[derive(serde::Deserialize)]
    struct Body {
        value: u32,
    }

    let client = client_for(&mock_server);
    let body: Body = client
        .get_json("search", RequestConfig::new().query("q", "test").query("offset", 0))
        .await
        .unwrap();

    assert_eq!(body.value, 42);
}

#[tokio::test]
async fn test_session_cookie_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/favorites"))
        .and(header("Cookie", "session=abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client
        .get("favorites", RequestConfig::new().session("session=abc"))
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_post_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(serde_json::json!({"email": "a@b.c", "password": "pw"})))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client
        .post(
            "auth/login",
            RequestConfig::new().json(serde_json::json!({"email": "a@b.c", "password": "pw"})),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_error_payload_becomes_remote_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/album"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({"error": "Album not found"})),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get("album", RequestConfig::new().query("albumId", "1"))
        .await
        .unwrap_err();

    match err {
        Error::RemoteApi { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Album not found");
        }
        other => panic!("Expected RemoteApi, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/flaky"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get("flaky", RequestConfig::new()).await.unwrap_err();

    assert!(matches!(err, Error::RemoteApi { status: 503, .. }));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_invalid_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/stream"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result: crate::error::Result<serde_json::Value> =
        client.get_json("stream", RequestConfig::new()).await;

    assert!(matches!(result, Err(Error::JsonParse(_))));
}

#[tokio::test]
async fn test_transport_error() {
    let config = HttpClientConfig::builder()
        .base_url("http://127.0.0.1:1/api/")
        .timeout(Duration::from_secs(2))
        .no_rate_limit()
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let err = client.get("search", RequestConfig::new()).await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}

#[test]
fn test_set_cookie_values() {
    let mut headers = reqwest::header::HeaderMap::new();
    headers.append("set-cookie", "theme=dark; Path=/".parse().unwrap());
    headers.append("set-cookie", "session=abc; HttpOnly".parse().unwrap());

    let values = set_cookie_values(&headers);
    assert_eq!(values.len(), 2);
    assert_eq!(values[1], "session=abc; HttpOnly");
}
