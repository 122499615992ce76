//! Liveness and readiness endpoint tests.

mod common;

use axum::http::StatusCode;
use chat_relay::services::providers::mock::MockTextProvider;
use chat_relay::services::ProviderHandle;
use chat_relay::Application;
use common::{app_with_provider, get, test_config, unconfigured_app, TEST_SERVICE_NAME};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn root_reports_active() {
    let app = app_with_provider(Arc::new(MockTextProvider::echoing()));

    let (status, body) = get(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "active");
    assert_eq!(body["service"], TEST_SERVICE_NAME);
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn health_alias_matches_root() {
    let (status, body) = get(unconfigured_app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "active");
}

#[tokio::test]
async fn root_is_live_without_credential() {
    let (status, body) = get(unconfigured_app(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "active");
}

#[tokio::test]
async fn ready_when_provider_configured() {
    let app = app_with_provider(Arc::new(MockTextProvider::echoing()));

    let (status, body) = get(app, "/ready").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["model"], "mock");
}

#[tokio::test]
async fn not_ready_without_provider() {
    let (status, body) = get(unconfigured_app(), "/ready").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn unknown_path_returns_json_404() {
    let (status, body) = get(unconfigured_app(), "/does-not-exist").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("/does-not-exist"));
}

#[tokio::test]
async fn metrics_endpoint_serves_text() {
    chat_relay::services::metrics::init_metrics();
    let app = app_with_provider(Arc::new(MockTextProvider::echoing()));

    let response = tower::util::ServiceExt::oneshot(
        app,
        axum::http::Request::builder()
            .uri("/metrics")
            .body(axum::body::Body::empty())
            .unwrap(),
    )
    .await
    .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));
}

/// Spawn the application on a random port and return the port number.
async fn spawn_app() -> u16 {
    let app = Application::build_with_provider(
        test_config(None),
        ProviderHandle::unconfigured(),
    )
    .await
    .expect("Failed to build application");

    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(100)).await;

    port
}

#[tokio::test]
async fn served_over_tcp_with_request_id() {
    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("http://127.0.0.1:{}/", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    assert!(response.headers().contains_key("x-request-id"));

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "active");
}

#[tokio::test]
async fn build_without_credential_still_serves_chat_errors() {
    let app = Application::build(test_config(None))
        .await
        .expect("Failed to build application");
    let port = app.port();
    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });
    tokio::time::sleep(Duration::from_millis(100)).await;

    let response = Client::new()
        .post(format!("http://127.0.0.1:{}/chat", port))
        .json(&serde_json::json!({"message": "hello"}))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 500);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["error"].as_str().unwrap().contains("API key"));
}
