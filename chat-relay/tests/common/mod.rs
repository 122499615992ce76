//! Test helpers for chat-relay integration tests.
//!
//! Builds the router around mock providers so no test talks to Google.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chat_relay::config::{
    GoogleConfig, ModelConfig, ObservabilityConfig, RelayConfig, DEFAULT_API_BASE_URL,
};
use chat_relay::services::providers::TextProvider;
use chat_relay::services::ProviderHandle;
use chat_relay::{build_router, AppState};
use http_body_util::BodyExt;
use secrecy::Secret;
use service_core::config::Config;
use std::sync::Arc;
use tower::util::ServiceExt;

pub const TEST_SERVICE_NAME: &str = "chat-relay-test";

/// Config bound to a random local port with an optional credential.
pub fn test_config(api_key: Option<&str>) -> RelayConfig {
    RelayConfig {
        common: Config {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        service_name: TEST_SERVICE_NAME.to_string(),
        google: GoogleConfig {
            api_key: api_key.map(|k| Secret::new(k.to_string())),
            base_url: DEFAULT_API_BASE_URL.to_string(),
        },
        models: ModelConfig {
            text_model: "gemini-test".to_string(),
            request_timeout: None,
        },
        observability: ObservabilityConfig {
            log_level: "error".to_string(),
            otlp_endpoint: None,
        },
    }
}

/// Router with `provider` installed as the upstream handle.
pub fn app_with_provider(provider: Arc<dyn TextProvider>) -> Router {
    build_router(AppState::new(
        test_config(Some("test-api-key")),
        ProviderHandle::new(provider),
    ))
}

/// Router whose upstream handle was never configured.
pub fn unconfigured_app() -> Router {
    build_router(AppState::new(
        test_config(None),
        ProviderHandle::unconfigured(),
    ))
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.expect("Failed to send request");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, body)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

pub async fn post_chat(app: Router, body: impl Into<Body>) -> (StatusCode, serde_json::Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri("/chat")
            .header("content-type", "application/json")
            .body(body.into())
            .unwrap(),
    )
    .await
}
