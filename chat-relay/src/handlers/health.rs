use crate::models::{HealthResponse, ReadinessResponse};
use crate::startup::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;

/// Liveness probe. Succeeds whether or not the provider is configured.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::active(state.config.service_name.clone()))
}

/// Readiness probe: `/chat` can only work once the provider handle is set.
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<ReadinessResponse>, AppError> {
    match state.provider.ready() {
        Some(provider) => Ok(Json(ReadinessResponse {
            status: "ready",
            model: provider.model().to_string(),
        })),
        None => Err(AppError::ServiceUnavailable(
            "Chat provider is not configured".to_string(),
        )),
    }
}
