use serde::Serialize;

/// Liveness payload served at `/`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: String,
    pub version: &'static str,
}

impl HealthResponse {
    pub fn active(service: impl Into<String>) -> Self {
        Self {
            status: "active",
            service: service.into(),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub model: String,
}
