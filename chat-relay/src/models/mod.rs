//! Wire models for the relay's HTTP API.

pub mod chat;
pub mod health;

pub use chat::{ChatRequest, ChatRequestError, ChatResponse};
pub use health::{HealthResponse, ReadinessResponse};
