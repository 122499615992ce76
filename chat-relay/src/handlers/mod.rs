//! HTTP handlers for the chat relay.

pub mod chat;
pub mod fallback;
pub mod health;
pub mod metrics;
