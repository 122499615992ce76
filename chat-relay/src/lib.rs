//! chat-relay: forwards a single chat message to Gemini and relays the reply,
//! keeping the provider credential on the server.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod startup;

pub use startup::{build_router, AppState, Application};
