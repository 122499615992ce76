use serde::Serialize;
use serde_json::Value;
use service_core::error::AppError;
use thiserror::Error;

/// Inbound chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
}

/// Successful chat reply.
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChatRequestError {
    #[error("Request body is empty; expected a JSON object with a 'message' field")]
    EmptyBody,

    #[error("Invalid request: body must be a JSON object with a 'message' field ({0})")]
    InvalidJson(String),

    #[error("Invalid request: 'message' field is required")]
    MissingMessage,

    #[error("Invalid request: 'message' must be a string")]
    MessageNotString,

    #[error("Invalid request: 'message' must not be empty")]
    EmptyMessage,
}

impl ChatRequest {
    /// Parse a raw request body. Content type is not checked; any body that
    /// decodes to `{"message": "<non-empty string>"}` is accepted.
    pub fn from_body(body: &[u8]) -> Result<Self, ChatRequestError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(ChatRequestError::EmptyBody);
        }

        let value: Value = serde_json::from_slice(body)
            .map_err(|e| ChatRequestError::InvalidJson(e.to_string()))?;

        let message = match value.get("message") {
            None | Some(Value::Null) => return Err(ChatRequestError::MissingMessage),
            Some(Value::String(message)) => message,
            Some(_) => return Err(ChatRequestError::MessageNotString),
        };

        if message.is_empty() {
            return Err(ChatRequestError::EmptyMessage);
        }

        Ok(Self {
            message: message.clone(),
        })
    }
}

impl From<ChatRequestError> for AppError {
    fn from(err: ChatRequestError) -> Self {
        AppError::BadRequest(anyhow::Error::new(err))
    }
}
