//! Mock provider implementation for testing.

use super::{FinishReason, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Clone)]
enum Behavior {
    Reply(String),
    Echo,
    Empty,
    Fail(ProviderError),
}

/// Mock text provider that records how often it was called.
#[derive(Debug)]
pub struct MockTextProvider {
    behavior: Behavior,
    calls: AtomicUsize,
}

impl MockTextProvider {
    /// Always reply with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_behavior(Behavior::Reply(text.into()))
    }

    /// Reply with a message derived from the prompt.
    pub fn echoing() -> Self {
        Self::with_behavior(Behavior::Echo)
    }

    /// Succeed without producing any text.
    pub fn empty() -> Self {
        Self::with_behavior(Behavior::Empty)
    }

    /// Always fail with `error`.
    pub fn failing(error: ProviderError) -> Self {
        Self::with_behavior(Behavior::Fail(error))
    }

    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `generate` calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

/// Rough four-bytes-per-token estimate, saturating at `i32::MAX`.
fn approx_tokens(text: &str) -> i32 {
    i32::try_from(text.len() / 4).unwrap_or(i32::MAX)
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let text = match &self.behavior {
            Behavior::Reply(text) => Some(text.clone()),
            Behavior::Echo => Some(format!("Mock response for: {}", prompt)),
            Behavior::Empty => None,
            Behavior::Fail(error) => return Err(error.clone()),
        };

        Ok(ProviderResponse {
            output_tokens: text.as_deref().map_or(0, approx_tokens),
            text,
            input_tokens: approx_tokens(prompt),
            finish_reason: FinishReason::Complete,
        })
    }

    fn model(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_estimate_saturates() {
        assert_eq!(approx_tokens("abcdefgh"), 2);
        assert_eq!(approx_tokens(""), 0);
    }

    #[tokio::test]
    async fn counts_calls_and_reports_usage() {
        let provider = MockTextProvider::replying("hi there");

        let response = provider.generate("hello world!").await.unwrap();

        assert_eq!(response.text.as_deref(), Some("hi there"));
        assert_eq!(response.input_tokens, 3);
        assert_eq!(response.output_tokens, 2);
        assert_eq!(provider.calls(), 1);
    }
}
