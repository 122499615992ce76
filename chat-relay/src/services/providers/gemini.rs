//! Gemini AI provider implementation.
//!
//! Implements single-shot text generation using Google's Gemini
//! `generateContent` API.

use super::{FinishReason, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Header carrying the credential. Keeps the key out of request URLs, which
/// end up in error messages and proxy logs.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini provider configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Secret<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Option<Duration>,
}

/// Gemini text provider.
pub struct GeminiTextProvider {
    model: String,
    base_url: String,
    client: Client,
}

impl GeminiTextProvider {
    /// Build the provider. Fails when the credential cannot be used at all;
    /// whether Google accepts it is only known on the first call.
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        let key = config.api_key.expose_secret().trim();
        if key.is_empty() {
            return Err(ProviderError::NotConfigured(
                "Gemini API key is empty".to_string(),
            ));
        }

        let mut key_header = HeaderValue::from_str(key).map_err(|_| {
            ProviderError::NotConfigured(
                "Gemini API key contains characters not allowed in an HTTP header".to_string(),
            )
        })?;
        key_header.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key_header);

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| {
            ProviderError::NotConfigured(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self {
            model: config.model,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Build the API URL for the given method.
    fn api_url(&self, method: &str) -> String {
        format!("{}/models/{}:{}", self.base_url, self.model, method)
    }
}

#[async_trait]
impl TextProvider for GeminiTextProvider {
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![ContentPart::Text {
                    text: prompt.to_string(),
                }],
            }],
        };

        tracing::debug!(
            model = %self.model,
            prompt_len = prompt.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(self.api_url("generateContent"))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout
                } else {
                    ProviderError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            if status == StatusCode::TOO_MANY_REQUESTS {
                return Err(ProviderError::RateLimited);
            }

            let error_text = response.text().await.unwrap_or_default();
            return Err(ProviderError::ApiError(format!(
                "Gemini API error {}: {}",
                status, error_text
            )));
        }

        let api_response: GenerateContentResponse = response.json().await.map_err(|e| {
            ProviderError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;

        api_response.into_provider_response()
    }

    fn model(&self) -> &str {
        &self.model
    }
}

// ============================================================================
// Gemini API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<ContentPart>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum ContentPart {
    Text { text: String },
    // Inline data, function calls and anything newer than this client.
    Other(serde_json::Value),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
    #[serde(default)]
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    prompt_token_count: Option<i32>,
    candidates_token_count: Option<i32>,
}

impl GenerateContentResponse {
    fn into_provider_response(self) -> Result<ProviderResponse, ProviderError> {
        if let Some(reason) = self
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
        {
            tracing::warn!(block_reason = reason, "Gemini blocked the prompt");
            return Err(ProviderError::ContentFiltered);
        }

        let candidate = self.candidates.into_iter().next();

        let finish_reason = FinishReason::from_api(
            candidate
                .as_ref()
                .and_then(|c| c.finish_reason.as_deref()),
        );

        // Concatenate every text part of the first candidate.
        let text = candidate
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| match p {
                        ContentPart::Text { text } => Some(text),
                        ContentPart::Other(_) => None,
                    })
                    .collect::<String>()
            })
            .filter(|text| !text.is_empty());

        if text.is_none() && finish_reason == FinishReason::ContentFilter {
            return Err(ProviderError::ContentFiltered);
        }

        let usage = self.usage_metadata.unwrap_or_default();

        Ok(ProviderResponse {
            text,
            input_tokens: usage.prompt_token_count.unwrap_or(0),
            output_tokens: usage.candidates_token_count.unwrap_or(0),
            finish_reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(key: &str) -> GeminiConfig {
        GeminiConfig {
            api_key: Secret::new(key.to_string()),
            model: "gemini-1.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta/".to_string(),
            timeout: None,
        }
    }

    fn parse(body: serde_json::Value) -> Result<ProviderResponse, ProviderError> {
        serde_json::from_value::<GenerateContentResponse>(body)
            .unwrap()
            .into_provider_response()
    }

    #[test]
    fn blank_key_is_rejected() {
        assert!(matches!(
            GeminiTextProvider::new(config("   ")),
            Err(ProviderError::NotConfigured(_))
        ));
    }

    #[test]
    fn key_with_control_characters_is_rejected() {
        assert!(matches!(
            GeminiTextProvider::new(config("abc\ndef")),
            Err(ProviderError::NotConfigured(_))
        ));
    }

    #[test]
    fn api_url_has_no_credential() {
        let provider = GeminiTextProvider::new(config("secret-key")).unwrap();
        let url = provider.api_url("generateContent");

        assert_eq!(
            url,
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
        );
        assert!(!url.contains("secret-key"));
    }

    #[test]
    fn request_serializes_single_user_turn() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![ContentPart::Text {
                    text: "hello".to_string(),
                }],
            }],
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"contents": [{"role": "user", "parts": [{"text": "hello"}]}]})
        );
    }

    #[test]
    fn joins_text_parts_and_reads_usage() {
        let response = parse(serde_json::json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "hi "}, {"text": "there"}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 3, "candidatesTokenCount": 2, "totalTokenCount": 5}
        }))
        .unwrap();

        assert_eq!(response.text.as_deref(), Some("hi there"));
        assert_eq!(response.input_tokens, 3);
        assert_eq!(response.output_tokens, 2);
        assert_eq!(response.finish_reason, FinishReason::Complete);
    }

    #[test]
    fn non_text_parts_are_skipped() {
        let response = parse(serde_json::json!({
            "candidates": [{
                "content": {"parts": [
                    {"inlineData": {"mimeType": "image/png", "data": "AAAA"}},
                    {"text": "caption"}
                ]}
            }]
        }))
        .unwrap();

        assert_eq!(response.text.as_deref(), Some("caption"));
    }

    #[test]
    fn safety_stop_without_text_is_filtered() {
        let result = parse(serde_json::json!({
            "candidates": [{"finishReason": "SAFETY"}]
        }));

        assert_eq!(result.unwrap_err(), ProviderError::ContentFiltered);
    }

    #[test]
    fn blocked_prompt_is_filtered() {
        let result = parse(serde_json::json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        }));

        assert_eq!(result.unwrap_err(), ProviderError::ContentFiltered);
    }

    #[test]
    fn no_candidates_yields_no_text() {
        let response = parse(serde_json::json!({})).unwrap();
        assert!(response.text.is_none());
    }
}
