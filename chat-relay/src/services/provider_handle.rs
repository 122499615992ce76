//! Process-wide upstream client handle.
//!
//! Built once at startup from [`RelayConfig`] and never mutated afterwards.
//! A missing or unusable credential leaves the handle empty for the lifetime
//! of the process; `/chat` then answers with a configuration error while the
//! rest of the service keeps running.

use crate::config::RelayConfig;
use crate::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use crate::services::providers::TextProvider;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct ProviderHandle {
    provider: Option<Arc<dyn TextProvider>>,
}

impl ProviderHandle {
    /// Wrap an already constructed provider.
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// A handle that never becomes ready.
    pub fn unconfigured() -> Self {
        Self::default()
    }

    /// Construct the Gemini provider from configuration. Never fails: every
    /// problem is logged and results in an unconfigured handle.
    pub fn from_config(config: &RelayConfig) -> Self {
        let Some(api_key) = config.google.api_key.clone() else {
            tracing::error!(
                env_var = crate::config::API_KEY_ENV,
                "Provider credential not set; /chat will report a configuration error"
            );
            return Self::unconfigured();
        };

        let gemini_config = GeminiConfig {
            api_key,
            model: config.models.text_model.clone(),
            base_url: config.google.base_url.clone(),
            timeout: config.models.request_timeout,
        };

        match GeminiTextProvider::new(gemini_config) {
            Ok(provider) => {
                tracing::info!(
                    model = %config.models.text_model,
                    "Initialized Gemini text provider"
                );
                Self::new(Arc::new(provider))
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    "Failed to initialize Gemini text provider; /chat will report a configuration error"
                );
                Self::unconfigured()
            }
        }
    }

    /// The provider, if startup managed to build one.
    pub fn ready(&self) -> Option<&Arc<dyn TextProvider>> {
        self.provider.as_ref()
    }
}

impl std::fmt::Debug for ProviderHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderHandle")
            .field("model", &self.provider.as_ref().map(|p| p.model()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GoogleConfig, ModelConfig, ObservabilityConfig, DEFAULT_API_BASE_URL};
    use secrecy::Secret;
    use service_core::config::Config;

    fn config_with_key(key: Option<&str>) -> RelayConfig {
        RelayConfig {
            common: Config {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            service_name: "chat-relay".to_string(),
            google: GoogleConfig {
                api_key: key.map(|k| Secret::new(k.to_string())),
                base_url: DEFAULT_API_BASE_URL.to_string(),
            },
            models: ModelConfig {
                text_model: "gemini-1.5-flash".to_string(),
                request_timeout: None,
            },
            observability: ObservabilityConfig {
                log_level: "error".to_string(),
                otlp_endpoint: None,
            },
        }
    }

    #[test]
    fn missing_key_leaves_handle_unset() {
        let handle = ProviderHandle::from_config(&config_with_key(None));
        assert!(handle.ready().is_none());
    }

    #[test]
    fn blank_key_leaves_handle_unset() {
        let handle = ProviderHandle::from_config(&config_with_key(Some("")));
        assert!(handle.ready().is_none());
    }

    #[test]
    fn valid_key_builds_gemini_provider() {
        let handle = ProviderHandle::from_config(&config_with_key(Some("test-api-key")));
        let provider = handle.ready().expect("provider should be ready");
        assert_eq!(provider.model(), "gemini-1.5-flash");
    }

    #[test]
    fn debug_does_not_print_key() {
        let handle = ProviderHandle::from_config(&config_with_key(Some("test-api-key")));
        assert!(!format!("{:?}", handle).contains("test-api-key"));
    }
}
