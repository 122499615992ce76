use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::time::Duration;

/// Environment variable holding the provider credential.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

pub const DEFAULT_SERVICE_NAME: &str = "chat-relay";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub common: core_config::Config,
    pub service_name: String,
    pub google: GoogleConfig,
    pub models: ModelConfig,
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone)]
pub struct GoogleConfig {
    /// Provider credential. `None` leaves `/chat` unconfigured; the process
    /// still starts.
    pub api_key: Option<Secret<String>>,
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Model used for chat replies (e.g., gemini-1.5-flash)
    pub text_model: String,
    /// Upper bound on a single upstream call. Unset means no timeout.
    pub request_timeout: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
}

impl RelayConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;

        Ok(RelayConfig {
            common: common_config,
            service_name: get_env("SERVICE_NAME", DEFAULT_SERVICE_NAME),
            google: GoogleConfig {
                api_key: optional_env(API_KEY_ENV).map(Secret::new),
                base_url: get_env("GENAI_API_BASE_URL", DEFAULT_API_BASE_URL),
            },
            models: ModelConfig {
                text_model: get_env("GENAI_TEXT_MODEL", DEFAULT_TEXT_MODEL),
                request_timeout: optional_env("GENAI_REQUEST_TIMEOUT_SECS")
                    .map(|raw| parse_timeout(&raw))
                    .transpose()?,
            },
            observability: ObservabilityConfig {
                log_level: get_env("LOG_LEVEL", "info"),
                otlp_endpoint: optional_env("OTLP_ENDPOINT"),
            },
        })
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, AppError> {
    let secs: u64 = raw.trim().parse().map_err(|e| {
        AppError::ConfigError(anyhow::anyhow!(
            "GENAI_REQUEST_TIMEOUT_SECS must be a whole number of seconds: {}",
            e
        ))
    })?;

    if secs == 0 {
        return Err(AppError::ConfigError(anyhow::anyhow!(
            "GENAI_REQUEST_TIMEOUT_SECS must be greater than zero"
        )));
    }

    Ok(Duration::from_secs(secs))
}

fn get_env(key: &str, default: &str) -> String {
    optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Unset and blank variables are treated the same.
fn optional_env(key: &str) -> Option<String> {
    non_blank(env::var(key).ok())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
