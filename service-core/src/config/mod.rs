use crate::error::AppError;
use config::{Config as Cfg, ConfigBuilder, File, builder::DefaultState};
use serde::Deserialize;

/// Environment variable conventionally set by PaaS orchestrators for the
/// listening port. Takes precedence over `APP__PORT` and the config file.
pub const PORT_ENV: &str = "PORT";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Self::builder()
            .set_override_option("port", std::env::var(PORT_ENV).ok())?
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Base layering shared by every service: optional `configuration` file,
    /// then `APP__*` environment variables.
    pub fn builder() -> ConfigBuilder<DefaultState> {
        Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
