//! Configuration management
//!
//! Layering, lowest precedence first: built-in defaults, `config/default`,
//! `config/{APP_ENV}`, `TIMER_`-prefixed environment variables using `__` as
//! the nesting separator (`TIMER_APP__PORT=9000`), then the flat deployment
//! variables `API_BASE_URL`, `API_KEY` and `DATABASE_URL`.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::{DEFAULT_ACQUIRE_TIMEOUT_SECS, DEFAULT_MAX_CONNECTIONS};

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub upstream: UpstreamSettings,
    pub log: LogSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamSettings {
    pub base_url: String,
    pub api_key: String,
    /// Zero disables the client timeout.
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub level: String,
    pub json: bool,
    pub directory: Option<String>,
}

/// Flat variables that take precedence over every layered source.
#[derive(Debug, Default, Clone)]
pub struct DeploymentOverrides {
    pub api_base_url: Option<String>,
    pub api_key: Option<String>,
    pub database_url: Option<String>,
}

impl DeploymentOverrides {
    pub fn from_env() -> Self {
        Self {
            api_base_url: std::env::var("API_BASE_URL").ok(),
            api_key: std::env::var("API_KEY").ok(),
            database_url: std::env::var("DATABASE_URL").ok(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(DeploymentOverrides::from_env())
    }

    pub fn load_with(overrides: DeploymentOverrides) -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Config::builder()
            .set_default("app.env", env.clone())?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 3000)?
            .set_default("app.name", "timer-server")?
            .set_default("database.max_connections", DEFAULT_MAX_CONNECTIONS)?
            .set_default("database.acquire_timeout_secs", DEFAULT_ACQUIRE_TIMEOUT_SECS)?
            .set_default("upstream.timeout_secs", 0)?
            .set_default("log.level", "info")?
            .set_default("log.json", true)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("TIMER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("upstream.base_url", overrides.api_base_url)?
            .set_override_option("upstream.api_key", overrides.api_key)?
            .set_override_option("database.url", overrides.database_url)?
            .build()?;
        config.try_deserialize()
    }
}
