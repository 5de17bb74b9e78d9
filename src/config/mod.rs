//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `LOTUSGUESS` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use lotus_guess::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod app;
mod error;
mod log;
mod record;
mod server;

pub use app::AppSection;
pub use error::{ConfigError, ValidationError};
pub use log::LogConfig;
pub use record::RecordConfig;
pub use server::{Environment, ServerConfig};

use reqwest::Url;
use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// local setup. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Public origin and share settings
    #[serde(default)]
    pub app: AppSection,

    /// Record emitter (remote endpoint or local issuer)
    #[serde(default)]
    pub record: RecordConfig,

    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging (filter, output format)
    #[serde(default)]
    pub log: LogConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `LOTUSGUESS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `LOTUSGUESS__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `LOTUSGUESS__RECORD__ENDPOINT_URL=...` -> `record.endpoint_url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("LOTUSGUESS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.app.validate()?;
        self.record.validate()?;
        self.server.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

/// Absolute `http` or `https` URL.
fn is_http_url(value: &str) -> bool {
    Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
        .unwrap_or(false)
}
