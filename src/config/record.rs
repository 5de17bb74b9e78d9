//! Record emitter configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::is_http_url;
use crate::adapters::record::HttpRecordEmitterConfig;

const MAX_RETRIES_CEILING: u32 = 10;

/// Record configuration
///
/// With no `endpoint_url` records are issued by the in-process issuer.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordConfig {
    /// Remote issuance endpoint
    pub endpoint_url: Option<String>,

    /// Per-attempt timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Retries for transient failures
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Delay before the first retry, in milliseconds
    #[serde(default = "default_backoff_millis")]
    pub backoff_millis: u64,

    /// Bearer token for the remote endpoint
    pub api_token: Option<Secret<String>>,

    /// Default account reference used by the interactive client
    pub user_ref: Option<String>,
}

impl RecordConfig {
    /// HTTP emitter settings, when a remote endpoint is configured.
    pub fn http_emitter(&self) -> Option<HttpRecordEmitterConfig> {
        let endpoint = self.endpoint_url.as_ref()?;
        let mut config = HttpRecordEmitterConfig::new(endpoint.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_max_retries(self.max_retries)
            .with_backoff(Duration::from_millis(self.backoff_millis));
        if let Some(token) = &self.api_token {
            config = config.with_api_token(token.expose_secret().clone());
        }
        Some(config)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(endpoint) = &self.endpoint_url {
            if !is_http_url(endpoint) {
                return Err(ValidationError::InvalidUrl {
                    field: "record.endpoint_url",
                });
            }
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.max_retries > MAX_RETRIES_CEILING {
            return Err(ValidationError::TooManyRetries);
        }
        Ok(())
    }
}

impl Default for RecordConfig {
    fn default() -> Self {
        Self {
            endpoint_url: None,
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            backoff_millis: default_backoff_millis(),
            api_token: None,
            user_ref: None,
        }
    }
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_max_retries() -> u32 {
    2
}

fn default_backoff_millis() -> u64 {
    1000
}
