//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid socket address: {0}")]
    InvalidSocketAddr(String),

    #[error("Invalid record request timeout")]
    InvalidTimeout,

    #[error("Too many record retries (maximum 10)")]
    TooManyRetries,

    #[error("{field} must be an absolute http(s) URL")]
    InvalidUrl { field: &'static str },

    #[error("Invalid log level directive: {0}")]
    InvalidLogLevel(String),
}
