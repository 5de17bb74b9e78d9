//! Structured logging setup.
//!
//! Logs go to stderr so interactive output on stdout stays clean. The filter
//! comes from `RUST_LOG` when set, otherwise from the configured level.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::LogConfig;

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Installs the global subscriber once. Later calls are no-ops.
pub fn init_logging(config: &LogConfig) {
    LOGGER_INITIALIZED.get_or_init(|| {
        let filter = build_filter(config);

        let layer = if config.json {
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .json()
                .with_filter(filter)
                .boxed()
        } else {
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter)
                .boxed()
        };

        // A subscriber may already be set (tests, embedding); keep it.
        if tracing_subscriber::registry().with(layer).try_init().is_err() {
            tracing::debug!("Global tracing subscriber already initialized");
        }
    });
}

fn build_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        let config = LogConfig::default();
        init_logging(&config);
        init_logging(&config);
        tracing::info!("logging initialized twice without panicking");
    }

    #[test]
    fn json_config_initializes() {
        let config = LogConfig {
            json: true,
            ..LogConfig::default()
        };
        init_logging(&config);
    }
}
