//! Tracing subscriber setup.
//!
//! Logs always go to stderr; stdout is reserved for the report.

use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

use crate::config::{AppConfig, LogFormat};
use crate::error::AppError;

const BUNYAN_APP_NAME: &str = "discomind";

/// Build the env filter from the configured directive
pub fn env_filter(config: &AppConfig) -> Result<EnvFilter, AppError> {
    EnvFilter::try_new(&config.log_filter)
        .map_err(|e| AppError::Config(format!("invalid log filter '{}': {}", config.log_filter, e)))
}

/// Install the global subscriber. Fails if one is already set.
pub fn init_tracing(config: &AppConfig) -> Result<(), AppError> {
    let filter = env_filter(config)?;

    let result = match config.log_format {
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| e.to_string()),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| e.to_string()),
        LogFormat::Bunyan => Registry::default()
            .with(filter)
            .with(JsonStorageLayer)
            .with(BunyanFormattingLayer::new(
                BUNYAN_APP_NAME.to_string(),
                std::io::stderr,
            ))
            .try_init()
            .map_err(|e| e.to_string()),
    };

    result.map_err(|e| AppError::Config(format!("failed to install tracing subscriber: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_rejected() {
        let config = AppConfig {
            log_filter: "discomind_core=notalevel".to_string(),
            ..AppConfig::default()
        };
        assert!(matches!(env_filter(&config), Err(AppError::Config(_))));
    }

    #[test]
    fn test_valid_filter() {
        let config = AppConfig {
            log_filter: "info,discomind_core=debug".to_string(),
            ..AppConfig::default()
        };
        assert!(env_filter(&config).is_ok());
    }
}
