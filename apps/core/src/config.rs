//! Runtime configuration.
//!
//! Read from `DISCOMIND_*` environment variables, optionally seeded from a
//! `.env` file, and validated before use. Command-line flags override it.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use validator::Validate;

use crate::error::AppError;

pub const ENV_LOG: &str = "DISCOMIND_LOG";
pub const ENV_LOG_FORMAT: &str = "DISCOMIND_LOG_FORMAT";
pub const ENV_OUTPUT: &str = "DISCOMIND_OUTPUT";
pub const ENV_MAX_INPUT_BYTES: &str = "DISCOMIND_MAX_INPUT_BYTES";

const DEFAULT_LOG_FILTER: &str = "warn";
const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;

/// How log lines are written to stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
    Bunyan,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            "bunyan" => Ok(LogFormat::Bunyan),
            other => Err(AppError::Config(format!(
                "{}: unknown log format '{}' (expected pretty, json or bunyan)",
                ENV_LOG_FORMAT, other
            ))),
        }
    }
}

/// How the analysis report is rendered
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Sectioned plain-text report
    #[default]
    Text,
    /// Pretty-printed JSON report
    Json,
    /// Graphviz DOT for both graphs
    Dot,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "dot" => Ok(OutputFormat::Dot),
            other => Err(AppError::Config(format!(
                "{}: unknown output format '{}' (expected text, json or dot)",
                ENV_OUTPUT, other
            ))),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// tracing `EnvFilter` directive, e.g. `info` or `discomind_core=debug`
    #[validate(length(min = 1))]
    pub log_filter: String,
    pub log_format: LogFormat,
    pub output: OutputFormat,
    /// Largest accepted input, in bytes
    #[validate(range(min = 1, max = 16777216))]
    pub max_input_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_format: LogFormat::default(),
            output: OutputFormat::default(),
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

impl AppConfig {
    /// Load `.env` (if present) and then read the environment
    pub fn load() -> Result<Self, AppError> {
        dotenv::dotenv().ok();
        Self::from_env()
    }

    /// Read configuration from the process environment only
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Self::default();

        if let Some(filter) = read_var(ENV_LOG) {
            config.log_filter = filter;
        }
        if let Some(format) = read_var(ENV_LOG_FORMAT) {
            config.log_format = format.parse()?;
        }
        if let Some(output) = read_var(ENV_OUTPUT) {
            config.output = output.parse()?;
        }
        if let Some(max) = read_var(ENV_MAX_INPUT_BYTES) {
            config.max_input_bytes = max.trim().parse().map_err(|e| {
                AppError::Config(format!("{}: invalid byte count '{}': {}", ENV_MAX_INPUT_BYTES, max, e))
            })?;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Unset and empty variables are treated the same
fn read_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
