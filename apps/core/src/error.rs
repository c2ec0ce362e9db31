use std::io;
use thiserror::Error;

/// Message shown when an analysis is requested without any text.
pub const EMPTY_INPUT_WARNING: &str = "Please enter some text first.";

/// Application-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Error)]
pub enum AppError {
    /// The input was empty or whitespace-only; analysis was not attempted.
    #[error("Please enter some text first.")]
    EmptyInput,

    /// Represents data validation errors (e.g., input over the size cap).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., bad environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents input that cannot be read as plain text.
    #[error("Unsupported input: {0}")]
    UnsupportedInput(String),

    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents report serialization failures.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// True for the "no input provided" outcome.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, AppError::EmptyInput)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Config(format!("Validation errors: {}", err))
    }
}
