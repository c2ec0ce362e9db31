//! DiscoMind core library.
//!
//! Rule-based discourse analysis: pass text in, get a [`DiscourseReport`]
//! back, hand it to a renderer.

pub mod config;
pub mod discourse;
pub mod error;
pub mod input;
pub mod render;
pub mod telemetry;

pub use config::{AppConfig, LogFormat, OutputFormat};
pub use discourse::{DiscourseAnalyzer, DiscourseReport};
pub use error::AppError;

/// Analyze `text` with a default analyzer
pub fn analyze(text: &str) -> Result<DiscourseReport, AppError> {
    DiscourseAnalyzer::new().analyze(text)
}

#[cfg(test)]
mod tests;
