//! Rendering collaborators for a [`DiscourseReport`].
//!
//! The analysis core knows nothing about presentation; each renderer here
//! turns the same report into one output format.

pub mod dot;
pub mod text;

use crate::config::OutputFormat;
use crate::discourse::DiscourseReport;
use crate::error::AppError;

/// Render a report in the requested format
pub fn render(report: &DiscourseReport, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(text::render_report(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)? + "\n"),
        OutputFormat::Dot => Ok(dot::render_graphs(report)),
    }
}
