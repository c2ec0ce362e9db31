//! Text Segmentation.
//!
//! Splits raw text into sentence-like segments on terminal punctuation.

use regex::Regex;
use std::sync::LazyLock;

use super::whitespace;

// NOTE: expect() is acceptable here: the pattern is a literal and cannot fail at runtime
static TERMINATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]").expect("Invalid regex: sentence terminators"));

/// Sentence segmenter based on `.`, `!` and `?`
#[derive(Debug, Default, Clone, Copy)]
pub struct Segmenter;

impl Segmenter {
    pub fn new() -> Self {
        Self
    }

    /// Split text into trimmed, non-empty segments in order of appearance
    pub fn split(&self, text: &str) -> Vec<String> {
        TERMINATORS
            .split(text)
            .map(whitespace::trim)
            .filter(|seg| !seg.is_empty())
            .map(str::to_string)
            .collect()
    }
}
