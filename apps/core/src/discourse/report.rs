//! Discourse Report - Output structure for a discourse analysis.
//!
//! Everything the renderers need, as plain serializable data.

use serde::{Deserialize, Serialize};

use super::graph::GraphSpec;
use super::lexical::WordFrequency;
use super::normative::Normative;
use super::requirements::RequirementReport;
use super::rhetoric::Intent;
use super::subsidiary::TestResult;

/// One classified segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentRecord {
    /// 1-based position in the text
    pub index: usize,
    pub text: String,
    pub intent: Intent,
    pub classification: Normative,
    /// Discourse marker behind `intent`, if any
    pub intent_marker: Option<String>,
    /// Modal marker behind `classification`, if any
    pub classification_marker: Option<String>,
}

/// Complete result of analyzing one text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscourseReport {
    /// Original input text
    pub text: String,

    /// Classified segments in text order
    pub segments: Vec<SegmentRecord>,

    /// Total word tokens
    pub word_count: usize,

    /// Word counts in first-seen order
    pub frequencies: Vec<WordFrequency>,

    /// Repeated words longer than three characters
    pub lexical_chain: Vec<String>,

    /// Akanksha, Sannidhi, Yogyata
    pub requirements: RequirementReport,

    /// The six tests of a subsidiary, in fixed order
    pub tests: Vec<TestResult>,

    /// Star graph: root to each segment
    pub structure_graph: GraphSpec,

    /// Complete graph over the lexical chain
    pub cohesion_graph: GraphSpec,
}

impl DiscourseReport {
    pub fn intents(&self) -> Vec<Intent> {
        self.segments.iter().map(|s| s.intent).collect()
    }

    pub fn classifications(&self) -> Vec<Normative> {
        self.segments.iter().map(|s| s.classification).collect()
    }

    pub fn has_cohesion_network(&self) -> bool {
        !self.lexical_chain.is_empty()
    }

    pub fn tests_passed(&self) -> usize {
        self.tests.iter().filter(|t| t.passed).count()
    }

    /// Get a summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Segments: {}, Words: {}, Chain: {}, Requirements: {}/3, Tests: {}/{}",
            self.segments.len(),
            self.word_count,
            self.lexical_chain.len(),
            self.requirements
                .checks()
                .iter()
                .filter(|c| c.satisfied)
                .count(),
            self.tests_passed(),
            self.tests.len()
        )
    }
}
