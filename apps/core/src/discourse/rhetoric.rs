//! Rhetorical Intent Classification.
//!
//! Assigns each segment a coarse rhetorical role from discourse markers.
//! No parsing and no model: marker containment in fixed priority order.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::rules::{first_match, MarkerRule, RuleMatch};

/// Rhetorical role of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Causal connective (because, since, therefore)
    #[serde(rename = "Cause-Effect")]
    CauseEffect,
    /// Concessive or adversative connective (however, but, although)
    #[serde(rename = "Contrast")]
    Contrast,
    /// Exemplification (for example, such as)
    #[serde(rename = "Elaboration")]
    Elaboration,
    /// Default
    #[serde(rename = "Statement")]
    Statement,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Intent {
    /// Returns the human-readable label for the intent
    pub fn label(&self) -> &'static str {
        match self {
            Intent::CauseEffect => "Cause-Effect",
            Intent::Contrast => "Contrast",
            Intent::Elaboration => "Elaboration",
            Intent::Statement => "Statement",
        }
    }
}

/// Marker table, highest priority first
const INTENT_RULES: &[MarkerRule<Intent>] = &[
    MarkerRule {
        label: Intent::CauseEffect,
        markers: &["because", "since", "therefore"],
    },
    MarkerRule {
        label: Intent::Contrast,
        markers: &["however", "but", "although"],
    },
    MarkerRule {
        label: Intent::Elaboration,
        markers: &["for example", "such as"],
    },
];

/// Rhetorical classifier over single segments
#[derive(Debug, Clone, Copy)]
pub struct RhetoricalClassifier {
    rules: &'static [MarkerRule<Intent>],
}

impl Default for RhetoricalClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl RhetoricalClassifier {
    pub fn new() -> Self {
        Self {
            rules: INTENT_RULES,
        }
    }

    /// Classify a segment
    pub fn classify(&self, segment: &str) -> Intent {
        self.classify_detailed(segment).label
    }

    /// Classify a segment and report which marker fired
    pub fn classify_detailed(&self, segment: &str) -> RuleMatch<Intent> {
        first_match(self.rules, Intent::Statement, segment)
    }
}
