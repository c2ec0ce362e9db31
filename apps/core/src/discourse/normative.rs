//! Mimamsa Sentence Classification.
//!
//! Sorts segments into injunctions, permissions and the rest, using modal
//! verbs as markers. Same priority-rule shape as the rhetorical classifier.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::rules::{first_match, MarkerRule, RuleMatch};

/// Normative category of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Normative {
    /// Injunction (vidhi): must, should, shall
    #[serde(rename = "Obligatory Statement")]
    Obligatory,
    /// Permission: may, can
    #[serde(rename = "Non-Obligatory Statement")]
    NonObligatory,
    /// Everything else
    #[serde(rename = "Procedural or Descriptive")]
    ProceduralOrDescriptive,
}

impl fmt::Display for Normative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Normative {
    pub fn label(&self) -> &'static str {
        match self {
            Normative::Obligatory => "Obligatory Statement",
            Normative::NonObligatory => "Non-Obligatory Statement",
            Normative::ProceduralOrDescriptive => "Procedural or Descriptive",
        }
    }
}

const NORMATIVE_RULES: &[MarkerRule<Normative>] = &[
    MarkerRule {
        label: Normative::Obligatory,
        markers: &["must", "should", "shall"],
    },
    MarkerRule {
        label: Normative::NonObligatory,
        markers: &["may", "can"],
    },
];

/// Normative classifier over single segments
#[derive(Debug, Clone, Copy)]
pub struct NormativeClassifier {
    rules: &'static [MarkerRule<Normative>],
}

impl Default for NormativeClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl NormativeClassifier {
    pub fn new() -> Self {
        Self {
            rules: NORMATIVE_RULES,
        }
    }

    pub fn classify(&self, segment: &str) -> Normative {
        self.classify_detailed(segment).label
    }

    pub fn classify_detailed(&self, segment: &str) -> RuleMatch<Normative> {
        first_match(self.rules, Normative::ProceduralOrDescriptive, segment)
    }
}
