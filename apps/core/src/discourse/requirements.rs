//! Sentence Requirement Checks (Akanksha, Sannidhi, Yogyata).
//!
//! Three threshold checks standing in for the classical conditions of
//! sentence meaning: expectancy, proximity and compatibility.

use serde::{Deserialize, Serialize};

/// More words than this satisfies Akanksha
const AKANKSHA_MIN_WORDS: usize = 5;

/// More segments than this satisfies Sannidhi
const SANNIDHI_MIN_SEGMENTS: usize = 1;

/// Result of a single requirement check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementCheck {
    pub name: String,
    /// English gloss of the requirement
    pub gloss: String,
    pub satisfied: bool,
    pub message: String,
}

impl RequirementCheck {
    fn evaluate(name: &str, gloss: &str, satisfied: bool, pass: &str, fail: &str) -> Self {
        Self {
            name: name.to_string(),
            gloss: gloss.to_string(),
            satisfied,
            message: if satisfied { pass } else { fail }.to_string(),
        }
    }
}

/// The three requirement checks of an analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementReport {
    pub akanksha: RequirementCheck,
    pub sannidhi: RequirementCheck,
    pub yogyata: RequirementCheck,
}

impl RequirementReport {
    /// Checks in display order
    pub fn checks(&self) -> [&RequirementCheck; 3] {
        [&self.akanksha, &self.sannidhi, &self.yogyata]
    }

    pub fn all_satisfied(&self) -> bool {
        self.checks().iter().all(|c| c.satisfied)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RequirementChecker;

impl RequirementChecker {
    pub fn new() -> Self {
        Self
    }

    pub fn check(&self, segments: &[String], words: &[String], chain: &[String]) -> RequirementReport {
        RequirementReport {
            akanksha: RequirementCheck::evaluate(
                "Akanksha",
                "Expectation",
                words.len() > AKANKSHA_MIN_WORDS,
                "Satisfied",
                "Possibly Unsatisfied",
            ),
            sannidhi: RequirementCheck::evaluate(
                "Sannidhi",
                "Proximity",
                segments.len() > SANNIDHI_MIN_SEGMENTS,
                "Contextually Connected",
                "Weak Connection",
            ),
            yogyata: RequirementCheck::evaluate(
                "Yogyata",
                "Compatibility",
                !chain.is_empty(),
                "Semantically Compatible",
                "Limited Cohesion",
            ),
        }
    }
}
