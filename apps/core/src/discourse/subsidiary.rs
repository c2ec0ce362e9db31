//! Six Mimamsa Tests of a Subsidiary.
//!
//! Sruthi, Linga, Vakya, Prakarna, Sthana and Samakhya, each reduced to a
//! fixed surface heuristic over the text or its derived collections.
//! The table order is part of the output contract.

use serde::{Deserialize, Serialize};

use super::whitespace;

/// Result of one named test
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    pub test_name: String,
    pub passed: bool,
    pub message: String,
}

impl TestResult {
    fn pass(name: &str, message: &str) -> Self {
        Self {
            test_name: name.to_string(),
            passed: true,
            message: message.to_string(),
        }
    }

    fn fail(name: &str, message: &str) -> Self {
        Self {
            test_name: name.to_string(),
            passed: false,
            message: message.to_string(),
        }
    }
}

/// Inputs shared by every test
struct Evidence<'a> {
    text: &'a str,
    text_lower: String,
    segments: &'a [String],
    chain: &'a [String],
}

struct SubsidiaryTest {
    name: &'static str,
    predicate: fn(&Evidence<'_>) -> bool,
    pass_message: &'static str,
    fail_message: &'static str,
}

const INDICATIVE_MARKERS: &[&str] = &["thus", "therefore"];

const SUBSIDIARY_TESTS: &[SubsidiaryTest] = &[
    SubsidiaryTest {
        name: "Sruthi",
        predicate: |e| e.text_lower.contains("veda"),
        pass_message: "Direct scriptural statement detected.",
        fail_message: "No direct scriptural element.",
    },
    SubsidiaryTest {
        name: "Linga",
        predicate: |e| INDICATIVE_MARKERS.iter().any(|m| e.text_lower.contains(*m)),
        pass_message: "Indicative intention markers found.",
        fail_message: "No strong indicators.",
    },
    SubsidiaryTest {
        name: "Vakya",
        predicate: |e| !e.segments.is_empty(),
        pass_message: "Syntactically complete sentences present.",
        fail_message: "Incomplete discourse.",
    },
    SubsidiaryTest {
        name: "Prakarna",
        predicate: |e| e.segments.len() > 1,
        pass_message: "Context inferred from multiple sentences.",
        fail_message: "Limited context.",
    },
    SubsidiaryTest {
        name: "Sthana",
        predicate: |e| e.text == whitespace::normalize(e.text),
        pass_message: "Order and sequence maintained.",
        fail_message: "Formatting issues.",
    },
    SubsidiaryTest {
        name: "Samakhya",
        predicate: |e| !e.chain.is_empty(),
        pass_message: "Consistent naming terms found.",
        fail_message: "No repetition detected.",
    },
];

/// Names of the six tests in output order
pub fn test_names() -> impl Iterator<Item = &'static str> {
    SUBSIDIARY_TESTS.iter().map(|t| t.name)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SubsidiaryTests;

impl SubsidiaryTests {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate all six tests in their fixed order
    pub fn evaluate(&self, text: &str, segments: &[String], chain: &[String]) -> Vec<TestResult> {
        let evidence = Evidence {
            text,
            text_lower: text.to_lowercase(),
            segments,
            chain,
        };

        SUBSIDIARY_TESTS
            .iter()
            .map(|test| {
                if (test.predicate)(&evidence) {
                    TestResult::pass(test.name, test.pass_message)
                } else {
                    TestResult::fail(test.name, test.fail_message)
                }
            })
            .collect()
    }
}
