//! # Discourse Module
//!
//! Rule-based discourse analysis: Western discourse analysis (segments,
//! lexical cohesion, rhetorical intent) alongside Mimamsa principles
//! (sentence classification, requirement checks, tests of a subsidiary).
//! No models, no datasets: fixed marker tables and thresholds.
//!
//! ## Components
//! - `segmenter`: Sentence segmentation on terminal punctuation
//! - `lexical`: Word frequencies and lexical chains
//! - `rules`: Priority-ordered marker rules shared by the classifiers
//! - `rhetoric`: Rhetorical intent per segment
//! - `normative`: Mimamsa sentence classification per segment
//! - `requirements`: Akanksha, Sannidhi, Yogyata
//! - `subsidiary`: The six tests of a subsidiary
//! - `whitespace`: Trimming and normalization rules
//! - `graph`: Structure and cohesion graph data
//! - `report`: Output data structure
//! - `analyzer`: Main orchestrator

pub mod analyzer;
pub mod graph;
pub mod lexical;
pub mod normative;
pub mod report;
pub mod requirements;
pub mod rhetoric;
pub mod rules;
pub mod segmenter;
pub mod subsidiary;
pub mod whitespace;

// Re-export main types for convenience
pub use analyzer::DiscourseAnalyzer;
pub use graph::{GraphBuilder, GraphKind, GraphSpec, STRUCTURE_ROOT};
pub use lexical::{LexicalAnalyzer, LexicalProfile, WordFrequency};
pub use normative::{Normative, NormativeClassifier};
pub use report::{DiscourseReport, SegmentRecord};
pub use requirements::{RequirementCheck, RequirementChecker, RequirementReport};
pub use rhetoric::{Intent, RhetoricalClassifier};
pub use rules::RuleMatch;
pub use segmenter::Segmenter;
pub use subsidiary::{SubsidiaryTests, TestResult};
