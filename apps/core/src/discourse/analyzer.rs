//! Discourse Analyzer - Main orchestrator for the discourse module.
//!
//! Runs segmentation, lexical analysis, both segment classifiers, the
//! requirement checks and the six tests, then builds the two graphs.
//! Every call is independent: the analyzer holds no per-text state.

use std::time::Instant;
use tracing::{debug, info, warn};

use super::graph::GraphBuilder;
use super::lexical::LexicalAnalyzer;
use super::normative::NormativeClassifier;
use super::report::{DiscourseReport, SegmentRecord};
use super::requirements::RequirementChecker;
use super::rhetoric::RhetoricalClassifier;
use super::segmenter::Segmenter;
use super::subsidiary::SubsidiaryTests;
use super::whitespace;
use crate::error::AppError;

/// Main analyzer that orchestrates all analysis components
#[derive(Debug, Clone, Default)]
pub struct DiscourseAnalyzer {
    segmenter: Segmenter,
    lexical: LexicalAnalyzer,
    rhetoric: RhetoricalClassifier,
    normative: NormativeClassifier,
    requirements: RequirementChecker,
    subsidiary: SubsidiaryTests,
    graphs: GraphBuilder,
}

impl DiscourseAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyze a text and produce a report.
    ///
    /// Empty or whitespace-only input is rejected with [`AppError::EmptyInput`]
    /// before any component runs.
    pub fn analyze(&self, text: &str) -> Result<DiscourseReport, AppError> {
        if whitespace::is_blank(text) {
            warn!("Analysis requested without text");
            return Err(AppError::EmptyInput);
        }

        let start = Instant::now();

        // 1. Segmentation
        let segments = self.segmenter.split(text);
        debug!(segments = segments.len(), "Segmented text");

        // 2. Lexical chains
        let lexical = self.lexical.analyze(text);
        debug!(
            words = lexical.word_count(),
            chain = lexical.chain.len(),
            "Built lexical profile"
        );

        // 3-4. Intent and normative classification per segment
        let records: Vec<SegmentRecord> = segments
            .iter()
            .enumerate()
            .map(|(i, segment)| {
                let intent = self.rhetoric.classify_detailed(segment);
                let normative = self.normative.classify_detailed(segment);
                SegmentRecord {
                    index: i + 1,
                    text: segment.clone(),
                    intent: intent.label,
                    classification: normative.label,
                    intent_marker: intent.marker.map(str::to_string),
                    classification_marker: normative.marker.map(str::to_string),
                }
            })
            .collect();

        // 5. Requirement checks
        let requirements = self
            .requirements
            .check(&segments, &lexical.words, &lexical.chain);

        // 6. Six tests
        let tests = self.subsidiary.evaluate(text, &segments, &lexical.chain);

        // 7. Graphs
        let intents: Vec<_> = records.iter().map(|r| r.intent).collect();
        let structure_graph = self.graphs.structure(&intents);
        let cohesion_graph = self.graphs.cohesion(&lexical.chain);

        let report = DiscourseReport {
            text: text.to_string(),
            segments: records,
            word_count: lexical.word_count(),
            frequencies: lexical.frequencies,
            lexical_chain: lexical.chain,
            requirements,
            tests,
            structure_graph,
            cohesion_graph,
        };

        info!(
            elapsed_us = start.elapsed().as_micros() as u64,
            "Discourse analysis completed. {}",
            report.summary()
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discourse::{Intent, Normative};

    #[test]
    fn test_empty_input_rejected() {
        let analyzer = DiscourseAnalyzer::new();
        assert!(analyzer.analyze("").unwrap_err().is_empty_input());
        assert!(analyzer.analyze("  \n\t").unwrap_err().is_empty_input());
        // Information separators count as blank too
        assert!(analyzer.analyze("\u{1c}").unwrap_err().is_empty_input());
        assert!(analyzer.analyze(" \u{1f}\n").unwrap_err().is_empty_input());
    }

    #[test]
    fn test_punctuation_only_input() {
        // Not blank, so analysis runs and yields no segments
        let report = DiscourseAnalyzer::new().analyze("?!").unwrap();
        assert!(report.segments.is_empty());
        assert_eq!(report.structure_graph.edge_count(), 0);
        assert!(!report.tests[2].passed);
    }

    #[test]
    fn test_basic_analysis() {
        let analyzer = DiscourseAnalyzer::new();
        let report = analyzer
            .analyze("You must light the fire. The fire burns because of ghee.")
            .unwrap();

        assert_eq!(report.segments.len(), 2);
        assert_eq!(report.intents(), vec![Intent::Statement, Intent::CauseEffect]);
        assert_eq!(
            report.classifications(),
            vec![Normative::Obligatory, Normative::ProceduralOrDescriptive]
        );
        assert_eq!(report.lexical_chain, vec!["fire"]);
        assert_eq!(report.segments[1].intent_marker.as_deref(), Some("because"));
        assert_eq!(report.structure_graph.edge_count(), 2);
        assert_eq!(report.cohesion_graph.edge_count(), 0);
    }

    #[test]
    fn test_idempotent() {
        let analyzer = DiscourseAnalyzer::new();
        let text = "Soma flows. Soma shines, but Agni burns. Agni may rest.";
        assert_eq!(analyzer.analyze(text).unwrap(), analyzer.analyze(text).unwrap());
    }
}
