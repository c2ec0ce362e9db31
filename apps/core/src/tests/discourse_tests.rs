//! Discourse Module Tests
//!
//! Tests for segmentation, lexical chains, both classifiers, the requirement
//! checks, the six tests and the graph builders, through the public API.

use crate::discourse::{
    DiscourseAnalyzer, GraphBuilder, GraphKind, Intent, LexicalAnalyzer, Normative,
    NormativeClassifier, RequirementChecker, RhetoricalClassifier, Segmenter, SubsidiaryTests,
    STRUCTURE_ROOT,
};

#[cfg(test)]
mod segmenter_tests {
    use super::*;

    #[test]
    fn test_mixed_terminators() {
        let segmenter = Segmenter::new();
        assert_eq!(segmenter.split("A. B! C?"), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_runs_of_punctuation() {
        let segmenter = Segmenter::new();
        let segments = segmenter.split("Wait... What?! Yes.");
        assert_eq!(segments, vec!["Wait", "What", "Yes"]);
    }

    #[test]
    fn test_newlines_inside_segment_kept() {
        let segmenter = Segmenter::new();
        let segments = segmenter.split("Line one\nline two. Next");
        assert_eq!(segments, vec!["Line one\nline two", "Next"]);
    }
}

#[cfg(test)]
mod lexical_tests {
    use super::*;

    #[test]
    fn test_chain_contains_repeated_long_words() {
        let profile = LexicalAnalyzer::new().analyze("test test test short");
        assert!(profile.chain.contains(&"test".to_string()));
        assert!(!profile.chain.contains(&"short".to_string()));
        assert_eq!(profile.count("test"), 3);
    }

    #[test]
    fn test_underscore_and_digits_are_word_chars() {
        let profile = LexicalAnalyzer::new().analyze("rule_42 rule_42 2024 2024");
        assert_eq!(profile.chain, vec!["rule_42", "2024"]);
    }

    #[test]
    fn test_apostrophes_split_words() {
        let profile = LexicalAnalyzer::new().analyze("Agni's fire");
        assert_eq!(profile.words, vec!["agni", "s", "fire"]);
    }
}

#[cfg(test)]
mod classifier_tests {
    use super::*;

    #[test]
    fn test_rhetorical_examples() {
        let classifier = RhetoricalClassifier::new();

        let cases = vec![
            ("It failed because of rain", Intent::CauseEffect),
            ("Since dawn, the fire burns", Intent::CauseEffect),
            ("Although small, it is bright", Intent::Contrast),
            ("Offerings such as ghee", Intent::Elaboration),
            ("It was good", Intent::Statement),
        ];

        for (segment, expected) in cases {
            assert_eq!(
                classifier.classify(segment),
                expected,
                "Expected {:?} for '{}'",
                expected,
                segment
            );
        }
    }

    #[test]
    fn test_normative_examples() {
        let classifier = NormativeClassifier::new();

        let cases = vec![
            ("You must comply", Normative::Obligatory),
            ("One should bathe first", Normative::Obligatory),
            ("You may leave", Normative::NonObligatory),
            ("The hymn is long", Normative::ProceduralOrDescriptive),
        ];

        for (segment, expected) in cases {
            assert_eq!(
                classifier.classify(segment),
                expected,
                "Expected {:?} for '{}'",
                expected,
                segment
            );
        }
    }

    #[test]
    fn test_normative_labels_match_report_wording() {
        assert_eq!(Normative::Obligatory.label(), "Obligatory Statement");
        assert_eq!(Normative::NonObligatory.label(), "Non-Obligatory Statement");
        assert_eq!(
            Normative::ProceduralOrDescriptive.label(),
            "Procedural or Descriptive"
        );
    }
}

#[cfg(test)]
mod requirement_tests {
    use super::*;

    #[test]
    fn test_requirements_from_analysis() {
        let text = "Agni is the priest of the rite. Agni brings the gods here.";
        let lexical = LexicalAnalyzer::new().analyze(text);
        let segments = Segmenter::new().split(text);

        let report = RequirementChecker::new().check(&segments, &lexical.words, &lexical.chain);

        assert!(report.akanksha.satisfied);
        assert!(report.sannidhi.satisfied);
        assert!(report.yogyata.satisfied);
        assert_eq!(report.yogyata.message, "Semantically Compatible");
    }
}

#[cfg(test)]
mod subsidiary_tests {
    use super::*;

    #[test]
    fn test_all_six_pass() {
        let text = "The Veda teaches the rite. Thus the rite is done.";
        let segments = Segmenter::new().split(text);
        let chain = LexicalAnalyzer::new().analyze(text).chain;

        let results = SubsidiaryTests::new().evaluate(text, &segments, &chain);

        assert_eq!(results.len(), 6);
        assert!(
            results.iter().all(|r| r.passed),
            "Unexpected failures: {:?}",
            results.iter().filter(|r| !r.passed).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_sthana_flags_double_space() {
        let text = "One.  Two.";
        let results = SubsidiaryTests::new().evaluate(text, &Segmenter::new().split(text), &[]);
        let sthana = results.iter().find(|r| r.test_name == "Sthana").unwrap();

        assert!(!sthana.passed);
        assert_eq!(sthana.message, "Formatting issues.");
    }
}

#[cfg(test)]
mod graph_tests {
    use super::*;

    #[test]
    fn test_structure_edges_match_segments() {
        let analyzer = DiscourseAnalyzer::new();
        let report = analyzer.analyze("One. Two. Three. Four.").unwrap();

        let graph = &report.structure_graph;
        assert_eq!(graph.kind, GraphKind::Structure);
        assert_eq!(graph.edge_count(), report.segments.len());
        assert!(graph
            .labelled_edges()
            .all(|(from, _)| from == STRUCTURE_ROOT));
    }

    #[test]
    fn test_cohesion_pair_count() {
        let chain: Vec<String> = ["agni", "soma", "indra", "varuna", "mitra"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let graph = GraphBuilder::new().cohesion(&chain);

        assert_eq!(graph.kind, GraphKind::Cohesion);
        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.edge_count(), 10);
        assert!(graph.edges.iter().all(|&(a, b)| a < b));
    }
}
