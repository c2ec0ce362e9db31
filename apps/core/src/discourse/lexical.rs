//! Lexical Chains.
//!
//! Word frequency counting over the whole text. Words that repeat and are
//! longer than a few characters form the lexical chain, a rough signal of
//! topical cohesion.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

// Letters, numbers and underscore only: combining marks split words
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}_]+").expect("Invalid regex: word pattern"));

/// A word needs strictly more occurrences than this to join the chain
const MIN_CHAIN_COUNT: usize = 1;

/// A word needs strictly more characters than this to join the chain
const MIN_CHAIN_WORD_LEN: usize = 3;

/// Occurrence count of a single word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

/// Result of lexical analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexicalProfile {
    /// All lowercase word tokens, in text order
    pub words: Vec<String>,
    /// Word counts in first-seen order
    pub frequencies: Vec<WordFrequency>,
    /// Repeated words longer than three characters, in first-seen order
    pub chain: Vec<String>,
}

impl LexicalProfile {
    /// Occurrence count of a word (0 when absent)
    pub fn count(&self, word: &str) -> usize {
        self.frequencies
            .iter()
            .find(|f| f.word == word)
            .map(|f| f.count)
            .unwrap_or(0)
    }

    /// Chain words paired with their counts
    pub fn chain_entries(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.chain.iter().map(|w| (w.as_str(), self.count(w)))
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

/// Frequency-based lexical analyzer
#[derive(Debug, Default, Clone, Copy)]
pub struct LexicalAnalyzer;

impl LexicalAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Lowercase the text and extract alphanumeric tokens
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        WORD_PATTERN
            .find_iter(&lower)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Count occurrences, preserving first-seen order
    pub fn frequencies(&self, words: &[String]) -> Vec<WordFrequency> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut freq: Vec<WordFrequency> = Vec::new();

        for word in words {
            match index.get(word.as_str()) {
                Some(&i) => freq[i].count += 1,
                None => {
                    index.insert(word.as_str(), freq.len());
                    freq.push(WordFrequency {
                        word: word.clone(),
                        count: 1,
                    });
                }
            }
        }

        freq
    }

    /// Derive the lexical chain from a frequency table
    pub fn chain(&self, frequencies: &[WordFrequency]) -> Vec<String> {
        frequencies
            .iter()
            .filter(|f| f.count > MIN_CHAIN_COUNT && f.word.chars().count() > MIN_CHAIN_WORD_LEN)
            .map(|f| f.word.clone())
            .collect()
    }

    /// Full lexical analysis of a text
    pub fn analyze(&self, text: &str) -> LexicalProfile {
        let words = self.tokenize(text);
        let frequencies = self.frequencies(&words);
        let chain = self.chain(&frequencies);

        LexicalProfile {
            words,
            frequencies,
            chain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_threshold() {
        let profile = LexicalAnalyzer::new().analyze("test test test short");

        assert_eq!(profile.chain, vec!["test"]);
        assert_eq!(profile.count("test"), 3);
        assert_eq!(profile.count("short"), 1);
        assert_eq!(profile.count("absent"), 0);
    }

    #[test]
    fn test_short_words_excluded() {
        // "the" repeats but is only three characters long
        let profile = LexicalAnalyzer::new().analyze("the cat and the dog");
        assert!(profile.chain.is_empty());
    }

    #[test]
    fn test_first_seen_order() {
        let profile =
            LexicalAnalyzer::new().analyze("Water flows. River water. Stone river. Stone.");
        assert_eq!(profile.chain, vec!["water", "river", "stone"]);

        let words: Vec<&str> = profile.frequencies.iter().map(|f| f.word.as_str()).collect();
        assert_eq!(words, vec!["water", "flows", "river", "stone"]);
    }

    #[test]
    fn test_case_folding_and_punctuation() {
        let profile = LexicalAnalyzer::new().analyze("Rust, RUST; rust!");
        assert_eq!(profile.words, vec!["rust", "rust", "rust"]);
        assert_eq!(profile.count("rust"), 3);
    }

    #[test]
    fn test_unicode_length_in_chars() {
        // Four characters, more than four bytes
        let profile = LexicalAnalyzer::new().analyze("été été");
        assert!(profile.chain.is_empty());

        let profile = LexicalAnalyzer::new().analyze("vède vède");
        assert_eq!(profile.chain, vec!["vède"]);
    }

    #[test]
    fn test_combining_marks_split_words() {
        // The virama in "सत्य" is a combining mark, not a letter
        let profile = LexicalAnalyzer::new().analyze("सत्य सत्य");
        assert_eq!(profile.words, vec!["सत", "य", "सत", "य"]);
        assert!(profile.chain.is_empty());

        // Decomposed acute accent drops out of the token
        let profile = LexicalAnalyzer::new().analyze("cafe\u{301} cafe\u{301}");
        assert_eq!(profile.words, vec!["cafe", "cafe"]);
        assert_eq!(profile.chain, vec!["cafe"]);
    }

    #[test]
    fn test_chain_entries() {
        let profile = LexicalAnalyzer::new().analyze("karma karma dharma dharma dharma");
        let entries: Vec<(&str, usize)> = profile.chain_entries().collect();
        assert_eq!(entries, vec![("karma", 2), ("dharma", 3)]);
        assert_eq!(profile.word_count(), 5);
    }
}
