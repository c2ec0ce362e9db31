//! Test Module
//!
//! Crate-level test suite for DiscoMind core.
//!
//! ## Test Categories
//! - `discourse_tests`: Segmentation, lexical chains, classifiers, checks, graphs
//! - `integration_tests`: Full analysis feeding every renderer
//! - `config_tests`: Environment-driven configuration
//! - `input_tests`: File input loading

pub mod discourse_tests;
