//! Test modules for Ala.
//!
//! This module contains the crate-internal test suites:
//! - Contract tests run against every trie backend
//! - Property-based tests using proptest
//! - Configuration loading tests
//! - Shared strategies and fixtures


// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{scenario_words, word_strategy, Backend, SCENARIO};
