// Copyright (c) 2025 Ala Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the Ala Trie.

use serde::{Deserialize, Serialize};

/// What `auto_complete` returns for an empty prefix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyPrefixPolicy {
    /// An empty prefix matches nothing.
    #[default]
    NoMatches,

    /// An empty prefix matches every stored entry.
    AllEntries,
}

/// Configuration options for the Ala Trie.
///
/// Both backends read the same options. The struct is also the `[trie]`
/// section of [`AlaConfig`](crate::config::AlaConfig), so every field has a
/// serde default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlaTrieConfig {
    /// Whether keys are matched case-sensitively
    pub case_sensitive: bool,

    /// Maximum key length in characters
    pub max_key_length: usize,

    /// Behaviour of `auto_complete("")`
    pub empty_prefix: EmptyPrefixPolicy,

    /// Whether removal also detaches ancestors left without children or value
    pub prune_on_remove: bool,
}

impl AlaTrieConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - case_sensitive: true
    /// - max_key_length: 256
    /// - empty_prefix: `NoMatches`
    /// - prune_on_remove: true
    pub fn new() -> Self {
        Self {
            case_sensitive: true,
            max_key_length: 256,
            empty_prefix: EmptyPrefixPolicy::NoMatches,
            prune_on_remove: true,
        }
    }

    /// Set whether keys are matched case-sensitively.
    ///
    /// When disabled, keys and prefixes are lowercased before the walk, which
    /// also lets the dense backend accept uppercase ASCII input.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Set the maximum key length in characters.
    pub fn with_max_key_length(mut self, max_key_length: usize) -> Self {
        self.max_key_length = max_key_length;
        self
    }

    /// Set what an empty prefix matches in `auto_complete`.
    pub fn with_empty_prefix(mut self, policy: EmptyPrefixPolicy) -> Self {
        self.empty_prefix = policy;
        self
    }

    /// Set whether removal prunes dead ancestor nodes.
    pub fn with_prune_on_remove(mut self, prune_on_remove: bool) -> Self {
        self.prune_on_remove = prune_on_remove;
        self
    }
}

impl Default for AlaTrieConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides_defaults() {
        let config = AlaTrieConfig::new()
            .with_case_sensitive(false)
            .with_max_key_length(8)
            .with_empty_prefix(EmptyPrefixPolicy::AllEntries)
            .with_prune_on_remove(false);

        assert!(!config.case_sensitive);
        assert_eq!(config.max_key_length, 8);
        assert_eq!(config.empty_prefix, EmptyPrefixPolicy::AllEntries);
        assert!(!config.prune_on_remove);
        assert_ne!(config, AlaTrieConfig::default());
    }

    #[test]
    fn test_policy_serializes_snake_case() {
        let rendered = toml::to_string(&AlaTrieConfig::default()).unwrap();
        assert!(rendered.contains("empty_prefix = \"no_matches\""));

        let parsed: AlaTrieConfig = toml::from_str("empty_prefix = \"all_entries\"").unwrap();
        assert_eq!(parsed.empty_prefix, EmptyPrefixPolicy::AllEntries);
        assert!(parsed.case_sensitive);
    }
}
