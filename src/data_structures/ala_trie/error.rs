// Copyright (c) 2025 Ala Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Ala Trie.
//!
//! Only insertion can fail. Lookups and removals of absent keys are normal
//! outcomes and are reported through `Option`, `bool` or an empty result.

/// Errors that can occur in Ala Trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum AlaTrieError {
    /// Error when an empty key is provided.
    #[error("Empty key not allowed")]
    EmptyKey,

    /// Error when a key has more characters than the configured maximum.
    #[error("Key '{key}' exceeds maximum key length of {max_length}")]
    KeyTooLong {
        /// The key that was too long.
        key: String,
        /// The maximum allowed length in characters.
        max_length: usize,
    },

    /// Error when a key contains a character the backend cannot store.
    #[error("Character {character:?} in key '{key}' is outside the {backend} backend alphabet")]
    CharacterOutOfRange {
        /// The rejected character.
        character: char,
        /// The key containing it.
        key: String,
        /// Name of the backend that rejected it.
        backend: &'static str,
    },
}

/// Result type for Ala Trie operations
pub type AlaTrieResult<T> = std::result::Result<T, AlaTrieError>;
