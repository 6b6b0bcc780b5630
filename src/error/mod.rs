//! Error module for Ala.
//!
//! Each component defines its own `thiserror` enum; `AlaError` gathers them so
//! application code can propagate any of them with `?`.

use thiserror::Error;

pub mod config;

pub use crate::data_structures::ala_trie::AlaTrieError;

/// Result type alias used throughout Ala.
pub type AlaResult<T> = Result<T, AlaError>;

/// Core error enum for Ala.
#[derive(Error, Debug)]
pub enum AlaError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors returned by trie operations.
    #[error("Trie error: {0}")]
    Trie(#[from] AlaTrieError),

    /// IO errors, e.g. while printing a trie.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}
