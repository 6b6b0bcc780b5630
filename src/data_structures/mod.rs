//! Data structures provided by Ala.
//!
//! Currently this is the Ala Trie, a string-keyed prefix tree with
//! interchangeable sparse and dense node backends.

pub mod ala_trie;

// Re-export common data structures
pub use ala_trie::{AlaTrie, AlaTrieError, AlaTrieResult, DenseTrie, SharedTrie, SparseTrie};
