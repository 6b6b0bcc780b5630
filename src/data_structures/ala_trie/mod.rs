//! Ala Trie Implementation
//!
//! A string-keyed associative container with exact lookup, prefix
//! enumeration ("autocomplete"), insert-or-update and removal. Each edge of
//! the tree carries exactly one character.
//!
//! Two node representations implement the same [`AlaTrie`] contract:
//!
//! * [`SparseTrie`]: children in an ordered map, any `char` may appear in a key.
//! * [`DenseTrie`]: children in a fixed array of 26 slots indexed by
//!   `character - 'a'`; only lowercase ASCII letters can be stored and any
//!   other character is rejected on insert.
//!
//! Both backends mark terminal nodes with an `Option` payload and detach
//! removed nodes from their parent, so they can be swapped without any
//! change in observable behaviour over the `a..=z` alphabet.
//!
//! # Example
//!
//! ```
//! use ala::data_structures::ala_trie::{AlaTrie, DenseTrie, SparseTrie};
//!
//! let mut trie = SparseTrie::new();
//! trie.add_word("ball", "ball").unwrap();
//! trie.add_word("bat", "bat").unwrap();
//! trie.add_word("bat", "RENAMED").unwrap();
//!
//! assert_eq!(trie.translate("bat"), Some(&"RENAMED"));
//! assert_eq!(trie.auto_complete("ba"), vec![&"ball", &"RENAMED"]);
//!
//! // The dense backend only stores lowercase ASCII letters.
//! let mut dense: DenseTrie<u32> = DenseTrie::new();
//! assert!(dense.add_word("Ball", 1).is_err());
//! ```

mod arena;
mod config;
mod dense;
mod engine;
mod error;
mod node;
mod shared;
mod sparse;

use std::fmt::Display;
use std::io;

pub use config::{AlaTrieConfig, EmptyPrefixPolicy};
pub use dense::{DenseNode, ALPHABET_BASE, ALPHABET_SIZE};
pub use engine::TrieEngine;
pub use error::{AlaTrieError, AlaTrieResult};
pub use node::{NodeId, TrieNode};
pub use shared::SharedTrie;
pub use sparse::SparseNode;

/// Trie backed by ordered-map nodes. Accepts any `char`.
pub type SparseTrie<V> = TrieEngine<SparseNode<V>>;

/// Trie backed by fixed 26-slot array nodes. Accepts `a..=z` only.
pub type DenseTrie<V> = TrieEngine<DenseNode<V>>;

/// Operations shared by every Ala Trie backend.
///
/// The trait is object safe, so callers can hold a
/// `Box<dyn AlaTrie<Value = V>>` and pick the backend at runtime.
pub trait AlaTrie {
    /// Payload stored under each key.
    type Value;

    /// Inserts `value` under `key`, replacing any previous value.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The key was new.
    /// * `Ok(false)` - The key existed and its value was replaced.
    /// * `Err(AlaTrieError)` - The key is empty, too long, or contains a
    ///   character the backend cannot store. Nothing was modified.
    fn add_word(&mut self, key: &str, value: Self::Value) -> AlaTrieResult<bool>;

    /// Removes `key`, returning `true` if it was stored.
    ///
    /// Keys that extend `key` are kept. Absent keys, strict prefixes of
    /// stored keys and the empty key return `false` without mutation.
    fn remove(&mut self, key: &str) -> bool;

    /// Returns the value stored under exactly `key`.
    fn translate(&self, key: &str) -> Option<&Self::Value>;

    /// Returns the values of every key starting with `prefix`, depth-first in
    /// ascending character order. An empty prefix follows the configured
    /// [`EmptyPrefixPolicy`].
    fn auto_complete(&self, prefix: &str) -> Vec<&Self::Value>;

    /// Returns every stored `(key, value)` pair in traversal order.
    fn entries(&self) -> Vec<(String, &Self::Value)>;

    /// Removes every key starting with `prefix` and returns how many were
    /// removed. An empty prefix clears the trie.
    fn remove_prefix(&mut self, prefix: &str) -> usize;

    /// Whether `key` is stored.
    fn contains_key(&self, key: &str) -> bool;

    /// Number of stored keys.
    fn len(&self) -> usize;

    /// Whether no key is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of live nodes, root included.
    fn node_count(&self) -> usize;

    /// Removes every key.
    fn clear(&mut self);
}

/// Printing support for tries whose values implement [`Display`].
pub trait TriePrint: AlaTrie {
    /// Writes one `[key, value]` line per stored entry, in traversal order.
    fn print(&self, out: &mut dyn io::Write) -> io::Result<()>;
}

impl<T> TriePrint for T
where
    T: AlaTrie + ?Sized,
    T::Value: Display,
{
    fn print(&self, out: &mut dyn io::Write) -> io::Result<()> {
        for (key, value) in self.entries() {
            writeln!(out, "[{key}, {value}]")?;
        }
        Ok(())
    }
}
