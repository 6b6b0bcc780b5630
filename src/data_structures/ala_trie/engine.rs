// Copyright (c) 2025 Ala Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Trie engine shared by both node backends.

use std::borrow::Cow;
use std::fmt;

use tracing::{debug, trace, warn};

use super::arena::Arena;
use super::config::{AlaTrieConfig, EmptyPrefixPolicy};
use super::error::{AlaTrieError, AlaTrieResult};
use super::node::{NodeId, TrieNode};
use super::AlaTrie;

/// Ala Trie engine, generic over its node representation.
///
/// Use it through the [`SparseTrie`](super::SparseTrie) and
/// [`DenseTrie`](super::DenseTrie) aliases. All nodes live in an arena owned
/// by the engine; edges are arena handles.
///
/// Key features:
/// * One edge per character, no path compression
/// * Exact lookup, prefix enumeration, removal with dead-node pruning
/// * Key reconstruction through parent back-links
/// * Iterative traversals, so long keys cannot exhaust the call stack
pub struct TrieEngine<N: TrieNode> {
    /// Arena holding every node; the root sits at `NodeId::ROOT`
    nodes: Arena<N>,

    /// Number of stored keys
    len: usize,

    /// Configuration options
    config: AlaTrieConfig,
}

impl<N: TrieNode> TrieEngine<N> {
    /// Creates a new empty trie with default configuration.
    pub fn new() -> Self {
        Self::with_config(AlaTrieConfig::default())
    }

    /// Creates a new empty trie with the specified configuration.
    pub fn with_config(config: AlaTrieConfig) -> Self {
        Self {
            nodes: Arena::with_root(N::new(None, None)),
            len: 0,
            config,
        }
    }

    /// Returns the configuration this trie was built with.
    pub fn config(&self) -> &AlaTrieConfig {
        &self.config
    }

    /// Number of arena slots ever allocated. Stays flat under insert/remove
    /// churn because freed slots are reused.
    pub fn allocated_slots(&self) -> usize {
        self.nodes.slot_count()
    }

    /// Rebuilds the key spelled by the path from the root to `id`.
    pub fn build_key(&self, id: NodeId) -> String {
        let mut chars = Vec::new();
        let mut cursor = self.nodes.get(id);
        while let Some(node) = cursor {
            if let Some(c) = node.character() {
                chars.push(c);
            }
            cursor = node.parent().and_then(|parent| self.nodes.get(parent));
        }
        chars.iter().rev().collect()
    }

    fn normalize<'k>(&self, key: &'k str) -> Cow<'k, str> {
        if self.config.case_sensitive {
            Cow::Borrowed(key)
        } else {
            Cow::Owned(key.to_lowercase())
        }
    }

    fn validate_key(&self, key: &str) -> AlaTrieResult<()> {
        if key.is_empty() {
            return Err(AlaTrieError::EmptyKey);
        }
        if key.chars().count() > self.config.max_key_length {
            return Err(AlaTrieError::KeyTooLong {
                key: key.to_string(),
                max_length: self.config.max_key_length,
            });
        }
        if let Some(character) = key.chars().find(|c| !N::accepts(*c)) {
            return Err(AlaTrieError::CharacterOutOfRange {
                character,
                key: key.to_string(),
                backend: N::BACKEND,
            });
        }
        Ok(())
    }

    /// Follows `key` from the root. The walk stops at the first missing edge.
    fn find(&self, key: &str) -> Option<NodeId> {
        let mut current = NodeId::ROOT;
        for c in key.chars() {
            current = self.nodes.get(current)?.child(c)?;
        }
        Some(current)
    }

    /// Terminal nodes of the subtree at `start`: depth-first, a node before
    /// its children, children in ascending character order.
    fn terminals_from(&self, start: NodeId) -> Vec<NodeId> {
        self.subtree_from(start)
            .into_iter()
            .filter(|id| self.nodes.get(*id).is_some_and(N::is_terminal))
            .collect()
    }

    /// Every node of the subtree at `start`, in preorder.
    fn subtree_from(&self, start: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![start];
        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            order.push(id);
            // Reversed so the smallest character is popped first.
            stack.extend(node.children().rev());
        }
        order
    }

    /// Unlinks `id` from its parent and frees its slot. Returns the parent.
    fn detach(&mut self, id: NodeId) -> Option<NodeId> {
        let node = self.nodes.free(id)?;
        let parent = node.parent()?;
        if let (Some(c), Some(parent_node)) = (node.character(), self.nodes.get_mut(parent)) {
            parent_node.detach_child(c);
        }
        Some(parent)
    }

    /// Walks up from `start`, detaching ancestors that no longer carry a
    /// value or children. Stops at the root.
    fn prune_from(&mut self, start: NodeId) -> usize {
        let mut pruned = 0;
        let mut cursor = start;
        while cursor != NodeId::ROOT {
            let dead = self
                .nodes
                .get(cursor)
                .is_some_and(|node| !node.is_terminal() && !node.has_children());
            if !dead {
                break;
            }
            match self.detach(cursor) {
                Some(parent) => {
                    pruned += 1;
                    cursor = parent;
                }
                None => break,
            }
        }
        pruned
    }
}

impl<N: TrieNode> AlaTrie for TrieEngine<N> {
    type Value = N::Value;

    fn add_word(&mut self, key: &str, value: N::Value) -> AlaTrieResult<bool> {
        let key = self.normalize(key);
        if let Err(e) = self.validate_key(&key) {
            warn!(backend = N::BACKEND, error = %e, "Rejected key");
            return Err(e);
        }

        // Traverse the trie, creating nodes as needed
        let mut current = NodeId::ROOT;
        for c in key.chars() {
            let existing = self.nodes.get(current).and_then(|node| node.child(c));
            current = match existing {
                Some(child) => child,
                None => {
                    let child = self.nodes.alloc(N::new(Some(c), Some(current)));
                    if let Some(node) = self.nodes.get_mut(current) {
                        node.attach_child(c, child);
                    }
                    child
                }
            };
        }

        let replaced = self
            .nodes
            .get_mut(current)
            .and_then(|node| node.set_value(value))
            .is_some();
        if !replaced {
            self.len += 1;
        }
        trace!(backend = N::BACKEND, key = %key, replaced, "Stored key");
        Ok(!replaced)
    }

    fn remove(&mut self, key: &str) -> bool {
        let key = self.normalize(key);
        if key.is_empty() {
            return false;
        }
        let Some(id) = self.find(&key) else {
            return false;
        };
        let Some(node) = self.nodes.get_mut(id) else {
            return false;
        };
        if node.take_value().is_none() {
            return false;
        }
        self.len -= 1;

        // Keys extending this one still need the node.
        if node.has_children() {
            debug!(backend = N::BACKEND, key = %key, "Removed key, node kept for descendants");
            return true;
        }

        let parent = self.detach(id);
        let pruned = match parent {
            Some(parent) if self.config.prune_on_remove => self.prune_from(parent),
            _ => 0,
        };
        debug!(backend = N::BACKEND, key = %key, pruned, "Removed key");
        true
    }

    fn translate(&self, key: &str) -> Option<&N::Value> {
        let key = self.normalize(key);
        if key.is_empty() {
            return None;
        }
        self.nodes.get(self.find(&key)?)?.value()
    }

    fn auto_complete(&self, prefix: &str) -> Vec<&N::Value> {
        let prefix = self.normalize(prefix);
        let start = if prefix.is_empty() {
            match self.config.empty_prefix {
                EmptyPrefixPolicy::NoMatches => return Vec::new(),
                EmptyPrefixPolicy::AllEntries => NodeId::ROOT,
            }
        } else {
            match self.find(&prefix) {
                Some(id) => id,
                None => return Vec::new(),
            }
        };

        self.terminals_from(start)
            .into_iter()
            .filter_map(|id| self.nodes.get(id)?.value())
            .collect()
    }

    fn entries(&self) -> Vec<(String, &N::Value)> {
        self.terminals_from(NodeId::ROOT)
            .into_iter()
            .filter_map(|id| Some((self.build_key(id), self.nodes.get(id)?.value()?)))
            .collect()
    }

    fn remove_prefix(&mut self, prefix: &str) -> usize {
        let prefix = self.normalize(prefix);
        if prefix.is_empty() {
            let removed = self.len;
            self.clear();
            return removed;
        }
        let Some(top) = self.find(&prefix) else {
            return 0;
        };

        let subtree = self.subtree_from(top);
        let removed = subtree
            .iter()
            .filter(|id| self.nodes.get(**id).is_some_and(N::is_terminal))
            .count();
        // Children first, `top` last, so `detach` only ever edits live parents.
        for id in subtree.iter().rev() {
            if *id == top {
                continue;
            }
            self.nodes.free(*id);
        }
        let parent = self.detach(top);
        if self.config.prune_on_remove {
            if let Some(parent) = parent {
                self.prune_from(parent);
            }
        }
        self.len -= removed;
        debug!(backend = N::BACKEND, prefix = %prefix, removed, "Removed subtree");
        removed
    }

    fn contains_key(&self, key: &str) -> bool {
        self.translate(key).is_some()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn node_count(&self) -> usize {
        self.nodes.live()
    }

    fn clear(&mut self) {
        self.nodes.reset(N::new(None, None));
        self.len = 0;
    }
}

impl<N: TrieNode> Default for TrieEngine<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: TrieNode> fmt::Debug for TrieEngine<N>
where
    N::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieEngine")
            .field("backend", &N::BACKEND)
            .field("len", &self.len)
            .field("entries", &self.entries())
            .finish()
    }
}
