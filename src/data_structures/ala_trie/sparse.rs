// Copyright (c) 2025 Ala Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Sparse node representation for the Ala Trie.
//!
//! Children live in an ordered map, so any `char` can label an edge and
//! traversal visits children in ascending character order.

use std::collections::BTreeMap;

use super::node::{NodeId, TrieNode};

/// A node in the sparse Ala Trie backend.
#[derive(Debug, Clone)]
pub struct SparseNode<V> {
    /// Character on the edge from the parent; `None` at the root
    character: Option<char>,

    /// Map of characters to child nodes
    children: BTreeMap<char, NodeId>,

    /// Back-link used to rebuild keys
    parent: Option<NodeId>,

    /// Value associated with the key ending here (if it's a terminal node)
    value: Option<V>,
}

impl<V> TrieNode for SparseNode<V> {
    type Value = V;

    const BACKEND: &'static str = "sparse";

    fn new(character: Option<char>, parent: Option<NodeId>) -> Self {
        Self {
            character,
            children: BTreeMap::new(),
            parent,
            value: None,
        }
    }

    fn accepts(_character: char) -> bool {
        true
    }

    fn character(&self) -> Option<char> {
        self.character
    }

    fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    fn set_value(&mut self, value: V) -> Option<V> {
        self.value.replace(value)
    }

    fn take_value(&mut self) -> Option<V> {
        self.value.take()
    }

    fn child(&self, character: char) -> Option<NodeId> {
        self.children.get(&character).copied()
    }

    fn attach_child(&mut self, character: char, child: NodeId) {
        self.children.insert(character, child);
    }

    fn detach_child(&mut self, character: char) -> Option<NodeId> {
        self.children.remove(&character)
    }

    fn children(&self) -> impl DoubleEndedIterator<Item = NodeId> + '_ {
        self.children.values().copied()
    }

    fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}
