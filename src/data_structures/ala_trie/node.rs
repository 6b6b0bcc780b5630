// Copyright (c) 2025 Ala Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node abstraction shared by the Ala Trie backends.
//!
//! The engine only ever talks to nodes through [`TrieNode`]. A backend decides
//! how children are stored and which characters it can hold; everything else
//! (walking, collecting, pruning) lives in the engine.

/// Handle of a node inside the trie's arena.
///
/// Parent links are stored as `NodeId`s, so they never own the node they
/// point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root node always occupies the first arena slot.
    pub const ROOT: NodeId = NodeId(0);

    /// Returns the arena slot index of this node.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node in an Ala Trie.
///
/// Each node represents one character of a key path. A node is terminal when
/// it holds a value.
pub trait TrieNode {
    /// Payload stored at terminal nodes.
    type Value;

    /// Backend name used in errors and log output.
    const BACKEND: &'static str;

    /// Creates a node for `character` under `parent`. The root has neither.
    fn new(character: Option<char>, parent: Option<NodeId>) -> Self;

    /// Whether this backend can store an edge labelled `character`.
    fn accepts(character: char) -> bool;

    /// The character on the edge leading to this node.
    fn character(&self) -> Option<char>;

    /// Back-link to the parent node.
    fn parent(&self) -> Option<NodeId>;

    /// The stored value, if this node is terminal.
    fn value(&self) -> Option<&Self::Value>;

    /// Stores `value`, returning the one it replaced.
    fn set_value(&mut self, value: Self::Value) -> Option<Self::Value>;

    /// Takes the value out, leaving the node non-terminal.
    fn take_value(&mut self) -> Option<Self::Value>;

    /// Looks up the child reached through `character`.
    fn child(&self, character: char) -> Option<NodeId>;

    /// Links `child` under `character`. Callers check [`TrieNode::accepts`] first.
    fn attach_child(&mut self, character: char, child: NodeId);

    /// Unlinks the child under `character`.
    fn detach_child(&mut self, character: char) -> Option<NodeId>;

    /// Children in ascending character order.
    fn children(&self) -> impl DoubleEndedIterator<Item = NodeId> + '_;

    /// Whether any child is linked.
    fn has_children(&self) -> bool;

    /// Whether this node ends a stored key.
    fn is_terminal(&self) -> bool {
        self.value().is_some()
    }
}
