// Copyright (c) 2025 Ala Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Dense node representation for the Ala Trie.
//!
//! Every node carries a fixed array with one slot per letter of the
//! lowercase ASCII alphabet. A child is found by computing its slot from the
//! character, so lookups cost the same regardless of fan-out, at the price of
//! a full array per node and a closed alphabet.

use super::node::{NodeId, TrieNode};

/// Number of child slots per dense node.
pub const ALPHABET_SIZE: usize = 26;

/// Character stored in slot 0.
pub const ALPHABET_BASE: char = 'a';

/// Maps a character to its slot, or `None` if it is outside the alphabet.
fn slot_of(character: char) -> Option<usize> {
    let offset = (character as u32).checked_sub(ALPHABET_BASE as u32)? as usize;
    (offset < ALPHABET_SIZE).then_some(offset)
}

/// A node in the dense Ala Trie backend.
#[derive(Debug, Clone)]
pub struct DenseNode<V> {
    /// Character on the edge from the parent; `None` at the root
    character: Option<char>,

    /// Child slots indexed by `character - ALPHABET_BASE`
    children: [Option<NodeId>; ALPHABET_SIZE],

    /// Back-link used to rebuild keys
    parent: Option<NodeId>,

    /// Value associated with the key ending here (if it's a terminal node)
    value: Option<V>,
}

impl<V> TrieNode for DenseNode<V> {
    type Value = V;

    const BACKEND: &'static str = "dense";

    fn new(character: Option<char>, parent: Option<NodeId>) -> Self {
        Self {
            character,
            children: [None; ALPHABET_SIZE],
            parent,
            value: None,
        }
    }

    fn accepts(character: char) -> bool {
        slot_of(character).is_some()
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
        let slot = slot_of(character)?;
        self.children.get(slot).copied().flatten()
    }

    fn attach_child(&mut self, character: char, child: NodeId) {
        if let Some(slot) = slot_of(character).and_then(|slot| self.children.get_mut(slot)) {
            *slot = Some(child);
        }
    }

    fn detach_child(&mut self, character: char) -> Option<NodeId> {
        let slot = slot_of(character)?;
        self.children.get_mut(slot)?.take()
    }

    fn children(&self) -> impl DoubleEndedIterator<Item = NodeId> + '_ {
        self.children.iter().filter_map(|slot| *slot)
    }

    fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_mapping_covers_alphabet_only() {
        assert_eq!(slot_of('a'), Some(0));
        assert_eq!(slot_of('z'), Some(25));
        assert_eq!(slot_of('`'), None);
        assert_eq!(slot_of('{'), None);
        assert_eq!(slot_of('A'), None);
        assert_eq!(slot_of('ä'), None);
        assert!(DenseNode::<()>::accepts('m'));
        assert!(!DenseNode::<()>::accepts('0'));
    }

    #[test]
    fn test_children_follow_alphabet_order() {
        let mut node: DenseNode<()> = DenseNode::new(None, None);
        node.attach_child('t', NodeId(1));
        node.attach_child('b', NodeId(2));
        node.attach_child('z', NodeId(3));

        let order: Vec<_> = node.children().collect();
        assert_eq!(order, vec![NodeId(2), NodeId(1), NodeId(3)]);
        assert_eq!(node.child('t'), Some(NodeId(1)));
        assert_eq!(node.child('c'), None);
        assert_eq!(node.child('T'), None);
    }

    #[test]
    fn test_out_of_alphabet_attach_is_ignored() {
        let mut node: DenseNode<()> = DenseNode::new(None, None);
        node.attach_child('#', NodeId(9));
        assert!(!node.has_children());
        assert_eq!(node.detach_child('#'), None);
    }

    #[test]
    fn test_detach_empties_slot() {
        let mut node: DenseNode<u32> = DenseNode::new(Some('d'), Some(NodeId::ROOT));
        node.attach_child('o', NodeId(5));
        assert!(node.has_children());
        assert_eq!(node.detach_child('o'), Some(NodeId(5)));
        assert!(!node.has_children());
        assert_eq!(node.child('o'), None);
    }

    #[test]
    fn test_default_value_is_a_real_payload() {
        let mut node: DenseNode<u32> = DenseNode::new(Some('a'), Some(NodeId::ROOT));
        node.set_value(0);
        assert!(node.is_terminal());
        assert_eq!(node.value(), Some(&0));
    }
}
