// Copyright (c) 2025 Ala Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Slot arena owning every node of a trie.

use super::node::NodeId;

/// Vector of node slots with a free list.
///
/// Freed slots are handed out again before the vector grows, so a trie that
/// keeps inserting and removing the same keys stays at a stable size.
#[derive(Debug, Clone)]
pub(crate) struct Arena<N> {
    slots: Vec<Option<N>>,
    free: Vec<usize>,
    live: usize,
}

impl<N> Arena<N> {
    /// Creates an arena holding only `root`, at [`NodeId::ROOT`].
    pub(crate) fn with_root(root: N) -> Self {
        Self {
            slots: vec![Some(root)],
            free: Vec::new(),
            live: 1,
        }
    }

    pub(crate) fn alloc(&mut self, node: N) -> NodeId {
        self.live += 1;
        match self.free.pop() {
            Some(index) => {
                if let Some(slot) = self.slots.get_mut(index) {
                    *slot = Some(node);
                }
                NodeId(index)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Releases the slot of `id`. The root is never released.
    pub(crate) fn free(&mut self, id: NodeId) -> Option<N> {
        if id == NodeId::ROOT {
            return None;
        }
        let node = self.slots.get_mut(id.0)?.take()?;
        self.free.push(id.0);
        self.live -= 1;
        Some(node)
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&N> {
        self.slots.get(id.0)?.as_ref()
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut N> {
        self.slots.get_mut(id.0)?.as_mut()
    }

    /// Number of occupied slots, root included.
    pub(crate) fn live(&self) -> usize {
        self.live
    }

    /// Number of slots ever allocated.
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Drops every node and starts over from `root`.
    pub(crate) fn reset(&mut self, root: N) {
        self.slots.clear();
        self.slots.push(Some(root));
        self.free.clear();
        self.live = 1;
    }
}
