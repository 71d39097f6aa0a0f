use std::vec::Vec;

/// A slot in the node arena.
///
/// Pruned nodes leave a `Free` slot behind that links to the next free slot,
/// so the arena can be reused without shifting indices.
#[derive(Debug, Clone)]
pub(crate) enum NodeSlot {
    Occupied(Node),
    Free(Option<usize>),
}

/// A node in the trie.
///
/// Each node contains:
/// - A flag telling whether the path from the root to this node spells a stored word.
/// - A list of children keyed by a single ASCII letter, sorted by that letter.
///
/// Children are `usize` links into the arena owned by [`Trie`](super::Trie).
/// Every child index is referenced from exactly one parent.
#[derive(Debug, Clone, Default)]
pub(crate) struct Node {
    /// Children nodes, sorted ascending by key.
    pub(crate) children: Vec<(u8, usize)>,
    /// Whether a stored word ends at this node.
    pub(crate) end_of_word: bool,
}

impl Node {
    /// Creates a new node with no children that terminates no word.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A node with no children that terminates no word must not stay reachable.
    pub(crate) fn is_dead(&self) -> bool {
        !self.end_of_word && self.children.is_empty()
    }

    /// Adds a child to the node.
    /// Maintains the sorted order of children.
    pub(crate) fn add_child(&mut self, key: u8, child_idx: usize) {
        match self.children.binary_search_by_key(&key, |&(k, _)| k) {
            Ok(pos) => self.children[pos] = (key, child_idx),
            Err(pos) => self.children.insert(pos, (key, child_idx)),
        }
    }

    /// Finds the child index for a given key.
    pub(crate) fn get_child(&self, key: u8) -> Option<usize> {
        self.children
            .binary_search_by_key(&key, |&(k, _)| k)
            .ok()
            .map(|pos| self.children[pos].1)
    }

    /// Removes a child by key, returning its arena index.
    pub(crate) fn remove_child(&mut self, key: u8) -> Option<usize> {
        self.children
            .binary_search_by_key(&key, |&(k, _)| k)
            .ok()
            .map(|pos| self.children.remove(pos).1)
    }
}
