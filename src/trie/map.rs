use std::collections::VecDeque;
use std::fmt;
use std::vec::Vec;

use tracing::{debug, trace};

use super::iter::Completions;
use super::node::{Node, NodeSlot};
use super::view::NodeRef;
use crate::error::{Result, TrieError};

/// Arena index of the root node. The root slot is never freed.
pub(crate) const ROOT: usize = 0;

/// A prefix tree over ASCII letters with autocomplete and set algebra.
///
/// Nodes live in a `Vec` arena owned by the trie; every node except the root
/// is owned by exactly one parent through its sorted child list. Pruned nodes
/// are threaded onto a free list and reused by later insertions.
///
/// Text passed to [`insert`](Trie::insert) is tokenized on the fly: every
/// character that is not an ASCII letter ends the word being built and starts
/// a fresh one from the root.
///
/// ```
/// use ct9::Trie;
///
/// let mut trie = Trie::new();
/// trie.insert("app apple application");
/// assert_eq!(trie.autocomplete("appl", 1), vec!["apple"]);
/// ```
pub struct Trie {
    /// Arena of nodes. Slot `ROOT` is always occupied.
    pub(crate) nodes: Vec<NodeSlot>,
    /// Head of the free slot list.
    free_head: Option<usize>,
    /// Number of stored words.
    len: usize,
    /// Number of live nodes, not counting the root.
    size: usize,
}

impl Trie {
    /// Creates a new empty trie.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new empty trie with room for `capacity` nodes besides the root.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.saturating_add(1));
        nodes.push(NodeSlot::Occupied(Node::new()));
        Self {
            nodes,
            free_head: None,
            len: 0,
            size: 0,
        }
    }

    /// Returns the number of stored words.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no word is stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes below the root.
    ///
    /// Shared prefixes are counted once, so `"hello"` alone has size 5 and
    /// `"help"` added on top of it brings the size to 6.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Removes every word, keeping the allocated arena.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.nodes.push(NodeSlot::Occupied(Node::new()));
        self.free_head = None;
        self.len = 0;
        self.size = 0;
    }

    /// Moves the contents out, leaving an empty trie behind.
    #[must_use]
    pub fn take(&mut self) -> Trie {
        std::mem::take(self)
    }

    /// Returns a read-only handle to the root node.
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef::new(self, ROOT)
    }

    pub(crate) fn node(&self, idx: usize) -> &Node {
        match &self.nodes[idx] {
            NodeSlot::Occupied(node) => node,
            NodeSlot::Free(_) => panic!("corrupted trie: node {idx} is a free slot"),
        }
    }

    fn node_mut(&mut self, idx: usize) -> &mut Node {
        match &mut self.nodes[idx] {
            NodeSlot::Occupied(node) => node,
            NodeSlot::Free(_) => panic!("corrupted trie: node {idx} is a free slot"),
        }
    }

    /// helper to allocate a node, reusing a free slot when one exists
    fn alloc_node(&mut self) -> usize {
        self.size += 1;
        match self.free_head {
            Some(idx) => {
                self.free_head = match self.nodes[idx] {
                    NodeSlot::Free(next) => next,
                    NodeSlot::Occupied(_) => panic!("corrupted trie: free list points at node {idx}"),
                };
                self.nodes[idx] = NodeSlot::Occupied(Node::new());
                idx
            }
            None => {
                let idx = self.nodes.len();
                self.nodes.push(NodeSlot::Occupied(Node::new()));
                idx
            }
        }
    }

    fn free_node(&mut self, idx: usize) {
        debug_assert_ne!(idx, ROOT, "the root is never freed");
        self.nodes[idx] = NodeSlot::Free(self.free_head);
        self.free_head = Some(idx);
        self.size -= 1;
    }

    /// Returns the child of `parent` keyed by `key`, creating it if absent.
    fn child_or_insert(&mut self, parent: usize, key: u8) -> usize {
        if let Some(child) = self.node(parent).get_child(key) {
            return child;
        }
        let child = self.alloc_node();
        self.node_mut(parent).add_child(key, child);
        child
    }

    /// Marks the word ending at `idx`. The root never terminates a word.
    fn mark_end_of_word(&mut self, idx: usize) {
        if idx == ROOT {
            return;
        }
        let node = self.node_mut(idx);
        if !node.end_of_word {
            node.end_of_word = true;
            self.len += 1;
        }
    }

    /// Inserts every word found in `text`.
    ///
    /// ASCII letters extend the current word, case preserved. Any other
    /// character ends the current word and the rest of `text` is read as a
    /// new word from the root. The end of `text` ends the last word. Empty
    /// words produced by consecutive separators are skipped.
    pub fn insert(&mut self, text: &str) {
        let (words_before, size_before) = (self.len, self.size);
        let mut curr = ROOT;

        for byte in text.bytes() {
            if byte.is_ascii_alphabetic() {
                curr = self.child_or_insert(curr, byte);
            } else {
                self.mark_end_of_word(curr);
                curr = ROOT;
            }
        }
        self.mark_end_of_word(curr);

        trace!(
            new_words = self.len - words_before,
            new_nodes = self.size - size_before,
            "insert"
        );
    }

    /// Walks `path` from the root, returning the index of the node it spells.
    pub(crate) fn find_node(&self, path: &str) -> Option<usize> {
        path.bytes()
            .try_fold(ROOT, |curr, key| self.node(curr).get_child(key))
    }

    /// Returns true if `word` is stored as a whole word.
    pub fn contains(&self, word: &str) -> bool {
        self.find_node(word)
            .is_some_and(|idx| self.node(idx).end_of_word)
    }

    /// Removes `word` if it is stored, returning whether it was.
    ///
    /// Nodes left without children and without a word end are pruned from
    /// the deepest one upwards. Pruning stops at the first ancestor that
    /// still leads to another word or terminates one itself.
    pub fn del(&mut self, word: &str) -> bool {
        // (parent_idx, key leading to the child)
        let mut path = Vec::with_capacity(word.len());
        let mut curr = ROOT;

        for key in word.bytes() {
            match self.node(curr).get_child(key) {
                Some(child) => {
                    path.push((curr, key));
                    curr = child;
                }
                None => return false,
            }
        }

        let node = self.node_mut(curr);
        if !node.end_of_word {
            return false;
        }
        node.end_of_word = false;
        self.len -= 1;

        let mut pruned = 0usize;
        while let Some((parent, key)) = path.pop() {
            if !self.node(curr).is_dead() {
                break;
            }
            self.node_mut(parent).remove_child(key);
            self.free_node(curr);
            pruned += 1;
            curr = parent;
        }

        trace!(word, pruned, "delete");
        true
    }

    /// Returns a lazy iterator over the stored words starting with `prefix`,
    /// in ascending lexicographic order.
    pub fn completions<'a>(&'a self, prefix: &str) -> Completions<'a> {
        match self.find_node(prefix) {
            Some(start) => Completions::new(self, start, prefix),
            None => Completions::empty(self),
        }
    }

    /// Returns at most `limit` stored words starting with `prefix`, in
    /// ascending lexicographic order.
    ///
    /// Traversal stops as soon as `limit` words have been found.
    pub fn autocomplete(&self, prefix: &str, limit: usize) -> Vec<String> {
        if limit == 0 {
            return Vec::new();
        }
        self.completions(prefix).take(limit).collect()
    }

    /// Returns every stored word starting with `prefix`.
    pub fn autocomplete_all(&self, prefix: &str) -> Vec<String> {
        self.autocomplete(prefix, usize::MAX)
    }

    /// Like [`autocomplete`](Trie::autocomplete), for callers holding a
    /// signed limit.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::InvalidArgument`] if `limit` is negative.
    pub fn try_autocomplete(&self, prefix: &str, limit: i64) -> Result<Vec<String>> {
        if limit < 0 {
            debug!(limit, "rejected negative autocomplete limit");
            return Err(TrieError::InvalidArgument { limit });
        }
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(self.autocomplete(prefix, limit))
    }

    /// Returns every stored word in ascending lexicographic order.
    pub fn words(&self) -> Vec<String> {
        self.autocomplete_all("")
    }

    /// Merges the structure of `src` into `dest`.
    ///
    /// Source and destination nodes are paired level by level; each source
    /// child is matched with (or created as) the destination child under the
    /// same key, and word ends are copied over. Words already in `dest` stay.
    pub fn copy_nodes(dest: &mut Trie, src: &Trie) {
        let mut queue = VecDeque::new();
        queue.push_back((ROOT, ROOT));

        while let Some((src_idx, dest_idx)) = queue.pop_front() {
            for &(key, src_child) in &src.node(src_idx).children {
                let dest_child = dest.child_or_insert(dest_idx, key);
                if src.node(src_child).end_of_word {
                    dest.mark_end_of_word(dest_child);
                }
                queue.push_back((src_child, dest_child));
            }
        }
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Trie {
    fn clone(&self) -> Self {
        let mut dest = Trie::with_capacity(self.size);
        Trie::copy_nodes(&mut dest, self);
        debug!(words = dest.len, nodes = dest.size, "cloned trie");
        dest
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        Trie::copy_nodes(self, source);
    }
}

impl fmt::Debug for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.completions("")).finish()
    }
}
