use std::iter::FusedIterator;
use std::vec::Vec;

use super::map::Trie;

/// Iterator over the stored words below a prefix, in ascending order.
///
/// Created by [`Trie::completions`]. The traversal is pre-order: a node's own
/// word is yielded before any word in its subtree, and children are visited
/// in ascending key order, so words come out sorted without a final sort.
/// An explicit stack replaces recursion, so the depth of the trie does not
/// touch the call stack.
#[derive(Clone)]
pub struct Completions<'a> {
    trie: &'a Trie,
    // Stack of (node_idx, action): 0 = check word end, n = descend into child n - 1
    stack: Vec<(usize, usize)>,
    // Prefix followed by the keys of every node on the stack except the first
    key_buf: String,
}

impl<'a> Completions<'a> {
    pub(crate) fn new(trie: &'a Trie, start: usize, prefix: &str) -> Self {
        Self {
            trie,
            stack: vec![(start, 0)],
            key_buf: String::from(prefix),
        }
    }

    pub(crate) fn empty(trie: &'a Trie) -> Self {
        Self {
            trie,
            stack: Vec::new(),
            key_buf: String::new(),
        }
    }
}

impl Iterator for Completions<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let last = self.stack.len().checked_sub(1)?;
            let (node_idx, action) = self.stack[last];
            let node = self.trie.node(node_idx);
            self.stack[last].1 += 1;

            if action == 0 {
                if node.end_of_word {
                    return Some(self.key_buf.clone());
                }
                continue;
            }

            if let Some(&(key, child_idx)) = node.children.get(action - 1) {
                self.key_buf.push(char::from(key));
                self.stack.push((child_idx, 0));
            } else {
                // Done with this node
                self.stack.pop();
                if !self.stack.is_empty() {
                    self.key_buf.pop();
                }
            }
        }
    }
}

impl FusedIterator for Completions<'_> {}
