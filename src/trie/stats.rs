use serde::{Deserialize, Serialize};

use super::map::{Trie, ROOT};

/// A summary of a trie's shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieStats {
    /// Number of stored words.
    pub words: usize,
    /// Number of nodes below the root.
    pub nodes: usize,
    /// Length of the longest root-to-node path.
    pub max_depth: usize,
    /// Slots held by the node arena, free ones included.
    pub arena_slots: usize,
}

impl Trie {
    /// Walks the trie and summarizes its shape.
    pub fn stats(&self) -> TrieStats {
        let mut max_depth = 0;
        let mut stack = vec![(ROOT, 0usize)];
        while let Some((idx, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            stack.extend(
                self.node(idx)
                    .children
                    .iter()
                    .map(|&(_, child)| (child, depth + 1)),
            );
        }

        TrieStats {
            words: self.len(),
            nodes: self.size(),
            max_depth,
            arena_slots: self.nodes.len(),
        }
    }
}
