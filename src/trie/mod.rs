//! Prefix tree over ASCII letters.
//!
//! `Trie` keeps its nodes in a `Vec` arena: each node holds a word-end flag
//! and a list of children sorted by key, and pruned nodes go onto a free
//! list. Enumeration walks children in key order with an explicit stack, so
//! autocomplete results come out in lexicographic order and can stop early.

mod iter;
mod map;
mod node;
mod ops;
mod stats;
mod view;

pub use iter::Completions;
pub use map::Trie;
pub use stats::TrieStats;
pub use view::NodeRef;
