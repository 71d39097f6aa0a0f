//! # `ct9` - Prefix Tree Autocomplete Engine
//!
//! A prefix tree (trie) over ASCII letters with word insertion, deletion,
//! bounded autocomplete and whole-trie set algebra.
//!
//! ## Key Features
//!
//! - **Tokenizing insert**: any character that is not an ASCII letter ends the
//!   current word, so raw text can be fed straight into [`Trie::insert`]
//! - **Ordered autocomplete**: completions come out in lexicographic order and
//!   the traversal stops once the requested number of words is found
//! - **Pruning delete**: removing a word frees every node that no longer leads
//!   to a stored word, and nothing else
//! - **Set algebra**: `+` and `-` build unions and differences, `==` compares
//!   word sets, and `<`/`<=`/`>`/`>=` are subset relations
//!
//! ## Architecture
//!
//! Nodes live in a `Vec` arena owned by the [`Trie`]. A node is a word-end
//! flag plus a key-sorted list of child indices; each node has exactly one
//! parent. Clones are built level by level, moves are a swap of the arena, and
//! every traversal uses an explicit stack or queue instead of recursion.
//!
//! ## Example
//!
//! ```rust
//! use ct9::Trie;
//!
//! let mut trie = Trie::new();
//! for word in ["app", "apple", "application", "apricot", "banana"] {
//!     trie.insert(word);
//! }
//!
//! assert_eq!(trie.autocomplete("ap", 2), vec!["app", "apple"]);
//!
//! trie.del("app");
//! assert_eq!(trie.autocomplete_all("app"), vec!["apple", "application"]);
//!
//! let more = Trie::from("cherry banana");
//! let union = &trie + &more;
//! assert!(trie < union);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod trie;

pub use error::{Result, TrieError};
pub use trie::{Completions, NodeRef, Trie, TrieStats};
