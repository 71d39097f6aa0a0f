//! Errors reported by the trie.

use thiserror::Error;

/// The error type for trie operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TrieError {
    /// A negative autocomplete limit was supplied.
    #[error("invalid argument: autocomplete limit must be non-negative, got {limit}")]
    InvalidArgument {
        /// The rejected limit.
        limit: i64,
    },
}

/// A specialized `Result` for trie operations.
pub type Result<T> = core::result::Result<T, TrieError>;
