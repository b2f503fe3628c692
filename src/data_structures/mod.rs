//! Data structures for the Lanai Dictionary.
//!
//! This module contains the word storage used by the library.
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Input validated before any mutation
//! - Single ownership of every node

pub mod lanai_trie;

// Re-export common data structures
pub use lanai_trie::{LanaiTrie, LanaiTrieConfig, LanaiTrieError, LanaiTrieResult, SearchStrategy};
