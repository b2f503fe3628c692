// Copyright (c) 2025 Lanai Dictionary Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the Lanai Trie.

use serde::{Deserialize, Serialize};

use super::error::LanaiTrieError;

/// How wildcard searches walk the trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SearchStrategy {
    /// Depth-first search through recursive calls.
    #[default]
    Recursive,
    /// Depth-first search over an explicit stack of `(position, node)` pairs.
    Iterative,
}

/// Configuration for the Lanai Trie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanaiTrieConfig {
    /// Longest word accepted by `insert`. Also bounds the depth of the trie,
    /// and with it the recursion depth of the recursive matcher. Pick
    /// [`SearchStrategy::Iterative`] for large values.
    pub max_word_length: usize,

    /// Matcher used by `search` and `starts_with`
    pub search_strategy: SearchStrategy,
}

impl LanaiTrieConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - max_word_length: 64
    /// - search_strategy: Recursive
    pub fn new() -> Self {
        Self {
            max_word_length: 64,
            search_strategy: SearchStrategy::Recursive,
        }
    }

    /// Set the longest word accepted by `insert`.
    pub fn with_max_word_length(mut self, max_word_length: usize) -> Self {
        if max_word_length == 0 {
            panic!("Maximum word length must be greater than 0");
        }
        self.max_word_length = max_word_length;
        self
    }

    /// Set the search strategy.
    pub fn with_search_strategy(mut self, search_strategy: SearchStrategy) -> Self {
        self.search_strategy = search_strategy;
        self
    }

    /// Checks values that the builder methods would have rejected, for
    /// configurations built as struct literals or deserialized directly.
    pub fn check(&self) -> Result<(), LanaiTrieError> {
        if self.max_word_length == 0 {
            return Err(LanaiTrieError::InvalidConfiguration(
                "max_word_length must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LanaiTrieConfig {
    fn default() -> Self {
        Self::new()
    }
}
