//! Error types for the Lanai Trie.
//!
//! This module defines the error types that can occur during Lanai Trie operations.
//! A word that is simply absent is not an error; lookups report it as `Ok(false)`.

/// Errors that can occur in Lanai Trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum LanaiTrieError {
    /// Error when an empty word is inserted.
    #[error("Empty word not allowed")]
    EmptyWord,

    /// Error when a word contains a character outside `a`..=`z`.
    #[error("Invalid character '{character}' at position {position} in word '{word}'")]
    InvalidCharacter {
        /// The rejected word.
        word: String,
        /// The first offending character.
        character: char,
        /// Character position of the offending character.
        position: usize,
    },

    /// Error when a word exceeds the configured maximum length.
    #[error("Word '{word}' exceeds maximum length of {max_length}")]
    WordTooLong {
        /// The rejected word.
        word: String,
        /// The configured maximum length.
        max_length: usize,
    },

    /// Error when an empty pattern is searched.
    #[error("Empty pattern not allowed")]
    EmptyPattern,

    /// Error when a pattern contains a character that is neither a letter nor the wildcard.
    #[error("Invalid character '{character}' at position {position} in pattern '{pattern}'")]
    InvalidPattern {
        /// The rejected pattern.
        pattern: String,
        /// The first offending character.
        character: char,
        /// Character position of the offending character.
        position: usize,
    },

    /// Error when a trie is built from an unusable configuration.
    #[error("Invalid trie configuration: {0}")]
    InvalidConfiguration(String),
}
