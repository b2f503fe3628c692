// Copyright (c) 2025 Lanai Dictionary Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Word and pattern validation for the Lanai Trie.
//!
//! Input is checked once, up front, and turned into child slot indices so the
//! traversal code never has to deal with characters outside the alphabet.

use super::error::LanaiTrieError;
use super::node::letter_index;
use super::LanaiTrieResult;

/// The single-character wildcard accepted in search patterns.
pub const WILDCARD: char = '.';

/// One position of a parsed search pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternToken {
    /// Matches exactly the letter in this child slot.
    Letter(usize),
    /// Matches any single letter.
    Wildcard,
}

/// A validated search pattern over `a`..=`z` and [`WILDCARD`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    tokens: Vec<PatternToken>,
}

impl Pattern {
    /// Parses a non-empty search pattern.
    ///
    /// # Arguments
    ///
    /// * `pattern` - Letters `a`..=`z`, with `.` standing for any single letter.
    ///
    /// # Returns
    ///
    /// * `Ok(Pattern)` - The parsed pattern.
    /// * `Err(LanaiTrieError)` - `EmptyPattern` or `InvalidPattern` naming the first bad character.
    pub fn parse(pattern: &str) -> LanaiTrieResult<Self> {
        if pattern.is_empty() {
            return Err(LanaiTrieError::EmptyPattern);
        }
        Self::parse_prefix(pattern)
    }

    /// Parses a pattern that is allowed to be empty, as used for prefix queries.
    pub(crate) fn parse_prefix(pattern: &str) -> LanaiTrieResult<Self> {
        let tokens = pattern
            .chars()
            .enumerate()
            .map(|(position, character)| match character {
                WILDCARD => Ok(PatternToken::Wildcard),
                c => letter_index(c).map(PatternToken::Letter).ok_or_else(|| {
                    LanaiTrieError::InvalidPattern {
                        pattern: pattern.to_string(),
                        character,
                        position,
                    }
                }),
            })
            .collect::<LanaiTrieResult<Vec<_>>>()?;

        Ok(Self { tokens })
    }

    /// Number of positions in the pattern.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the pattern has no positions. Only prefix patterns can be empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The parsed positions, in order.
    pub fn tokens(&self) -> &[PatternToken] {
        &self.tokens
    }

    /// Number of wildcard positions.
    pub fn wildcard_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| matches!(t, PatternToken::Wildcard))
            .count()
    }

    /// Whether the pattern contains no wildcard.
    pub fn is_literal(&self) -> bool {
        self.wildcard_count() == 0
    }
}

/// Validates a word for insertion and maps it to child slot indices.
///
/// Checks run in order: emptiness, alphabet, then length.
pub(crate) fn word_indices(word: &str, max_length: usize) -> LanaiTrieResult<Vec<usize>> {
    if word.is_empty() {
        return Err(LanaiTrieError::EmptyWord);
    }

    let indices = word
        .chars()
        .enumerate()
        .map(|(position, character)| {
            letter_index(character).ok_or_else(|| LanaiTrieError::InvalidCharacter {
                word: word.to_string(),
                character,
                position,
            })
        })
        .collect::<LanaiTrieResult<Vec<_>>>()?;

    if indices.len() > max_length {
        return Err(LanaiTrieError::WordTooLong {
            word: word.to_string(),
            max_length,
        });
    }

    Ok(indices)
}
