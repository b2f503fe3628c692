//! Lanai Trie Implementation
//!
//! This module provides a dictionary of lowercase words stored in a 26-way trie,
//! with exact and wildcard lookups. A `.` in a search pattern matches any single
//! letter; every other pattern character matches only itself, and a pattern only
//! matches words of exactly its own length.
//!
//! # Example
//!
//! ```
//! use lanai_dictionary::data_structures::LanaiTrie;
//!
//! let mut trie = LanaiTrie::new();
//! trie.insert("bad").unwrap();
//! trie.insert("dad").unwrap();
//! trie.insert("mad").unwrap();
//!
//! assert!(!trie.search("pad").unwrap());
//! assert!(trie.search("bad").unwrap());
//! assert!(trie.search(".ad").unwrap());
//! assert!(trie.search("b..").unwrap());
//! ```
//!
//! # Complexity
//!
//! Insertion and literal lookups are linear in the word length. Each wildcard
//! multiplies the work by at most the 26 letters of the alphabet, but a branch
//! stops at the first empty child slot, so sparse dictionaries stay cheap.

mod config;
mod error;
mod node;
mod pattern;
mod search;

#[cfg(test)]
mod tests;

use tracing::{debug, trace};

pub use self::config::{LanaiTrieConfig, SearchStrategy};
pub use error::LanaiTrieError;
pub use node::ALPHABET_SIZE;
pub use pattern::{Pattern, PatternToken, WILDCARD};

use node::TrieNode;
use search::MatchMode;

/// Result type for Lanai Trie operations
pub type LanaiTrieResult<T> = Result<T, LanaiTrieError>;

/// A set of lowercase words supporting single-letter wildcard lookups.
///
/// Key features:
/// * Shared prefixes share nodes
/// * Input is validated before the trie is touched, so a rejected call never
///   leaves a partial path behind
/// * Recursive or explicit-stack search, chosen through [`LanaiTrieConfig`]
#[derive(Debug)]
pub struct LanaiTrie {
    /// The root node, standing for the empty prefix
    root: TrieNode,

    /// Configuration options
    config: LanaiTrieConfig,

    /// Number of distinct words inserted
    len: usize,
}

impl LanaiTrie {
    /// Creates a new empty `LanaiTrie` using the trie section of the global configuration.
    ///
    /// Falls back to [`LanaiTrieConfig::default`] when no global configuration was set.
    pub fn new() -> Self {
        Self::with_config(crate::config::global_config().trie)
    }

    /// Creates a new empty `LanaiTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails [`LanaiTrieConfig::check`]. Use
    /// [`LanaiTrie::try_with_config`] for configurations that were not built
    /// through the builder methods.
    pub fn with_config(config: LanaiTrieConfig) -> Self {
        match Self::try_with_config(config) {
            Ok(trie) => trie,
            Err(e) => panic!("{e}"),
        }
    }

    /// Creates a new empty `LanaiTrie`, rejecting an unusable configuration.
    ///
    /// # Returns
    ///
    /// * `Ok(LanaiTrie)` - The empty trie.
    /// * `Err(LanaiTrieError::InvalidConfiguration)` - If `config` fails [`LanaiTrieConfig::check`].
    pub fn try_with_config(config: LanaiTrieConfig) -> LanaiTrieResult<Self> {
        config.check()?;
        Ok(Self {
            root: TrieNode::new(),
            config,
            len: 0,
        })
    }

    /// Builds a trie holding every word of `words`, using the global configuration.
    ///
    /// # Returns
    ///
    /// * `Ok(LanaiTrie)` - The populated trie.
    /// * `Err(LanaiTrieError)` - The first word that could not be inserted.
    pub fn try_from_words<I, W>(words: I) -> LanaiTrieResult<Self>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        Self::try_from_words_with_config(words, crate::config::global_config().trie)
    }

    /// Builds a trie holding every word of `words` with the specified configuration.
    pub fn try_from_words_with_config<I, W>(words: I, config: LanaiTrieConfig) -> LanaiTrieResult<Self>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut trie = Self::try_with_config(config)?;
        trie.insert_all(words)?;
        Ok(trie)
    }

    /// Inserts a word into the trie.
    ///
    /// Missing nodes along the word's path are created; existing ones are reused.
    ///
    /// # Arguments
    ///
    /// * `word` - A non-empty word over `a`..=`z`.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the word is new, `false` if it was already present.
    /// * `Err(LanaiTrieError)` - If the word was rejected. The trie is unchanged.
    pub fn insert<W>(&mut self, word: W) -> LanaiTrieResult<bool>
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        let indices = pattern::word_indices(word, self.config.max_word_length).map_err(|e| {
            debug!(error = %e, "Rejected word");
            e
        })?;

        let mut node = &mut self.root;
        for &index in &indices {
            node = node.child_or_insert(index);
        }

        let is_new = !node.is_terminal;
        node.is_terminal = true;

        if is_new {
            self.len += 1;
            debug!(word, words = self.len, "Inserted word");
        }

        Ok(is_new)
    }

    /// Inserts every word in order.
    ///
    /// Stops at the first rejected word; the words before it stay inserted.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - How many of the words were new.
    /// * `Err(LanaiTrieError)` - The error for the first rejected word.
    pub fn insert_all<I, W>(&mut self, words: I) -> LanaiTrieResult<usize>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut inserted = 0;
        for word in words {
            if self.insert(word)? {
                inserted += 1;
            }
        }
        Ok(inserted)
    }

    /// Checks whether some inserted word matches `pattern` exactly.
    ///
    /// `.` matches any single letter. The match covers the whole word: a pattern
    /// never matches a longer or shorter word.
    ///
    /// # Arguments
    ///
    /// * `pattern` - A non-empty pattern over `a`..=`z` and `.`.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - Whether a matching word exists.
    /// * `Err(LanaiTrieError)` - `EmptyPattern` or `InvalidPattern`.
    pub fn search<P>(&self, pattern: P) -> LanaiTrieResult<bool>
    where
        P: AsRef<str>,
    {
        let raw = pattern.as_ref();
        let pattern = parse_logged(raw, Pattern::parse)?;

        // No stored word is longer than the configured maximum
        let found = pattern.len() <= self.config.max_word_length
            && search::matches(
                &self.root,
                pattern.tokens(),
                MatchMode::Exact,
                self.config.search_strategy,
            );

        trace!(pattern = raw, found, "Searched pattern");
        Ok(found)
    }

    /// Checks whether some inserted word starts with `prefix`.
    ///
    /// The prefix may contain wildcards. The empty prefix matches iff the trie is not empty.
    pub fn starts_with<P>(&self, prefix: P) -> LanaiTrieResult<bool>
    where
        P: AsRef<str>,
    {
        let raw = prefix.as_ref();
        let pattern = parse_logged(raw, Pattern::parse_prefix)?;

        let found = search::matches(
            &self.root,
            pattern.tokens(),
            MatchMode::Prefix,
            self.config.search_strategy,
        );

        trace!(prefix = raw, found, "Searched prefix");
        Ok(found)
    }

    /// Checks whether `word` itself was inserted. Wildcards are not interpreted.
    ///
    /// Input that could never have been inserted yields `false` rather than an error.
    pub fn contains<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        match pattern::word_indices(word.as_ref(), self.config.max_word_length) {
            Ok(indices) => indices
                .iter()
                .try_fold(&self.root, |node, &index| node.child(index))
                .map_or(false, |node| node.is_terminal),
            Err(_) => false,
        }
    }

    /// Returns every inserted word matched by `pattern`, in lexicographic order.
    ///
    /// Uses the same matching rules and validation as [`LanaiTrie::search`].
    pub fn find_matches<P>(&self, pattern: P) -> LanaiTrieResult<Vec<String>>
    where
        P: AsRef<str>,
    {
        let raw = pattern.as_ref();
        let pattern = parse_logged(raw, Pattern::parse)?;

        let mut matches = Vec::new();
        if pattern.len() <= self.config.max_word_length {
            search::collect_matches(&self.root, pattern.tokens(), &mut matches);
        }

        trace!(pattern = raw, matches = matches.len(), "Collected matches");
        Ok(matches)
    }

    /// Returns every inserted word in lexicographic order.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.len);
        search::collect_words(&self.root, &mut words);
        words
    }

    /// Returns the number of distinct words in the trie.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every word. The configuration is kept.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.len = 0;
    }

    /// Returns the configuration the trie was built with.
    pub fn config(&self) -> &LanaiTrieConfig {
        &self.config
    }
}

impl Default for LanaiTrie {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_logged(raw: &str, parser: fn(&str) -> LanaiTrieResult<Pattern>) -> LanaiTrieResult<Pattern> {
    parser(raw).map_err(|e| {
        debug!(error = %e, "Rejected pattern");
        e
    })
}
