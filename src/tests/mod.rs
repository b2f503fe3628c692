//! Test modules for the Lanai Dictionary.
//!
//! This module contains the crate-level testing infrastructure:
//! - Configuration loading and validation tests
//! - Error type and reporting tests
//! - Test fixtures and utilities
//!
//! Trie behaviour is tested next to the trie, in `data_structures::lanai_trie::tests`.

pub mod error_tests;
pub mod test_utils;

pub use test_utils::TestFixture;
