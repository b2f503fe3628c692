//! Tests for the error module.
//!
//! This module contains tests for error handling and error types.

use crate::data_structures::{LanaiTrie, LanaiTrieError};
use crate::error::config::ConfigError;
use crate::error::{
    report_error, set_error_reporter, ErrorContext, ErrorReporter, LanaiError, LanaiResult,
    TracingErrorReporter,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = LanaiError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Test that nested errors keep the inner message.
#[test]
fn test_nested_errors() {
    let missing = LanaiError::from(ConfigError::FileNotFound("lanai.toml".into()));
    assert!(format!("{missing}").contains("lanai.toml"));

    let config_error = LanaiError::from(ConfigError::ValidationError("bad level".to_string()));
    assert_eq!(
        config_error.to_string(),
        "Configuration error: Configuration validation error: bad level"
    );
}

/// Test that trie errors propagate into the crate error with `?`.
#[test]
fn test_trie_error_conversion() {
    fn load(words: &[&str]) -> LanaiResult<LanaiTrie> {
        let mut trie = LanaiTrie::new();
        for word in words {
            trie.insert(word)?;
        }
        Ok(trie)
    }

    assert_eq!(load(&["aloha", "mahalo"]).unwrap().len(), 2);

    match load(&["aloha", "Mahalo"]) {
        Err(LanaiError::Trie(LanaiTrieError::InvalidCharacter { character, position, .. })) => {
            assert_eq!(character, 'M');
            assert_eq!(position, 0);
        }
        other => panic!("unexpected result: {other:?}"),
    }

    let context = ErrorContext::new(LanaiTrieError::EmptyPattern, "search");
    assert_eq!(context.to_string(), "Error in search: Trie error: Empty pattern not allowed");
}

/// Without an `ErrorLayer` installed there is no span trace to capture.
#[test]
fn test_span_trace_without_error_layer() {
    let context = ErrorContext::new(LanaiError::Custom("no layer".to_string()), "test").with_span_trace();
    assert!(context.trace.is_none());

    let context = ErrorContext::new(LanaiError::Custom("manual".to_string()), "test").with_trace("frame 0");
    assert_eq!(context.trace.as_deref(), Some("frame 0"));
}

/// Mock error reporter for testing.
#[derive(Debug)]
struct MockErrorReporter {
    reported_count: AtomicUsize,
}

impl MockErrorReporter {
    fn new() -> Self {
        Self {
            reported_count: AtomicUsize::new(0),
        }
    }

    fn reported_count(&self) -> usize {
        self.reported_count.load(Ordering::SeqCst)
    }
}

impl ErrorReporter for MockErrorReporter {
    fn report(&self, _context: ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Test that the global error reporter works correctly.
///
/// This is the only test that installs a global reporter.
#[test]
fn test_global_error_reporter() {
    let reporter = Arc::new(MockErrorReporter::new());
    set_error_reporter(reporter.clone());

    report_error(ErrorContext::new(LanaiError::Custom("first".to_string()), "test_component"));
    report_error(ErrorContext::new(LanaiTrieError::EmptyWord, "insert"));

    assert_eq!(reporter.reported_count(), 2);
}

/// Test that the default tracing error reporter can be used.
#[test]
fn test_tracing_error_reporter() {
    let reporter = TracingErrorReporter;
    let context = ErrorContext::new(LanaiError::Custom("test error".to_string()), "test_component");

    // Just make sure this doesn't panic
    reporter.report(context);
}
