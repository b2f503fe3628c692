//! Lanai Dictionary Library
//!
//! A dictionary of lowercase words backed by a 26-way trie, answering exact and
//! wildcard membership queries. See [`data_structures::LanaiTrie`].
//!
//! # Architecture
//!
//! - `data_structures`: the trie, its validation and matchers
//! - `config`: layered configuration (defaults, file, environment)
//! - `error`: crate-level error type and error reporting
//! - `logging`: tracing subscriber setup

use std::path::Path;
use std::sync::Arc;

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod logging;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::{LanaiTrie, LanaiTrieConfig, LanaiTrieError, LanaiTrieResult, SearchStrategy};

/// Version information for the Lanai Dictionary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Loads configuration from `config_path` (if given) and `LANAI__*` environment
/// variables, installs the tracing subscriber and error reporter, and makes the
/// configuration the global default used by [`LanaiTrie::new`].
/// A missing configuration file falls back to the defaults.
///
/// Failures are passed to [`error::report_error`] before being returned.
pub fn init(config_path: Option<&Path>) -> error::LanaiResult<()> {
    let loader = config::ConfigLoader::new(config_path, config::ENV_PREFIX);

    let (config, missing_file) = match loader.load() {
        Ok(config) => (config, None),
        Err(error::config::ConfigError::FileNotFound(path)) => {
            (config::LanaiConfig::default(), Some(path))
        }
        Err(e) => {
            let details = match config_path {
                Some(path) => format!("config file: {}", path.display()),
                None => format!("environment prefix: {}", config::ENV_PREFIX),
            };
            return Err(report_init_failure(e.into(), "config", details));
        }
    };

    logging::init_logging(&config.log).map_err(|e| {
        report_init_failure(e, "logging", format!("log level: {}", config.log.level))
    })?;

    // Set up global error reporter with tracing
    error::set_error_reporter(Arc::new(error::TracingErrorReporter));

    if let Some(path) = missing_file {
        tracing::warn!("Configuration file not found at: {}, using defaults", path.display());
    }

    tracing::info!(
        version = VERSION,
        max_word_length = config.trie.max_word_length,
        search_strategy = ?config.trie.search_strategy,
        "Lanai Dictionary initialized"
    );
    config::init_global_config(config);

    Ok(())
}

fn report_init_failure(error: error::LanaiError, component: &str, details: String) -> error::LanaiError {
    error::report_error(
        error::ErrorContext::new(error.clone(), component)
            .with_details(details)
            .with_span_trace(),
    );
    error
}
