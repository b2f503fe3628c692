//! Logging setup for the Lanai Dictionary.
//!
//! The library itself only emits `tracing` events. Applications that want them
//! printed call [`init_logging`] once, or [`crate::init`] which also loads the
//! configuration.

use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LogConfig;
use crate::error::{LanaiError, LanaiResult};

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. An `ErrorLayer` is
/// installed so that `ErrorContext::with_span_trace` can capture span traces.
///
/// # Returns
///
/// * `Ok(())` if the subscriber was installed
/// * `Err(LanaiError::Custom)` if the level is invalid or a subscriber is already set
pub fn init_logging(config: &LogConfig) -> LanaiResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| LanaiError::Custom(format!("Invalid log filter: {e}")))?;

    let fmt_layer = fmt::layer()
        .with_file(config.source_location)
        .with_line_number(config.source_location)
        .with_thread_names(true);

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(ErrorLayer::default());

    let result = if config.json {
        tracing::subscriber::set_global_default(registry.with(fmt_layer.json()))
    } else {
        tracing::subscriber::set_global_default(registry.with(fmt_layer.pretty()))
    };

    result.map_err(|e| LanaiError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}
