//! Logging setup.
//!
//! Diagnostics go to stderr; stdout carries only converted lines.

use clap::ValueEnum;
use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// How log events are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Single-line human-readable text.
    Text,
    /// One JSON object per event.
    Json,
}

/// Build the event filter: `RUST_LOG` when set, else `default_filter`.
///
/// An unparsable `default_filter` falls back to `warn`.
pub fn filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Initialize the global subscriber.
///
/// Calling this more than once keeps the first subscriber.
pub fn init(default_filter: &str, format: LogFormat) {
    let builder = fmt()
        .with_env_filter(filter(default_filter))
        .with_writer(io::stderr)
        .with_target(false);

    let _ = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().flatten_event(true).try_init(),
    };
}
