//! Structured logging on stderr.
//!
//! stdout carries only results, so every log line goes to stderr.

use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding the filter directive (e.g. `debug`).
pub const LOG_ENV: &str = "QUODIGIOUS_LOG";
pub const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
