//! Tracing subscriber setup.
//!
//! The log level is taken from `RUST_LOG` and defaults to `info`, for
//! example `RUST_LOG=timecard_engine=debug`.

use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber for the binary.
///
/// # Example
///
/// ```no_run
/// timecard_engine::logging::init();
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .init();
}

/// Installs a debug-level subscriber that writes through the test harness.
///
/// Safe to call from several tests; only the first call takes effect.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
