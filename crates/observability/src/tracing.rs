//! Tracing/logging initialization.
//!
//! The listing view itself runs in a browser context; this subscriber is for
//! native embedding shells and the host-side test suites, where `RUST_LOG`
//! controls the filter.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .with_target(false)
        .try_init();
}
