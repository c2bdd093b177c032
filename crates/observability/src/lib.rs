//! Tracing/logging setup shared by native embedders and tests.

/// Initialize process-wide tracing.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, formatting).
pub mod tracing;
