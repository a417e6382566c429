//! Logging setup shared by embedders of the route guard.

/// Initialize process-wide tracing with the default settings.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(&tracing::LogSettings::from_env());
}

/// Tracing configuration (filters, output format).
pub mod tracing;
