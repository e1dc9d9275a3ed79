//! Logging setup shared by back-office binaries.

/// Tracing subscriber configuration.
pub mod tracing;

/// Initialize process-wide logging with the `info` default level.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init("info");
}
