//! Process-wide logging setup shared by binaries and tests.
//!
//! Domain crates only emit `tracing` events; whoever hosts them calls
//! [`init`] once at startup.

pub mod subscriber;

pub use subscriber::{DEFAULT_FILTER, env_filter};

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let _ = subscriber::init();
}
