//! Tracing setup.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber, filtered by `RUST_LOG`.
///
/// Safe to call more than once; later calls are no-ops so tests can each
/// request logging without coordinating.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
