//! Process-level helpers shared by binaries and integration tests.

pub mod logging;

pub use logging::init_tracing;
