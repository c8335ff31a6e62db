//! Test doubles for the infrastructure seams — a scripted random source, a
//! random source that always fails, and an in-memory enrollment store.
//!
//! Production code never depends on this crate; the other crates pull it in
//! as a dev-dependency only.

pub mod random;
pub mod store;

pub use random::{FailingRandom, NullRandom};
pub use store::NullStore;
