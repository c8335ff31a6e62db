//! Cryptographic primitives for the FACESEAL protocol.
//!
//! - **SHA-256** over UTF-8 text for secret hashes and tokens
//! - **hex XOR** for the key-binding chain (hard error on length mismatch)
//! - **RandomSource** — fallible OS-backed entropy, never silently degraded

pub mod error;
pub mod hash;
pub mod hexxor;
pub mod random;

pub use error::CryptoError;
pub use hash::{constant_time_hex_eq, sha256_hex};
pub use hexxor::hex_xor;
pub use random::{OsRandom, RandomSource};
