//! Secure random source — trait seam plus the OS-backed implementation.
//!
//! The protocol draws secrets (per-frame secret bits, the enrollment salt,
//! per-frame session keys) through this trait so tests can substitute
//! deterministic doubles. Entropy failure is surfaced as
//! `CryptoError::RandomSourceFailure`, never papered over.

use crate::error::CryptoError;
use faceseal_types::BitVec;

/// A source of cryptographic-quality random bytes.
pub trait RandomSource: Send + Sync {
    /// Fill `buf` with random bytes.
    fn fill_bytes(&self, buf: &mut [u8]) -> Result<(), CryptoError>;

    /// Draw `len` random bits.
    fn random_bits(&self, len: usize) -> Result<BitVec, CryptoError> {
        let mut bytes = vec![0u8; len.div_ceil(8)];
        self.fill_bytes(&mut bytes)?;
        Ok(BitVec::from_bytes_msb(&bytes).resized(len))
    }

    /// Draw 32 random bytes as a lowercase hex string (the salt and
    /// session-key width of the key-binding chain).
    fn random_hex_256(&self) -> Result<String, CryptoError> {
        let mut bytes = [0u8; 32];
        self.fill_bytes(&mut bytes)?;
        Ok(hex::encode(bytes))
    }
}

/// The operating system's entropy source.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill_bytes(&self, buf: &mut [u8]) -> Result<(), CryptoError> {
        getrandom::getrandom(buf).map_err(|e| CryptoError::RandomSourceFailure(e.to_string()))
    }
}
