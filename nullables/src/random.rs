//! Deterministic stand-ins for [`RandomSource`].

use faceseal_crypto::{CryptoError, RandomSource};
use std::sync::Mutex;

/// A random source that replays scripted byte strings.
///
/// Each `fill_bytes` call consumes the next script entry, cycling back to
/// the first once exhausted. Buffers longer than the entry repeat its bytes.
pub struct NullRandom {
    scripts: Vec<Vec<u8>>,
    next: Mutex<usize>,
}

impl NullRandom {
    /// Script the source with raw byte strings.
    pub fn new(scripts: &[&[u8]]) -> Self {
        assert!(!scripts.is_empty(), "scripted random needs at least one entry");
        Self {
            scripts: scripts.iter().map(|s| s.to_vec()).collect(),
            next: Mutex::new(0),
        }
    }

    /// Script the source with hex strings, in draw order.
    pub fn from_hex(scripts: &[&str]) -> Self {
        let decoded: Vec<Vec<u8>> = scripts
            .iter()
            .map(|s| hex::decode(s).unwrap_or_else(|_| panic!("invalid hex script: {s}")))
            .collect();
        assert!(!decoded.is_empty(), "scripted random needs at least one entry");
        Self {
            scripts: decoded,
            next: Mutex::new(0),
        }
    }
}

impl RandomSource for NullRandom {
    fn fill_bytes(&self, buf: &mut [u8]) -> Result<(), CryptoError> {
        let mut next = self
            .next
            .lock()
            .map_err(|_| CryptoError::RandomSourceFailure("script lock poisoned".into()))?;
        let script = &self.scripts[*next % self.scripts.len()];
        *next += 1;
        for (i, byte) in buf.iter_mut().enumerate() {
            *byte = script[i % script.len()];
        }
        Ok(())
    }
}

/// A random source whose every draw fails, for exercising abort paths.
#[derive(Clone, Copy, Debug, Default)]
pub struct FailingRandom;

impl RandomSource for FailingRandom {
    fn fill_bytes(&self, _buf: &mut [u8]) -> Result<(), CryptoError> {
        Err(CryptoError::RandomSourceFailure(
            "entropy source unavailable".into(),
        ))
    }
}
