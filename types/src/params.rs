//! Protocol parameters — fixed at construction and passed by reference.
//!
//! Mismatched BCH parameters make previously stored helper data undecodable,
//! so both structs are chosen once per deployment and never changed while
//! enrollment records for them exist.

use serde::{Deserialize, Serialize};

/// Frame counts, fusion threshold and quantizer shape.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProtocolParams {
    /// Number of accepted frames an enrollment needs, and the exact size of
    /// every committed enrollment set.
    pub enroll_frame_count: usize,

    /// Number of valid frames a verification session consumes (the first
    /// `verify_frame_count` in capture order).
    pub verify_frame_count: usize,

    /// Minimum matched frames (out of `verify_frame_count`) for a pass.
    pub match_threshold: usize,

    /// Length of the externally supplied distance vector, one per frame.
    pub distance_count: usize,

    /// Quantizer resolution: bits emitted per distance value.
    pub bits_per_value: usize,
}

impl ProtocolParams {
    /// FACESEAL defaults — the shipped configuration.
    pub fn faceseal_defaults() -> Self {
        Self {
            enroll_frame_count: 80,
            verify_frame_count: 10,
            match_threshold: 5,
            distance_count: 316,
            bits_per_value: 8,
        }
    }
}

/// Default is the FACESEAL configuration.
impl Default for ProtocolParams {
    fn default() -> Self {
        Self::faceseal_defaults()
    }
}

/// Binary BCH code parameters.
///
/// The code length is `n = 2^m - 1`; the parity length follows from the
/// generator polynomial (at most `m * t` bits) and the data length is
/// `k = n - ecc_bits`, which must stay positive.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct BchParams {
    /// Galois-field order: arithmetic is over GF(2^m).
    pub m: u32,

    /// Number of correctable bit errors per codeword.
    pub t: usize,
}

impl BchParams {
    /// FACESEAL defaults — BCH(511, 304) correcting 25 errors.
    pub fn faceseal_defaults() -> Self {
        Self { m: 9, t: 25 }
    }
}

impl Default for BchParams {
    fn default() -> Self {
        Self::faceseal_defaults()
    }
}
