//! Single frame-against-record check, pulled out of the verification loop
//! so the two-gate rule is testable independently of iteration order.

use crate::error::ProtocolError;
use faceseal_codec::BchCodec;
use faceseal_crypto::constant_time_hex_eq;
use faceseal_extractor::{recompute_token, reproduce};
use faceseal_types::{BitVec, EnrollmentRecord};

/// Result of checking one captured frame against one stored record.
#[derive(Clone, Copy, Debug)]
pub struct RecordMatch {
    /// The fuzzy extractor recovered the record's secret hash.
    pub hash_match: bool,
    /// The recomputed key-binding token equals the stored one. Only
    /// evaluated when `hash_match` holds; otherwise false.
    pub token_match: bool,
    /// Bit errors the codec corrected, for diagnostics.
    pub error_count: usize,
}

impl RecordMatch {
    /// Both gates must pass for the frame to count as matched.
    pub fn matched(&self) -> bool {
        self.hash_match && self.token_match
    }
}

/// Check `frame_bits` against one stored record.
///
/// When the hash gate fails, the token gate is skipped entirely — a
/// mismatched frame never pays for the token recomputation. When it holds,
/// the token is recomputed from the *recovered* hash, which at that point
/// equals the stored one.
pub fn match_frame_record(
    codec: &BchCodec,
    frame_bits: &BitVec,
    record: &EnrollmentRecord,
) -> Result<RecordMatch, ProtocolError> {
    let reproduced = reproduce(codec, frame_bits, &record.helper, &record.secret_hash)?;
    if !reproduced.hash_match {
        return Ok(RecordMatch {
            hash_match: false,
            token_match: false,
            error_count: reproduced.error_count,
        });
    }

    let token = recompute_token(
        &reproduced.recovered_hash,
        &record.salt,
        &record.session_key_xor_hash,
    )?;
    Ok(RecordMatch {
        hash_match: true,
        token_match: constant_time_hex_eq(&token, &record.token),
        error_count: reproduced.error_count,
    })
}
