//! Enrollment orchestrator — turns a batch of accepted frames into a
//! complete enrollment set, or nothing at all.

use crate::error::ProtocolError;
use faceseal_codec::BchCodec;
use faceseal_crypto::RandomSource;
use faceseal_extractor::{bind_frame, generate, new_salt, quantize, ExtractorError};
use faceseal_types::{EnrollmentRecord, EnrollmentSet, ProtocolParams, Timestamp};

/// Runs one enrollment session.
///
/// Upstream capture gates (liveness, pose, distance) have already filtered
/// the frames; this orchestrator only cares that enough of them survive
/// cryptographic processing. A per-frame failure drops that frame and the
/// batch continues; a shortfall at the end fails the whole session. No
/// partial set is ever returned.
pub struct Enroller<'a> {
    codec: &'a BchCodec,
    rng: &'a dyn RandomSource,
    params: &'a ProtocolParams,
}

impl<'a> Enroller<'a> {
    pub fn new(codec: &'a BchCodec, rng: &'a dyn RandomSource, params: &'a ProtocolParams) -> Self {
        Self { codec, rng, params }
    }

    /// Build an enrollment set from `frames`, consuming the first
    /// `enroll_frame_count` frames that process cleanly.
    pub fn run(&self, frames: &[Vec<f64>]) -> Result<EnrollmentSet, ProtocolError> {
        let needed = self.params.enroll_frame_count;
        if frames.len() < needed {
            return Err(ProtocolError::InsufficientFrames {
                needed,
                got: frames.len(),
            });
        }

        // One salt per enrollment session, shared by every record.
        let salt = new_salt(self.rng)?;

        let mut records = Vec::with_capacity(needed);
        let mut dropped = 0usize;
        for frame in frames {
            if records.len() == needed {
                break;
            }
            match self.enroll_frame(frame, &salt, records.len() as u32) {
                Ok(record) => records.push(record),
                Err(error) => {
                    dropped += 1;
                    tracing::warn!(%error, dropped, "enrollment frame dropped");
                }
            }
        }

        if records.len() < needed {
            tracing::warn!(
                accepted = records.len(),
                needed,
                dropped,
                "enrollment abandoned, not enough surviving frames"
            );
            return Err(ProtocolError::EnrollmentIncomplete {
                needed,
                accepted: records.len(),
            });
        }

        tracing::info!(records = records.len(), dropped, "enrollment set assembled");
        Ok(EnrollmentSet::new(records, needed)?)
    }

    fn enroll_frame(
        &self,
        frame: &[f64],
        salt: &str,
        index: u32,
    ) -> Result<EnrollmentRecord, ExtractorError> {
        let bits = quantize(frame, self.params)?;
        let generated = generate(self.codec, self.rng, &bits)?;
        let binding = bind_frame(self.rng, &generated.secret_hash, salt)?;
        Ok(EnrollmentRecord {
            index,
            helper: generated.helper,
            secret_hash: generated.secret_hash,
            salt: salt.to_string(),
            session_key_xor_hash: binding.session_key_xor_hash,
            token: binding.token,
            timestamp: Timestamp::now(),
        })
    }
}
