//! FACESEAL — enrollment and verification over the BCH fuzzy extractor.
//!
//! [`FaceSeal`] ties the pipeline together: it owns the codec, the random
//! source, the protocol parameters and an enrollment store, and exposes the
//! three operations a caller needs — `enroll`, `verify` and
//! `clear_enrollment`. Frames arrive as distance vectors from an upstream
//! feature pipeline that has already applied liveness, pose and distance
//! gates.

pub mod enrollment;
pub mod error;
pub mod matcher;
pub mod state;
pub mod verification;

pub use enrollment::Enroller;
pub use error::ProtocolError;
pub use matcher::{match_frame_record, RecordMatch};
pub use state::SessionPhase;
pub use verification::{session_success, FrameMatchDetail, VerificationOutcome, Verifier};
pub use faceseal_utils::init_tracing;

use faceseal_codec::BchCodec;
use faceseal_crypto::{OsRandom, RandomSource};
use faceseal_store::EnrollmentStore;
use faceseal_types::{BchParams, EnrollmentRecord, EnrollmentSet, ProtocolParams};

/// The protocol facade: one instance per deployment configuration.
///
/// Parameters are fixed at construction. Changing the BCH parameters while
/// enrollment records exist makes their helpers undecodable, so a running
/// instance never mutates them.
pub struct FaceSeal<S: EnrollmentStore> {
    codec: BchCodec,
    rng: Box<dyn RandomSource>,
    params: ProtocolParams,
    store: S,
}

impl<S: EnrollmentStore> FaceSeal<S> {
    /// Build an instance drawing entropy from the operating system.
    pub fn new(
        params: ProtocolParams,
        bch: BchParams,
        store: S,
    ) -> Result<Self, ProtocolError> {
        Self::with_random_source(params, bch, store, Box::new(OsRandom))
    }

    /// Build an instance with an explicit random source.
    pub fn with_random_source(
        params: ProtocolParams,
        bch: BchParams,
        store: S,
        rng: Box<dyn RandomSource>,
    ) -> Result<Self, ProtocolError> {
        let codec = BchCodec::new(&bch).map_err(faceseal_extractor::ExtractorError::from)?;
        Ok(Self {
            codec,
            rng,
            params,
            store,
        })
    }

    pub fn params(&self) -> &ProtocolParams {
        &self.params
    }

    /// Enroll `identity` from a batch of frames, replacing any prior
    /// enrollment. Nothing is written unless a complete set is assembled.
    pub fn enroll(&self, identity: &str, frames: &[Vec<f64>]) -> Result<(), ProtocolError> {
        let set = Enroller::new(&self.codec, self.rng.as_ref(), &self.params).run(frames)?;
        let blob = serde_json::to_vec(&set.into_records())?;
        self.store.save(identity, &blob)?;
        tracing::info!(identity, "enrollment stored");
        Ok(())
    }

    /// Verify a batch of frames against `identity`'s stored enrollment.
    pub fn verify(
        &self,
        identity: &str,
        frames: &[Vec<f64>],
    ) -> Result<VerificationOutcome, ProtocolError> {
        let blob = self
            .store
            .load(identity)?
            .ok_or(ProtocolError::NoEnrollmentFound)?;
        let records: Vec<EnrollmentRecord> = serde_json::from_slice(&blob)?;
        // Revalidate on every load so a corrupted or truncated blob is
        // rejected before any matching happens.
        let set = EnrollmentSet::new(records, self.params.enroll_frame_count)?;

        Verifier::new(&self.codec, &self.params).run(&set, frames)
    }

    /// Remove `identity`'s stored enrollment, if any.
    pub fn clear_enrollment(&self, identity: &str) -> Result<(), ProtocolError> {
        self.store.clear(identity)?;
        tracing::info!(identity, "enrollment cleared");
        Ok(())
    }
}
