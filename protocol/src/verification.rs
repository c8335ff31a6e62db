//! Verification orchestrator — majority vote over per-frame matches.

use crate::error::ProtocolError;
use crate::matcher::match_frame_record;
use crate::state::SessionPhase;
use faceseal_codec::BchCodec;
use faceseal_extractor::quantize;
use faceseal_types::{EnrollmentSet, ProtocolParams};

/// Session decision plus the per-frame evidence behind it. Created fresh
/// per attempt and never persisted.
#[derive(Clone, Debug)]
pub struct VerificationOutcome {
    /// The pass/fail bit: `matched_frame_count >= required_matches`.
    pub success: bool,
    /// Captured frames that matched at least one stored record.
    pub matched_frame_count: usize,
    /// Valid frames the session consumed.
    pub frames_used: usize,
    /// The majority threshold in force.
    pub required_matches: usize,
    /// `matched_frame_count / frames_used`, as a percentage. Informational
    /// only; the decision uses the raw count.
    pub match_percentage: f64,
    /// Terminal phase of the session: `Passed` or `Failed`.
    pub phase: SessionPhase,
    /// One entry per consumed frame, in capture order.
    pub frames: Vec<FrameMatchDetail>,
}

/// What happened to one captured frame in the matching loop.
#[derive(Clone, Debug)]
pub struct FrameMatchDetail {
    /// Position among the consumed frames (capture order).
    pub frame_index: usize,
    /// Index of the first stored record this frame matched, if any.
    pub matched_record: Option<u32>,
    /// Stored records scanned before the first match or exhaustion.
    pub records_scanned: usize,
}

/// The majority rule: strictly counting, no weighting.
pub fn session_success(matched_frame_count: usize, required_matches: usize) -> bool {
    matched_frame_count >= required_matches
}

/// Runs one verification session against a stored enrollment set.
pub struct Verifier<'a> {
    codec: &'a BchCodec,
    params: &'a ProtocolParams,
    phase: SessionPhase,
}

impl<'a> Verifier<'a> {
    pub fn new(codec: &'a BchCodec, params: &'a ProtocolParams) -> Self {
        Self {
            codec,
            params,
            phase: SessionPhase::Idle,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Decide the session from `frames` against `stored`.
    ///
    /// The first `verify_frame_count` valid frames are consumed in capture
    /// order; fewer valid frames aborts the session rather than passing
    /// with low confidence. Each frame scans the stored records in storage
    /// order and stops at its first match.
    pub fn run(
        &mut self,
        stored: &EnrollmentSet,
        frames: &[Vec<f64>],
    ) -> Result<VerificationOutcome, ProtocolError> {
        self.phase = SessionPhase::Filtering;
        let wanted = self.params.verify_frame_count;
        let valid: Vec<&Vec<f64>> = frames
            .iter()
            .filter(|f| f.len() == self.params.distance_count && f.iter().all(|x| x.is_finite()))
            .take(wanted)
            .collect();
        if valid.len() < wanted {
            self.phase = SessionPhase::Aborted;
            return Err(ProtocolError::InsufficientFrames {
                needed: wanted,
                got: valid.len(),
            });
        }

        self.phase = SessionPhase::Matching;
        match self.match_frames(stored, &valid) {
            Ok(mut outcome) => {
                self.phase = if outcome.success {
                    SessionPhase::Passed
                } else {
                    SessionPhase::Failed
                };
                outcome.phase = self.phase;
                tracing::info!(
                    success = outcome.success,
                    matched = outcome.matched_frame_count,
                    used = outcome.frames_used,
                    threshold = outcome.required_matches,
                    "verification session decided"
                );
                Ok(outcome)
            }
            Err(error) => {
                self.phase = SessionPhase::Aborted;
                Err(error)
            }
        }
    }

    fn match_frames(
        &self,
        stored: &EnrollmentSet,
        valid: &[&Vec<f64>],
    ) -> Result<VerificationOutcome, ProtocolError> {
        let mut details = Vec::with_capacity(valid.len());
        let mut matched_frame_count = 0usize;

        for (frame_index, &frame) in valid.iter().enumerate() {
            let bits = quantize(frame, self.params)?;
            let mut detail = FrameMatchDetail {
                frame_index,
                matched_record: None,
                records_scanned: 0,
            };
            for record in stored.records() {
                detail.records_scanned += 1;
                let result = match_frame_record(self.codec, &bits, record)?;
                if result.matched() {
                    detail.matched_record = Some(record.index);
                    break;
                }
            }
            tracing::debug!(
                frame = frame_index,
                matched = detail.matched_record.is_some(),
                scanned = detail.records_scanned,
                "frame matching finished"
            );
            if detail.matched_record.is_some() {
                matched_frame_count += 1;
            }
            details.push(detail);
        }

        let frames_used = valid.len();
        let required_matches = self.params.match_threshold;
        Ok(VerificationOutcome {
            success: session_success(matched_frame_count, required_matches),
            matched_frame_count,
            frames_used,
            required_matches,
            match_percentage: matched_frame_count as f64 / frames_used as f64 * 100.0,
            // Overwritten with the terminal phase by `run`.
            phase: SessionPhase::Matching,
            frames: details,
        })
    }
}
