use faceseal_extractor::ExtractorError;
use faceseal_store::StoreError;
use faceseal_types::RecordError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Fewer frames were supplied than the session needs.
    #[error("insufficient frames: need {needed}, got {got}")]
    InsufficientFrames { needed: usize, got: usize },

    /// Enough frames were supplied, but too many failed per-frame
    /// processing to assemble a full enrollment set.
    #[error("enrollment incomplete: need {needed} records, only {accepted} frames succeeded")]
    EnrollmentIncomplete { needed: usize, accepted: usize },

    /// Verification was requested for an identity with no stored enrollment.
    #[error("no enrollment found for this identity")]
    NoEnrollmentFound,

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Extractor(#[from] ExtractorError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("enrollment blob serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}
