//! Errors for the shared value types.

use thiserror::Error;

/// Errors from `BitVec` construction and binary operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BitsError {
    #[error("bit vector length mismatch: left {left}, right {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("invalid bit character {found:?} at position {position}")]
    InvalidBitChar { found: char, position: usize },
}

/// Errors from enrollment record set invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("enrollment set must hold exactly {expected} records, got {got}")]
    WrongRecordCount { expected: usize, got: usize },

    #[error("record {index} carries a different salt than the rest of the set")]
    SaltMismatch { index: usize },
}
