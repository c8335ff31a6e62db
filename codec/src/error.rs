use thiserror::Error;

/// Errors from codec construction and wrong-shape encode/decode inputs.
///
/// A high corrected-error count is never an error — it is data returned in
/// [`crate::Decoded`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("unsupported Galois field order m={0} (supported: 3..=13)")]
    UnsupportedFieldOrder(u32),

    #[error("error budget t={t} is invalid for code length n={n}")]
    InvalidErrorBudget { t: usize, n: usize },

    #[error("no data capacity: code length {n} minus {ecc_bits} parity bits leaves no data bits")]
    NoDataCapacity { n: usize, ecc_bits: usize },

    #[error("invalid data length: expected {expected} bits, got {got}")]
    InvalidDataLength { expected: usize, got: usize },

    #[error("invalid ecc length: expected {expected} bits, got {got}")]
    InvalidEccLength { expected: usize, got: usize },
}
