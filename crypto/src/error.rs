use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// XOR operands must represent equal-length byte arrays; a mismatch is
    /// corruption or a programming error, never something to truncate past.
    #[error("hex operand length mismatch: left {left} chars, right {right} chars")]
    HexLengthMismatch { left: usize, right: usize },

    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    /// The OS entropy source failed. Fatal to the current call — a weaker
    /// source is never substituted.
    #[error("secure random source failure: {0}")]
    RandomSourceFailure(String),
}
