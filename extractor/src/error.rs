use faceseal_codec::CodecError;
use faceseal_crypto::CryptoError;
use faceseal_types::BitsError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractorError {
    /// The caller must reject the frame, not retry with padding.
    #[error("invalid distance vector length: expected {expected}, got {got}")]
    InvalidVectorLength { expected: usize, got: usize },

    /// The codec call itself failed (wrong-shape input) — distinct from a
    /// high corrected-error count, which is data.
    #[error("codec failure: {0}")]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error(transparent)]
    Bits(#[from] BitsError),
}
