//! BCH fuzzy extractor — the code-offset construction.
//!
//! Enrollment binds a fresh random secret to the biometric bits:
//! `helper = (secret ++ encode(secret)) XOR biometric`. Verification undoes
//! the mask with a new capture and lets the code absorb up to `t` bit flips
//! of capture noise: a close-enough capture decodes to the identical secret
//! and therefore the identical hash, while a different face decodes to
//! garbage. Only the helper and the hash are ever persisted.

use crate::error::ExtractorError;
use faceseal_codec::BchCodec;
use faceseal_crypto::{constant_time_hex_eq, sha256_hex, RandomSource};
use faceseal_types::BitVec;
use zeroize::Zeroize;

/// Output of [`generate`]: the only artifacts that may be persisted.
#[derive(Clone, Debug)]
pub struct GeneratedSecret {
    /// One-time-pad-like mask, codeword length. Reveals nothing on its own.
    pub helper: BitVec,
    /// Hex SHA-256 of the secret's bit string. The secret itself is gone by
    /// the time this struct exists.
    pub secret_hash: String,
}

/// Output of [`reproduce`].
#[derive(Clone, Debug)]
pub struct ReproducedSecret {
    /// Hex SHA-256 of the decoded data bits.
    pub recovered_hash: String,
    /// Constant-time comparison of `recovered_hash` against the stored hash.
    /// This is the accept signal.
    pub hash_match: bool,
    /// The codec's reported error count — diagnostics only, never a second
    /// accept gate.
    pub error_count: usize,
}

/// Bind a fresh random secret to `biometric_bits`.
///
/// A new secret is drawn on every call: secrets are independent per
/// enrolled frame, never shared. Biometric bits are aligned to the codeword
/// length by right zero-padding or right truncation.
pub fn generate(
    codec: &BchCodec,
    rng: &dyn RandomSource,
    biometric_bits: &BitVec,
) -> Result<GeneratedSecret, ExtractorError> {
    let mut secret_bits = rng.random_bits(codec.data_len())?;
    let ecc = codec.encode(&secret_bits)?;
    let mut codeword = secret_bits.concat(&ecc);

    let aligned = biometric_bits.resized(codec.code_len());
    let helper = codeword.xor(&aligned)?;

    let mut secret_string = secret_bits.to_bit_string();
    let secret_hash = sha256_hex(&[&secret_string]);

    secret_string.zeroize();
    secret_bits.zeroize();
    codeword.zeroize();

    Ok(GeneratedSecret {
        helper,
        secret_hash,
    })
}

/// Recover the secret hash from a fresh capture and stored helper data.
///
/// The decoded data is hashed unconditionally — an uncorrectable word
/// produces a hash that simply fails the comparison, and the codec's error
/// count is passed through for diagnostics.
pub fn reproduce(
    codec: &BchCodec,
    biometric_bits: &BitVec,
    helper: &BitVec,
    stored_secret_hash: &str,
) -> Result<ReproducedSecret, ExtractorError> {
    let aligned = biometric_bits.resized(codec.code_len());
    let mut codeword = helper.xor(&aligned)?;

    let data = codeword.slice(0, codec.data_len());
    let ecc = codeword.slice(codec.data_len(), codec.code_len());
    let mut decoded = codec.decode_and_correct(&data, &ecc)?;

    let mut recovered_string = decoded.data.to_bit_string();
    let recovered_hash = sha256_hex(&[&recovered_string]);
    let hash_match = constant_time_hex_eq(&recovered_hash, stored_secret_hash);

    recovered_string.zeroize();
    decoded.data.zeroize();
    codeword.zeroize();

    Ok(ReproducedSecret {
        recovered_hash,
        hash_match,
        error_count: decoded.error_count,
    })
}
