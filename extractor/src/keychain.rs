//! Key-binding chain — derives a per-frame token bound to the
//! fuzzy-extractor secret and a per-enrollment salt.
//!
//! Chain: `k1 = secret_hash ^ salt`, `K2 = k1 ^ session_key`,
//! `token = SHA-256(hex(session_key) ++ hex(secret_hash))`. Only
//! `{secret_hash, salt, K2, token}` are persisted; the session key and `k1`
//! are not. At verification the session key is recovered from the stored
//! values and the token recomputed — both the hash gate and this token gate
//! must pass for a frame to count as matched.

use crate::error::ExtractorError;
use faceseal_crypto::{hex_xor, sha256_hex, RandomSource};
use zeroize::Zeroize;

/// Per-frame persisted chain values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBinding {
    /// `hex_xor(hex_xor(secret_hash, salt), session_key)`.
    pub session_key_xor_hash: String,
    /// `SHA-256(hex(session_key) ++ hex(secret_hash))`.
    pub token: String,
}

/// Draw the 256-bit salt shared by all frames of one enrollment session.
pub fn new_salt(rng: &dyn RandomSource) -> Result<String, ExtractorError> {
    Ok(rng.random_hex_256()?)
}

/// Bind one frame: draw a fresh 256-bit session key and derive the
/// persisted chain values. The session key never leaves this function.
pub fn bind_frame(
    rng: &dyn RandomSource,
    secret_hash: &str,
    salt: &str,
) -> Result<FrameBinding, ExtractorError> {
    let mut session_key = rng.random_hex_256()?;
    let k1 = hex_xor(secret_hash, salt)?;
    let session_key_xor_hash = hex_xor(&k1, &session_key)?;
    let token = sha256_hex(&[&session_key, secret_hash]);
    session_key.zeroize();

    Ok(FrameBinding {
        session_key_xor_hash,
        token,
    })
}

/// Recompute the token from a candidate secret hash and one record's stored
/// chain values. Equals the stored token exactly when the candidate hash is
/// the one the frame was bound to.
pub fn recompute_token(
    secret_hash: &str,
    salt: &str,
    session_key_xor_hash: &str,
) -> Result<String, ExtractorError> {
    let k1 = hex_xor(secret_hash, salt)?;
    let mut session_key = hex_xor(&k1, session_key_xor_hash)?;
    let token = sha256_hex(&[&session_key, secret_hash]);
    session_key.zeroize();
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use faceseal_crypto::{CryptoError, OsRandom};
    use faceseal_nullables::{FailingRandom, NullRandom};

    fn hashes() -> (String, String) {
        (
            sha256_hex(&["secret bits"]),
            sha256_hex(&["another secret"]),
        )
    }

    #[test]
    fn recomputed_token_matches_binding() {
        let rng = OsRandom;
        let (secret_hash, _) = hashes();
        let salt = new_salt(&rng).unwrap();

        let binding = bind_frame(&rng, &secret_hash, &salt).unwrap();
        let token = recompute_token(&secret_hash, &salt, &binding.session_key_xor_hash).unwrap();
        assert_eq!(token, binding.token);
    }

    #[test]
    fn wrong_secret_hash_breaks_the_chain() {
        let rng = OsRandom;
        let (secret_hash, other_hash) = hashes();
        let salt = new_salt(&rng).unwrap();

        let binding = bind_frame(&rng, &secret_hash, &salt).unwrap();
        let token = recompute_token(&other_hash, &salt, &binding.session_key_xor_hash).unwrap();
        assert_ne!(token, binding.token);
    }

    #[test]
    fn session_key_recovery_is_exact() {
        // With a known session key, K2 must unwind back to it.
        let session_key = "ab".repeat(32);
        let rng = NullRandom::from_hex(&[&session_key]);
        let (secret_hash, _) = hashes();
        let salt = "17".repeat(32);

        let binding = bind_frame(&rng, &secret_hash, &salt).unwrap();
        let k1 = hex_xor(&secret_hash, &salt).unwrap();
        let recovered = hex_xor(&k1, &binding.session_key_xor_hash).unwrap();
        assert_eq!(recovered, session_key);
        assert_eq!(binding.token, sha256_hex(&[&session_key, &secret_hash]));
    }

    #[test]
    fn salt_and_key_mismatch_is_surfaced() {
        let rng = OsRandom;
        let (secret_hash, _) = hashes();
        let err = bind_frame(&rng, &secret_hash, "abcd").unwrap_err();
        assert!(matches!(
            err,
            ExtractorError::Crypto(CryptoError::HexLengthMismatch { .. })
        ));
    }

    #[test]
    fn entropy_failure_aborts_binding() {
        let (secret_hash, _) = hashes();
        let salt = "00".repeat(32);
        assert!(matches!(
            bind_frame(&FailingRandom, &secret_hash, &salt).unwrap_err(),
            ExtractorError::Crypto(CryptoError::RandomSourceFailure(_))
        ));
        assert!(matches!(
            new_salt(&FailingRandom).unwrap_err(),
            ExtractorError::Crypto(CryptoError::RandomSourceFailure(_))
        ));
    }
}
