//! SHA-256 hashing over UTF-8 text.
//!
//! The protocol hashes textual encodings (bit strings, concatenated hex
//! strings), not raw bytes — both sides of every comparison must agree on
//! the exact text fed to the hash.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// SHA-256 over the UTF-8 bytes of `parts` in sequence, hex-encoded
/// (avoids concatenation allocation).
pub fn sha256_hex(parts: &[&str]) -> String {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part.as_bytes());
    }
    hex::encode(hasher.finalize())
}

/// Constant-time equality of two hex digests.
///
/// Length is compared first (not secret); the content comparison leaks no
/// timing information about where the strings diverge.
pub fn constant_time_hex_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_deterministic() {
        assert_eq!(sha256_hex(&["hello"]), sha256_hex(&["hello"]));
    }

    #[test]
    fn sha256_known_answer() {
        // SHA-256("abc")
        assert_eq!(
            sha256_hex(&["abc"]),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn sha256_multi_equivalent_to_concatenation() {
        assert_eq!(sha256_hex(&["hello", "world"]), sha256_hex(&["helloworld"]));
    }

    #[test]
    fn sha256_output_is_64_hex_chars() {
        let digest = sha256_hex(&[""]);
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn constant_time_eq_matches_plain_eq() {
        let a = sha256_hex(&["a"]);
        let b = sha256_hex(&["b"]);
        assert!(constant_time_hex_eq(&a, &a));
        assert!(!constant_time_hex_eq(&a, &b));
        assert!(!constant_time_hex_eq(&a, &a[..32]));
    }
}
