//! XOR of equal-length hex strings — the masking primitive of the
//! key-binding chain.

use crate::error::CryptoError;

/// XOR two hex strings representing equal-length byte arrays; the result is
/// lowercase hex of the same length. Unequal lengths are a hard error.
pub fn hex_xor(a: &str, b: &str) -> Result<String, CryptoError> {
    if a.len() != b.len() {
        return Err(CryptoError::HexLengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    let left = hex::decode(a).map_err(|e| CryptoError::InvalidHex(e.to_string()))?;
    let right = hex::decode(b).map_err(|e| CryptoError::InvalidHex(e.to_string()))?;
    let xored: Vec<u8> = left.iter().zip(right.iter()).map(|(x, y)| x ^ y).collect();
    Ok(hex::encode(xored))
}
