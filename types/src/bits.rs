//! Bit-string vector used throughout the protocol.
//!
//! Bits are stored unpacked (one byte per bit, value 0 or 1) — the protocol
//! works in XOR/slice/align operations over a few thousand bits per frame,
//! where index arithmetic dominates and packing buys nothing.

use crate::error::BitsError;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use zeroize::Zeroize;

/// An ordered sequence of bits.
///
/// Serializes as a `"0101…"` bit string so persisted helper data stays
/// human-inspectable.
#[derive(Clone, PartialEq, Eq, Zeroize)]
pub struct BitVec {
    bits: Vec<u8>,
}

impl BitVec {
    /// A vector of `len` zero bits.
    pub fn zeros(len: usize) -> Self {
        Self {
            bits: vec![0u8; len],
        }
    }

    /// Build from boolean values.
    pub fn from_bools(bools: &[bool]) -> Self {
        Self {
            bits: bools.iter().map(|&b| b as u8).collect(),
        }
    }

    /// Unpack bytes into bits, most-significant bit first.
    pub fn from_bytes_msb(bytes: &[u8]) -> Self {
        let mut bits = Vec::with_capacity(bytes.len() * 8);
        for byte in bytes {
            for shift in (0..8).rev() {
                bits.push((byte >> shift) & 1);
            }
        }
        Self { bits }
    }

    /// Parse a `"0101…"` bit string.
    pub fn from_bit_string(s: &str) -> Result<Self, BitsError> {
        let mut bits = Vec::with_capacity(s.len());
        for (position, c) in s.chars().enumerate() {
            match c {
                '0' => bits.push(0),
                '1' => bits.push(1),
                found => return Err(BitsError::InvalidBitChar { found, position }),
            }
        }
        Ok(Self { bits })
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The bit at `index` (0 or 1).
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    pub fn get(&self, index: usize) -> u8 {
        self.bits[index]
    }

    /// Flip the bit at `index`.
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    pub fn flip(&mut self, index: usize) {
        self.bits[index] ^= 1;
    }

    /// Raw bit values, one byte per bit.
    pub fn as_slice(&self) -> &[u8] {
        &self.bits
    }

    /// Bitwise XOR with an equal-length vector.
    pub fn xor(&self, other: &BitVec) -> Result<BitVec, BitsError> {
        if self.len() != other.len() {
            return Err(BitsError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        let bits = self
            .bits
            .iter()
            .zip(other.bits.iter())
            .map(|(a, b)| a ^ b)
            .collect();
        Ok(BitVec { bits })
    }

    /// Copy of the bits in `[start, end)`.
    ///
    /// # Panics
    /// Panics if the range is out of bounds.
    pub fn slice(&self, start: usize, end: usize) -> BitVec {
        BitVec {
            bits: self.bits[start..end].to_vec(),
        }
    }

    /// Concatenation: `self` followed by `other`.
    pub fn concat(&self, other: &BitVec) -> BitVec {
        let mut bits = Vec::with_capacity(self.len() + other.len());
        bits.extend_from_slice(&self.bits);
        bits.extend_from_slice(&other.bits);
        BitVec { bits }
    }

    /// Align to `len` bits: zero-pad on the right if shorter, truncate on
    /// the right if longer. This is the only alignment policy the protocol
    /// uses.
    pub fn resized(&self, len: usize) -> BitVec {
        let mut bits = self.bits.clone();
        bits.resize(len, 0);
        BitVec { bits }
    }

    /// Number of differing bit positions between two equal-length vectors.
    pub fn hamming_distance(&self, other: &BitVec) -> Result<usize, BitsError> {
        Ok(self.xor(other)?.bits.iter().filter(|&&b| b == 1).count())
    }

    /// Render as a `"0101…"` string.
    pub fn to_bit_string(&self) -> String {
        self.bits
            .iter()
            .map(|&b| if b == 1 { '1' } else { '0' })
            .collect()
    }
}

impl fmt::Debug for BitVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let preview: String = self
            .bits
            .iter()
            .take(16)
            .map(|&b| if b == 1 { '1' } else { '0' })
            .collect();
        if self.len() > 16 {
            write!(f, "BitVec({preview}…, len={})", self.len())
        } else {
            write!(f, "BitVec({preview})")
        }
    }
}

impl Serialize for BitVec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_bit_string())
    }
}

impl<'de> Deserialize<'de> for BitVec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        BitVec::from_bit_string(&s).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bytes_msb_orders_bits() {
        let v = BitVec::from_bytes_msb(&[0b1010_0001]);
        assert_eq!(v.as_slice(), &[1, 0, 1, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn xor_rejects_length_mismatch() {
        let a = BitVec::zeros(8);
        let b = BitVec::zeros(9);
        assert_eq!(
            a.xor(&b),
            Err(BitsError::LengthMismatch { left: 8, right: 9 })
        );
    }

    #[test]
    fn resized_pads_right_with_zeros() {
        let v = BitVec::from_bools(&[true, true]);
        let padded = v.resized(5);
        assert_eq!(padded.as_slice(), &[1, 1, 0, 0, 0]);
    }

    #[test]
    fn resized_truncates_right() {
        let v = BitVec::from_bools(&[true, false, true, true]);
        let cut = v.resized(2);
        assert_eq!(cut.as_slice(), &[1, 0]);
    }

    #[test]
    fn concat_preserves_order() {
        let a = BitVec::from_bit_string("101").unwrap();
        let b = BitVec::from_bit_string("01").unwrap();
        assert_eq!(a.concat(&b).to_bit_string(), "10101");
    }

    #[test]
    fn bit_string_roundtrip() {
        let v = BitVec::from_bit_string("10011").unwrap();
        assert_eq!(v.to_bit_string(), "10011");
    }

    #[test]
    fn bit_string_rejects_garbage() {
        let err = BitVec::from_bit_string("10x1").unwrap_err();
        assert_eq!(
            err,
            BitsError::InvalidBitChar {
                found: 'x',
                position: 2
            }
        );
    }

    #[test]
    fn hamming_distance_counts_flips() {
        let a = BitVec::from_bit_string("10101").unwrap();
        let b = BitVec::from_bit_string("10010").unwrap();
        assert_eq!(a.hamming_distance(&b).unwrap(), 3);
    }

    #[test]
    fn flip_is_involutive() {
        let mut v = BitVec::zeros(4);
        v.flip(2);
        assert_eq!(v.get(2), 1);
        v.flip(2);
        assert_eq!(v.get(2), 0);
    }

    #[test]
    fn serde_roundtrip_as_bit_string() {
        let v = BitVec::from_bit_string("0110").unwrap();
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "\"0110\"");
        let back: BitVec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
