//! GF(2^m) arithmetic via log/antilog tables.

use crate::error::CodecError;

/// Primitive polynomials for GF(2^m), m in 3..=13, low bits first with the
/// x^m term included (e.g. 0b1011 = x^3 + x + 1).
const PRIMITIVE_POLYS: [(u32, u32); 11] = [
    (3, 0b1011),
    (4, 0b1_0011),
    (5, 0b10_0101),
    (6, 0b100_0011),
    (7, 0b1000_1001),
    (8, 0b1_0001_1101),
    (9, 0b10_0001_0001),
    (10, 0b100_0000_1001),
    (11, 0b1000_0000_0101),
    (12, 0b1_0000_0101_0011),
    (13, 0b10_0000_0001_1011),
];

/// Log/antilog tables for GF(2^m).
///
/// Elements are stored as integers 0..=n where n = 2^m - 1; the zero element
/// has no logarithm and is special-cased in every operation.
#[derive(Debug)]
pub(crate) struct GfTables {
    n: usize,
    alog: Vec<u16>,
    log: Vec<u16>,
}

impl GfTables {
    pub(crate) fn new(m: u32) -> Result<Self, CodecError> {
        let poly = PRIMITIVE_POLYS
            .iter()
            .find(|(order, _)| *order == m)
            .map(|(_, poly)| *poly)
            .ok_or(CodecError::UnsupportedFieldOrder(m))?;

        let n = (1usize << m) - 1;
        let mut alog = vec![0u16; n];
        let mut log = vec![0u16; n + 1];
        let mut x: u32 = 1;
        for i in 0..n {
            alog[i] = x as u16;
            log[x as usize] = i as u16;
            x <<= 1;
            if x & (1 << m) != 0 {
                x ^= poly;
            }
        }
        Ok(Self { n, alog, log })
    }

    /// The multiplicative group order, 2^m - 1.
    pub(crate) fn order(&self) -> usize {
        self.n
    }

    /// α^e, with the exponent reduced mod n.
    pub(crate) fn alpha_pow(&self, e: usize) -> u16 {
        self.alog[e % self.n]
    }

    pub(crate) fn mul(&self, a: u16, b: u16) -> u16 {
        if a == 0 || b == 0 {
            return 0;
        }
        let e = self.log[a as usize] as usize + self.log[b as usize] as usize;
        self.alog[e % self.n]
    }

    /// Multiplicative inverse of a nonzero element.
    pub(crate) fn inv(&self, a: u16) -> u16 {
        debug_assert_ne!(a, 0, "zero has no inverse");
        let e = self.n - self.log[a as usize] as usize;
        self.alog[e % self.n]
    }
}
