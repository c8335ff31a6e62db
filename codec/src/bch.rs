//! Systematic binary BCH encode and bounded-distance decode.
//!
//! Construction: the generator polynomial is the product of `(x - α^j)` over
//! the union of the cyclotomic cosets of 1..=2t, so codewords are exactly
//! the multiples of g(x) and any two codewords differ in at least 2t+1
//! positions. Decoding runs syndrome computation, Berlekamp-Massey and a
//! Chien search; up to t flipped bits are corrected exactly.

use crate::error::CodecError;
use crate::gf::GfTables;
use faceseal_types::{BchParams, BitVec};

/// Result of `decode_and_correct`.
///
/// When `corrected` is false the received word was beyond the code's
/// correction radius; `data` is returned unmodified and `error_count` is the
/// decoder's estimate. Callers that gate on a downstream hash comparison can
/// use `data` as-is — a wrong correction and an uncorrectable word fail that
/// gate the same way.
#[derive(Clone, Debug)]
pub struct Decoded {
    /// The (possibly corrected) data bits, length `k`.
    pub data: BitVec,
    /// Number of bit errors found, or the locator-degree estimate when
    /// correction failed. Diagnostic only.
    pub error_count: usize,
    /// Whether the word decoded inside the correction radius.
    pub corrected: bool,
}

/// An owned BCH codec handle with parameters fixed at construction.
#[derive(Debug)]
pub struct BchCodec {
    gf: GfTables,
    t: usize,
    n: usize,
    k: usize,
    ecc_bits: usize,
    /// Generator polynomial coefficients, g[0]..=g[ecc_bits], each 0 or 1.
    generator: Vec<u8>,
}

impl BchCodec {
    /// Build the codec for `params`, deriving `n = 2^m - 1`,
    /// `ecc_bits = deg g(x)` and `k = n - ecc_bits`.
    pub fn new(params: &BchParams) -> Result<Self, CodecError> {
        let gf = GfTables::new(params.m)?;
        let n = gf.order();
        if params.t == 0 || 2 * params.t >= n {
            return Err(CodecError::InvalidErrorBudget { t: params.t, n });
        }

        // Union of the cyclotomic cosets {i, 2i, 4i, ...} for i = 1..=2t.
        let mut is_root = vec![false; n];
        for i in 1..=2 * params.t {
            let mut j = i % n;
            while !is_root[j] {
                is_root[j] = true;
                j = (j * 2) % n;
            }
        }

        // g(x) = Π (x + α^j) over the root set. The set is closed under
        // squaring, so the product has GF(2) coefficients.
        let mut g: Vec<u16> = vec![1];
        for (j, _) in is_root.iter().enumerate().filter(|(_, &r)| r) {
            let root = gf.alpha_pow(j);
            let mut next = vec![0u16; g.len() + 1];
            for (d, &coef) in g.iter().enumerate() {
                next[d + 1] ^= coef;
                next[d] ^= gf.mul(coef, root);
            }
            g = next;
        }
        let generator: Vec<u8> = g
            .iter()
            .map(|&coef| {
                debug_assert!(coef <= 1, "generator polynomial must be binary");
                coef as u8
            })
            .collect();

        let ecc_bits = generator.len() - 1;
        let k = n - ecc_bits;
        if k == 0 {
            return Err(CodecError::NoDataCapacity { n, ecc_bits });
        }

        Ok(Self {
            gf,
            t: params.t,
            n,
            k,
            ecc_bits,
            generator,
        })
    }

    /// Codeword length `n`.
    pub fn code_len(&self) -> usize {
        self.n
    }

    /// Data length `k`.
    pub fn data_len(&self) -> usize {
        self.k
    }

    /// Parity length `ecc_bits`.
    pub fn ecc_len(&self) -> usize {
        self.ecc_bits
    }

    /// Maximum number of correctable bit errors `t`.
    pub fn correctable_errors(&self) -> usize {
        self.t
    }

    /// Systematic encode: parity bits for `data` (`k` bits in, `ecc_bits`
    /// out). Data bit `i` is the coefficient of `x^(ecc_bits + i)`; parity
    /// bit `j` is the coefficient of `x^j`.
    pub fn encode(&self, data: &BitVec) -> Result<BitVec, CodecError> {
        if data.len() != self.k {
            return Err(CodecError::InvalidDataLength {
                expected: self.k,
                got: data.len(),
            });
        }

        // Long division of data(x)·x^r by g(x), highest coefficient first.
        let r = self.ecc_bits;
        let mut rem = vec![0u8; r];
        for i in (0..self.k).rev() {
            let feedback = data.get(i) ^ rem[r - 1];
            for j in (1..r).rev() {
                rem[j] = rem[j - 1] ^ (feedback & self.generator[j]);
            }
            rem[0] = feedback & self.generator[0];
        }

        Ok(BitVec::from_bools(
            &rem.iter().map(|&b| b == 1).collect::<Vec<_>>(),
        ))
    }

    /// Decode `data ++ ecc`, correcting up to `t` bit errors across the
    /// whole codeword. Never fails on noisy input — wrong-shape input is the
    /// only error condition.
    pub fn decode_and_correct(&self, data: &BitVec, ecc: &BitVec) -> Result<Decoded, CodecError> {
        if data.len() != self.k {
            return Err(CodecError::InvalidDataLength {
                expected: self.k,
                got: data.len(),
            });
        }
        if ecc.len() != self.ecc_bits {
            return Err(CodecError::InvalidEccLength {
                expected: self.ecc_bits,
                got: ecc.len(),
            });
        }

        // Received word as polynomial coefficients: parity in the low
        // positions, data above (the same layout encode produces).
        let r = self.ecc_bits;
        let mut received = vec![0u8; self.n];
        for j in 0..r {
            received[j] = ecc.get(j);
        }
        for i in 0..self.k {
            received[r + i] = data.get(i);
        }

        let syndromes = self.syndromes(&received);
        if syndromes.iter().all(|&s| s == 0) {
            return Ok(Decoded {
                data: data.clone(),
                error_count: 0,
                corrected: true,
            });
        }

        let (sigma, register_len) = self.berlekamp_massey(&syndromes);
        let degree = sigma.len() - 1;
        if register_len > self.t || degree != register_len {
            return Ok(Decoded {
                data: data.clone(),
                error_count: register_len,
                corrected: false,
            });
        }

        let positions = self.chien_search(&sigma);
        if positions.len() != degree {
            return Ok(Decoded {
                data: data.clone(),
                error_count: degree,
                corrected: false,
            });
        }

        for &pos in &positions {
            received[pos] ^= 1;
        }
        let corrected_data = BitVec::from_bools(
            &received[r..self.n]
                .iter()
                .map(|&b| b == 1)
                .collect::<Vec<_>>(),
        );

        Ok(Decoded {
            data: corrected_data,
            error_count: positions.len(),
            corrected: true,
        })
    }

    /// S_l = R(α^l) for l = 1..=2t.
    fn syndromes(&self, received: &[u8]) -> Vec<u16> {
        let mut syndromes = Vec::with_capacity(2 * self.t);
        for l in 1..=2 * self.t {
            let mut acc = 0u16;
            for (j, &bit) in received.iter().enumerate() {
                if bit == 1 {
                    acc ^= self.gf.alpha_pow(j * l);
                }
            }
            syndromes.push(acc);
        }
        syndromes
    }

    /// Berlekamp-Massey: shortest LFSR (error locator σ) generating the
    /// syndrome sequence. Returns (σ trimmed to its degree, register length).
    fn berlekamp_massey(&self, syndromes: &[u16]) -> (Vec<u16>, usize) {
        let mut sigma: Vec<u16> = vec![1];
        let mut prev: Vec<u16> = vec![1];
        let mut register_len = 0usize;
        let mut gap = 1usize;
        let mut prev_discrepancy = 1u16;

        for step in 0..syndromes.len() {
            let mut discrepancy = syndromes[step];
            for i in 1..sigma.len().min(register_len + 1) {
                if step >= i {
                    discrepancy ^= self.gf.mul(sigma[i], syndromes[step - i]);
                }
            }

            if discrepancy == 0 {
                gap += 1;
                continue;
            }

            let scale = self.gf.mul(discrepancy, self.gf.inv(prev_discrepancy));
            let update_len = prev.len() + gap;
            if register_len * 2 <= step {
                let snapshot = sigma.clone();
                if sigma.len() < update_len {
                    sigma.resize(update_len, 0);
                }
                for (i, &coef) in prev.iter().enumerate() {
                    sigma[i + gap] ^= self.gf.mul(scale, coef);
                }
                register_len = step + 1 - register_len;
                prev = snapshot;
                prev_discrepancy = discrepancy;
                gap = 1;
            } else {
                if sigma.len() < update_len {
                    sigma.resize(update_len, 0);
                }
                for (i, &coef) in prev.iter().enumerate() {
                    sigma[i + gap] ^= self.gf.mul(scale, coef);
                }
                gap += 1;
            }
        }

        while sigma.len() > 1 && sigma.last() == Some(&0) {
            sigma.pop();
        }
        (sigma, register_len)
    }

    /// Roots of σ are α^{-j} for error positions j.
    fn chien_search(&self, sigma: &[u16]) -> Vec<usize> {
        let mut positions = Vec::new();
        for j in 0..self.n {
            let mut eval = 0u16;
            for (i, &coef) in sigma.iter().enumerate() {
                if coef != 0 {
                    eval ^= self.gf.mul(coef, self.gf.alpha_pow((self.n - j) * i));
                }
            }
            if eval == 0 {
                positions.push(j);
            }
        }
        positions
    }
}
