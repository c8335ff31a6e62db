//! Distance quantizer — maps one frame's real-valued distance vector to a
//! fixed-length bit string.
//!
//! Min and max are taken over the single input vector, not across frames, so
//! every frame is self-normalizing. A degenerate vector (max == min) carries
//! no information and quantizes deterministically to the mid value.

use crate::error::ExtractorError;
use faceseal_types::{BitVec, ProtocolParams};

/// Quantize `distances` to `distance_count * bits_per_value` bits, each
/// value linearly rescaled to `[0, 2^bits_per_value - 1]`, rounded to the
/// nearest level and emitted most-significant-bit first in input order.
///
/// The input must hold exactly `params.distance_count` finite values; any
/// other length is fatal to the call.
pub fn quantize(distances: &[f64], params: &ProtocolParams) -> Result<BitVec, ExtractorError> {
    if distances.len() != params.distance_count {
        return Err(ExtractorError::InvalidVectorLength {
            expected: params.distance_count,
            got: distances.len(),
        });
    }

    let bits_per_value = params.bits_per_value;
    let max_level = (1u64 << bits_per_value) - 1;
    let min = distances.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = distances.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    let mut bits = Vec::with_capacity(distances.len() * bits_per_value);
    if max == min {
        // No spread to encode: every value quantizes to the mid level.
        let mid = 1u64 << (bits_per_value - 1);
        for _ in distances {
            push_value_bits(&mut bits, mid, bits_per_value);
        }
    } else {
        let range = max - min;
        for &value in distances {
            let scaled = ((value - min) / range * max_level as f64).round() as u64;
            push_value_bits(&mut bits, scaled.min(max_level), bits_per_value);
        }
    }

    Ok(BitVec::from_bools(
        &bits.iter().map(|&b| b == 1).collect::<Vec<_>>(),
    ))
}

fn push_value_bits(bits: &mut Vec<u8>, value: u64, bits_per_value: usize) {
    for shift in (0..bits_per_value).rev() {
        bits.push(((value >> shift) & 1) as u8);
    }
}
