//! # Codec
//!
//! Maps a chromosome's bit string to the pair of real numbers it encodes.
//! The bit string splits into two contiguous halves; each half is read as an
//! unsigned binary integer and mapped affinely onto `[-10, 10]`.
//!
//! ## Example
//!
//! ```rust
//! use bitga::chromosome::Chromosome;
//! use bitga::codec::decode;
//!
//! let all_zeros: Chromosome = "0000".parse().unwrap();
//! let point = decode(&all_zeros);
//! assert_eq!(point.x1, -10.0);
//! assert_eq!(point.x2, -10.0);
//! ```

use crate::chromosome::Chromosome;

/// Lower bound of the decoded parameter interval.
pub const LOWER_BOUND: f64 = -10.0;

/// Upper bound of the decoded parameter interval.
pub const UPPER_BOUND: f64 = 10.0;

/// The pair of real-valued parameters a chromosome encodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodedPoint {
    pub x1: f64,
    pub x2: f64,
}

/// Decodes a chromosome into its two real-valued parameters.
///
/// The first half of the bit string becomes `x1`, the second half `x2`.
/// Each half is interpreted as an unsigned integer `v` in
/// `[0, 2^half_len - 1]` and mapped through
/// `x = -10 + v * 20 / (2^half_len - 1)`, a strictly increasing affine map
/// whose endpoints land exactly on the interval bounds.
///
/// Total over any chromosome of even, non-zero length; lengths are
/// validated at configuration time.
pub fn decode(chromosome: &Chromosome) -> DecodedPoint {
    let half = chromosome.len() / 2;
    let (first, second) = chromosome.bits().split_at(half);
    DecodedPoint {
        x1: decode_half(first),
        x2: decode_half(second),
    }
}

fn decode_half(bits: &[bool]) -> f64 {
    let value = bits.iter().fold(0u64, |acc, &bit| (acc << 1) | bit as u64);
    let max = (1u64 << bits.len()) - 1;
    LOWER_BOUND + value as f64 * (UPPER_BOUND - LOWER_BOUND) / max as f64
}
