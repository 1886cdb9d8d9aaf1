//! # Mutation
//!
//! Independent per-bit flip. Each bit of the input flips with probability
//! `pm`; the result is always a new chromosome of identical length.

use crate::chromosome::Chromosome;
use crate::rng::RandomNumberGenerator;

/// Flips each bit of `chromosome` independently with probability `pm`.
pub fn mutate(
    chromosome: &Chromosome,
    pm: f64,
    rng: &mut RandomNumberGenerator,
) -> Chromosome {
    let bits = chromosome
        .bits()
        .iter()
        .map(|&bit| if rng.gen_bool(pm) { !bit } else { bit })
        .collect();
    Chromosome::new(bits)
}
