//! # Crossover
//!
//! Single-point recombination. With probability `pc` a crossover point is
//! chosen uniformly from `{1, ..., L-1}` and the parents' tails are
//! swapped; otherwise the parents pass through unchanged.

use crate::chromosome::Chromosome;
use crate::rng::RandomNumberGenerator;

/// Recombines two parents into two children.
///
/// With probability `pc`, picks a crossover point and swaps tails:
/// `child1 = parent1[..point] + parent2[point..]` and vice versa.
/// Otherwise both parents are returned unchanged.
///
/// Parents must have the same length; both children preserve it.
pub fn crossover(
    parent1: &Chromosome,
    parent2: &Chromosome,
    pc: f64,
    rng: &mut RandomNumberGenerator,
) -> (Chromosome, Chromosome) {
    debug_assert_eq!(parent1.len(), parent2.len());

    if parent1.len() > 1 && rng.gen_bool(pc) {
        let point = 1 + rng.gen_index(parent1.len() - 1);
        crossover_at(parent1, parent2, point)
    } else {
        (parent1.clone(), parent2.clone())
    }
}

/// Swaps the parents' tails at a fixed crossover point.
pub(crate) fn crossover_at(
    parent1: &Chromosome,
    parent2: &Chromosome,
    point: usize,
) -> (Chromosome, Chromosome) {
    let (head1, tail1) = parent1.bits().split_at(point);
    let (head2, tail2) = parent2.bits().split_at(point);

    let child1 = head1.iter().chain(tail2.iter()).copied().collect();
    let child2 = head2.iter().chain(tail1.iter()).copied().collect();
    (Chromosome::new(child1), Chromosome::new(child2))
}
