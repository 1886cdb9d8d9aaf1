use std::fmt::Debug;

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Trait for parent-selection strategies.
///
/// A selection strategy picks the two parents for one pairing, biased by
/// the fitness scores of the current population. Implementations return
/// *indices* into the population rather than copies, so callers (and
/// tests) can reason about which individuals were chosen.
///
/// The same individual may appear as both parents for strategies that
/// sample with replacement; strategies that guarantee distinct parents say
/// so in their own documentation.
///
/// # Examples
///
/// ```
/// use bitga::selection::{RouletteWheelSelection, SelectionStrategy};
/// use bitga::rng::RandomNumberGenerator;
/// use bitga::error::Result;
///
/// fn main() -> Result<()> {
///     let fitness = vec![0.5, 0.8, 0.3, 0.9, 0.1];
///     let mut rng = RandomNumberGenerator::from_seed(42);
///
///     let selection = RouletteWheelSelection::new();
///     let (parent1, parent2) = selection.select(&fitness, &mut rng)?;
///
///     assert!(parent1 < fitness.len());
///     assert!(parent2 < fitness.len());
///
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Selects two parents from the population described by `fitness`.
    ///
    /// # Arguments
    ///
    /// * `fitness` - The fitness scores of the current population, indexed
    ///   as the population is.
    /// * `rng` - The random number generator driving the draw.
    ///
    /// # Returns
    ///
    /// The indices of the two selected parents.
    ///
    /// # Errors
    ///
    /// Returns an error if the population is empty or holds fewer than two
    /// individuals; both indicate a broken population invariant upstream.
    fn select(
        &self,
        fitness: &[f64],
        rng: &mut RandomNumberGenerator,
    ) -> Result<(usize, usize)>;
}

impl SelectionStrategy for Box<dyn SelectionStrategy> {
    fn select(
        &self,
        fitness: &[f64],
        rng: &mut RandomNumberGenerator,
    ) -> Result<(usize, usize)> {
        self.as_ref().select(fitness, rng)
    }
}

/// Rejects populations that cannot yield two parents.
pub(crate) fn ensure_two_selectable(fitness: &[f64]) -> Result<()> {
    if fitness.is_empty() {
        return Err(GeneticError::EmptyPopulation);
    }
    if fitness.len() < 2 {
        return Err(GeneticError::Selection(
            "Selecting two parents requires a population of at least two".to_string(),
        ));
    }
    Ok(())
}

/// Replaces non-finite fitness values with usable selection weights.
///
/// An individual whose objective evaluation failed carries infinite
/// fitness as a sentinel. Feeding that into a weighted draw would make
/// the total non-finite and every probability degenerate, so its weight is
/// capped at the maximum finite fitness present in the population. If no
/// individual has finite fitness, every weight becomes 1.0 and selection
/// degrades to uniform.
///
/// Finite fitness is strictly positive by construction, so the returned
/// weights always sum to a positive, finite total.
pub(crate) fn effective_weights(fitness: &[f64]) -> Vec<f64> {
    let max_finite = fitness
        .iter()
        .copied()
        .filter(|f| f.is_finite())
        .fold(f64::NEG_INFINITY, f64::max);

    if max_finite == f64::NEG_INFINITY {
        return vec![1.0; fitness.len()];
    }

    fitness
        .iter()
        .map(|&f| if f.is_finite() { f } else { max_finite })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_two_selectable() {
        assert!(matches!(
            ensure_two_selectable(&[]),
            Err(GeneticError::EmptyPopulation)
        ));
        assert!(matches!(
            ensure_two_selectable(&[1.0]),
            Err(GeneticError::Selection(_))
        ));
        assert!(ensure_two_selectable(&[1.0, 2.0]).is_ok());
    }

    #[test]
    fn test_effective_weights_passes_finite_values_through() {
        let fitness = vec![0.5, 2.0, 1.0];
        assert_eq!(effective_weights(&fitness), fitness);
    }

    #[test]
    fn test_effective_weights_caps_infinite_values() {
        let fitness = vec![0.5, f64::INFINITY, 2.0];
        assert_eq!(effective_weights(&fitness), vec![0.5, 2.0, 2.0]);
    }

    #[test]
    fn test_effective_weights_falls_back_to_uniform() {
        let fitness = vec![f64::INFINITY, f64::INFINITY];
        assert_eq!(effective_weights(&fitness), vec![1.0, 1.0]);
    }
}
