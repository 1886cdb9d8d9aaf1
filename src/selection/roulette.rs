use crate::error::Result;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{
    effective_weights, ensure_two_selectable, SelectionStrategy,
};

/// A selection strategy that selects individuals through roulette wheel
/// selection.
///
/// Roulette wheel selection (also known as fitness proportionate
/// selection) selects each parent with probability proportional to its
/// fitness. The two parents are drawn independently and with replacement,
/// so the same individual may be selected twice.
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
#[derive(Debug, Clone, Default)]
pub struct RouletteWheelSelection;

impl RouletteWheelSelection {
    /// Creates a new RouletteWheelSelection strategy.
    pub fn new() -> Self {
        Self
    }

    /// Calculates the cumulative selection probabilities for each
    /// individual from its effective weight.
    ///
    /// The last entry is forced to exactly 1.0 so floating-point drift in
    /// the running sum cannot leave the wheel short.
    fn calculate_probabilities(&self, fitness: &[f64]) -> Vec<f64> {
        let weights = effective_weights(fitness);
        let sum: f64 = weights.iter().sum();

        let mut cumulative = 0.0;
        let mut probs: Vec<f64> = Vec::with_capacity(weights.len());
        for &weight in &weights {
            cumulative += weight / sum;
            probs.push(cumulative);
        }

        if let Some(last) = probs.last_mut() {
            *last = 1.0;
        }

        probs
    }

    /// Spins the wheel once and returns the index of the selected
    /// individual.
    fn select_individual(
        &self,
        cumulative_probs: &[f64],
        rng: &mut RandomNumberGenerator,
    ) -> usize {
        let r = rng.gen_range(0.0, 1.0);

        for (i, &prob) in cumulative_probs.iter().enumerate() {
            if r <= prob {
                return i;
            }
        }

        // Unreachable while the last entry is pinned to 1.0; keep the
        // fallback anyway.
        cumulative_probs.len() - 1
    }
}

impl SelectionStrategy for RouletteWheelSelection {
    fn select(
        &self,
        fitness: &[f64],
        rng: &mut RandomNumberGenerator,
    ) -> Result<(usize, usize)> {
        ensure_two_selectable(fitness)?;

        let cumulative_probs = self.calculate_probabilities(fitness);

        let parent1 = self.select_individual(&cumulative_probs, rng);
        let parent2 = self.select_individual(&cumulative_probs, rng);

        Ok((parent1, parent2))
    }
}
