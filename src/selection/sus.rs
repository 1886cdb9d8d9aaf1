use crate::error::Result;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{
    effective_weights, ensure_two_selectable, SelectionStrategy,
};

/// A selection strategy that selects both parents through stochastic
/// universal sampling (Baker's SUS).
///
/// Two pointers spaced half the total fitness apart are laid over the
/// population's cumulative fitness, with a single random offset choosing
/// where the first pointer falls. Both pointers are then resolved against
/// one shared left-to-right sweep of the cumulative sum. The shared sweep
/// is what gives SUS its low sampling variance: the two picks are
/// correlated, and an individual holding more than half the total fitness
/// is guaranteed a slot.
///
/// # Examples
///
/// ```
/// use bitga::selection::{SelectionStrategy, StochasticUniversalSelection};
/// use bitga::rng::RandomNumberGenerator;
/// use bitga::error::Result;
///
/// fn main() -> Result<()> {
///     let fitness = vec![1.0, 2.0, 3.0, 4.0];
///     let mut rng = RandomNumberGenerator::from_seed(42);
///
///     let selection = StochasticUniversalSelection::new();
///     let (parent1, parent2) = selection.select(&fitness, &mut rng)?;
///
///     // The sweep visits parents in population order.
///     assert!(parent1 <= parent2);
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct StochasticUniversalSelection;

impl StochasticUniversalSelection {
    /// Creates a new StochasticUniversalSelection strategy.
    pub fn new() -> Self {
        Self
    }
}

impl SelectionStrategy for StochasticUniversalSelection {
    fn select(
        &self,
        fitness: &[f64],
        rng: &mut RandomNumberGenerator,
    ) -> Result<(usize, usize)> {
        ensure_two_selectable(fitness)?;

        let weights = effective_weights(fitness);
        let total: f64 = weights.iter().sum();
        let spacing = total / 2.0;

        let start = rng.gen_range(0.0, spacing);
        let pointers = [start, start + spacing];

        // One shared sweep: the running sum and index never restart
        // between pointers.
        let mut selected = [0usize; 2];
        let mut index = 0;
        let mut cumulative = weights[0];
        for (slot, &pointer) in pointers.iter().enumerate() {
            while cumulative < pointer && index + 1 < weights.len() {
                index += 1;
                cumulative += weights[index];
            }
            selected[slot] = index;
        }

        Ok((selected[0], selected[1]))
    }
}
