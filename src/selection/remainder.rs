use crate::error::Result;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{
    effective_weights, ensure_two_selectable, SelectionStrategy,
};

/// A selection strategy that selects parents through stochastic remainder
/// sampling.
///
/// Each individual's expected copy count `e_i = fitness_i / total * N` is
/// split into an integer and a fractional part. The integer parts place
/// deterministic copies into an intermediate pool; the remaining slots are
/// filled by weighted draws over the fractional parts, without
/// replacement. The two parents are then two distinct slots of the pool,
/// drawn uniformly.
///
/// The deterministic part gives above-average individuals a guaranteed
/// presence, while the remainder draw keeps below-average individuals in
/// play.
///
/// # Examples
///
/// ```
/// use bitga::selection::{RemainderStochasticSelection, SelectionStrategy};
/// use bitga::rng::RandomNumberGenerator;
/// use bitga::error::Result;
///
/// fn main() -> Result<()> {
///     let fitness = vec![0.5, 0.8, 0.3, 0.9, 0.1];
///     let mut rng = RandomNumberGenerator::from_seed(42);
///
///     let selection = RemainderStochasticSelection::new();
///     let (parent1, parent2) = selection.select(&fitness, &mut rng)?;
///
///     assert!(parent1 < fitness.len());
///     assert!(parent2 < fitness.len());
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct RemainderStochasticSelection;

impl RemainderStochasticSelection {
    /// Creates a new RemainderStochasticSelection strategy.
    pub fn new() -> Self {
        Self
    }

    /// Builds the intermediate pool of population indices, of the same
    /// size as the population.
    fn build_pool(&self, fitness: &[f64], rng: &mut RandomNumberGenerator) -> Vec<usize> {
        let size = fitness.len();
        let weights = effective_weights(fitness);
        let total: f64 = weights.iter().sum();

        let expected: Vec<f64> = weights
            .iter()
            .map(|&w| w / total * size as f64)
            .collect();

        // Deterministic part: floor(e_i) copies of each individual.
        let mut pool = Vec::with_capacity(size);
        for (index, &count) in expected.iter().enumerate() {
            for _ in 0..count.floor() as usize {
                pool.push(index);
            }
        }

        // Stochastic part: fill the leftover slots by the fractional
        // remainders, zeroing an index's weight once it has been drawn.
        let mut fractions: Vec<f64> = expected.iter().map(|&e| e - e.floor()).collect();
        while pool.len() < size {
            let index = match weighted_draw(&fractions, rng) {
                Some(index) => index,
                None => rng.gen_index(size),
            };
            pool.push(index);
            fractions[index] = 0.0;
        }

        pool
    }
}

/// Draws an index proportionally to `weights`, or `None` if the weights
/// sum to nothing.
fn weighted_draw(weights: &[f64], rng: &mut RandomNumberGenerator) -> Option<usize> {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return None;
    }

    let r = rng.gen_range(0.0, total);
    let mut cumulative = 0.0;
    let mut last_positive = None;
    for (index, &weight) in weights.iter().enumerate() {
        if weight <= 0.0 {
            continue;
        }
        cumulative += weight;
        last_positive = Some(index);
        if r < cumulative {
            return Some(index);
        }
    }

    // Floating-point shortfall in the running sum; land on the last
    // positive-weight index.
    last_positive
}

impl SelectionStrategy for RemainderStochasticSelection {
    fn select(
        &self,
        fitness: &[f64],
        rng: &mut RandomNumberGenerator,
    ) -> Result<(usize, usize)> {
        ensure_two_selectable(fitness)?;

        let pool = self.build_pool(fitness, rng);

        // Two distinct pool slots, uniformly without replacement. The
        // slots are distinct even when they hold copies of the same
        // individual.
        let first = rng.gen_index(pool.len());
        let mut second = rng.gen_index(pool.len() - 1);
        if second >= first {
            second += 1;
        }

        Ok((pool[first], pool[second]))
    }
}
