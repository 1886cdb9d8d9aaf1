use std::cmp::Ordering;

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{ensure_two_selectable, SelectionStrategy};

/// A selection strategy that selects parents through tournament selection.
///
/// A single tournament of `tournament_size` distinct individuals is drawn
/// uniformly without replacement and ranked by fitness. The tournament's
/// winner and runner-up become the two parents; one tournament yields
/// both, rather than two tournaments yielding one winner each.
///
/// Tournament selection balances exploration and exploitation:
/// - smaller tournaments keep selection closer to random
/// - larger tournaments focus harder on the best individuals
///
/// # Examples
///
/// ```
/// use bitga::selection::{SelectionStrategy, TournamentSelection};
/// use bitga::rng::RandomNumberGenerator;
/// use bitga::error::Result;
///
/// fn main() -> Result<()> {
///     let fitness = vec![0.5, 0.8, 0.3, 0.9, 0.1];
///     let mut rng = RandomNumberGenerator::from_seed(42);
///
///     let selection = TournamentSelection::new(3)?;
///     let (winner, runner_up) = selection.select(&fitness, &mut rng)?;
///
///     assert_ne!(winner, runner_up);
///
///     Ok(())
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct TournamentSelection {
    tournament_size: usize,
}

impl TournamentSelection {
    /// Creates a new TournamentSelection strategy with the specified
    /// tournament size.
    ///
    /// # Arguments
    ///
    /// * `tournament_size` - The number of individuals that enter the
    ///   tournament. Must be at least 2, because the tournament supplies
    ///   both the winner and the runner-up.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is less than 2.
    pub fn new(tournament_size: usize) -> Result<Self> {
        if tournament_size < 2 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 2 to produce a winner and a runner-up"
                    .to_string(),
            ));
        }

        Ok(Self { tournament_size })
    }

    /// The number of individuals entering each tournament.
    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        // Safe to unwrap because the default size is valid
        Self::new(3).unwrap()
    }
}

/// Orders fitness values best-first, with non-finite values (the invalid
/// sentinel) ranked below every finite one.
fn rank_descending(a: f64, b: f64) -> Ordering {
    match (a.is_finite(), b.is_finite()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

impl SelectionStrategy for TournamentSelection {
    fn select(
        &self,
        fitness: &[f64],
        rng: &mut RandomNumberGenerator,
    ) -> Result<(usize, usize)> {
        ensure_two_selectable(fitness)?;

        if self.tournament_size > fitness.len() {
            return Err(GeneticError::Configuration(format!(
                "Tournament size ({}) exceeds population size ({})",
                self.tournament_size,
                fitness.len()
            )));
        }

        // Draw tournament_size distinct indices with a partial
        // Fisher-Yates shuffle.
        let mut indices: Vec<usize> = (0..fitness.len()).collect();
        for i in 0..self.tournament_size {
            let j = i + rng.gen_index(indices.len() - i);
            indices.swap(i, j);
        }

        let mut participants: Vec<usize> = indices[..self.tournament_size].to_vec();
        participants.sort_by(|&a, &b| rank_descending(fitness[a], fitness[b]));

        Ok((participants[0], participants[1]))
    }
}
