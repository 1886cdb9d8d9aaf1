use tracing::{debug, info};

use super::options::GaOptions;
use crate::chromosome::Chromosome;
use crate::codec::{decode, DecodedPoint};
use crate::error::{GeneticError, Result};
use crate::objective::evaluate_point;
use crate::operators::{crossover, mutate};
use crate::population::{evaluate_fitness, initialize};
use crate::rng::RandomNumberGenerator;
use crate::selection::{build_strategy, SelectionStrategy};

use std::fmt;

/// The best solution observed across a whole run: the elitist record the
/// engine keeps outside the evolving population.
#[derive(Debug, Clone, PartialEq)]
pub struct BestSolution {
    /// The best chromosome observed.
    pub chromosome: Chromosome,
    /// Its fitness score.
    pub fitness: f64,
    /// Its decoded parameters.
    pub point: DecodedPoint,
    /// The objective value at the decoded point.
    pub objective: f64,
}

impl fmt::Display for BestSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "best chromosome: {}", self.chromosome)?;
        writeln!(f, "x1 = {:.4}, x2 = {:.4}", self.point.x1, self.point.x2)?;
        write!(f, "f(x1, x2) = {:.5}", self.objective)
    }
}

/// The generational controller: evolves a population of bit-string
/// chromosomes for a fixed number of generations using the injected
/// parent-selection strategy, and tracks the best individual ever
/// produced.
///
/// # Examples
///
/// ```
/// use bitga::evolution::{GaOptions, GeneticAlgorithm};
/// use bitga::evolution::options::SelectionMethod;
/// use bitga::rng::RandomNumberGenerator;
/// use bitga::error::Result;
///
/// fn main() -> Result<()> {
///     let options = GaOptions::builder()
///         .num_generations(10)
///         .selection_method(SelectionMethod::Tournament)
///         .build();
///     let algorithm = GeneticAlgorithm::from_options(options)?;
///
///     let mut rng = RandomNumberGenerator::from_seed(42);
///     let best = algorithm.run(&mut rng)?;
///
///     assert!(best.fitness.is_finite());
///     assert!((-10.0..=10.0).contains(&best.point.x1));
///
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct GeneticAlgorithm<S>
where
    S: SelectionStrategy,
{
    options: GaOptions,
    selection: S,
}

impl<S> GeneticAlgorithm<S>
where
    S: SelectionStrategy,
{
    /// Creates a new `GeneticAlgorithm` with the specified options and
    /// selection strategy.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail validation.
    pub fn new(options: GaOptions, selection: S) -> Result<Self> {
        options.validate()?;
        Ok(Self { options, selection })
    }

    /// The options this algorithm was configured with.
    pub fn options(&self) -> &GaOptions {
        &self.options
    }

    /// Evolves a uniformly random initial population and returns the best
    /// solution observed.
    pub fn run(&self, rng: &mut RandomNumberGenerator) -> Result<BestSolution> {
        let initial = initialize(
            self.options.get_population_size(),
            self.options.get_chromosome_length(),
            rng,
        );
        self.run_with_population(initial, rng)
    }

    /// Evolves the given initial population.
    ///
    /// Exposed so callers can reproduce a run from a known starting
    /// population; [`run`](Self::run) is the random-initialization
    /// entry point.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial population does not match the
    /// configured population size and chromosome length.
    pub fn run_with_population(
        &self,
        initial: Vec<Chromosome>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<BestSolution> {
        let size = self.options.get_population_size();
        let length = self.options.get_chromosome_length();

        if initial.len() != size {
            return Err(GeneticError::Configuration(format!(
                "Initial population has {} individuals, options require {}",
                initial.len(),
                size
            )));
        }
        if let Some(odd) = initial.iter().find(|c| c.len() != length) {
            return Err(GeneticError::Configuration(format!(
                "Initial chromosome {} has {} bits, options require {}",
                odd,
                odd.len(),
                length
            )));
        }

        let pc = self.options.get_crossover_probability();
        let pm = self.options.get_mutation_probability();

        let mut population = initial;
        let mut fitness = evaluate_fitness(&population);
        let mut best: Option<(Chromosome, f64)> = None;

        for generation in 0..self.options.get_num_generations() {
            // Refill in pairs until the buffer reaches the population
            // size, then cut the possible surplus child.
            let mut next = Vec::with_capacity(size + 1);
            while next.len() < size {
                let (first, second) = self.selection.select(&fitness, rng)?;
                let (child1, child2) =
                    crossover(&population[first], &population[second], pc, rng);
                next.push(mutate(&child1, pm, rng));
                next.push(mutate(&child2, pm, rng));
            }
            next.truncate(size);

            fitness = evaluate_fitness(&next);
            population = next;

            // Elitist record: strictly better, and never an individual
            // carrying the infinite invalid-evaluation sentinel.
            for (chromosome, &score) in population.iter().zip(&fitness) {
                let improves = match &best {
                    Some((_, best_score)) => score > *best_score,
                    None => true,
                };
                if score.is_finite() && improves {
                    best = Some((chromosome.clone(), score));
                }
            }

            debug!(
                generation,
                best_fitness = best.as_ref().map(|(_, score)| *score),
                "generation complete"
            );
        }

        let (chromosome, fitness) = best.ok_or_else(|| {
            GeneticError::InvalidNumericValue(
                "Every evaluated individual had non-finite fitness".to_string(),
            )
        })?;

        let point = decode(&chromosome);
        let objective = evaluate_point(&point);
        info!(
            fitness,
            objective,
            x1 = point.x1,
            x2 = point.x2,
            "evolution complete"
        );

        Ok(BestSolution {
            chromosome,
            fitness,
            point,
            objective,
        })
    }
}

impl GeneticAlgorithm<Box<dyn SelectionStrategy>> {
    /// Creates a `GeneticAlgorithm` whose selection strategy is built from
    /// the options' [`SelectionMethod`](super::options::SelectionMethod).
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail validation.
    pub fn from_options(options: GaOptions) -> Result<Self> {
        let selection = build_strategy(&options)?;
        Self::new(options, selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evolution::options::SelectionMethod;
    use crate::selection::RouletteWheelSelection;

    fn small_options() -> GaOptions {
        GaOptions::builder()
            .population_size(8)
            .chromosome_length(16)
            .num_generations(5)
            .build()
    }

    #[test]
    fn test_new_validates_options() {
        let options = GaOptions::builder().population_size(0).build();
        let result = GeneticAlgorithm::new(options, RouletteWheelSelection::new());
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_run_produces_a_finite_best() {
        let algorithm =
            GeneticAlgorithm::new(small_options(), RouletteWheelSelection::new()).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);
        let best = algorithm.run(&mut rng).unwrap();

        assert_eq!(best.chromosome.len(), 16);
        assert!(best.fitness.is_finite());
        assert!(best.fitness > 0.0);
        assert!(best.objective.is_finite());
    }

    #[test]
    fn test_run_with_population_rejects_wrong_size() {
        let algorithm =
            GeneticAlgorithm::new(small_options(), RouletteWheelSelection::new()).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);
        let short = vec![Chromosome::random(16, &mut rng); 3];
        assert!(algorithm.run_with_population(short, &mut rng).is_err());
    }

    #[test]
    fn test_run_with_population_rejects_wrong_length() {
        let algorithm =
            GeneticAlgorithm::new(small_options(), RouletteWheelSelection::new()).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(42);
        let wrong = vec![Chromosome::random(8, &mut rng); 8];
        assert!(algorithm.run_with_population(wrong, &mut rng).is_err());
    }

    #[test]
    fn test_from_options_builds_configured_strategy() {
        let options = small_options();
        for method in [
            SelectionMethod::StochasticUniversal,
            SelectionMethod::RouletteWheel,
            SelectionMethod::StochasticRemainder,
            SelectionMethod::Tournament,
        ] {
            let options = GaOptions::builder()
                .population_size(options.get_population_size())
                .chromosome_length(options.get_chromosome_length())
                .num_generations(options.get_num_generations())
                .selection_method(method)
                .build();
            let algorithm = GeneticAlgorithm::from_options(options).unwrap();
            let mut rng = RandomNumberGenerator::from_seed(42);
            assert!(algorithm.run(&mut rng).is_ok());
        }
    }

    #[test]
    fn test_display_formats_result_block() {
        let chromosome: Chromosome = "0000".parse().unwrap();
        let point = decode(&chromosome);
        let objective = evaluate_point(&point);
        let best = BestSolution {
            chromosome,
            fitness: 1.0,
            point,
            objective,
        };
        let rendered = best.to_string();
        assert!(rendered.contains("best chromosome: 0000"));
        assert!(rendered.contains("x1 = -10.0000, x2 = -10.0000"));
        assert!(rendered.contains("f(x1, x2) = "));
    }
}
