//! # GaOptions
//!
//! The `GaOptions` struct carries the configuration of a run: population
//! size, chromosome length, generation count, operator probabilities and
//! the parent-selection method. The defaults evolve 20 individuals of 32
//! bits for 100 generations with `pc = 0.8` and `pm = 0.1`.
//!
//! ## Example
//!
//! ```rust
//! use bitga::evolution::options::{GaOptions, SelectionMethod};
//!
//! let options = GaOptions::builder()
//!     .num_generations(200)
//!     .population_size(50)
//!     .selection_method(SelectionMethod::Tournament)
//!     .tournament_size(4)
//!     .build();
//!
//! assert!(options.validate().is_ok());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{GeneticError, Result};

/// The parent-selection strategy to run with.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMethod {
    /// Stochastic universal sampling: two equally spaced pointers over the
    /// fitness wheel, resolved in one shared sweep.
    StochasticUniversal,
    /// Fitness-proportionate selection with two independent spins.
    RouletteWheel,
    /// Deterministic expected-count copies plus weighted fractional fill.
    StochasticRemainder,
    /// Winner and runner-up of one k-way tournament.
    Tournament,
}

impl fmt::Display for SelectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SelectionMethod::StochasticUniversal => "sus",
            SelectionMethod::RouletteWheel => "roulette",
            SelectionMethod::StochasticRemainder => "remainder",
            SelectionMethod::Tournament => "tournament",
        };
        f.write_str(name)
    }
}

impl FromStr for SelectionMethod {
    type Err = GeneticError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sus" | "stochastic-universal" => Ok(SelectionMethod::StochasticUniversal),
            "roulette" | "roulette-wheel" => Ok(SelectionMethod::RouletteWheel),
            "remainder" | "stochastic-remainder" => Ok(SelectionMethod::StochasticRemainder),
            "tournament" => Ok(SelectionMethod::Tournament),
            other => Err(GeneticError::Configuration(format!(
                "Unknown selection method {:?} (expected sus, roulette, remainder or tournament)",
                other
            ))),
        }
    }
}

/// Configuration of a genetic algorithm run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct GaOptions {
    population_size: usize,
    chromosome_length: usize,
    num_generations: usize,
    crossover_probability: f64,
    mutation_probability: f64,
    selection_method: SelectionMethod,
    tournament_size: usize,
}

impl GaOptions {
    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_chromosome_length(&self) -> usize {
        self.chromosome_length
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_crossover_probability(&self) -> f64 {
        self.crossover_probability
    }

    pub fn get_mutation_probability(&self) -> f64 {
        self.mutation_probability
    }

    pub fn get_selection_method(&self) -> SelectionMethod {
        self.selection_method
    }

    /// Only consulted by the tournament method.
    pub fn get_tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Checks every parameter against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error naming the first offending
    /// parameter.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(GeneticError::Configuration(
                "Population size must be at least 2".to_string(),
            ));
        }

        // The upper bound keeps each half within a u64 and within f64's
        // 53-bit mantissa, so the decoded map stays injective per half.
        if self.chromosome_length < 2
            || self.chromosome_length > 64
            || self.chromosome_length % 2 != 0
        {
            return Err(GeneticError::Configuration(format!(
                "Chromosome length must be even and within [2, 64], got {}",
                self.chromosome_length
            )));
        }

        if self.num_generations == 0 {
            return Err(GeneticError::Configuration(
                "Number of generations must be at least 1".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.crossover_probability) {
            return Err(GeneticError::Configuration(format!(
                "Crossover probability must be within [0, 1], got {}",
                self.crossover_probability
            )));
        }

        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(GeneticError::Configuration(format!(
                "Mutation probability must be within [0, 1], got {}",
                self.mutation_probability
            )));
        }

        if self.selection_method == SelectionMethod::Tournament
            && (self.tournament_size < 2 || self.tournament_size > self.population_size)
        {
            return Err(GeneticError::Configuration(format!(
                "Tournament size must be within [2, population size], got {}",
                self.tournament_size
            )));
        }

        Ok(())
    }

    /// Returns a builder for creating a `GaOptions` instance.
    pub fn builder() -> GaOptionsBuilder {
        GaOptionsBuilder::default()
    }
}

impl Default for GaOptions {
    fn default() -> Self {
        Self {
            population_size: 20,
            chromosome_length: 32,
            num_generations: 100,
            crossover_probability: 0.8,
            mutation_probability: 0.1,
            selection_method: SelectionMethod::RouletteWheel,
            tournament_size: 3,
        }
    }
}

/// Builder for `GaOptions`.
///
/// Provides a fluent interface for constructing `GaOptions` instances;
/// every field falls back to its default when unset.
#[derive(Debug, Clone, Default)]
pub struct GaOptionsBuilder {
    population_size: Option<usize>,
    chromosome_length: Option<usize>,
    num_generations: Option<usize>,
    crossover_probability: Option<f64>,
    mutation_probability: Option<f64>,
    selection_method: Option<SelectionMethod>,
    tournament_size: Option<usize>,
}

impl GaOptionsBuilder {
    /// Sets the number of individuals per generation.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    /// Sets the total number of bits per chromosome (split evenly between
    /// the two parameters).
    pub fn chromosome_length(mut self, value: usize) -> Self {
        self.chromosome_length = Some(value);
        self
    }

    /// Sets the number of generations to evolve.
    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    /// Sets the per-pairing crossover probability.
    pub fn crossover_probability(mut self, value: f64) -> Self {
        self.crossover_probability = Some(value);
        self
    }

    /// Sets the per-bit mutation probability.
    pub fn mutation_probability(mut self, value: f64) -> Self {
        self.mutation_probability = Some(value);
        self
    }

    /// Sets the parent-selection method.
    pub fn selection_method(mut self, value: SelectionMethod) -> Self {
        self.selection_method = Some(value);
        self
    }

    /// Sets the tournament size (tournament method only).
    pub fn tournament_size(mut self, value: usize) -> Self {
        self.tournament_size = Some(value);
        self
    }

    /// Builds the `GaOptions` instance.
    pub fn build(self) -> GaOptions {
        let defaults = GaOptions::default();
        GaOptions {
            population_size: self.population_size.unwrap_or(defaults.population_size),
            chromosome_length: self
                .chromosome_length
                .unwrap_or(defaults.chromosome_length),
            num_generations: self.num_generations.unwrap_or(defaults.num_generations),
            crossover_probability: self
                .crossover_probability
                .unwrap_or(defaults.crossover_probability),
            mutation_probability: self
                .mutation_probability
                .unwrap_or(defaults.mutation_probability),
            selection_method: self.selection_method.unwrap_or(defaults.selection_method),
            tournament_size: self.tournament_size.unwrap_or(defaults.tournament_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_configuration() {
        let options = GaOptions::default();
        assert_eq!(options.get_population_size(), 20);
        assert_eq!(options.get_chromosome_length(), 32);
        assert_eq!(options.get_num_generations(), 100);
        assert_eq!(options.get_crossover_probability(), 0.8);
        assert_eq!(options.get_mutation_probability(), 0.1);
        assert_eq!(options.get_tournament_size(), 3);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides_individual_fields() {
        let options = GaOptions::builder()
            .population_size(4)
            .chromosome_length(4)
            .num_generations(1)
            .crossover_probability(0.0)
            .mutation_probability(0.0)
            .build();
        assert_eq!(options.get_population_size(), 4);
        assert_eq!(options.get_chromosome_length(), 4);
        assert_eq!(options.get_num_generations(), 1);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_undersized_population() {
        let options = GaOptions::builder().population_size(1).build();
        assert!(matches!(
            options.validate(),
            Err(GeneticError::Configuration(_))
        ));
    }

    #[test]
    fn test_validate_rejects_odd_chromosome_length() {
        let options = GaOptions::builder().chromosome_length(31).build();
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_oversized_chromosome_length() {
        assert!(GaOptions::builder()
            .chromosome_length(64)
            .build()
            .validate()
            .is_ok());
        assert!(GaOptions::builder()
            .chromosome_length(66)
            .build()
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_probabilities() {
        assert!(GaOptions::builder()
            .crossover_probability(1.5)
            .build()
            .validate()
            .is_err());
        assert!(GaOptions::builder()
            .mutation_probability(-0.1)
            .build()
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_checks_tournament_size_only_for_tournament() {
        let ignored = GaOptions::builder().tournament_size(1).build();
        assert!(ignored.validate().is_ok());

        let checked = GaOptions::builder()
            .selection_method(SelectionMethod::Tournament)
            .tournament_size(1)
            .build();
        assert!(checked.validate().is_err());

        let oversized = GaOptions::builder()
            .selection_method(SelectionMethod::Tournament)
            .population_size(4)
            .tournament_size(5)
            .build();
        assert!(oversized.validate().is_err());
    }

    #[test]
    fn test_selection_method_parses_flag_names() {
        assert_eq!(
            "sus".parse::<SelectionMethod>().unwrap(),
            SelectionMethod::StochasticUniversal
        );
        assert_eq!(
            "roulette".parse::<SelectionMethod>().unwrap(),
            SelectionMethod::RouletteWheel
        );
        assert_eq!(
            "remainder".parse::<SelectionMethod>().unwrap(),
            SelectionMethod::StochasticRemainder
        );
        assert_eq!(
            "tournament".parse::<SelectionMethod>().unwrap(),
            SelectionMethod::Tournament
        );
        assert!("elitist".parse::<SelectionMethod>().is_err());
    }

    #[test]
    fn test_selection_method_display_round_trips() {
        for method in [
            SelectionMethod::StochasticUniversal,
            SelectionMethod::RouletteWheel,
            SelectionMethod::StochasticRemainder,
            SelectionMethod::Tournament,
        ] {
            assert_eq!(method.to_string().parse::<SelectionMethod>().unwrap(), method);
        }
    }
}
