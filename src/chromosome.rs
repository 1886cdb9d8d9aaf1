//! # Chromosome
//!
//! A [`Chromosome`] is a fixed-length bit string encoding one candidate
//! solution. Its length is fixed at construction time; the genetic operators
//! never mutate a chromosome in place, they always produce new ones.
//!
//! ## Example
//!
//! ```rust
//! use bitga::chromosome::Chromosome;
//! use bitga::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let chromosome = Chromosome::random(32, &mut rng);
//! assert_eq!(chromosome.len(), 32);
//!
//! // Chromosomes render and parse as '0'/'1' strings.
//! let parsed: Chromosome = "0101".parse().unwrap();
//! assert_eq!(parsed.to_string(), "0101");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::GeneticError;
use crate::rng::RandomNumberGenerator;

/// A fixed-length sequence of bits encoding one candidate solution.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Chromosome {
    bits: Vec<bool>,
}

impl Chromosome {
    /// Creates a chromosome from a bit vector.
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Creates a chromosome of `length` bits drawn independently and
    /// uniformly from `{0, 1}`.
    pub fn random(length: usize, rng: &mut RandomNumberGenerator) -> Self {
        let bits = (0..length).map(|_| rng.gen_bool(0.5)).collect();
        Self { bits }
    }

    /// The number of bits in the chromosome.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the chromosome holds no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The bits of the chromosome, most significant first per half.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Chromosome({})", self)
    }
}

impl FromStr for Chromosome {
    type Err = GeneticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bits = s
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(GeneticError::InvalidChromosome(format!(
                    "expected '0' or '1', found {:?}",
                    other
                ))),
            })
            .collect::<Result<Vec<bool>, _>>()?;
        Ok(Self { bits })
    }
}
