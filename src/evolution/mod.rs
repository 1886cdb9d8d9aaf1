pub mod engine;
pub mod options;

pub use engine::{BestSolution, GeneticAlgorithm};
pub use options::{GaOptions, SelectionMethod};
