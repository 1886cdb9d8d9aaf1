pub mod crossover;
pub mod mutation;

pub use crossover::crossover;
pub use mutation::mutate;
