//! # Error Types
//!
//! This module defines custom error types for the genetic algorithm crate.
//! It provides specific error variants for the failure scenarios that may
//! occur while configuring or running an evolution.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use bitga::error::{GeneticError, Result};
//!
//! fn some_function() -> Result<()> {
//!     // Function implementation
//!     Ok(())
//! }
//!
//! fn caller() {
//!     match some_function() {
//!         Ok(_) => println!("Success!"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use thiserror::Error;

/// Represents errors that can occur in the genetic algorithm crate.
///
/// This enum provides specific error variants for the failure scenarios
/// that may occur while configuring or running an evolution.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a selection strategy cannot produce two parents.
    #[error("Selection error: {0}")]
    Selection(String),

    /// Error that occurs when a chromosome cannot be parsed from text.
    #[error("Invalid chromosome: {0}")]
    InvalidChromosome(String),

    /// Error that occurs when NaN or infinity values are encountered where
    /// a finite number is required.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),
}

/// A specialized Result type for genetic algorithm operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the
/// error type fixed to `GeneticError`.
///
/// ## Examples
///
/// ```rust
/// use bitga::error::{GeneticError, Result};
///
/// fn may_fail() -> Result<i32> {
///     // Some operation that might fail
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, GeneticError>;
