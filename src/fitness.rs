//! # Fitness Transform
//!
//! Converts an objective value into the strictly positive score used by
//! proportional selection. Smaller objective values earn larger fitness:
//!
//! - `f >= 0` maps to `1 / (1 + f)`, bounded in `(0, 1]`;
//! - `f < 0` maps to `1 + |f|`, unbounded above.
//!
//! Both branches yield exactly 1 at `f = 0`, so the transform is continuous
//! there. The piecewise shape is part of the algorithm's contract and must
//! not be smoothed.
//!
//! An infinite objective (the invalid-evaluation sentinel) maps to infinite
//! fitness. Consumers treat that as "never the best": the elitist record
//! rejects it and weighted selection caps it (see the `selection` module).

/// Transforms an objective value into a selection fitness score.
pub fn fitness(objective: f64) -> f64 {
    if !objective.is_finite() {
        return f64::INFINITY;
    }
    if objective >= 0.0 {
        1.0 / (1.0 + objective)
    } else {
        1.0 + objective.abs()
    }
}
