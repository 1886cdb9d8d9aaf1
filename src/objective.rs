//! # Objective
//!
//! The two-variable function the algorithm minimizes:
//!
//! `f(x1, x2) = -(sin(x1)·cos(x2)·tan(x1 + x2) + 0.75·e^(1 - √(x1²)))`
//!
//! `tan` diverges near odd multiples of π/2, so the evaluation can produce
//! values of arbitrary magnitude. Any non-finite result is reported as
//! positive infinity, the worst possible value for a minimization problem,
//! and never as an error.

use crate::codec::DecodedPoint;

/// Evaluates the objective function at `(x1, x2)`.
///
/// Returns `f64::INFINITY` if the evaluation is not a finite number.
pub fn evaluate(x1: f64, x2: f64) -> f64 {
    let result = -(x1.sin() * x2.cos() * (x1 + x2).tan()
        + 0.75 * (1.0 - (x1 * x1).sqrt()).exp());
    if result.is_finite() {
        result
    } else {
        f64::INFINITY
    }
}

/// Evaluates the objective function at a decoded point.
pub fn evaluate_point(point: &DecodedPoint) -> f64 {
    evaluate(point.x1, point.x2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_value_at_origin() {
        // sin(0) zeroes the first term, leaving -(0.75 * e).
        let expected = -0.75 * 1f64.exp();
        assert!((evaluate(0.0, 0.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_symmetric_term_uses_magnitude_of_x1() {
        // The exponential term depends on |x1|; with x2 = -x1 the tan term
        // vanishes and the values at +-x1 agree.
        let a = evaluate(2.0, -2.0);
        let b = evaluate(-2.0, 2.0);
        assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn test_large_tangent_stays_finite_or_becomes_infinity() {
        // Close to x1 + x2 = pi/2 the tangent is huge; the contract is that
        // the result is either a finite number or the +inf sentinel, never
        // NaN.
        let near_pole = evaluate(std::f64::consts::FRAC_PI_2, 1e-9);
        assert!(near_pole.is_finite() || near_pole == f64::INFINITY);
        assert!(!near_pole.is_nan());
    }
}
