//! The reference cubic `f(x) = x³ − x − 2`.
//!
//! The cubic has a single real root near `1.5214`. Its derivative
//! `3x² − 1` vanishes at `x = ±1/√3`, so Newton iterations seeded there
//! stall immediately.

use crate::{Differentiable, Function};

/// The real root of `x³ − x − 2`.
pub const REAL_ROOT: f64 = 1.521_379_706_804_568;

/// Evaluates `x³ − x − 2`.
#[must_use]
pub fn f(x: f64) -> f64 {
    x.powi(3) - x - 2.0
}

/// Evaluates the derivative `3x² − 1`.
#[must_use]
pub fn df(x: f64) -> f64 {
    3.0 * x.powi(2) - 1.0
}

/// The reference cubic as an injectable [`Differentiable`] function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cubic;

impl Function for Cubic {
    fn eval(&self, x: f64) -> f64 {
        f(x)
    }
}

impl Differentiable for Cubic {
    fn derivative(&self, x: f64) -> f64 {
        df(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn evaluates_known_points() {
        assert_relative_eq!(f(0.0), -2.0);
        assert_relative_eq!(f(1.0), -2.0);
        assert_relative_eq!(f(2.0), 4.0);
        assert_relative_eq!(f(-3.0), -26.0);
    }

    #[test]
    fn derivative_matches_finite_difference() {
        let h = 1e-6;
        for x in [-2.0, -0.5, 0.0, 1.5, 3.0] {
            let estimate = (f(x + h) - f(x - h)) / (2.0 * h);
            assert_relative_eq!(df(x), estimate, epsilon = 1e-6);
        }
    }

    #[test]
    fn real_root_is_a_root() {
        assert!(f(REAL_ROOT).abs() < 1e-12);
    }

    #[test]
    fn derivative_vanishes_at_critical_points() {
        let critical = 1.0 / 3.0_f64.sqrt();
        assert_relative_eq!(df(critical), 0.0, epsilon = 1e-12);
        assert_relative_eq!(df(-critical), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn cubic_struct_matches_free_functions() {
        for x in [-1.0, 0.25, 1.5] {
            assert_relative_eq!(Cubic.eval(x), f(x));
            assert_relative_eq!(Cubic.derivative(x), df(x));
        }
    }
}
