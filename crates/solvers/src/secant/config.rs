use crate::config::{ConfigError, validate};

/// Configuration for the secant solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    x_tol: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 20,
            x_tol: 1e-5,
        }
    }
}

impl Config {
    /// Creates a new config with a validated step tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `x_tol` is negative or non-finite, or if
    /// `max_iters` is zero.
    pub fn new(max_iters: usize, x_tol: f64) -> Result<Self, ConfigError> {
        validate(max_iters, x_tol)?;
        Ok(Self { max_iters, x_tol })
    }

    /// Returns the maximum number of secant steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the absolute tolerance on `|x2 - x1|`.
    #[must_use]
    pub fn x_tol(&self) -> f64 {
        self.x_tol
    }
}
