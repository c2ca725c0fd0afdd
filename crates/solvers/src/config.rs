use thiserror::Error;

/// Errors that can occur when building a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and non-negative")]
    Tolerance,

    #[error("max_iters must be at least 1")]
    ZeroMaxIters,
}

/// Validates the settings every solver shares.
pub(crate) fn validate(max_iters: usize, tol: f64) -> Result<(), ConfigError> {
    if !tol.is_finite() || tol < 0.0 {
        return Err(ConfigError::Tolerance);
    }
    if max_iters == 0 {
        return Err(ConfigError::ZeroMaxIters);
    }
    Ok(())
}

/// Configuration shared by the bracketing solvers (bisection and false position).
///
/// Both solvers stop once `|f(x)| < residual_tol` at a new point. By default
/// the starting bracket must show a sign change; [`unchecked_bracket`] lets
/// the solver run on any finite bracket, in which case it may never converge.
///
/// [`unchecked_bracket`]: BracketingConfig::unchecked_bracket
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BracketingConfig {
    max_iters: usize,
    residual_tol: f64,
    check_bracket: bool,
}

impl Default for BracketingConfig {
    fn default() -> Self {
        Self {
            max_iters: 50,
            residual_tol: 1e-5,
            check_bracket: true,
        }
    }
}

impl BracketingConfig {
    /// Creates a new config with a validated residual tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `residual_tol` is negative or non-finite, or if
    /// `max_iters` is zero.
    pub fn new(max_iters: usize, residual_tol: f64) -> Result<Self, ConfigError> {
        validate(max_iters, residual_tol)?;
        Ok(Self {
            max_iters,
            residual_tol,
            check_bracket: true,
        })
    }

    /// Skips the sign-change check on the starting bracket.
    #[must_use]
    pub fn unchecked_bracket(mut self) -> Self {
        self.check_bracket = false;
        self
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the absolute tolerance on `|f(x)|`.
    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }

    /// Returns true if the starting bracket must show a sign change.
    #[must_use]
    pub fn checks_bracket(&self) -> bool {
        self.check_bracket
    }
}
