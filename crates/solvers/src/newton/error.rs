use thiserror::Error;

use crate::NonFiniteResidual;

/// Errors that can occur during Newton-Raphson solving.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("seed is not finite: {value}")]
    NonFiniteSeed { value: f64 },

    #[error(transparent)]
    NonFiniteResidual(#[from] NonFiniteResidual),

    #[error("non-finite step from x = {x}: f(x) = {residual}, f'(x) = {derivative}")]
    NonFiniteStep {
        x: f64,
        residual: f64,
        derivative: f64,
    },
}
