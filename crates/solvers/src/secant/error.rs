use thiserror::Error;

use crate::NonFiniteResidual;

/// Errors that can occur during secant solving.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("seeds must be finite: x0 = {x0}, x1 = {x1}")]
    NonFiniteSeed { x0: f64, x1: f64 },

    #[error(transparent)]
    NonFiniteResidual(#[from] NonFiniteResidual),
}
