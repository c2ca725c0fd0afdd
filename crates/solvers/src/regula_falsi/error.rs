use thiserror::Error;

use crate::{BracketError, NonFiniteResidual};

/// Errors that can occur during false position solving.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("flat bracket: f({a}) and f({b}) are both {value}")]
    FlatBracket { a: f64, b: f64, value: f64 },

    #[error(transparent)]
    NonFiniteResidual(#[from] NonFiniteResidual),
}
