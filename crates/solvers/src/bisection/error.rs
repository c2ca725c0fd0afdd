use thiserror::Error;

use crate::{BracketError, NonFiniteResidual};

/// Errors that can occur during bisection solving.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error(transparent)]
    NonFiniteResidual(#[from] NonFiniteResidual),
}
