use thiserror::Error;

use rootfind_core::Function;

/// A function evaluation produced `inf` or `NaN`.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("non-finite residual {residual} at x = {x}")]
pub struct NonFiniteResidual {
    pub x: f64,
    pub residual: f64,
}

/// Evaluates `function` at `x`, rejecting non-finite results.
pub(crate) fn evaluate(
    function: &(impl Function + ?Sized),
    x: f64,
) -> Result<f64, NonFiniteResidual> {
    let residual = function.eval(x);
    if residual.is_finite() {
        Ok(residual)
    } else {
        Err(NonFiniteResidual { x, residual })
    }
}
