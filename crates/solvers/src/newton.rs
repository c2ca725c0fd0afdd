//! Newton-Raphson iteration from a single seed.
//!
//! # Algorithm
//!
//! Starting from `x0`, each step moves to the root of the tangent line:
//!
//! ```text
//! x_{n+1} = x_n - f(x_n) / f'(x_n)
//! ```
//!
//! The trace starts with the seed and gains one entry per step. The solver
//! converges as soon as `|x_{n+1} - x_n| < x_tol`, keeping that last point.
//!
//! # Degenerate steps
//!
//! A zero derivative leaves the tangent line without a root. Instead of
//! dividing by zero, the solver stops with
//! [`Status::Stalled(Stall::ZeroDerivative)`](crate::Stall::ZeroDerivative)
//! and returns the trace recorded so far. For the reference cubic this happens
//! for seeds at `x = ±1/√3`.

mod config;
mod error;
mod event;

pub use config::Config;
pub use error::Error;
pub use event::Event;

use rootfind_core::{Differentiable, Observer};

use crate::{Action, Solution, Stall, Status, evaluate::evaluate};

/// Finds a root using Newton-Raphson iteration.
///
/// The observer receives an [`Event`] after every step and may return
/// [`Action::StopEarly`] to halt with the trace recorded so far.
///
/// # Errors
///
/// Returns an error if the seed is not finite, or if a function value or a
/// step becomes non-finite.
pub fn solve<Obs>(
    function: &impl Differentiable,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    Obs: Observer<Event, Action>,
{
    if !x0.is_finite() {
        return Err(Error::NonFiniteSeed { value: x0 });
    }

    let mut trace = Vec::with_capacity(config.max_iters() + 1);
    trace.push(x0);

    let mut x = x0;
    let mut residual = evaluate(function, x)?;

    for iter in 1..=config.max_iters() {
        let derivative = function.derivative(x);

        #[allow(clippy::float_cmp)]
        if derivative == 0.0 {
            let status = Status::Stalled(Stall::ZeroDerivative);
            return Ok(Solution::new(status, trace, residual, iter - 1));
        }

        let next = x - residual / derivative;
        if !next.is_finite() {
            return Err(Error::NonFiniteStep {
                x,
                residual,
                derivative,
            });
        }

        trace.push(next);
        let next_residual = evaluate(function, next)?;

        let event = Event {
            iter,
            x,
            residual,
            derivative,
            next,
            next_residual,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(
                Status::StoppedByObserver,
                trace,
                next_residual,
                iter,
            ));
        }

        if (next - x).abs() < config.x_tol() {
            return Ok(Solution::new(Status::Converged, trace, next_residual, iter));
        }

        x = next;
        residual = next_residual;
    }

    Ok(Solution::new(
        Status::MaxIters,
        trace,
        residual,
        config.max_iters(),
    ))
}

/// Runs Newton-Raphson without observation.
///
/// # Errors
///
/// Returns an error if the seed is not finite, or if a function value or a
/// step becomes non-finite.
pub fn solve_unobserved(
    function: &impl Differentiable,
    x0: f64,
    config: &Config,
) -> Result<Solution, Error> {
    solve(function, x0, config, ())
}
