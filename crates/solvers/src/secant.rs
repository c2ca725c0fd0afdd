//! Secant iteration from two seeds.
//!
//! # Algorithm
//!
//! The two most recent points define a secant line whose root becomes the
//! next point:
//!
//! ```text
//! x2 = x1 − f(x1)·(x1 − x0) / (f(x1) − f(x0))
//! ```
//!
//! The window then shifts, `(x0, x1) ← (x1, x2)`. The trace starts with both
//! seeds and the solver converges once `|x2 − x1| < x_tol`, keeping `x2`.
//!
//! # Degenerate steps
//!
//! When `f(x1) == f(x0)` the secant line is flat and has no root. The solver
//! stops with [`Stall::FlatSecant`](crate::Stall::FlatSecant) without adding a
//! point. Equal seeds hit this on the first step.

mod config;
mod error;
mod event;

pub use config::Config;
pub use error::Error;
pub use event::Event;

use rootfind_core::{Function, Observer};

use crate::{Action, Solution, Stall, Status, evaluate::evaluate};

/// Finds a root using the secant method.
///
/// The observer receives an [`Event`] for every new point and may return
/// [`Action::StopEarly`] to halt with the trace recorded so far.
///
/// # Errors
///
/// Returns an error if either seed is not finite or if a function value is
/// non-finite.
pub fn solve<Obs>(
    function: &impl Function,
    seeds: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    Obs: Observer<Event, Action>,
{
    let [mut x0, mut x1] = seeds;
    if !x0.is_finite() || !x1.is_finite() {
        return Err(Error::NonFiniteSeed { x0, x1 });
    }

    let mut f0 = evaluate(function, x0)?;
    let mut f1 = evaluate(function, x1)?;

    let mut trace = Vec::with_capacity(config.max_iters() + 2);
    trace.extend(seeds);

    for iter in 1..=config.max_iters() {
        let denom = f1 - f0;

        #[allow(clippy::float_cmp)]
        if denom == 0.0 {
            let status = Status::Stalled(Stall::FlatSecant);
            return Ok(Solution::new(status, trace, f1, iter - 1));
        }

        let x2 = x1 - f1 * (x1 - x0) / denom;
        let f2 = evaluate(function, x2)?;
        trace.push(x2);

        let event = Event {
            iter,
            points: [x0, x1],
            x: x2,
            residual: f2,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(Status::StoppedByObserver, trace, f2, iter));
        }

        if (x2 - x1).abs() < config.x_tol() {
            return Ok(Solution::new(Status::Converged, trace, f2, iter));
        }

        (x0, f0) = (x1, f1);
        (x1, f1) = (x2, f2);
    }

    Ok(Solution::new(Status::MaxIters, trace, f1, config.max_iters()))
}

/// Runs the secant method without observation.
///
/// # Errors
///
/// Returns an error if either seed is not finite or if a function value is
/// non-finite.
pub fn solve_unobserved(
    function: &impl Function,
    seeds: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(function, seeds, config, ())
}
