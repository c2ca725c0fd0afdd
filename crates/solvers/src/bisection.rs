//! Bisection on a sign-changing bracket.
//!
//! # Algorithm
//!
//! Each iteration evaluates the midpoint `c = (a + b) / 2`, records it, and
//! stops once `|f(c)| < residual_tol`. Otherwise the bracket keeps the half
//! that still changes sign: `[a, c]` if `f(a)` and `f(c)` have opposite signs,
//! else `[c, b]`. The bracket width halves on every step.
//!
//! The trace holds midpoints only; the bracket endpoints are never recorded.
//!
//! # Bracket precondition
//!
//! `f(a)` and `f(b)` must have opposite signs. This is checked up front unless
//! the config was built with
//! [`unchecked_bracket`](crate::BracketingConfig::unchecked_bracket), in which
//! case a bracket without a root yields a trace that never converges.

mod error;
mod event;

pub use error::Error;
pub use event::Event;

use rootfind_core::{Function, Observer};

use crate::{Action, Bracket, Solution, Status, evaluate::evaluate};

/// Configuration for the bisection solver.
pub type Config = crate::BracketingConfig;

/// Finds a root of the function using the bisection method.
///
/// The observer receives an [`Event`] for every midpoint and may return
/// [`Action::StopEarly`] to halt with the trace recorded so far.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or if a function value is
/// non-finite.
pub fn solve<Obs>(
    function: &impl Function,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    Obs: Observer<Event, Action>,
{
    let mut bracket = Bracket::open::<Error>(function, bracket, config.checks_bracket())?;

    let mut trace = Vec::with_capacity(config.max_iters());
    let mut residual = f64::NAN;

    for iter in 1..=config.max_iters() {
        let mid = bracket.midpoint();
        let mid_residual = evaluate(function, mid)?;
        trace.push(mid);

        let event = Event {
            iter,
            bracket: bracket.as_array(),
            x: mid,
            residual: mid_residual,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(
                Status::StoppedByObserver,
                trace,
                mid_residual,
                iter,
            ));
        }

        if mid_residual.abs() < config.residual_tol() {
            return Ok(Solution::new(Status::Converged, trace, mid_residual, iter));
        }

        bracket.narrow(mid, mid_residual);
        residual = mid_residual;
    }

    Ok(Solution::new(
        Status::MaxIters,
        trace,
        residual,
        config.max_iters(),
    ))
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or if a function value is
/// non-finite.
pub fn solve_unobserved(
    function: &impl Function,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(function, bracket, config, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use rootfind_core::{
        Cubic,
        cubic::{REAL_ROOT, f},
    };

    use crate::BracketError;

    #[test]
    fn finds_cubic_root_on_standard_bracket() {
        let solution =
            solve_unobserved(&Cubic, [1.0, 2.0], &Config::default()).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.trace.len(), 18);
        assert_eq!(solution.trace[..3], [1.5, 1.75, 1.625]);
        assert!(solution.residual.abs() < 1e-5);
        assert_relative_eq!(solution.residual, f(solution.x));
        assert_relative_eq!(solution.x, REAL_ROOT, epsilon = 1e-5);
    }

    #[test]
    fn iterates_stay_inside_bracket() {
        let solution =
            solve_unobserved(&Cubic, [1.0, 2.0], &Config::default()).expect("should solve");

        assert!(solution.trace.iter().all(|x| (1.0..=2.0).contains(x)));
    }

    #[test]
    fn bracket_width_halves_each_step() {
        let mut widths = Vec::new();
        let observer = |event: &Event| -> Option<Action> {
            widths.push(event.width());
            None
        };

        solve(&Cubic, [1.0, 2.0], &Config::default(), observer).expect("should solve");

        assert_relative_eq!(widths[0], 1.0);
        for pair in widths.windows(2) {
            assert_relative_eq!(pair[1], 0.5 * pair[0]);
        }
    }

    #[test]
    fn finds_square_root() {
        let config = Config::new(100, 1e-12).expect("valid config");

        let solution =
            solve_unobserved(&|x: f64| x * x - 9.0, [0.0, 10.0], &config).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 3.0, epsilon = 1e-10);
    }

    #[test]
    fn reversed_bracket_gives_same_trace() {
        let config = Config::default();

        let forward = solve_unobserved(&Cubic, [1.0, 2.0], &config).expect("should solve");
        let reversed = solve_unobserved(&Cubic, [2.0, 1.0], &config).expect("should solve");

        assert_eq!(forward.trace, reversed.trace);
    }

    #[test]
    fn observer_can_stop_iteration() {
        let mut calls = 0usize;
        let observer = |event: &Event| {
            calls += 1;
            (event.iter >= 3).then_some(Action::StopEarly)
        };

        let solution =
            solve(&Cubic, [1.0, 2.0], &Config::default(), observer).expect("should stop cleanly");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 3);
        assert_eq!(solution.trace, [1.5, 1.75, 1.625]);
        assert_eq!(calls, 3);
    }

    #[test]
    fn hits_iteration_limit() {
        let config = Config::new(4, 1e-12).expect("valid config");

        let solution = solve_unobserved(&Cubic, [1.0, 2.0], &config).expect("should run");

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 4);
        assert_eq!(solution.trace, [1.5, 1.75, 1.625, 1.5625]);
        assert_relative_eq!(solution.residual, f(1.5625));
    }

    #[test]
    fn errors_on_no_sign_change() {
        let result = solve_unobserved(&Cubic, [2.0, 3.0], &Config::default());

        assert_eq!(
            result,
            Err(Error::InvalidBracket(BracketError::NoSignChange))
        );
    }

    #[test]
    fn unchecked_bracket_runs_without_converging() {
        let config = Config::default().unchecked_bracket();

        let solution = solve_unobserved(&Cubic, [2.0, 3.0], &config).expect("should run");

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.trace.len(), 50);
        assert!(solution.trace.iter().all(|x| (2.0..=3.0).contains(x)));
    }

    #[test]
    fn unchecked_bracket_keeps_endpoint_order() {
        let config = Config::new(4, 1e-5).expect("valid config").unchecked_bracket();

        let forward = solve_unobserved(&Cubic, [2.0, 3.0], &config).expect("should run");
        let reversed = solve_unobserved(&Cubic, [3.0, 2.0], &config).expect("should run");

        // f is positive on the whole bracket, so `a` moves toward `b` each step.
        assert_eq!(forward.trace, [2.5, 2.75, 2.875, 2.9375]);
        assert_eq!(reversed.trace, [2.5, 2.25, 2.125, 2.0625]);
    }

    #[test]
    fn unchecked_point_bracket_repeats_the_point() {
        let config = Config::new(3, 1e-5).expect("valid config").unchecked_bracket();

        let solution = solve_unobserved(&Cubic, [2.0, 2.0], &config).expect("should run");

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.trace, [2.0, 2.0, 2.0]);
    }

    #[test]
    fn errors_on_zero_width_bracket() {
        let result = solve_unobserved(&Cubic, [1.5, 1.5], &Config::default());

        assert_eq!(result, Err(Error::InvalidBracket(BracketError::ZeroWidth)));
    }

    #[test]
    fn errors_on_non_finite_bracket() {
        let result = solve_unobserved(&Cubic, [f64::NAN, 2.0], &Config::default());

        assert_eq!(result, Err(Error::InvalidBracket(BracketError::NonFinite)));
    }
}
