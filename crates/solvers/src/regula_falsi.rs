//! False position (regula falsi) on a sign-changing bracket.
//!
//! # Algorithm
//!
//! Each iteration draws the secant line through `(a, f(a))` and `(b, f(b))`
//! and takes its root
//!
//! ```text
//! c = (a·f(b) − b·f(a)) / (f(b) − f(a))
//! ```
//!
//! as the next point. The point is recorded, the solver stops once
//! `|f(c)| < residual_tol`, and otherwise the bracket is narrowed with the same
//! sign test as [bisection](crate::bisection).
//!
//! # Limitations
//!
//! On functions that are convex or concave across the bracket, one endpoint
//! never moves and convergence slows to linear. No Illinois-style weighting is
//! applied to counter this.
//!
//! If `f(a) == f(b)` the secant line has no root. A flat starting bracket is an
//! error; a flat bracket reached mid-run (only possible with
//! [`unchecked_bracket`](crate::BracketingConfig::unchecked_bracket)) stops
//! with [`Stall::FlatSecant`](crate::Stall::FlatSecant).

mod error;
mod event;

pub use error::Error;
pub use event::Event;

use rootfind_core::{Function, Observer};

use crate::{Action, Bracket, Solution, Stall, Status, evaluate::evaluate};

/// Configuration for the false position solver.
pub type Config = crate::BracketingConfig;

/// Finds a root of the function using the false position method.
///
/// The observer receives an [`Event`] for every secant root and may return
/// [`Action::StopEarly`] to halt with the trace recorded so far.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or flat, or if a function value
/// is non-finite.
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

    if bracket.secant_root().is_none() {
        let [a, b] = bracket.as_array();
        let [value, _] = bracket.values();
        return Err(Error::FlatBracket { a, b, value });
    }

    let mut trace = Vec::with_capacity(config.max_iters());
    let mut residual = f64::NAN;

    for iter in 1..=config.max_iters() {
        let Some(x) = bracket.secant_root() else {
            let status = Status::Stalled(Stall::FlatSecant);
            return Ok(Solution::new(status, trace, residual, iter - 1));
        };

        let x_residual = evaluate(function, x)?;
        trace.push(x);

        let event = Event {
            iter,
            bracket: bracket.as_array(),
            x,
            residual: x_residual,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(
                Status::StoppedByObserver,
                trace,
                x_residual,
                iter,
            ));
        }

        if x_residual.abs() < config.residual_tol() {
            return Ok(Solution::new(Status::Converged, trace, x_residual, iter));
        }

        bracket.narrow(x, x_residual);
        residual = x_residual;
    }

    Ok(Solution::new(
        Status::MaxIters,
        trace,
        residual,
        config.max_iters(),
    ))
}

/// Runs false position without observation.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or flat, or if a function value
/// is non-finite.
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
        assert_eq!(solution.trace.len(), 11);
        assert!(solution.residual.abs() < 1e-5);
        assert_relative_eq!(solution.residual, f(solution.x));
        assert_relative_eq!(solution.x, REAL_ROOT, epsilon = 1e-5);
    }

    #[test]
    fn first_point_is_secant_root() {
        let solution =
            solve_unobserved(&Cubic, [1.0, 2.0], &Config::default()).expect("should solve");

        // Line through (1, -2) and (2, 4).
        assert_relative_eq!(solution.trace[0], 4.0 / 3.0, epsilon = 1e-15);
    }

    #[test]
    fn convex_function_pins_right_endpoint() {
        let mut brackets = Vec::new();
        let observer = |event: &Event| -> Option<Action> {
            brackets.push(event.bracket);
            None
        };

        solve(&Cubic, [1.0, 2.0], &Config::default(), observer).expect("should solve");

        assert!(brackets.iter().all(|[_, right]| *right == 2.0));
        assert!(brackets.windows(2).all(|pair| pair[1][0] > pair[0][0]));
    }

    #[test]
    fn observer_can_stop_iteration() {
        let observer = |event: &Event| (event.iter >= 2).then_some(Action::StopEarly);

        let solution =
            solve(&Cubic, [1.0, 2.0], &Config::default(), observer).expect("should stop cleanly");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 2);
        assert_eq!(solution.trace.len(), 2);
    }

    #[test]
    fn hits_iteration_limit() {
        let config = Config::new(3, 1e-12).expect("valid config");

        let solution = solve_unobserved(&Cubic, [1.0, 2.0], &config).expect("should run");

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 3);
        assert_eq!(solution.trace.len(), 3);
        assert_relative_eq!(solution.residual, f(solution.x));
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
    fn unchecked_bracket_keeps_endpoint_order() {
        let config = Config::new(4, 1e-5).expect("valid config").unchecked_bracket();

        let forward = solve_unobserved(&Cubic, [2.0, 3.0], &config).expect("should run");
        let reversed = solve_unobserved(&Cubic, [3.0, 2.0], &config).expect("should run");

        let expected_forward = [
            16.0 / 9.0,
            1.666_167_664_670_658_5,
            1.605_354_472_281_838_3,
            1.570_799_946_000_011_7,
        ];
        let expected_reversed = [
            16.0 / 9.0,
            1.588_310_038_119_441,
            1.540_195_471_248_065_4,
            1.526_772_437_193_400_6,
        ];

        for (x, expected) in forward.trace.iter().zip(expected_forward) {
            assert_relative_eq!(*x, expected, epsilon = 1e-12);
        }
        for (x, expected) in reversed.trace.iter().zip(expected_reversed) {
            assert_relative_eq!(*x, expected, epsilon = 1e-12);
        }
        assert_eq!(forward.trace.len(), 4);
        assert_eq!(reversed.trace.len(), 4);
    }

    #[test]
    fn errors_on_flat_unchecked_bracket() {
        let config = Config::default().unchecked_bracket();

        let result = solve_unobserved(&|x: f64| x * x - 4.0, [-1.0, 1.0], &config);

        assert!(matches!(result, Err(Error::FlatBracket { value, .. }) if value == -3.0));
    }

    #[test]
    fn stalls_when_bracket_turns_flat() {
        // f(0) = 1 and f(4) = 3 give a first point at -2, where f is 3 again.
        let step = |x: f64| {
            if x < -1.0 {
                3.0
            } else if x < 2.0 {
                1.0
            } else {
                3.0
            }
        };
        let config = Config::default().unchecked_bracket();

        let solution = solve_unobserved(&step, [0.0, 4.0], &config).expect("should stall cleanly");

        assert_eq!(solution.status, Status::Stalled(Stall::FlatSecant));
        assert_eq!(solution.trace, [-2.0]);
        assert_eq!(solution.iters, 1);
        assert_relative_eq!(solution.residual, 3.0);
    }
}
