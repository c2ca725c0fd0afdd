//! Capability traits for cross-solver observers.
//!
//! Every solver emits its own event type, but they all report the point an
//! iteration produced and the function value there. These traits abstract
//! over that, so one observer can watch any of the solvers.
//!
//! # Event traits
//!
//! - [`HasIterate`] — events that carry a newly produced iterate
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use rootfind_core::{Cubic, Observer};
//! use rootfind_observers::traits::{CanStopEarly, HasIterate};
//! use rootfind_solvers::{Status, bisection};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasIterate, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.residual().abs() < self.tolerance).then(A::stop_early)
//!     }
//! }
//!
//! let observer = GoodEnough { tolerance: 1e-2 };
//! let solution =
//!     bisection::solve(&Cubic, [1.0, 2.0], &bisection::Config::default(), observer).unwrap();
//!
//! assert_eq!(solution.status, Status::StoppedByObserver);
//! assert!(solution.residual.abs() < 1e-2);
//! ```

use rootfind_solvers::{Action, bisection, newton, regula_falsi, secant};

/// An event that reports the iterate produced by one solver iteration.
pub trait HasIterate {
    /// Returns the 1-based iteration counter.
    fn iter(&self) -> usize;

    /// Returns the point produced by this iteration.
    fn x(&self) -> f64;

    /// Returns the function value at [`x`](HasIterate::x).
    fn residual(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasIterate for newton::Event {
    fn iter(&self) -> usize {
        self.iter
    }

    fn x(&self) -> f64 {
        self.next
    }

    fn residual(&self) -> f64 {
        self.next_residual
    }
}

impl HasIterate for bisection::Event {
    fn iter(&self) -> usize {
        self.iter
    }

    fn x(&self) -> f64 {
        self.x
    }

    fn residual(&self) -> f64 {
        self.residual
    }
}

impl HasIterate for regula_falsi::Event {
    fn iter(&self) -> usize {
        self.iter
    }

    fn x(&self) -> f64 {
        self.x
    }

    fn residual(&self) -> f64 {
        self.residual
    }
}

impl HasIterate for secant::Event {
    fn iter(&self) -> usize {
        self.iter
    }

    fn x(&self) -> f64 {
        self.x
    }

    fn residual(&self) -> f64 {
        self.residual
    }
}

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rootfind_core::{Cubic, Observer};
    use rootfind_solvers::Solution;

    /// Records every iterate it sees, regardless of solver.
    #[derive(Default)]
    struct Recorder {
        iters: Vec<usize>,
        points: Vec<[f64; 2]>,
    }

    impl<E: HasIterate, A> Observer<E, A> for &mut Recorder {
        fn observe(&mut self, event: &E) -> Option<A> {
            self.iters.push(event.iter());
            self.points.push([event.x(), event.residual()]);
            None
        }
    }

    fn assert_matches_trace(recorder: &Recorder, solution: &Solution, seeds: usize) {
        let expected: Vec<usize> = (1..=solution.iters).collect();
        assert_eq!(recorder.iters, expected);

        let produced = &solution.trace[seeds..];
        assert_eq!(recorder.points.len(), produced.len());
        for ([x, residual], trace_x) in recorder.points.iter().zip(produced) {
            assert_relative_eq!(*x, *trace_x);
            assert_relative_eq!(*residual, trace_x.powi(3) - trace_x - 2.0);
        }
    }

    #[test]
    fn newton_events_report_the_new_point() {
        let mut recorder = Recorder::default();
        let solution = newton::solve(&Cubic, 1.5, &newton::Config::default(), &mut recorder)
            .expect("should solve");

        assert_matches_trace(&recorder, &solution, 1);
    }

    #[test]
    fn bisection_events_report_midpoints() {
        let mut recorder = Recorder::default();
        let solution =
            bisection::solve(&Cubic, [1.0, 2.0], &bisection::Config::default(), &mut recorder)
                .expect("should solve");

        assert_matches_trace(&recorder, &solution, 0);
    }

    #[test]
    fn false_position_events_report_secant_roots() {
        let mut recorder = Recorder::default();
        let solution = regula_falsi::solve(
            &Cubic,
            [1.0, 2.0],
            &regula_falsi::Config::default(),
            &mut recorder,
        )
        .expect("should solve");

        assert_matches_trace(&recorder, &solution, 0);
    }

    #[test]
    fn secant_events_skip_the_seeds() {
        let mut recorder = Recorder::default();
        let solution = secant::solve(&Cubic, [1.0, 2.0], &secant::Config::default(), &mut recorder)
            .expect("should solve");

        assert_matches_trace(&recorder, &solution, 2);
    }

    #[test]
    fn stop_early_maps_to_solver_action() {
        assert_eq!(Action::stop_early(), Action::StopEarly);
    }
}
