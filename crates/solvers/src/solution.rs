use std::fmt;

/// Why a solver stopped before converging on a degenerate step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stall {
    /// Newton step with `df(x) == 0`.
    ZeroDerivative,
    /// Secant line with equal function values at both points.
    FlatSecant,
}

/// Indicates how a solve finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured tolerance.
    Converged,
    /// Reached the iteration limit without converging.
    MaxIters,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
    /// The next step would divide by zero, so the solver stopped.
    Stalled(Stall),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Converged => write!(f, "converged"),
            Status::MaxIters => write!(f, "hit iteration limit"),
            Status::StoppedByObserver => write!(f, "stopped by observer"),
            Status::Stalled(Stall::ZeroDerivative) => write!(f, "stalled on zero derivative"),
            Status::Stalled(Stall::FlatSecant) => write!(f, "stalled on flat secant"),
        }
    }
}

/// The result of a root-finding solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,
    /// Last recorded iterate.
    pub x: f64,
    /// Function value at `x`.
    pub residual: f64,
    /// Every recorded iterate in order, seeds included where the method keeps them.
    pub trace: Vec<f64>,
    /// Number of loop iterations performed.
    pub iters: usize,
}

impl Solution {
    /// Builds a solution whose `x` is the last entry of `trace`.
    pub(crate) fn new(status: Status, trace: Vec<f64>, residual: f64, iters: usize) -> Self {
        let x = trace.last().copied().unwrap_or(f64::NAN);
        Self {
            status,
            x,
            residual,
            trace,
            iters,
        }
    }

    /// Returns true if the solver met its tolerance.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }
}
