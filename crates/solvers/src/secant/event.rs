/// Iteration event emitted by the secant solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// The two points the secant line was drawn through, oldest first.
    pub points: [f64; 2],
    /// Root of the secant line.
    pub x: f64,
    /// `f(x)` at the new point.
    pub residual: f64,
}
