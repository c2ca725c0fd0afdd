/// Iteration event emitted by the false position solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Search bracket `[a, b]` the secant line was drawn across, in caller order.
    pub bracket: [f64; 2],
    /// Root of the secant line.
    pub x: f64,
    /// `f(x)` at the secant root.
    pub residual: f64,
}
