/// Iteration event emitted by the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Search bracket `[a, b]` the midpoint was taken from, in caller order.
    pub bracket: [f64; 2],
    /// The midpoint.
    pub x: f64,
    /// `f(x)` at the midpoint.
    pub residual: f64,
}

impl Event {
    /// Returns the width of the bracket for this iteration.
    #[must_use]
    pub fn width(&self) -> f64 {
        (self.bracket[1] - self.bracket[0]).abs()
    }
}
