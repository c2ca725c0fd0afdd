/// Iteration event emitted by the Newton-Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Iterate the step was taken from.
    pub x: f64,
    /// `f(x)`.
    pub residual: f64,
    /// `f'(x)`.
    pub derivative: f64,
    /// The new iterate `x - f(x) / f'(x)`.
    pub next: f64,
    /// `f(next)`.
    pub next_residual: f64,
}

impl Event {
    /// Returns the size of this step.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.next - self.x
    }
}
