/// A scalar function whose roots a solver searches for.
///
/// Functions are pure: evaluating the same `x` twice must give the same value.
/// Closures of the form `Fn(f64) -> f64` implement this trait directly.
pub trait Function {
    /// Evaluates the function at `x`.
    fn eval(&self, x: f64) -> f64;
}

/// A [`Function`] with an analytic first derivative.
pub trait Differentiable: Function {
    /// Evaluates the first derivative at `x`.
    fn derivative(&self, x: f64) -> f64;
}

impl<F> Function for F
where
    F: Fn(f64) -> f64,
{
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}

/// Pairs a function closure with a derivative closure.
///
/// # Example
///
/// ```
/// use rootfind_core::{Differentiable, Function, WithDerivative};
///
/// let square = WithDerivative::new(|x: f64| x * x - 4.0, |x: f64| 2.0 * x);
///
/// assert_eq!(square.eval(3.0), 5.0);
/// assert_eq!(square.derivative(3.0), 6.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WithDerivative<F, D> {
    function: F,
    derivative: D,
}

impl<F, D> WithDerivative<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    /// Creates a differentiable function from its value and derivative closures.
    pub fn new(function: F, derivative: D) -> Self {
        Self {
            function,
            derivative,
        }
    }
}

impl<F, D> Function for WithDerivative<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    fn eval(&self, x: f64) -> f64 {
        (self.function)(x)
    }
}

impl<F, D> Differentiable for WithDerivative<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    fn derivative(&self, x: f64) -> f64 {
        (self.derivative)(x)
    }
}
