//! Conversion of functions and solver traces into plot points.

use rootfind_core::{Function, linspace};

/// Interval the reference curve is drawn over.
pub const DEFAULT_DOMAIN: [f64; 2] = [-3.0, 3.0];

/// Number of samples taken across [`DEFAULT_DOMAIN`].
pub const DEFAULT_SAMPLES: usize = 400;

/// Samples `function` at `samples` evenly spaced points across `domain`.
///
/// Returns `[x, f(x)]` pairs ordered by `x`, with both ends of the domain
/// included.
pub fn curve_points(function: &impl Function, domain: [f64; 2], samples: usize) -> Vec<[f64; 2]> {
    let [start, end] = domain;
    linspace(start, end, samples)
        .map(|x| [x, function.eval(x)])
        .collect()
}

/// Pairs every iterate in `trace` with its function value.
///
/// Points keep the trace order, so consecutive points can be joined to show
/// the path a solver took.
pub fn trace_points(function: &impl Function, trace: &[f64]) -> Vec<[f64; 2]> {
    trace.iter().map(|&x| [x, function.eval(x)]).collect()
}
