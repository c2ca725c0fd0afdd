//! Core traits and types for the rootfind workspace.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Function`] — a scalar function `f: ℝ → ℝ` a solver drives toward zero
//! - [`Differentiable`] — a [`Function`] that also knows its derivative
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`cubic`] — the reference cubic `x³ − x − 2` and its derivative
//! - [`linspace`] — evenly spaced samples over a closed interval

pub mod cubic;

mod function;
mod observer;
mod sampling;

pub use cubic::Cubic;
pub use function::{Differentiable, Function, WithDerivative};
pub use observer::Observer;
pub use sampling::linspace;
