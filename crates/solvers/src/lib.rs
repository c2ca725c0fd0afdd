//! Iterative root finders for scalar functions.
//!
//! Each solver drives a [`Function`] toward zero and records every iterate in
//! the returned [`Solution::trace`], so the path to the root can be inspected
//! or plotted afterwards.
//!
//! # Solvers
//!
//! - [`newton`] — Newton-Raphson from a single seed, needs a [`Differentiable`]
//! - [`bisection`] — halves a sign-changing bracket each step
//! - [`regula_falsi`] — false position: the secant root inside a bracket
//! - [`secant`] — secant steps from two seeds
//!
//! All solvers take an observer (see [`Observer`]) that sees one event per
//! iteration and can return [`Action::StopEarly`].
//!
//! [`Function`]: rootfind_core::Function
//! [`Differentiable`]: rootfind_core::Differentiable
//! [`Observer`]: rootfind_core::Observer

mod action;
mod bracket;
mod config;
mod evaluate;
mod solution;

pub mod bisection;
pub mod newton;
pub mod regula_falsi;
pub mod secant;

pub use action::Action;
pub use bracket::{Bracket, BracketError};
pub use config::{BracketingConfig, ConfigError};
pub use evaluate::NonFiniteResidual;
pub use solution::{Solution, Stall, Status};
