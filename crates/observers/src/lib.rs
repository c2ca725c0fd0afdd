//! Reusable observers for the rootfind solvers.
//!
//! This crate provides [`Observer`] implementations, capability traits that
//! work across all four solvers, and the helpers that turn a solver trace into
//! something that can be drawn.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasIterate`], [`CanStopEarly`])
//! - [`LogObserver`] — logs every iteration through the `log` facade
//! - [`curve_points`] / [`trace_points`] — `[x, f(x)]` pairs for plotting
//!
//! # Features
//!
//! - `plot` — Enables `ConvergencePlot` for viewing a solver trace against
//!   its function via egui. This feature adds dependencies on `eframe` and
//!   `egui_plot`.
//!
//! [`Observer`]: rootfind_core::Observer
//! [`HasIterate`]: traits::HasIterate
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod logging;
mod points;

#[cfg(feature = "plot")]
mod plot;

pub use logging::LogObserver;
pub use points::{DEFAULT_DOMAIN, DEFAULT_SAMPLES, curve_points, trace_points};

#[cfg(feature = "plot")]
pub use plot::{Color32, ConvergencePlot};
