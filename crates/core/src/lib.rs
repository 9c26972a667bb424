//! Core traits and types for Newton–Raphson root finding.
//!
//! This crate defines the shared abstractions that the solvers build on:
//!
//! - [`Differentiable`] — a real function paired with its analytic derivative
//! - [`FnPair`] — adapts a pair of closures into a [`Differentiable`]
//! - [`Cubic`] — the fixed example polynomial `x³ - x² + 2`
//! - [`Observer`] — receives solver events and optionally returns control actions

mod algebra;
mod function;
mod observer;

pub use algebra::Cubic;
pub use function::{Differentiable, FnPair};
pub use observer::Observer;
