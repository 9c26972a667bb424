//! Solvers for scalar equations — finding `x` such that `f(x) = 0`.
//!
//! Solvers in this module work with any [`Differentiable`] function and drive
//! its value toward zero.
//!
//! # Solvers
//!
//! - [`newton_raphson`] — derivative-based refinement of a single initial guess
//!
//! [`Differentiable`]: rootfinding_core::Differentiable

pub mod newton_raphson;
