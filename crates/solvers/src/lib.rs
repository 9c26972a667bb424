//! Newton–Raphson root finding.
//!
//! Two entry points are provided:
//!
//! - [`NewtonRaphson`] — a solver holding a tolerance, with `solve(x0)`
//!   returning the root estimate for the example [`Cubic`] or any
//!   [`Differentiable`] via `solve_with`.
//! - [`equation::newton_raphson`] — the generic, observable iteration that
//!   returns a full [`Solution`](equation::newton_raphson::Solution).
//!
//! [`Cubic`]: rootfinding_core::Cubic
//! [`Differentiable`]: rootfinding_core::Differentiable

pub mod equation;

mod finder;

pub use finder::NewtonRaphson;
