//! Newton–Raphson iteration for single-variable equations.
//!
//! # Algorithm
//!
//! Starting from an initial guess `x`, the solver repeatedly computes the step
//! `f(x) / f'(x)` and applies the update `x ← x - step`. The step is always
//! applied before it is compared against the tolerance, so at least one
//! update happens even when the initial guess is already a root. The solver
//! converges once `|step| < tolerance`.
//!
//! The tolerance bounds the final step, not the distance to the true root.
//! Where `f'` is small near the root the two can differ substantially.
//!
//! # Failure Modes
//!
//! - [`Error::DerivativeVanished`] — `|f'(x)|` is within machine epsilon of zero
//! - [`Error::NonFiniteEvaluation`] — `f(x)` or `f'(x)` is not finite
//! - [`Error::Diverged`] — the step or the next iterate is not finite
//! - [`Error::MaxIters`] — the iteration cap was reached before converging
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per applied update. Observers can return
//! [`Action::StopEarly`] to halt immediately with the latest iterate.

mod action;
mod config;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use rootfinding_core::{Differentiable, Observer};
use tracing::{debug, trace, warn};

/// Finds a root of `function` starting from `x0`.
///
/// The observer receives an [`Event`] after every update.
///
/// # Errors
///
/// Returns an error if `x0` is not finite, the derivative vanishes at an
/// iterate, the iteration diverges, or the iteration cap is reached.
pub fn solve<F, Obs>(
    function: &F,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Differentiable + ?Sized,
    Obs: Observer<Event, Action>,
{
    if !x0.is_finite() {
        return Err(Error::NonFiniteGuess { x0 });
    }

    let tolerance = config.tolerance();
    debug!(x0, tolerance, max_iters = config.max_iters(), "starting newton-raphson");

    let mut x = x0;
    let mut step = f64::INFINITY;

    for iter in 1..=config.max_iters() {
        let residual = function.value(x);
        let derivative = function.derivative(x);

        if !residual.is_finite() || !derivative.is_finite() {
            warn!(iter, x, residual, derivative, "non-finite evaluation");
            return Err(Error::NonFiniteEvaluation {
                iter,
                x,
                residual,
                derivative,
            });
        }

        if derivative.abs() <= f64::EPSILON {
            warn!(iter, x, derivative, "derivative vanished");
            return Err(Error::DerivativeVanished {
                iter,
                x,
                derivative,
            });
        }

        step = residual / derivative;
        let next_x = x - step;

        if !step.is_finite() || !next_x.is_finite() {
            warn!(iter, x, step, "iteration diverged");
            return Err(Error::Diverged { iter, x, step });
        }

        trace!(iter, x, residual, derivative, step, "newton update");

        let event = Event {
            iter,
            x,
            residual,
            derivative,
            step,
            next_x,
        };
        x = next_x;

        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => {
                    debug!(iter, x, "stopped by observer");
                    return Ok(Solution {
                        status: Status::StoppedByObserver,
                        x,
                        residual,
                        step,
                        iters: iter,
                    });
                }
            }
        }

        if step.abs() < tolerance {
            debug!(iter, root = x, "converged");
            return Ok(Solution {
                status: Status::Converged,
                x,
                residual,
                step,
                iters: iter,
            });
        }
    }

    warn!(iters = config.max_iters(), x, step, "iteration cap reached");
    Err(Error::MaxIters {
        iters: config.max_iters(),
        x,
        step,
    })
}

/// Runs Newton–Raphson without observation.
///
/// # Errors
///
/// Returns an error if `x0` is not finite, the derivative vanishes at an
/// iterate, the iteration diverges, or the iteration cap is reached.
pub fn solve_unobserved<F>(function: &F, x0: f64, config: &Config) -> Result<Solution, Error>
where
    F: Differentiable + ?Sized,
{
    solve(function, x0, config, ())
}
