use thiserror::Error;

/// Errors that can occur during Newton–Raphson solving.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("initial guess must be finite, got {x0}")]
    NonFiniteGuess { x0: f64 },

    #[error("derivative vanished at x = {x} on iteration {iter}: f'(x) = {derivative}")]
    DerivativeVanished { iter: usize, x: f64, derivative: f64 },

    #[error("non-finite evaluation at x = {x} on iteration {iter}: f(x) = {residual}, f'(x) = {derivative}")]
    NonFiniteEvaluation {
        iter: usize,
        x: f64,
        residual: f64,
        derivative: f64,
    },

    #[error("iteration diverged at x = {x} on iteration {iter}: step = {step}")]
    Diverged { iter: usize, x: f64, step: f64 },

    #[error("no convergence after {iters} iterations: x = {x}, last step = {step}")]
    MaxIters { iters: usize, x: f64, step: f64 },
}

impl Error {
    /// Returns `true` if the iteration ran but failed to settle on a root,
    /// either by diverging or by exhausting the iteration cap.
    #[must_use]
    pub fn is_convergence_failure(&self) -> bool {
        matches!(
            self,
            Self::NonFiniteEvaluation { .. } | Self::Diverged { .. } | Self::MaxIters { .. }
        )
    }

    /// Returns the last finite iterate reached before the failure, if any.
    #[must_use]
    pub fn last_x(&self) -> Option<f64> {
        match *self {
            Self::DerivativeVanished { x, .. }
            | Self::NonFiniteEvaluation { x, .. }
            | Self::Diverged { x, .. }
            | Self::MaxIters { x, .. } => Some(x),
            Self::NonFiniteGuess { .. } => None,
        }
    }
}
