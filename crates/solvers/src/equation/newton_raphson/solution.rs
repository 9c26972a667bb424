/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The last step was smaller than the tolerance.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a Newton–Raphson solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Estimate of the root after the last applied update.
    pub x: f64,

    /// Function value at the iterate the last step was computed from.
    pub residual: f64,

    /// The last applied step.
    pub step: f64,

    /// Number of updates applied.
    pub iters: usize,
}
