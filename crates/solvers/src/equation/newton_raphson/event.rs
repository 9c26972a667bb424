/// Iteration event emitted by the Newton–Raphson solver.
///
/// One event is emitted after every applied update, before the convergence
/// check for that update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The iterate the step was computed from.
    pub x: f64,

    /// `f(x)` at that iterate.
    pub residual: f64,

    /// `f'(x)` at that iterate.
    pub derivative: f64,

    /// The Newton step `f(x) / f'(x)`.
    pub step: f64,

    /// The updated iterate, `x - step`.
    pub next_x: f64,
}
