use crate::Differentiable;

/// The example equation `f(x) = x³ - x² + 2`.
///
/// Its only real root is `x = -1`. The derivative `3x² - 2x` vanishes at
/// `x = 0` and `x = 2/3`, so Newton iteration started exactly at either point
/// cannot take a first step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cubic;

impl Cubic {
    /// The real root of the equation.
    pub const ROOT: f64 = -1.0;
}

impl Differentiable for Cubic {
    fn value(&self, x: f64) -> f64 {
        x * x * x - x * x + 2.0
    }

    fn derivative(&self, x: f64) -> f64 {
        3.0 * x * x - 2.0 * x
    }
}
