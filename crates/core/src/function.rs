/// A real-valued function of one real variable with a known derivative.
///
/// Newton-type solvers need both `f(x)` and `f'(x)` at each iterate.
/// Implementations are expected to be pure: the same `x` always yields the
/// same values, and evaluation has no side effects.
pub trait Differentiable {
    /// Evaluates `f(x)`.
    fn value(&self, x: f64) -> f64;

    /// Evaluates `f'(x)`.
    fn derivative(&self, x: f64) -> f64;
}

impl<T: Differentiable + ?Sized> Differentiable for &T {
    fn value(&self, x: f64) -> f64 {
        (**self).value(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        (**self).derivative(x)
    }
}

/// A function and its derivative supplied as two closures.
///
/// ```
/// use rootfinding_core::{Differentiable, FnPair};
///
/// let square = FnPair::new(|x: f64| x * x - 4.0, |x: f64| 2.0 * x);
/// assert_eq!(square.value(3.0), 5.0);
/// assert_eq!(square.derivative(3.0), 6.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnPair<F, D> {
    function: F,
    derivative: D,
}

impl<F, D> FnPair<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    /// Pairs `function` with its `derivative`.
    pub fn new(function: F, derivative: D) -> Self {
        Self {
            function,
            derivative,
        }
    }
}

impl<F, D> Differentiable for FnPair<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    fn value(&self, x: f64) -> f64 {
        (self.function)(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        (self.derivative)(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn closure_pair_evaluates_both_parts() {
        let sine = FnPair::new(f64::sin, f64::cos);

        assert_relative_eq!(sine.value(0.0), 0.0);
        assert_relative_eq!(sine.derivative(0.0), 1.0);
    }

    #[test]
    fn references_are_differentiable() {
        fn slope_at<F: Differentiable>(f: F, x: f64) -> f64 {
            f.derivative(x)
        }

        let line = FnPair::new(|x: f64| 3.0 * x + 1.0, |_x: f64| 3.0);
        assert_relative_eq!(slope_at(&line, 10.0), 3.0);
        assert_relative_eq!(line.value(1.0), 4.0);
    }
}
