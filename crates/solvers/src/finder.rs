use rootfinding_core::{Cubic, Differentiable};

use crate::equation::newton_raphson::{self, Config, ConfigError, Error};

/// A Newton–Raphson solver with a fixed tolerance.
///
/// The solver holds only its validated [`Config`], so a single instance can
/// be shared freely across threads and reused for any number of solves.
///
/// ```
/// use rootfinding_solvers::NewtonRaphson;
///
/// let finder = NewtonRaphson::new(0.001)?;
/// let root = finder.solve(-20.0)?;
/// assert!((root + 1.0).abs() < 1e-6);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonRaphson {
    config: Config,
}

impl NewtonRaphson {
    /// Creates a solver that converges once the step is below `tolerance`.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not a positive finite number.
    pub fn new(tolerance: f64) -> Result<Self, ConfigError> {
        Config::with_tolerance(tolerance).map(Self::with_config)
    }

    /// Creates a solver from an already validated config.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Returns the solver's config.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the step-size tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.config.tolerance()
    }

    /// Finds a root of the example equation `x³ - x² + 2` from `guess`.
    ///
    /// # Errors
    ///
    /// See [`NewtonRaphson::solve_with`].
    pub fn solve(&self, guess: f64) -> Result<f64, Error> {
        self.solve_with(&Cubic, guess)
    }

    /// Finds a root of `function` from `guess`.
    ///
    /// # Errors
    ///
    /// Returns an error if `guess` is not finite, the derivative vanishes at
    /// an iterate, or the iteration fails to converge.
    pub fn solve_with<F>(&self, function: &F, guess: f64) -> Result<f64, Error>
    where
        F: Differentiable + ?Sized,
    {
        newton_raphson::solve_unobserved(function, guess, &self.config).map(|solution| solution.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::thread;

    use approx::assert_abs_diff_eq;
    use rootfinding_core::FnPair;

    #[test]
    fn solves_example_from_far_left() {
        let finder = NewtonRaphson::new(0.001).unwrap();
        let root = finder.solve(-20.0).expect("should converge");
        assert_abs_diff_eq!(root, Cubic::ROOT, epsilon = 1e-6);
    }

    #[test]
    fn rejects_non_positive_tolerance() {
        assert!(matches!(
            NewtonRaphson::new(0.0),
            Err(ConfigError::Tolerance(_))
        ));
        assert!(matches!(
            NewtonRaphson::new(-0.5),
            Err(ConfigError::Tolerance(_))
        ));
    }

    #[test]
    fn exposes_its_config() {
        let config = Config::new(1e-8, 42).unwrap();
        let finder = NewtonRaphson::with_config(config);

        assert_eq!(finder.config(), &config);
        assert_eq!(finder.tolerance(), 1e-8);
        assert_eq!(finder.config().max_iters(), 42);
        assert_eq!(
            NewtonRaphson::new(0.25).unwrap().config().max_iters(),
            Config::DEFAULT_MAX_ITERS
        );
    }

    #[test]
    fn iteration_cap_from_config_applies() {
        let finder = NewtonRaphson::with_config(Config::new(1e-12, 2).unwrap());

        assert!(matches!(
            finder.solve(-20.0),
            Err(Error::MaxIters { iters: 2, .. })
        ));
    }

    #[test]
    fn solves_arbitrary_function() {
        let finder = NewtonRaphson::new(1e-12).unwrap();
        let sqrt_two = FnPair::new(|x: f64| x * x - 2.0, |x: f64| 2.0 * x);

        let root = finder.solve_with(&sqrt_two, 1.0).expect("should converge");
        assert_abs_diff_eq!(root, std::f64::consts::SQRT_2, epsilon = 1e-12);
    }

    #[test]
    fn shared_solver_across_threads() {
        let finder = NewtonRaphson::new(1e-9).unwrap();
        let guesses = [-20.0, -3.0, 1.0, 5.0, 100.0];

        let roots: Vec<f64> = thread::scope(|scope| {
            let handles: Vec<_> = guesses
                .iter()
                .map(|&guess| scope.spawn(move || finder.solve(guess)))
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap().unwrap())
                .collect()
        });

        for root in roots {
            assert_abs_diff_eq!(root, Cubic::ROOT, epsilon = 1e-9);
        }
    }
}
