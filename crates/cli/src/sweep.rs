//! Tolerance sweeps: solve the same guess across a range of tolerances.

use std::time::Instant;

use rootfinding_solvers::NewtonRaphson;
use serde::Serialize;
use tracing::info;

use crate::error::{CliError, Result};

/// An inclusive, evenly spaced range of tolerances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRange {
    min: f64,
    step: f64,
    count: u32,
}

/// One solve within a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint {
    pub epsilon: f64,
    pub guess: f64,
    pub root: f64,
    pub duration_ms: f64,
}

/// The full sweep result, serialized as `{"roots": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepReport {
    pub roots: Vec<SweepPoint>,
}

impl SweepRange {
    /// Largest number of tolerances a single sweep may contain.
    pub const MAX_POINTS: u32 = 10_000;

    /// Creates a range from `min` to `max` (inclusive) in increments of `step`.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InvalidArgument`] if any bound is non-finite,
    /// `step` is not positive, `min > max`, `step` is too small to move
    /// away from `min`, or the range holds more than [`Self::MAX_POINTS`].
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self> {
        if !(min.is_finite() && max.is_finite() && step.is_finite()) {
            return Err(CliError::InvalidArgument(
                "sweep bounds and step must be finite".to_owned(),
            ));
        }
        if step <= 0.0 {
            return Err(CliError::InvalidArgument(format!(
                "sweep step must be positive, got {step}"
            )));
        }
        if min > max {
            return Err(CliError::InvalidArgument(format!(
                "sweep min {min} exceeds max {max}"
            )));
        }
        #[allow(clippy::float_cmp)]
        if min + step == min {
            return Err(CliError::InvalidArgument(format!(
                "sweep step {step} is too small to advance from {min}"
            )));
        }

        // Slack absorbs rounding so an exact `max` is included.
        let intervals = ((max - min) / step + 1e-9).floor();
        if intervals >= f64::from(Self::MAX_POINTS) {
            return Err(CliError::InvalidArgument(format!(
                "sweep would hold more than {} points",
                Self::MAX_POINTS
            )));
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let count = intervals as u32 + 1;
        Ok(Self { min, step, count })
    }

    /// Returns the number of tolerances in the range.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.count as usize
    }

    /// Returns the tolerances in the range, in increasing order.
    pub fn epsilons(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.count).map(move |i| self.min + f64::from(i) * self.step)
    }
}

/// Solves from `guess` for every tolerance in `range`.
///
/// # Errors
///
/// Returns an error if a tolerance in the range is invalid (for example a
/// range starting at zero) or a solve fails.
pub fn run(range: &SweepRange, guess: f64) -> Result<SweepReport> {
    let mut roots = Vec::new();

    for epsilon in range.epsilons() {
        let start = Instant::now();
        let finder = NewtonRaphson::new(epsilon)?;
        let root = finder.solve(guess)?;
        let duration_ms = start.elapsed().as_secs_f64() * 1e3;

        roots.push(SweepPoint {
            epsilon,
            guess,
            root,
            duration_ms,
        });
    }

    info!(points = roots.len(), guess, "sweep complete");
    Ok(SweepReport { roots })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;

    #[test]
    fn range_includes_both_ends() {
        let range = SweepRange::new(0.001, 0.005, 0.001).unwrap();
        let epsilons: Vec<f64> = range.epsilons().collect();

        assert_eq!(epsilons.len(), 5);
        assert_abs_diff_eq!(epsilons[0], 0.001);
        assert_abs_diff_eq!(epsilons[4], 0.005, epsilon = 1e-15);
    }

    #[test]
    fn single_point_range() {
        let range = SweepRange::new(0.1, 0.1, 1.0).unwrap();
        assert_eq!(range.epsilons().count(), 1);
    }

    #[test]
    fn step_that_cannot_advance_is_rejected() {
        let result = SweepRange::new(1.0, 2.0, 1e-300);
        assert!(matches!(result, Err(CliError::InvalidArgument(_))));
    }

    #[test]
    fn oversized_range_is_rejected() {
        let result = SweepRange::new(0.001, 1e6, 1e-6);
        assert!(matches!(result, Err(CliError::InvalidArgument(_))));

        let result = SweepRange::new(-1e308, 1e308, 1.0);
        assert!(matches!(result, Err(CliError::InvalidArgument(_))));
    }

    #[test]
    fn largest_allowed_range_is_bounded() {
        let max_points = SweepRange::MAX_POINTS;
        let range = SweepRange::new(1.0, f64::from(max_points), 1.0).unwrap();

        assert_eq!(range.point_count(), max_points as usize);
        assert_eq!(range.epsilons().count(), range.point_count());
        assert!(SweepRange::new(1.0, f64::from(max_points + 1), 1.0).is_err());
    }

    #[test]
    fn rejects_bad_ranges() {
        assert!(SweepRange::new(0.1, 0.2, 0.0).is_err());
        assert!(SweepRange::new(0.1, 0.2, -0.1).is_err());
        assert!(SweepRange::new(0.3, 0.2, 0.1).is_err());
        assert!(SweepRange::new(f64::NAN, 0.2, 0.1).is_err());
    }

    #[test]
    fn every_point_finds_the_root() {
        let range = SweepRange::new(0.001, 0.01, 0.003).unwrap();
        let report = run(&range, -20.0).unwrap();

        assert_eq!(report.roots.len(), 4);
        for point in &report.roots {
            assert_abs_diff_eq!(point.guess, -20.0);
            assert_abs_diff_eq!(point.root, -1.0, epsilon = 1e-3);
            assert!(point.duration_ms >= 0.0);
        }
    }

    #[test]
    fn zero_tolerance_in_range_is_a_config_error() {
        let range = SweepRange::new(0.0, 0.1, 0.05).unwrap();
        assert!(matches!(run(&range, -20.0), Err(CliError::Config(_))));
    }
}
