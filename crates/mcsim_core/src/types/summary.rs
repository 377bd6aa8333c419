//! Descriptive statistics over simulated terminal prices.

use serde::{Deserialize, Serialize};

/// Summary of one Monte Carlo run.
///
/// Built once by the engine's aggregator from the full set of terminal
/// prices and read-only afterwards.
///
/// # Invariants
///
/// - `min <= mean <= max`
/// - `0 <= prob_above_strike <= 1`
/// - `n_paths >= 1`
///
/// # Examples
///
/// ```rust
/// use mcsim_core::types::SimulationSummary;
///
/// let summary = SimulationSummary {
///     n_paths: 10_000,
///     mean: 105.1,
///     min: 52.3,
///     max: 210.8,
///     std_dev: 21.3,
///     strike: 110.0,
///     prob_above_strike: 0.35,
/// };
///
/// println!("Mean: {:.2} +/- {:.2}", summary.mean, summary.confidence_95());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    /// Number of terminal prices summarised.
    pub n_paths: usize,
    /// Arithmetic mean of terminal prices.
    pub mean: f64,
    /// Smallest terminal price.
    pub min: f64,
    /// Largest terminal price.
    pub max: f64,
    /// Sample standard deviation of terminal prices (0 for a single path).
    pub std_dev: f64,
    /// Threshold used for `prob_above_strike`.
    pub strike: f64,
    /// Fraction of terminal prices strictly above `strike`.
    pub prob_above_strike: f64,
}

impl SimulationSummary {
    /// Returns the standard error of the mean.
    #[inline]
    pub fn std_error(&self) -> f64 {
        self.std_dev / (self.n_paths as f64).sqrt()
    }

    /// Returns the 95% confidence interval half-width for the mean.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error()
    }
}
