//! Aggregation of terminal prices into a [`SimulationSummary`].
//!
//! [`SummaryAccumulator`] is a single-pass reducer. Every quantity it keeps
//! (count, sum, min, max, threshold count, Welford moments) merges
//! associatively, so chunks simulated on different threads can be
//! combined without caring which finished first.

use mcsim_core::types::{ParameterError, SimulationSummary};

/// Running statistics over terminal prices.
///
/// # Examples
///
/// ```rust
/// use mcsim_engine::mc::SummaryAccumulator;
///
/// let mut acc = SummaryAccumulator::new(110.0);
/// for price in [95.0, 105.0, 120.0] {
///     acc.push(price);
/// }
///
/// let summary = acc.finish().unwrap();
/// assert_eq!(summary.n_paths, 3);
/// assert_eq!(summary.min, 95.0);
/// assert_eq!(summary.max, 120.0);
/// assert!((summary.prob_above_strike - 1.0 / 3.0).abs() < 1e-15);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SummaryAccumulator {
    strike: f64,
    count: usize,
    sum: f64,
    /// Welford running mean, used only for the second moment.
    running_mean: f64,
    /// Sum of squared deviations from the running mean.
    m2: f64,
    min: f64,
    max: f64,
    above: usize,
}

impl SummaryAccumulator {
    /// Creates an empty accumulator counting prices strictly above `strike`.
    pub fn new(strike: f64) -> Self {
        Self {
            strike,
            count: 0,
            sum: 0.0,
            running_mean: 0.0,
            m2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            above: 0,
        }
    }

    /// Returns the strike threshold.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the number of prices seen so far.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Adds one terminal price.
    #[inline]
    pub fn push(&mut self, price: f64) {
        self.count += 1;
        self.sum += price;

        let delta = price - self.running_mean;
        self.running_mean += delta / self.count as f64;
        self.m2 += delta * (price - self.running_mean);

        self.min = self.min.min(price);
        self.max = self.max.max(price);
        if price > self.strike {
            self.above += 1;
        }
    }

    /// Combines two accumulators over disjoint samples.
    ///
    /// Second moments are combined with Chan et al.'s pairwise formula.
    /// Both sides must share the same strike.
    pub fn merge(self, other: Self) -> Self {
        debug_assert_eq!(self.strike.to_bits(), other.strike.to_bits());

        if other.count == 0 {
            return self;
        }
        if self.count == 0 {
            return other;
        }

        let count = self.count + other.count;
        let (na, nb, n) = (self.count as f64, other.count as f64, count as f64);
        let delta = other.running_mean - self.running_mean;

        Self {
            strike: self.strike,
            count,
            sum: self.sum + other.sum,
            running_mean: self.running_mean + delta * nb / n,
            m2: self.m2 + other.m2 + delta * delta * na * nb / n,
            min: self.min.min(other.min),
            max: self.max.max(other.max),
            above: self.above + other.above,
        }
    }

    /// Produces the summary.
    ///
    /// The mean is `sum / n`, clamped into `[min, max]` so rounding can
    /// never push it outside the observed range.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::EmptySample`] if no prices were pushed.
    pub fn finish(&self) -> Result<SimulationSummary, ParameterError> {
        if self.count == 0 {
            return Err(ParameterError::EmptySample);
        }

        let n = self.count as f64;
        let raw_mean = self.sum / n;
        let mean = if raw_mean < self.min {
            self.min
        } else if raw_mean > self.max {
            self.max
        } else {
            raw_mean
        };

        let std_dev = if self.count > 1 {
            (self.m2.max(0.0) / (n - 1.0)).sqrt()
        } else {
            0.0
        };

        Ok(SimulationSummary {
            n_paths: self.count,
            mean,
            min: self.min,
            max: self.max,
            std_dev,
            strike: self.strike,
            prob_above_strike: self.above as f64 / n,
        })
    }
}

impl Extend<f64> for SummaryAccumulator {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for price in iter {
            self.push(price);
        }
    }
}

/// Summarises `prices` against `strike` in one linear pass.
///
/// # Errors
///
/// Returns [`ParameterError::EmptySample`] if `prices` is empty.
pub fn summarise(prices: &[f64], strike: f64) -> Result<SimulationSummary, ParameterError> {
    let mut acc = SummaryAccumulator::new(strike);
    acc.extend(prices.iter().copied());
    acc.finish()
}
