//! Monte Carlo driver.
//!
//! # Overview
//!
//! The [`MonteCarloSimulator`] coordinates:
//! 1. Seed resolution (configured seed, or one drawn from entropy)
//! 2. Splitting the paths into chunks, each with its own RNG stream
//! 3. Path simulation (via [`simulate_terminal_price`](super::paths::simulate_terminal_price))
//! 4. Aggregation (via [`SummaryAccumulator`](super::stats::SummaryAccumulator))
//!
//! # Stream Layout
//!
//! Chunk `k` covers paths `[k * chunk_size, (k + 1) * chunk_size)` and draws
//! from `SimRng::for_stream(seed, k)`. Chunk accumulators are folded in
//! chunk order, so the result depends only on the seed and chunk size,
//! never on the thread count or scheduling.

use std::time::Instant;

use mcsim_core::types::{ParameterError, SimulationParameters, SimulationSummary, MAX_PATHS};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use super::config::{ExecutionMode, MonteCarloConfig};
use super::error::ConfigError;
use super::paths::{simulate_path, simulate_terminal_price};
use super::stats::SummaryAccumulator;
use crate::rng::SimRng;

/// Outcome of one Monte Carlo run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimulationReport {
    /// Inputs the run used.
    pub parameters: SimulationParameters,
    /// Statistics over all terminal prices.
    pub summary: SimulationSummary,
    /// Base seed; rerunning with this seed reproduces the report.
    pub seed: u64,
    /// How the paths were scheduled.
    pub execution: ExecutionMode,
}

/// Monte Carlo simulation driver.
///
/// # Examples
///
/// ```rust
/// use mcsim_core::types::SimulationParameters;
/// use mcsim_engine::mc::{ExecutionMode, MonteCarloConfig, MonteCarloSimulator};
///
/// let params = SimulationParameters::new(100.0, 0.05, 0.2, 1.0, 12, 5_000).unwrap();
///
/// let sequential = MonteCarloSimulator::new(
///     params,
///     MonteCarloConfig::builder().seed(7).build().unwrap(),
/// );
/// let parallel = MonteCarloSimulator::new(
///     params,
///     MonteCarloConfig::builder()
///         .seed(7)
///         .execution(ExecutionMode::Parallel)
///         .build()
///         .unwrap(),
/// );
///
/// assert_eq!(
///     sequential.run(110.0).unwrap().summary,
///     parallel.run(110.0).unwrap().summary,
/// );
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloSimulator {
    params: SimulationParameters,
    config: MonteCarloConfig,
    seed: u64,
}

impl MonteCarloSimulator {
    /// Creates a simulator, resolving the base seed up front.
    pub fn new(params: SimulationParameters, config: MonteCarloConfig) -> Self {
        let seed = config.seed().unwrap_or_else(SimRng::entropy_seed);
        Self {
            params,
            config,
            seed,
        }
    }

    /// Returns the simulation parameters.
    #[inline]
    pub fn parameters(&self) -> &SimulationParameters {
        &self.params
    }

    /// Returns the driver configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Returns the resolved base seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the number of RNG streams the paths are split into.
    #[inline]
    pub fn n_chunks(&self) -> usize {
        self.params.n_paths().div_ceil(self.config.chunk_size())
    }

    /// Simulates every path and returns the terminal prices in path order.
    pub fn simulate_terminal_prices(&self) -> Vec<f64> {
        let mut prices = vec![0.0; self.params.n_paths()];
        let chunk_size = self.config.chunk_size();

        match self.config.execution() {
            ExecutionMode::Sequential => prices
                .chunks_mut(chunk_size)
                .enumerate()
                .for_each(|(k, chunk)| self.fill_chunk(k, chunk)),
            ExecutionMode::Parallel => prices
                .par_chunks_mut(chunk_size)
                .enumerate()
                .for_each(|(k, chunk)| self.fill_chunk(k, chunk)),
        }

        prices
    }

    /// Runs the simulation and summarises terminal prices against `strike`.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::NonFinite`] if `strike` is NaN or infinite.
    pub fn run(&self, strike: f64) -> Result<SimulationReport, ParameterError> {
        if !strike.is_finite() {
            return Err(ParameterError::NonFinite {
                name: "strike",
                value: strike,
            });
        }

        info!(
            seed = self.seed,
            n_paths = self.params.n_paths(),
            n_steps = self.params.n_steps(),
            execution = %self.config.execution(),
            "Starting Monte Carlo run"
        );
        let started = Instant::now();

        let prices = self.simulate_terminal_prices();
        let chunk_size = self.config.chunk_size();
        let partials: Vec<SummaryAccumulator> = match self.config.execution() {
            ExecutionMode::Sequential => prices
                .chunks(chunk_size)
                .map(|chunk| accumulate(chunk, strike))
                .collect(),
            ExecutionMode::Parallel => prices
                .par_chunks(chunk_size)
                .map(|chunk| accumulate(chunk, strike))
                .collect(),
        };

        let summary = partials
            .into_iter()
            .fold(SummaryAccumulator::new(strike), SummaryAccumulator::merge)
            .finish()?;

        info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            mean = summary.mean,
            prob_above_strike = summary.prob_above_strike,
            "Monte Carlo run complete"
        );

        Ok(SimulationReport {
            parameters: self.params,
            summary,
            seed: self.seed,
            execution: self.config.execution(),
        })
    }

    /// Simulates `count` full trajectories for inspection, handing each one
    /// to `f` as soon as it is produced.
    ///
    /// Trajectory `i` uses the same stream layout as the terminal-price run,
    /// so it reproduces path `i` of [`simulate_terminal_prices`](Self::simulate_terminal_prices)
    /// when `i < n_paths`. Only one trajectory is held in memory at a time.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidParameter` (converted into `E`) if
    /// `count` is outside `[1, MAX_PATHS]`, or the first error `f` returns.
    pub fn try_for_each_path<E, F>(&self, count: usize, mut f: F) -> Result<(), E>
    where
        E: From<ConfigError>,
        F: FnMut(usize, &[f64]) -> Result<(), E>,
    {
        if count == 0 || count > MAX_PATHS {
            return Err(ConfigError::InvalidParameter {
                name: "count",
                value: format!("{} must be in range [1, {}]", count, MAX_PATHS),
            }
            .into());
        }

        let chunk_size = self.config.chunk_size();
        let mut rng = SimRng::for_stream(self.seed, 0);

        for i in 0..count {
            if i > 0 && i % chunk_size == 0 {
                rng = SimRng::for_stream(self.seed, (i / chunk_size) as u64);
            }
            f(i, &simulate_path(&self.params, &mut rng))?;
        }

        Ok(())
    }

    fn fill_chunk(&self, k: usize, chunk: &mut [f64]) {
        let mut rng = SimRng::for_stream(self.seed, k as u64);
        for price in chunk.iter_mut() {
            *price = simulate_terminal_price(&self.params, &mut rng);
        }
        debug!(chunk = k, paths = chunk.len(), "Chunk simulated");
    }
}

fn accumulate(prices: &[f64], strike: f64) -> SummaryAccumulator {
    let mut acc = SummaryAccumulator::new(strike);
    acc.extend(prices.iter().copied());
    acc
}
