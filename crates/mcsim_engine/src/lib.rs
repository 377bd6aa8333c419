//! # mcsim_engine: GBM Monte Carlo Engine
//!
//! ## Engine Layer Role
//!
//! mcsim_engine turns validated [`SimulationParameters`](mcsim_core::types::SimulationParameters)
//! into a [`SimulationSummary`](mcsim_core::types::SimulationSummary):
//! - Seeded random number generation with independent per-chunk streams (`rng`)
//! - Exact log-space GBM path simulation (`mc::paths`)
//! - Order-independent aggregation of terminal prices (`mc::stats`)
//! - Sequential and Rayon-parallel drivers that agree bit for bit (`mc::simulator`)
//!
//! ## Usage Example
//!
//! ```rust
//! use mcsim_core::types::SimulationParameters;
//! use mcsim_engine::mc::{MonteCarloConfig, MonteCarloSimulator};
//!
//! let params = SimulationParameters::new(100.0, 0.05, 0.2, 1.0, 52, 2_000).unwrap();
//! let config = MonteCarloConfig::builder().seed(42).build().unwrap();
//!
//! let report = MonteCarloSimulator::new(params, config).run(110.0).unwrap();
//! assert!(report.summary.min <= report.summary.mean);
//! assert!(report.summary.mean <= report.summary.max);
//! ```

#![warn(missing_docs)]

pub mod mc;
pub mod rng;
