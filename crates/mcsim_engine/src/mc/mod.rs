//! Monte Carlo simulation of Geometric Brownian Motion.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloSimulator
//! ├── SimulationParameters (model inputs, from mcsim_core)
//! ├── MonteCarloConfig     (seed, execution mode, chunk size)
//! ├── SimRng per chunk     (independent streams)
//! └── Orchestration
//!     ├── simulate_terminal_price()  per path
//!     └── SummaryAccumulator         per chunk, merged in chunk order
//! ```
//!
//! # Examples
//!
//! ```rust
//! use mcsim_core::types::SimulationParameters;
//! use mcsim_engine::mc::{MonteCarloConfig, MonteCarloSimulator};
//!
//! let params = SimulationParameters::default();
//! let config = MonteCarloConfig::builder().seed(42).build().unwrap();
//! let report = MonteCarloSimulator::new(params, config).run(110.0).unwrap();
//!
//! println!(
//!     "Mean: {:.2} +/- {:.2}, P(S_T > 110) = {:.2}%",
//!     report.summary.mean,
//!     report.summary.confidence_95(),
//!     report.summary.prob_above_strike * 100.0,
//! );
//! ```

pub mod config;
pub mod error;
pub mod paths;
pub mod simulator;
pub mod stats;

// Re-exports for convenient access
pub use config::{
    ExecutionMode, MonteCarloConfig, MonteCarloConfigBuilder, DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE,
};
pub use error::ConfigError;
pub use paths::{simulate_path, simulate_terminal_price, GbmStep};
pub use simulator::{MonteCarloSimulator, SimulationReport};
pub use stats::{summarise, SummaryAccumulator};
