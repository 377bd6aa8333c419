//! Monte Carlo driver configuration.
//!
//! Settings that control *how* paths are simulated (seeding, threading,
//! stream layout), as opposed to the model inputs in
//! [`SimulationParameters`](mcsim_core::types::SimulationParameters).

use std::fmt;

use serde::Serialize;

use super::error::ConfigError;

/// Default number of paths drawn from one RNG stream.
pub const DEFAULT_CHUNK_SIZE: usize = 4_096;

/// Maximum number of paths per RNG stream.
pub const MAX_CHUNK_SIZE: usize = 1_000_000;

/// How the driver schedules path simulation.
///
/// Both modes use the same per-chunk RNG streams, so for a given seed
/// they produce identical terminal prices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Chunks are simulated one after another on the calling thread.
    #[default]
    Sequential,

    /// Chunks are simulated on the Rayon thread pool.
    Parallel,
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequential => write!(f, "sequential"),
            Self::Parallel => write!(f, "parallel"),
        }
    }
}

/// Monte Carlo driver configuration.
///
/// Immutable; use [`MonteCarloConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use mcsim_engine::mc::{ExecutionMode, MonteCarloConfig};
///
/// let config = MonteCarloConfig::builder()
///     .seed(42)
///     .execution(ExecutionMode::Parallel)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.seed(), Some(42));
/// assert_eq!(config.chunk_size(), 4_096);
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloConfig {
    /// Optional seed for reproducibility; `None` draws one from entropy.
    seed: Option<u64>,
    /// Sequential or parallel scheduling.
    execution: ExecutionMode,
    /// Paths per RNG stream.
    chunk_size: usize,
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the execution mode.
    #[inline]
    pub fn execution(&self) -> ExecutionMode {
        self.execution
    }

    /// Returns the number of paths drawn from each RNG stream.
    #[inline]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidChunkSize` if `chunk_size` is 0 or
    /// greater than [`MAX_CHUNK_SIZE`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size == 0 || self.chunk_size > MAX_CHUNK_SIZE {
            return Err(ConfigError::InvalidChunkSize(self.chunk_size));
        }
        Ok(())
    }
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            seed: None,
            execution: ExecutionMode::Sequential,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// Builder for [`MonteCarloConfig`].
///
/// # Examples
///
/// ```rust
/// use mcsim_engine::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .seed(12345)
///     .chunk_size(1_000)
///     .build()
///     .expect("valid config");
/// ```
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    seed: Option<u64>,
    execution: ExecutionMode,
    chunk_size: Option<usize>,
}

impl MonteCarloConfigBuilder {
    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the seed, or clears it so the run draws one from entropy.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the execution mode.
    #[inline]
    pub fn execution(mut self, execution: ExecutionMode) -> Self {
        self.execution = execution;
        self
    }

    /// Sets the number of paths per RNG stream.
    ///
    /// # Arguments
    ///
    /// * `chunk_size` - Paths per stream in [1, 1_000_000]
    #[inline]
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = Some(chunk_size);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the chunk size is invalid.
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        let config = MonteCarloConfig {
            seed: self.seed,
            execution: self.execution,
            chunk_size: self.chunk_size.unwrap_or(DEFAULT_CHUNK_SIZE),
        };

        config.validate()?;
        Ok(config)
    }
}
