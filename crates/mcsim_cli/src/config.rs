//! Simulator configuration management
//!
//! Settings come from (highest priority first) command line flags,
//! `MCSIM_*` environment variables (resolved by clap), an optional TOML
//! file, and finally the built-in defaults, which reproduce the reference
//! run: S₀ = 100, μ = 5%, σ = 20%, one year of daily steps, 10,000 paths
//! and a strike of 110.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use mcsim_core::types::{ParameterError, SimulationParameters};
use mcsim_engine::mc::{self, ExecutionMode, MonteCarloConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: text, json")]
    InvalidFormat(String),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the simulator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Report output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "table" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Effective simulator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulatorConfig {
    /// Initial asset price
    pub initial_price: f64,
    /// Annualised drift
    pub drift: f64,
    /// Annualised volatility
    pub volatility: f64,
    /// Horizon in years
    pub horizon: f64,
    /// Time steps per path
    pub steps: usize,
    /// Number of paths
    pub paths: usize,
    /// Threshold for the exceedance probability
    pub strike: f64,
    /// Base seed; drawn from entropy when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Simulate chunks on the Rayon pool
    pub parallel: bool,
    /// Paths per RNG stream
    pub chunk_size: usize,
    /// Log level
    pub log_level: LogLevel,
    /// Report format
    pub format: OutputFormat,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        let params = SimulationParameters::default();
        Self {
            initial_price: params.initial_price(),
            drift: params.drift(),
            volatility: params.volatility(),
            horizon: params.horizon(),
            steps: params.n_steps(),
            paths: params.n_paths(),
            strike: 110.0,
            seed: None,
            parallel: false,
            chunk_size: mc::DEFAULT_CHUNK_SIZE,
            log_level: LogLevel::Warn,
            format: OutputFormat::Text,
        }
    }
}

impl SimulatorConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(v) = cli.initial_price {
            self.initial_price = v;
        }
        if let Some(v) = cli.drift {
            self.drift = v;
        }
        if let Some(v) = cli.volatility {
            self.volatility = v;
        }
        if let Some(v) = cli.horizon {
            self.horizon = v;
        }
        if let Some(v) = cli.steps {
            self.steps = v;
        }
        if let Some(v) = cli.paths {
            self.paths = v;
        }
        if let Some(v) = cli.strike {
            self.strike = v;
        }
        if let Some(v) = cli.seed {
            self.seed = Some(v);
        }
        if let Some(v) = cli.parallel {
            self.parallel = v;
        }
        if let Some(v) = cli.chunk_size {
            self.chunk_size = v;
        }
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if let Some(format) = &cli.format {
            self.format = OutputFormat::from_str(format)?;
        }
        Ok(())
    }

    /// Build validated simulation parameters
    pub fn parameters(&self) -> Result<SimulationParameters, ParameterError> {
        SimulationParameters::new(
            self.initial_price,
            self.drift,
            self.volatility,
            self.horizon,
            self.steps,
            self.paths,
        )
    }

    /// Build the validated driver configuration
    pub fn monte_carlo_config(&self) -> Result<MonteCarloConfig, mc::ConfigError> {
        let execution = if self.parallel {
            ExecutionMode::Parallel
        } else {
            ExecutionMode::Sequential
        };

        MonteCarloConfig::builder()
            .maybe_seed(self.seed)
            .execution(execution)
            .chunk_size(self.chunk_size)
            .build()
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    pub initial_price: Option<f64>,
    pub drift: Option<f64>,
    pub volatility: Option<f64>,
    pub horizon: Option<f64>,
    pub steps: Option<usize>,
    pub paths: Option<usize>,
    pub strike: Option<f64>,
    pub seed: Option<u64>,
    pub parallel: Option<bool>,
    pub chunk_size: Option<usize>,
    pub log_level: Option<String>,
    pub format: Option<String>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments (including `MCSIM_*` environment variables)
/// 2. Config file
/// 3. Default values
pub fn build_config(cli: &CliArgs) -> Result<SimulatorConfig, ConfigError> {
    let mut config = match &cli.config_file {
        Some(path) => SimulatorConfig::from_file(path)?,
        None => SimulatorConfig::default(),
    };

    config.merge_with_cli(cli)?;
    Ok(config)
}
