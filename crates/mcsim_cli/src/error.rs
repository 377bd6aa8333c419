//! Error type for the `mcsim` binary.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or parsed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Simulation parameters were rejected.
    #[error(transparent)]
    Parameter(#[from] mcsim_core::types::ParameterError),

    /// Driver settings were rejected.
    #[error(transparent)]
    Engine(#[from] mcsim_engine::mc::ConfigError),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV rendering failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML rendering failed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),

    /// Invalid command line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
