//! Error types for the Monte Carlo driver configuration.

use std::fmt;

/// Configuration error for the Monte Carlo driver.
///
/// These errors occur during construction when invalid settings are provided.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Chunk size outside valid range [1, MAX_CHUNK_SIZE].
    InvalidChunkSize(usize),
    /// Invalid parameter value with name and description.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChunkSize(size) => {
                write!(
                    f,
                    "Invalid chunk size {}: must be in range [1, {}]",
                    size,
                    super::config::MAX_CHUNK_SIZE
                )
            }
            Self::InvalidParameter { name, value } => {
                write!(f, "Invalid parameter '{}': {}", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
