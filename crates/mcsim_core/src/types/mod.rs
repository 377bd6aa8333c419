//! Core simulation types.
//!
//! This module provides:
//! - `params`: Validated GBM simulation inputs
//! - `summary`: Descriptive statistics over terminal prices
//! - `error`: Structured error types for parameter validation and aggregation
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`SimulationParameters`], [`MAX_PATHS`], [`MAX_STEPS`] from `params`
//! - [`SimulationSummary`] from `summary`
//! - [`ParameterError`] from `error`

pub mod error;
pub mod params;
pub mod summary;

// Re-export commonly used types at module level
pub use error::ParameterError;
pub use params::{SimulationParameters, MAX_PATHS, MAX_STEPS};
pub use summary::SimulationSummary;
