//! Error types for parameter validation.
//!
//! [`ParameterError`] covers every way a simulation input can be rejected,
//! plus the one failure the aggregator can report (an empty sample).

use thiserror::Error;

/// Parameter validation errors.
///
/// # Variants
/// - `NonPositive`: A value that must be strictly positive was not
/// - `Negative`: A value that must be non-negative was negative
/// - `NonFinite`: A value was NaN or infinite
/// - `StepCount`: Step count outside `[1, MAX_STEPS]`
/// - `PathCount`: Path count outside `[1, MAX_PATHS]`
/// - `EmptySample`: Statistics were requested over zero terminal prices
///
/// # Examples
/// ```
/// use mcsim_core::types::ParameterError;
///
/// let err = ParameterError::NonPositive { name: "horizon", value: 0.0 };
/// assert_eq!(format!("{}", err), "Invalid parameter 'horizon': 0 must be positive");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// Value must be strictly positive.
    #[error("Invalid parameter '{name}': {value} must be positive")]
    NonPositive {
        /// Parameter name
        name: &'static str,
        /// Rejected value
        value: f64,
    },

    /// Value must be non-negative.
    #[error("Invalid parameter '{name}': {value} must be non-negative")]
    Negative {
        /// Parameter name
        name: &'static str,
        /// Rejected value
        value: f64,
    },

    /// Value must be finite.
    #[error("Invalid parameter '{name}': {value} is not finite")]
    NonFinite {
        /// Parameter name
        name: &'static str,
        /// Rejected value
        value: f64,
    },

    /// Step count outside the supported range.
    #[error("Invalid step count {0}: must be in range [1, {max}]", max = super::MAX_STEPS)]
    StepCount(usize),

    /// Path count outside the supported range.
    #[error("Invalid path count {0}: must be in range [1, {max}]", max = super::MAX_PATHS)]
    PathCount(usize),

    /// No terminal prices to summarise.
    #[error("Cannot summarise an empty sample")]
    EmptySample,
}

impl ParameterError {
    /// Returns the offending parameter name, if the error concerns one.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            Self::NonPositive { name, .. }
            | Self::Negative { name, .. }
            | Self::NonFinite { name, .. } => Some(*name),
            Self::StepCount(_) => Some("n_steps"),
            Self::PathCount(_) => Some("n_paths"),
            Self::EmptySample => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_error_display() {
        let err = ParameterError::Negative {
            name: "volatility",
            value: -0.2,
        };
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'volatility': -0.2 must be non-negative"
        );

        let err = ParameterError::StepCount(0);
        assert!(err.to_string().contains("Invalid step count 0"));

        let err = ParameterError::PathCount(0);
        assert!(err.to_string().contains("Invalid path count 0"));

        let err = ParameterError::NonFinite {
            name: "drift",
            value: f64::NAN,
        };
        assert!(err.to_string().contains("not finite"));
    }

    #[test]
    fn test_parameter_name() {
        assert_eq!(ParameterError::StepCount(0).parameter(), Some("n_steps"));
        assert_eq!(ParameterError::PathCount(0).parameter(), Some("n_paths"));
        assert_eq!(
            ParameterError::NonPositive {
                name: "initial_price",
                value: 0.0
            }
            .parameter(),
            Some("initial_price")
        );
        assert_eq!(ParameterError::EmptySample.parameter(), None);
    }
}
