//! Geometric Brownian Motion simulation inputs.
//!
//! [`SimulationParameters`] is validated once at construction and is
//! immutable afterwards; the engine never re-checks it.

use serde::{Deserialize, Serialize};

use super::error::ParameterError;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of time steps allowed per path.
pub const MAX_STEPS: usize = 100_000;

/// Inputs for a GBM Monte Carlo run.
///
/// # Model
///
/// The asset price follows:
/// ```text
/// dS = μ S dt + σ S dW
/// ```
///
/// where:
/// - S is the asset price, starting at `initial_price`
/// - μ is the annualised drift
/// - σ is the annualised volatility
/// - W is a Wiener process
///
/// # Examples
///
/// ```rust
/// use mcsim_core::types::SimulationParameters;
///
/// let params = SimulationParameters::default();
/// assert_eq!(params.initial_price(), 100.0);
/// assert_eq!(params.n_paths(), 10_000);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawParameters")]
pub struct SimulationParameters {
    initial_price: f64,
    drift: f64,
    volatility: f64,
    horizon: f64,
    n_steps: usize,
    n_paths: usize,
}

impl SimulationParameters {
    /// Creates validated simulation parameters.
    ///
    /// # Arguments
    ///
    /// * `initial_price` - Starting asset price (S₀), must be positive
    /// * `drift` - Annualised drift (μ), any finite value
    /// * `volatility` - Annualised volatility (σ), must be non-negative
    /// * `horizon` - Time horizon in years (T), must be positive
    /// * `n_steps` - Time steps per path, in `[1, MAX_STEPS]`
    /// * `n_paths` - Number of simulated paths, in `[1, MAX_PATHS]`
    ///
    /// # Errors
    ///
    /// Returns the first [`ParameterError`] encountered, checking fields
    /// in argument order.
    pub fn new(
        initial_price: f64,
        drift: f64,
        volatility: f64,
        horizon: f64,
        n_steps: usize,
        n_paths: usize,
    ) -> Result<Self, ParameterError> {
        ensure_finite("initial_price", initial_price)?;
        if initial_price <= 0.0 {
            return Err(ParameterError::NonPositive {
                name: "initial_price",
                value: initial_price,
            });
        }

        ensure_finite("drift", drift)?;

        ensure_finite("volatility", volatility)?;
        if volatility < 0.0 {
            return Err(ParameterError::Negative {
                name: "volatility",
                value: volatility,
            });
        }

        ensure_finite("horizon", horizon)?;
        if horizon <= 0.0 {
            return Err(ParameterError::NonPositive {
                name: "horizon",
                value: horizon,
            });
        }

        if n_steps == 0 || n_steps > MAX_STEPS {
            return Err(ParameterError::StepCount(n_steps));
        }
        if n_paths == 0 || n_paths > MAX_PATHS {
            return Err(ParameterError::PathCount(n_paths));
        }

        Ok(Self {
            initial_price,
            drift,
            volatility,
            horizon,
            n_steps,
            n_paths,
        })
    }

    /// Returns the initial asset price (S₀).
    #[inline]
    pub fn initial_price(&self) -> f64 {
        self.initial_price
    }

    /// Returns the annualised drift (μ).
    #[inline]
    pub fn drift(&self) -> f64 {
        self.drift
    }

    /// Returns the annualised volatility (σ).
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the time horizon in years (T).
    #[inline]
    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    /// Returns the number of time steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the number of simulated paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the length of one time step, `T / n_steps`.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.horizon / self.n_steps as f64
    }

    /// Returns E[S(T)] = S₀ exp(μT), the analytical mean terminal price.
    #[inline]
    pub fn expected_terminal_price(&self) -> f64 {
        self.initial_price * (self.drift * self.horizon).exp()
    }

    /// Returns a copy with a different path count.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::PathCount`] if `n_paths` is out of range.
    pub fn with_paths(&self, n_paths: usize) -> Result<Self, ParameterError> {
        Self::new(
            self.initial_price,
            self.drift,
            self.volatility,
            self.horizon,
            self.n_steps,
            n_paths,
        )
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            initial_price: 100.0,
            drift: 0.05,
            volatility: 0.20,
            horizon: 1.0,
            n_steps: 252,
            n_paths: 10_000,
        }
    }
}

fn ensure_finite(name: &'static str, value: f64) -> Result<(), ParameterError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParameterError::NonFinite { name, value })
    }
}

/// Unvalidated mirror used so deserialisation goes through [`SimulationParameters::new`].
#[derive(Deserialize)]
struct RawParameters {
    initial_price: f64,
    drift: f64,
    volatility: f64,
    horizon: f64,
    n_steps: usize,
    n_paths: usize,
}

impl TryFrom<RawParameters> for SimulationParameters {
    type Error = ParameterError;

    fn try_from(raw: RawParameters) -> Result<Self, Self::Error> {
        Self::new(
            raw.initial_price,
            raw.drift,
            raw.volatility,
            raw.horizon,
            raw.n_steps,
            raw.n_paths,
        )
    }
}
