//! Path generation for Monte Carlo simulation.
//!
//! This module implements Geometric Brownian Motion (GBM) path generation
//! using the exact log-space recurrence:
//!
//! ```text
//! S(t+dt) = S(t) × exp((μ - 0.5σ²)dt + σ√dt × Z)
//! ```
//!
//! which is exact in distribution for the log-price, so the step count only
//! controls path resolution, not bias in the terminal price.

use mcsim_core::types::SimulationParameters;

use crate::rng::NormalSource;

/// Precomputed per-step GBM increment terms.
///
/// # Examples
///
/// ```rust
/// use mcsim_core::types::SimulationParameters;
/// use mcsim_engine::mc::GbmStep;
///
/// let params = SimulationParameters::new(100.0, 0.0, 0.0, 1.0, 1, 1).unwrap();
/// let step = GbmStep::new(&params);
/// assert_eq!(step.advance(100.0, 1.5), 100.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmStep {
    /// (μ - 0.5σ²)dt
    drift_dt: f64,
    /// σ√dt
    vol_sqrt_dt: f64,
}

impl GbmStep {
    /// Precomputes the increment terms for `params`.
    #[inline]
    pub fn new(params: &SimulationParameters) -> Self {
        let dt = params.dt();
        let sigma = params.volatility();

        Self {
            drift_dt: (params.drift() - 0.5 * sigma * sigma) * dt,
            vol_sqrt_dt: sigma * dt.sqrt(),
        }
    }

    /// Advances `price` by one step driven by the standard-normal draw `z`.
    #[inline]
    pub fn advance(&self, price: f64, z: f64) -> f64 {
        price * (self.drift_dt + self.vol_sqrt_dt * z).exp()
    }
}

/// Simulates one path and returns its terminal price.
///
/// Draws exactly `n_steps` variates from `source`. Performs no validation;
/// `params` is already validated by construction.
///
/// # Examples
///
/// ```rust
/// use mcsim_core::types::SimulationParameters;
/// use mcsim_engine::mc::simulate_terminal_price;
/// use mcsim_engine::rng::ReplayNormals;
///
/// let params = SimulationParameters::new(100.0, 0.0, 0.0, 1.0, 1, 1).unwrap();
/// let mut zeros = ReplayNormals::new(&[0.0]);
/// assert_eq!(simulate_terminal_price(&params, &mut zeros), 100.0);
/// ```
pub fn simulate_terminal_price<S>(params: &SimulationParameters, source: &mut S) -> f64
where
    S: NormalSource + ?Sized,
{
    let step = GbmStep::new(params);
    let mut price = params.initial_price();

    for _ in 0..params.n_steps() {
        price = step.advance(price, source.next_normal());
    }

    price
}

/// Simulates one full trajectory.
///
/// Returns `n_steps + 1` prices; index 0 is the initial price and the last
/// element equals what [`simulate_terminal_price`] returns for the same
/// variates.
pub fn simulate_path<S>(params: &SimulationParameters, source: &mut S) -> Vec<f64>
where
    S: NormalSource + ?Sized,
{
    let step = GbmStep::new(params);
    let mut path = Vec::with_capacity(params.n_steps() + 1);
    let mut price = params.initial_price();
    path.push(price);

    for _ in 0..params.n_steps() {
        price = step.advance(price, source.next_normal());
        path.push(price);
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{ReplayNormals, SimRng};
    use approx::assert_relative_eq;

    fn params(mu: f64, sigma: f64, steps: usize) -> SimulationParameters {
        SimulationParameters::new(100.0, mu, sigma, 1.0, steps, 1).unwrap()
    }

    #[test]
    fn test_zero_volatility_is_deterministic() {
        let p = params(0.05, 0.0, 252);
        let mut rng = SimRng::from_seed(42);
        let price = simulate_terminal_price(&p, &mut rng);
        assert_relative_eq!(price, 100.0 * 0.05_f64.exp(), max_relative = 1e-12);
    }

    #[test]
    fn test_flat_single_step() {
        let p = params(0.0, 0.0, 1);
        let mut rng = SimRng::from_seed(1);
        assert_eq!(simulate_terminal_price(&p, &mut rng), 100.0);
    }

    #[test]
    fn test_zero_variates_apply_ito_correction() {
        // Z = 0 everywhere leaves only the (μ - σ²/2)T drift.
        let p = params(0.05, 0.2, 12);
        let mut zeros = ReplayNormals::new(&[0.0]);
        let price = simulate_terminal_price(&p, &mut zeros);
        assert_relative_eq!(
            price,
            100.0 * (0.05_f64 - 0.5 * 0.04).exp(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_draws_one_variate_per_step() {
        let p = params(0.05, 0.2, 17);
        let mut source = ReplayNormals::new(&[0.3, -0.1]);
        simulate_terminal_price(&p, &mut source);
        assert_eq!(source.drawn(), 17);
    }

    #[test]
    fn test_single_step_closed_form() {
        let p = params(0.05, 0.2, 1);
        let mut source = ReplayNormals::new(&[1.0]);
        let price = simulate_terminal_price(&p, &mut source);
        let expected = 100.0 * ((0.05_f64 - 0.5 * 0.04) + 0.2).exp();
        assert_relative_eq!(price, expected, max_relative = 1e-14);
    }

    #[test]
    fn test_path_shape_and_terminal() {
        let p = params(0.05, 0.2, 50);
        let mut a = SimRng::from_seed(7);
        let mut b = SimRng::from_seed(7);

        let path = simulate_path(&p, &mut a);
        let terminal = simulate_terminal_price(&p, &mut b);

        assert_eq!(path.len(), 51);
        assert_eq!(path[0], 100.0);
        assert_eq!(*path.last().unwrap(), terminal);
    }

    #[test]
    fn test_prices_positive_and_finite() {
        let p = params(0.05, 0.8, 252);
        let mut rng = SimRng::from_seed(42);
        for _ in 0..200 {
            for price in simulate_path(&p, &mut rng) {
                assert!(price > 0.0 && price.is_finite(), "bad price {}", price);
            }
        }
    }

    #[test]
    fn test_statistical_mean() {
        let n = 50_000;
        let p = params(0.05, 0.2, 1);
        let mut rng = SimRng::from_seed(42);
        let mean = (0..n)
            .map(|_| simulate_terminal_price(&p, &mut rng))
            .sum::<f64>()
            / n as f64;

        assert_relative_eq!(mean, p.expected_terminal_price(), max_relative = 0.02);
    }
}
