//! Simulate command implementation
//!
//! Runs the Monte Carlo simulation and prints the summary report.

use std::io::Write;

use mcsim_engine::mc::MonteCarloSimulator;
use tracing::info;

use crate::config::{OutputFormat, SimulatorConfig};
use crate::report;
use crate::Result;

/// Run the simulate command, writing the report to stdout
pub fn run(config: &SimulatorConfig) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_to(config, &mut out)
}

/// Run the simulate command against an arbitrary writer
pub fn run_to<W: Write>(config: &SimulatorConfig, out: &mut W) -> Result<()> {
    let params = config.parameters()?;
    let mc_config = config.monte_carlo_config()?;
    let simulator = MonteCarloSimulator::new(params, mc_config);

    info!(
        paths = params.n_paths(),
        strike = config.strike,
        format = %config.format,
        "Starting simulation..."
    );

    let report = simulator.run(config.strike)?;

    match config.format {
        OutputFormat::Text => write!(out, "{}", report::TextReport(&report))?,
        OutputFormat::Json => writeln!(out, "{}", report::render_json(&report)?)?,
    }
    out.flush()?;

    info!("Simulation complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;

    fn small_config() -> SimulatorConfig {
        SimulatorConfig {
            paths: 500,
            steps: 12,
            seed: Some(42),
            ..Default::default()
        }
    }

    #[test]
    fn test_text_output() {
        let mut buffer = Vec::new();
        run_to(&small_config(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("Running 500 simulations..."));
        assert!(text.contains("Probability of price > $110.00:"));
    }

    #[test]
    fn test_json_output_is_reproducible() {
        let config = SimulatorConfig {
            format: OutputFormat::Json,
            ..small_config()
        };

        let mut first = Vec::new();
        let mut second = Vec::new();
        run_to(&config, &mut first).unwrap();
        run_to(&config, &mut second).unwrap();

        assert_eq!(first, second);
        let value: serde_json::Value = serde_json::from_slice(&first).unwrap();
        assert_eq!(value["summary"]["n_paths"], 500);
    }

    #[test]
    fn test_flat_scenario_prints_initial_price() {
        let config = SimulatorConfig {
            drift: 0.0,
            volatility: 0.0,
            steps: 1,
            paths: 1,
            ..small_config()
        };
        let mut buffer = Vec::new();
        run_to(&config, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("Average Simulated Final Price: $100.00"));
        assert!(text.contains("Probability of price > $110.00: 0.00%"));
    }

    #[test]
    fn test_invalid_parameters_reported() {
        let config = SimulatorConfig {
            horizon: 0.0,
            ..small_config()
        };
        let mut buffer = Vec::new();
        let err = run_to(&config, &mut buffer).unwrap_err();

        assert!(matches!(err, CliError::Parameter(_)));
        assert!(buffer.is_empty());
    }
}
