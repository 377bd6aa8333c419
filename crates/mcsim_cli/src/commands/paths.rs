//! Paths command implementation
//!
//! Writes sample GBM trajectories as CSV (`path,step,time,price`).

use std::io::Write;

use mcsim_core::types::MAX_PATHS;
use mcsim_engine::mc::MonteCarloSimulator;
use tracing::info;

use crate::config::SimulatorConfig;
use crate::{CliError, Result};

/// Run the paths command, writing CSV to stdout
pub fn run(config: &SimulatorConfig, count: usize) -> Result<()> {
    let stdout = std::io::stdout();
    run_to(config, count, stdout.lock())
}

/// Run the paths command against an arbitrary writer
pub fn run_to<W: Write>(config: &SimulatorConfig, count: usize, out: W) -> Result<()> {
    if count == 0 || count > MAX_PATHS {
        return Err(CliError::InvalidArgument(format!(
            "path count {} must be in range [1, {}]",
            count, MAX_PATHS
        )));
    }

    let params = config.parameters()?;
    let simulator = MonteCarloSimulator::new(params, config.monte_carlo_config()?);
    info!(count, seed = simulator.seed(), "Sampling paths...");

    let dt = params.dt();
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["path", "step", "time", "price"])?;

    simulator.try_for_each_path(count, |path_idx, path| -> Result<()> {
        for (step, price) in path.iter().enumerate() {
            writer.write_record(&[
                path_idx.to_string(),
                step.to_string(),
                format!("{:.6}", step as f64 * dt),
                format!("{:.6}", price),
            ])?;
        }
        Ok(())
    })?;
    writer.flush()?;

    Ok(())
}
