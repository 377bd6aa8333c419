//! mcsim - Monte Carlo Stock Price Simulator
//!
//! Simulates terminal asset prices under Geometric Brownian Motion and
//! reports their mean, range and the probability of finishing above a
//! strike.
//!
//! # Commands
//!
//! - `mcsim` / `mcsim simulate` - Run the simulation and print the report
//! - `mcsim paths --count <N>` - Write N sample trajectories as CSV
//! - `mcsim check` - Validate and print the effective configuration
//!
//! # Architecture
//!
//! As the service layer of the workspace, this crate resolves configuration
//! and drives mcsim_engine, which in turn builds on mcsim_core.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod report;

pub use error::{CliError, Result};

use config::{build_config, CliArgs};

/// Monte Carlo Stock Price Simulator
#[derive(Parser)]
#[command(name = "mcsim")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE", env = "MCSIM_CONFIG")]
    config: Option<PathBuf>,

    /// Initial asset price
    #[arg(long, global = true, env = "MCSIM_INITIAL_PRICE")]
    initial_price: Option<f64>,

    /// Annualised drift (0.05 = 5%)
    #[arg(long, global = true, env = "MCSIM_DRIFT", allow_negative_numbers = true)]
    drift: Option<f64>,

    /// Annualised volatility (0.20 = 20%)
    #[arg(long, global = true, env = "MCSIM_VOLATILITY")]
    volatility: Option<f64>,

    /// Time horizon in years
    #[arg(long, global = true, env = "MCSIM_HORIZON")]
    horizon: Option<f64>,

    /// Time steps per path
    #[arg(long, global = true, env = "MCSIM_STEPS")]
    steps: Option<usize>,

    /// Number of Monte Carlo paths
    #[arg(short = 'n', long, global = true, env = "MCSIM_PATHS")]
    paths: Option<usize>,

    /// Strike threshold for the exceedance probability
    #[arg(short = 'k', long, global = true, env = "MCSIM_STRIKE")]
    strike: Option<f64>,

    /// Seed for reproducible runs
    #[arg(short, long, global = true, env = "MCSIM_SEED")]
    seed: Option<u64>,

    /// Simulate path chunks in parallel
    #[arg(
        long,
        global = true,
        env = "MCSIM_PARALLEL",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    parallel: Option<bool>,

    /// Paths per RNG stream
    #[arg(long, global = true, env = "MCSIM_CHUNK_SIZE")]
    chunk_size: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "MCSIM_LOG_LEVEL")]
    log_level: Option<String>,

    /// Output format (text, json)
    #[arg(short, long, global = true, env = "MCSIM_FORMAT")]
    format: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation and print the summary report
    Simulate,

    /// Write sample trajectories as CSV
    Paths {
        /// Number of trajectories
        #[arg(long, default_value = "5")]
        count: usize,
    },

    /// Validate the configuration and print the effective settings
    Check,
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        CliArgs {
            config_file: cli.config.clone(),
            initial_price: cli.initial_price,
            drift: cli.drift,
            volatility: cli.volatility,
            horizon: cli.horizon,
            steps: cli.steps,
            paths: cli.paths,
            strike: cli.strike,
            seed: cli.seed,
            parallel: cli.parallel,
            chunk_size: cli.chunk_size,
            log_level: cli.log_level.clone(),
            format: cli.format.clone(),
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Formats a command failure for stderr.
fn error_message(err: &CliError) -> String {
    format!("Error: {}", err)
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", error_message(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = build_config(&CliArgs::from(&cli))?;

    init_tracing(config.log_level.as_filter_str());
    debug!(?config, "Configuration loaded");

    match cli.command.unwrap_or(Commands::Simulate) {
        Commands::Simulate => commands::simulate::run(&config),
        Commands::Paths { count } => commands::paths::run(&config, count),
        Commands::Check => commands::check::run(&config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_defaults_to_simulate() {
        let cli = Cli::try_parse_from(["mcsim"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_global_overrides_after_subcommand() {
        let cli = Cli::try_parse_from([
            "mcsim", "paths", "--count", "3", "--seed", "9", "--drift", "-0.1", "--parallel",
        ])
        .unwrap();

        assert!(matches!(cli.command, Some(Commands::Paths { count: 3 })));
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.drift, Some(-0.1));
        assert_eq!(cli.parallel, Some(true));

        let args = CliArgs::from(&cli);
        assert_eq!(args.seed, Some(9));
    }

    #[test]
    fn test_invalid_parameter_renders_message() {
        let cli = Cli::try_parse_from(["mcsim", "--horizon", "0"]).unwrap();
        let err = run(cli).unwrap_err();

        assert_eq!(
            error_message(&err),
            "Error: Invalid parameter 'horizon': 0 must be positive"
        );
    }

    #[test]
    fn test_parallel_explicit_false() {
        let cli = Cli::try_parse_from(["mcsim", "--parallel", "false"]).unwrap();
        assert_eq!(cli.parallel, Some(false));
    }
}
