//! Check command implementation
//!
//! Validates the merged configuration and prints it as TOML, so the
//! output can be saved and passed back with `--config`.

use std::io::Write;

use tracing::info;

use crate::config::SimulatorConfig;
use crate::Result;

/// Run the check command
pub fn run(config: &SimulatorConfig) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_to(config, &mut out)
}

/// Run the check command against an arbitrary writer
pub fn run_to<W: Write>(config: &SimulatorConfig, out: &mut W) -> Result<()> {
    let params = config.parameters()?;
    config.monte_carlo_config()?;
    info!(
        expected_terminal_price = params.expected_terminal_price(),
        "Configuration valid"
    );

    out.write_all(toml::to_string_pretty(config)?.as_bytes())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_prints_loadable_toml() {
        let config = SimulatorConfig {
            paths: 1234,
            seed: Some(5),
            ..Default::default()
        };
        let mut buffer = Vec::new();
        run_to(&config, &mut buffer).unwrap();

        let back: SimulatorConfig = toml::from_str(&String::from_utf8(buffer).unwrap()).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_check_rejects_invalid() {
        let config = SimulatorConfig {
            steps: 0,
            ..Default::default()
        };
        assert!(run_to(&config, &mut Vec::new()).is_err());
    }
}
