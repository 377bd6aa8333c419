//! Report rendering for simulation results.

use std::fmt;

use mcsim_engine::mc::SimulationReport;

/// Human-readable report.
///
/// Prices use a `$` prefix and two decimals; drift, volatility and the
/// exceedance probability are shown as percentages.
pub struct TextReport<'a>(pub &'a SimulationReport);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let params = &report.parameters;
        let summary = &report.summary;

        writeln!(out, "--- Monte Carlo Stock Price Simulator ---")?;
        writeln!(out, "Running {} simulations...", params.n_paths())?;
        writeln!(out, "-----------------------------------------")?;
        writeln!(out, "Initial Price: ${:.2}", params.initial_price())?;
        writeln!(out, "Expected Return (Drift): {:.2}%", params.drift() * 100.0)?;
        writeln!(out, "Volatility: {:.2}%", params.volatility() * 100.0)?;
        writeln!(out, "Time Horizon: {:.2} year(s)", params.horizon())?;
        writeln!(out, "Time Steps: {}", params.n_steps())?;
        writeln!(out, "Seed: {} ({})", report.seed, report.execution)?;
        writeln!(out, "-----------------------------------------")?;
        writeln!(out, "--- Simulation Results ---")?;
        writeln!(out, "Average Simulated Final Price: ${:.2}", summary.mean)?;
        writeln!(out, "Minimum Simulated Final Price: ${:.2}", summary.min)?;
        writeln!(out, "Maximum Simulated Final Price: ${:.2}", summary.max)?;
        writeln!(out, "Standard Error of Mean: ${:.2}", summary.std_error())?;
        writeln!(out, "--------------------------")?;
        writeln!(out, "--- Basic Option Pricing Example ---")?;
        writeln!(
            out,
            "Probability of price > ${:.2}: {:.2}%",
            summary.strike,
            summary.prob_above_strike * 100.0
        )?;
        writeln!(out, "------------------------------------")
    }
}

/// Renders the report as pretty-printed JSON.
pub fn render_json(report: &SimulationReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcsim_core::types::{SimulationParameters, SimulationSummary};
    use mcsim_engine::mc::ExecutionMode;

    fn report() -> SimulationReport {
        SimulationReport {
            parameters: SimulationParameters::default(),
            summary: SimulationSummary {
                n_paths: 10_000,
                mean: 105.127,
                min: 48.5,
                max: 230.004,
                std_dev: 21.0,
                strike: 110.0,
                prob_above_strike: 0.3720,
            },
            seed: 42,
            execution: ExecutionMode::Sequential,
        }
    }

    #[test]
    fn test_text_report_lines() {
        let text = TextReport(&report()).to_string();

        assert!(text.starts_with("--- Monte Carlo Stock Price Simulator ---\n"));
        assert!(text.contains("Running 10000 simulations...\n"));
        assert!(text.contains("Initial Price: $100.00\n"));
        assert!(text.contains("Expected Return (Drift): 5.00%\n"));
        assert!(text.contains("Volatility: 20.00%\n"));
        assert!(text.contains("Time Horizon: 1.00 year(s)\n"));
        assert!(text.contains("Seed: 42 (sequential)\n"));
        assert!(text.contains("Average Simulated Final Price: $105.13\n"));
        assert!(text.contains("Minimum Simulated Final Price: $48.50\n"));
        assert!(text.contains("Maximum Simulated Final Price: $230.00\n"));
        assert!(text.contains("Standard Error of Mean: $0.21\n"));
        assert!(text.contains("Probability of price > $110.00: 37.20%\n"));
    }

    #[test]
    fn test_json_report_fields() {
        let json = render_json(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["seed"], 42);
        assert_eq!(value["execution"], "sequential");
        assert_eq!(value["parameters"]["n_steps"], 252);
        assert_eq!(value["summary"]["strike"], 110.0);
    }
}
