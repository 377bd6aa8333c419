//! # mcsim_core: Data Model for the GBM Monte Carlo Simulator
//!
//! ## Core Layer Role
//!
//! mcsim_core is the bottom layer of the simulator workspace, providing:
//! - Validated, immutable simulation inputs (`types::SimulationParameters`)
//! - The read-only statistics produced by a run (`types::SimulationSummary`)
//! - Structured parameter errors (`types::ParameterError`)
//!
//! ## Zero Dependency Principle
//!
//! The core layer has no dependencies on other mcsim_* crates, with minimal
//! external dependencies:
//! - thiserror: Error derivation
//! - serde: Serialisation of parameters and summaries for JSON reports
//!
//! ## Usage Examples
//!
//! ```rust
//! use mcsim_core::types::SimulationParameters;
//!
//! let params = SimulationParameters::new(100.0, 0.05, 0.2, 1.0, 252, 10_000).unwrap();
//! assert_eq!(params.n_steps(), 252);
//! assert!((params.dt() - 1.0 / 252.0).abs() < 1e-15);
//!
//! // Invalid inputs are rejected at construction time
//! assert!(SimulationParameters::new(100.0, 0.05, -0.2, 1.0, 252, 10_000).is_err());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;
