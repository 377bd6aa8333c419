//! # Random Number Generation Infrastructure
//!
//! This module provides the random variates that drive path simulation.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: Every generator is seeded, and an entropy-seeded
//!   generator still records the seed it drew so a run can be replayed
//! - **Independence**: Parallel workers never share a generator; each chunk
//!   of paths gets its own stream via [`stream_seed`]
//! - **Static dispatch**: The path simulator is generic over [`NormalSource`],
//!   so tests can substitute a fixed variate sequence without `dyn` overhead
//!
//! ## Module Structure
//!
//! - [`prng`]: Seeded PRNG wrapper and stream seed derivation
//! - [`source`]: The [`NormalSource`] trait and a replaying implementation
//!
//! ## Usage Example
//!
//! ```rust
//! use mcsim_engine::rng::{NormalSource, SimRng};
//!
//! let mut rng = SimRng::from_seed(12345);
//! let z = rng.next_normal();
//! assert!(z.is_finite());
//!
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//! ```

mod prng;
mod source;

pub use prng::{stream_seed, SimRng};
pub use source::{NormalSource, ReplayNormals};

#[cfg(test)]
mod tests;
