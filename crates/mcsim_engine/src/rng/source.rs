//! Sources of standard-normal variates for the path simulator.

use super::prng::SimRng;

/// A stream of independent standard-normal variates.
///
/// The path simulator only ever asks for one variate at a time, so this is
/// the whole contract. Implemented by [`SimRng`] for real runs and by
/// [`ReplayNormals`] for deterministic replays.
pub trait NormalSource {
    /// Returns the next standard-normal variate.
    fn next_normal(&mut self) -> f64;
}

impl NormalSource for SimRng {
    #[inline]
    fn next_normal(&mut self) -> f64 {
        self.gen_normal()
    }
}

/// Replays a fixed sequence of variates, wrapping around at the end.
///
/// # Examples
///
/// ```rust
/// use mcsim_engine::rng::{NormalSource, ReplayNormals};
///
/// let mut zeros = ReplayNormals::new(&[0.0]);
/// assert_eq!(zeros.next_normal(), 0.0);
///
/// let mut seq = ReplayNormals::new(&[1.0, -1.0]);
/// assert_eq!(seq.next_normal(), 1.0);
/// assert_eq!(seq.next_normal(), -1.0);
/// assert_eq!(seq.next_normal(), 1.0);
/// ```
#[derive(Clone, Debug)]
pub struct ReplayNormals<'a> {
    values: &'a [f64],
    position: usize,
}

impl<'a> ReplayNormals<'a> {
    /// Creates a replaying source over `values`.
    ///
    /// An empty slice yields zeros.
    pub fn new(values: &'a [f64]) -> Self {
        Self {
            values,
            position: 0,
        }
    }

    /// Returns how many variates have been drawn so far.
    #[inline]
    pub fn drawn(&self) -> usize {
        self.position
    }
}

impl NormalSource for ReplayNormals<'_> {
    #[inline]
    fn next_normal(&mut self) -> f64 {
        if self.values.is_empty() {
            self.position += 1;
            return 0.0;
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }
}
