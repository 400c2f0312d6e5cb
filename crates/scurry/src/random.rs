//! Sources of randomness.
//!
//! Everything stochastic in a move (flow choice, durations, overshoot
//! offsets, noise, arc direction) draws from a [`RandomSource`]. Output is
//! reproducible given the same source and configuration.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniformly distributed values in `[0, 1)`.
pub trait RandomSource {
    /// Returns the next value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Random source backed by [`StdRng`].
///
/// # Example
///
/// ```rust
/// use scurry::{RandomSource, SeededRandom};
///
/// let mut a = SeededRandom::from_seed(7);
/// let mut b = SeededRandom::from_seed(7);
/// assert_eq!(a.next_f64(), b.next_f64());
/// ```
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Creates a source seeded from system entropy.
    pub fn new() -> Self {
        Self::from_seed(rand::random())
    }

    /// Creates a reproducible source from a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SeededRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SeededRandom {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays a fixed list of values, wrapping around at the end.
///
/// Handy for deterministic replays and for driving the engine in tests.
/// An empty list yields `0.0` forever.
#[derive(Debug, Clone, Default)]
pub struct SequenceRandom {
    values: Vec<f64>,
    index: usize,
}

impl SequenceRandom {
    /// Creates a source cycling through `values`.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            index: 0,
        }
    }
}

impl RandomSource for SequenceRandom {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.index % self.values.len()];
        self.index = self.index.wrapping_add(1);
        value
    }
}
