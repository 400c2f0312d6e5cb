//! Time-bucketed speed profiles.
//!
//! A [`Flow`] describes how slow or fast the cursor moves at each moment of
//! a movement. It does not describe the trajectory, only how jagged or
//! smooth, accelerating or decelerating, the movement is.
//!
//! The characteristics are relative: `[1, 2, 3, 4]` means the same as
//! `[100, 200, 300, 400]`. In an array of `n` elements every element covers
//! `1/n` of the movement time, so with `[1, 2, 3, 4]` the cursor is four
//! times faster in the last quarter than in the first.
//!
//! # Example
//!
//! ```rust
//! use scurry::Flow;
//!
//! let flow = Flow::new(vec![1.0, 2.0, 3.0, 4.0, 5.0])?;
//!
//! // Step sizes over the whole movement add up to the distance.
//! let steps = 7;
//! let covered: f64 = (0..steps)
//!     .map(|i| flow.step_size(100.0, steps, i as f64 / steps as f64))
//!     .sum();
//! assert!((covered - 100.0).abs() < 1e-9);
//! # Ok::<(), scurry::Error>(())
//! ```

use crate::error::{Error, Result};

/// Average value of a normalized bucket.
pub const AVERAGE_BUCKET_VALUE: f64 = 100.0;

/// A normalized speed profile for one sub-movement.
///
/// Buckets are scaled so that their average is [`AVERAGE_BUCKET_VALUE`].
/// Flows are immutable and meant to be shared between many movements.
#[derive(Debug, Clone, PartialEq)]
pub struct Flow {
    buckets: Vec<f64>,
}

impl Flow {
    /// Creates a flow from relative speed characteristics.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFlow`] if the characteristics are empty,
    /// contain a negative (or NaN) value, or sum to zero.
    pub fn new(characteristics: impl Into<Vec<f64>>) -> Result<Self> {
        let characteristics = characteristics.into();
        if characteristics.is_empty() {
            return Err(Error::InvalidFlow("characteristics are empty".into()));
        }

        let mut sum = 0.0;
        for (i, &v) in characteristics.iter().enumerate() {
            if v.is_nan() || v < 0.0 {
                return Err(Error::InvalidFlow(format!(
                    "value {v} at index {i} is negative"
                )));
            }
            sum += v;
        }
        if sum == 0.0 {
            return Err(Error::InvalidFlow("all values are zero".into()));
        }

        let multiplier = AVERAGE_BUCKET_VALUE * characteristics.len() as f64 / sum;
        let buckets = characteristics.into_iter().map(|v| v * multiplier).collect();
        Ok(Self { buckets })
    }

    /// Returns the normalized buckets.
    #[inline]
    pub fn characteristics(&self) -> &[f64] {
        &self.buckets
    }

    /// Number of buckets in the flow.
    #[inline]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Always false: a flow holds at least one bucket.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Returns the step size for a single axis.
    ///
    /// # Arguments
    ///
    /// * `distance` - Total distance on this axis from start to target, in pixels
    /// * `steps` - Number of steps the movement involves
    /// * `completion` - Time completion in `[0, 1)`, normally `i / steps`
    ///
    /// Summing the result for `completion = 0, 1/steps, ..., (steps-1)/steps`
    /// yields `distance`, whether or not the bucket count divides `steps`.
    pub fn step_size(&self, distance: f64, steps: usize, completion: f64) -> f64 {
        if steps == 0 {
            return 0.0;
        }
        let bucket_count = self.buckets.len() as f64;
        let completion_step = 1.0 / steps as f64;
        let bucket_from = completion * bucket_count;
        let bucket_until = (completion + completion_step) * bucket_count;
        let contents = self.bucket_contents(bucket_from, bucket_until);
        let distance_per_content = distance / (bucket_count * AVERAGE_BUCKET_VALUE);
        contents * distance_per_content
    }

    /// Sums bucket contents over a fractional window.
    ///
    /// Partially covered buckets at either end contribute in proportion to
    /// the covered fraction: `bucket_contents(0.6, 2.4)` is
    /// `0.4 * b[0] + b[1] + 0.4 * b[2]`.
    fn bucket_contents(&self, from: f64, until: f64) -> f64 {
        let first = from as usize;
        let mut sum = 0.0;
        let mut i = first;
        while i < self.buckets.len() && (i as f64) < until {
            let mut end_multiplier = 1.0;
            let mut start_multiplier = 0.0;
            if until < (i + 1) as f64 {
                end_multiplier = until - until.trunc();
            }
            if i == first {
                start_multiplier = from - from.trunc();
            }
            sum += self.buckets[i] * (end_multiplier - start_multiplier);
            i += 1;
        }
        sum
    }
}
