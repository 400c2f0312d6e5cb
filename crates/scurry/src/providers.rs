//! Noise and deviation: the two offsets layered on top of the straight path.
//!
//! **Noise** is random and accumulates: every value returned is added to a
//! running sum for the rest of the sub-movement, so implementations should
//! be balanced around zero or the path drifts to one side. Most steps
//! should return zero.
//!
//! **Deviation** is a pure function of progress and does not accumulate.
//! It bends the path into an arc; the executor scales it by a random
//! per-movement multiplier in `[-1, 1)` per axis, so the arc may be
//! flipped, shrunk or exaggerated.
//!
//! The executor fades both effects out over the last steps of each
//! sub-movement, so providers need not care about landing precisely.

use core::f64::consts::PI;

use crate::geometry::Offset;
use crate::random::RandomSource;

/// Below this magnitude a step size counts as zero.
const SMALL_DELTA: f64 = 1.0e-5;

/// Produces random errors in the trajectory.
pub trait NoiseProvider {
    /// Returns how much the accumulated noise changes on this step.
    ///
    /// The result must not include the step sizes themselves; return
    /// [`Offset::zero`] for no change.
    fn noise(&self, random: &mut dyn RandomSource, x_step_size: f64, y_step_size: f64) -> Offset;
}

/// Bends the trajectory away from the straight line.
pub trait DeviationProvider {
    /// Returns the deviation at `completion` (fraction of distance covered,
    /// in `(0, 1]`) for a movement of `total_distance` pixels.
    fn deviation(&self, total_distance: f64, completion: f64) -> Offset;
}

impl<F> NoiseProvider for F
where
    F: Fn(&mut dyn RandomSource, f64, f64) -> Offset,
{
    fn noise(&self, random: &mut dyn RandomSource, x_step_size: f64, y_step_size: f64) -> Offset {
        self(random, x_step_size, y_step_size)
    }
}

impl<F> DeviationProvider for F
where
    F: Fn(f64, f64) -> Offset,
{
    fn deviation(&self, total_distance: f64, completion: f64) -> Offset {
        self(total_distance, completion)
    }
}

/// Occasional noise that grows as the cursor slows down.
///
/// Small, slow steps are where a hand is least steady: with probability
/// `max(0, 8 - step) / 50` a new offset of up to
/// `max(0, 8 - step) / noisiness_divider` per axis is produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefaultNoiseProvider {
    noisiness_divider: f64,
}

impl DefaultNoiseProvider {
    /// Default divider; lower values mean more noise.
    pub const DEFAULT_NOISINESS_DIVIDER: f64 = 2.0;

    /// Creates a noise provider with the given divider.
    pub const fn new(noisiness_divider: f64) -> Self {
        Self { noisiness_divider }
    }
}

impl Default for DefaultNoiseProvider {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NOISINESS_DIVIDER)
    }
}

impl NoiseProvider for DefaultNoiseProvider {
    fn noise(&self, random: &mut dyn RandomSource, x_step_size: f64, y_step_size: f64) -> Offset {
        if x_step_size.abs() < SMALL_DELTA && y_step_size.abs() < SMALL_DELTA {
            return Offset::zero();
        }
        let step_size = x_step_size.hypot(y_step_size);
        let slowness = (8.0 - step_size).max(0.0);
        let noisiness = slowness / 50.0;
        if random.next_f64() < noisiness {
            let x = (random.next_f64() - 0.5) * slowness / self.noisiness_divider;
            let y = (random.next_f64() - 0.5) * slowness / self.noisiness_divider;
            return Offset::new(x, y);
        }
        Offset::zero()
    }
}

/// A smooth arc: zero at both ends, widest halfway.
///
/// `deviation = (1 - cos(2π·completion)) / 2 · total_distance / slope_divider`
/// on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SinusoidalDeviationProvider {
    slope_divider: f64,
}

impl SinusoidalDeviationProvider {
    /// Default divider; lower values mean wider arcs.
    pub const DEFAULT_SLOPE_DIVIDER: f64 = 10.0;

    /// Creates a deviation provider with the given slope divider.
    pub const fn new(slope_divider: f64) -> Self {
        Self { slope_divider }
    }
}

impl Default for SinusoidalDeviationProvider {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SLOPE_DIVIDER)
    }
}

impl DeviationProvider for SinusoidalDeviationProvider {
    fn deviation(&self, total_distance: f64, completion: f64) -> Offset {
        let shape = (1.0 - (completion * PI * 2.0).cos()) / 2.0;
        let amount = total_distance / self.slope_divider;
        Offset::new(shape * amount, shape * amount)
    }
}

/// Never adds noise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoNoise;

impl NoiseProvider for NoNoise {
    fn noise(&self, _random: &mut dyn RandomSource, _x: f64, _y: f64) -> Offset {
        Offset::zero()
    }
}

/// Never deviates from the straight line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoDeviation;

impl DeviationProvider for NoDeviation {
    fn deviation(&self, _total_distance: f64, _completion: f64) -> Offset {
        Offset::zero()
    }
}
