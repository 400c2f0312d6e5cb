//! Motion natures: tunables plus the policies that shape a move.
//!
//! A [`MotionNature`] is built once and handed to a
//! [`MouseMotion`](crate::MouseMotion). Presets cover the common
//! behaviours; everything can be replaced piece by piece with the
//! `with_*` methods.
//!
//! # Example
//!
//! ```rust
//! use scurry::{MotionConfig, MotionNature, NoNoise};
//!
//! let nature = MotionNature::default_nature()?
//!     .with_config(MotionConfig::default().min_steps(20))
//!     .with_noise(NoNoise);
//! assert_eq!(nature.config().min_steps, 20);
//! # Ok::<(), scurry::Error>(())
//! ```

use core::fmt;

use crate::error::{Error, Result};
use crate::flow::Flow;
use crate::overshoot::{DefaultOvershootManager, OvershootConfig, OvershootManager};
use crate::providers::{
    DefaultNoiseProvider, DeviationProvider, NoDeviation, NoNoise, NoiseProvider,
    SinusoidalDeviationProvider,
};
use crate::random::RandomSource;
use crate::speed::{ConstantSpeedManager, DefaultSpeedManager, SpeedManager};
use crate::templates;

/// Scalar tunables of the executor.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MotionConfig {
    /// Planned milliseconds per step. Larger values mean fewer, coarser steps.
    pub time_to_steps_divider: f64,
    /// Lower bound on steps per movement (unless the distance is shorter).
    pub min_steps: usize,
    /// Steps over which noise and deviation fade out at the end of a movement.
    pub effect_fade_steps: usize,
    /// Fixed part of the pause before correcting a missed target.
    pub reaction_time_base_ms: u64,
    /// Random part of that pause.
    pub reaction_time_variation_ms: u64,
    /// Pause after forcing the cursor onto a movement's destination.
    pub adjustment_sleep_ms: u64,
    /// Times the plan may be rebuilt before the target is declared unreachable.
    pub max_replans: usize,
}

impl MotionConfig {
    /// Sets the time-to-steps divider.
    pub fn time_to_steps_divider(mut self, divider: f64) -> Self {
        self.time_to_steps_divider = divider;
        self
    }

    /// Sets the minimum step count.
    pub fn min_steps(mut self, steps: usize) -> Self {
        self.min_steps = steps;
        self
    }

    /// Sets the number of fading steps.
    pub fn effect_fade_steps(mut self, steps: usize) -> Self {
        self.effect_fade_steps = steps;
        self
    }

    /// Sets the base reaction time.
    pub fn reaction_time_base_ms(mut self, ms: u64) -> Self {
        self.reaction_time_base_ms = ms;
        self
    }

    /// Sets the reaction time variation.
    pub fn reaction_time_variation_ms(mut self, ms: u64) -> Self {
        self.reaction_time_variation_ms = ms;
        self
    }

    /// Sets the pause after a position correction.
    pub fn adjustment_sleep_ms(mut self, ms: u64) -> Self {
        self.adjustment_sleep_ms = ms;
        self
    }

    /// Sets the re-plan limit.
    pub fn max_replans(mut self, replans: usize) -> Self {
        self.max_replans = replans;
        self
    }

    /// Checks that the values can drive a move.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArguments`] if `time_to_steps_divider` is not
    /// a positive number.
    pub fn validate(&self) -> Result<()> {
        if self.time_to_steps_divider.is_nan() || self.time_to_steps_divider <= 0.0 {
            return Err(Error::InvalidArguments(format!(
                "time_to_steps_divider must be positive, got {}",
                self.time_to_steps_divider
            )));
        }
        Ok(())
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            time_to_steps_divider: 8.0,
            min_steps: 10,
            effect_fade_steps: 15,
            reaction_time_base_ms: 20,
            reaction_time_variation_ms: 120,
            adjustment_sleep_ms: 2,
            max_replans: 16,
        }
    }
}

/// Configuration and policies for moving the cursor.
pub struct MotionNature {
    config: MotionConfig,
    deviation: Box<dyn DeviationProvider>,
    noise: Box<dyn NoiseProvider>,
    overshoot: Box<dyn OvershootManager>,
    speed: Box<dyn SpeedManager>,
}

impl MotionNature {
    /// Assembles a nature from its parts.
    pub fn new(
        config: MotionConfig,
        deviation: impl DeviationProvider + 'static,
        noise: impl NoiseProvider + 'static,
        overshoot: impl OvershootManager + 'static,
        speed: impl SpeedManager + 'static,
    ) -> Self {
        Self {
            config,
            deviation: Box::new(deviation),
            noise: Box::new(noise),
            overshoot: Box::new(overshoot),
            speed: Box::new(speed),
        }
    }

    /// All defaults; the speed manager picks among nine templates with a
    /// 500 ms base time.
    ///
    /// # Errors
    ///
    /// Propagates flow construction errors.
    pub fn default_nature() -> Result<Self> {
        let speed = speed_manager(
            vec![
                templates::constant_speed(),
                templates::variating_flow(),
                templates::interrupted_flow(),
                templates::interrupted_flow2(),
                templates::slow_startup_flow(),
                templates::slow_startup2_flow(),
                templates::adjusting_flow(),
                templates::jagged_flow(),
                templates::stopping_flow(),
            ],
            DefaultSpeedManager::DEFAULT_MOVEMENT_TIME_MS,
        )?;
        Ok(Self::new(
            MotionConfig::default(),
            SinusoidalDeviationProvider::default(),
            DefaultNoiseProvider::default(),
            DefaultOvershootManager::default(),
            speed,
        ))
    }

    /// A slow, shaky hand on an old ball mouse: long movements, lots of
    /// noise, slow corrections.
    ///
    /// One of its flows is drawn from `random`.
    ///
    /// # Errors
    ///
    /// Propagates flow construction errors.
    pub fn granny(random: &mut dyn RandomSource) -> Result<Self> {
        let defaults = OvershootConfig::default();
        let overshoot = OvershootConfig::default()
            .overshoots(3)
            .min_distance_for_overshoots(3.0)
            .min_overshoot_movement_ms(400)
            .random_modifier_divider(defaults.random_modifier_divider / 2.0)
            .speedup_divider(defaults.speedup_divider * 2.0);
        let speed = speed_manager(
            vec![
                templates::jagged_flow(),
                templates::random(random),
                templates::interrupted_flow(),
                templates::interrupted_flow2(),
                templates::adjusting_flow(),
                templates::stopping_flow(),
            ],
            1000,
        )?;
        let base = MotionConfig::default();
        let config = MotionConfig::default()
            .time_to_steps_divider(base.time_to_steps_divider - 2.0)
            .reaction_time_base_ms(100);
        Ok(Self::new(
            config,
            SinusoidalDeviationProvider::new(9.0),
            DefaultNoiseProvider::new(1.6),
            DefaultOvershootManager::new(overshoot),
            speed,
        ))
    }

    /// Straight lines at constant speed with no mistakes.
    ///
    /// A movement takes about `ms_per_100_pixels` per 100 pixels travelled.
    ///
    /// # Errors
    ///
    /// Propagates flow construction errors.
    pub fn robot(ms_per_100_pixels: u64) -> Result<Self> {
        let flow = Flow::new(templates::constant_speed())?;
        Ok(Self::new(
            MotionConfig::default(),
            NoDeviation,
            NoNoise,
            DefaultOvershootManager::new(OvershootConfig::default().overshoots(0)),
            ConstantSpeedManager::new(flow, ms_per_100_pixels),
        ))
    }

    /// Quick reflexes: fast movements, some arc, frequent overshoots.
    ///
    /// # Errors
    ///
    /// Propagates flow construction errors.
    pub fn fast_gamer() -> Result<Self> {
        let speed = speed_manager(
            vec![
                templates::variating_flow(),
                templates::slow_startup_flow(),
                templates::slow_startup2_flow(),
                templates::adjusting_flow(),
                templates::jagged_flow(),
            ],
            250,
        )?;
        Ok(Self::new(
            MotionConfig::default().reaction_time_variation_ms(100),
            SinusoidalDeviationProvider::default(),
            DefaultNoiseProvider::default(),
            DefaultOvershootManager::new(OvershootConfig::default().overshoots(4)),
            speed,
        ))
    }

    /// Medium speed, medium noise and the occasional overshoot.
    ///
    /// # Errors
    ///
    /// Propagates flow construction errors.
    pub fn average_user() -> Result<Self> {
        let speed = speed_manager(
            vec![
                templates::variating_flow(),
                templates::interrupted_flow(),
                templates::interrupted_flow2(),
                templates::slow_startup_flow(),
                templates::slow_startup2_flow(),
                templates::adjusting_flow(),
                templates::jagged_flow(),
                templates::stopping_flow(),
            ],
            400,
        )?;
        Ok(Self::new(
            MotionConfig::default().reaction_time_variation_ms(110),
            SinusoidalDeviationProvider::default(),
            DefaultNoiseProvider::default(),
            DefaultOvershootManager::new(OvershootConfig::default().overshoots(4)),
            speed,
        ))
    }

    /// Replaces the scalar tunables.
    pub fn with_config(mut self, config: MotionConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the deviation provider.
    pub fn with_deviation(mut self, deviation: impl DeviationProvider + 'static) -> Self {
        self.deviation = Box::new(deviation);
        self
    }

    /// Replaces the noise provider.
    pub fn with_noise(mut self, noise: impl NoiseProvider + 'static) -> Self {
        self.noise = Box::new(noise);
        self
    }

    /// Replaces the overshoot manager.
    pub fn with_overshoot(mut self, overshoot: impl OvershootManager + 'static) -> Self {
        self.overshoot = Box::new(overshoot);
        self
    }

    /// Replaces the speed manager.
    pub fn with_speed(mut self, speed: impl SpeedManager + 'static) -> Self {
        self.speed = Box::new(speed);
        self
    }

    /// The scalar tunables.
    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// The deviation provider.
    pub fn deviation(&self) -> &dyn DeviationProvider {
        self.deviation.as_ref()
    }

    /// The noise provider.
    pub fn noise(&self) -> &dyn NoiseProvider {
        self.noise.as_ref()
    }

    /// The overshoot manager.
    pub fn overshoot(&self) -> &dyn OvershootManager {
        self.overshoot.as_ref()
    }

    /// The speed manager.
    pub fn speed(&self) -> &dyn SpeedManager {
        self.speed.as_ref()
    }
}

impl fmt::Debug for MotionNature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MotionNature")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn speed_manager(characteristics: Vec<Vec<f64>>, base_ms: u64) -> Result<DefaultSpeedManager> {
    DefaultSpeedManager::from_characteristics(characteristics, base_ms)
}
