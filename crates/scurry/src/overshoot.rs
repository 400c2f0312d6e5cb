//! Overshooting: missing the target on purpose and correcting.
//!
//! A human rarely lands on the target in one go. The planner asks an
//! [`OvershootManager`] how many intermediate misses to plan, where each
//! one lands relative to the target, and how fast the correcting
//! movements are.

use crate::flow::Flow;
use crate::geometry::Point;
use crate::random::RandomSource;

/// Plans the misses that precede the final approach.
pub trait OvershootManager {
    /// Number of overshoots for a movement of `distance` pixels planned to
    /// take `movement_ms` with the given flow.
    fn overshoots(&self, flow: &Flow, movement_ms: u64, distance: f64) -> usize;

    /// Offset from the real target for the next overshoot.
    ///
    /// `dx`/`dy` are the remaining distance to the real target from the
    /// current planning position. `remaining` counts down to 1, so earlier
    /// overshoots may be larger than later ones.
    fn overshoot_amount(
        &self,
        random: &mut dyn RandomSource,
        dx: f64,
        dy: f64,
        movement_ms: u64,
        remaining: usize,
    ) -> Point;

    /// Time for the movement after one that took `movement_ms`, with
    /// `remaining` overshoots still to go. `0` means the next movement
    /// lands on the real target.
    fn next_movement_time_ms(&self, movement_ms: u64, remaining: usize) -> u64;
}

/// Tuning for [`DefaultOvershootManager`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OvershootConfig {
    /// Overshoots planned per long movement.
    pub overshoots: usize,
    /// Movements shorter than this never overshoot.
    pub min_distance_for_overshoots: f64,
    /// Lower bound for the duration of correcting movements.
    pub min_overshoot_movement_ms: u64,
    /// Larger values mean smaller misses.
    pub random_modifier_divider: f64,
    /// Each correcting movement takes `previous / speedup_divider`.
    pub speedup_divider: f64,
}

impl OvershootConfig {
    /// Sets the overshoot count.
    pub fn overshoots(mut self, overshoots: usize) -> Self {
        self.overshoots = overshoots;
        self
    }

    /// Sets the minimum distance for overshoots.
    pub fn min_distance_for_overshoots(mut self, distance: f64) -> Self {
        self.min_distance_for_overshoots = distance;
        self
    }

    /// Sets the minimum correcting movement time.
    pub fn min_overshoot_movement_ms(mut self, ms: u64) -> Self {
        self.min_overshoot_movement_ms = ms;
        self
    }

    /// Sets the random modifier divider.
    pub fn random_modifier_divider(mut self, divider: f64) -> Self {
        self.random_modifier_divider = divider;
        self
    }

    /// Sets the speedup divider.
    pub fn speedup_divider(mut self, divider: f64) -> Self {
        self.speedup_divider = divider;
        self
    }
}

impl Default for OvershootConfig {
    fn default() -> Self {
        Self {
            overshoots: 3,
            min_distance_for_overshoots: 10.0,
            min_overshoot_movement_ms: 40,
            random_modifier_divider: 20.0,
            speedup_divider: 1.8,
        }
    }
}

/// Overshoots proportional to the remaining distance.
///
/// The miss on each axis is drawn uniformly from
/// `±distance / (2 · random_modifier_divider)`, truncated to whole pixels
/// and multiplied by the number of overshoots still remaining.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefaultOvershootManager {
    config: OvershootConfig,
}

impl DefaultOvershootManager {
    /// Creates a manager with the given tuning.
    pub fn new(config: OvershootConfig) -> Self {
        Self { config }
    }
}

impl OvershootManager for DefaultOvershootManager {
    fn overshoots(&self, _flow: &Flow, _movement_ms: u64, distance: f64) -> usize {
        if distance < self.config.min_distance_for_overshoots {
            return 0;
        }
        self.config.overshoots
    }

    fn overshoot_amount(
        &self,
        random: &mut dyn RandomSource,
        dx: f64,
        dy: f64,
        _movement_ms: u64,
        remaining: usize,
    ) -> Point {
        let modifier = dx.hypot(dy) / self.config.random_modifier_divider;
        let scale = i32::try_from(remaining).unwrap_or(i32::MAX);
        let x = (random.next_f64() * modifier - modifier / 2.0) as i32;
        let y = (random.next_f64() * modifier - modifier / 2.0) as i32;
        Point::new(x.saturating_mul(scale), y.saturating_mul(scale))
    }

    fn next_movement_time_ms(&self, movement_ms: u64, _remaining: usize) -> u64 {
        let sped_up = (movement_ms as f64 / self.config.speedup_divider) as u64;
        sped_up.max(self.config.min_overshoot_movement_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SequenceRandom;

    fn flow() -> Flow {
        Flow::new(vec![100.0]).unwrap()
    }

    #[test]
    fn test_default_overshoot_count() {
        let manager = DefaultOvershootManager::default();
        assert_eq!(manager.overshoots(&flow(), 100, 1000.0), 3);
    }

    #[test]
    fn test_configured_overshoot_count() {
        let manager = DefaultOvershootManager::new(OvershootConfig::default().overshoots(10));
        assert_eq!(manager.overshoots(&flow(), 100, 1000.0), 10);
    }

    #[test]
    fn test_no_overshoots_for_short_movements() {
        let manager = DefaultOvershootManager::default();
        assert_eq!(manager.overshoots(&flow(), 100, 9.9), 0);
        assert_eq!(manager.overshoots(&flow(), 100, 10.0), 3);
    }

    #[test]
    fn test_amount_scales_with_remaining() {
        let manager = DefaultOvershootManager::default();
        let mut random = SequenceRandom::new(vec![0.1]);

        let one = manager.overshoot_amount(&mut random, 1000.0, 500.0, 100, 1);
        let two = manager.overshoot_amount(&mut random, 1000.0, 500.0, 100, 2);
        let three = manager.overshoot_amount(&mut random, 1000.0, 500.0, 100, 3);

        // hypot = 1118.03, modifier = 55.9, 0.1 * 55.9 - 27.95 truncates to -22.
        assert_eq!(one, Point::new(-22, -22));
        assert_eq!(two, Point::new(one.x * 2, one.y * 2));
        assert_eq!(three, Point::new(one.x * 3, one.y * 3));
    }

    #[test]
    fn test_amount_centred_draw_is_zero() {
        let manager = DefaultOvershootManager::default();
        let mut random = SequenceRandom::new(vec![0.5]);
        assert_eq!(
            manager.overshoot_amount(&mut random, 1000.0, 0.0, 100, 3),
            Point::origin()
        );
    }

    #[test]
    fn test_next_time_divides_by_speedup() {
        let manager = DefaultOvershootManager::default();
        assert_eq!(manager.next_movement_time_ms(500, 2), 277);

        let halving = DefaultOvershootManager::new(OvershootConfig::default().speedup_divider(2.0));
        assert_eq!(halving.next_movement_time_ms(1000, 2), 500);

        let quartering =
            DefaultOvershootManager::new(OvershootConfig::default().speedup_divider(4.0));
        assert_eq!(quartering.next_movement_time_ms(1000, 2), 250);
    }

    #[test]
    fn test_next_time_respects_minimum() {
        let manager = DefaultOvershootManager::new(
            OvershootConfig::default()
                .speedup_divider(2.0)
                .min_overshoot_movement_ms(1500),
        );
        assert_eq!(manager.next_movement_time_ms(1000, 2), 1500);
    }
}
