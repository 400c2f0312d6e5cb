//! The executor: drives the cursor through a planned move.
//!
//! [`MouseMotion::move_to`] plans the move with a
//! [`MovementFactory`] and then walks every movement in small, evenly
//! paced steps. Each step combines the flow-driven progress with noise
//! and deviation, both faded out towards the end of the movement so the
//! cursor lands on the exact pixel.
//!
//! After each movement the reported cursor position is compared with the
//! planned one and corrected if something moved it. If the queue runs
//! dry before the target is reached the move is re-planned from wherever
//! the cursor is, up to [`MotionConfig::max_replans`] times.

use std::collections::VecDeque;
use std::fmt;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::geometry::{Dimension, Offset, Point};
use crate::movement::{Movement, MovementFactory};
use crate::nature::{MotionConfig, MotionNature};
use crate::random::RandomSource;
use crate::system::SystemCalls;

/// Callback invoked with every emitted cursor position.
pub type Observer = Box<dyn FnMut(Point)>;

/// Moves a cursor the way a person would.
///
/// # Example
///
/// ```rust
/// use scurry::{Dimension, MotionNature, MouseMotion, SeededRandom, VirtualScreen};
///
/// let screen = VirtualScreen::new(Dimension::new(1920, 1080));
/// let mut motion = MouseMotion::new(
///     MotionNature::default_nature()?,
///     screen,
///     SeededRandom::from_seed(42),
/// );
///
/// let landed = motion.move_to(640, 480)?;
/// assert_eq!((landed.x, landed.y), (640, 480));
/// assert!(motion.system().trail().len() > 10);
/// # Ok::<(), scurry::Error>(())
/// ```
pub struct MouseMotion<S, R> {
    nature: MotionNature,
    system: S,
    random: R,
    observer: Option<Observer>,
}

impl<S: SystemCalls, R: RandomSource> MouseMotion<S, R> {
    /// Creates an executor from a nature, a platform and a random source.
    pub fn new(nature: MotionNature, system: S, random: R) -> Self {
        Self {
            nature,
            system,
            random,
            observer: None,
        }
    }

    /// Registers a callback for every emitted cursor position.
    pub fn with_observer(mut self, observer: impl FnMut(Point) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// The nature driving this executor.
    pub fn nature(&self) -> &MotionNature {
        &self.nature
    }

    /// The platform.
    pub fn system(&self) -> &S {
        &self.system
    }

    /// Mutable access to the platform.
    pub fn system_mut(&mut self) -> &mut S {
        &mut self.system
    }

    /// Splits the executor back into its parts.
    pub fn into_parts(self) -> (MotionNature, S, R) {
        (self.nature, self.system, self.random)
    }

    /// Moves the cursor to `(x, y)` and blocks until it arrives.
    ///
    /// Coordinates outside the screen are clamped onto it. Returns the
    /// final cursor position, which equals the clamped destination.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArguments`] if the configuration is unusable.
    /// - [`Error::UnreachableTarget`] if the cursor is still off target
    ///   after [`MotionConfig::max_replans`] re-plans.
    pub fn move_to(&mut self, x: i32, y: i32) -> Result<Point> {
        self.nature.config().validate()?;
        let config = self.nature.config().clone();

        let screen = self.system.screen_size();
        let mut position = self.system.mouse_position();
        let destination = screen.clamp(Point::new(x, y));
        info!(
            to = %destination,
            from = %position,
            "Starting to move mouse"
        );

        let mut movements = self.plan(destination, screen, position);
        let overshoots = movements.len().saturating_sub(1);
        let mut replans = 0;

        while position != destination {
            if movements.is_empty() {
                if replans == config.max_replans {
                    return Err(Error::UnreachableTarget {
                        target: destination,
                        position,
                        attempts: replans,
                    });
                }
                replans += 1;
                position = self.system.mouse_position();
                debug!(
                    attempt = replans,
                    "Re-populating movements, did not end up on target pixel"
                );
                movements = self.plan(destination, screen, position);
            }

            let Some(movement) = movements.pop_front() else {
                continue;
            };
            if !movements.is_empty() {
                debug!(
                    overshoot = (overshoots + 1).saturating_sub(movements.len()),
                    of = overshoots,
                    aim = %movement.destination,
                    "Using overshoot"
                );
            }
            info!(
                distance = movement.distance,
                time_ms = movement.time_ms,
                "Movement arc length and time computed"
            );

            self.step_through(&movement, screen, &config);
            position = self.reconcile(&movement, &config);

            if position != destination {
                let reaction = config.reaction_time_base_ms
                    + (self.random.next_f64() * config.reaction_time_variation_ms as f64) as u64;
                self.system.sleep(reaction);
            }
            info!(at = %position, "Steps completed");
        }

        info!(to = %destination, "Mouse movement completed");
        Ok(position)
    }

    fn plan(&mut self, destination: Point, screen: Dimension, from: Point) -> VecDeque<Movement> {
        MovementFactory::new(&self.nature, destination, screen)
            .create_movements(&mut self.random, from)
    }

    /// Emits the intermediate positions of one movement.
    fn step_through(&mut self, movement: &Movement, screen: Dimension, config: &MotionConfig) {
        let planned_steps =
            (movement.time_ms as f64 / config.time_to_steps_divider).max(config.min_steps as f64);
        let steps = movement.distance.min(planned_steps).ceil() as usize;
        if steps == 0 {
            return;
        }

        let start = self.system.current_time_millis();
        let step_time = movement.time_ms / steps as u64;
        let x_distance = f64::from(movement.x_distance);
        let y_distance = f64::from(movement.y_distance);
        let fade_steps = config.effect_fade_steps.max(1) as i64;

        let mut simulated = Offset::from(self.system.mouse_position());
        let deviation_multiplier = Offset::new(
            (self.random.next_f64() - 0.5) * 2.0,
            (self.random.next_f64() - 0.5) * 2.0,
        );
        let mut completed = Offset::zero();
        let mut noise = Offset::zero();

        for i in 0..steps {
            let time_completion = i as f64 / steps as f64;

            let fade_step = (i as i64 - (steps as i64 - fade_steps) + 1).max(0);
            let fade = (fade_steps - fade_step) as f64 / fade_steps as f64;

            let step = Offset::new(
                movement.flow.step_size(x_distance, steps, time_completion),
                movement.flow.step_size(y_distance, steps, time_completion),
            );
            completed += step;
            let completion = (completed.magnitude() / movement.distance).min(1.0);
            debug!(
                x = step.x,
                y = step.y,
                time_completion,
                completion,
                "Step"
            );

            noise += self.nature.noise().noise(&mut self.random, step.x, step.y);
            let deviation = self.nature.deviation().deviation(movement.distance, completion);
            simulated += step;
            debug!(fade, x = simulated.x, y = simulated.y, "Simulated mouse");

            let faded_noise = noise * fade;
            let pixel = Point::new(
                round_towards(
                    simulated.x + deviation.x * deviation_multiplier.x * fade + faded_noise.x,
                    movement.destination.x,
                ),
                round_towards(
                    simulated.y + deviation.y * deviation_multiplier.y * fade + faded_noise.y,
                    movement.destination.y,
                ),
            );
            let pixel = screen.clamp(pixel);

            self.system.set_mouse_position(pixel);
            if let Some(observer) = self.observer.as_mut() {
                observer(pixel);
            }

            let end = start + step_time * (i as u64 + 1);
            let now = self.system.current_time_millis();
            self.system.sleep(end.saturating_sub(now));
        }
    }

    /// Puts the cursor on the movement's destination if something moved it.
    fn reconcile(&mut self, movement: &Movement, config: &MotionConfig) -> Point {
        let position = self.system.mouse_position();
        if position == movement.destination {
            return position;
        }
        info!(
            at = %position,
            expected = %movement.destination,
            "Mouse off from step endpoint, adjusting"
        );
        self.system.set_mouse_position(movement.destination);
        self.system.sleep(config.adjustment_sleep_ms);
        self.system.mouse_position()
    }
}

impl<S: fmt::Debug, R: fmt::Debug> fmt::Debug for MouseMotion<S, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MouseMotion")
            .field("nature", &self.nature)
            .field("system", &self.system)
            .field("random", &self.random)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

/// Rounds up when the target lies above `value`, down otherwise, so the
/// cursor never passes its own target.
fn round_towards(value: f64, target: i32) -> i32 {
    if f64::from(target) > value {
        value.ceil() as i32
    } else {
        value.floor() as i32
    }
}
