//! Planning a move as a queue of sub-movements.
//!
//! One logical move becomes zero or more overshoots followed by a final
//! approach to the real destination. The executor pops movements from the
//! front of the queue.

use std::collections::VecDeque;
use std::sync::Arc;

use tracing::debug;

use crate::flow::Flow;
use crate::geometry::{Dimension, Point};
use crate::nature::MotionNature;
use crate::random::RandomSource;

/// One planned leg of a move.
#[derive(Debug, Clone, PartialEq)]
pub struct Movement {
    /// Where this leg ends.
    pub destination: Point,
    /// Straight-line length in pixels.
    pub distance: f64,
    /// Signed horizontal travel.
    pub x_distance: i32,
    /// Signed vertical travel.
    pub y_distance: i32,
    /// Planned duration in milliseconds.
    pub time_ms: u64,
    /// Speed profile of the leg.
    pub flow: Arc<Flow>,
}

impl Movement {
    fn new(from: Point, destination: Point, time_ms: u64, flow: Arc<Flow>) -> Self {
        let delta = destination - from;
        Self {
            destination,
            distance: from.distance_to(destination),
            x_distance: delta.x,
            y_distance: delta.y,
            time_ms,
            flow,
        }
    }

    /// Where this leg starts.
    pub fn origin(&self) -> Point {
        self.destination - Point::new(self.x_distance, self.y_distance)
    }
}

/// Turns a start point into the queue of movements reaching `destination`.
#[derive(Debug)]
pub struct MovementFactory<'a> {
    nature: &'a MotionNature,
    destination: Point,
    screen: Dimension,
}

impl<'a> MovementFactory<'a> {
    /// Creates a planner for moves to `destination` on a screen of size `screen`.
    pub fn new(nature: &'a MotionNature, destination: Point, screen: Dimension) -> Self {
        Self {
            nature,
            destination,
            screen,
        }
    }

    /// Plans the movements from `current` to the destination.
    ///
    /// The queue always ends with a movement to the real destination.
    /// Overshoot legs of zero length are skipped, and overshoots at the
    /// tail that landed exactly on the destination are dropped so the
    /// final approach starts from the last real miss.
    pub fn create_movements(
        &self,
        random: &mut dyn RandomSource,
        current: Point,
    ) -> VecDeque<Movement> {
        let speed = self.nature.speed();
        let overshoot = self.nature.overshoot();
        let destination = self.destination;

        let mut movements = VecDeque::new();
        let mut last = current;
        let initial_distance = current.distance_to(destination);
        let initial = speed.flow_with_time(random, initial_distance);
        let mut movement_ms = initial.time_ms;

        let overshoots = overshoot.overshoots(&initial.flow, movement_ms, initial_distance);
        if overshoots == 0 {
            debug!(
                from = %current,
                to = %destination,
                "No overshoots for movement"
            );
            movements.push_back(Movement::new(current, destination, movement_ms, initial.flow));
            return movements;
        }

        for remaining in (1..=overshoots).rev() {
            let to_target = destination - last;
            let amount = overshoot.overshoot_amount(
                random,
                f64::from(to_target.x),
                f64::from(to_target.y),
                movement_ms,
                remaining,
            );
            let target = self.screen.clamp(destination + amount);
            let distance = last.distance_to(target);
            if distance > 0.0 {
                let flow = speed.flow_with_time(random, distance).flow;
                movements.push_back(Movement::new(last, target, movement_ms, flow));
                last = target;
                movement_ms = overshoot.next_movement_time_ms(movement_ms, remaining - 1);
            }
        }

        while let Some(tail) = movements.back() {
            if tail.destination != destination {
                break;
            }
            last = tail.origin();
            debug!("Pruning zero-offset overshoot from the end");
            movements.pop_back();
        }

        let distance = last.distance_to(destination);
        let approach = speed.flow_with_time(random, distance);
        let final_ms = overshoot.next_movement_time_ms(approach.time_ms, 0);
        movements.push_back(Movement::new(last, destination, final_ms, approach.flow));

        debug!(
            count = movements.len(),
            from = %current,
            to = %destination,
            "Movements planned"
        );
        movements
    }
}
