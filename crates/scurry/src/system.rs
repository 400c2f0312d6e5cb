//! Platform access: clock, sleeping and the cursor.
//!
//! The engine never touches the operating system directly. Everything it
//! needs from the outside world goes through [`SystemCalls`], so the same
//! planner and executor can drive a real cursor, a remote desktop session
//! or the in-memory [`VirtualScreen`].

use std::thread;
use std::time::{Duration, Instant};

use crate::geometry::{Dimension, Point};

/// The five platform operations a move needs.
///
/// Times are milliseconds on a monotonic clock with an arbitrary origin.
pub trait SystemCalls {
    /// Current time in milliseconds.
    fn current_time_millis(&self) -> u64;

    /// Blocks for `ms` milliseconds.
    fn sleep(&mut self, ms: u64);

    /// Size of the screen the cursor lives on.
    fn screen_size(&self) -> Dimension;

    /// Moves the cursor.
    fn set_mouse_position(&mut self, position: Point);

    /// Reads the cursor position.
    fn mouse_position(&self) -> Point;
}

impl<T: SystemCalls + ?Sized> SystemCalls for &mut T {
    fn current_time_millis(&self) -> u64 {
        (**self).current_time_millis()
    }

    fn sleep(&mut self, ms: u64) {
        (**self).sleep(ms);
    }

    fn screen_size(&self) -> Dimension {
        (**self).screen_size()
    }

    fn set_mouse_position(&mut self, position: Point) {
        (**self).set_mouse_position(position);
    }

    fn mouse_position(&self) -> Point {
        (**self).mouse_position()
    }
}

impl<T: SystemCalls + ?Sized> SystemCalls for Box<T> {
    fn current_time_millis(&self) -> u64 {
        (**self).current_time_millis()
    }

    fn sleep(&mut self, ms: u64) {
        (**self).sleep(ms);
    }

    fn screen_size(&self) -> Dimension {
        (**self).screen_size()
    }

    fn set_mouse_position(&mut self, position: Point) {
        (**self).set_mouse_position(position);
    }

    fn mouse_position(&self) -> Point {
        (**self).mouse_position()
    }
}

/// A cursor position stamped with the time it was set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimedPoint {
    /// Milliseconds since the screen was created.
    pub time_ms: u64,
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl TimedPoint {
    /// The position without its timestamp.
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// How a [`VirtualScreen`] measures time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    /// Sleeping advances an internal counter instantly.
    #[default]
    Simulated,
    /// Wall-clock time with real sleeping.
    Realtime,
}

/// An in-memory screen with a cursor.
///
/// Every position set on it is clamped to the screen like a real cursor
/// and recorded with its timestamp. With [`Clock::Simulated`] a move runs
/// instantly and deterministically.
///
/// # Example
///
/// ```rust
/// use scurry::{Dimension, Point, SystemCalls, VirtualScreen};
///
/// let mut screen = VirtualScreen::new(Dimension::new(800, 600));
/// screen.set_mouse_position(Point::new(1000, 10));
/// screen.sleep(25);
///
/// assert_eq!(screen.mouse_position(), Point::new(799, 10));
/// assert_eq!(screen.current_time_millis(), 25);
/// assert_eq!(screen.trail().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct VirtualScreen {
    size: Dimension,
    position: Point,
    clock: Clock,
    simulated_ms: u64,
    started: Instant,
    trail: Vec<TimedPoint>,
}

impl VirtualScreen {
    /// Creates a screen with the cursor at the origin and a simulated clock.
    pub fn new(size: Dimension) -> Self {
        Self {
            size,
            position: Point::origin(),
            clock: Clock::Simulated,
            simulated_ms: 0,
            started: Instant::now(),
            trail: Vec::new(),
        }
    }

    /// Places the cursor without recording it.
    pub fn with_position(mut self, position: Point) -> Self {
        self.position = self.size.clamp(position);
        self
    }

    /// Selects the clock.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// The active clock.
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Every position set so far, oldest first.
    pub fn trail(&self) -> &[TimedPoint] {
        &self.trail
    }

    /// Takes the recorded positions, leaving the trail empty.
    pub fn take_trail(&mut self) -> Vec<TimedPoint> {
        std::mem::take(&mut self.trail)
    }
}

impl SystemCalls for VirtualScreen {
    fn current_time_millis(&self) -> u64 {
        match self.clock {
            Clock::Simulated => self.simulated_ms,
            Clock::Realtime => {
                u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
            }
        }
    }

    fn sleep(&mut self, ms: u64) {
        match self.clock {
            Clock::Simulated => self.simulated_ms = self.simulated_ms.saturating_add(ms),
            Clock::Realtime => thread::sleep(Duration::from_millis(ms)),
        }
    }

    fn screen_size(&self) -> Dimension {
        self.size
    }

    fn set_mouse_position(&mut self, position: Point) {
        self.position = self.size.clamp(position);
        self.trail.push(TimedPoint {
            time_ms: self.current_time_millis(),
            x: self.position.x,
            y: self.position.y,
        });
    }

    fn mouse_position(&self) -> Point {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_clock_advances_on_sleep() {
        let mut screen = VirtualScreen::new(Dimension::new(100, 100));
        assert_eq!(screen.current_time_millis(), 0);
        screen.sleep(10);
        screen.sleep(5);
        assert_eq!(screen.current_time_millis(), 15);
    }

    #[test]
    fn test_records_timestamps() {
        let mut screen = VirtualScreen::new(Dimension::new(100, 100));
        screen.set_mouse_position(Point::new(1, 2));
        screen.sleep(7);
        screen.set_mouse_position(Point::new(3, 4));
        assert_eq!(
            screen.trail(),
            &[
                TimedPoint { time_ms: 0, x: 1, y: 2 },
                TimedPoint { time_ms: 7, x: 3, y: 4 },
            ]
        );
    }

    #[test]
    fn test_initial_position_not_recorded() {
        let screen = VirtualScreen::new(Dimension::new(100, 100)).with_position(Point::new(40, 60));
        assert_eq!(screen.mouse_position(), Point::new(40, 60));
        assert!(screen.trail().is_empty());
    }

    #[test]
    fn test_positions_clamped() {
        let mut screen = VirtualScreen::new(Dimension::new(100, 50));
        screen.set_mouse_position(Point::new(-3, 80));
        assert_eq!(screen.mouse_position(), Point::new(0, 49));
    }

    #[test]
    fn test_take_trail_empties() {
        let mut screen = VirtualScreen::new(Dimension::new(10, 10));
        screen.set_mouse_position(Point::new(1, 1));
        assert_eq!(screen.take_trail().len(), 1);
        assert!(screen.trail().is_empty());
    }

    #[test]
    fn test_realtime_clock_moves_forward() {
        let mut screen = VirtualScreen::new(Dimension::new(10, 10)).with_clock(Clock::Realtime);
        let before = screen.current_time_millis();
        screen.sleep(2);
        assert!(screen.current_time_millis() >= before + 2);
    }
}
