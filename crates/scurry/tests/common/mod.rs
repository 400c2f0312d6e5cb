//! Shared mocks for the scurry integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::Arc;

use scurry::{
    Dimension, Flow, MotionConfig, MotionNature, NoDeviation, NoNoise, OvershootManager, Point,
    RandomSource, SpeedFlow, SpeedManager, SystemCalls,
};

pub const SMALL_DELTA: f64 = 1e-5;

/// Cursor on a fixed screen that records every position set and every
/// sleep, starting at (0, 0).
#[derive(Debug)]
pub struct MockSystemCalls {
    screen: Dimension,
    now: u64,
    pub positions: Vec<Point>,
    pub sleeps: Vec<u64>,
    position: Point,
    set_calls: usize,
    dropped_set: Option<usize>,
}

impl MockSystemCalls {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            screen: Dimension::new(width, height),
            now: 0,
            positions: Vec::new(),
            sleeps: Vec::new(),
            position: Point::origin(),
            set_calls: 0,
            dropped_set: None,
        }
    }

    /// Silently ignores the `index`-th (zero-based) position update, like a
    /// cursor that something else grabbed for a moment.
    pub fn dropping_set(mut self, index: usize) -> Self {
        self.dropped_set = Some(index);
        self
    }
}

impl SystemCalls for MockSystemCalls {
    fn current_time_millis(&self) -> u64 {
        self.now
    }

    fn sleep(&mut self, ms: u64) {
        self.now += ms;
        self.sleeps.push(ms);
    }

    fn screen_size(&self) -> Dimension {
        self.screen
    }

    fn set_mouse_position(&mut self, position: Point) {
        let call = self.set_calls;
        self.set_calls += 1;
        if self.dropped_set == Some(call) {
            return;
        }
        self.position = position;
        self.positions.push(position);
    }

    fn mouse_position(&self) -> Point {
        self.position
    }
}

/// Always the same flow and the same time, whatever the distance.
#[derive(Debug)]
pub struct FixedSpeedManager {
    flow: Arc<Flow>,
    time_ms: u64,
}

impl FixedSpeedManager {
    pub fn new(characteristics: &[f64], time_ms: u64) -> Self {
        Self {
            flow: Arc::new(Flow::new(characteristics.to_vec()).unwrap()),
            time_ms,
        }
    }
}

impl SpeedManager for FixedSpeedManager {
    fn flow_with_time(&self, _random: &mut dyn RandomSource, _distance: f64) -> SpeedFlow {
        SpeedFlow::new(Arc::clone(&self.flow), self.time_ms)
    }
}

/// Never overshoots.
#[derive(Debug, Default)]
pub struct NoOvershootManager;

impl OvershootManager for NoOvershootManager {
    fn overshoots(&self, _flow: &Flow, _movement_ms: u64, _distance: f64) -> usize {
        0
    }

    fn overshoot_amount(
        &self,
        _random: &mut dyn RandomSource,
        _dx: f64,
        _dy: f64,
        _movement_ms: u64,
        _remaining: usize,
    ) -> Point {
        Point::origin()
    }

    fn next_movement_time_ms(&self, _movement_ms: u64, _remaining: usize) -> u64 {
        0
    }
}

/// Overshoots by a scripted list of offsets; every next leg takes half the time.
#[derive(Debug)]
pub struct ScriptedOvershootManager {
    count: usize,
    offsets: RefCell<VecDeque<Point>>,
}

impl ScriptedOvershootManager {
    pub fn new(offsets: &[(i32, i32)]) -> Self {
        Self {
            count: offsets.len(),
            offsets: RefCell::new(offsets.iter().map(|&(x, y)| Point::new(x, y)).collect()),
        }
    }
}

impl OvershootManager for ScriptedOvershootManager {
    fn overshoots(&self, _flow: &Flow, _movement_ms: u64, _distance: f64) -> usize {
        self.count
    }

    fn overshoot_amount(
        &self,
        _random: &mut dyn RandomSource,
        _dx: f64,
        _dy: f64,
        _movement_ms: u64,
        _remaining: usize,
    ) -> Point {
        self.offsets.borrow_mut().pop_front().unwrap_or_default()
    }

    fn next_movement_time_ms(&self, movement_ms: u64, _remaining: usize) -> u64 {
        movement_ms / 2
    }
}

/// A nature with no noise, no deviation and the given speed and overshoot policies.
pub fn quiet_nature(
    overshoot: impl OvershootManager + 'static,
    speed: impl SpeedManager + 'static,
) -> MotionNature {
    MotionNature::new(MotionConfig::default(), NoDeviation, NoNoise, overshoot, speed)
}

pub fn assert_slice_near(got: &[f64], want: &[f64]) {
    assert_eq!(got.len(), want.len(), "length mismatch: {got:?} vs {want:?}");
    for (g, w) in got.iter().zip(want) {
        assert!((g - w).abs() < SMALL_DELTA, "{got:?} != {want:?}");
    }
}
