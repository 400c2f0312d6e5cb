//! Movement duration and flow selection.
//!
//! A [`SpeedManager`] decides how long a movement takes and which [`Flow`]
//! drives it, i.e. how the cursor accelerates and decelerates within that
//! time.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::flow::Flow;
use crate::random::RandomSource;

/// A flow paired with the planned movement time.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedFlow {
    /// The flow driving the movement.
    pub flow: Arc<Flow>,
    /// Planned duration in milliseconds.
    pub time_ms: u64,
}

impl SpeedFlow {
    /// Creates a new speed flow.
    pub fn new(flow: Arc<Flow>, time_ms: u64) -> Self {
        Self { flow, time_ms }
    }
}

/// Chooses a flow and a duration for a movement.
pub trait SpeedManager {
    /// Returns the flow and planned time for a movement of `distance` pixels.
    fn flow_with_time(&self, random: &mut dyn RandomSource, distance: f64) -> SpeedFlow;
}

/// Picks a random flow from a list; the duration is `base × (1 + random)`.
///
/// # Example
///
/// ```rust
/// use scurry::{DefaultSpeedManager, Flow, SequenceRandom, SpeedManager, templates};
///
/// let manager = DefaultSpeedManager::new(
///     vec![Flow::new(templates::constant_speed())?],
///     500,
/// )?;
/// let mut random = SequenceRandom::new(vec![0.5]);
/// assert_eq!(manager.flow_with_time(&mut random, 100.0).time_ms, 750);
/// # Ok::<(), scurry::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DefaultSpeedManager {
    flows: Vec<Arc<Flow>>,
    movement_time_ms: u64,
}

impl DefaultSpeedManager {
    /// Default base movement time.
    pub const DEFAULT_MOVEMENT_TIME_MS: u64 = 500;

    /// Creates a manager choosing among `flows`, with base time `movement_time_ms`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArguments`] if `flows` is empty.
    pub fn new(flows: impl IntoIterator<Item = Flow>, movement_time_ms: u64) -> Result<Self> {
        let flows: Vec<Arc<Flow>> = flows.into_iter().map(Arc::new).collect();
        if flows.is_empty() {
            return Err(Error::InvalidArguments(
                "speed manager needs at least one flow".into(),
            ));
        }
        Ok(Self {
            flows,
            movement_time_ms,
        })
    }

    /// Creates a manager from raw characteristics, building each flow.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFlow`] for invalid characteristics and
    /// [`Error::InvalidArguments`] if none are given.
    pub fn from_characteristics(
        characteristics: impl IntoIterator<Item = Vec<f64>>,
        movement_time_ms: u64,
    ) -> Result<Self> {
        let flows = characteristics
            .into_iter()
            .map(Flow::new)
            .collect::<Result<Vec<_>>>()?;
        Self::new(flows, movement_time_ms)
    }
}

impl SpeedManager for DefaultSpeedManager {
    fn flow_with_time(&self, random: &mut dyn RandomSource, _distance: f64) -> SpeedFlow {
        let base = self.movement_time_ms;
        let time_ms = base + (random.next_f64() * base as f64) as u64;
        let index = (random.next_f64() * self.flows.len() as f64) as usize % self.flows.len();
        SpeedFlow::new(Arc::clone(&self.flows[index]), time_ms)
    }
}

/// One fixed flow; duration proportional to distance.
///
/// Used for robotic movement at a steady pace.
#[derive(Debug, Clone)]
pub struct ConstantSpeedManager {
    flow: Arc<Flow>,
    ms_per_100_pixels: u64,
}

impl ConstantSpeedManager {
    /// Creates a manager that spends `ms_per_100_pixels` per 100 pixels.
    pub fn new(flow: Flow, ms_per_100_pixels: u64) -> Self {
        Self {
            flow: Arc::new(flow),
            ms_per_100_pixels,
        }
    }
}

impl SpeedManager for ConstantSpeedManager {
    fn flow_with_time(&self, _random: &mut dyn RandomSource, distance: f64) -> SpeedFlow {
        let time_per_pixel = self.ms_per_100_pixels as f64 / 100.0;
        SpeedFlow::new(Arc::clone(&self.flow), (time_per_pixel * distance) as u64)
    }
}
