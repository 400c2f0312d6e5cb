#![forbid(unsafe_code)]
// Allow these clippy lints for numeric simulation code readability
#![allow(clippy::must_use_candidate)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::use_self)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::struct_field_names)]
#![allow(clippy::module_name_repetitions)]

//! # Scurry
//!
//! Human-like mouse cursor trajectories.
//!
//! Instead of jumping or sliding in a straight line at constant speed,
//! the cursor:
//! - follows a **flow**, a speed profile that accelerates, hesitates and
//!   slows down,
//! - drifts with accumulated **noise** and bends along a **deviation** arc,
//! - **overshoots** the target and corrects, after a short reaction time.
//!
//! ## Moving a cursor
//!
//! ```rust
//! use scurry::{Dimension, MotionNature, MouseMotion, SeededRandom, VirtualScreen};
//!
//! let mut motion = MouseMotion::new(
//!     MotionNature::average_user()?,
//!     VirtualScreen::new(Dimension::new(1920, 1080)),
//!     SeededRandom::from_seed(1),
//! );
//!
//! motion.move_to(500, 300)?;
//! for point in motion.system().trail() {
//!     // every position the cursor visited, with its timestamp
//!     let _ = (point.time_ms, point.x, point.y);
//! }
//! # Ok::<(), scurry::Error>(())
//! ```
//!
//! ## Flows
//!
//! A [`Flow`] splits a movement into equal time buckets and says how much
//! of the distance is covered in each. Stepping through it always adds up
//! to the full distance:
//!
//! ```rust
//! use scurry::Flow;
//!
//! let flow = Flow::new(vec![1.0, 2.0, 3.0, 2.0, 1.0])?;
//! let total: f64 = (0..7)
//!     .map(|i| flow.step_size(100.0, 7, i as f64 / 7.0))
//!     .sum();
//! assert!((total - 100.0).abs() < 1e-9);
//! # Ok::<(), scurry::Error>(())
//! ```
//!
//! ## Natures
//!
//! A [`MotionNature`] bundles the tunables with the four policies (speed,
//! overshoot, noise, deviation). Presets: [`MotionNature::default_nature`],
//! [`MotionNature::granny`], [`MotionNature::robot`],
//! [`MotionNature::fast_gamer`] and [`MotionNature::average_user`].
//!
//! ## Platforms
//!
//! The engine reaches the outside world only through [`SystemCalls`].
//! [`VirtualScreen`] is an in-memory implementation with a simulated or
//! real clock; plug in your own to drive a real cursor.

mod error;
mod flow;
pub mod flow_utils;
mod geometry;
mod motion;
mod movement;
mod nature;
mod overshoot;
mod providers;
mod random;
mod speed;
mod system;
pub mod templates;

pub use error::{Error, Result};
pub use flow::{AVERAGE_BUCKET_VALUE, Flow};
pub use geometry::{Dimension, Offset, Point};
pub use motion::{MouseMotion, Observer};
pub use movement::{Movement, MovementFactory};
pub use nature::{MotionConfig, MotionNature};
pub use overshoot::{DefaultOvershootManager, OvershootConfig, OvershootManager};
pub use providers::{
    DefaultNoiseProvider, DeviationProvider, NoDeviation, NoNoise, NoiseProvider,
    SinusoidalDeviationProvider,
};
pub use random::{RandomSource, SeededRandom, SequenceRandom};
pub use speed::{ConstantSpeedManager, DefaultSpeedManager, SpeedFlow, SpeedManager};
pub use system::{Clock, SystemCalls, TimedPoint, VirtualScreen};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::flow::Flow;
    pub use crate::geometry::{Dimension, Point};
    pub use crate::motion::MouseMotion;
    pub use crate::nature::{MotionConfig, MotionNature};
    pub use crate::overshoot::{DefaultOvershootManager, OvershootConfig, OvershootManager};
    pub use crate::providers::{DeviationProvider, NoiseProvider};
    pub use crate::random::{RandomSource, SeededRandom, SequenceRandom};
    pub use crate::speed::{DefaultSpeedManager, SpeedManager};
    pub use crate::system::{Clock, SystemCalls, TimedPoint, VirtualScreen};
}
