//! Named flow shapes.
//!
//! Each template starts from a short hand-drawn curve and is stretched to
//! [`TEMPLATE_LENGTH`] buckets. All of them are valid [`Flow`](crate::Flow)
//! characteristics.
//!
//! ```rust
//! use scurry::{Flow, templates};
//!
//! let flow = Flow::new(templates::slow_startup_flow())?;
//! assert_eq!(flow.len(), templates::TEMPLATE_LENGTH);
//! # Ok::<(), scurry::Error>(())
//! ```

use crate::flow_utils::stretch;
use crate::random::RandomSource;

/// Bucket count of every template.
pub const TEMPLATE_LENGTH: usize = 100;

/// Same speed from start to finish.
pub fn constant_speed() -> Vec<f64> {
    vec![10.0; TEMPLATE_LENGTH]
}

/// Speeds up, wavers around the top speed, then slows into the target.
pub fn variating_flow() -> Vec<f64> {
    stretch(
        &[
            4.0, 5.0, 7.0, 10.0, 12.0, 14.0, 16.0, 18.0, 17.0, 16.0, 17.0, 19.0, 20.0, 18.0, 16.0,
            14.0, 15.0, 13.0, 11.0, 9.0, 7.0, 5.0, 4.0, 3.0, 2.0,
        ],
        TEMPLATE_LENGTH,
        |v| v,
    )
}

/// Two bursts of motion with a near stop in between.
pub fn interrupted_flow() -> Vec<f64> {
    stretch(
        &[
            3.0, 5.0, 8.0, 11.0, 13.0, 11.0, 8.0, 5.0, 2.0, 1.0, 1.0, 2.0, 5.0, 8.0, 11.0, 13.0,
            11.0, 8.0, 5.0, 3.0,
        ],
        TEMPLATE_LENGTH,
        |v| v,
    )
}

/// A long burst, a stall, and a short correction.
pub fn interrupted_flow2() -> Vec<f64> {
    stretch(
        &[
            2.0, 4.0, 7.0, 10.0, 13.0, 15.0, 15.0, 14.0, 11.0, 7.0, 3.0, 1.0, 1.0, 3.0, 6.0, 8.0,
            6.0, 3.0, 1.0,
        ],
        TEMPLATE_LENGTH,
        |v| v,
    )
}

/// Gradual acceleration throughout the movement.
pub fn slow_startup_flow() -> Vec<f64> {
    stretch(
        &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 12.0, 14.0, 16.0, 18.0, 20.0],
        TEMPLATE_LENGTH,
        |v| v,
    )
}

/// Slow start, fast middle, quick stop.
pub fn slow_startup2_flow() -> Vec<f64> {
    stretch(
        &[1.0, 1.0, 2.0, 3.0, 5.0, 8.0, 12.0, 16.0, 19.0, 20.0, 20.0, 18.0, 14.0, 9.0, 4.0],
        TEMPLATE_LENGTH,
        |v| v,
    )
}

/// Fast approach followed by small, slow adjustments near the target.
pub fn adjusting_flow() -> Vec<f64> {
    stretch(
        &[
            4.0, 10.0, 16.0, 20.0, 18.0, 13.0, 8.0, 4.0, 2.0, 3.0, 2.0, 1.0, 2.0, 1.0, 1.0,
        ],
        TEMPLATE_LENGTH,
        f64::floor,
    )
}

/// Rapidly alternating fast and slow moments.
pub fn jagged_flow() -> Vec<f64> {
    stretch(
        &[
            1.0, 3.0, 7.0, 10.0, 7.0, 3.0, 1.0, 3.0, 7.0, 10.0, 7.0, 3.0, 1.0, 3.0, 7.0, 10.0, 7.0,
            3.0, 1.0, 3.0, 7.0, 10.0, 7.0, 3.0, 1.0,
        ],
        TEMPLATE_LENGTH,
        |v| v,
    )
}

/// Moves, comes to a complete halt, then moves again.
pub fn stopping_flow() -> Vec<f64> {
    stretch(
        &[
            3.0, 6.0, 9.0, 11.0, 9.0, 6.0, 3.0, 0.0, 0.0, 0.0, 0.0, 3.0, 6.0, 9.0, 11.0, 9.0, 6.0,
            3.0,
        ],
        TEMPLATE_LENGTH,
        |v| v,
    )
}

/// A completely random flow.
///
/// Every bucket is drawn independently; the first bucket is kept above
/// zero so the result is always a valid flow.
pub fn random(random: &mut dyn RandomSource) -> Vec<f64> {
    let mut buckets: Vec<f64> = (0..TEMPLATE_LENGTH)
        .map(|_| (random.next_f64() * 100.0).floor())
        .collect();
    buckets[0] += 1.0;
    buckets
}

/// All fixed (non-random) templates with their names.
pub fn all() -> Vec<(&'static str, Vec<f64>)> {
    vec![
        ("constant_speed", constant_speed()),
        ("variating_flow", variating_flow()),
        ("interrupted_flow", interrupted_flow()),
        ("interrupted_flow2", interrupted_flow2()),
        ("slow_startup_flow", slow_startup_flow()),
        ("slow_startup2_flow", slow_startup2_flow()),
        ("adjusting_flow", adjusting_flow()),
        ("jagged_flow", jagged_flow()),
        ("stopping_flow", stopping_flow()),
    ]
}
