//! Error types for flow construction, resampling and motion.

use thiserror::Error;

use crate::geometry::Point;

/// Errors produced by scurry.
///
/// # Recovery Strategies
///
/// | Error Variant | Recovery Strategy |
/// |--------------|-------------------|
/// | [`InvalidFlow`](Error::InvalidFlow) | Fix the flow characteristics |
/// | [`InvalidArguments`](Error::InvalidArguments) | Fix the resize direction or inputs |
/// | [`UnreachableTarget`](Error::UnreachableTarget) | Check the platform cursor backend |
///
/// Cursor divergence during a move is not an error: it is corrected at
/// sub-movement boundaries and never surfaces here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Flow characteristics contained a negative value or summed to zero.
    #[error("invalid flow characteristics: {0}")]
    InvalidFlow(String),

    /// A resampling or construction call was given arguments it cannot honor,
    /// e.g. reducing a flow to a length that is not shorter.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// The cursor never settled on the target even after re-planning.
    ///
    /// Occurs when the platform keeps reporting a position other than the
    /// one that was set, for example when something else owns the cursor.
    #[error("target {target} unreachable after {attempts} re-plans, cursor stuck at {position}")]
    UnreachableTarget {
        /// The clamped destination of the move.
        target: Point,
        /// The last reported cursor position.
        position: Point,
        /// How many times the movement queue was rebuilt.
        attempts: usize,
    },
}

/// A specialized [`Result`] type for scurry operations.
pub type Result<T> = std::result::Result<T, Error>;
