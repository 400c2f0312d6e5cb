//! Pixel positions, real-valued offsets and screen bounds.
//!
//! Cursor positions live on an integer pixel grid ([`Point`]), while the
//! simulation accumulates sub-pixel progress, noise and deviation as real
//! values ([`Offset`]).
//!
//! # Example
//!
//! ```rust
//! use scurry::{Dimension, Point};
//!
//! let screen = Dimension::new(800, 600);
//! assert_eq!(screen.clamp(Point::new(900, -5)), Point::new(799, 0));
//! ```

use core::fmt;
use core::ops::{Add, AddAssign, Mul, Sub};

/// A position on the integer pixel grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Creates a new point with the given coordinates.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the origin point (0, 0).
    #[inline]
    pub const fn origin() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Straight-line distance to another point in pixels.
    #[inline]
    pub fn distance_to(self, other: Point) -> f64 {
        let delta = other - self;
        f64::from(delta.x).hypot(f64::from(delta.y))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Saturates at the `i32` bounds.
impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, other: Point) -> Point {
        Point {
            x: self.x.saturating_add(other.x),
            y: self.y.saturating_add(other.y),
        }
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, other: Point) -> Point {
        Point {
            x: self.x.saturating_sub(other.x),
            y: self.y.saturating_sub(other.y),
        }
    }
}

/// A real-valued 2D offset.
///
/// Used for step sizes, accumulated noise, deviation and the simulated
/// (sub-pixel) cursor position.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Offset {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
}

impl Offset {
    /// Creates a new offset with the given components.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the zero offset.
    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Euclidean length of the offset.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl From<Point> for Offset {
    #[inline]
    fn from(p: Point) -> Self {
        Self {
            x: f64::from(p.x),
            y: f64::from(p.y),
        }
    }
}

impl Add for Offset {
    type Output = Offset;

    #[inline]
    fn add(self, other: Offset) -> Offset {
        Offset {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl AddAssign for Offset {
    #[inline]
    fn add_assign(&mut self, other: Offset) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Mul<f64> for Offset {
    type Output = Offset;

    #[inline]
    fn mul(self, scalar: f64) -> Offset {
        Offset {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

/// Screen size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimension {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Dimension {
    /// Creates a new screen dimension.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Clamps an x coordinate to `[0, width - 1]`.
    #[inline]
    pub fn clamp_x(&self, x: i32) -> i32 {
        x.min(self.width - 1).max(0)
    }

    /// Clamps a y coordinate to `[0, height - 1]`.
    #[inline]
    pub fn clamp_y(&self, y: i32) -> i32 {
        y.min(self.height - 1).max(0)
    }

    /// Clamps a point onto the screen.
    #[inline]
    pub fn clamp(&self, p: Point) -> Point {
        Point::new(self.clamp_x(p.x), self.clamp_y(p.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(10, 20);
        let b = Point::new(3, -4);
        assert_eq!(a + b, Point::new(13, 16));
        assert_eq!(a - b, Point::new(7, 24));
    }

    #[test]
    fn test_point_arithmetic_saturates() {
        let edge = Point::new(i32::MAX, i32::MIN);
        assert_eq!(edge + Point::new(5, -5), edge);
        assert_eq!(edge - Point::new(-5, 5), edge);
    }

    #[test]
    fn test_point_display() {
        assert_eq!(Point::new(12, -3).to_string(), "(12, -3)");
    }

    #[test]
    fn test_point_distance() {
        let a = Point::new(0, 0);
        let b = Point::new(3, 4);
        assert!((a.distance_to(b) - 5.0).abs() < 1e-12);
        assert!((b.distance_to(a) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_offset_ops() {
        let mut o = Offset::new(1.0, 2.0);
        o += Offset::new(0.5, -1.0);
        assert_eq!(o, Offset::new(1.5, 1.0));
        assert_eq!(o * 2.0, Offset::new(3.0, 2.0));
        assert!((Offset::new(3.0, 4.0).magnitude() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_clamp_to_screen() {
        let screen = Dimension::new(800, 500);
        assert_eq!(screen.clamp(Point::new(-10, -10)), Point::new(0, 0));
        assert_eq!(screen.clamp(Point::new(900, 100)), Point::new(799, 100));
        assert_eq!(screen.clamp(Point::new(100, 600)), Point::new(100, 499));
        assert_eq!(screen.clamp(Point::new(42, 43)), Point::new(42, 43));
    }
}
