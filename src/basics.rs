//! Foundation types and helpers.
//!
//! Points, sizes and rectangles in integer and floating point flavors,
//! rounding helpers and angle conversion. Everything else in the crate
//! depends on these.

use core::ops::{Add, Sub};

// ============================================================================
// Rounding
// ============================================================================

/// Round a double to the nearest unsigned integer (round half up).
#[inline]
pub fn uround(v: f64) -> u32 {
    (v + 0.5) as u32
}

// ============================================================================
// Mathematical constants
// ============================================================================

pub const PI: f64 = std::f64::consts::PI;

/// Convert degrees to radians.
#[inline]
pub fn deg2rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees.
#[inline]
pub fn rad2deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

// ============================================================================
// Point
// ============================================================================

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointBase<T: Copy> {
    pub x: T,
    pub y: T,
}

impl<T: Copy> PointBase<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Copy + Add<Output = T>> Add for PointBase<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Copy + Sub<Output = T>> Sub for PointBase<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl PointBase<i32> {
    /// Widen to floating point coordinates.
    pub fn to_f64(self) -> PointD {
        PointD::new(self.x as f64, self.y as f64)
    }
}

impl PointBase<f64> {
    /// Dot product with `other`, both taken as vectors from the origin.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

pub type PointI = PointBase<i32>;
pub type PointD = PointBase<f64>;

// ============================================================================
// Size
// ============================================================================

/// A 2D extent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizeBase<T: Copy> {
    pub width: T,
    pub height: T,
}

impl<T: Copy> SizeBase<T> {
    pub fn new(width: T, height: T) -> Self {
        Self { width, height }
    }
}

pub type SizeI = SizeBase<i32>;

// ============================================================================
// Rect
// ============================================================================

/// A rectangle defined by two corner points.
///
/// Used as a half-open pixel box: it covers columns `x1..x2` and rows
/// `y1..y2`, so its width is `x2 - x1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect<T: Copy> {
    pub x1: T,
    pub y1: T,
    pub x2: T,
    pub y2: T,
}

impl<T: Copy + PartialOrd> Rect<T> {
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Top-left corner.
    pub fn location(&self) -> PointBase<T> {
        PointBase::new(self.x1, self.y1)
    }
}

impl<T: Copy + PartialOrd + Sub<Output = T>> Rect<T> {
    pub fn width(&self) -> T {
        self.x2 - self.x1
    }

    pub fn height(&self) -> T {
        self.y2 - self.y1
    }
}

impl Rect<i32> {
    /// Returns `true` if the box covers no pixels (zero-sized or inverted).
    pub fn is_empty(&self) -> bool {
        self.x1 >= self.x2 || self.y1 >= self.y2
    }
}

/// Rectangle with `i32` coordinates.
pub type RectI = Rect<i32>;

// ============================================================================
// Tests
// ============================================================================
