//! Gradient shape functions.
//!
//! Each gradient kind maps a device point to a ramp position. The mapping is
//! set up once per paint operation (for shape-relative gradients it depends
//! on the bounding box being painted) and then evaluated per pixel.

use crate::basics::{deg2rad, rad2deg, PointD, RectI};
use crate::gradient::GradientKind;
use crate::math::{calc_sq_distance, solve_quadratic_half};

// ============================================================================
// Constants
// ============================================================================

/// Geometry at or below this extent is treated as degenerate.
pub const DEGENERATE_THRESHOLD: f64 = 1.0e-6;

// ============================================================================
// GradientFunction trait
// ============================================================================

/// Trait for gradient shape functions.
///
/// Maps a device point `(x, y)` to a ramp position. Positions are nominally
/// in [0, 1] but may fall outside; NaN means the point is not covered by
/// the gradient at all.
pub trait GradientFunction {
    fn calculate(&self, x: f64, y: f64) -> f64;
}

// ============================================================================
// Shape-relative linear
// ============================================================================

/// Linear gradient across a bounding box at a CSS angle.
///
/// The gradient line passes through the box center and is just long enough
/// for its perpendiculars through the start and end to touch opposite
/// corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearGradientFunction {
    center: PointD,
    cos: f64,
    sin: f64,
    inv_length: f64,
}

impl LinearGradientFunction {
    /// `angle` is in CSS degrees: 0 points to the top, 90 to the right.
    pub fn new(bounding_box: RectI, angle: f64) -> Option<Self> {
        if !angle.is_finite() {
            return None;
        }
        let width = bounding_box.width() as f64;
        let height = bounding_box.height() as f64;
        let (sin, cos) = deg2rad(90.0 - angle).sin_cos();
        let length = (height * sin).abs() + (width * cos).abs();
        if length <= DEGENERATE_THRESHOLD {
            return None;
        }
        Some(Self {
            center: PointD::new(
                bounding_box.x1 as f64 + width / 2.0,
                bounding_box.y1 as f64 + height / 2.0,
            ),
            cos,
            sin,
            inv_length: 1.0 / length,
        })
    }
}

impl GradientFunction for LinearGradientFunction {
    #[inline]
    fn calculate(&self, x: f64, y: f64) -> f64 {
        // Device y grows downwards, the angle is measured with y up.
        0.5 + ((x - self.center.x) * self.cos + (self.center.y - y) * self.sin) * self.inv_length
    }
}

// ============================================================================
// Shape-relative radial
// ============================================================================

/// Elliptical radial gradient: 0 at the center, 1 on the ellipse with the
/// given radii, growing linearly beyond.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialGradientFunction {
    center: PointD,
    inv_rx: f64,
    inv_ry: f64,
}

impl RadialGradientFunction {
    pub fn new(center: PointD, rx: f64, ry: f64) -> Option<Self> {
        if !center.is_finite()
            || !(rx > DEGENERATE_THRESHOLD && rx.is_finite())
            || !(ry > DEGENERATE_THRESHOLD && ry.is_finite())
        {
            return None;
        }
        Some(Self {
            center,
            inv_rx: 1.0 / rx,
            inv_ry: 1.0 / ry,
        })
    }
}

impl GradientFunction for RadialGradientFunction {
    #[inline]
    fn calculate(&self, x: f64, y: f64) -> f64 {
        let gx = (x - self.center.x) * self.inv_rx;
        let gy = (y - self.center.y) * self.inv_ry;
        (gx * gx + gy * gy).sqrt()
    }
}

// ============================================================================
// Conic
// ============================================================================

/// Angular gradient around a center.
///
/// The raw angle is measured clockwise (y down) from the +x axis; `offset`
/// rotates it so that 0 lands on the gradient's start direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConicGradientFunction {
    center: PointD,
    offset: f64,
}

impl ConicGradientFunction {
    /// CSS conic: `start_angle` degrees clockwise from the top.
    pub fn css(center: PointD, start_angle: f64) -> Option<Self> {
        Self::with_offset(center, 90.0 - start_angle)
    }

    /// Canvas conic: `start_angle` degrees clockwise from the +x axis.
    pub fn canvas(center: PointD, start_angle: f64) -> Option<Self> {
        Self::with_offset(center, -start_angle)
    }

    fn with_offset(center: PointD, offset: f64) -> Option<Self> {
        if !center.is_finite() || !offset.is_finite() {
            return None;
        }
        Some(Self { center, offset })
    }
}

impl GradientFunction for ConicGradientFunction {
    #[inline]
    fn calculate(&self, x: f64, y: f64) -> f64 {
        let degrees = rad2deg((y - self.center.y).atan2(x - self.center.x));
        (degrees + self.offset).rem_euclid(360.0) / 360.0
    }
}

// ============================================================================
// Canvas linear
// ============================================================================

/// Projection onto the segment `p0 → p1`: 0 at `p0`, 1 at `p1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasLinearGradientFunction {
    p0: PointD,
    delta: PointD,
    inv_sq_length: f64,
}

impl CanvasLinearGradientFunction {
    pub fn new(p0: PointD, p1: PointD) -> Option<Self> {
        let sq_length = calc_sq_distance(p0.x, p0.y, p1.x, p1.y);
        if !sq_length.is_finite() || sq_length <= DEGENERATE_THRESHOLD * DEGENERATE_THRESHOLD {
            return None;
        }
        Some(Self {
            p0,
            delta: p1 - p0,
            inv_sq_length: 1.0 / sq_length,
        })
    }
}

impl GradientFunction for CanvasLinearGradientFunction {
    #[inline]
    fn calculate(&self, x: f64, y: f64) -> f64 {
        (PointD::new(x, y) - self.p0).dot(self.delta) * self.inv_sq_length
    }
}

// ============================================================================
// Canvas radial (two circles)
// ============================================================================

/// Two-circle radial gradient.
///
/// For a point `p` the ramp position is the largest `w` for which `p` lies
/// on the circle with center `c0 + w * (c1 - c0)` and radius
/// `r0 + w * (r1 - r0)`, with that radius non-negative. Points on no such
/// circle yield NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRadialGradientFunction {
    start_center: PointD,
    start_radius: f64,
    center_delta: PointD,
    radius_delta: f64,
    a: f64,
}

impl CanvasRadialGradientFunction {
    pub fn new(
        start_center: PointD,
        start_radius: f64,
        end_center: PointD,
        end_radius: f64,
    ) -> Option<Self> {
        let center_delta = end_center - start_center;
        let radius_delta = end_radius - start_radius;
        if !center_delta.is_finite() || !radius_delta.is_finite() {
            return None;
        }
        if center_delta.dot(center_delta) <= DEGENERATE_THRESHOLD * DEGENERATE_THRESHOLD
            && radius_delta.abs() <= DEGENERATE_THRESHOLD
        {
            return None;
        }
        Some(Self {
            start_center,
            start_radius,
            center_delta,
            radius_delta,
            a: center_delta.dot(center_delta) - radius_delta * radius_delta,
        })
    }

    #[inline]
    fn radius_at(&self, w: f64) -> f64 {
        self.start_radius + w * self.radius_delta
    }
}

impl GradientFunction for CanvasRadialGradientFunction {
    fn calculate(&self, x: f64, y: f64) -> f64 {
        let pd = PointD::new(x, y) - self.start_center;
        let b = pd.dot(self.center_delta) + self.start_radius * self.radius_delta;
        let c = pd.dot(pd) - self.start_radius * self.start_radius;
        match solve_quadratic_half(self.a, b, c) {
            Some((w1, _)) if self.radius_at(w1) >= 0.0 => w1,
            Some((_, w2)) if self.radius_at(w2) >= 0.0 => w2,
            _ => f64::NAN,
        }
    }
}

// ============================================================================
// GradientFunctionKind
// ============================================================================

/// The ramp mapping of one gradient, resolved for one paint operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradientFunctionKind {
    Linear(LinearGradientFunction),
    Radial(RadialGradientFunction),
    Conic(ConicGradientFunction),
    CanvasLinear(CanvasLinearGradientFunction),
    CanvasRadial(CanvasRadialGradientFunction),
}

impl GradientFunctionKind {
    /// Resolve `kind` against the box about to be painted.
    ///
    /// Returns `None` for degenerate geometry.
    pub fn new(kind: &GradientKind, bounding_box: RectI) -> Option<Self> {
        let origin = bounding_box.location().to_f64();
        let function = match *kind {
            GradientKind::Linear { angle } => {
                Self::Linear(LinearGradientFunction::new(bounding_box, angle)?)
            }
            GradientKind::Radial { center, size } => Self::Radial(RadialGradientFunction::new(
                origin + center.to_f64(),
                size.width as f64,
                size.height as f64,
            )?),
            GradientKind::Conic {
                center,
                start_angle,
            } => Self::Conic(ConicGradientFunction::css(
                origin + center.to_f64(),
                start_angle,
            )?),
            GradientKind::CanvasLinear { p0, p1 } => {
                Self::CanvasLinear(CanvasLinearGradientFunction::new(p0, p1)?)
            }
            GradientKind::CanvasRadial {
                start_center,
                start_radius,
                end_center,
                end_radius,
            } => Self::CanvasRadial(CanvasRadialGradientFunction::new(
                start_center,
                start_radius,
                end_center,
                end_radius,
            )?),
            GradientKind::CanvasConic {
                center,
                start_angle,
            } => Self::Conic(ConicGradientFunction::canvas(center, start_angle)?),
        };
        Some(function)
    }
}

impl GradientFunction for GradientFunctionKind {
    #[inline]
    fn calculate(&self, x: f64, y: f64) -> f64 {
        match self {
            Self::Linear(f) => f.calculate(x, y),
            Self::Radial(f) => f.calculate(x, y),
            Self::Conic(f) => f.calculate(x, y),
            Self::CanvasLinear(f) => f.calculate(x, y),
            Self::CanvasRadial(f) => f.calculate(x, y),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
