//! Geometric math utilities.
//!
//! Squared distance and the quadratic solver used by the two-circle radial
//! gradient.

// ============================================================================
// Constants
// ============================================================================

/// Coinciding points maximal distance (epsilon).
pub const VERTEX_DIST_EPSILON: f64 = 1e-14;

// ============================================================================
// Distance calculations
// ============================================================================

/// Squared Euclidean distance between two points.
#[inline]
pub fn calc_sq_distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    dx * dx + dy * dy
}

// ============================================================================
// Quadratic equation
// ============================================================================

/// Real roots of `a*t^2 - 2*b*t + c = 0`, largest first.
///
/// The half-coefficient form keeps the discriminant as `b^2 - a*c`. When
/// `a` is (nearly) zero the equation is linear and the single root is
/// returned twice. Returns `None` when there is no real root.
pub fn solve_quadratic_half(a: f64, b: f64, c: f64) -> Option<(f64, f64)> {
    if a.abs() < VERTEX_DIST_EPSILON {
        if b == 0.0 {
            return None;
        }
        let t = c / (2.0 * b);
        return Some((t, t));
    }

    let discriminant = b * b - a * c;
    if discriminant < 0.0 {
        return None;
    }
    let sq = discriminant.sqrt();
    let t1 = (b + sq) / a;
    let t2 = (b - sq) / a;
    if t1 >= t2 {
        Some((t1, t2))
    } else {
        Some((t2, t1))
    }
}

// ============================================================================
// Tests
// ============================================================================
