//! Color types and operations.
//!
//! - `Rgba`: f64 components, the working space for interpolation
//! - `Rgba8`: u8 components, straight alpha; the color type stops are
//!   defined in and samplers produce
//!
//! `AlphaMode` selects how two colors are blended: straight per-channel
//! interpolation, or interpolation of premultiplied values (which keeps the
//! hue of a partially transparent stop from bleeding toward black).

use crate::basics::uround;

// ============================================================================
// AlphaMode
// ============================================================================

/// How color channels are interpolated across alpha changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlphaMode {
    /// Channels are blended as stored.
    #[default]
    Straight,
    /// Channels are premultiplied by alpha before blending and
    /// un-premultiplied afterwards.
    Premultiplied,
}

// ============================================================================
// Rgba (f64 precision color)
// ============================================================================

/// RGBA color with f64 components in range [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn premultiply(&mut self) -> &mut Self {
        self.r *= self.a;
        self.g *= self.a;
        self.b *= self.a;
        self
    }

    pub fn demultiply(&mut self) -> &mut Self {
        if self.a == 0.0 {
            self.r = 0.0;
            self.g = 0.0;
            self.b = 0.0;
        } else {
            let inv_a = 1.0 / self.a;
            self.r *= inv_a;
            self.g *= inv_a;
            self.b *= inv_a;
        }
        self
    }

    /// Interpolate between `self` and `c` by parameter `k`.
    pub fn gradient(&self, c: &Rgba, k: f64) -> Rgba {
        Rgba {
            r: self.r + (c.r - self.r) * k,
            g: self.g + (c.g - self.g) * k,
            b: self.b + (c.b - self.b) * k,
            a: self.a + (c.a - self.a) * k,
        }
    }

    pub fn no_color() -> Self {
        Self {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 0.0,
        }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::no_color()
    }
}

// ============================================================================
// Rgba8 (8-bit per channel)
// ============================================================================

/// RGBA color with u8 components and straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BASE_MASK: u32 = 255;

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn new_opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Convert from `Rgba` (f64) to `Rgba8` (u8), clamping each channel.
    pub fn from_rgba(c: &Rgba) -> Self {
        let channel = |v: f64| uround(v.clamp(0.0, 1.0) * Self::BASE_MASK as f64) as u8;
        Self {
            r: channel(c.r),
            g: channel(c.g),
            b: channel(c.b),
            a: channel(c.a),
        }
    }

    /// Convert to `Rgba` (f64).
    pub fn to_rgba(&self) -> Rgba {
        Rgba {
            r: self.r as f64 / 255.0,
            g: self.g as f64 / 255.0,
            b: self.b as f64 / 255.0,
            a: self.a as f64 / 255.0,
        }
    }

    /// Fully transparent black.
    pub const fn no_color() -> Self {
        Self::new(0, 0, 0, 0)
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    pub fn is_opaque(&self) -> bool {
        self.a == Self::BASE_MASK as u8
    }

    /// Interpolate between `self` and `c` by parameter `k` (0.0 to 1.0).
    pub fn gradient(&self, c: &Rgba8, k: f64) -> Rgba8 {
        Rgba8::from_rgba(&self.to_rgba().gradient(&c.to_rgba(), k))
    }

    /// Interpolate between `self` and `c` in premultiplied space.
    ///
    /// Colors of equal alpha, or equal RGB, blend the same way in both
    /// spaces, so those take the straight path.
    pub fn gradient_premultiplied(&self, c: &Rgba8, k: f64) -> Rgba8 {
        if self.a == c.a || (self.r == c.r && self.g == c.g && self.b == c.b) {
            return self.gradient(c, k);
        }
        let mut from = self.to_rgba();
        let mut to = c.to_rgba();
        from.premultiply();
        to.premultiply();
        let mut mixed = from.gradient(&to, k);
        mixed.demultiply();
        Rgba8::from_rgba(&mixed)
    }

    /// Interpolate according to `mode`.
    #[inline]
    pub fn interpolate(&self, c: &Rgba8, k: f64, mode: AlphaMode) -> Rgba8 {
        match mode {
            AlphaMode::Straight => self.gradient(c, k),
            AlphaMode::Premultiplied => self.gradient_premultiplied(c, k),
        }
    }
}

impl Default for Rgba8 {
    fn default() -> Self {
        Self::no_color()
    }
}

impl From<[u8; 4]> for Rgba8 {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba8 = Rgba8::new_opaque(255, 0, 0);
    const BLUE: Rgba8 = Rgba8::new_opaque(0, 0, 255);

    #[test]
    fn test_rgba_premultiply_demultiply() {
        let mut c = Rgba::new(1.0, 0.5, 0.0, 0.5);
        c.premultiply();
        assert!((c.r - 0.5).abs() < 1e-10);
        assert!((c.g - 0.25).abs() < 1e-10);
        c.demultiply();
        assert!((c.r - 1.0).abs() < 1e-10);
        assert!((c.g - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_rgba_demultiply_zero_alpha() {
        let mut c = Rgba::new(0.3, 0.3, 0.3, 0.0);
        c.demultiply();
        assert_eq!(c, Rgba::no_color());
    }

    #[test]
    fn test_rgba_gradient() {
        let c1 = Rgba::new(0.0, 0.0, 0.0, 1.0);
        let c2 = Rgba::new(1.0, 1.0, 1.0, 1.0);
        let mid = c1.gradient(&c2, 0.5);
        assert!((mid.r - 0.5).abs() < 1e-10);
        assert!((mid.a - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_rgba8_from_rgba_roundtrip() {
        let c = Rgba8::new(10, 128, 200, 255);
        assert_eq!(Rgba8::from_rgba(&c.to_rgba()), c);
    }

    #[test]
    fn test_rgba8_from_rgba_clamps() {
        let c = Rgba8::from_rgba(&Rgba::new(1.5, -0.2, 0.5, 1.0));
        assert_eq!(c, Rgba8::new(255, 0, 128, 255));
    }

    #[test]
    fn test_rgba8_gradient_endpoints_and_midpoint() {
        assert_eq!(RED.gradient(&BLUE, 0.0), RED);
        assert_eq!(RED.gradient(&BLUE, 1.0), BLUE);
        assert_eq!(RED.gradient(&BLUE, 0.5), Rgba8::new(128, 0, 128, 255));
    }

    #[test]
    fn test_premultiplied_keeps_hue_of_visible_stop() {
        let transparent_blue = BLUE.with_alpha(0);
        let straight = RED.interpolate(&transparent_blue, 0.5, AlphaMode::Straight);
        let premul = RED.interpolate(&transparent_blue, 0.5, AlphaMode::Premultiplied);
        // Straight blending drags half of the invisible blue into the result.
        assert_eq!(straight, Rgba8::new(128, 0, 128, 128));
        // Premultiplied blending stays pure red at half coverage.
        assert_eq!(premul, Rgba8::new(255, 0, 0, 128));
    }

    #[test]
    fn test_premultiplied_equal_alpha_matches_straight() {
        let a = Rgba8::new(200, 10, 30, 100);
        let b = Rgba8::new(20, 250, 90, 100);
        for k in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_eq!(a.gradient_premultiplied(&b, k), a.gradient(&b, k));
        }
    }

    #[test]
    fn test_rgba8_flags() {
        assert!(Rgba8::no_color().is_transparent());
        assert!(RED.is_opaque());
        assert_eq!(Rgba8::default(), Rgba8::no_color());
        assert_eq!(Rgba8::from([1, 2, 3, 4]), Rgba8::new(1, 2, 3, 4));
    }
}
