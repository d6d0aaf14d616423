//! Paint styles.
//!
//! A `PaintStyle` is what a rasterizer fills a shape with. It is either a
//! solid color or a gradient; the rasterizer does not need to know which.
//! For each fill it calls [`PaintStyle::paint`] with the shape's bounding
//! box and receives a [`Sampler`] that maps device pixels to colors.
//!
//! Paint styles are built single-threaded and then frozen behind an `Arc`
//! ([`SharedPaintStyle`]). Samplers only borrow the style, so any number of
//! threads may sample the same style at once.

use std::sync::Arc;

use crate::basics::{PointI, RectI};
use crate::color::{AlphaMode, Rgba8};
use crate::color_stops::ColorStops;
use crate::gradient::GradientPaintStyle;
use crate::span_gradient::{GradientFunction, GradientFunctionKind};

// ============================================================================
// SolidColorPaintStyle
// ============================================================================

/// Paints every pixel with one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolidColorPaintStyle {
    color: Rgba8,
}

impl SolidColorPaintStyle {
    pub fn new(color: Rgba8) -> Self {
        Self { color }
    }

    pub fn color(&self) -> Rgba8 {
        self.color
    }
}

// ============================================================================
// PaintStyle
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum PaintStyle {
    SolidColor(SolidColorPaintStyle),
    Gradient(GradientPaintStyle),
}

/// A frozen paint style shared between drawing commands.
pub type SharedPaintStyle = Arc<PaintStyle>;

impl PaintStyle {
    pub fn solid(color: Rgba8) -> Self {
        Self::SolidColor(SolidColorPaintStyle::new(color))
    }

    /// Freeze the style for sharing.
    pub fn into_shared(self) -> SharedPaintStyle {
        Arc::new(self)
    }

    /// Color at `point` without a bounding box.
    ///
    /// Meaningful for solid colors and canvas gradients. CSS gradients are
    /// laid out against the painted box and return transparent black here.
    pub fn sample_color(&self, point: PointI) -> Rgba8 {
        match self {
            Self::SolidColor(solid) => solid.color(),
            Self::Gradient(gradient) => gradient.sample_color(point),
        }
    }

    /// Set up sampling for a fill of `bounding_box`.
    pub fn sampler(&self, bounding_box: RectI) -> Sampler<'_> {
        match self {
            Self::SolidColor(solid) => Sampler::constant(solid.color()),
            Self::Gradient(gradient) => gradient.sampler(bounding_box),
        }
    }

    /// Paint a fill of `bounding_box`.
    ///
    /// Calls `f` exactly once with a sampler for the box and returns what it
    /// returns. The sampler is only valid for the duration of the call.
    pub fn paint<R>(&self, bounding_box: RectI, f: impl FnOnce(&Sampler<'_>) -> R) -> R {
        let sampler = self.sampler(bounding_box);
        f(&sampler)
    }
}

impl From<SolidColorPaintStyle> for PaintStyle {
    fn from(solid: SolidColorPaintStyle) -> Self {
        Self::SolidColor(solid)
    }
}

impl From<GradientPaintStyle> for PaintStyle {
    fn from(gradient: GradientPaintStyle) -> Self {
        Self::Gradient(gradient)
    }
}

impl From<Rgba8> for PaintStyle {
    fn from(color: Rgba8) -> Self {
        Self::solid(color)
    }
}

// ============================================================================
// Sampler
// ============================================================================

/// Per-paint sampling state: maps device pixels to colors.
#[derive(Debug, Clone, Copy)]
pub struct Sampler<'a> {
    source: SamplerSource<'a>,
}

#[derive(Debug, Clone, Copy)]
enum SamplerSource<'a> {
    Constant(Rgba8),
    Gradient {
        color_stops: &'a ColorStops,
        alpha_mode: AlphaMode,
        function: GradientFunctionKind,
    },
}

impl<'a> Sampler<'a> {
    pub(crate) fn constant(color: Rgba8) -> Self {
        Self {
            source: SamplerSource::Constant(color),
        }
    }

    pub(crate) fn gradient(
        color_stops: &'a ColorStops,
        alpha_mode: AlphaMode,
        function: GradientFunctionKind,
    ) -> Self {
        Self {
            source: SamplerSource::Gradient {
                color_stops,
                alpha_mode,
                function,
            },
        }
    }

    /// The color painted everywhere, if the sampler does not vary.
    pub fn constant_color(&self) -> Option<Rgba8> {
        match self.source {
            SamplerSource::Constant(color) => Some(color),
            SamplerSource::Gradient { .. } => None,
        }
    }

    /// Color at device pixel `point`.
    #[inline]
    pub fn sample(&self, point: PointI) -> Rgba8 {
        match self.source {
            SamplerSource::Constant(color) => color,
            SamplerSource::Gradient {
                color_stops,
                alpha_mode,
                ref function,
            } => {
                let position = function.calculate(point.x as f64, point.y as f64);
                color_stops.resolve(position, alpha_mode)
            }
        }
    }

    /// The sampler as a plain function of the pixel coordinate.
    pub fn as_fn(&self) -> impl Fn(PointI) -> Rgba8 + 'a {
        let sampler = *self;
        move |point| sampler.sample(point)
    }
}

// ============================================================================
// Tests
// ============================================================================
