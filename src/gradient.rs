//! Gradient paint styles.
//!
//! A `GradientPaintStyle` is a color ramp plus a geometry (`GradientKind`).
//! Shape-relative kinds (CSS `linear-gradient`, `radial-gradient`,
//! `conic-gradient`) are laid out against the bounding box of each paint
//! operation and blend in premultiplied alpha. Absolute kinds (the HTML
//! canvas factories) use fixed device coordinates and blend straight alpha.

use crate::basics::{PointD, PointI, RectI, SizeI};
use crate::color::{AlphaMode, Rgba8};
use crate::color_stops::{ColorStop, ColorStops};
use crate::error::{ensure_finite, PaintStyleError, Result};
use crate::paint_style::Sampler;
use crate::span_gradient::GradientFunctionKind;

// ============================================================================
// GradientKind
// ============================================================================

/// Gradient geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradientKind {
    /// CSS linear gradient; `angle` in degrees, 0 pointing up, 90 right.
    Linear { angle: f64 },
    /// CSS elliptical radial gradient; `center` relative to the box origin,
    /// `size` the ellipse radii.
    Radial { center: PointI, size: SizeI },
    /// CSS conic gradient; `start_angle` in degrees clockwise from up.
    Conic { center: PointI, start_angle: f64 },
    /// Canvas linear gradient from `p0` to `p1`.
    CanvasLinear { p0: PointD, p1: PointD },
    /// Canvas two-circle radial gradient.
    CanvasRadial {
        start_center: PointD,
        start_radius: f64,
        end_center: PointD,
        end_radius: f64,
    },
    /// Canvas conic gradient; `start_angle` in degrees clockwise from +x.
    CanvasConic { center: PointD, start_angle: f64 },
}

impl GradientKind {
    /// Whether the geometry is laid out against the painted bounding box.
    pub fn is_shape_relative(&self) -> bool {
        matches!(
            self,
            Self::Linear { .. } | Self::Radial { .. } | Self::Conic { .. }
        )
    }

    /// CSS gradients blend premultiplied, canvas gradients straight.
    pub fn alpha_mode(&self) -> AlphaMode {
        if self.is_shape_relative() {
            AlphaMode::Premultiplied
        } else {
            AlphaMode::Straight
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Linear { .. } => "linear",
            Self::Radial { .. } => "radial",
            Self::Conic { .. } => "conic",
            Self::CanvasLinear { .. } => "canvas linear",
            Self::CanvasRadial { .. } => "canvas radial",
            Self::CanvasConic { .. } => "canvas conic",
        }
    }
}

// ============================================================================
// GradientPaintStyle
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct GradientPaintStyle {
    color_stops: ColorStops,
    kind: GradientKind,
}

impl GradientPaintStyle {
    /// Gradient with no stops. It paints transparent until stops are added.
    pub fn new(kind: GradientKind) -> Self {
        Self {
            color_stops: ColorStops::new(),
            kind,
        }
    }

    pub fn linear(angle: f64) -> Self {
        Self::new(GradientKind::Linear { angle })
    }

    pub fn radial(center: PointI, size: SizeI) -> Self {
        debug_assert!(
            size.width >= 0 && size.height >= 0,
            "radial gradient size must not be negative: {size:?}"
        );
        Self::new(GradientKind::Radial { center, size })
    }

    pub fn conic(center: PointI, start_angle: f64) -> Self {
        Self::new(GradientKind::Conic {
            center,
            start_angle,
        })
    }

    pub fn canvas_linear(p0: PointD, p1: PointD) -> Result<Self> {
        ensure_finite("x0", p0.x)?;
        ensure_finite("y0", p0.y)?;
        ensure_finite("x1", p1.x)?;
        ensure_finite("y1", p1.y)?;
        Ok(Self::new(GradientKind::CanvasLinear { p0, p1 }))
    }

    pub fn canvas_radial(
        start_center: PointD,
        start_radius: f64,
        end_center: PointD,
        end_radius: f64,
    ) -> Result<Self> {
        ensure_finite("x0", start_center.x)?;
        ensure_finite("y0", start_center.y)?;
        ensure_finite("r0", start_radius)?;
        ensure_finite("x1", end_center.x)?;
        ensure_finite("y1", end_center.y)?;
        ensure_finite("r1", end_radius)?;
        for (name, value) in [("r0", start_radius), ("r1", end_radius)] {
            if value < 0.0 {
                return Err(PaintStyleError::NegativeRadius { name, value });
            }
        }
        Ok(Self::new(GradientKind::CanvasRadial {
            start_center,
            start_radius,
            end_center,
            end_radius,
        }))
    }

    pub fn canvas_conic(center: PointD, start_angle: f64) -> Result<Self> {
        ensure_finite("x", center.x)?;
        ensure_finite("y", center.y)?;
        ensure_finite("start_angle", start_angle)?;
        Ok(Self::new(GradientKind::CanvasConic {
            center,
            start_angle,
        }))
    }

    /// Add a stop, keeping the ramp sorted.
    pub fn add_color_stop(&mut self, position: f64, color: Rgba8, transition_hint: Option<f64>) {
        self.color_stops
            .add_color_stop(position, color, transition_hint);
    }

    /// Add a stop; see [`ColorStops::add_stop`] for the meaning of `sort`.
    pub fn add_stop(&mut self, stop: ColorStop, sort: bool) {
        self.color_stops.add_stop(stop, sort);
    }

    /// Builder form of [`add_color_stop`](Self::add_color_stop) without a hint.
    pub fn with_color_stop(mut self, position: f64, color: Rgba8) -> Self {
        self.add_color_stop(position, color, None);
        self
    }

    pub fn set_repeat_length(&mut self, repeat_length: f64) {
        self.color_stops.set_repeat_length(repeat_length);
    }

    pub fn color_stops(&self) -> &ColorStops {
        &self.color_stops
    }

    pub fn repeat_length(&self) -> Option<f64> {
        self.color_stops.repeat_length()
    }

    pub fn kind(&self) -> &GradientKind {
        &self.kind
    }

    /// Set up sampling for one paint operation over `bounding_box`.
    ///
    /// Empty and single-stop ramps, and degenerate geometry, produce a
    /// constant sampler.
    pub fn sampler(&self, bounding_box: RectI) -> Sampler<'_> {
        match self.color_stops.stops() {
            [] => return Sampler::constant(Rgba8::no_color()),
            [only] => return Sampler::constant(only.color),
            _ => {}
        }
        match GradientFunctionKind::new(&self.kind, bounding_box) {
            Some(function) => {
                log::trace!(
                    "{} gradient sampler over {:?} with {} stops",
                    self.kind.name(),
                    bounding_box,
                    self.color_stops.len()
                );
                Sampler::gradient(&self.color_stops, self.kind.alpha_mode(), function)
            }
            None => {
                log::debug!(
                    "degenerate {} gradient {:?} over {:?}, painting first stop color",
                    self.kind.name(),
                    self.kind,
                    bounding_box
                );
                Sampler::constant(self.color_stops.first_color())
            }
        }
    }

    /// Box-independent color at `point`.
    ///
    /// Shape-relative gradients need a bounding box and yield transparent
    /// black here.
    pub fn sample_color(&self, point: PointI) -> Rgba8 {
        if self.kind.is_shape_relative() {
            return Rgba8::no_color();
        }
        self.sampler(RectI::new(0, 0, 0, 0)).sample(point)
    }
}

// ============================================================================
// Tests
// ============================================================================
