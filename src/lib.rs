//! # gfx-paint
//!
//! Paint styles for 2D rasterizers: what color to put at each device pixel
//! of a shape being filled.
//!
//! - Solid colors
//! - CSS gradients (`linear-gradient`, `radial-gradient`, `conic-gradient`),
//!   laid out against the bounding box of each fill and blended with
//!   premultiplied alpha
//! - HTML canvas gradients (`createLinearGradient`, `createRadialGradient`,
//!   `createConicGradient`) in absolute device coordinates with straight
//!   alpha
//! - Color stops with transition hints and repeating ramps
//!
//! ## Usage
//!
//! ```
//! use gfx_paint::{GradientPaintStyle, PaintStyle, PointI, RectI, Rgba8};
//!
//! let style = PaintStyle::from(
//!     GradientPaintStyle::linear(90.0)
//!         .with_color_stop(0.0, Rgba8::new_opaque(255, 0, 0))
//!         .with_color_stop(1.0, Rgba8::new_opaque(0, 0, 255)),
//! )
//! .into_shared();
//!
//! let mid = style.paint(RectI::new(0, 0, 10, 10), |sampler| {
//!     sampler.sample(PointI::new(5, 5))
//! });
//! assert_eq!(mid, Rgba8::new(128, 0, 128, 255));
//! ```
//!
//! ## Architecture
//!
//! 1. **Paint style**: `PaintStyle`, a closed set of solid and gradient styles
//! 2. **Sampler**: per-fill state built from a style and a bounding box
//! 3. **Gradient function**: maps a device pixel to a ramp position
//! 4. **Color stops**: resolve a ramp position to a color
//! 5. **Span generator**: feeds sampled colors to a scanline renderer

// Foundation Types & Math
pub mod basics;
pub mod color;
pub mod error;
pub mod math;

// Gradients
pub mod color_stops;
pub mod gradient;
pub mod span_gradient;

// Paint styles & spans
pub mod paint_style;
pub mod span;

pub use basics::{PointD, PointI, RectI, SizeI};
pub use color::{AlphaMode, Rgba, Rgba8};
pub use color_stops::{ColorStop, ColorStops};
pub use error::{PaintStyleError, Result};
pub use gradient::{GradientKind, GradientPaintStyle};
pub use paint_style::{PaintStyle, Sampler, SharedPaintStyle, SolidColorPaintStyle};
pub use span::SpanGenerator;
