//! Span generation.
//!
//! Scanline rasterizers pull colors one horizontal run at a time rather than
//! per pixel. `SpanGenerator` is that pull interface; every [`Sampler`]
//! implements it.

use crate::basics::{PointI, RectI};
use crate::color::Rgba8;
use crate::paint_style::Sampler;

// ============================================================================
// SpanGenerator trait
// ============================================================================

/// Trait for span generators that produce per-pixel colors.
pub trait SpanGenerator {
    type Color;

    /// Called once before the first span of a fill.
    fn prepare(&mut self);

    /// Fill `span[0..len]` with colors for pixels starting at (x, y) and
    /// running to the right.
    fn generate(&mut self, span: &mut [Self::Color], x: i32, y: i32, len: u32);
}

impl SpanGenerator for Sampler<'_> {
    type Color = Rgba8;

    fn prepare(&mut self) {}

    fn generate(&mut self, span: &mut [Rgba8], x: i32, y: i32, len: u32) {
        let span = &mut span[..len as usize];
        if let Some(color) = self.constant_color() {
            span.fill(color);
            return;
        }
        for (dx, c) in (0..).zip(span.iter_mut()) {
            *c = self.sample(PointI::new(x + dx, y));
        }
    }
}

// ============================================================================
// render_rect
// ============================================================================

/// Generate every span of `rect` into `buffer`, row-major.
///
/// `buffer` is resized to hold `rect.width() * rect.height()` colors. An
/// empty or inverted rect leaves it empty.
pub fn render_rect<SG>(span_gen: &mut SG, rect: RectI, buffer: &mut Vec<SG::Color>)
where
    SG: SpanGenerator,
    SG::Color: Default + Clone,
{
    buffer.clear();
    if rect.is_empty() {
        return;
    }
    let width = rect.width() as usize;
    buffer.resize(width * rect.height() as usize, SG::Color::default());

    span_gen.prepare();
    for (row, y) in buffer.chunks_exact_mut(width).zip(rect.y1..rect.y2) {
        span_gen.generate(row, rect.x1, y, width as u32);
    }
}

// ============================================================================
// Tests
// ============================================================================
