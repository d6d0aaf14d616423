//! Gradient color stops and ramp resolution.
//!
//! A `ColorStops` ramp maps a scalar ramp position to a color. Stops are
//! kept sorted by position; positions before the first stop or after the
//! last clamp to the end colors unless a repeat length makes the ramp
//! periodic.

use smallvec::SmallVec;

use crate::color::{AlphaMode, Rgba8};

// ============================================================================
// ColorStop
// ============================================================================

/// One anchor of a gradient ramp.
///
/// `transition_hint` is the color hint of the segment that ends at this
/// stop, given as a fraction in (0, 1) of the distance from the previous
/// stop. At that fraction the blend between the two colors is exactly 50%.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub color: Rgba8,
    pub position: f64,
    pub transition_hint: Option<f64>,
}

impl ColorStop {
    pub fn new(position: f64, color: Rgba8) -> Self {
        Self {
            color,
            position,
            transition_hint: None,
        }
    }

    pub fn with_transition_hint(mut self, hint: f64) -> Self {
        self.transition_hint = Some(hint);
        self
    }
}

// ============================================================================
// ColorStops
// ============================================================================

/// Ordered color stops plus an optional repeat length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorStops {
    stops: SmallVec<[ColorStop; 4]>,
    repeat_length: Option<f64>,
}

impl ColorStops {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stop and re-sort the ramp.
    pub fn add_color_stop(&mut self, position: f64, color: Rgba8, transition_hint: Option<f64>) {
        self.add_stop(
            ColorStop {
                color,
                position,
                transition_hint,
            },
            true,
        );
    }

    /// Add a stop. Passing `sort = false` asserts that `stop` is not
    /// positioned before the current last stop.
    ///
    /// If that claim is false the ramp is left unsorted; resolution still
    /// returns some stop color but which one is unspecified.
    pub fn add_stop(&mut self, stop: ColorStop, sort: bool) {
        if !sort {
            if let Some(last) = self.stops.last() {
                if stop.position < last.position {
                    log::warn!(
                        "color stop at {} added unsorted after stop at {}",
                        stop.position,
                        last.position
                    );
                }
            }
        }
        self.stops.push(stop);
        if sort {
            // Stable, so stops sharing a position keep insertion order.
            self.stops.sort_by(|a, b| a.position.total_cmp(&b.position));
        }
    }

    /// Make the ramp periodic with period `repeat_length`.
    pub fn set_repeat_length(&mut self, repeat_length: f64) {
        self.repeat_length = Some(repeat_length);
    }

    pub fn repeat_length(&self) -> Option<f64> {
        self.repeat_length
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn first(&self) -> Option<&ColorStop> {
        self.stops.first()
    }

    pub fn last(&self) -> Option<&ColorStop> {
        self.stops.last()
    }

    /// Color of the first stop, or transparent black for an empty ramp.
    pub fn first_color(&self) -> Rgba8 {
        self.first().map_or(Rgba8::no_color(), |s| s.color)
    }

    /// Resolve a ramp position to a color.
    ///
    /// Non-finite positions and empty ramps yield transparent black.
    pub fn resolve(&self, position: f64, alpha_mode: AlphaMode) -> Rgba8 {
        if !position.is_finite() {
            return Rgba8::no_color();
        }
        let (first, last) = match self.stops.as_slice() {
            [] => return Rgba8::no_color(),
            [only] => return only.color,
            [first, .., last] => (first, last),
        };

        let position = self.wrap(position, first.position);
        if position <= first.position {
            return first.color;
        }
        if position >= last.position {
            return last.color;
        }

        // First stop strictly after `position`. Clamped so an unsorted ramp
        // still indexes a valid pair.
        let next = self
            .stops
            .partition_point(|s| s.position <= position)
            .clamp(1, self.stops.len() - 1);
        let s0 = &self.stops[next - 1];
        let s1 = &self.stops[next];
        let weight = color_stop_step(s0, s1, position);
        s0.color.interpolate(&s1.color, weight, alpha_mode)
    }

    fn wrap(&self, position: f64, origin: f64) -> f64 {
        match self.repeat_length {
            Some(length) if length.is_finite() && length > 0.0 => {
                origin + (position - origin).rem_euclid(length)
            }
            _ => position,
        }
    }
}

impl FromIterator<ColorStop> for ColorStops {
    fn from_iter<I: IntoIterator<Item = ColorStop>>(iter: I) -> Self {
        let mut stops = Self::new();
        for stop in iter {
            stops.add_stop(stop, true);
        }
        stops
    }
}

/// Blend weight of `next` at `position` within the segment `previous..next`.
///
/// Without a hint this is the linear fraction. A hint `h` bends the curve
/// to `p^(ln 0.5 / ln h)`, which passes through 50% at `p = h`.
fn color_stop_step(previous: &ColorStop, next: &ColorStop, position: f64) -> f64 {
    if position < previous.position {
        return 0.0;
    }
    if position > next.position {
        return 1.0;
    }
    let stop_length = next.position - previous.position;
    if stop_length <= 0.0 {
        return 1.0;
    }
    let p = (position - previous.position) / stop_length;
    match next.transition_hint {
        None => p,
        Some(hint) if hint.is_nan() => p,
        Some(hint) if hint >= 1.0 => 0.0,
        Some(hint) if hint <= 0.0 => 1.0,
        Some(hint) => p.powf(0.5f64.ln() / hint.ln()),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba8 = Rgba8::new_opaque(255, 0, 0);
    const GREEN: Rgba8 = Rgba8::new_opaque(0, 255, 0);
    const BLUE: Rgba8 = Rgba8::new_opaque(0, 0, 255);

    fn red_to_blue() -> ColorStops {
        let mut stops = ColorStops::new();
        stops.add_color_stop(0.0, RED, None);
        stops.add_color_stop(1.0, BLUE, None);
        stops
    }

    #[test]
    fn test_empty_ramp_is_transparent() {
        let stops = ColorStops::new();
        assert!(stops.is_empty());
        assert_eq!(stops.resolve(0.5, AlphaMode::Straight), Rgba8::no_color());
        assert_eq!(stops.first_color(), Rgba8::no_color());
    }

    #[test]
    fn test_single_stop_is_constant() {
        let mut stops = ColorStops::new();
        stops.add_color_stop(0.3, GREEN, None);
        stops.set_repeat_length(0.5);
        for p in [-10.0, 0.0, 0.3, 0.9, 42.0] {
            assert_eq!(stops.resolve(p, AlphaMode::Premultiplied), GREEN);
        }
    }

    #[test]
    fn test_two_stop_linear_ramp() {
        let stops = red_to_blue();
        for i in 0..=10 {
            let p = i as f64 / 10.0;
            let expected = Rgba8::from_rgba(&RED.to_rgba().gradient(&BLUE.to_rgba(), p));
            assert_eq!(stops.resolve(p, AlphaMode::Straight), expected, "p={p}");
        }
        assert_eq!(
            stops.resolve(0.5, AlphaMode::Straight),
            Rgba8::new(128, 0, 128, 255)
        );
    }

    #[test]
    fn test_clamp_outside_stop_range() {
        let mut stops = ColorStops::new();
        stops.add_color_stop(0.25, RED, None);
        stops.add_color_stop(0.5, GREEN, None);
        stops.add_color_stop(0.75, BLUE, None);
        for p in [-5.0, 0.0, 0.1, 0.2499] {
            assert_eq!(stops.resolve(p, AlphaMode::Straight), RED);
        }
        for p in [0.7501, 1.0, 3.0, 1e9] {
            assert_eq!(stops.resolve(p, AlphaMode::Straight), BLUE);
        }
    }

    #[test]
    fn test_repeat_is_periodic() {
        let mut stops = red_to_blue();
        stops.set_repeat_length(0.5);
        for p in [0.0, 0.125, 0.25, 0.375] {
            let base = stops.resolve(p, AlphaMode::Straight);
            assert_eq!(stops.resolve(p + 0.5, AlphaMode::Straight), base, "p={p}");
            assert_eq!(stops.resolve(p + 1.0, AlphaMode::Straight), base, "p={p}");
            assert_eq!(stops.resolve(p - 0.5, AlphaMode::Straight), base, "p={p}");
        }
        // A quarter period into the ramp is a quarter of the way to blue.
        assert_eq!(
            stops.resolve(0.75, AlphaMode::Straight),
            stops.resolve(0.25, AlphaMode::Straight)
        );
    }

    #[test]
    fn test_repeat_anchors_on_first_stop() {
        let mut stops = ColorStops::new();
        stops.add_color_stop(0.25, RED, None);
        stops.add_color_stop(0.75, BLUE, None);
        stops.set_repeat_length(0.5);
        for p in [0.25, 0.75, -0.25, 1.25] {
            assert_eq!(stops.resolve(p, AlphaMode::Straight), RED, "p={p}");
        }
        assert_eq!(
            stops.resolve(1.0, AlphaMode::Straight),
            stops.resolve(0.5, AlphaMode::Straight)
        );
    }

    #[test]
    fn test_non_positive_repeat_length_is_ignored() {
        let mut stops = red_to_blue();
        stops.set_repeat_length(0.0);
        assert_eq!(stops.resolve(2.0, AlphaMode::Straight), BLUE);
        stops.set_repeat_length(f64::NAN);
        assert_eq!(stops.resolve(-2.0, AlphaMode::Straight), RED);
    }

    #[test]
    fn test_sort_invariant() {
        let mut stops = ColorStops::new();
        for (p, c) in [(0.9, RED), (0.1, GREEN), (0.5, BLUE), (-0.2, RED), (0.5, GREEN)] {
            stops.add_color_stop(p, c, None);
        }
        let positions: Vec<f64> = stops.stops().iter().map(|s| s.position).collect();
        assert!(positions.windows(2).all(|w| w[0] <= w[1]), "{positions:?}");
        // Equal positions keep insertion order.
        assert_eq!(stops.stops()[2].color, BLUE);
        assert_eq!(stops.stops()[3].color, GREEN);
    }

    #[test]
    fn test_hard_stop() {
        let mut stops = ColorStops::new();
        stops.add_color_stop(0.0, RED, None);
        stops.add_color_stop(0.5, RED, None);
        stops.add_color_stop(0.5, BLUE, None);
        stops.add_color_stop(1.0, BLUE, None);
        assert_eq!(stops.resolve(0.49, AlphaMode::Straight), RED);
        assert_eq!(stops.resolve(0.5, AlphaMode::Straight), BLUE);
        assert_eq!(stops.resolve(0.51, AlphaMode::Straight), BLUE);
    }

    #[test]
    fn test_presorted_insertion_without_sort() {
        let mut stops = ColorStops::new();
        stops.add_stop(ColorStop::new(0.0, RED), false);
        stops.add_stop(ColorStop::new(1.0, BLUE), false);
        assert_eq!(stops, red_to_blue());
    }

    #[test]
    fn test_false_sortedness_claim_does_not_panic() {
        let mut stops = ColorStops::new();
        stops.add_stop(ColorStop::new(1.0, BLUE), false);
        stops.add_stop(ColorStop::new(0.0, RED), false);
        stops.add_stop(ColorStop::new(0.5, GREEN), false);
        for i in -4..=14 {
            let _ = stops.resolve(i as f64 / 10.0, AlphaMode::Premultiplied);
        }
    }

    #[test]
    fn test_hint_at_midpoint_is_linear() {
        let mut stops = ColorStops::new();
        stops.add_color_stop(0.0, RED, None);
        stops.add_color_stop(1.0, BLUE, Some(0.5));
        let linear = red_to_blue();
        for i in 0..=8 {
            let p = i as f64 / 8.0;
            assert_eq!(
                stops.resolve(p, AlphaMode::Straight),
                linear.resolve(p, AlphaMode::Straight)
            );
        }
    }

    #[test]
    fn test_hint_moves_the_midpoint() {
        let mut stops = ColorStops::new();
        stops.add_color_stop(0.0, RED, None);
        stops.add_color_stop(1.0, BLUE, Some(0.2));
        // The 50% blend sits at the hint.
        let at_hint = stops.resolve(0.2, AlphaMode::Straight);
        assert!((at_hint.r as i32 - 128).abs() <= 1, "{at_hint:?}");
        assert!((at_hint.b as i32 - 128).abs() <= 1, "{at_hint:?}");
        // Endpoints are unchanged.
        assert_eq!(stops.resolve(0.0, AlphaMode::Straight), RED);
        assert_eq!(stops.resolve(1.0, AlphaMode::Straight), BLUE);
        // Halfway along, the ramp is already mostly blue.
        let half = stops.resolve(0.5, AlphaMode::Straight);
        assert!(half.b > 180 && half.r < 70, "{half:?}");
    }

    #[test]
    fn test_hint_is_relative_to_its_segment() {
        let mut stops = ColorStops::new();
        stops.add_stop(ColorStop::new(0.5, RED), false);
        stops.add_stop(ColorStop::new(1.0, BLUE).with_transition_hint(0.5), false);
        assert_eq!(
            stops.resolve(0.75, AlphaMode::Straight),
            Rgba8::new(128, 0, 128, 255)
        );
    }

    #[test]
    fn test_degenerate_hints() {
        let mut early = ColorStops::new();
        early.add_color_stop(0.0, RED, None);
        early.add_color_stop(1.0, BLUE, Some(0.0));
        assert_eq!(early.resolve(0.1, AlphaMode::Straight), BLUE);

        let mut late = ColorStops::new();
        late.add_color_stop(0.0, RED, None);
        late.add_color_stop(1.0, BLUE, Some(1.0));
        assert_eq!(late.resolve(0.9, AlphaMode::Straight), RED);
    }

    #[test]
    fn test_non_finite_position_is_transparent() {
        let stops = red_to_blue();
        assert_eq!(stops.resolve(f64::NAN, AlphaMode::Straight), Rgba8::no_color());
        assert_eq!(
            stops.resolve(f64::INFINITY, AlphaMode::Straight),
            Rgba8::no_color()
        );
    }

    #[test]
    fn test_premultiplied_ramp() {
        let mut stops = ColorStops::new();
        stops.add_color_stop(0.0, RED, None);
        stops.add_color_stop(1.0, BLUE.with_alpha(0), None);
        assert_eq!(
            stops.resolve(0.5, AlphaMode::Premultiplied),
            Rgba8::new(255, 0, 0, 128)
        );
        assert_eq!(
            stops.resolve(0.5, AlphaMode::Straight),
            Rgba8::new(128, 0, 128, 128)
        );
    }

    #[test]
    fn test_collect_sorts() {
        let stops: ColorStops = [ColorStop::new(1.0, BLUE), ColorStop::new(0.0, RED)]
            .into_iter()
            .collect();
        assert_eq!(stops, red_to_blue());
        assert_eq!(stops.first().map(|s| s.color), Some(RED));
        assert_eq!(stops.last().map(|s| s.color), Some(BLUE));
        assert_eq!(stops.len(), 2);
    }
}
