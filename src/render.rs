//! The fixed drawing script: background, circle, checkmark.

use log::debug;

use crate::canvas::{Canvas, Rgba};
use crate::IconSpec;

/// Background and checkmark color (`#3b82f6`).
pub const BLUE: Rgba = Rgba::new(0x3b, 0x82, 0xf6, 0xff);

/// Circle color.
pub const WHITE: Rgba = Rgba::new(0xff, 0xff, 0xff, 0xff);

/// Circle radius as a fraction of the icon size.
pub const CIRCLE_RADIUS_RATIO: f32 = 0.35;

/// Checkmark stroke width as a fraction of the icon size.
pub const STROKE_WIDTH_RATIO: f32 = 0.08;

// Checkmark vertices relative to the circle center, in units of the circle
// radius. Positive y points down.
const CHECKMARK: [(f32, f32); 3] = [(-0.4, 0.0), (-0.1, 0.3), (0.5, -0.4)];

/// Draw the icon onto `canvas`: three operations, always in the same order.
pub fn draw_icon(canvas: &mut Canvas, spec: &IconSpec) {
    let n = canvas.size() as f32;
    let (cx, cy) = (n / 2.0, n / 2.0);
    let radius = n * spec.circle_radius_ratio;

    debug!("drawing {n}x{n} icon, circle radius {radius}");
    canvas.fill_rect(0.0, 0.0, n, n, spec.background);
    canvas.fill_circle(cx, cy, radius, spec.circle_color);
    canvas.stroke_polyline(
        &checkmark_points(cx, cy, radius),
        n * spec.stroke_width_ratio,
        spec.check_color,
    );
}

/// Absolute checkmark vertices for a circle at (`cx`, `cy`) of `radius`.
pub fn checkmark_points(cx: f32, cy: f32, radius: f32) -> [(f32, f32); 3] {
    CHECKMARK.map(|(dx, dy)| (cx + radius * dx, cy + radius * dy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkmark_points_scale_with_radius() {
        let [start, mid, end] = checkmark_points(100.0, 100.0, 10.0);
        assert_eq!(start, (96.0, 100.0));
        assert_eq!(mid, (99.0, 103.0));
        assert_eq!(end, (105.0, 96.0));
    }

    #[test]
    fn drawn_icon_has_expected_key_pixels() {
        let spec = IconSpec::default();
        let mut canvas = Canvas::new(64).unwrap();
        draw_icon(&mut canvas, &spec);

        // corner is outside the circle
        assert_eq!(canvas.pixel(1, 1), Some(BLUE));
        // the circle always covers the center
        assert_eq!(canvas.pixel(32, 32), Some(WHITE));
    }

    #[test]
    fn checkmark_stroke_covers_segment_interior() {
        let spec = IconSpec::default();
        let mut canvas = Canvas::new(64).unwrap();
        draw_icon(&mut canvas, &spec);

        // midpoint of the first segment, well inside the stroke width
        let radius = 64.0 * CIRCLE_RADIUS_RATIO;
        let x = (32.0 - radius * 0.25) as u32;
        let y = (32.0 + radius * 0.15) as u32;
        assert_eq!(canvas.pixel(x, y), Some(BLUE));
    }
}
