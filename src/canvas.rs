//! Raster surface abstraction over tiny-skia.
//!
//! The renderer only needs three primitives (rect fill, circle fill, stroked
//! polyline) plus PNG encode, so everything else the backend offers stays
//! hidden behind this type. Swapping the rasterizer means touching this file
//! only.

use log::debug;
use tiny_skia::{
    FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform,
};

use crate::error::{Error, Result};

/// An RGBA color with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// A square, mutable raster surface.
///
/// Created per icon size, drawn onto in place, encoded once, then dropped.
/// Surfaces are never shared between invocations.
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Allocate a transparent `size`x`size` surface.
    pub fn new(size: u32) -> Result<Self> {
        if size == 0 {
            return Err(Error::Allocation(size));
        }
        let pixmap = Pixmap::new(size, size).ok_or(Error::Allocation(size))?;
        debug!("allocated {size}x{size} surface");
        Ok(Self { pixmap })
    }

    /// Decode a PNG back into a surface. The image must be square.
    pub fn from_png(data: &[u8]) -> Result<Self> {
        let pixmap = Pixmap::decode_png(data).map_err(|e| Error::Encoding(e.to_string()))?;
        if pixmap.width() != pixmap.height() {
            return Err(Error::Encoding(format!(
                "expected a square image, got {}x{}",
                pixmap.width(),
                pixmap.height()
            )));
        }
        Ok(Self { pixmap })
    }

    /// Side length in pixels.
    pub fn size(&self) -> u32 {
        self.pixmap.width()
    }

    /// Fill an axis-aligned rectangle. Degenerate geometry is a no-op.
    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
        let Some(rect) = Rect::from_xywh(x, y, w, h) else {
            debug!("skipping degenerate rect {w}x{h} at ({x}, {y})");
            return;
        };
        self.pixmap
            .fill_rect(rect, &paint(color), Transform::identity(), None);
    }

    /// Fill a circle centered at (`cx`, `cy`). Non-positive radii are a no-op.
    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgba) {
        let Some(path) = PathBuilder::from_circle(cx, cy, radius) else {
            debug!("skipping degenerate circle of radius {radius}");
            return;
        };
        self.pixmap.fill_path(
            &path,
            &paint(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    /// Stroke the open polyline through `points` with round caps and joins.
    /// Fewer than two points is a no-op.
    pub fn stroke_polyline(&mut self, points: &[(f32, f32)], width: f32, color: Rgba) {
        let [(x0, y0), rest @ ..] = points else {
            return;
        };
        if rest.is_empty() {
            return;
        }
        let mut pb = PathBuilder::new();
        pb.move_to(*x0, *y0);
        for &(x, y) in rest {
            pb.line_to(x, y);
        }
        let Some(path) = pb.finish() else {
            return;
        };
        let stroke = Stroke {
            width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &paint(color), &stroke, Transform::identity(), None);
    }

    /// Read back one pixel as straight-alpha RGBA. `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Rgba::new(c.red(), c.green(), c.blue(), c.alpha()))
    }

    /// Serialize the surface to PNG bytes (RGBA, default compression, no
    /// interlacing).
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        self.pixmap
            .encode_png()
            .map_err(|e| Error::Encoding(e.to_string()))
    }
}

fn paint(color: Rgba) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_size() {
        assert!(matches!(Canvas::new(0), Err(Error::Allocation(0))));
    }

    #[test]
    fn allocates_requested_size() {
        let canvas = Canvas::new(64).unwrap();
        assert_eq!(canvas.size(), 64);
    }

    #[test]
    fn fill_rect_sets_pixels() {
        let red = Rgba::new(255, 0, 0, 255);
        let mut canvas = Canvas::new(16).unwrap();
        canvas.fill_rect(0.0, 0.0, 16.0, 16.0, red);
        assert_eq!(canvas.pixel(0, 0), Some(red));
        assert_eq!(canvas.pixel(15, 15), Some(red));
    }

    #[test]
    fn pixel_out_of_bounds_is_none() {
        let canvas = Canvas::new(8).unwrap();
        assert_eq!(canvas.pixel(8, 0), None);
    }

    #[test]
    fn degenerate_primitives_are_noops() {
        let red = Rgba::new(255, 0, 0, 255);
        let mut canvas = Canvas::new(8).unwrap();
        canvas.fill_rect(0.0, 0.0, -1.0, 4.0, red);
        canvas.fill_circle(4.0, 4.0, 0.0, red);
        canvas.stroke_polyline(&[(4.0, 4.0)], 2.0, red);
        // untouched surface stays transparent
        assert_eq!(canvas.pixel(4, 4), Some(Rgba::new(0, 0, 0, 0)));
    }

    #[test]
    fn png_round_trip_preserves_pixels() {
        let blue = Rgba::new(0, 0, 255, 255);
        let mut canvas = Canvas::new(10).unwrap();
        canvas.fill_rect(0.0, 0.0, 10.0, 10.0, blue);
        let png = canvas.encode_png().unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = Canvas::from_png(&png).unwrap();
        assert_eq!(decoded.size(), 10);
        assert_eq!(decoded.pixel(5, 5), Some(blue));
    }
}
