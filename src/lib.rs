//! iconforge
//!
//! A small, fully synchronous PWA icon generator. Each icon is a solid
//! `#3b82f6` square with a centered white circle and a checkmark stroked in
//! the background color, rendered onto an in-memory raster surface and
//! encoded to PNG.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use iconforge::{output, render_icon, IconSpec};
//!
//! # fn main() -> iconforge::Result<()> {
//! let spec = IconSpec::default();
//! let icon = render_icon(&spec, 192)?;
//! let path = output::icon_path(Path::new("public"), icon.size);
//! output::write_bytes(&path, &icon.png_data)?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod canvas;
pub mod output;
pub mod render;

use canvas::{Canvas, Rgba};

/// Drawing parameters for one icon.
///
/// The defaults reproduce the reference icon exactly. The fields exist so the
/// geometry lives in one place, not because anything reads them from outside:
/// there is no config file and no environment lookup.
#[derive(Debug, Clone)]
pub struct IconSpec {
    /// Background fill, also used for the checkmark stroke
    pub background: Rgba,
    /// Circle fill
    pub circle_color: Rgba,
    /// Checkmark stroke color
    pub check_color: Rgba,
    /// Circle radius as a fraction of the icon size
    pub circle_radius_ratio: f32,
    /// Stroke width as a fraction of the icon size
    pub stroke_width_ratio: f32,
}

impl Default for IconSpec {
    fn default() -> Self {
        Self {
            background: render::BLUE,
            circle_color: render::WHITE,
            check_color: render::BLUE,
            circle_radius_ratio: render::CIRCLE_RADIUS_RATIO,
            stroke_width_ratio: render::STROKE_WIDTH_RATIO,
        }
    }
}

/// The icon sizes generated by default, in pixels.
pub const DEFAULT_SIZES: [u32; 2] = [192, 512];

/// A rendered, PNG-encoded icon.
#[derive(Debug, Clone)]
pub struct Icon {
    pub size: u32,
    pub png_data: Vec<u8>,
}

/// Render one icon at `size` and encode it to PNG.
///
/// Allocates a fresh surface, applies the fixed drawing script, and encodes.
/// Surfaces are never reused across sizes.
pub fn render_icon(spec: &IconSpec, size: u32) -> Result<Icon> {
    let mut canvas = Canvas::new(size)?;
    render::draw_icon(&mut canvas, spec);
    let png_data = canvas.encode_png()?;
    Ok(Icon { size, png_data })
}
