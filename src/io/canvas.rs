//! Drawing surfaces
//!
//! The sketch only needs three primitives from whatever it draws on, so the
//! session renders through the [`Renderer`] trait. [`RasterCanvas`] implements
//! it on an in-memory RGBA image for PNG and GIF export.

use crate::geometry::line::Line;
use crate::geometry::partition::Bounds;
use crate::geometry::rectangle::{Color, Rectangle};
use image::{Rgba, RgbaImage};

/// Minimal drawing interface used by a session
pub trait Renderer {
    /// Paint the entire surface with `background`
    fn clear(&mut self, background: Color);

    /// Stroke `line` with the given width, centered on the line, square caps
    fn draw_line(&mut self, line: &Line, thickness: f64, color: Color);

    /// Fill the area covered by `rect`
    fn fill_rect(&mut self, rect: &Rectangle, color: Color);
}

/// RGBA raster surface
#[derive(Debug, Clone)]
pub struct RasterCanvas {
    image: RgbaImage,
}

impl RasterCanvas {
    /// Create a transparent surface of the given pixel size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    /// Create a surface covering `bounds`, rounding partial pixels up
    pub fn for_bounds(bounds: Bounds) -> Self {
        Self::new(
            bounds.width.max(0.0).ceil() as u32,
            bounds.height.max(0.0).ceil() as u32,
        )
    }

    /// Surface width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Surface height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Color of the pixel at `(x, y)`, if inside the surface
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Borrow the underlying image
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Take the underlying image
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    // Pixel centers inside [x0, x1) x [y0, y1) are painted
    fn fill_region(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Color) {
        let (col_start, col_end) = Self::pixel_range(x0, x1, self.width());
        let (row_start, row_end) = Self::pixel_range(y0, y1, self.height());
        let pixel = Rgba(color);

        for row in row_start..row_end {
            for col in col_start..col_end {
                self.image.put_pixel(col, row, pixel);
            }
        }
    }

    fn pixel_range(start: f64, end: f64, limit: u32) -> (u32, u32) {
        let clamp = |v: f64| v.round().clamp(0.0, f64::from(limit)) as u32;
        let (low, high) = (clamp(start.min(end)), clamp(start.max(end)));
        (low, high)
    }
}

impl Renderer for RasterCanvas {
    fn clear(&mut self, background: Color) {
        let pixel = Rgba(background);
        for p in self.image.pixels_mut() {
            *p = pixel;
        }
    }

    fn draw_line(&mut self, line: &Line, thickness: f64, color: Color) {
        let half = thickness / 2.0;
        let (start, end) = line.endpoints();
        self.fill_region(
            start.x.min(end.x) - half,
            start.y.min(end.y) - half,
            start.x.max(end.x) + half,
            start.y.max(end.y) + half,
            color,
        );
    }

    fn fill_rect(&mut self, rect: &Rectangle, color: Color) {
        self.fill_region(
            rect.x,
            rect.y,
            rect.x + rect.width,
            rect.y + rect.height,
            color,
        );
    }
}
