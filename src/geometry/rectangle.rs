//! Axis-aligned rectangles with an optional fill color

use crate::geometry::interval::Span;
use crate::geometry::line::Orientation;

/// RGBA color, matching the pixel layout of the raster canvas
pub type Color = [u8; 4];

/// Axis-aligned box with an optional fill
///
/// Cells produced by the partitioner carry no color. Once a cell is chosen for
/// filling it is copied with a palette color and never changes again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
    /// Fill color, `None` for inferred cells
    pub color: Option<Color>,
}

impl Rectangle {
    /// Create an uncolored rectangle
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            color: None,
        }
    }

    /// Build the rectangle covering the product of two spans
    pub fn from_spans(horizontal: Span, vertical: Span) -> Self {
        Self::new(
            horizontal.start,
            vertical.start,
            horizontal.length,
            vertical.length,
        )
    }

    /// Copy of this rectangle filled with `color`
    pub const fn with_color(self, color: Color) -> Self {
        Self {
            color: Some(color),
            ..self
        }
    }

    /// True when either extent is zero
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Covered area
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Origin and extent on the axis a cut of `orientation` is fixed along
    ///
    /// A horizontal cut sits at some y, so this returns `(y, height)`.
    pub const fn across(&self, orientation: Orientation) -> (f64, f64) {
        match orientation {
            Orientation::Horizontal => (self.y, self.height),
            Orientation::Vertical => (self.x, self.width),
        }
    }

    /// Origin and extent on the axis a cut of `orientation` runs along
    pub const fn along(&self, orientation: Orientation) -> (f64, f64) {
        self.across(orientation.perpendicular())
    }
}
