//! Cell inference from the current set of cut-lines
//!
//! Every cut is treated as if it spans the whole canvas, even when the drawn
//! segment stops at a colored block. The resulting grid can therefore contain
//! cells crossed by partial lines; the sketch accepts that approximation.

use crate::geometry::interval::{cell_span, cut_positions};
use crate::geometry::line::Line;
use crate::geometry::rectangle::Rectangle;

/// Canvas extent; the origin is always `(0, 0)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Canvas width
    pub width: f64,
    /// Canvas height
    pub height: f64,
}

impl Bounds {
    /// Create canvas bounds
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Computes the grid of empty cells delimited by cut-lines
#[derive(Debug, Clone, Copy)]
pub struct GridPartitioner {
    bounds: Bounds,
    line_thickness: f64,
}

impl GridPartitioner {
    /// Create a partitioner for a canvas and nominal line thickness
    pub const fn new(bounds: Bounds, line_thickness: f64) -> Self {
        Self {
            bounds,
            line_thickness,
        }
    }

    /// Cells induced by the given horizontal and vertical lines
    ///
    /// Output is ordered by column first, then by row within a column.
    pub fn partition(&self, horizontal_lines: &[Line], vertical_lines: &[Line]) -> Vec<Rectangle> {
        self.partition_coordinates(
            vertical_lines.iter().map(Line::coordinate),
            horizontal_lines.iter().map(Line::coordinate),
        )
    }

    /// Cells induced by raw cut coordinates
    ///
    /// `xs` are vertical cut positions and `ys` horizontal ones. The canvas
    /// edges are always added, so an empty input yields the whole canvas.
    pub fn partition_coordinates(
        &self,
        xs: impl IntoIterator<Item = f64>,
        ys: impl IntoIterator<Item = f64>,
    ) -> Vec<Rectangle> {
        let xs = cut_positions(xs, self.bounds.width);
        let ys = cut_positions(ys, self.bounds.height);

        let mut cells =
            Vec::with_capacity(xs.len().saturating_sub(1) * ys.len().saturating_sub(1));

        for column in xs.windows(2) {
            let &[left, right] = column else { continue };
            let horizontal = cell_span(left, right, self.bounds.width, self.line_thickness);

            for row in ys.windows(2) {
                let &[top, bottom] = row else { continue };
                let vertical = cell_span(top, bottom, self.bounds.height, self.line_thickness);
                cells.push(Rectangle::from_spans(horizontal, vertical));
            }
        }

        cells
    }
}
