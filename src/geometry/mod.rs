//! Plane geometry for the sketch
//!
//! This module contains:
//! - One-dimensional interval arithmetic along a canvas axis
//! - Cut-line and rectangle primitives
//! - Inference of the cell grid delimited by the current cut-lines

/// Interval arithmetic along a single axis
pub mod interval;
/// Cut-line primitives
pub mod line;
/// Cell inference from cut-line coordinates
pub mod partition;
/// Axis-aligned rectangles and colors
pub mod rectangle;

pub use line::{Line, Orientation, Point};
pub use partition::{Bounds, GridPartitioner};
pub use rectangle::{Color, Rectangle};
