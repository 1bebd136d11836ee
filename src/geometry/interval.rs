//! One-dimensional spans between cut coordinates
//!
//! Every cell inferred from the cut-lines is the product of one horizontal and
//! one vertical span, so all of the inset arithmetic lives here.

/// Gap kept between a cell and the stroke of an interior cut-line
pub const CUT_MARGIN: f64 = 1.0;

/// Half-open span `[start, start + length)` along one canvas axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    /// First coordinate covered by the span
    pub start: f64,
    /// Extent of the span, never negative
    pub length: f64,
}

impl Span {
    /// Create a span, clamping negative lengths to zero
    pub fn new(start: f64, length: f64) -> Self {
        Self {
            start,
            length: length.max(0.0),
        }
    }
}

/// Span of the cell lying between two adjacent cut coordinates
///
/// A canvas edge contributes no inset. An interior cut insets the near side by
/// half the line thickness plus [`CUT_MARGIN`] and the far side by the full
/// thickness. A zero thickness disables the margin so cells tile the axis.
pub fn cell_span(low: f64, high: f64, bound: f64, thickness: f64) -> Span {
    let inset = if thickness > 0.0 {
        thickness / 2.0 + CUT_MARGIN
    } else {
        0.0
    };

    let start = if low <= 0.0 { 0.0 } else { low + inset };
    let length = if high >= bound {
        bound - start
    } else {
        high - start - thickness
    };

    Span::new(start, length)
}

/// Sorted, de-duplicated cut positions along an axis, including both edges
///
/// Non-finite coordinates are dropped and the rest are clamped into `[0, bound]`.
pub fn cut_positions(coordinates: impl IntoIterator<Item = f64>, bound: f64) -> Vec<f64> {
    let mut positions: Vec<f64> = [0.0, bound]
        .into_iter()
        .chain(
            coordinates
                .into_iter()
                .filter(|c| c.is_finite())
                .map(|c| c.clamp(0.0, bound)),
        )
        .collect();

    positions.sort_by(f64::total_cmp);
    positions.dedup();
    positions
}

/// True when `a` lies within `tolerance` of `b` (inclusive)
pub fn within(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

/// True when `a` lies strictly closer than `tolerance` to `b`
pub fn strictly_within(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}

/// True when `a` and `b` are more than `distance` apart
pub fn farther_than(a: f64, b: f64, distance: f64) -> bool {
    (a - b).abs() > distance
}
