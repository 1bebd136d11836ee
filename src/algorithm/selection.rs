//! Cell selection for coloring
//!
//! A candidate cell is rejected when it shares a row band or a column band
//! with any colored rectangle. Bands are compared origin to origin against half
//! the combined extent, which keeps filled blocks scattered across the canvas
//! rather than testing for true overlap.

use crate::geometry::interval::within;
use crate::geometry::rectangle::{Color, Rectangle};
use rand::Rng;
use rand::seq::IndexedRandom;

/// True when `candidate` shares a column band or a row band with `placed`
pub fn shares_band(candidate: &Rectangle, placed: &Rectangle) -> bool {
    within(
        placed.x,
        candidate.x,
        (placed.width + candidate.width) / 2.0,
    ) || within(
        placed.y,
        candidate.y,
        (placed.height + candidate.height) / 2.0,
    )
}

/// Cells that may be colored given the rectangles colored so far
///
/// Degenerate cells are dropped along with any cell sharing a band with a
/// colored rectangle. Order of the remaining cells is preserved.
pub fn available_cells(cells: &[Rectangle], colored: &[Rectangle]) -> Vec<Rectangle> {
    cells
        .iter()
        .filter(|cell| !cell.is_degenerate())
        .filter(|cell| !colored.iter().any(|placed| shares_band(cell, placed)))
        .copied()
        .collect()
}

/// Pick one available cell uniformly and give it a uniformly chosen palette color
///
/// Returns `None` when no cell survives the filter or the palette is empty.
pub fn select_cell<R: Rng>(
    rng: &mut R,
    cells: &[Rectangle],
    colored: &[Rectangle],
    palette: &[Color],
) -> Option<Rectangle> {
    let available = available_cells(cells, colored);
    let cell = *available.choose(rng)?;
    let color = *palette.choose(rng)?;
    Some(cell.with_color(color))
}
