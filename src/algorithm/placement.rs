//! Line placement with spacing and block-aware routing
//!
//! A new cut picks a coordinate that keeps clear of parallel cuts. When the
//! coordinate lands on an already colored block the cut is usually shortened so
//! that it starts or ends at the block instead of crossing it.

use crate::algorithm::config::{BlockEdge, LineSchedule, RouteStyle};
use crate::geometry::interval::{farther_than, strictly_within, within};
use crate::geometry::line::{Line, Orientation};
use crate::geometry::rectangle::Rectangle;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Draw a coordinate in `[0, extent)` that keeps clear of `existing` ones
///
/// Without a spacing threshold the first draw is accepted. With one, at most
/// `max_attempts` draws are made and `None` is returned if all are too close.
pub fn find_spaced_coordinate<R: Rng>(
    rng: &mut R,
    extent: f64,
    existing: &[f64],
    spacing: Option<f64>,
    max_attempts: usize,
) -> Option<f64> {
    if extent <= 0.0 {
        return None;
    }

    for _ in 0..max_attempts.max(1) {
        let candidate = rng.random_range(0.0..extent);
        let clear = spacing.is_none_or(|min_distance| {
            existing
                .iter()
                .all(|&coordinate| farther_than(coordinate, candidate, min_distance))
        });
        if clear {
            return Some(candidate);
        }
    }

    None
}

/// Colored rectangles that a cut of `orientation` at `coordinate` lands on
///
/// The test measures from the block's origin, not its center, and accepts
/// anything within half the block's extent. `edge` decides whether a cut at
/// exactly half the extent still counts.
pub fn blocks_on_cut(
    orientation: Orientation,
    coordinate: f64,
    edge: BlockEdge,
    colored: &[Rectangle],
) -> Vec<&Rectangle> {
    colored
        .iter()
        .filter(|block| {
            let (origin, extent) = block.across(orientation);
            match edge {
                BlockEdge::Inclusive => within(origin, coordinate, extent / 2.0),
                BlockEdge::Exclusive => strictly_within(origin, coordinate, extent / 2.0),
            }
        })
        .collect()
}

/// Cut through `coordinate` shortened against `block`
///
/// `extent` is the canvas size along the direction the cut runs.
pub fn route_around(
    orientation: Orientation,
    coordinate: f64,
    block: &Rectangle,
    style: RouteStyle,
    extent: f64,
) -> Line {
    let (origin, length) = block.along(orientation);
    match style {
        RouteStyle::AwayFromBlock { gap } => {
            if origin < extent / 2.0 {
                Line::along(orientation, coordinate, origin + gap, extent)
            } else {
                Line::along(orientation, coordinate, 0.0, origin - gap)
            }
        }
        RouteStyle::AlongBlock => Line::along(orientation, coordinate, origin, origin + length),
    }
}

/// Canvas extents a cut of some orientation is positioned in and runs along
#[derive(Debug, Clone, Copy)]
pub struct PlacementExtent {
    /// Range the cut's fixed coordinate is drawn from
    pub across: f64,
    /// Length of a full-span cut
    pub along: f64,
}

/// Choose a new cut of `orientation`
///
/// Returns `None` when no coordinate clear of `parallel` was found within
/// `max_attempts` draws. Otherwise returns a routed cut if the coordinate lands
/// on a colored block and the routing draw succeeds, or a full-span cut.
pub fn place_line<R: Rng>(
    rng: &mut R,
    orientation: Orientation,
    schedule: &LineSchedule,
    extent: PlacementExtent,
    parallel: &[Line],
    colored: &[Rectangle],
    max_attempts: usize,
) -> Option<Line> {
    let existing: Vec<f64> = parallel.iter().map(Line::coordinate).collect();
    let coordinate = find_spaced_coordinate(
        rng,
        extent.across,
        &existing,
        schedule.spacing,
        max_attempts,
    )?;

    let blocks = blocks_on_cut(orientation, coordinate, schedule.block_edge, colored);
    if !blocks.is_empty() && rng.random::<f64>() < schedule.route_probability {
        if let Some(block) = blocks.choose(rng) {
            return Some(route_around(
                orientation,
                coordinate,
                block,
                schedule.route,
                extent.along,
            ));
        }
    }

    Some(Line::along(orientation, coordinate, 0.0, extent.along))
}
