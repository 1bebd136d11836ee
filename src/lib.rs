//! Generative cut-line compositions
//!
//! A canvas gains horizontal and vertical cut-lines over time. The cells those
//! lines delimit are inferred from the line coordinates, and now and then one
//! cell is filled with a color from a small palette. Everything is driven by a
//! seeded per-frame tick, so a seed and a preset fully determine a composition.

#![forbid(unsafe_code)]

/// Session driver, placement and selection heuristics, presets
pub mod algorithm;
/// Lines, rectangles, intervals and cell inference
pub mod geometry;
/// Rendering surfaces, export, progress display and the command line
pub mod io;

pub use io::error::{Result, SketchError};
