//! Input/output: rendering surfaces, file export, progress and the command line

/// Renderer interface and raster implementation
pub mod canvas;
/// Command-line interface and batch orchestration
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG export of finished compositions
pub mod image;
/// Multi-run progress display
pub mod progress;
/// Event capture and animated GIF export
pub mod visualization;
