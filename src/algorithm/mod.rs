/// Sketch parameters and built-in presets
pub mod config;
/// Line placement with spacing and block-aware routing
pub mod placement;
/// Cell filtering and random coloring
pub mod selection;
/// Session state and the per-frame tick
pub mod session;
