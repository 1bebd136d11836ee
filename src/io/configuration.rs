//! Sketch constants and runtime configuration defaults

use crate::geometry::rectangle::Color;

// Canvas geometry
/// Canvas width in pixels
pub const CANVAS_WIDTH: f64 = 800.0;
/// Canvas height in pixels
pub const CANVAS_HEIGHT: f64 = 600.0;
/// Largest accepted canvas side; rendering allocates the full raster
pub const MAX_CANVAS_DIMENSION: f64 = 16384.0;
/// Nominal cut-line thickness used when inferring cells
pub const LINE_THICKNESS: f64 = 3.0;
// Lines are stroked wider than the nominal thickness so cell fills tuck under them
/// Extra stroke width added on top of the nominal thickness when drawing
pub const STROKE_PADDING: f64 = 4.0;

// Colors
/// Canvas background
pub const BACKGROUND: Color = [240, 240, 240, 255];
/// Cut-line stroke color
pub const LINE_COLOR: Color = [0, 0, 0, 255];
/// Fill palette: red, yellow, blue, gray
pub const PALETTE: [Color; 4] = [
    [214, 63, 49, 255],
    [237, 182, 84, 255],
    [8, 53, 112, 255],
    [45, 43, 45, 255],
];

// Timing shared by both presets
/// Frames between successive line attempts on one axis
pub const LINE_PERIOD: u64 = 90;
/// Frame offset of horizontal line attempts within the period
pub const HORIZONTAL_PHASE: u64 = 30;
/// Frame offset of vertical line attempts within the period
pub const VERTICAL_PHASE: u64 = 60;

/// Upper bound on coordinate draws when searching for a well-spaced line
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 50;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default number of frames simulated per composition
pub const DEFAULT_FRAMES: u64 = 900;
/// Default number of compositions per invocation
pub const DEFAULT_COUNT: u64 = 1;

// Output settings
/// Prefix of every output file name
pub const OUTPUT_PREFIX: &str = "composition";
/// Wall-clock duration of one simulated frame (60 fps host)
pub const FRAME_INTERVAL_MS: u32 = 16;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Multiplier applied to the last GIF frame's delay
pub const FINAL_FRAME_HOLD: u32 = 25;
