use crate::{
    algorithm::config::{LineScope, LineSchedule, Preset, SketchConfig},
    algorithm::placement::{PlacementExtent, place_line},
    algorithm::selection::select_cell,
    geometry::line::{Line, Orientation},
    geometry::partition::GridPartitioner,
    geometry::rectangle::Rectangle,
    io::canvas::{RasterCanvas, Renderer},
    io::error::{Result, SketchError},
    io::visualization::VisualizationCapture,
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::path::Path;
use tracing::{debug, warn};

/// Something that changed the sketch during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickEvent {
    /// A cut-line was appended
    LineAdded(Line),
    /// A cell was colored and appended to the colored rectangles
    CellFilled(Rectangle),
    /// A line was due but no well-spaced coordinate was found, so the attempt was skipped
    PlacementStarved(Orientation),
}

/// One run of the animation
///
/// Owns the frame counter, the append-only line and colored-rectangle
/// sequences, and the seeded random source. Nothing outside the session holds
/// animation state, so separate sessions never interfere.
pub struct Session {
    config: SketchConfig,
    partitioner: GridPartitioner,
    horizontal_lines: Vec<Line>,
    vertical_lines: Vec<Line>,
    colored: Vec<Rectangle>,
    frame: u64,
    horizontal_cap: usize,
    vertical_cap: usize,
    rng: StdRng,
    /// Optional event capture for animation export
    pub visualization: Option<VisualizationCapture>,
}

impl Session {
    /// Create a session, resolving jittered line budgets from the seed
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn new(config: SketchConfig, seed: u64) -> Result<Self> {
        config.validate()?;

        let mut rng = StdRng::seed_from_u64(seed);
        let horizontal_cap = resolve_cap(&config.horizontal, &mut rng);
        let vertical_cap = resolve_cap(&config.vertical, &mut rng);
        let partitioner = GridPartitioner::new(config.bounds, config.line_thickness);

        Ok(Self {
            config,
            partitioner,
            horizontal_lines: Vec::new(),
            vertical_lines: Vec::new(),
            colored: Vec::new(),
            frame: 0,
            horizontal_cap,
            vertical_cap,
            rng,
            visualization: None,
        })
    }

    /// Create a session from a built-in preset
    ///
    /// # Errors
    ///
    /// Returns an error if the preset configuration fails validation
    pub fn from_preset(preset: Preset, seed: u64) -> Result<Self> {
        Self::new(preset.config(), seed)
    }

    /// Parameters this session runs with
    pub const fn config(&self) -> &SketchConfig {
        &self.config
    }

    /// Number of ticks processed so far
    pub const fn frame(&self) -> u64 {
        self.frame
    }

    /// Horizontal cut-lines in insertion order
    pub fn horizontal_lines(&self) -> &[Line] {
        &self.horizontal_lines
    }

    /// Vertical cut-lines in insertion order
    pub fn vertical_lines(&self) -> &[Line] {
        &self.vertical_lines
    }

    /// Colored rectangles in insertion order
    pub fn colored(&self) -> &[Rectangle] {
        &self.colored
    }

    /// Line budget resolved for `orientation`
    pub const fn line_cap(&self, orientation: Orientation) -> usize {
        match orientation {
            Orientation::Horizontal => self.horizontal_cap,
            Orientation::Vertical => self.vertical_cap,
        }
    }

    /// Lines currently counted by `scope`
    pub fn line_count(&self, scope: LineScope) -> usize {
        scope.count(self.horizontal_lines.len(), self.vertical_lines.len())
    }

    /// Cells delimited by the lines drawn so far
    pub fn cells(&self) -> Vec<Rectangle> {
        self.partitioner
            .partition(&self.horizontal_lines, &self.vertical_lines)
    }

    /// Advance one frame and apply whatever is due on it
    ///
    /// Order within a frame is horizontal line, vertical line, then fill.
    pub fn tick(&mut self) -> Vec<TickEvent> {
        self.frame += 1;
        let mut events = Vec::new();

        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            if self.line_due(orientation) {
                events.push(self.add_line(orientation));
            }
        }

        if self.fill_due() {
            if let Some(rectangle) = self.fill_cell() {
                events.push(TickEvent::CellFilled(rectangle));
            }
        }

        if let Some(ref mut viz) = self.visualization {
            viz.record_tick(self.frame, &events);
        }

        events
    }

    /// Tick `frames` times, returning the number of events produced
    pub fn run(&mut self, frames: u64) -> usize {
        (0..frames).map(|_| self.tick().len()).sum()
    }

    fn line_due(&self, orientation: Orientation) -> bool {
        let schedule = self.config.schedule(orientation);
        self.frame % schedule.period == schedule.phase
            && self.line_count(schedule.cap_scope) < self.line_cap(orientation)
    }

    fn fill_due(&self) -> bool {
        let fill = &self.config.fill;
        self.frame % fill.period == 0
            && self.line_count(fill.min_scope) >= fill.min_lines
            && self.line_count(fill.stop_scope) < fill.stop_lines
    }

    fn add_line(&mut self, orientation: Orientation) -> TickEvent {
        let schedule = *self.config.schedule(orientation);
        let extent = PlacementExtent {
            across: self.config.extent_across(orientation),
            along: self.config.extent_along(orientation),
        };
        let parallel = match orientation {
            Orientation::Horizontal => &self.horizontal_lines,
            Orientation::Vertical => &self.vertical_lines,
        };

        let placed = place_line(
            &mut self.rng,
            orientation,
            &schedule,
            extent,
            parallel,
            &self.colored,
            self.config.max_placement_attempts,
        );

        let Some(line) = placed else {
            warn!(
                frame = self.frame,
                ?orientation,
                attempts = self.config.max_placement_attempts,
                "No well-spaced coordinate found, skipping line"
            );
            return TickEvent::PlacementStarved(orientation);
        };

        debug!(
            frame = self.frame,
            ?orientation,
            position = line.coordinate(),
            from = line.from,
            to = line.to,
            "Cut-line added"
        );
        match orientation {
            Orientation::Horizontal => self.horizontal_lines.push(line),
            Orientation::Vertical => self.vertical_lines.push(line),
        }
        TickEvent::LineAdded(line)
    }

    fn fill_cell(&mut self) -> Option<Rectangle> {
        let cells = self.cells();
        let rectangle = select_cell(
            &mut self.rng,
            &cells,
            &self.colored,
            &self.config.palette,
        )?;

        debug!(
            frame = self.frame,
            x = rectangle.x,
            y = rectangle.y,
            width = rectangle.width,
            height = rectangle.height,
            "Cell filled"
        );
        self.colored.push(rectangle);
        Some(rectangle)
    }

    /// Draw the current state: background, every line, then every colored rectangle
    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        draw_scene(
            renderer,
            &self.config,
            self.horizontal_lines.iter().chain(&self.vertical_lines),
            &self.colored,
        );
    }

    /// Render the current state onto a fresh raster canvas
    pub fn render(&self) -> RasterCanvas {
        let mut canvas = RasterCanvas::for_bounds(self.config.bounds);
        self.draw(&mut canvas);
        canvas
    }

    /// Start capturing events for animation export
    pub fn enable_visualization(&mut self) {
        self.visualization = Some(VisualizationCapture::new(&self.config));
    }

    /// Export the captured animation as a GIF
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Visualization was not enabled
    /// - Nothing was captured
    /// - GIF export fails
    pub fn export_visualization(&self, output_path: &Path) -> Result<()> {
        self.visualization.as_ref().map_or_else(
            || {
                Err(SketchError::InvalidParameter {
                    parameter: "visualization",
                    value: "disabled".to_string(),
                    reason: "Visualization was not enabled for this run".to_string(),
                })
            },
            |viz| viz.export_gif(output_path, self.frame),
        )
    }
}

/// Draw a scene with the colors and stroke width of `config`
pub fn draw_scene<'a, R: Renderer + ?Sized>(
    renderer: &mut R,
    config: &SketchConfig,
    lines: impl IntoIterator<Item = &'a Line>,
    colored: &[Rectangle],
) {
    renderer.clear(config.background);

    let stroke = config.stroke_width();
    for line in lines {
        renderer.draw_line(line, stroke, config.line_color);
    }

    for rectangle in colored {
        if let Some(color) = rectangle.color {
            renderer.fill_rect(rectangle, color);
        }
    }
}

// Budget drawn uniformly from cap - jitter ..= cap + jitter, floored at zero
fn resolve_cap(schedule: &LineSchedule, rng: &mut StdRng) -> usize {
    if schedule.cap_jitter == 0 {
        return schedule.cap;
    }
    let spread = schedule.cap_jitter.saturating_mul(2);
    let offset = rng.random_range(0..=spread);
    schedule
        .cap
        .saturating_add(offset)
        .saturating_sub(schedule.cap_jitter)
}
