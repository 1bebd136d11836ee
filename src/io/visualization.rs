//! Event capture and GIF generation for sketch animation

use crate::algorithm::config::SketchConfig;
use crate::algorithm::session::{TickEvent, draw_scene};
use crate::geometry::line::Line;
use crate::geometry::rectangle::Rectangle;
use crate::io::canvas::RasterCanvas;
use crate::io::configuration::{FINAL_FRAME_HOLD, FRAME_INTERVAL_MS, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{Result, SketchError};
use image::Frame;
use std::path::Path;

/// Visible change to the scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneChange {
    /// A cut-line appeared
    Line(Line),
    /// A cell was colored
    Fill(Rectangle),
}

/// A scene change and the frame it happened on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapturedEvent {
    /// Session frame of the change
    pub frame: u64,
    /// What changed
    pub change: SceneChange,
}

/// Captures scene changes for visualization
///
/// Only changes are stored. Frames are rebuilt at export time by replaying the
/// changes, one GIF frame per tick that changed something.
pub struct VisualizationCapture {
    pub(crate) events: Vec<CapturedEvent>,
    config: SketchConfig,
}

impl VisualizationCapture {
    /// Create a capture that draws with the colors and canvas of `config`
    pub fn new(config: &SketchConfig) -> Self {
        Self {
            events: Vec::new(),
            config: config.clone(),
        }
    }

    /// Record the visible events of one tick
    pub fn record_tick(&mut self, frame: u64, events: &[TickEvent]) {
        for event in events {
            let change = match *event {
                TickEvent::LineAdded(line) => SceneChange::Line(line),
                TickEvent::CellFilled(rectangle) => SceneChange::Fill(rectangle),
                TickEvent::PlacementStarved(_) => continue,
            };
            self.events.push(CapturedEvent { frame, change });
        }
    }

    /// Returns all recorded events
    pub fn get_events(&self) -> &[CapturedEvent] {
        &self.events
    }

    /// Returns the total number of recorded events
    pub const fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Export the captured changes as an animated GIF
    ///
    /// Each GIF frame is held for the simulated time until the next change,
    /// never shorter than viewers reliably support. The last frame is held for
    /// the remaining ticks up to `total_frames`, and at least
    /// [`FINAL_FRAME_HOLD`] times the viewer minimum.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No scene changes were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, total_frames: u64) -> Result<()> {
        if self.events.is_empty() {
            return Err(SketchError::EmptyRecording);
        }

        let frames = self.generate_frames(total_frames);

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SketchError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| SketchError::FileSystem {
            path: output_path.into(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| SketchError::ImageExport {
                path: output_path.into(),
                source: e,
            })?;

        Ok(())
    }

    fn generate_frames(&self, total_frames: u64) -> Vec<Frame> {
        let mut lines = Vec::new();
        let mut colored = Vec::new();
        let mut frames = Vec::new();

        let mut pending = self.render(&lines, &colored);
        let mut shown_since = 0;

        for group in self.events.chunk_by(|a, b| a.frame == b.frame) {
            let Some(first) = group.first() else { continue };

            frames.push(Self::timed_frame(pending, first.frame - shown_since));

            for event in group {
                match event.change {
                    SceneChange::Line(line) => lines.push(line),
                    SceneChange::Fill(rectangle) => colored.push(rectangle),
                }
            }
            pending = self.render(&lines, &colored);
            shown_since = first.frame;
        }

        // Final frame displays longer for better visibility
        let hold = delay_for_ticks(total_frames.saturating_sub(shown_since))
            .max(VIEWER_MIN_FRAME_DELAY_MS * FINAL_FRAME_HOLD);
        frames.push(Frame::from_parts(
            pending.into_image(),
            0,
            0,
            image::Delay::from_numer_denom_ms(hold, 1),
        ));

        frames
    }

    fn render(&self, lines: &[Line], colored: &[Rectangle]) -> RasterCanvas {
        let mut canvas = RasterCanvas::for_bounds(self.config.bounds);
        draw_scene(&mut canvas, &self.config, lines, colored);
        canvas
    }

    fn timed_frame(canvas: RasterCanvas, ticks: u64) -> Frame {
        Frame::from_parts(
            canvas.into_image(),
            0,
            0,
            image::Delay::from_numer_denom_ms(delay_for_ticks(ticks), 1),
        )
    }
}

/// Display time for a frame that stays unchanged for `ticks` simulated frames
pub fn delay_for_ticks(ticks: u64) -> u32 {
    u32::try_from(ticks)
        .unwrap_or(u32::MAX)
        .saturating_mul(FRAME_INTERVAL_MS)
        .max(VIEWER_MIN_FRAME_DELAY_MS)
}
