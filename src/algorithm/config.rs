//! Sketch parameters and the two built-in presets
//!
//! The presets reproduce the two historical variants of the sketch. They
//! differ only in line budgets, spacing, routing and fill cadence, so both are
//! expressed as values of the same [`SketchConfig`].

use crate::geometry::line::Orientation;
use crate::geometry::partition::Bounds;
use crate::geometry::rectangle::Color;
use crate::io::configuration::{
    BACKGROUND, CANVAS_HEIGHT, CANVAS_WIDTH, HORIZONTAL_PHASE, LINE_COLOR, LINE_PERIOD,
    LINE_THICKNESS, MAX_CANVAS_DIMENSION, MAX_PLACEMENT_ATTEMPTS, PALETTE, STROKE_PADDING, VERTICAL_PHASE,
};
use crate::io::error::{Result, invalid_parameter};

/// Which lines count toward a budget or threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineScope {
    /// Horizontal lines only
    Horizontal,
    /// Vertical lines only
    Vertical,
    /// Every line regardless of orientation
    All,
}

impl LineScope {
    /// Count the lines in scope given per-orientation totals
    pub const fn count(self, horizontal: usize, vertical: usize) -> usize {
        match self {
            Self::Horizontal => horizontal,
            Self::Vertical => vertical,
            Self::All => horizontal + vertical,
        }
    }
}

/// How a cut that lands on a colored block is shortened
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RouteStyle {
    /// Run from just past the block's origin to the far canvas edge, or from the
    /// near edge to just before it, depending on which half the block sits in
    AwayFromBlock {
        /// Distance kept from the block's origin
        gap: f64,
    },
    /// Span exactly the block's extent
    AlongBlock,
}

/// Whether a cut at exactly half a block's extent from its origin lands on it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockEdge {
    /// The boundary counts as on the block
    Inclusive,
    /// Only cuts strictly inside the half extent count
    Exclusive,
}

/// When and how lines of one orientation are added
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSchedule {
    /// Frames between attempts
    pub period: u64,
    /// Frame offset of the attempt within the period
    pub phase: u64,
    /// Lines counted against `cap`
    pub cap_scope: LineScope,
    /// Nominal line budget
    pub cap: usize,
    /// Budget is drawn uniformly from `cap - cap_jitter..=cap + cap_jitter` per session
    pub cap_jitter: usize,
    /// Minimum distance to existing parallel lines, `None` to allow any position
    pub spacing: Option<f64>,
    /// Chance of routing around a block when the cut lands on one
    pub route_probability: f64,
    /// Routing style used when routing happens
    pub route: RouteStyle,
    /// Boundary handling when looking for blocks under the cut
    pub block_edge: BlockEdge,
}

/// When a cell gets colored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillSchedule {
    /// Frames between fill attempts
    pub period: u64,
    /// Lines counted against `min_lines`
    pub min_scope: LineScope,
    /// Fill only once at least this many lines exist
    pub min_lines: usize,
    /// Lines counted against `stop_lines`
    pub stop_scope: LineScope,
    /// Fill only while fewer than this many lines exist
    pub stop_lines: usize,
}

/// Complete parameter set for a sketch session
#[derive(Debug, Clone, PartialEq)]
pub struct SketchConfig {
    /// Canvas extent
    pub bounds: Bounds,
    /// Nominal line thickness used for cell inference
    pub line_thickness: f64,
    /// Extra stroke width when drawing lines
    pub stroke_padding: f64,
    /// Horizontal line rules
    pub horizontal: LineSchedule,
    /// Vertical line rules
    pub vertical: LineSchedule,
    /// Cell fill rules
    pub fill: FillSchedule,
    /// Colors a filled cell is drawn from
    pub palette: Vec<Color>,
    /// Canvas background
    pub background: Color,
    /// Line stroke color
    pub line_color: Color,
    /// Coordinate draws allowed per placement before the tick is skipped
    pub max_placement_attempts: usize,
}

/// Built-in parameter sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Preset {
    /// Separate horizontal and vertical budgets, frequent fills, lines that
    /// stop short of a block and run to the far edge
    #[default]
    Split,
    /// One budget shared by both orientations, tighter spacing, slower fills,
    /// lines that span exactly the block they land on
    Shared,
}

impl Preset {
    /// Parameter set for this preset
    pub fn config(self) -> SketchConfig {
        match self {
            Self::Split => SketchConfig::split(),
            Self::Shared => SketchConfig::shared(),
        }
    }
}

impl SketchConfig {
    /// Separate per-axis budgets of five lines, horizontal budget jittered by two
    pub fn split() -> Self {
        let route = RouteStyle::AwayFromBlock { gap: 2.0 };
        Self {
            horizontal: LineSchedule {
                period: LINE_PERIOD,
                phase: HORIZONTAL_PHASE,
                cap_scope: LineScope::Horizontal,
                cap: 5,
                cap_jitter: 2,
                spacing: None,
                route_probability: 0.9,
                route,
                block_edge: BlockEdge::Exclusive,
            },
            vertical: LineSchedule {
                period: LINE_PERIOD,
                phase: VERTICAL_PHASE,
                cap_scope: LineScope::Vertical,
                cap: 5,
                cap_jitter: 0,
                spacing: Some(40.0),
                route_probability: 0.9,
                route,
                block_edge: BlockEdge::Inclusive,
            },
            fill: FillSchedule {
                period: 13,
                min_scope: LineScope::Vertical,
                min_lines: 2,
                stop_scope: LineScope::Horizontal,
                stop_lines: 5,
            },
            ..Self::base()
        }
    }

    /// One budget of eight lines shared by both orientations
    pub fn shared() -> Self {
        let schedule = LineSchedule {
            period: LINE_PERIOD,
            phase: HORIZONTAL_PHASE,
            cap_scope: LineScope::All,
            cap: 8,
            cap_jitter: 0,
            spacing: Some(20.0),
            route_probability: 0.9,
            route: RouteStyle::AlongBlock,
            block_edge: BlockEdge::Inclusive,
        };
        Self {
            horizontal: schedule,
            vertical: LineSchedule {
                phase: VERTICAL_PHASE,
                route_probability: 0.5,
                ..schedule
            },
            fill: FillSchedule {
                period: 25,
                min_scope: LineScope::All,
                min_lines: 4,
                stop_scope: LineScope::All,
                stop_lines: 8,
            },
            ..Self::base()
        }
    }

    // Canvas, colors and limits common to both presets
    fn base() -> Self {
        let idle = LineSchedule {
            period: LINE_PERIOD,
            phase: 0,
            cap_scope: LineScope::All,
            cap: 0,
            cap_jitter: 0,
            spacing: None,
            route_probability: 0.0,
            route: RouteStyle::AlongBlock,
            block_edge: BlockEdge::Inclusive,
        };
        Self {
            bounds: Bounds::new(CANVAS_WIDTH, CANVAS_HEIGHT),
            line_thickness: LINE_THICKNESS,
            stroke_padding: STROKE_PADDING,
            horizontal: idle,
            vertical: idle,
            fill: FillSchedule {
                period: 1,
                min_scope: LineScope::All,
                min_lines: 0,
                stop_scope: LineScope::All,
                stop_lines: 0,
            },
            palette: PALETTE.to_vec(),
            background: BACKGROUND,
            line_color: LINE_COLOR,
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }

    /// Rules for lines of the given orientation
    pub const fn schedule(&self, orientation: Orientation) -> &LineSchedule {
        match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        }
    }

    /// Canvas extent along the axis a cut of `orientation` is positioned on
    pub const fn extent_across(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.bounds.height,
            Orientation::Vertical => self.bounds.width,
        }
    }

    /// Canvas extent along the axis a cut of `orientation` runs on
    pub const fn extent_along(&self, orientation: Orientation) -> f64 {
        self.extent_across(orientation.perpendicular())
    }

    /// Stroke width used when drawing lines
    pub fn stroke_width(&self) -> f64 {
        self.line_thickness + self.stroke_padding
    }

    /// Check that every parameter is usable
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The canvas bounds are not finite and positive, or exceed
    ///   [`MAX_CANVAS_DIMENSION`]
    /// - Line thickness or stroke padding is negative
    /// - A period is zero or a phase is not smaller than its period
    /// - A cap jitter is larger than its cap
    /// - A routing probability lies outside `[0, 1]`
    /// - A spacing threshold is negative
    /// - The palette is empty or no placement attempts are allowed
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [
            ("bounds.width", self.bounds.width),
            ("bounds.height", self.bounds.height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &"must be finite and positive",
                ));
            }
            if value > MAX_CANVAS_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must not exceed {MAX_CANVAS_DIMENSION} pixels"),
                ));
            }
        }

        for (parameter, value) in [
            ("line_thickness", self.line_thickness),
            ("stroke_padding", self.stroke_padding),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &"must be finite and non-negative",
                ));
            }
        }

        Self::validate_schedule("horizontal", &self.horizontal)?;
        Self::validate_schedule("vertical", &self.vertical)?;

        if self.fill.period == 0 {
            return Err(invalid_parameter("fill.period", &0, &"must be at least 1"));
        }
        if self.palette.is_empty() {
            return Err(invalid_parameter(
                "palette",
                &"[]",
                &"at least one fill color is required",
            ));
        }
        if self.max_placement_attempts == 0 {
            return Err(invalid_parameter(
                "max_placement_attempts",
                &0,
                &"must be at least 1",
            ));
        }

        Ok(())
    }

    fn validate_schedule(parameter: &'static str, schedule: &LineSchedule) -> Result<()> {
        if schedule.period == 0 {
            return Err(invalid_parameter(parameter, &0, &"period must be at least 1"));
        }
        if schedule.phase >= schedule.period {
            return Err(invalid_parameter(
                parameter,
                &schedule.phase,
                &format!("phase must be smaller than the period {}", schedule.period),
            ));
        }
        if schedule.cap_jitter > schedule.cap {
            return Err(invalid_parameter(
                parameter,
                &schedule.cap_jitter,
                &format!("cap jitter must not exceed the cap {}", schedule.cap),
            ));
        }
        if !(0.0..=1.0).contains(&schedule.route_probability) {
            return Err(invalid_parameter(
                parameter,
                &schedule.route_probability,
                &"route probability must lie in [0, 1]",
            ));
        }
        if let Some(spacing) = schedule.spacing {
            if !spacing.is_finite() || spacing < 0.0 {
                return Err(invalid_parameter(
                    parameter,
                    &spacing,
                    &"spacing must be finite and non-negative",
                ));
            }
        }
        Ok(())
    }
}

impl Default for SketchConfig {
    fn default() -> Self {
        Preset::default().config()
    }
}
