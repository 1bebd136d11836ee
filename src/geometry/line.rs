//! Axis-aligned cut-lines

/// Direction a cut-line runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Constant y, runs along the x axis
    Horizontal,
    /// Constant x, runs along the y axis
    Vertical,
}

impl Orientation {
    /// The other orientation
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// Point on the canvas plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Cut-line segment
///
/// The orientation is stored rather than inferred from the endpoints so that a
/// zero-length segment keeps the axis it was placed on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// Direction of the segment
    pub orientation: Orientation,
    /// Fixed coordinate: y for horizontal lines, x for vertical ones
    pub position: f64,
    /// First endpoint along the run
    pub from: f64,
    /// Second endpoint along the run
    pub to: f64,
}

impl Line {
    /// Line of the given orientation at `position`, spanning `from..to` along its run
    pub const fn along(orientation: Orientation, position: f64, from: f64, to: f64) -> Self {
        Self {
            orientation,
            position,
            from,
            to,
        }
    }

    /// Horizontal line at height `y` spanning `x_from..x_to`
    pub const fn horizontal(y: f64, x_from: f64, x_to: f64) -> Self {
        Self::along(Orientation::Horizontal, y, x_from, x_to)
    }

    /// Vertical line at `x` spanning `y_from..y_to`
    pub const fn vertical(x: f64, y_from: f64, y_to: f64) -> Self {
        Self::along(Orientation::Vertical, x, y_from, y_to)
    }

    /// The fixed coordinate of the line
    pub const fn coordinate(&self) -> f64 {
        self.position
    }

    /// Both endpoints on the plane
    pub const fn endpoints(&self) -> (Point, Point) {
        match self.orientation {
            Orientation::Horizontal => (
                Point::new(self.from, self.position),
                Point::new(self.to, self.position),
            ),
            Orientation::Vertical => (
                Point::new(self.position, self.from),
                Point::new(self.position, self.to),
            ),
        }
    }
}
