//! Line-defining user inputs and the world segment they describe.

use std::fmt;

use crate::geom::Point;
use crate::view::{Range, Viewport};

/// How the line is specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineMode {
    /// Two explicit endpoints.
    #[default]
    TwoPoints,
    /// A start point, an angle in degrees, and a radius.
    PointAndTheta,
}

impl LineMode {
    /// Every mode, in menu order.
    pub const ALL: [Self; 2] = [Self::TwoPoints, Self::PointAndTheta];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::TwoPoints => "Two Points",
            Self::PointAndTheta => "Point and Theta",
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::TwoPoints => Self::PointAndTheta,
            Self::PointAndTheta => Self::TwoPoints,
        }
    }
}

impl fmt::Display for LineMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A line segment in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// First endpoint.
    pub start: Point,
    /// Second endpoint.
    pub end: Point,
}

impl Segment {
    /// Create a segment from its endpoints.
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Euclidean length in world units.
    pub fn length(&self) -> f64 {
        (self.end.x - self.start.x).hypot(self.end.y - self.start.y)
    }

    /// Whether both endpoints coincide.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

/// The live line inputs.
///
/// Both parameter sets are kept so switching modes preserves what the user
/// typed in the other one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineParameters {
    /// Active input mode.
    pub mode: LineMode,
    /// First endpoint X (two-point mode).
    pub x1: f64,
    /// First endpoint Y (two-point mode).
    pub y1: f64,
    /// Second endpoint X (two-point mode).
    pub x2: f64,
    /// Second endpoint Y (two-point mode).
    pub y2: f64,
    /// Start X (point-and-theta mode).
    pub x: f64,
    /// Start Y (point-and-theta mode).
    pub y: f64,
    /// Angle in degrees, counter-clockwise from +X.
    pub theta_deg: f64,
    /// Segment length in world units.
    pub radius: f64,
}

impl Default for LineParameters {
    fn default() -> Self {
        Self {
            mode: LineMode::TwoPoints,
            x1: 0.39,
            y1: 0.27,
            x2: 1.16,
            y2: 1.59,
            x: 0.39,
            y: 0.27,
            theta_deg: 59.74,
            radius: 1.5281,
        }
    }
}

impl LineParameters {
    /// Two-point parameters for the given endpoints.
    pub fn two_points(start: Point, end: Point) -> Self {
        Self {
            mode: LineMode::TwoPoints,
            x1: start.x,
            y1: start.y,
            x2: end.x,
            y2: end.y,
            ..Self::default()
        }
    }

    /// Point-and-theta parameters.
    pub fn point_and_theta(start: Point, theta_deg: f64, radius: f64) -> Self {
        Self {
            mode: LineMode::PointAndTheta,
            x: start.x,
            y: start.y,
            theta_deg,
            radius,
            ..Self::default()
        }
    }

    /// Derive the world segment for the active mode.
    pub fn segment(&self) -> Segment {
        match self.mode {
            LineMode::TwoPoints => {
                Segment::new(Point::new(self.x1, self.y1), Point::new(self.x2, self.y2))
            }
            LineMode::PointAndTheta => {
                let theta = normalize_degrees(self.theta_deg).to_radians();
                let start = Point::new(self.x, self.y);
                let end = Point::new(
                    self.x + self.radius * theta.cos(),
                    self.y + self.radius * theta.sin(),
                );
                Segment::new(start, end)
            }
        }
    }

    /// Clamp every input into the given limits.
    pub fn clamped(&self, limits: &InputLimits) -> Self {
        Self {
            mode: self.mode,
            x1: limits.x.clamp(self.x1),
            y1: limits.y.clamp(self.y1),
            x2: limits.x.clamp(self.x2),
            y2: limits.y.clamp(self.y2),
            x: limits.x.clamp(self.x),
            y: limits.y.clamp(self.y),
            theta_deg: limits.theta.clamp(self.theta_deg),
            radius: limits.radius.clamp(self.radius),
        }
    }
}

/// Bring an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Input ranges offered to the user for the current viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLimits {
    /// Allowed X values.
    pub x: Range,
    /// Allowed Y values.
    pub y: Range,
    /// Allowed angle in degrees.
    pub theta: Range,
    /// Allowed radius.
    pub radius: Range,
    /// Slider increment for coordinates and radius.
    pub step: f64,
}

impl InputLimits {
    /// Limits spanning the visible area plus one unit of margin on each side.
    pub fn for_viewport(viewport: &Viewport) -> Self {
        let center = viewport.center();
        let half_x = viewport.x().span() * 0.5 + 1.0;
        let half_y = viewport.y().span() * 0.5 + 1.0;
        Self {
            x: Range::new(center.x - half_x, center.x + half_x),
            y: Range::new(center.y - half_y, center.y + half_y),
            theta: Range::new(0.0, 360.0),
            radius: Range::new(0.0, half_x.hypot(half_y)),
            step: 0.01,
        }
    }
}
