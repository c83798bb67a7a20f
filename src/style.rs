//! Visual theme for the grid, the rasterized points, and labels.

use crate::render::{Color, LineStyle, MarkerShape, MarkerStyle, TextStyle};

/// Smallest allowed point size in pixels.
pub const MIN_POINT_SIZE: f32 = 1.0;
/// Largest allowed point size in pixels.
pub const MAX_POINT_SIZE: f32 = 50.0;

/// Visual theme for a DDA scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Surface clear color.
    pub background: Color,
    /// Integer grid lines.
    pub grid: LineStyle,
    /// The `x = 0` and `y = 0` grid lines.
    pub axis: LineStyle,
    /// Rasterized sample points.
    pub points: MarkerStyle,
    /// Lattice labels on an axis.
    pub axis_label: TextStyle,
    /// Lattice labels off the axes.
    pub grid_label: TextStyle,
    /// Segment endpoint labels.
    pub endpoint_label: TextStyle,
    /// Cursor readout text.
    pub readout: TextStyle,
    /// Readout and overlay panel fill.
    pub panel: Color,
    /// Error banner text.
    pub error: TextStyle,
}

impl Theme {
    /// Create the default (light) theme.
    pub fn new() -> Self {
        Self::light()
    }

    /// Light background with gray grid and light blue points.
    pub fn light() -> Self {
        Self {
            background: Color::WHITE,
            grid: LineStyle {
                color: Color::from_rgb8(86, 86, 86),
                width: 1.0,
            },
            axis: LineStyle {
                color: Color::from_rgb8(20, 20, 20),
                width: 2.0,
            },
            points: MarkerStyle {
                color: Color::from_rgb8(173, 216, 230),
                size: MIN_POINT_SIZE,
                shape: MarkerShape::Square,
            },
            axis_label: TextStyle {
                color: Color::BLACK,
                size: 11.0,
            },
            grid_label: TextStyle {
                color: Color::from_rgb8(255, 165, 0),
                size: 11.0,
            },
            endpoint_label: TextStyle {
                color: Color::from_rgb8(255, 0, 0),
                size: 12.0,
            },
            readout: TextStyle {
                color: Color::BLACK,
                size: 12.0,
            },
            panel: Color::new(1.0, 1.0, 1.0, 0.85),
            error: TextStyle {
                color: Color::from_rgb8(200, 30, 30),
                size: 13.0,
            },
        }
    }

    /// Dark background variant.
    pub fn dark() -> Self {
        let light = Self::light();
        Self {
            background: Color::from_rgb8(18, 18, 22),
            axis: LineStyle {
                color: Color::from_rgb8(220, 220, 220),
                width: 2.0,
            },
            axis_label: TextStyle {
                color: Color::WHITE,
                size: 11.0,
            },
            readout: TextStyle {
                color: Color::WHITE,
                size: 12.0,
            },
            panel: Color::new(0.05, 0.05, 0.08, 0.85),
            ..light
        }
    }

    /// Set the grid line color.
    pub fn with_grid_color(mut self, color: Color) -> Self {
        self.grid.color = color;
        self
    }

    /// Set the rasterized point color.
    pub fn with_line_color(mut self, color: Color) -> Self {
        self.points.color = color;
        self
    }

    /// Set the point size, clamped to `MIN_POINT_SIZE..=MAX_POINT_SIZE`.
    pub fn with_point_size(mut self, size: f32) -> Self {
        self.set_point_size(size);
        self
    }

    /// Set the point size in place, clamped like [`Self::with_point_size`].
    pub fn set_point_size(&mut self, size: f32) {
        self.points.size = if size.is_finite() {
            size.clamp(MIN_POINT_SIZE, MAX_POINT_SIZE)
        } else {
            MIN_POINT_SIZE
        };
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}
