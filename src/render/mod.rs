//! Rendering primitives and the scene-to-command builder.
//!
//! These types are backend-agnostic and are used by render backends (such as the
//! GPUI backend) to describe how a scene frame should be drawn.

use crate::geom::{NdcPoint, ScreenPoint, ScreenRect};
use crate::labels::{CoordinateLabel, LabelKind};
use crate::scene::SceneFrame;
use crate::style::Theme;
use crate::transform::ndc_to_pixel;

/// RGBA color in linear space.
///
/// All components are expected to be in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from 8-bit channels.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
}

/// Line stroke styling.
///
/// The width is expressed in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Marker shape for sample points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerShape {
    /// Circle marker.
    Circle,
    /// Square marker, matching hardware point sprites.
    Square,
}

/// Marker styling for sample points.
///
/// Marker sizes are expressed in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    /// Marker color.
    pub color: Color,
    /// Marker size in pixels.
    pub size: f32,
    /// Marker shape.
    pub shape: MarkerShape,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            size: 1.0,
            shape: MarkerShape::Square,
        }
    }
}

/// Rectangle styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectStyle {
    /// Fill color.
    pub fill: Color,
    /// Stroke color.
    pub stroke: Color,
    /// Stroke width.
    pub stroke_width: f32,
}

impl Default for RectStyle {
    fn default() -> Self {
        Self {
            fill: Color::new(0.0, 0.0, 0.0, 0.0),
            stroke: Color::BLACK,
            stroke_width: 1.0,
        }
    }
}

/// Text styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Text color.
    pub color: Color,
    /// Font size in pixels.
    pub size: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            size: 12.0,
        }
    }
}

/// A line segment in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// Segment start.
    pub start: ScreenPoint,
    /// Segment end.
    pub end: ScreenPoint,
}

impl LineSegment {
    /// Create a new line segment.
    pub fn new(start: ScreenPoint, end: ScreenPoint) -> Self {
        Self { start, end }
    }
}

/// Render command list.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Start clipping to a rectangle.
    ClipRect(ScreenRect),
    /// End clipping.
    ClipEnd,
    /// Draw line segments.
    LineSegments {
        /// Segments to draw.
        segments: Vec<LineSegment>,
        /// Styling for the segments.
        style: LineStyle,
    },
    /// Draw sample points.
    Points {
        /// Points to draw.
        points: Vec<ScreenPoint>,
        /// Marker styling.
        style: MarkerStyle,
    },
    /// Draw a rectangle.
    Rect {
        /// Rectangle bounds.
        rect: ScreenRect,
        /// Rectangle styling.
        style: RectStyle,
    },
    /// Draw text.
    Text {
        /// Text position.
        position: ScreenPoint,
        /// Text content.
        text: String,
        /// Text styling.
        style: TextStyle,
    },
}

/// Aggregated render commands.
#[derive(Debug, Default, Clone)]
pub struct RenderList {
    commands: Vec<RenderCommand>,
}

impl RenderList {
    /// Create an empty render list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Access all render commands.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }
}

/// Append the commands that draw a scene frame into `rect`.
///
/// Grid lines and samples are mapped from NDC into the rectangle; labels are
/// already in surface pixels and are offset by the rectangle origin.
pub fn build_scene_commands(
    frame: &SceneFrame,
    rect: ScreenRect,
    theme: &Theme,
    out: &mut RenderList,
) {
    out.push(RenderCommand::Rect {
        rect,
        style: RectStyle {
            fill: theme.background,
            stroke: theme.background,
            stroke_width: 0.0,
        },
    });
    out.push(RenderCommand::ClipRect(rect));

    let mut grid = Vec::new();
    let mut axes = Vec::new();
    for line in frame.grid.lines() {
        let segment = LineSegment::new(ndc_in_rect(line.start, rect), ndc_in_rect(line.end, rect));
        if line.is_origin_axis() {
            axes.push(segment);
        } else {
            grid.push(segment);
        }
    }
    if !grid.is_empty() {
        out.push(RenderCommand::LineSegments {
            segments: grid,
            style: theme.grid,
        });
    }
    if !axes.is_empty() {
        out.push(RenderCommand::LineSegments {
            segments: axes,
            style: theme.axis,
        });
    }

    let points: Vec<ScreenPoint> = frame
        .raster
        .points()
        .map(|point| ndc_in_rect(point, rect))
        .collect();
    out.push(RenderCommand::Points {
        points,
        style: theme.points,
    });

    for label in frame.grid_labels.iter().chain(frame.endpoint_labels.iter()) {
        out.push(label_command(label, rect, theme));
    }

    out.push(RenderCommand::ClipEnd);
}

fn label_command(label: &CoordinateLabel, rect: ScreenRect, theme: &Theme) -> RenderCommand {
    let style = match label.kind {
        LabelKind::Axis => theme.axis_label,
        LabelKind::Grid => theme.grid_label,
        LabelKind::Endpoint => theme.endpoint_label,
    };
    RenderCommand::Text {
        position: ScreenPoint::new(rect.min.x + label.position.x, rect.min.y + label.position.y),
        text: label.text.clone(),
        style,
    }
}

fn ndc_in_rect(point: NdcPoint, rect: ScreenRect) -> ScreenPoint {
    let local = ndc_to_pixel(point, rect.size());
    ScreenPoint::new(rect.min.x + local.x, rect.min.y + local.y)
}
