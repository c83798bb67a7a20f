//! Viewport model: the visible world rectangle and its pixel scale.

use crate::error::DdaError;
use crate::geom::{Point, ScreenPoint, SurfaceSize};

/// Scale factor applied by one zoom-out step.
pub const ZOOM_OUT_FACTOR: f64 = 0.95;
/// Scale factor applied by one zoom-in step.
pub const ZOOM_IN_FACTOR: f64 = 1.05;
/// Pixels per world unit used when no scale is configured.
pub const DEFAULT_SCALE: f64 = 150.0;

/// Numeric range with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    /// Minimum value.
    pub min: f64,
    /// Maximum value.
    pub max: f64,
}

impl Range {
    /// Create a new range, swapping bounds if needed.
    pub fn new(mut min: f64, mut max: f64) -> Self {
        if min > max {
            std::mem::swap(&mut min, &mut max);
        }
        Self { min, max }
    }

    /// Span of the range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Midpoint of the range.
    pub fn center(&self) -> f64 {
        (self.min + self.max) * 0.5
    }

    /// Check whether both bounds are finite.
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Check whether the range has positive span and finite bounds.
    pub fn is_valid(&self) -> bool {
        self.is_finite() && self.span() > 0.0
    }

    /// Check whether a value lies inside the range.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp a value into the range.
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    /// Shift both bounds by the same offset.
    pub fn shifted(&self, offset: f64) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    fn around(center: f64, half_span: f64) -> Self {
        Self::new(center - half_span, center + half_span)
    }
}

/// Direction of a single wheel zoom step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Shrink the scale, showing more of the world.
    Out,
    /// Grow the scale, showing less of the world.
    In,
}

impl ZoomDirection {
    /// Map a wheel delta to a zoom direction.
    ///
    /// Positive deltas (scrolling down) zoom out. A zero or non-finite delta
    /// produces no zoom.
    pub fn from_wheel_delta(delta_y: f64) -> Option<Self> {
        if !delta_y.is_finite() || delta_y == 0.0 {
            None
        } else if delta_y > 0.0 {
            Some(Self::Out)
        } else {
            Some(Self::In)
        }
    }

    /// The fixed scale multiplier for this direction.
    pub fn factor(self) -> f64 {
        match self {
            Self::Out => ZOOM_OUT_FACTOR,
            Self::In => ZOOM_IN_FACTOR,
        }
    }
}

/// The visible world rectangle plus its pixel scale.
///
/// Bounds and scale are always updated together: for the surface the
/// viewport was last laid out on, `x.span() == width / scale` and
/// `y.span() == height / scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    x: Range,
    y: Range,
    scale: f64,
}

impl Viewport {
    /// Create a viewport centered on the world origin.
    pub fn origin(scale: f64, surface: SurfaceSize) -> Result<Self, DdaError> {
        Self::centered(Point::new(0.0, 0.0), scale, surface)
    }

    /// Create a viewport of the given scale centered on a world point.
    pub fn centered(center: Point, scale: f64, surface: SurfaceSize) -> Result<Self, DdaError> {
        if !center.is_finite() {
            return Err(DdaError::NonFinite("viewport center"));
        }
        validate_scale(scale)?;
        validate_surface(surface)?;
        let x = Range::around(center.x, surface.width / (2.0 * scale));
        let y = Range::around(center.y, surface.height / (2.0 * scale));
        if !x.is_valid() || !y.is_valid() {
            return Err(DdaError::DegenerateViewport);
        }
        Ok(Self { x, y, scale })
    }

    /// Visible X range in world units.
    pub fn x(&self) -> Range {
        self.x
    }

    /// Visible Y range in world units.
    pub fn y(&self) -> Range {
        self.y
    }

    /// Pixels per world unit.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// World point at the middle of the viewport.
    pub fn center(&self) -> Point {
        Point::new(self.x.center(), self.y.center())
    }

    /// Shift the bounds by a pixel-space drag delta.
    ///
    /// Dragging right moves the visible window left; dragging down moves it up.
    pub fn pan_by_pixels(
        &mut self,
        delta: ScreenPoint,
        surface: SurfaceSize,
    ) -> Result<(), DdaError> {
        validate_surface(surface)?;
        if !delta.x.is_finite() || !delta.y.is_finite() {
            return Err(DdaError::NonFinite("pan delta"));
        }
        let dx = delta.x * self.x.span() / surface.width;
        let dy = delta.y * self.y.span() / surface.height;
        self.x = self.x.shifted(-dx);
        self.y = self.y.shifted(dy);
        tracing::debug!(dx, dy, "viewport panned");
        Ok(())
    }

    /// Multiply the scale by `factor`, keeping the center fixed.
    pub fn set_zoom(&mut self, factor: f64, surface: SurfaceSize) -> Result<(), DdaError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(DdaError::InvalidScale(factor));
        }
        self.set_scale(self.scale * factor, surface)
    }

    /// Apply one fixed wheel zoom step.
    pub fn zoom(&mut self, direction: ZoomDirection, surface: SurfaceSize) -> Result<(), DdaError> {
        self.set_zoom(direction.factor(), surface)
    }

    /// Replace the scale, recomputing bounds around the current center.
    pub fn set_scale(&mut self, scale: f64, surface: SurfaceSize) -> Result<(), DdaError> {
        let next = Self::centered(self.center(), scale, surface)?;
        tracing::debug!(from = self.scale, to = next.scale, "viewport zoomed");
        *self = next;
        Ok(())
    }

    /// Re-lay the viewport onto a new surface size, keeping center and scale.
    pub fn resize(&mut self, surface: SurfaceSize) -> Result<(), DdaError> {
        *self = Self::centered(self.center(), self.scale, surface)?;
        tracing::debug!(width = surface.width, height = surface.height, "viewport resized");
        Ok(())
    }

    /// Check the bounds/scale coupling for a surface within a relative tolerance.
    pub fn is_consistent(&self, surface: SurfaceSize, tolerance: f64) -> bool {
        let expected_x = surface.width / self.scale;
        let expected_y = surface.height / self.scale;
        (self.x.span() - expected_x).abs() <= tolerance * expected_x.abs().max(1.0)
            && (self.y.span() - expected_y).abs() <= tolerance * expected_y.abs().max(1.0)
    }
}

fn validate_scale(scale: f64) -> Result<(), DdaError> {
    if scale.is_finite() && scale > 0.0 {
        Ok(())
    } else {
        Err(DdaError::InvalidScale(scale))
    }
}

pub(crate) fn validate_surface(surface: SurfaceSize) -> Result<(), DdaError> {
    if surface.is_valid() {
        Ok(())
    } else {
        Err(DdaError::InvalidSurface {
            width: surface.width,
            height: surface.height,
        })
    }
}

#[cfg(test)]
pub(crate) mod nav {
    use super::*;
    use proptest::prelude::*;

    /// One user navigation step.
    #[derive(Debug, Clone)]
    pub(crate) enum NavOp {
        Zoom(ZoomDirection),
        Pan(f64, f64),
    }

    impl NavOp {
        pub(crate) fn apply(&self, viewport: &mut Viewport, surface: SurfaceSize) {
            match *self {
                Self::Zoom(direction) => viewport.zoom(direction, surface).unwrap(),
                Self::Pan(x, y) => viewport
                    .pan_by_pixels(ScreenPoint::new(x, y), surface)
                    .unwrap(),
            }
        }
    }

    /// Interleaved zoom and pan steps.
    pub(crate) fn nav_op() -> impl Strategy<Value = NavOp> {
        prop_oneof![
            prop_oneof![Just(ZoomDirection::In), Just(ZoomDirection::Out)].prop_map(NavOp::Zoom),
            (-200.0..200.0f64, -200.0..200.0f64).prop_map(|(x, y)| NavOp::Pan(x, y)),
        ]
    }
}
