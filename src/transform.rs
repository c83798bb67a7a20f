//! Coordinate transforms between world, pixel, and normalized device space.

use crate::error::DdaError;
use crate::geom::{NdcPoint, Point, ScreenPoint, SurfaceSize};
use crate::view::{Viewport, validate_surface};

/// Transform constants for one viewport laid out on one surface.
///
/// Rebuilt whenever the viewport or the surface changes. World to NDC goes
/// through the "scaled" frame: world offsets from the viewport center
/// multiplied by the scale, i.e. pixel-equivalent units with Y up. The
/// rasterizer consumes points in that frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    viewport: Viewport,
    surface: SurfaceSize,
    center: Point,
}

impl Transform {
    /// Create a transform for the given viewport and surface.
    pub fn new(viewport: Viewport, surface: SurfaceSize) -> Result<Self, DdaError> {
        validate_surface(surface)?;
        Ok(Self {
            viewport,
            surface,
            center: viewport.center(),
        })
    }

    /// Access the viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Access the surface size.
    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    /// Horizontal NDC divisor in pixels.
    pub fn half_width(&self) -> f64 {
        self.surface.half_width()
    }

    /// Vertical NDC divisor in pixels.
    pub fn half_height(&self) -> f64 {
        self.surface.half_height()
    }

    /// Map a world point to surface pixels.
    pub fn world_to_pixel(&self, point: Point) -> ScreenPoint {
        let scale = self.viewport.scale();
        ScreenPoint::new(
            (point.x - self.viewport.x().min) * scale,
            (self.viewport.y().max - point.y) * scale,
        )
    }

    /// Map surface pixels back to a world point.
    pub fn pixel_to_world(&self, point: ScreenPoint) -> Point {
        let scale = self.viewport.scale();
        Point::new(
            self.viewport.x().min + point.x / scale,
            self.viewport.y().max - point.y / scale,
        )
    }

    /// Map a world point into the center-relative, pixel-equivalent frame.
    pub fn world_to_scaled(&self, point: Point) -> Point {
        let scale = self.viewport.scale();
        Point::new(
            (point.x - self.center.x) * scale,
            (point.y - self.center.y) * scale,
        )
    }

    /// Normalize a pixel-equivalent point by the surface half-dimensions.
    pub fn scaled_to_ndc(&self, point: Point) -> NdcPoint {
        NdcPoint::new(point.x / self.half_width(), point.y / self.half_height())
    }

    /// Map a world point to normalized device coordinates.
    pub fn world_to_ndc(&self, point: Point) -> NdcPoint {
        self.scaled_to_ndc(self.world_to_scaled(point))
    }

    /// Map normalized device coordinates back to a world point.
    pub fn ndc_to_world(&self, point: NdcPoint) -> Point {
        let scale = self.viewport.scale();
        Point::new(
            self.center.x + point.x * self.half_width() / scale,
            self.center.y + point.y * self.half_height() / scale,
        )
    }

    /// Map normalized device coordinates to surface pixels.
    pub fn ndc_to_pixel(&self, point: NdcPoint) -> ScreenPoint {
        ndc_to_pixel(point, self.surface)
    }
}

/// Map normalized device coordinates onto a surface of the given size.
pub fn ndc_to_pixel(point: NdcPoint, surface: SurfaceSize) -> ScreenPoint {
    ScreenPoint::new(
        (point.x + 1.0) * surface.half_width(),
        (1.0 - point.y) * surface.half_height(),
    )
}
