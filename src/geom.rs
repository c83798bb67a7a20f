//! Geometric primitives shared by the rasterizer and the viewport model.
//!
//! Three coordinate spaces are in play:
//! - world space ([`Point`]), Y up, in grid units;
//! - surface space ([`ScreenPoint`]), Y down, in pixels from the top-left corner;
//! - normalized device space ([`NdcPoint`]), Y up, the visible surface spanning `[-1, 1]`.

/// A point in world (graph) space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X value in world units.
    pub x: f64,
    /// Y value in world units.
    pub y: f64,
}

impl Point {
    /// Create a new world point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Check whether both components are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A point in surface space (pixel coordinates, Y down).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    /// X value in pixels.
    pub x: f64,
    /// Y value in pixels.
    pub y: f64,
}

impl ScreenPoint {
    /// Create a new screen point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A point in normalized device coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NdcPoint {
    /// Horizontal NDC value.
    pub x: f64,
    /// Vertical NDC value.
    pub y: f64,
}

impl NdcPoint {
    /// Create a new NDC point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Check whether both components are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Pixel dimensions of the render surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl SurfaceSize {
    /// Create a new surface size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Check whether the surface has positive, finite area.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Half of the width, the horizontal NDC divisor.
    pub fn half_width(&self) -> f64 {
        self.width * 0.5
    }

    /// Half of the height, the vertical NDC divisor.
    pub fn half_height(&self) -> f64 {
        self.height * 0.5
    }
}

/// A rectangle in screen space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    /// Top-left corner.
    pub min: ScreenPoint,
    /// Bottom-right corner.
    pub max: ScreenPoint,
}

impl ScreenRect {
    /// Create a new screen rectangle from corners.
    pub const fn new(min: ScreenPoint, max: ScreenPoint) -> Self {
        Self { min, max }
    }

    /// Rectangle width in pixels.
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Rectangle height in pixels.
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// The rectangle's dimensions as a surface size.
    pub fn size(&self) -> SurfaceSize {
        SurfaceSize::new(self.width(), self.height())
    }

    /// Check whether the rectangle has positive area.
    pub fn is_valid(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }

    /// Check whether the point lies inside the rectangle (edges inclusive).
    pub fn contains(&self, point: ScreenPoint) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_validity() {
        assert!(SurfaceSize::new(800.0, 600.0).is_valid());
        assert!(!SurfaceSize::new(0.0, 600.0).is_valid());
        assert!(!SurfaceSize::new(800.0, f64::NAN).is_valid());
    }

    #[test]
    fn rect_contains_edges() {
        let rect = ScreenRect::new(ScreenPoint::new(0.0, 0.0), ScreenPoint::new(10.0, 10.0));
        assert!(rect.contains(ScreenPoint::new(10.0, 0.0)));
        assert!(!rect.contains(ScreenPoint::new(10.5, 5.0)));
        assert_eq!(rect.size(), SurfaceSize::new(10.0, 10.0));
    }
}
