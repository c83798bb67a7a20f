//! Interaction helpers for panning and zooming.
//!
//! These helpers are used by render backends to implement consistent
//! interaction semantics across platforms. Viewports go in by value and come
//! out by value; the caller owns the single live instance.

use crate::error::DdaError;
use crate::geom::{ScreenPoint, SurfaceSize};
use crate::view::{Viewport, ZoomDirection};

/// Pan a viewport by a pixel drag delta.
pub fn pan_viewport(
    viewport: Viewport,
    delta_pixels: ScreenPoint,
    surface: SurfaceSize,
) -> Result<Viewport, DdaError> {
    let mut next = viewport;
    next.pan_by_pixels(delta_pixels, surface)?;
    Ok(next)
}

/// Apply one wheel zoom step around the viewport center.
pub fn zoom_viewport(
    viewport: Viewport,
    direction: ZoomDirection,
    surface: SurfaceSize,
) -> Result<Viewport, DdaError> {
    let mut next = viewport;
    next.zoom(direction, surface)?;
    Ok(next)
}

/// Pointer drag tracking with a start threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    /// Where the button went down.
    pub start: ScreenPoint,
    /// Last pointer position applied to the viewport.
    pub last: ScreenPoint,
    /// Whether the pointer has moved past the threshold.
    pub active: bool,
}

impl DragState {
    /// Start tracking a drag at `start`.
    pub fn new(start: ScreenPoint) -> Self {
        Self {
            start,
            last: start,
            active: false,
        }
    }

    /// Feed a pointer position, returning the delta to pan by once active.
    pub fn update(&mut self, position: ScreenPoint, threshold_px: f64) -> Option<ScreenPoint> {
        if !self.active {
            let dx = position.x - self.start.x;
            let dy = position.y - self.start.y;
            if dx * dx + dy * dy <= threshold_px * threshold_px {
                return None;
            }
            self.active = true;
        }
        let delta = ScreenPoint::new(position.x - self.last.x, position.y - self.last.y);
        self.last = position;
        Some(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Range;

    #[test]
    fn pan_returns_shifted_copy() {
        let surface = SurfaceSize::new(1000.0, 1000.0);
        let viewport = Viewport::origin(100.0, surface).unwrap();
        let next = pan_viewport(viewport, ScreenPoint::new(10.0, 0.0), surface).unwrap();
        assert_eq!(viewport.x(), Range::new(-5.0, 5.0));
        assert!((next.x().min - viewport.x().min + 0.1).abs() < 1e-12);
        assert!((next.x().max - viewport.x().max + 0.1).abs() < 1e-12);
    }

    #[test]
    fn zoom_returns_rescaled_copy() {
        let surface = SurfaceSize::new(800.0, 600.0);
        let viewport = Viewport::origin(150.0, surface).unwrap();
        let next = zoom_viewport(viewport, ZoomDirection::In, surface).unwrap();
        assert_eq!(viewport.scale(), 150.0);
        assert!((next.scale() - 157.5).abs() < 1e-9);
        assert_eq!(next.center(), viewport.center());
    }

    #[test]
    fn drag_waits_for_threshold() {
        let mut drag = DragState::new(ScreenPoint::new(0.0, 0.0));
        assert_eq!(drag.update(ScreenPoint::new(2.0, 2.0), 4.0), None);
        assert!(!drag.active);
        assert_eq!(
            drag.update(ScreenPoint::new(5.0, 0.0), 4.0),
            Some(ScreenPoint::new(5.0, 0.0))
        );
        assert_eq!(
            drag.update(ScreenPoint::new(7.0, -1.0), 4.0),
            Some(ScreenPoint::new(2.0, -1.0))
        );
    }
}
