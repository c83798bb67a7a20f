//! Coordinate labels placed in surface pixels.

use crate::geom::{Point, ScreenPoint};
use crate::line::Segment;
use crate::transform::Transform;
use crate::view::Range;

/// Default cap on the number of lattice labels generated per frame.
pub const DEFAULT_MAX_GRID_LABELS: usize = 2048;

/// What a label annotates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    /// A lattice point on the X or Y axis.
    Axis,
    /// Any other lattice point.
    Grid,
    /// A segment endpoint.
    Endpoint,
}

/// A text label anchored at a world point.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateLabel {
    /// Annotated world point.
    pub world: Point,
    /// Anchor in surface pixels.
    pub position: ScreenPoint,
    /// Display text.
    pub text: String,
    /// Label category.
    pub kind: LabelKind,
}

/// Labels for every integer lattice point inside the viewport.
///
/// Returns an empty list when the lattice holds more than `max_labels` points.
pub fn grid_labels(transform: &Transform, max_labels: usize) -> Vec<CoordinateLabel> {
    let viewport = transform.viewport();
    let Some(xs) = integer_span(viewport.x()) else {
        return Vec::new();
    };
    let Some(ys) = integer_span(viewport.y()) else {
        return Vec::new();
    };
    let count = span_len(xs) * span_len(ys);
    if count > max_labels as f64 {
        tracing::debug!(count, max_labels, "too many lattice points, skipping grid labels");
        return Vec::new();
    }

    let mut labels = Vec::with_capacity(count as usize);
    for i in xs.0..=xs.1 {
        for j in ys.0..=ys.1 {
            let world = Point::new(i as f64, j as f64);
            let kind = if i == 0 || j == 0 {
                LabelKind::Axis
            } else {
                LabelKind::Grid
            };
            labels.push(CoordinateLabel {
                world,
                position: transform.world_to_pixel(world),
                text: format!("({i},{j})"),
                kind,
            });
        }
    }
    labels
}

/// Labels for both endpoints of a segment.
pub fn endpoint_labels(segment: Segment, transform: &Transform) -> [CoordinateLabel; 2] {
    [segment.start, segment.end].map(|world| CoordinateLabel {
        world,
        position: transform.world_to_pixel(world),
        text: format!(
            "({},{})",
            format_endpoint_coordinate(world.x),
            format_endpoint_coordinate(world.y)
        ),
        kind: LabelKind::Endpoint,
    })
}

/// Format an endpoint coordinate with two decimals; exact zero prints as `0`.
pub fn format_endpoint_coordinate(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{value:.2}")
    }
}

/// Format the live cursor readout.
pub fn format_readout(point: Point) -> String {
    format!("{:.3} , {:.3}", point.x, point.y)
}

fn integer_span(range: Range) -> Option<(i64, i64)> {
    if !range.is_valid() {
        return None;
    }
    let first = range.min.ceil();
    let last = range.max.floor();
    if first > last || first < i64::MIN as f64 || last > i64::MAX as f64 {
        return None;
    }
    Some((first as i64, last as i64))
}

fn span_len(span: (i64, i64)) -> f64 {
    span.1 as f64 - span.0 as f64 + 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::SurfaceSize;
    use crate::view::Viewport;

    fn transform(scale: f64, width: f64, height: f64) -> Transform {
        let surface = SurfaceSize::new(width, height);
        let viewport = Viewport::origin(scale, surface).unwrap();
        Transform::new(viewport, surface).unwrap()
    }

    #[test]
    fn lattice_labels_with_axis_kind() {
        let transform = transform(100.0, 300.0, 300.0);
        let labels = grid_labels(&transform, DEFAULT_MAX_GRID_LABELS);
        assert_eq!(labels.len(), 9);
        let origin = labels
            .iter()
            .find(|label| label.world == Point::new(0.0, 0.0))
            .unwrap();
        assert_eq!(origin.kind, LabelKind::Axis);
        assert_eq!(origin.text, "(0,0)");
        assert_eq!(origin.position, ScreenPoint::new(150.0, 150.0));
        let corner = labels
            .iter()
            .find(|label| label.world == Point::new(1.0, -1.0))
            .unwrap();
        assert_eq!(corner.kind, LabelKind::Grid);
        assert_eq!(corner.position, ScreenPoint::new(250.0, 250.0));
    }

    #[test]
    fn lattice_labels_respect_cap() {
        let transform = transform(1.0, 1000.0, 1000.0);
        assert!(grid_labels(&transform, DEFAULT_MAX_GRID_LABELS).is_empty());
    }

    #[test]
    fn endpoint_text_formatting() {
        let transform = transform(100.0, 400.0, 400.0);
        let segment = Segment::new(Point::new(0.0, 0.27), Point::new(1.161, -1.5));
        let [first, second] = endpoint_labels(segment, &transform);
        assert_eq!(first.text, "(0,0.27)");
        assert_eq!(second.text, "(1.16,-1.50)");
        assert_eq!(first.kind, LabelKind::Endpoint);
    }

    #[test]
    fn readout_uses_three_decimals() {
        assert_eq!(format_readout(Point::new(1.0, -0.12345)), "1.000 , -0.123");
    }
}
