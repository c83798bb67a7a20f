//! Integer grid-line generation in normalized device coordinates.

use crate::geom::NdcPoint;
use crate::view::{Range, Viewport};

/// Most lines generated for one axis; denser axes are skipped.
pub const MAX_GRID_LINES_PER_AXIS: usize = 4096;

/// Orientation of a grid line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAxis {
    /// A line of constant world X, spanning the full height.
    Vertical,
    /// A line of constant world Y, spanning the full width.
    Horizontal,
}

/// One full-width or full-height grid line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    /// Orientation.
    pub axis: GridAxis,
    /// Integer world coordinate the line sits on.
    pub value: i64,
    /// Line start in NDC.
    pub start: NdcPoint,
    /// Line end in NDC.
    pub end: NdcPoint,
}

impl GridLine {
    /// Whether this line is one of the world axes (`x = 0` or `y = 0`).
    pub fn is_origin_axis(&self) -> bool {
        self.value == 0
    }
}

/// The grid lines for one viewport, vertical lines first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridLines {
    lines: Vec<GridLine>,
}

impl GridLines {
    /// Access all lines.
    pub fn lines(&self) -> &[GridLine] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check whether no lines were generated.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines of one orientation.
    pub fn by_axis(&self, axis: GridAxis) -> impl Iterator<Item = &GridLine> + '_ {
        self.lines.iter().filter(move |line| line.axis == axis)
    }

    /// Flatten into `x0, y0, x1, y1` quadruples for a line-list vertex buffer.
    pub fn to_buffer(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.lines.len() * 4);
        for line in &self.lines {
            out.extend_from_slice(&[
                line.start.x as f32,
                line.start.y as f32,
                line.end.x as f32,
                line.end.y as f32,
            ]);
        }
        out
    }
}

/// Generate one line per integer world coordinate in the viewport.
pub fn generate_grid(viewport: &Viewport) -> GridLines {
    grid_for_ranges(viewport.x(), viewport.y())
}

/// Generate grid lines for raw bounds.
///
/// An axis whose range is empty or non-finite, or that would need more than
/// [`MAX_GRID_LINES_PER_AXIS`] lines, contributes no lines.
pub fn grid_for_ranges(x: Range, y: Range) -> GridLines {
    let mut lines = Vec::new();
    push_axis_lines(&mut lines, x, GridAxis::Vertical);
    push_axis_lines(&mut lines, y, GridAxis::Horizontal);
    tracing::trace!(count = lines.len(), "grid regenerated");
    GridLines { lines }
}

fn push_axis_lines(out: &mut Vec<GridLine>, range: Range, axis: GridAxis) {
    if !range.is_valid() {
        tracing::warn!(?axis, min = range.min, max = range.max, "skipping grid for degenerate range");
        return;
    }
    let (first, last) = (range.min.floor(), range.max.floor());
    let count = last - first + 1.0;
    if count > MAX_GRID_LINES_PER_AXIS as f64 {
        tracing::warn!(?axis, count, max = MAX_GRID_LINES_PER_AXIS, "skipping grid, too many lines");
        return;
    }
    let (first, last) = (first as i64, last as i64);
    let span = range.span();
    for value in first..=last {
        let ndc = 2.0 * (value as f64 - range.min) / span - 1.0;
        let (start, end) = match axis {
            GridAxis::Vertical => (NdcPoint::new(ndc, -1.0), NdcPoint::new(ndc, 1.0)),
            GridAxis::Horizontal => (NdcPoint::new(-1.0, ndc), NdcPoint::new(1.0, ndc)),
        };
        out.push(GridLine {
            axis,
            value,
            start,
            end,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::SurfaceSize;

    #[test]
    fn lines_cover_integer_coordinates() {
        let grid = grid_for_ranges(Range::new(-1.5, 2.5), Range::new(0.0, 2.0));
        let xs: Vec<i64> = grid.by_axis(GridAxis::Vertical).map(|l| l.value).collect();
        let ys: Vec<i64> = grid.by_axis(GridAxis::Horizontal).map(|l| l.value).collect();
        assert_eq!(xs, vec![-2, -1, 0, 1, 2]);
        assert_eq!(ys, vec![0, 1, 2]);
    }

    #[test]
    fn ndc_positions_follow_bounds() {
        let grid = grid_for_ranges(Range::new(-2.0, 2.0), Range::new(0.0, 4.0));
        let origin_x = grid
            .by_axis(GridAxis::Vertical)
            .find(|l| l.value == 0)
            .unwrap();
        assert!(origin_x.is_origin_axis());
        assert_eq!(origin_x.start, NdcPoint::new(0.0, -1.0));
        assert_eq!(origin_x.end, NdcPoint::new(0.0, 1.0));
        let bottom = grid
            .by_axis(GridAxis::Horizontal)
            .find(|l| l.value == 0)
            .unwrap();
        assert_eq!(bottom.start.y, -1.0);
        let top = grid
            .by_axis(GridAxis::Horizontal)
            .find(|l| l.value == 4)
            .unwrap();
        assert_eq!(top.end.y, 1.0);
    }

    #[test]
    fn degenerate_range_is_skipped() {
        let grid = grid_for_ranges(Range::new(1.0, 1.0), Range::new(0.0, 1.0));
        assert!(grid.by_axis(GridAxis::Vertical).next().is_none());
        assert_eq!(grid.len(), 2);
        let grid = grid_for_ranges(Range::new(0.0, f64::INFINITY), Range::new(f64::NAN, 1.0));
        assert!(grid.is_empty());
    }

    #[test]
    fn tiny_scale_skips_dense_axes() {
        let viewport = Viewport::origin(1e-300, SurfaceSize::new(800.0, 600.0)).unwrap();
        assert!(viewport.x().is_valid());
        assert!(generate_grid(&viewport).is_empty());

        let grid = grid_for_ranges(
            Range::new(0.0, MAX_GRID_LINES_PER_AXIS as f64 - 1.0),
            Range::new(0.0, MAX_GRID_LINES_PER_AXIS as f64),
        );
        assert_eq!(
            grid.by_axis(GridAxis::Vertical).count(),
            MAX_GRID_LINES_PER_AXIS
        );
        assert_eq!(grid.by_axis(GridAxis::Horizontal).count(), 0);
    }

    #[test]
    fn viewport_grid_and_buffer() {
        let viewport = crate::view::Viewport::origin(100.0, SurfaceSize::new(400.0, 200.0)).unwrap();
        let grid = generate_grid(&viewport);
        assert_eq!(grid.by_axis(GridAxis::Vertical).count(), 5);
        assert_eq!(grid.by_axis(GridAxis::Horizontal).count(), 3);
        assert_eq!(grid.to_buffer().len(), grid.len() * 4);
    }
}
