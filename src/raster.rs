//! Digital Differential Analyzer (DDA) line rasterization.
//!
//! The segment is walked in `steps = round(max(|dx|, |dy|))` equal increments so
//! the dominant axis advances by one pixel-equivalent unit per sample while the
//! other axis advances fractionally. Inputs are in the pixel-equivalent frame
//! produced by [`Transform::world_to_scaled`](crate::transform::Transform::world_to_scaled);
//! output samples are normalized device coordinates.

use std::iter::FusedIterator;

use crate::error::DdaError;
use crate::geom::{NdcPoint, Point};

/// Default upper bound on the DDA step count of one segment.
pub const DEFAULT_MAX_STEPS: usize = 1 << 20;

/// How the exact second endpoint is appended after the stepped samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClosingPoint {
    /// Normalize the closing point like every other sample.
    #[default]
    Normalized,
    /// Push the closing point in pixel-equivalent units, without dividing by
    /// the half-dimensions. Matches the legacy point buffers, which place the
    /// final point far outside the visible NDC square.
    Raw,
}

/// Iterator over the stepped DDA samples of a segment, in pixel-equivalent units.
///
/// Yields exactly [`steps`](Self::steps) points starting at the first
/// endpoint, or a single point when the segment rounds to zero steps. The
/// second endpoint itself is not yielded.
#[derive(Debug, Clone)]
pub struct DdaSteps {
    current: Point,
    x_inc: f64,
    y_inc: f64,
    steps: usize,
    remaining: usize,
}

impl DdaSteps {
    /// Number of unit steps along the dominant axis.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Per-step increment on each axis.
    pub fn increment(&self) -> (f64, f64) {
        (self.x_inc, self.y_inc)
    }
}

impl Iterator for DdaSteps {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }
        let point = self.current;
        self.current.x += self.x_inc;
        self.current.y += self.y_inc;
        self.remaining -= 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for DdaSteps {}

impl FusedIterator for DdaSteps {}

/// Start stepping from `start` towards `end`.
///
/// Non-finite spans are treated as zero-length; [`rasterize`] rejects them
/// before stepping.
pub fn dda_steps(start: Point, end: Point) -> DdaSteps {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let span = dx.abs().max(dy.abs());
    let steps = if span.is_finite() {
        span.round() as usize
    } else {
        0
    };
    if steps == 0 {
        return DdaSteps {
            current: start,
            x_inc: 0.0,
            y_inc: 0.0,
            steps,
            remaining: 1,
        };
    }
    DdaSteps {
        current: start,
        x_inc: dx / steps as f64,
        y_inc: dy / steps as f64,
        steps,
        remaining: steps,
    }
}

/// The sampled points of one rasterized segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    samples: Vec<NdcPoint>,
    closing: NdcPoint,
    steps: usize,
}

impl Raster {
    /// Stepped samples, excluding the closing point.
    pub fn samples(&self) -> &[NdcPoint] {
        &self.samples
    }

    /// The forced closing point.
    pub fn closing(&self) -> NdcPoint {
        self.closing
    }

    /// DDA step count for the segment.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// All emitted points in order: samples, then the closing point.
    pub fn points(&self) -> impl Iterator<Item = NdcPoint> + '_ {
        self.samples
            .iter()
            .copied()
            .chain(std::iter::once(self.closing))
    }

    /// Number of emitted points, closing point included.
    pub fn len(&self) -> usize {
        self.samples.len() + 1
    }

    /// Always false: a raster carries at least its closing point.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Flatten into interleaved `x, y` pairs for a point-list vertex buffer.
    pub fn to_buffer(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.len() * 2);
        for point in self.points() {
            out.push(point.x as f32);
            out.push(point.y as f32);
        }
        out
    }
}

/// Rasterize a segment given in pixel-equivalent units.
///
/// Each stepped sample is divided by the half-dimensions of the surface. The
/// closing point follows the `closing` policy. Segments needing more than
/// [`DEFAULT_MAX_STEPS`] steps are rejected; see [`rasterize_with_limit`].
pub fn rasterize(
    start: Point,
    end: Point,
    half_width: f64,
    half_height: f64,
    closing: ClosingPoint,
) -> Result<Raster, DdaError> {
    rasterize_with_limit(start, end, half_width, half_height, closing, DEFAULT_MAX_STEPS)
}

/// [`rasterize`] with an explicit step limit.
///
/// Returns [`DdaError::TooManySteps`] when `round(max(|dx|, |dy|))` exceeds
/// `max_steps`, including spans that overflow to infinity.
pub fn rasterize_with_limit(
    start: Point,
    end: Point,
    half_width: f64,
    half_height: f64,
    closing: ClosingPoint,
    max_steps: usize,
) -> Result<Raster, DdaError> {
    if !start.is_finite() || !end.is_finite() {
        return Err(DdaError::NonFinite("segment endpoint"));
    }
    if !(half_width.is_finite() && half_height.is_finite() && half_width > 0.0 && half_height > 0.0)
    {
        return Err(DdaError::InvalidSurface {
            width: half_width * 2.0,
            height: half_height * 2.0,
        });
    }
    let span = (end.x - start.x).abs().max((end.y - start.y).abs()).round();
    if span > max_steps as f64 {
        return Err(DdaError::TooManySteps {
            steps: span,
            max: max_steps,
        });
    }

    let walk = dda_steps(start, end);
    let steps = walk.steps();
    let samples: Vec<NdcPoint> = walk
        .map(|point| NdcPoint::new(point.x / half_width, point.y / half_height))
        .collect();
    let closing = match closing {
        ClosingPoint::Normalized => NdcPoint::new(end.x / half_width, end.y / half_height),
        ClosingPoint::Raw => NdcPoint::new(end.x, end.y),
    };
    tracing::trace!(steps, samples = samples.len(), "rasterized segment");
    Ok(Raster {
        samples,
        closing,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_ndc(actual: NdcPoint, x: f64, y: f64) {
        assert!(
            (actual.x - x).abs() < 1e-12 && (actual.y - y).abs() < 1e-12,
            "expected ({x}, {y}), got {actual:?}"
        );
    }

    #[test]
    fn worked_example_raw_closing() {
        let raster = rasterize(
            Point::new(0.0, 0.0),
            Point::new(4.0, 2.0),
            100.0,
            100.0,
            ClosingPoint::Raw,
        )
        .unwrap();
        assert_eq!(raster.steps(), 4);
        let samples = raster.samples();
        assert_eq!(samples.len(), 4);
        assert_ndc(samples[0], 0.0, 0.0);
        assert_ndc(samples[1], 0.01, 0.005);
        assert_ndc(samples[2], 0.02, 0.01);
        assert_ndc(samples[3], 0.03, 0.015);
        assert_eq!(raster.closing(), NdcPoint::new(4.0, 2.0));
    }

    #[test]
    fn normalized_closing_stays_in_ndc() {
        let raster = rasterize(
            Point::new(0.0, 0.0),
            Point::new(4.0, 2.0),
            100.0,
            100.0,
            ClosingPoint::default(),
        )
        .unwrap();
        assert_ndc(raster.closing(), 0.04, 0.02);
        assert_eq!(raster.len(), 5);
        assert_eq!(raster.to_buffer().len(), 10);
    }

    #[test]
    fn identical_endpoints_emit_single_sample() {
        let point = Point::new(12.5, -3.0);
        let raster = rasterize(point, point, 50.0, 50.0, ClosingPoint::Normalized).unwrap();
        assert_eq!(raster.steps(), 0);
        assert_eq!(raster.samples().len(), 1);
        assert_ndc(raster.samples()[0], 0.25, -0.06);
        assert!(raster.points().all(|p| p.is_finite()));
    }

    #[test]
    fn sub_unit_segment_rounds_to_zero_steps() {
        let walk = dda_steps(Point::new(0.0, 0.0), Point::new(0.3, -0.4));
        assert_eq!(walk.steps(), 0);
        assert_eq!(walk.count(), 1);
    }

    #[test]
    fn fractional_span_uses_rounded_steps() {
        let walk = dda_steps(Point::new(0.0, 0.0), Point::new(4.4, 1.1));
        assert_eq!(walk.steps(), 4);
        let (x_inc, y_inc) = walk.increment();
        assert!((x_inc - 1.1).abs() < 1e-12);
        assert!((y_inc - 0.275).abs() < 1e-12);
        assert_eq!(walk.len(), 4);
    }

    #[test]
    fn steep_segment_steps_along_y() {
        let points: Vec<Point> = dda_steps(Point::new(0.0, 0.0), Point::new(-2.0, -8.0)).collect();
        assert_eq!(points.len(), 8);
        assert_eq!(points[1], Point::new(-0.25, -1.0));
    }

    #[test]
    fn rejects_non_finite_inputs() {
        let origin = Point::new(0.0, 0.0);
        assert_eq!(
            rasterize(origin, Point::new(f64::NAN, 1.0), 1.0, 1.0, ClosingPoint::Raw),
            Err(DdaError::NonFinite("segment endpoint"))
        );
        assert!(matches!(
            rasterize(origin, Point::new(1.0, 1.0), 0.0, 1.0, ClosingPoint::Raw),
            Err(DdaError::InvalidSurface { .. })
        ));
    }

    #[test]
    fn huge_span_is_rejected_before_allocating() {
        let result = rasterize(
            Point::new(0.0, 0.0),
            Point::new(1e300, 0.0),
            400.0,
            300.0,
            ClosingPoint::Normalized,
        );
        assert_eq!(
            result,
            Err(DdaError::TooManySteps {
                steps: 1e300,
                max: DEFAULT_MAX_STEPS,
            })
        );

        let overflowing = rasterize(
            Point::new(-1e308, 0.0),
            Point::new(1e308, 0.0),
            400.0,
            300.0,
            ClosingPoint::Raw,
        );
        assert!(matches!(overflowing, Err(DdaError::TooManySteps { .. })));
    }

    #[test]
    fn step_limit_is_inclusive() {
        let start = Point::new(0.0, 0.0);
        let end = Point::new(10.0, 3.0);
        let raster =
            rasterize_with_limit(start, end, 100.0, 100.0, ClosingPoint::Normalized, 10).unwrap();
        assert_eq!(raster.steps(), 10);
        assert_eq!(
            rasterize_with_limit(start, end, 100.0, 100.0, ClosingPoint::Normalized, 9),
            Err(DdaError::TooManySteps { steps: 10.0, max: 9 })
        );
    }

    proptest! {
        #[test]
        fn sample_count_matches_rounded_span(
            x1 in -500.0..500.0f64,
            y1 in -500.0..500.0f64,
            x2 in -500.0..500.0f64,
            y2 in -500.0..500.0f64,
        ) {
            let raster = rasterize(
                Point::new(x1, y1),
                Point::new(x2, y2),
                400.0,
                300.0,
                ClosingPoint::Normalized,
            ).unwrap();
            let expected = (x2 - x1).abs().max((y2 - y1).abs()).round() as usize;
            prop_assert_eq!(raster.steps(), expected);
            prop_assert_eq!(raster.samples().len(), expected.max(1));
            prop_assert!(raster.points().all(|p| p.is_finite()));
        }

        #[test]
        fn samples_advance_evenly(
            x1 in -500.0..500.0f64,
            y1 in -500.0..500.0f64,
            x2 in -500.0..500.0f64,
            y2 in -500.0..500.0f64,
        ) {
            let walk = dda_steps(Point::new(x1, y1), Point::new(x2, y2));
            let steps = walk.steps();
            prop_assume!(steps > 0);
            for (i, point) in walk.enumerate() {
                let t = i as f64 / steps as f64;
                prop_assert!((point.x - (x1 + t * (x2 - x1))).abs() < 1e-6);
                prop_assert!((point.y - (y1 + t * (y2 - y1))).abs() < 1e-6);
            }
        }
    }
}
