//! Scene state and per-redraw frame generation.

use crate::error::DdaError;
use crate::geom::{Point, ScreenPoint, SurfaceSize};
use crate::grid::{GridLines, generate_grid};
use crate::interaction::{pan_viewport, zoom_viewport};
use crate::labels::{CoordinateLabel, DEFAULT_MAX_GRID_LABELS, endpoint_labels, grid_labels};
use crate::line::{InputLimits, LineMode, LineParameters, Segment};
use crate::raster::{ClosingPoint, DEFAULT_MAX_STEPS, Raster, rasterize_with_limit};
use crate::style::Theme;
use crate::transform::Transform;
use crate::view::{DEFAULT_SCALE, Viewport, ZoomDirection};

/// Everything a backend needs to draw one frame.
#[derive(Debug, Clone)]
pub struct SceneFrame {
    /// Transform the frame was built with.
    pub transform: Transform,
    /// World segment being rasterized.
    pub segment: Segment,
    /// Integer grid lines in NDC.
    pub grid: GridLines,
    /// Rasterized samples in NDC.
    pub raster: Raster,
    /// Lattice labels in surface pixels; empty when disabled or too dense.
    pub grid_labels: Vec<CoordinateLabel>,
    /// Endpoint labels in surface pixels.
    pub endpoint_labels: [CoordinateLabel; 2],
}

impl SceneFrame {
    /// Grid as a flat line-list buffer of NDC pairs.
    pub fn grid_buffer(&self) -> Vec<f32> {
        self.grid.to_buffer()
    }

    /// Rasterized samples as a flat point-list buffer of NDC pairs.
    pub fn point_buffer(&self) -> Vec<f32> {
        self.raster.to_buffer()
    }
}

/// The live DDA scene: line inputs plus the single viewport.
///
/// The viewport is created on the first frame, once the surface size is
/// known, and re-laid out whenever the surface changes size.
#[derive(Debug, Clone)]
pub struct DdaScene {
    theme: Theme,
    line: LineParameters,
    closing: ClosingPoint,
    initial_scale: f64,
    show_grid_labels: bool,
    max_grid_labels: usize,
    max_steps: usize,
    viewport: Option<Viewport>,
    surface: Option<SurfaceSize>,
}

impl DdaScene {
    /// Create a scene with default configuration.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start building a scene with custom configuration.
    pub fn builder() -> DdaSceneBuilder {
        DdaSceneBuilder::default()
    }

    /// Access the theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Access the theme mutably.
    pub fn theme_mut(&mut self) -> &mut Theme {
        &mut self.theme
    }

    /// Access the line inputs.
    pub fn line(&self) -> &LineParameters {
        &self.line
    }

    /// Replace the line inputs.
    pub fn set_line(&mut self, line: LineParameters) {
        self.line = line;
    }

    /// Switch the line input mode.
    pub fn set_mode(&mut self, mode: LineMode) {
        self.line.mode = mode;
    }

    /// Closing-point policy used by the rasterizer.
    pub fn closing(&self) -> ClosingPoint {
        self.closing
    }

    /// Whether lattice labels are generated.
    pub fn show_grid_labels(&self) -> bool {
        self.show_grid_labels
    }

    /// Toggle lattice labels.
    pub fn set_show_grid_labels(&mut self, show: bool) {
        self.show_grid_labels = show;
    }

    /// The current viewport, once laid out.
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// The surface size of the last layout.
    pub fn surface(&self) -> Option<SurfaceSize> {
        self.surface
    }

    /// Drop the viewport so the next frame recenters on the origin at the
    /// initial scale.
    pub fn reset_view(&mut self) {
        self.viewport = None;
    }

    /// Lay the viewport out on `surface`, creating or resizing it as needed.
    pub fn layout(&mut self, surface: SurfaceSize) -> Result<Viewport, DdaError> {
        let viewport = match self.viewport {
            None => Viewport::origin(self.initial_scale, surface)?,
            Some(mut viewport) if self.surface != Some(surface) => {
                viewport.resize(surface)?;
                viewport
            }
            Some(viewport) => viewport,
        };
        self.viewport = Some(viewport);
        self.surface = Some(surface);
        Ok(viewport)
    }

    /// Rebuild every derived output for one redraw.
    pub fn frame(&mut self, surface: SurfaceSize) -> Result<SceneFrame, DdaError> {
        let viewport = self.layout(surface)?;
        let transform = Transform::new(viewport, surface)?;
        let segment = self.line.segment();
        let raster = rasterize_with_limit(
            transform.world_to_scaled(segment.start),
            transform.world_to_scaled(segment.end),
            transform.half_width(),
            transform.half_height(),
            self.closing,
            self.max_steps,
        )?;
        let grid = generate_grid(&viewport);
        let grid_labels = if self.show_grid_labels {
            grid_labels(&transform, self.max_grid_labels)
        } else {
            Vec::new()
        };
        let endpoint_labels = endpoint_labels(segment, &transform);
        Ok(SceneFrame {
            transform,
            segment,
            grid,
            raster,
            grid_labels,
            endpoint_labels,
        })
    }

    /// Pan by a pixel drag delta. Does nothing before the first layout.
    pub fn pan_by_pixels(&mut self, delta: ScreenPoint) -> Result<(), DdaError> {
        let (Some(viewport), Some(surface)) = (self.viewport, self.surface) else {
            return Ok(());
        };
        self.viewport = Some(pan_viewport(viewport, delta, surface)?);
        Ok(())
    }

    /// Apply one wheel zoom step. Does nothing before the first layout.
    pub fn zoom(&mut self, direction: ZoomDirection) -> Result<(), DdaError> {
        let (Some(viewport), Some(surface)) = (self.viewport, self.surface) else {
            return Ok(());
        };
        self.viewport = Some(zoom_viewport(viewport, direction, surface)?);
        Ok(())
    }

    /// Map a surface pixel to world coordinates under the current viewport.
    pub fn pixel_to_world(&self, point: ScreenPoint) -> Option<Point> {
        let transform = Transform::new(self.viewport?, self.surface?).ok()?;
        Some(transform.pixel_to_world(point))
    }

    /// Input ranges for the current viewport.
    pub fn input_limits(&self) -> Option<InputLimits> {
        self.viewport.as_ref().map(InputLimits::for_viewport)
    }
}

impl Default for DdaScene {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for configuring a scene before construction.
#[derive(Debug, Clone)]
pub struct DdaSceneBuilder {
    theme: Theme,
    line: LineParameters,
    closing: ClosingPoint,
    scale: f64,
    show_grid_labels: bool,
    max_grid_labels: usize,
    max_steps: usize,
}

impl Default for DdaSceneBuilder {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            line: LineParameters::default(),
            closing: ClosingPoint::default(),
            scale: DEFAULT_SCALE,
            show_grid_labels: true,
            max_grid_labels: DEFAULT_MAX_GRID_LABELS,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

impl DdaSceneBuilder {
    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the initial line inputs.
    pub fn line(mut self, line: LineParameters) -> Self {
        self.line = line;
        self
    }

    /// Set the closing-point policy.
    pub fn closing(mut self, closing: ClosingPoint) -> Self {
        self.closing = closing;
        self
    }

    /// Set the initial scale in pixels per world unit.
    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Enable or disable lattice labels.
    pub fn grid_labels(mut self, show: bool) -> Self {
        self.show_grid_labels = show;
        self
    }

    /// Cap the lattice label count.
    pub fn max_grid_labels(mut self, max: usize) -> Self {
        self.max_grid_labels = max;
        self
    }

    /// Cap the DDA step count; longer segments fail the frame.
    pub fn max_steps(mut self, max: usize) -> Self {
        self.max_steps = max;
        self
    }

    /// Build the scene.
    pub fn build(self) -> DdaScene {
        DdaScene {
            theme: self.theme,
            line: self.line,
            closing: self.closing,
            initial_scale: self.scale,
            show_grid_labels: self.show_grid_labels,
            max_grid_labels: self.max_grid_labels,
            max_steps: self.max_steps,
            viewport: None,
            surface: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::NdcPoint;

    const SURFACE: SurfaceSize = SurfaceSize::new(800.0, 600.0);

    #[test]
    fn first_frame_centers_on_origin() {
        let mut scene = DdaScene::new();
        let frame = scene.frame(SURFACE).unwrap();
        let viewport = scene.viewport().unwrap();
        assert_eq!(viewport.scale(), DEFAULT_SCALE);
        assert_eq!(viewport.center(), Point::new(0.0, 0.0));
        assert!(!frame.grid.is_empty());
        assert_eq!(frame.segment, LineParameters::default().segment());
    }

    #[test]
    fn default_line_rasterizes_in_pixel_steps() {
        let mut scene = DdaScene::new();
        let frame = scene.frame(SURFACE).unwrap();
        // |dy| = 1.32 world units at 150 px/unit
        assert_eq!(frame.raster.steps(), 198);
        let first = frame.raster.samples()[0];
        assert!((first.x - 0.39 * 150.0 / 400.0).abs() < 1e-12);
        assert!((first.y - 0.27 * 150.0 / 300.0).abs() < 1e-12);
        let closing = frame.raster.closing();
        assert!((closing.x - 1.16 * 150.0 / 400.0).abs() < 1e-12);
        assert!((closing.y - 1.59 * 150.0 / 300.0).abs() < 1e-12);
    }

    #[test]
    fn raw_closing_policy_is_forwarded() {
        let mut scene = DdaScene::builder().closing(ClosingPoint::Raw).build();
        let frame = scene.frame(SURFACE).unwrap();
        let closing = frame.raster.closing();
        assert!((closing.x - 1.16 * 150.0).abs() < 1e-9);
        assert!((closing.y - 1.59 * 150.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_segment_yields_single_sample() {
        let point = Point::new(1.0, 1.0);
        let mut scene = DdaScene::builder()
            .line(LineParameters::two_points(point, point))
            .build();
        let frame = scene.frame(SURFACE).unwrap();
        assert_eq!(frame.raster.samples().len(), 1);
        assert_eq!(frame.point_buffer().len(), 4);
    }

    #[test]
    fn non_finite_line_input_is_an_error() {
        let mut scene = DdaScene::builder()
            .line(LineParameters::two_points(
                Point::new(f64::NAN, 0.0),
                Point::new(1.0, 1.0),
            ))
            .build();
        assert_eq!(
            scene.frame(SURFACE).unwrap_err(),
            DdaError::NonFinite("segment endpoint")
        );
    }

    #[test]
    fn pan_and_zoom_before_layout_are_ignored() {
        let mut scene = DdaScene::new();
        scene.pan_by_pixels(ScreenPoint::new(5.0, 5.0)).unwrap();
        scene.zoom(ZoomDirection::In).unwrap();
        assert!(scene.viewport().is_none());
        assert!(scene.pixel_to_world(ScreenPoint::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn navigation_moves_the_raster() {
        let mut scene = DdaScene::new();
        let before = scene.frame(SURFACE).unwrap();
        scene.pan_by_pixels(ScreenPoint::new(40.0, 0.0)).unwrap();
        let after = scene.frame(SURFACE).unwrap();
        let shift = after.raster.samples()[0].x - before.raster.samples()[0].x;
        assert!((shift - 40.0 / 400.0).abs() < 1e-9);

        scene.zoom(ZoomDirection::In).unwrap();
        let zoomed = scene.frame(SURFACE).unwrap();
        assert!(zoomed.raster.steps() > after.raster.steps());
        assert!(scene.viewport().unwrap().is_consistent(SURFACE, 1e-9));
    }

    #[test]
    fn cursor_readout_maps_surface_center() {
        let mut scene = DdaScene::new();
        scene.frame(SURFACE).unwrap();
        scene.pan_by_pixels(ScreenPoint::new(-150.0, 150.0)).unwrap();
        let world = scene.pixel_to_world(ScreenPoint::new(400.0, 300.0)).unwrap();
        assert!((world.x - 1.0).abs() < 1e-9);
        assert!((world.y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn resize_relayouts_and_reset_recenters() {
        let mut scene = DdaScene::new();
        scene.frame(SURFACE).unwrap();
        scene.pan_by_pixels(ScreenPoint::new(75.0, 0.0)).unwrap();
        let bigger = SurfaceSize::new(1200.0, 900.0);
        scene.frame(bigger).unwrap();
        let viewport = scene.viewport().unwrap();
        assert!(viewport.is_consistent(bigger, 1e-9));
        assert!((viewport.center().x + 0.5).abs() < 1e-9);

        scene.reset_view();
        scene.frame(bigger).unwrap();
        assert_eq!(scene.viewport().unwrap().center(), Point::new(0.0, 0.0));
    }

    #[test]
    fn deep_zoom_trips_step_limit_and_recovers() {
        let mut scene = DdaScene::builder().max_steps(1000).build();
        scene.frame(SURFACE).unwrap();
        let mut zooms = 0;
        let err = loop {
            assert!(zooms < 100, "step limit never reached");
            scene.zoom(ZoomDirection::In).unwrap();
            zooms += 1;
            match scene.frame(SURFACE) {
                Ok(frame) => assert!(frame.raster.steps() <= 1000),
                Err(err) => break err,
            }
        };
        assert!(matches!(err, DdaError::TooManySteps { max: 1000, .. }));
        // the viewport survives so zooming back out recovers
        scene.zoom(ZoomDirection::Out).unwrap();
        assert!(scene.frame(SURFACE).is_ok());
    }

    #[test]
    fn labels_can_be_disabled() {
        let mut scene = DdaScene::builder().grid_labels(false).build();
        let frame = scene.frame(SURFACE).unwrap();
        assert!(frame.grid_labels.is_empty());
        scene.set_show_grid_labels(true);
        assert!(!scene.frame(SURFACE).unwrap().grid_labels.is_empty());
    }

    #[test]
    fn theta_mode_frame() {
        let mut scene = DdaScene::builder()
            .scale(100.0)
            .line(LineParameters::point_and_theta(Point::new(0.0, 0.0), 0.0, 2.0))
            .build();
        let frame = scene.frame(SURFACE).unwrap();
        assert_eq!(frame.raster.steps(), 200);
        assert_eq!(frame.raster.closing(), NdcPoint::new(0.5, 0.0));
    }
}
