//! gpui_dda visualizes the Digital Differential Analyzer (DDA) line algorithm.
//! A segment is rasterized into evenly stepped samples and drawn over an
//! integer grid on a pannable, zoomable viewport.
//!
//! The core ([`raster`], [`view`], [`transform`], [`grid`]) is backend-agnostic;
//! the `gpui` feature adds an interactive GPUI view.

#![forbid(unsafe_code)]

pub mod error;
pub mod geom;
pub mod grid;
pub mod interaction;
pub mod labels;
pub mod line;
pub mod raster;
pub mod render;
pub mod scene;
pub mod style;
pub mod transform;
pub mod view;

#[cfg(feature = "gpui")]
pub mod gpui_backend;

pub use error::DdaError;
pub use geom::{NdcPoint, Point, ScreenPoint, ScreenRect, SurfaceSize};
pub use grid::{GridAxis, GridLine, GridLines, MAX_GRID_LINES_PER_AXIS, generate_grid};
pub use interaction::{DragState, pan_viewport, zoom_viewport};
pub use labels::{CoordinateLabel, LabelKind, format_readout};
pub use line::{InputLimits, LineMode, LineParameters, Segment};
pub use raster::{
    ClosingPoint, DEFAULT_MAX_STEPS, DdaSteps, Raster, dda_steps, rasterize, rasterize_with_limit,
};
pub use render::{
    Color, LineSegment, LineStyle, MarkerShape, MarkerStyle, RectStyle, RenderCommand,
    RenderList, TextStyle, build_scene_commands,
};
pub use scene::{DdaScene, DdaSceneBuilder, SceneFrame};
pub use style::Theme;
pub use transform::Transform;
pub use view::{Range, Viewport, ZoomDirection};

#[cfg(feature = "gpui")]
pub use gpui_backend::{DdaHandle, DdaViewConfig, GpuiDdaView};
