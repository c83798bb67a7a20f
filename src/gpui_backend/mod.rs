//! GPUI integration for gpui_dda.
//!
//! This module provides a GPUI view that renders a [`DdaScene`](crate::scene::DdaScene)
//! and handles drag panning, wheel zoom, the live cursor readout, and the
//! small-window overlay.

mod config;
mod frame;
mod paint;
mod state;
mod view;

pub use config::DdaViewConfig;
pub use view::{DdaHandle, GpuiDdaView};
