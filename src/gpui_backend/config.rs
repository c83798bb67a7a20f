/// Configuration for the GPUI DDA view.
#[derive(Debug, Clone)]
pub struct DdaViewConfig {
    /// Pixel threshold for starting a drag.
    pub drag_threshold_px: f64,
    /// Below this width or height the view shows an "enlarge window" overlay.
    pub min_surface_px: f64,
    /// Show the coordinate readout next to the cursor.
    pub show_readout: bool,
    /// Offset of the readout from the cursor, in pixels.
    pub readout_offset: (f64, f64),
    /// Line height used to convert line-based wheel deltas to pixels.
    pub wheel_line_height_px: f32,
}

impl Default for DdaViewConfig {
    fn default() -> Self {
        Self {
            drag_threshold_px: 4.0,
            min_surface_px: 500.0,
            show_readout: true,
            readout_offset: (1.0, -15.0),
            wheel_line_height_px: 16.0,
        }
    }
}
