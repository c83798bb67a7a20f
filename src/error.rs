//! Error types for viewport construction and rasterization.

use thiserror::Error;

/// Errors raised when geometry cannot be mapped or rasterized.
///
/// Degenerate geometry inside a valid viewport (zero-length segments, empty
/// grid ranges) is handled locally and never reaches this type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DdaError {
    /// The render surface has zero, negative, or non-finite dimensions.
    #[error("invalid surface size {width}x{height}")]
    InvalidSurface {
        /// Surface width in pixels.
        width: f64,
        /// Surface height in pixels.
        height: f64,
    },
    /// The viewport scale is zero, negative, or non-finite.
    #[error("invalid scale {0}: pixels per world unit must be positive and finite")]
    InvalidScale(f64),
    /// An input coordinate was NaN or infinite.
    #[error("non-finite {0}")]
    NonFinite(&'static str),
    /// The segment would need more DDA steps than the configured limit.
    #[error("segment needs {steps} steps, above the limit of {max}")]
    TooManySteps {
        /// Rounded step count the segment asked for.
        steps: f64,
        /// Largest step count accepted.
        max: usize,
    },
    /// The viewport bounds collapsed to zero extent.
    #[error("degenerate viewport: bounds have no extent")]
    DegenerateViewport,
}
