//! Error types for camcolor

use thiserror::Error;

/// Result type for camcolor operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the calibration layer.
///
/// The numeric primitives (`xy_to_cct`, `kelvin_to_xy`, `invert3x3`,
/// `ColorMatrix::interpolate`) never return these; out-of-range values are
/// reported through a [`DiagnosticSink`](crate::DiagnosticSink) instead.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A color temperature that cannot be used as an interpolation point
    #[error("Invalid color temperature: {0} K")]
    InvalidTemperature(i32),

    /// Calibration points that cannot form a calibration set
    #[error("Invalid calibration: {0}")]
    InvalidCalibration(String),

    /// DNG calibration illuminant with no known color temperature
    #[error("Unknown calibration illuminant: tag value {0}")]
    UnknownIlluminant(u16),

    /// Buffer size mismatch
    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSize { expected: usize, actual: usize },
}
