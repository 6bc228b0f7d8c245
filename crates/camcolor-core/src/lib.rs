//! # camcolor-core - Camera color calibration
//!
//! Conversions and calibration math for raw camera pipelines:
//!
//! - CIE 1931 chromaticity ↔ correlated color temperature
//! - 3x4 raw-to-RGB color matrices, interpolated between two calibration
//!   illuminants in inverse temperature
//! - Generic 3x3 matrix inversion for `f32` and `f64`
//! - DNG `ColorMatrix`/`CalibrationIlluminant`/`BlackLevel` import and export
//! - Gray-world white balance estimation
//! - Runtime-dispatched batch kernels (AVX2, SSE4.1, NEON)
//!
//! Conversions outside their accurate temperature range still return a
//! value and report a [`Diagnostic`] to the supplied [`DiagnosticSink`].
//!
//! ## Quick Start
//!
//! ```
//! use camcolor_core::{CalibrationPoint, ColorCalibration, ColorMatrix, TracingSink, xy_to_cct};
//!
//! // D65 white point
//! let cct = xy_to_cct(0.3127, 0.3290, &TracingSink);
//! assert!((cct - 6500).abs() <= 2);
//!
//! let tungsten = CalibrationPoint::new(3200, ColorMatrix::IDENTITY);
//! let daylight = CalibrationPoint::new(7000, ColorMatrix::IDENTITY);
//! let calibration = ColorCalibration::dual(tungsten, daylight).unwrap();
//!
//! let matrix = calibration.matrix_for_kelvin(cct).unwrap();
//! let rgb = matrix.apply([0.2, 0.4, 0.3]);
//! # let _ = rgb;
//! ```

pub mod calibration;
pub mod color;
pub mod diagnostics;
pub mod error;
pub mod math;
pub mod simd;

pub use calibration::{
    CalibrationIlluminant, CalibrationPoint, ColorCalibration, ColorMatrix, DngColorProfile,
    WhiteBalanceConfig, gray_world_kelvin, normalization_row,
};
pub use color::{Chromaticity, WhitePoint, kelvin_to_xy, xy_to_cct};
pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, NullSink, Severity, TracingSink};
pub use error::{Error, Result};
pub use math::{Matrix3x3, invert3x3};

/// Version of camcolor-core
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
