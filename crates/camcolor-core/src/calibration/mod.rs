//! Sensor color calibration
//!
//! This module provides:
//! - 3x4 color-correction matrices and their interpolation
//! - One- and two-illuminant calibration sets
//! - DNG color calibration import/export
//! - Gray-world white balance estimation

pub mod color_calibration;
pub mod color_matrix;
pub mod dng;
pub mod white_balance;

pub use color_calibration::{CalibrationPoint, ColorCalibration};
pub use color_matrix::{ColorMatrix, normalization_row};
pub use dng::{CalibrationIlluminant, DngColorProfile};
pub use white_balance::{WhiteBalanceConfig, gray_world_kelvin};
