//! Mathematical operations for calibration
//!
//! This module provides:
//! - 3x3 matrix operations, generic over `f32`/`f64`
//! - Adjugate 3x3 inversion
//! - Inverse-temperature interpolation

pub mod interpolation;
pub mod matrix;

pub use interpolation::{kelvin_at_mired_alpha, mired_alpha, mix};
pub use matrix::{Matrix3x3, SRGB_TO_XYZ, invert3x3};
