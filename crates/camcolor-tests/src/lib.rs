//! # camcolor-tests
//!
//! Fixtures and accuracy metrics for testing camcolor-core.
//!
//! This crate provides:
//! - Reference sensor calibrations measured under tungsten and daylight
//! - Seeded random matrices and raw samples
//! - Perceptual accuracy metrics (CIEDE2000 via `palette`)

pub mod accuracy;
pub mod patterns;

pub use accuracy::{DeltaEStats, compare_linear_rgb, delta_e_2000, max_abs_diff, neutrality_error};
pub use patterns::{
    DAYLIGHT_7000K, TUNGSTEN_3200K, random_calibration_matrix, random_raw_samples,
    reference_calibration, well_conditioned_matrices,
};
