//! Test fixtures and seeded random data
//!
//! Random generators use ChaCha8 so every run sees the same values.

use camcolor_core::{CalibrationPoint, ColorCalibration, ColorMatrix, Matrix3x3};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Raw-to-sRGB matrix of a phone sensor measured under 3200K tungsten.
/// Offsets are in 10-bit raw units.
pub const TUNGSTEN_3200K: ColorMatrix = ColorMatrix::new([
    1.6697, -0.2693, -0.4004, -42.4346, //
    -0.3576, 1.0615, 1.5949, -37.1158, //
    -0.2175, -1.8751, 6.9640, -26.6970,
]);

/// The same sensor measured under 7000K daylight
pub const DAYLIGHT_7000K: ColorMatrix = ColorMatrix::new([
    2.2997, -0.4478, 0.1706, -39.0923, //
    -0.3826, 1.5906, -0.2080, -25.4311, //
    -0.0888, -0.7344, 2.2832, -20.0826,
]);

/// Two-illuminant calibration built from [`TUNGSTEN_3200K`] and [`DAYLIGHT_7000K`]
pub fn reference_calibration() -> ColorCalibration {
    ColorCalibration::dual(
        CalibrationPoint::new(3200, TUNGSTEN_3200K),
        CalibrationPoint::new(7000, DAYLIGHT_7000K),
    )
    .expect("reference calibration points are valid")
}

/// Diagonally dominant random matrices, safely invertible
///
/// Diagonal entries lie in `[2, 4]`, off-diagonal entries in `[-0.5, 0.5]`.
pub fn well_conditioned_matrices(seed: u64, count: usize) -> Vec<Matrix3x3<f64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let mut m = Matrix3x3::<f64>::zero();
            for row in 0..3 {
                for col in 0..3 {
                    m[row][col] = if row == col {
                        rng.gen_range(2.0..4.0)
                    } else {
                        rng.gen_range(-0.5..0.5)
                    };
                }
            }
            m
        })
        .collect()
}

/// A plausible raw-to-RGB matrix: rows sum to roughly 1, with a black
/// level offset
pub fn random_calibration_matrix(rng: &mut ChaCha8Rng) -> ColorMatrix {
    let mut values = [0.0f32; 12];
    for row in 0..3 {
        let a: f32 = rng.gen_range(-0.6..0.0);
        let b: f32 = rng.gen_range(-0.6..0.0);
        let diag = 1.0 - a - b + rng.gen_range(-0.1..0.1);
        let (c0, c1, c2) = match row {
            0 => (diag, a, b),
            1 => (a, diag, b),
            _ => (a, b, diag),
        };
        values[row * 4] = c0;
        values[row * 4 + 1] = c1;
        values[row * 4 + 2] = c2;
        values[row * 4 + 3] = -rng.gen_range(16.0..64.0);
    }
    ColorMatrix::new(values)
}

/// Random 10-bit raw triples
pub fn random_raw_samples(seed: u64, count: usize) -> Vec<[u16; 3]> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| [rng.gen_range(0..1024), rng.gen_range(0..1024), rng.gen_range(0..1024)])
        .collect()
}
