//! Interpolation helpers for calibration data
//!
//! Color calibrations are interpolated linearly in inverse temperature
//! (mired space), not in Kelvin.

use num_traits::Float;

/// Weighted mix of two values
///
/// Returns `(1 - alpha) * a + alpha * b`, evaluated in exactly that order.
#[inline]
pub fn mix<T: Float>(a: T, b: T, alpha: T) -> T {
    (T::one() - alpha) * a + alpha * b
}

/// Interpolant placing `kelvin` between `kelvin_a` (0) and `kelvin_b` (1)
/// in inverse temperature
///
/// Values outside `[0, 1]` extrapolate. Non-positive temperatures yield
/// non-finite results.
#[inline]
pub fn mired_alpha(kelvin: i32, kelvin_a: i32, kelvin_b: i32) -> f64 {
    let inv = 1.0 / kelvin as f64;
    let inv_a = 1.0 / kelvin_a as f64;
    let inv_b = 1.0 / kelvin_b as f64;
    (inv - inv_a) / (inv_b - inv_a)
}

/// Temperature at interpolant `alpha` between `kelvin_a` and `kelvin_b`
///
/// Inverse of [`mired_alpha`], before rounding.
#[inline]
pub fn kelvin_at_mired_alpha(alpha: f64, kelvin_a: i32, kelvin_b: i32) -> f64 {
    let inv_a = 1.0 / kelvin_a as f64;
    let inv_b = 1.0 / kelvin_b as f64;
    1.0 / (alpha * (inv_b - inv_a) + inv_a)
}
