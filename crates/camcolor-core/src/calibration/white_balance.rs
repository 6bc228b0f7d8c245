//! Gray-world white balance estimation

use crate::calibration::ColorCalibration;
use crate::math::kelvin_at_mired_alpha;

/// Limits and damping for automatic white balance updates
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WhiteBalanceConfig {
    /// Lowest white balance the estimator may select, in Kelvin
    pub min_kelvin: i32,
    /// Highest white balance the estimator may select, in Kelvin
    pub max_kelvin: i32,
    /// Weight of the current white balance in each update. 0 jumps straight
    /// to the estimate, 1 never moves.
    pub smoothness: f32,
}

impl Default for WhiteBalanceConfig {
    fn default() -> Self {
        Self {
            min_kelvin: 3200,
            max_kelvin: 7000,
            smoothness: 0.5,
        }
    }
}

impl WhiteBalanceConfig {
    /// Create the default configuration (3200–7000K, smoothness 0.5)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the allowed white balance range
    pub fn with_range(mut self, min_kelvin: i32, max_kelvin: i32) -> Self {
        self.min_kelvin = min_kelvin;
        self.max_kelvin = max_kelvin;
        self
    }

    /// Set the smoothing weight
    pub fn with_smoothness(mut self, smoothness: f32) -> Self {
        self.smoothness = smoothness;
        self
    }

    /// Next white balance given the current one and a fresh estimate
    ///
    /// The estimate is clamped to the configured range, then blended with
    /// `current`; the result is truncated toward zero.
    pub fn update(&self, current: i32, target: i32) -> i32 {
        let target = target.max(self.min_kelvin).min(self.max_kelvin);
        (self.smoothness * current as f32 + (1.0 - self.smoothness) * target as f32) as i32
    }
}

/// Estimate scene white balance under the gray-world assumption
///
/// `raw_means` are the mean raw values of the red, green and blue channels.
/// Both calibration matrices are applied to them (linear part only) and the
/// inverse-temperature interpolant that makes output red equal output blue
/// is solved for. Returns `None` for a single-illuminant calibration or when
/// no positive, finite temperature satisfies the constraint.
pub fn gray_world_kelvin(calibration: &ColorCalibration, raw_means: [f32; 3]) -> Option<i32> {
    let second = calibration.second()?;
    let first = calibration.first();

    let rgb_1 = first.matrix.linear().multiply_vec(raw_means);
    let rgb_2 = second.matrix.linear().multiply_vec(raw_means);

    let alpha = (rgb_1[2] - rgb_1[0]) / (rgb_2[0] - rgb_1[0] + rgb_1[2] - rgb_2[2]);
    let kelvin = kelvin_at_mired_alpha(alpha as f64, first.kelvin, second.kelvin);

    tracing::debug!(alpha, kelvin, "Gray-world white balance");

    if !kelvin.is_finite() || kelvin <= 0.0 || kelvin > i32::MAX as f64 {
        return None;
    }
    Some(kelvin as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calibration::{CalibrationPoint, ColorMatrix};

    fn diagonal(r: f32, g: f32, b: f32) -> ColorMatrix {
        ColorMatrix::new([
            r, 0.0, 0.0, 0.0, //
            0.0, g, 0.0, 0.0, //
            0.0, 0.0, b, 0.0,
        ])
    }

    fn calibration() -> ColorCalibration {
        ColorCalibration::dual(
            CalibrationPoint::new(3200, diagonal(1.0, 1.0, 1.0)),
            CalibrationPoint::new(7000, diagonal(2.0, 1.0, 0.5)),
        )
        .unwrap()
    }

    #[test]
    fn test_gray_world_midpoint() {
        // Red = blue halfway between the two matrices in mired space
        let k = gray_world_kelvin(&calibration(), [1.0, 1.0, 2.0]).unwrap();
        assert!((k - 4392).abs() <= 1, "kelvin = {}", k);
    }

    #[test]
    fn test_gray_world_at_calibration_point() {
        // Already neutral under the first matrix
        let k = gray_world_kelvin(&calibration(), [1.0, 1.0, 1.0]).unwrap();
        assert!((k - 3200).abs() <= 1, "kelvin = {}", k);
    }

    #[test]
    fn test_gray_world_needs_two_points() {
        let cal = ColorCalibration::single(CalibrationPoint::new(5000, diagonal(1.0, 1.0, 1.0)));
        assert_eq!(gray_world_kelvin(&cal, [1.0, 1.0, 2.0]), None);
    }

    #[test]
    fn test_gray_world_degenerate() {
        // Identical matrices leave red - blue independent of alpha
        let cal = ColorCalibration::dual(
            CalibrationPoint::new(3200, diagonal(1.0, 1.0, 1.0)),
            CalibrationPoint::new(7000, diagonal(1.0, 1.0, 1.0)),
        )
        .unwrap();
        assert_eq!(gray_world_kelvin(&cal, [1.0, 1.0, 2.0]), None);
    }

    #[test]
    fn test_update_clamps_and_smooths() {
        let config = WhiteBalanceConfig::default();
        assert_eq!(config.update(5000, 5000), 5000);
        // Target clamped to 7000, halfway from 5000
        assert_eq!(config.update(5000, 12000), 6000);
        // Target clamped to 3200
        assert_eq!(config.update(3200, 1000), 3200);

        let instant = config.with_smoothness(0.0);
        assert_eq!(instant.update(5000, 6500), 6500);

        let frozen = config.with_smoothness(1.0);
        assert_eq!(frozen.update(5000, 6500), 5000);

        let wide = WhiteBalanceConfig::new().with_range(2000, 10000).with_smoothness(0.0);
        assert_eq!(wide.update(5000, 9000), 9000);
    }
}
