//! DNG color calibration data
//!
//! DNG stores color calibration as XYZ→camera matrices tagged with a
//! `CalibrationIlluminant` code, plus a per-channel black level. This module
//! converts between that representation and [`ColorCalibration`]. Reading
//! and writing the TIFF container itself is left to the caller.

use crate::calibration::{CalibrationPoint, ColorCalibration, ColorMatrix};
use crate::color::{Chromaticity, kelvin_to_xy};
use crate::diagnostics::DiagnosticSink;
use crate::error::{Error, Result};
use crate::math::{Matrix3x3, SRGB_TO_XYZ, mired_alpha, mix};

/// Color temperature for each `CalibrationIlluminant` value. Zero marks a
/// code with no usable temperature.
const ILLUMINANT_KELVIN: [i32; 26] = [
    0,    // 0 = Unknown
    6500, // 1 = Daylight
    5000, // 2 = Fluorescent
    3200, // 3 = Tungsten
    5600, // 4 = Flash
    0, 0, 0, 0, // 5..8 unassigned
    6500, // 9 = Fine weather
    6000, // 10 = Cloudy weather
    8000, // 11 = Shade
    6430, // 12 = Daylight fluorescent
    6350, // 13 = Day white fluorescent
    4230, // 14 = Cool white fluorescent
    3450, // 15 = White fluorescent
    0,    // 16 unassigned
    2856, // 17 = Standard light A
    4874, // 18 = Standard light B
    6774, // 19 = Standard light C
    5503, // 20 = D55
    6504, // 21 = D65
    7504, // 22 = D75
    5003, // 23 = D50
    3200, // 24 = ISO studio tungsten
    0,    // 25+ = Other
];

/// A DNG `CalibrationIlluminant` value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalibrationIlluminant(u16);

impl CalibrationIlluminant {
    pub const UNKNOWN: Self = Self(0);
    pub const DAYLIGHT: Self = Self(1);
    pub const TUNGSTEN: Self = Self(3);
    pub const STANDARD_LIGHT_A: Self = Self(17);
    pub const D55: Self = Self(20);
    pub const D65: Self = Self(21);
    pub const D75: Self = Self(22);
    pub const D50: Self = Self(23);
    pub const OTHER: Self = Self(255);

    /// Wrap a tag value; codes past the table map to "other"
    pub fn from_tag(value: u16) -> Self {
        if (value as usize) < ILLUMINANT_KELVIN.len() - 1 {
            Self(value)
        } else {
            Self::OTHER
        }
    }

    #[inline]
    pub fn tag(&self) -> u16 {
        self.0
    }

    /// Nominal color temperature, or 0 when the code has none
    pub fn kelvin(&self) -> i32 {
        let idx = (self.0 as usize).min(ILLUMINANT_KELVIN.len() - 1);
        ILLUMINANT_KELVIN[idx]
    }
}

/// Illuminant and temperature of the low-temperature export sample
pub const EXPORT_LOW: (CalibrationIlluminant, i32) = (CalibrationIlluminant::STANDARD_LIGHT_A, 3000);
/// Illuminant and temperature of the high-temperature export sample
pub const EXPORT_HIGH: (CalibrationIlluminant, i32) = (CalibrationIlluminant::D65, 6500);

/// Color calibration fields of a DNG file
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DngColorProfile {
    /// `CalibrationIlluminant1`
    pub illuminant_1: CalibrationIlluminant,
    /// `ColorMatrix1`: XYZ to camera under illuminant 1
    pub color_matrix_1: Matrix3x3<f64>,
    /// `CalibrationIlluminant2`
    pub illuminant_2: CalibrationIlluminant,
    /// `ColorMatrix2`: XYZ to camera under illuminant 2
    pub color_matrix_2: Matrix3x3<f64>,
    /// `BlackLevel` per channel, in raw units
    pub black_level: [i32; 3],
    /// `AsShotWhiteXY`
    pub as_shot_white_xy: Chromaticity,
}

impl DngColorProfile {
    /// Derive DNG calibration fields from a sensor calibration
    ///
    /// The calibration is sampled at 3000K and 6500K (tagged Standard light A
    /// and D65). Each sample's linear part is composed with linear sRGB→XYZ
    /// and inverted to give XYZ→camera. Black levels are recovered from the
    /// offset column of each sample and blended at `white_balance` in inverse
    /// temperature.
    ///
    /// Returns `None` when `white_balance` is not a positive temperature.
    pub fn from_calibration(
        calibration: &ColorCalibration,
        white_balance: i32,
        sink: &dyn DiagnosticSink,
    ) -> Option<Self> {
        if white_balance <= 0 {
            return None;
        }
        let low = calibration.matrix_for_kelvin(EXPORT_LOW.1).ok()?;
        let high = calibration.matrix_for_kelvin(EXPORT_HIGH.1).ok()?;
        let as_shot_white_xy = kelvin_to_xy(white_balance, sink)?;

        let (xyz_to_raw_low, black_low) = export_sample(&low);
        let (xyz_to_raw_high, black_high) = export_sample(&high);

        // 1 at the low sample, 0 at the high sample
        let alpha = mired_alpha(white_balance, EXPORT_HIGH.1, EXPORT_LOW.1) as f32;
        let black_level: [i32; 3] =
            std::array::from_fn(|i| -(mix(black_high[i], black_low[i], alpha) + 0.5).floor() as i32);

        tracing::debug!(
            white_balance,
            alpha,
            ?black_low,
            ?black_high,
            ?black_level,
            "Derived DNG black level"
        );

        Some(Self {
            illuminant_1: EXPORT_LOW.0,
            color_matrix_1: xyz_to_raw_low,
            illuminant_2: EXPORT_HIGH.0,
            color_matrix_2: xyz_to_raw_high,
            black_level,
            as_shot_white_xy,
        })
    }

    /// Rebuild a sensor calibration from these fields
    pub fn to_calibration(&self) -> Result<ColorCalibration> {
        let black = self.black_level.map(|v| v as f32);
        ColorCalibration::from_dng(
            self.illuminant_1,
            &self.color_matrix_1,
            Some((self.illuminant_2, &self.color_matrix_2)),
            black,
        )
    }
}

/// XYZ→raw matrix and raw-domain black level for one calibration sample
fn export_sample(matrix: &ColorMatrix) -> (Matrix3x3<f64>, [f32; 3]) {
    let linear = matrix.linear().cast::<f64>();
    let raw_to_xyz = SRGB_TO_XYZ.multiply(&linear);
    let xyz_to_raw = raw_to_xyz.inverse();

    let rgb_to_raw = linear.inverse();
    let offsets = matrix.offsets().map(f64::from);
    let black = rgb_to_raw.multiply_vec(offsets).map(|v| v as f32);

    (xyz_to_raw, black)
}

/// Camera→RGB color matrix from a DNG XYZ→camera matrix and black level
fn import_matrix(xyz_to_camera: &Matrix3x3<f64>, black_level: [f32; 3]) -> ColorMatrix {
    let rgb_to_camera = xyz_to_camera.multiply(&SRGB_TO_XYZ);
    let camera_to_rgb = rgb_to_camera.inverse();

    let negated = black_level.map(|v| -(v as f64));
    let offsets = camera_to_rgb.multiply_vec(negated).map(|v| v as f32);

    ColorMatrix::from_parts(&camera_to_rgb.cast::<f32>(), offsets)
}

impl ColorCalibration {
    /// Build a calibration from DNG color fields
    ///
    /// `xyz_to_camera` is a DNG `ColorMatrix` tag value. The camera→RGB
    /// linear part is `(xyz_to_camera · sRGB→XYZ)⁻¹`, and the offset column
    /// maps `-black_level` through it.
    pub fn from_dng(
        illuminant: CalibrationIlluminant,
        xyz_to_camera: &Matrix3x3<f64>,
        second: Option<(CalibrationIlluminant, &Matrix3x3<f64>)>,
        black_level: [f32; 3],
    ) -> Result<Self> {
        let first = CalibrationPoint::new(
            illuminant_kelvin(illuminant)?,
            import_matrix(xyz_to_camera, black_level),
        );

        match second {
            None => Ok(Self::single(first)),
            Some((illuminant, xyz_to_camera)) => {
                let second = CalibrationPoint::new(
                    illuminant_kelvin(illuminant)?,
                    import_matrix(xyz_to_camera, black_level),
                );
                Self::dual(first, second)
            }
        }
    }
}

fn illuminant_kelvin(illuminant: CalibrationIlluminant) -> Result<i32> {
    match illuminant.kelvin() {
        0 => Err(Error::UnknownIlluminant(illuminant.tag())),
        k => Ok(k),
    }
}
