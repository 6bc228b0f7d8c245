//! Sensor color calibration sets
//!
//! A sensor is characterized under one or two reference illuminants. The
//! color matrix for any other white balance is found by interpolating
//! between the two in inverse temperature.

use crate::calibration::ColorMatrix;
use crate::error::{Error, Result};
use crate::math::mired_alpha;

/// A color matrix measured under an illuminant of known temperature
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalibrationPoint {
    /// Illuminant color temperature in Kelvin
    pub kelvin: i32,
    /// Raw-to-RGB matrix measured under that illuminant
    pub matrix: ColorMatrix,
}

impl CalibrationPoint {
    #[inline]
    pub const fn new(kelvin: i32, matrix: ColorMatrix) -> Self {
        Self { kelvin, matrix }
    }
}

/// One or two calibration points for a sensor
///
/// Deserialization applies the same temperature checks as
/// [`ColorCalibration::dual`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "CalibrationPoints"))]
pub struct ColorCalibration {
    first: CalibrationPoint,
    second: Option<CalibrationPoint>,
}

/// Unvalidated serialized form of [`ColorCalibration`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct CalibrationPoints {
    first: CalibrationPoint,
    second: Option<CalibrationPoint>,
}

#[cfg(feature = "serde")]
impl TryFrom<CalibrationPoints> for ColorCalibration {
    type Error = Error;

    fn try_from(points: CalibrationPoints) -> Result<Self> {
        match points.second {
            Some(second) => Self::dual(points.first, second),
            None if points.first.kelvin <= 0 => {
                Err(Error::InvalidTemperature(points.first.kelvin))
            }
            None => Ok(Self::single(points.first)),
        }
    }
}

impl ColorCalibration {
    /// A calibration with a single illuminant; every white balance uses its
    /// matrix unchanged
    pub fn single(point: CalibrationPoint) -> Self {
        Self {
            first: point,
            second: None,
        }
    }

    /// A calibration interpolating between two illuminants
    ///
    /// Both temperatures must be positive and distinct.
    pub fn dual(first: CalibrationPoint, second: CalibrationPoint) -> Result<Self> {
        for kelvin in [first.kelvin, second.kelvin] {
            if kelvin <= 0 {
                return Err(Error::InvalidTemperature(kelvin));
            }
        }
        if first.kelvin == second.kelvin {
            return Err(Error::InvalidCalibration(format!(
                "both calibration points are at {}K",
                first.kelvin
            )));
        }
        Ok(Self {
            first,
            second: Some(second),
        })
    }

    #[inline]
    pub fn first(&self) -> &CalibrationPoint {
        &self.first
    }

    #[inline]
    pub fn second(&self) -> Option<&CalibrationPoint> {
        self.second.as_ref()
    }

    /// Number of calibration illuminants, 1 or 2
    #[inline]
    pub fn illuminant_count(&self) -> usize {
        if self.second.is_some() { 2 } else { 1 }
    }

    /// Raw-to-RGB matrix for a scene white balance of `kelvin`
    ///
    /// With two points the matrices are blended with
    /// [`ColorMatrix::interpolate`] at the inverse-temperature position of
    /// `kelvin`; temperatures beyond either point extrapolate. At exactly
    /// a calibration temperature the stored matrix is returned unchanged.
    pub fn matrix_for_kelvin(&self, kelvin: i32) -> Result<ColorMatrix> {
        if kelvin <= 0 {
            return Err(Error::InvalidTemperature(kelvin));
        }

        let Some(second) = &self.second else {
            return Ok(self.first.matrix);
        };

        let alpha = mired_alpha(kelvin, self.first.kelvin, second.kelvin) as f32;
        tracing::debug!(kelvin, alpha, "Interpolating color calibration");

        Ok(ColorMatrix::interpolate(
            &self.first.matrix,
            &second.matrix,
            alpha,
        ))
    }
}
