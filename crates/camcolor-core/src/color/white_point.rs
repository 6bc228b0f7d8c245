//! CIE Standard Illuminant White Points
//!
//! White points as CIE 1931 xy chromaticities (2° observer) together with
//! the nominal correlated color temperature of each illuminant.

use crate::color::Chromaticity;

/// A white point definition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhitePoint {
    /// Name of the illuminant
    pub name: &'static str,
    /// CIE 1931 xy chromaticity
    pub xy: Chromaticity,
    /// Nominal correlated color temperature in Kelvin
    pub cct: i32,
}

impl WhitePoint {
    /// Create a new white point
    pub const fn new(name: &'static str, x: f32, y: f32, cct: i32) -> Self {
        Self {
            name,
            xy: Chromaticity::new(x, y),
            cct,
        }
    }

    /// XYZ tristimulus values normalized to Y = 1
    pub fn xyz(&self) -> [f64; 3] {
        let x = self.xy.x as f64;
        let y = self.xy.y as f64;
        if y == 0.0 {
            return [0.0, 0.0, 0.0];
        }
        [x / y, 1.0, (1.0 - x - y) / y]
    }
}

// ============================================================================
// Standard CIE Illuminants
// ============================================================================

/// CIE Standard Illuminant A (Incandescent)
pub const A: WhitePoint = WhitePoint::new("A", 0.44757, 0.40745, 2856);

/// CIE Standard Illuminant D50 (Horizon Light)
pub const D50: WhitePoint = WhitePoint::new("D50", 0.34567, 0.35850, 5003);

/// CIE Standard Illuminant D55 (Mid-morning/Mid-afternoon Daylight)
pub const D55: WhitePoint = WhitePoint::new("D55", 0.33242, 0.34743, 5503);

/// CIE Standard Illuminant D65 (Noon Daylight)
///
/// Standard white point for sRGB and most display color spaces.
pub const D65: WhitePoint = WhitePoint::new("D65", 0.31271, 0.32902, 6504);

/// CIE Standard Illuminant D75 (North Sky Daylight)
pub const D75: WhitePoint = WhitePoint::new("D75", 0.29902, 0.31485, 7504);
