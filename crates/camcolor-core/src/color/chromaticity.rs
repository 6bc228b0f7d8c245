//! Correlated color temperature ↔ CIE 1931 xy chromaticity
//!
//! Both directions are closed-form approximations:
//!
//! - xy → CCT uses the exponential fit of Hernández-Andrés et al. (1999),
//!   "Calculating correlated color temperatures across the entire gamut of
//!   daylight and skylight chromaticities". Accurate within 3000–50000K.
//! - CCT → xy uses the piecewise cubic fit of Kim et al. (2002), "Design of
//!   Advanced Color Temperature Control System for HDTV Applications".
//!   Accurate within 1667–25000K.
//!
//! All arithmetic is single precision, with fixed constants and evaluation
//! order.

use crate::diagnostics::{Diagnostic, DiagnosticSink, check_range};

/// Accurate domain of [`xy_to_cct`]
pub const XY_TO_CCT_RANGE: (i32, i32) = (3000, 50000);

/// Accurate domain of [`kelvin_to_xy`]
pub const KELVIN_TO_XY_RANGE: (i32, i32) = (1667, 25000);

/// CIE 1931 xy chromaticity coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromaticity {
    pub x: f32,
    pub y: f32,
}

impl Chromaticity {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Correlated color temperature of this chromaticity, see [`xy_to_cct`]
    #[inline]
    pub fn to_cct(&self, sink: &dyn DiagnosticSink) -> i32 {
        xy_to_cct(self.x, self.y, sink)
    }

    /// Chromaticity of a blackbody at `kelvin`, see [`kelvin_to_xy`]
    #[inline]
    pub fn from_kelvin(kelvin: i32, sink: &dyn DiagnosticSink) -> Option<Self> {
        kelvin_to_xy(kelvin, sink)
    }

    /// The z coordinate, `1 - x - y`
    #[inline]
    pub fn z(&self) -> f32 {
        1.0 - self.x - self.y
    }
}

impl From<(f32, f32)> for Chromaticity {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

// Epicenter of the isotemperature lines
const X_E: f32 = 0.3366;
const Y_E: f32 = 0.1735;

const A0: f32 = -949.86315;
const A1: f32 = 6253.80338;
const T1: f32 = 0.92159;
const A2: f32 = 28.70599;
const T2: f32 = 0.20039;
const A3: f32 = 0.00004;
const T3: f32 = 0.07125;

/// Convert xy chromaticity to correlated color temperature in Kelvin
///
/// Results outside 3000–50000K are still returned, after one out-of-range
/// diagnostic is sent to `sink`.
pub fn xy_to_cct(x: f32, y: f32, sink: &dyn DiagnosticSink) -> i32 {
    let n = (x - X_E) / (y - Y_E);

    let cct = A0 + A1 * (-n / T1).exp() + A2 * (-n / T2).exp() + A3 * (-n / T3).exp();
    let rounded = (cct + 0.5).floor() as i32;

    if !(cct >= XY_TO_CCT_RANGE.0 as f32 && cct <= XY_TO_CCT_RANGE.1 as f32) {
        sink.emit(&Diagnostic::OutOfRange {
            operation: "xy_to_cct",
            value: rounded,
            accurate_min: XY_TO_CCT_RANGE.0,
            accurate_max: XY_TO_CCT_RANGE.1,
        });
    }
    rounded
}

/// Cubic coefficients, highest power first
type Cubic = [f32; 4];

// x(u), u = 1000/T
const X_UP_TO_4000K: Cubic = [-0.2661239, -0.2343580, 0.8776956, 0.179910];
const X_ABOVE_4000K: Cubic = [-3.0258469, 2.1070379, 0.2226347, 0.24039];

// y(x)
const Y_UP_TO_2222K: Cubic = [-1.1063814, -1.34811020, 2.18555832, -0.20219683];
const Y_UP_TO_4000K: Cubic = [-0.9549476, -1.37418593, 2.09137015, -0.16748867];
const Y_ABOVE_4000K: Cubic = [3.0817580, -5.87338670, 3.75112997, -0.37001483];

#[inline(always)]
fn cubic(c: &Cubic, t: f32) -> f32 {
    c[0] * t * t * t + c[1] * t * t + c[2] * t + c[3]
}

/// Convert a blackbody color temperature in Kelvin to xy chromaticity
///
/// Temperatures outside 1667–25000K are extrapolated, after one
/// out-of-range diagnostic is sent to `sink`. Returns `None` for 0K, which
/// has no finite chromaticity; nothing is emitted in that case.
pub fn kelvin_to_xy(kelvin: i32, sink: &dyn DiagnosticSink) -> Option<Chromaticity> {
    if kelvin == 0 {
        return None;
    }

    check_range(
        sink,
        "kelvin_to_xy",
        kelvin,
        KELVIN_TO_XY_RANGE.0,
        KELVIN_TO_XY_RANGE.1,
    );

    let inv_kilo_k = 1000.0f32 / kelvin as f32;

    let x = if kelvin <= 4000 {
        cubic(&X_UP_TO_4000K, inv_kilo_k)
    } else {
        cubic(&X_ABOVE_4000K, inv_kilo_k)
    };

    let y = if kelvin <= 2222 {
        cubic(&Y_UP_TO_2222K, x)
    } else if kelvin <= 4000 {
        cubic(&Y_UP_TO_4000K, x)
    } else {
        cubic(&Y_ABOVE_4000K, x)
    };

    Some(Chromaticity { x, y })
}
