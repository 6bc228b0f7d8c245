//! Color temperature and chromaticity
//!
//! This module provides:
//! - CIE 1931 xy chromaticity coordinates
//! - Correlated color temperature ↔ xy conversion
//! - Standard illuminant white points

pub mod chromaticity;
pub mod white_point;

pub use chromaticity::{Chromaticity, KELVIN_TO_XY_RANGE, XY_TO_CCT_RANGE, kelvin_to_xy, xy_to_cct};
pub use white_point::{A, D50, D55, D65, D75, WhitePoint};
