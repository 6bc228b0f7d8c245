//! Accuracy measurement using perceptual color difference metrics
//!
//! Uses CIEDE2000 (deltaE2000) from `palette` as the primary metric.
//! Inputs are linear sRGB, where a calibrated sensor's output lands.

use palette::color_difference::Ciede2000;
use palette::{FromColor, Lab, LinSrgb};

/// Statistics from a deltaE comparison
#[derive(Debug, Clone)]
pub struct DeltaEStats {
    /// Mean deltaE across all samples
    pub mean: f32,
    /// Maximum deltaE
    pub max: f32,
    /// 95th percentile deltaE
    pub p95: f32,
    /// Number of samples
    pub count: usize,
}

impl DeltaEStats {
    /// Check if all differences are imperceptible (deltaE < 1.0)
    pub fn is_excellent(&self) -> bool {
        self.max < 1.0
    }

    /// Check if differences are acceptable (deltaE < 3.5)
    pub fn is_acceptable(&self) -> bool {
        self.max < 3.5
    }
}

fn to_lab(rgb: [f32; 3]) -> Lab {
    Lab::from_color(LinSrgb::new(rgb[0], rgb[1], rgb[2]))
}

/// deltaE2000 between two linear sRGB colors
pub fn delta_e_2000(a: [f32; 3], b: [f32; 3]) -> f32 {
    to_lab(a).difference(to_lab(b))
}

/// deltaE2000 between a linear sRGB color and the gray of equal lightness
///
/// Zero for a perfectly white-balanced neutral.
pub fn neutrality_error(rgb: [f32; 3]) -> f32 {
    let lab = to_lab(rgb);
    lab.difference(Lab::new(lab.l, 0.0, 0.0))
}

/// Compare two linear sRGB buffers sample by sample
pub fn compare_linear_rgb(reference: &[[f32; 3]], result: &[[f32; 3]]) -> DeltaEStats {
    assert_eq!(reference.len(), result.len());

    let mut deltas: Vec<f32> = reference
        .iter()
        .zip(result.iter())
        .map(|(a, b)| delta_e_2000(*a, *b))
        .collect();

    if deltas.is_empty() {
        return DeltaEStats {
            mean: 0.0,
            max: 0.0,
            p95: 0.0,
            count: 0,
        };
    }

    deltas.sort_by(|a, b| a.total_cmp(b));
    let count = deltas.len();
    let mean = deltas.iter().sum::<f32>() / count as f32;
    let p95 = deltas[((count - 1) as f32 * 0.95) as usize];

    DeltaEStats {
        mean,
        max: deltas[count - 1],
        p95,
        count,
    }
}

/// Largest absolute elementwise difference
pub fn max_abs_diff(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f32::max)
}
