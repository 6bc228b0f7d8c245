//! 3x4 color-correction matrices
//!
//! A [`ColorMatrix`] maps sensor-native RGB to a standard RGB space. It is
//! stored row-major with a stride of 4: columns 0–2 of each row are the
//! linear part, column 3 is a constant offset (black level) for that row.
//!
//! ```text
//!   [ m0  m1  m2  | m3  ]
//!   [ m4  m5  m6  | m7  ]
//!   [ m8  m9  m10 | m11 ]
//! ```

use std::ops::Index;

use bytemuck::{Pod, Zeroable};

use crate::math::{Matrix3x3, mix};

/// A 3x4 affine color-correction matrix, row-major
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct ColorMatrix(pub [f32; 12]);

impl ColorMatrix {
    /// Identity linear part with zero offsets
    pub const IDENTITY: Self = Self([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0,
    ]);

    #[inline]
    pub const fn new(values: [f32; 12]) -> Self {
        Self(values)
    }

    /// Copy from a slice of exactly 12 values
    pub fn from_slice(values: &[f32]) -> Option<Self> {
        let values: &[f32; 12] = values.try_into().ok()?;
        Some(*bytemuck::cast_ref::<[f32; 12], Self>(values))
    }

    /// Build from a linear part and per-row offsets
    pub fn from_parts(linear: &Matrix3x3<f32>, offsets: [f32; 3]) -> Self {
        let mut out = [0.0; 12];
        for row in 0..3 {
            out[row * 4..row * 4 + 3].copy_from_slice(&linear.m[row]);
            out[row * 4 + 3] = offsets[row];
        }
        Self(out)
    }

    #[inline]
    pub const fn as_array(&self) -> &[f32; 12] {
        &self.0
    }

    /// Native-endian byte view, for storage alongside raw frames
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// The 3x3 linear part
    pub fn linear(&self) -> Matrix3x3<f32> {
        let v = &self.0;
        Matrix3x3::new([
            [v[0], v[1], v[2]],
            [v[4], v[5], v[6]],
            [v[8], v[9], v[10]],
        ])
    }

    /// The offset column
    #[inline]
    pub fn offsets(&self) -> [f32; 3] {
        [self.0[3], self.0[7], self.0[11]]
    }

    /// Sum of the linear part of each row; offsets are excluded
    #[inline]
    pub fn row_sums(&self) -> [f32; 3] {
        let v = &self.0;
        [
            v[0] + v[1] + v[2],
            v[4] + v[5] + v[6],
            v[8] + v[9] + v[10],
        ]
    }

    /// Linearly interpolate two matrices, then normalize the result
    ///
    /// `alpha == 0` returns `a` and `alpha == 1` returns `b`, bit for bit and
    /// without normalization. Any other `alpha` mixes all 12 entries as
    /// `(1 - alpha) * a + alpha * b` and rescales the linear part so that the
    /// smallest row sum is 1 (see [`ColorMatrix::normalize_min_row_sum`]).
    pub fn interpolate(a: &Self, b: &Self, alpha: f32) -> Self {
        if alpha == 0.0 {
            return *a;
        }
        if alpha == 1.0 {
            return *b;
        }

        let mut out = [0.0f32; 12];
        for (o, (&x, &y)) in out.iter_mut().zip(a.0.iter().zip(b.0.iter())) {
            *o = mix(x, y, alpha);
        }

        let mut out = Self(out);
        out.normalize_min_row_sum();
        out
    }

    /// Scale the linear part so the smallest row sum becomes 1
    ///
    /// The row is picked by [`normalization_row`]. Offsets are left as they
    /// are.
    pub fn normalize_min_row_sum(&mut self) {
        let sums = self.row_sums();
        let scale = 1.0 / sums[normalization_row(sums)];

        for row in 0..3 {
            for col in 0..3 {
                self.0[row * 4 + col] *= scale;
            }
        }
    }

    /// Apply to one RGB triple: linear part plus offset
    #[inline]
    pub fn apply(&self, rgb: [f32; 3]) -> [f32; 3] {
        let v = &self.0;
        [
            v[0] * rgb[0] + v[1] * rgb[1] + v[2] * rgb[2] + v[3],
            v[4] * rgb[0] + v[5] * rgb[1] + v[6] * rgb[2] + v[7],
            v[8] * rgb[0] + v[9] * rgb[1] + v[10] * rgb[2] + v[11],
        ]
    }

    /// Quantize to signed 8.8 fixed point for integer demosaic kernels
    ///
    /// Each entry becomes `(v * 256 + 0.5)` truncated toward zero and
    /// saturated to `i16`.
    pub fn to_fixed_q8(&self) -> [i16; 12] {
        self.0.map(|v| (v * 256.0 + 0.5) as i16)
    }
}

impl Default for ColorMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Index<usize> for ColorMatrix {
    type Output = f32;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<[f32; 12]> for ColorMatrix {
    fn from(values: [f32; 12]) -> Self {
        Self(values)
    }
}

/// Index of the row sum used to normalize an interpolated matrix
///
/// Sequential comparison, not a sort: row 0 wins only if strictly smaller
/// than both others, otherwise row 1 wins if strictly smaller than row 2,
/// otherwise row 2. Ties therefore resolve toward the later row.
#[inline]
pub fn normalization_row(sums: [f32; 3]) -> usize {
    if sums[0] < sums[1] && sums[0] < sums[2] {
        0
    } else if sums[1] < sums[2] {
        1
    } else {
        2
    }
}
