//! 3x3 Matrix operations for calibration transforms
//!
//! Matrices are generic over the float width. Calibration code mixes single
//! precision (sensor color matrices) and double precision (DNG export), and
//! both go through the same inversion routine.

use std::ops::{Index, IndexMut, Mul};

use num_traits::Float;

/// A 3x3 matrix for color space transformations
///
/// Stored in row-major order: m[row][col]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix3x3<T = f64> {
    /// Matrix elements in row-major order
    pub m: [[T; 3]; 3],
}

impl<T: Copy> Matrix3x3<T> {
    /// Create a new matrix from row-major elements
    #[inline]
    pub const fn new(m: [[T; 3]; 3]) -> Self {
        Self { m }
    }

    /// Create a matrix from a flat row-major buffer of 9 values
    #[inline]
    pub const fn from_row_major(v: [T; 9]) -> Self {
        Self {
            m: [[v[0], v[1], v[2]], [v[3], v[4], v[5]], [v[6], v[7], v[8]]],
        }
    }

    /// Flatten to a row-major buffer of 9 values
    #[inline]
    pub const fn to_row_major(&self) -> [T; 9] {
        let m = &self.m;
        [
            m[0][0], m[0][1], m[0][2], m[1][0], m[1][1], m[1][2], m[2][0], m[2][1], m[2][2],
        ]
    }
}

impl<T: Float> Matrix3x3<T> {
    /// Create an identity matrix
    #[inline]
    pub fn identity() -> Self {
        let (o, z) = (T::one(), T::zero());
        Self {
            m: [[o, z, z], [z, o, z], [z, z, o]],
        }
    }

    /// Create a zero matrix
    #[inline]
    pub fn zero() -> Self {
        Self {
            m: [[T::zero(); 3]; 3],
        }
    }

    /// Create a diagonal matrix from three values
    #[inline]
    pub fn diagonal(d0: T, d1: T, d2: T) -> Self {
        let z = T::zero();
        Self {
            m: [[d0, z, z], [z, d1, z], [z, z, d2]],
        }
    }

    /// Multiply this matrix by a 3-element vector
    ///
    /// Returns M × v
    #[inline]
    pub fn multiply_vec(&self, v: [T; 3]) -> [T; 3] {
        [
            self.m[0][0] * v[0] + self.m[0][1] * v[1] + self.m[0][2] * v[2],
            self.m[1][0] * v[0] + self.m[1][1] * v[1] + self.m[1][2] * v[2],
            self.m[2][0] * v[0] + self.m[2][1] * v[1] + self.m[2][2] * v[2],
        ]
    }

    /// Multiply this matrix by another matrix
    ///
    /// Returns self × other
    #[inline]
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        for i in 0..3 {
            for j in 0..3 {
                result.m[i][j] = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j];
            }
        }
        result
    }

    /// Transpose this matrix
    #[inline]
    pub fn transpose(&self) -> Self {
        Self {
            m: [
                [self.m[0][0], self.m[1][0], self.m[2][0]],
                [self.m[0][1], self.m[1][1], self.m[2][1]],
                [self.m[0][2], self.m[1][2], self.m[2][2]],
            ],
        }
    }

    /// Calculate the determinant by cofactor expansion along the first row
    #[inline]
    pub fn determinant(&self) -> T {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            + m[0][1] * (m[1][2] * m[2][0] - m[1][0] * m[2][2])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Calculate the inverse of this matrix, see [`invert3x3`]
    ///
    /// There is no singularity check. A singular matrix yields `inf`/`NaN`
    /// entries.
    #[inline]
    pub fn inverse(&self) -> Self {
        Self::from_row_major(invert3x3(&self.to_row_major()))
    }

    /// Convert every element to another float width
    pub fn cast<U: Float>(&self) -> Matrix3x3<U> {
        let mut out = Matrix3x3::<U>::zero();
        for i in 0..3 {
            for j in 0..3 {
                out.m[i][j] = U::from(self.m[i][j]).unwrap_or_else(U::nan);
            }
        }
        out
    }

    /// Check if this matrix is approximately equal to another
    pub fn approx_eq(&self, other: &Self, epsilon: T) -> bool {
        for i in 0..3 {
            for j in 0..3 {
                if (self.m[i][j] - other.m[i][j]).abs() > epsilon {
                    return false;
                }
            }
        }
        true
    }

    /// Check if this is approximately an identity matrix
    pub fn is_identity(&self, epsilon: T) -> bool {
        self.approx_eq(&Self::identity(), epsilon)
    }

    /// True if no element is `inf` or `NaN`
    pub fn is_finite(&self) -> bool {
        self.m.iter().flatten().all(|v| v.is_finite())
    }
}

/// Invert a row-major 3x3 matrix by the adjugate over the determinant
///
/// The three first-column cofactors are formed first and reused for the
/// determinant; the remaining six are scaled by its reciprocal. A zero
/// determinant is not detected: the reciprocal becomes `inf` and the result
/// carries `inf`/`NaN` as IEEE-754 arithmetic dictates.
#[inline]
pub fn invert3x3<T: Float>(m: &[T; 9]) -> [T; 9] {
    let c0 = m[4] * m[8] - m[5] * m[7];
    let c3 = m[5] * m[6] - m[3] * m[8];
    let c6 = m[3] * m[7] - m[4] * m[6];

    let inv_det = T::one() / (m[0] * c0 + m[1] * c3 + m[2] * c6);

    [
        c0 * inv_det,
        inv_det * (m[7] * m[2] - m[8] * m[1]),
        inv_det * (m[1] * m[5] - m[2] * m[4]),
        c3 * inv_det,
        inv_det * (m[8] * m[0] - m[6] * m[2]),
        inv_det * (m[2] * m[3] - m[0] * m[5]),
        c6 * inv_det,
        inv_det * (m[6] * m[1] - m[7] * m[0]),
        inv_det * (m[0] * m[4] - m[1] * m[3]),
    ]
}

impl<T: Float> Default for Matrix3x3<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T> Index<usize> for Matrix3x3<T> {
    type Output = [T; 3];

    fn index(&self, row: usize) -> &Self::Output {
        &self.m[row]
    }
}

impl<T> IndexMut<usize> for Matrix3x3<T> {
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        &mut self.m[row]
    }
}

impl<T: Float> Mul for Matrix3x3<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl<T: Float> Mul<[T; 3]> for Matrix3x3<T> {
    type Output = [T; 3];

    fn mul(self, rhs: [T; 3]) -> Self::Output {
        self.multiply_vec(rhs)
    }
}

/// Linear sRGB to XYZ matrix (D65 white point)
///
/// From IEC 61966-2-1:1999
pub const SRGB_TO_XYZ: Matrix3x3<f64> = Matrix3x3::new([
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
]);

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_identity() {
        let id = Matrix3x3::<f64>::identity();
        let v = [1.0, 2.0, 3.0];
        let result = id.multiply_vec(v);
        assert!((result[0] - v[0]).abs() < EPSILON);
        assert!((result[1] - v[1]).abs() < EPSILON);
        assert!((result[2] - v[2]).abs() < EPSILON);
    }

    #[test]
    fn test_row_major_layout() {
        let flat = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        let a = Matrix3x3::from_row_major(flat);
        assert_eq!(a[1][0], 4.0);
        assert_eq!(a[0][2], 3.0);
        assert_eq!(a.to_row_major(), flat);
    }

    #[test]
    fn test_determinant() {
        let id = Matrix3x3::<f64>::identity();
        assert!((id.determinant() - 1.0).abs() < EPSILON);

        let a = Matrix3x3::new([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
        assert!((a.determinant() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_inverse() {
        let id = Matrix3x3::<f64>::identity();
        assert!(id.inverse().approx_eq(&id, EPSILON));

        // A × A⁻¹ = I
        let a = Matrix3x3::new([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
        let a_inv = a.inverse();
        let expected = Matrix3x3::new([[-24.0, 18.0, 5.0], [20.0, -15.0, -4.0], [-5.0, 4.0, 1.0]]);
        assert!(a_inv.approx_eq(&expected, 1e-9));
        assert!(a.multiply(&a_inv).approx_eq(&id, 1e-9));
    }

    #[test]
    fn test_inverse_f32_matches_f64() {
        let a = [2.0f64, -1.0, 0.0, -1.0, 2.0, -1.0, 0.0, -1.0, 2.0];
        let a32 = a.map(|v| v as f32);

        let inv64 = invert3x3(&a);
        let inv32 = invert3x3(&a32);
        for (x, y) in inv64.iter().zip(inv32.iter()) {
            assert!((x - *y as f64).abs() < 1e-6);
        }
        // 1/4 * [[3,2,1],[2,4,2],[1,2,3]]
        assert!((inv64[0] - 0.75).abs() < EPSILON);
        assert!((inv64[4] - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_singular_matrix_is_not_finite() {
        // Row 3 = row 1 + row 2
        let singular = Matrix3x3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [5.0, 7.0, 9.0]]);
        assert!(!singular.inverse().is_finite());

        let zero = invert3x3(&[0.0f32; 9]);
        assert!(zero.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_cast() {
        let m64 = SRGB_TO_XYZ;
        let m32: Matrix3x3<f32> = m64.cast();
        assert!((m32[0][0] - 0.4124564f32).abs() < 1e-7);
        assert!(m32.cast::<f64>().approx_eq(&m64, 1e-7));
    }

    #[test]
    fn test_operator_overloads() {
        let a = Matrix3x3::<f64>::identity();
        let b = Matrix3x3::<f64>::diagonal(2.0, 3.0, 4.0);
        let c = a * b;
        assert!(c.approx_eq(&b, EPSILON));
        assert!(b.transpose().approx_eq(&b, EPSILON));

        let result = b * [1.0, 1.0, 1.0];
        assert_eq!(result, [2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_srgb_white_maps_to_d65() {
        let white = SRGB_TO_XYZ.multiply_vec([1.0, 1.0, 1.0]);
        assert!((white[0] - 0.95047).abs() < 0.001);
        assert!((white[1] - 1.0).abs() < 0.001);
        assert!((white[2] - 1.08883).abs() < 0.001);
    }
}
