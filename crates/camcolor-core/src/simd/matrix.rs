//! Batch color matrix application
//!
//! Applying the calibration matrix is the per-pixel hot loop of raw
//! development. Each kernel is compiled for several instruction sets and
//! dispatched at runtime.

use multiversion::multiversion;

use crate::calibration::ColorMatrix;
use crate::error::{Error, Result};

/// Apply a color matrix to a batch of RGB triples
///
/// Each output is `linear × rgb + offset`, identical to
/// [`ColorMatrix::apply`].
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn apply_color_matrix_batch(matrix: &ColorMatrix, input: &[[f32; 3]], output: &mut [[f32; 3]]) {
    assert!(output.len() >= input.len());

    let [m0, m1, m2, m3, m4, m5, m6, m7, m8, m9, m10, m11] = matrix.0;

    for (inp, out) in input.iter().zip(output.iter_mut()) {
        let r = inp[0];
        let g = inp[1];
        let b = inp[2];

        out[0] = m0 * r + m1 * g + m2 * b + m3;
        out[1] = m4 * r + m5 * g + m6 * b + m7;
        out[2] = m8 * r + m9 * g + m10 * b + m11;
    }
}

/// Apply a color matrix to demosaiced 16-bit raw triples
///
/// Raw values are used as-is (not normalized), so offsets are in raw units.
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn apply_color_matrix_raw16(matrix: &ColorMatrix, input: &[[u16; 3]], output: &mut [[f32; 3]]) {
    assert!(output.len() >= input.len());

    let [m0, m1, m2, m3, m4, m5, m6, m7, m8, m9, m10, m11] = matrix.0;

    for (inp, out) in input.iter().zip(output.iter_mut()) {
        let r = inp[0] as f32;
        let g = inp[1] as f32;
        let b = inp[2] as f32;

        out[0] = m0 * r + m1 * g + m2 * b + m3;
        out[1] = m4 * r + m5 * g + m6 * b + m7;
        out[2] = m8 * r + m9 * g + m10 * b + m11;
    }
}

/// Apply a color matrix to an interleaved `RGBRGB...` buffer
///
/// Fails if `input` is not a whole number of pixels or `output` has a
/// different length.
pub fn apply_color_matrix_interleaved(
    matrix: &ColorMatrix,
    input: &[f32],
    output: &mut [f32],
) -> Result<()> {
    if output.len() != input.len() {
        return Err(Error::BufferSize {
            expected: input.len(),
            actual: output.len(),
        });
    }
    let pixels: &[[f32; 3]] = bytemuck::try_cast_slice(input).map_err(|_| Error::BufferSize {
        expected: input.len() - input.len() % 3,
        actual: input.len(),
    })?;
    let out: &mut [[f32; 3]] = bytemuck::try_cast_slice_mut(output).map_err(|_| Error::BufferSize {
        expected: pixels.len() * 3,
        actual: input.len(),
    })?;

    apply_color_matrix_batch(matrix, pixels, out);
    Ok(())
}
