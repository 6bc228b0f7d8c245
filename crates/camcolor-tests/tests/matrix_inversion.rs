//! 3x3 inversion tests in single and double precision

use camcolor_core::{ColorMatrix, Matrix3x3, invert3x3};
use camcolor_tests::{TUNGSTEN_3200K, max_abs_diff, well_conditioned_matrices};

const EPSILON_F64: f64 = 1e-12;
const EPSILON_F32: f32 = 1e-5;

#[test]
fn test_inverse_roundtrip_f64() {
    for m in well_conditioned_matrices(42, 64) {
        let inv = m.inverse();
        assert!(m.multiply(&inv).is_identity(EPSILON_F64), "M·M⁻¹ != I for {:?}", m);
        assert!(inv.multiply(&m).is_identity(EPSILON_F64), "M⁻¹·M != I for {:?}", m);
    }
}

#[test]
fn test_inverse_roundtrip_f32() {
    for m in well_conditioned_matrices(43, 64) {
        let m: Matrix3x3<f32> = m.cast();
        let inv = m.inverse();
        assert!(m.multiply(&inv).is_identity(EPSILON_F32), "M·M⁻¹ != I for {:?}", m);
    }
}

#[test]
fn test_double_inverse_is_original() {
    for m in well_conditioned_matrices(46, 64) {
        let back = invert3x3(&invert3x3(&m.to_row_major()));
        assert!(
            Matrix3x3::from_row_major(back).approx_eq(&m, EPSILON_F64),
            "f64 double inverse of {:?}",
            m
        );

        let m32: Matrix3x3<f32> = m.cast();
        let back32 = m32.inverse().inverse();
        assert!(back32.approx_eq(&m32, EPSILON_F32), "f32 double inverse of {:?}", m32);
    }
}

#[test]
fn test_flat_and_structured_agree() {
    for m in well_conditioned_matrices(44, 8) {
        let flat = invert3x3(&m.to_row_major());
        assert_eq!(flat, m.inverse().to_row_major());
    }
}

#[test]
fn test_f32_tracks_f64() {
    for m in well_conditioned_matrices(45, 16) {
        let inv64: Matrix3x3<f32> = m.inverse().cast();
        let inv32 = m.cast::<f32>().inverse();
        let diff = max_abs_diff(&inv64.to_row_major(), &inv32.to_row_major());
        assert!(diff < 1e-5, "f32/f64 inverse differ by {}", diff);
    }
}

#[test]
fn test_sensor_matrix_inverse() {
    let linear = TUNGSTEN_3200K.linear();
    let inv = linear.inverse();
    assert!(linear.multiply(&inv).is_identity(EPSILON_F32));

    // Inverting twice returns the original
    let back = inv.inverse();
    assert!(back.approx_eq(&linear, 1e-4));
}

#[test]
fn test_known_inverse() {
    let m = Matrix3x3::new([[2.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 0.5]]);
    let inv = m.inverse();
    assert_eq!(inv, Matrix3x3::new([[0.5, 0.0, 0.0], [0.0, 0.25, 0.0], [0.0, 0.0, 2.0]]));

    let m = Matrix3x3::new([[1.0, 2.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
    let inv = m.inverse();
    assert_eq!(inv[0], [1.0, -2.0, 0.0]);
}

#[test]
fn test_singular_is_not_finite() {
    // Rank 2: third row is the sum of the first two
    let m = Matrix3x3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [5.0, 7.0, 9.0]]);
    assert_eq!(m.determinant(), 0.0);
    assert!(!m.inverse().is_finite());

    let zero = Matrix3x3::<f32>::zero();
    assert!(!zero.inverse().is_finite());
}

#[test]
fn test_color_matrix_linear_inverse_undoes_apply() {
    let m = ColorMatrix::from_parts(&TUNGSTEN_3200K.linear(), [0.0; 3]);
    let inv = TUNGSTEN_3200K.linear().inverse();

    let raw = [300.0f32, 512.0, 200.0];
    let rgb = m.apply(raw);
    let back = inv.multiply_vec(rgb);
    assert!(max_abs_diff(&back, &raw) < 1e-2);
}
