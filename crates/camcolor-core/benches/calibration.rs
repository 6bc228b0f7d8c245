//! Calibration Benchmarks
//!
//! Per-frame work (temperature conversion, matrix interpolation) and the
//! per-pixel matrix application kernels.

use camcolor_core::{
    CalibrationPoint, ColorCalibration, ColorMatrix, Matrix3x3, NullSink, kelvin_to_xy, simd,
    xy_to_cct,
};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

/// Raw-to-sRGB calibration of a phone sensor under tungsten and daylight
fn sample_calibration() -> ColorCalibration {
    let tungsten = ColorMatrix::new([
        1.6697, -0.2693, -0.4004, -42.4346, //
        -0.3576, 1.0615, 1.5949, -37.1158, //
        -0.2175, -1.8751, 6.9640, -26.6970,
    ]);
    let daylight = ColorMatrix::new([
        2.2997, -0.4478, 0.1706, -39.0923, //
        -0.3826, 1.5906, -0.2080, -25.4311, //
        -0.0888, -0.7344, 2.2832, -20.0826,
    ]);
    ColorCalibration::dual(
        CalibrationPoint::new(3200, tungsten),
        CalibrationPoint::new(7000, daylight),
    )
    .expect("valid calibration")
}

fn generate_rgb_data(count: usize) -> Vec<[f32; 3]> {
    (0..count)
        .map(|i| {
            let t = i as f32 / count as f32;
            [t * 1023.0, ((t * 2.0) % 1.0) * 1023.0, ((t * 3.0) % 1.0) * 1023.0]
        })
        .collect()
}

fn generate_raw16_data(count: usize) -> Vec<[u16; 3]> {
    (0..count)
        .map(|i| {
            let v = (i * 37) as u16 & 0x3ff;
            [v, (v * 3) & 0x3ff, (v * 7) & 0x3ff]
        })
        .collect()
}

// ============================================================================
// Temperature Conversion Benchmarks
// ============================================================================

fn bench_temperature(c: &mut Criterion) {
    let mut group = c.benchmark_group("temperature");

    group.bench_function("xy_to_cct", |b| {
        b.iter(|| xy_to_cct(black_box(0.3127), black_box(0.3290), &NullSink))
    });

    group.bench_function("kelvin_to_xy", |b| {
        b.iter(|| kelvin_to_xy(black_box(5000), &NullSink))
    });

    group.finish();
}

// ============================================================================
// Per-Frame Matrix Benchmarks
// ============================================================================

fn bench_matrix_for_kelvin(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_for_kelvin");
    let cal = sample_calibration();

    for kelvin in [3200, 5000, 7000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(kelvin), kelvin, |b, &k| {
            b.iter(|| cal.matrix_for_kelvin(black_box(k)))
        });
    }

    group.finish();
}

fn bench_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse");

    let m = Matrix3x3::new([[0.8, 0.15, 0.05], [0.1, 0.85, 0.05], [0.05, 0.1, 0.85]]);
    let m32 = m.cast::<f32>();

    group.bench_function("f64", |b| b.iter(|| black_box(&m).inverse()));
    group.bench_function("f32", |b| b.iter(|| black_box(&m32).inverse()));

    group.finish();
}

// ============================================================================
// Per-Pixel Batch Benchmarks
// ============================================================================

fn bench_apply_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_batch");
    let matrix = sample_calibration().matrix_for_kelvin(5000).unwrap_or_default();

    for size in [1000, 10000, 100000].iter() {
        let input = generate_rgb_data(*size);
        let raw = generate_raw16_data(*size);
        let mut output = vec![[0.0f32; 3]; *size];

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("simd_f32", size), size, |b, _| {
            b.iter(|| {
                simd::apply_color_matrix_batch(
                    black_box(&matrix),
                    black_box(&input),
                    black_box(&mut output),
                )
            })
        });

        group.bench_with_input(BenchmarkId::new("simd_raw16", size), size, |b, _| {
            b.iter(|| {
                simd::apply_color_matrix_raw16(
                    black_box(&matrix),
                    black_box(&raw),
                    black_box(&mut output),
                )
            })
        });

        // Scalar baseline
        group.bench_with_input(BenchmarkId::new("scalar", size), size, |b, _| {
            b.iter(|| {
                for (inp, out) in input.iter().zip(output.iter_mut()) {
                    *out = matrix.apply(*inp);
                }
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_temperature,
    bench_matrix_for_kelvin,
    bench_inverse,
    bench_apply_batch,
);

criterion_main!(benches);
