//! Runtime-dispatched batch kernels
//!
//! Per-pixel color matrix application compiled with the `multiversion`
//! crate for several instruction sets.
//!
//! Supported instruction sets:
//! - x86-64: SSE4.1, AVX2
//! - ARM64: NEON
//!
//! The scalar fallback is always available.

mod matrix;

pub use matrix::{
    apply_color_matrix_batch, apply_color_matrix_interleaved, apply_color_matrix_raw16,
};

/// Get a description of the active SIMD features
pub fn active_features() -> &'static str {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx2") {
            "AVX2"
        } else if is_x86_feature_detected!("sse4.1") {
            "SSE4.1"
        } else {
            "scalar"
        }
    }
    #[cfg(target_arch = "aarch64")]
    {
        "NEON"
    }
    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        "scalar"
    }
}
