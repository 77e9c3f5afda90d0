//! Shared kernel machinery for spatial filters.
//!
//! Provides:
//! - Gaussian kernel generation for the separable blur
//! - A generic 3x3 convolution used by sharpen and emboss
//!
//! Both read exclusively from an untouched source view and write into a
//! freshly allocated destination array. Convolution at (x, y) depends on
//! neighbors an in-place pass would already have overwritten, so spatial
//! filters must never mutate their input.
//!
//! Out-of-bounds neighborhood positions are clamped to the nearest edge
//! pixel (edge replication). Treating them as transparent or black would
//! darken the border.

use ndarray::{Array3, ArrayView3};
use rayon::prelude::*;

/// Generate a normalized 1D Gaussian kernel.
///
/// Kernel size is 6 sigma rounded up to odd, covering 99.7% of the
/// distribution.
///
/// # Arguments
/// * `sigma` - Standard deviation of the Gaussian
///
/// # Returns
/// Normalized 1D kernel; `[1.0]` for non-positive sigma
pub fn gaussian_kernel_1d(sigma: f32) -> Vec<f32> {
    if sigma <= 0.0 {
        return vec![1.0];
    }

    let kernel_size = ((sigma * 6.0).ceil() as usize) | 1;
    let half = kernel_size / 2;

    let mut kernel: Vec<f32> = (0..kernel_size)
        .map(|i| {
            let x = i as f32 - half as f32;
            (-x * x / (2.0 * sigma * sigma)).exp()
        })
        .collect();

    let sum: f32 = kernel.iter().sum();
    for v in kernel.iter_mut() {
        *v /= sum;
    }

    kernel
}

/// Convolve the color channels of an RGBA image with a 3x3 kernel.
///
/// Each output channel is `round(sum + offset)` clamped to [0, 255].
/// Alpha is copied through unchanged. Rows are computed in parallel.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4) as u8
/// * `kernel` - 3x3 weight matrix, row-major
/// * `offset` - Bias added after the weighted sum (128.0 for emboss,
///   0.0 otherwise)
///
/// # Returns
/// Convolved RGBA image with the same dimensions
pub fn convolve_rgb_3x3(
    input: ArrayView3<u8>,
    kernel: &[[f32; 3]; 3],
    offset: f32,
) -> Array3<u8> {
    let (height, width, _) = input.dim();

    let rows: Vec<Vec<u8>> = (0..height)
        .into_par_iter()
        .map(|y| {
            let mut row = vec![0u8; width * 4];
            for x in 0..width {
                for c in 0..3 {
                    let mut sum = 0.0f32;
                    for (ky, kernel_row) in kernel.iter().enumerate() {
                        let sy = (y as isize + ky as isize - 1)
                            .clamp(0, height as isize - 1) as usize;
                        for (kx, &kv) in kernel_row.iter().enumerate() {
                            let sx = (x as isize + kx as isize - 1)
                                .clamp(0, width as isize - 1) as usize;
                            sum += input[[sy, sx, c]] as f32 * kv;
                        }
                    }
                    row[x * 4 + c] = (sum + offset).round().clamp(0.0, 255.0) as u8;
                }
                row[x * 4 + 3] = input[[y, x, 3]];
            }
            row
        })
        .collect();

    let mut output = Array3::<u8>::zeros((height, width, 4));
    for (y, row) in rows.into_iter().enumerate() {
        for x in 0..width {
            for c in 0..4 {
                output[[y, x, c]] = row[x * 4 + c];
            }
        }
    }
    output
}
