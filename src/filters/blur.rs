//! Gaussian blur.
//!
//! Separable 2-pass convolution: a 1D kernel is applied horizontally
//! into a float intermediate, then vertically into the output. Both
//! passes read only from buffers no pass has written to, and rows are
//! computed in parallel.
//!
//! Samples past the image border clamp to the nearest edge pixel, so a
//! uniform image blurs to itself with no darkened border. Alpha is
//! passed through unchanged.

use ndarray::{Array3, ArrayView3};
use rayon::prelude::*;

use super::core::gaussian_kernel_1d;

/// Apply Gaussian blur to the color channels of an RGBA image.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4) as u8
/// * `sigma` - Standard deviation of the Gaussian kernel
///
/// # Returns
/// Blurred RGBA image with the same dimensions
pub fn gaussian_blur_rgba(input: ArrayView3<u8>, sigma: f32) -> Array3<u8> {
    let (height, width, _) = input.dim();

    if sigma <= 0.0 {
        return input.to_owned();
    }

    let kernel = gaussian_kernel_1d(sigma);
    let half = kernel.len() / 2;

    // Horizontal pass, f32 for precision
    let temp_rows: Vec<Vec<f32>> = (0..height)
        .into_par_iter()
        .map(|y| {
            let mut row = vec![0.0f32; width * 3];
            for x in 0..width {
                for c in 0..3 {
                    let mut sum = 0.0f32;
                    for (ki, &kv) in kernel.iter().enumerate() {
                        let sx = (x as isize + ki as isize - half as isize)
                            .clamp(0, width as isize - 1) as usize;
                        sum += input[[y, sx, c]] as f32 * kv;
                    }
                    row[x * 3 + c] = sum;
                }
            }
            row
        })
        .collect();

    let mut temp = Array3::<f32>::zeros((height, width, 3));
    for (y, row) in temp_rows.into_iter().enumerate() {
        for x in 0..width {
            for c in 0..3 {
                temp[[y, x, c]] = row[x * 3 + c];
            }
        }
    }

    // Vertical pass
    let out_rows: Vec<Vec<u8>> = (0..height)
        .into_par_iter()
        .map(|y| {
            let mut row = vec![0u8; width * 4];
            for x in 0..width {
                for c in 0..3 {
                    let mut sum = 0.0f32;
                    for (ki, &kv) in kernel.iter().enumerate() {
                        let sy = (y as isize + ki as isize - half as isize)
                            .clamp(0, height as isize - 1) as usize;
                        sum += temp[[sy, x, c]] * kv;
                    }
                    row[x * 4 + c] = sum.round().clamp(0.0, 255.0) as u8;
                }
                row[x * 4 + 3] = input[[y, x, 3]];
            }
            row
        })
        .collect();

    let mut output = Array3::<u8>::zeros((height, width, 4));
    for (y, row) in out_rows.into_iter().enumerate() {
        for x in 0..width {
            for c in 0..4 {
                output[[y, x, c]] = row[x * 4 + c];
            }
        }
    }
    output
}
