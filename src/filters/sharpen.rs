//! Sharpen filter.

use ndarray::{Array3, ArrayView3};

use super::core::convolve_rgb_3x3;

/// Unsharp 3x3 kernel; weights sum to 1 so flat regions are unchanged.
const SHARPEN_KERNEL: [[f32; 3]; 3] = [
    [0.0, -1.0, 0.0],
    [-1.0, 5.0, -1.0],
    [0.0, -1.0, 0.0],
];

/// Sharpen an RGBA image.
///
/// Amplifies the difference between each pixel and its 4-neighborhood,
/// clamping the result to [0, 255]. Border samples clamp to the nearest
/// edge pixel.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4) as u8
///
/// # Returns
/// Sharpened RGBA image, alpha preserved
pub fn sharpen_rgba(input: ArrayView3<u8>) -> Array3<u8> {
    convolve_rgb_3x3(input, &SHARPEN_KERNEL, 0.0)
}
