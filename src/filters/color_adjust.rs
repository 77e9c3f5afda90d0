//! Pixel-wise color adjustment filters: Invert, Sepia.
//!
//! These operate on each pixel independently with no spatial context.
//! Alpha is always preserved unchanged.

use ndarray::{Array3, ArrayView3};

// ============================================================================
// Invert
// ============================================================================

/// Invert the color channels of an RGBA image.
///
/// Each color channel `v` becomes `255 - v`; applying twice restores
/// the original image exactly.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4) as u8
///
/// # Returns
/// Inverted RGBA image, alpha preserved
pub fn invert_rgba(input: ArrayView3<u8>) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, 4));

    for y in 0..height {
        for x in 0..width {
            for c in 0..3 {
                output[[y, x, c]] = 255 - input[[y, x, c]];
            }
            output[[y, x, 3]] = input[[y, x, 3]];
        }
    }
    output
}

// ============================================================================
// Sepia
// ============================================================================

/// Fixed sepia transform, rows map (R, G, B) to the new R, G, B.
const SEPIA_MATRIX: [[f32; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Apply a sepia tone to an RGBA image.
///
/// The fixed 3x3 linear transform pushes bright pixels past 255, so
/// each result is clamped rather than wrapped.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4) as u8
///
/// # Returns
/// Sepia-toned RGBA image, alpha preserved
pub fn sepia_rgba(input: ArrayView3<u8>) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, 4));

    for y in 0..height {
        for x in 0..width {
            let r = input[[y, x, 0]] as f32;
            let g = input[[y, x, 1]] as f32;
            let b = input[[y, x, 2]] as f32;

            for (c, weights) in SEPIA_MATRIX.iter().enumerate() {
                let v = weights[0] * r + weights[1] * g + weights[2] * b;
                output[[y, x, c]] = v.round().clamp(0.0, 255.0) as u8;
            }
            output[[y, x, 3]] = input[[y, x, 3]];
        }
    }
    output
}
