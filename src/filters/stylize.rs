//! Stylize filters: Posterize, Pixelate, Emboss.
//!
//! Artistic effects. Posterize quantizes channel values to a small set
//! of evenly spaced levels; pixelate averages square blocks; emboss is a
//! directional-difference convolution biased to mid-gray.

use ndarray::{Array3, ArrayView3};

use super::core::convolve_rgb_3x3;

// ============================================================================
// Posterize
// ============================================================================

/// Quantize each color channel to `levels` evenly spaced values.
///
/// Floor-based bucketing: channel `v` falls into bucket `v / (256 /
/// levels)`, which is then rescaled onto 0-255. With 4 levels the
/// output set is exactly {0, 85, 170, 255}.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4) as u8
/// * `levels` - Number of levels per channel (clamped to at least 2)
///
/// # Returns
/// Posterized RGBA image, alpha preserved
pub fn posterize_rgba(input: ArrayView3<u8>, levels: u8) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, 4));

    let levels = levels.max(2) as u16;
    let bucket = 256 / levels;
    let step = 255 / (levels - 1);

    for y in 0..height {
        for x in 0..width {
            for c in 0..3 {
                let v = input[[y, x, c]] as u16;
                output[[y, x, c]] = (v / bucket * step).min(255) as u8;
            }
            output[[y, x, 3]] = input[[y, x, 3]];
        }
    }
    output
}

// ============================================================================
// Pixelate
// ============================================================================

/// Pixelate by averaging fixed-size square blocks.
///
/// The image is partitioned into `block` x `block` tiles, clipped at the
/// right and bottom edges; every pixel in a tile is replaced by the
/// tile's per-channel rounded mean. Partial edge tiles average only the
/// pixels actually present.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4) as u8
/// * `block` - Tile edge length in pixels (clamped to at least 1)
///
/// # Returns
/// Pixelated RGBA image with the same dimensions
pub fn pixelate_rgba(input: ArrayView3<u8>, block: usize) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, 4));
    let block = block.max(1);

    for by in (0..height).step_by(block) {
        for bx in (0..width).step_by(block) {
            let y_end = (by + block).min(height);
            let x_end = (bx + block).min(width);
            let count = ((y_end - by) * (x_end - bx)) as u32;

            let mut sums = [0u32; 4];
            for y in by..y_end {
                for x in bx..x_end {
                    for c in 0..4 {
                        sums[c] += input[[y, x, c]] as u32;
                    }
                }
            }

            let mut mean = [0u8; 4];
            for c in 0..4 {
                mean[c] = ((sums[c] + count / 2) / count) as u8;
            }

            for y in by..y_end {
                for x in bx..x_end {
                    for c in 0..4 {
                        output[[y, x, c]] = mean[c];
                    }
                }
            }
        }
    }
    output
}

// ============================================================================
// Emboss
// ============================================================================

/// Directional difference kernel (top-left against bottom-right).
/// Sums to zero, so the +128 bias renders flat regions mid-gray.
const EMBOSS_KERNEL: [[f32; 3]; 3] = [
    [-2.0, -1.0, 0.0],
    [-1.0, 0.0, 1.0],
    [0.0, 1.0, 2.0],
];

/// Apply an emboss effect to an RGBA image.
///
/// Computes a top-left / bottom-right directional difference plus a
/// +128 offset, clamped to [0, 255]. Border samples clamp to the
/// nearest edge pixel.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4) as u8
///
/// # Returns
/// Embossed RGBA image, alpha preserved
pub fn emboss_rgba(input: ArrayView3<u8>) -> Array3<u8> {
    convolve_rgb_3x3(input, &EMBOSS_KERNEL, 128.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posterize_4_levels_value_set() {
        let mut img = Array3::<u8>::zeros((1, 256, 4));
        for x in 0..256 {
            for c in 0..3 {
                img[[0, x, c]] = x as u8;
            }
            img[[0, x, 3]] = 255;
        }

        let result = posterize_rgba(img.view(), 4);

        for x in 0..256 {
            for c in 0..3 {
                let v = result[[0, x, c]];
                assert!(
                    v == 0 || v == 85 || v == 170 || v == 255,
                    "unexpected level {v} for input {x}"
                );
            }
        }
    }

    #[test]
    fn test_posterize_floor_bucketing() {
        let mut img = Array3::<u8>::zeros((1, 2, 4));
        img[[0, 0, 0]] = 63; // last value of bucket 0
        img[[0, 1, 0]] = 64; // first value of bucket 1

        let result = posterize_rgba(img.view(), 4);

        assert_eq!(result[[0, 0, 0]], 0);
        assert_eq!(result[[0, 1, 0]], 85);
    }

    #[test]
    fn test_posterize_preserves_alpha() {
        let mut img = Array3::<u8>::zeros((1, 1, 4));
        img[[0, 0, 3]] = 42;

        let result = posterize_rgba(img.view(), 4);
        assert_eq!(result[[0, 0, 3]], 42);
    }

    #[test]
    fn test_pixelate_full_block_uniform() {
        // 8x8 image, one full 4x4 block per quadrant with a gradient
        let mut img = Array3::<u8>::zeros((8, 8, 4));
        for y in 0..8 {
            for x in 0..8 {
                img[[y, x, 0]] = (y * 8 + x) as u8 * 3;
                img[[y, x, 3]] = 255;
            }
        }

        let result = pixelate_rgba(img.view(), 4);

        let first = result[[0, 0, 0]];
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(result[[y, x, 0]], first);
            }
        }
        // Different block averages differ
        assert_ne!(result[[0, 0, 0]], result[[4, 4, 0]]);
    }

    #[test]
    fn test_pixelate_partial_edge_block() {
        // 5 wide with block 4: the right edge block is 1x4 and must
        // average only its own column
        let mut img = Array3::<u8>::zeros((4, 5, 4));
        for y in 0..4 {
            img[[y, 4, 0]] = 200;
            for x in 0..5 {
                img[[y, x, 3]] = 255;
            }
        }

        let result = pixelate_rgba(img.view(), 4);

        assert_eq!(result[[0, 4, 0]], 200);
        assert_eq!(result[[0, 0, 0]], 0);
    }

    #[test]
    fn test_pixelate_block_mean() {
        let mut img = Array3::<u8>::zeros((2, 2, 4));
        img[[0, 0, 0]] = 10;
        img[[0, 1, 0]] = 20;
        img[[1, 0, 0]] = 30;
        img[[1, 1, 0]] = 40;

        let result = pixelate_rgba(img.view(), 2);
        assert_eq!(result[[0, 0, 0]], 25);
    }

    #[test]
    fn test_emboss_flat_is_mid_gray() {
        let mut img = Array3::<u8>::zeros((4, 4, 4));
        for y in 0..4 {
            for x in 0..4 {
                img[[y, x, 0]] = 200;
                img[[y, x, 1]] = 10;
                img[[y, x, 2]] = 99;
                img[[y, x, 3]] = 255;
            }
        }

        let result = emboss_rgba(img.view());

        for c in 0..3 {
            assert_eq!(result[[1, 1, c]], 128);
        }
        assert_eq!(result[[1, 1, 3]], 255);
    }

    #[test]
    fn test_emboss_clamps_checkerboard() {
        let mut img = Array3::<u8>::zeros((4, 4, 4));
        for y in 0..4 {
            for x in 0..4 {
                let v = if (x + y) % 2 == 0 { 255 } else { 0 };
                for c in 0..3 {
                    img[[y, x, c]] = v;
                }
                img[[y, x, 3]] = 255;
            }
        }

        // u8 storage already bounds the range; this exercises that the
        // extreme sums saturate sensibly rather than aliasing
        let result = emboss_rgba(img.view());
        assert_eq!(result.dim(), (4, 4, 4));
    }
}
