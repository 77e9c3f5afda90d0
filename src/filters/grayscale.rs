//! Grayscale conversion filter.
//!
//! Uses ITU-R BT.709 luminosity coefficients. Output stays RGBA with
//! R=G=B=luminance and alpha preserved, so the result is idempotent:
//! once R=G=B, the weighted sum reproduces the same value.

use ndarray::{Array3, ArrayView3};

/// ITU-R BT.709 luminosity coefficients
const LUMA_R: f32 = 0.2126;
const LUMA_G: f32 = 0.7152;
const LUMA_B: f32 = 0.0722;

/// Convert an RGBA image to grayscale (luminosity method).
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4) as u8
///
/// # Returns
/// RGBA image with R=G=B=luminance, alpha preserved
pub fn grayscale_rgba(input: ArrayView3<u8>) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, 4));

    for y in 0..height {
        for x in 0..width {
            let r = input[[y, x, 0]] as f32;
            let g = input[[y, x, 1]] as f32;
            let b = input[[y, x, 2]] as f32;

            let gray = (LUMA_R * r + LUMA_G * g + LUMA_B * b)
                .round()
                .clamp(0.0, 255.0) as u8;

            output[[y, x, 0]] = gray;
            output[[y, x, 1]] = gray;
            output[[y, x, 2]] = gray;
            output[[y, x, 3]] = input[[y, x, 3]];
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grayscale_red() {
        let mut img = Array3::<u8>::zeros((1, 1, 4));
        img[[0, 0, 0]] = 255; // R
        img[[0, 0, 3]] = 255; // A

        let result = grayscale_rgba(img.view());

        // 0.2126 * 255 ≈ 54
        assert!((result[[0, 0, 0]] as i32 - 54).abs() <= 1);
        assert_eq!(result[[0, 0, 0]], result[[0, 0, 1]]);
        assert_eq!(result[[0, 0, 1]], result[[0, 0, 2]]);
        assert_eq!(result[[0, 0, 3]], 255);
    }

    #[test]
    fn test_grayscale_white_stays_white() {
        let mut img = Array3::<u8>::zeros((1, 1, 4));
        img.fill(255);

        let result = grayscale_rgba(img.view());
        assert_eq!(result[[0, 0, 0]], 255);
    }

    #[test]
    fn test_grayscale_idempotent() {
        let mut img = Array3::<u8>::zeros((2, 2, 4));
        img[[0, 0, 0]] = 200;
        img[[0, 0, 1]] = 100;
        img[[0, 0, 2]] = 50;
        img[[0, 1, 0]] = 3;
        img[[1, 0, 1]] = 255;
        img[[1, 1, 2]] = 77;

        let once = grayscale_rgba(img.view());
        let twice = grayscale_rgba(once.view());

        assert_eq!(once, twice);
    }

    #[test]
    fn test_grayscale_preserves_alpha() {
        let mut img = Array3::<u8>::zeros((1, 1, 4));
        img[[0, 0, 0]] = 128;
        img[[0, 0, 3]] = 100;

        let result = grayscale_rgba(img.view());
        assert_eq!(result[[0, 0, 3]], 100);
    }
}
