//! Hue rotation and the RGB <-> HSL conversions it needs.
//!
//! The conversions are a pure function pair; `rgb_to_hsl` followed by
//! `hsl_to_rgb` round-trips within integer rounding tolerance (see the
//! tests). Hue rotation shifts only the hue angle, wrapping modulo 360;
//! saturation and lightness pass through unchanged.

use ndarray::{Array3, ArrayView3};

// ============================================================================
// Color Space Conversion
// ============================================================================

/// Convert RGB to HSL.
/// Input: r, g, b in 0.0-1.0
/// Output: (h, s, l) where h is 0.0-360.0, s and l are 0.0-1.0
#[inline]
fn rgb_to_hsl(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if (max - min).abs() < 1e-6 {
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if (max - r).abs() < 1e-6 {
        let mut h = (g - b) / d;
        if g < b {
            h += 6.0;
        }
        h * 60.0
    } else if (max - g).abs() < 1e-6 {
        ((b - r) / d + 2.0) * 60.0
    } else {
        ((r - g) / d + 4.0) * 60.0
    };

    (h, s, l)
}

/// Convert HSL to RGB.
/// Input: h in 0.0-360.0, s and l in 0.0-1.0
/// Output: (r, g, b) in 0.0-1.0
#[inline]
fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (f32, f32, f32) {
    if s.abs() < 1e-6 {
        return (l, l, l);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    let h_norm = h / 360.0;

    fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
        if t < 0.0 { t += 1.0; }
        if t > 1.0 { t -= 1.0; }
        if t < 1.0 / 6.0 { return p + (q - p) * 6.0 * t; }
        if t < 0.5 { return q; }
        if t < 2.0 / 3.0 { return p + (q - p) * (2.0 / 3.0 - t) * 6.0; }
        p
    }

    let r = hue_to_rgb(p, q, h_norm + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h_norm);
    let b = hue_to_rgb(p, q, h_norm - 1.0 / 3.0);

    (r, g, b)
}

// ============================================================================
// Hue Rotation
// ============================================================================

/// Rotate the hue of an RGBA image.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4) as u8
/// * `degrees` - Rotation angle in degrees; wraps modulo 360
///
/// # Returns
/// Hue-rotated RGBA image, alpha preserved
pub fn hue_rotate_rgba(input: ArrayView3<u8>, degrees: f32) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, 4));

    for y in 0..height {
        for x in 0..width {
            let r = input[[y, x, 0]] as f32 / 255.0;
            let g = input[[y, x, 1]] as f32 / 255.0;
            let b = input[[y, x, 2]] as f32 / 255.0;

            let (h, s, l) = rgb_to_hsl(r, g, b);
            let new_h = (h + degrees).rem_euclid(360.0);
            let (nr, ng, nb) = hsl_to_rgb(new_h, s, l);

            output[[y, x, 0]] = (nr * 255.0).round().clamp(0.0, 255.0) as u8;
            output[[y, x, 1]] = (ng * 255.0).round().clamp(0.0, 255.0) as u8;
            output[[y, x, 2]] = (nb * 255.0).round().clamp(0.0, 255.0) as u8;
            output[[y, x, 3]] = input[[y, x, 3]];
        }
    }
    output
}
