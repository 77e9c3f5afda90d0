//! Image decode/encode boundary.
//!
//! Decoding accepts any raster format enabled on the `image` crate
//! (PNG and JPEG here), detected from its magic bytes, and normalizes
//! the pixels to RGBA8. Encoding always produces PNG: a lossless
//! output keeps repeated filter-apply cycles from compounding lossy
//! compression artifacts.

use std::io::Cursor;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::buffer::PixelBuffer;
use crate::error::FilterError;

/// Decode encoded image bytes into an RGBA pixel buffer.
///
/// Images without an alpha channel are expanded with full opacity;
/// other channel orders are normalized to RGBA.
///
/// # Errors
/// [`FilterError::Decode`] when the bytes are empty, truncated, not a
/// recognized raster signature, or decode to a zero-size image.
pub fn decode(bytes: &[u8]) -> Result<PixelBuffer, FilterError> {
    if bytes.is_empty() {
        return Err(FilterError::Decode("input is empty".into()));
    }

    let img = image::load_from_memory(bytes).map_err(|e| FilterError::Decode(e.to_string()))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    if width == 0 || height == 0 {
        return Err(FilterError::Decode("image has zero width or height".into()));
    }

    PixelBuffer::from_raw(width, height, rgba.into_raw())
        .map_err(|e| FilterError::Decode(e.to_string()))
}

/// Encode a pixel buffer as PNG bytes.
///
/// # Errors
/// [`FilterError::Encode`] on a buffer whose byte length does not match
/// its dimensions (unreachable given decoder invariants) or when the
/// PNG encoder fails.
pub fn encode(buffer: &PixelBuffer) -> Result<Vec<u8>, FilterError> {
    let (width, height) = (buffer.width(), buffer.height());
    let expected = width as usize * height as usize * 4;

    let bytes = buffer
        .as_bytes()
        .ok_or_else(|| FilterError::Encode("pixel buffer is not contiguous".into()))?;
    if bytes.len() != expected {
        return Err(FilterError::Encode(format!(
            "pixel length {} does not match {}x{} RGBA",
            bytes.len(),
            width,
            height
        )));
    }

    let mut out = Vec::new();
    PngEncoder::new(Cursor::new(&mut out))
        .write_image(bytes, width, height, ExtendedColorType::Rgba8)
        .map_err(|e| FilterError::Encode(e.to_string()))?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_empty_input() {
        let result = decode(&[]);
        assert!(matches!(result, Err(FilterError::Decode(_))));
    }

    #[test]
    fn test_decode_unrecognized_signature() {
        let result = decode(b"definitely not an image");
        assert!(matches!(result, Err(FilterError::Decode(_))));
    }

    #[test]
    fn test_decode_truncated_png() {
        let buf = PixelBuffer::from_raw(4, 4, vec![128; 4 * 4 * 4]).unwrap();
        let png = encode(&buf).unwrap();

        // Cut the stream in the middle of the pixel data
        let result = decode(&png[..png.len() / 2]);
        assert!(matches!(result, Err(FilterError::Decode(_))));
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let raw: Vec<u8> = (0..2 * 3 * 4).map(|i| (i * 10) as u8).collect();
        let buf = PixelBuffer::from_raw(2, 3, raw.clone()).unwrap();

        let png = encode(&buf).unwrap();
        let back = decode(&png).unwrap();

        assert_eq!(back.width(), 2);
        assert_eq!(back.height(), 3);
        assert_eq!(back.into_raw(), raw);
    }

    #[test]
    fn test_encode_single_pixel() {
        let buf = PixelBuffer::from_raw(1, 1, vec![200, 100, 50, 255]).unwrap();

        let png = encode(&buf).unwrap();
        let back = decode(&png).unwrap();

        assert_eq!(back.pixel(0, 0), [200, 100, 50, 255]);
    }
}
