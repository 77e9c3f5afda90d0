//! The filter pipeline boundary.
//!
//! Chains decode -> kernel -> encode in one synchronous call. The
//! pipeline is a pure function of its inputs: no shared state, no
//! suspension points, so concurrent invocations are safe by
//! construction.

use tracing::debug;

use crate::buffer::PixelBuffer;
use crate::codec;
use crate::error::FilterError;
use crate::filters::FilterKind;

/// Decode `image_bytes`, apply the filter named `filter_name`, and
/// return the result encoded as PNG.
///
/// Accepts any raster format the decoder recognizes (PNG, JPEG); the
/// output is always PNG regardless of input format.
///
/// # Arguments
/// * `image_bytes` - Encoded image of unspecified format and dimensions
/// * `filter_name` - One of the nine wire names, e.g. `"grayscale"`
///
/// # Errors
/// * [`FilterError::UnknownFilter`] - `filter_name` is not a known filter
/// * [`FilterError::Decode`] - `image_bytes` is empty, truncated, or not
///   a recognized raster format
/// * [`FilterError::Encode`] - internal invariant violation while
///   re-encoding (defensive)
pub fn apply_filter(image_bytes: &[u8], filter_name: &str) -> Result<Vec<u8>, FilterError> {
    let kind = FilterKind::from_name(filter_name)
        .ok_or_else(|| FilterError::UnknownFilter(filter_name.to_string()))?;

    let buffer = codec::decode(image_bytes)?;
    debug!(
        filter = kind.name(),
        width = buffer.width(),
        height = buffer.height(),
        "applying filter"
    );

    let filtered = PixelBuffer::from_array(kind.apply(buffer.view()));
    let encoded = codec::encode(&filtered)?;
    debug!(
        input_len = image_bytes.len(),
        output_len = encoded.len(),
        "filter pipeline complete"
    );

    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_fixture(width: u32, height: u32, rgba: Vec<u8>) -> Vec<u8> {
        let buf = PixelBuffer::from_raw(width, height, rgba).unwrap();
        codec::encode(&buf).unwrap()
    }

    #[test]
    fn test_empty_input_is_decode_error() {
        let result = apply_filter(&[], "sepia");
        assert!(matches!(result, Err(FilterError::Decode(_))));
    }

    #[test]
    fn test_unknown_filter_name() {
        let png = png_fixture(2, 2, vec![128; 2 * 2 * 4]);

        let result = apply_filter(&png, "oilpaint");
        match result {
            Err(FilterError::UnknownFilter(name)) => assert_eq!(name, "oilpaint"),
            other => panic!("expected UnknownFilter, got {other:?}"),
        }
    }

    #[test]
    fn test_invert_single_pixel_roundtrip() {
        let png = png_fixture(1, 1, vec![10, 20, 30, 255]);

        let out = apply_filter(&png, "invert").unwrap();
        let decoded = codec::decode(&out).unwrap();

        assert_eq!(decoded.width(), 1);
        assert_eq!(decoded.height(), 1);
        assert_eq!(decoded.pixel(0, 0), [245, 235, 225, 255]);
    }

    #[test]
    fn test_output_preserves_dimensions_for_all_filters() {
        let png = png_fixture(3, 5, (0..3 * 5 * 4).map(|i| i as u8).collect());

        for kind in FilterKind::ALL {
            let out = apply_filter(&png, kind.name()).unwrap();
            let decoded = codec::decode(&out).unwrap();
            assert_eq!(decoded.width(), 3, "{}", kind.name());
            assert_eq!(decoded.height(), 5, "{}", kind.name());
        }
    }

    #[test]
    fn test_output_is_valid_png() {
        let png = png_fixture(2, 2, vec![200; 2 * 2 * 4]);

        let out = apply_filter(&png, "grayscale").unwrap();

        // PNG signature
        assert_eq!(&out[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n']);
    }

    #[test]
    fn test_deterministic() {
        let png = png_fixture(4, 4, (0..4 * 4 * 4).map(|i| (i * 7) as u8).collect());

        let a = apply_filter(&png, "emboss").unwrap();
        let b = apply_filter(&png, "emboss").unwrap();
        assert_eq!(a, b);
    }
}
