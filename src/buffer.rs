//! In-memory RGBA pixel buffer.
//!
//! The buffer is backed by an `ndarray` array of shape
//! (height, width, 4) in row-major order, the layout every filter in
//! this crate operates on. Channel values are 8-bit (0-255); images
//! without an alpha channel are expanded to full opacity by the decoder
//! before a buffer is ever constructed.

use ndarray::{Array3, ArrayView3, ShapeError};

/// A decoded RGBA image: width, height, and one RGBA quadruple per
/// pixel, row-major, top-to-bottom.
///
/// Invariant: the backing array always has shape (height, width, 4),
/// so `pixels.len() == width * height * 4` by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Array3<u8>,
}

impl PixelBuffer {
    /// Build a buffer from flat RGBA bytes.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `rgba` - Flat RGBA bytes, length must be width * height * 4
    ///
    /// # Errors
    /// Returns a shape error when the byte length does not match the
    /// dimensions.
    pub fn from_raw(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, ShapeError> {
        let data = Array3::from_shape_vec((height as usize, width as usize, 4), rgba)?;
        Ok(Self { data })
    }

    /// Wrap an existing (height, width, 4) array.
    pub fn from_array(data: Array3<u8>) -> Self {
        debug_assert_eq!(data.dim().2, 4, "pixel buffers are RGBA");
        Self { data }
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.data.dim().1 as u32
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.data.dim().0 as u32
    }

    /// Read-only view for filters.
    pub fn view(&self) -> ArrayView3<'_, u8> {
        self.data.view()
    }

    /// RGBA quadruple at (x, y).
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let (y, x) = (y as usize, x as usize);
        [
            self.data[[y, x, 0]],
            self.data[[y, x, 1]],
            self.data[[y, x, 2]],
            self.data[[y, x, 3]],
        ]
    }

    /// Contiguous RGBA bytes, or `None` if the backing array is not in
    /// standard layout. Buffers built through [`from_raw`] or
    /// [`from_array`] on freshly allocated arrays always are.
    ///
    /// [`from_raw`]: Self::from_raw
    /// [`from_array`]: Self::from_array
    pub fn as_bytes(&self) -> Option<&[u8]> {
        self.data.as_slice()
    }

    /// Consume the buffer, returning the flat RGBA bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data.into_raw_vec_and_offset().0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_valid() {
        let buf = PixelBuffer::from_raw(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();

        assert_eq!(buf.width(), 2);
        assert_eq!(buf.height(), 1);
        assert_eq!(buf.pixel(0, 0), [1, 2, 3, 4]);
        assert_eq!(buf.pixel(1, 0), [5, 6, 7, 8]);
    }

    #[test]
    fn test_from_raw_length_mismatch() {
        let result = PixelBuffer::from_raw(2, 2, vec![0; 15]);
        assert!(result.is_err());
    }

    #[test]
    fn test_as_bytes_roundtrip() {
        let raw = vec![10, 20, 30, 40];
        let buf = PixelBuffer::from_raw(1, 1, raw.clone()).unwrap();

        assert_eq!(buf.as_bytes(), Some(raw.as_slice()));
        assert_eq!(buf.into_raw(), raw);
    }
}
