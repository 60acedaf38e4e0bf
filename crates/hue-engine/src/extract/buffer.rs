use crate::color::Srgb;
use crate::error::{EngineError, Result};

/// A decoded image: row-major sRGB pixels, no alpha.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Srgb>,
}

impl PixelBuffer {
    /// Wrap decoded pixels.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidDimensions`] if `pixels.len() != width * height`
    /// - [`EngineError::EmptyImage`] if there are no pixels at all
    ///
    /// ```
    /// use hue_engine::{PixelBuffer, Srgb};
    ///
    /// let image = PixelBuffer::new(2, 1, vec![Srgb::BLACK, Srgb::WHITE]).unwrap();
    /// assert_eq!(image.len(), 2);
    /// assert!(PixelBuffer::new(0, 0, vec![]).is_err());
    /// ```
    pub fn new(width: usize, height: usize, pixels: Vec<Srgb>) -> Result<Self> {
        let expected = width.checked_mul(height);
        if expected != Some(pixels.len()) {
            return Err(EngineError::InvalidDimensions {
                width,
                height,
                len: pixels.len(),
            });
        }
        if pixels.is_empty() {
            return Err(EngineError::EmptyImage);
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Srgb] {
        &self.pixels
    }

    /// Pixel count. Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Always false; construction rejects empty buffers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Consume the buffer, returning its pixels.
    pub fn into_pixels(self) -> Vec<Srgb> {
        self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_buffer() {
        let image = PixelBuffer::new(3, 2, vec![Srgb::WHITE; 6]).unwrap();
        assert_eq!((image.width(), image.height(), image.len()), (3, 2, 6));
        assert!(!image.is_empty());
        assert_eq!(image.into_pixels().len(), 6);
    }

    #[test]
    fn test_dimension_mismatch() {
        assert_eq!(
            PixelBuffer::new(2, 2, vec![Srgb::WHITE; 3]),
            Err(EngineError::InvalidDimensions {
                width: 2,
                height: 2,
                len: 3
            })
        );
    }

    #[test]
    fn test_empty_image() {
        assert_eq!(PixelBuffer::new(0, 0, vec![]), Err(EngineError::EmptyImage));
        assert_eq!(PixelBuffer::new(5, 0, vec![]), Err(EngineError::EmptyImage));
    }

    #[test]
    fn test_overflowing_dimensions() {
        let err = PixelBuffer::new(usize::MAX, 2, vec![Srgb::BLACK]).unwrap_err();
        assert!(matches!(err, EngineError::InvalidDimensions { .. }));
    }
}
