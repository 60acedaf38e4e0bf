//! Area-averaging downscale.
//!
//! A box filter on a shrinking resize averages every source pixel under the
//! output footprint, so small details blend into their surroundings instead
//! of being skipped as nearest-neighbor sampling would.

use std::borrow::Cow;

use fast_image_resize::images::Image;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};

use super::buffer::PixelBuffer;
use crate::color::Srgb;
use crate::error::{EngineError, Result};

/// Target size for an image whose longest side must fit in `max_side`.
///
/// Returns `None` when no downscale is needed. Each side is truncated
/// after scaling and never drops below one pixel.
pub fn target_size(width: usize, height: usize, max_side: usize) -> Option<(usize, usize)> {
    let longest = width.max(height);
    if longest <= max_side {
        return None;
    }
    let scale = max_side as f64 / longest as f64;
    let scaled = |side: usize| ((side as f64 * scale) as usize).max(1);
    Some((scaled(width), scaled(height)))
}

/// Shrink `image` so its longest side is at most `max_side`, keeping aspect
/// ratio. Images that already fit are borrowed unchanged.
///
/// ```
/// use hue_engine::{area_downscale, PixelBuffer, Srgb};
///
/// let image = PixelBuffer::new(4, 2, vec![Srgb::WHITE; 8]).unwrap();
/// let small = area_downscale(&image, 2).unwrap();
/// assert_eq!((small.width(), small.height()), (2, 1));
/// ```
///
/// # Errors
///
/// [`EngineError::Resize`] if the resampler rejects the buffers.
pub fn area_downscale(image: &PixelBuffer, max_side: usize) -> Result<Cow<'_, PixelBuffer>> {
    let Some((new_width, new_height)) = target_size(image.width(), image.height(), max_side)
    else {
        return Ok(Cow::Borrowed(image));
    };

    let bytes: Vec<u8> = image.pixels().iter().flat_map(|p| p.to_bytes()).collect();
    let src = Image::from_vec_u8(
        dimension(image.width())?,
        dimension(image.height())?,
        bytes,
        PixelType::U8x3,
    )
    .map_err(|e| EngineError::Resize(e.to_string()))?;
    let mut dst = Image::new(dimension(new_width)?, dimension(new_height)?, PixelType::U8x3);

    let options = ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Box));
    Resizer::new()
        .resize(&src, &mut dst, Some(&options))
        .map_err(|e| EngineError::Resize(e.to_string()))?;

    let pixels = dst
        .buffer()
        .chunks_exact(3)
        .map(|c| Srgb::from_u8(c[0], c[1], c[2]))
        .collect();
    PixelBuffer::new(new_width, new_height, pixels).map(Cow::Owned)
}

fn dimension(side: usize) -> Result<u32> {
    u32::try_from(side).map_err(|_| EngineError::Resize(format!("side {side} exceeds u32")))
}
