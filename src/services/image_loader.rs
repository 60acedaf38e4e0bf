//! Image decoding into engine pixel buffers.

use hue_engine::{EngineError, PixelBuffer, Srgb};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Could not decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Decode PNG, JPEG, WebP, GIF or BMP bytes into an sRGB pixel buffer.
///
/// The format is sniffed from the content. Alpha is dropped; animated
/// formats yield their first frame.
pub fn decode_image(bytes: &[u8]) -> Result<PixelBuffer, ImageError> {
    let decoded = image::load_from_memory(bytes)?;
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    if width == 0 || height == 0 {
        return Err(EngineError::EmptyImage.into());
    }

    let pixels: Vec<Srgb> = rgb
        .into_raw()
        .chunks_exact(3)
        .map(|p| Srgb::from_u8(p[0], p[1], p[2]))
        .collect();

    tracing::debug!(width, height, "Decoded image");
    Ok(PixelBuffer::new(width as usize, height as usize, pixels)?)
}

/// Read and decode an image file.
pub fn load_image(path: &Path) -> Result<PixelBuffer, ImageError> {
    let bytes = std::fs::read(path).map_err(|source| ImageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_image(&bytes)
}
