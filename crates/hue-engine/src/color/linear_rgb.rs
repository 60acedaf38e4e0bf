//! Linear RGB color type
//!
//! Linear RGB is proportional to emitted light. Both the XYZ matrix and the
//! WCAG luminance weights are defined on linear channels, so every
//! perceptual computation passes through this type first.

use super::lut::srgb8_to_linear;
use super::srgb::Srgb;

/// A color in linear RGB color space (channels in 0.0..=1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl From<Srgb> for LinearRgb {
    /// Gamma-expand each channel with the piecewise sRGB transfer function.
    fn from(srgb: Srgb) -> Self {
        Self {
            r: srgb8_to_linear(srgb.r),
            g: srgb8_to_linear(srgb.g),
            b: srgb8_to_linear(srgb.b),
        }
    }
}
