//! Color types and conversion utilities
//!
//! This module provides type-safe color handling with compile-time distinction
//! between the three spaces the engine touches.
//!
//! # Color Spaces
//!
//! - **sRGB**: The encoding of every input. Clustering and luminance start here.
//! - **LinearRgb**: Linear light intensity. Input to XYZ and to WCAG luminance.
//! - **Lab**: CIE L*a*b* (D65). Both ΔE metrics are defined on it.
//!
//! # Example
//!
//! ```
//! use hue_engine::{to_lab, LinearRgb, Srgb};
//!
//! // A decoded pixel
//! let srgb = Srgb::from_u8(128, 64, 32);
//!
//! // Linear light, for luminance
//! let linear = LinearRgb::from(srgb);
//! assert!(linear.r > linear.g);
//!
//! // Lab, for perceptual distance
//! let labs = to_lab(&[srgb]);
//! assert!(labs[0].l() > 0.0);
//! ```

mod lab;
mod linear_rgb;
mod lut;
mod srgb;

pub use lab::{to_lab, Lab};
pub use linear_rgb::LinearRgb;
pub use srgb::Srgb;
