#![allow(clippy::excessive_precision, clippy::needless_range_loop)]

//! hue-engine: perceptual color analysis
//!
//! This library extracts dominant colors from an image, matches each one
//! against a reference palette in CIE Lab, and scores text contrast per
//! WCAG 2.x.
//!
//! # Quick Start
//!
//! The [`PaletteAnalyzer`] builder is the primary entry point:
//!
//! ```
//! use std::sync::Arc;
//! use hue_engine::{PaletteAnalyzer, PixelBuffer, ReferencePalette, Srgb};
//!
//! let palette = Arc::new(
//!     ReferencePalette::from_table([
//!         ("red", vec![(500, "#ef4444")]),
//!         ("blue", vec![(500, "#3b82f6")]),
//!     ])
//!     .unwrap(),
//! );
//!
//! let red = Srgb::from_u8(255, 0, 0);
//! let blue = Srgb::from_u8(0, 0, 255);
//! let image = PixelBuffer::new(2, 2, vec![red, red, blue, blue]).unwrap();
//!
//! let analysis = PaletteAnalyzer::new(palette).k(2).analyze(&image).unwrap();
//! assert_eq!(analysis.colors.len(), 2);
//! ```
//!
//! # Building Blocks
//!
//! Each stage is usable on its own:
//!
//! - [`to_lab`]: batch sRGB → Lab conversion
//! - [`delta_e_76`], [`ciede2000`], [`pairwise`]: color differences
//! - [`DominantColorExtractor`]: k-means dominant colors with weights
//! - [`ReferencePalette::nearest`] / [`ReferencePalette::match_all`]: matching
//! - [`ContrastResult::score`], [`contrast_ratio`], [`WcagTier`]: accessibility
//!
//! # Color Science
//!
//! ## Three Color Spaces, Three Purposes
//!
//! | Color Space | Key Property | Used For |
//! |-------------|--------------|----------|
//! | **sRGB** | Standard encoding (IEC 61966-2-1) | Input, clustering, hex output |
//! | **Linear RGB** | Proportional to light intensity | XYZ conversion, relative luminance |
//! | **CIE Lab** | Approximately perceptually uniform | ΔE76 / CIEDE2000 matching |
//!
//! Clustering runs on raw sRGB values. Dominant-color extraction is about
//! which encoded values an image is made of, and the cluster centers are
//! reported back in that same encoding.
//!
//! Matching runs in Lab because a ΔE of 1 is meant to be a just-noticeable
//! difference anywhere in the gamut. Plain Lab distance (ΔE76) overstates
//! differences between saturated colors and mishandles blues, which is what
//! CIEDE2000's lightness, chroma and hue weights and its rotation term
//! correct. CIEDE2000 is the default.
//!
//! Luminance is computed from linear light. The WCAG formula weights the
//! gamma-expanded channels; feeding it encoded values overestimates dark
//! colors.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PixelBuffer (sRGB)
//!     |
//!     v
//! area_downscale           (longest side <= max_side)
//!     |
//!     +---> sample_pixels  (seeded, at most sample_cap)
//!     |         |
//!     |       k-means++    (RGB, best of N attempts)
//!     |         |
//!     |       centers      (clip + round to sRGB)
//!     |         |
//!     +<--------+
//!     |
//!     v
//! weight every frame pixel by nearest center
//!     |
//!     v
//! WeightedColor[k]  ---> to_lab ---> nearest reference entry (ΔE)
//!     |
//!     +---> relative luminance ---> contrast vs black/white ---> WCAG tier
//! ```

pub mod accessibility;
pub mod analysis;
pub mod color;
pub mod distance;
pub mod error;
pub mod extract;
pub mod matcher;


pub use accessibility::{
    contrast_ratio, ideal_text_color, relative_luminance, ContrastResult, WcagTier,
};
pub use analysis::{Analysis, AnalyzedColor, PaletteAnalyzer, SortKey};
pub use color::{to_lab, Lab, LinearRgb, Srgb};
pub use distance::{ciede2000, delta_e_76, pairwise, DeltaEMetric, DistanceMatrix};
pub use error::{EngineError, ParseColorError, Result};
pub use extract::{
    area_downscale, sample_pixels, target_size, DominantColorExtractor, ExtractOptions,
    Extraction, PixelBuffer, WeightedColor, MAX_CLUSTERS,
};
pub use matcher::{Match, PaletteEntry, ReferencePalette};
