//! Dominant-color extraction
//!
//! Reduces a pixel buffer to `k` weighted representative colors:
//!
//! 1. Area-downscale so the longest side fits `max_side`.
//! 2. Draw a seeded subsample of at most `sample_cap` pixels.
//! 3. Cluster the sample in RGB with k-means++ seeding and restarts.
//! 4. Clip and round the centers to sRGB.
//! 5. Assign every pixel of the downscaled frame to its nearest center and
//!    normalize the counts into weights.
//! 6. Sort by descending weight.
//!
//! Clustering runs in RGB, not Lab. Lab only enters when the extracted
//! colors are matched against a reference palette.

mod buffer;
mod extractor;
mod kmeans;
mod options;
mod resize;
mod sample;

pub use buffer::PixelBuffer;
pub use extractor::{DominantColorExtractor, Extraction, WeightedColor};
pub use options::{ExtractOptions, MAX_CLUSTERS};
pub use resize::{area_downscale, target_size};
pub use sample::sample_pixels;
