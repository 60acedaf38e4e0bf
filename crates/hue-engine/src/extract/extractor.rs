use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};

use super::buffer::PixelBuffer;
use super::kmeans::{kmeans, nearest, KmeansParams, Point};
use super::options::ExtractOptions;
use super::resize::area_downscale;
use super::sample::sample_pixels;
use crate::color::Srgb;
use crate::error::{EngineError, Result};

/// A representative color and its share of the image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedColor {
    /// Cluster center, clipped and rounded to sRGB.
    pub color: Srgb,
    /// Fraction of the weighted frame assigned to this center (0..=1).
    pub weight: f64,
}

/// Result of a dominant-color extraction.
///
/// `colors` is in prevalence order: index 0 is the most common color.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    /// Exactly `k` colors; weights sum to 1.
    pub colors: Vec<WeightedColor>,
    /// Pixel count per color, aligned with `colors`.
    pub counts: Vec<usize>,
    /// Pixels in the (downscaled) frame used for weighting.
    pub pixels_weighted: usize,
    /// The clustered pixels held fewer distinct colors than `k`, so some
    /// centers are duplicates or carry near-zero weight.
    pub degenerate: bool,
}

/// Reduces an image to `k` weighted representative colors.
///
/// # Example
///
/// ```
/// use hue_engine::{DominantColorExtractor, ExtractOptions, PixelBuffer, Srgb};
///
/// let red = Srgb::from_u8(255, 0, 0);
/// let blue = Srgb::from_u8(0, 0, 255);
/// let image = PixelBuffer::new(2, 2, vec![red, red, blue, blue]).unwrap();
///
/// let extractor = DominantColorExtractor::new(ExtractOptions::new().k(2)).unwrap();
/// let result = extractor.extract(&image).unwrap();
///
/// assert_eq!(result.colors.len(), 2);
/// assert!((result.colors[0].weight - 0.5).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct DominantColorExtractor {
    options: ExtractOptions,
}

impl DominantColorExtractor {
    /// Create an extractor after validating `options`.
    pub fn new(options: ExtractOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// The options this extractor runs with.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Run the pipeline: downscale, subsample, cluster, weight, sort.
    ///
    /// # Errors
    ///
    /// [`EngineError::EmptyImage`] if no pixel could be assigned to a center.
    /// A validated [`PixelBuffer`] always has pixels, so this only guards the
    /// weight normalization.
    pub fn extract(&self, image: &PixelBuffer) -> Result<Extraction> {
        let opts = &self.options;

        let frame = area_downscale(image, opts.max_side)?;
        let sample = sample_pixels(frame.pixels(), opts.sample_cap, opts.seed);
        debug!(
            width = frame.width(),
            height = frame.height(),
            sampled = sample.len(),
            k = opts.k,
            "clustering"
        );

        let distinct = sample
            .iter()
            .copied()
            .collect::<HashSet<Srgb>>()
            .len();
        let degenerate = distinct < opts.k;
        if degenerate {
            warn!(
                distinct,
                k = opts.k,
                "fewer distinct colors than clusters; duplicate centers expected"
            );
        }

        let points: Vec<Point> = sample.iter().map(to_point).collect();
        let mut rng = StdRng::seed_from_u64(opts.seed);
        let clustering = kmeans(
            &points,
            &KmeansParams {
                k: opts.k,
                max_iterations: opts.max_iterations,
                epsilon: opts.epsilon,
                attempts: opts.attempts,
            },
            &mut rng,
        );

        let centers: Vec<Srgb> = clustering.centers.iter().map(|c| clip_round(*c)).collect();

        // Weight against the full frame, not the clustering sample
        let center_points: Vec<Point> = centers.iter().map(to_point).collect();
        let mut counts = vec![0usize; centers.len()];
        for pixel in frame.pixels() {
            counts[nearest(&to_point(pixel), &center_points).0] += 1;
        }
        let total: usize = counts.iter().sum();
        if total == 0 {
            return Err(EngineError::EmptyImage);
        }

        let mut order: Vec<usize> = (0..centers.len()).collect();
        order.sort_by(|&a, &b| counts[b].cmp(&counts[a]));

        Ok(Extraction {
            colors: order
                .iter()
                .map(|&i| WeightedColor {
                    color: centers[i],
                    weight: counts[i] as f64 / total as f64,
                })
                .collect(),
            counts: order.iter().map(|&i| counts[i]).collect(),
            pixels_weighted: total,
            degenerate,
        })
    }
}

#[inline]
fn to_point(color: &Srgb) -> Point {
    [f64::from(color.r), f64::from(color.g), f64::from(color.b)]
}

#[inline]
fn clip_round(center: Point) -> Srgb {
    let q = |v: f64| v.clamp(0.0, 255.0).round() as u8;
    Srgb::from_u8(q(center[0]), q(center[1]), q(center[2]))
}
