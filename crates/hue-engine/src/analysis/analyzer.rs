//! PaletteAnalyzer builder -- the high-level entry point for the crate.
//!
//! [`PaletteAnalyzer`] chains extraction, reference matching and contrast
//! scoring into one record per dominant color.

use std::sync::Arc;

use tracing::debug;

use crate::accessibility::ContrastResult;
use crate::distance::DeltaEMetric;
use crate::error::Result;
use crate::extract::{DominantColorExtractor, ExtractOptions, PixelBuffer};
use crate::matcher::{Match, ReferencePalette};

use super::{Analysis, AnalyzedColor, SortKey};

/// High-level palette analysis builder.
///
/// # Design
///
/// - Constructor requires a [`ReferencePalette`] (shared, immutable)
/// - Configuration methods consume and return `self`
/// - [`analyze()`](Self::analyze) takes `&self`, so one analyzer serves any
///   number of images
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use hue_engine::{PaletteAnalyzer, PixelBuffer, ReferencePalette, SortKey, Srgb};
///
/// let palette = Arc::new(
///     ReferencePalette::from_table([
///         ("red", vec![(500, "#ef4444")]),
///         ("blue", vec![(500, "#3b82f6")]),
///     ])
///     .unwrap(),
/// );
///
/// let analyzer = PaletteAnalyzer::new(palette).k(2).sort_by(SortKey::Hue);
///
/// let red = Srgb::from_u8(255, 0, 0);
/// let blue = Srgb::from_u8(0, 0, 255);
/// let image = PixelBuffer::new(2, 2, vec![red, red, blue, blue]).unwrap();
/// let analysis = analyzer.analyze(&image).unwrap();
///
/// assert_eq!(analysis.colors[0].index, 1);
/// assert_eq!(analysis.colors[0].matched.as_ref().unwrap().entry.family, "red");
/// ```
#[derive(Debug, Clone)]
pub struct PaletteAnalyzer {
    palette: Arc<ReferencePalette>,
    options: ExtractOptions,
    metric: DeltaEMetric,
    sort: SortKey,
    with_matches: bool,
}

impl PaletteAnalyzer {
    /// Create an analyzer with default options: k = 6, CIEDE2000,
    /// prevalence order, matching enabled.
    pub fn new(palette: Arc<ReferencePalette>) -> Self {
        Self {
            palette,
            options: ExtractOptions::default(),
            metric: DeltaEMetric::default(),
            sort: SortKey::default(),
            with_matches: true,
        }
    }

    /// Replace all extraction options.
    #[inline]
    pub fn options(mut self, options: ExtractOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the cluster count.
    #[inline]
    pub fn k(mut self, k: usize) -> Self {
        self.options = self.options.k(k);
        self
    }

    /// Set the random seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.options = self.options.seed(seed);
        self
    }

    /// Set the matching metric.
    #[inline]
    pub fn metric(mut self, metric: DeltaEMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Set the output ordering.
    #[inline]
    pub fn sort_by(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Enable or disable reference matching.
    #[inline]
    pub fn with_matches(mut self, enabled: bool) -> Self {
        self.with_matches = enabled;
        self
    }

    /// The reference palette in use.
    pub fn palette(&self) -> &Arc<ReferencePalette> {
        &self.palette
    }

    /// Extract, match, score and sort.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidParameter`](crate::EngineError::InvalidParameter)
    ///   for out-of-range options
    /// - [`EngineError::EmptyImage`](crate::EngineError::EmptyImage) if no
    ///   weight could be computed
    pub fn analyze(&self, image: &PixelBuffer) -> Result<Analysis> {
        let extraction = DominantColorExtractor::new(self.options.clone())?.extract(image)?;

        let matches: Vec<Option<Match>> = if self.with_matches {
            let colors: Vec<_> = extraction.colors.iter().map(|c| c.color).collect();
            self.palette.match_all(&colors, self.metric).into_iter().map(Some).collect()
        } else {
            vec![None; extraction.colors.len()]
        };

        let mut colors: Vec<AnalyzedColor> = extraction
            .colors
            .iter()
            .zip(matches)
            .map(|(weighted, matched)| AnalyzedColor {
                index: 0,
                color: weighted.color,
                weight: weighted.weight,
                matched,
                contrast: ContrastResult::score(weighted.color),
            })
            .collect();

        self.sort.apply(&mut colors);
        for (i, color) in colors.iter_mut().enumerate() {
            color.index = i + 1;
        }

        debug!(
            colors = colors.len(),
            metric = %self.metric,
            sort = %self.sort,
            degenerate = extraction.degenerate,
            "analysis complete"
        );

        Ok(Analysis {
            colors,
            degenerate: extraction.degenerate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Srgb;
    use crate::error::EngineError;

    fn palette() -> Arc<ReferencePalette> {
        Arc::new(
            ReferencePalette::from_table([
                ("red", vec![(500, "#ef4444")]),
                ("yellow", vec![(400, "#facc15")]),
                ("blue", vec![(500, "#3b82f6"), (900, "#1e3a8a")]),
            ])
            .unwrap(),
        )
    }

    /// 50% blue, 30% yellow, 20% red
    fn three_color_image() -> PixelBuffer {
        let mut pixels = vec![Srgb::from_u8(30, 60, 230); 50];
        pixels.extend(vec![Srgb::from_u8(250, 210, 20); 30]);
        pixels.extend(vec![Srgb::from_u8(230, 30, 30); 20]);
        PixelBuffer::new(10, 10, pixels).unwrap()
    }

    #[test]
    fn test_prevalence_order_and_indices() {
        let analysis = PaletteAnalyzer::new(palette())
            .k(3)
            .analyze(&three_color_image())
            .unwrap();
        let indices: Vec<usize> = analysis.colors.iter().map(|c| c.index).collect();
        assert_eq!(indices, [1, 2, 3]);
        let weights: Vec<f64> = analysis.colors.iter().map(|c| c.weight).collect();
        assert_eq!(weights, [0.5, 0.3, 0.2]);
        let families: Vec<&str> = analysis
            .colors
            .iter()
            .map(|c| c.matched.as_ref().unwrap().entry.family.as_str())
            .collect();
        assert_eq!(families, ["blue", "yellow", "red"]);
        assert!(!analysis.degenerate);
    }

    #[test]
    fn test_hue_order() {
        let analysis = PaletteAnalyzer::new(palette())
            .k(3)
            .sort_by(SortKey::Hue)
            .analyze(&three_color_image())
            .unwrap();
        let colors: Vec<Srgb> = analysis.colors.iter().map(|c| c.color).collect();
        assert_eq!(
            colors,
            [
                Srgb::from_u8(230, 30, 30),
                Srgb::from_u8(250, 210, 20),
                Srgb::from_u8(30, 60, 230),
            ]
        );
        assert_eq!(analysis.colors[0].index, 1);
    }

    #[test]
    fn test_luminance_order() {
        let analysis = PaletteAnalyzer::new(palette())
            .k(3)
            .sort_by(SortKey::Luminance)
            .analyze(&three_color_image())
            .unwrap();
        let lumas: Vec<f64> = analysis.colors.iter().map(|c| c.color.luma()).collect();
        assert!(lumas.windows(2).all(|w| w[0] <= w[1]), "{lumas:?}");
    }

    #[test]
    fn test_luminance_order_uses_encoded_luma() {
        // Red luma 0.2126 < green luma 0.2160, though green is darker in
        // relative luminance
        let red = Srgb::from_u8(255, 0, 0);
        let green = Srgb::from_u8(0, 77, 0);
        let mut pixels = vec![red; 60];
        pixels.extend(vec![green; 40]);
        let image = PixelBuffer::new(10, 10, pixels).unwrap();

        let analysis = PaletteAnalyzer::new(palette())
            .k(2)
            .sort_by(SortKey::Luminance)
            .analyze(&image)
            .unwrap();
        let colors: Vec<Srgb> = analysis.colors.iter().map(|c| c.color).collect();
        assert_eq!(colors, [red, green]);
        assert_eq!(analysis.colors[0].weight, 0.6);

        // Indices follow the sorted position, not prevalence
        let sorted = PaletteAnalyzer::new(palette())
            .k(2)
            .sort_by(SortKey::Hue)
            .analyze(&PixelBuffer::new(10, 10, [vec![green; 60], vec![red; 40]].concat()).unwrap())
            .unwrap();
        assert_eq!(sorted.colors[0].color, red);
        assert_eq!(sorted.colors[0].weight, 0.4);
        assert_eq!(sorted.colors[0].index, 1);
    }

    #[test]
    fn test_without_matches() {
        let analysis = PaletteAnalyzer::new(palette())
            .k(3)
            .with_matches(false)
            .analyze(&three_color_image())
            .unwrap();
        assert!(analysis.colors.iter().all(|c| c.matched.is_none()));
    }

    #[test]
    fn test_metric_is_carried_on_matches() {
        let analysis = PaletteAnalyzer::new(palette())
            .k(3)
            .metric(DeltaEMetric::Cie76)
            .analyze(&three_color_image())
            .unwrap();
        for color in &analysis.colors {
            assert_eq!(color.matched.as_ref().unwrap().metric, DeltaEMetric::Cie76);
        }
    }

    #[test]
    fn test_contrast_scored_per_color() {
        let analysis = PaletteAnalyzer::new(palette())
            .k(3)
            .analyze(&three_color_image())
            .unwrap();
        for color in &analysis.colors {
            assert_eq!(color.contrast, ContrastResult::score(color.color));
        }
        // Yellow background wants dark text
        assert_eq!(analysis.colors[1].contrast.ideal_foreground, Srgb::BLACK);
    }

    #[test]
    fn test_invalid_k_is_reported() {
        let err = PaletteAnalyzer::new(palette())
            .k(0)
            .analyze(&three_color_image())
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidParameter { name: "k", .. }));
    }

    #[test]
    fn test_analyzer_is_reusable() {
        let analyzer = PaletteAnalyzer::new(palette()).k(3).seed(5);
        let image = three_color_image();
        assert_eq!(analyzer.analyze(&image).unwrap(), analyzer.analyze(&image).unwrap());
    }
}
