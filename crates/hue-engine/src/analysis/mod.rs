//! Per-color analysis records
//!
//! Combines the outputs of extraction, matching and contrast scoring into
//! the records handed to serializers.

mod analyzer;
mod sort;

pub use analyzer::PaletteAnalyzer;
pub use sort::SortKey;

use crate::accessibility::ContrastResult;
use crate::color::Srgb;
use crate::matcher::Match;

/// One dominant color with everything known about it.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzedColor {
    /// 1-based position after sorting. Equals the prevalence rank only
    /// under [`SortKey::Prevalence`].
    pub index: usize,
    /// The extracted color.
    pub color: Srgb,
    /// Share of the image, 0..=1.
    pub weight: f64,
    /// Nearest reference entry, if matching was enabled.
    pub matched: Option<Match>,
    /// Contrast against black and white text.
    pub contrast: ContrastResult,
}

/// Result of [`PaletteAnalyzer::analyze`].
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Colors in the requested order.
    pub colors: Vec<AnalyzedColor>,
    /// Fewer distinct colors than requested clusters.
    pub degenerate: bool,
}
