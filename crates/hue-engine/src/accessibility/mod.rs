//! WCAG 2.x luminance and contrast scoring
//!
//! Relative luminance weights the gamma-expanded channels by the Rec. 709
//! coefficients. Contrast is `(L_lighter + 0.05) / (L_darker + 0.05)`, which
//! ranges from 1 (identical) to 21 (black on white) regardless of argument
//! order.

use std::fmt;

use crate::color::{LinearRgb, Srgb};

/// Relative luminance of an sRGB color, 0.0 (black) to 1.0 (white).
///
/// ```
/// use hue_engine::{relative_luminance, Srgb};
/// assert_eq!(relative_luminance(Srgb::BLACK), 0.0);
/// assert!((relative_luminance(Srgb::WHITE) - 1.0).abs() < 1e-12);
/// ```
pub fn relative_luminance(color: Srgb) -> f64 {
    let linear = LinearRgb::from(color);
    0.2126 * linear.r + 0.7152 * linear.g + 0.0722 * linear.b
}

/// WCAG contrast ratio between two colors (symmetric, at least 1.0).
///
/// ```
/// use hue_engine::{contrast_ratio, Srgb};
/// assert_eq!(contrast_ratio(Srgb::BLACK, Srgb::WHITE), 21.0);
/// ```
pub fn contrast_ratio(a: Srgb, b: Srgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Black or white, whichever reads better on `background`. Ties go to white.
pub fn ideal_text_color(background: Srgb) -> Srgb {
    if contrast_ratio(background, Srgb::WHITE) >= contrast_ratio(background, Srgb::BLACK) {
        Srgb::WHITE
    } else {
        Srgb::BLACK
    }
}

/// WCAG conformance tier of a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WcagTier {
    /// ≥ 7.0
    Aaa,
    /// ≥ 4.5
    Aa,
    /// ≥ 3.0, sufficient for large text only
    AaLarge,
    /// Below 3.0
    Fail,
}

impl WcagTier {
    /// Classify a contrast ratio. Thresholds are inclusive.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 7.0 {
            WcagTier::Aaa
        } else if ratio >= 4.5 {
            WcagTier::Aa
        } else if ratio >= 3.0 {
            WcagTier::AaLarge
        } else {
            WcagTier::Fail
        }
    }

    /// Display label: `"AAA"`, `"AA"`, `"AA (Large)"` or `"N/A"`.
    pub fn label(self) -> &'static str {
        match self {
            WcagTier::Aaa => "AAA",
            WcagTier::Aa => "AA",
            WcagTier::AaLarge => "AA (Large)",
            WcagTier::Fail => "N/A",
        }
    }
}

impl fmt::Display for WcagTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Contrast of a background color against both text candidates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastResult {
    /// Ratio against pure black.
    pub vs_black: f64,
    /// Ratio against pure white.
    pub vs_white: f64,
    /// Black or white, per [`ideal_text_color`].
    pub ideal_foreground: Srgb,
    /// Tier of the better of the two ratios.
    pub tier: WcagTier,
}

impl ContrastResult {
    /// Score `background` against black and white text.
    ///
    /// ```
    /// use hue_engine::{ContrastResult, Srgb, WcagTier};
    ///
    /// let result = ContrastResult::score(Srgb::BLACK);
    /// assert_eq!(result.ideal_foreground, Srgb::WHITE);
    /// assert_eq!(result.tier, WcagTier::Aaa);
    /// ```
    pub fn score(background: Srgb) -> Self {
        let vs_black = contrast_ratio(background, Srgb::BLACK);
        let vs_white = contrast_ratio(background, Srgb::WHITE);
        let ideal_foreground = if vs_white >= vs_black {
            Srgb::WHITE
        } else {
            Srgb::BLACK
        };
        Self {
            vs_black,
            vs_white,
            ideal_foreground,
            tier: WcagTier::from_ratio(vs_black.max(vs_white)),
        }
    }

    /// The higher of the two ratios.
    pub fn best_ratio(&self) -> f64 {
        self.vs_black.max(self.vs_white)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extreme_contrast() {
        assert_eq!(contrast_ratio(Srgb::BLACK, Srgb::WHITE), 21.0);
        assert_eq!(contrast_ratio(Srgb::WHITE, Srgb::BLACK), 21.0);
    }

    #[test]
    fn test_self_contrast_is_one() {
        for color in [
            Srgb::BLACK,
            Srgb::WHITE,
            Srgb::from_u8(239, 68, 68),
            Srgb::from_u8(1, 2, 3),
        ] {
            assert_eq!(contrast_ratio(color, color), 1.0);
        }
    }

    #[test]
    fn test_known_grey_on_white() {
        // #767676 is the lightest grey passing AA on white
        let ratio = contrast_ratio(Srgb::from_u8(0x76, 0x76, 0x76), Srgb::WHITE);
        assert!((ratio - 4.54).abs() < 0.01, "got {ratio}");
    }

    #[test]
    fn test_contrast_is_symmetric() {
        let a = Srgb::from_u8(255, 0, 0);
        let b = Srgb::from_u8(0, 40, 90);
        assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
        assert!(contrast_ratio(a, b) >= 1.0);
    }

    #[test]
    fn test_ideal_text_color() {
        assert_eq!(ideal_text_color(Srgb::BLACK), Srgb::WHITE);
        assert_eq!(ideal_text_color(Srgb::WHITE), Srgb::BLACK);
        assert_eq!(ideal_text_color(Srgb::from_u8(250, 204, 21)), Srgb::BLACK);
        assert_eq!(ideal_text_color(Srgb::from_u8(37, 99, 235)), Srgb::WHITE);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(WcagTier::from_ratio(21.0), WcagTier::Aaa);
        assert_eq!(WcagTier::from_ratio(7.0), WcagTier::Aaa);
        assert_eq!(WcagTier::from_ratio(6.99), WcagTier::Aa);
        assert_eq!(WcagTier::from_ratio(4.5), WcagTier::Aa);
        assert_eq!(WcagTier::from_ratio(3.0), WcagTier::AaLarge);
        assert_eq!(WcagTier::from_ratio(2.9), WcagTier::Fail);
        assert_eq!(WcagTier::from_ratio(1.0), WcagTier::Fail);
    }

    #[test]
    fn test_tier_labels() {
        assert_eq!(WcagTier::Aaa.label(), "AAA");
        assert_eq!(WcagTier::Aa.label(), "AA");
        assert_eq!(WcagTier::AaLarge.to_string(), "AA (Large)");
        assert_eq!(WcagTier::Fail.label(), "N/A");
    }

    #[test]
    fn test_score_consistency() {
        for color in [
            Srgb::from_u8(0x76, 0x76, 0x76),
            Srgb::from_u8(239, 68, 68),
            Srgb::from_u8(16, 185, 129),
            Srgb::WHITE,
        ] {
            let result = ContrastResult::score(color);
            assert_eq!(result.ideal_foreground, ideal_text_color(color));
            assert_eq!(result.vs_black, contrast_ratio(color, Srgb::BLACK));
            assert_eq!(result.vs_white, contrast_ratio(color, Srgb::WHITE));
            assert_eq!(result.tier, WcagTier::from_ratio(result.best_ratio()));
        }
    }

    #[test]
    fn test_score_white_background() {
        let result = ContrastResult::score(Srgb::WHITE);
        assert_eq!(result.vs_black, 21.0);
        assert_eq!(result.vs_white, 1.0);
        assert_eq!(result.ideal_foreground, Srgb::BLACK);
        assert_eq!(result.tier.label(), "AAA");
    }
}
