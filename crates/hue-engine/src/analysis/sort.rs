use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

use super::AnalyzedColor;

/// Output ordering for analyzed colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Descending weight (extraction order).
    #[default]
    Prevalence,
    /// Ascending HSV hue; greys sort with red at 0°.
    Hue,
    /// Ascending luma of the encoded channels, darkest first.
    Luminance,
}

impl SortKey {
    /// Stable machine identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Prevalence => "weight",
            SortKey::Hue => "hue",
            SortKey::Luminance => "luminance",
        }
    }

    /// Stable sort; equal keys keep their prevalence order.
    pub(crate) fn apply(self, colors: &mut [AnalyzedColor]) {
        match self {
            SortKey::Prevalence => {
                colors.sort_by(|a, b| b.weight.total_cmp(&a.weight));
            }
            SortKey::Hue => {
                colors.sort_by(|a, b| a.color.hue_degrees().total_cmp(&b.color.hue_degrees()));
            }
            SortKey::Luminance => {
                colors.sort_by(|a, b| a.color.luma().total_cmp(&b.color.luma()));
            }
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = EngineError;

    /// Accepts `weight`/`prevalence`, `hue` and `luminance`/`lum`, optionally
    /// followed by a direction suffix such as `"hue (asc)"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let key = lowered.split_whitespace().next().unwrap_or("");
        match key {
            "weight" | "prevalence" => Ok(SortKey::Prevalence),
            "hue" => Ok(SortKey::Hue),
            "luminance" | "lum" => Ok(SortKey::Luminance),
            _ => Err(EngineError::InvalidParameter {
                name: "sort",
                reason: format!("unknown sort key {s:?} (expected weight, hue or luminance)"),
            }),
        }
    }
}
