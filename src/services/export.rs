//! Copy-ready serializations of an analysis.
//!
//! [`ColorRecord`] is the flat, serde-friendly view of one analyzed color;
//! the string renderers produce CSS custom properties, a token map and a
//! `tailwind.config.js` snippet from a list of records.

use hue_engine::{Analysis, AnalyzedColor, Match};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use utoipa::ToSchema;

/// Nearest Tailwind token for a color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MatchRecord {
    /// `family-shade`, e.g. `red-500`
    pub token: String,
    pub family: String,
    pub shade: u16,
    /// Hex value of the token
    pub hex: String,
    /// Distance between the color and the token
    pub delta_e: f64,
    /// "ΔE76" or "ΔE2000"
    pub delta_label: String,
}

impl From<&Match> for MatchRecord {
    fn from(m: &Match) -> Self {
        Self {
            token: m.entry.token(),
            family: m.entry.family.clone(),
            shade: m.entry.shade,
            hex: m.entry.hex(),
            delta_e: m.distance,
            delta_label: m.metric.label().to_string(),
        }
    }
}

/// One dominant color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ColorRecord {
    /// 1-based position in the palette
    pub index: usize,
    /// Lowercase `#rrggbb`
    pub hex: String,
    pub rgb: [u8; 3],
    /// Share of the image, 0..=1
    pub weight: f64,
    /// Nearest Tailwind token, absent when matching is disabled
    pub tailwind: Option<MatchRecord>,
    /// Best text color as `rgb(r,g,b)`
    pub ideal_text: String,
    /// Best text color as hex
    pub ideal_text_hex: String,
    /// Contrast ratio against black text
    pub cr_black: f64,
    /// Contrast ratio against white text
    pub cr_white: f64,
    /// "AAA", "AA", "AA (Large)" or "N/A"
    pub wcag_label: String,
}

impl From<&AnalyzedColor> for ColorRecord {
    fn from(color: &AnalyzedColor) -> Self {
        let contrast = &color.contrast;
        Self {
            index: color.index,
            hex: color.color.to_hex(),
            rgb: color.color.to_bytes(),
            weight: color.weight,
            tailwind: color.matched.as_ref().map(MatchRecord::from),
            ideal_text: contrast.ideal_foreground.to_string(),
            ideal_text_hex: contrast.ideal_foreground.to_hex(),
            cr_black: contrast.vs_black,
            cr_white: contrast.vs_white,
            wcag_label: contrast.tier.label().to_string(),
        }
    }
}

/// The downloadable palette document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaletteReport {
    pub palette: Vec<ColorRecord>,
}

impl From<&Analysis> for PaletteReport {
    fn from(analysis: &Analysis) -> Self {
        Self {
            palette: analysis.colors.iter().map(ColorRecord::from).collect(),
        }
    }
}

/// `:root{ --color-N: #hex; ... }`
pub fn css_variables(records: &[ColorRecord]) -> String {
    let vars: Vec<String> = records
        .iter()
        .map(|r| format!("--color-{}: {};", r.index, r.hex))
        .collect();
    format!(":root{{\n  {}\n}}", vars.join("\n  "))
}

/// `color-N -> family-shade` for every matched record, in record order.
pub fn token_map(records: &[ColorRecord]) -> Vec<(String, String)> {
    records
        .iter()
        .filter_map(|r| {
            r.tailwind
                .as_ref()
                .map(|m| (format!("color-{}", r.index), m.token.clone()))
        })
        .collect()
}

/// [`token_map`] as a JSON object, keys in palette order.
pub fn token_map_json(records: &[ColorRecord]) -> String {
    let pairs: Vec<String> = token_map(records)
        .into_iter()
        .map(|(key, token)| format!("{}: {}", json_string(&key), json_string(&token)))
        .collect();
    if pairs.is_empty() {
        return "{}".to_string();
    }
    format!("{{\n  {}\n}}", pairs.join(",\n  "))
}

fn json_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

/// `tailwind.config.js` snippet exposing the CSS variables as `palette-N`.
pub fn tailwind_config(records: &[ColorRecord]) -> String {
    let mut entries = String::new();
    for r in records {
        let _ = writeln!(entries, "          {}: \"var(--color-{})\",", r.index, r.index);
    }
    format!(
        "// tailwind.config.js (example: using CSS variables as custom colors)\n\
         module.exports = {{\n  theme: {{\n    extend: {{\n      colors: {{\n        palette: {{\n\
         {entries}        }}\n      }}\n    }}\n  }}\n}};"
    )
}

/// Plain-text table for terminals.
pub fn text_table(records: &[ColorRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>2}  {:<8} {:>6}  {:<14} {:>7}  {:<5} {:>6} {:>6}  WCAG",
        "#", "hex", "weight", "tailwind", "ΔE", "text", "black", "white"
    );
    for r in records {
        let (token, delta) = match &r.tailwind {
            Some(m) => (m.token.as_str(), format!("{:.2}", m.delta_e)),
            None => ("-", "-".to_string()),
        };
        let text = if r.ideal_text_hex == "#000000" { "black" } else { "white" };
        let _ = writeln!(
            out,
            "{:>2}  {:<8} {:>5.1}%  {:<14} {:>7}  {:<5} {:>6.2} {:>6.2}  {}",
            r.index,
            r.hex,
            r.weight * 100.0,
            token,
            delta,
            text,
            r.cr_black,
            r.cr_white,
            r.wcag_label
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hue_engine::{ContrastResult, DeltaEMetric, PaletteEntry, Srgb};
    use pretty_assertions::assert_eq;

    fn analyzed(
        index: usize,
        color: Srgb,
        weight: f64,
        token: Option<(&str, u16)>,
    ) -> AnalyzedColor {
        AnalyzedColor {
            index,
            color,
            weight,
            matched: token.map(|(family, shade)| Match {
                entry_index: 0,
                entry: PaletteEntry::new(family, shade, Srgb::from_u8(239, 68, 68)),
                distance: 1.25,
                metric: DeltaEMetric::Ciede2000,
            }),
            contrast: ContrastResult::score(color),
        }
    }

    fn records() -> Vec<ColorRecord> {
        vec![
            ColorRecord::from(&analyzed(1, Srgb::from_u8(239, 68, 68), 0.7, Some(("red", 500)))),
            ColorRecord::from(&analyzed(2, Srgb::WHITE, 0.3, None)),
        ]
    }

    #[test]
    fn test_color_record_fields() {
        let records = records();
        let record = &records[0];
        assert_eq!(record.index, 1);
        assert_eq!(record.hex, "#ef4444");
        assert_eq!(record.rgb, [239, 68, 68]);
        assert_eq!(record.weight, 0.7);

        let tailwind = record.tailwind.as_ref().unwrap();
        assert_eq!(tailwind.token, "red-500");
        assert_eq!(tailwind.family, "red");
        assert_eq!(tailwind.shade, 500);
        assert_eq!(tailwind.hex, "#ef4444");
        assert_eq!(tailwind.delta_e, 1.25);
        assert_eq!(tailwind.delta_label, "ΔE2000");

        let contrast = ContrastResult::score(Srgb::from_u8(239, 68, 68));
        assert_eq!(record.cr_black, contrast.vs_black);
        assert_eq!(record.cr_white, contrast.vs_white);
        assert_eq!(record.wcag_label, contrast.tier.label());
    }

    #[test]
    fn test_ideal_text_formats() {
        let records = records();
        let white = &records[1];
        assert_eq!(white.ideal_text, "rgb(0,0,0)");
        assert_eq!(white.ideal_text_hex, "#000000");
        assert!(white.tailwind.is_none());
    }

    #[test]
    fn test_css_variables() {
        assert_eq!(
            css_variables(&records()),
            ":root{\n  --color-1: #ef4444;\n  --color-2: #ffffff;\n}"
        );
    }

    #[test]
    fn test_token_map_skips_unmatched() {
        assert_eq!(
            token_map(&records()),
            vec![("color-1".to_string(), "red-500".to_string())]
        );
        assert_eq!(token_map_json(&records()), "{\n  \"color-1\": \"red-500\"\n}");
        assert_eq!(token_map_json(&records()[1..]), "{}");
    }

    #[test]
    fn test_token_map_json_keeps_palette_order() {
        let many: Vec<ColorRecord> = (1..=11)
            .map(|i| ColorRecord::from(&analyzed(i, Srgb::BLACK, 0.0, Some(("slate", 900)))))
            .collect();
        let json = token_map_json(&many);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_object().unwrap().len(), 11);
        assert!(json.find("\"color-2\"").unwrap() < json.find("\"color-10\"").unwrap());
    }

    #[test]
    fn test_tailwind_config() {
        let expected = "// tailwind.config.js (example: using CSS variables as custom colors)
module.exports = {
  theme: {
    extend: {
      colors: {
        palette: {
          1: \"var(--color-1)\",
          2: \"var(--color-2)\",
        }
      }
    }
  }
};";
        assert_eq!(tailwind_config(&records()), expected);
    }

    #[test]
    fn test_report_json_shape() {
        let report = PaletteReport {
            palette: records(),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["palette"][0]["tailwind"]["token"], "red-500");
        assert_eq!(json["palette"][0]["rgb"], serde_json::json!([239, 68, 68]));
        assert!(json["palette"][1]["tailwind"].is_null());

        let back: PaletteReport = serde_json::from_value(json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn test_text_table_lists_every_record() {
        let table = text_table(&records());
        assert_eq!(table.lines().count(), 3);
        assert!(table.contains("red-500"));
        assert!(table.contains("70.0%"));
    }
}
