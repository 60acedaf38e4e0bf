//! Reference palette with precomputed Lab values.

use std::str::FromStr;

use crate::color::{to_lab, Lab, Srgb};
use crate::distance::{pairwise, DeltaEMetric};
use crate::error::{EngineError, Result};

use super::Match;

/// A named reference color: a family, a shade within it, and its value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PaletteEntry {
    /// Color family, e.g. `"red"`.
    pub family: String,
    /// Shade identifier, e.g. `500`.
    pub shade: u16,
    /// sRGB value.
    pub color: Srgb,
}

impl PaletteEntry {
    /// Create an entry.
    pub fn new(family: impl Into<String>, shade: u16, color: Srgb) -> Self {
        Self {
            family: family.into(),
            shade,
            color,
        }
    }

    /// `"{family}-{shade}"`, e.g. `"red-500"`.
    pub fn token(&self) -> String {
        format!("{}-{}", self.family, self.shade)
    }

    /// Lowercase `#rrggbb`.
    pub fn hex(&self) -> String {
        self.color.to_hex()
    }
}

/// An immutable set of reference colors to match against.
///
/// Lab equivalents are computed once at construction; matching never
/// converts palette entries again. Share one instance (e.g. behind an `Arc`)
/// for as long as the palette is in use.
///
/// # Example
///
/// ```
/// use hue_engine::{DeltaEMetric, PaletteEntry, ReferencePalette, Srgb};
///
/// let palette = ReferencePalette::new(vec![
///     PaletteEntry::new("red", 500, "#ef4444".parse().unwrap()),
///     PaletteEntry::new("blue", 500, "#3b82f6".parse().unwrap()),
/// ])
/// .unwrap();
///
/// let m = palette.nearest(Srgb::from_u8(255, 0, 0), DeltaEMetric::Ciede2000);
/// assert_eq!(m.entry.token(), "red-500");
/// ```
#[derive(Debug, Clone)]
pub struct ReferencePalette {
    entries: Vec<PaletteEntry>,
    labs: Vec<Lab>,
}

impl ReferencePalette {
    /// Build a palette from entries, keeping their order.
    ///
    /// # Errors
    ///
    /// [`EngineError::EmptyPalette`] if `entries` is empty.
    pub fn new(entries: Vec<PaletteEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(EngineError::EmptyPalette);
        }
        let colors: Vec<Srgb> = entries.iter().map(|e| e.color).collect();
        let labs = to_lab(&colors);
        Ok(Self { entries, labs })
    }

    /// Build a palette from a `family → shade → hex` table.
    ///
    /// Families keep the table's order; shades within a family are sorted
    /// ascending.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ParseColor`] on the first malformed hex value
    /// - [`EngineError::EmptyPalette`] if the table holds no shades
    ///
    /// ```
    /// use hue_engine::ReferencePalette;
    ///
    /// let palette = ReferencePalette::from_table([
    ///     ("slate", vec![(400, "#94a3b8"), (200, "#e2e8f0")]),
    /// ])
    /// .unwrap();
    /// assert_eq!(palette.entries()[0].token(), "slate-200");
    /// ```
    pub fn from_table<F, S, H>(table: impl IntoIterator<Item = (F, S)>) -> Result<Self>
    where
        F: Into<String>,
        S: IntoIterator<Item = (u16, H)>,
        H: AsRef<str>,
    {
        let mut entries = Vec::new();
        for (family, shades) in table {
            let family = family.into();
            let mut parsed = shades
                .into_iter()
                .map(|(shade, hex)| Ok((shade, Srgb::from_str(hex.as_ref())?)))
                .collect::<Result<Vec<(u16, Srgb)>>>()?;
            parsed.sort_by_key(|&(shade, _)| shade);
            entries.extend(
                parsed
                    .into_iter()
                    .map(|(shade, color)| PaletteEntry::new(family.clone(), shade, color)),
            );
        }
        Self::new(entries)
    }

    /// Number of entries. Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; construction rejects empty palettes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in reference order.
    #[inline]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Cached Lab values, aligned with [`entries`](Self::entries).
    #[inline]
    pub fn labs(&self) -> &[Lab] {
        &self.labs
    }

    /// Find the entry nearest to `color` under `metric`.
    ///
    /// Linear scan with strict `<`: on exact ties the entry that comes first
    /// in reference order wins.
    pub fn nearest(&self, color: Srgb, metric: DeltaEMetric) -> Match {
        let lab = Lab::from(color);

        let mut best_idx = 0;
        let mut best_dist = f64::MAX;
        for (i, &entry_lab) in self.labs.iter().enumerate() {
            let dist = metric.distance(lab, entry_lab);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        self.make_match(best_idx, best_dist, metric)
    }

    /// Match a batch of colors with one pairwise distance matrix.
    ///
    /// Returns one [`Match`] per input, in input order, identical to calling
    /// [`nearest`](Self::nearest) on each color.
    pub fn match_all(&self, colors: &[Srgb], metric: DeltaEMetric) -> Vec<Match> {
        let matrix = pairwise(metric, &to_lab(colors), &self.labs);
        (0..matrix.rows())
            .filter_map(|row| matrix.argmin(row))
            .map(|(idx, dist)| self.make_match(idx, dist, metric))
            .collect()
    }

    fn make_match(&self, entry_index: usize, distance: f64, metric: DeltaEMetric) -> Match {
        Match {
            entry_index,
            entry: self.entries[entry_index].clone(),
            distance,
            metric,
        }
    }
}
