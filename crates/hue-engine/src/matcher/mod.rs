//! Nearest-reference matching
//!
//! Each extracted color is compared with every entry of a
//! [`ReferencePalette`] in Lab space and bound to the closest one.

mod palette;

pub use palette::{PaletteEntry, ReferencePalette};

use crate::distance::DeltaEMetric;

/// The reference entry closest to a color, with the distance achieved.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    /// Position of the entry in the reference palette.
    pub entry_index: usize,
    /// The matched entry.
    pub entry: PaletteEntry,
    /// ΔE between the color and the entry.
    pub distance: f64,
    /// Metric the distance was computed with.
    pub metric: DeltaEMetric,
}
