use super::DeltaEMetric;
use crate::color::Lab;

/// Dense N×M matrix of color differences, row-major.
///
/// Row `i` holds the distances from the `i`-th left color to every right
/// color, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl DistanceMatrix {
    /// Number of left-hand colors.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of right-hand colors.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Distance between left color `row` and right color `col`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(col < self.cols, "column {col} out of bounds ({})", self.cols);
        self.values[row * self.cols + col]
    }

    /// All distances from left color `row`.
    #[inline]
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.values[start..start + self.cols]
    }

    /// Column index of the smallest value in `row`, first on ties.
    ///
    /// Returns `None` for a matrix without columns.
    pub fn argmin(&self, row: usize) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (j, &d) in self.row(row).iter().enumerate() {
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((j, d)),
            }
        }
        best
    }
}

/// Compute every distance between `lhs` and `rhs` under `metric`.
///
/// ```
/// use hue_engine::{pairwise, to_lab, DeltaEMetric, Srgb};
///
/// let left = to_lab(&[Srgb::BLACK, Srgb::WHITE]);
/// let right = to_lab(&[Srgb::WHITE]);
/// let m = pairwise(DeltaEMetric::Cie76, &left, &right);
/// assert_eq!((m.rows(), m.cols()), (2, 1));
/// assert!(m.get(1, 0) < 1e-9);
/// ```
pub fn pairwise(metric: DeltaEMetric, lhs: &[Lab], rhs: &[Lab]) -> DistanceMatrix {
    let mut values = Vec::with_capacity(lhs.len() * rhs.len());
    for &left in lhs {
        values.extend(rhs.iter().map(|&right| metric.distance(left, right)));
    }
    DistanceMatrix {
        rows: lhs.len(),
        cols: rhs.len(),
        values,
    }
}
