//! Perceptual color difference (ΔE) in CIE Lab
//!
//! Two metrics are supported:
//!
//! - [`DeltaEMetric::Cie76`]: straight-line distance in Lab. Cheap, but
//!   overstates differences between saturated colors.
//! - [`DeltaEMetric::Ciede2000`]: the CIE 2000 formula with lightness,
//!   chroma and hue weighting plus the blue-region rotation term.
//!
//! Both are non-negative, zero exactly for identical inputs, and symmetric.

mod cie76;
mod ciede2000;
mod matrix;

use std::fmt;
use std::str::FromStr;

use crate::color::Lab;
use crate::error::EngineError;

pub use cie76::delta_e_76;
pub use ciede2000::ciede2000;
pub use matrix::{pairwise, DistanceMatrix};

/// Distance metric used for palette matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeltaEMetric {
    /// CIE 1976 ΔE*ab (Euclidean in Lab).
    Cie76,
    /// CIE 2000 ΔE00.
    #[default]
    Ciede2000,
}

impl DeltaEMetric {
    /// Distance between two Lab colors under this metric.
    #[inline]
    pub fn distance(self, lhs: Lab, rhs: Lab) -> f64 {
        match self {
            DeltaEMetric::Cie76 => delta_e_76(lhs, rhs),
            DeltaEMetric::Ciede2000 => ciede2000(lhs, rhs),
        }
    }

    /// Human-readable label attached to reported distances.
    pub fn label(self) -> &'static str {
        match self {
            DeltaEMetric::Cie76 => "ΔE76",
            DeltaEMetric::Ciede2000 => "ΔE2000",
        }
    }

    /// Stable machine identifier (`de76` / `de2000`).
    pub fn as_str(self) -> &'static str {
        match self {
            DeltaEMetric::Cie76 => "de76",
            DeltaEMetric::Ciede2000 => "de2000",
        }
    }
}

impl fmt::Display for DeltaEMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeltaEMetric {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "de76" | "cie76" | "deltae76" => Ok(DeltaEMetric::Cie76),
            "de2000" | "ciede2000" | "de00" | "deltae2000" => Ok(DeltaEMetric::Ciede2000),
            other => Err(EngineError::InvalidParameter {
                name: "metric",
                reason: format!("unknown metric {other:?} (expected de76 or de2000)"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_ciede2000() {
        assert_eq!(DeltaEMetric::default(), DeltaEMetric::Ciede2000);
    }

    #[test]
    fn test_labels() {
        assert_eq!(DeltaEMetric::Cie76.label(), "ΔE76");
        assert_eq!(DeltaEMetric::Ciede2000.label(), "ΔE2000");
        assert_eq!(DeltaEMetric::Cie76.to_string(), "de76");
    }

    #[test]
    fn test_parse_aliases() {
        for s in ["de76", "CIE76", " deltae76 "] {
            assert_eq!(s.parse::<DeltaEMetric>().unwrap(), DeltaEMetric::Cie76);
        }
        for s in ["de2000", "ciede2000", "DE00", "deltae2000"] {
            assert_eq!(s.parse::<DeltaEMetric>().unwrap(), DeltaEMetric::Ciede2000);
        }
        let err = "de94".parse::<DeltaEMetric>().unwrap_err();
        assert!(matches!(err, EngineError::InvalidParameter { name: "metric", .. }));
    }

    #[test]
    fn test_dispatch() {
        let a = Lab::new(50.0, 10.0, -10.0);
        let b = Lab::new(60.0, -5.0, 20.0);
        assert_eq!(DeltaEMetric::Cie76.distance(a, b), delta_e_76(a, b));
        assert_eq!(DeltaEMetric::Ciede2000.distance(a, b), ciede2000(a, b));
    }
}
