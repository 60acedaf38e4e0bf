//! CIE L*a*b* color space (D65 reference white, 2° observer)
//!
//! Lab is where both ΔE metrics are defined. Values are derived from sRGB
//! through CIE XYZ and are never hand-constructed outside the crate.
//!
//! # References
//!
//! IEC 61966-2-1 (sRGB primaries and transfer function),
//! CIE 15:2004 (XYZ → L*a*b*).

use super::linear_rgb::LinearRgb;
use super::srgb::Srgb;

/// D65 reference white in XYZ, normalized to Y = 1.
const WHITE_X: f64 = 0.95047;
const WHITE_Y: f64 = 1.0;
const WHITE_Z: f64 = 1.08883;

/// (6/29)^3: below this the cube root is replaced by a linear segment.
const EPSILON: f64 = 216.0 / 24389.0;

/// Slope of the linear segment, 1 / (3 * (6/29)^2).
const LINEAR_SLOPE: f64 = 841.0 / 108.0;

/// A color in CIE L*a*b* space.
///
/// # Components
///
/// - `l`: Lightness, 0.0 (black) to 100.0 (white)
/// - `a`: Green-red axis, roughly -128..127
/// - `b`: Blue-yellow axis, roughly -128..127
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    l: f64,
    a: f64,
    b: f64,
}

impl Lab {
    /// Reference values (published test data) enter through here.
    #[inline]
    pub(crate) fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Lightness L*.
    #[inline]
    pub fn l(&self) -> f64 {
        self.l
    }

    /// Green-red coordinate a*.
    #[inline]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Blue-yellow coordinate b*.
    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Chroma C*ab = sqrt(a² + b²).
    #[inline]
    pub fn chroma(&self) -> f64 {
        self.a.hypot(self.b)
    }

    /// Components as `[L*, a*, b*]`.
    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }
}

/// CIE Lab companding function f(t).
#[inline]
fn f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        LINEAR_SLOPE * t + 4.0 / 29.0
    }
}

impl From<LinearRgb> for Lab {
    /// Linear sRGB → XYZ (D65 matrix) → L*a*b*.
    fn from(rgb: LinearRgb) -> Self {
        let x = 0.4124564 * rgb.r + 0.3575761 * rgb.g + 0.1804375 * rgb.b;
        let y = 0.2126729 * rgb.r + 0.7151522 * rgb.g + 0.0721750 * rgb.b;
        let z = 0.0193339 * rgb.r + 0.1191920 * rgb.g + 0.9503041 * rgb.b;

        let fx = f(x / WHITE_X);
        let fy = f(y / WHITE_Y);
        let fz = f(z / WHITE_Z);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl From<Srgb> for Lab {
    /// Gamma-expand, then convert. Pure function of the input.
    ///
    /// ```
    /// use hue_engine::{Lab, Srgb};
    ///
    /// let white = Lab::from(Srgb::WHITE);
    /// assert!((white.l() - 100.0).abs() < 0.01);
    /// assert!(white.a().abs() < 0.01 && white.b().abs() < 0.01);
    /// ```
    fn from(srgb: Srgb) -> Self {
        Lab::from(LinearRgb::from(srgb))
    }
}

/// Convert a batch of sRGB colors to Lab, preserving order.
///
/// ```
/// use hue_engine::{to_lab, Srgb};
///
/// let labs = to_lab(&[Srgb::BLACK, Srgb::WHITE]);
/// assert_eq!(labs.len(), 2);
/// assert!(labs[0].l() < labs[1].l());
/// ```
pub fn to_lab(colors: &[Srgb]) -> Vec<Lab> {
    colors.iter().map(|&c| Lab::from(c)).collect()
}
