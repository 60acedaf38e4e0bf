use crate::color::Lab;

/// CIE 1976 color difference: Euclidean distance between Lab triples.
///
/// ```
/// use hue_engine::{delta_e_76, Lab, Srgb};
///
/// let red = Lab::from(Srgb::from_u8(255, 0, 0));
/// assert_eq!(delta_e_76(red, red), 0.0);
/// ```
#[inline]
pub fn delta_e_76(lhs: Lab, rhs: Lab) -> f64 {
    let dl = lhs.l() - rhs.l();
    let da = lhs.a() - rhs.a();
    let db = lhs.b() - rhs.b();
    (dl * dl + da * da + db * db).sqrt()
}
