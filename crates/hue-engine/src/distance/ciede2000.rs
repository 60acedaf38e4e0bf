//! CIEDE2000 color difference
//!
//! Angles are carried in radians. The hue-rotation polynomial and the
//! blue-region term are published in degrees, so the mean hue is converted
//! once and every trigonometric argument converts back explicitly.
//!
//! # References
//!
//! G. Sharma, W. Wu, E. N. Dalal, "The CIEDE2000 Color-Difference Formula:
//! Implementation Notes, Supplementary Test Data, and Mathematical
//! Observations", Color Research & Application 30(1), 2005.

use std::f64::consts::{PI, TAU};

use crate::color::Lab;

/// 25^7, the chroma pivot of the G and R_C terms.
const POW25_7: f64 = 6_103_515_625.0;

/// Hue angle of (a', b) in `[0, 2π)`; zero for the neutral axis.
#[inline]
fn hue_angle(b: f64, a_prime: f64) -> f64 {
    if a_prime == 0.0 && b == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a_prime);
    if h < 0.0 {
        h + TAU
    } else {
        h
    }
}

/// CIE 2000 color difference with kL = kC = kH = 1.
///
/// When either color is achromatic (C' = 0) the hue difference is zero and
/// the mean hue is the plain sum, as in the Sharma implementation notes.
///
/// A hue difference of exactly ±π is left unwrapped and does not trigger the
/// mean-hue shift, so swapping the arguments only flips the sign of ΔH' and
/// ΔC' and the result is exactly symmetric.
///
/// ```
/// use hue_engine::{ciede2000, Lab, Srgb};
///
/// let a = Lab::from(Srgb::from_u8(255, 0, 0));
/// let b = Lab::from(Srgb::from_u8(239, 68, 68));
/// assert_eq!(ciede2000(a, b), ciede2000(b, a));
/// assert_eq!(ciede2000(a, a), 0.0);
/// ```
pub fn ciede2000(lab1: Lab, lab2: Lab) -> f64 {
    let (l1, a1, b1) = (lab1.l(), lab1.a(), lab1.b());
    let (l2, a2, b2) = (lab2.l(), lab2.a(), lab2.b());

    // a* rescaling near the neutral axis
    let c_mean = (a1.hypot(b1) + a2.hypot(b2)) / 2.0;
    let c_mean7 = c_mean.powi(7);
    let g = 0.5 * (1.0 - (c_mean7 / (c_mean7 + POW25_7)).sqrt());

    let a1p = (1.0 + g) * a1;
    let a2p = (1.0 + g) * a2;
    let c1p = a1p.hypot(b1);
    let c2p = a2p.hypot(b2);
    let h1p = hue_angle(b1, a1p);
    let h2p = hue_angle(b2, a2p);

    // Differences
    let delta_l = l2 - l1;
    let delta_c = c2p - c1p;
    let chroma_product = c1p * c2p;

    let delta_h = if chroma_product == 0.0 {
        0.0
    } else {
        let d = h2p - h1p;
        if d > PI {
            d - TAU
        } else if d < -PI {
            d + TAU
        } else {
            d
        }
    };
    let delta_big_h = 2.0 * chroma_product.sqrt() * (delta_h / 2.0).sin();

    // Means
    let l_mean = (l1 + l2) / 2.0;
    let cp_mean = (c1p + c2p) / 2.0;
    let h_mean = if chroma_product == 0.0 {
        h1p + h2p
    } else {
        let mut h = (h1p + h2p) / 2.0;
        if (h1p - h2p).abs() > PI {
            h += PI;
        }
        if h >= TAU {
            h -= TAU;
        }
        h
    };
    let h_mean_deg = h_mean.to_degrees();

    // Weighting functions
    let t = 1.0 - 0.17 * (h_mean_deg - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_mean_deg).to_radians().cos()
        + 0.32 * (3.0 * h_mean_deg + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_mean_deg - 63.0).to_radians().cos();

    let l_offset = (l_mean - 50.0) * (l_mean - 50.0);
    let s_l = 1.0 + 0.015 * l_offset / (20.0 + l_offset).sqrt();
    let s_c = 1.0 + 0.045 * cp_mean;
    let s_h = 1.0 + 0.015 * cp_mean * t;

    // Rotation in the blue region
    let delta_theta_deg = 30.0 * (-((h_mean_deg - 275.0) / 25.0).powi(2)).exp();
    let cp_mean7 = cp_mean.powi(7);
    let r_c = 2.0 * (cp_mean7 / (cp_mean7 + POW25_7)).sqrt();
    let r_t = -(2.0 * delta_theta_deg).to_radians().sin() * r_c;

    let l_term = delta_l / s_l;
    let c_term = delta_c / s_c;
    let h_term = delta_big_h / s_h;

    (l_term * l_term + c_term * c_term + h_term * h_term + r_t * c_term * h_term)
        .max(0.0)
        .sqrt()
}
