//! Gamma lookup table access
//!
//! The table is generated at compile time by build.rs from the exact
//! IEC 61966-2-1 transfer function, one entry per 8-bit code value.

include!(concat!(env!("OUT_DIR"), "/gamma_lut.rs"));

/// Gamma-expand an 8-bit sRGB channel to linear light (0.0..=1.0).
#[inline]
pub fn srgb8_to_linear(value: u8) -> f64 {
    SRGB8_TO_LINEAR[value as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exact(value: u8) -> f64 {
        let c = f64::from(value) / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(srgb8_to_linear(0), 0.0);
        assert_eq!(srgb8_to_linear(255), 1.0);
    }

    #[test]
    fn test_matches_formula_for_every_code_value() {
        for value in 0..=255u8 {
            assert!(
                (srgb8_to_linear(value) - exact(value)).abs() < 1e-15,
                "LUT mismatch at {value}"
            );
        }
    }

    #[test]
    fn test_linear_segment_and_midpoint() {
        // 10/255 = 0.0392 sits on the linear toe of the curve
        assert!((srgb8_to_linear(10) - (10.0 / 255.0) / 12.92).abs() < 1e-15);
        // sRGB 128 -> ~0.2158
        assert!((srgb8_to_linear(128) - 0.2158605).abs() < 1e-6);
    }

    #[test]
    fn test_monotonicity() {
        for value in 1..=255u8 {
            assert!(srgb8_to_linear(value) > srgb8_to_linear(value - 1));
        }
    }
}
