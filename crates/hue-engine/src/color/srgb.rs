//! sRGB color type
//!
//! sRGB is the encoding of every input to the engine: decoded image pixels,
//! reference palette entries and the black/white text candidates.

use std::fmt;
use std::str::FromStr;

use crate::error::{EngineError, ParseColorError};

/// A color in sRGB color space with 8-bit channels.
///
/// The channel type makes out-of-range values unrepresentable; values coming
/// from a wider integer type go through `TryFrom<[i32; 3]>`, which rejects
/// anything outside 0..=255 instead of clamping it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Srgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Srgb {
    /// Pure black.
    pub const BLACK: Srgb = Srgb { r: 0, g: 0, b: 0 };

    /// Pure white.
    pub const WHITE: Srgb = Srgb {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Create an Srgb color from 8-bit unsigned integer values.
    ///
    /// # Example
    /// ```
    /// use hue_engine::Srgb;
    /// let red = Srgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 255);
    /// ```
    #[inline]
    pub const fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an Srgb color from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from_u8(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Lowercase `#rrggbb` representation.
    ///
    /// ```
    /// use hue_engine::Srgb;
    /// assert_eq!(Srgb::from_u8(239, 68, 68).to_hex(), "#ef4444");
    /// ```
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Rec. 709 weighted sum of the encoded channels, in `0.0..=1.0`.
    ///
    /// Unlike [`relative_luminance`](crate::relative_luminance) this skips
    /// gamma expansion. Used for ordering only.
    ///
    /// ```
    /// use hue_engine::Srgb;
    /// assert!((Srgb::from_u8(255, 0, 0).luma() - 0.2126).abs() < 1e-12);
    /// ```
    pub fn luma(self) -> f64 {
        (0.2126 * f64::from(self.r) + 0.7152 * f64::from(self.g) + 0.0722 * f64::from(self.b))
            / 255.0
    }

    /// Hue angle of the HSV representation in degrees, in `0.0..360.0`.
    ///
    /// Achromatic colors (r == g == b) report 0.0.
    pub fn hue_degrees(self) -> f64 {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        if delta == 0.0 {
            return 0.0;
        }

        let sector = if max == r {
            ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        (sector * 60.0).rem_euclid(360.0)
    }
}

impl fmt::Display for Srgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

impl TryFrom<[i32; 3]> for Srgb {
    type Error = EngineError;

    /// Build a color from wide integer channels, rejecting values outside
    /// 0..=255.
    ///
    /// ```
    /// use hue_engine::Srgb;
    /// assert!(Srgb::try_from([12, 34, 56]).is_ok());
    /// assert!(Srgb::try_from([256, 0, 0]).is_err());
    /// ```
    fn try_from(channels: [i32; 3]) -> Result<Self, Self::Error> {
        let check = |channel: &'static str, value: i32| {
            u8::try_from(value).map_err(|_| EngineError::ChannelOutOfRange { channel, value })
        };
        Ok(Self {
            r: check("red", channels[0])?,
            g: check("green", channels[1])?,
            b: check("blue", channels[2])?,
        })
    }
}

impl FromStr for Srgb {
    type Err = ParseColorError;

    /// Parse an sRGB color from a hex string.
    ///
    /// Supports the following formats:
    /// - `#RRGGBB` / `RRGGBB`
    /// - `#RGB` / `RGB` (shorthand, each digit doubled)
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_engine::Srgb;
    ///
    /// let red: Srgb = "#ef4444".parse().unwrap();
    /// assert_eq!(red, Srgb::from_u8(0xef, 0x44, 0x44));
    ///
    /// let white: Srgb = "#FFF".parse().unwrap();
    /// assert_eq!(white, Srgb::WHITE);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        let mut digits = Vec::with_capacity(6);
        for c in s.chars() {
            let digit = c.to_digit(16).ok_or(ParseColorError::InvalidDigit(c))?;
            digits.push(digit as u8);
        }

        match digits.as_slice() {
            &[r, g, b] => Ok(Self::from_u8(r * 17, g * 17, b * 17)),
            &[r1, r0, g1, g0, b1, b0] => Ok(Self::from_u8(
                r1 << 4 | r0,
                g1 << 4 | g0,
                b1 << 4 | b0,
            )),
            other => Err(ParseColorError::InvalidLength(other.len())),
        }
    }
}
