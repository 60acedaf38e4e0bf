//! Error types for the color engine.
//!
//! Conversion and matching fail fast on malformed input; there are no
//! retries anywhere in the engine.

use thiserror::Error;

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Error returned when a hex color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 digits after stripping '#')
    #[error("invalid hex color length {0} (expected 3 or 6 digits)")]
    InvalidLength(usize),

    /// A character that is not a hexadecimal digit
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}

/// Unified error type for the engine API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A malformed hex string
    #[error("invalid color input: {0}")]
    ParseColor(#[from] ParseColorError),

    /// An sRGB channel outside 0..=255
    #[error("invalid color input: channel {channel} = {value} is outside 0..=255")]
    ChannelOutOfRange {
        /// Channel name ("red", "green" or "blue")
        channel: &'static str,
        /// The rejected value
        value: i32,
    },

    /// The pixel buffer holds no pixels
    #[error("image contains no pixels")]
    EmptyImage,

    /// No reference entries were available for matching
    #[error("reference palette is empty")]
    EmptyPalette,

    /// Pixel count does not match the declared dimensions
    #[error("pixel buffer holds {len} pixels but dimensions are {width}x{height}")]
    InvalidDimensions {
        /// Declared width
        width: usize,
        /// Declared height
        height: usize,
        /// Actual number of pixels
        len: usize,
    },

    /// An option value outside its accepted range
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// The resampler rejected a downscale
    #[error("resize failed: {0}")]
    Resize(String),
}

impl EngineError {
    /// True for the `InvalidColorInput` class (bad hex or channel range).
    pub fn is_invalid_color(&self) -> bool {
        matches!(
            self,
            EngineError::ParseColor(_) | EngineError::ChannelOutOfRange { .. }
        )
    }
}
