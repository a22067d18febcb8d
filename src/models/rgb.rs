//! RGB color handling with hex parsing and serialization.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::color::{self, Lab};

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Parsing is total: anything [`color::normalize_hex`] accepts becomes a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from any hex spelling.
    ///
    /// Supports "#RRGGBB", "RRGGBB", "#RGB", "0xRRGGBB" and "AARRGGBB".
    /// Unparsable input degrades instead of failing.
    ///
    /// # Examples
    ///
    /// ```
    /// use palettesmith::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::from_hex("#FF0000"), RgbColor::new(255, 0, 0));
    /// assert_eq!(RgbColor::from_hex("0f0"), RgbColor::new(0, 255, 0));
    /// ```
    #[must_use]
    pub fn from_hex(hex: &str) -> Self {
        let [r, g, b] = color::hex_to_rgb(hex);
        Self::new(r, g, b)
    }

    /// Converts the color to its canonical hex form: six uppercase digits, no `#`.
    ///
    /// # Examples
    ///
    /// ```
    /// use palettesmith::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "0080FF");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Returns the channels as `[r, g, b]`.
    #[must_use]
    pub const fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Converts to CIELAB (D65).
    #[must_use]
    pub fn to_lab(&self) -> Lab {
        color::rgb_to_lab(self.channels())
    }
}

impl From<[u8; 3]> for RgbColor {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}
