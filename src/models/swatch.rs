//! Paint swatches: the color entities the engine matches against.

use serde::{Deserialize, Serialize};

use super::RgbColor;
use crate::color::{self, Lab, Lch, LrvCache};

/// A catalog entry as it arrives from the outside world.
///
/// Only `hex` carries color information unless a measured `lab` triple is
/// supplied, in which case the measurement wins over the hex-derived value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwatchRecord {
    /// Unique identifier within a catalog
    pub id: String,
    /// Stable brand identifier
    pub brand_id: String,
    /// Brand name shown to users
    pub brand_name: String,
    /// Paint name (e.g., "Hale Navy")
    #[serde(default)]
    pub display_name: String,
    /// Manufacturer code (e.g., "HC-154")
    #[serde(default)]
    pub code: String,
    /// Hex color in any spelling `normalize_hex` accepts
    pub hex: String,
    /// Measured CIELAB value, if the manufacturer publishes one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lab: Option<[f64; 3]>,
}

impl SwatchRecord {
    /// Creates a record with the display name defaulting to the id.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        brand_id: impl Into<String>,
        brand_name: impl Into<String>,
        hex: impl Into<String>,
    ) -> Self {
        let id = id.into();
        Self {
            display_name: id.clone(),
            id,
            brand_id: brand_id.into(),
            brand_name: brand_name.into(),
            code: String::new(),
            hex: hex.into(),
            lab: None,
        }
    }

    /// Sets the display name.
    pub fn named(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Sets the manufacturer code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Attaches a measured CIELAB value.
    pub fn measured(mut self, lab: Lab) -> Self {
        self.lab = Some(lab.to_array());
        self
    }
}

/// An immutable, fully converted paint swatch.
///
/// `lch` is always the polar form of `lab` and `lrv` always derives from
/// `hex`. Fields are read through accessors only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Swatch {
    id: String,
    brand_id: String,
    brand_name: String,
    display_name: String,
    code: String,
    hex: String,
    rgb: RgbColor,
    lab: Lab,
    lch: Lch,
    lrv: f64,
}

impl Swatch {
    /// Converts a record, populating RGB, LAB, LCH and LRV.
    ///
    /// A hex field without a single hex digit falls back to neutral gray.
    pub fn from_record(record: SwatchRecord, cache: &LrvCache) -> Self {
        let hex = if color::hex::has_hex_digits(&record.hex) {
            color::normalize_hex(&record.hex)
        } else {
            tracing::warn!(
                "Swatch '{}' has no usable hex value ('{}'), using neutral gray",
                record.id,
                record.hex
            );
            color::NEUTRAL_GRAY_HEX.to_string()
        };

        let rgb = RgbColor::from_hex(&hex);
        let lab = record.lab.map_or_else(|| rgb.to_lab(), Lab::from);
        let lrv = cache.lookup(&hex);

        Self {
            id: record.id,
            brand_id: record.brand_id,
            brand_name: record.brand_name,
            display_name: record.display_name,
            code: record.code,
            hex,
            rgb,
            lab,
            lch: lab.to_lch(),
            lrv,
        }
    }

    /// Unique identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Brand identifier.
    #[must_use]
    pub fn brand_id(&self) -> &str {
        &self.brand_id
    }

    /// Brand display name.
    #[must_use]
    pub fn brand_name(&self) -> &str {
        &self.brand_name
    }

    /// Paint name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Manufacturer code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Canonical hex (six uppercase digits, no `#`).
    #[must_use]
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// sRGB channels.
    #[must_use]
    pub const fn rgb(&self) -> RgbColor {
        self.rgb
    }

    /// CIELAB coordinates.
    #[must_use]
    pub const fn lab(&self) -> Lab {
        self.lab
    }

    /// CIELCH coordinates (polar form of [`Swatch::lab`]).
    #[must_use]
    pub const fn lch(&self) -> Lch {
        self.lch
    }

    /// Light Reflectance Value, 0-100.
    #[must_use]
    pub const fn lrv(&self) -> f64 {
        self.lrv
    }
}
