//! sRGB, CIE XYZ, CIELAB and CIELCH conversions (D65, 2° observer).

// Standard colorimetric names (x, y, z, l, a, b, c, h)
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]

use serde::{Deserialize, Serialize};

/// D65 reference white, scaled to Y = 100.
const D65_WHITE: (f64, f64, f64) = (95.047, 100.000, 108.883);

/// Linear sRGB -> XYZ matrix (D65).
const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505],
];

/// CIE epsilon (216/24389) used by the Lab companding function.
const LAB_EPSILON: f64 = 0.008856;
/// Slope of the linear segment of the Lab companding function.
const LAB_KAPPA_SLOPE: f64 = 7.787;

/// CIE XYZ tristimulus values on the 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Xyz {
    /// X tristimulus
    pub x: f64,
    /// Y tristimulus (relative luminance × 100)
    pub y: f64,
    /// Z tristimulus
    pub z: f64,
}

/// A point in CIELAB.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lab {
    /// Lightness (0-100)
    pub l: f64,
    /// Green (-) to red (+)
    pub a: f64,
    /// Blue (-) to yellow (+)
    pub b: f64,
}

/// Polar form of [`Lab`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lch {
    /// Lightness (0-100)
    pub l: f64,
    /// Chroma (>= 0)
    pub c: f64,
    /// Hue angle in degrees, [0, 360)
    pub h: f64,
}

impl Lab {
    /// Creates a new Lab point.
    #[must_use]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Converts to polar form.
    #[must_use]
    pub fn to_lch(self) -> Lch {
        lab_to_lch(self)
    }

    /// Returns the components as `[l, a, b]`.
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }
}

impl From<[f64; 3]> for Lab {
    fn from([l, a, b]: [f64; 3]) -> Self {
        Self::new(l, a, b)
    }
}

impl Lch {
    /// Creates a new LCH point. The hue is wrapped into [0, 360).
    #[must_use]
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self {
            l,
            c,
            h: wrap_hue(h),
        }
    }

    /// Converts back to rectangular form.
    #[must_use]
    pub fn to_lab(self) -> Lab {
        lch_to_lab(self)
    }

    /// Returns the components as `[l, c, h]`.
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.l, self.c, self.h]
    }
}

/// Wraps any angle in degrees into [0, 360).
#[must_use]
pub fn wrap_hue(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Signed hue difference `to - from`, normalized into (-180, 180].
#[must_use]
pub fn hue_difference(from: f64, to: f64) -> f64 {
    let diff = wrap_hue(to - from);
    if diff > 180.0 {
        diff - 360.0
    } else {
        diff
    }
}

/// Unsigned angular distance between two hues, in [0, 180].
#[must_use]
pub fn hue_distance(a: f64, b: f64) -> f64 {
    hue_difference(a, b).abs()
}

/// Decompresses one 8-bit sRGB channel into linear light (0-1).
#[must_use]
pub fn srgb_to_linear(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Converts 8-bit sRGB to XYZ (0-100 scale).
#[must_use]
pub fn rgb_to_xyz(rgb: [u8; 3]) -> Xyz {
    let linear = rgb.map(|channel| srgb_to_linear(channel) * 100.0);
    let row = |m: [f64; 3]| m[0] * linear[0] + m[1] * linear[1] + m[2] * linear[2];

    Xyz {
        x: row(SRGB_TO_XYZ[0]),
        y: row(SRGB_TO_XYZ[1]),
        z: row(SRGB_TO_XYZ[2]),
    }
}

fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        LAB_KAPPA_SLOPE * t + 16.0 / 116.0
    }
}

/// Converts XYZ (0-100 scale) to CIELAB relative to D65.
#[must_use]
pub fn xyz_to_lab(xyz: Xyz) -> Lab {
    let fx = lab_f(xyz.x / D65_WHITE.0);
    let fy = lab_f(xyz.y / D65_WHITE.1);
    let fz = lab_f(xyz.z / D65_WHITE.2);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Converts 8-bit sRGB straight to CIELAB.
#[must_use]
pub fn rgb_to_lab(rgb: [u8; 3]) -> Lab {
    xyz_to_lab(rgb_to_xyz(rgb))
}

/// Converts CIELAB to CIELCH; hue in degrees, wrapped into [0, 360).
#[must_use]
pub fn lab_to_lch(lab: Lab) -> Lch {
    Lch {
        l: lab.l,
        c: lab.a.hypot(lab.b),
        h: wrap_hue(lab.b.atan2(lab.a).to_degrees()),
    }
}

/// Converts CIELCH back to CIELAB.
#[must_use]
pub fn lch_to_lab(lch: Lch) -> Lab {
    let (sin, cos) = lch.h.to_radians().sin_cos();
    Lab {
        l: lch.l,
        a: lch.c * cos,
        b: lch.c * sin,
    }
}
