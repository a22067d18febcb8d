//! Harmony target generation.
//!
//! Each harmony mode turns one seed color into five canonical target points
//! in CIELAB. The candidate selector then looks for real swatches close to
//! those targets.

#![allow(clippy::cast_precision_loss)]

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::color::{wrap_hue, Lab, Lch};

/// Number of canonical targets every mode produces.
pub const CANONICAL_TARGET_COUNT: usize = 5;

/// Chroma floor keeping saturated modes away from degenerate grays.
pub const MIN_TARGET_CHROMA: f64 = 5.0;

/// Maximum absolute random hue offset, in degrees.
pub const MAX_HUE_OFFSET: f64 = 30.0;

/// Maximum absolute random lightness offset, in L* units.
pub const MAX_LIGHTNESS_OFFSET: f64 = 10.0;

/// Designer roles, lightest first: (lightness, hue offset, chroma multiplier).
///
/// Whisper, Dominant, Bridge, Secondary, Anchor.
const DESIGNER_ROLES: [(f64, f64, f64); CANONICAL_TARGET_COUNT] = [
    (83.0, 15.0, 0.3),
    (65.0, 0.0, 0.7),
    (57.0, 170.0, 0.4),
    (42.0, 30.0, 0.9),
    (12.0, 0.0, 0.8),
];

/// Color-theory scheme used to derive targets from a seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HarmonyMode {
    /// Desaturated lightness ladder around the seed
    #[default]
    Neutral,
    /// Neighboring hues spanning ±60°
    Analogous,
    /// Seed hue and its opposite
    Complementary,
    /// Three hues 120° apart
    Triad,
    /// Fixed light-to-dark role bands
    Designer,
}

impl HarmonyMode {
    /// Every mode, in display order.
    pub const ALL: [Self; 5] = [
        Self::Neutral,
        Self::Analogous,
        Self::Complementary,
        Self::Triad,
        Self::Designer,
    ];

    /// Lowercase name used in config files and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Analogous => "analogous",
            Self::Complementary => "complementary",
            Self::Triad => "triad",
            Self::Designer => "designer",
        }
    }

    /// True if the canonical target order must be kept as generated.
    ///
    /// Only designer mode is ordered; every other mode is shuffled before use.
    #[must_use]
    pub const fn is_ordered(self) -> bool {
        matches!(self, Self::Designer)
    }
}

impl fmt::Display for HarmonyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HarmonyMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "Invalid harmony mode '{s}'. Must be one of: neutral, analogous, complementary, triad, designer"
                )
            })
    }
}

/// Random offsets drawn once per palette invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perturbation {
    /// Hue offset in degrees, within ±[`MAX_HUE_OFFSET`]
    pub hue: f64,
    /// Lightness offset in L* units, within ±[`MAX_LIGHTNESS_OFFSET`]
    pub lightness: f64,
}

impl Perturbation {
    /// No offset at all.
    pub const NONE: Self = Self {
        hue: 0.0,
        lightness: 0.0,
    };

    /// Draws a hue and a lightness offset from `rng`.
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            hue: rng.random_range(-MAX_HUE_OFFSET..=MAX_HUE_OFFSET),
            lightness: rng.random_range(-MAX_LIGHTNESS_OFFSET..=MAX_LIGHTNESS_OFFSET),
        }
    }
}

/// Produces the five canonical targets for `mode`, in canonical order.
///
/// This is deterministic; shuffling (for unordered modes) is the caller's
/// job so that it can draw from the same injected random source.
///
/// # Examples
///
/// ```
/// use palettesmith::color::Lab;
/// use palettesmith::services::harmony::{generate_targets, HarmonyMode, Perturbation};
///
/// let targets = generate_targets(Lab::new(50.0, 20.0, 10.0), HarmonyMode::Designer, Perturbation::NONE);
/// assert!(targets.windows(2).all(|pair| pair[0].l > pair[1].l));
/// ```
#[must_use]
pub fn generate_targets(
    seed: Lab,
    mode: HarmonyMode,
    perturbation: Perturbation,
) -> [Lab; CANONICAL_TARGET_COUNT] {
    let seed = seed.to_lch();
    let l0 = seed.l + perturbation.lightness;
    let c0 = seed.c;
    let h0 = wrap_hue(seed.h + perturbation.hue);

    std::array::from_fn(|i| {
        let step = i as f64 - 2.0;
        let odd = (i % 2) as f64;

        let lch = match mode {
            HarmonyMode::Neutral => Lch::new(
                (l0 + step * 15.0).clamp(10.0, 95.0),
                (c0 * (0.3 + 0.1 * i as f64)).max(0.0),
                h0 + step * 10.0,
            ),
            HarmonyMode::Analogous => saturated(
                l0 + step * 10.0,
                c0 * (0.7 + 0.1 * i as f64),
                h0 + step * 30.0,
            ),
            HarmonyMode::Complementary => {
                let hues = [h0, h0, h0 + 180.0, h0 + 180.0, h0 + 90.0];
                saturated(l0 + step * 8.0, c0 * (0.8 + 0.1 * odd), hues[i])
            }
            HarmonyMode::Triad => {
                let hues = [h0, h0 + 120.0, h0 + 240.0, h0, h0 + 60.0];
                saturated(l0 + step * 8.0, c0 * (0.7 + 0.15 * odd), hues[i])
            }
            HarmonyMode::Designer => {
                // Absolute bands: the seed only contributes hue and chroma
                let (lightness, hue_offset, chroma_scale) = DESIGNER_ROLES[i];
                saturated(lightness, seed.c * chroma_scale, seed.h + hue_offset)
            }
        };

        lch.to_lab()
    })
}

fn saturated(l: f64, c: f64, h: f64) -> Lch {
    Lch::new(l.clamp(0.0, 100.0), c.max(MIN_TARGET_CHROMA), h)
}
