//! Single-swatch relationship queries used by palette editing.
//!
//! - nudge: the next swatch up or down the hue wheel
//! - brand swap: the closest swatch from a different brand

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::color::{ciede2000, hue_difference};
use crate::models::{Catalog, Swatch};

/// Default hue window for nudges, in degrees.
pub const DEFAULT_NUDGE_WINDOW: f64 = 45.0;

/// Default CIEDE2000 threshold for brand swaps.
pub const DEFAULT_SWAP_THRESHOLD: f64 = 10.0;

/// Which way to step around the hue wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NudgeDirection {
    /// Positive hue step, within `(0, +window]`
    Lighter,
    /// Negative hue step, within `[-window, 0)`
    Darker,
}

impl fmt::Display for NudgeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lighter => f.write_str("lighter"),
            Self::Darker => f.write_str("darker"),
        }
    }
}

impl FromStr for NudgeDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lighter" | "up" => Ok(Self::Lighter),
            "darker" | "down" => Ok(Self::Darker),
            _ => Err(format!(
                "Invalid direction '{s}'. Must be 'lighter' or 'darker'"
            )),
        }
    }
}

/// Finds the swatch closest in hue on the requested side of `reference`.
///
/// Candidates are ranked by absolute hue difference, then by absolute
/// lightness difference. The reference itself is never returned.
#[must_use]
pub fn nudge<'a>(
    catalog: &'a Catalog,
    reference: &Swatch,
    direction: NudgeDirection,
    window_degrees: f64,
) -> Option<&'a Swatch> {
    let origin = reference.lch();

    catalog
        .iter()
        .filter(|candidate| candidate.id() != reference.id())
        .filter_map(|candidate| {
            let lch = candidate.lch();
            let diff = hue_difference(origin.h, lch.h);
            let on_side = match direction {
                NudgeDirection::Lighter => diff > 0.0 && diff <= window_degrees,
                NudgeDirection::Darker => diff < 0.0 && diff >= -window_degrees,
            };
            on_side.then(|| (candidate, diff.abs(), (lch.l - origin.l).abs()))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1).then(a.2.total_cmp(&b.2)))
        .map(|(candidate, _, _)| candidate)
}

/// [`nudge`] toward positive hue.
#[must_use]
pub fn nudge_lighter<'a>(
    catalog: &'a Catalog,
    reference: &Swatch,
    window_degrees: f64,
) -> Option<&'a Swatch> {
    nudge(catalog, reference, NudgeDirection::Lighter, window_degrees)
}

/// [`nudge`] toward negative hue.
#[must_use]
pub fn nudge_darker<'a>(
    catalog: &'a Catalog,
    reference: &Swatch,
    window_degrees: f64,
) -> Option<&'a Swatch> {
    nudge(catalog, reference, NudgeDirection::Darker, window_degrees)
}

/// Result of a cross-brand lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrandSwap<'a> {
    /// The replacement swatch
    pub swatch: &'a Swatch,
    /// CIEDE2000 distance to the reference
    pub delta_e: f64,
    /// Whether the match is within the requested threshold
    pub within_threshold: bool,
}

/// Finds the closest swatch from any other brand.
///
/// Matches within `threshold` are preferred; when none exists the globally
/// closest other-brand swatch is returned anyway, flagged with
/// `within_threshold == false`. Returns `None` only if no other brand exists.
#[must_use]
pub fn brand_swap<'a>(
    catalog: &'a Catalog,
    reference: &Swatch,
    threshold: f64,
) -> Option<BrandSwap<'a>> {
    let target = reference.lab();
    let candidates: Vec<(&'a Swatch, f64)> = catalog
        .iter()
        .filter(|candidate| candidate.brand_id() != reference.brand_id())
        .map(|candidate| (candidate, ciede2000(target, candidate.lab())))
        .collect();

    let (swatch, delta_e) = candidates
        .iter()
        .filter(|(_, delta_e)| *delta_e <= threshold)
        .min_by(by_distance)
        .or_else(|| candidates.iter().min_by(by_distance))
        .copied()?;

    Some(BrandSwap {
        swatch,
        delta_e,
        within_threshold: delta_e <= threshold,
    })
}

fn by_distance(a: &&(&Swatch, f64), b: &&(&Swatch, f64)) -> Ordering {
    a.1.total_cmp(&b.1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{lch_to_lab, LrvCache, Lch};
    use crate::models::SwatchRecord;

    /// Builds a swatch with an exact measured LCH so hue arithmetic is predictable.
    fn lch_record(id: &str, brand: &str, l: f64, c: f64, h: f64) -> SwatchRecord {
        SwatchRecord::new(id, brand, brand, "#808080").measured(lch_to_lab(Lch::new(l, c, h)))
    }

    fn wheel() -> Catalog {
        Catalog::from_records(
            vec![
                lch_record("ref", "a", 50.0, 40.0, 350.0),
                lch_record("plus10", "a", 70.0, 40.0, 0.0),
                lch_record("plus10-close", "b", 52.0, 40.0, 0.0),
                lch_record("plus40", "a", 50.0, 40.0, 30.0),
                lch_record("plus60", "a", 50.0, 40.0, 50.0),
                lch_record("minus20", "a", 50.0, 40.0, 330.0),
                lch_record("minus50", "a", 50.0, 40.0, 300.0),
                lch_record("plus60-twin", "c", 51.0, 40.0, 50.0),
            ],
            &LrvCache::new(),
        )
        .expect("wheel catalog should build")
    }

    #[test]
    fn test_nudge_lighter_wraps_and_breaks_ties_by_lightness() {
        let catalog = wheel();
        let reference = catalog.get("ref").unwrap();
        let found = nudge_lighter(&catalog, reference, DEFAULT_NUDGE_WINDOW).unwrap();
        assert_eq!(found.id(), "plus10-close");
    }

    #[test]
    fn test_nudge_darker() {
        let catalog = wheel();
        let reference = catalog.get("ref").unwrap();
        let found = nudge_darker(&catalog, reference, DEFAULT_NUDGE_WINDOW).unwrap();
        assert_eq!(found.id(), "minus20");
    }

    #[test]
    fn test_nudge_respects_window() {
        let catalog = wheel();
        let reference = catalog.get("plus60").unwrap();
        // Nearest on the negative side is "plus40", 20° away
        assert!(nudge_darker(&catalog, reference, 15.0).is_none());
        assert_eq!(
            nudge_darker(&catalog, reference, 25.0).map(Swatch::id),
            Some("plus40")
        );
        assert!(nudge_lighter(&catalog, reference, DEFAULT_NUDGE_WINDOW).is_none());
    }

    #[test]
    fn test_direction_parsing() {
        assert_eq!("lighter".parse::<NudgeDirection>(), Ok(NudgeDirection::Lighter));
        assert_eq!("DOWN".parse::<NudgeDirection>(), Ok(NudgeDirection::Darker));
        assert!("sideways".parse::<NudgeDirection>().is_err());
    }

    #[test]
    fn test_brand_swap_within_threshold() {
        let catalog = wheel();
        let reference = catalog.get("plus60").unwrap();
        let swap = brand_swap(&catalog, reference, DEFAULT_SWAP_THRESHOLD).unwrap();
        assert_eq!(swap.swatch.id(), "plus60-twin");
        assert_ne!(swap.swatch.brand_id(), reference.brand_id());
        assert!(swap.within_threshold);
        assert!(swap.delta_e < 2.0);
    }

    #[test]
    fn test_brand_swap_falls_back_beyond_threshold() {
        let catalog = wheel();
        let reference = catalog.get("plus10").unwrap();
        let swap = brand_swap(&catalog, reference, 0.5).unwrap();
        assert_eq!(swap.swatch.id(), "plus10-close");
        assert!(!swap.within_threshold);
        assert!(swap.delta_e > 0.5);
    }

    #[test]
    fn test_brand_swap_single_brand() {
        let catalog = Catalog::from_records(
            vec![lch_record("x", "a", 50.0, 10.0, 10.0), lch_record("y", "a", 60.0, 10.0, 10.0)],
            &LrvCache::new(),
        )
        .unwrap();
        let reference = catalog.get("x").unwrap();
        assert!(brand_swap(&catalog, reference, DEFAULT_SWAP_THRESHOLD).is_none());
    }
}
