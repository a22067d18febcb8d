//! Per-slot LRV bands derived from locked anchors.
//!
//! Slot 0 is the lightest. A lock at slot `j` with LRV `v` forces every slot
//! before it to be at least `v` and every slot after it to be at most `v`.

use serde::Serialize;

/// Permissible `[min, max]` LRV interval for one slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LrvBand {
    /// Lower bound (inclusive)
    pub min: f64,
    /// Upper bound (inclusive)
    pub max: f64,
}

impl LrvBand {
    /// Creates a band.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns true if `lrv` lies within the band widened by `tolerance` on both sides.
    #[must_use]
    pub fn contains(&self, lrv: f64, tolerance: f64) -> bool {
        lrv >= self.min - tolerance && lrv <= self.max + tolerance
    }
}

/// Solves all slot bands in one pass.
///
/// Every slot starts at `catalog_range`; each lock then tightens its
/// neighbors. Constraints are monotone and locks are fixed points, so the
/// order in which locks are applied does not matter.
///
/// # Examples
///
/// ```
/// use palettesmith::services::bands::{solve_bands, LrvBand};
///
/// let bands = solve_bands(LrvBand::new(5.0, 95.0), &[None, Some(40.0), None]);
/// assert_eq!(bands[0], LrvBand::new(40.0, 95.0));
/// assert_eq!(bands[1], LrvBand::new(5.0, 95.0));
/// assert_eq!(bands[2], LrvBand::new(5.0, 40.0));
/// ```
#[must_use]
pub fn solve_bands(catalog_range: LrvBand, locked: &[Option<f64>]) -> Vec<LrvBand> {
    let mut bands = vec![catalog_range; locked.len()];

    for (j, value) in locked.iter().enumerate() {
        let Some(value) = *value else { continue };

        for band in &mut bands[..j] {
            band.min = band.min.max(value);
        }
        for band in &mut bands[j + 1..] {
            band.max = band.max.min(value);
        }
    }

    bands
}
