//! Candidate selection: fills one palette slot at a time.
//!
//! For each slot the selector ranks the current pool by CIEDE2000 distance
//! to the slot's target, keeps the closest candidates inside a hue window,
//! and picks one whose LRV fits the slot's band. When nothing fits, the band
//! tolerance is widened step by step until `max_tolerance`.

use rand::Rng;
use std::collections::HashSet;

use super::bands::LrvBand;
use crate::color::{ciede2000, hue_distance, Lab};
use crate::models::{Catalog, Swatch};

/// Default number of nearest candidates kept after hue windowing.
pub const DEFAULT_CANDIDATE_LIMIT: usize = 12;
/// Default half-width of the hue window, in degrees.
pub const DEFAULT_HUE_WINDOW: f64 = 90.0;
/// Default starting LRV tolerance.
pub const DEFAULT_INITIAL_TOLERANCE: f64 = 1.0;
/// Default LRV tolerance increment.
pub const DEFAULT_TOLERANCE_STEP: f64 = 2.0;
/// Default ceiling for the LRV tolerance.
pub const DEFAULT_MAX_TOLERANCE: f64 = 10.0;
/// Default number of best matches a random pick is drawn from.
pub const DEFAULT_TOP_K: usize = 5;

/// How to choose among equally acceptable candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    /// Uniformly random among the best `k` matches
    RandomTopK(usize),
    /// Always the single best match
    Best,
}

impl Default for TieBreak {
    fn default() -> Self {
        Self::RandomTopK(DEFAULT_TOP_K)
    }
}

impl TieBreak {
    /// How many of the best matches are eligible.
    #[must_use]
    pub fn window(self) -> usize {
        match self {
            Self::RandomTopK(k) => k.max(1),
            Self::Best => 1,
        }
    }

    /// Index of the chosen candidate among `available` ranked ones.
    ///
    /// `available` must be non-zero.
    pub fn choose<R: Rng + ?Sized>(self, available: usize, rng: &mut R) -> usize {
        let eligible = available.min(self.window());
        if eligible <= 1 {
            0
        } else {
            rng.random_range(0..eligible)
        }
    }
}

/// Search tunables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectorSettings {
    /// Nearest candidates kept after hue windowing
    pub candidate_limit: usize,
    /// Half-width of the hue window in degrees
    pub hue_window_degrees: f64,
    /// First LRV tolerance tried
    pub initial_tolerance: f64,
    /// Tolerance increment between attempts
    pub tolerance_step: f64,
    /// Highest tolerance tried
    pub max_tolerance: f64,
    /// Prefer brands not yet in the palette
    pub diversify_brands: bool,
    /// Never place the same swatch in two slots
    pub unique_swatches: bool,
    /// Choice among acceptable candidates
    pub tie_break: TieBreak,
}

impl Default for SelectorSettings {
    fn default() -> Self {
        Self {
            candidate_limit: DEFAULT_CANDIDATE_LIMIT,
            hue_window_degrees: DEFAULT_HUE_WINDOW,
            initial_tolerance: DEFAULT_INITIAL_TOLERANCE,
            tolerance_step: DEFAULT_TOLERANCE_STEP,
            max_tolerance: DEFAULT_MAX_TOLERANCE,
            diversify_brands: true,
            unique_swatches: false,
            tie_break: TieBreak::default(),
        }
    }
}

/// A swatch chosen for a slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection<'a> {
    /// The chosen swatch
    pub swatch: &'a Swatch,
    /// CIEDE2000 distance to the slot target
    pub delta_e: f64,
    /// LRV tolerance in effect when the swatch was found
    pub tolerance: f64,
}

#[derive(Debug, Clone, Copy)]
struct Ranked<'a> {
    swatch: &'a Swatch,
    delta_e: f64,
}

/// Stateful slot filler for one palette invocation.
///
/// Remembers which brands (and, with `unique_swatches`, which swatches) are
/// already in the palette so later slots can diversify away from them.
#[derive(Debug)]
pub struct CandidateSelector<'a> {
    catalog: &'a Catalog,
    settings: SelectorSettings,
    palette_size: usize,
    used_brands: HashSet<String>,
    used_ids: HashSet<String>,
}

impl<'a> CandidateSelector<'a> {
    /// Creates a selector over `catalog` for a palette of `palette_size` slots.
    #[must_use]
    pub fn new(catalog: &'a Catalog, settings: SelectorSettings, palette_size: usize) -> Self {
        Self {
            catalog,
            settings,
            palette_size,
            used_brands: HashSet::new(),
            used_ids: HashSet::new(),
        }
    }

    /// Records a swatch as placed in the palette (locked or chosen).
    pub fn mark_used(&mut self, swatch: &Swatch) {
        self.used_brands.insert(swatch.brand_id().to_string());
        self.used_ids.insert(swatch.id().to_string());
    }

    /// True if a swatch of this brand is already in the palette.
    #[must_use]
    pub fn is_brand_used(&self, brand_id: &str) -> bool {
        self.used_brands.contains(brand_id)
    }

    /// Fills one slot, or returns `None` if nothing fits even at `max_tolerance`.
    pub fn select<R: Rng + ?Sized>(
        &mut self,
        target: Lab,
        band: LrvBand,
        rng: &mut R,
    ) -> Option<Selection<'a>> {
        let pool = self.pool();
        if pool.is_empty() {
            return None;
        }

        let ranked = rank(&pool, target);
        let nearest = self.nearest_in_hue_window(&ranked, target.to_lch().h);

        let mut tolerance = self.settings.initial_tolerance;
        loop {
            let in_band = |candidate: &&Ranked<'a>| band.contains(candidate.swatch.lrv(), tolerance);

            let choice = match self.pick(nearest.iter().filter(in_band), rng) {
                Some(choice) => Some(choice),
                None => self.pick(ranked.iter().filter(in_band), rng),
            };

            if let Some(choice) = choice {
                self.mark_used(choice.swatch);
                return Some(Selection {
                    swatch: choice.swatch,
                    delta_e: choice.delta_e,
                    tolerance,
                });
            }

            let next = tolerance + self.settings.tolerance_step;
            if self.settings.tolerance_step <= 0.0 || next > self.settings.max_tolerance {
                return None;
            }
            tracing::debug!(
                "No candidate in LRV band [{:.1}, {:.1}] at tolerance {tolerance}, widening to {next}",
                band.min,
                band.max
            );
            tolerance = next;
        }
    }

    /// Swatches eligible for the next slot.
    fn pool(&self) -> Vec<&'a Swatch> {
        let available: Vec<&'a Swatch> = self
            .catalog
            .iter()
            .filter(|swatch| {
                !(self.settings.unique_swatches && self.used_ids.contains(swatch.id()))
            })
            .collect();

        if self.settings.diversify_brands {
            let fresh: Vec<&'a Swatch> = available
                .iter()
                .copied()
                .filter(|swatch| !self.is_brand_used(swatch.brand_id()))
                .collect();
            if !fresh.is_empty() {
                return fresh;
            }
        }

        available
    }

    /// The closest candidates within the hue window, falling back to the whole
    /// ranking when the window is too sparse.
    fn nearest_in_hue_window(&self, ranked: &[Ranked<'a>], target_hue: f64) -> Vec<Ranked<'a>> {
        let windowed: Vec<Ranked<'a>> = ranked
            .iter()
            .filter(|candidate| {
                hue_distance(candidate.swatch.lch().h, target_hue)
                    <= self.settings.hue_window_degrees
            })
            .copied()
            .collect();

        let mut nearest = if windowed.len() < 2 * self.palette_size {
            ranked.to_vec()
        } else {
            windowed
        };
        nearest.truncate(self.settings.candidate_limit);
        nearest
    }

    fn pick<'r, R: Rng + ?Sized>(
        &self,
        candidates: impl Iterator<Item = &'r Ranked<'a>>,
        rng: &mut R,
    ) -> Option<Ranked<'a>>
    where
        'a: 'r,
    {
        let eligible: Vec<Ranked<'a>> = candidates
            .take(self.settings.tie_break.window())
            .copied()
            .collect();
        if eligible.is_empty() {
            return None;
        }
        Some(eligible[self.settings.tie_break.choose(eligible.len(), rng)])
    }
}

/// Sorts the pool by CIEDE2000 distance to `target`, closest first.
fn rank<'a>(pool: &[&'a Swatch], target: Lab) -> Vec<Ranked<'a>> {
    let mut ranked: Vec<Ranked<'a>> = pool
        .iter()
        .map(|&swatch| Ranked {
            swatch,
            delta_e: ciede2000(swatch.lab(), target),
        })
        .collect();
    ranked.sort_by(|a, b| a.delta_e.total_cmp(&b.delta_e));
    ranked
}
