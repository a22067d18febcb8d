//! Palette synthesis: ties harmony targets, LRV bands and candidate
//! selection together for one invocation.
//!
//! ```text
//! seed ─► generate_targets ─► shuffle? ─► remap_targets(n) ─┐
//! anchors ─► solve_bands ──────────────────────────────────┤
//!                                                           ▼
//!                                   CandidateSelector, slot by slot
//! ```

use anyhow::Result;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use serde::Serialize;
use std::sync::Arc;

use super::bands::{solve_bands, LrvBand};
use super::harmony::{generate_targets, HarmonyMode, Perturbation};
use super::remap::remap_targets;
use super::selector::{CandidateSelector, SelectorSettings, TieBreak};
use crate::color::{Lab, LrvCache};
use crate::config::EngineConfig;
use crate::constants::MAX_PALETTE_SIZE;
use crate::models::{Anchors, Catalog, Swatch, SwatchRecord};

/// One filled palette slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotPick {
    /// Slot index (0 = lightest)
    pub slot: usize,
    /// The swatch occupying the slot
    pub swatch: Swatch,
    /// Whether the swatch was locked by the caller
    pub locked: bool,
    /// Harmony target the slot aimed for (`None` for locked slots)
    pub target: Option<Lab>,
    /// CIEDE2000 distance to the target (0 for locked slots)
    pub delta_e: f64,
    /// LRV tolerance the swatch was found at (0 for locked slots)
    pub tolerance: f64,
}

/// Result of one palette invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PaletteOutcome {
    /// Every slot was filled
    Complete {
        /// Picks in slot order
        picks: Vec<SlotPick>,
    },
    /// Some slots found no candidate even at the widest tolerance
    Partial {
        /// Filled picks in slot order
        picks: Vec<SlotPick>,
        /// Indices of the slots left empty
        unfilled: Vec<usize>,
    },
}

impl PaletteOutcome {
    /// Finalizes a slot array into an outcome in one pass.
    fn from_slots(slots: Vec<Option<SlotPick>>) -> Self {
        let mut picks = Vec::with_capacity(slots.len());
        let mut unfilled = Vec::new();

        for (slot, pick) in slots.into_iter().enumerate() {
            match pick {
                Some(pick) => picks.push(pick),
                None => unfilled.push(slot),
            }
        }

        if unfilled.is_empty() {
            Self::Complete { picks }
        } else {
            Self::Partial { picks, unfilled }
        }
    }

    /// True if every requested slot was filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete { .. })
    }

    /// Filled picks in slot order.
    #[must_use]
    pub fn picks(&self) -> &[SlotPick] {
        match self {
            Self::Complete { picks } | Self::Partial { picks, .. } => picks,
        }
    }

    /// Slots that could not be filled.
    #[must_use]
    pub fn unfilled(&self) -> &[usize] {
        match self {
            Self::Complete { .. } => &[],
            Self::Partial { unfilled, .. } => unfilled,
        }
    }

    /// The ordered swatch list.
    #[must_use]
    pub fn swatches(&self) -> Vec<&Swatch> {
        self.picks().iter().map(|pick| &pick.swatch).collect()
    }

    /// Consumes the outcome, returning the ordered swatch list.
    #[must_use]
    pub fn into_swatches(self) -> Vec<Swatch> {
        match self {
            Self::Complete { picks } | Self::Partial { picks, .. } => {
                picks.into_iter().map(|pick| pick.swatch).collect()
            }
        }
    }
}

/// Parameters of one palette invocation.
#[derive(Debug, Clone)]
pub struct PaletteRequest {
    /// Locked slots; the length is the palette size
    pub anchors: Anchors,
    /// Harmony scheme
    pub mode: HarmonyMode,
    /// Override for brand diversification (`None` uses the engine config)
    pub diversify_brands: Option<bool>,
    /// Override for swatch de-duplication (`None` uses the engine config)
    pub unique_swatches: Option<bool>,
    /// Override for tie-breaking (`None` uses the engine config)
    pub tie_break: Option<TieBreak>,
}

impl PaletteRequest {
    /// A request for `anchors.len()` slots in `mode`.
    #[must_use]
    pub fn new(anchors: Anchors, mode: HarmonyMode) -> Self {
        Self {
            anchors,
            mode,
            diversify_brands: None,
            unique_swatches: None,
            tie_break: None,
        }
    }

    /// An unlocked request for `size` slots.
    #[must_use]
    pub fn unlocked(size: usize, mode: HarmonyMode) -> Self {
        Self::new(Anchors::empty(size), mode)
    }

    /// Overrides brand diversification.
    pub fn diversify(mut self, diversify: bool) -> Self {
        self.diversify_brands = Some(diversify);
        self
    }

    /// Overrides swatch de-duplication across slots.
    pub fn unique(mut self, unique: bool) -> Self {
        self.unique_swatches = Some(unique);
        self
    }

    /// Overrides tie-breaking.
    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = Some(tie_break);
        self
    }
}

/// The palette synthesis engine.
///
/// Holds only configuration and the LRV cache; catalogs and anchors are
/// passed per call and never mutated, and randomness comes from the caller.
#[derive(Debug, Clone)]
pub struct PaletteEngine {
    config: EngineConfig,
    cache: Arc<LrvCache>,
}

impl Default for PaletteEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default(), Arc::new(LrvCache::new()))
    }
}

impl PaletteEngine {
    /// Creates an engine with explicit configuration and a shared LRV cache.
    #[must_use]
    pub fn new(config: EngineConfig, cache: Arc<LrvCache>) -> Self {
        Self { config, cache }
    }

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The LRV cache used for swatch conversion.
    #[must_use]
    pub fn cache(&self) -> &LrvCache {
        &self.cache
    }

    /// Converts one record using the engine's LRV cache.
    pub fn swatch(&self, record: SwatchRecord) -> Swatch {
        Swatch::from_record(record, &self.cache)
    }

    /// Builds a catalog using the engine's LRV cache.
    pub fn catalog(&self, records: Vec<SwatchRecord>) -> Result<Catalog> {
        Catalog::from_records(records, &self.cache)
    }

    fn selector_settings(&self, request: &PaletteRequest) -> SelectorSettings {
        let mut settings = self.config.selector_settings();
        if let Some(diversify) = request.diversify_brands {
            settings.diversify_brands = diversify;
        }
        if let Some(unique) = request.unique_swatches {
            settings.unique_swatches = unique;
        }
        if let Some(tie_break) = request.tie_break {
            settings.tie_break = tie_break;
        }
        settings
    }

    /// Synthesizes a palette of `request.anchors.len()` swatches.
    ///
    /// An empty catalog yields an empty, complete outcome. A fully locked
    /// request returns the anchors unchanged. Slots that find no candidate
    /// are reported through [`PaletteOutcome::Partial`].
    ///
    /// # Errors
    ///
    /// Returns an error if the palette size is 0 or larger than 9.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        catalog: &Catalog,
        request: &PaletteRequest,
        rng: &mut R,
    ) -> Result<PaletteOutcome> {
        let anchors = &request.anchors;
        let size = anchors.len();
        if size == 0 || size > MAX_PALETTE_SIZE {
            anyhow::bail!("Palette size must be between 1 and {MAX_PALETTE_SIZE}, got {size}");
        }

        let Some((min_lrv, max_lrv)) = catalog.lrv_range() else {
            tracing::debug!("Empty catalog, returning an empty palette");
            return Ok(PaletteOutcome::Complete { picks: Vec::new() });
        };

        let locked_slots: Vec<Option<SlotPick>> = anchors
            .slots()
            .iter()
            .enumerate()
            .map(|(slot, anchor)| anchor.clone().map(|swatch| locked_pick(slot, swatch)))
            .collect();

        if anchors.is_fully_locked() {
            return Ok(PaletteOutcome::from_slots(locked_slots));
        }

        let seed = match anchors.iter_locked().next() {
            Some((_, anchor)) => anchor.lab(),
            None => catalog
                .swatches()
                .choose(rng)
                .map(Swatch::lab)
                .ok_or_else(|| anyhow::anyhow!("Catalog has no swatch to seed from"))?,
        };

        let perturbation = Perturbation::draw(rng);
        let mut canonical = generate_targets(seed, request.mode, perturbation);
        if !request.mode.is_ordered() {
            canonical.shuffle(rng);
        }
        let targets = remap_targets(&canonical, size);

        tracing::debug!(
            "Generating {size}-slot {} palette: seed L*={:.1}, hue offset {:.1}°, lightness offset {:.1}",
            request.mode,
            seed.l,
            perturbation.hue,
            perturbation.lightness
        );

        let locked_lrv: Vec<Option<f64>> = anchors
            .slots()
            .iter()
            .map(|anchor| anchor.as_ref().map(Swatch::lrv))
            .collect();
        let bands = solve_bands(LrvBand::new(min_lrv, max_lrv), &locked_lrv);

        let mut selector = CandidateSelector::new(catalog, self.selector_settings(request), size);
        let mut slots = locked_slots;

        for slot in 0..size {
            if let Some(anchor) = anchors.get(slot) {
                selector.mark_used(anchor);
                continue;
            }

            let target = targets[slot];
            match selector.select(target, bands[slot], rng) {
                Some(selection) => {
                    slots[slot] = Some(SlotPick {
                        slot,
                        swatch: selection.swatch.clone(),
                        locked: false,
                        target: Some(target),
                        delta_e: selection.delta_e,
                        tolerance: selection.tolerance,
                    });
                }
                None => {
                    tracing::warn!(
                        "No swatch fits slot {slot} (LRV band [{:.1}, {:.1}]), leaving it unfilled",
                        bands[slot].min,
                        bands[slot].max
                    );
                }
            }
        }

        Ok(PaletteOutcome::from_slots(slots))
    }
}

fn locked_pick(slot: usize, swatch: Swatch) -> SlotPick {
    SlotPick {
        slot,
        swatch,
        locked: true,
        target: None,
        delta_e: 0.0,
        tolerance: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn grays(engine: &PaletteEngine) -> Catalog {
        let records = (0..10u8)
            .map(|i| {
                let level = 20 + i * 23;
                SwatchRecord::new(
                    format!("g{i}"),
                    format!("brand{i}"),
                    format!("Brand {i}"),
                    format!("#{level:02X}{level:02X}{level:02X}"),
                )
            })
            .collect();
        engine.catalog(records).expect("gray catalog should build")
    }

    #[test]
    fn test_invalid_sizes_rejected() {
        let engine = PaletteEngine::default();
        let catalog = grays(&engine);
        let mut rng = StdRng::seed_from_u64(1);

        let zero = PaletteRequest::unlocked(0, HarmonyMode::Neutral);
        assert!(engine.generate(&catalog, &zero, &mut rng).is_err());

        let ten = PaletteRequest::unlocked(10, HarmonyMode::Neutral);
        assert!(engine.generate(&catalog, &ten, &mut rng).is_err());
    }

    #[test]
    fn test_empty_catalog_returns_empty_palette() {
        let engine = PaletteEngine::default();
        let mut rng = StdRng::seed_from_u64(1);
        let request = PaletteRequest::unlocked(5, HarmonyMode::Triad);

        let outcome = engine
            .generate(&Catalog::default(), &request, &mut rng)
            .unwrap();
        assert!(outcome.is_complete());
        assert!(outcome.picks().is_empty());
    }

    #[test]
    fn test_outcome_from_slots() {
        let engine = PaletteEngine::default();
        let swatch = engine.swatch(SwatchRecord::new("a", "b", "B", "#123456"));
        let outcome = PaletteOutcome::from_slots(vec![
            Some(locked_pick(0, swatch.clone())),
            None,
            Some(locked_pick(2, swatch)),
        ]);

        assert!(!outcome.is_complete());
        assert_eq!(outcome.unfilled(), &[1]);
        assert_eq!(outcome.picks().len(), 2);
        assert_eq!(outcome.picks()[1].slot, 2);
        assert_eq!(outcome.into_swatches().len(), 2);
    }

    #[test]
    fn test_same_seed_same_palette() {
        let engine = PaletteEngine::default();
        let catalog = grays(&engine);
        let request = PaletteRequest::unlocked(4, HarmonyMode::Analogous);

        let first = engine
            .generate(&catalog, &request, &mut StdRng::seed_from_u64(11))
            .unwrap();
        let second = engine
            .generate(&catalog, &request, &mut StdRng::seed_from_u64(11))
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_request_overrides_engine_settings() {
        let engine = PaletteEngine::default();
        let request = PaletteRequest::unlocked(3, HarmonyMode::Neutral)
            .diversify(false)
            .tie_break(TieBreak::Best);
        let settings = engine.selector_settings(&request);
        assert!(!settings.diversify_brands);
        assert_eq!(settings.tie_break, TieBreak::Best);

        let defaults = engine.selector_settings(&PaletteRequest::unlocked(3, HarmonyMode::Neutral));
        assert!(defaults.diversify_brands);
        assert_eq!(defaults.tie_break, TieBreak::RandomTopK(5));
    }

    #[test]
    fn test_slot_before_lock_may_share_its_brand() {
        let engine = PaletteEngine::default();
        let catalog = engine
            .catalog(vec![
                SwatchRecord::new("a-dark", "a", "A", "#777777"),
                SwatchRecord::new("a-light", "a", "A", "#DDDDDD"),
                SwatchRecord::new("b-black", "b", "B", "#050505"),
            ])
            .unwrap();
        let anchor = catalog.get("a-dark").cloned().unwrap();
        let anchors = Anchors::empty(2).locked(1, anchor).unwrap();
        let request = PaletteRequest::new(anchors, HarmonyMode::Neutral).tie_break(TieBreak::Best);

        let outcome = engine
            .generate(&catalog, &request, &mut StdRng::seed_from_u64(1))
            .unwrap();
        // b-black is far outside slot 0's band, so only brand "a" can fill it
        assert!(outcome.is_complete(), "unfilled: {:?}", outcome.unfilled());
        assert_eq!(outcome.picks()[0].swatch.brand_id(), "a");
        assert_eq!(outcome.picks()[1].swatch.id(), "a-dark");
        assert!(outcome.picks()[1].locked);
    }

    #[test]
    fn test_single_swatch_catalog_fills_every_slot() {
        let engine = PaletteEngine::default();
        let catalog = engine
            .catalog(vec![SwatchRecord::new("only", "a", "A", "#6699CC")])
            .unwrap();
        let request = PaletteRequest::unlocked(3, HarmonyMode::Analogous).diversify(false);

        let outcome = engine
            .generate(&catalog, &request, &mut StdRng::seed_from_u64(4))
            .unwrap();
        assert!(outcome.is_complete());
        assert_eq!(outcome.picks().len(), 3);
        assert!(outcome.picks().iter().all(|p| p.swatch.id() == "only"));

        let unique = engine
            .generate(&catalog, &request.unique(true), &mut StdRng::seed_from_u64(4))
            .unwrap();
        assert_eq!(unique.picks().len(), 1);
        assert_eq!(unique.unfilled(), &[1, 2]);
    }
}
