//! Generate command: synthesize a harmonious palette from a catalog.

use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

use crate::cli::common::{
    describe_swatch, find_swatch, load_catalog, load_config, print_json, resolve_catalog_path,
    CliError, CliResult, SwatchOutput,
};
use crate::color::LrvCache;
use crate::constants::MAX_PALETTE_SIZE;
use crate::models::{Anchors, Catalog};
use crate::services::{HarmonyMode, PaletteEngine, PaletteOutcome, PaletteRequest, TieBreak};

/// Synthesize a palette of harmonious swatches
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Path to the swatch catalog (JSON); defaults to the configured catalog
    #[arg(short, long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Number of palette slots (1-9)
    #[arg(short = 'n', long, default_value = "5")]
    pub size: usize,

    /// Harmony mode: neutral, analogous, complementary, triad, or designer
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Lock a catalog swatch into a slot (repeatable), e.g. --lock 0=sw-7006
    #[arg(long = "lock", value_name = "SLOT=ID")]
    pub locks: Vec<String>,

    /// Seed for reproducible output
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Allow several swatches from the same brand
    #[arg(long)]
    pub no_diversify: bool,

    /// Never use the same swatch in two slots
    #[arg(long)]
    pub unique: bool,

    /// Always take the closest match instead of a random pick among the best
    #[arg(long)]
    pub best: bool,

    /// Fail (exit code 4) if any slot stays unfilled
    #[arg(long)]
    pub strict: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct PickOutput {
    slot: usize,
    locked: bool,
    #[serde(flatten)]
    swatch: SwatchOutput,
    delta_e: f64,
    tolerance: f64,
}

#[derive(Debug, Serialize)]
struct GenerateOutput {
    mode: String,
    size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    complete: bool,
    unfilled: Vec<usize>,
    swatches: Vec<PickOutput>,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        if self.size == 0 || self.size > MAX_PALETTE_SIZE {
            return Err(CliError::validation(format!(
                "Invalid size {}. Must be between 1 and {MAX_PALETTE_SIZE}",
                self.size
            )));
        }

        let config = load_config()?;
        let mode = match &self.mode {
            Some(mode) => mode.parse::<HarmonyMode>().map_err(CliError::validation)?,
            None => config.engine.default_mode,
        };

        let catalog_path = resolve_catalog_path(self.catalog.as_deref(), &config)?;
        let engine = PaletteEngine::new(config.engine.clone(), Arc::new(LrvCache::new()));
        let catalog = load_catalog(&catalog_path, engine.cache())?;

        let anchors = self.build_anchors(&catalog)?;
        let mut request = PaletteRequest::new(anchors, mode);
        if self.no_diversify {
            request = request.diversify(false);
        }
        if self.unique {
            request = request.unique(true);
        }
        if self.best {
            request = request.tie_break(TieBreak::Best);
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let outcome = engine
            .generate(&catalog, &request, &mut rng)
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        if self.json {
            print_json(&self.to_output(mode, &outcome))?;
        } else {
            print_human(mode, &outcome);
        }

        if self.strict && !outcome.is_complete() {
            return Err(CliError::partial(format!(
                "Palette incomplete: no swatch fits slot(s) {:?}",
                outcome.unfilled()
            )));
        }

        Ok(())
    }

    fn build_anchors(&self, catalog: &Catalog) -> CliResult<Anchors> {
        let mut anchors = Anchors::empty(self.size);

        for lock in &self.locks {
            let (slot, id) = lock.split_once('=').ok_or_else(|| {
                CliError::validation(format!("Invalid lock '{lock}'. Expected SLOT=ID"))
            })?;
            let slot: usize = slot.trim().parse().map_err(|_| {
                CliError::validation(format!("Invalid slot '{slot}' in lock '{lock}'"))
            })?;
            let swatch = find_swatch(catalog, id.trim())?;

            anchors
                .lock(slot, swatch.clone())
                .map_err(|e| CliError::validation(e.to_string()))?;
        }

        Ok(anchors)
    }

    fn to_output(&self, mode: HarmonyMode, outcome: &PaletteOutcome) -> GenerateOutput {
        GenerateOutput {
            mode: mode.to_string(),
            size: self.size,
            seed: self.seed,
            complete: outcome.is_complete(),
            unfilled: outcome.unfilled().to_vec(),
            swatches: outcome
                .picks()
                .iter()
                .map(|pick| PickOutput {
                    slot: pick.slot,
                    locked: pick.locked,
                    swatch: SwatchOutput::from(&pick.swatch),
                    delta_e: pick.delta_e,
                    tolerance: pick.tolerance,
                })
                .collect(),
        }
    }
}

fn print_human(mode: HarmonyMode, outcome: &PaletteOutcome) {
    println!("{mode} palette:");
    for pick in outcome.picks() {
        let marker = if pick.locked { "🔒" } else { "  " };
        println!("{marker} {}. {}", pick.slot + 1, describe_swatch(&pick.swatch));
    }
    for slot in outcome.unfilled() {
        println!("   {}. (no matching swatch)", slot + 1);
    }
}
