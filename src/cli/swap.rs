//! Swap command: find a near-identical swatch from another brand.

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::common::{
    describe_swatch, find_swatch, load_catalog, load_config, print_json, resolve_catalog_path,
    CliError, CliResult, SwatchOutput,
};
use crate::color::LrvCache;
use crate::services::brand_swap;

/// Find the closest swatch from a different brand
#[derive(Debug, Clone, Args)]
pub struct SwapArgs {
    /// Path to the swatch catalog (JSON); defaults to the configured catalog
    #[arg(short, long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Id of the reference swatch
    #[arg(long, value_name = "ID")]
    pub id: String,

    /// CIEDE2000 threshold (defaults to engine.swap_threshold)
    #[arg(short, long, value_name = "DELTA_E")]
    pub threshold: Option<f64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SwapOutput {
    reference: SwatchOutput,
    threshold: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<SwapResultOutput>,
}

#[derive(Debug, Serialize)]
struct SwapResultOutput {
    #[serde(flatten)]
    swatch: SwatchOutput,
    delta_e: f64,
    within_threshold: bool,
}

impl SwapArgs {
    /// Execute the swap command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let threshold = self.threshold.unwrap_or(config.engine.swap_threshold);
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(CliError::validation(format!(
                "Invalid threshold {threshold}. Must be a non-negative number"
            )));
        }

        let catalog_path = resolve_catalog_path(self.catalog.as_deref(), &config)?;
        let cache = LrvCache::new();
        let catalog = load_catalog(&catalog_path, &cache)?;
        let reference = find_swatch(&catalog, &self.id)?;

        let swap = brand_swap(&catalog, reference, threshold);

        if self.json {
            print_json(&SwapOutput {
                reference: SwatchOutput::from(reference),
                threshold,
                result: swap.map(|swap| SwapResultOutput {
                    swatch: SwatchOutput::from(swap.swatch),
                    delta_e: swap.delta_e,
                    within_threshold: swap.within_threshold,
                }),
            })?;
        } else {
            println!("From: {}", describe_swatch(reference));
            match swap {
                Some(swap) => {
                    let note = if swap.within_threshold {
                        String::new()
                    } else {
                        format!(" (closest available, above threshold {threshold})")
                    };
                    println!(
                        "  Swap: {}  ΔE00 {:.2}{note}",
                        describe_swatch(swap.swatch),
                        swap.delta_e
                    );
                }
                None => println!("  No swatch from another brand in this catalog"),
            }
        }

        Ok(())
    }
}
