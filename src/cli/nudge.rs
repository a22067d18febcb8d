//! Nudge command: step one swatch around the hue wheel.

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::common::{
    describe_swatch, find_swatch, load_catalog, load_config, print_json, resolve_catalog_path,
    CliError, CliResult, SwatchOutput,
};
use crate::color::LrvCache;
use crate::services::{nudge, NudgeDirection};

/// Find the next swatch up or down the hue wheel
#[derive(Debug, Clone, Args)]
pub struct NudgeArgs {
    /// Path to the swatch catalog (JSON); defaults to the configured catalog
    #[arg(short, long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Id of the reference swatch
    #[arg(long, value_name = "ID")]
    pub id: String,

    /// Direction: lighter (hue up) or darker (hue down)
    #[arg(short, long, value_name = "DIR", default_value = "lighter")]
    pub direction: String,

    /// Hue window in degrees (defaults to engine.nudge_window_degrees)
    #[arg(long, value_name = "DEGREES")]
    pub window: Option<f64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct NudgeOutput {
    reference: SwatchOutput,
    direction: String,
    window_degrees: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<SwatchOutput>,
}

impl NudgeArgs {
    /// Execute the nudge command
    pub fn execute(&self) -> CliResult<()> {
        let direction: NudgeDirection = self.direction.parse().map_err(CliError::validation)?;

        let config = load_config()?;
        let window = self.window.unwrap_or(config.engine.nudge_window_degrees);
        if !(window > 0.0 && window <= 180.0) {
            return Err(CliError::validation(format!(
                "Invalid window {window}. Must be in (0, 180]"
            )));
        }

        let catalog_path = resolve_catalog_path(self.catalog.as_deref(), &config)?;
        let cache = LrvCache::new();
        let catalog = load_catalog(&catalog_path, &cache)?;
        let reference = find_swatch(&catalog, &self.id)?;

        let found = nudge(&catalog, reference, direction, window);

        if self.json {
            print_json(&NudgeOutput {
                reference: SwatchOutput::from(reference),
                direction: direction.to_string(),
                window_degrees: window,
                result: found.map(SwatchOutput::from),
            })?;
        } else {
            println!("From: {}", describe_swatch(reference));
            match found {
                Some(swatch) => println!("  {direction}: {}", describe_swatch(swatch)),
                None => println!("  No {direction} swatch within {window}°"),
            }
        }

        Ok(())
    }
}
