//! Configuration management CLI commands.

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::config::Config;
use crate::services::HarmonyMode;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Default swatch catalog (JSON file)
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Default harmony mode
    #[arg(long, value_name = "MODE")]
    mode: Option<String>,

    /// CIEDE2000 threshold for brand swaps
    #[arg(long, value_name = "DELTA_E")]
    swap_threshold: Option<f64>,

    /// Hue window for nudges, in degrees
    #[arg(long, value_name = "DEGREES")]
    nudge_window: Option<f64>,

    /// Random pick among the best K matches (1 = always the best)
    #[arg(long, value_name = "K")]
    top_k: Option<usize>,

    /// Prefer brands not yet in the palette (true or false)
    #[arg(long, value_name = "BOOL")]
    diversify: Option<bool>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        if self.json {
            print_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.catalog.is_none()
            && self.mode.is_none()
            && self.swap_threshold.is_none()
            && self.nudge_window.is_none()
            && self.top_k.is_none()
            && self.diversify.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --catalog, --mode, --swap-threshold, --nudge-window, --top-k, or --diversify",
            ));
        }

        let mut config = Config::load().unwrap_or_default();

        if let Some(catalog) = &self.catalog {
            if !catalog.is_file() {
                return Err(CliError::validation(format!(
                    "Catalog file does not exist: {}",
                    catalog.display()
                )));
            }
            config.paths.catalog = Some(catalog.clone());
        }
        if let Some(mode) = &self.mode {
            config.engine.default_mode = mode.parse::<HarmonyMode>().map_err(CliError::validation)?;
        }
        if let Some(threshold) = self.swap_threshold {
            config.engine.swap_threshold = threshold;
        }
        if let Some(window) = self.nudge_window {
            config.engine.nudge_window_degrees = window;
        }
        if let Some(top_k) = self.top_k {
            config.engine.pick_top_k = top_k;
        }
        if let Some(diversify) = self.diversify {
            config.engine.diversify_brands = diversify;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))?;
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("✓ Configuration updated");
        Ok(())
    }
}

fn output_human_readable(config: &Config) {
    println!("Paths:");
    match &config.paths.catalog {
        Some(path) => println!("  catalog: {}", path.display()),
        None => println!("  catalog: (not set)"),
    }
    println!();

    let engine = &config.engine;
    println!("Engine:");
    println!("  default_mode: {}", engine.default_mode);
    println!("  diversify_brands: {}", engine.diversify_brands);
    println!("  unique_swatches: {}", engine.unique_swatches);
    println!("  pick_top_k: {}", engine.pick_top_k);
    println!("  candidate_limit: {}", engine.candidate_limit);
    println!("  hue_window_degrees: {}", engine.hue_window_degrees);
    println!(
        "  lrv_tolerance: {} (+{} up to {})",
        engine.initial_tolerance, engine.tolerance_step, engine.max_tolerance
    );
    println!("  swap_threshold: {}", engine.swap_threshold);
    println!("  nudge_window_degrees: {}", engine.nudge_window_degrees);
}
