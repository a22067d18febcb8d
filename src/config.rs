//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{APP_CONFIG_DIR_NAME, CONFIG_DIR_ENV};
use crate::services::harmony::HarmonyMode;
use crate::services::neighbors::{DEFAULT_NUDGE_WINDOW, DEFAULT_SWAP_THRESHOLD};
use crate::services::selector::{
    SelectorSettings, TieBreak, DEFAULT_CANDIDATE_LIMIT, DEFAULT_HUE_WINDOW,
    DEFAULT_INITIAL_TOLERANCE, DEFAULT_MAX_TOLERANCE, DEFAULT_TOLERANCE_STEP, DEFAULT_TOP_K,
};

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Default swatch catalog (JSON) used when `--catalog` is omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
}

/// Matching engine tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Harmony mode used when none is requested
    pub default_mode: HarmonyMode,
    /// Prefer brands not yet in the palette
    pub diversify_brands: bool,
    /// Never place the same swatch in two slots
    pub unique_swatches: bool,
    /// Random pick among the best K matches (1 = always the best)
    pub pick_top_k: usize,
    /// Nearest candidates kept after hue windowing
    pub candidate_limit: usize,
    /// Half-width of the candidate hue window, in degrees
    pub hue_window_degrees: f64,
    /// First LRV tolerance tried per slot
    pub initial_tolerance: f64,
    /// LRV tolerance increment per retry
    pub tolerance_step: f64,
    /// Highest LRV tolerance tried
    pub max_tolerance: f64,
    /// CIEDE2000 threshold for cross-brand swaps
    pub swap_threshold: f64,
    /// Hue window for nudges, in degrees
    pub nudge_window_degrees: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_mode: HarmonyMode::default(),
            diversify_brands: true,
            unique_swatches: false,
            pick_top_k: DEFAULT_TOP_K,
            candidate_limit: DEFAULT_CANDIDATE_LIMIT,
            hue_window_degrees: DEFAULT_HUE_WINDOW,
            initial_tolerance: DEFAULT_INITIAL_TOLERANCE,
            tolerance_step: DEFAULT_TOLERANCE_STEP,
            max_tolerance: DEFAULT_MAX_TOLERANCE,
            swap_threshold: DEFAULT_SWAP_THRESHOLD,
            nudge_window_degrees: DEFAULT_NUDGE_WINDOW,
        }
    }
}

impl EngineConfig {
    /// Candidate selector settings derived from this configuration.
    #[must_use]
    pub fn selector_settings(&self) -> SelectorSettings {
        SelectorSettings {
            candidate_limit: self.candidate_limit,
            hue_window_degrees: self.hue_window_degrees,
            initial_tolerance: self.initial_tolerance,
            tolerance_step: self.tolerance_step,
            max_tolerance: self.max_tolerance,
            diversify_brands: self.diversify_brands,
            unique_swatches: self.unique_swatches,
            tie_break: if self.pick_top_k <= 1 {
                TieBreak::Best
            } else {
                TieBreak::RandomTopK(self.pick_top_k)
            },
        }
    }

    /// Validates the tunables.
    ///
    /// Checks:
    /// - every float is finite and positive
    /// - `pick_top_k` and `candidate_limit` are at least 1
    /// - `initial_tolerance <= max_tolerance`
    /// - `hue_window_degrees` and `nudge_window_degrees` are at most 180
    pub fn validate(&self) -> Result<()> {
        let floats = [
            ("hue_window_degrees", self.hue_window_degrees),
            ("initial_tolerance", self.initial_tolerance),
            ("tolerance_step", self.tolerance_step),
            ("max_tolerance", self.max_tolerance),
            ("swap_threshold", self.swap_threshold),
            ("nudge_window_degrees", self.nudge_window_degrees),
        ];
        for (name, value) in floats {
            if !value.is_finite() || value <= 0.0 {
                anyhow::bail!("engine.{name} must be a positive number, got {value}");
            }
        }

        if self.pick_top_k == 0 {
            anyhow::bail!("engine.pick_top_k must be at least 1");
        }
        if self.candidate_limit == 0 {
            anyhow::bail!("engine.candidate_limit must be at least 1");
        }
        if self.initial_tolerance > self.max_tolerance {
            anyhow::bail!(
                "engine.initial_tolerance ({}) cannot exceed engine.max_tolerance ({})",
                self.initial_tolerance,
                self.max_tolerance
            );
        }
        if self.hue_window_degrees > 180.0 || self.nudge_window_degrees > 180.0 {
            anyhow::bail!("Hue windows cannot exceed 180 degrees");
        }

        Ok(())
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Palettesmith/config.toml`
/// - macOS: `~/Library/Application Support/Palettesmith/config.toml`
/// - Windows: `%APPDATA%\Palettesmith\config.toml`
///
/// The directory can be overridden with the `PALETTESMITH_CONFIG_DIR`
/// environment variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// Matching engine tunables
    #[serde(default)]
    pub engine: EngineConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path using atomic write.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - engine tunables (see [`EngineConfig::validate`])
    /// - the default catalog path, if set, points at a file
    pub fn validate(&self) -> Result<()> {
        self.engine.validate()?;

        if let Some(catalog) = &self.paths.catalog {
            if catalog.exists() && !catalog.is_file() {
                anyhow::bail!("Catalog path is not a file: {}", catalog.display());
            }
        }

        Ok(())
    }
}
