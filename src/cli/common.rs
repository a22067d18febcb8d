//! Shared CLI plumbing: error type, exit codes, catalog loading.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::color::LrvCache;
use crate::config::Config;
use crate::constants::APP_BINARY_NAME;
use crate::models::{Catalog, Swatch};

/// Process exit codes used by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Invalid arguments or input
    Validation = 1,
    /// File could not be read or written
    Io = 2,
    /// A referenced swatch does not exist
    NotFound = 3,
    /// Palette was only partially filled (with `--strict`)
    Partial = 4,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error reported by a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code the process should terminate with
    pub exit_code: ExitCode,
    /// Human-readable message
    pub message: String,
}

impl CliError {
    /// Invalid user input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::Validation,
            message: message.into(),
        }
    }

    /// File system failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::Io,
            message: message.into(),
        }
    }

    /// Missing swatch or other referenced entity.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::NotFound,
            message: message.into(),
        }
    }

    /// Palette left slots unfilled.
    pub fn partial(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::Partial,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type returned by command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Loads the configuration, reporting failures as validation errors.
pub fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

/// Resolves the catalog path from `--catalog` or the configured default.
pub fn resolve_catalog_path(explicit: Option<&Path>, config: &Config) -> CliResult<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| config.paths.catalog.clone())
        .ok_or_else(|| {
            CliError::validation(format!(
                "No catalog specified. Use --catalog or set one with '{APP_BINARY_NAME} config set --catalog'"
            ))
        })
}

/// Loads the catalog from `path`.
pub fn load_catalog(path: &Path, cache: &LrvCache) -> CliResult<Catalog> {
    if !path.exists() {
        return Err(CliError::io(format!(
            "Catalog file not found: {}",
            path.display()
        )));
    }
    Catalog::load(path, cache).map_err(|e| CliError::validation(format!("{e:#}")))
}

/// Looks up a swatch by id.
pub fn find_swatch<'a>(catalog: &'a Catalog, id: &str) -> CliResult<&'a Swatch> {
    catalog
        .get(id)
        .ok_or_else(|| CliError::not_found(format!("Swatch '{id}' not found in catalog")))
}

/// Serializable view of a swatch for JSON output.
#[derive(Debug, Serialize)]
pub struct SwatchOutput {
    /// Swatch id
    pub id: String,
    /// Brand name
    pub brand_name: String,
    /// Paint name
    pub display_name: String,
    /// Manufacturer code
    pub code: String,
    /// Canonical hex with `#`
    pub hex: String,
    /// `[L, a, b]`
    pub lab: [f64; 3],
    /// `[L, C, h]`
    pub lch: [f64; 3],
    /// Light Reflectance Value
    pub lrv: f64,
}

impl From<&Swatch> for SwatchOutput {
    fn from(swatch: &Swatch) -> Self {
        Self {
            id: swatch.id().to_string(),
            brand_name: swatch.brand_name().to_string(),
            display_name: swatch.display_name().to_string(),
            code: swatch.code().to_string(),
            hex: format!("#{}", swatch.hex()),
            lab: swatch.lab().to_array(),
            lch: swatch.lch().to_array(),
            lrv: swatch.lrv(),
        }
    }
}

/// Prints a value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

/// One-line human-readable swatch description.
#[must_use]
pub fn describe_swatch(swatch: &Swatch) -> String {
    let code = if swatch.code().is_empty() {
        String::new()
    } else {
        format!(" ({})", swatch.code())
    };
    format!(
        "#{}  {} - {}{}  LRV {:.1}",
        swatch.hex(),
        swatch.brand_name(),
        swatch.display_name(),
        code,
        swatch.lrv()
    )
}
