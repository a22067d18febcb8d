//! Shared test fixtures for engine and CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use palettesmith::models::{Catalog, SwatchRecord};
use palettesmith::services::PaletteEngine;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Twenty colors, one per brand, LRV rising from about 5 to about 95.
///
/// Hues step by the golden angle so neighbors in lightness differ in hue.
pub const SPREAD_HEXES: [&str; 20] = [
    "6D2A2A", "266438", "8D4CBB", "857B32", "3E91A2", "CB77A5", "5EAF42", "A3A1DB", "D4A68E",
    "6FC8A7", "DDB1E2", "BECF80", "BCD1E5", "ECCED4", "BEE6C1", "E6DFF3", "F0E8D7", "DEF2F2",
    "FAF1F8", "F7FAF3",
];

/// Id of the `index`-th spread swatch.
pub fn spread_id(index: usize) -> String {
    format!("sw-{index:02}")
}

/// Records for the spread catalog: `sw-00`..`sw-19`, each from its own brand.
pub fn spread_records() -> Vec<SwatchRecord> {
    SPREAD_HEXES
        .iter()
        .enumerate()
        .map(|(i, hex)| {
            SwatchRecord::new(
                spread_id(i),
                format!("brand-{i:02}"),
                format!("Brand {i:02}"),
                format!("#{hex}"),
            )
            .named(format!("Test Color {i}"))
            .with_code(format!("TC-{:03}", i * 7))
        })
        .collect()
}

/// Records where two brands each offer every spread color.
pub fn two_brand_records() -> Vec<SwatchRecord> {
    let mut records = Vec::new();
    for (i, hex) in SPREAD_HEXES.iter().enumerate() {
        records.push(SwatchRecord::new(format!("a-{i:02}"), "acme", "Acme", *hex));
        records.push(SwatchRecord::new(format!("b-{i:02}"), "bolt", "Bolt", *hex));
    }
    records
}

/// Builds the spread catalog through `engine`.
pub fn spread_catalog(engine: &PaletteEngine) -> Catalog {
    engine
        .catalog(spread_records())
        .expect("spread catalog should build")
}

/// Writes `records` as a JSON catalog file.
pub fn write_catalog(path: &Path, records: &[SwatchRecord]) {
    let json = serde_json::to_string_pretty(records).expect("records should serialize");
    fs::write(path, json).expect("Failed to write catalog file");
}

/// Creates a temp dir holding `catalog.json` with the spread catalog.
///
/// The `TempDir` must be kept alive for as long as the path is used.
pub fn temp_spread_catalog() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("catalog.json");
    write_catalog(&path, &spread_records());
    (temp_dir, path)
}

/// Path to the palettesmith binary.
pub fn palettesmith_bin() -> String {
    std::env::var("CARGO_BIN_EXE_palettesmith")
        .unwrap_or_else(|_| "target/release/palettesmith".to_string())
}

/// Creates a Command whose configuration lives in `config_dir`.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(palettesmith_bin());
    cmd.env("PALETTESMITH_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs `args` with a fresh, empty configuration directory.
pub fn run_isolated(args: &[&str]) -> std::process::Output {
    let config_dir = TempDir::new().expect("Failed to create temp dir");
    isolated_command(args, config_dir.path())
        .output()
        .expect("Failed to execute command")
}

/// Parses stdout as JSON.
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).unwrap_or_else(|e| {
        panic!(
            "stdout should be JSON ({e}). stdout: {stdout} stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        )
    })
}
