//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and configuration locations.

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "palettesmith";

/// Directory name under the platform config directory.
pub const APP_CONFIG_DIR_NAME: &str = "Palettesmith";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "PALETTESMITH_CONFIG_DIR";

/// Largest palette the engine synthesizes.
pub const MAX_PALETTE_SIZE: usize = 9;
