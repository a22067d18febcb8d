//! CLI command handlers for Palettesmith.
//!
//! This module provides headless, scriptable access to the matching engine
//! over JSON swatch catalogs.

pub mod common;
pub mod config;
pub mod generate;
pub mod inspect;
pub mod nudge;
pub mod swap;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use generate::GenerateArgs;
pub use inspect::InspectArgs;
pub use nudge::NudgeArgs;
pub use swap::SwapArgs;
