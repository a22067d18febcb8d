//! Service layer for business logic.
//!
//! This module contains the matching engine: harmony target generation,
//! target remapping, LRV band solving, candidate selection, and the
//! single-swatch neighbor queries used when editing a palette.

pub mod bands;
pub mod harmony;
pub mod neighbors;
pub mod palette;
pub mod remap;
pub mod selector;

// Re-export commonly used types and functions
pub use harmony::HarmonyMode;
pub use neighbors::{brand_swap, nudge, nudge_darker, nudge_lighter, BrandSwap, NudgeDirection};
pub use palette::{PaletteEngine, PaletteOutcome, PaletteRequest, SlotPick};
pub use selector::TieBreak;
