//! Data models for swatches, catalogs and locked palette slots.
//!
//! Models are designed to be independent of the matching logic in
//! [`crate::services`] and of any presentation layer.

pub mod anchors;
pub mod catalog;
pub mod rgb;
pub mod swatch;

// Re-export all model types
pub use anchors::Anchors;
pub use catalog::Catalog;
pub use rgb::RgbColor;
pub use swatch::{Swatch, SwatchRecord};
