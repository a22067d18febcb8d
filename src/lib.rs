//! Palettesmith Library
//!
//! This library provides the perceptual color-matching and palette-synthesis
//! engine behind Palettesmith: color-space conversion, CIEDE2000 distance,
//! harmony targets, LRV-banded candidate search, and swatch neighbor queries.

// Module declarations
pub mod cli;
pub mod color;
pub mod config;
pub mod constants;
pub mod models;
pub mod services;
