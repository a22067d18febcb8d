//! The swatch catalog the engine searches.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::{Swatch, SwatchRecord};
use crate::color::LrvCache;

/// A set of swatches with unique ids. Order carries no meaning.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    swatches: Vec<Swatch>,
}

impl Catalog {
    /// Builds a catalog from already converted swatches.
    ///
    /// # Errors
    ///
    /// Returns an error if two swatches share an id.
    pub fn new(swatches: Vec<Swatch>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(swatches.len());
        for swatch in &swatches {
            if !seen.insert(swatch.id()) {
                anyhow::bail!("Duplicate swatch id '{}' in catalog", swatch.id());
            }
        }
        Ok(Self { swatches })
    }

    /// Converts raw records and builds a catalog from them.
    pub fn from_records(records: Vec<SwatchRecord>, cache: &LrvCache) -> Result<Self> {
        let swatches = records
            .into_iter()
            .map(|record| Swatch::from_record(record, cache))
            .collect();
        Self::new(swatches)
    }

    /// Parses a JSON array of swatch records.
    pub fn from_json_str(json: &str, cache: &LrvCache) -> Result<Self> {
        let records: Vec<SwatchRecord> =
            serde_json::from_str(json).context("Failed to parse catalog JSON")?;
        Self::from_records(records, cache)
    }

    /// Loads a catalog from a JSON file.
    pub fn load(path: &Path, cache: &LrvCache) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read catalog file: {}", path.display()))?;
        let catalog = Self::from_json_str(&content, cache)
            .context(format!("Invalid catalog file: {}", path.display()))?;

        tracing::info!(
            "Loaded {} swatches from {} brands ({})",
            catalog.len(),
            catalog.brand_count(),
            path.display()
        );
        Ok(catalog)
    }

    /// All swatches.
    #[must_use]
    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    /// Iterates over the swatches.
    pub fn iter(&self) -> std::slice::Iter<'_, Swatch> {
        self.swatches.iter()
    }

    /// Number of swatches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    /// True if the catalog holds no swatches.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    /// Looks a swatch up by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Swatch> {
        self.swatches.iter().find(|swatch| swatch.id() == id)
    }

    /// Number of distinct brands.
    #[must_use]
    pub fn brand_count(&self) -> usize {
        self.swatches
            .iter()
            .map(Swatch::brand_id)
            .collect::<HashSet<_>>()
            .len()
    }

    /// Observed `(min, max)` LRV across the catalog, `None` when empty.
    #[must_use]
    pub fn lrv_range(&self) -> Option<(f64, f64)> {
        self.swatches.iter().map(Swatch::lrv).fold(None, |range, lrv| {
            Some(match range {
                None => (lrv, lrv),
                Some((min, max)) => (min.min(lrv), max.max(lrv)),
            })
        })
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Swatch;
    type IntoIter = std::slice::Iter<'a, Swatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
