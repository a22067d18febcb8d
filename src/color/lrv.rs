//! Light Reflectance Value (LRV) derivation and caching.
//!
//! LRV is the percentage of visible light a surface reflects. For a swatch
//! known only by its sRGB hex value it is approximated by relative luminance
//! scaled to 0-100.

use std::collections::HashMap;

use parking_lot::Mutex;

use super::hex::{hex_to_rgb, normalize_hex};
use super::space::srgb_to_linear;

/// Computes the LRV for a hex color without caching.
///
/// # Examples
///
/// ```
/// use palettesmith::color::lrv_for_hex;
///
/// assert!((lrv_for_hex("#FFFFFF") - 100.0).abs() < 1e-9);
/// assert_eq!(lrv_for_hex("#000000"), 0.0);
/// ```
#[must_use]
pub fn lrv_for_hex(hex: &str) -> f64 {
    let [r, g, b] = hex_to_rgb(hex).map(srgb_to_linear);
    let luminance = 0.2126 * r + 0.7152 * g + 0.0722 * b;
    (luminance * 100.0).clamp(0.0, 100.0)
}

/// Memoized LRV lookups keyed by normalized hex.
///
/// Entries are added on first lookup and never evicted; the cache only grows
/// with the number of distinct colors ever seen. Lookups take a short-lived
/// lock so one cache can be shared across threads behind an `Arc`.
#[derive(Debug, Default)]
pub struct LrvCache {
    entries: Mutex<HashMap<String, f64>>,
}

impl LrvCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the LRV for `hex`, computing and storing it on first use.
    pub fn lookup(&self, hex: &str) -> f64 {
        let key = normalize_hex(hex);
        let mut entries = self.entries.lock();
        *entries
            .entry(key)
            .or_insert_with_key(|normalized| lrv_for_hex(normalized))
    }

    /// Number of distinct colors cached so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// True if nothing has been looked up yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
