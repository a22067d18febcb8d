//! Locked palette slots.

use anyhow::Result;

use super::Swatch;

/// One entry per palette slot; `Some` marks a user-locked swatch.
///
/// The length of the anchor array is the requested palette size.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Anchors {
    slots: Vec<Option<Swatch>>,
}

impl Anchors {
    /// Creates `size` empty slots.
    #[must_use]
    pub fn empty(size: usize) -> Self {
        Self {
            slots: vec![None; size],
        }
    }

    /// Wraps an existing slot array.
    #[must_use]
    pub fn from_slots(slots: Vec<Option<Swatch>>) -> Self {
        Self { slots }
    }

    /// Locks `swatch` into `slot`, replacing any previous lock.
    ///
    /// # Errors
    ///
    /// Returns an error if `slot` is out of range.
    pub fn lock(&mut self, slot: usize, swatch: Swatch) -> Result<()> {
        let size = self.slots.len();
        let entry = self
            .slots
            .get_mut(slot)
            .ok_or_else(|| anyhow::anyhow!("Slot {slot} is out of range for a palette of {size}"))?;
        *entry = Some(swatch);
        Ok(())
    }

    /// Builder form of [`Anchors::lock`].
    pub fn locked(mut self, slot: usize, swatch: Swatch) -> Result<Self> {
        self.lock(slot, swatch)?;
        Ok(self)
    }

    /// Requested palette size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if there are no slots at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The swatch locked at `slot`, if any.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&Swatch> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    /// All slots in order.
    #[must_use]
    pub fn slots(&self) -> &[Option<Swatch>] {
        &self.slots
    }

    /// Locked slots with their index.
    pub fn iter_locked(&self) -> impl Iterator<Item = (usize, &Swatch)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, swatch)| swatch.as_ref().map(|swatch| (slot, swatch)))
    }

    /// True if every slot is locked.
    #[must_use]
    pub fn is_fully_locked(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }
}
