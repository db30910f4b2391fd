//! Cache Entry Module
//!
//! Defines the value side of the entry store.

use crate::cache::lru::Slot;

// == Cache Entry ==
/// A stored value plus its position in the recency index.
#[derive(Debug, Clone)]
pub(crate) struct CacheEntry<V> {
    /// The stored value
    pub(crate) value: V,
    /// Handle into the recency index
    pub(crate) slot: Slot,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    pub(crate) fn new(value: V, slot: Slot) -> Self {
        Self { value, slot }
    }

    // == Replace ==
    /// Overwrites the value, keeping the recency position.
    ///
    /// Returns the previous value.
    pub(crate) fn replace(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }
}
