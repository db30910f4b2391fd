//! Cache Store Module
//!
//! LRU cache engine combining a HashMap entry store with the recency index.

use std::collections::HashMap;
use std::hash::Hash;

use crate::cache::stats::AccessCounters;
use crate::cache::{CacheEntry, CacheStats, RecencyIndex};
use crate::error::{CacheError, Result};

// == LRU Cache ==
/// Capacity-bounded cache that evicts the least recently used key.
///
/// `entries.len() == recency.len() <= capacity` holds after every call.
#[derive(Debug)]
pub struct LruCache<K, V> {
    /// Key to value plus recency slot
    entries: HashMap<K, CacheEntry<V>>,
    /// Access order, front = most recently used
    recency: RecencyIndex<K>,
    /// Hit, miss and eviction totals
    counters: AccessCounters,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    // == Constructor ==
    /// Creates a new cache holding at most `capacity` entries.
    ///
    /// A zero capacity is rejected.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::Configuration(
                "cache capacity must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            entries: HashMap::with_capacity(capacity),
            recency: RecencyIndex::with_capacity(capacity),
            counters: AccessCounters::default(),
            capacity,
        })
    }

    // == Get ==
    /// Retrieves a value and marks the key most recently used.
    ///
    /// A miss leaves entries and order untouched.
    pub fn get(&mut self, key: &K) -> Option<V> {
        match self.entries.get(key) {
            Some(entry) => {
                self.recency.promote(entry.slot);
                self.counters.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.counters.record_miss();
                None
            }
        }
    }

    // == Put ==
    /// Inserts or updates `key`, making it most recently used.
    ///
    /// Inserting a new key into a full cache evicts the least recently used
    /// entry first; the evicted key is returned.
    pub fn put(&mut self, key: K, value: V) -> Option<K> {
        if let Some(entry) = self.entries.get_mut(&key) {
            entry.replace(value);
            self.recency.promote(entry.slot);
            return None;
        }

        let evicted = if self.entries.len() >= self.capacity {
            self.evict_oldest()
        } else {
            None
        };

        let slot = self.recency.push_front(key.clone());
        self.entries.insert(key, CacheEntry::new(value, slot));

        evicted
    }

    fn evict_oldest(&mut self) -> Option<K> {
        let key = self.recency.pop_back()?;
        self.entries.remove(&key);
        self.counters.record_eviction();
        Some(key)
    }

    // == Peek ==
    /// Reads a value without touching recency or statistics.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.entries.get(key).map(|entry| &entry.value)
    }

    // == Keys ==
    /// Resident keys from most to least recently used.
    pub fn keys(&self) -> Vec<K> {
        self.recency.iter().cloned().collect()
    }

    // == Stats ==
    /// Snapshot of the counters with current occupancy and capacity.
    pub fn stats(&self) -> CacheStats {
        self.counters.snapshot(self.entries.len(), self.capacity)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks that the entry store and recency index describe the same keys.
    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        self.entries.len() == self.recency.len()
            && self.entries.len() <= self.capacity
            && self.entries.iter().all(|(key, entry)| {
                self.recency.key_at(entry.slot) == Some(key)
            })
    }
}
