//! Cache Statistics Module
//!
//! Access counters kept by the engine, and the snapshot built from them.

// == Access Counters ==
/// Running totals updated by `get` and `put`.
///
/// Occupancy is not stored here; the engine reads it from the entry store
/// when it takes a snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct AccessCounters {
    hits: u64,
    misses: u64,
    evictions: u64,
}

impl AccessCounters {
    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Combines the counters with the engine's current occupancy.
    pub(crate) fn snapshot(&self, total_entries: usize, capacity: usize) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            evictions: self.evictions,
            total_entries,
            capacity,
        }
    }
}

// == Cache Stats ==
/// Point-in-time view of an LRU cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups that found a resident order
    pub hits: u64,
    /// Lookups that found nothing
    pub misses: u64,
    /// Entries pushed out by a new order while full
    pub evictions: u64,
    /// Resident orders when the snapshot was taken
    pub total_entries: usize,
    /// Configured maximum number of entries
    pub capacity: usize,
}

impl CacheStats {
    /// hits / (hits + misses), or 0.0 before any lookup.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// True once every slot is taken and the next new order evicts.
    pub fn is_full(&self) -> bool {
        self.total_entries >= self.capacity
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_counters_snapshot() {
        let stats = AccessCounters::default().snapshot(0, 5);

        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.evictions, 0);
        assert_eq!(stats.capacity, 5);
        assert_eq!(stats.hit_rate(), 0.0);
        assert!(!stats.is_full());
    }

    #[test]
    fn test_snapshot_takes_occupancy_from_caller() {
        let mut counters = AccessCounters::default();
        counters.record_hit();
        counters.record_hit();
        counters.record_hit();
        counters.record_miss();
        counters.record_eviction();

        let stats = counters.snapshot(2, 2);

        assert_eq!(stats.hit_rate(), 0.75);
        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.total_entries, 2);
        assert!(stats.is_full());
    }
}
