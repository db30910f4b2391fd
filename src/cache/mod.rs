//! Cache Module
//!
//! Provides the in-memory LRU cache engine.

mod entry;
mod lru;
mod stats;
mod store;


pub(crate) use entry::CacheEntry;
pub(crate) use lru::RecencyIndex;

// Re-export public types
pub use stats::CacheStats;
pub use store::LruCache;

/// Cache used by the server: order to sequence value.
pub type OrderCache = LruCache<u64, u64>;

// == Public Constants ==
/// Capacity used when none is configured
pub const DEFAULT_CAPACITY: usize = 5;
