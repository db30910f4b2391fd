//! Fetch Orchestrator
//!
//! Resolves orders through the shared LRU cache, calling a producer on a miss.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use crate::cache::{CacheStats, OrderCache};
use crate::error::UpstreamError;
use crate::fetch::Producer;

/// Outcome of a successful [`FetchOrchestrator::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub value: u64,
    /// True when the value came from the cache
    pub cached: bool,
}

// == Fetch Orchestrator ==
/// Handle to the single shared cache.
///
/// Cloning is cheap and every clone sees the same cache. The mutex guards the
/// entry store and recency index together and is held for one `get` or one
/// `put` at a time, never while a producer runs.
#[derive(Debug, Clone)]
pub struct FetchOrchestrator {
    cache: Arc<Mutex<OrderCache>>,
}

impl FetchOrchestrator {
    pub fn new(cache: OrderCache) -> Self {
        Self {
            cache: Arc::new(Mutex::new(cache)),
        }
    }

    // == Resolve ==
    /// Returns the value for `order`, from the cache if resident.
    ///
    /// On a miss the producer is invoked once and a successful result is
    /// stored. A producer failure is returned as-is and nothing is cached.
    pub async fn resolve<P>(
        &self,
        order: u64,
        producer: &P,
    ) -> Result<Resolved, UpstreamError>
    where
        P: Producer + ?Sized,
    {
        let hit = {
            let mut cache = self.cache.lock().await;
            cache.get(&order)
        };

        if let Some(value) = hit {
            debug!("Cache hit for order {}", order);
            return Ok(Resolved {
                value,
                cached: true,
            });
        }

        debug!(
            "Cache miss for order {}, calling {} producer",
            order,
            producer.name()
        );
        let value = producer.produce(order).await?;

        let evicted = {
            let mut cache = self.cache.lock().await;
            cache.put(order, value)
        };
        if let Some(evicted) = evicted {
            debug!("Evicted order {} to make room for {}", evicted, order);
        }

        Ok(Resolved {
            value,
            cached: false,
        })
    }

    // == Stats ==
    /// Snapshot of cache statistics, including occupancy and capacity.
    pub async fn stats(&self) -> CacheStats {
        self.cache.lock().await.stats()
    }

    #[cfg(test)]
    pub(crate) fn cache(&self) -> &Arc<Mutex<OrderCache>> {
        &self.cache
    }
}
