//! API Handlers
//!
//! HTTP request handlers for the caching front and the uncached backend.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use tracing::{info, warn};

use crate::cache::OrderCache;
use crate::config::{Config, ProducerMode};
use crate::error::Result;
use crate::fetch::sequence::{fibonacci_iterative, fibonacci_recursive};
use crate::fetch::{FetchOrchestrator, IterativeProducer, Producer, RecursiveProducer, RemoteProducer};
use crate::models::{CacheResponse, FibonacciResponse, HealthResponse, OrderQuery, StatsResponse};

/// Application state shared across all handlers.
///
/// Holds the single cache handle and the producer behind each route.
#[derive(Clone)]
pub struct AppState {
    /// Shared cache and fetch logic
    pub fetcher: FetchOrchestrator,
    /// Producer for `/fibonacci`
    pub iterative: Arc<dyn Producer>,
    /// Producer for `/recursive-fibonacci`
    pub recursive: Arc<dyn Producer>,
}

impl AppState {
    pub fn new(
        cache: OrderCache,
        iterative: Arc<dyn Producer>,
        recursive: Arc<dyn Producer>,
    ) -> Self {
        Self {
            fetcher: FetchOrchestrator::new(cache),
            iterative,
            recursive,
        }
    }

    /// Creates state that computes misses in-process.
    pub fn with_local_producers(cache: OrderCache) -> Self {
        Self::new(cache, Arc::new(IterativeProducer), Arc::new(RecursiveProducer))
    }

    /// Creates state that fetches misses from the backend at `base_url`.
    pub fn with_remote_producers(
        cache: OrderCache,
        base_url: &str,
        timeout: std::time::Duration,
    ) -> Result<Self> {
        let iterative = RemoteProducer::new(base_url, "/fibonacci", timeout)?;
        let recursive = RemoteProducer::new(base_url, "/recursive-fibonacci", timeout)?;
        Ok(Self::new(cache, Arc::new(iterative), Arc::new(recursive)))
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = OrderCache::new(config.cache_capacity)?;
        match config.producer {
            ProducerMode::Local => Ok(Self::with_local_producers(cache)),
            ProducerMode::Remote => {
                info!("Cache misses will be fetched from {}", config.upstream_url);
                Self::with_remote_producers(cache, &config.upstream_url, config.upstream_timeout())
            }
        }
    }
}

async fn resolve_order(
    state: &AppState,
    query: &OrderQuery,
    producer: &dyn Producer,
) -> Result<Json<CacheResponse>> {
    let order = query.order()?;

    let resolved = state
        .fetcher
        .resolve(order, producer)
        .await
        .map_err(|e| {
            warn!("{} producer failed for order {}: {}", producer.name(), order, e);
            e
        })?;

    Ok(Json(CacheResponse::new(order, resolved.value, resolved.cached)))
}

/// Handler for GET /fibonacci?order=N
pub async fn fibonacci_handler(
    State(state): State<AppState>,
    Query(query): Query<OrderQuery>,
) -> Result<Json<CacheResponse>> {
    resolve_order(&state, &query, state.iterative.as_ref()).await
}

/// Handler for GET /recursive-fibonacci?order=N
pub async fn recursive_fibonacci_handler(
    State(state): State<AppState>,
    Query(query): Query<OrderQuery>,
) -> Result<Json<CacheResponse>> {
    resolve_order(&state, &query, state.recursive.as_ref()).await
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.fetcher.stats().await;
    Json(StatsResponse::new(&stats))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

// == Backend Handlers ==

/// Handler for GET /fibonacci?order=N on the backend (no cache)
pub async fn compute_iterative_handler(
    Query(query): Query<OrderQuery>,
) -> Result<Json<FibonacciResponse>> {
    let order = query.order()?;
    let value = fibonacci_iterative(order)?;
    Ok(Json(FibonacciResponse::new(order, value)))
}

/// Handler for GET /recursive-fibonacci?order=N on the backend (no cache)
pub async fn compute_recursive_handler(
    Query(query): Query<OrderQuery>,
) -> Result<Json<FibonacciResponse>> {
    let order = query.order()?;
    let value = fibonacci_recursive(order)?;
    Ok(Json(FibonacciResponse::new(order, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CacheError;

    fn test_state(capacity: usize) -> AppState {
        AppState::with_local_producers(OrderCache::new(capacity).unwrap())
    }

    #[tokio::test]
    async fn test_fibonacci_miss_then_hit() {
        let state = test_state(5);

        let first = fibonacci_handler(State(state.clone()), Query(OrderQuery::new("10")))
            .await
            .unwrap();
        assert_eq!(first.fibonacci, FibonacciResponse::new(10, 55));
        assert!(!first.cached);

        let second = fibonacci_handler(State(state), Query(OrderQuery::new("10")))
            .await
            .unwrap();
        assert!(second.cached);
    }

    #[tokio::test]
    async fn test_routes_share_one_cache() {
        let state = test_state(5);

        fibonacci_handler(State(state.clone()), Query(OrderQuery::new("20")))
            .await
            .unwrap();
        let response =
            recursive_fibonacci_handler(State(state), Query(OrderQuery::new("20")))
                .await
                .unwrap();

        assert!(response.cached);
        assert_eq!(response.fibonacci.value, 6765);
    }

    #[tokio::test]
    async fn test_invalid_order() {
        let state = test_state(5);

        let result =
            fibonacci_handler(State(state.clone()), Query(OrderQuery::default())).await;
        assert!(matches!(result, Err(CacheError::InvalidRequest(_))));

        let result = fibonacci_handler(State(state), Query(OrderQuery::new("0"))).await;
        assert!(matches!(result, Err(CacheError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_producer_failure_not_cached() {
        let state = test_state(5);

        let result = fibonacci_handler(State(state.clone()), Query(OrderQuery::new("94"))).await;
        assert!(matches!(result, Err(CacheError::Upstream(_))));

        let stats = stats_handler(State(state)).await;
        assert_eq!(stats.total_entries, 0);
        assert_eq!(stats.misses, 1);
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = test_state(3);

        let response = stats_handler(State(state)).await;
        assert_eq!(response.hits, 0);
        assert_eq!(response.misses, 0);
        assert_eq!(response.capacity, 3);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }

    #[tokio::test]
    async fn test_backend_handlers() {
        let response = compute_iterative_handler(Query(OrderQuery::new("4")))
            .await
            .unwrap();
        assert_eq!(*response, FibonacciResponse::new(4, 3));

        let response = compute_recursive_handler(Query(OrderQuery::new("4")))
            .await
            .unwrap();
        assert_eq!(*response, FibonacciResponse::new(4, 3));

        let result = compute_recursive_handler(Query(OrderQuery::new("100"))).await;
        assert!(matches!(result, Err(CacheError::Upstream(_))));
    }

    #[test]
    fn test_from_config() {
        let config = Config::default();
        assert!(AppState::from_config(&config).is_ok());

        let config = Config {
            cache_capacity: 0,
            ..Config::default()
        };
        assert!(matches!(
            AppState::from_config(&config),
            Err(CacheError::Configuration(_))
        ));
    }
}
