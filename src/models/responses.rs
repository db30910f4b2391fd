//! Response DTOs for the cache server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::{Deserialize, Serialize};

use crate::cache::CacheStats;

/// A computed sequence value, as served by the backend and embedded in
/// cache responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FibonacciResponse {
    /// Requested position in the sequence
    pub order: u64,
    /// Value at that position
    pub value: u64,
}

impl FibonacciResponse {
    pub fn new(order: u64, value: u64) -> Self {
        Self { order, value }
    }
}

/// Response body for the cached sequence endpoints
#[derive(Debug, Clone, Serialize)]
pub struct CacheResponse {
    pub fibonacci: FibonacciResponse,
    /// True when served from the cache
    pub cached: bool,
}

impl CacheResponse {
    pub fn new(order: u64, value: u64, cached: bool) -> Self {
        Self {
            fibonacci: FibonacciResponse::new(order, value),
            cached,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of evictions
    pub evictions: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Configured maximum number of entries
    pub capacity: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(stats: &CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
            capacity: stats.capacity,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cache_response_shape() {
        let resp = CacheResponse::new(10, 55, true);
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            value,
            json!({"fibonacci": {"order": 10, "value": 55}, "cached": true})
        );
    }

    #[test]
    fn test_fibonacci_response_deserialize() {
        let resp: FibonacciResponse =
            serde_json::from_str(r#"{"order": 4, "value": 3}"#).unwrap();
        assert_eq!(resp, FibonacciResponse::new(4, 3));
    }

    #[test]
    fn test_stats_response_hit_rate() {
        let stats = CacheStats {
            hits: 80,
            misses: 20,
            evictions: 5,
            total_entries: 5,
            capacity: 5,
        };
        let resp = StatsResponse::new(&stats);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
        assert_eq!(resp.capacity, 5);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
