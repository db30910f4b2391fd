//! Value Producers
//!
//! Implementations of the capability the orchestrator calls on a cache miss.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::error::{CacheError, Result, UpstreamError};
use crate::fetch::sequence::{fibonacci_iterative, fibonacci_recursive};
use crate::models::FibonacciResponse;

// == Producer Trait ==
/// Computes or fetches the value for an order that is not cached.
///
/// May be slow and may fail; the cache never holds its lock across a call.
#[async_trait]
pub trait Producer: Send + Sync {
    /// Produces the value for `order`.
    async fn produce(&self, order: u64) -> std::result::Result<u64, UpstreamError>;

    /// Short label for logs.
    fn name(&self) -> &'static str;
}

// == Iterative Producer ==
/// Computes values in-process with the iterative algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct IterativeProducer;

#[async_trait]
impl Producer for IterativeProducer {
    async fn produce(&self, order: u64) -> std::result::Result<u64, UpstreamError> {
        debug!("Calculating Fibonacci iteratively for order {}", order);
        fibonacci_iterative(order)
    }

    fn name(&self) -> &'static str {
        "iterative"
    }
}

// == Recursive Producer ==
/// Computes values in-process with memoized recursion.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecursiveProducer;

#[async_trait]
impl Producer for RecursiveProducer {
    async fn produce(&self, order: u64) -> std::result::Result<u64, UpstreamError> {
        debug!("Calculating Fibonacci recursively for order {}", order);
        fibonacci_recursive(order)
    }

    fn name(&self) -> &'static str {
        "recursive"
    }
}

// == Remote Producer ==
/// Fetches values from a backend over HTTP.
///
/// Sends `GET {endpoint}?order=N` and expects `{"order": N, "value": V}`.
#[derive(Debug, Clone)]
pub struct RemoteProducer {
    client: reqwest::Client,
    endpoint: String,
}

impl RemoteProducer {
    /// Creates a producer for `path` on the backend at `base_url`.
    ///
    /// # Arguments
    /// * `base_url` - e.g. `http://fibonacci-api:8080`
    /// * `path` - route on the backend, e.g. `/fibonacci`
    /// * `timeout` - per-request timeout
    pub fn new(base_url: &str, path: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CacheError::Configuration(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), path),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Producer for RemoteProducer {
    async fn produce(&self, order: u64) -> std::result::Result<u64, UpstreamError> {
        let url = format!("{}?order={}", self.endpoint, order);
        debug!("Fetching order {} from {}", order, url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let body: FibonacciResponse = response.json().await?;
        if body.order != order {
            return Err(UpstreamError::InvalidResponse(format!(
                "asked for order {} but received order {}",
                order, body.order
            )));
        }

        Ok(body.value)
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}
