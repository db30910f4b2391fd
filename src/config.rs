//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::DEFAULT_CAPACITY;
use crate::error::{CacheError, Result};

/// Which half of the system this process serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerRole {
    /// Caching front that resolves orders through the LRU cache
    Cache,
    /// Uncached computation service
    Backend,
}

impl FromStr for ServerRole {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cache" => Ok(ServerRole::Cache),
            "backend" => Ok(ServerRole::Backend),
            other => Err(format!("unknown server role '{}'", other)),
        }
    }
}

/// Where cache misses get their values from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProducerMode {
    /// Compute in-process
    Local,
    /// Fetch from the upstream backend over HTTP
    Remote,
}

impl FromStr for ProducerMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(ProducerMode::Local),
            "remote" => Ok(ProducerMode::Remote),
            other => Err(format!("unknown producer mode '{}'", other)),
        }
    }
}

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of orders the cache can hold
    pub cache_capacity: usize,
    /// HTTP server port
    pub server_port: u16,
    /// Cache front or uncached backend
    pub server_role: ServerRole,
    /// Producer used on cache misses
    pub producer: ProducerMode,
    /// Base URL of the backend for the remote producer
    pub upstream_url: String,
    /// Request timeout for the remote producer in milliseconds
    pub upstream_timeout_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cached orders (default: 5)
    /// - `SERVER_PORT` - HTTP server port (default: 8081)
    /// - `SERVER_ROLE` - `cache` or `backend` (default: cache)
    /// - `PRODUCER` - `local` or `remote` (default: local)
    /// - `UPSTREAM_URL` - Backend base URL (default: http://fibonacci-api:8080)
    /// - `UPSTREAM_TIMEOUT_MS` - Remote request timeout (default: 5000)
    ///
    /// A variable that is set but cannot be parsed is rejected rather than
    /// silently replaced by its default.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let config = Self {
            cache_capacity: parse_var("CACHE_CAPACITY", defaults.cache_capacity)?,
            server_port: parse_var("SERVER_PORT", defaults.server_port)?,
            server_role: parse_var("SERVER_ROLE", defaults.server_role)?,
            producer: parse_var("PRODUCER", defaults.producer)?,
            upstream_url: env::var("UPSTREAM_URL").unwrap_or(defaults.upstream_url),
            upstream_timeout_ms: parse_var("UPSTREAM_TIMEOUT_MS", defaults.upstream_timeout_ms)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Rejects values that parse but make no sense.
    pub fn validate(&self) -> Result<()> {
        if self.cache_capacity == 0 {
            return Err(CacheError::Configuration(
                "CACHE_CAPACITY must be at least 1".to_string(),
            ));
        }
        if self.upstream_timeout_ms == 0 {
            return Err(CacheError::Configuration(
                "UPSTREAM_TIMEOUT_MS must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Remote producer timeout as a Duration.
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_millis(self.upstream_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CAPACITY,
            server_port: 8081,
            server_role: ServerRole::Cache,
            producer: ProducerMode::Local,
            upstream_url: "http://fibonacci-api:8080".to_string(),
            upstream_timeout_ms: 5000,
        }
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|e: T::Err| {
            CacheError::Configuration(format!("invalid {}='{}': {}", name, raw, e))
        }),
        Err(_) => Ok(default),
    }
}
