//! fib_cache - An LRU caching front for a Fibonacci service
//!
//! Resolves sequence values through a bounded LRU cache and computes or
//! fetches them on a miss.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod fetch;
pub mod models;

pub use api::AppState;
pub use config::Config;
pub use fetch::{FetchOrchestrator, Producer, Resolved};
