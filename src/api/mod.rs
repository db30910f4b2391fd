//! API Module
//!
//! HTTP handlers and routing.
//!
//! # Endpoints (cache role)
//! - `GET /fibonacci?order=N` - Iterative value through the cache
//! - `GET /recursive-fibonacci?order=N` - Recursive value through the cache
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint
//!
//! The backend role serves the same sequence routes without a cache.

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::{create_backend_router, create_router};
