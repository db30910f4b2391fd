//! API Routes
//!
//! Configures the Axum routers for both server roles.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    compute_iterative_handler, compute_recursive_handler, fibonacci_handler, health_handler,
    recursive_fibonacci_handler, stats_handler, AppState,
};

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Creates the caching front router.
///
/// # Endpoints
/// - `GET /fibonacci?order=N` - Cached iterative value
/// - `GET /recursive-fibonacci?order=N` - Cached recursive value
/// - `GET /stats` - Get cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/fibonacci", get(fibonacci_handler))
        .route("/recursive-fibonacci", get(recursive_fibonacci_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Creates the uncached backend router that remote producers talk to.
pub fn create_backend_router() -> Router {
    Router::new()
        .route("/fibonacci", get(compute_iterative_handler))
        .route("/recursive-fibonacci", get(compute_recursive_handler))
        .route("/health", get(health_handler))
        .layer(cors())
        .layer(TraceLayer::new_for_http())
}
