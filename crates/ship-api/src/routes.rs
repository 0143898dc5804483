//! # Routes
//!
//! Axum router configuration for the shipping quote API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - GET  /health - Health check
/// - POST /api/v1/quote - Quote all registered methods for a cart
/// - GET  /api/v1/methods - List registered methods
/// - GET  /api/v1/methods/{method_id} - Get method info
/// - POST /api/v1/methods/{method_id}/quote - Quote a single method
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - the storefront calls this from its own origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Quotes
        .route("/quote", post(handlers::quote))
        .route(
            "/methods/{method_id}/quote",
            post(handlers::quote_for_method),
        )
        // Method listing
        .route("/methods", get(handlers::list_methods))
        .route("/methods/{method_id}", get(handlers::get_method));

    Router::new()
        // Health check at root
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        // API v1
        .nest("/api/v1", api_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}
