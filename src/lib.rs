//! API key service library.
//!
//! Extracts client API keys from `Authorization: ApiKey <token>` headers and
//! exposes them to route handlers through an authentication middleware.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;

use axum::{Router, middleware as axum_middleware, routing::get};
use tower_http::trace::TraceLayer;

/// Build the HTTP router with public and authenticated routes.
pub fn app() -> Router {
    // Every route in this group requires an API key
    let authenticated_routes = Router::new()
        .route("/api/v1/whoami", get(handlers::whoami::whoami))
        .route_layer(axum_middleware::from_fn(middleware::auth::auth_middleware));

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .merge(authenticated_routes)
        .layer(TraceLayer::new_for_http())
}
