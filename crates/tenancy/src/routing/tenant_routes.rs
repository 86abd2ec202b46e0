//! Route configuration.
//!
//! Defines the routes of the reference tenancy server.

use axum::{Router, middleware, routing::get};

use crate::handlers;
use crate::middleware::tenant_middleware;
use crate::state::AppState;

/// Creates all routes.
///
/// # Routes
///
/// ## Unscoped (no tenant header required)
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness probe
///
/// ## Tenant-scoped
/// - `GET /{*path}` - Link echo for any path, after tenant resolution
pub fn create_routes(state: AppState) -> Router {
    let scoped = Router::new()
        .route("/{*path}", get(handlers::link_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            tenant_middleware,
        ));

    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/_liveness", get(handlers::liveness_handler))
        .merge(scoped)
        .with_state(state)
}
