//! Health check endpoint handlers.
//!
//! These endpoints sit outside tenant resolution so load balancers can probe
//! the server without knowing any tenant.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// # HTTP Request
///
/// `GET [base]/health`
pub async fn health_handler(State(state): State<AppState>) -> Response {
    debug!("Processing health check request");

    let health_response = serde_json::json!({
        "status": "healthy",
        "tenantHeader": state.config().tenant_header,
    });

    (StatusCode::OK, Json(health_response)).into_response()
}

/// Handler for a liveness probe.
///
/// # HTTP Request
///
/// `GET [base]/_liveness`
pub async fn liveness_handler() -> impl IntoResponse {
    StatusCode::OK
}
