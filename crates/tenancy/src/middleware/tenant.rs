//! Tenant identification middleware.
//!
//! Runs the configured strategy before routing and stores the resolved
//! [`TenantId`](crate::tenant::TenantId) in the request extensions. Requests
//! the strategy rejects never reach a handler.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use crate::state::AppState;
use crate::tenant::TenantRequest;

/// Middleware function for tenant extraction.
///
/// This can be used with `axum::middleware::from_fn_with_state`.
pub async fn tenant_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Err(e) = state.strategy().extract_tenant(&mut request) {
        if !e.is_client_error() {
            error!(error = %e, path = %request.uri().path(), "Tenant resolution failed");
        }
        return e.into_response();
    }

    if let Some(tenant_id) = request.tenant_id() {
        debug!(tenant_id = %tenant_id, path = %request.uri().path(), "Extracted tenant ID");
    }

    next.run(request).await
}
