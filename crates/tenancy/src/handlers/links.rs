//! Tenant-scoped link echo handler.
//!
//! Answers any tenant-resolved path with the links the server would emit
//! for it. Useful to check how a given header and path combine.

use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::TenancyResult;
use crate::extractors::RequestTenant;
use crate::state::AppState;
use crate::tenant::TenantLinks;

/// Handler echoing the tenant-scoped links for the request path.
///
/// # HTTP Request
///
/// `GET [base]/{path}`
///
/// # Response
///
/// ```json
/// {
///   "tenant": "clinic1",
///   "base": "http://localhost:8080/",
///   "relative": "clinic1/Patient/123",
///   "self": "http://localhost:8080/clinic1/Patient/123"
/// }
/// ```
pub async fn link_handler(
    State(state): State<AppState>,
    RequestTenant(tenant): RequestTenant,
    request: Request,
) -> TenancyResult<Response> {
    let path = request.uri().path().trim_start_matches('/').to_string();
    let links = TenantLinks::new(state.strategy(), state.base_url());

    let relative = state.strategy().resolve_relative_url(&path, &request);
    let base = links.base(&request)?;
    let self_link = links.absolute(&path, &request)?;

    debug!(tenant_id = %tenant, path = %path, link = %self_link, "Built tenant-scoped link");

    let body = serde_json::json!({
        "tenant": tenant,
        "base": base,
        "relative": relative,
        "self": self_link,
    });

    Ok((StatusCode::OK, Json(body)).into_response())
}
