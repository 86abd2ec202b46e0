//! Resolved tenant extractor.
//!
//! Reads the tenant stored by [`tenant_middleware`](crate::middleware::tenant::tenant_middleware).

use axum::{extract::FromRequestParts, http::request::Parts};
use tracing::error;

use crate::error::TenancyError;
use crate::tenant::{TenantId, TenantRequest};

/// Axum extractor for the tenant resolved for this request.
///
/// Handlers mounted without the tenant middleware get a 500 response, since
/// that is a wiring mistake rather than a client error.
///
/// # Example
///
/// ```rust,ignore
/// use fhir_tenancy::extractors::RequestTenant;
///
/// async fn handler(RequestTenant(tenant): RequestTenant) {
///     println!("Tenant ID: {}", tenant);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequestTenant(
    /// The resolved tenant.
    pub TenantId,
);

impl RequestTenant {
    /// Returns the tenant ID as a string.
    pub fn tenant_id(&self) -> &str {
        self.0.as_str()
    }

    /// Returns `true` if this is the default tenant.
    pub fn is_default(&self) -> bool {
        self.0.is_default()
    }
}

impl std::fmt::Display for RequestTenant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<S> FromRequestParts<S> for RequestTenant
where
    S: Send + Sync,
{
    type Rejection = TenancyError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.tenant_id() {
            Some(tenant_id) => Ok(RequestTenant(tenant_id.clone())),
            None => {
                error!(path = %parts.uri.path(), "Handler requires a tenant but none was resolved");
                Err(TenancyError::TenantNotResolved)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    #[tokio::test]
    async fn test_extracts_resolved_tenant() {
        let (mut parts, _) = Request::builder().body(()).unwrap().into_parts();
        parts.set_tenant_id(TenantId::new("clinic1")).unwrap();

        let tenant = RequestTenant::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(tenant.tenant_id(), "clinic1");
        assert!(!tenant.is_default());
        assert_eq!(tenant.to_string(), "clinic1");
    }

    #[tokio::test]
    async fn test_missing_tenant_is_rejected() {
        let (mut parts, _) = Request::builder().body(()).unwrap().into_parts();

        let err = RequestTenant::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();
        assert_eq!(err, TenancyError::TenantNotResolved);
    }
}
