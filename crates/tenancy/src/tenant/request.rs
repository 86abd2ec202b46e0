//! The per-request view the strategy reads from and writes to.
//!
//! The resolved [`TenantId`] is kept in the request extensions, so anything
//! downstream of the middleware (handlers, extractors, link generation) sees
//! the same value.

use axum::http::{
    Extensions, HeaderMap, HeaderName, HeaderValue, Request, request::Parts,
};

use crate::error::{TenancyError, TenancyResult};

use super::id::TenantId;

/// A request whose headers can be read and whose tenant slot can be set once.
pub trait TenantRequest {
    /// Looks up a header value (names are case-insensitive).
    fn header(&self, name: &HeaderName) -> Option<&HeaderValue>;

    /// Returns the resolved tenant, if any.
    fn tenant_id(&self) -> Option<&TenantId>;

    /// Stores the resolved tenant.
    ///
    /// Fails with [`TenancyError::TenantAlreadyResolved`] if a tenant is
    /// already present; the stored value is left untouched in that case.
    fn set_tenant_id(&mut self, tenant: TenantId) -> TenancyResult<()>;
}

fn set_once(extensions: &mut Extensions, tenant: TenantId) -> TenancyResult<()> {
    if let Some(existing) = extensions.get::<TenantId>() {
        return Err(TenancyError::TenantAlreadyResolved {
            existing: existing.clone(),
        });
    }
    extensions.insert(tenant);
    Ok(())
}

fn header<'a>(headers: &'a HeaderMap, name: &HeaderName) -> Option<&'a HeaderValue> {
    headers.get(name)
}

impl TenantRequest for Parts {
    fn header(&self, name: &HeaderName) -> Option<&HeaderValue> {
        header(&self.headers, name)
    }

    fn tenant_id(&self) -> Option<&TenantId> {
        self.extensions.get::<TenantId>()
    }

    fn set_tenant_id(&mut self, tenant: TenantId) -> TenancyResult<()> {
        set_once(&mut self.extensions, tenant)
    }
}

impl<B> TenantRequest for Request<B> {
    fn header(&self, name: &HeaderName) -> Option<&HeaderValue> {
        header(self.headers(), name)
    }

    fn tenant_id(&self) -> Option<&TenantId> {
        self.extensions().get::<TenantId>()
    }

    fn set_tenant_id(&mut self, tenant: TenantId) -> TenancyResult<()> {
        set_once(self.extensions_mut(), tenant)
    }
}
