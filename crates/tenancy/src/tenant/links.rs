//! Tenant-scoped absolute links.

use crate::error::TenancyResult;

use super::request::TenantRequest;
use super::strategy::TenantIdentificationStrategy;

/// Builds absolute links that stay inside the request's tenant.
///
/// Joins the massaged server base with the rewritten relative URL, which is
/// how response links (`Location`, Bundle `link.url`, `fullUrl`) are composed.
pub struct TenantLinks<'a> {
    strategy: &'a dyn TenantIdentificationStrategy,
    server_base: &'a str,
}

impl<'a> TenantLinks<'a> {
    /// Creates a link builder for the given server base (without trailing `/`).
    pub fn new(strategy: &'a dyn TenantIdentificationStrategy, server_base: &'a str) -> Self {
        Self {
            strategy,
            server_base: server_base.trim_end_matches('/'),
        }
    }

    /// Returns the server base for this request, ending in `/`.
    pub fn base(&self, request: &dyn TenantRequest) -> TenancyResult<String> {
        self.strategy
            .massage_server_base_url(self.server_base, request)
    }

    /// Returns the absolute, tenant-scoped form of `relative_url`.
    ///
    /// Leading separators on `relative_url` are dropped since the base
    /// already ends in one.
    pub fn absolute(&self, relative_url: &str, request: &dyn TenantRequest) -> TenancyResult<String> {
        let base = self.base(request)?;
        let relative = self
            .strategy
            .resolve_relative_url(relative_url.trim_start_matches('/'), request);
        Ok(format!("{}{}", base, relative))
    }
}
