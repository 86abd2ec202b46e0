//! Tenant identification strategies.
//!
//! Provides the [`TenantIdentificationStrategy`] seam the host calls into and
//! the header-driven implementation, [`HeaderTenantStrategy`].

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::HeaderTenantConfig;
use crate::error::{TenancyError, TenancyResult};
use crate::registry::{ResourceTypeRegistry, StaticResourceTypes};
use crate::tokenizer::UrlPathTokenizer;

use super::decision::HeaderDecision;
use super::id::TenantId;
use super::request::TenantRequest;

/// Prefix marking a FHIR operation segment, e.g. `$everything`.
const OPERATION_PREFIX: char = '$';

/// Strategy invoked by the host to identify tenants and scope URLs.
pub trait TenantIdentificationStrategy: Send + Sync {
    /// Resolves the tenant of an incoming request and stores it on the request.
    ///
    /// Called once per request, before routing.
    fn extract_tenant(&self, request: &mut dyn TenantRequest) -> TenancyResult<()>;

    /// Adjusts the server base URL for a request whose tenant is resolved.
    fn massage_server_base_url(
        &self,
        server_base: &str,
        request: &dyn TenantRequest,
    ) -> TenancyResult<String>;

    /// Rewrites a relative URL so it stays scoped to the request's tenant.
    ///
    /// Never fails; returns the input when there is nothing to rewrite.
    fn resolve_relative_url(&self, relative_url: &str, request: &dyn TenantRequest) -> String;
}

/// Identifies the tenant from a configured request header.
///
/// The header value is mapped as follows:
///
/// | Header value | Result |
/// |--------------|--------|
/// | absent | [`TenancyError::MissingTenantHeader`] |
/// | the configured default alias | tenant `DEFAULT` |
/// | the literal `DEFAULT` | [`TenancyError::ReservedTenantValueUsed`] |
/// | anything else | tenant named by the value |
///
/// # Example
///
/// ```
/// use axum::http::Request;
/// use fhir_tenancy::config::HeaderTenantConfig;
/// use fhir_tenancy::tenant::{HeaderTenantStrategy, TenantIdentificationStrategy, TenantRequest};
///
/// let strategy = HeaderTenantStrategy::with_r4_resource_types(HeaderTenantConfig::default());
/// let (mut parts, _) = Request::builder()
///     .header("X-Tenant-ID", "clinic1")
///     .body(())
///     .unwrap()
///     .into_parts();
///
/// strategy.extract_tenant(&mut parts).unwrap();
/// assert_eq!(parts.tenant_id().unwrap().as_str(), "clinic1");
/// assert_eq!(strategy.resolve_relative_url("Patient/123", &parts), "clinic1/Patient/123");
/// ```
#[derive(Clone)]
pub struct HeaderTenantStrategy {
    config: HeaderTenantConfig,
    registry: Arc<dyn ResourceTypeRegistry>,
}

impl HeaderTenantStrategy {
    /// Creates a strategy with the given resource type registry.
    pub fn new(config: HeaderTenantConfig, registry: Arc<dyn ResourceTypeRegistry>) -> Self {
        Self { config, registry }
    }

    /// Creates a strategy that recognizes the FHIR R4 resource types.
    pub fn with_r4_resource_types(config: HeaderTenantConfig) -> Self {
        Self::new(config, Arc::new(StaticResourceTypes::r4()))
    }

    /// Returns the strategy configuration.
    pub fn config(&self) -> &HeaderTenantConfig {
        &self.config
    }

    /// Classifies the request's tenant header without touching the request.
    pub fn decide(&self, request: &dyn TenantRequest) -> TenancyResult<HeaderDecision> {
        let header = self.config.header_label();
        let value = request
            .header(self.config.header_name())
            .ok_or_else(|| TenancyError::MissingTenantHeader {
                header: header.to_string(),
            })?
            .to_str()
            .map_err(|_| TenancyError::UnreadableTenantHeader {
                header: header.to_string(),
            })?;

        Ok(HeaderDecision::classify(
            value,
            self.config.default_tenant_alias(),
        ))
    }

    fn is_operation(segment: &str) -> bool {
        segment.starts_with(OPERATION_PREFIX)
    }

    fn is_resource_type(&self, segment: &str) -> bool {
        self.registry.is_resource_type(segment)
    }
}

impl fmt::Debug for HeaderTenantStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeaderTenantStrategy")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl TenantIdentificationStrategy for HeaderTenantStrategy {
    fn extract_tenant(&self, request: &mut dyn TenantRequest) -> TenancyResult<()> {
        let decision = self.decide(&*request).inspect_err(|e| {
            warn!(header = %self.config.header_label(), error = %e, "Rejected tenant header");
        })?;

        let tenant_id = match decision {
            HeaderDecision::UseDefault => {
                debug!("Tenant header matched the default alias");
                TenantId::default_tenant()
            }
            HeaderDecision::UseLiteral(value) => TenantId::new(value),
            HeaderDecision::Reject => {
                warn!(
                    header = %self.config.header_label(),
                    "Client sent the reserved default tenant value directly"
                );
                return Err(TenancyError::ReservedTenantValueUsed {
                    header: self.config.header_label().to_string(),
                });
            }
        };

        debug!(tenant_id = %tenant_id, "Resolved tenant from header");
        request.set_tenant_id(tenant_id)
    }

    fn massage_server_base_url(
        &self,
        server_base: &str,
        request: &dyn TenantRequest,
    ) -> TenancyResult<String> {
        if request.tenant_id().is_none() {
            return Err(TenancyError::TenantNotResolved);
        }
        Ok(format!("{}/", server_base))
    }

    fn resolve_relative_url(&self, relative_url: &str, request: &dyn TenantRequest) -> String {
        let tokenizer = UrlPathTokenizer::new(relative_url);
        let Some(first) = tokenizer.peek() else {
            return relative_url.to_string();
        };

        let Some(tenant_id) = request.tenant_id() else {
            return relative_url.to_string();
        };
        if first == tenant_id.as_str() {
            return relative_url.to_string();
        }

        if Self::is_operation(first) || self.is_resource_type(first) {
            format!("{}/{}", tenant_id, relative_url)
        } else {
            relative_url.to_string()
        }
    }
}
