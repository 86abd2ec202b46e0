//! Application state for the reference tenancy server.
//!
//! Holds the tenant identification strategy and the server configuration,
//! both shared read-only across all requests.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::tenant::TenantIdentificationStrategy;

/// Shared application state.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use fhir_tenancy::{AppState, ServerConfig};
/// use fhir_tenancy::config::HeaderTenantConfig;
/// use fhir_tenancy::tenant::HeaderTenantStrategy;
///
/// let strategy = HeaderTenantStrategy::with_r4_resource_types(HeaderTenantConfig::default());
/// let state = AppState::new(Arc::new(strategy), ServerConfig::default());
/// assert_eq!(state.base_url(), "http://localhost:8080");
/// ```
#[derive(Clone)]
pub struct AppState {
    /// The tenant identification strategy.
    strategy: Arc<dyn TenantIdentificationStrategy>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

impl AppState {
    /// Creates a new AppState with the given strategy and configuration.
    pub fn new(strategy: Arc<dyn TenantIdentificationStrategy>, config: ServerConfig) -> Self {
        Self {
            strategy,
            config: Arc::new(config),
        }
    }

    /// Returns the tenant identification strategy.
    pub fn strategy(&self) -> &dyn TenantIdentificationStrategy {
        &*self.strategy
    }

    /// Returns the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the base URL links are built against.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}
