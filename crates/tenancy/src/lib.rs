//! # fhir-tenancy - Header-Based Tenant Identification for FHIR Servers
//!
//! This crate identifies the tenant of each request to a multi-tenant FHIR
//! REST server from a configurable HTTP header, and keeps the relative URLs
//! the server emits scoped to that tenant.
//!
//! ## Features
//!
//! - **Tenant resolution**: Maps a header value to a tenant, with a configurable
//!   alias for the `DEFAULT` tenant
//! - **URL rewriting**: Prefixes resource and operation URLs with the tenant
//! - **Axum integration**: Middleware, extractor and OperationOutcome errors
//! - **Pluggable resource types**: The set of resource type names is injected
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fhir_tenancy::{create_app_with_config, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::default();
//!     let app = create_app_with_config(config)?;
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Tenant Header
//!
//! | Header value | Outcome |
//! |--------------|---------|
//! | absent | 400, OperationOutcome `invalid` |
//! | the default alias | tenant `DEFAULT` |
//! | `DEFAULT` | 400, OperationOutcome `invalid` |
//! | anything else | tenant named by the value |
//!
//! ## Architecture
//!
//! - [`tenant`] - Tenant IDs, the strategy and link building
//! - [`tokenizer`] - URL path segment tokenizer
//! - [`registry`] - Resource type name lookup
//! - [`error`] - Error types and OperationOutcome generation
//! - [`config`] - Strategy and server configuration
//! - [`state`] - Application state
//! - [`middleware`] - Tenant resolution middleware
//! - [`extractors`] - Resolved tenant extractor
//! - [`handlers`] - Reference HTTP handlers
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod registry;
pub mod routing;
pub mod state;
pub mod tenant;
pub mod tokenizer;

// Re-export commonly used types
pub use config::{HeaderTenantConfig, ServerConfig};
pub use error::{TenancyError, TenancyResult};
pub use state::AppState;
pub use tenant::{HeaderTenantStrategy, TenantId, TenantIdentificationStrategy};

use std::sync::Arc;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;

/// Creates the Axum application from configuration.
///
/// The strategy recognizes the FHIR R4 resource types. Fails if the
/// configured tenant header is not a valid header name.
pub fn create_app_with_config(config: ServerConfig) -> TenancyResult<Router> {
    let strategy = HeaderTenantStrategy::with_r4_resource_types(config.tenant_config()?);
    Ok(create_app(Arc::new(strategy), config))
}

/// Creates the Axum application with a custom strategy.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use fhir_tenancy::{create_app, HeaderTenantConfig, HeaderTenantStrategy, ServerConfig};
/// use fhir_tenancy::registry::StaticResourceTypes;
///
/// let strategy = HeaderTenantStrategy::new(
///     HeaderTenantConfig::new("X-Clinic", "main")?,
///     Arc::new(StaticResourceTypes::new(["Patient", "Observation"])),
/// );
/// let app = create_app(Arc::new(strategy), ServerConfig::default());
/// ```
pub fn create_app(strategy: Arc<dyn TenantIdentificationStrategy>, config: ServerConfig) -> Router {
    info!(
        tenant_header = %config.tenant_header,
        base_url = %config.base_url,
        "Creating tenancy server"
    );

    let request_timeout = config.request_timeout;
    let state = AppState::new(strategy, config);
    let router = routing::create_routes(state);

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(request_timeout),
        ));

    router.layer(service_builder)
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("fhir_tenancy={},tower_http=debug", level)));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
