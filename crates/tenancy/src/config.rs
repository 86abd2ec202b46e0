//! Configuration for header-based tenant identification.
//!
//! This module provides the strategy configuration ([`HeaderTenantConfig`])
//! and the reference server configuration ([`ServerConfig`]), which supports
//! both programmatic construction and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `TENANCY_HEADER` | X-Tenant-ID | Header carrying the tenant |
//! | `TENANCY_DEFAULT_ALIAS` | default | Header value that selects the default tenant |
//! | `TENANCY_SERVER_PORT` | 8080 | Server port |
//! | `TENANCY_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `TENANCY_LOG_LEVEL` | info | Log level |
//! | `TENANCY_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `TENANCY_BASE_URL` | http://localhost:8080 | Server base URL |
//!
//! # Example
//!
//! ```rust
//! use fhir_tenancy::ServerConfig;
//!
//! let config = ServerConfig {
//!     tenant_header: "X-Clinic".to_string(),
//!     default_tenant_alias: "main".to_string(),
//!     ..Default::default()
//! };
//! let tenant_config = config.tenant_config().unwrap();
//! assert_eq!(tenant_config.default_tenant_alias(), "main");
//! ```

use axum::http::HeaderName;
use clap::Parser;
use url::Url;

use crate::error::{TenancyError, TenancyResult};

/// Default header consulted for the tenant.
pub const DEFAULT_TENANT_HEADER: &str = "X-Tenant-ID";

/// Default header value that aliases the default tenant.
pub const DEFAULT_TENANT_ALIAS: &str = "default";

/// Construction-time settings of the header strategy.
///
/// Both values are fixed for the lifetime of the strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderTenantConfig {
    header_name: HeaderName,
    header_label: String,
    default_tenant_alias: String,
}

impl HeaderTenantConfig {
    /// Creates a configuration, validating the header name.
    pub fn new(header_name: &str, default_tenant_alias: impl Into<String>) -> TenancyResult<Self> {
        let parsed = HeaderName::from_bytes(header_name.as_bytes()).map_err(|_| {
            TenancyError::InvalidHeaderName {
                name: header_name.to_string(),
            }
        })?;

        Ok(Self {
            header_name: parsed,
            header_label: header_name.to_string(),
            default_tenant_alias: default_tenant_alias.into(),
        })
    }

    /// Returns the header consulted for the tenant.
    pub fn header_name(&self) -> &HeaderName {
        &self.header_name
    }

    /// Returns the header name as it was configured, for messages.
    pub fn header_label(&self) -> &str {
        &self.header_label
    }

    /// Returns the header value that selects the default tenant.
    pub fn default_tenant_alias(&self) -> &str {
        &self.default_tenant_alias
    }
}

impl Default for HeaderTenantConfig {
    fn default() -> Self {
        Self {
            header_name: HeaderName::from_static("x-tenant-id"),
            header_label: DEFAULT_TENANT_HEADER.to_string(),
            default_tenant_alias: DEFAULT_TENANT_ALIAS.to_string(),
        }
    }
}

/// Configuration of the reference tenancy server.
///
/// This struct can be constructed from environment variables using [`ServerConfig::from_env`],
/// from command line arguments using [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "tenancy-server")]
#[command(about = "FHIR server front end with header-based tenant identification")]
pub struct ServerConfig {
    /// Header carrying the tenant identifier.
    #[arg(long, env = "TENANCY_HEADER", default_value = DEFAULT_TENANT_HEADER)]
    pub tenant_header: String,

    /// Header value that selects the default tenant.
    #[arg(long, env = "TENANCY_DEFAULT_ALIAS", default_value = DEFAULT_TENANT_ALIAS)]
    pub default_tenant_alias: String,

    /// Port to listen on.
    #[arg(short, long, env = "TENANCY_SERVER_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "TENANCY_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "TENANCY_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Request timeout in seconds.
    #[arg(long, env = "TENANCY_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Base URL for the server (used in tenant-scoped links).
    #[arg(long, env = "TENANCY_BASE_URL", default_value = "http://localhost:8080")]
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            tenant_header: DEFAULT_TENANT_HEADER.to_string(),
            default_tenant_alias: DEFAULT_TENANT_ALIAS.to_string(),
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            request_timeout: 30,
            base_url: "http://localhost:8080".to_string(),
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    pub fn from_env() -> Self {
        Self::try_parse_from(["tenancy-server"]).unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Builds the strategy configuration.
    pub fn tenant_config(&self) -> TenancyResult<HeaderTenantConfig> {
        HeaderTenantConfig::new(&self.tenant_header, self.default_tenant_alias.clone())
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.tenant_header.is_empty() {
            errors.push("Tenant header cannot be empty".to_string());
        } else if let Err(e) = self.tenant_config() {
            errors.push(e.to_string());
        }

        match Url::parse(&self.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => errors.push(format!(
                "Base URL must use http or https, got '{}'",
                url.scheme()
            )),
            Err(e) => errors.push(format!("Invalid base URL '{}': {}", self.base_url, e)),
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    pub fn for_testing() -> Self {
        Self {
            tenant_header: DEFAULT_TENANT_HEADER.to_string(),
            default_tenant_alias: "acme-default".to_string(),
            port: 0,
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            request_timeout: 5,
            base_url: "http://localhost/fhir".to_string(),
        }
    }
}
