//! Header-based tenant identification.
//!
//! This module identifies the tenant of a request from a configurable HTTP
//! header and keeps relative URLs scoped to that tenant.
//!
//! # Header Mapping
//!
//! | Header value | Resolved tenant |
//! |--------------|-----------------|
//! | absent | error (400) |
//! | configured default alias | `DEFAULT` |
//! | literal `DEFAULT` | error (400) |
//! | anything else, including `""` | the value itself |
//!
//! The literal `DEFAULT` is refused so clients cannot address the default
//! tenant without going through the configured alias.
//!
//! # URL Rewriting
//!
//! Relative URLs whose first segment is a resource type (`Patient/123`) or an
//! operation (`$everything`) get the tenant prepended. URLs that already start
//! with the tenant, or that start with anything else (`metadata`), are left
//! as they are.
//!
//! # Example
//!
//! ```rust
//! use axum::http::Request;
//! use fhir_tenancy::config::HeaderTenantConfig;
//! use fhir_tenancy::tenant::{HeaderTenantStrategy, TenantIdentificationStrategy, TenantRequest};
//!
//! let config = HeaderTenantConfig::new("X-Tenant-ID", "acme-default").unwrap();
//! let strategy = HeaderTenantStrategy::with_r4_resource_types(config);
//!
//! let (mut parts, _) = Request::builder()
//!     .header("X-Tenant-ID", "acme-default")
//!     .body(())
//!     .unwrap()
//!     .into_parts();
//! strategy.extract_tenant(&mut parts).unwrap();
//!
//! assert!(parts.tenant_id().unwrap().is_default());
//! assert_eq!(strategy.resolve_relative_url("$everything", &parts), "DEFAULT/$everything");
//! ```

mod decision;
mod id;
mod links;
mod request;
mod strategy;

pub use decision::HeaderDecision;
pub use id::{DEFAULT_TENANT, TenantId};
pub use links::TenantLinks;
pub use request::TenantRequest;
pub use strategy::{HeaderTenantStrategy, TenantIdentificationStrategy};
