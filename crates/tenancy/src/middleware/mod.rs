//! HTTP middleware for tenant identification.
//!
//! - [`tenant`] - Resolves the tenant before routing

pub mod tenant;

pub use tenant::tenant_middleware;
