//! Route configuration for the reference tenancy server.

pub mod tenant_routes;

pub use tenant_routes::create_routes;
