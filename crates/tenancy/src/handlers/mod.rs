//! HTTP request handlers for the reference tenancy server.
//!
//! - [`health`] - Health and liveness probes (no tenant required)
//! - [`links`] - Tenant-scoped link echo

pub mod health;
pub mod links;

pub use health::{health_handler, liveness_handler};
pub use links::link_handler;
