//! Common test utilities for tenancy testing.
//!
//! - [`harness`] - Test server construction

pub mod harness;
