//! Tenant identifier type.
//!
//! This module defines the [`TenantId`] type, the token a resolved request
//! carries for the remainder of its processing.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The canonical identifier of the default tenant.
///
/// Clients never send this value directly; they send the configured default
/// alias, which the resolver maps onto this sentinel.
pub const DEFAULT_TENANT: &str = "DEFAULT";

/// An opaque tenant identifier.
///
/// Any string is a valid tenant identifier, including the empty string.
/// The only reserved form is [`DEFAULT_TENANT`].
///
/// # Examples
///
/// ```
/// use fhir_tenancy::tenant::TenantId;
///
/// let tenant = TenantId::new("clinic1");
/// assert_eq!(tenant.as_str(), "clinic1");
/// assert!(!tenant.is_default());
/// assert!(TenantId::default_tenant().is_default());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(String);

impl TenantId {
    /// Creates a new tenant ID from the given string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the default tenant ID.
    pub fn default_tenant() -> Self {
        Self(DEFAULT_TENANT.to_string())
    }

    /// Returns the tenant ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if this is the default tenant.
    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_TENANT
    }

    /// Consumes the ID and returns the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TenantId({:?})", self.0)
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TenantId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for TenantId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TenantId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for TenantId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for TenantId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TenantId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
