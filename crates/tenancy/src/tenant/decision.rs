//! Classification of a tenant header value.

use super::id::{DEFAULT_TENANT, TenantId};

/// What the resolver does with a header value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderDecision {
    /// The value is the configured default alias; use [`DEFAULT_TENANT`].
    UseDefault,
    /// The value names a concrete tenant.
    UseLiteral(String),
    /// The value is the reserved sentinel sent directly by the client.
    Reject,
}

impl HeaderDecision {
    /// Classifies a header value against the configured default alias.
    ///
    /// Comparisons are exact: no trimming and no case-folding. The alias is
    /// checked first, so an alias of `"DEFAULT"` accepts the literal.
    ///
    /// ```
    /// use fhir_tenancy::tenant::HeaderDecision;
    ///
    /// assert_eq!(HeaderDecision::classify("acme-default", "acme-default"), HeaderDecision::UseDefault);
    /// assert_eq!(HeaderDecision::classify("clinic1", "acme-default"), HeaderDecision::UseLiteral("clinic1".into()));
    /// assert_eq!(HeaderDecision::classify("DEFAULT", "acme-default"), HeaderDecision::Reject);
    /// ```
    pub fn classify(value: &str, default_alias: &str) -> Self {
        if value == default_alias {
            HeaderDecision::UseDefault
        } else if value != DEFAULT_TENANT {
            HeaderDecision::UseLiteral(value.to_string())
        } else {
            HeaderDecision::Reject
        }
    }

    /// Returns the tenant this decision resolves to, or `None` for [`HeaderDecision::Reject`].
    pub fn into_tenant(self) -> Option<TenantId> {
        match self {
            HeaderDecision::UseDefault => Some(TenantId::default_tenant()),
            HeaderDecision::UseLiteral(value) => Some(TenantId::new(value)),
            HeaderDecision::Reject => None,
        }
    }
}
