//! Error types for tenant identification.
//!
//! Every failure is rendered to the client as a FHIR OperationOutcome:
//!
//! | Error | HTTP Status | FHIR Issue Code |
//! |-------|-------------|-----------------|
//! | MissingTenantHeader | 400 | invalid |
//! | ReservedTenantValueUsed | 400 | invalid |
//! | UnreadableTenantHeader | 400 | invalid |
//! | TenantNotResolved | 500 | exception |
//! | TenantAlreadyResolved | 500 | exception |
//! | InvalidHeaderName | 500 | exception |
//!
//! The first three are caused by the client and are never retried. The
//! remaining ones indicate the host invoked the strategy out of order or was
//! misconfigured.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::tenant::TenantId;

/// The error type for tenant identification and URL rewriting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TenancyError {
    /// The configured tenant header is absent from the request.
    #[error(
        "This is the base URL of a multitenant server. Requests must include the tenant header '{header}'"
    )]
    MissingTenantHeader {
        /// The configured header name.
        header: String,
    },

    /// The header holds the reserved default-tenant literal instead of the alias.
    #[error("Invalid {header} value")]
    ReservedTenantValueUsed {
        /// The configured header name.
        header: String,
    },

    /// The header is present but its value is not readable text.
    #[error("Header {header} contains characters that cannot be read as a tenant identifier")]
    UnreadableTenantHeader {
        /// The configured header name.
        header: String,
    },

    /// An operation needed the request's tenant before it was resolved.
    #[error("the tenant ID is not populated on this request")]
    TenantNotResolved,

    /// The tenant was resolved a second time for the same request.
    #[error("the tenant ID is already set to '{existing}' on this request")]
    TenantAlreadyResolved {
        /// The tenant that was already stored.
        existing: TenantId,
    },

    /// The configured header name is not a valid HTTP header name.
    #[error("invalid tenant header name: '{name}'")]
    InvalidHeaderName {
        /// The rejected name.
        name: String,
    },
}

impl TenancyError {
    /// Returns the stable message code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            TenancyError::MissingTenantHeader { .. } => "TENANCY-0307",
            TenancyError::ReservedTenantValueUsed { .. } => "TENANCY-0308",
            TenancyError::UnreadableTenantHeader { .. } => "TENANCY-0309",
            TenancyError::TenantNotResolved => "TENANCY-0310",
            TenancyError::TenantAlreadyResolved { .. } => "TENANCY-0311",
            TenancyError::InvalidHeaderName { .. } => "TENANCY-0312",
        }
    }

    /// Returns `true` if the client caused this error.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            TenancyError::MissingTenantHeader { .. }
                | TenancyError::ReservedTenantValueUsed { .. }
                | TenancyError::UnreadableTenantHeader { .. }
        )
    }

    /// Returns the HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn issue_code(&self) -> &'static str {
        if self.is_client_error() {
            "invalid"
        } else {
            "exception"
        }
    }
}

impl IntoResponse for TenancyError {
    fn into_response(self) -> Response {
        let details = format!("{}: {}", self.code(), self);
        let operation_outcome = create_operation_outcome("error", self.issue_code(), &details);
        (self.status_code(), Json(operation_outcome)).into_response()
    }
}

/// Creates a FHIR OperationOutcome resource.
///
/// # Arguments
///
/// * `severity` - The issue severity (fatal, error, warning, information)
/// * `code` - The FHIR issue code
/// * `details` - Human-readable details
pub fn create_operation_outcome(severity: &str, code: &str, details: &str) -> serde_json::Value {
    serde_json::json!({
        "resourceType": "OperationOutcome",
        "issue": [{
            "severity": severity,
            "code": code,
            "details": {
                "text": details
            }
        }]
    })
}

/// Result type alias for tenancy operations.
pub type TenancyResult<T> = Result<T, TenancyError>;
