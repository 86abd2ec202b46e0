//! Integration tests for header-based tenant resolution.
//!
//! Exercises the reference app end to end:
//! - Header mapping (literal, default alias, reserved value, missing)
//! - Tenant-scoped link generation
//! - Unscoped endpoints

mod common;

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use common::harness::{DEFAULT_ALIAS, TenancyTestHarness, X_TENANT_ID, outcome_text};
use fhir_tenancy::registry::StaticResourceTypes;
use fhir_tenancy::{HeaderTenantConfig, HeaderTenantStrategy, ServerConfig};
use serde_json::Value;

// =============================================================================
// Header Mapping Tests
// =============================================================================

mod header_mapping {
    use super::*;

    #[tokio::test]
    async fn test_literal_header_is_tenant() {
        let harness = TenancyTestHarness::new();

        let response = harness.get_as("/Patient/123", "clinic1").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["tenant"], "clinic1");
    }

    #[tokio::test]
    async fn test_default_alias_is_default_tenant() {
        let harness = TenancyTestHarness::new();

        let response = harness.get_as("/Patient/123", DEFAULT_ALIAS).await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["tenant"], "DEFAULT");
    }

    #[tokio::test]
    async fn test_reserved_value_is_rejected() {
        let harness = TenancyTestHarness::new();

        let response = harness.get_as("/Patient/123", "DEFAULT").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["issue"][0]["code"], "invalid");
        assert!(outcome_text(&body).contains("Invalid X-Tenant-ID value"));
    }

    #[tokio::test]
    async fn test_missing_header_is_rejected() {
        let harness = TenancyTestHarness::new();

        let response = harness.get("/Patient/123").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert!(outcome_text(&body).contains("multitenant server"));
        assert!(outcome_text(&body).starts_with("TENANCY-0307"));
    }

    #[tokio::test]
    async fn test_header_name_is_case_insensitive() {
        let harness = TenancyTestHarness::new();

        let response = harness
            .server
            .get("/Patient/123")
            .add_header(
                HeaderName::from_static("x-tenant-id"),
                HeaderValue::from_static("clinic1"),
            )
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["tenant"], "clinic1");
    }

    #[tokio::test]
    async fn test_custom_header_and_alias() {
        let config = ServerConfig {
            tenant_header: "X-Clinic".to_string(),
            default_tenant_alias: "main".to_string(),
            ..ServerConfig::for_testing()
        };
        let harness = TenancyTestHarness::with_config(config);

        // The standard header is ignored once another one is configured
        let response = harness.get_as("/Patient/123", "clinic1").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert!(outcome_text(&body).contains("X-Clinic"));

        let response = harness
            .server
            .get("/Patient/123")
            .add_header(
                HeaderName::from_static("x-clinic"),
                HeaderValue::from_static("main"),
            )
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["tenant"], "DEFAULT");
    }
}

// =============================================================================
// Link Generation Tests
// =============================================================================

mod link_generation {
    use super::*;

    #[tokio::test]
    async fn test_resource_link_is_tenant_scoped() {
        let harness = TenancyTestHarness::new();

        let response = harness.get_as("/Patient/123", "clinic1").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["base"], "http://localhost/fhir/");
        assert_eq!(body["relative"], "clinic1/Patient/123");
        assert_eq!(body["self"], "http://localhost/fhir/clinic1/Patient/123");
    }

    #[tokio::test]
    async fn test_operation_link_is_tenant_scoped() {
        let harness = TenancyTestHarness::new();

        let response = harness.get_as("/$everything", "clinic1").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["relative"], "clinic1/$everything");
    }

    #[tokio::test]
    async fn test_scoped_path_is_not_prefixed_twice() {
        let harness = TenancyTestHarness::new();

        let response = harness.get_as("/clinic1/Patient/123", "clinic1").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["relative"], "clinic1/Patient/123");
        assert_eq!(body["self"], "http://localhost/fhir/clinic1/Patient/123");
    }

    #[tokio::test]
    async fn test_metadata_link_is_not_prefixed() {
        let harness = TenancyTestHarness::new();

        let response = harness.get_as("/metadata", "clinic1").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["relative"], "metadata");
        assert_eq!(body["self"], "http://localhost/fhir/metadata");
    }

    #[tokio::test]
    async fn test_default_tenant_links() {
        let harness = TenancyTestHarness::new();

        let response = harness.get_as("/Observation/9", DEFAULT_ALIAS).await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["relative"], "DEFAULT/Observation/9");
    }

    #[tokio::test]
    async fn test_injected_resource_types() {
        let strategy = HeaderTenantStrategy::new(
            HeaderTenantConfig::new("X-Tenant-ID", DEFAULT_ALIAS).unwrap(),
            Arc::new(StaticResourceTypes::new(["Widget"])),
        );
        let harness = TenancyTestHarness::with_strategy(strategy);

        let response = harness.get_as("/Widget/1", "clinic1").await;
        let body: Value = response.json();
        assert_eq!(body["relative"], "clinic1/Widget/1");

        let response = harness.get_as("/Patient/1", "clinic1").await;
        let body: Value = response.json();
        assert_eq!(body["relative"], "Patient/1");
    }
}

// =============================================================================
// Unscoped Endpoint Tests
// =============================================================================

mod unscoped_endpoints {
    use super::*;

    #[tokio::test]
    async fn test_health_needs_no_tenant() {
        let harness = TenancyTestHarness::new();

        let response = harness.get("/health").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["tenantHeader"], "X-Tenant-ID");
    }

    #[tokio::test]
    async fn test_liveness_needs_no_tenant() {
        let harness = TenancyTestHarness::new();

        harness.get("/_liveness").await.assert_status_ok();
    }

    #[tokio::test]
    async fn test_health_ignores_reserved_value() {
        let harness = TenancyTestHarness::new();

        harness
            .get_as("/health", "DEFAULT")
            .await
            .assert_status_ok();
    }
}

#[test]
fn test_harness_header_constant() {
    assert_eq!(X_TENANT_ID.as_str(), "x-tenant-id");
}
