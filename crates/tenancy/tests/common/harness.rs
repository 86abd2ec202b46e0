//! Tenancy test harness.
//!
//! Builds a test server around the reference app with a given configuration.

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum_test::{TestResponse, TestServer};
use serde_json::Value;

use fhir_tenancy::{HeaderTenantStrategy, ServerConfig, create_app, create_app_with_config};

/// Header used by the test configuration.
pub const X_TENANT_ID: HeaderName = HeaderName::from_static("x-tenant-id");

/// Default alias used by the test configuration.
pub const DEFAULT_ALIAS: &str = "acme-default";

/// Test harness wrapping a running test server.
pub struct TenancyTestHarness {
    /// The test server instance.
    pub server: TestServer,

    /// Server configuration.
    pub config: ServerConfig,
}

impl TenancyTestHarness {
    /// Creates a harness with [`ServerConfig::for_testing`].
    pub fn new() -> Self {
        Self::with_config(ServerConfig::for_testing())
    }

    /// Creates a harness with a custom configuration.
    pub fn with_config(config: ServerConfig) -> Self {
        let app = create_app_with_config(config.clone()).expect("Invalid test configuration");
        let server = TestServer::new(app).expect("Failed to create test server");
        Self { server, config }
    }

    /// Creates a harness around a caller-built strategy.
    pub fn with_strategy(strategy: HeaderTenantStrategy) -> Self {
        let config = ServerConfig::for_testing();
        let app = create_app(Arc::new(strategy), config.clone());
        let server = TestServer::new(app).expect("Failed to create test server");
        Self { server, config }
    }

    /// Issues a GET with the given tenant header value.
    pub async fn get_as(&self, path: &str, tenant: &str) -> TestResponse {
        self.server
            .get(path)
            .add_header(
                X_TENANT_ID,
                HeaderValue::from_str(tenant).expect("Invalid header value"),
            )
            .await
    }

    /// Issues a GET without a tenant header.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.server.get(path).await
    }
}

/// Returns the details text of the first OperationOutcome issue.
pub fn outcome_text(body: &Value) -> &str {
    assert_eq!(body["resourceType"], "OperationOutcome");
    body["issue"][0]["details"]["text"]
        .as_str()
        .expect("OperationOutcome without details text")
}
