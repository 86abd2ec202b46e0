//! FHIR tenancy reference server.
//!
//! Serves the header-based tenant identification strategy over HTTP.

use clap::Parser;
use fhir_tenancy::{ServerConfig, create_app_with_config, init_logging};
use tracing::info;

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        tenant_header = %config.tenant_header,
        default_tenant_alias = %config.default_tenant_alias,
        "Starting FHIR tenancy server"
    );

    let app = create_app_with_config(config.clone())
        .map_err(|e| anyhow::anyhow!("Invalid tenancy configuration: {}", e))?;
    serve(app, &config).await
}
