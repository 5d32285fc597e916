//! playbook-mcp entry point.
//!
//! Boots the MCP server on stdio transport.
//! Logging goes to stderr to avoid interfering with the JSON-RPC protocol on stdout.

use std::sync::Arc;

use advisor_client::PlaybookRepository;
use advisor_core::AppConfig;
use advisor_server::{PlaybookAdvisorServer, init_tracing};
use anyhow::Result;
use rmcp::service::serve_server;
use rmcp::transport::io::stdio;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = AppConfig::load()?;
    tracing::info!(repository = %config.repository, "Starting playbook-mcp server on stdio transport");

    let repository = Arc::new(PlaybookRepository::from_config(&config)?);
    let handler = PlaybookAdvisorServer::new(repository);
    let transport = stdio();
    let server = serve_server(handler, transport).await?;

    server.waiting().await?;

    Ok(())
}
