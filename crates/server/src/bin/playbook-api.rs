//! playbook-api entry point.
//!
//! Serves the REST API on `0.0.0.0:{port}`.

use std::sync::Arc;

use advisor_client::PlaybookRepository;
use advisor_core::AppConfig;
use advisor_server::{ApiState, create_router, init_tracing};
use anyhow::Result;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = AppConfig::load()?;
    let repository = Arc::new(PlaybookRepository::from_config(&config)?);
    let app = create_router(ApiState::new(repository, config.port));

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, repository = %config.repository, "Playbook API listening");
    tracing::info!("Health check: http://localhost:{}/health", config.port);
    tracing::info!("API docs: http://localhost:{}/api/docs", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
