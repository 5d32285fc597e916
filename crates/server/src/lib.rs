//! Presentation layers for the playbook advisor.
//!
//! Two front ends share one [`advisor_client::PlaybookRepository`]:
//! - an MCP server on stdio (`playbook-mcp`)
//! - a REST API (`playbook-api`)
//!
//! Both render repository results through [`render`] and fall back to
//! [`guidance`] only where noted.

pub mod api;
pub mod error;
pub mod guidance;
pub mod handler;
pub mod render;
pub mod tools;

use tracing_subscriber::EnvFilter;

pub use api::{ApiState, create_router};
pub use handler::PlaybookAdvisorServer;

/// Install the JSON log subscriber.
///
/// Logs go to stderr so they never interleave with the MCP protocol on stdout.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();
}
