//! cache_purge tool implementation.
//!
//! Removes expired playbook bodies from the in-memory cache.

use advisor_client::PlaybookRepository;
use advisor_core::Error;
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output from the cache_purge tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CachePurgeOutput {
    /// Number of entries deleted.
    pub deleted: usize,
}

/// Implementation of the cache_purge tool.
pub async fn purge_impl(repository: &PlaybookRepository) -> Result<CallToolResult, McpError> {
    let deleted = repository.cache().purge_expired().await;
    tracing::debug!(deleted, "purged expired cache entries");

    let output = CachePurgeOutput { deleted };
    let json = serde_json::to_string_pretty(&output).map_err(Error::from)?;

    Ok(CallToolResult::success(vec![Content::text(json)]))
}
