//! list_playbooks tool implementation.

use advisor_client::PlaybookRepository;
use advisor_core::Error;
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output from the list_playbooks tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListPlaybooksOutput {
    /// Playbook identifiers in index order.
    pub playbooks: Vec<String>,
    pub count: usize,
}

/// Implementation of the list_playbooks tool.
///
/// An unreachable repository yields an empty list, not an error.
pub async fn list_impl(repository: &PlaybookRepository) -> Result<CallToolResult, McpError> {
    let playbooks = repository.list_documents().await;
    let output = ListPlaybooksOutput { count: playbooks.len(), playbooks };
    let json = serde_json::to_string_pretty(&output).map_err(Error::from)?;

    Ok(CallToolResult::success(vec![Content::text(json)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{repository, result_text, sample_source};

    #[tokio::test]
    async fn test_list() {
        let repo = repository(sample_source());
        let result = list_impl(&repo).await.unwrap();

        let output: ListPlaybooksOutput = serde_json::from_str(&result_text(&result)).unwrap();
        assert_eq!(output.count, 3);
        assert_eq!(output.playbooks[0], "IR-S3_Public_Access");
        assert!(!output.playbooks.iter().any(|p| p == "README"));
    }

    #[tokio::test]
    async fn test_list_remote_down() {
        let source = sample_source();
        source.set_unavailable(true);
        let repo = repository(source);

        let result = list_impl(&repo).await.unwrap();
        let output: ListPlaybooksOutput = serde_json::from_str(&result_text(&result)).unwrap();
        assert_eq!(output.count, 0);
        assert!(output.playbooks.is_empty());
    }
}
