//! get_playbook tool implementation.
//!
//! Looks up a playbook by exact name, or searches playbook names for a
//! scenario and returns the first match in full with the rest summarized.

use advisor_client::PlaybookRepository;
use advisor_core::Error;
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::render::{PlaybookDetail, ScenarioReport};

/// Parameters for the get_playbook tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetPlaybookParams {
    /// Incident scenario matched against playbook names (e.g. "ransom", "credentials").
    pub scenario: String,

    /// Exact playbook name. When set, the scenario search is skipped.
    #[serde(default)]
    pub playbook_name: Option<String>,
}

/// Implementation of the get_playbook tool.
pub async fn playbook_impl(
    repository: &PlaybookRepository, params: GetPlaybookParams,
) -> Result<CallToolResult, McpError> {
    let json = match params.playbook_name.as_deref().filter(|n| !n.is_empty()) {
        Some(name) => {
            let content = repository.fetch_document(name).await;
            if content.is_empty() {
                return Err(Error::NotFound(format!("Playbook not found: {name}")).into());
            }
            serde_json::to_string_pretty(&PlaybookDetail::new(name, content))
        }
        None => {
            let scenario = params.scenario.trim();
            if scenario.is_empty() {
                return Err(Error::InvalidInput("scenario cannot be empty".into()).into());
            }
            let results = repository.search_by_free_text(scenario).await;
            let report = ScenarioReport::from_results(results)
                .ok_or_else(|| Error::NotFound(format!("No playbooks found for scenario: {scenario}")))?;
            serde_json::to_string_pretty(&report)
        }
    }
    .map_err(Error::from)?;

    Ok(CallToolResult::success(vec![Content::text(json)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{IAM_PLAYBOOK, repository, result_text, sample_source};

    fn params(scenario: &str, playbook_name: Option<&str>) -> GetPlaybookParams {
        GetPlaybookParams { scenario: scenario.to_string(), playbook_name: playbook_name.map(str::to_string) }
    }

    #[tokio::test]
    async fn test_scenario_search() {
        let source = sample_source().with_document("Ransom_Response_S3", "## 概要\nObjects encrypted");
        let repo = repository(source);

        let result = playbook_impl(&repo, params("RANSOM", None)).await.unwrap();
        let report: ScenarioReport = serde_json::from_str(&result_text(&result)).unwrap();

        assert_eq!(report.primary.filename, "Ransom_Response_EC2");
        assert_eq!(report.related.len(), 1);
        assert_eq!(report.related[0].filename, "Ransom_Response_S3");
        assert_eq!(report.related[0].summary, "Objects encrypted");
    }

    #[tokio::test]
    async fn test_by_name() {
        let repo = repository(sample_source());
        let result = playbook_impl(&repo, params("", Some("Compromised_IAM_Credentials"))).await.unwrap();

        let detail: PlaybookDetail = serde_json::from_str(&result_text(&result)).unwrap();
        assert_eq!(detail.filename, "Compromised_IAM_Credentials");
        assert_eq!(detail.summary, "Access keys were leaked.");
        assert_eq!(detail.content, IAM_PLAYBOOK);
    }

    #[tokio::test]
    async fn test_by_name_missing() {
        let repo = repository(sample_source());
        let err = playbook_impl(&repo, params("ransom", Some("Nope"))).await.unwrap_err();
        assert_eq!(err.code.0, -32001);
        assert!(err.message.contains("Nope"));
    }

    #[tokio::test]
    async fn test_no_match() {
        let repo = repository(sample_source());
        let err = playbook_impl(&repo, params("phishing", None)).await.unwrap_err();
        assert_eq!(err.code.0, -32001);
    }

    #[tokio::test]
    async fn test_empty_scenario() {
        let repo = repository(sample_source());
        let err = playbook_impl(&repo, params("", None)).await.unwrap_err();
        assert_eq!(err.code.0, -32602);
    }
}
