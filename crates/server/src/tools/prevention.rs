//! get_prevention_guidance tool implementation.
//!
//! Renders the prevention sections of every playbook matching a service.
//! Falls back to the built-in baseline guidance when nothing matches.

use advisor_client::PlaybookRepository;
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::guidance::baseline_guidance;
use crate::render::prevention_report;

/// Service used when none is given; matches no playbook, so the general
/// baseline guidance is returned.
const GENERAL_SERVICE: &str = "general";

/// Parameters for the get_prevention_guidance tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PreventionParams {
    /// AWS service or scenario name (e.g. S3, IAM, EC2, VPC, ransomware), or "all".
    /// Defaults to "general".
    #[serde(default)]
    pub service: String,

    /// Specific question to answer.
    #[serde(default)]
    pub question: Option<String>,
}

/// Implementation of the get_prevention_guidance tool.
pub async fn prevention_impl(
    repository: &PlaybookRepository, params: PreventionParams,
) -> Result<CallToolResult, McpError> {
    let service = match params.service.trim() {
        "" => GENERAL_SERVICE,
        service => service,
    };
    let question = params.question.as_deref().filter(|q| !q.is_empty());

    let results = repository.search_by_service_keyword(service).await;
    let text = if results.is_empty() {
        tracing::debug!(service, "no matching playbooks, using baseline guidance");
        baseline_guidance(service, question)
    } else {
        prevention_report(service, question, &results)
    };

    Ok(CallToolResult::success(vec![Content::text(text)]))
}
