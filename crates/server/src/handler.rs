//! MCP server handler implementation.
//!
//! Routes tool calls to the implementations in [`crate::tools`], all sharing
//! one playbook repository.
use std::sync::Arc;

use advisor_client::PlaybookRepository;
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{
        tool::{ToolCallContext, ToolRouter},
        wrapper::Parameters,
    },
    model::{
        CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_router,
};

use crate::tools::{GetPlaybookParams, PreventionParams, list_impl, playbook_impl, prevention_impl, purge_impl};

/// The MCP server handler for the playbook advisor.
#[derive(Clone)]
pub struct PlaybookAdvisorServer {
    repository: Arc<PlaybookRepository>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl PlaybookAdvisorServer {
    pub fn new(repository: Arc<PlaybookRepository>) -> Self {
        Self { repository, tool_router: Self::tool_router() }
    }

    #[tool(description = "List the names of all available security incident response playbooks.")]
    async fn list_playbooks(&self) -> Result<CallToolResult, McpError> {
        list_impl(&self.repository).await
    }

    /// Prevention guidance for an AWS service.
    ///
    /// Extracts the prevention or mitigation sections of matching playbooks,
    /// or returns baseline best practices when none match.
    #[tool(
        description = "Get preventive security guidance for an AWS service (e.g. S3, IAM, EC2, VPC) from the incident response playbooks. Use \"all\" for every baseline section."
    )]
    async fn get_prevention_guidance(&self, params: Parameters<PreventionParams>) -> Result<CallToolResult, McpError> {
        prevention_impl(&self.repository, params.0).await
    }

    #[tool(
        description = "Get the incident response playbook for a scenario. Returns the best match in full plus summaries of related playbooks, or a single playbook by exact name."
    )]
    async fn get_playbook(&self, params: Parameters<GetPlaybookParams>) -> Result<CallToolResult, McpError> {
        playbook_impl(&self.repository, params.0).await
    }

    #[tool(description = "Remove expired playbook bodies from the in-memory cache. Returns the number deleted.")]
    async fn cache_purge(&self) -> Result<CallToolResult, McpError> {
        purge_impl(&self.repository).await
    }
}

impl ServerHandler for PlaybookAdvisorServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "playbook-advisor".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(
                "Security incident response advisor backed by the AWS customer playbook framework.".into(),
            ),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self, _request: Option<PaginatedRequestParam>, _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, rmcp::model::ErrorData> {
        Ok(ListToolsResult { meta: None, tools: self.tool_router.list_all(), next_cursor: None })
    }

    async fn call_tool(
        &self, request: CallToolRequestParam, context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, rmcp::model::ErrorData> {
        self.tool_router
            .call(ToolCallContext::new(self, request, context))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{repository, sample_source};

    #[test]
    fn test_tools_registered() {
        let server = PlaybookAdvisorServer::new(repository(sample_source()));
        let mut names: Vec<String> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        names.sort();

        assert_eq!(names, vec!["cache_purge", "get_playbook", "get_prevention_guidance", "list_playbooks"]);
    }

    #[test]
    fn test_server_info() {
        let server = PlaybookAdvisorServer::new(repository(sample_source()));
        let info = server.get_info();
        assert_eq!(info.server_info.name, "playbook-advisor");
        assert!(info.capabilities.tools.is_some());
    }
}
