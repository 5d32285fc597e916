//! GitHub contents API source.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header};
use serde::de::DeserializeOwned;
use url::Url;

use advisor_core::{AppConfig, Error};

use super::{ContentEntry, ContentFile, DOCUMENT_EXTENSION, PlaybookSource, RemoteError};

/// Default base URL for the GitHub REST API.
const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Default repository holding the playbooks.
const DEFAULT_REPOSITORY: &str = "aws-samples/aws-customer-playbook-framework";

/// Default user agent. GitHub rejects requests without one.
const DEFAULT_USER_AGENT: &str = "playbook-advisor/0.1";

/// Media type recommended by the GitHub REST API.
const GITHUB_JSON: &str = "application/vnd.github+json";

/// GitHub source configuration.
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    /// Base URL (default: https://api.github.com).
    pub api_base_url: String,
    /// Repository as `owner/name`.
    pub repository: String,
    /// Directory containing the playbooks (default: docs).
    pub docs_path: String,
    /// User-agent string (default: playbook-advisor/0.x).
    pub user_agent: String,
    /// Request timeout. None waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            repository: DEFAULT_REPOSITORY.to_string(),
            docs_path: "docs".to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

impl From<&AppConfig> for GitHubConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            api_base_url: config.api_base_url.clone(),
            repository: config.repository.clone(),
            docs_path: config.docs_path.clone(),
            user_agent: config.user_agent.clone(),
            timeout: config.timeout(),
        }
    }
}

/// Playbook source backed by the GitHub contents API.
#[derive(Debug, Clone)]
pub struct GitHubSource {
    http: Client,
    base_url: Url,
    config: GitHubConfig,
}

impl GitHubSource {
    /// Create a new GitHub source with the given configuration.
    pub fn new(config: GitHubConfig) -> Result<Self, Error> {
        let base_url = Url::parse(&config.api_base_url)
            .map_err(|e| Error::InvalidInput(format!("invalid api_base_url: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidInput(format!("invalid api_base_url: {}", config.api_base_url)));
        }

        let mut builder = Client::builder()
            .user_agent(&config.user_agent)
            .use_rustls_tls()
            .gzip(true)
            .brotli(true)
            .deflate(true);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::RemoteUnavailable(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, base_url, config })
    }

    /// Build a contents API URL for the docs directory, or for one file in it.
    ///
    /// Each path part is pushed as its own segment so identifiers are
    /// percent-encoded rather than interpreted as paths.
    pub fn contents_url(&self, file_name: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("repos");
            segments.extend(self.config.repository.split('/'));
            segments.push("contents");
            segments.extend(self.config.docs_path.split('/').filter(|s| !s.is_empty()));
            if let Some(name) = file_name {
                segments.push(name);
            }
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, what: &str) -> Result<T, RemoteError> {
        tracing::debug!("requesting {}", url);

        let response = self
            .http
            .get(url)
            .header(header::ACCEPT, GITHUB_JSON)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("contents API response status for {}: {}", what, status);

        if status == StatusCode::NOT_FOUND {
            return Err(RemoteError::NotFound(what.to_string()));
        }

        if !status.is_success() {
            return Err(RemoteError::Status { status: status.as_u16() });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| RemoteError::Decode(e.to_string()))
    }
}

#[async_trait]
impl PlaybookSource for GitHubSource {
    async fn list_entries(&self) -> Result<Vec<String>, RemoteError> {
        let url = self.contents_url(None);
        let entries: Vec<ContentEntry> = self.get_json(url, &self.config.docs_path).await?;
        Ok(entries
            .into_iter()
            .filter(ContentEntry::is_file)
            .map(|entry| entry.name)
            .collect())
    }

    async fn fetch_content(&self, identifier: &str) -> Result<String, RemoteError> {
        let file_name = format!("{identifier}{DOCUMENT_EXTENSION}");
        let url = self.contents_url(Some(&file_name));
        let file: ContentFile = self.get_json(url, identifier).await?;
        file.decode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = GitHubConfig::default();
        assert_eq!(config.api_base_url, "https://api.github.com");
        assert_eq!(config.repository, "aws-samples/aws-customer-playbook-framework");
        assert_eq!(config.docs_path, "docs");
        assert_eq!(config.user_agent, "playbook-advisor/0.1");
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_config_from_app_config() {
        let app = AppConfig { repository: "acme/runbooks".into(), timeout_ms: Some(5_000), ..Default::default() };
        let config = GitHubConfig::from(&app);
        assert_eq!(config.repository, "acme/runbooks");
        assert_eq!(config.timeout, Some(Duration::from_millis(5_000)));
    }

    #[test]
    fn test_index_url() {
        let source = GitHubSource::new(GitHubConfig::default()).unwrap();
        assert_eq!(
            source.contents_url(None).as_str(),
            "https://api.github.com/repos/aws-samples/aws-customer-playbook-framework/contents/docs"
        );
    }

    #[test]
    fn test_document_url() {
        let source = GitHubSource::new(GitHubConfig::default()).unwrap();
        assert_eq!(
            source.contents_url(Some("IR-S3_Public_Access.md")).as_str(),
            "https://api.github.com/repos/aws-samples/aws-customer-playbook-framework/contents/docs/IR-S3_Public_Access.md"
        );
    }

    #[test]
    fn test_document_url_encodes_identifier() {
        let source = GitHubSource::new(GitHubConfig::default()).unwrap();
        let url = source.contents_url(Some("../secrets.md"));
        assert!(url.path().ends_with("/contents/docs/..%2Fsecrets.md"));
    }

    #[test]
    fn test_url_with_base_path_and_nested_docs() {
        let config = GitHubConfig {
            api_base_url: "http://localhost:8080/api/v3/".into(),
            docs_path: "/playbooks/aws/".into(),
            ..Default::default()
        };
        let source = GitHubSource::new(config).unwrap();
        assert_eq!(
            source.contents_url(None).as_str(),
            "http://localhost:8080/api/v3/repos/aws-samples/aws-customer-playbook-framework/contents/playbooks/aws"
        );
    }

    #[test]
    fn test_new_rejects_bad_base_url() {
        let config = GitHubConfig { api_base_url: "mailto:someone@example.com".into(), ..Default::default() };
        assert!(GitHubSource::new(config).is_err());

        let config = GitHubConfig { api_base_url: "not a url".into(), ..Default::default() };
        assert!(GitHubSource::new(config).is_err());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let config = GitHubConfig {
            api_base_url: "http://127.0.0.1:9".into(),
            timeout: Some(Duration::from_secs(2)),
            ..Default::default()
        };
        let source = GitHubSource::new(config).unwrap();
        let result = source.list_entries().await;
        assert!(matches!(result, Err(RemoteError::Transport(_))));
    }
}
