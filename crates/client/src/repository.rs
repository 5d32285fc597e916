//! Playbook repository: index listing, cached retrieval, and search.
//!
//! Every remote failure is handled at one place, [`fail_open`], which logs
//! it and substitutes an empty value. The `try_*` methods expose the
//! underlying `Result` for callers that need to tell "not found" from
//! "unavailable".

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use advisor_core::{AppConfig, DocumentCache, Error};

use crate::keywords::resolve_keywords;
use crate::source::{DOCUMENT_EXTENSION, GitHubConfig, GitHubSource, INDEX_README, PlaybookSource, RemoteError};

/// A matched playbook and its body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub identifier: String,
    pub body: String,
}

/// Retrieves, caches, and searches playbooks from a remote source.
#[derive(Clone)]
pub struct PlaybookRepository {
    source: Arc<dyn PlaybookSource>,
    cache: DocumentCache,
}

impl std::fmt::Debug for PlaybookRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybookRepository").field("cache", &self.cache).finish_non_exhaustive()
    }
}

impl PlaybookRepository {
    pub fn new(source: Arc<dyn PlaybookSource>, cache: DocumentCache) -> Self {
        Self { source, cache }
    }

    /// Build a repository over the GitHub source described by `config`.
    pub fn from_config(config: &AppConfig) -> Result<Self, Error> {
        let source = GitHubSource::new(GitHubConfig::from(config))?;
        Ok(Self::new(Arc::new(source), DocumentCache::new(config.cache_ttl())))
    }

    pub fn cache(&self) -> &DocumentCache {
        &self.cache
    }

    /// List playbook identifiers in index order.
    ///
    /// The index is fetched on every call. Only `.md` entries other than the
    /// index readme are kept, with the extension stripped.
    pub async fn try_list_documents(&self) -> Result<Vec<String>, RemoteError> {
        let entries = self.source.list_entries().await?;
        Ok(entries
            .into_iter()
            .filter(|name| name != INDEX_README)
            .filter_map(|name| name.strip_suffix(DOCUMENT_EXTENSION).map(str::to_string))
            .collect())
    }

    /// Fetch a playbook body, serving it from the cache while fresh.
    ///
    /// Failures are not cached; the next call goes to the network again.
    pub async fn try_fetch_document(&self, identifier: &str) -> Result<String, RemoteError> {
        if let Some(record) = self.cache.get(identifier).await {
            tracing::debug!("cache hit for playbook {}", identifier);
            return Ok(record.body);
        }

        let body = self.source.fetch_content(identifier).await?;
        tracing::debug!("fetched playbook {} ({} bytes)", identifier, body.len());

        let record = self.cache.insert(identifier, body).await;
        Ok(record.body)
    }

    /// [`Self::try_list_documents`], with failures turned into an empty list.
    pub async fn list_documents(&self) -> Vec<String> {
        fail_open(self.try_list_documents().await, "list playbooks")
    }

    /// [`Self::try_fetch_document`], with failures turned into an empty body.
    pub async fn fetch_document(&self, identifier: &str) -> String {
        fail_open(self.try_fetch_document(identifier).await, identifier)
    }

    /// Playbooks whose identifier contains `query`, ignoring case.
    ///
    /// Plain substring match in index order; no ranking.
    pub async fn search_by_free_text(&self, query: &str) -> Vec<SearchResult> {
        let query = query.to_lowercase();
        let identifiers = self.list_documents().await;
        let matching = identifiers
            .into_iter()
            .filter(|identifier| identifier.to_lowercase().contains(&query));
        self.with_bodies(matching).await
    }

    /// Playbooks matching a service name through the keyword table.
    ///
    /// Identifiers are walked in index order and kept when they contain any
    /// of the service's keywords, so an identifier matching several keywords
    /// is still returned once.
    pub async fn search_by_service_keyword(&self, service_name: &str) -> Vec<SearchResult> {
        let keywords = resolve_keywords(service_name);
        let identifiers = self.list_documents().await;
        let matching = identifiers.into_iter().filter(|identifier| {
            let lower = identifier.to_lowercase();
            keywords.iter().any(|keyword| lower.contains(keyword.as_str()))
        });
        self.with_bodies(matching).await
    }

    /// Fetch bodies sequentially, dropping identifiers whose body is empty.
    async fn with_bodies(&self, identifiers: impl Iterator<Item = String>) -> Vec<SearchResult> {
        let mut results = Vec::new();
        for identifier in identifiers {
            let body = self.fetch_document(&identifier).await;
            if !body.is_empty() {
                results.push(SearchResult { identifier, body });
            }
        }
        results
    }
}

/// Fail-open boundary: log a remote error and substitute the empty value.
fn fail_open<T: Default>(result: Result<T, RemoteError>, context: &str) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(error = %err, unavailable = err.is_unavailable(), "{}: remote request failed", context);
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemorySource;
    use advisor_core::ManualClock;
    use chrono::Duration;

    struct Fixture {
        repo: PlaybookRepository,
        source: Arc<MemorySource>,
        clock: Arc<ManualClock>,
    }

    fn fixture(source: MemorySource) -> Fixture {
        let source = Arc::new(source);
        let clock = Arc::new(ManualClock::default());
        let cache = DocumentCache::with_clock(Duration::minutes(5), clock.clone());
        let repo = PlaybookRepository::new(source.clone(), cache);
        Fixture { repo, source, clock }
    }

    fn aws_playbooks() -> MemorySource {
        MemorySource::new()
            .with_entry("README.md")
            .with_document("IR-S3_Public_Access", "## Summary\nS3 bucket exposed")
            .with_document("Compromised_IAM_Credentials", "## Summary\nLeaked keys")
            .with_document("Ransom_Response_EC2", "## Summary\nEC2 ransom")
            .with_document("Ransom_Response_RDS", "## Summary\nRDS ransom")
            .with_document("Unauthorized_Network_Changes_VPC", "## Summary\nVPC changes")
            .with_document("SES_Abuse", "")
            .with_entry("images")
    }

    #[tokio::test]
    async fn test_list_documents_filters_and_keeps_order() {
        let source = MemorySource::new()
            .with_document("a", "A")
            .with_entry("README.md")
            .with_document("b", "B")
            .with_entry("diagram.png");
        let f = fixture(source);

        assert_eq!(f.repo.list_documents().await, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_list_documents_strips_only_the_suffix() {
        let f = fixture(MemorySource::new().with_entry("notes.md.md").with_entry("guide.mdx"));
        assert_eq!(f.repo.list_documents().await, vec!["notes.md"]);
    }

    #[tokio::test]
    async fn test_list_documents_is_not_cached() {
        let f = fixture(aws_playbooks());
        f.repo.list_documents().await;
        f.repo.list_documents().await;
        assert_eq!(f.source.list_calls(), 2);
    }

    #[tokio::test]
    async fn test_list_documents_fails_open() {
        let f = fixture(aws_playbooks());
        f.source.set_unavailable(true);

        assert!(f.repo.list_documents().await.is_empty());
        assert!(matches!(f.repo.try_list_documents().await, Err(RemoteError::Status { status: 503 })));
    }

    #[tokio::test]
    async fn test_fetch_within_ttl_hits_cache() {
        let f = fixture(aws_playbooks());

        let first = f.repo.fetch_document("SES_Abuse").await;
        f.clock.advance(Duration::minutes(4));
        let second = f.repo.fetch_document("SES_Abuse").await;

        assert_eq!(first, second);
        assert_eq!(f.source.fetch_calls(), 1);
    }

    #[tokio::test]
    async fn test_fetch_after_ttl_refetches() {
        let f = fixture(aws_playbooks());

        let first = f.repo.fetch_document("IR-S3_Public_Access").await;
        assert_eq!(first, "## Summary\nS3 bucket exposed");

        f.source.set_document("IR-S3_Public_Access", "## Summary\nUpdated");
        f.clock.advance(Duration::minutes(5));

        let second = f.repo.fetch_document("IR-S3_Public_Access").await;
        assert_eq!(second, "## Summary\nUpdated");
        assert_eq!(f.source.fetch_calls(), 2);
        assert_eq!(f.repo.cache().len().await, 1);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_not_cached() {
        let f = fixture(aws_playbooks());
        f.source.set_unavailable(true);

        assert_eq!(f.repo.fetch_document("Ransom_Response_EC2").await, "");
        assert_eq!(f.repo.fetch_document("Ransom_Response_EC2").await, "");
        assert_eq!(f.source.fetch_calls(), 2);
        assert!(f.repo.cache().is_empty().await);

        f.source.set_unavailable(false);
        assert_eq!(f.repo.fetch_document("Ransom_Response_EC2").await, "## Summary\nEC2 ransom");
    }

    #[tokio::test]
    async fn test_fetch_unknown_identifier() {
        let f = fixture(aws_playbooks());
        assert_eq!(f.repo.fetch_document("does_not_exist").await, "");
        assert!(matches!(
            f.repo.try_fetch_document("does_not_exist").await,
            Err(RemoteError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_free_text_search_is_case_insensitive() {
        let f = fixture(aws_playbooks());
        let results = f.repo.search_by_free_text("RANSOM").await;

        let ids: Vec<_> = results.iter().map(|r| r.identifier.as_str()).collect();
        assert_eq!(ids, vec!["Ransom_Response_EC2", "Ransom_Response_RDS"]);
        assert_eq!(results[0].body, "## Summary\nEC2 ransom");
    }

    #[tokio::test]
    async fn test_free_text_search_skips_empty_bodies() {
        let f = fixture(aws_playbooks());
        assert!(f.repo.search_by_free_text("ses").await.is_empty());
    }

    #[tokio::test]
    async fn test_free_text_search_when_index_fails() {
        let f = fixture(aws_playbooks());
        f.source.set_unavailable(true);

        assert!(f.repo.search_by_free_text("s3").await.is_empty());
        assert_eq!(f.source.fetch_calls(), 0);
    }

    #[tokio::test]
    async fn test_service_search_uses_keyword_table() {
        let f = fixture(
            aws_playbooks()
                .with_document("Bucket_Public_Access_Block", "## Summary\nBlock it")
                .with_document("Lambda_Secrets", "## Summary\nNot S3"),
        );

        let results = f.repo.search_by_service_keyword("S3").await;
        let ids: Vec<_> = results.iter().map(|r| r.identifier.as_str()).collect();
        assert_eq!(ids, vec!["IR-S3_Public_Access", "Bucket_Public_Access_Block"]);

        for id in ids {
            let lower = id.to_lowercase();
            assert!(lower.contains("s3") || lower.contains("public_access"));
        }
    }

    #[tokio::test]
    async fn test_service_search_multi_keyword_match_appears_once() {
        let f = fixture(aws_playbooks());
        let results = f.repo.search_by_service_keyword("ec2").await;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].identifier, "Ransom_Response_EC2");
    }

    #[tokio::test]
    async fn test_service_search_unknown_service_uses_name() {
        let f = fixture(aws_playbooks().with_document("Lambda_Secrets", "## Summary\nRotate"));
        let results = f.repo.search_by_service_keyword("Lambda").await;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].identifier, "Lambda_Secrets");
    }

    #[tokio::test]
    async fn test_service_search_reuses_cached_bodies() {
        let f = fixture(aws_playbooks());
        f.repo.search_by_service_keyword("iam").await;
        f.repo.search_by_service_keyword("iam").await;

        assert_eq!(f.source.fetch_calls(), 1);
        assert_eq!(f.source.list_calls(), 2);
    }

    #[test]
    fn test_from_config() {
        let repo = PlaybookRepository::from_config(&AppConfig::default()).unwrap();
        assert_eq!(repo.cache().ttl(), Duration::minutes(5));
    }
}
