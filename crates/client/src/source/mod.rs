//! Remote playbook sources.
//!
//! A source knows how to list the raw entries of the playbook index and how
//! to fetch one decoded playbook body. It performs no caching and no
//! filtering; both belong to [`crate::PlaybookRepository`].
//!
//! ### Upstream contract
//! - **Index**: `GET {base}/repos/{owner}/{name}/contents/{docs_path}` returning
//!   a JSON array of `{name}` entries.
//! - **Document**: `GET {base}/repos/{owner}/{name}/contents/{docs_path}/{identifier}.md`
//!   returning `{content}` with a base64 body.
//! - Any non-2xx response or transport failure is an error for that call.

pub mod error;
pub mod github;
pub mod memory;
pub mod response;

pub use error::RemoteError;
pub use github::{GitHubConfig, GitHubSource};
pub use memory::MemorySource;
pub use response::{ContentEntry, ContentFile};

use async_trait::async_trait;

/// File extension of playbook documents in the index.
pub const DOCUMENT_EXTENSION: &str = ".md";

/// The index's own readme, which is never a playbook.
pub const INDEX_README: &str = "README.md";

/// A remote store of playbook documents.
#[async_trait]
pub trait PlaybookSource: Send + Sync {
    /// List the raw entry names of the playbook index, in index order.
    async fn list_entries(&self) -> Result<Vec<String>, RemoteError>;

    /// Fetch and decode the body of the document named `identifier`.
    async fn fetch_content(&self, identifier: &str) -> Result<String, RemoteError>;
}
