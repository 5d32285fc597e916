//! Client code for the playbook advisor.
//!
//! This crate provides the remote playbook sources, the caching
//! `PlaybookRepository`, the service keyword table, and the heuristic
//! section extraction shared by the server binaries.

pub mod extract;
pub mod keywords;
pub mod repository;
pub mod source;

pub use extract::{extract_prevention_guidance, extract_summary};
pub use keywords::{SERVICE_KEYWORDS, resolve_keywords};
pub use repository::{PlaybookRepository, SearchResult};
pub use source::{GitHubConfig, GitHubSource, MemorySource, PlaybookSource, RemoteError};
