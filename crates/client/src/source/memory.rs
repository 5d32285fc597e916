//! In-memory playbook source.
//!
//! Holds documents in index order and counts every call, so repository
//! behavior (caching, fail-open handling) can be observed without a network.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

use super::{DOCUMENT_EXTENSION, PlaybookSource, RemoteError};

#[derive(Debug, Default)]
struct Contents {
    entries: Vec<String>,
    documents: HashMap<String, String>,
}

/// Playbook source backed by process memory.
#[derive(Debug, Default)]
pub struct MemorySource {
    contents: Mutex<Contents>,
    unavailable: AtomicBool,
    list_calls: AtomicUsize,
    fetch_calls: AtomicUsize,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a playbook: an `{identifier}.md` index entry plus its body.
    pub fn with_document(self, identifier: &str, body: &str) -> Self {
        self.set_document(identifier, body);
        self
    }

    /// Add a raw index entry with no document behind it.
    pub fn with_entry(self, name: &str) -> Self {
        self.lock().entries.push(name.to_string());
        self
    }

    /// Insert or replace the body of `identifier`.
    ///
    /// The index entry is only added the first time.
    pub fn set_document(&self, identifier: &str, body: &str) {
        let mut contents = self.lock();
        let entry = format!("{identifier}{DOCUMENT_EXTENSION}");
        if !contents.entries.contains(&entry) {
            contents.entries.push(entry);
        }
        contents.documents.insert(identifier.to_string(), body.to_string());
    }

    /// Make every subsequent call fail as if the remote were down.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of `list_entries` calls so far.
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Number of `fetch_content` calls so far.
    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Contents> {
        self.contents.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check_available(&self) -> Result<(), RemoteError> {
        if self.unavailable.load(Ordering::SeqCst) { Err(RemoteError::Status { status: 503 }) } else { Ok(()) }
    }
}

#[async_trait]
impl PlaybookSource for MemorySource {
    async fn list_entries(&self) -> Result<Vec<String>, RemoteError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        Ok(self.lock().entries.clone())
    }

    async fn fetch_content(&self, identifier: &str) -> Result<String, RemoteError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        self.lock()
            .documents
            .get(identifier)
            .cloned()
            .ok_or_else(|| RemoteError::NotFound(identifier.to_string()))
    }
}
