//! In-memory cache for playbook documents.
//!
//! Bodies are kept per identifier with the time they were fetched and read
//! back only while younger than the configured TTL. Nothing is persisted;
//! the cache lives as long as the process.

pub mod clock;
pub mod documents;

pub use clock::{Clock, ManualClock, SystemClock};
pub use documents::{DocumentCache, DocumentRecord};
