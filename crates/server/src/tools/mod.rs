//! MCP tool implementations.
//!
//! Each tool is a free `*_impl` function over the shared repository so it can
//! be tested without an MCP transport.

pub mod cache;
pub mod list;
pub mod playbook;
pub mod prevention;

pub use cache::{CachePurgeOutput, purge_impl};
pub use list::{ListPlaybooksOutput, list_impl};
pub use playbook::{GetPlaybookParams, playbook_impl};
pub use prevention::{PreventionParams, prevention_impl};
