//! Core types and shared functionality for the playbook advisor.
//!
//! This crate provides:
//! - In-memory TTL cache for playbook documents
//! - Unified error types
//! - Configuration structures

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{Clock, DocumentCache, DocumentRecord, ManualClock, SystemClock};
pub use config::{AppConfig, ConfigError};
pub use error::Error;
