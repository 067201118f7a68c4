//! # jhe-types
//!
//! Shared domain types for the jhe job cleaner.
//!
//! This crate defines the core data structures used throughout the system:
//! - Job records: read-only snapshots of batch jobs observed in the cluster
//! - Deletion decisions: per-job eligibility results produced by a sweep
//! - Settings: layered configuration for the cleaner binary
//!
//! ## Usage
//!
//! ```rust
//! use jhe_types::JobRecord;
//! ```

pub mod config;
pub mod decision;
pub mod error;
pub mod job;

pub use config::Settings;
pub use decision::{DecisionReason, DeletionDecision};
pub use error::CleanerError;
pub use job::{
    JobRecord, DEFAULT_DELETE_AFTER_SECONDS, DELETE_AFTER_SECONDS_ANNOTATION, IGNORE_ANNOTATION,
};
