//! Deletion sweep for completed batch jobs.
//!
//! This crate holds the core of the cleaner: a pure eligibility evaluator
//! and a sweep runner that drives the external list and delete capabilities.
//!
//! - Evaluation is a pure function of the job records, the injected current
//!   time, and the default retention window. No clock is read internally.
//! - The sweep continues past per-job failures: a malformed retention
//!   override falls back to the default, and a failed deletion is logged and
//!   left for the next sweep.
//!
//! # Example
//!
//! ```ignore
//! use jhe_sweep::{run_sweep, ListJobs, DeleteJobs};
//!
//! let report = run_sweep(&jobs, &jobs, Utc::now(), 3600, false).await?;
//! tracing::info!(deleted = report.stats.deleted, "sweep finished");
//! ```

mod capabilities;
mod error;
mod evaluate;
mod sweep;

pub use capabilities::{DeleteJobs, ListJobs};
pub use error::{DeleteError, SweepError};
pub use evaluate::{evaluate, evaluate_job};
pub use sweep::{run_sweep, JobOutcome, SweepEntry, SweepReport, SweepStats};
