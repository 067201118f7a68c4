//! Error types for the sweep crate.
//!
//! `SweepError` covers failures that abort a sweep; `DeleteError` covers
//! per-job deletion failures, which never abort the sweep.

use thiserror::Error;

/// Errors that abort a sweep.
#[derive(Debug, Error)]
pub enum SweepError {
    /// The list capability failed; nothing can be evaluated.
    #[error("Failed to list jobs: {0}")]
    List(String),
}

/// Per-job deletion failure, classified by kind.
///
/// `NotFound` is benign: the desired end state (job absent) already holds,
/// and the sweep runner records it as success.
#[derive(Debug, Error)]
pub enum DeleteError {
    /// The job no longer exists.
    #[error("Job not found: {0}")]
    NotFound(String),

    /// The credentials are not allowed to delete the job.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// A transient failure; the job is retried on the next sweep.
    #[error("Transient error: {0}")]
    Transient(String),

    /// Any other deletion failure.
    #[error("Delete failed: {0}")]
    Other(String),
}

impl DeleteError {
    /// Whether the failure leaves the cluster in the desired end state.
    pub fn is_benign(&self) -> bool {
        matches!(self, DeleteError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SweepError::List("connection refused".to_string());
        assert!(err.to_string().contains("Failed to list jobs"));

        let err = DeleteError::Forbidden("jobs.batch is forbidden".to_string());
        assert!(err.to_string().contains("Forbidden"));

        let err = DeleteError::Transient("timeout".to_string());
        assert!(err.to_string().contains("Transient"));
    }

    #[test]
    fn test_not_found_is_benign() {
        assert!(DeleteError::NotFound("gone".to_string()).is_benign());
        assert!(!DeleteError::Other("boom".to_string()).is_benign());
        assert!(!DeleteError::Forbidden("no".to_string()).is_benign());
    }
}
