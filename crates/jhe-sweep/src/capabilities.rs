//! Capability traits consumed by the sweep.
//!
//! The cleaner core does not own a cluster client; it consumes a list
//! capability and a delete capability through these seams so the sweep can
//! be exercised against mocks.

use async_trait::async_trait;

use jhe_types::JobRecord;

use crate::error::{DeleteError, SweepError};

/// Enumerates the current job records.
///
/// An empty sequence means "nothing to do", not an error. A failure here is
/// fatal to the sweep.
#[async_trait]
pub trait ListJobs {
    async fn list_jobs(&self) -> Result<Vec<JobRecord>, SweepError>;
}

/// Deletes a single job by (namespace, name).
///
/// Deletion is idempotent from the sweep's point of view: implementors
/// should report an already-absent job as `DeleteError::NotFound`, which the
/// sweep treats as success.
#[async_trait]
pub trait DeleteJobs {
    async fn delete_job(&self, namespace: &str, name: &str) -> Result<(), DeleteError>;
}
