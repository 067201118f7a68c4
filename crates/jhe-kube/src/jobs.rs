//! Batch Job listing and deletion against the cluster.
//!
//! `KubeJobs` implements the sweep's `ListJobs` and `DeleteJobs` capability
//! traits on top of `kube::Api<Job>`. Deletion maps a 404 from the API
//! server to `DeleteError::NotFound`, which the sweep treats as success.

use async_trait::async_trait;
use k8s_openapi::api::batch::v1::Job;
use kube::api::{Api, DeleteParams, ListParams};
use kube::Client;
use tracing::{debug, warn};

use jhe_sweep::{DeleteError, DeleteJobs, ListJobs, SweepError};
use jhe_types::JobRecord;

/// Cluster-backed job source and sink.
pub struct KubeJobs {
    client: Client,
    namespace: Option<String>,
}

impl KubeJobs {
    /// Sweep jobs across all namespaces.
    pub fn all(client: Client) -> Self {
        Self {
            client,
            namespace: None,
        }
    }

    /// Sweep jobs in a single namespace.
    pub fn namespaced(client: Client, namespace: impl Into<String>) -> Self {
        Self {
            client,
            namespace: Some(namespace.into()),
        }
    }

    fn list_api(&self) -> Api<Job> {
        match &self.namespace {
            Some(ns) => Api::namespaced(self.client.clone(), ns),
            None => Api::all(self.client.clone()),
        }
    }
}

#[async_trait]
impl ListJobs for KubeJobs {
    async fn list_jobs(&self) -> Result<Vec<JobRecord>, SweepError> {
        let jobs = self
            .list_api()
            .list(&ListParams::default())
            .await
            .map_err(|e| SweepError::List(e.to_string()))?;

        debug!(items = jobs.items.len(), "Fetched job list");

        let mut records = Vec::with_capacity(jobs.items.len());
        for job in jobs.items {
            match job_to_record(&job) {
                Some(record) => records.push(record),
                None => warn!("Skipping job without a name in list response"),
            }
        }
        Ok(records)
    }
}

#[async_trait]
impl DeleteJobs for KubeJobs {
    async fn delete_job(&self, namespace: &str, name: &str) -> Result<(), DeleteError> {
        let api: Api<Job> = Api::namespaced(self.client.clone(), namespace);
        api.delete(name, &DeleteParams::default())
            .await
            .map(|_| ())
            .map_err(classify_delete_error)
    }
}

/// Convert a wire-level Job into the cleaner's record type.
///
/// Returns `None` for a job with no name, which the API server should never
/// produce.
fn job_to_record(job: &Job) -> Option<JobRecord> {
    let name = job.metadata.name.clone()?;
    let namespace = job.metadata.namespace.clone().unwrap_or_default();

    let completion_time = job
        .status
        .as_ref()
        .and_then(|status| status.completion_time.as_ref())
        .map(|time| time.0);

    let annotations = job
        .metadata
        .annotations
        .clone()
        .unwrap_or_default()
        .into_iter()
        .collect();

    Some(JobRecord {
        name,
        namespace,
        completion_time,
        annotations,
    })
}

/// Classify a deletion failure by the API server's response.
fn classify_delete_error(err: kube::Error) -> DeleteError {
    match err {
        kube::Error::Api(response) => classify_status(response.code, response.message),
        // Anything that never reached the API server is worth retrying on
        // the next sweep.
        other => DeleteError::Transient(other.to_string()),
    }
}

fn classify_status(code: u16, message: String) -> DeleteError {
    match code {
        404 => DeleteError::NotFound(message),
        403 => DeleteError::Forbidden(message),
        429 | 500..=599 => DeleteError::Transient(message),
        _ => DeleteError::Other(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use k8s_openapi::api::batch::v1::JobStatus;
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ObjectMeta, Time};
    use jhe_types::{DELETE_AFTER_SECONDS_ANNOTATION, IGNORE_ANNOTATION};

    fn job(name: Option<&str>, namespace: Option<&str>) -> Job {
        Job {
            metadata: ObjectMeta {
                name: name.map(String::from),
                namespace: namespace.map(String::from),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_job_to_record_basic_fields() {
        let record = job_to_record(&job(Some("nightly"), Some("batch"))).unwrap();
        assert_eq!(record.name, "nightly");
        assert_eq!(record.namespace, "batch");
        assert!(record.completion_time.is_none());
        assert!(record.annotations.is_empty());
    }

    #[test]
    fn test_job_to_record_without_name_is_skipped() {
        assert!(job_to_record(&job(None, Some("batch"))).is_none());
    }

    #[test]
    fn test_job_to_record_completion_time() {
        let completed = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let mut wire = job(Some("nightly"), Some("batch"));
        wire.status = Some(JobStatus {
            completion_time: Some(Time(completed)),
            ..Default::default()
        });

        let record = job_to_record(&wire).unwrap();
        assert_eq!(record.completion_time, Some(completed));
    }

    #[test]
    fn test_job_to_record_annotations() {
        let mut wire = job(Some("nightly"), Some("batch"));
        wire.metadata.annotations = Some(
            [
                (IGNORE_ANNOTATION.to_string(), "true".to_string()),
                (DELETE_AFTER_SECONDS_ANNOTATION.to_string(), "60".to_string()),
            ]
            .into_iter()
            .collect(),
        );

        let record = job_to_record(&wire).unwrap();
        assert!(record.ignore_requested());
        assert_eq!(record.retention_override(), Some("60"));
    }

    #[test]
    fn test_classify_status_not_found() {
        let err = classify_status(404, "jobs.batch \"x\" not found".to_string());
        assert!(err.is_benign());
        assert!(matches!(err, DeleteError::NotFound(_)));
    }

    #[test]
    fn test_classify_status_forbidden() {
        let err = classify_status(403, "forbidden".to_string());
        assert!(matches!(err, DeleteError::Forbidden(_)));
        assert!(!err.is_benign());
    }

    #[test]
    fn test_classify_status_transient() {
        for code in [429, 500, 503] {
            let err = classify_status(code, "busy".to_string());
            assert!(matches!(err, DeleteError::Transient(_)), "code {code}");
        }
    }

    #[test]
    fn test_classify_status_other() {
        let err = classify_status(422, "unprocessable".to_string());
        assert!(matches!(err, DeleteError::Other(_)));
    }
}
