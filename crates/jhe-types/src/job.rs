//! Job record types read from the cluster.
//!
//! A `JobRecord` is a read-only snapshot of one batch job: the orchestration
//! system creates and mutates jobs, the cleaner only observes them. Retention
//! behavior is driven entirely by the two `jhe.io/*` annotations plus the
//! process-wide default.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Annotation that suppresses deletion while set to `"true"` (case-insensitive).
pub const IGNORE_ANNOTATION: &str = "jhe.io/ignore";

/// Annotation overriding the retention window, in seconds since completion.
pub const DELETE_AFTER_SECONDS_ANNOTATION: &str = "jhe.io/delete-after-seconds";

/// Retention window applied when no override annotation is present.
pub const DEFAULT_DELETE_AFTER_SECONDS: i64 = 3600;

/// One batch workload instance as observed from the cluster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    /// Job name, unique within its namespace.
    pub name: String,

    /// Namespace the job lives in.
    pub namespace: String,

    /// When the orchestration system recorded the job as finished.
    /// Absent while the job is still running.
    pub completion_time: Option<DateTime<Utc>>,

    /// Resource annotations, including the `jhe.io/*` overrides.
    #[serde(default)]
    pub annotations: HashMap<String, String>,
}

impl JobRecord {
    /// Create a record for a job that has not finished yet.
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            completion_time: None,
            annotations: HashMap::new(),
        }
    }

    /// Set the completion timestamp.
    pub fn with_completion_time(mut self, completion_time: DateTime<Utc>) -> Self {
        self.completion_time = Some(completion_time);
        self
    }

    /// Add an annotation.
    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations.insert(key.into(), value.into());
        self
    }

    /// Whether the ignore annotation is present and set to `"true"`,
    /// compared case-insensitively.
    pub fn ignore_requested(&self) -> bool {
        self.annotations
            .get(IGNORE_ANNOTATION)
            .is_some_and(|v| v.eq_ignore_ascii_case("true"))
    }

    /// Raw value of the retention override annotation, if present.
    pub fn retention_override(&self) -> Option<&str> {
        self.annotations
            .get(DELETE_AFTER_SECONDS_ANNOTATION)
            .map(String::as_str)
    }
}
