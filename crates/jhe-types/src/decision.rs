//! Deletion decisions produced by a sweep.
//!
//! A decision is ephemeral output: it is consumed immediately by the deletion
//! step and never persisted.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which guard or branch fired for a job during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionReason {
    /// The job has no completion timestamp yet.
    NotFinished,

    /// The ignore annotation is set.
    Ignored,

    /// The retention window has not elapsed yet.
    NotExpired {
        age_secs: i64,
        retention_secs: i64,
    },

    /// The retention window has elapsed.
    Expired {
        age_secs: i64,
        retention_secs: i64,
    },
}

impl fmt::Display for DecisionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecisionReason::NotFinished => write!(f, "job not yet finished"),
            DecisionReason::Ignored => write!(f, "job is marked to ignore"),
            DecisionReason::NotExpired {
                age_secs,
                retention_secs,
            } => write!(
                f,
                "retention window not elapsed (age {age_secs}s, retention {retention_secs}s)"
            ),
            DecisionReason::Expired {
                age_secs,
                retention_secs,
            } => write!(
                f,
                "retention window elapsed (age {age_secs}s, retention {retention_secs}s)"
            ),
        }
    }
}

/// Per-job eligibility result for one sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletionDecision {
    /// Job name.
    pub name: String,

    /// Job namespace.
    pub namespace: String,

    /// Whether the job is due for deletion.
    pub eligible: bool,

    /// Which guard or branch fired.
    pub reason: DecisionReason,

    /// Set when the retention override annotation was malformed and the
    /// default retention was used instead. Non-fatal.
    pub override_error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_display() {
        assert_eq!(
            DecisionReason::NotFinished.to_string(),
            "job not yet finished"
        );
        assert_eq!(
            DecisionReason::Ignored.to_string(),
            "job is marked to ignore"
        );

        let reason = DecisionReason::Expired {
            age_secs: 4000,
            retention_secs: 3600,
        };
        assert!(reason.to_string().contains("age 4000s"));
        assert!(reason.to_string().contains("retention 3600s"));
    }

    #[test]
    fn test_decision_serde_roundtrip() {
        let decision = DeletionDecision {
            name: "j".to_string(),
            namespace: "ns".to_string(),
            eligible: true,
            reason: DecisionReason::Expired {
                age_secs: 10,
                retention_secs: 5,
            },
            override_error: None,
        };
        let json = serde_json::to_string(&decision).unwrap();
        let parsed: DeletionDecision = serde_json::from_str(&json).unwrap();
        assert!(parsed.eligible);
        assert_eq!(parsed.reason, decision.reason);
    }
}
