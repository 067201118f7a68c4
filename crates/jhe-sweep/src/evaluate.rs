//! Pure eligibility evaluation.
//!
//! `evaluate` is a function of the records, the injected current time, and
//! the default retention window. Records are evaluated independently and in
//! input order; nothing is read from an ambient clock.

use chrono::{DateTime, Duration, Utc};

use jhe_types::{DecisionReason, DeletionDecision, JobRecord};

/// Evaluate a sequence of job records against the retention policy.
pub fn evaluate(
    records: &[JobRecord],
    now: DateTime<Utc>,
    default_retention_secs: i64,
) -> Vec<DeletionDecision> {
    records
        .iter()
        .map(|record| evaluate_job(record, now, default_retention_secs))
        .collect()
}

/// Evaluate a single job record.
///
/// Guards fire in order: not-finished, ignore annotation, then the age test.
/// A job is eligible iff `completion_time + retention < now` (strict); a job
/// whose deadline equals `now` exactly is not yet eligible.
pub fn evaluate_job(
    record: &JobRecord,
    now: DateTime<Utc>,
    default_retention_secs: i64,
) -> DeletionDecision {
    let decision = |eligible, reason, override_error| DeletionDecision {
        name: record.name.clone(),
        namespace: record.namespace.clone(),
        eligible,
        reason,
        override_error,
    };

    let Some(completion_time) = record.completion_time else {
        return decision(false, DecisionReason::NotFinished, None);
    };

    if record.ignore_requested() {
        return decision(false, DecisionReason::Ignored, None);
    }

    let (retention_secs, override_error) = resolve_retention(record, default_retention_secs);

    let age = now.signed_duration_since(completion_time);
    let age_secs = age.num_seconds();

    // A retention too large to represent never expires.
    let expired = match Duration::try_seconds(retention_secs) {
        Some(retention) => age > retention,
        None => false,
    };

    if expired {
        decision(
            true,
            DecisionReason::Expired {
                age_secs,
                retention_secs,
            },
            override_error,
        )
    } else {
        decision(
            false,
            DecisionReason::NotExpired {
                age_secs,
                retention_secs,
            },
            override_error,
        )
    }
}

/// Resolve the retention window for one record.
///
/// A well-formed override (non-negative integer) takes precedence over the
/// default. A malformed override keeps the default and reports the parse
/// failure; it is never treated as "ignore" or "delete immediately".
fn resolve_retention(record: &JobRecord, default_retention_secs: i64) -> (i64, Option<String>) {
    let Some(raw) = record.retention_override() else {
        return (default_retention_secs, None);
    };

    match raw.parse::<i64>() {
        Ok(secs) if secs >= 0 => (secs, None),
        Ok(secs) => (
            default_retention_secs,
            Some(format!("retention override must be >= 0, got {secs}")),
        ),
        Err(e) => (
            default_retention_secs,
            Some(format!("cannot parse retention override {raw:?}: {e}")),
        ),
    }
}
