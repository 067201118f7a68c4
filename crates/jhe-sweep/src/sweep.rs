//! Sweep runner: evaluate every record, then delete the eligible ones.
//!
//! One call is one sweep. Per-job failures (malformed overrides, failed
//! deletions) are accumulated in the report and never abort the sweep; only
//! a listing failure does. There is no in-sweep retry: a job whose deletion
//! failed still satisfies the eligibility test on the next sweep.

use chrono::{DateTime, Utc};
use tracing::{debug, error, info, warn};

use jhe_types::DecisionReason;

use crate::capabilities::{DeleteJobs, ListJobs};
use crate::error::SweepError;
use crate::evaluate::evaluate;

/// What happened to one job during the sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    /// Not eligible; the reason says which guard fired.
    Skipped { reason: DecisionReason },

    /// Eligible and deleted.
    Deleted,

    /// Eligible but already absent from the cluster. Treated as success.
    AlreadyGone,

    /// Eligible; deletion suppressed by dry-run.
    WouldDelete,

    /// Eligible but the delete capability failed. Retried on the next sweep.
    DeleteFailed { error: String },
}

/// One job's outcome, in input order.
#[derive(Debug, Clone)]
pub struct SweepEntry {
    pub name: String,
    pub namespace: String,
    pub outcome: JobOutcome,
}

/// Counters for one sweep, with accumulated per-job errors.
#[derive(Debug, Clone, Default)]
pub struct SweepStats {
    /// Records evaluated.
    pub evaluated: usize,
    /// Skipped: no completion timestamp yet.
    pub not_finished: usize,
    /// Skipped: ignore annotation set.
    pub ignored: usize,
    /// Skipped: retention window not elapsed.
    pub retained: usize,
    /// Deleted this sweep.
    pub deleted: usize,
    /// Already absent when deletion was attempted.
    pub already_gone: usize,
    /// Would have been deleted, but dry-run was set.
    pub would_delete: usize,
    /// Deletion attempted and failed.
    pub failed: usize,
    /// Per-job errors: malformed overrides and failed deletions.
    pub errors: Vec<String>,
}

impl SweepStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jobs removed or confirmed absent this sweep.
    pub fn removed(&self) -> usize {
        self.deleted + self.already_gone
    }
}

/// Full result of one sweep.
#[derive(Debug, Clone, Default)]
pub struct SweepReport {
    /// Per-job outcomes, in input order.
    pub entries: Vec<SweepEntry>,
    /// Aggregated counters and errors.
    pub stats: SweepStats,
}

/// Run one sweep: list, evaluate, delete.
///
/// `now` and `default_retention_secs` are explicit inputs so the decision
/// step stays deterministic. With `dry_run` set, eligible jobs are reported
/// as `WouldDelete` and nothing is removed.
///
/// # Errors
///
/// Returns `SweepError::List` when the list capability fails; nothing has
/// been deleted in that case. Per-job deletion failures do not surface here.
pub async fn run_sweep<L, D>(
    lister: &L,
    deleter: &D,
    now: DateTime<Utc>,
    default_retention_secs: i64,
    dry_run: bool,
) -> Result<SweepReport, SweepError>
where
    L: ListJobs + ?Sized,
    D: DeleteJobs + ?Sized,
{
    let records = lister.list_jobs().await?;
    info!(jobs = records.len(), "Listed jobs");

    let decisions = evaluate(&records, now, default_retention_secs);

    let mut report = SweepReport::default();
    report.stats.evaluated = decisions.len();

    for decision in decisions {
        if let Some(parse_err) = &decision.override_error {
            warn!(
                job = %decision.name,
                namespace = %decision.namespace,
                "{parse_err}; using default retention"
            );
            report
                .stats
                .errors
                .push(format!("{}/{}: {parse_err}", decision.namespace, decision.name));
        }

        let outcome = if decision.eligible {
            if dry_run {
                info!(
                    job = %decision.name,
                    namespace = %decision.namespace,
                    reason = %decision.reason,
                    "Job is ready for deletion (dry-run, not deleting)"
                );
                report.stats.would_delete += 1;
                JobOutcome::WouldDelete
            } else {
                info!(
                    job = %decision.name,
                    namespace = %decision.namespace,
                    reason = %decision.reason,
                    "Job is ready for deletion. Deleting"
                );
                match deleter
                    .delete_job(&decision.namespace, &decision.name)
                    .await
                {
                    Ok(()) => {
                        report.stats.deleted += 1;
                        JobOutcome::Deleted
                    }
                    Err(e) if e.is_benign() => {
                        debug!(
                            job = %decision.name,
                            namespace = %decision.namespace,
                            "Job already gone"
                        );
                        report.stats.already_gone += 1;
                        JobOutcome::AlreadyGone
                    }
                    Err(e) => {
                        error!(
                            job = %decision.name,
                            namespace = %decision.namespace,
                            error = %e,
                            "Failed to delete job"
                        );
                        report
                            .stats
                            .errors
                            .push(format!("{}/{}: {e}", decision.namespace, decision.name));
                        report.stats.failed += 1;
                        JobOutcome::DeleteFailed {
                            error: e.to_string(),
                        }
                    }
                }
            }
        } else {
            debug!(
                job = %decision.name,
                namespace = %decision.namespace,
                reason = %decision.reason,
                "Skipping job"
            );
            match decision.reason {
                DecisionReason::NotFinished => report.stats.not_finished += 1,
                DecisionReason::Ignored => report.stats.ignored += 1,
                _ => report.stats.retained += 1,
            }
            JobOutcome::Skipped {
                reason: decision.reason,
            }
        };

        report.entries.push(SweepEntry {
            name: decision.name,
            namespace: decision.namespace,
            outcome,
        });
    }

    info!(
        evaluated = report.stats.evaluated,
        deleted = report.stats.deleted,
        already_gone = report.stats.already_gone,
        would_delete = report.stats.would_delete,
        failed = report.stats.failed,
        not_finished = report.stats.not_finished,
        ignored = report.stats.ignored,
        retained = report.stats.retained,
        errors = report.stats.errors.len(),
        "Sweep completed"
    );

    Ok(report)
}
