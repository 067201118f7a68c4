//! The single-sweep command.
//!
//! Loads settings, applies CLI overrides, connects to the cluster, and runs
//! exactly one sweep. The process exits non-zero only when the sweep itself
//! aborts (configuration, connection, or listing failure); per-job failures
//! are logged and left for the next invocation.

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{info, warn};

use jhe_kube::{connect, ConnectionMode, KubeJobs};
use jhe_sweep::run_sweep;
use jhe_types::Settings;

use crate::cli::Cli;

/// Apply CLI flags on top of loaded settings (highest precedence).
fn apply_cli_overrides(settings: &mut Settings, cli: &Cli) {
    if cli.in_cluster {
        settings.in_cluster = true;
    }
    if let Some(kubeconfig) = &cli.kubeconfig {
        settings.kubeconfig = Some(kubeconfig.clone());
    }
    if let Some(namespace) = &cli.namespace {
        settings.namespace = Some(namespace.clone());
    }
    if let Some(secs) = cli.delete_after_seconds {
        settings.delete_after_seconds = secs;
    }
    if cli.dry_run {
        settings.dry_run = true;
    }
    if let Some(log_level) = &cli.log_level {
        settings.log_level = log_level.clone();
    }
}

/// Run one sweep and return when it completes.
pub async fn run_once(cli: Cli) -> Result<()> {
    let mut settings = Settings::load(cli.config.as_deref())
        .context("Failed to load configuration")?;
    apply_cli_overrides(&mut settings, &cli);
    settings.validate().context("Invalid configuration")?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&settings.log_level)),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to initialize logging")?;

    let mode = ConnectionMode::from_settings(settings.in_cluster, settings.kubeconfig.as_deref());
    let client = connect(&mode)
        .await
        .context("Failed to connect to the cluster")?;

    let jobs = match &settings.namespace {
        Some(namespace) => {
            info!(namespace = %namespace, "Sweeping one namespace");
            KubeJobs::namespaced(client, namespace)
        }
        None => {
            info!("Sweeping all namespaces");
            KubeJobs::all(client)
        }
    };

    let report = run_sweep(
        &jobs,
        &jobs,
        Utc::now(),
        settings.delete_after_seconds,
        settings.dry_run,
    )
    .await
    .context("Sweep aborted")?;

    if !report.stats.errors.is_empty() {
        warn!(
            errors = report.stats.errors.len(),
            "Sweep finished with per-job errors; they will be retried on the next run"
        );
    }

    Ok(())
}
