//! CLI argument parsing for the cleaner.
//!
//! CLI flags have the highest precedence and are applied on top of the
//! loaded settings.

use clap::Parser;

/// Garbage collector for completed batch Jobs.
///
/// Lists finished jobs, checks each against its retention window, and
/// deletes the ones whose window has elapsed. One invocation = one sweep.
#[derive(Parser, Debug)]
#[command(name = "jhe-cleaner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use the in-cluster service account configuration
    #[arg(long)]
    pub in_cluster: bool,

    /// Absolute path to the kubeconfig file
    #[arg(long)]
    pub kubeconfig: Option<String>,

    /// Sweep only this namespace (default: all namespaces)
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Retention window in seconds for jobs without an override annotation
    #[arg(long)]
    pub delete_after_seconds: Option<i64>,

    /// Evaluate and log decisions without deleting anything
    #[arg(long)]
    pub dry_run: bool,

    /// Path to config file (overrides default ~/.config/jhe-cleaner/config.toml)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,
}
