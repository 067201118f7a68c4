//! jhe-cleaner
//!
//! Run-once garbage collector for completed batch Jobs. Intended to be
//! invoked repeatedly by an external scheduler (a CronJob or a systemd
//! timer); one invocation performs exactly one sweep.
//!
//! # Usage
//!
//! ```bash
//! jhe-cleaner --in-cluster
//! jhe-cleaner --kubeconfig ~/.kube/config --namespace batch --dry-run
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded in order (later sources override earlier):
//! 1. Built-in defaults
//! 2. Config file (~/.config/jhe-cleaner/config.toml)
//! 3. Environment variables (JHE_*)
//! 4. CLI flags

use anyhow::Result;
use clap::Parser;

use jhe_cleaner::{run_once, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    run_once(cli).await
}
