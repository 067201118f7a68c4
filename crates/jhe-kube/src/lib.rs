//! Kubernetes collaborator for the jhe cleaner.
//!
//! Owns everything cluster-facing: building a client from the in-cluster
//! service account or a kubeconfig, listing batch Jobs, converting them to
//! `JobRecord`s, and deleting jobs with not-found treated as benign.

mod client;
mod error;
mod jobs;

pub use client::{connect, ConnectionMode};
pub use error::KubeClientError;
pub use jobs::KubeJobs;
