//! Error types for cluster client construction.

use thiserror::Error;

/// Errors that can occur while building the Kubernetes client.
#[derive(Debug, Error)]
pub enum KubeClientError {
    /// In-cluster configuration unavailable (not running in a pod, or the
    /// service account is not mounted).
    #[error("In-cluster configuration unavailable: {0}")]
    InCluster(String),

    /// Kubeconfig file missing or invalid.
    #[error("Failed to load kubeconfig: {0}")]
    Kubeconfig(String),

    /// Client could not be built from the resolved configuration.
    #[error("Failed to build Kubernetes client: {0}")]
    Client(String),
}
