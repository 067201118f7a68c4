//! Cluster client construction.
//!
//! Two connection modes, matching the deployment styles of the cleaner:
//! running inside the cluster with a mounted service account, or outside it
//! against a kubeconfig.

use std::path::PathBuf;

use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use tracing::info;

use crate::error::KubeClientError;

/// How to reach the cluster control plane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionMode {
    /// Use the in-cluster service account configuration.
    InCluster,

    /// Use a kubeconfig file. `None` applies the standard resolution
    /// (`$KUBECONFIG`, then `~/.kube/config`) with the current context.
    Kubeconfig(Option<PathBuf>),
}

impl ConnectionMode {
    /// Derive the mode from the cleaner settings.
    pub fn from_settings(in_cluster: bool, kubeconfig: Option<&str>) -> Self {
        if in_cluster {
            ConnectionMode::InCluster
        } else {
            ConnectionMode::Kubeconfig(kubeconfig.map(PathBuf::from))
        }
    }
}

/// Build a client for the given connection mode.
///
/// # Errors
///
/// Returns `KubeClientError::InCluster` when the service account config is
/// unavailable, `KubeClientError::Kubeconfig` when the kubeconfig cannot be
/// loaded, and `KubeClientError::Client` when the client cannot be built
/// from the resolved configuration.
pub async fn connect(mode: &ConnectionMode) -> Result<Client, KubeClientError> {
    let config = match mode {
        ConnectionMode::InCluster => {
            info!("Using in-cluster configuration");
            Config::incluster().map_err(|e| KubeClientError::InCluster(e.to_string()))?
        }
        ConnectionMode::Kubeconfig(Some(path)) => {
            info!(path = %path.display(), "Using kubeconfig");
            let kubeconfig = Kubeconfig::read_from(path)
                .map_err(|e| KubeClientError::Kubeconfig(e.to_string()))?;
            Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
                .await
                .map_err(|e| KubeClientError::Kubeconfig(e.to_string()))?
        }
        ConnectionMode::Kubeconfig(None) => {
            info!("Using default kubeconfig resolution");
            Config::from_kubeconfig(&KubeConfigOptions::default())
                .await
                .map_err(|e| KubeClientError::Kubeconfig(e.to_string()))?
        }
    };

    Client::try_from(config).map_err(|e| KubeClientError::Client(e.to_string()))
}
