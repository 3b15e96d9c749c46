// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster client creation and kubeconfig utilities

use crate::error::{ForgelinkError, Result};
use kube::{
    config::{KubeConfigOptions, Kubeconfig},
    Client,
};
use std::path::Path;
use tracing::debug;

/// Create a Kubernetes client, either from an explicit kubeconfig file or
/// from the environment and default locations
pub async fn create_client(kubeconfig: Option<&Path>) -> Result<Client> {
    match kubeconfig {
        Some(path) => {
            debug!("Creating client from kubeconfig {}", path.display());
            create_client_from_kubeconfig(path).await
        }
        None => Ok(Client::try_default().await?),
    }
}

/// Create a Kubernetes client from a kubeconfig file
async fn create_client_from_kubeconfig(path: &Path) -> Result<Client> {
    let kubeconfig = Kubeconfig::read_from(path).map_err(|e| {
        ForgelinkError::ConfigError(format!("Failed to parse kubeconfig: {}", e))
    })?;

    let client_config =
        kube::Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
            .await
            .map_err(|e| {
                ForgelinkError::ConfigError(format!("Failed to create config: {}", e))
            })?;

    Ok(Client::try_from(client_config)?)
}
