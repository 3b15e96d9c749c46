// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Secret existence, deletion, and creation utilities

use crate::error::Result;
use k8s_openapi::api::core::v1::Secret;
use kube::{
    api::{DeleteParams, PostParams},
    Api, Client,
};
use tracing::{debug, instrument};

/// Check whether a secret exists, treating 404 as absence
#[instrument(skip(client))]
pub async fn secret_exists(client: &Client, namespace: &str, name: &str) -> Result<bool> {
    let secrets: Api<Secret> = Api::namespaced(client.clone(), namespace);

    match secrets.get(name).await {
        Ok(_) => Ok(true),
        Err(kube::Error::Api(err)) if err.code == 404 => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Delete a secret by namespace and name
#[instrument(skip(client))]
pub async fn delete_secret(client: &Client, namespace: &str, name: &str) -> Result<()> {
    let secrets: Api<Secret> = Api::namespaced(client.clone(), namespace);

    debug!("Deleting secret {}/{}", namespace, name);
    secrets.delete(name, &DeleteParams::default()).await?;
    Ok(())
}

/// Create a secret in the given namespace
#[instrument(skip(client, secret), fields(
    name = %secret.metadata.name.as_deref().unwrap_or_default()
))]
pub async fn create_secret(client: &Client, namespace: &str, secret: &Secret) -> Result<Secret> {
    let secrets: Api<Secret> = Api::namespaced(client.clone(), namespace);

    debug!("Creating secret");
    Ok(secrets.create(&PostParams::default(), secret).await?)
}
