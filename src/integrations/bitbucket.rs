// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! BitBucket integration secret provisioning

use crate::constants::{bitbucket, keys};
use crate::error::{ForgelinkError, Result};
use crate::kubernetes::{create_secret, delete_secret, ensure_namespace_exists, secret_exists};
use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::ByteString;
use kube::{api::ObjectMeta, Client};
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

/// Provisions the BitBucket integration secret consumed by the developer hub.
///
/// The target namespace is resolved from configuration once, before
/// construction, and stays fixed for the whole provisioning run.
pub struct BitBucketIntegration {
    client: Client,
    namespace: String,

    /// Overwrite the existing secret
    force: bool,

    /// BitBucket application password
    app_password: String,
    /// BitBucket host
    host: String,
    /// BitBucket username
    username: String,
}

impl BitBucketIntegration {
    pub fn new(
        client: Client,
        namespace: String,
        force: bool,
        app_password: String,
        host: String,
        username: String,
    ) -> Self {
        Self {
            client,
            namespace,
            force,
            app_password,
            host,
            username,
        }
    }

    /// Fully qualified namespace/name of the integration secret
    fn secret_ref(&self) -> String {
        format!("{}/{}", self.namespace, bitbucket::SECRET_NAME)
    }

    /// Check that the required credentials are set. An empty host is
    /// replaced by the public BitBucket default before anything reads it.
    pub fn validate(&mut self) -> Result<()> {
        if self.app_password.is_empty() {
            return Err(ForgelinkError::MissingField("app-password"));
        }
        if self.host.is_empty() {
            self.host = bitbucket::DEFAULT_PUBLIC_HOST.to_string();
        }
        if self.username.is_empty() {
            return Err(ForgelinkError::MissingField("username"));
        }
        Ok(())
    }

    /// Ensure the namespace for the integration secret exists on the cluster
    #[instrument(skip(self), fields(namespace = %self.namespace))]
    pub async fn ensure_namespace(&self) -> Result<()> {
        ensure_namespace_exists(&self.client, &self.namespace).await
    }

    /// Create the BitBucket integration secret on the cluster
    #[instrument(skip(self), fields(
        secret = %self.secret_ref(),
        force = self.force,
        host = %self.host,
        username = %self.username,
        app_password_len = self.app_password.len(),
    ))]
    pub async fn create(&self) -> Result<()> {
        info!("Inspecting the cluster for an existing BitBucket integration secret");
        self.prepare_secret().await?;
        self.store().await
    }

    /// Check if the secret already exists, deleting it when the force flag
    /// is enabled. Note the exists-then-act sequence is not guarded against
    /// concurrent external mutation.
    async fn prepare_secret(&self) -> Result<()> {
        debug!("Checking if integration secret exists");
        let exists =
            secret_exists(&self.client, &self.namespace, bitbucket::SECRET_NAME).await?;
        if !exists {
            debug!("Integration secret does not exist");
            return Ok(());
        }
        if !self.force {
            debug!("Integration secret already exists");
            return Err(ForgelinkError::SecretAlreadyExists(self.secret_ref()));
        }
        debug!("Integration secret already exists, recreating it");
        delete_secret(&self.client, &self.namespace, bitbucket::SECRET_NAME).await
    }

    /// Create the secret with the integration data
    async fn store(&self) -> Result<()> {
        let secret = Secret {
            metadata: ObjectMeta {
                namespace: Some(self.namespace.clone()),
                name: Some(bitbucket::SECRET_NAME.to_string()),
                ..Default::default()
            },
            type_: Some("Opaque".to_string()),
            data: Some(BTreeMap::from([
                (
                    keys::APP_PASSWORD.to_string(),
                    ByteString(self.app_password.clone().into_bytes()),
                ),
                (
                    keys::HOST.to_string(),
                    ByteString(self.host.clone().into_bytes()),
                ),
                (
                    keys::USERNAME.to_string(),
                    ByteString(self.username.clone().into_bytes()),
                ),
            ])),
            ..Default::default()
        };

        debug!("Creating integration secret {}", self.secret_ref());
        create_secret(&self.client, &self.namespace, &secret).await?;
        info!("Integration secret {} created successfully", self.secret_ref());
        Ok(())
    }
}
