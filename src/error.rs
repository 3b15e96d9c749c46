// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForgelinkError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("secret already exists: {0}")]
    SecretAlreadyExists(String),

    #[error("unknown feature: {0}")]
    UnknownFeature(String),

    #[error("Failed to load configuration: {0}")]
    ConfigError(String),

    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Namespace creation failed: {0}")]
    NamespaceError(String),
}

pub type Result<T> = std::result::Result<T, ForgelinkError>;
