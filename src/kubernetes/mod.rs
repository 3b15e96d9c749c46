// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for client creation, namespace and secret management.

pub mod client;
pub mod namespaces;
pub mod secrets;

pub use client::create_client;
pub use namespaces::ensure_namespace_exists;
pub use secrets::{create_secret, delete_secret, secret_exists};
