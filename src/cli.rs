// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Command line interface structures

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Clone, Debug)]
#[command(about = "Provision source-control integration secrets on a cluster")]
pub struct Args {
    /// Location of the installer configuration
    #[arg(short = 'c', long = "config", global = true, default_value = "config.yaml")]
    pub config: PathBuf,
    /// Location of kubeconfig, inferred from the environment when unset
    #[arg(short = 'k', long = "kubeconfig", global = true)]
    pub kubeconfig: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Command {
    /// Provision the BitBucket integration secret
    Bitbucket(BitBucketArgs),
}

/// Flags for the BitBucket integration. Required fields are checked by
/// validation, not by the parser, so missing credentials surface as
/// validation errors rather than usage errors.
#[derive(clap::Args, Clone, Debug)]
pub struct BitBucketArgs {
    /// Overwrite the existing secret
    #[arg(long)]
    pub force: bool,
    /// BitBucket application password
    #[arg(long = "app-password", default_value = "")]
    pub app_password: String,
    /// BitBucket host, defaults to 'bitbucket.org'
    #[arg(long, default_value = "")]
    pub host: String,
    /// BitBucket username
    #[arg(long, default_value = "")]
    pub username: String,
}
