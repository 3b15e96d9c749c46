// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use clap::Parser;
use tracing::info;

use forgelink::cli::{Args, Command};
use forgelink::config::Config;
use forgelink::constants::DEVELOPER_HUB_FEATURE;
use forgelink::integrations::BitBucketIntegration;
use forgelink::kubernetes::create_client;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    // Load configuration
    let config = Config::from_file(&args.config)?;

    // Create Kubernetes client
    let client = create_client(args.kubeconfig.as_deref()).await?;
    info!("Connected to Kubernetes cluster");

    match args.command {
        Command::Bitbucket(bb) => {
            // The target namespace is resolved once, after configuration load
            let namespace = config.feature_namespace(DEVELOPER_HUB_FEATURE)?.to_string();

            let mut integration = BitBucketIntegration::new(
                client,
                namespace,
                bb.force,
                bb.app_password,
                bb.host,
                bb.username,
            );

            integration.validate()?;
            integration.ensure_namespace().await?;
            integration.create().await?;
        }
    }

    Ok(())
}
