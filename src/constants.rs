// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Secret payload keys consumed by the developer hub
pub mod keys {
    pub const APP_PASSWORD: &str = "appPassword";
    pub const HOST: &str = "host";
    pub const USERNAME: &str = "username";
}

/// Configuration feature whose namespace hosts the integration secrets
pub const DEVELOPER_HUB_FEATURE: &str = "developer-hub";

/// BitBucket integration defaults
pub mod bitbucket {
    /// Default host for public BitBucket
    pub const DEFAULT_PUBLIC_HOST: &str = "bitbucket.org";
    /// Name of the secret holding the BitBucket credentials
    pub const SECRET_NAME: &str = "forgelink-bitbucket-integration";
}
