// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Source-control integration provisioners.

pub mod bitbucket;

pub use bitbucket::BitBucketIntegration;
