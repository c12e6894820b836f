// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Trait seams for the parts of the crate that touch time or the network
//! outside an RPC provider.
//!
//! Event watching sleeps between polls through [`Clock`], and registry
//! verification fetches the canonical manifest through [`ManifestSource`].
//! Both have production implementations in [`crate::providers`] and fakes in
//! [`crate::testing`], so polling loops and drift reports can be tested
//! without waiting or hitting HTTP.
//!
//! # Example: a fixed manifest source
//!
//! ```rust
//! use async_trait::async_trait;
//! use sky_bindings::traits::ManifestSource;
//! use sky_bindings::{DeploymentManifest, Result};
//!
//! struct Pinned(DeploymentManifest);
//!
//! #[async_trait]
//! impl ManifestSource for Pinned {
//!     async fn fetch(&self) -> Result<DeploymentManifest> {
//!         Ok(self.0.clone())
//!     }
//! }
//! ```

use async_trait::async_trait;
use std::time::{Duration, Instant};

use crate::error::Result;
use crate::manifest::DeploymentManifest;

/// Trait for time-based operations.
///
/// Lets tests drive [`EventWatcher`](crate::EventWatcher) polling loops
/// without actually waiting.
#[async_trait]
pub trait Clock: Send + Sync {
    /// Asynchronously sleeps for the given duration.
    async fn sleep(&self, duration: Duration);

    /// Returns the current instant in time.
    fn now(&self) -> Instant;
}

/// Source of the canonical deployment manifest.
///
/// # Errors
///
/// Implementations return transport errors as-is and
/// [`BindingsError::InvalidManifest`](crate::BindingsError::InvalidManifest)
/// for a body that is not a manifest.
#[async_trait]
pub trait ManifestSource: Send + Sync {
    async fn fetch(&self) -> Result<DeploymentManifest>;

    /// Human readable origin, used in logs
    fn describe(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }
}
