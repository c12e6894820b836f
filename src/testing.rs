// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Test utilities and fake implementations of the crate's trait seams
//!
//! These fakes let integration tests drive event watching and registry
//! verification without sleeping or reaching the network. RPC-dependent paths
//! are tested against alloy's mocked transport instead.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::manifest::DeploymentManifest;
use crate::traits::{Clock, ManifestSource};
use crate::{BindingsError, Result};

// ============================================================================
// Fake Manifest Source
// ============================================================================

/// A manifest source returning pre-configured responses.
///
/// Responses are served in order; the last one repeats once the queue is
/// down to a single entry. An empty source fails every fetch, which is how
/// tests simulate an unreachable registry.
#[derive(Clone, Debug, Default)]
pub struct FakeManifestSource {
    responses: Arc<Mutex<VecDeque<FakeResponse>>>,
    fetch_count: Arc<Mutex<usize>>,
}

#[derive(Clone, Debug)]
enum FakeResponse {
    Manifest(DeploymentManifest),
    Invalid(String),
}

impl FakeManifestSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source that always returns `manifest`
    pub fn returning(manifest: DeploymentManifest) -> Self {
        let source = Self::new();
        source.push_manifest(manifest);
        source
    }

    pub fn push_manifest(&self, manifest: DeploymentManifest) {
        self.responses
            .lock()
            .unwrap()
            .push_back(FakeResponse::Manifest(manifest));
    }

    /// Queue an [`BindingsError::InvalidManifest`] failure
    pub fn push_invalid(&self, reason: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .push_back(FakeResponse::Invalid(reason.into()));
    }

    pub fn fetch_count(&self) -> usize {
        *self.fetch_count.lock().unwrap()
    }
}

#[async_trait]
impl ManifestSource for FakeManifestSource {
    async fn fetch(&self) -> Result<DeploymentManifest> {
        *self.fetch_count.lock().unwrap() += 1;

        let mut responses = self.responses.lock().unwrap();
        let response = if responses.len() > 1 {
            responses.pop_front()
        } else {
            responses.front().cloned()
        };

        match response {
            Some(FakeResponse::Manifest(manifest)) => Ok(manifest),
            Some(FakeResponse::Invalid(reason)) => Err(BindingsError::InvalidManifest(reason)),
            None => Err(BindingsError::InvalidManifest(
                "fake source has no responses".to_string(),
            )),
        }
    }

    fn describe(&self) -> String {
        "fake".to_string()
    }
}

// ============================================================================
// Fake Clock
// ============================================================================

/// A fake clock that allows fast-forwarding time in tests.
///
/// This enables testing polling intervals without actually waiting.
#[derive(Clone, Debug)]
pub struct FakeClock {
    current_time: Arc<Mutex<Instant>>,
    sleep_log: Arc<Mutex<Vec<Duration>>>,
}

impl Default for FakeClock {
    fn default() -> Self {
        Self {
            current_time: Arc::new(Mutex::new(Instant::now())),
            sleep_log: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl FakeClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fast-forward the clock by the given duration
    pub fn advance(&self, duration: Duration) {
        let mut time = self.current_time.lock().unwrap();
        *time += duration;
    }

    /// Get the total time "slept" by this clock
    pub fn total_sleep_time(&self) -> Duration {
        self.sleep_log.lock().unwrap().iter().sum()
    }

    /// Get the number of times sleep was called
    pub fn sleep_count(&self) -> usize {
        self.sleep_log.lock().unwrap().len()
    }

    pub fn clear_sleep_log(&self) {
        self.sleep_log.lock().unwrap().clear();
    }
}

#[async_trait]
impl Clock for FakeClock {
    async fn sleep(&self, duration: Duration) {
        self.sleep_log.lock().unwrap().push(duration);
        self.advance(duration);
    }

    fn now(&self) -> Instant {
        *self.current_time.lock().unwrap()
    }
}
