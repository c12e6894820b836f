// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Tokio-based clock implementation.

use async_trait::async_trait;
use std::time::{Duration, Instant};

use crate::traits::Clock;

/// Clock backed by the system clock and `tokio::time::sleep`.
///
/// This is what [`ContractClient::watch`](crate::ContractClient::watch)
/// uses when no clock is injected.
///
/// ```rust
/// use sky_bindings::providers::TokioClock;
///
/// let clock = TokioClock::new();
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl TokioClock {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_sleep_advances_tokio_time() {
        let clock = TokioClock::new();
        let start = tokio::time::Instant::now();
        clock.sleep(Duration::from_secs(12)).await;
        assert!(start.elapsed() >= Duration::from_secs(12));
    }
}
