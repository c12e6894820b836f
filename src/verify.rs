// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Checks of the built-in address tables against the outside world
//!
//! - [`verify_manifest`] diffs the tables against a canonical
//!   [`DeploymentManifest`] fetched from a [`ManifestSource`].
//! - [`verify_bytecode`] asks a node whether every address catalogued for its
//!   chain actually holds code.
//!
//! Both report findings as values; only transport and decoding failures are
//! errors.

use std::fmt;

use alloy_network::Ethereum;
use alloy_primitives::Address;
use alloy_provider::Provider;
use tracing::{debug, info, warn};

use crate::chain::ChainId;
use crate::error::{BindingsError, Result};
use crate::manifest::{DeploymentManifest, Drift};
use crate::registry;
use crate::spans;
use crate::traits::ManifestSource;

/// A catalogued address with no code on its chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingCode {
    pub contract: &'static str,
    pub chain: ChainId,
    pub address: Address,
}

impl fmt::Display for MissingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} has no code at {} on {}",
            self.contract, self.address, self.chain
        )
    }
}

/// Fetches the canonical manifest and diffs the built-in tables against it
///
/// An empty result means every contract and chain agrees.
///
/// ```rust,no_run
/// use sky_bindings::providers::HttpManifestSource;
/// use sky_bindings::verify::verify_manifest;
///
/// # async fn example() -> sky_bindings::Result<()> {
/// let source = HttpManifestSource::parse("https://example.com/deployments.json")?;
/// for drift in verify_manifest(&source).await? {
///     eprintln!("{drift}");
/// }
/// # Ok(())
/// # }
/// ```
pub async fn verify_manifest<S: ManifestSource + ?Sized>(source: &S) -> Result<Vec<Drift>> {
    let origin = source.describe();
    let span = spans::verify_manifest(&origin);
    spans::traced(span, async {
        let canonical = source.fetch().await?;
        let drift = DeploymentManifest::from_registry().diff(&canonical)?;
        tracing::Span::current().record("drift_count", drift.len());

        if drift.is_empty() {
            info!(
                source = %origin,
                contracts = canonical.len(),
                event = "manifest_verified"
            );
        } else {
            for entry in &drift {
                warn!(
                    source = %origin,
                    contract = entry.contract(),
                    chain_id = ?entry.chain_id(),
                    drift = %entry,
                    event = "manifest_drift_detected"
                );
            }
        }

        Ok(drift)
    })
    .await
}

/// Checks that every contract catalogued for `chain` has code on `provider`
///
/// Fails with [`BindingsError::ChainMismatch`] before any `eth_getCode` if
/// the provider is connected to a different chain.
pub async fn verify_bytecode<P: Provider<Ethereum>>(
    provider: &P,
    chain: ChainId,
) -> Result<Vec<MissingCode>> {
    let deployments: Vec<_> = registry::deployed_on(chain).collect();
    let span = spans::verify_bytecode(chain, deployments.len());
    spans::traced(span, async {
        let actual = provider.get_chain_id().await?;
        if actual != chain.as_u64() {
            return Err(BindingsError::ChainMismatch {
                expected: chain,
                actual,
            });
        }

        let mut missing = Vec::new();
        for (config, address) in deployments {
            let code = provider.get_code_at(address).await?;
            debug!(
                contract = config.name,
                contract_address = %address,
                code_size = code.len(),
                event = "bytecode_checked"
            );
            if code.is_empty() {
                warn!(
                    contract = config.name,
                    contract_address = %address,
                    chain = %chain,
                    event = "bytecode_missing"
                );
                missing.push(MissingCode {
                    contract: config.name,
                    chain,
                    address,
                });
            }
        }

        tracing::Span::current().record("missing_count", missing.len());
        Ok(missing)
    })
    .await
}
