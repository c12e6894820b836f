// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Deployment manifests and drift detection
//!
//! A [`DeploymentManifest`] is the serialisable form of the address tables:
//! contract name to chain ID to checksummed address. The built-in tables
//! render to one with [`DeploymentManifest::from_registry`]; a canonical
//! registry publishes another, and [`DeploymentManifest::diff`] lists every
//! place the two disagree.
//!
//! ```rust
//! use sky_bindings::DeploymentManifest;
//!
//! let local = DeploymentManifest::from_registry();
//! let canonical = local.clone();
//! assert!(local.diff(&canonical).unwrap().is_empty());
//! ```

use std::collections::BTreeMap;
use std::fmt;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chain::ChainId;
use crate::deployments::ALL;
use crate::error::{BindingsError, Result};

/// Contract name to chain ID to address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentManifest {
    pub contracts: BTreeMap<String, BTreeMap<u64, String>>,
}

impl DeploymentManifest {
    /// Renders the built-in address tables, addresses in EIP-55 form
    pub fn from_registry() -> Self {
        let contracts = ALL
            .iter()
            .map(|config| {
                let chains = config
                    .address
                    .iter()
                    .map(|entry| (entry.chain.as_u64(), entry.address.to_checksum(None)))
                    .collect();
                (config.name.to_string(), chains)
            })
            .collect();

        Self { contracts }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Raw address string recorded for `contract` on `chain_id`
    pub fn address(&self, contract: &str, chain_id: u64) -> Option<&str> {
        self.contracts
            .get(contract)
            .and_then(|chains| chains.get(&chain_id))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }

    /// Compares this manifest against an authoritative one
    ///
    /// Addresses are compared as parsed values, so case differences are not
    /// drift. Drift entries come out sorted by contract name, then chain ID.
    ///
    /// # Errors
    ///
    /// Returns [`BindingsError::InvalidManifest`] if either side holds a
    /// string that is not a 20-byte hex address.
    pub fn diff(&self, canonical: &DeploymentManifest) -> Result<Vec<Drift>> {
        let mut drift = Vec::new();

        for (name, canonical_chains) in &canonical.contracts {
            let Some(local_chains) = self.contracts.get(name) else {
                drift.push(Drift::MissingContract {
                    contract: name.clone(),
                });
                continue;
            };

            for (&chain_id, canonical_raw) in canonical_chains {
                let expected = parse_address(name, chain_id, canonical_raw)?;
                match local_chains.get(&chain_id) {
                    None => drift.push(Drift::MissingDeployment {
                        contract: name.clone(),
                        chain_id,
                        expected,
                    }),
                    Some(local_raw) => {
                        let local = parse_address(name, chain_id, local_raw)?;
                        if local != expected {
                            drift.push(Drift::AddressMismatch {
                                contract: name.clone(),
                                chain_id,
                                local,
                                canonical: expected,
                            });
                        }
                    }
                }
            }

            for (&chain_id, local_raw) in local_chains {
                if !canonical_chains.contains_key(&chain_id) {
                    drift.push(Drift::UnexpectedDeployment {
                        contract: name.clone(),
                        chain_id,
                        local: parse_address(name, chain_id, local_raw)?,
                    });
                }
            }
        }

        for name in self.contracts.keys() {
            if !canonical.contracts.contains_key(name) {
                drift.push(Drift::UnknownContract {
                    contract: name.clone(),
                });
            }
        }

        drift.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

        debug!(
            canonical_contracts = canonical.len(),
            local_contracts = self.len(),
            drift_count = drift.len(),
            event = "manifest_diff_computed"
        );

        Ok(drift)
    }
}

fn parse_address(contract: &str, chain_id: u64, raw: &str) -> Result<Address> {
    raw.parse().map_err(|_| {
        BindingsError::InvalidManifest(format!(
            "{contract} on chain {chain_id}: `{raw}` is not an address"
        ))
    })
}

/// One disagreement between the built-in tables and a canonical manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Drift {
    /// The canonical registry knows a contract the tables lack
    MissingContract { contract: String },
    /// The tables carry a contract the canonical registry does not list
    UnknownContract { contract: String },
    MissingDeployment {
        contract: String,
        chain_id: u64,
        expected: Address,
    },
    UnexpectedDeployment {
        contract: String,
        chain_id: u64,
        local: Address,
    },
    AddressMismatch {
        contract: String,
        chain_id: u64,
        local: Address,
        canonical: Address,
    },
}

impl Drift {
    pub fn contract(&self) -> &str {
        match self {
            Self::MissingContract { contract }
            | Self::UnknownContract { contract }
            | Self::MissingDeployment { contract, .. }
            | Self::UnexpectedDeployment { contract, .. }
            | Self::AddressMismatch { contract, .. } => contract,
        }
    }

    pub fn chain_id(&self) -> Option<u64> {
        match self {
            Self::MissingContract { .. } | Self::UnknownContract { .. } => None,
            Self::MissingDeployment { chain_id, .. }
            | Self::UnexpectedDeployment { chain_id, .. }
            | Self::AddressMismatch { chain_id, .. } => Some(*chain_id),
        }
    }

    fn sort_key(&self) -> (&str, u64) {
        (self.contract(), self.chain_id().unwrap_or(0))
    }
}

struct ChainLabel(u64);

impl fmt::Display for ChainLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match ChainId::from_u64(self.0) {
            Some(chain) => write!(f, "{chain}"),
            None => write!(f, "chain {}", self.0),
        }
    }
}

impl fmt::Display for Drift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingContract { contract } => {
                write!(f, "{contract}: listed in the canonical registry, missing locally")
            }
            Self::UnknownContract { contract } => {
                write!(f, "{contract}: not listed in the canonical registry")
            }
            Self::MissingDeployment {
                contract,
                chain_id,
                expected,
            } => write!(
                f,
                "{contract} on {}: missing locally, canonical address {expected}",
                ChainLabel(*chain_id)
            ),
            Self::UnexpectedDeployment {
                contract,
                chain_id,
                local,
            } => write!(
                f,
                "{contract} on {}: local address {local} has no canonical entry",
                ChainLabel(*chain_id)
            ),
            Self::AddressMismatch {
                contract,
                chain_id,
                local,
                canonical,
            } => write!(
                f,
                "{contract} on {}: local {local} != canonical {canonical}",
                ChainLabel(*chain_id)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    fn manifest(entries: &[(&str, u64, &str)]) -> DeploymentManifest {
        let mut manifest = DeploymentManifest::default();
        for (name, chain_id, addr) in entries {
            manifest
                .contracts
                .entry(name.to_string())
                .or_default()
                .insert(*chain_id, addr.to_string());
        }
        manifest
    }

    #[test]
    fn test_from_registry_renders_checksummed_addresses() {
        let manifest = DeploymentManifest::from_registry();
        assert_eq!(manifest.len(), ALL.len());

        let usds = manifest.address("usds", 1).unwrap();
        let parsed: Address = usds.parse().unwrap();
        assert_eq!(usds, parsed.to_checksum(None));
        assert!(Address::parse_checksummed(usds, None).is_ok());
    }

    #[test]
    fn test_json_keys_are_chain_ids() {
        let manifest = manifest(&[("multicall3", 8453, "0xcA11bde05977b3631167028862bE2a173976CA11")]);
        let json = manifest.to_json_pretty().unwrap();
        insta::assert_snapshot!(json, @r#"
        {
          "contracts": {
            "multicall3": {
              "8453": "0xcA11bde05977b3631167028862bE2a173976CA11"
            }
          }
        }
        "#);
        assert_eq!(DeploymentManifest::from_json(&json).unwrap(), manifest);
    }

    #[test]
    fn test_diff_ignores_case() {
        let local = manifest(&[("dai", 1, "0x6B175474E89094C44Da98b954EedeAC495271d0F")]);
        let canonical = manifest(&[("dai", 1, "0x6b175474e89094c44da98b954eedeac495271d0f")]);
        assert!(local.diff(&canonical).unwrap().is_empty());
    }

    #[test]
    fn test_diff_reports_every_kind() {
        let local = manifest(&[
            ("dai", 1, "0x6B175474E89094C44Da98b954EedeAC495271d0F"),
            ("dai", 10, "0x0000000000000000000000000000000000000001"),
            ("legacy", 1, "0x0000000000000000000000000000000000000002"),
            ("usdc", 1, "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"),
        ]);
        let canonical = manifest(&[
            ("dai", 1, "0x6B175474E89094C44Da98b954EedeAC495271d0F"),
            ("dai", 8453, "0x0000000000000000000000000000000000000003"),
            ("newToken", 1, "0x0000000000000000000000000000000000000004"),
            ("usdc", 1, "0x0000000000000000000000000000000000000005"),
        ]);

        let drift = local.diff(&canonical).unwrap();
        let rendered: Vec<String> = drift.iter().map(ToString::to_string).collect();
        insta::assert_snapshot!(rendered.join("\n"), @r"
        dai on OP Mainnet (10): local address 0x0000000000000000000000000000000000000001 has no canonical entry
        dai on Base (8453): missing locally, canonical address 0x0000000000000000000000000000000000000003
        legacy: not listed in the canonical registry
        newToken: listed in the canonical registry, missing locally
        usdc on Ethereum (1): local 0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48 != canonical 0x0000000000000000000000000000000000000005
        ");

        assert_eq!(
            drift[4],
            Drift::AddressMismatch {
                contract: "usdc".into(),
                chain_id: 1,
                local: address!("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"),
                canonical: address!("0x0000000000000000000000000000000000000005"),
            }
        );
    }

    #[test]
    fn test_diff_unknown_chain_label() {
        let local = DeploymentManifest::default();
        let canonical = manifest(&[("weth", 137, "0x7ceB23fD6bC0adD59E62ac25578270cFf1b9f619")]);
        let drift = local.diff(&canonical).unwrap();
        assert_eq!(drift.len(), 1);
        assert_eq!(drift[0].to_string(), "weth: listed in the canonical registry, missing locally");

        let local = manifest(&[("weth", 1, "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2")]);
        let canonical = manifest(&[
            ("weth", 1, "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
            ("weth", 137, "0x7ceB23fD6bC0adD59E62ac25578270cFf1b9f619"),
        ]);
        let drift = local.diff(&canonical).unwrap();
        assert_eq!(drift[0].chain_id(), Some(137));
        assert!(drift[0].to_string().starts_with("weth on chain 137:"));
    }

    #[test]
    fn test_diff_rejects_malformed_address() {
        let local = manifest(&[("dai", 1, "0x6B175474E89094C44Da98b954EedeAC495271d0F")]);
        let canonical = manifest(&[("dai", 1, "0x1234")]);
        let err = local.diff(&canonical).unwrap_err();
        assert!(matches!(err, BindingsError::InvalidManifest(_)));
        assert!(err.to_string().contains("dai on chain 1"));
    }
}
