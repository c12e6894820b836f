// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Lookups across the whole contract catalogue

use alloy_primitives::Address;

use crate::chain::ChainId;
use crate::deployments::{ContractConfig, ALL};
use crate::manifest::DeploymentManifest;

/// Every config object, in catalogue order
pub fn all() -> &'static [ContractConfig] {
    ALL
}

/// Finds a contract by catalogue name, ignoring ASCII case
///
/// ```rust
/// use sky_bindings::registry;
///
/// assert_eq!(registry::find("SUSDS").unwrap().name, "sUsds");
/// assert!(registry::find("sUsde").is_none());
/// ```
pub fn find(name: &str) -> Option<&'static ContractConfig> {
    ALL.iter().find(|config| config.name.eq_ignore_ascii_case(name))
}

/// Contracts deployed on `chain`, paired with their address there
pub fn deployed_on(
    chain: ChainId,
) -> impl Iterator<Item = (&'static ContractConfig, Address)> + 'static {
    ALL.iter()
        .filter_map(move |config| config.address.get(chain).map(|address| (config, address)))
}

/// Reverse lookup: which catalogued contract lives at `address` on `chain`
pub fn lookup(chain: ChainId, address: Address) -> Option<&'static ContractConfig> {
    deployed_on(chain)
        .find(|(_, deployed)| *deployed == address)
        .map(|(config, _)| config)
}

/// The built-in tables as a [`DeploymentManifest`]
pub fn manifest() -> DeploymentManifest {
    DeploymentManifest::from_registry()
}
