// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Runtime configuration: RPC endpoints and event polling

use std::collections::BTreeMap;
use std::time::Duration;

use alloy_network::Ethereum;
use alloy_provider::{Provider, ProviderBuilder};
use tracing::{debug, info};
use url::Url;

use crate::chain::ChainId;
use crate::error::{BindingsError, Result};

/// Prefix of the per-chain RPC variables, e.g. `SKY_RPC_URL_BASE`
pub const RPC_URL_PREFIX: &str = "SKY_RPC_URL_";

/// Variable naming the canonical deployment manifest
pub const DEPLOYMENTS_URL_VAR: &str = "SKY_DEPLOYMENTS_URL";

/// RPC endpoints per chain
///
/// Each chain reads `SKY_RPC_URL_<KEY>`, where `<KEY>` is the chain's
/// [`env_key`](ChainId::env_key) (`MAINNET`, `BASE`, ...) or its numeric ID
/// (`SKY_RPC_URL_8453`).
///
/// ```rust
/// use sky_bindings::{ChainId, RpcConfig};
///
/// let config = RpcConfig::from_vars([
///     ("SKY_RPC_URL_BASE", "https://base.example.org"),
///     ("SKY_RPC_URL_10", "https://optimism.example.org"),
///     ("PATH", "/usr/bin"),
/// ])
/// .unwrap();
///
/// assert_eq!(config.chains().collect::<Vec<_>>(), vec![ChainId::Optimism, ChainId::Base]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RpcConfig {
    endpoints: BTreeMap<ChainId, Url>,
    deployments_url: Option<Url>,
}

impl RpcConfig {
    /// Loads `.env` (if present) then reads the process environment
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), event = "dotenv_loaded");
        }
        Self::from_vars(std::env::vars())
    }

    /// Builds a config from key/value pairs, ignoring unrelated keys
    ///
    /// # Errors
    ///
    /// [`BindingsError::InvalidConfig`] for a `SKY_RPC_URL_` suffix that names
    /// no supported chain, [`BindingsError::Url`] for an unparsable URL.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();

        for (key, value) in vars {
            let (key, value) = (key.as_ref(), value.as_ref().trim());
            if value.is_empty() {
                continue;
            }

            if key == DEPLOYMENTS_URL_VAR {
                config.deployments_url = Some(Url::parse(value)?);
                continue;
            }

            let Some(suffix) = key.strip_prefix(RPC_URL_PREFIX) else {
                continue;
            };
            let chain = parse_chain_key(suffix).ok_or_else(|| {
                BindingsError::InvalidConfig(format!("{key} does not name a supported chain"))
            })?;
            config.endpoints.insert(chain, Url::parse(value)?);
        }

        info!(
            chains = ?config.endpoints.keys().collect::<Vec<_>>(),
            has_deployments_url = config.deployments_url.is_some(),
            event = "rpc_config_loaded"
        );

        Ok(config)
    }

    pub fn with_endpoint(mut self, chain: ChainId, url: Url) -> Self {
        self.endpoints.insert(chain, url);
        self
    }

    pub fn with_deployments_url(mut self, url: Url) -> Self {
        self.deployments_url = Some(url);
        self
    }

    pub fn endpoint(&self, chain: ChainId) -> Option<&Url> {
        self.endpoints.get(&chain)
    }

    /// Chains with a configured endpoint, in chain ID order
    pub fn chains(&self) -> impl Iterator<Item = ChainId> + '_ {
        self.endpoints.keys().copied()
    }

    /// Canonical manifest URL from `SKY_DEPLOYMENTS_URL`
    pub fn deployments_url(&self) -> Option<&Url> {
        self.deployments_url.as_ref()
    }

    /// Builds an HTTP provider for `chain` with the recommended fillers
    pub fn connect(&self, chain: ChainId) -> Result<impl Provider<Ethereum> + Clone> {
        let url = self.endpoint(chain).cloned().ok_or_else(|| {
            BindingsError::InvalidConfig(format!(
                "no RPC endpoint for {chain}; set {RPC_URL_PREFIX}{}",
                chain.env_key()
            ))
        })?;

        debug!(chain = %chain, url = %url, event = "provider_connecting");
        Ok(ProviderBuilder::new().connect_http(url))
    }
}

fn parse_chain_key(suffix: &str) -> Option<ChainId> {
    if let Ok(id) = suffix.parse::<u64>() {
        return ChainId::from_u64(id);
    }
    ChainId::ALL
        .into_iter()
        .find(|chain| chain.env_key().eq_ignore_ascii_case(suffix))
}

/// Event polling behaviour for [`EventWatcher`](crate::EventWatcher)
///
/// ```rust
/// use sky_bindings::{ChainId, WatchConfig};
///
/// let config = WatchConfig::default().with_max_block_range(250);
/// assert_eq!(config.max_block_range, 250);
///
/// assert_eq!(WatchConfig::for_chain(ChainId::Base), WatchConfig::l2());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchConfig {
    /// Seconds between `eth_getLogs` polls
    pub poll_interval_secs: u64,
    /// Largest block span fetched by one poll
    pub max_block_range: u64,
}

impl Default for WatchConfig {
    /// One poll per mainnet slot, up to 1000 blocks per request
    fn default() -> Self {
        Self {
            poll_interval_secs: 12,
            max_block_range: 1_000,
        }
    }
}

impl WatchConfig {
    /// Preset for rollups with ~2 second blocks
    pub fn l2() -> Self {
        Self {
            poll_interval_secs: 2,
            max_block_range: 2_000,
        }
    }

    pub fn for_chain(chain: ChainId) -> Self {
        if chain.is_l2() {
            Self::l2()
        } else {
            Self::default()
        }
    }

    pub fn with_poll_interval_secs(mut self, secs: u64) -> Self {
        self.poll_interval_secs = secs;
        self
    }

    /// Sets the block span per poll; zero is raised to one
    pub fn with_max_block_range(mut self, blocks: u64) -> Self {
        self.max_block_range = blocks.max(1);
        self
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("SKY_RPC_URL_MAINNET", ChainId::Mainnet)]
    #[case("SKY_RPC_URL_optimism", ChainId::Optimism)]
    #[case("SKY_RPC_URL_130", ChainId::Unichain)]
    #[case("SKY_RPC_URL_VIRTUAL_TESTNET", ChainId::VirtualTestnet)]
    #[case("SKY_RPC_URL_314310", ChainId::VirtualTestnet)]
    fn test_chain_keys(#[case] key: &str, #[case] chain: ChainId) {
        let config = RpcConfig::from_vars([(key, "http://localhost:8545")]).unwrap();
        assert_eq!(
            config.endpoint(chain).map(Url::as_str),
            Some("http://localhost:8545/")
        );
    }

    #[rstest]
    #[case("SKY_RPC_URL_POLYGON")]
    #[case("SKY_RPC_URL_137")]
    fn test_unknown_chain_rejected(#[case] key: &str) {
        let err = RpcConfig::from_vars([(key, "http://localhost:8545")]).unwrap_err();
        assert!(matches!(err, BindingsError::InvalidConfig(_)));
    }

    #[test]
    fn test_bad_url_rejected() {
        let err = RpcConfig::from_vars([("SKY_RPC_URL_BASE", "not a url")]).unwrap_err();
        assert!(matches!(err, BindingsError::Url(_)));
    }

    #[test]
    fn test_empty_values_skipped() {
        let config = RpcConfig::from_vars([("SKY_RPC_URL_BASE", "  ")]).unwrap();
        assert_eq!(config.chains().count(), 0);
    }

    #[test]
    fn test_deployments_url() {
        let config =
            RpcConfig::from_vars([(DEPLOYMENTS_URL_VAR, "https://example.org/deployments.json")])
                .unwrap();
        assert_eq!(
            config.deployments_url().map(Url::as_str),
            Some("https://example.org/deployments.json")
        );
    }

    #[test]
    fn test_connect_requires_endpoint() {
        let config = RpcConfig::default();
        let err = config.connect(ChainId::Arbitrum).err().unwrap();
        insta::assert_snapshot!(
            err.to_string(),
            @"Invalid configuration: no RPC endpoint for Arbitrum One (42161); set SKY_RPC_URL_ARBITRUM"
        );

        let config = config.with_endpoint(
            ChainId::Arbitrum,
            Url::parse("http://localhost:8545").unwrap(),
        );
        assert!(config.connect(ChainId::Arbitrum).is_ok());
    }

    #[test]
    fn test_watch_presets() {
        assert_eq!(WatchConfig::for_chain(ChainId::Mainnet), WatchConfig::default());
        assert_eq!(WatchConfig::for_chain(ChainId::VirtualTestnet), WatchConfig::default());
        assert_eq!(WatchConfig::for_chain(ChainId::Unichain).poll_interval_secs, 2);
        assert_eq!(WatchConfig::default().poll_interval(), Duration::from_secs(12));
        assert_eq!(WatchConfig::default().with_max_block_range(0).max_block_range, 1);
    }
}
