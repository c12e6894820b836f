// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Batch call helpers for efficient RPC operations.
//!
//! Fetching an account's balance and allowance before a vault deposit, a PSM
//! swap or a farm stake is the most common pre-flight check against the
//! catalogue. These helpers issue the reads concurrently.
//!
//! # Example
//!
//! ```rust,no_run
//! use sky_bindings::{batch_token_state_for, ChainId, Deployment, SUsds, Usds};
//! use alloy_primitives::{Address, U256};
//! use alloy_provider::ProviderBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = ProviderBuilder::new().connect("http://localhost:8545").await?;
//! let owner = Address::repeat_byte(0x11);
//! let vault = SUsds::address_on(ChainId::Mainnet)?;
//!
//! let state = batch_token_state_for::<Usds, _>(&provider, ChainId::Mainnet, owner, vault).await?;
//! if state.needs_approval(U256::from(1_000u64)) {
//!     // approve first
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Implementation Note
//!
//! These helpers use `tokio::join!` rather than on-chain Multicall3, so they
//! also work on the virtual testnet, where Multicall3 may be absent.

use crate::chain::ChainId;
use crate::contracts::erc20::Erc20Contract;
use crate::deployments::Deployment;
use crate::error::Result;
use alloy_network::Ethereum;
use alloy_primitives::{Address, U256};
use alloy_provider::Provider;
use tracing::{debug, info};

/// Batch check token allowance and balance in parallel RPC calls.
///
/// Returns `(allowance, balance)`.
pub async fn batch_token_checks<P>(
    provider: &P,
    token: Address,
    owner: Address,
    spender: Address,
) -> Result<(U256, U256)>
where
    P: Provider<Ethereum> + Clone,
{
    debug!(
        token = %token,
        owner = %owner,
        spender = %spender,
        event = "batch_token_checks_started"
    );

    let erc20 = Erc20Contract::new(token, provider.clone());

    let (allowance, balance) =
        tokio::join!(erc20.allowance(owner, spender), erc20.balance_of(owner));
    let allowance = allowance?;
    let balance = balance?;

    info!(
        token = %token,
        owner = %owner,
        spender = %spender,
        allowance = %allowance,
        balance = %balance,
        event = "batch_token_checks_completed"
    );

    Ok((allowance, balance))
}

/// Token state containing balance and allowance information.
///
/// Returned by [`batch_token_state`] to provide a structured view
/// of an account's token state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenState {
    /// The token balance of the owner
    pub balance: U256,
    /// The allowance granted to the spender
    pub allowance: U256,
}

impl TokenState {
    /// Returns `true` if balance >= amount AND allowance >= amount.
    pub fn can_transfer(&self, amount: U256) -> bool {
        self.balance >= amount && self.allowance >= amount
    }

    /// Returns `true` if allowance < amount.
    pub fn needs_approval(&self, amount: U256) -> bool {
        self.allowance < amount
    }

    pub fn has_sufficient_balance(&self, amount: U256) -> bool {
        self.balance >= amount
    }
}

/// Batch check token state (balance and allowance) returning a structured result.
pub async fn batch_token_state<P>(
    provider: &P,
    token: Address,
    owner: Address,
    spender: Address,
) -> Result<TokenState>
where
    P: Provider<Ethereum> + Clone,
{
    let (allowance, balance) = batch_token_checks(provider, token, owner, spender).await?;
    Ok(TokenState { balance, allowance })
}

/// [`batch_token_state`] for the catalogued token `C` on `chain`
///
/// Fails with [`BindingsError::NotDeployed`](crate::BindingsError::NotDeployed)
/// before any RPC if the token has no deployment there.
pub async fn batch_token_state_for<C, P>(
    provider: &P,
    chain: ChainId,
    owner: Address,
    spender: Address,
) -> Result<TokenState>
where
    C: Deployment,
    P: Provider<Ethereum> + Clone,
{
    let token = C::address_on(chain)?;
    batch_token_state(provider, token, owner, spender).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deployments::{Dai, Usds};
    use crate::BindingsError;
    use alloy_primitives::Bytes;
    use alloy_provider::ProviderBuilder;
    use alloy_sol_types::SolValue;
    use alloy_transport::mock::Asserter;

    #[test]
    fn test_token_state_can_transfer() {
        let state = TokenState {
            balance: U256::from(1000),
            allowance: U256::from(500),
        };

        assert!(state.can_transfer(U256::from(500)));
        assert!(state.can_transfer(U256::from(100)));
        assert!(!state.can_transfer(U256::from(501))); // exceeds allowance
        assert!(!state.can_transfer(U256::from(1001))); // exceeds balance
    }

    #[test]
    fn test_token_state_needs_approval() {
        let state = TokenState {
            balance: U256::from(1000),
            allowance: U256::from(500),
        };

        assert!(!state.needs_approval(U256::from(500)));
        assert!(state.needs_approval(U256::from(501)));
        assert!(state.needs_approval(U256::from(1000)));
    }

    #[test]
    fn test_token_state_zero_allowance() {
        let state = TokenState {
            balance: U256::from(1000),
            allowance: U256::ZERO,
        };

        assert!(!state.can_transfer(U256::from(1)));
        assert!(state.needs_approval(U256::from(1)));
        assert!(state.has_sufficient_balance(U256::from(1000)));
    }

    #[tokio::test]
    async fn test_batch_token_state_for_reads_both_values() {
        let asserter = Asserter::new();
        // join! polls the allowance call first, so it takes the first response
        asserter.push_success(&Bytes::from(U256::from(250).abi_encode()));
        asserter.push_success(&Bytes::from(U256::from(5_000).abi_encode()));
        let provider = ProviderBuilder::new()
            .disable_recommended_fillers()
            .connect_mocked_client(asserter);

        let state = batch_token_state_for::<Usds, _>(
            &provider,
            ChainId::Mainnet,
            Address::repeat_byte(0x11),
            Address::repeat_byte(0x22),
        )
        .await
        .unwrap();

        assert_eq!(state.allowance, U256::from(250));
        assert_eq!(state.balance, U256::from(5_000));
        assert!(state.needs_approval(U256::from(1_000)));
        assert!(state.has_sufficient_balance(U256::from(1_000)));
    }

    #[tokio::test]
    async fn test_batch_token_state_for_undeployed_token() {
        let provider = ProviderBuilder::new()
            .disable_recommended_fillers()
            .connect_mocked_client(Asserter::new());

        let result = batch_token_state_for::<Dai, _>(
            &provider,
            ChainId::Base,
            Address::ZERO,
            Address::ZERO,
        )
        .await;

        assert!(matches!(result, Err(BindingsError::NotDeployed { contract: "dai", .. })));
    }
}
