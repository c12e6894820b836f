// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! ERC-4626 savings vault wrapper
//!
//! Covers sUSDS, sDAI, sUSDC and stUSDS. The L2 sUSDS deployments are plain
//! tokens and must be entered through the PSM3 instead.

use std::marker::PhantomData;

use alloy_contract::CallBuilder;
use alloy_network::Ethereum;
use alloy_primitives::{Address, U256};
use alloy_provider::Provider;
use alloy_rpc_types::TransactionRequest;
use tracing::{debug, info};

use crate::abi::IErc4626::{depositCall, redeemCall, IErc4626Instance};
use crate::chain::ChainId;
use crate::deployments::Deployment;
use crate::error::Result;

/// Wrapper over an ERC-4626 vault
pub struct SavingsVaultContract<P: Provider<Ethereum>> {
    instance: IErc4626Instance<P>,
}

impl<P: Provider<Ethereum>> SavingsVaultContract<P> {
    pub fn new(address: Address, provider: P) -> Self {
        debug!(
            contract_address = %address,
            event = "savings_vault_contract_initialized"
        );
        Self {
            instance: IErc4626Instance::new(address, provider),
        }
    }

    /// Wraps the deployment of vault `C` on `chain`
    ///
    /// ```rust,no_run
    /// use sky_bindings::{ChainId, SUsds, SavingsVaultContract};
    /// use alloy_primitives::U256;
    /// use alloy_provider::ProviderBuilder;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let provider = ProviderBuilder::new().connect("http://localhost:8545").await?;
    /// let vault = SavingsVaultContract::for_deployment::<SUsds>(ChainId::Mainnet, provider)?;
    /// let per_share = vault.convert_to_assets(U256::from(10u64).pow(U256::from(18))).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn for_deployment<C: Deployment>(chain: ChainId, provider: P) -> Result<Self> {
        Ok(Self::new(C::address_on(chain)?, provider))
    }

    /// Underlying asset of the vault
    pub async fn asset(&self) -> Result<Address> {
        Ok(self.instance.asset().call().await?)
    }

    pub async fn total_assets(&self) -> Result<U256> {
        let total = self.instance.totalAssets().call().await?;
        debug!(
            total_assets = %total,
            contract_address = %self.instance.address(),
            event = "total_assets_retrieved"
        );
        Ok(total)
    }

    pub async fn convert_to_assets(&self, shares: U256) -> Result<U256> {
        Ok(self.instance.convertToAssets(shares).call().await?)
    }

    pub async fn convert_to_shares(&self, assets: U256) -> Result<U256> {
        Ok(self.instance.convertToShares(assets).call().await?)
    }

    pub async fn preview_deposit(&self, assets: U256) -> Result<U256> {
        Ok(self.instance.previewDeposit(assets).call().await?)
    }

    pub async fn preview_redeem(&self, shares: U256) -> Result<U256> {
        Ok(self.instance.previewRedeem(shares).call().await?)
    }

    /// Assets `owner` can withdraw right now
    pub async fn max_withdraw(&self, owner: Address) -> Result<U256> {
        Ok(self.instance.maxWithdraw(owner).call().await?)
    }

    /// Create the call builder for `deposit`.
    ///
    /// Most users will want [`Self::deposit_transaction`] instead.
    pub fn deposit_call_builder(
        &self,
        from: Address,
        assets: U256,
        receiver: Address,
    ) -> CallBuilder<&P, PhantomData<depositCall>> {
        self.instance.deposit(assets, receiver).from(from)
    }

    /// Create the transaction request for `deposit`
    ///
    /// The vault must already hold an allowance of `assets` from `from`.
    pub fn deposit_transaction(
        &self,
        from: Address,
        assets: U256,
        receiver: Address,
    ) -> TransactionRequest {
        info!(
            from = %from,
            assets = %assets,
            receiver = %receiver,
            contract_address = %self.instance.address(),
            event = "vault_deposit_transaction_created"
        );

        self.deposit_call_builder(from, assets, receiver)
            .into_transaction_request()
    }

    pub fn redeem_call_builder(
        &self,
        from: Address,
        shares: U256,
        receiver: Address,
        owner: Address,
    ) -> CallBuilder<&P, PhantomData<redeemCall>> {
        self.instance.redeem(shares, receiver, owner).from(from)
    }

    /// Create the transaction request for `redeem`
    pub fn redeem_transaction(
        &self,
        from: Address,
        shares: U256,
        receiver: Address,
        owner: Address,
    ) -> TransactionRequest {
        info!(
            from = %from,
            shares = %shares,
            receiver = %receiver,
            owner = %owner,
            contract_address = %self.instance.address(),
            event = "vault_redeem_transaction_created"
        );

        self.redeem_call_builder(from, shares, receiver, owner)
            .into_transaction_request()
    }

    pub fn address(&self) -> Address {
        *self.instance.address()
    }
}
