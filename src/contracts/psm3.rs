// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! PSM3 wrapper for the L2 USDC, USDS and sUSDS swap pool

use std::marker::PhantomData;

use alloy_contract::CallBuilder;
use alloy_network::Ethereum;
use alloy_primitives::{Address, U256};
use alloy_provider::Provider;
use alloy_rpc_types::TransactionRequest;
use tracing::{debug, info};

use crate::abi::IPsm3::{swapExactInCall, swapExactOutCall, IPsm3Instance};
use crate::chain::ChainId;
use crate::deployments::{Deployment, Psm3};
use crate::error::Result;

/// Assets and bounds of a single PSM3 swap
///
/// `limit` is the minimum output for exact-in swaps and the maximum input for
/// exact-out swaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swap {
    pub asset_in: Address,
    pub asset_out: Address,
    pub amount: U256,
    pub limit: U256,
    pub receiver: Address,
    pub referral_code: U256,
}

/// PSM3 contract wrapper
pub struct Psm3Contract<P: Provider<Ethereum>> {
    instance: IPsm3Instance<P>,
}

impl<P: Provider<Ethereum>> Psm3Contract<P> {
    pub fn new(address: Address, provider: P) -> Self {
        debug!(
            contract_address = %address,
            event = "psm3_contract_initialized"
        );
        Self {
            instance: IPsm3Instance::new(address, provider),
        }
    }

    /// Wraps the PSM3 deployment on `chain`
    pub fn on_chain(chain: ChainId, provider: P) -> Result<Self> {
        Ok(Self::new(Psm3::address_on(chain)?, provider))
    }

    /// Output amount for swapping exactly `amount_in` of `asset_in`
    pub async fn preview_swap_exact_in(
        &self,
        asset_in: Address,
        asset_out: Address,
        amount_in: U256,
    ) -> Result<U256> {
        let amount_out = self
            .instance
            .previewSwapExactIn(asset_in, asset_out, amount_in)
            .call()
            .await?;

        debug!(
            asset_in = %asset_in,
            asset_out = %asset_out,
            amount_in = %amount_in,
            amount_out = %amount_out,
            contract_address = %self.instance.address(),
            event = "swap_exact_in_previewed"
        );

        Ok(amount_out)
    }

    /// Input amount needed to receive exactly `amount_out` of `asset_out`
    pub async fn preview_swap_exact_out(
        &self,
        asset_in: Address,
        asset_out: Address,
        amount_out: U256,
    ) -> Result<U256> {
        let amount_in = self
            .instance
            .previewSwapExactOut(asset_in, asset_out, amount_out)
            .call()
            .await?;

        debug!(
            asset_in = %asset_in,
            asset_out = %asset_out,
            amount_in = %amount_in,
            amount_out = %amount_out,
            contract_address = %self.instance.address(),
            event = "swap_exact_out_previewed"
        );

        Ok(amount_in)
    }

    /// Pool value in USD, 18 decimals
    pub async fn total_assets(&self) -> Result<U256> {
        Ok(self.instance.totalAssets().call().await?)
    }

    /// Pool shares held by `user`
    pub async fn shares_of(&self, user: Address) -> Result<U256> {
        Ok(self.instance.shares(user).call().await?)
    }

    pub fn swap_exact_in_call_builder(
        &self,
        from: Address,
        swap: &Swap,
    ) -> CallBuilder<&P, PhantomData<swapExactInCall>> {
        self.instance
            .swapExactIn(
                swap.asset_in,
                swap.asset_out,
                swap.amount,
                swap.limit,
                swap.receiver,
                swap.referral_code,
            )
            .from(from)
    }

    /// Create the transaction request for `swapExactIn`
    pub fn swap_exact_in_transaction(&self, from: Address, swap: &Swap) -> TransactionRequest {
        info!(
            from = %from,
            asset_in = %swap.asset_in,
            asset_out = %swap.asset_out,
            amount_in = %swap.amount,
            min_amount_out = %swap.limit,
            receiver = %swap.receiver,
            contract_address = %self.instance.address(),
            event = "swap_exact_in_transaction_created"
        );

        self.swap_exact_in_call_builder(from, swap)
            .into_transaction_request()
    }

    pub fn swap_exact_out_call_builder(
        &self,
        from: Address,
        swap: &Swap,
    ) -> CallBuilder<&P, PhantomData<swapExactOutCall>> {
        self.instance
            .swapExactOut(
                swap.asset_in,
                swap.asset_out,
                swap.amount,
                swap.limit,
                swap.receiver,
                swap.referral_code,
            )
            .from(from)
    }

    /// Create the transaction request for `swapExactOut`
    pub fn swap_exact_out_transaction(&self, from: Address, swap: &Swap) -> TransactionRequest {
        info!(
            from = %from,
            asset_in = %swap.asset_in,
            asset_out = %swap.asset_out,
            amount_out = %swap.amount,
            max_amount_in = %swap.limit,
            receiver = %swap.receiver,
            contract_address = %self.instance.address(),
            event = "swap_exact_out_transaction_created"
        );

        self.swap_exact_out_call_builder(from, swap)
            .into_transaction_request()
    }

    pub fn address(&self) -> Address {
        *self.instance.address()
    }
}
