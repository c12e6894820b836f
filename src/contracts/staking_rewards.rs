// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Staking rewards farm wrapper (USDS -> SKY, USDS -> Chronicle points)

use alloy_network::Ethereum;
use alloy_primitives::{Address, U256};
use alloy_provider::Provider;
use alloy_rpc_types::TransactionRequest;
use tracing::{debug, info};

use crate::abi::IStakingRewards::IStakingRewardsInstance;
use crate::chain::ChainId;
use crate::deployments::Deployment;
use crate::error::Result;

pub struct StakingRewardsContract<P: Provider<Ethereum>> {
    instance: IStakingRewardsInstance<P>,
}

impl<P: Provider<Ethereum>> StakingRewardsContract<P> {
    pub fn new(address: Address, provider: P) -> Self {
        debug!(
            contract_address = %address,
            event = "staking_rewards_contract_initialized"
        );
        Self {
            instance: IStakingRewardsInstance::new(address, provider),
        }
    }

    /// Wraps the deployment of farm `C` on `chain`
    pub fn for_deployment<C: Deployment>(chain: ChainId, provider: P) -> Result<Self> {
        Ok(Self::new(C::address_on(chain)?, provider))
    }

    /// Rewards accrued to `account` and not yet claimed
    pub async fn earned(&self, account: Address) -> Result<U256> {
        let earned = self.instance.earned(account).call().await?;
        debug!(
            account = %account,
            earned = %earned,
            contract_address = %self.instance.address(),
            event = "earned_retrieved"
        );
        Ok(earned)
    }

    /// Staked balance of `account`
    pub async fn balance_of(&self, account: Address) -> Result<U256> {
        Ok(self.instance.balanceOf(account).call().await?)
    }

    pub async fn reward_rate(&self) -> Result<U256> {
        Ok(self.instance.rewardRate().call().await?)
    }

    /// Create the transaction request for `stake`
    ///
    /// With a referral code the two-argument overload is used.
    pub fn stake_transaction(
        &self,
        from: Address,
        amount: U256,
        referral: Option<u16>,
    ) -> TransactionRequest {
        info!(
            from = %from,
            amount = %amount,
            referral = ?referral,
            contract_address = %self.instance.address(),
            event = "stake_transaction_created"
        );

        match referral {
            Some(referral) => self
                .instance
                .stake_1(amount, referral)
                .from(from)
                .into_transaction_request(),
            None => self
                .instance
                .stake_0(amount)
                .from(from)
                .into_transaction_request(),
        }
    }

    pub fn withdraw_transaction(&self, from: Address, amount: U256) -> TransactionRequest {
        info!(
            from = %from,
            amount = %amount,
            contract_address = %self.instance.address(),
            event = "withdraw_transaction_created"
        );

        self.instance
            .withdraw(amount)
            .from(from)
            .into_transaction_request()
    }

    /// Claims accrued rewards
    pub fn get_reward_transaction(&self, from: Address) -> TransactionRequest {
        info!(
            from = %from,
            contract_address = %self.instance.address(),
            event = "get_reward_transaction_created"
        );

        self.instance.getReward().from(from).into_transaction_request()
    }

    /// Withdraws the whole stake and claims rewards
    pub fn exit_transaction(&self, from: Address) -> TransactionRequest {
        info!(
            from = %from,
            contract_address = %self.instance.address(),
            event = "exit_transaction_created"
        );

        self.instance.exit().from(from).into_transaction_request()
    }

    pub fn address(&self) -> Address {
        *self.instance.address()
    }
}
