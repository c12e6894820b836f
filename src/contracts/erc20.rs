// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! ERC-20 wrapper for balances, allowances and approvals
//!
//! Works for every token in the catalogue, including USDT whose `approve` and
//! `transfer` return nothing: the transaction builders never decode a return
//! value.

use alloy_network::Ethereum;
use alloy_primitives::{Address, U256};
use alloy_provider::Provider;
use alloy_rpc_types::TransactionRequest;
use tracing::{debug, info};

use crate::abi::IErc20::IErc20Instance;
use crate::chain::ChainId;
use crate::deployments::Deployment;
use crate::error::Result;

/// ERC-20 token wrapper
///
/// # Example
///
/// ```rust,no_run
/// use sky_bindings::{ChainId, Erc20Contract, Usds};
/// use alloy_primitives::{address, U256};
/// use alloy_provider::ProviderBuilder;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = ProviderBuilder::new().connect("http://localhost:8545").await?;
/// let usds = Erc20Contract::for_deployment::<Usds>(ChainId::Mainnet, provider)?;
///
/// let owner = address!("1234567890123456789012345678901234567890");
/// let spender = address!("0987654321098765432109876543210987654321");
/// let allowance = usds.allowance(owner, spender).await?;
///
/// if allowance < U256::from(1_000_000u64) {
///     let tx = usds.approve_transaction(owner, spender, U256::from(1_000_000u64));
///     // Send transaction...
/// }
/// # Ok(())
/// # }
/// ```
pub struct Erc20Contract<P: Provider<Ethereum>> {
    instance: IErc20Instance<P>,
}

impl<P: Provider<Ethereum>> Erc20Contract<P> {
    pub fn new(address: Address, provider: P) -> Self {
        debug!(
            contract_address = %address,
            event = "erc20_contract_initialized"
        );
        Self {
            instance: IErc20Instance::new(address, provider),
        }
    }

    /// Wraps the deployment of token `C` on `chain`
    pub fn for_deployment<C: Deployment>(chain: ChainId, provider: P) -> Result<Self> {
        Ok(Self::new(C::address_on(chain)?, provider))
    }

    /// Amount `spender` may move on behalf of `owner`
    pub async fn allowance(
        &self,
        owner: Address,
        spender: Address,
    ) -> Result<U256> {
        debug!(
            owner = %owner,
            spender = %spender,
            contract_address = %self.instance.address(),
            event = "checking_allowance"
        );

        let result = self.instance.allowance(owner, spender).call().await?;

        info!(
            owner = %owner,
            spender = %spender,
            allowance = %result,
            contract_address = %self.instance.address(),
            event = "allowance_retrieved"
        );

        Ok(result)
    }

    pub async fn balance_of(&self, account: Address) -> Result<U256> {
        debug!(
            account = %account,
            contract_address = %self.instance.address(),
            event = "checking_balance"
        );

        let result = self.instance.balanceOf(account).call().await?;

        info!(
            account = %account,
            balance = %result,
            contract_address = %self.instance.address(),
            event = "balance_retrieved"
        );

        Ok(result)
    }

    pub async fn decimals(&self) -> Result<u8> {
        Ok(self.instance.decimals().call().await?)
    }

    /// Create a transaction request to approve a spender
    ///
    /// This creates but does not send the approval transaction. The caller is
    /// responsible for signing and sending the transaction.
    pub fn approve_transaction(
        &self,
        from: Address,
        spender: Address,
        amount: U256,
    ) -> TransactionRequest {
        info!(
            from = %from,
            spender = %spender,
            amount = %amount,
            contract_address = %self.instance.address(),
            event = "approve_transaction_created"
        );

        self.instance
            .approve(spender, amount)
            .from(from)
            .into_transaction_request()
    }

    pub fn transfer_transaction(
        &self,
        from: Address,
        to: Address,
        amount: U256,
    ) -> TransactionRequest {
        info!(
            from = %from,
            to = %to,
            amount = %amount,
            contract_address = %self.instance.address(),
            event = "transfer_transaction_created"
        );

        self.instance
            .transfer(to, amount)
            .from(from)
            .into_transaction_request()
    }

    pub fn address(&self) -> Address {
        *self.instance.address()
    }
}
