// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Generic read, write, simulate and watch bindings
//!
//! [`ContractClient`] binds one catalogued contract at one address and exposes
//! every function and event of its ABI by name, with arguments and results as
//! [`DynSolValue`]s. For compile-time typed calls use
//! [`ContractClient::typed`] or the wrappers in [`crate::contracts`].
//!
//! Every call is checked against the ABI before anything goes over the wire:
//! unknown names, wrong arity, reading a state-changing function, writing a
//! view, or attaching value to a non-payable function all fail locally.

mod request;
mod watch;

pub use request::WriteRequest;
pub use watch::{DecodedLog, EventWatcher};

use std::marker::PhantomData;

use alloy_contract::{CallBuilder, ContractInstance, Interface};
use alloy_dyn_abi::DynSolValue;
use alloy_json_abi::{Event, Function, JsonAbi, StateMutability};
use alloy_network::Ethereum;
use alloy_primitives::{Address, TxHash};
use alloy_provider::Provider;
use alloy_rpc_types::TransactionRequest;
use tracing::{debug, info};

use crate::chain::ChainId;
use crate::config::WatchConfig;
use crate::deployments::Deployment;
use crate::error::{BindingsError, Result};
use crate::providers::TokioClock;
use crate::spans;
use crate::traits::Clock;

fn mutability_name(mutability: StateMutability) -> &'static str {
    match mutability {
        StateMutability::Pure => "pure",
        StateMutability::View => "view",
        StateMutability::NonPayable => "nonpayable",
        StateMutability::Payable => "payable",
    }
}

fn is_readable(mutability: StateMutability) -> bool {
    matches!(mutability, StateMutability::Pure | StateMutability::View)
}

/// One contract from the catalogue, bound to an address and a provider
///
/// # Example
///
/// ```rust,no_run
/// use alloy_dyn_abi::DynSolValue;
/// use alloy_primitives::address;
/// use alloy_provider::ProviderBuilder;
/// use sky_bindings::{ChainId, ContractClient, SUsds};
///
/// # async fn example() -> Result<(), sky_bindings::BindingsError> {
/// let provider = ProviderBuilder::new().connect_http("http://localhost:8545".parse()?);
/// let susds = ContractClient::<SUsds, _>::on_chain(ChainId::Mainnet, provider)?;
///
/// let ssr = susds.read("ssr", &[]).await?;
/// let assets = susds
///     .read(
///         "convertToAssets",
///         &[DynSolValue::Uint(alloy_primitives::U256::from(10u64.pow(18)), 256)],
///     )
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct ContractClient<C, P>
where
    C: Deployment,
    P: Provider<Ethereum>,
{
    instance: ContractInstance<P, Ethereum>,
    abi: JsonAbi,
    chain: Option<ChainId>,
    _contract: PhantomData<fn() -> C>,
}

impl<C, P> std::fmt::Debug for ContractClient<C, P>
where
    C: Deployment,
    P: Provider<Ethereum>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContractClient")
            .field("contract", &C::NAME)
            .field("address", self.instance.address())
            .field("chain", &self.chain)
            .finish()
    }
}

impl<C, P> ContractClient<C, P>
where
    C: Deployment,
    P: Provider<Ethereum>,
{
    /// Binds the contract's deployment on `chain`
    ///
    /// # Errors
    ///
    /// [`BindingsError::NotDeployed`] if the address book has no entry for
    /// `chain`.
    pub fn on_chain(chain: ChainId, provider: P) -> Result<Self> {
        let address = C::address_on(chain)?;
        Ok(Self::bind(address, provider, Some(chain)))
    }

    /// Binds the contract's ABI at an explicit address
    pub fn at(address: Address, provider: P) -> Self {
        Self::bind(address, provider, None)
    }

    fn bind(address: Address, provider: P, chain: Option<ChainId>) -> Self {
        let abi = C::abi();
        debug!(
            contract = C::NAME,
            chain = ?chain.map(ChainId::as_u64),
            contract_address = %address,
            event = "contract_client_initialized"
        );
        Self {
            instance: ContractInstance::new(address, provider, Interface::new(abi.clone())),
            abi,
            chain,
            _contract: PhantomData,
        }
    }

    pub fn address(&self) -> Address {
        *self.instance.address()
    }

    /// Chain the client was bound on, `None` when built with [`Self::at`]
    pub fn chain(&self) -> Option<ChainId> {
        self.chain
    }

    pub fn abi(&self) -> &JsonAbi {
        &self.abi
    }

    pub fn provider(&self) -> &P {
        self.instance.provider()
    }

    /// The sol-generated typed instance at the same address
    pub fn typed(&self) -> C::Instance<&P> {
        C::instance(self.address(), self.instance.provider())
    }

    /// Picks the overload of `name` taking `arity` arguments
    fn function(&self, name: &str, arity: usize) -> Result<&Function> {
        let overloads = self
            .abi
            .function(name)
            .ok_or_else(|| BindingsError::UnknownFunction {
                contract: C::NAME,
                function: name.to_string(),
            })?;

        overloads
            .iter()
            .find(|function| function.inputs.len() == arity)
            .ok_or_else(|| {
                let mut expected: Vec<usize> =
                    overloads.iter().map(|function| function.inputs.len()).collect();
                expected.sort_unstable();
                expected.dedup();
                BindingsError::ArgumentCount {
                    contract: C::NAME,
                    function: name.to_string(),
                    expected,
                    actual: arity,
                }
            })
    }

    fn event(&self, name: &str) -> Result<&Event> {
        self.abi
            .event(name)
            .and_then(|events| events.first())
            .ok_or_else(|| BindingsError::UnknownEvent {
                contract: C::NAME,
                event: name.to_string(),
            })
    }

    /// Resolves and validates the function a write request targets
    fn writable(&self, request: &WriteRequest) -> Result<&Function> {
        let function = self.function(request.function(), request.args().len())?;

        if is_readable(function.state_mutability) {
            return Err(BindingsError::NotWritable {
                contract: C::NAME,
                function: function.name.clone(),
                mutability: mutability_name(function.state_mutability),
            });
        }

        if request.carries_value() && function.state_mutability != StateMutability::Payable {
            return Err(BindingsError::NotPayable {
                contract: C::NAME,
                function: function.name.clone(),
            });
        }

        Ok(function)
    }

    fn call_builder(
        &self,
        function: &Function,
        request: &WriteRequest,
    ) -> Result<CallBuilder<&P, Function>> {
        let mut call = self
            .instance
            .function_from_selector(&function.selector(), request.args())?
            .from(request.from());
        if let Some(value) = request.value() {
            call = call.value(value);
        }
        Ok(call)
    }

    /// Calls a `view` or `pure` function and returns its decoded outputs
    ///
    /// # Errors
    ///
    /// [`BindingsError::NotReadable`] for a state-changing function, raised
    /// before any RPC is made.
    pub async fn read(&self, function: &str, args: &[DynSolValue]) -> Result<Vec<DynSolValue>> {
        let span = spans::read(C::NAME, self.chain, &self.address(), function);
        spans::traced(span, async {
            let resolved = self.function(function, args.len())?;
            if !is_readable(resolved.state_mutability) {
                return Err(BindingsError::NotReadable {
                    contract: C::NAME,
                    function: function.to_string(),
                });
            }

            let outputs = self
                .instance
                .function_from_selector(&resolved.selector(), args)?
                .call()
                .await?;

            debug!(
                contract = C::NAME,
                function = function,
                output_count = outputs.len(),
                event = "contract_read_completed"
            );

            Ok(outputs)
        })
        .await
    }

    /// Executes a state-changing call with `eth_call` and returns what it
    /// would return, without submitting anything
    pub async fn simulate(&self, request: &WriteRequest) -> Result<Vec<DynSolValue>> {
        let span = spans::write(
            C::NAME,
            self.chain,
            &self.address(),
            request.function(),
            &request.from(),
            "simulate",
        );
        spans::traced(span, async {
            let function = self.writable(request)?;
            let outputs = self.call_builder(function, request)?.call().await?;

            info!(
                contract = C::NAME,
                function = request.function(),
                from = %request.from(),
                output_count = outputs.len(),
                event = "contract_write_simulated"
            );

            Ok(outputs)
        })
        .await
    }

    /// Builds the transaction request for a write without sending it
    ///
    /// The caller signs and sends; gas, nonce and fees are left for the
    /// provider's fillers.
    pub fn write_transaction(&self, request: &WriteRequest) -> Result<TransactionRequest> {
        let span = spans::write(
            C::NAME,
            self.chain,
            &self.address(),
            request.function(),
            &request.from(),
            "build",
        );
        let _guard = span.enter();

        let result = self
            .writable(request)
            .and_then(|function| self.call_builder(function, request))
            .map(|call| call.into_transaction_request());

        match &result {
            Ok(_) => info!(
                contract = C::NAME,
                function = request.function(),
                from = %request.from(),
                event = "write_transaction_created"
            ),
            Err(e) => spans::record_error(e),
        }

        result
    }

    /// Submits a write through the provider and returns the transaction hash
    ///
    /// The provider must be able to sign for `request.from()`, either through
    /// a wallet filler or because the node holds the key.
    pub async fn write(&self, request: &WriteRequest) -> Result<TxHash> {
        let span = spans::write(
            C::NAME,
            self.chain,
            &self.address(),
            request.function(),
            &request.from(),
            "send",
        );
        spans::traced(span, async {
            let function = self.writable(request)?;
            let pending = self.call_builder(function, request)?.send().await?;
            let tx_hash = *pending.tx_hash();

            tracing::Span::current().record("tx_hash", tracing::field::display(tx_hash));
            info!(
                contract = C::NAME,
                function = request.function(),
                from = %request.from(),
                tx_hash = %tx_hash,
                event = "write_transaction_sent"
            );

            Ok(tx_hash)
        })
        .await
    }

    /// Decoded `event` logs emitted by this contract in
    /// `from_block..=to_block`
    pub async fn logs(
        &self,
        event: &str,
        from_block: u64,
        to_block: u64,
    ) -> Result<Vec<DecodedLog>> {
        let event = self.event(event)?;
        watch::fetch_logs(
            self.instance.provider(),
            C::NAME,
            self.address(),
            event,
            from_block,
            to_block,
        )
        .await
    }

    /// Watches `event` with the chain's default [`WatchConfig`] and the Tokio
    /// clock
    ///
    /// With `from_block` set, the first poll starts there; without it the
    /// watcher only reports logs mined after its first poll.
    pub fn watch(
        &self,
        event: &str,
        from_block: Option<u64>,
    ) -> Result<EventWatcher<'_, P, TokioClock>> {
        let config = self.chain.map(WatchConfig::for_chain).unwrap_or_default();
        self.watch_with(event, from_block, config, TokioClock::new())
    }

    /// Watches `event` with an explicit polling config and clock
    pub fn watch_with<K: Clock>(
        &self,
        event: &str,
        from_block: Option<u64>,
        config: WatchConfig,
        clock: K,
    ) -> Result<EventWatcher<'_, P, K>> {
        let event = self.event(event)?.clone();
        Ok(EventWatcher::new(
            self.instance.provider(),
            C::NAME,
            self.address(),
            event,
            from_block,
            config,
            clock,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deployments::{Psm3, SUsds, Usdc, Weth, PSM3_ADDRESS};
    use alloy_primitives::{address, Bytes, TxKind, U256};
    use alloy_provider::ProviderBuilder;
    use alloy_sol_types::SolCall;
    use alloy_transport::mock::Asserter;

    use crate::abi::{IErc20Permit, IWeth9};

    fn mocked() -> (Asserter, impl Provider<Ethereum> + Clone) {
        let asserter = Asserter::new();
        let provider = ProviderBuilder::new()
            .disable_recommended_fillers()
            .connect_mocked_client(asserter.clone());
        (asserter, provider)
    }

    fn uint(value: u64) -> DynSolValue {
        DynSolValue::Uint(U256::from(value), 256)
    }

    #[test]
    fn test_on_chain_not_deployed() {
        let (_, provider) = mocked();
        let err = ContractClient::<Psm3, _>::on_chain(ChainId::Mainnet, provider).unwrap_err();
        assert!(matches!(
            err,
            BindingsError::NotDeployed {
                contract: "psm3",
                chain: ChainId::Mainnet
            }
        ));
    }

    #[test]
    fn test_on_chain_resolves_address() {
        let (_, provider) = mocked();
        let client = ContractClient::<Psm3, _>::on_chain(ChainId::Base, provider).unwrap();
        assert_eq!(Some(client.address()), PSM3_ADDRESS.get(ChainId::Base));
        assert_eq!(client.chain(), Some(ChainId::Base));
        assert_eq!(*client.typed().address(), client.address());
    }

    #[test]
    fn test_unknown_function_and_arity() {
        let (_, provider) = mocked();
        let client = ContractClient::<Usdc, _>::on_chain(ChainId::Mainnet, provider).unwrap();

        let request = WriteRequest::builder()
            .function("mint")
            .from(Address::ZERO)
            .build();
        assert!(matches!(
            client.write_transaction(&request),
            Err(BindingsError::UnknownFunction { .. })
        ));

        let request = WriteRequest::builder()
            .function("approve")
            .args(vec![uint(1)])
            .from(Address::ZERO)
            .build();
        let err = client.write_transaction(&request).unwrap_err();
        assert_eq!(err.to_string(), "usdc.approve takes 2 argument(s), got 1");
    }

    #[test]
    fn test_arity_error_lists_every_overload() {
        let (_, provider) = mocked();
        let client = ContractClient::<SUsds, _>::on_chain(ChainId::Mainnet, provider).unwrap();

        let request = WriteRequest::builder()
            .function("deposit")
            .args(vec![uint(1)])
            .from(Address::ZERO)
            .build();
        let err = client.write_transaction(&request).unwrap_err();
        assert!(matches!(
            &err,
            BindingsError::ArgumentCount { expected, actual: 1, .. } if *expected == vec![2, 3]
        ));
        assert_eq!(err.to_string(), "sUsds.deposit takes 2 or 3 argument(s), got 1");
    }

    #[tokio::test]
    async fn test_read_rejects_state_changing_function() {
        let (_asserter, provider) = mocked();
        let client = ContractClient::<Usdc, _>::on_chain(ChainId::Base, provider).unwrap();

        let err = client
            .read("approve", &[DynSolValue::Address(Address::ZERO), uint(1)])
            .await
            .unwrap_err();
        // The asserter holds no responses, so reaching the RPC would have
        // surfaced a transport error instead.
        assert!(matches!(err, BindingsError::NotReadable { .. }));
    }

    #[test]
    fn test_write_rejects_view_function() {
        let (_, provider) = mocked();
        let client = ContractClient::<Usdc, _>::on_chain(ChainId::Base, provider).unwrap();
        let request = WriteRequest::builder()
            .function("balanceOf")
            .args(vec![DynSolValue::Address(Address::ZERO)])
            .from(Address::ZERO)
            .build();
        let err = client.write_transaction(&request).unwrap_err();
        assert_eq!(err.to_string(), "usdc.balanceOf is view and cannot be written");
    }

    #[test]
    fn test_value_requires_payable() {
        let (_, provider) = mocked();
        let weth = ContractClient::<Weth, _>::on_chain(ChainId::Mainnet, provider).unwrap();
        let from = address!("0x1111111111111111111111111111111111111111");

        let request = WriteRequest::builder()
            .function("withdraw")
            .args(vec![uint(1)])
            .from(from)
            .value(U256::from(1))
            .build();
        assert!(matches!(
            weth.write_transaction(&request),
            Err(BindingsError::NotPayable { .. })
        ));

        let request = WriteRequest::builder()
            .function("deposit")
            .from(from)
            .value(U256::from(1_000))
            .build();
        let tx = weth.write_transaction(&request).unwrap();
        assert_eq!(tx.value, Some(U256::from(1_000)));
        assert_eq!(tx.from, Some(from));
        assert_eq!(tx.to, Some(TxKind::Call(weth.address())));
        assert_eq!(
            tx.input.input().cloned(),
            Some(Bytes::from(IWeth9::depositCall {}.abi_encode()))
        );
    }

    #[test]
    fn test_write_transaction_encodes_calldata() {
        let (_, provider) = mocked();
        let client = ContractClient::<Usdc, _>::on_chain(ChainId::Arbitrum, provider).unwrap();
        let spender = address!("0x2222222222222222222222222222222222222222");

        let request = WriteRequest::builder()
            .function("approve")
            .args(vec![DynSolValue::Address(spender), uint(500)])
            .from(Address::ZERO)
            .build();
        let tx = client.write_transaction(&request).unwrap();

        let expected = IErc20Permit::approveCall {
            spender,
            amount: U256::from(500),
        }
        .abi_encode();
        assert_eq!(tx.input.input().cloned(), Some(Bytes::from(expected)));
    }

    #[tokio::test]
    async fn test_read_decodes_outputs() {
        let (asserter, provider) = mocked();
        let client = ContractClient::<Usdc, _>::on_chain(ChainId::Mainnet, provider).unwrap();

        asserter.push_success(&Bytes::from(U256::from(6).to_be_bytes::<32>().to_vec()));
        let outputs = client.read("decimals", &[]).await.unwrap();
        assert_eq!(outputs, vec![DynSolValue::Uint(U256::from(6), 8)]);
    }

    #[tokio::test]
    async fn test_simulate_returns_outputs() {
        let (asserter, provider) = mocked();
        let client = ContractClient::<Usdc, _>::on_chain(ChainId::Mainnet, provider).unwrap();

        let mut word = [0u8; 32];
        word[31] = 1;
        asserter.push_success(&Bytes::from(word.to_vec()));

        let request = WriteRequest::builder()
            .function("transfer")
            .args(vec![DynSolValue::Address(Address::ZERO), uint(10)])
            .from(address!("0x3333333333333333333333333333333333333333"))
            .build();
        let outputs = client.simulate(&request).await.unwrap();
        assert_eq!(outputs, vec![DynSolValue::Bool(true)]);
    }

    #[tokio::test]
    async fn test_write_returns_tx_hash() {
        let (asserter, provider) = mocked();
        let client = ContractClient::<Usdc, _>::on_chain(ChainId::Base, provider).unwrap();
        let tx_hash = TxHash::repeat_byte(0xab);
        asserter.push_success(&tx_hash);

        let request = WriteRequest::builder()
            .function("approve")
            .args(vec![DynSolValue::Address(Address::ZERO), uint(0)])
            .from(address!("0x4444444444444444444444444444444444444444"))
            .build();
        assert_eq!(client.write(&request).await.unwrap(), tx_hash);
    }

    #[test]
    fn test_unknown_event() {
        let (_, provider) = mocked();
        let client = ContractClient::<Usdc, _>::on_chain(ChainId::Base, provider).unwrap();
        let err = client.watch("Minted", None).unwrap_err();
        assert_eq!(err.to_string(), "usdc has no event named `Minted`");
    }

    #[test]
    fn test_watch_uses_chain_preset() {
        let (_, provider) = mocked();
        let l2 = ContractClient::<Usdc, _>::on_chain(ChainId::Base, provider.clone()).unwrap();
        assert_eq!(*l2.watch("Transfer", None).unwrap().config(), WatchConfig::l2());

        let pinned = ContractClient::<Usdc, _>::at(Address::ZERO, provider);
        assert_eq!(
            *pinned.watch("Transfer", Some(5)).unwrap().config(),
            WatchConfig::default()
        );
    }
}
