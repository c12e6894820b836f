// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Event log decoding and block-range polling

use std::fmt;

use alloy_dyn_abi::{DynSolValue, EventExt};
use alloy_json_abi::Event;
use alloy_network::Ethereum;
use alloy_primitives::{Address, TxHash};
use alloy_provider::Provider;
use alloy_rpc_types::{Filter, Log};
use tracing::{debug, info};

use crate::config::WatchConfig;
use crate::error::Result;
use crate::spans;
use crate::traits::Clock;

/// An event log decoded against its ABI
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedLog {
    pub event: String,
    /// Emitting contract
    pub address: Address,
    pub block_number: Option<u64>,
    pub transaction_hash: Option<TxHash>,
    pub log_index: Option<u64>,
    /// Indexed parameters, from the topics
    pub indexed: Vec<DynSolValue>,
    /// Non-indexed parameters, from the data
    pub body: Vec<DynSolValue>,
}

impl DecodedLog {
    pub fn decode(event: &Event, log: &Log) -> Result<Self> {
        let decoded = event.decode_log(log.data())?;
        Ok(Self {
            event: event.name.clone(),
            address: log.address(),
            block_number: log.block_number,
            transaction_hash: log.transaction_hash,
            log_index: log.log_index,
            indexed: decoded.indexed,
            body: decoded.body,
        })
    }
}

/// Fetches and decodes `event` logs emitted by `address` in
/// `from_block..=to_block`
pub(crate) async fn fetch_logs<P: Provider<Ethereum>>(
    provider: &P,
    contract: &str,
    address: Address,
    event: &Event,
    from_block: u64,
    to_block: u64,
) -> Result<Vec<DecodedLog>> {
    let span = spans::get_logs(contract, &event.name, from_block, to_block);
    spans::traced(span, async {
        let filter = Filter::new()
            .address(address)
            .event_signature(event.selector())
            .from_block(from_block)
            .to_block(to_block);

        let logs = provider.get_logs(&filter).await?;
        tracing::Span::current().record("log_count", logs.len());

        let decoded = logs
            .iter()
            .map(|log| DecodedLog::decode(event, log))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            contract = contract,
            event_name = %event.name,
            from_block = from_block,
            to_block = to_block,
            log_count = decoded.len(),
            event = "logs_fetched"
        );

        Ok(decoded)
    })
    .await
}

/// Polls `eth_getLogs` for one event over successive block ranges
///
/// Created by [`ContractClient::watch`](crate::ContractClient::watch). Each
/// [`poll`](Self::poll) covers at most
/// [`max_block_range`](WatchConfig::max_block_range) blocks, starting where
/// the previous one stopped, and never reads past the current head.
///
/// A watcher created without a start block anchors on its first poll: it
/// records `head + 1` and returns nothing, so only logs from blocks mined
/// after that poll are delivered.
pub struct EventWatcher<'a, P, K> {
    provider: &'a P,
    contract: &'static str,
    address: Address,
    event: Event,
    next_block: Option<u64>,
    config: WatchConfig,
    clock: K,
}

impl<P, K> fmt::Debug for EventWatcher<'_, P, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventWatcher")
            .field("contract", &self.contract)
            .field("address", &self.address)
            .field("event", &self.event.name)
            .field("next_block", &self.next_block)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<'a, P, K> EventWatcher<'a, P, K>
where
    P: Provider<Ethereum>,
    K: Clock,
{
    pub(crate) fn new(
        provider: &'a P,
        contract: &'static str,
        address: Address,
        event: Event,
        from_block: Option<u64>,
        config: WatchConfig,
        clock: K,
    ) -> Self {
        debug!(
            contract = contract,
            contract_address = %address,
            event_name = %event.name,
            from_block = ?from_block,
            poll_interval_secs = config.poll_interval_secs,
            max_block_range = config.max_block_range,
            event = "event_watcher_created"
        );

        Self {
            provider,
            contract,
            address,
            event,
            next_block: from_block,
            config,
            clock,
        }
    }

    /// First block the next poll will read, once anchored
    pub fn next_block(&self) -> Option<u64> {
        self.next_block
    }

    pub fn config(&self) -> &WatchConfig {
        &self.config
    }

    pub fn event(&self) -> &Event {
        &self.event
    }

    /// Reads the head and fetches the next range of logs
    pub async fn poll(&mut self) -> Result<Vec<DecodedLog>> {
        let span = spans::watch(self.contract, &self.event.name, self.next_block);
        spans::traced(span, self.poll_once()).await
    }

    /// Sleeps one poll interval on the clock, then polls
    pub async fn next_batch(&mut self) -> Result<Vec<DecodedLog>> {
        self.clock.sleep(self.config.poll_interval()).await;
        self.poll().await
    }

    async fn poll_once(&mut self) -> Result<Vec<DecodedLog>> {
        let head = self.provider.get_block_number().await?;
        tracing::Span::current().record("head", head);

        let Some(from_block) = self.next_block else {
            self.next_block = Some(head.saturating_add(1));
            debug!(
                contract = self.contract,
                event_name = %self.event.name,
                head = head,
                event = "event_watcher_anchored"
            );
            return Ok(Vec::new());
        };

        if from_block > head {
            return Ok(Vec::new());
        }

        let span = self.config.max_block_range.max(1);
        let to_block = head.min(from_block.saturating_add(span - 1));

        let logs = fetch_logs(
            self.provider,
            self.contract,
            self.address,
            &self.event,
            from_block,
            to_block,
        )
        .await?;
        self.next_block = Some(to_block.saturating_add(1));

        if !logs.is_empty() {
            info!(
                contract = self.contract,
                event_name = %self.event.name,
                from_block = from_block,
                to_block = to_block,
                log_count = logs.len(),
                event = "event_watcher_delivered"
            );
        }

        Ok(logs)
    }
}
