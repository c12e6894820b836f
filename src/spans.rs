// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! OpenTelemetry span helpers for contract operations
//!
//! Static span names (`sky_bindings.<operation>`) with structured attributes,
//! kept apart from the operations themselves. [`ContractClient`] and
//! [`verify`](crate::verify) open these spans internally; they are public for
//! callers who build their own instrumented flows on top of the bindings.
//!
//! # Example
//!
//! ```rust,no_run
//! use sky_bindings::{spans, ChainId};
//! use alloy_primitives::Address;
//!
//! let span = spans::read("usdc", Some(ChainId::Base), &Address::ZERO, "balanceOf");
//! let _guard = span.enter();
//! // Your custom call here
//! ```
//!
//! [`ContractClient`]: crate::ContractClient

use std::future::Future;

use alloy_primitives::Address;
use tracing::{Instrument, Span};

use crate::chain::ChainId;

/// Create span for a view/pure `eth_call`.
///
/// Parent: caller's operation span
/// Children: provider RPC calls
#[inline]
pub fn read(contract: &str, chain: Option<ChainId>, address: &Address, function: &str) -> Span {
    tracing::info_span!(
        "sky_bindings.read",
        contract = contract,
        chain = chain.map(ChainId::as_u64),
        contract_address = %address,
        function = function,
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        error.source = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Create span for a state-changing call: simulation, request building or
/// submission.
///
/// `mode` is one of `simulate`, `build` or `send`.
#[inline]
pub fn write(
    contract: &str,
    chain: Option<ChainId>,
    address: &Address,
    function: &str,
    from: &Address,
    mode: &'static str,
) -> Span {
    tracing::info_span!(
        "sky_bindings.write",
        contract = contract,
        chain = chain.map(ChainId::as_u64),
        contract_address = %address,
        function = function,
        from = %from,
        mode = mode,
        tx_hash = tracing::field::Empty,
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        error.source = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Create span for one `eth_getLogs` query over a block range.
///
/// Parent: caller's span or [`watch`]
#[inline]
pub fn get_logs(contract: &str, event: &str, from_block: u64, to_block: u64) -> Span {
    tracing::debug_span!(
        "sky_bindings.get_logs",
        contract = contract,
        event_name = event,
        from_block = from_block,
        to_block = to_block,
        log_count = tracing::field::Empty,
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        error.source = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Create span for one watcher poll.
///
/// Children: sky_bindings.get_logs
#[inline]
pub fn watch(contract: &str, event: &str, next_block: Option<u64>) -> Span {
    tracing::debug_span!(
        "sky_bindings.watch",
        contract = contract,
        event_name = event,
        next_block = next_block,
        head = tracing::field::Empty,
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        error.source = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Create span for reconciling the address tables with a canonical manifest.
#[inline]
pub fn verify_manifest(source: &str) -> Span {
    tracing::info_span!(
        "sky_bindings.verify_manifest",
        source = source,
        drift_count = tracing::field::Empty,
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        error.source = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Create span for checking that every catalogued address on a chain holds
/// code.
#[inline]
pub fn verify_bytecode(chain: ChainId, contract_count: usize) -> Span {
    tracing::info_span!(
        "sky_bindings.verify_bytecode",
        chain = chain.as_u64(),
        chain_name = chain.name(),
        contract_count = contract_count,
        missing_count = tracing::field::Empty,
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        error.source = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Record error attributes on the current span.
///
/// Follows OpenTelemetry semantic conventions for error tracking:
/// - error.type: The error type/variant
/// - error.message: Human-readable error message
/// - error.source: The underlying cause, when there is one
///
/// # Example
///
/// ```rust,no_run
/// use sky_bindings::spans;
/// use sky_bindings::BindingsError;
///
/// # fn example() -> Result<(), BindingsError> {
/// let span = tracing::info_span!("sky_bindings.operation");
/// let _guard = span.enter();
///
/// let result = some_operation();
/// if let Err(ref e) = result {
///     spans::record_error(e);
/// }
/// result
/// # }
/// # fn some_operation() -> Result<(), BindingsError> { Ok(()) }
/// ```
pub fn record_error<E: std::error::Error>(error: &E) {
    let current_span = tracing::Span::current();
    current_span.record(
        "error.type",
        error.to_string().split(':').next().unwrap_or("Unknown"),
    );
    current_span.record("error.message", error.to_string());
    current_span.record("otel.status_code", "ERROR");

    if let Some(source) = error.source() {
        current_span.record("error.source", source.to_string());
    }
}

/// Runs `future` inside `span`, stamping the span if it fails.
pub(crate) async fn traced<T, E, F>(span: Span, future: F) -> Result<T, E>
where
    E: std::error::Error,
    F: Future<Output = Result<T, E>>,
{
    async move {
        let result = future.await;
        if let Err(ref e) = result {
            record_error(e);
        }
        result
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BindingsError;

    #[test]
    fn test_spans_build_without_subscriber() {
        let span = read("usdc", Some(ChainId::Base), &Address::ZERO, "balanceOf");
        let _guard = span.enter();
        record_error(&BindingsError::InvalidConfig("boom".into()));

        let _ = write("psm3", None, &Address::ZERO, "swapExactIn", &Address::ZERO, "build");
        let _ = get_logs("sUsds", "Deposit", 1, 10);
        let _ = watch("sUsds", "Deposit", None);
        let _ = verify_manifest("fake");
        let _ = verify_bytecode(ChainId::Mainnet, 30);
    }
}
