// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Integration tests for event polling and address verification using fake
//! implementations and a mocked RPC transport

use std::time::Duration;

use alloy_dyn_abi::DynSolValue;
use alloy_network::Ethereum;
use alloy_primitives::{Address, U256, U64};
use alloy_provider::{Provider, ProviderBuilder};
use alloy_rpc_types::Log;
use alloy_sol_types::SolEvent;
use alloy_transport::mock::Asserter;
use sky_bindings::abi::IErc20Permit;
use sky_bindings::testing::{FakeClock, FakeManifestSource};
use sky_bindings::verify::verify_manifest;
use sky_bindings::{
    BindingsError, ChainId, ContractClient, DeploymentManifest, Drift, Usds, WatchConfig,
};

/// Opt-in test logging: `RUST_LOG=sky_bindings=debug cargo test`
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn mocked() -> (Asserter, impl Provider<Ethereum> + Clone) {
    let asserter = Asserter::new();
    let provider = ProviderBuilder::new()
        .disable_recommended_fillers()
        .connect_mocked_client(asserter.clone());
    (asserter, provider)
}

fn transfer_log(emitter: Address, block: u64, from: Address, to: Address, value: u64) -> Log {
    let event = IErc20Permit::Transfer {
        from,
        to,
        value: U256::from(value),
    };
    Log {
        inner: alloy_primitives::Log {
            address: emitter,
            data: event.encode_log_data(),
        },
        block_number: Some(block),
        log_index: Some(0),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_watcher_anchors_then_delivers_new_logs() {
    init_tracing();
    let (asserter, provider) = mocked();
    let usds = ContractClient::<Usds, _>::on_chain(ChainId::Mainnet, provider).unwrap();
    let clock = FakeClock::new();
    let config = WatchConfig::default().with_max_block_range(10);

    let mut watcher = usds
        .watch_with("Transfer", None, config, clock.clone())
        .unwrap();

    // first poll only records the head
    asserter.push_success(&U64::from(100));
    assert!(watcher.poll().await.unwrap().is_empty());
    assert_eq!(watcher.next_block(), Some(101));

    let from = Address::repeat_byte(0x01);
    let to = Address::repeat_byte(0x02);
    asserter.push_success(&U64::from(120));
    asserter.push_success(&vec![transfer_log(usds.address(), 105, from, to, 42)]);

    let logs = watcher.next_batch().await.unwrap();

    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].event, "Transfer");
    assert_eq!(logs[0].address, usds.address());
    assert_eq!(logs[0].block_number, Some(105));
    assert_eq!(
        logs[0].indexed,
        vec![DynSolValue::Address(from), DynSolValue::Address(to)]
    );
    assert_eq!(logs[0].body, vec![DynSolValue::Uint(U256::from(42), 256)]);

    // the range is capped, so the watcher resumes after block 110
    assert_eq!(watcher.next_block(), Some(111));
    assert_eq!(clock.sleep_count(), 1);
    assert_eq!(clock.total_sleep_time(), Duration::from_secs(12));
}

#[tokio::test]
async fn test_watcher_waits_when_caught_up() {
    let (asserter, provider) = mocked();
    let usds = ContractClient::<Usds, _>::on_chain(ChainId::Mainnet, provider).unwrap();

    let mut watcher = usds
        .watch_with("Approval", Some(50), WatchConfig::default(), FakeClock::new())
        .unwrap();

    // head is behind the start block: nothing to fetch, no eth_getLogs issued
    asserter.push_success(&U64::from(49));
    assert!(watcher.poll().await.unwrap().is_empty());
    assert_eq!(watcher.next_block(), Some(50));
}

#[tokio::test]
async fn test_logs_over_explicit_range() {
    let (asserter, provider) = mocked();
    let usds = ContractClient::<Usds, _>::on_chain(ChainId::Mainnet, provider).unwrap();
    let holder = Address::repeat_byte(0x09);

    asserter.push_success(&vec![
        transfer_log(usds.address(), 7, Address::ZERO, holder, 1),
        transfer_log(usds.address(), 8, holder, Address::ZERO, 1),
    ]);

    let logs = usds.logs("Transfer", 1, 10).await.unwrap();
    let blocks: Vec<_> = logs.iter().map(|log| log.block_number).collect();
    assert_eq!(blocks, vec![Some(7), Some(8)]);
}

#[tokio::test]
async fn test_verify_manifest_detects_missing_deployment() {
    init_tracing();
    let mut canonical = DeploymentManifest::from_registry();
    canonical
        .contracts
        .get_mut("usds")
        .unwrap()
        .insert(8453, "0x0000000000000000000000000000000000000bad".to_string());

    let source = FakeManifestSource::returning(canonical);
    let drift = verify_manifest(&source).await.unwrap();

    assert_eq!(drift.len(), 1);
    assert!(matches!(
        &drift[0],
        Drift::MissingDeployment { contract, chain_id: 8453, .. } if contract == "usds"
    ));
}

#[tokio::test]
async fn test_verify_manifest_retries_are_caller_driven() {
    let source = FakeManifestSource::new();
    source.push_invalid("registry unavailable");
    source.push_manifest(DeploymentManifest::from_registry());

    let first = verify_manifest(&source).await;
    assert!(matches!(first, Err(BindingsError::InvalidManifest(_))));

    let second = verify_manifest(&source).await.unwrap();
    assert!(second.is_empty());
    assert_eq!(source.fetch_count(), 2);
}

#[tokio::test]
async fn test_watcher_at_max_block_height_does_not_overflow() {
    let (asserter, provider) = mocked();
    let usds = ContractClient::<Usds, _>::on_chain(ChainId::Mainnet, provider).unwrap();
    let mut watcher = usds
        .watch_with("Transfer", None, WatchConfig::default(), FakeClock::new())
        .unwrap();

    asserter.push_success(&U64::from(u64::MAX));
    assert!(watcher.poll().await.unwrap().is_empty());
    assert_eq!(watcher.next_block(), Some(u64::MAX));

    asserter.push_success(&U64::from(u64::MAX));
    asserter.push_success(&Vec::<Log>::new());
    assert!(watcher.poll().await.unwrap().is_empty());
    assert_eq!(watcher.next_block(), Some(u64::MAX));
}

#[tokio::test]
async fn test_watcher_debug_output() {
    let (_asserter, provider) = mocked();
    let usds = ContractClient::<Usds, _>::on_chain(ChainId::Mainnet, provider).unwrap();
    let watcher = usds
        .watch_with("Approval", Some(7), WatchConfig::default(), FakeClock::new())
        .unwrap();

    let rendered = format!("{watcher:?}");
    assert!(rendered.starts_with("EventWatcher {"));
    assert!(rendered.contains("contract: \"usds\""));
    assert!(rendered.contains("event: \"Approval\""));
    assert!(rendered.contains("next_block: Some(7)"));
    assert!(rendered.contains("config: WatchConfig"));
}
