// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! # sky-bindings
//!
//! Typed contract bindings for the Sky and Spark protocols on Ethereum and
//! its L2s.
//!
//! Every catalogued contract (tokens, savings vaults, PSMs, core accounting,
//! farms, oracles and settlement infrastructure) is exported as:
//!
//! - its ABI, as a `sol!` interface in [`abi`],
//! - an address book keyed by chain (`PSM3_ADDRESS`),
//! - a config object pairing the two (`PSM3_CONFIG`),
//! - a marker type implementing [`Deployment`] ([`Psm3`]), which
//!   [`ContractClient`] uses to read, simulate, write and watch.
//!
//! Supported chains are listed on [`ChainId`]: Ethereum, Optimism, Unichain,
//! Base, Arbitrum One and the Tenderly virtual testnet (`314310`).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use alloy_dyn_abi::DynSolValue;
//! use alloy_primitives::{Address, U256};
//! use alloy_provider::ProviderBuilder;
//! use sky_bindings::{ChainId, ContractClient, SUsds, WriteRequest};
//!
//! # async fn example() -> sky_bindings::Result<()> {
//! let provider = ProviderBuilder::new().connect_http("http://localhost:8545".parse()?);
//! let susds = ContractClient::<SUsds, _>::on_chain(ChainId::Mainnet, provider)?;
//!
//! // view call
//! let ssr = susds.read("ssr", &[]).await?;
//!
//! // dry-run a deposit, then build the transaction for an external signer
//! let owner = Address::repeat_byte(0x11);
//! let deposit = WriteRequest::builder()
//!     .function("deposit")
//!     .args(vec![
//!         DynSolValue::Uint(U256::from(1_000u64), 256),
//!         DynSolValue::Address(owner),
//!     ])
//!     .from(owner)
//!     .build();
//! let shares = susds.simulate(&deposit).await?;
//! let tx = susds.write_transaction(&deposit)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! [`RpcConfig::from_env`] reads one `SKY_RPC_URL_<CHAIN>` variable per
//! chain, loading a `.env` file first when present. [`WatchConfig`] tunes
//! event polling.
//!
//! ## Public API
//!
//! - [`Deployment`], [`AddressBook`] and [`ContractConfig`]: the catalogue
//! - [`registry`]: lookups across every config object
//! - [`ContractClient`], [`WriteRequest`], [`EventWatcher`] and
//!   [`DecodedLog`]: dynamic read, write and watch
//! - Typed wrappers: [`Erc20Contract`], [`SavingsVaultContract`],
//!   [`Psm3Contract`], [`StakingRewardsContract`]
//! - [`DeploymentManifest`], [`verify`] and [`integrity`]: checks of the
//!   address tables
//! - [`BindingsError`] and [`Result`]

pub mod abi;
mod batch;
mod chain;
mod client;
mod config;
mod contracts;
mod deployments;
mod error;
pub mod integrity;
mod manifest;
pub mod providers;
pub mod registry;
pub mod testing;
pub mod traits;
pub mod verify;

pub use batch::{batch_token_checks, batch_token_state, batch_token_state_for, TokenState};
pub use chain::{ChainId, InvalidChainId};
pub use client::{ContractClient, DecodedLog, EventWatcher, WriteRequest};
pub use config::{RpcConfig, WatchConfig};
pub use contracts::{
    erc20::Erc20Contract,
    psm3::{Psm3Contract, Swap},
    savings::SavingsVaultContract,
    staking_rewards::StakingRewardsContract,
};
pub use deployments::*;
pub use error::{BindingsError, Result};
pub use manifest::{DeploymentManifest, Drift};
pub use verify::MissingCode;

// Public module for advanced users who need custom instrumentation
pub mod spans;
