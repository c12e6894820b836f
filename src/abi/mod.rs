// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Contract interfaces
//!
//! Alloy-generated bindings for every contract ABI in the catalogue. Each
//! interface is declared with `#[sol(rpc, abi)]`, which gives two things:
//!
//! - a typed RPC instance (`IErc20::new(address, provider)`) with one method
//!   per function and one `<Event>_filter` per event, and
//! - the runtime ABI (`IErc20::abi::contract()`), used by the dynamic
//!   [`ContractClient`](crate::ContractClient) and the integrity checks.
//!
//! Several deployments share an interface: every plain permit token uses
//! [`IErc20Permit`], both join adapters use [`IJoin`], and the two USDS farms
//! use [`IStakingRewards`].

mod infra;
mod sky;
mod spark;
mod tokens;

pub use infra::{IChainlinkAggregator, IGPv2Settlement, IMulticall3, IPermit2, IProxyRegistry};
pub use sky::{
    IChainlog, IDaiUsds, IJoin, IJug, ILitePsm, ILockstakeEngine, IMkrSky, IPot, IStakingRewards,
    IUsdsPsmWrapper, IVat,
};
pub use spark::{IPsm3, ISparkPool, ISparkRewards, ISsrAuthOracle};
pub use tokens::{IDai, IErc20, IErc20Permit, IErc4626, ISUsds, ITetherToken, IWeth9};
