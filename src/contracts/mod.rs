// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Typed wrappers for the most used contract families
//!
//! [`ContractClient`](crate::ContractClient) reaches every function of every
//! catalogued contract by name. The wrappers here trade that reach for plain
//! Rust signatures over the sol-generated instances:
//!
//! - [`Erc20Contract`](erc20::Erc20Contract): any token in the catalogue
//! - [`SavingsVaultContract`](savings::SavingsVaultContract): sUSDS, sDAI, sUSDC, stUSDS
//! - [`Psm3Contract`](psm3::Psm3Contract): the L2 swap pool
//! - [`StakingRewardsContract`](staking_rewards::StakingRewardsContract): USDS farms

pub mod erc20;
pub mod psm3;
pub mod savings;
pub mod staking_rewards;
