// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Per-chain deployment addresses and config objects
//!
//! Every contract in the catalogue is described by three exports:
//!
//! - a marker type implementing [`Deployment`] (for example [`Usds`]),
//! - an [`AddressBook`] constant mapping chain IDs to addresses
//!   (`USDS_ADDRESS`),
//! - a [`ContractConfig`] constant pairing the address book with the ABI
//!   (`USDS_CONFIG`).
//!
//! Address books are declared with the `address_book!` macro. The macro takes
//! each address literal once and emits the rustdoc table, the parsed
//! [`Address`] and the verbatim literal from that single token, so the
//! documented address and the table entry are always the same string.

use alloy_json_abi::JsonAbi;
use alloy_network::Ethereum;
use alloy_primitives::Address;
use alloy_provider::Provider;

use crate::chain::ChainId;
use crate::error::{BindingsError, Result};

macro_rules! address_book {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($chain:ident => $addr:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        ///
        /// | Chain | Address |
        /// |---|---|
        $(
            #[doc = concat!("| ", stringify!($chain), " | `", $addr, "` |")]
        )+
        pub const $name: $crate::deployments::AddressBook = {
            const ENTRIES: &[$crate::deployments::AddressEntry] = &[
                $(
                    $crate::deployments::AddressEntry {
                        chain: $crate::chain::ChainId::$chain,
                        address: ::alloy_primitives::address!($addr),
                        literal: $addr,
                    },
                )+
            ];
            $crate::deployments::AddressBook::new(ENTRIES)
        };
    };
}

macro_rules! deployment {
    (
        $(#[$meta:meta])*
        $marker:ident {
            name: $name:literal,
            interface: $iface:ident :: $instance:ident,
            address: $address:ident,
            config: $config:ident $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $marker;

        #[doc = concat!(
            "Config object for `", $name, "`: [`", stringify!($address),
            "`] paired with the [`", stringify!($iface), "`] ABI."
        )]
        pub const $config: $crate::deployments::ContractConfig =
            $crate::deployments::ContractConfig::new($name, $address, $iface::abi::contract);

        impl $crate::deployments::Deployment for $marker {
            const NAME: &'static str = $name;
            const ADDRESS: $crate::deployments::AddressBook = $address;
            const CONFIG: $crate::deployments::ContractConfig = $config;

            type Instance<P: ::alloy_provider::Provider<::alloy_network::Ethereum>> =
                $iface::$instance<P>;

            fn abi() -> ::alloy_json_abi::JsonAbi {
                $iface::abi::contract()
            }

            fn instance<P: ::alloy_provider::Provider<::alloy_network::Ethereum>>(
                address: ::alloy_primitives::Address,
                provider: P,
            ) -> Self::Instance<P> {
                $iface::$instance::new(address, provider)
            }
        }
    };
}

mod addresses;
mod catalog;

pub use addresses::*;
pub use catalog::*;

/// One row of an address book
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressEntry {
    /// Network hosting the deployment
    pub chain: ChainId,
    /// Parsed contract address
    pub address: Address,
    /// The address exactly as transcribed into the table
    pub literal: &'static str,
}

/// Static chain ID to address table for one contract
///
/// Entries keep their declaration order. A chain appears at most once; the
/// integrity checks in [`crate::integrity`] enforce this for every book in the
/// catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressBook {
    entries: &'static [AddressEntry],
}

impl AddressBook {
    /// Wraps a static entry table
    pub const fn new(entries: &'static [AddressEntry]) -> Self {
        Self { entries }
    }

    /// Returns the address deployed on `chain`, if any
    pub fn get(&self, chain: ChainId) -> Option<Address> {
        self.entry(chain).map(|entry| entry.address)
    }

    /// Returns the full entry for `chain`, if any
    pub fn entry(&self, chain: ChainId) -> Option<&'static AddressEntry> {
        self.entries.iter().find(|entry| entry.chain == chain)
    }

    /// Returns true if the contract is deployed on `chain`
    pub fn contains(&self, chain: ChainId) -> bool {
        self.entry(chain).is_some()
    }

    /// Chains covered by this book, in declaration order
    pub fn chains(&self) -> impl Iterator<Item = ChainId> + 'static {
        self.entries.iter().map(|entry| entry.chain)
    }

    pub fn iter(&self) -> std::slice::Iter<'static, AddressEntry> {
        self.entries.iter()
    }

    pub const fn entries(&self) -> &'static [AddressEntry] {
        self.entries
    }

    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for AddressBook {
    type Item = &'static AddressEntry;
    type IntoIter = std::slice::Iter<'static, AddressEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Config object: a contract's ABI paired with its address book
#[derive(Debug, Clone, Copy)]
pub struct ContractConfig {
    /// Catalogue name, e.g. `"sUsds"`
    pub name: &'static str,
    /// Per-chain deployment addresses
    pub address: AddressBook,
    abi: fn() -> JsonAbi,
}

impl ContractConfig {
    pub const fn new(name: &'static str, address: AddressBook, abi: fn() -> JsonAbi) -> Self {
        Self { name, address, abi }
    }

    /// Builds the contract's JSON ABI
    pub fn abi(&self) -> JsonAbi {
        (self.abi)()
    }

    /// Returns the address on `chain` or [`BindingsError::NotDeployed`]
    pub fn address_on(&self, chain: ChainId) -> Result<Address> {
        self.address.get(chain).ok_or(BindingsError::NotDeployed {
            contract: self.name,
            chain,
        })
    }
}

/// A catalogued contract: name, address book, ABI and typed instance
///
/// Implemented by the unit marker types in this module. The marker is what
/// generic code such as [`ContractClient`](crate::ContractClient) is
/// parameterised over.
///
/// ```rust
/// use sky_bindings::{ChainId, Deployment, Psm3};
///
/// assert_eq!(Psm3::NAME, "psm3");
/// assert!(Psm3::address_on(ChainId::Base).is_ok());
/// assert!(Psm3::address_on(ChainId::Mainnet).is_err());
/// ```
pub trait Deployment {
    /// Catalogue name
    const NAME: &'static str;
    /// Per-chain deployment addresses
    const ADDRESS: AddressBook;
    /// Config object bundling [`Self::ADDRESS`] with [`Self::abi`]
    const CONFIG: ContractConfig;

    /// Typed sol-generated instance for this contract's interface
    type Instance<P: Provider<Ethereum>>;

    /// Builds the contract's JSON ABI
    fn abi() -> JsonAbi;

    fn config() -> ContractConfig {
        Self::CONFIG
    }

    /// Creates the typed instance at `address`
    fn instance<P: Provider<Ethereum>>(address: Address, provider: P) -> Self::Instance<P>;

    /// Returns the address on `chain` or [`BindingsError::NotDeployed`]
    fn address_on(chain: ChainId) -> Result<Address> {
        Self::ADDRESS.get(chain).ok_or(BindingsError::NotDeployed {
            contract: Self::NAME,
            chain,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_book_lookup() {
        let book = USDC_ADDRESS;
        assert_eq!(book.len(), 6);
        assert!(book.contains(ChainId::Base));
        assert_eq!(
            book.get(ChainId::Mainnet),
            Some(alloy_primitives::address!(
                "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"
            ))
        );
    }

    #[test]
    fn test_address_book_missing_chain() {
        assert_eq!(DAI_ADDRESS.get(ChainId::Base), None);
        assert!(!DAI_ADDRESS.contains(ChainId::Arbitrum));
    }

    #[test]
    fn test_chains_preserve_declaration_order() {
        let chains: Vec<_> = PSM3_ADDRESS.chains().collect();
        assert_eq!(
            chains,
            vec![
                ChainId::Optimism,
                ChainId::Unichain,
                ChainId::Base,
                ChainId::Arbitrum
            ]
        );
    }

    #[test]
    fn test_config_address_on_reports_contract_and_chain() {
        let err = SPARK_POOL_CONFIG.address_on(ChainId::Base).unwrap_err();
        assert!(matches!(
            err,
            BindingsError::NotDeployed {
                contract: "sparkPool",
                chain: ChainId::Base
            }
        ));
        assert_eq!(err.to_string(), "sparkPool is not deployed on Base (8453)");
    }

    #[test]
    fn test_deployment_address_on_matches_book() {
        for chain in SUSDS_L2_ADDRESS.chains() {
            assert_eq!(
                SUsdsL2::address_on(chain).unwrap(),
                SUSDS_L2_ADDRESS.get(chain).unwrap()
            );
        }
    }

    #[test]
    fn test_literal_is_kept_verbatim() {
        let entry = MULTICALL3_ADDRESS.entry(ChainId::Unichain).unwrap();
        assert_eq!(entry.literal, "0xcA11bde05977b3631167028862bE2a173976CA11");
    }
}
