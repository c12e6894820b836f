// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Structural checks over the address tables and ABIs
//!
//! Each check returns the list of problems it found; an empty list means the
//! data is sound. [`check_registry`] runs everything over the catalogue and is
//! exercised by the test suite, so a malformed table entry fails CI rather
//! than a user's transaction.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

use alloy_dyn_abi::{DynSolType, Specifier};
use alloy_json_abi::{JsonAbi, Param};
use alloy_primitives::Address;
use tracing::{debug, warn};

use crate::chain::ChainId;
use crate::deployments::{AddressBook, ContractConfig, ALL};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrityIssue {
    pub contract: String,
    pub kind: IssueKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    EmptyAddressBook,
    /// Not `0x` followed by 40 hex digits
    MalformedLiteral { chain: ChainId, literal: String },
    /// The stored address differs from the one the literal spells
    LiteralMismatch { chain: ChainId },
    /// Literal not written in its EIP-55 checksum casing
    BadChecksum { chain: ChainId, literal: String },
    ZeroAddress { chain: ChainId },
    DuplicateChain { chain: ChainId },
    /// The same address is catalogued under two names on one chain
    SharedAddress { chain: ChainId, other: String },
    EmptyName { item: &'static str },
    InvalidType { item: String, ty: String },
    TooManyIndexed { event: String, indexed: usize },
    /// Two overloads with the same arity cannot be told apart by the client
    AmbiguousOverload { function: String, arity: usize },
    ConfigMismatch { field: &'static str },
    DuplicateName,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyAddressBook => write!(f, "address book is empty"),
            Self::MalformedLiteral { chain, literal } => {
                write!(f, "{chain}: `{literal}` is not a 20-byte hex address")
            }
            Self::LiteralMismatch { chain } => {
                write!(f, "{chain}: stored address does not match its literal")
            }
            Self::BadChecksum { chain, literal } => {
                write!(f, "{chain}: `{literal}` is not EIP-55 checksum-cased")
            }
            Self::ZeroAddress { chain } => write!(f, "{chain}: zero address"),
            Self::DuplicateChain { chain } => write!(f, "{chain}: listed more than once"),
            Self::SharedAddress { chain, other } => {
                write!(f, "{chain}: address also catalogued as {other}")
            }
            Self::EmptyName { item } => write!(f, "unnamed {item}"),
            Self::InvalidType { item, ty } => write!(f, "{item}: `{ty}` is not a Solidity type"),
            Self::TooManyIndexed { event, indexed } => {
                write!(f, "event {event} has {indexed} indexed parameters")
            }
            Self::AmbiguousOverload { function, arity } => {
                write!(f, "{function} has several overloads taking {arity} argument(s)")
            }
            Self::ConfigMismatch { field } => write!(f, "config {field} is not the sibling export"),
            Self::DuplicateName => write!(f, "name used by more than one contract"),
        }
    }
}

impl fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.contract, self.kind)
    }
}

fn issue(contract: &str, kind: IssueKind) -> IntegrityIssue {
    IntegrityIssue {
        contract: contract.to_string(),
        kind,
    }
}

fn is_hex_address_literal(literal: &str) -> bool {
    literal
        .strip_prefix("0x")
        .is_some_and(|digits| digits.len() == 40 && digits.bytes().all(|b| b.is_ascii_hexdigit()))
}

/// Checks one address book
pub fn check_address_book(contract: &str, book: &AddressBook) -> Vec<IntegrityIssue> {
    let mut issues = Vec::new();

    if book.is_empty() {
        issues.push(issue(contract, IssueKind::EmptyAddressBook));
    }

    let mut seen = HashSet::new();
    for entry in book.iter() {
        let chain = entry.chain;

        if !seen.insert(chain) {
            issues.push(issue(contract, IssueKind::DuplicateChain { chain }));
        }

        if !is_hex_address_literal(entry.literal) {
            issues.push(issue(
                contract,
                IssueKind::MalformedLiteral {
                    chain,
                    literal: entry.literal.to_string(),
                },
            ));
            continue;
        }

        let Ok(parsed) = entry.literal.parse::<Address>() else {
            continue;
        };
        if parsed != entry.address {
            issues.push(issue(contract, IssueKind::LiteralMismatch { chain }));
        }

        if entry.literal != parsed.to_checksum(None) {
            issues.push(issue(
                contract,
                IssueKind::BadChecksum {
                    chain,
                    literal: entry.literal.to_string(),
                },
            ));
        }

        if entry.address.is_zero() {
            issues.push(issue(contract, IssueKind::ZeroAddress { chain }));
        }
    }

    issues
}

fn check_params<'a>(
    contract: &str,
    item: &str,
    params: impl IntoIterator<Item = &'a Param>,
    issues: &mut Vec<IntegrityIssue>,
) {
    for param in params {
        let resolved: Result<DynSolType, _> = param.resolve();
        if resolved.is_err() {
            issues.push(issue(
                contract,
                IssueKind::InvalidType {
                    item: item.to_string(),
                    ty: param.ty.clone(),
                },
            ));
        }
    }
}

/// Checks that an ABI is well-formed
pub fn check_abi(contract: &str, abi: &JsonAbi) -> Vec<IntegrityIssue> {
    let mut issues = Vec::new();

    for (name, overloads) in &abi.functions {
        let mut arities = HashSet::new();
        for function in overloads {
            if function.name.is_empty() {
                issues.push(issue(contract, IssueKind::EmptyName { item: "function" }));
            }
            check_params(contract, name, &function.inputs, &mut issues);
            check_params(contract, name, &function.outputs, &mut issues);

            let arity = function.inputs.len();
            if !arities.insert(arity) {
                issues.push(issue(
                    contract,
                    IssueKind::AmbiguousOverload {
                        function: name.clone(),
                        arity,
                    },
                ));
            }
        }
    }

    for event in abi.events() {
        if event.name.is_empty() {
            issues.push(issue(contract, IssueKind::EmptyName { item: "event" }));
        }
        for param in &event.inputs {
            let resolved: Result<DynSolType, _> = param.resolve();
            if resolved.is_err() {
                issues.push(issue(
                    contract,
                    IssueKind::InvalidType {
                        item: event.name.clone(),
                        ty: param.ty.clone(),
                    },
                ));
            }
        }

        let indexed = event.inputs.iter().filter(|param| param.indexed).count();
        let limit = if event.anonymous { 4 } else { 3 };
        if indexed > limit {
            issues.push(issue(
                contract,
                IssueKind::TooManyIndexed {
                    event: event.name.clone(),
                    indexed,
                },
            ));
        }
    }

    for error in abi.errors() {
        if error.name.is_empty() {
            issues.push(issue(contract, IssueKind::EmptyName { item: "error" }));
        }
        check_params(contract, &error.name, &error.inputs, &mut issues);
    }

    issues
}

/// Checks that a config object carries its sibling address book and ABI
pub fn check_config(
    config: &ContractConfig,
    expected_book: &AddressBook,
    expected_abi: &JsonAbi,
) -> Vec<IntegrityIssue> {
    let mut issues = Vec::new();
    if config.address != *expected_book {
        issues.push(issue(config.name, IssueKind::ConfigMismatch { field: "address" }));
    }
    if config.abi() != *expected_abi {
        issues.push(issue(config.name, IssueKind::ConfigMismatch { field: "abi" }));
    }
    issues
}

/// Runs every check over the whole catalogue
pub fn check_registry() -> Vec<IntegrityIssue> {
    check_configs(ALL)
}

pub(crate) fn check_configs(configs: &[ContractConfig]) -> Vec<IntegrityIssue> {
    let mut issues = Vec::new();
    let mut names = HashSet::new();
    let mut owners: HashMap<(ChainId, Address), &str> = HashMap::new();

    for config in configs {
        if !names.insert(config.name.to_ascii_lowercase()) {
            issues.push(issue(config.name, IssueKind::DuplicateName));
        }

        issues.extend(check_address_book(config.name, &config.address));
        issues.extend(check_abi(config.name, &config.abi()));

        for entry in config.address.iter() {
            if let Some(other) = owners.insert((entry.chain, entry.address), config.name) {
                issues.push(issue(
                    config.name,
                    IssueKind::SharedAddress {
                        chain: entry.chain,
                        other: other.to_string(),
                    },
                ));
            }
        }
    }

    if issues.is_empty() {
        debug!(contracts = configs.len(), event = "registry_integrity_ok");
    } else {
        let by_contract: BTreeMap<&str, usize> =
            issues.iter().fold(BTreeMap::new(), |mut acc, issue| {
                *acc.entry(issue.contract.as_str()).or_default() += 1;
                acc
            });
        warn!(
            issue_count = issues.len(),
            contracts = ?by_contract,
            event = "registry_integrity_failed"
        );
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abi::IErc20;
    use crate::deployments::{AddressEntry, PERMIT2_CONFIG, USDC_ADDRESS, USDC_CONFIG};
    use alloy_json_abi::{Error, Event, EventParam, Function, StateMutability};
    use alloy_primitives::address;

    const CHECKSUMMED: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";

    fn param(ty: &str) -> Param {
        Param {
            ty: ty.into(),
            name: "x".into(),
            components: vec![],
            internal_type: None,
        }
    }

    fn indexed(name: &str) -> EventParam {
        EventParam {
            ty: "address".into(),
            name: name.into(),
            indexed: true,
            components: vec![],
            internal_type: None,
        }
    }

    #[test]
    fn test_catalogue_is_sound() {
        let issues = check_registry();
        assert!(issues.is_empty(), "integrity issues: {issues:#?}");
    }

    #[test]
    fn test_bad_checksum_detected() {
        // Last character flipped to lowercase
        const ENTRIES: &[AddressEntry] = &[AddressEntry {
            chain: ChainId::Mainnet,
            address: address!("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"),
            literal: "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eb48",
        }];
        let issues = check_address_book("usdc", &AddressBook::new(ENTRIES));
        assert_eq!(issues.len(), 1);
        assert!(matches!(issues[0].kind, IssueKind::BadChecksum { .. }));
    }

    #[test]
    fn test_lowercase_literal_rejected() {
        const ENTRIES: &[AddressEntry] = &[AddressEntry {
            chain: ChainId::Mainnet,
            address: address!("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"),
            literal: "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
        }];
        let issues = check_address_book("usdc", &AddressBook::new(ENTRIES));
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].to_string(),
            "usdc: Ethereum (1): `0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48` is not EIP-55 checksum-cased"
        );
    }

    #[test]
    fn test_catalogue_literals_are_checksummed() {
        for config in ALL {
            for entry in config.address.iter() {
                assert_eq!(
                    entry.literal,
                    entry.address.to_checksum(None),
                    "{} on {}",
                    config.name,
                    entry.chain
                );
            }
        }
    }

    #[test]
    fn test_malformed_and_duplicate_entries() {
        const ENTRIES: &[AddressEntry] = &[
            AddressEntry {
                chain: ChainId::Base,
                address: Address::ZERO,
                literal: "0x0000000000000000000000000000000000000000",
            },
            AddressEntry {
                chain: ChainId::Base,
                address: Address::ZERO,
                literal: "0x1234",
            },
        ];
        let issues = check_address_book("broken", &AddressBook::new(ENTRIES));
        let rendered: Vec<String> = issues.iter().map(ToString::to_string).collect();
        insta::assert_snapshot!(rendered.join("\n"), @r"
        broken: Base (8453): zero address
        broken: Base (8453): listed more than once
        broken: Base (8453): `0x1234` is not a 20-byte hex address
        ");
    }

    #[test]
    fn test_literal_mismatch() {
        const ENTRIES: &[AddressEntry] = &[AddressEntry {
            chain: ChainId::Optimism,
            address: address!("0x0000000000000000000000000000000000000001"),
            literal: CHECKSUMMED,
        }];
        let issues = check_address_book("usdc", &AddressBook::new(ENTRIES));
        assert_eq!(
            issues,
            vec![IntegrityIssue {
                contract: "usdc".into(),
                kind: IssueKind::LiteralMismatch {
                    chain: ChainId::Optimism
                },
            }]
        );
    }

    #[test]
    fn test_empty_book() {
        let issues = check_address_book("nothing", &AddressBook::new(&[]));
        assert_eq!(issues[0].kind, IssueKind::EmptyAddressBook);
    }

    #[test]
    fn test_invalid_abi_type() {
        let mut abi = JsonAbi::default();
        abi.functions.insert(
            "broken".into(),
            vec![Function {
                name: "broken".into(),
                inputs: vec![param("strng")],
                outputs: vec![param("uint256")],
                state_mutability: StateMutability::View,
            }],
        );
        let issues = check_abi("test", &abi);
        assert_eq!(
            issues,
            vec![IntegrityIssue {
                contract: "test".into(),
                kind: IssueKind::InvalidType {
                    item: "broken".into(),
                    ty: "strng".into(),
                },
            }]
        );
    }

    #[test]
    fn test_malformed_custom_errors() {
        let mut abi = JsonAbi::default();
        abi.errors.insert(
            String::new(),
            vec![Error {
                name: String::new(),
                inputs: vec![param("uint256")],
            }],
        );
        abi.errors.insert(
            "Broken".into(),
            vec![Error {
                name: "Broken".into(),
                inputs: vec![param("strng")],
            }],
        );
        let issues = check_abi("test", &abi);
        assert_eq!(
            issues,
            vec![
                IntegrityIssue {
                    contract: "test".into(),
                    kind: IssueKind::EmptyName { item: "error" },
                },
                IntegrityIssue {
                    contract: "test".into(),
                    kind: IssueKind::InvalidType {
                        item: "Broken".into(),
                        ty: "strng".into(),
                    },
                },
            ]
        );
    }

    #[test]
    fn test_permit2_errors_are_checked() {
        let abi = PERMIT2_CONFIG.abi();
        assert!(abi.errors.contains_key("InvalidNonce"));
        assert!(abi.errors.contains_key("AllowanceExpired"));
        assert!(check_abi("permit2", &abi).is_empty());
    }

    #[test]
    fn test_ambiguous_overload() {
        let function = |ty: &str| Function {
            name: "deposit".into(),
            inputs: vec![param(ty)],
            outputs: vec![],
            state_mutability: StateMutability::NonPayable,
        };
        let mut abi = JsonAbi::default();
        abi.functions
            .insert("deposit".into(), vec![function("uint256"), function("address")]);
        let issues = check_abi("vault", &abi);
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].to_string(),
            "vault: deposit has several overloads taking 1 argument(s)"
        );
    }

    #[test]
    fn test_too_many_indexed() {
        let mut abi = JsonAbi::default();
        abi.events.insert(
            "Noisy".into(),
            vec![Event {
                name: "Noisy".into(),
                inputs: vec![indexed("a"), indexed("b"), indexed("c"), indexed("d")],
                anonymous: false,
            }],
        );
        let issues = check_abi("noisy", &abi);
        assert!(matches!(
            issues[0].kind,
            IssueKind::TooManyIndexed { indexed: 4, .. }
        ));

        abi.events.get_mut("Noisy").unwrap()[0].anonymous = true;
        assert!(check_abi("noisy", &abi).is_empty());
    }

    #[test]
    fn test_config_mismatch() {
        assert!(check_config(&USDC_CONFIG, &USDC_ADDRESS, &USDC_CONFIG.abi()).is_empty());

        let issues = check_config(&USDC_CONFIG, &USDC_ADDRESS, &IErc20::abi::contract());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::ConfigMismatch { field: "abi" });
    }

    #[test]
    fn test_duplicate_names_and_shared_addresses() {
        let issues = check_configs(&[USDC_CONFIG, USDC_CONFIG]);
        assert!(issues.iter().any(|i| i.kind == IssueKind::DuplicateName));
        assert_eq!(
            issues
                .iter()
                .filter(|i| matches!(i.kind, IssueKind::SharedAddress { .. }))
                .count(),
            USDC_ADDRESS.len()
        );
    }
}
