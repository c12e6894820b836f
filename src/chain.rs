// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Chain identifiers for the networks that host Sky and Spark deployments
//!
//! Every address table in this crate is keyed by [`ChainId`]. The enum is
//! closed over the networks the tables actually cover, so a lookup on an
//! unsupported network is a type error rather than a silent miss.

use std::fmt;

use alloy_chains::NamedChain;

/// EVM chain identifier for a network that hosts at least one deployment
///
/// # Example
///
/// ```rust
/// use sky_bindings::ChainId;
///
/// let base = ChainId::Base;
/// let id: u64 = base.into();
/// assert_eq!(id, 8453);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u64)]
#[non_exhaustive]
pub enum ChainId {
    /// Ethereum mainnet (Chain ID: 1)
    Mainnet = 1,
    /// OP Mainnet (Chain ID: 10)
    Optimism = 10,
    /// Unichain (Chain ID: 130)
    Unichain = 130,
    /// Base (Chain ID: 8453)
    Base = 8453,
    /// Arbitrum One (Chain ID: 42161)
    Arbitrum = 42161,
    /// Mainnet fork used for internal testing (Chain ID: 314310)
    VirtualTestnet = 314310,
}

impl ChainId {
    /// All supported chains, in ascending chain ID order.
    pub const ALL: [ChainId; 6] = [
        Self::Mainnet,
        Self::Optimism,
        Self::Unichain,
        Self::Base,
        Self::Arbitrum,
        Self::VirtualTestnet,
    ];

    /// Returns the numeric chain ID
    ///
    /// ```rust
    /// use sky_bindings::ChainId;
    ///
    /// assert_eq!(ChainId::Mainnet.as_u64(), 1);
    /// assert_eq!(ChainId::Arbitrum.as_u64(), 42161);
    /// ```
    #[inline]
    pub const fn as_u64(self) -> u64 {
        self as u64
    }

    /// Attempts to create a ChainId from a numeric chain ID
    ///
    /// ```rust
    /// use sky_bindings::ChainId;
    ///
    /// assert_eq!(ChainId::from_u64(130), Some(ChainId::Unichain));
    /// assert_eq!(ChainId::from_u64(137), None);
    /// ```
    #[inline]
    pub const fn from_u64(value: u64) -> Option<Self> {
        match value {
            1 => Some(Self::Mainnet),
            10 => Some(Self::Optimism),
            130 => Some(Self::Unichain),
            8453 => Some(Self::Base),
            42161 => Some(Self::Arbitrum),
            314310 => Some(Self::VirtualTestnet),
            _ => None,
        }
    }

    /// Returns the human readable network name
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mainnet => "Ethereum",
            Self::Optimism => "OP Mainnet",
            Self::Unichain => "Unichain",
            Self::Base => "Base",
            Self::Arbitrum => "Arbitrum One",
            Self::VirtualTestnet => "Virtual Testnet",
        }
    }

    /// Returns the key used for this chain in environment variable names
    ///
    /// `SKY_RPC_URL_BASE` configures the Base endpoint, for instance.
    #[inline]
    pub const fn env_key(self) -> &'static str {
        match self {
            Self::Mainnet => "MAINNET",
            Self::Optimism => "OPTIMISM",
            Self::Unichain => "UNICHAIN",
            Self::Base => "BASE",
            Self::Arbitrum => "ARBITRUM",
            Self::VirtualTestnet => "VIRTUAL_TESTNET",
        }
    }

    /// Returns true for rollups settling to Ethereum mainnet
    #[inline]
    pub const fn is_l2(self) -> bool {
        matches!(
            self,
            Self::Optimism | Self::Unichain | Self::Base | Self::Arbitrum
        )
    }

    /// Returns the matching [`NamedChain`], if alloy knows the network
    ///
    /// The virtual testnet is private and has no named counterpart.
    pub const fn named_chain(self) -> Option<NamedChain> {
        match self {
            Self::Mainnet => Some(NamedChain::Mainnet),
            Self::Optimism => Some(NamedChain::Optimism),
            Self::Unichain => Some(NamedChain::Unichain),
            Self::Base => Some(NamedChain::Base),
            Self::Arbitrum => Some(NamedChain::Arbitrum),
            Self::VirtualTestnet => None,
        }
    }
}

impl From<ChainId> for u64 {
    #[inline]
    fn from(chain: ChainId) -> Self {
        chain.as_u64()
    }
}

impl TryFrom<u64> for ChainId {
    type Error = InvalidChainId;

    #[inline]
    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::from_u64(value).ok_or(InvalidChainId(value))
    }
}

impl TryFrom<NamedChain> for ChainId {
    type Error = InvalidChainId;

    fn try_from(chain: NamedChain) -> Result<Self, Self::Error> {
        Self::try_from(chain as u64)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.as_u64())
    }
}

/// Error returned when a numeric chain ID has no deployments in this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidChainId(pub u64);

impl fmt::Display for InvalidChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported chain ID: {}", self.0)
    }
}

impl std::error::Error for InvalidChainId {}

impl From<InvalidChainId> for crate::BindingsError {
    fn from(err: InvalidChainId) -> Self {
        crate::BindingsError::UnsupportedChain(err.0)
    }
}
