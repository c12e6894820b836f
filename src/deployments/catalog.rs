// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Marker types and config objects for the contract catalogue

use super::addresses::*;
use super::ContractConfig;
use crate::abi::*;

deployment! {
    /// USDC
    Usdc { name: "usdc", interface: IErc20Permit::IErc20PermitInstance, address: USDC_ADDRESS, config: USDC_CONFIG }
}

deployment! {
    /// USDT
    Usdt { name: "usdt", interface: ITetherToken::ITetherTokenInstance, address: USDT_ADDRESS, config: USDT_CONFIG }
}

deployment! {
    /// Wrapped Ether
    Weth { name: "weth", interface: IWeth9::IWeth9Instance, address: WETH_ADDRESS, config: WETH_CONFIG }
}

deployment! {
    /// DAI
    Dai { name: "dai", interface: IDai::IDaiInstance, address: DAI_ADDRESS, config: DAI_CONFIG }
}

deployment! {
    /// USDS on mainnet
    Usds { name: "usds", interface: IErc20Permit::IErc20PermitInstance, address: USDS_ADDRESS, config: USDS_CONFIG }
}

deployment! {
    /// Bridged USDS on L2s
    UsdsL2 { name: "usdsL2", interface: IErc20Permit::IErc20PermitInstance, address: USDS_L2_ADDRESS, config: USDS_L2_CONFIG }
}

deployment! {
    /// sUSDS savings vault on mainnet
    SUsds { name: "sUsds", interface: ISUsds::ISUsdsInstance, address: SUSDS_ADDRESS, config: SUSDS_CONFIG }
}

deployment! {
    /// Bridged sUSDS on L2s
    ///
    /// A plain token on L2s: deposits and redemptions go through [`Psm3`].
    SUsdsL2 { name: "sUsdsL2", interface: IErc20Permit::IErc20PermitInstance, address: SUSDS_L2_ADDRESS, config: SUSDS_L2_CONFIG }
}

deployment! {
    /// Savings DAI
    SDai { name: "sDai", interface: IErc4626::IErc4626Instance, address: SDAI_ADDRESS, config: SDAI_CONFIG }
}

deployment! {
    /// Spark savings USDC
    SUsdc { name: "sUsdc", interface: IErc4626::IErc4626Instance, address: SUSDC_ADDRESS, config: SUSDC_CONFIG }
}

deployment! {
    /// Staked USDS
    StUsds { name: "stUsds", interface: IErc4626::IErc4626Instance, address: STUSDS_ADDRESS, config: STUSDS_CONFIG }
}

deployment! {
    Mkr { name: "mkr", interface: IErc20::IErc20Instance, address: MKR_ADDRESS, config: MKR_CONFIG }
}

deployment! {
    Sky { name: "sky", interface: IErc20Permit::IErc20PermitInstance, address: SKY_ADDRESS, config: SKY_CONFIG }
}

deployment! {
    Spk { name: "spk", interface: IErc20Permit::IErc20PermitInstance, address: SPK_ADDRESS, config: SPK_CONFIG }
}

deployment! {
    /// Lido wrapped stETH
    WstEth { name: "wstEth", interface: IErc20::IErc20Instance, address: WSTETH_ADDRESS, config: WSTETH_CONFIG }
}

deployment! {
    /// DAI <-> USDS converter
    DaiUsds { name: "daiUsds", interface: IDaiUsds::IDaiUsdsInstance, address: DAI_USDS_ADDRESS, config: DAI_USDS_CONFIG }
}

deployment! {
    /// MKR -> SKY converter
    MkrSky { name: "mkrSky", interface: IMkrSky::IMkrSkyInstance, address: MKR_SKY_ADDRESS, config: MKR_SKY_CONFIG }
}

deployment! {
    /// USDS wrapper over the USDC Lite PSM
    UsdsPsmWrapper {
        name: "usdsPsmWrapper",
        interface: IUsdsPsmWrapper::IUsdsPsmWrapperInstance,
        address: USDS_PSM_WRAPPER_ADDRESS,
        config: USDS_PSM_WRAPPER_CONFIG,
    }
}

deployment! {
    /// DAI/USDC Lite PSM
    LitePsmUsdc {
        name: "litePsmUsdc",
        interface: ILitePsm::ILitePsmInstance,
        address: LITE_PSM_USDC_ADDRESS,
        config: LITE_PSM_USDC_CONFIG,
    }
}

deployment! {
    /// Spark PSM3 on L2s
    Psm3 { name: "psm3", interface: IPsm3::IPsm3Instance, address: PSM3_ADDRESS, config: PSM3_CONFIG }
}

deployment! {
    Pot { name: "pot", interface: IPot::IPotInstance, address: POT_ADDRESS, config: POT_CONFIG }
}

deployment! {
    Vat { name: "vat", interface: IVat::IVatInstance, address: VAT_ADDRESS, config: VAT_CONFIG }
}

deployment! {
    Jug { name: "jug", interface: IJug::IJugInstance, address: JUG_ADDRESS, config: JUG_CONFIG }
}

deployment! {
    DaiJoin { name: "daiJoin", interface: IJoin::IJoinInstance, address: DAI_JOIN_ADDRESS, config: DAI_JOIN_CONFIG }
}

deployment! {
    UsdsJoin { name: "usdsJoin", interface: IJoin::IJoinInstance, address: USDS_JOIN_ADDRESS, config: USDS_JOIN_CONFIG }
}

deployment! {
    Chainlog { name: "chainlog", interface: IChainlog::IChainlogInstance, address: CHAINLOG_ADDRESS, config: CHAINLOG_CONFIG }
}

deployment! {
    /// DSProxy registry
    ProxyRegistry {
        name: "proxyRegistry",
        interface: IProxyRegistry::IProxyRegistryInstance,
        address: PROXY_REGISTRY_ADDRESS,
        config: PROXY_REGISTRY_CONFIG,
    }
}

deployment! {
    /// CoW Protocol settlement
    CowSettlement {
        name: "cowSettlement",
        interface: IGPv2Settlement::IGPv2SettlementInstance,
        address: COW_SETTLEMENT_ADDRESS,
        config: COW_SETTLEMENT_CONFIG,
    }
}

deployment! {
    Permit2 { name: "permit2", interface: IPermit2::IPermit2Instance, address: PERMIT2_ADDRESS, config: PERMIT2_CONFIG }
}

deployment! {
    Multicall3 {
        name: "multicall3",
        interface: IMulticall3::IMulticall3Instance,
        address: MULTICALL3_ADDRESS,
        config: MULTICALL3_CONFIG,
    }
}

deployment! {
    /// USDS -> SKY farm
    UsdsSkyRewards {
        name: "usdsSkyRewards",
        interface: IStakingRewards::IStakingRewardsInstance,
        address: USDS_SKY_REWARDS_ADDRESS,
        config: USDS_SKY_REWARDS_CONFIG,
    }
}

deployment! {
    /// USDS -> Chronicle points farm
    UsdsChroniclePoints {
        name: "usdsChroniclePoints",
        interface: IStakingRewards::IStakingRewardsInstance,
        address: USDS_CHRONICLE_POINTS_ADDRESS,
        config: USDS_CHRONICLE_POINTS_CONFIG,
    }
}

deployment! {
    LockstakeEngine {
        name: "lockstakeEngine",
        interface: ILockstakeEngine::ILockstakeEngineInstance,
        address: LOCKSTAKE_ENGINE_ADDRESS,
        config: LOCKSTAKE_ENGINE_CONFIG,
    }
}

deployment! {
    /// SparkLend pool
    SparkPool { name: "sparkPool", interface: ISparkPool::ISparkPoolInstance, address: SPARK_POOL_ADDRESS, config: SPARK_POOL_CONFIG }
}

deployment! {
    /// sUSDS rate oracle
    SsrAuthOracle {
        name: "ssrAuthOracle",
        interface: ISsrAuthOracle::ISsrAuthOracleInstance,
        address: SSR_AUTH_ORACLE_ADDRESS,
        config: SSR_AUTH_ORACLE_CONFIG,
    }
}

deployment! {
    /// Chainlink ETH/USD
    EthUsdPriceFeed {
        name: "ethUsdPriceFeed",
        interface: IChainlinkAggregator::IChainlinkAggregatorInstance,
        address: ETH_USD_PRICE_FEED_ADDRESS,
        config: ETH_USD_PRICE_FEED_CONFIG,
    }
}

deployment! {
    SparkRewards {
        name: "sparkRewards",
        interface: ISparkRewards::ISparkRewardsInstance,
        address: SPARK_REWARDS_ADDRESS,
        config: SPARK_REWARDS_CONFIG,
    }
}

/// Every config object in the catalogue, grouped as in the address tables
pub const ALL: &[ContractConfig] = &[
    USDC_CONFIG,
    USDT_CONFIG,
    WETH_CONFIG,
    DAI_CONFIG,
    USDS_CONFIG,
    USDS_L2_CONFIG,
    SUSDS_CONFIG,
    SUSDS_L2_CONFIG,
    SDAI_CONFIG,
    SUSDC_CONFIG,
    STUSDS_CONFIG,
    MKR_CONFIG,
    SKY_CONFIG,
    SPK_CONFIG,
    WSTETH_CONFIG,
    DAI_USDS_CONFIG,
    MKR_SKY_CONFIG,
    USDS_PSM_WRAPPER_CONFIG,
    LITE_PSM_USDC_CONFIG,
    PSM3_CONFIG,
    POT_CONFIG,
    VAT_CONFIG,
    JUG_CONFIG,
    DAI_JOIN_CONFIG,
    USDS_JOIN_CONFIG,
    CHAINLOG_CONFIG,
    USDS_SKY_REWARDS_CONFIG,
    USDS_CHRONICLE_POINTS_CONFIG,
    LOCKSTAKE_ENGINE_CONFIG,
    SPARK_REWARDS_CONFIG,
    SPARK_POOL_CONFIG,
    SSR_AUTH_ORACLE_CONFIG,
    ETH_USD_PRICE_FEED_CONFIG,
    PROXY_REGISTRY_CONFIG,
    COW_SETTLEMENT_CONFIG,
    PERMIT2_CONFIG,
    MULTICALL3_CONFIG,
];
