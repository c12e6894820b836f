// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Contract addresses for every catalogued deployment
//!
//! Every literal is written in its EIP-55 checksum casing; the integrity
//! checks reject any other spelling.
//!
//! The virtual testnet (chain 314310) is a mainnet fork, so contracts it
//! carries sit at their mainnet addresses.

// Tokens

address_book! {
    /// USDC (Circle)
    USDC_ADDRESS {
        Mainnet => "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
        Optimism => "0x0b2C639c533813f4Aa9D7837CAf62653d097Ff85",
        Unichain => "0x078D782b760474a361dDA0AF3839290b0EF57AD6",
        Base => "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913",
        Arbitrum => "0xaf88d065e77c8cC2239327C5EDb3A432268e5831",
        VirtualTestnet => "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
    }
}

address_book! {
    /// USDT (Tether)
    USDT_ADDRESS {
        Mainnet => "0xdAC17F958D2ee523a2206206994597C13D831ec7",
        Optimism => "0x94b008aA00579c1307B0EF2c499aD98a8ce58e58",
        Arbitrum => "0xFd086bC7CD5C481DCC9C85ebE478A1C0b69FCbb9",
        VirtualTestnet => "0xdAC17F958D2ee523a2206206994597C13D831ec7",
    }
}

address_book! {
    /// Wrapped Ether
    ///
    /// OP Stack chains share the `0x4200…0006` predeploy.
    WETH_ADDRESS {
        Mainnet => "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2",
        Optimism => "0x4200000000000000000000000000000000000006",
        Unichain => "0x4200000000000000000000000000000000000006",
        Base => "0x4200000000000000000000000000000000000006",
        Arbitrum => "0x82aF49447D8a07e3bd95BD0d56f35241523fBab1",
        VirtualTestnet => "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2",
    }
}

address_book! {
    /// DAI stablecoin
    DAI_ADDRESS {
        Mainnet => "0x6B175474E89094C44Da98b954EedeAC495271d0F",
        VirtualTestnet => "0x6B175474E89094C44Da98b954EedeAC495271d0F",
    }
}

address_book! {
    /// USDS stablecoin on mainnet
    USDS_ADDRESS {
        Mainnet => "0xdC035D45d973E3EC169d2276DDab16f1e407384F",
        VirtualTestnet => "0xdC035D45d973E3EC169d2276DDab16f1e407384F",
    }
}

address_book! {
    /// Bridged USDS on L2s
    USDS_L2_ADDRESS {
        Optimism => "0x4F13a96EC5C4Cf34e442b46Bbd98a0791F20edC3",
        Unichain => "0x7E10036Acc4B56d4dFCa3b77810356CE52313F9C",
        Base => "0x820C137fa70C8691f0e44Dc420a5e53c168921Dc",
        Arbitrum => "0x6491c05A82219b8D1479057361ff1654749b876b",
    }
}

address_book! {
    /// Savings USDS vault on mainnet
    SUSDS_ADDRESS {
        Mainnet => "0xa3931d71877C0E7a3148CB7Eb4463524FEc27fbD",
        VirtualTestnet => "0xa3931d71877C0E7a3148CB7Eb4463524FEc27fbD",
    }
}

address_book! {
    /// Bridged sUSDS on L2s
    SUSDS_L2_ADDRESS {
        Optimism => "0xb5B2dc7fd34C249F4be7fB1fCea07950784229e0",
        Unichain => "0xA06b10Db9F390990364A3984C04FaDf1c13691b5",
        Base => "0x5875eEE11Cf8398102FdAd704C9E96607675467a",
        Arbitrum => "0xdDb46999F8891663a8F2828d25298f70416d7610",
    }
}

address_book! {
    /// Savings DAI vault
    SDAI_ADDRESS {
        Mainnet => "0x83F20F44975D03b1b09e64809B757c47f942BEeA",
        VirtualTestnet => "0x83F20F44975D03b1b09e64809B757c47f942BEeA",
    }
}

address_book! {
    /// Spark savings USDC vault
    SUSDC_ADDRESS {
        Mainnet => "0xBc65ad17c5C0a2A4D159fa5a503f4992c7B545FE",
    }
}

address_book! {
    /// Staked USDS vault
    STUSDS_ADDRESS {
        Mainnet => "0x99CD4Ec3f88A45940936F469E4bB72A2A701EEB9",
    }
}

address_book! {
    /// MKR governance token
    MKR_ADDRESS {
        Mainnet => "0x9f8F72aA9304c8B593d555F12eF6589cC3A579A2",
        VirtualTestnet => "0x9f8F72aA9304c8B593d555F12eF6589cC3A579A2",
    }
}

address_book! {
    /// SKY governance token
    SKY_ADDRESS {
        Mainnet => "0x56072C95FAA701256059aa122697B133aDEd9279",
        VirtualTestnet => "0x56072C95FAA701256059aa122697B133aDEd9279",
    }
}

address_book! {
    /// SPK governance token
    SPK_ADDRESS {
        Mainnet => "0xc20059e0317DE91738d13af027DfC4a50781b066",
    }
}

address_book! {
    /// Lido wrapped staked Ether
    WSTETH_ADDRESS {
        Mainnet => "0x7f39C581F595B53c5cb19bD0b3f8dA6c935E2Ca0",
    }
}

// Converters and PSMs

address_book! {
    /// DAI <-> USDS 1:1 converter
    DAI_USDS_ADDRESS {
        Mainnet => "0x3225737a9Bbb6473CB4a45b7244ACa2BeFdB276A",
        VirtualTestnet => "0x3225737a9Bbb6473CB4a45b7244ACa2BeFdB276A",
    }
}

address_book! {
    /// MKR -> SKY converter
    MKR_SKY_ADDRESS {
        Mainnet => "0xBDcFCA946b6CDd965f99a839e4435Bcdc1bc470B",
        VirtualTestnet => "0xBDcFCA946b6CDd965f99a839e4435Bcdc1bc470B",
    }
}

address_book! {
    /// USDS front-end for the USDC Lite PSM
    USDS_PSM_WRAPPER_ADDRESS {
        Mainnet => "0xA188EEC8F81263234dA3622A406892F3D630f98c",
        VirtualTestnet => "0xA188EEC8F81263234dA3622A406892F3D630f98c",
    }
}

address_book! {
    /// DAI/USDC Lite PSM
    LITE_PSM_USDC_ADDRESS {
        Mainnet => "0xf6e72Db5454dd049d0788e411b06CfAF16853042",
        VirtualTestnet => "0xf6e72Db5454dd049d0788e411b06CfAF16853042",
    }
}

address_book! {
    /// Spark PSM3 (USDC/USDS/sUSDS) on L2s
    PSM3_ADDRESS {
        Optimism => "0xe0F9978b907853F354d79188A3dEfbD41978af62",
        Unichain => "0x7b42Ed932f26509465F7cE3FAF76FfCe1275312f",
        Base => "0x1601843c5E9bC251A3272907010AFa41Fa18347E",
        Arbitrum => "0x2B05F8e1cACC6974fD79A673a341Fe1f58d27266",
    }
}

// Core accounting

address_book! {
    /// DSR pot
    POT_ADDRESS {
        Mainnet => "0x197E90f9FAD81970bA7976f33CbD77088E5D7cf7",
    }
}

address_book! {
    /// Core vault engine
    VAT_ADDRESS {
        Mainnet => "0x35D1b3F3D7966A1DFe207aa4514C12a259A0492B",
    }
}

address_book! {
    /// Stability fee accumulator
    JUG_ADDRESS {
        Mainnet => "0x19c0976f590D67707E62397C87829d896Dc0f1F1",
    }
}

address_book! {
    /// DAI join adapter
    DAI_JOIN_ADDRESS {
        Mainnet => "0x9759A6Ac90977b93B58547b4A71c78317f391A28",
    }
}

address_book! {
    /// USDS join adapter
    USDS_JOIN_ADDRESS {
        Mainnet => "0x3C0f895007CA717Aa01c8693e59DF1e8C3777FEB",
    }
}

address_book! {
    /// On-chain address registry of the Sky protocol
    CHAINLOG_ADDRESS {
        Mainnet => "0xdA0Ab1e0017DEbCd72Be8599041a2aa3bA7e740F",
    }
}

// Staking and rewards

address_book! {
    /// USDS farm paying SKY
    USDS_SKY_REWARDS_ADDRESS {
        Mainnet => "0x0650CAF159C5A49f711e8169D4336ECB9b950275",
        VirtualTestnet => "0x0650CAF159C5A49f711e8169D4336ECB9b950275",
    }
}

address_book! {
    /// USDS farm accruing Chronicle points
    USDS_CHRONICLE_POINTS_ADDRESS {
        Mainnet => "0x10ab606B067C9C461d8893c47C7512472E19e2Ce",
    }
}

address_book! {
    /// SKY staking engine
    LOCKSTAKE_ENGINE_ADDRESS {
        Mainnet => "0xCe01C90dE7FD1bcFa39e237FE6D8D9F569e8A6a3",
    }
}

address_book! {
    /// Spark merkle rewards distributor
    SPARK_REWARDS_ADDRESS {
        Mainnet => "0xbaf21A27622Db71041Bd336a573DDEdC8eB65122",
    }
}

// Lending and oracles

address_book! {
    /// SparkLend pool
    SPARK_POOL_ADDRESS {
        Mainnet => "0xC13e21B648A5Ee794902342038FF3aDAB66BE987",
    }
}

address_book! {
    /// sUSDS conversion-rate oracle fed from mainnet
    SSR_AUTH_ORACLE_ADDRESS {
        Base => "0x65d946e533748A998B1f0E430803e39A6388f7a1",
    }
}

address_book! {
    /// Chainlink ETH/USD aggregator
    ETH_USD_PRICE_FEED_ADDRESS {
        Mainnet => "0x5f4eC3Df9cbd43714FE2740f5E3616155c5b8419",
    }
}

// Settlement and infrastructure

address_book! {
    /// DSProxy factory registry
    PROXY_REGISTRY_ADDRESS {
        Mainnet => "0x4678f0a6958e4D2Bc4F1BAF7Bc52E8F3564f3fE4",
    }
}

address_book! {
    /// CoW Protocol GPv2 settlement
    COW_SETTLEMENT_ADDRESS {
        Mainnet => "0x9008D19f58AAbD9eD0D60971565AA8510560ab41",
        Base => "0x9008D19f58AAbD9eD0D60971565AA8510560ab41",
        Arbitrum => "0x9008D19f58AAbD9eD0D60971565AA8510560ab41",
        VirtualTestnet => "0x9008D19f58AAbD9eD0D60971565AA8510560ab41",
    }
}

address_book! {
    /// Uniswap Permit2
    PERMIT2_ADDRESS {
        Mainnet => "0x000000000022D473030F116dDEE9F6B43aC78BA3",
        Optimism => "0x000000000022D473030F116dDEE9F6B43aC78BA3",
        Unichain => "0x000000000022D473030F116dDEE9F6B43aC78BA3",
        Base => "0x000000000022D473030F116dDEE9F6B43aC78BA3",
        Arbitrum => "0x000000000022D473030F116dDEE9F6B43aC78BA3",
    }
}

address_book! {
    /// Multicall3
    MULTICALL3_ADDRESS {
        Mainnet => "0xcA11bde05977b3631167028862bE2a173976CA11",
        Optimism => "0xcA11bde05977b3631167028862bE2a173976CA11",
        Unichain => "0xcA11bde05977b3631167028862bE2a173976CA11",
        Base => "0xcA11bde05977b3631167028862bE2a173976CA11",
        Arbitrum => "0xcA11bde05977b3631167028862bE2a173976CA11",
        VirtualTestnet => "0xcA11bde05977b3631167028862bE2a173976CA11",
    }
}
