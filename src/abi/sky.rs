// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Sky protocol interfaces: converters, PSMs, core accounting and farms

use alloy_sol_types::sol;

sol!(
    #[allow(missing_docs)]
    #[sol(rpc, abi)]
    interface IDaiUsds {
        event DaiToUsds(address indexed caller, address indexed usr, uint256 wad);
        event UsdsToDai(address indexed caller, address indexed usr, uint256 wad);

        function dai() external view returns (address);
        function usds() external view returns (address);
        function daiJoin() external view returns (address);
        function usdsJoin() external view returns (address);
        function daiToUsds(address usr, uint256 wad) external;
        function usdsToDai(address usr, uint256 wad) external;
    }
);

sol!(
    #[allow(missing_docs)]
    #[sol(rpc, abi)]
    interface IMkrSky {
        event MkrToSky(address indexed caller, address indexed usr, uint256 mkrAmt, uint256 skyAmt);

        function mkr() external view returns (address);
        function sky() external view returns (address);
        function rate() external view returns (uint256);
        function fee() external view returns (uint256);
        function mkrToSky(address usr, uint256 mkrAmt) external;
    }
);

sol!(
    #[allow(missing_docs)]
    #[sol(rpc, abi)]
    interface IUsdsPsmWrapper {
        function psm() external view returns (address);
        function gem() external view returns (address);
        function usds() external view returns (address);
        function pocket() external view returns (address);
        function tin() external view returns (uint256);
        function tout() external view returns (uint256);
        function live() external view returns (uint256);
        function to18ConversionFactor() external view returns (uint256);
        function sellGem(address usr, uint256 gemAmt) external returns (uint256 usdsOutWad);
        function buyGem(address usr, uint256 gemAmt) external returns (uint256 usdsInWad);
    }
);

sol!(
    #[allow(missing_docs)]
    #[sol(rpc, abi)]
    interface ILitePsm {
        event SellGem(address indexed owner, uint256 value, uint256 fee);
        event BuyGem(address indexed owner, uint256 value, uint256 fee);

        function ilk() external view returns (bytes32);
        function gem() external view returns (address);
        function dai() external view returns (address);
        function pocket() external view returns (address);
        function tin() external view returns (uint256);
        function tout() external view returns (uint256);
        function buf() external view returns (uint256);
        function to18ConversionFactor() external view returns (uint256);
        function sellGem(address usr, uint256 gemAmt) external returns (uint256 daiOutWad);
        function buyGem(address usr, uint256 gemAmt) external returns (uint256 daiInWad);
    }
);

sol!(
    #[allow(missing_docs)]
    #[sol(rpc, abi)]
    interface IPot {
        function chi() external view returns (uint256);
        function dsr() external view returns (uint256);
        function rho() external view returns (uint256);
        function pie(address usr) external view returns (uint256);
        function Pie() external view returns (uint256);
        function live() external view returns (uint256);
        function drip() external returns (uint256 tmp);
        function join(uint256 wad) external;
        function exit(uint256 wad) external;
    }
);

sol!(
    #[allow(missing_docs)]
    #[sol(rpc, abi)]
    interface IVat {
        function urns(bytes32 ilk, address urn) external view returns (uint256 ink, uint256 art);
        function ilks(bytes32 ilk)
            external
            view
            returns (uint256 Art, uint256 rate, uint256 spot, uint256 line, uint256 dust);
        function dai(address usr) external view returns (uint256);
        function gem(bytes32 ilk, address usr) external view returns (uint256);
        function can(address bit, address usr) external view returns (uint256);
        function debt() external view returns (uint256);
        function Line() external view returns (uint256);
        function live() external view returns (uint256);
        function hope(address usr) external;
        function nope(address usr) external;
    }
);

sol!(
    #[allow(missing_docs)]
    #[sol(rpc, abi)]
    interface IJug {
        function ilks(bytes32 ilk) external view returns (uint256 duty, uint256 rho);
        function base() external view returns (uint256);
        function vat() external view returns (address);
        function drip(bytes32 ilk) external returns (uint256 rate);
    }
);

// Shared by DaiJoin and UsdsJoin.
sol!(
    #[allow(missing_docs)]
    #[sol(rpc, abi)]
    interface IJoin {
        event Join(address indexed caller, address indexed usr, uint256 wad);
        event Exit(address indexed caller, address indexed usr, uint256 wad);

        function vat() external view returns (address);
        function live() external view returns (uint256);
        function join(address usr, uint256 wad) external;
        function exit(address usr, uint256 wad) external;
    }
);

sol!(
    #[allow(missing_docs)]
    #[sol(rpc, abi)]
    interface IChainlog {
        function getAddress(bytes32 key) external view returns (address);
        function get(uint256 index) external view returns (bytes32 key, address addr);
        function count() external view returns (uint256);
        function list() external view returns (bytes32[] memory);
        function version() external view returns (string memory);
        function ipfs() external view returns (string memory);
    }
);

// Synthetix-style farm used by the USDS reward modules.
sol!(
    #[allow(missing_docs)]
    #[sol(rpc, abi)]
    interface IStakingRewards {
        event Staked(address indexed user, uint256 amount);
        event Withdrawn(address indexed user, uint256 amount);
        event RewardPaid(address indexed user, uint256 reward);
        event RewardAdded(uint256 reward);
        event Referral(uint16 indexed referral, address indexed user, uint256 amount);

        function stakingToken() external view returns (address);
        function rewardsToken() external view returns (address);
        function totalSupply() external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);
        function earned(address account) external view returns (uint256);
        function rewardRate() external view returns (uint256);
        function rewardPerToken() external view returns (uint256);
        function rewardsDuration() external view returns (uint256);
        function periodFinish() external view returns (uint256);
        function lastTimeRewardApplicable() external view returns (uint256);
        function getRewardForDuration() external view returns (uint256);
        function paused() external view returns (bool);
        function stake(uint256 amount) external;
        function stake(uint256 amount, uint16 referral) external;
        function withdraw(uint256 amount) external;
        function getReward() external;
        function exit() external;
    }
);

sol!(
    #[allow(missing_docs)]
    #[sol(rpc, abi)]
    interface ILockstakeEngine {
        event Open(address indexed owner, uint256 indexed index, address urn);
        event Hope(address indexed owner, uint256 indexed index, address indexed usr);
        event Nope(address indexed owner, uint256 indexed index, address indexed usr);
        event SelectVoteDelegate(address indexed owner, uint256 indexed index, address indexed voteDelegate);
        event SelectFarm(address indexed owner, uint256 indexed index, address indexed farm, uint16 ref);
        event Lock(address indexed owner, uint256 indexed index, uint256 wad, uint16 ref);
        event Free(address indexed owner, uint256 indexed index, address to, uint256 wad, uint256 freed);
        event Draw(address indexed owner, uint256 indexed index, address to, uint256 wad);
        event Wipe(address indexed owner, uint256 indexed index, uint256 wad);
        event GetReward(address indexed owner, uint256 indexed index, address indexed farm, address to, uint256 amt);

        function fee() external view returns (uint256);
        function ilk() external view returns (bytes32);
        function ownerUrnsCount(address owner) external view returns (uint256);
        function ownerUrns(address owner, uint256 index) external view returns (address);
        function urnOwners(address urn) external view returns (address);
        function urnFarms(address urn) external view returns (address);
        function urnVoteDelegates(address urn) external view returns (address);
        function isUrnAuth(address owner, uint256 index, address usr) external view returns (bool);
        function open(uint256 index) external returns (address urn);
        function hope(address owner, uint256 index, address usr) external;
        function nope(address owner, uint256 index, address usr) external;
        function selectVoteDelegate(address owner, uint256 index, address voteDelegate) external;
        function selectFarm(address owner, uint256 index, address farm, uint16 ref) external;
        function lock(address owner, uint256 index, uint256 wad, uint16 ref) external;
        function free(address owner, uint256 index, address to, uint256 wad) external returns (uint256 freed);
        function draw(address owner, uint256 index, address to, uint256 wad) external;
        function wipe(address owner, uint256 index, uint256 wad) external;
        function wipeAll(address owner, uint256 index) external returns (uint256 wad);
        function getReward(address owner, uint256 index, address farm, address to) external returns (uint256 amt);
        function multicall(bytes[] calldata data) external returns (bytes[] memory results);
    }
);
