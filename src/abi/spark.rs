// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Spark interfaces: the L2 PSM, lending pool, savings-rate oracle and rewards

use alloy_sol_types::sol;

sol!(
    #[allow(missing_docs)]
    #[sol(rpc, abi)]
    interface IPsm3 {
        event Swap(
            address indexed assetIn,
            address indexed assetOut,
            address sender,
            address indexed receiver,
            uint256 amountIn,
            uint256 amountOut,
            uint256 referralCode
        );
        event Deposit(
            address indexed asset,
            address indexed user,
            address indexed receiver,
            uint256 assetsDeposited,
            uint256 sharesMinted
        );
        event Withdraw(
            address indexed asset,
            address indexed user,
            address indexed receiver,
            uint256 assetsWithdrawn,
            uint256 sharesBurned
        );

        function usdc() external view returns (address);
        function usds() external view returns (address);
        function susds() external view returns (address);
        function pocket() external view returns (address);
        function rateProvider() external view returns (address);
        function totalShares() external view returns (uint256);
        function shares(address user) external view returns (uint256);
        function totalAssets() external view returns (uint256);
        function convertToAssets(address asset, uint256 numShares) external view returns (uint256);
        function convertToAssetValue(uint256 numShares) external view returns (uint256);
        function convertToShares(uint256 assetValue) external view returns (uint256);
        function convertToShares(address asset, uint256 assets) external view returns (uint256);
        function previewDeposit(address asset, uint256 assets) external view returns (uint256);
        function previewWithdraw(address asset, uint256 maxAssetsToWithdraw)
            external
            view
            returns (uint256 sharesToBurn, uint256 assetsWithdrawn);
        function previewSwapExactIn(address assetIn, address assetOut, uint256 amountIn)
            external
            view
            returns (uint256 amountOut);
        function previewSwapExactOut(address assetIn, address assetOut, uint256 amountOut)
            external
            view
            returns (uint256 amountIn);
        function swapExactIn(
            address assetIn,
            address assetOut,
            uint256 amountIn,
            uint256 minAmountOut,
            address receiver,
            uint256 referralCode
        ) external returns (uint256 amountOut);
        function swapExactOut(
            address assetIn,
            address assetOut,
            uint256 amountOut,
            uint256 maxAmountIn,
            address receiver,
            uint256 referralCode
        ) external returns (uint256 amountIn);
        function deposit(address asset, address receiver, uint256 assetsToDeposit)
            external
            returns (uint256 newShares);
        function withdraw(address asset, address receiver, uint256 maxAssetsToWithdraw)
            external
            returns (uint256 assetsWithdrawn);
    }
);

sol!(
    #[allow(missing_docs)]
    #[sol(rpc, abi)]
    interface ISparkPool {
        event Supply(
            address indexed reserve,
            address user,
            address indexed onBehalfOf,
            uint256 amount,
            uint16 indexed referralCode
        );
        event Withdraw(address indexed reserve, address indexed user, address indexed to, uint256 amount);
        event Borrow(
            address indexed reserve,
            address user,
            address indexed onBehalfOf,
            uint256 amount,
            uint8 interestRateMode,
            uint256 borrowRate,
            uint16 indexed referralCode
        );
        event Repay(
            address indexed reserve,
            address indexed user,
            address indexed repayer,
            uint256 amount,
            bool useATokens
        );

        function getReservesList() external view returns (address[] memory);
        function getUserAccountData(address user)
            external
            view
            returns (
                uint256 totalCollateralBase,
                uint256 totalDebtBase,
                uint256 availableBorrowsBase,
                uint256 currentLiquidationThreshold,
                uint256 ltv,
                uint256 healthFactor
            );
        function supply(address asset, uint256 amount, address onBehalfOf, uint16 referralCode) external;
        function withdraw(address asset, uint256 amount, address to) external returns (uint256);
        function borrow(
            address asset,
            uint256 amount,
            uint256 interestRateMode,
            uint16 referralCode,
            address onBehalfOf
        ) external;
        function repay(address asset, uint256 amount, uint256 interestRateMode, address onBehalfOf)
            external
            returns (uint256);
        function setUserUseReserveAsCollateral(address asset, bool useAsCollateral) external;
    }
);

sol!(
    #[allow(missing_docs)]
    #[sol(rpc, abi)]
    interface ISsrAuthOracle {
        struct SUSDSData {
            uint96 ssr;
            uint120 chi;
            uint40 rho;
        }

        event SetSUSDSData(SUSDSData nextData);

        function getSUSDSData() external view returns (SUSDSData memory);
        function getSSR() external view returns (uint256);
        function getChi() external view returns (uint256);
        function getRho() external view returns (uint256);
        function getAPR() external view returns (uint256);
        function getConversionRate() external view returns (uint256);
        function getConversionRate(uint256 timestamp) external view returns (uint256);
        function getConversionRateBinomialApprox() external view returns (uint256);
        function getConversionRateLinearApprox() external view returns (uint256);
        function maxSSR() external view returns (uint256);
    }
);

sol!(
    #[allow(missing_docs)]
    #[sol(rpc, abi)]
    interface ISparkRewards {
        event Claimed(uint256 indexed epoch, address indexed account, address indexed token, uint256 amount);

        function wallet() external view returns (address);
        function merkleRoot() external view returns (bytes32);
        function epochClosed(uint256 epoch) external view returns (bool);
        function cumulativeClaimed(address account, address token, uint256 epoch)
            external
            view
            returns (uint256);
        function claim(
            uint256 epoch,
            address account,
            address token,
            uint256 cumulativeAmount,
            bytes32 expectedMerkleRoot,
            bytes32[] calldata merkleProof
        ) external returns (uint256 claimedAmount);
    }
);
