// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Shared infrastructure: proxy registry, order settlement, Permit2,
//! Multicall3 and price feeds

use alloy_sol_types::sol;

sol!(
    #[allow(missing_docs)]
    #[sol(rpc, abi)]
    interface IProxyRegistry {
        event Created(address indexed sender, address indexed owner, address proxy, address cache);

        function proxies(address owner) external view returns (address);
        function build() external returns (address proxy);
        function build(address owner) external returns (address proxy);
    }
);

sol!(
    #[allow(missing_docs)]
    #[sol(rpc, abi)]
    interface IGPv2Settlement {
        event Trade(
            address indexed owner,
            address sellToken,
            address buyToken,
            uint256 sellAmount,
            uint256 buyAmount,
            uint256 feeAmount,
            bytes orderUid
        );
        event Settlement(address indexed solver);
        event PreSignature(address indexed owner, bytes orderUid, bool signed);
        event OrderInvalidated(address indexed owner, bytes orderUid);

        function domainSeparator() external view returns (bytes32);
        function vaultRelayer() external view returns (address);
        function authenticator() external view returns (address);
        function filledAmount(bytes calldata orderUid) external view returns (uint256);
        function preSignature(bytes calldata orderUid) external view returns (uint256);
        function setPreSignature(bytes calldata orderUid, bool signed) external;
        function invalidateOrder(bytes calldata orderUid) external;
    }
);

sol!(
    #[allow(missing_docs)]
    #[sol(rpc, abi)]
    interface IPermit2 {
        event Approval(
            address indexed owner,
            address indexed token,
            address indexed spender,
            uint160 amount,
            uint48 expiration
        );
        event Lockdown(address indexed owner, address token, address spender);
        event NonceInvalidation(
            address indexed owner,
            address indexed token,
            address indexed spender,
            uint48 newNonce,
            uint48 oldNonce
        );

        error AllowanceExpired(uint256 deadline);
        error ExcessiveInvalidation();
        error InsufficientAllowance(uint256 amount);
        error InvalidAmount(uint256 maxAmount);
        error InvalidContractSignature();
        error InvalidNonce();
        error InvalidSignature();
        error InvalidSignatureLength();
        error InvalidSigner();
        error LengthMismatch();
        error SignatureExpired(uint256 signatureDeadline);

        function DOMAIN_SEPARATOR() external view returns (bytes32);
        function allowance(address user, address token, address spender)
            external
            view
            returns (uint160 amount, uint48 expiration, uint48 nonce);
        function nonceBitmap(address owner, uint256 wordPos) external view returns (uint256);
        function approve(address token, address spender, uint160 amount, uint48 expiration) external;
        function invalidateNonces(address token, address spender, uint48 newNonce) external;
        function invalidateUnorderedNonces(uint256 wordPos, uint256 mask) external;
    }
);

sol!(
    #[allow(missing_docs)]
    #[sol(rpc, abi)]
    interface IMulticall3 {
        struct Call3 {
            address target;
            bool allowFailure;
            bytes callData;
        }

        struct Call3Result {
            bool success;
            bytes returnData;
        }

        function aggregate3(Call3[] calldata calls) external payable returns (Call3Result[] memory returnData);
        function getBlockNumber() external view returns (uint256 blockNumber);
        function getCurrentBlockTimestamp() external view returns (uint256 timestamp);
        function getChainId() external view returns (uint256 chainid);
        function getEthBalance(address addr) external view returns (uint256 balance);
    }
);

sol!(
    #[allow(missing_docs)]
    #[sol(rpc, abi)]
    interface IChainlinkAggregator {
        event AnswerUpdated(int256 indexed current, uint256 indexed roundId, uint256 updatedAt);

        function decimals() external view returns (uint8);
        function description() external view returns (string memory);
        function version() external view returns (uint256);
        function latestAnswer() external view returns (int256);
        function latestRoundData()
            external
            view
            returns (
                uint80 roundId,
                int256 answer,
                uint256 startedAt,
                uint256 updatedAt,
                uint80 answeredInRound
            );
        function getRoundData(uint80 _roundId)
            external
            view
            returns (
                uint80 roundId,
                int256 answer,
                uint256 startedAt,
                uint256 updatedAt,
                uint80 answeredInRound
            );
    }
);
