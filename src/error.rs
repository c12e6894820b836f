// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

use crate::chain::ChainId;

#[derive(Error, Debug)]
pub enum BindingsError {
    #[error("{contract} is not deployed on {chain}")]
    NotDeployed {
        contract: &'static str,
        chain: ChainId,
    },

    #[error("Chain not supported: {0}")]
    UnsupportedChain(u64),

    #[error("{contract} has no function named `{function}`")]
    UnknownFunction {
        contract: &'static str,
        function: String,
    },

    #[error(
        "{contract}.{function} takes {} argument(s), got {actual}",
        join_arities(.expected)
    )]
    ArgumentCount {
        contract: &'static str,
        function: String,
        /// Arity of every overload, ascending
        expected: Vec<usize>,
        actual: usize,
    },

    #[error("{contract} has no event named `{event}`")]
    UnknownEvent {
        contract: &'static str,
        event: String,
    },

    #[error("{contract}.{function} changes state and cannot be read")]
    NotReadable {
        contract: &'static str,
        function: String,
    },

    #[error("{contract}.{function} is {mutability} and cannot be written")]
    NotWritable {
        contract: &'static str,
        function: String,
        mutability: &'static str,
    },

    #[error("{contract}.{function} is not payable")]
    NotPayable {
        contract: &'static str,
        function: String,
    },

    #[error("Chain mismatch: expected {expected}, provider reports chain ID {actual}")]
    ChainMismatch { expected: ChainId, actual: u64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid deployment manifest: {0}")]
    InvalidManifest(String),

    #[error("Contract call failed: {0}")]
    Contract(#[from] alloy_contract::Error),

    #[error("RPC error: {0}")]
    Rpc(#[from] alloy_json_rpc::RpcError<alloy_transport::TransportErrorKind>),

    #[error("ABI encoding/decoding error: {0}")]
    Abi(#[from] alloy_dyn_abi::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, BindingsError>;

fn join_arities(arities: &[usize]) -> String {
    match arities {
        [] => "0".to_string(),
        [only] => only.to_string(),
        [rest @ .., last] => {
            let rest: Vec<String> = rest.iter().map(ToString::to_string).collect();
            format!("{} or {last}", rest.join(", "))
        }
    }
}
