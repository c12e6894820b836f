// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
use alloy_dyn_abi::DynSolValue;
use alloy_primitives::{Address, U256};
use bon::Builder;

/// A state-changing call: function, arguments, sender and optional value
///
/// ```rust
/// use alloy_dyn_abi::DynSolValue;
/// use alloy_primitives::{Address, U256};
/// use sky_bindings::WriteRequest;
///
/// let request = WriteRequest::builder()
///     .function("approve")
///     .args(vec![
///         DynSolValue::Address(Address::ZERO),
///         DynSolValue::Uint(U256::MAX, 256),
///     ])
///     .from(Address::repeat_byte(0x11))
///     .build();
///
/// assert_eq!(request.function(), "approve");
/// assert_eq!(request.value(), None);
/// ```
#[derive(Builder, Debug, Clone, PartialEq)]
pub struct WriteRequest {
    #[builder(into)]
    function: String,
    #[builder(default)]
    args: Vec<DynSolValue>,
    from: Address,
    /// Wei attached to the call; only payable functions accept a non-zero value
    value: Option<U256>,
}

impl WriteRequest {
    pub fn function(&self) -> &str {
        &self.function
    }

    pub fn args(&self) -> &[DynSolValue] {
        &self.args
    }

    pub fn from(&self) -> Address {
        self.from
    }

    pub fn value(&self) -> Option<U256> {
        self.value
    }

    /// True if the request attaches a non-zero value
    pub fn carries_value(&self) -> bool {
        self.value.is_some_and(|value| !value.is_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let request = WriteRequest::builder()
            .function("drip")
            .from(Address::ZERO)
            .build();
        assert!(request.args().is_empty());
        assert!(!request.carries_value());
    }

    #[test]
    fn test_zero_value_is_not_carried() {
        let request = WriteRequest::builder()
            .function("deposit")
            .from(Address::ZERO)
            .value(U256::ZERO)
            .build();
        assert_eq!(request.value(), Some(U256::ZERO));
        assert!(!request.carries_value());

        let request = WriteRequest::builder()
            .function("deposit")
            .from(Address::ZERO)
            .maybe_value(Some(U256::from(1)))
            .build();
        assert!(request.carries_value());
    }
}
