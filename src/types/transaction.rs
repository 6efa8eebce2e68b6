//! Safe transaction parameters, textual and typed

use alloy::primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

use super::Operation;
use crate::encoding::abi::{parse_address, parse_bytes, parse_uint};
use crate::error::Result;
use crate::version::{SafeVersion, DEFAULT_SAFE_VERSION};

const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Safe transaction fields exactly as a user typed them or a service returned them.
///
/// Numbers may be decimal or `0x` hex. Nothing is validated until
/// [`SafeTxInput::to_params`] is called.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SafeTxInput {
    pub to: String,
    pub value: String,
    pub data: String,
    pub operation: String,
    pub safe_tx_gas: String,
    pub base_gas: String,
    pub gas_price: String,
    pub gas_token: String,
    pub refund_receiver: String,
    pub nonce: String,
    pub version: String,
}

impl Default for SafeTxInput {
    fn default() -> Self {
        Self {
            to: ZERO_ADDRESS.to_string(),
            value: "0".to_string(),
            data: "0x".to_string(),
            operation: "0".to_string(),
            safe_tx_gas: "0".to_string(),
            base_gas: "0".to_string(),
            gas_price: "0".to_string(),
            gas_token: ZERO_ADDRESS.to_string(),
            refund_receiver: ZERO_ADDRESS.to_string(),
            nonce: "0".to_string(),
            version: DEFAULT_SAFE_VERSION.to_string(),
        }
    }
}

impl SafeTxInput {
    /// Creates an input with the given call and zeroed gas/refund fields
    pub fn new(to: impl Into<String>, value: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            value: value.into(),
            data: data.into(),
            ..Self::default()
        }
    }

    /// Sets the operation
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = operation.into();
        self
    }

    /// Sets the nonce
    pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = nonce.into();
        self
    }

    /// Sets the Safe contract version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Validates every field, failing on the first malformed one
    pub fn to_params(&self) -> Result<SafeTxParams> {
        Ok(SafeTxParams {
            to: parse_address(&self.to)?,
            value: parse_uint(&self.value)?,
            data: parse_bytes(&self.data)?,
            operation: self.operation.parse()?,
            safe_tx_gas: parse_uint(&self.safe_tx_gas)?,
            base_gas: parse_uint(&self.base_gas)?,
            gas_price: parse_uint(&self.gas_price)?,
            gas_token: parse_address(&self.gas_token)?,
            refund_receiver: parse_address(&self.refund_receiver)?,
            nonce: parse_uint(&self.nonce)?,
        })
    }

    /// Parses the version field
    pub fn safe_version(&self) -> Result<SafeVersion> {
        self.version.parse()
    }
}

/// Safe transaction parameters for hashing and encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeTxParams {
    /// Target address
    pub to: Address,
    /// Value to send
    pub value: U256,
    /// Calldata
    pub data: Bytes,
    /// Operation type
    pub operation: Operation,
    /// Gas limit for the Safe transaction
    pub safe_tx_gas: U256,
    /// Base gas (overhead)
    pub base_gas: U256,
    /// Gas price for refund calculation
    pub gas_price: U256,
    /// Token used for gas refund (address(0) for ETH)
    pub gas_token: Address,
    /// Address to receive gas refund
    pub refund_receiver: Address,
    /// Safe nonce
    pub nonce: U256,
}

impl SafeTxParams {
    /// Creates new SafeTxParams with minimal parameters
    pub fn new(to: Address, value: U256, data: impl Into<Bytes>, operation: Operation) -> Self {
        Self {
            to,
            value,
            data: data.into(),
            operation,
            safe_tx_gas: U256::ZERO,
            base_gas: U256::ZERO,
            gas_price: U256::ZERO,
            gas_token: Address::ZERO,
            refund_receiver: Address::ZERO,
            nonce: U256::ZERO,
        }
    }

    /// Sets the safe transaction gas
    pub fn with_safe_tx_gas(mut self, gas: U256) -> Self {
        self.safe_tx_gas = gas;
        self
    }

    /// Sets the nonce
    pub fn with_nonce(mut self, nonce: U256) -> Self {
        self.nonce = nonce;
        self
    }
}
