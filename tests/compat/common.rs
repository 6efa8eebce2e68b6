//! Shared fixtures for the compatibility tests

use alloy::primitives::{address, Address};
use alloy::sol;
use safe_hashes::SafeTxInput;

pub const SAFE: Address = address!("0x5aFE3855358E112B5647B952709E6165e1c1eEEe");
pub const TOKEN: Address = address!("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
pub const RECIPIENT: Address = address!("0x1234567890123456789012345678901234567890");
pub const REFUND: Address = address!("0x2222222222222222222222222222222222222222");

/// `transfer(RECIPIENT, 1_000_000)`
pub const TRANSFER_DATA: &str = "0xa9059cbb000000000000000000000000123456789012345678901234567890123456789000000000000000000000000000000000000000000000000000000000000f4240";

sol! {
    struct SafeTx {
        address to;
        uint256 value;
        bytes data;
        uint8 operation;
        uint256 safeTxGas;
        uint256 baseGas;
        uint256 gasPrice;
        address gasToken;
        address refundReceiver;
        uint256 nonce;
    }

    struct SafeMessage {
        bytes message;
    }
}

/// A token transfer with every gas field set
pub fn transfer_input(version: &str) -> SafeTxInput {
    SafeTxInput {
        to: TOKEN.to_string(),
        value: "0".to_string(),
        data: TRANSFER_DATA.to_string(),
        operation: "0".to_string(),
        safe_tx_gas: "50000".to_string(),
        base_gas: "21000".to_string(),
        gas_price: "0x3b9aca00".to_string(),
        gas_token: Address::ZERO.to_string(),
        refund_receiver: REFUND.to_string(),
        nonce: "17".to_string(),
        version: version.to_string(),
    }
}
