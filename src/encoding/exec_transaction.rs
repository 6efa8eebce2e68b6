//! Reconstruction of the `execTransaction` call a Safe receives
//!
//! Signing devices often show the raw call data rather than the hash, so the
//! encoded call is offered for side-by-side comparison. Unlike the hash
//! calculator this encoder is lenient: on failure it returns empty call data
//! together with the mirrored parameters and the error text.

use alloy::primitives::{Bytes, U256};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::abi::{encode_params, parse_bytes, AbiParam};
use crate::contracts::EXEC_TRANSACTION_SELECTOR;
use crate::error::{Error, Result};
use crate::types::{DecodedCall, DecodedParam, SafeTxInput, SafeTxParams};

/// Method name shown for the reconstructed call
pub const EXEC_TRANSACTION_METHOD: &str = "execTransaction";

/// Result of reconstructing an `execTransaction` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecTransactionCall {
    /// Selector followed by the ABI-encoded arguments, `0x` on failure
    pub encoded: Bytes,
    /// The inputs, mirrored for display
    pub decoded: DecodedCall,
    /// Why encoding failed, if it did
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExecTransactionCall {
    pub fn is_encoded(&self) -> bool {
        self.error.is_none()
    }
}

/// Encodes the call data for typed parameters.
///
/// Layout: selector, ten head words, then the tails of `data` and
/// `signatures`. `data`'s offset is the head size (`0x140`) and
/// `signatures`'s offset follows `data`'s length word and padded contents.
pub fn encode_exec_transaction_call(params: &SafeTxParams, signatures: &Bytes) -> Bytes {
    let args = encode_params(&[
        AbiParam::address(params.to),
        AbiParam::uint(params.value),
        AbiParam::bytes(params.data.clone()),
        AbiParam::uint(U256::from(params.operation.as_u8())),
        AbiParam::uint(params.safe_tx_gas),
        AbiParam::uint(params.base_gas),
        AbiParam::uint(params.gas_price),
        AbiParam::address(params.gas_token),
        AbiParam::address(params.refund_receiver),
        AbiParam::bytes(signatures.clone()),
    ]);

    let mut calldata = Vec::with_capacity(4 + args.len());
    calldata.extend_from_slice(EXEC_TRANSACTION_SELECTOR.as_slice());
    calldata.extend(args);
    Bytes::from(calldata)
}

/// Encodes the call data from textual input, wrapping any failure in
/// [`Error::ExecEncodingFailed`]
pub fn try_encode_exec_transaction(input: &SafeTxInput, signatures: &str) -> Result<Bytes> {
    let parse = || -> Result<(SafeTxParams, Bytes)> {
        Ok((input.to_params()?, parse_bytes(signatures)?))
    };

    let (params, signatures) = parse().map_err(|e| Error::ExecEncodingFailed(Box::new(e)))?;
    Ok(encode_exec_transaction_call(&params, &signatures))
}

/// Reconstructs the `execTransaction` call for a transaction.
///
/// `signatures` defaults to `0x`, which still yields valid call data for
/// previewing an unsigned transaction. Never fails.
pub fn encode_exec_transaction(input: &SafeTxInput, signatures: Option<&str>) -> ExecTransactionCall {
    let signatures = signatures.unwrap_or("0x");
    let decoded = exec_transaction_view(input, signatures);

    match try_encode_exec_transaction(input, signatures) {
        Ok(encoded) => ExecTransactionCall {
            encoded,
            decoded,
            error: None,
        },
        Err(err) => {
            warn!(error = %err, "could not reconstruct execTransaction call data");
            ExecTransactionCall {
                encoded: Bytes::new(),
                decoded,
                error: Some(err.to_string()),
            }
        }
    }
}

/// Mirrors the inputs as a decoded call; never derived from encoded bytes.
fn exec_transaction_view(input: &SafeTxInput, signatures: &str) -> DecodedCall {
    let mut parameters = vec![
        DecodedParam::new("to", "address", &input.to),
        DecodedParam::new("value", "uint256", &input.value),
        DecodedParam::new("data", "bytes", &input.data),
        DecodedParam::new("operation", "uint8", &input.operation),
        DecodedParam::new("safeTxGas", "uint256", &input.safe_tx_gas),
        DecodedParam::new("baseGas", "uint256", &input.base_gas),
        DecodedParam::new("gasPrice", "uint256", &input.gas_price),
        DecodedParam::new("gasToken", "address", &input.gas_token),
        DecodedParam::new("refundReceiver", "address", &input.refund_receiver),
    ];

    let signatures = signatures.trim();
    if !signatures.is_empty() && signatures != "0x" {
        parameters.push(DecodedParam::new("signatures", "bytes", signatures));
    }

    DecodedCall::new(EXEC_TRANSACTION_METHOD)
        .with_selector(EXEC_TRANSACTION_SELECTOR)
        .with_parameters(parameters)
}
