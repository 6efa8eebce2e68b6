//! execTransaction call data checked against the `sol!` generated encoder

use alloy::primitives::{Address, Bytes, U256};
use alloy::sol_types::SolCall;
use safe_hashes::{encode_exec_transaction, ISafe, SafeTxInput};

use crate::common::{transfer_input, REFUND, TOKEN, TRANSFER_DATA};

#[test]
fn test_matches_sol_encoder_with_signatures() {
    let signatures = format!("0x{}1b", "ab".repeat(64));
    let call = encode_exec_transaction(&transfer_input("1.3.0"), Some(&signatures));

    let expected = ISafe::execTransactionCall {
        to: TOKEN,
        value: U256::ZERO,
        data: TRANSFER_DATA.parse().unwrap(),
        operation: 0,
        safeTxGas: U256::from(50_000),
        baseGas: U256::from(21_000),
        gasPrice: U256::from(1_000_000_000u64),
        gasToken: Address::ZERO,
        refundReceiver: REFUND,
        signatures: signatures.parse().unwrap(),
    }
    .abi_encode();

    assert!(call.is_encoded());
    assert_eq!(call.encoded.as_ref(), expected.as_slice());
}

#[test]
fn test_matches_sol_encoder_for_empty_transfer() {
    let input = SafeTxInput::new(TOKEN.to_string(), "1000000000000000000", "0x")
        .with_operation("1")
        .with_nonce("0");
    let call = encode_exec_transaction(&input, None);

    let expected = ISafe::execTransactionCall {
        to: TOKEN,
        value: U256::from(1_000_000_000_000_000_000u64),
        data: Bytes::new(),
        operation: 1,
        safeTxGas: U256::ZERO,
        baseGas: U256::ZERO,
        gasPrice: U256::ZERO,
        gasToken: Address::ZERO,
        refundReceiver: Address::ZERO,
        signatures: Bytes::new(),
    }
    .abi_encode();

    assert_eq!(call.encoded.as_ref(), expected.as_slice());
    assert_eq!(call.encoded.len(), 4 + 10 * 32 + 32 + 32);

    let decoded = ISafe::execTransactionCall::abi_decode(&call.encoded).unwrap();
    assert_eq!(decoded.to, TOKEN);
    assert_eq!(decoded.operation, 1);
}
