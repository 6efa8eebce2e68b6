//! Hashes checked against alloy's own EIP-712 implementation

use alloy::primitives::{keccak256, Address, Bytes, U256};
use alloy::sol_types::{Eip712Domain, SolStruct, SolValue};
use safe_hashes::contracts::{SAFE_TX_TYPEHASH, SAFE_TX_TYPEHASH_LEGACY};
use safe_hashes::{calculate_hashes, calculate_message_hashes};

use crate::common::{transfer_input, SafeMessage, SafeTx, RECIPIENT, REFUND, SAFE, TOKEN, TRANSFER_DATA};

fn transfer_data() -> Bytes {
    TRANSFER_DATA.parse().unwrap()
}

fn safe_tx() -> SafeTx {
    SafeTx {
        to: TOKEN,
        value: U256::ZERO,
        data: transfer_data(),
        operation: 0,
        safeTxGas: U256::from(50_000),
        baseGas: U256::from(21_000),
        gasPrice: U256::from(1_000_000_000u64),
        gasToken: Address::ZERO,
        refundReceiver: REFUND,
        nonce: U256::from(17),
    }
}

fn domain(chain_id: u64) -> Eip712Domain {
    Eip712Domain {
        chain_id: Some(U256::from(chain_id)),
        verifying_contract: Some(SAFE),
        ..Default::default()
    }
}

#[test]
fn test_safe_tx_hash_matches_alloy_eip712() {
    let tx = safe_tx();
    let result = calculate_hashes("1", &SAFE.to_string(), &transfer_input("1.4.1")).unwrap();

    assert_eq!(result.domain_hash, domain(1).hash_struct());
    assert_eq!(result.message_hash, tx.eip712_hash_struct());
    assert_eq!(result.safe_tx_hash, tx.eip712_signing_hash(&domain(1)));
}

#[test]
fn test_chain_id_changes_only_the_domain() {
    let mainnet = calculate_hashes("1", &SAFE.to_string(), &transfer_input("1.3.0")).unwrap();
    let gnosis = calculate_hashes("0x64", &SAFE.to_string(), &transfer_input("1.3.0")).unwrap();

    assert_eq!(gnosis.domain_hash, domain(100).hash_struct());
    assert_eq!(mainnet.message_hash, gnosis.message_hash);
    assert_ne!(mainnet.safe_tx_hash, gnosis.safe_tx_hash);
}

#[test]
fn test_encoded_message_layout() {
    let result = calculate_hashes("1", &SAFE.to_string(), &transfer_input("1.3.0")).unwrap();

    let expected = (
        SAFE_TX_TYPEHASH,
        TOKEN,
        U256::ZERO,
        keccak256(transfer_data()),
        U256::ZERO,
        U256::from(50_000),
        U256::from(21_000),
        U256::from(1_000_000_000u64),
        Address::ZERO,
        REFUND,
        U256::from(17),
    )
        .abi_encode_params();

    assert_eq!(result.encoded_message.as_ref(), expected.as_slice());
    assert_eq!(result.message_hash, keccak256(&expected));
}

#[test]
fn test_legacy_versions() {
    let legacy = calculate_hashes("1", &SAFE.to_string(), &transfer_input("1.2.0")).unwrap();
    let domain_without_chain = Eip712Domain {
        verifying_contract: Some(SAFE),
        ..Default::default()
    };
    assert_eq!(legacy.domain_hash, domain_without_chain.hash_struct());
    assert_eq!(legacy.message_hash, safe_tx().eip712_hash_struct());

    // Pre-1.0.0 Safes hash `dataGas` in place of `baseGas`
    let ancient = calculate_hashes("1", &SAFE.to_string(), &transfer_input("0.1.0")).unwrap();
    assert_eq!(ancient.encoded_message[..32], SAFE_TX_TYPEHASH_LEGACY[..]);
    assert_eq!(ancient.domain_hash, legacy.domain_hash);
    assert_ne!(ancient.message_hash, legacy.message_hash);
}

#[test]
fn test_message_hash_matches_alloy_eip712() {
    let result = calculate_message_hashes("1", &SAFE.to_string(), "Hello Safe", "1.4.1").unwrap();

    let safe_message = SafeMessage {
        message: result.raw_message_hash.to_vec().into(),
    };
    assert_eq!(result.domain_hash, domain(1).hash_struct());
    assert_eq!(result.message_hash, safe_message.eip712_hash_struct());
    assert_eq!(result.safe_message_hash, safe_message.eip712_signing_hash(&domain(1)));
}

#[test]
fn test_invalid_input_never_yields_hashes() {
    let mut input = transfer_input("1.3.0");
    input.refund_receiver = RECIPIENT.to_string()[..20].to_string();
    assert!(calculate_hashes("1", &SAFE.to_string(), &input).is_err());

    assert!(calculate_hashes("mainnet", &SAFE.to_string(), &transfer_input("1.3.0")).is_err());
    assert!(calculate_hashes("1", &SAFE.to_string(), &transfer_input("latest")).is_err());
}
