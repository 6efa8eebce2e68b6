//! EIP-712 hashing for Safe transactions and messages
//!
//! The final hash is `keccak256(0x19 || 0x01 || domainHash || messageHash)`.
//! Which type hashes go into the domain and message depends on the Safe
//! version, see [`TypeHashSet::for_version`].
//!
//! Hashing is strict: any malformed input aborts the whole computation, so a
//! caller is never shown a hash that does not belong to its real input.

use alloy::primitives::{eip191_hash_message, keccak256, Address, Bytes, B256, U256};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::abi::{encode_params, parse_address, parse_uint, AbiParam};
use crate::contracts::{
    DOMAIN_SEPARATOR_TYPEHASH, DOMAIN_SEPARATOR_TYPEHASH_LEGACY, SAFE_MSG_TYPEHASH,
    SAFE_TX_TYPEHASH, SAFE_TX_TYPEHASH_LEGACY,
};
use crate::error::Result;
use crate::types::{SafeTxInput, SafeTxParams};
use crate::version::SafeVersion;

/// The pair of type hashes a given Safe version hashes with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeHashSet {
    pub domain_separator_typehash: B256,
    pub safe_tx_typehash: B256,
}

impl TypeHashSet {
    /// Type hashes of every Safe since 1.3.0
    pub const CURRENT: Self = Self {
        domain_separator_typehash: DOMAIN_SEPARATOR_TYPEHASH,
        safe_tx_typehash: SAFE_TX_TYPEHASH,
    };

    /// `<= 1.2.0` uses the address-only domain, `< 1.0.0` additionally the `dataGas` SafeTx type
    pub fn for_version(version: &SafeVersion) -> Self {
        let domain_separator_typehash = if version.uses_legacy_domain() {
            DOMAIN_SEPARATOR_TYPEHASH_LEGACY
        } else {
            DOMAIN_SEPARATOR_TYPEHASH
        };
        let safe_tx_typehash = if version.uses_legacy_safe_tx() {
            SAFE_TX_TYPEHASH_LEGACY
        } else {
            SAFE_TX_TYPEHASH
        };

        Self {
            domain_separator_typehash,
            safe_tx_typehash,
        }
    }
}

/// Hashes of a single Safe transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashResult {
    /// EIP-712 domain separator of the Safe
    pub domain_hash: B256,
    /// Struct hash of the SafeTx
    pub message_hash: B256,
    /// Final hash the owners sign
    pub safe_tx_hash: B256,
    /// ABI-encoded SafeTx tuple that `message_hash` is the keccak of
    pub encoded_message: Bytes,
}

/// Hashes of an off-chain message signed through the Safe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageHashResult {
    /// EIP-191 personal message hash of the raw message
    pub raw_message_hash: B256,
    pub domain_hash: B256,
    /// Struct hash of the SafeMessage
    pub message_hash: B256,
    /// Final hash the owners sign
    pub safe_message_hash: B256,
}

/// Computes the domain separator for a Safe
///
/// legacy:  keccak256(abi.encode(DOMAIN_SEPARATOR_TYPEHASH_LEGACY, safeAddress))
/// current: keccak256(abi.encode(DOMAIN_SEPARATOR_TYPEHASH, chainId, safeAddress))
pub fn compute_domain_hash(version: &SafeVersion, chain_id: U256, safe_address: Address) -> B256 {
    let type_hashes = TypeHashSet::for_version(version);

    let encoded = if version.uses_legacy_domain() {
        encode_params(&[
            AbiParam::fixed_bytes(type_hashes.domain_separator_typehash),
            AbiParam::address(safe_address),
        ])
    } else {
        encode_params(&[
            AbiParam::fixed_bytes(type_hashes.domain_separator_typehash),
            AbiParam::uint(chain_id),
            AbiParam::address(safe_address),
        ])
    };

    keccak256(encoded)
}

/// ABI-encodes the SafeTx struct
///
/// abi.encode(
///     SAFE_TX_TYPEHASH,
///     to, value, keccak256(data), operation,
///     safeTxGas, baseGas, gasPrice, gasToken, refundReceiver, nonce
/// )
pub fn encode_safe_tx(params: &SafeTxParams, safe_tx_typehash: B256) -> Bytes {
    encode_params(&[
        AbiParam::fixed_bytes(safe_tx_typehash),
        AbiParam::address(params.to),
        AbiParam::uint(params.value),
        AbiParam::fixed_bytes(keccak256(&params.data)),
        AbiParam::uint(U256::from(params.operation.as_u8())),
        AbiParam::uint(params.safe_tx_gas),
        AbiParam::uint(params.base_gas),
        AbiParam::uint(params.gas_price),
        AbiParam::address(params.gas_token),
        AbiParam::address(params.refund_receiver),
        AbiParam::uint(params.nonce),
    ])
    .into()
}

/// Computes the struct hash for SafeTx
pub fn compute_message_hash(params: &SafeTxParams, version: &SafeVersion) -> B256 {
    let type_hashes = TypeHashSet::for_version(version);
    keccak256(encode_safe_tx(params, type_hashes.safe_tx_typehash))
}

/// Computes the final EIP-712 hash to sign
///
/// hash = keccak256("\x19\x01" || domainHash || messageHash)
pub fn compute_eip712_hash(domain_hash: B256, message_hash: B256) -> B256 {
    let mut encoded = Vec::with_capacity(66);

    // EIP-712 prefix
    encoded.extend_from_slice(&[0x19, 0x01]);
    encoded.extend_from_slice(domain_hash.as_slice());
    encoded.extend_from_slice(message_hash.as_slice());

    keccak256(&encoded)
}

/// Computes every hash of a typed Safe transaction
pub fn compute_hashes(
    chain_id: U256,
    safe_address: Address,
    params: &SafeTxParams,
    version: &SafeVersion,
) -> HashResult {
    let type_hashes = TypeHashSet::for_version(version);

    let domain_hash = compute_domain_hash(version, chain_id, safe_address);
    let encoded_message = encode_safe_tx(params, type_hashes.safe_tx_typehash);
    let message_hash = keccak256(&encoded_message);
    let safe_tx_hash = compute_eip712_hash(domain_hash, message_hash);

    debug!(
        %chain_id,
        %safe_address,
        %version,
        %domain_hash,
        %message_hash,
        %safe_tx_hash,
        "computed Safe transaction hashes"
    );

    HashResult {
        domain_hash,
        message_hash,
        safe_tx_hash,
        encoded_message,
    }
}

/// Computes every hash of a Safe transaction from textual input.
///
/// `chain_id` may be decimal or hex. Fails on the first malformed field and
/// never returns partial hashes.
pub fn calculate_hashes(
    chain_id: &str,
    safe_address: &str,
    input: &SafeTxInput,
) -> Result<HashResult> {
    let chain_id = parse_uint(chain_id)?;
    let safe_address = parse_address(safe_address)?;
    let version = input.safe_version()?;
    let params = input.to_params()?;

    Ok(compute_hashes(chain_id, safe_address, &params, &version))
}

/// Computes the hashes of an off-chain message, as the CompatibilityFallbackHandler does.
///
/// The message is first EIP-191 hashed, then wrapped as
/// `keccak256(abi.encode(SAFE_MSG_TYPEHASH, keccak256(eip191Hash)))`.
pub fn compute_message_hashes(
    chain_id: U256,
    safe_address: Address,
    message: impl AsRef<[u8]>,
    version: &SafeVersion,
) -> MessageHashResult {
    let raw_message_hash = eip191_hash_message(message);
    let domain_hash = compute_domain_hash(version, chain_id, safe_address);
    let message_hash = keccak256(encode_params(&[
        AbiParam::fixed_bytes(SAFE_MSG_TYPEHASH),
        AbiParam::fixed_bytes(keccak256(raw_message_hash)),
    ]));
    let safe_message_hash = compute_eip712_hash(domain_hash, message_hash);

    debug!(%safe_address, %raw_message_hash, %safe_message_hash, "computed Safe message hashes");

    MessageHashResult {
        raw_message_hash,
        domain_hash,
        message_hash,
        safe_message_hash,
    }
}

/// Textual counterpart of [`compute_message_hashes`]
pub fn calculate_message_hashes(
    chain_id: &str,
    safe_address: &str,
    message: &str,
    version: &str,
) -> Result<MessageHashResult> {
    let chain_id = parse_uint(chain_id)?;
    let safe_address = parse_address(safe_address)?;
    let version: SafeVersion = version.parse()?;

    Ok(compute_message_hashes(chain_id, safe_address, message, &version))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::Operation;
    use alloy::primitives::{address, hex};

    const SAFE: &str = "0xabcdefabcdefabcdefabcdefabcdefabcdefabcd";

    fn sample_input() -> SafeTxInput {
        SafeTxInput::new(
            "0x1111111111111111111111111111111111111111",
            "1000000000000000000",
            "0xa9059cbb",
        )
        .with_nonce("0")
    }

    fn v(s: &str) -> SafeVersion {
        s.parse().unwrap()
    }

    #[test]
    fn test_type_hash_selection() {
        assert_eq!(TypeHashSet::for_version(&v("1.3.0")), TypeHashSet::CURRENT);
        assert_eq!(TypeHashSet::for_version(&v("1.4.1")), TypeHashSet::CURRENT);

        let v120 = TypeHashSet::for_version(&v("1.2.0"));
        assert_eq!(v120.domain_separator_typehash, DOMAIN_SEPARATOR_TYPEHASH_LEGACY);
        assert_eq!(v120.safe_tx_typehash, SAFE_TX_TYPEHASH);

        let v010 = TypeHashSet::for_version(&v("0.1.0"));
        assert_eq!(v010.domain_separator_typehash, DOMAIN_SEPARATOR_TYPEHASH_LEGACY);
        assert_eq!(v010.safe_tx_typehash, SAFE_TX_TYPEHASH_LEGACY);
    }

    #[test]
    fn test_domain_hash_current_layout() {
        let safe = address!("0x1234567890123456789012345678901234567890");
        let domain = compute_domain_hash(&v("1.3.0"), U256::from(1), safe);

        let mut expected = Vec::new();
        expected.extend_from_slice(DOMAIN_SEPARATOR_TYPEHASH.as_slice());
        expected.extend_from_slice(&U256::from(1).to_be_bytes::<32>());
        expected.extend_from_slice(safe.into_word().as_slice());
        assert_eq!(domain, keccak256(&expected));
    }

    #[test]
    fn test_legacy_domain_ignores_chain_id() {
        let safe = address!("0x1234567890123456789012345678901234567890");
        let mainnet = compute_domain_hash(&v("1.1.1"), U256::from(1), safe);
        let gnosis = compute_domain_hash(&v("1.1.1"), U256::from(100), safe);
        assert_eq!(mainnet, gnosis);

        let mut expected = Vec::new();
        expected.extend_from_slice(DOMAIN_SEPARATOR_TYPEHASH_LEGACY.as_slice());
        expected.extend_from_slice(safe.into_word().as_slice());
        assert_eq!(mainnet, keccak256(&expected));
    }

    #[test]
    fn test_eip712_hash_prefix() {
        let hash = compute_eip712_hash(B256::ZERO, B256::ZERO);

        // The result should be keccak256("\x19\x01" + 64 zero bytes)
        let expected_input = hex!("1901")
            .iter()
            .chain([0u8; 64].iter())
            .copied()
            .collect::<Vec<u8>>();

        assert_eq!(hash, keccak256(&expected_input));
    }

    #[test]
    fn test_encoded_message_layout() {
        let params = SafeTxParams::new(
            address!("0x1234567890123456789012345678901234567890"),
            U256::from(1000),
            vec![0x01, 0x02, 0x03],
            Operation::DelegateCall,
        )
        .with_nonce(U256::from(5));

        let encoded = encode_safe_tx(&params, SAFE_TX_TYPEHASH);
        assert_eq!(encoded.len(), 11 * 32);
        assert_eq!(&encoded[..32], SAFE_TX_TYPEHASH.as_slice());
        assert_eq!(&encoded[96..128], keccak256([0x01, 0x02, 0x03]).as_slice());
        assert_eq!(encoded[159], 1);
        assert_eq!(encoded[351], 5);
        assert_eq!(compute_message_hash(&params, &v("1.3.0")), keccak256(&encoded));
    }

    #[test]
    fn test_calculate_hashes_deterministic() {
        let first = calculate_hashes("1", SAFE, &sample_input()).unwrap();
        let second = calculate_hashes("1", SAFE, &sample_input()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.safe_tx_hash, compute_eip712_hash(first.domain_hash, first.message_hash));
        assert_eq!(first.message_hash, keccak256(&first.encoded_message));
    }

    #[test]
    fn test_nonce_changes_message_not_domain() {
        let zero = calculate_hashes("1", SAFE, &sample_input()).unwrap();
        let one = calculate_hashes("1", SAFE, &sample_input().with_nonce("1")).unwrap();

        assert_eq!(zero.domain_hash, one.domain_hash);
        assert_ne!(zero.message_hash, one.message_hash);
        assert_ne!(zero.safe_tx_hash, one.safe_tx_hash);
    }

    #[test]
    fn test_version_changes_domain() {
        let legacy = calculate_hashes("1", SAFE, &sample_input().with_version("1.2.0")).unwrap();
        let current = calculate_hashes("1", SAFE, &sample_input().with_version("1.3.0")).unwrap();
        assert_ne!(legacy.domain_hash, current.domain_hash);
        assert_eq!(legacy.message_hash, current.message_hash);
    }

    #[test]
    fn test_pre_1_0_changes_message() {
        let old = calculate_hashes("1", SAFE, &sample_input().with_version("0.1.0")).unwrap();
        let new = calculate_hashes("1", SAFE, &sample_input().with_version("1.0.0")).unwrap();
        assert_ne!(old.message_hash, new.message_hash);
        assert_eq!(old.domain_hash, new.domain_hash);
    }

    #[test]
    fn test_chain_id_hex_and_decimal_agree() {
        let dec = calculate_hashes("100", SAFE, &sample_input()).unwrap();
        let hex = calculate_hashes("0x64", SAFE, &sample_input()).unwrap();
        assert_eq!(dec, hex);
    }

    #[test]
    fn test_calculate_hashes_strict() {
        assert!(matches!(
            calculate_hashes("1", "0xnotanaddress", &sample_input()),
            Err(Error::InvalidAddress(_))
        ));
        assert!(matches!(
            calculate_hashes("mainnet", SAFE, &sample_input()),
            Err(Error::InvalidInteger { .. })
        ));

        let mut input = sample_input();
        input.gas_price = "1e9".to_string();
        assert!(matches!(
            calculate_hashes("1", SAFE, &input),
            Err(Error::InvalidInteger { .. })
        ));

        let separated_nonce = sample_input().with_nonce("1_0");
        assert!(matches!(
            calculate_hashes("1", SAFE, &separated_nonce),
            Err(Error::InvalidInteger { .. })
        ));

        let bad_version = sample_input().with_version("latest");
        assert!(matches!(
            calculate_hashes("1", SAFE, &bad_version),
            Err(Error::InvalidVersion(_))
        ));
    }

    #[test]
    fn test_message_hashes() {
        let result = calculate_message_hashes("1", SAFE, "Hello Safe", "1.3.0").unwrap();

        assert_eq!(result.raw_message_hash, eip191_hash_message("Hello Safe"));
        let mut struct_encoding = Vec::new();
        struct_encoding.extend_from_slice(SAFE_MSG_TYPEHASH.as_slice());
        struct_encoding.extend_from_slice(keccak256(result.raw_message_hash).as_slice());
        assert_eq!(result.message_hash, keccak256(&struct_encoding));
        assert_eq!(
            result.safe_message_hash,
            compute_eip712_hash(result.domain_hash, result.message_hash)
        );
    }

    #[test]
    fn test_message_and_transaction_share_domain() {
        let tx = calculate_hashes("10", SAFE, &sample_input()).unwrap();
        let msg = calculate_message_hashes("10", SAFE, "gm", "1.3.0").unwrap();
        assert_eq!(tx.domain_hash, msg.domain_hash);
    }
}
