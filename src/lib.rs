//! # safe-hashes
//!
//! Independent verification of Safe multisig transaction hashes.
//!
//! Hardware wallets show Safe transactions as an EIP-712 hash or as raw
//! `execTransaction` call data. This crate recomputes both from the
//! transaction fields so a signer can compare them before approving.
//!
//! ## Features
//!
//! - Domain, message and `safeTxHash` computation for every Safe version,
//!   including the legacy type hashes used before 1.3.0
//! - Off-chain message hashes as checked by the compatibility fallback handler
//! - `execTransaction` call data reconstruction with correct dynamic offsets
//! - Best-effort call data decoding backed by a pluggable signature directory
//! - Registry of the networks served by the Safe transaction service
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use safe_hashes::{calculate_hashes, SafeTxInput};
//!
//! let tx = SafeTxInput::new(to, "0", "0xa9059cbb...")
//!     .with_nonce("42")
//!     .with_version("1.4.1");
//!
//! let hashes = calculate_hashes("1", safe_address, &tx)?;
//! println!("safeTxHash: {}", hashes.safe_tx_hash);
//! ```
//!
//! ## Decoding
//!
//! ```rust,ignore
//! use safe_hashes::{decode_transaction_data, FourByteDirectory};
//!
//! let decoded = decode_transaction_data(&FourByteDirectory::new(), to, &data, 1).await;
//! println!("{}", decoded.method);
//! ```

pub mod chain;
pub mod contracts;
pub mod decoding;
pub mod encoding;
pub mod error;
pub mod types;
pub mod version;

// Re-export main types at crate root
pub use chain::{parse_prefixed_address, Network, NETWORKS};
pub use contracts::ISafe;
pub use decoding::{
    decode_transaction_data, FourByteDirectory, SignatureLookup, StaticSignatures,
};
pub use encoding::{
    calculate_hashes, calculate_message_hashes, compute_hashes, encode_exec_transaction,
    encode_parameter, pad_left, pad_right, ExecTransactionCall, HashResult, MessageHashResult,
};
pub use error::{Error, Result};
pub use types::{DecodedCall, DecodedParam, Operation, SafeTxInput, SafeTxParams};
pub use version::{compare_versions, SafeVersion, DEFAULT_SAFE_VERSION};

// Re-export alloy types that are commonly used
pub use alloy::primitives::{Address, Bytes, B256, U256};
