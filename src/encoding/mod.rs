//! Encoding and hashing for Safe transactions

pub mod abi;
mod eip712;
mod exec_transaction;

pub use abi::{encode_parameter, pad_left, pad_right, AbiParam, DynamicParam, StaticParam};
pub use eip712::{
    calculate_hashes, calculate_message_hashes, compute_domain_hash, compute_eip712_hash,
    compute_hashes, compute_message_hash, compute_message_hashes, encode_safe_tx, HashResult,
    MessageHashResult, TypeHashSet,
};
pub use exec_transaction::{
    encode_exec_transaction, encode_exec_transaction_call, try_encode_exec_transaction,
    ExecTransactionCall, EXEC_TRANSACTION_METHOD,
};
