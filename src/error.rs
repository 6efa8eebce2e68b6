//! Error types for safe-hashes

use thiserror::Error;

/// Result type alias for safe-hashes operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while encoding, hashing or decoding Safe transactions
#[derive(Debug, Error)]
pub enum Error {
    /// Address is not `0x` followed by exactly 40 hex digits
    #[error("Invalid address '{0}': expected 0x followed by 40 hex characters")]
    InvalidAddress(String),

    /// Integer is empty, non-numeric, negative or out of range for its type
    #[error("Invalid integer '{value}': {reason}")]
    InvalidInteger { value: String, reason: String },

    /// Byte string is not valid even-length hex
    #[error("Invalid bytes '{value}': {reason}")]
    InvalidBytes { value: String, reason: String },

    /// Operation is neither Call (0) nor DelegateCall (1)
    #[error("Invalid operation '{0}': expected 0 (Call) or 1 (DelegateCall)")]
    InvalidOperation(String),

    /// Version string is not a dotted numeric version
    #[error("Invalid Safe version '{0}'")]
    InvalidVersion(String),

    /// The ABI encoder only supports the types used by the Safe interface
    #[error("Unsupported ABI type: {0}")]
    UnsupportedAbiType(String),

    /// Call data ended before a full ABI word could be read
    #[error("ABI decoding error: need {needed} bytes at offset {offset}, only {available} available")]
    AbiDecode {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// Reconstructing the execTransaction call data failed
    #[error("Failed to encode execTransaction: {0}")]
    ExecEncodingFailed(#[source] Box<Error>),

    /// Network name, chain ID or EIP-3770 prefix is not in the registry
    #[error("Unknown network '{0}'")]
    UnknownNetwork(String),

    /// The method signature directory could not be queried or returned garbage
    #[error("Signature lookup failed: {0}")]
    SignatureLookupFailed(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::SignatureLookupFailed(err.to_string())
    }
}
