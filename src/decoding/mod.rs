//! Best-effort decoding of call data for display

pub mod signature;
mod transaction_data;

pub use signature::{selector_of, FourByteDirectory, SignatureLookup, StaticSignatures, FOUR_BYTE_API_URL};
pub use transaction_data::{
    decode_transaction_data, parse_signature, ETH_TRANSFER_METHOD, UNKNOWN_METHOD,
};
