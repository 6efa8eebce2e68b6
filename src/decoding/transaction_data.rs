//! Best-effort decoding of a Safe transaction's call data
//!
//! Decoding never fails: a missing signature, a network error or malformed
//! arguments all degrade to an opaque view of the bytes. The decoder reads
//! static words greedily and stops at the first dynamic parameter, which
//! swallows the rest of the data. Calls with several dynamic parameters,
//! arrays or tuples are therefore only partially decoded.

use alloy::hex;
use alloy::primitives::{Address, Bytes, Selector};
use tracing::{debug, instrument, warn};

use super::signature::SignatureLookup;
use crate::encoding::abi::{
    read_word, word_to_address, word_to_bool, word_to_int, word_to_uint, WORD_SIZE,
};
use crate::error::{Error, Result};
use crate::types::{DecodedCall, DecodedParam};

/// Method shown for a transaction without call data
pub const ETH_TRANSFER_METHOD: &str = "0x (ETH Transfer)";

/// Method shown when the selector could not be resolved
pub const UNKNOWN_METHOD: &str = "Unknown";

/// How a parameter type is read from the argument bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParamKind {
    Address,
    Uint,
    Int,
    Bool,
    /// Everything else: `bytes`, `string`, arrays, tuples
    Remainder,
}

impl ParamKind {
    fn of(ty: &str) -> Self {
        let sized = |prefix: &str| {
            ty.strip_prefix(prefix)
                .is_some_and(|bits| bits.chars().all(|c| c.is_ascii_digit()))
        };

        match ty {
            "address" => ParamKind::Address,
            "bool" => ParamKind::Bool,
            _ if sized("uint") => ParamKind::Uint,
            _ if sized("int") => ParamKind::Int,
            _ => ParamKind::Remainder,
        }
    }
}

/// Decodes call data into a method name and parameters.
///
/// `to` and `chain_id` only annotate logs. The lookup is not consulted for
/// empty call data and is called at most once otherwise.
#[instrument(level = "debug", skip(lookup, data), fields(data_len = data.len()))]
pub async fn decode_transaction_data<L: SignatureLookup>(
    lookup: &L,
    to: Address,
    data: &Bytes,
    chain_id: u64,
) -> DecodedCall {
    if data.is_empty() {
        return DecodedCall::new(ETH_TRANSFER_METHOD);
    }

    if data.len() < 4 {
        warn!("call data shorter than a selector");
        return unknown_call(None, data);
    }

    let selector = Selector::from_slice(&data[..4]);
    let args = &data[4..];

    let signature = match lookup.lookup(selector).await {
        Ok(Some(signature)) => signature,
        Ok(None) => {
            debug!(%selector, "no signature found");
            return unknown_call(Some(selector), data);
        }
        Err(err) => {
            warn!(%selector, error = %err, "signature lookup failed");
            return unknown_call(Some(selector), data);
        }
    };

    let (method, types) = match parse_signature(&signature) {
        Ok(parsed) => parsed,
        Err(err) => {
            warn!(%selector, error = %err, "unusable signature");
            return unknown_call(Some(selector), data);
        }
    };

    let parameters = match decode_arguments(&types, args) {
        Ok(params) if params.is_empty() && !args.is_empty() => vec![encoded_data(args)],
        Ok(params) => params,
        Err(err) => {
            warn!(%signature, error = %err, "could not decode arguments");
            vec![encoded_data(args)]
        }
    };

    DecodedCall::new(method)
        .with_signature(signature)
        .with_selector(selector)
        .with_parameters(parameters)
}

fn unknown_call(selector: Option<Selector>, data: &Bytes) -> DecodedCall {
    let call = DecodedCall::new(UNKNOWN_METHOD).with_parameters(vec![DecodedParam::new(
        "data",
        "bytes",
        hex::encode_prefixed(data),
    )]);

    match selector {
        Some(selector) => call.with_selector(selector),
        None => call,
    }
}

fn encoded_data(args: &[u8]) -> DecodedParam {
    DecodedParam::new("encodedData", "bytes", hex::encode_prefixed(args))
}

/// Splits `name(type1,type2)` into the name and its top-level parameter
/// types. Commas inside tuple types do not split.
pub fn parse_signature(signature: &str) -> Result<(String, Vec<String>)> {
    let signature = signature.trim();
    let malformed = || Error::SignatureLookupFailed(format!("malformed signature '{signature}'"));

    let open_paren = signature.find('(').ok_or_else(malformed)?;
    let close_paren = signature.rfind(')').ok_or_else(malformed)?;
    if close_paren < open_paren || open_paren == 0 {
        return Err(malformed());
    }

    let list = &signature[open_paren + 1..close_paren];
    let mut types = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in list.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.checked_sub(1).ok_or_else(malformed)?,
            ',' if depth == 0 => {
                types.push(&list[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(malformed());
    }
    types.push(&list[start..]);

    let types = types
        .into_iter()
        .map(str::trim)
        .filter(|ty| !ty.is_empty())
        .map(str::to_string)
        .collect();

    Ok((signature[..open_paren].to_string(), types))
}

/// Reads parameters left to right until the types or the data run out
fn decode_arguments(types: &[String], args: &[u8]) -> Result<Vec<DecodedParam>> {
    let mut params = Vec::with_capacity(types.len());
    let mut offset = 0;

    for (i, ty) in types.iter().enumerate() {
        let name = format!("param{i}");
        let value = match ParamKind::of(ty) {
            ParamKind::Remainder => {
                let rest = args.get(offset..).unwrap_or_default();
                params.push(DecodedParam::new(name, ty, hex::encode_prefixed(rest)));
                break;
            }
            kind => {
                let word = read_word(args, offset)?;
                offset += WORD_SIZE;
                match kind {
                    ParamKind::Address => hex::encode_prefixed(word_to_address(word)),
                    ParamKind::Int => word_to_int(word).to_string(),
                    ParamKind::Bool => word_to_bool(word).to_string(),
                    _ => word_to_uint(word).to_string(),
                }
            }
        };
        params.push(DecodedParam::new(name, ty, value));
    }

    Ok(params)
}
