//! Solidity ABI primitives for the types the Safe interface uses
//!
//! This is deliberately not a general ABI codec: parameters are a closed set
//! of static words plus `bytes`, which covers `execTransaction` and the
//! EIP-712 `SafeTx` tuple. Everything else is rejected with
//! [`Error::UnsupportedAbiType`].

use alloy::hex;
use alloy::primitives::{Address, Bytes, B256, I256, U256};

use crate::error::{Error, Result};

/// Size of an ABI word in bytes
pub const WORD_SIZE: usize = 32;

/// Size of an ABI word in hex characters
pub const WORD_HEX_LEN: usize = WORD_SIZE * 2;

/// Pads `hex` on the left with `pad` up to `width` characters.
///
/// Strings already at least `width` long are returned unchanged.
pub fn pad_left(hex: &str, width: usize, pad: char) -> String {
    let missing = width.saturating_sub(hex.chars().count());
    let mut out = String::with_capacity(hex.len() + missing);
    out.extend(std::iter::repeat(pad).take(missing));
    out.push_str(hex);
    out
}

/// Pads `hex` on the right with `pad` up to `width` characters.
pub fn pad_right(hex: &str, width: usize, pad: char) -> String {
    let missing = width.saturating_sub(hex.chars().count());
    let mut out = String::with_capacity(hex.len() + missing);
    out.push_str(hex);
    out.extend(std::iter::repeat(pad).take(missing));
    out
}

fn strip_hex_prefix(s: &str) -> Option<&str> {
    s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))
}

/// Parses `0x` + 40 hex digits (any case) into an address
pub fn parse_address(s: &str) -> Result<Address> {
    let trimmed = s.trim();
    let digits = strip_hex_prefix(trimmed).unwrap_or(trimmed);

    if digits.len() != 40 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidAddress(s.to_string()));
    }

    let mut bytes = [0u8; 20];
    hex::decode_to_slice(digits, &mut bytes).map_err(|_| Error::InvalidAddress(s.to_string()))?;
    Ok(Address::from(bytes))
}

/// Parses an unsigned 256-bit integer from decimal or `0x` hex text
pub fn parse_uint(s: &str) -> Result<U256> {
    let trimmed = s.trim();
    let invalid = |reason: &str| Error::InvalidInteger {
        value: s.to_string(),
        reason: reason.to_string(),
    };

    if trimmed.is_empty() {
        return Err(invalid("empty value"));
    }
    if trimmed.starts_with('-') {
        return Err(invalid("negative values are not allowed"));
    }

    match strip_hex_prefix(trimmed) {
        Some("") => Err(invalid("missing hex digits")),
        Some(digits) if !digits.bytes().all(|b| b.is_ascii_hexdigit()) => {
            Err(invalid("expected hex digits"))
        }
        Some(digits) => U256::from_str_radix(digits, 16).map_err(|e| invalid(&e.to_string())),
        None if !trimmed.bytes().all(|b| b.is_ascii_digit()) => {
            Err(invalid("expected decimal digits"))
        }
        None => U256::from_str_radix(trimmed, 10).map_err(|e| invalid(&e.to_string())),
    }
}

/// Parses `0x`-prefixed (or bare) even-length hex into bytes; `0x` is empty
pub fn parse_bytes(s: &str) -> Result<Bytes> {
    let trimmed = s.trim();
    let digits = strip_hex_prefix(trimmed).unwrap_or(trimmed);

    if digits.len() % 2 != 0 {
        return Err(Error::InvalidBytes {
            value: s.to_string(),
            reason: "odd number of hex digits".to_string(),
        });
    }

    hex::decode(digits)
        .map(Bytes::from)
        .map_err(|e| Error::InvalidBytes {
            value: s.to_string(),
            reason: e.to_string(),
        })
}

fn uint_word(value: usize) -> B256 {
    B256::from(U256::from(value).to_be_bytes::<32>())
}

/// Parameter that occupies exactly one head word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaticParam {
    Address(Address),
    Uint(U256),
    Bool(bool),
    FixedBytes(B256),
}

impl StaticParam {
    /// Returns the 32-byte ABI word for this value
    pub fn word(&self) -> B256 {
        match self {
            StaticParam::Address(address) => address.into_word(),
            StaticParam::Uint(value) => B256::from(value.to_be_bytes::<32>()),
            StaticParam::Bool(flag) => uint_word(usize::from(*flag)),
            StaticParam::FixedBytes(word) => *word,
        }
    }
}

/// Parameter whose contents live in the tail region
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DynamicParam {
    Bytes(Bytes),
}

impl DynamicParam {
    /// Length of the contents in bytes, before padding
    pub fn len(&self) -> usize {
        match self {
            DynamicParam::Bytes(bytes) => bytes.len(),
        }
    }

    /// Whether the contents are empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Length of the contents rounded up to whole words
    pub fn padded_len(&self) -> usize {
        self.len().div_ceil(WORD_SIZE) * WORD_SIZE
    }

    /// Length word followed by the right-padded contents
    pub fn tail(&self) -> Vec<u8> {
        let DynamicParam::Bytes(bytes) = self;

        let mut out = Vec::with_capacity(WORD_SIZE + self.padded_len());
        out.extend_from_slice(uint_word(bytes.len()).as_slice());
        out.extend_from_slice(bytes);
        out.resize(WORD_SIZE + self.padded_len(), 0);
        out
    }
}

/// A single ABI-encodable parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbiParam {
    Static(StaticParam),
    Dynamic(DynamicParam),
}

impl AbiParam {
    pub fn address(address: Address) -> Self {
        AbiParam::Static(StaticParam::Address(address))
    }

    pub fn uint(value: U256) -> Self {
        AbiParam::Static(StaticParam::Uint(value))
    }

    pub fn fixed_bytes(word: B256) -> Self {
        AbiParam::Static(StaticParam::FixedBytes(word))
    }

    pub fn bytes(bytes: impl Into<Bytes>) -> Self {
        AbiParam::Dynamic(DynamicParam::Bytes(bytes.into()))
    }

    /// Parses a textual value for one of the supported Solidity types
    pub fn parse(ty: &str, value: &str) -> Result<Self> {
        match ty.trim() {
            "address" => parse_address(value).map(AbiParam::address),
            "uint256" => parse_uint(value).map(AbiParam::uint),
            "uint8" => {
                let parsed = parse_uint(value)?;
                if parsed > U256::from(u8::MAX) {
                    return Err(Error::InvalidInteger {
                        value: value.to_string(),
                        reason: "out of range for uint8".to_string(),
                    });
                }
                Ok(AbiParam::uint(parsed))
            }
            "bool" => match value.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => Ok(AbiParam::Static(StaticParam::Bool(true))),
                "false" | "0" => Ok(AbiParam::Static(StaticParam::Bool(false))),
                _ => Err(Error::InvalidInteger {
                    value: value.to_string(),
                    reason: "expected true or false".to_string(),
                }),
            },
            "bytes32" => {
                let bytes = parse_bytes(value)?;
                if bytes.len() != WORD_SIZE {
                    return Err(Error::InvalidBytes {
                        value: value.to_string(),
                        reason: format!("expected 32 bytes, got {}", bytes.len()),
                    });
                }
                Ok(AbiParam::fixed_bytes(B256::from_slice(&bytes)))
            }
            "bytes" => parse_bytes(value).map(AbiParam::bytes),
            other => Err(Error::UnsupportedAbiType(other.to_string())),
        }
    }
}

/// Encodes a single parameter as bare hex (no `0x`).
///
/// Static types yield one 64-character word; `bytes` yields its length word
/// followed by the contents padded to whole words.
pub fn encode_parameter(ty: &str, value: &str) -> Result<String> {
    match AbiParam::parse(ty, value)? {
        AbiParam::Static(param) => Ok(hex::encode(param.word())),
        AbiParam::Dynamic(param) => Ok(hex::encode(param.tail())),
    }
}

/// Encodes a parameter list with the standard head/tail layout.
///
/// The head holds one word per parameter. A dynamic parameter's head word is
/// the byte offset of its tail, measured from the start of the head; tails
/// are appended after the head in declaration order.
pub fn encode_params(params: &[AbiParam]) -> Vec<u8> {
    let head_size = params.len() * WORD_SIZE;
    let mut head = Vec::with_capacity(head_size);
    let mut tail = Vec::new();

    for param in params {
        match param {
            AbiParam::Static(param) => head.extend_from_slice(param.word().as_slice()),
            AbiParam::Dynamic(param) => {
                head.extend_from_slice(uint_word(head_size + tail.len()).as_slice());
                tail.extend(param.tail());
            }
        }
    }

    head.extend(tail);
    head
}

/// Reads the 32-byte word starting at `offset`
pub fn read_word(data: &[u8], offset: usize) -> Result<B256> {
    let end = offset.checked_add(WORD_SIZE);
    match end {
        Some(end) if end <= data.len() => Ok(B256::from_slice(&data[offset..end])),
        _ => Err(Error::AbiDecode {
            offset,
            needed: WORD_SIZE,
            available: data.len().saturating_sub(offset),
        }),
    }
}

/// Address stored in the low 20 bytes of a word
pub fn word_to_address(word: B256) -> Address {
    Address::from_word(word)
}

pub fn word_to_uint(word: B256) -> U256 {
    U256::from_be_slice(word.as_slice())
}

/// Two's complement interpretation of a word
pub fn word_to_int(word: B256) -> I256 {
    I256::from_raw(word_to_uint(word))
}

/// Any non-zero word is `true`
pub fn word_to_bool(word: B256) -> bool {
    !word.is_zero()
}
