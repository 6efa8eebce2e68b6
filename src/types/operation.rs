//! Operation types for Safe transactions

use std::fmt;
use std::str::FromStr;

use alloy::primitives::U256;
use serde::{Deserialize, Serialize};

use crate::encoding::abi::parse_uint;
use crate::error::Error;

/// Operation type for Safe transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Operation {
    /// Regular call (default)
    #[default]
    Call = 0,
    /// Delegate call (executes in the Safe's own storage context)
    DelegateCall = 1,
}

impl Operation {
    /// Returns the operation as a u8 value
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    /// Creates an Operation from a u8 value
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Operation::Call),
            1 => Some(Operation::DelegateCall),
            _ => None,
        }
    }

    /// Whether this operation runs foreign code against the Safe's storage
    pub fn is_delegate_call(&self) -> bool {
        matches!(self, Operation::DelegateCall)
    }
}

impl From<Operation> for u8 {
    fn from(op: Operation) -> Self {
        op.as_u8()
    }
}

impl TryFrom<u8> for Operation {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Operation::from_u8(value).ok_or_else(|| Error::InvalidOperation(value.to_string()))
    }
}

impl FromStr for Operation {
    type Err = Error;

    /// Accepts the decimal or hex forms the Safe service and manual entry use
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = parse_uint(s).map_err(|_| Error::InvalidOperation(s.to_string()))?;
        if value == U256::ZERO {
            Ok(Operation::Call)
        } else if value == U256::from(1u8) {
            Ok(Operation::DelegateCall)
        } else {
            Err(Error::InvalidOperation(s.to_string()))
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Call => write!(f, "Call"),
            Operation::DelegateCall => write!(f, "DelegateCall"),
        }
    }
}
