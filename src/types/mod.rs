//! Core types for Safe transactions

mod decoded;
mod operation;
mod transaction;

pub use decoded::{DecodedCall, DecodedParam};
pub use operation::Operation;
pub use transaction::{SafeTxInput, SafeTxParams};
