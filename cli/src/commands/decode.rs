use alloy::primitives::{Address, Bytes};
use color_eyre::eyre::Result;
use safe_hashes::encoding::abi::{parse_address, parse_bytes};
use safe_hashes::{decode_transaction_data, DecodedCall, FourByteDirectory, StaticSignatures};

use crate::cli::DecodeArgs;
use crate::output::DecodeOutput;

pub async fn run(args: DecodeArgs, json: bool) -> Result<()> {
    let to = parse_address(&args.to)?;
    let data = parse_bytes(&args.data)?;

    let decoded = decode_call(to, &data, args.chain_id, args.offline).await;

    DecodeOutput { to, decoded }.print(json);

    Ok(())
}

/// Decodes call data, leaving selectors unresolved when offline
pub async fn decode_call(to: Address, data: &Bytes, chain_id: u64, offline: bool) -> DecodedCall {
    if offline {
        decode_transaction_data(&StaticSignatures::new(), to, data, chain_id).await
    } else {
        decode_transaction_data(&FourByteDirectory::new(), to, data, chain_id).await
    }
}
