pub mod decode;
pub mod message;
pub mod networks;
pub mod tx;

use alloy::primitives::Address;
use color_eyre::eyre::{eyre, Result};
use safe_hashes::{parse_prefixed_address, Network};

use crate::cli::TargetArgs;

/// A Safe resolved to a chain
pub struct Target {
    pub safe: Address,
    pub chain_id: u64,
    pub network: Option<Network>,
}

/// Resolves the chain from `--chain-id`, `--network` or the address prefix.
///
/// A prefix that disagrees with `--network` is rejected.
pub fn resolve_target(args: &TargetArgs) -> Result<Target> {
    let (prefix_network, safe) = parse_prefixed_address(&args.safe)?;
    let network = args.network.as_deref().map(str::parse::<Network>).transpose()?;

    if let (Some(prefix), Some(network)) = (prefix_network, network) {
        if prefix.chain_id != network.chain_id {
            return Err(eyre!(
                "address prefix '{}' does not match network '{}'",
                prefix.short_name,
                network.name
            ));
        }
    }

    let network = network.or_else(|| prefix_network.copied());
    let chain_id = match (args.chain_id, network) {
        (Some(chain_id), _) => chain_id,
        (None, Some(network)) => network.chain_id,
        (None, None) => return Err(eyre!("pass --network, --chain-id or an EIP-3770 prefixed address")),
    };

    Ok(Target {
        safe,
        chain_id,
        network: network.or_else(|| Network::by_chain_id(chain_id).copied()),
    })
}
