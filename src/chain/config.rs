//! Network registry for Safe deployments

use std::fmt;
use std::str::FromStr;

use alloy::primitives::Address;
use serde::Serialize;

use crate::encoding::abi::parse_address;
use crate::error::{Error, Result};

/// A network with a Safe transaction service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    /// Name used on the command line
    pub name: &'static str,
    /// Chain ID used in the EIP-712 domain
    pub chain_id: u64,
    /// EIP-3770 short name, e.g. `eth` in `eth:0x...`
    pub short_name: &'static str,
    /// Base URL of the Safe transaction service
    pub tx_service_url: &'static str,
}

macro_rules! network {
    ($name:literal, $chain_id:expr, $short_name:literal, $service:literal) => {
        Network {
            name: $name,
            chain_id: $chain_id,
            short_name: $short_name,
            tx_service_url: concat!("https://safe-transaction-", $service, ".safe.global"),
        }
    };
}

/// Every supported network, ordered by name
pub const NETWORKS: &[Network] = &[
    network!("arbitrum", chain_ids::ARBITRUM, "arb1", "arbitrum"),
    network!("aurora", chain_ids::AURORA, "aurora", "aurora"),
    network!("avalanche", chain_ids::AVALANCHE, "avax", "avalanche"),
    network!("base", chain_ids::BASE, "base", "base"),
    network!("base-sepolia", chain_ids::BASE_SEPOLIA, "basesep", "base-sepolia"),
    network!("blast", chain_ids::BLAST, "blast", "blast"),
    network!("bsc", chain_ids::BSC, "bnb", "bsc"),
    network!("celo", chain_ids::CELO, "celo", "celo"),
    network!("ethereum", chain_ids::MAINNET, "eth", "mainnet"),
    network!("gnosis", chain_ids::GNOSIS, "gno", "gnosis-chain"),
    network!("gnosis-chiado", chain_ids::GNOSIS_CHIADO, "chi", "chiado"),
    network!("linea", chain_ids::LINEA, "linea", "linea"),
    network!("mantle", chain_ids::MANTLE, "mnt", "mantle"),
    network!("optimism", chain_ids::OPTIMISM, "oeth", "optimism"),
    network!("polygon", chain_ids::POLYGON, "matic", "polygon"),
    network!("polygon-zkevm", chain_ids::POLYGON_ZKEVM, "zkevm", "zkevm"),
    network!("scroll", chain_ids::SCROLL, "scr", "scroll"),
    network!("sepolia", chain_ids::SEPOLIA, "sep", "sepolia"),
    network!("worldchain", chain_ids::WORLDCHAIN, "wc", "worldchain"),
    network!("xlayer", chain_ids::XLAYER, "okb", "xlayer"),
    network!("zksync", chain_ids::ZKSYNC, "zksync", "zksync"),
];

impl Network {
    /// Finds a network by its command line name, ignoring case
    pub fn by_name(name: &str) -> Option<&'static Network> {
        NETWORKS.iter().find(|n| n.name.eq_ignore_ascii_case(name))
    }

    pub fn by_chain_id(chain_id: u64) -> Option<&'static Network> {
        NETWORKS.iter().find(|n| n.chain_id == chain_id)
    }

    /// Finds a network by its EIP-3770 short name
    pub fn by_short_name(short_name: &str) -> Option<&'static Network> {
        NETWORKS
            .iter()
            .find(|n| n.short_name.eq_ignore_ascii_case(short_name))
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.chain_id)
    }
}

impl FromStr for Network {
    type Err = Error;

    /// Accepts a name, a short name or a decimal chain ID
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Network::by_name(s)
            .or_else(|| Network::by_short_name(s))
            .or_else(|| s.parse().ok().and_then(Network::by_chain_id))
            .copied()
            .ok_or_else(|| Error::UnknownNetwork(s.to_string()))
    }
}

/// Splits an EIP-3770 address such as `eth:0x...`.
///
/// A bare address yields no network. An unknown prefix is an error.
pub fn parse_prefixed_address(value: &str) -> Result<(Option<&'static Network>, Address)> {
    let value = value.trim();
    match value.split_once(':') {
        Some((prefix, address)) => {
            let network = Network::by_short_name(prefix)
                .ok_or_else(|| Error::UnknownNetwork(prefix.to_string()))?;
            Ok((Some(network), parse_address(address)?))
        }
        None => Ok((None, parse_address(value)?)),
    }
}

/// Chain IDs of the supported networks
pub mod chain_ids {
    pub const MAINNET: u64 = 1;
    pub const OPTIMISM: u64 = 10;
    pub const BSC: u64 = 56;
    pub const GNOSIS: u64 = 100;
    pub const POLYGON: u64 = 137;
    pub const XLAYER: u64 = 196;
    pub const ZKSYNC: u64 = 324;
    pub const WORLDCHAIN: u64 = 480;
    pub const POLYGON_ZKEVM: u64 = 1101;
    pub const MANTLE: u64 = 5000;
    pub const BASE: u64 = 8453;
    pub const GNOSIS_CHIADO: u64 = 10200;
    pub const ARBITRUM: u64 = 42161;
    pub const CELO: u64 = 42220;
    pub const AVALANCHE: u64 = 43114;
    pub const LINEA: u64 = 59144;
    pub const BLAST: u64 = 81457;
    pub const BASE_SEPOLIA: u64 = 84532;
    pub const SCROLL: u64 = 534352;
    pub const SEPOLIA: u64 = 11155111;
    pub const AURORA: u64 = 1313161554;
}
