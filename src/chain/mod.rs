//! Known networks and EIP-3770 address handling

mod config;

pub use config::{chain_ids, parse_prefixed_address, Network, NETWORKS};
