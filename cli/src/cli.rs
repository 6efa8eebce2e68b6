use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use safe_hashes::DEFAULT_SAFE_VERSION;

const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

#[derive(Parser)]
#[command(name = "safe-hashes")]
#[command(about = "Verify Safe transaction and message hashes before signing", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the hashes and execTransaction call data of a Safe transaction
    Tx(TxArgs),

    /// Compute the hashes of an off-chain message signed through a Safe
    Message(MessageArgs),

    /// Decode transaction call data
    Decode(DecodeArgs),

    /// List supported networks
    Networks,
}

/// Which Safe on which chain
#[derive(Args, Clone)]
pub struct TargetArgs {
    /// Safe address, optionally EIP-3770 prefixed (e.g. "eth:0x...")
    #[arg(long, env = "SAFE_ADDRESS")]
    pub safe: String,

    /// Network name, short name or chain ID
    #[arg(long, env = "SAFE_NETWORK", conflicts_with = "chain_id")]
    pub network: Option<String>,

    /// Chain ID, for networks missing from the registry
    #[arg(long)]
    pub chain_id: Option<u64>,
}

#[derive(Args, Clone)]
pub struct TxArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Safe nonce of the transaction
    #[arg(long)]
    pub nonce: String,

    /// Target address of the call
    #[arg(long, default_value = ZERO_ADDRESS)]
    pub to: String,

    /// Value in wei, decimal or hex
    #[arg(long, default_value = "0")]
    pub value: String,

    /// Call data
    #[arg(long, default_value = "0x")]
    pub data: String,

    /// 0 for Call, 1 for DelegateCall
    #[arg(long, default_value = "0")]
    pub operation: String,

    #[arg(long, default_value = "0")]
    pub safe_tx_gas: String,

    #[arg(long, default_value = "0")]
    pub base_gas: String,

    #[arg(long, default_value = "0")]
    pub gas_price: String,

    #[arg(long, default_value = ZERO_ADDRESS)]
    pub gas_token: String,

    #[arg(long, default_value = ZERO_ADDRESS)]
    pub refund_receiver: String,

    /// Safe contract version
    #[arg(long, default_value = DEFAULT_SAFE_VERSION)]
    pub version: String,

    /// Collected owner signatures, for the execTransaction call data
    #[arg(long)]
    pub signatures: Option<String>,

    /// Do not query the signature directory
    #[arg(long)]
    pub offline: bool,
}

#[derive(Args, Clone)]
pub struct MessageArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Message text
    #[arg(long, conflicts_with = "message_file", required_unless_present = "message_file")]
    pub message: Option<String>,

    /// File holding the message; trailing newlines are ignored
    #[arg(long)]
    pub message_file: Option<PathBuf>,

    /// Safe contract version
    #[arg(long, default_value = DEFAULT_SAFE_VERSION)]
    pub version: String,
}

#[derive(Args, Clone)]
pub struct DecodeArgs {
    /// Call data to decode
    #[arg(value_name = "DATA")]
    pub data: String,

    /// Contract the data is sent to
    #[arg(long, default_value = ZERO_ADDRESS)]
    pub to: String,

    #[arg(long, default_value_t = 1)]
    pub chain_id: u64,

    /// Do not query the signature directory
    #[arg(long)]
    pub offline: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_tx_defaults() {
        let cli = Cli::try_parse_from([
            "safe-hashes",
            "tx",
            "--safe",
            "eth:0x1234567890123456789012345678901234567890",
            "--nonce",
            "3",
        ])
        .unwrap();

        let Commands::Tx(args) = cli.command else {
            panic!("expected tx command");
        };
        assert_eq!(args.version, "1.3.0");
        assert_eq!(args.data, "0x");
        assert_eq!(args.operation, "0");
        assert_eq!(args.to, ZERO_ADDRESS);
        assert!(!cli.json);
    }

    #[test]
    fn test_network_conflicts_with_chain_id() {
        let result = Cli::try_parse_from([
            "safe-hashes",
            "tx",
            "--safe",
            ZERO_ADDRESS,
            "--nonce",
            "0",
            "--network",
            "ethereum",
            "--chain-id",
            "1",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_message_requires_a_source() {
        let result = Cli::try_parse_from(["safe-hashes", "message", "--safe", ZERO_ADDRESS]);
        assert!(result.is_err());

        let cli = Cli::try_parse_from([
            "safe-hashes",
            "--json",
            "message",
            "--safe",
            ZERO_ADDRESS,
            "--chain-id",
            "1",
            "--message",
            "hello",
        ])
        .unwrap();
        assert!(cli.json);
    }
}
