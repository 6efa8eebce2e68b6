use alloy::primitives::Address;
use safe_hashes::{DecodedCall, ExecTransactionCall, HashResult, MessageHashResult, Network};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TxOutput {
    pub safe: Address,
    pub chain_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<&'static str>,
    pub nonce: String,
    pub version: String,
    pub hashes: HashResult,
    pub decoded: DecodedCall,
    pub exec_transaction: ExecTransactionCall,
}

impl TxOutput {
    pub fn print(&self, json: bool) {
        if json {
            println!("{}", serde_json::to_string_pretty(self).unwrap());
        } else {
            print_target(self.safe, self.chain_id, self.network, &self.version);
            println!("Nonce: {}", self.nonce);
            println!();
            print_decoded(&self.decoded);
            println!();
            println!("Hashes:");
            println!("  Domain Hash: {}", self.hashes.domain_hash);
            println!("  Message Hash: {}", self.hashes.message_hash);
            println!("  Safe Transaction Hash: {}", self.hashes.safe_tx_hash);
            println!();
            println!("Encoded Message: {}", self.hashes.encoded_message);
            println!();
            match &self.exec_transaction.error {
                None => println!("execTransaction Call Data: {}", self.exec_transaction.encoded),
                Some(err) => println!("execTransaction Call Data: unavailable ({})", err),
            }
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageOutput {
    pub safe: Address,
    pub chain_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<&'static str>,
    pub version: String,
    pub message: String,
    pub hashes: MessageHashResult,
}

impl MessageOutput {
    pub fn print(&self, json: bool) {
        if json {
            println!("{}", serde_json::to_string_pretty(self).unwrap());
        } else {
            print_target(self.safe, self.chain_id, self.network, &self.version);
            println!();
            println!("Message:");
            for line in self.message.lines() {
                println!("  {}", line);
            }
            println!();
            println!("Hashes:");
            println!("  Raw Message Hash: {}", self.hashes.raw_message_hash);
            println!("  Domain Hash: {}", self.hashes.domain_hash);
            println!("  Message Hash: {}", self.hashes.message_hash);
            println!("  Safe Message Hash: {}", self.hashes.safe_message_hash);
        }
    }
}

#[derive(Serialize)]
pub struct DecodeOutput {
    pub to: Address,
    #[serde(flatten)]
    pub decoded: DecodedCall,
}

impl DecodeOutput {
    pub fn print(&self, json: bool) {
        if json {
            println!("{}", serde_json::to_string_pretty(self).unwrap());
        } else {
            println!("To: {}", self.to);
            print_decoded(&self.decoded);
        }
    }
}

pub fn print_networks(networks: &[Network], json: bool) {
    if json {
        println!("{}", serde_json::to_string_pretty(networks).unwrap());
    } else {
        println!("{:<16} {:>12}  {:<8} Transaction Service", "Network", "Chain ID", "Prefix");
        for network in networks {
            println!(
                "{:<16} {:>12}  {:<8} {}",
                network.name, network.chain_id, network.short_name, network.tx_service_url
            );
        }
    }
}

fn print_target(safe: Address, chain_id: u64, network: Option<&str>, version: &str) {
    println!("Safe: {}", safe);
    match network {
        Some(name) => println!("Network: {} (Chain ID: {})", name, chain_id),
        None => println!("Chain ID: {}", chain_id),
    }
    println!("Safe Version: {}", version);
}

fn print_decoded(decoded: &DecodedCall) {
    println!("Method: {}", decoded.method);
    if let Some(signature) = &decoded.signature {
        println!("  Signature: {}", signature);
    }
    if !decoded.parameters.is_empty() {
        println!("  Parameters:");
        for param in &decoded.parameters {
            println!("    {} ({}): {}", param.name, param.ty, param.value);
        }
    }
}
