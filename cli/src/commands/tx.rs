use color_eyre::eyre::Result;
use safe_hashes::{calculate_hashes, encode_exec_transaction, SafeTxInput};
use tracing::info;

use crate::cli::TxArgs;
use crate::commands::decode::decode_call;
use crate::commands::resolve_target;
use crate::output::TxOutput;

pub async fn run(args: TxArgs, json: bool) -> Result<()> {
    let target = resolve_target(&args.target)?;
    let input = tx_input(&args);

    // Hashes are strict; a malformed field aborts before anything is shown
    let hashes = calculate_hashes(&target.chain_id.to_string(), &target.safe.to_string(), &input)?;
    info!(safe_tx_hash = %hashes.safe_tx_hash, "computed hashes");

    let params = input.to_params()?;
    let decoded = decode_call(params.to, &params.data, target.chain_id, args.offline).await;
    let exec_transaction = encode_exec_transaction(&input, args.signatures.as_deref());

    let output = TxOutput {
        safe: target.safe,
        chain_id: target.chain_id,
        network: target.network.map(|n| n.name),
        nonce: input.nonce,
        version: input.version,
        hashes,
        decoded,
        exec_transaction,
    };

    output.print(json);

    Ok(())
}

fn tx_input(args: &TxArgs) -> SafeTxInput {
    SafeTxInput {
        to: args.to.clone(),
        value: args.value.clone(),
        data: args.data.clone(),
        operation: args.operation.clone(),
        safe_tx_gas: args.safe_tx_gas.clone(),
        base_gas: args.base_gas.clone(),
        gas_price: args.gas_price.clone(),
        gas_token: args.gas_token.clone(),
        refund_receiver: args.refund_receiver.clone(),
        nonce: args.nonce.clone(),
        version: args.version.clone(),
    }
}
