use std::fs;

use color_eyre::eyre::{eyre, Result, WrapErr};
use safe_hashes::calculate_message_hashes;

use crate::cli::MessageArgs;
use crate::commands::resolve_target;
use crate::output::MessageOutput;

pub fn run(args: MessageArgs, json: bool) -> Result<()> {
    let target = resolve_target(&args.target)?;
    let message = read_message(&args)?;

    let hashes = calculate_message_hashes(
        &target.chain_id.to_string(),
        &target.safe.to_string(),
        &message,
        &args.version,
    )?;

    let output = MessageOutput {
        safe: target.safe,
        chain_id: target.chain_id,
        network: target.network.map(|n| n.name),
        version: args.version,
        message,
        hashes,
    };

    output.print(json);

    Ok(())
}

fn read_message(args: &MessageArgs) -> Result<String> {
    match (&args.message, &args.message_file) {
        (Some(message), _) => Ok(message.clone()),
        (None, Some(path)) => {
            let contents = fs::read_to_string(path)
                .wrap_err_with(|| format!("failed to read message file {}", path.display()))?;
            Ok(contents.trim_end_matches(['\n', '\r']).to_string())
        }
        (None, None) => Err(eyre!("pass --message or --message-file")),
    }
}
