// CLI-specific lint overrides
#![allow(clippy::print_stdout, reason = "CLI tools print to stdout")]
#![allow(clippy::unwrap_used, reason = "CLI can unwrap for user-facing errors")]

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use color_eyre::eyre::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    setup_tracing(&cli.log_level);

    match cli.command {
        Commands::Tx(args) => commands::tx::run(args, cli.json).await,
        Commands::Message(args) => commands::message::run(args, cli.json),
        Commands::Decode(args) => commands::decode::run(args, cli.json).await,
        Commands::Networks => commands::networks::run(cli.json),
    }
}

/// Logs go to stderr so `--json` output stays parseable
fn setup_tracing(log_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
