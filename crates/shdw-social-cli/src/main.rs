use anyhow::Result;
use clap::Parser;

mod args;
mod cmd;
mod logging;
mod output;
mod solana;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = args::Cli::parse();
    output::init(cli.json);
    logging::init(&cli.log_level, cli.json)?;

    cmd::dispatch(cli).await
}
